//! Playback integration tests.
//!
//! Spawn controllers in a bevy_ecs world, drive them through the request
//! events and tick the playback system to check what ends up on screen.

use std::sync::Arc;

use bevy_ecs::prelude::*;

use spriteanimations::atlas::animationtype::{AnimationType, NamedAnimation};
use spriteanimations::atlas::keypath::Keypath;
use spriteanimations::atlas::library::{AnimationLibrary, AnimationLibraryBuilder};
use spriteanimations::atlas::source::TextureKey;
use spriteanimations::components::animationcontroller::{
    AnimationController, AnimationState, CURRENT_ANIMATION_KEY,
};
use spriteanimations::components::controllerbuilder::AnimationControllerBuilder;
use spriteanimations::events::animation::{
    SetAnimationEvent, SetAnimationStateEvent, observe_set_animation,
    observe_set_animation_state,
};
use spriteanimations::resources::worldtime::WorldTime;
use spriteanimations::systems::animation::sprite_playback;
use spriteanimations::systems::time::update_world_time;

type Controller = AnimationController<NamedAnimation>;

fn anim(name: &str) -> NamedAnimation {
    NamedAnimation::new(name).unwrap()
}

/// `idle` has one frame, `run` three, `jump` two.
fn library() -> Arc<AnimationLibrary<NamedAnimation>> {
    let mut builder = AnimationLibraryBuilder::new();
    for (name, frames) in [("idle", 1), ("run", 3), ("jump", 2)] {
        for frame in 0..frames {
            let keypath = Keypath::new(anim(name), frame);
            builder.set_texture(TextureKey::from(keypath.texture_name()), keypath);
        }
    }
    Arc::new(builder.build().unwrap())
}

/// 4 fps, so one frame every 0.25s.
fn make_world() -> (World, Entity) {
    let mut world = World::new();
    world.insert_resource(WorldTime::default());
    world.add_observer(observe_set_animation::<NamedAnimation>);
    world.add_observer(observe_set_animation_state::<NamedAnimation>);

    let controller = AnimationControllerBuilder::new()
        .with_frames_per_second(4.0)
        .build_with_library(library())
        .unwrap();
    let entity = world.spawn(controller).id();
    (world, entity)
}

fn tick(world: &mut World, dt: f32) {
    update_world_time(world, dt);
    let mut schedule = Schedule::default();
    schedule.add_systems(sprite_playback::<NamedAnimation>);
    schedule.run(world);
}

fn texture(world: &World, entity: Entity) -> Option<String> {
    world
        .get::<Controller>(entity)
        .unwrap()
        .target()
        .texture
        .as_ref()
        .map(|t| t.as_str().to_string())
}

fn controller(world: &World, entity: Entity) -> &Controller {
    world.get::<Controller>(entity).unwrap()
}

fn play(world: &mut World, entity: Entity) {
    world.trigger(SetAnimationStateEvent {
        entity,
        state: AnimationState::Animating,
    });
}

fn stop(world: &mut World, entity: Entity) {
    world.trigger(SetAnimationStateEvent {
        entity,
        state: AnimationState::NotAnimating,
    });
}

#[test]
fn spawned_controller_shows_default_texture() {
    let (world, entity) = make_world();
    assert_eq!(NamedAnimation::default_value(), anim("idle"));
    assert_eq!(texture(&world, entity).as_deref(), Some("idle-000.png"));
    assert_eq!(controller(&world, entity).state(), AnimationState::NotAnimating);
}

#[test]
fn animating_loops_through_frames() {
    let (mut world, entity) = make_world();
    world.trigger(SetAnimationEvent {
        entity,
        animation: anim("run"),
    });
    play(&mut world, entity);
    assert_eq!(texture(&world, entity).as_deref(), Some("run-000.png"));

    tick(&mut world, 0.25);
    assert_eq!(texture(&world, entity).as_deref(), Some("run-001.png"));
    tick(&mut world, 0.25);
    assert_eq!(texture(&world, entity).as_deref(), Some("run-002.png"));
    tick(&mut world, 0.25);
    assert_eq!(texture(&world, entity).as_deref(), Some("run-000.png"));
}

#[test]
fn playing_twice_keeps_a_single_action() {
    let (mut world, entity) = make_world();
    play(&mut world, entity);
    tick(&mut world, 0.25);
    play(&mut world, entity);

    let c = controller(&world, entity);
    assert_eq!(c.state(), AnimationState::Animating);
    assert_eq!(c.target().action_count(), 1);
    assert!(c.target().has_action(CURRENT_ANIMATION_KEY));
}

#[test]
fn switching_while_animating_restarts_with_new_frames() {
    let (mut world, entity) = make_world();
    world.trigger(SetAnimationEvent {
        entity,
        animation: anim("run"),
    });
    play(&mut world, entity);
    tick(&mut world, 0.25);

    world.trigger(SetAnimationEvent {
        entity,
        animation: anim("jump"),
    });
    assert_eq!(texture(&world, entity).as_deref(), Some("jump-000.png"));
    let c = controller(&world, entity);
    assert_eq!(c.target().action_frame_index(CURRENT_ANIMATION_KEY), Some(0));
    assert_eq!(c.target().action_count(), 1);

    tick(&mut world, 0.25);
    assert_eq!(texture(&world, entity).as_deref(), Some("jump-001.png"));
}

#[test]
fn switching_while_stopped_waits_for_play() {
    let (mut world, entity) = make_world();
    world.trigger(SetAnimationEvent {
        entity,
        animation: anim("run"),
    });
    tick(&mut world, 1.0);
    assert_eq!(texture(&world, entity).as_deref(), Some("idle-000.png"));
    assert_eq!(controller(&world, entity).current_animation(), &anim("run"));

    play(&mut world, entity);
    assert_eq!(texture(&world, entity).as_deref(), Some("run-000.png"));
}

#[test]
fn stopping_freezes_on_last_frame() {
    let (mut world, entity) = make_world();
    world.trigger(SetAnimationEvent {
        entity,
        animation: anim("run"),
    });
    play(&mut world, entity);
    tick(&mut world, 0.25);
    stop(&mut world, entity);
    tick(&mut world, 1.0);

    assert_eq!(texture(&world, entity).as_deref(), Some("run-001.png"));
    let c = controller(&world, entity);
    assert_eq!(c.state(), AnimationState::NotAnimating);
    assert!(!c.target().has_action(CURRENT_ANIMATION_KEY));
}

#[test]
fn stopping_can_rest_on_first_frame() {
    let mut world = World::new();
    world.insert_resource(WorldTime::default());
    world.add_observer(observe_set_animation::<NamedAnimation>);
    world.add_observer(observe_set_animation_state::<NamedAnimation>);
    let controller = AnimationControllerBuilder::new()
        .with_frames_per_second(4.0)
        .with_rest_on_first_frame(true)
        .build_with_library(library())
        .unwrap();
    let entity = world.spawn(controller).id();

    world.trigger(SetAnimationEvent {
        entity,
        animation: anim("run"),
    });
    play(&mut world, entity);
    tick(&mut world, 0.5);
    assert_eq!(texture(&world, entity).as_deref(), Some("run-002.png"));
    stop(&mut world, entity);
    assert_eq!(texture(&world, entity).as_deref(), Some("run-000.png"));
}

#[test]
fn missing_animation_keeps_last_frame_visible() {
    let (mut world, entity) = make_world();
    world.trigger(SetAnimationEvent {
        entity,
        animation: anim("run"),
    });
    play(&mut world, entity);
    tick(&mut world, 0.25);

    world.trigger(SetAnimationEvent {
        entity,
        animation: anim("fly"),
    });
    tick(&mut world, 1.0);

    let c = controller(&world, entity);
    assert_eq!(c.current_animation(), &anim("fly"));
    assert_eq!(c.state(), AnimationState::Animating);
    assert_eq!(texture(&world, entity).as_deref(), Some("run-001.png"));
}

#[test]
fn extreme_frame_rate_still_ticks() {
    let mut world = World::new();
    world.insert_resource(WorldTime::default());
    world.add_observer(observe_set_animation::<NamedAnimation>);
    world.add_observer(observe_set_animation_state::<NamedAnimation>);
    let fast = AnimationControllerBuilder::new()
        .with_frames_per_second(1e10)
        .build_with_library(library())
        .unwrap();
    let entity = world.spawn(fast).id();

    world.trigger(SetAnimationEvent {
        entity,
        animation: anim("run"),
    });
    play(&mut world, entity);
    tick(&mut world, 1.0 / 60.0);
    tick(&mut world, 1.0);

    let c = controller(&world, entity);
    assert!(c.target().action_frame_index(CURRENT_ANIMATION_KEY).unwrap() < 3);
    assert!(texture(&world, entity).unwrap().starts_with("run-"));
}

#[test]
fn events_for_entities_without_controller_are_ignored() {
    let (mut world, entity) = make_world();
    let bystander = world.spawn_empty().id();
    play(&mut world, bystander);
    world.trigger(SetAnimationEvent {
        entity: bystander,
        animation: anim("run"),
    });
    assert_eq!(controller(&world, entity).state(), AnimationState::NotAnimating);
}

#[test]
fn controllers_share_one_library() {
    let shared = library();
    let mut world = World::new();
    world.insert_resource(WorldTime::default());
    let builder = AnimationControllerBuilder::new().with_frames_per_second(4.0);
    let a = world
        .spawn(builder.build_with_library(shared.clone()).unwrap())
        .id();
    let b = world
        .spawn(builder.build_with_library(shared.clone()).unwrap())
        .id();

    assert_eq!(Arc::strong_count(&shared), 3);
    assert!(Arc::ptr_eq(controller(&world, a).library(), controller(&world, b).library()));
}
