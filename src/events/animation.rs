//! Animation request events and their observers.
//!
//! Game code asks an entity's
//! [`AnimationController`](crate::components::animationcontroller::AnimationController)
//! to switch animation or to start/stop by triggering one of these events.
//! The observers apply the request and log failures instead of propagating
//! them, so a missing animation never interrupts the frame.
//!
//! # Example
//!
//! ```ignore
//! world.add_observer(observe_set_animation::<Walk>);
//! world.add_observer(observe_set_animation_state::<Walk>);
//! world.trigger(SetAnimationEvent { entity, animation: Walk::Up });
//! world.trigger(SetAnimationStateEvent { entity, state: AnimationState::Animating });
//! ```

use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;
use log::{debug, warn};

use crate::atlas::animationtype::AnimationType;
use crate::components::animationcontroller::{AnimationController, AnimationState};

/// Request that `entity` plays `animation`.
#[derive(Event, Debug, Clone, PartialEq, Eq)]
pub struct SetAnimationEvent<A: AnimationType> {
    pub entity: Entity,
    pub animation: A,
}

/// Request that `entity` starts or stops animating.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct SetAnimationStateEvent {
    pub entity: Entity,
    pub state: AnimationState,
}

/// Observer applying [`SetAnimationEvent`] to the target controller.
pub fn observe_set_animation<A: AnimationType>(
    trigger: On<SetAnimationEvent<A>>,
    mut controllers: Query<&mut AnimationController<A>>,
) {
    let event = trigger.event();
    let Ok(mut controller) = controllers.get_mut(event.entity) else {
        warn!(
            "SetAnimationEvent: entity {:?} has no animation controller",
            event.entity
        );
        return;
    };
    debug!("SetAnimationEvent {:?} -> {:?}", event.entity, event.animation);
    if let Err(e) = controller.set_current_animation(event.animation.clone()) {
        warn!("[{}] {:?}: {}", e.category(), event.entity, e);
    }
}

/// Observer applying [`SetAnimationStateEvent`] to the target controller.
pub fn observe_set_animation_state<A: AnimationType>(
    trigger: On<SetAnimationStateEvent>,
    mut controllers: Query<&mut AnimationController<A>>,
) {
    let event = trigger.event();
    let Ok(mut controller) = controllers.get_mut(event.entity) else {
        warn!(
            "SetAnimationStateEvent: entity {:?} has no animation controller",
            event.entity
        );
        return;
    };
    debug!("SetAnimationStateEvent {:?} -> {:?}", event.entity, event.state);
    if let Err(e) = controller.set_state(event.state) {
        warn!("[{}] {:?}: {}", e.category(), event.entity, e);
    }
}
