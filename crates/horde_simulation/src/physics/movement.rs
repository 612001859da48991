//! Headless kinematic движение: NavAgent.destination → Transform
//!
//! Замена NavMesh агента движка: прямая линия к destination со скоростью NavAgent.speed.
//! Детерминизм: fixed timestep, без физики.

use bevy::prelude::*;

use crate::components::{NavAgent, Zombie};

/// Система: двигаем активных зомби к их destination
pub fn follow_nav_destinations(
    mut agents: Query<(&Zombie, &mut Transform, &NavAgent)>,
    time: Res<Time<Fixed>>,
) {
    let delta = time.delta_secs();

    for (zombie, mut transform, nav_agent) in agents.iter_mut() {
        if !zombie.is_active() {
            continue;
        }
        let Some(destination) = nav_agent.destination else {
            continue;
        };

        transform.translation = step_towards(transform.translation, destination, nav_agent.speed * delta);
    }
}

/// Шаг к точке не дальше `max_step` (без overshoot)
pub fn step_towards(from: Vec3, to: Vec3, max_step: f32) -> Vec3 {
    let offset = to - from;
    let distance = offset.length();
    if distance <= max_step || distance <= f32::EPSILON {
        return to;
    }
    from + offset / distance * max_step
}
