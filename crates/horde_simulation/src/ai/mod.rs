//! AI decision-making module
//!
//! FSM зомби (Patrol → Chase → Attack) с perception через range + line-of-sight.
//! Core (BehaviorController) не знает про ECS — только про NavigationAgent,
//! NavMeshQuery и LineOfSight. ECS системы — тонкая обвязка вокруг агрегата Zombie.

use bevy::prelude::*;

pub mod components;
pub mod events;
pub mod perception;
pub mod systems;

// Re-export основных типов
pub use components::*;
pub use events::*;
pub use perception::*;
pub use systems::*;

use crate::combat::apply_contact_damage;
use crate::physics::{NavMeshService, SightScene};

/// AI Plugin
///
/// Регистрирует AI системы в FixedUpdate для детерминизма.
/// Порядок выполнения:
/// 1. activate_zombies — pool reuse, reroll archetype
/// 2. apply_contact_damage — урон от снарядов (до health check)
/// 3. tick_zombies — FSM + health check → ZombieAttacked / ZombieDeactivated
///
/// Требует `DeterministicRng` (вставляет SimulationPlugin).
pub struct ZombieAIPlugin;

impl Plugin for ZombieAIPlugin {
    fn build(&self, app: &mut App) {
        app.add_event::<ActivateZombie>()
            .add_event::<CollisionContact>()
            .add_event::<ZombieAttacked>()
            .add_event::<ZombieDeactivated>()
            // Headless world queries по умолчанию; движок может вставить свои заранее
            .init_resource::<NavMeshService>()
            .init_resource::<SightScene>();

        app.add_systems(
            FixedUpdate,
            (activate_zombies, apply_contact_damage, tick_zombies).chain(), // Последовательное выполнение для детерминизма
        );
    }
}
