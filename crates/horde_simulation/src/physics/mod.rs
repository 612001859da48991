//! Headless world: NavMesh, line-of-sight, kinematic движение
//!
//! В игре эти роли у движка (NavMesh агент, physics raycast).
//! Здесь — простые детерминированные заменители для headless симуляции и тестов.

use bevy::prelude::*;

pub mod movement;
pub mod navmesh;
pub mod sight;

pub use movement::*;
pub use navmesh::*;
pub use sight::*;

/// Headless world plugin: двигает NavAgent'ов после AI тика
pub struct HeadlessWorldPlugin;

impl Plugin for HeadlessWorldPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<NavMeshService>()
            .init_resource::<SightScene>()
            .add_systems(
                FixedUpdate,
                movement::follow_nav_destinations.after(crate::ai::tick_zombies),
            );
    }
}
