//! Цель зомби: маркер TrackedTarget + resolve при setup

use bevy::prelude::*;

use crate::error::SetupError;

/// Маркер единственной цели (игрок), которую преследуют все зомби
#[derive(Component, Debug, Clone, Copy, Default)]
pub struct TrackedTarget;

/// Resolved цель (ищется один раз при setup, не каждый тик)
#[derive(Resource, Debug, Clone, Copy, PartialEq, Eq)]
pub struct TargetActor {
    pub entity: Entity,
}

/// Находит единственную `TrackedTarget` entity и вставляет `TargetActor`
///
/// Без цели AI не может оценивать perception — это ошибка конфигурации сцены.
pub fn resolve_target(world: &mut World) -> Result<Entity, SetupError> {
    let mut query = world.query_filtered::<Entity, With<TrackedTarget>>();
    let targets: Vec<Entity> = query.iter(world).collect();

    match targets.as_slice() {
        [entity] => {
            world.insert_resource(TargetActor { entity: *entity });
            crate::log_info(&format!("Setup: tracked target resolved → {:?}", entity));
            Ok(*entity)
        }
        [] => {
            crate::log_error("Setup: no entity with TrackedTarget");
            Err(SetupError::TargetNotFound)
        }
        _ => {
            crate::log_error(&format!("Setup: {} entities with TrackedTarget", targets.len()));
            Err(SetupError::AmbiguousTarget { count: targets.len() })
        }
    }
}
