//! AI события: pool lifecycle, collision контакты, атаки

use bevy::prelude::*;

use crate::ai::ColliderTag;

/// Pool → ECS: активировать зомби (reroll archetype, опционально переставить)
#[derive(Event, Debug, Clone)]
pub struct ActivateZombie {
    pub entity: Entity,
    /// Позиция респавна (None — остаётся где был)
    pub position: Option<Vec3>,
}

/// Physics → ECS: что-то коснулось зомби
///
/// Урон наносит только `ColliderTag::Projectile`, остальные теги игнорируются.
#[derive(Event, Debug, Clone)]
pub struct CollisionContact {
    pub entity: Entity,
    pub source: ColliderTag,
    pub damage: i32,
}

/// ECS → combat: зомби начал swing (cooldown был свободен)
#[derive(Event, Debug, Clone, PartialEq)]
pub struct ZombieAttacked {
    pub attacker: Entity,
    pub target: Entity,
    /// Damage слот профиля на момент атаки
    pub damage: i32,
}

/// ECS → pool: зомби умер, вернуть в пул
#[derive(Event, Debug, Clone, PartialEq)]
pub struct ZombieDeactivated {
    pub entity: Entity,
}
