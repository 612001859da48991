//! Perception & navigation контракты (внешние коллабораторы AI)
//!
//! ECS/core не владеет pathfinding и физикой — только спрашивает:
//! - NavigationAgent: позиция, destination, скорость, разворот
//! - NavMeshQuery: ближайшая навигируемая точка (валидация patrol точек)
//! - LineOfSight: первый hit луча (проверка видимости цели)

use bevy::prelude::*;

/// Тег коллайдера, в который попал луч / который коснулся зомби
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColliderTag {
    /// Отслеживаемая цель (игрок)
    Target,
    /// Снаряд (пуля) — единственный источник урона
    Projectile,
    /// Стены, ящики, любая статика
    Obstacle,
    /// Другой агент
    Agent,
}

/// Результат raycast (первое попадание)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RayHit {
    pub point: Vec3,
    pub tag: ColliderTag,
}

/// Navigation agent (NavMesh агент движка)
///
/// `set_destination` вызывается каждый тик — реализация обязана быть идемпотентной.
pub trait NavigationAgent {
    fn position(&self) -> Vec3;
    fn set_destination(&mut self, point: Vec3);
    fn set_speed(&mut self, speed: f32);
    /// Мгновенный разворот к точке
    fn face_towards(&mut self, point: Vec3);
}

/// Запрос к navigation mesh
pub trait NavMeshQuery {
    /// Ближайшая навигируемая точка в радиусе `max_radius`, None если нет
    fn sample_nearest_point(&self, point: Vec3, max_radius: f32) -> Option<Vec3>;
}

/// Line-of-sight запрос (physics raycast)
pub trait LineOfSight {
    /// `direction` нормализован
    fn raycast_first_hit(&self, origin: Vec3, direction: Vec3, max_distance: f32) -> Option<RayHit>;
}

/// Окружение агента на текущий тик: позиция цели + world queries
pub struct Surroundings<'a> {
    pub target_position: Vec3,
    pub nav_mesh: &'a dyn NavMeshQuery,
    pub sight: &'a dyn LineOfSight,
}
