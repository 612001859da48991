//! Movement компоненты: NavMesh агент + адаптер NavigationAgent
//!
//! Архитектура:
//! - AI пишет NavAgent (destination + speed) — high-level intent
//! - Движок (или headless physics) читает NavAgent и двигает Transform

use bevy::prelude::*;

use crate::ai::NavigationAgent;

/// Состояние NavMesh агента, которое читает движок
#[derive(Component, Debug, Clone, PartialEq)]
pub struct NavAgent {
    /// Текущая цель пути (None — стоим)
    pub destination: Option<Vec3>,
    /// Скорость (м/с), задаётся TypeProfile
    pub speed: f32,
}

impl Default for NavAgent {
    fn default() -> Self {
        Self {
            destination: None,
            speed: 2.0,
        }
    }
}

impl NavAgent {
    /// Отменить путь
    pub fn stop(&mut self) {
        self.destination = None;
    }
}

/// NavigationAgent поверх ECS компонентов одного entity
pub struct NavigationHandle<'a> {
    transform: &'a mut Transform,
    agent: &'a mut NavAgent,
}

impl<'a> NavigationHandle<'a> {
    pub fn new(transform: &'a mut Transform, agent: &'a mut NavAgent) -> Self {
        Self { transform, agent }
    }
}

impl NavigationAgent for NavigationHandle<'_> {
    fn position(&self) -> Vec3 {
        self.transform.translation
    }

    fn set_destination(&mut self, point: Vec3) {
        // Идемпотентно: тот же destination не перезаписываем
        if self.agent.destination != Some(point) {
            self.agent.destination = Some(point);
        }
    }

    fn set_speed(&mut self, speed: f32) {
        self.agent.speed = speed;
    }

    fn face_towards(&mut self, point: Vec3) {
        if point.distance_squared(self.transform.translation) > f32::EPSILON {
            self.transform.look_at(point, Vec3::Y);
        }
    }
}
