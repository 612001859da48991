//! Mock коллабораторы для unit тестов AI

use std::cell::Cell;

use bevy::prelude::*;

use crate::ai::{ColliderTag, LineOfSight, NavMeshQuery, NavigationAgent, RayHit};

/// NavigationAgent который просто записывает команды
#[derive(Debug, Default, Clone)]
pub struct MockNav {
    pub position: Vec3,
    pub destination: Option<Vec3>,
    pub speed: f32,
    pub facing: Option<Vec3>,
    pub destination_calls: usize,
}

impl MockNav {
    pub fn at(position: Vec3) -> Self {
        Self {
            position,
            ..Default::default()
        }
    }
}

impl NavigationAgent for MockNav {
    fn position(&self) -> Vec3 {
        self.position
    }

    fn set_destination(&mut self, point: Vec3) {
        self.destination = Some(point);
        self.destination_calls += 1;
    }

    fn set_speed(&mut self, speed: f32) {
        self.speed = speed;
    }

    fn face_towards(&mut self, point: Vec3) {
        self.facing = Some(point);
    }
}

/// NavMesh: весь мир проходим, точка возвращается как есть
pub struct OpenNavMesh;

impl NavMeshQuery for OpenNavMesh {
    fn sample_nearest_point(&self, point: Vec3, _max_radius: f32) -> Option<Vec3> {
        Some(point)
    }
}

/// NavMesh: всегда одна и та же точка (или None), считает вызовы
pub struct FixedNavMesh {
    pub point: Option<Vec3>,
    pub calls: Cell<u32>,
}

impl FixedNavMesh {
    pub fn new(point: Option<Vec3>) -> Self {
        Self {
            point,
            calls: Cell::new(0),
        }
    }
}

impl NavMeshQuery for FixedNavMesh {
    fn sample_nearest_point(&self, _point: Vec3, _max_radius: f32) -> Option<Vec3> {
        self.calls.set(self.calls.get() + 1);
        self.point
    }
}

/// LOS: первый hit всегда с заданным тегом (None — промах), считает лучи
pub struct ScriptedSight {
    pub first_hit: Option<ColliderTag>,
    pub rays: Cell<u32>,
}

impl ScriptedSight {
    pub fn clear() -> Self {
        Self::hitting(Some(ColliderTag::Target))
    }

    pub fn blocked() -> Self {
        Self::hitting(Some(ColliderTag::Obstacle))
    }

    pub fn hitting(first_hit: Option<ColliderTag>) -> Self {
        Self {
            first_hit,
            rays: Cell::new(0),
        }
    }
}

impl LineOfSight for ScriptedSight {
    fn raycast_first_hit(&self, origin: Vec3, direction: Vec3, max_distance: f32) -> Option<RayHit> {
        self.rays.set(self.rays.get() + 1);
        self.first_hit.map(|tag| RayHit {
            point: origin + direction * max_distance.min(1.0),
            tag,
        })
    }
}
