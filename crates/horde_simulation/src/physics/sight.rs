//! Headless line-of-sight: raycast по сферам (препятствия + цель)
//!
//! Замена physics raycast движка для headless симуляции и тестов.

use bevy::prelude::*;

use crate::ai::{ColliderTag, LineOfSight, RayHit};

/// Сферический коллайдер
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sphere {
    pub center: Vec3,
    pub radius: f32,
    pub tag: ColliderTag,
}

impl Sphere {
    pub fn new(center: Vec3, radius: f32, tag: ColliderTag) -> Self {
        Self { center, radius, tag }
    }

    /// Дистанция до пересечения луча (direction нормализован), None если мимо
    pub fn ray_distance(&self, origin: Vec3, direction: Vec3) -> Option<f32> {
        let offset = origin - self.center;
        let b = offset.dot(direction);
        let c = offset.length_squared() - self.radius * self.radius;
        let discriminant = b * b - c;
        if discriminant < 0.0 {
            return None;
        }

        let root = discriminant.sqrt();
        let near = -b - root;
        if near >= 0.0 {
            return Some(near);
        }
        // Origin внутри сферы — hit на выходе
        let far = -b + root;
        (far >= 0.0).then_some(far)
    }
}

/// Resource: статичные окклюдеры сцены + радиус коллайдера цели
#[derive(Resource, Debug, Clone)]
pub struct SightScene {
    pub occluders: Vec<Sphere>,
    pub target_radius: f32,
}

impl Default for SightScene {
    fn default() -> Self {
        Self {
            occluders: Vec::new(),
            target_radius: 0.5,
        }
    }
}

impl SightScene {
    pub fn add_obstacle(&mut self, center: Vec3, radius: f32) {
        self.occluders.push(Sphere::new(center, radius, ColliderTag::Obstacle));
    }

    /// LOS вид на текущий тик (цель двигается — её сфера собирается заново)
    pub fn view(&self, target_position: Vec3) -> SphereSight<'_> {
        SphereSight {
            occluders: &self.occluders,
            target: Sphere::new(target_position, self.target_radius, ColliderTag::Target),
        }
    }
}

pub struct SphereSight<'a> {
    occluders: &'a [Sphere],
    target: Sphere,
}

impl LineOfSight for SphereSight<'_> {
    fn raycast_first_hit(&self, origin: Vec3, direction: Vec3, max_distance: f32) -> Option<RayHit> {
        self.occluders
            .iter()
            .chain(std::iter::once(&self.target))
            .filter_map(|sphere| {
                sphere
                    .ray_distance(origin, direction)
                    .filter(|distance| *distance <= max_distance)
                    .map(|distance| (distance, sphere.tag))
            })
            .min_by(|a, b| a.0.total_cmp(&b.0))
            .map(|(distance, tag)| RayHit {
                point: origin + direction * distance,
                tag,
            })
    }
}
