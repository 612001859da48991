//! NavMesh queries: сервис-ресурс + плоский headless NavMesh

use bevy::prelude::*;

use crate::ai::NavMeshQuery;

/// Resource: NavMesh коллаборатор для AI (движок подменяет своим)
#[derive(Resource)]
pub struct NavMeshService(pub Box<dyn NavMeshQuery + Send + Sync>);

impl NavMeshService {
    pub fn new(query: impl NavMeshQuery + Send + Sync + 'static) -> Self {
        Self(Box::new(query))
    }

    pub fn query(&self) -> &dyn NavMeshQuery {
        self.0.as_ref()
    }
}

impl Default for NavMeshService {
    fn default() -> Self {
        Self::new(FlatNavMesh::default())
    }
}

/// Квадратная проходимая плоскость `[-half_extent, half_extent]²` на высоте `height`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlatNavMesh {
    pub half_extent: f32,
    pub height: f32,
}

impl Default for FlatNavMesh {
    fn default() -> Self {
        Self {
            half_extent: 50.0,
            height: 0.0,
        }
    }
}

impl FlatNavMesh {
    pub fn new(half_extent: f32, height: f32) -> Self {
        Self { half_extent, height }
    }
}

impl NavMeshQuery for FlatNavMesh {
    fn sample_nearest_point(&self, point: Vec3, max_radius: f32) -> Option<Vec3> {
        let nearest = Vec3::new(
            point.x.clamp(-self.half_extent, self.half_extent),
            self.height,
            point.z.clamp(-self.half_extent, self.half_extent),
        );

        (nearest.distance(point) <= max_radius).then_some(nearest)
    }
}
