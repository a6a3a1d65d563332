use bevy_ecs::component::Component;
use glam::{Mat4, Vec3};

use crate::obb::{Obb, cube_corners};

/// A body's convex collision shape: the model-space corner set plus the
/// world-space box refreshed from the transform every physics tick.
#[derive(Component, Debug, Clone, Copy)]
pub struct ColliderComponent {
    pub local_corners: [Vec3; 8],
    pub world: Obb,
}

impl ColliderComponent {
    pub fn new(local_corners: [Vec3; 8]) -> Self {
        Self {
            world: Obb::from_corners(local_corners),
            local_corners,
        }
    }

    pub fn cube(half_extent: f32) -> Self {
        Self::new(cube_corners(half_extent))
    }

    pub fn refresh_world(&mut self, transform: Mat4) {
        self.world = Obb::from_local_corners(&self.local_corners, transform);
    }
}
