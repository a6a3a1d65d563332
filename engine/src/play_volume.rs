use bevy_ecs::resource::Resource;
use glam::Vec3;

/// Axis-aligned half extents of the box bodies are kept inside. Positional
/// containment policy, separate from the overlap test.
#[derive(Resource, Debug, Clone, Copy)]
pub struct PlayVolume {
    pub half_extents: Vec3,
}

impl Default for PlayVolume {
    fn default() -> Self {
        Self {
            half_extents: Vec3::new(1.35, 0.8, 1.0),
        }
    }
}

impl PlayVolume {
    pub fn new(half_extents: Vec3) -> Self {
        Self { half_extents }
    }
}
