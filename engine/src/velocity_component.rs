use bevy_ecs::component::Component;
use glam::Vec3;

#[derive(Default, Component, Debug, Clone, Copy)]
pub struct VelocityComponent {
    pub translational: Vec3,
    /// Axis-scaled angular velocity in radians per second.
    pub angular: Vec3,
}

impl VelocityComponent {
    pub fn translational(translational: Vec3) -> Self {
        Self {
            translational,
            angular: Vec3::ZERO,
        }
    }
}
