use bevy_ecs::component::Component;
use glam::Vec3;

/// Optional linear acceleration. Bodies without it carry their velocity
/// unchanged through integration.
#[derive(Default, Component, Debug, Clone, Copy)]
pub struct AccelerationComponent {
    pub linear: Vec3,
}
