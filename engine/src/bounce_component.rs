use bevy_ecs::component::Component;

/// Marks the body that receives the fixed-axis collision response. The
/// overlap test never recovers a contact normal, so the response assumes the
/// collision axis is x and only one body reacts.
#[derive(Default, Component, Debug, Clone, Copy)]
pub struct BounceComponent;
