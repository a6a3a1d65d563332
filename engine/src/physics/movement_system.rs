use bevy_ecs::prelude::*;
use glam::{Quat, Vec3};

use crate::acceleration_component::AccelerationComponent;
use crate::time_resource::TimeResource;
use crate::transform_component::TransformComponent;
use crate::velocity_component::VelocityComponent;

pub struct MovementSystem {}

impl MovementSystem {
    /// Composes one fixed step of spin onto each body's rotation. Runs
    /// before the collider refresh so the overlap query sees this tick's
    /// orientation.
    pub fn advance_orientation(
        mut query: Query<(&mut TransformComponent, &VelocityComponent)>,
        time: Res<TimeResource>,
    ) {
        let delta_time = time.fixed_dt();
        for (mut transform, velocity) in query.iter_mut() {
            if velocity.angular.length_squared() > 0.0 {
                transform.rotation =
                    Self::apply_rotation(&transform.rotation, &velocity.angular, delta_time);
            }
        }
    }

    /// Semi-implicit Euler: velocity first, then position from the updated
    /// velocity. Runs last in the tick, after the collision response has had
    /// its say about the velocity.
    pub fn integrate_motion(
        mut query: Query<(
            &mut TransformComponent,
            &mut VelocityComponent,
            Option<&AccelerationComponent>,
        )>,
        time: Res<TimeResource>,
    ) {
        let delta_time = time.fixed_dt();
        for (mut transform, mut velocity, acceleration) in query.iter_mut() {
            if let Some(acceleration) = acceleration {
                velocity.translational += acceleration.linear * delta_time;
            }
            transform.position =
                Self::apply_translation(&transform.position, &velocity.translational, delta_time);
        }
    }

    pub fn apply_rotation(rotation: &Quat, angular_velocity: &Vec3, delta_time: f32) -> Quat {
        let angular_velocity_magnitude = angular_velocity.length();
        if angular_velocity_magnitude == 0.0 {
            return *rotation;
        }

        let axis = *angular_velocity / angular_velocity_magnitude;
        let angle = angular_velocity_magnitude * delta_time;
        let delta_rotation = Quat::from_axis_angle(axis, angle);
        delta_rotation * *rotation
    }

    fn apply_translation(position: &Vec3, translational_velocity: &Vec3, delta_time: f32) -> Vec3 {
        *position + *translational_velocity * delta_time
    }
}
