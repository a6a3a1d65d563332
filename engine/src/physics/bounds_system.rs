use bevy_ecs::prelude::*;

use crate::play_volume::PlayVolume;
use crate::transform_component::TransformComponent;
use crate::velocity_component::VelocityComponent;

pub struct BoundsSystem {}

impl BoundsSystem {
    /// Keeps bodies inside the play volume: any axis whose position exceeds
    /// its bound gets that velocity component negated. Position is left
    /// alone; the reversed velocity walks the body back in on later ticks.
    pub fn update(
        mut query: Query<(&TransformComponent, &mut VelocityComponent)>,
        volume: Res<PlayVolume>,
    ) {
        for (transform, mut velocity) in query.iter_mut() {
            let bounds = volume.half_extents;

            if transform.position.x.abs() > bounds.x {
                velocity.translational.x = -velocity.translational.x;
                log::trace!("bounds: x containment flip at {}", transform.position.x);
            }
            if transform.position.y.abs() > bounds.y {
                velocity.translational.y = -velocity.translational.y;
                log::trace!("bounds: y containment flip at {}", transform.position.y);
            }
            if transform.position.z.abs() > bounds.z {
                velocity.translational.z = -velocity.translational.z;
                log::trace!("bounds: z containment flip at {}", transform.position.z);
            }
        }
    }
}
