// Distributed under the GNU Affero General Public License v3.0 or later.
// See https://www.gnu.org/licenses/agpl-3.0.html for details.

use bevy_ecs::prelude::*;

use crate::bounce_component::BounceComponent;
use crate::collider_component::ColliderComponent;
use crate::collision_resource::CollisionResource;
use crate::gjk;
use crate::transform_component::TransformComponent;
use crate::velocity_component::VelocityComponent;

#[derive(Default)]
pub struct CollisionSystem {}

impl CollisionSystem {
    /// Rebuilds every body's world-space corner set from its current
    /// transform. Runs after the orientation advance so this tick's overlap
    /// query sees this tick's pose.
    pub fn refresh_world_obbs(
        mut query: Query<(&TransformComponent, &mut ColliderComponent)>,
    ) {
        for (transform, mut collider) in query.iter_mut() {
            collider.refresh_world(transform.to_mat4());
        }
    }

    /// The one overlap query per tick, between the bouncing body and its
    /// counterpart. With the pair incomplete there is nothing to test and
    /// the verdict is no overlap.
    pub fn detect(
        rover: Query<&ColliderComponent, With<BounceComponent>>,
        anchor: Query<&ColliderComponent, Without<BounceComponent>>,
        mut collision: ResMut<CollisionResource>,
    ) {
        let (Ok(rover), Ok(anchor)) = (rover.single(), anchor.single()) else {
            collision.overlapping = false;
            return;
        };

        collision.overlapping =
            gjk::intersects_with_params(&rover.world, &anchor.world, collision.max_gjk_iterations);
    }

    /// Fixed-axis bounce with the anti-tunneling debounce: the first tick of
    /// an overlap flips the bouncing body's x velocity, then the flag holds
    /// further flips off until the bodies separate. Without it the next
    /// tick's recomputed pose would re-detect the same overlap and flip the
    /// velocity straight back.
    pub fn respond(
        mut query: Query<&mut VelocityComponent, With<BounceComponent>>,
        mut collision: ResMut<CollisionResource>,
    ) {
        if collision.overlapping {
            if !collision.response_suppressed {
                for mut velocity in query.iter_mut() {
                    velocity.translational.x = -velocity.translational.x;
                    log::debug!(
                        "collision: bounce applied, vx now {}",
                        velocity.translational.x
                    );
                }
                collision.response_suppressed = true;
                collision.bounce_count += 1;
            }
        } else if collision.response_suppressed {
            collision.response_suppressed = false;
        }
    }
}
