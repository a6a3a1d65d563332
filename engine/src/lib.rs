// Distributed under the GNU Affero General Public License v3.0 or later.
// See https://www.gnu.org/licenses/agpl-3.0.html for details.

mod acceleration_component;
mod bounce_component;
mod collider_component;
mod collision_resource;
pub mod gjk;
mod obb;
pub mod physics;
mod play_volume;
mod simplex;
mod time_resource;
mod transform_component;
mod velocity_component;

use bevy_ecs::prelude::*;
use bevy_ecs::schedule::{IntoScheduleConfigs, Schedule};
use std::thread::sleep;
use std::time::{Duration, Instant};

pub use crate::acceleration_component::AccelerationComponent;
pub use crate::bounce_component::BounceComponent;
pub use crate::collider_component::ColliderComponent;
pub use crate::collision_resource::CollisionResource;
pub use crate::obb::{Obb, cube_corners};
pub use crate::play_volume::PlayVolume;
pub use crate::simplex::{Simplex, SimplexStep};
pub use crate::time_resource::TimeResource;
pub use crate::transform_component::TransformComponent;
pub use crate::velocity_component::VelocityComponent;

use crate::physics::bounds_system::BoundsSystem;
use crate::physics::collision_system::CollisionSystem;
use crate::physics::movement_system::MovementSystem;

/// env_logger with an `info` default; `RUST_LOG` overrides.
pub fn init_logging() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
}

/// Owns the world and the fixed-timestep tick. Wall-clock frame time goes
/// into [`TimeResource`]'s accumulator and the tick schedule runs once per
/// whole fixed step banked, so simulation state is a pure function of total
/// simulated time regardless of how frames slice it.
pub struct Engine {
    pub world: World,
    pub schedule: Schedule,
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine {
    pub fn new() -> Self {
        Self::with_time(TimeResource::default())
    }

    pub fn with_time(time: TimeResource) -> Self {
        let mut world = World::new();
        world.insert_resource(time);
        world.insert_resource(PlayVolume::default());
        world.insert_resource(CollisionResource::default());

        // The tick order is load-bearing: containment and spin first, then
        // the collider refresh so detection sees this tick's pose, response
        // before integration so a flip takes effect the same tick.
        let mut schedule = Schedule::default();
        schedule.add_systems(
            (
                BoundsSystem::update,
                MovementSystem::advance_orientation,
                CollisionSystem::refresh_world_obbs,
                CollisionSystem::detect,
                CollisionSystem::respond,
                MovementSystem::integrate_motion,
            )
                .chain(),
        );

        Self { world, schedule }
    }

    /// Banks one frame's duration and runs every fixed tick that fits.
    /// Returns the number of ticks consumed.
    pub fn advance(&mut self, frame_dt: f32) -> u32 {
        self.world.resource_mut::<TimeResource>().begin_frame(frame_dt);

        let mut ticks = 0;
        while self.world.resource_mut::<TimeResource>().try_consume_tick() {
            self.schedule.run(&mut self.world);
            ticks += 1;
        }
        ticks
    }

    /// Wall-clock loop until `sim_seconds` of simulated time have elapsed,
    /// sleeping the remainder of each frame toward ~60 FPS.
    pub fn run_for(&mut self, sim_seconds: f64) {
        let target_frame = Duration::from_millis(16);
        let mut last_frame = Instant::now();

        while self.world.resource::<TimeResource>().total_time() < sim_seconds {
            let frame_start = Instant::now();
            let frame_dt = frame_start.duration_since(last_frame).as_secs_f32();
            last_frame = frame_start;

            self.advance(frame_dt);

            let frame_time = frame_start.elapsed();
            if frame_time < target_frame {
                sleep(target_frame - frame_time);
            }
        }
    }
}
