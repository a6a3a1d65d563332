use bevy_ecs::resource::Resource;

use crate::gjk;

/// Per-tick collision state shared between the detect and respond steps.
#[derive(Resource, Debug, Clone, Copy)]
pub struct CollisionResource {
    /// Verdict of this tick's overlap query.
    pub overlapping: bool,
    /// Anti-tunneling debounce: set when a bounce has been applied and the
    /// bodies have not yet separated, so the recomputed post-response pose
    /// cannot trigger a second flip and oscillate.
    pub response_suppressed: bool,
    /// Bounces applied since startup.
    pub bounce_count: u64,
    /// Iteration budget handed to each overlap query.
    pub max_gjk_iterations: usize,
}

impl Default for CollisionResource {
    fn default() -> Self {
        Self {
            overlapping: false,
            response_suppressed: false,
            bounce_count: 0,
            max_gjk_iterations: gjk::DEFAULT_MAX_ITERATIONS,
        }
    }
}
