// Distributed under the GNU Affero General Public License v3.0 or later.
// See https://www.gnu.org/licenses/agpl-3.0.html for details.

use bevy_ecs::resource::Resource;

pub const DEFAULT_FIXED_DT: f32 = 0.012;
pub const DEFAULT_MAX_FRAME_DT: f32 = 0.25;

/// Fixed-timestep timebase: wall-clock frame durations go in, whole physics
/// ticks of `fixed_dt` come out. The accumulator keeps the unspent remainder
/// so the simulation advances by the same amount of simulated time no matter
/// how frames subdivide it.
#[derive(Resource, Debug, Clone, Copy)]
pub struct TimeResource {
    fixed_dt: f32,
    max_frame_dt: f32,
    accumulator: f32,
    total_time: f64,
    frame_count: u64,
    tick_count: u64,
}

impl Default for TimeResource {
    fn default() -> Self {
        Self::new(DEFAULT_FIXED_DT, DEFAULT_MAX_FRAME_DT)
    }
}

impl TimeResource {
    pub fn new(fixed_dt: f32, max_frame_dt: f32) -> Self {
        TimeResource {
            fixed_dt,
            max_frame_dt,
            accumulator: 0.0,
            total_time: 0.0,
            frame_count: 0,
            tick_count: 0,
        }
    }

    pub fn fixed_dt(&self) -> f32 {
        self.fixed_dt
    }

    /// Banks one frame's wall-clock time. Frames longer than `max_frame_dt`
    /// are clamped so a stall never schedules an unbounded catch-up burst.
    pub fn begin_frame(&mut self, frame_dt: f32) {
        let clamped = frame_dt.min(self.max_frame_dt).max(0.0);
        self.accumulator += clamped;
        self.frame_count += 1;
    }

    /// Spends one fixed step from the accumulator if a whole one is banked.
    pub fn try_consume_tick(&mut self) -> bool {
        if self.accumulator < self.fixed_dt {
            return false;
        }
        self.accumulator -= self.fixed_dt;
        self.total_time += self.fixed_dt as f64;
        self.tick_count += 1;
        true
    }

    /// Simulated seconds consumed so far (ticks times the fixed step).
    pub fn total_time(&self) -> f64 {
        self.total_time
    }

    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    pub fn tick_count(&self) -> u64 {
        self.tick_count
    }
}
