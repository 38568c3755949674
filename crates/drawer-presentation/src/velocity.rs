//! Release velocity estimation for vertical drags.
//!
//! Uses the impulse strategy: the drag is treated as a unit mass receiving
//! kicks between consecutive samples, and the release velocity is the one
//! matching the accumulated kinetic energy. Compared with a plain
//! first-to-last slope this favours the most recent motion without being
//! thrown off by a single noisy sample.

/// Samples retained per drag.
const HISTORY_SIZE: usize = 20;

/// Samples older than this, relative to the newest, are ignored.
const HORIZON_MS: i64 = 100;

/// A gap between consecutive samples longer than this means the pointer
/// paused; motion before the pause does not count toward the release.
pub const ASSUME_STOPPED_MS: i64 = 40;

/// Fastest release speed, in logical pixels per second, passed on to the
/// transition predictor.
pub const MAX_RELEASE_SPEED: f32 = 8_000.0;

#[derive(Debug, Clone, Copy, Default)]
struct PositionSample {
    time_ms: i64,
    y: f32,
}

/// Fixed ring of the most recent drawer positions.
#[derive(Debug, Clone)]
pub struct VelocityTracker {
    ring: [PositionSample; HISTORY_SIZE],
    /// Slot the next sample is written to.
    head: usize,
    len: usize,
}

impl Default for VelocityTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl VelocityTracker {
    pub fn new() -> Self {
        Self {
            ring: [PositionSample::default(); HISTORY_SIZE],
            head: 0,
            len: 0,
        }
    }

    /// Records the drawer position `y` observed at `time_ms`, overwriting the
    /// oldest sample once the ring is full.
    pub fn add_sample(&mut self, time_ms: i64, y: f32) {
        self.ring[self.head] = PositionSample { time_ms, y };
        self.head = (self.head + 1) % HISTORY_SIZE;
        self.len = (self.len + 1).min(HISTORY_SIZE);
    }

    pub fn reset(&mut self) {
        self.head = 0;
        self.len = 0;
    }

    /// `age`-th most recent sample; `0` is the newest.
    fn recent(&self, age: usize) -> PositionSample {
        self.ring[(self.head + HISTORY_SIZE - 1 - age) % HISTORY_SIZE]
    }

    /// Vertical velocity in pixels per second; `0` with fewer than two
    /// usable samples.
    pub fn velocity(&self) -> f32 {
        if self.len == 0 {
            return 0.0;
        }
        let newest = self.recent(0);

        // Count samples back from the newest until the horizon or a pause.
        let mut usable = 1;
        while usable < self.len {
            let earlier = self.recent(usable);
            let later = self.recent(usable - 1);
            if newest.time_ms - earlier.time_ms > HORIZON_MS
                || later.time_ms - earlier.time_ms > ASSUME_STOPPED_MS
            {
                break;
            }
            usable += 1;
        }
        if usable < 2 {
            return 0.0;
        }

        // Oldest to newest, so the first kick is halved.
        let mut work = 0.0f32;
        for age in (1..usable).rev() {
            let (earlier, later) = (self.recent(age), self.recent(age - 1));
            let elapsed = (later.time_ms - earlier.time_ms) as f32;
            if elapsed == 0.0 {
                continue;
            }
            let segment_velocity = (later.y - earlier.y) / elapsed;
            let previous_velocity = energy_to_velocity(work);
            work += (segment_velocity - previous_velocity) * segment_velocity.abs();
            if age == usable - 1 {
                work *= 0.5;
            }
        }

        energy_to_velocity(work) * 1000.0
    }

    /// [`velocity`](Self::velocity) limited to `±max_speed`.
    pub fn velocity_capped(&self, max_speed: f32) -> f32 {
        if !max_speed.is_finite() || max_speed <= 0.0 {
            return 0.0;
        }
        let velocity = self.velocity();
        if velocity.is_nan() {
            return 0.0;
        }
        velocity.clamp(-max_speed, max_speed)
    }
}

/// Velocity of a unit mass carrying `energy` (`E = v² / 2`), keeping its sign.
fn energy_to_velocity(energy: f32) -> f32 {
    energy.signum() * (2.0 * energy.abs()).sqrt()
}
