/// Hazard spawning policy.
///
/// One spawn is pending at any time.  When it fires the spawner picks a
/// hazard at random, then re-arms itself with a delay that shrinks as the
/// game speeds up.  After game over a pending spawn still fires but does
/// nothing and does not re-arm.

use rand::Rng;
use tracing::debug;

use crate::config::GameConfig;
use crate::entities::{FlyingHazard, GroundHazard, Hazard};
use crate::timers::Timeout;

/// `max(floor, base - speed * factor)`, truncated to whole milliseconds.
/// A non-finite speed falls back to the floor.
pub fn spawn_delay_ms(speed: f64, config: &GameConfig) -> u64 {
    let raw = config.spawn_base_ms - speed * config.spawn_speed_factor;
    raw.max(config.spawn_floor_ms) as u64
}

/// Build a hazard at the right edge of the field moving at `speed` for its
/// whole life.
pub fn random_hazard(rng: &mut impl Rng, speed: f64, config: &GameConfig) -> Hazard {
    let x = config.field_width;
    if rng.gen_bool(0.5) {
        Hazard::Ground(GroundHazard::new(x, speed, config))
    } else {
        Hazard::Flying(FlyingHazard::new(x, speed, config))
    }
}

#[derive(Clone, Debug)]
pub struct Spawner {
    pending: Timeout,
}

impl Spawner {
    /// First spawn comes due at `first_due_ms`.
    pub fn new(first_due_ms: u64) -> Self {
        Spawner {
            pending: Timeout::armed_at(first_due_ms),
        }
    }

    pub fn due_ms(&self) -> Option<u64> {
        self.pending.due_ms()
    }

    /// Fire the pending spawn at `now_ms`.
    ///
    /// Returns the new hazard, or `None` when nothing was pending or the run
    /// has already ended.
    pub fn fire(
        &mut self,
        now_ms: u64,
        running: bool,
        speed: f64,
        config: &GameConfig,
        rng: &mut impl Rng,
    ) -> Option<Hazard> {
        if !self.pending.take() {
            return None;
        }
        if !running {
            debug!(now_ms, "spawn skipped after game over");
            return None;
        }

        let hazard = random_hazard(rng, speed, config);
        let delay = spawn_delay_ms(speed, config);
        self.pending.arm(now_ms, delay);
        debug!(now_ms, kind = ?hazard.kind(), speed, next_in_ms = delay, "hazard spawned");
        Some(hazard)
    }
}
