/// Per-tick kinematics.
///
/// Every entity advances by exactly one frame per `update` call.  Nothing
/// here looks at wall-clock time or other entities; that is the session's job.

use crate::config::GameConfig;
use crate::entities::{FlyingHazard, GroundHazard, Hazard, Player, Point};

// ── Player ───────────────────────────────────────────────────────────────────

impl Player {
    /// Grounded means sitting exactly on the baseline.  The integration only
    /// ever adds integral steps and the clamp assigns the baseline itself, so
    /// the comparison stays exact.
    pub fn is_grounded(&self, config: &GameConfig) -> bool {
        self.body.y == config.ground_level
    }

    /// Start a jump.  Ignored while airborne: no buffering, no double jump.
    pub fn jump(&mut self, config: &GameConfig) {
        if self.is_grounded(config) {
            self.velocity = config.jump_impulse;
        }
    }

    pub fn update(&mut self, config: &GameConfig) {
        self.body.y += self.velocity;
        self.velocity += config.gravity;

        if self.body.y > config.ground_level {
            self.body.y = config.ground_level;
        }

        // The trail scrolls with the world; the player itself never moves
        // horizontally.
        for point in self.trail.iter_mut() {
            point.x -= config.trail_scroll;
        }

        self.trail.push_back(Point { x: self.body.x, y: self.body.y });
        while self.trail.len() > self.trail_cap {
            self.trail.pop_front();
        }
    }
}

// ── Hazards ──────────────────────────────────────────────────────────────────

impl GroundHazard {
    pub fn update(&mut self) {
        self.body.x -= self.speed;
    }
}

impl FlyingHazard {
    pub fn update(&mut self, config: &GameConfig) {
        self.body.x -= self.speed;
        self.body.y = self.baseline + self.phase.sin() * config.bird_amplitude;
        self.phase += config.bird_phase_step;
    }
}

impl Hazard {
    pub fn update(&mut self, config: &GameConfig) {
        match self {
            Hazard::Ground(h) => h.update(),
            Hazard::Flying(h) => h.update(config),
        }
    }

    /// True once the hazard's right edge has scrolled past the left border.
    pub fn is_offscreen(&self) -> bool {
        self.body().bounds().right() < 0.0
    }
}
