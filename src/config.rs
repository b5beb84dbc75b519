/// Tunable constants for one run.
///
/// Everything the simulation needs to know about the playing field, the
/// physics and the difficulty ramp lives here so that sessions never reach
/// for globals.  `GameConfig::default()` reproduces the classic game.

use crate::error::ConfigError;

#[derive(Clone, Debug, PartialEq)]
pub struct GameConfig {
    // ── Field ────────────────────────────────────────────────────────────────
    pub field_width: f64,
    pub field_height: f64,
    /// Resting y of the player (top edge of the sprite).
    pub ground_level: f64,

    // ── Sizes ────────────────────────────────────────────────────────────────
    pub player_x: f64,
    pub player_size: f64,
    pub obstacle_size: f64,
    pub bird_size: f64,

    // ── Player physics (units per tick) ──────────────────────────────────────
    pub gravity: f64,
    pub jump_impulse: f64,
    pub trail_len: usize,
    pub trail_scroll: f64,

    // ── Flying hazard motion ─────────────────────────────────────────────────
    pub bird_amplitude: f64,
    pub bird_phase_step: f64,

    // ── Difficulty ramp ──────────────────────────────────────────────────────
    pub base_speed: f64,
    pub speed_step: f64,
    pub score_interval_ms: u64,
    pub speed_interval_ms: u64,
    pub spawn_base_ms: f64,
    pub spawn_speed_factor: f64,
    pub spawn_floor_ms: f64,

    /// Drop hazards once they have fully scrolled past the left edge.
    pub prune_offscreen: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            field_width: 800.0,
            field_height: 400.0,
            ground_level: 300.0,
            player_x: 50.0,
            player_size: 80.0,
            obstacle_size: 40.0,
            bird_size: 40.0,
            gravity: 1.0,
            jump_impulse: -20.0,
            trail_len: 20,
            trail_scroll: 5.0,
            bird_amplitude: 1.5,
            bird_phase_step: 0.1,
            base_speed: 5.0,
            speed_step: 0.1,
            score_interval_ms: 100,
            speed_interval_ms: 1000,
            spawn_base_ms: 2000.0,
            spawn_speed_factor: 20.0,
            spawn_floor_ms: 500.0,
            prune_offscreen: true,
        }
    }
}

fn positive(name: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::NotPositive { name, value })
    }
}

fn finite(name: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ConfigError::NotFinite { name, value })
    }
}

impl GameConfig {
    /// Top of the green ground band (the player's feet when grounded).
    pub fn ground_top(&self) -> f64 {
        self.ground_level + self.player_size
    }

    /// Baseline the flying hazard oscillates around.
    pub fn bird_baseline(&self) -> f64 {
        self.ground_level - self.player_size
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        positive("field width", self.field_width)?;
        positive("field height", self.field_height)?;
        positive("player size", self.player_size)?;
        positive("obstacle size", self.obstacle_size)?;
        positive("bird size", self.bird_size)?;
        positive("gravity", self.gravity)?;
        positive("base speed", self.base_speed)?;
        positive("spawn floor", self.spawn_floor_ms)?;

        finite("ground level", self.ground_level)?;
        finite("player x", self.player_x)?;
        finite("trail scroll", self.trail_scroll)?;
        finite("bird amplitude", self.bird_amplitude)?;
        finite("bird phase step", self.bird_phase_step)?;
        finite("speed step", self.speed_step)?;
        finite("spawn base", self.spawn_base_ms)?;
        finite("spawn speed factor", self.spawn_speed_factor)?;

        if !self.jump_impulse.is_finite() || self.jump_impulse >= 0.0 {
            return Err(ConfigError::JumpImpulse(self.jump_impulse));
        }
        if self.trail_len == 0 {
            return Err(ConfigError::EmptyTrail);
        }
        if self.score_interval_ms == 0 {
            return Err(ConfigError::ZeroInterval { name: "score" });
        }
        if self.speed_interval_ms == 0 {
            return Err(ConfigError::ZeroInterval { name: "speed" });
        }
        if self.ground_top() > self.field_height {
            return Err(ConfigError::GroundOutsideField {
                ground_top: self.ground_top(),
                field_height: self.field_height,
            });
        }
        Ok(())
    }
}
