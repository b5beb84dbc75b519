/// One run of the game, from the first frame to the collision that ends it.
///
/// The session owns every entity, the score, the global speed and the three
/// timers (score, speed, spawn).  Two entry points drive it:
///
/// * `tick`: one rendered frame: move, draw, check for a collision.
/// * `advance_clock`: wall-clock time passing: score, speed and spawns.
///
/// The host decides the interleaving.  Both only mutate state through the
/// session itself, so the order they arrive in never matters for safety.

use std::time::Duration;

use rand::Rng;
use tracing::{info, trace};

use crate::collision::collides;
use crate::config::GameConfig;
use crate::entities::{Entity, GameStatus, Hazard, Player};
use crate::error::ConfigError;
use crate::render;
use crate::spawner::Spawner;
use crate::surface::Surface;
use crate::timers::Interval;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Due {
    Score,
    Speed,
    Spawn,
}

#[derive(Clone, Debug)]
pub struct Session {
    config: GameConfig,
    player: Player,
    /// Spawn order.
    hazards: Vec<Hazard>,
    score: u32,
    speed: f64,
    status: GameStatus,
    clock_ms: u64,
    frames: u64,
    score_timer: Interval,
    speed_timer: Interval,
    spawner: Spawner,
}

impl Session {
    /// A fresh run: grounded player, no hazards yet, timers started at t=0.
    /// The first spawn comes due immediately, on the first clock advance.
    pub fn new(config: GameConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Session {
            player: Player::new(&config),
            hazards: Vec::new(),
            score: 0,
            speed: config.base_speed,
            status: GameStatus::Playing,
            clock_ms: 0,
            frames: 0,
            score_timer: Interval::start(config.score_interval_ms, 0),
            speed_timer: Interval::start(config.speed_interval_ms, 0),
            spawner: Spawner::new(0),
            config,
        })
    }

    // ── Read access ──────────────────────────────────────────────────────────

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn running(&self) -> bool {
        self.status == GameStatus::Playing
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn speed(&self) -> f64 {
        self.speed
    }

    /// Simulated milliseconds since the session started.
    pub fn clock_ms(&self) -> u64 {
        self.clock_ms
    }

    /// Frames rendered so far.
    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn hazards(&self) -> &[Hazard] {
        &self.hazards
    }

    /// Every entity in update order: the player first, then hazards in spawn
    /// order.
    pub fn entities(&self) -> impl Iterator<Item = Entity<'_>> {
        std::iter::once(Entity::Player(&self.player))
            .chain(self.hazards.iter().map(Entity::Hazard))
    }

    pub fn entity_count(&self) -> usize {
        1 + self.hazards.len()
    }

    // ── Input ────────────────────────────────────────────────────────────────

    pub fn jump(&mut self) {
        self.player.jump(&self.config);
    }

    /// Place a hazard directly, bypassing the spawner.
    pub fn add_hazard(&mut self, hazard: Hazard) {
        self.hazards.push(hazard);
    }

    // ── Frame ────────────────────────────────────────────────────────────────

    /// Run one frame.  Does nothing once the run is over.
    pub fn tick<S: Surface>(&mut self, surface: &mut S) -> GameStatus {
        if !self.running() {
            return self.status;
        }
        self.frames += 1;

        render::clear(surface, &self.config);
        render::draw_score(surface, self.score);
        render::draw_ground(surface, &self.config);

        self.player.update(&self.config);
        self.player.draw(surface);
        for hazard in self.hazards.iter_mut() {
            hazard.update(&self.config);
            hazard.draw(surface);
        }

        let player_box = self.player.body.bounds();
        let hit = self
            .hazards
            .iter()
            .any(|h| collides(&player_box, &h.body().bounds()));

        if hit {
            self.end_run();
        } else if self.config.prune_offscreen {
            let before = self.hazards.len();
            self.hazards.retain(|h| !h.is_offscreen());
            let pruned = before - self.hazards.len();
            if pruned > 0 {
                trace!(pruned, remaining = self.hazards.len(), "pruned off-screen hazards");
            }
        }

        self.status
    }

    /// Draw the game-over banner over whatever the last frame left behind.
    pub fn draw_game_over<S: Surface>(&self, surface: &mut S) {
        render::draw_game_over(surface, &self.config);
    }

    // ── Wall clock ───────────────────────────────────────────────────────────

    /// Let `elapsed` of wall-clock time pass, firing every timer that comes
    /// due in chronological order.  Ties fire score, then speed, then spawn.
    pub fn advance_clock(&mut self, elapsed: Duration, rng: &mut impl Rng) {
        let target = self.clock_ms.saturating_add(elapsed.as_millis() as u64);

        while let Some((due_ms, which)) = self.next_due(target) {
            self.clock_ms = due_ms;
            match which {
                Due::Score => {
                    self.score_timer.fire();
                    self.increase_score();
                }
                Due::Speed => {
                    self.speed_timer.fire();
                    self.increase_speed();
                }
                Due::Spawn => {
                    let running = self.running();
                    if let Some(hazard) =
                        self.spawner
                            .fire(due_ms, running, self.speed, &self.config, rng)
                    {
                        self.hazards.push(hazard);
                    }
                }
            }
        }

        self.clock_ms = target;
    }

    fn next_due(&self, target: u64) -> Option<(u64, Due)> {
        [
            (self.score_timer.due_ms(), Due::Score),
            (self.speed_timer.due_ms(), Due::Speed),
            (self.spawner.due_ms(), Due::Spawn),
        ]
        .into_iter()
        .filter_map(|(due, which)| due.map(|d| (d, which)))
        .filter(|(due, _)| *due <= target)
        // min_by_key keeps the first of equal keys, which gives the tie order.
        .min_by_key(|(due, _)| *due)
    }

    fn increase_score(&mut self) {
        self.score = self.score.saturating_add(1);
    }

    fn increase_speed(&mut self) {
        self.speed += self.config.speed_step;
    }

    /// Terminal transition.  Safe to call more than once; the timers are
    /// cancelled on the first call only.
    fn end_run(&mut self) {
        self.status = GameStatus::GameOver;
        let stopped_score = self.score_timer.cancel();
        let stopped_speed = self.speed_timer.cancel();
        if stopped_score || stopped_speed {
            info!(
                score = self.score,
                speed = self.speed,
                clock_ms = self.clock_ms,
                frames = self.frames,
                "game over"
            );
        }
    }
}
