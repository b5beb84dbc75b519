/// All game entity types, data only.  Motion lives in `compute`, drawing in
/// `render`.

use std::collections::VecDeque;

use crate::config::GameConfig;

/// Opaque handle to host-owned imagery.  The core never inspects it; the host
/// resolves it to whatever it can actually draw.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Sprite {
    Runner,
    Cactus,
    Bird,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EntityKind {
    Player,
    GroundHazard,
    FlyingHazard,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameStatus {
    Playing,
    GameOver,
}

// ── Geometry ─────────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// Axis-aligned rectangle in field pixels, origin top-left.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Rect { x, y, width, height }
    }

    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }
}

// ── Shared body ──────────────────────────────────────────────────────────────

/// Position, extent and visual handle shared by every entity.  The extent is
/// fixed when the body is built.
#[derive(Clone, Debug, PartialEq)]
pub struct Body {
    pub x: f64,
    pub y: f64,
    width: f64,
    height: f64,
    sprite: Sprite,
}

impl Body {
    pub fn new(x: f64, y: f64, width: f64, height: f64, sprite: Sprite) -> Self {
        Body { x, y, width, height, sprite }
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn sprite(&self) -> Sprite {
        self.sprite
    }

    pub fn bounds(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }
}

// ── Player ───────────────────────────────────────────────────────────────────

#[derive(Clone, Debug)]
pub struct Player {
    pub body: Body,
    /// Vertical velocity; negative is upwards.
    pub velocity: f64,
    /// Past positions, oldest first.  Never longer than `trail_cap`.
    pub(crate) trail: VecDeque<Point>,
    pub(crate) trail_cap: usize,
}

impl Player {
    /// A grounded player at rest on the baseline.
    pub fn new(config: &GameConfig) -> Self {
        Player {
            body: Body::new(
                config.player_x,
                config.ground_level,
                config.player_size,
                config.player_size,
                Sprite::Runner,
            ),
            velocity: 0.0,
            trail: VecDeque::with_capacity(config.trail_len + 1),
            trail_cap: config.trail_len,
        }
    }

    pub fn trail(&self) -> &VecDeque<Point> {
        &self.trail
    }
}

// ── Hazards ──────────────────────────────────────────────────────────────────

/// Static obstacle sitting on the ground.
#[derive(Clone, Debug)]
pub struct GroundHazard {
    pub body: Body,
    /// Speed captured at spawn time.
    pub speed: f64,
}

impl GroundHazard {
    pub fn new(x: f64, speed: f64, config: &GameConfig) -> Self {
        GroundHazard {
            body: Body::new(
                x,
                config.ground_level + config.obstacle_size,
                config.obstacle_size,
                config.obstacle_size,
                Sprite::Cactus,
            ),
            speed,
        }
    }
}

/// Bobbing hazard flying at head height.
#[derive(Clone, Debug)]
pub struct FlyingHazard {
    pub body: Body,
    /// Speed captured at spawn time.
    pub speed: f64,
    pub phase: f64,
    pub baseline: f64,
}

impl FlyingHazard {
    pub fn new(x: f64, speed: f64, config: &GameConfig) -> Self {
        let baseline = config.bird_baseline();
        FlyingHazard {
            body: Body::new(x, baseline, config.bird_size, config.bird_size, Sprite::Bird),
            speed,
            phase: 0.0,
            baseline,
        }
    }
}

#[derive(Clone, Debug)]
pub enum Hazard {
    Ground(GroundHazard),
    Flying(FlyingHazard),
}

impl Hazard {
    pub fn body(&self) -> &Body {
        match self {
            Hazard::Ground(h) => &h.body,
            Hazard::Flying(h) => &h.body,
        }
    }

    pub fn kind(&self) -> EntityKind {
        match self {
            Hazard::Ground(_) => EntityKind::GroundHazard,
            Hazard::Flying(_) => EntityKind::FlyingHazard,
        }
    }

    pub fn speed(&self) -> f64 {
        match self {
            Hazard::Ground(h) => h.speed,
            Hazard::Flying(h) => h.speed,
        }
    }
}

/// Borrowed view over any entity the session owns.
#[derive(Clone, Copy, Debug)]
pub enum Entity<'a> {
    Player(&'a Player),
    Hazard(&'a Hazard),
}

impl<'a> Entity<'a> {
    pub fn kind(&self) -> EntityKind {
        match *self {
            Entity::Player(_) => EntityKind::Player,
            Entity::Hazard(h) => h.kind(),
        }
    }

    pub fn body(&self) -> &'a Body {
        match *self {
            Entity::Player(p) => &p.body,
            Entity::Hazard(h) => h.body(),
        }
    }
}
