/// Draw contracts for entities and the static parts of a frame.
///
/// Like the terminal layer in the binary, nothing here mutates game state; it
/// only turns state into `Surface` calls.

use crate::config::GameConfig;
use crate::entities::{Body, Hazard, Player, Rect};
use crate::surface::{Font, Rgba, Surface};

const HUD_FONT: Font = Font::new(20.0, "Arial");
const GAME_OVER_FONT: Font = Font::new(64.0, "Arial");
const HITBOX_LINE_WIDTH: f64 = 2.0;
const TRAIL_MARKER: f64 = 5.0;

impl Body {
    /// Sprite scaled to the body's extent, then its hitbox outline.
    pub fn draw<S: Surface>(&self, surface: &mut S) {
        let bounds = self.bounds();
        surface.draw_image(self.sprite(), bounds);
        surface.stroke_rect(bounds, Rgba::HITBOX, HITBOX_LINE_WIDTH);
    }
}

impl Player {
    pub fn draw<S: Surface>(&self, surface: &mut S) {
        let dx = self.body.width() / 2.0;
        let dy = self.body.height() / 2.0;
        for point in &self.trail {
            surface.fill_rect(
                Rect::new(point.x + dx, point.y + dy, TRAIL_MARKER, TRAIL_MARKER),
                Rgba::TRAIL_GREY,
            );
        }
        self.body.draw(surface);
    }
}

impl Hazard {
    pub fn draw<S: Surface>(&self, surface: &mut S) {
        self.body().draw(surface);
    }
}

pub fn clear<S: Surface>(surface: &mut S, config: &GameConfig) {
    surface.clear_rect(Rect::new(0.0, 0.0, config.field_width, config.field_height));
}

pub fn draw_score<S: Surface>(surface: &mut S, score: u32) {
    surface.fill_text(&format!("Score: {}", score), HUD_FONT, Rgba::BLACK, 10.0, 30.0);
}

pub fn draw_ground<S: Surface>(surface: &mut S, config: &GameConfig) {
    let top = config.ground_top();
    surface.fill_rect(
        Rect::new(0.0, top, config.field_width, config.field_height - top),
        Rgba::GREEN,
    );
}

pub fn draw_game_over<S: Surface>(surface: &mut S, config: &GameConfig) {
    surface.fill_text(
        "GAME OVER",
        GAME_OVER_FONT,
        Rgba::RED,
        config.field_width / 4.0,
        config.field_height / 2.0,
    );
}
