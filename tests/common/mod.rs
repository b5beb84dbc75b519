#![allow(dead_code)]

use dino_runner::entities::{Rect, Sprite};
use dino_runner::surface::{Font, Rgba, Surface};

use rand::rngs::StdRng;
use rand::SeedableRng;

/// One recorded `Surface` call.
#[derive(Clone, Debug, PartialEq)]
pub enum Call {
    Clear(Rect),
    Fill(Rect, Rgba),
    Stroke(Rect, Rgba, f64),
    Image(Sprite, Rect),
    Text(String, Font, Rgba, f64, f64),
}

/// Surface double that records every call in order.
#[derive(Default)]
pub struct RecordingSurface {
    pub calls: Vec<Call>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn images(&self) -> Vec<(Sprite, Rect)> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                Call::Image(s, r) => Some((*s, *r)),
                _ => None,
            })
            .collect()
    }

    pub fn texts(&self) -> Vec<String> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                Call::Text(t, ..) => Some(t.clone()),
                _ => None,
            })
            .collect()
    }
}

impl Surface for RecordingSurface {
    fn clear_rect(&mut self, rect: Rect) {
        self.calls.push(Call::Clear(rect));
    }

    fn fill_rect(&mut self, rect: Rect, color: Rgba) {
        self.calls.push(Call::Fill(rect, color));
    }

    fn stroke_rect(&mut self, rect: Rect, color: Rgba, line_width: f64) {
        self.calls.push(Call::Stroke(rect, color, line_width));
    }

    fn draw_image(&mut self, sprite: Sprite, rect: Rect) {
        self.calls.push(Call::Image(sprite, rect));
    }

    fn fill_text(&mut self, text: &str, font: Font, color: Rgba, x: f64, y: f64) {
        self.calls.push(Call::Text(text.to_string(), font, color, x, y));
    }
}

pub fn seeded_rng() -> StdRng {
    StdRng::seed_from_u64(42)
}

pub fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}
