/// The drawing primitives the host provides.
///
/// Coordinates are field pixels.  None of the calls can fail from the core's
/// point of view; a host that cannot draw something (e.g. an image that has
/// not loaded yet) silently skips it.

use crate::entities::{Rect, Sprite};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgba(pub u8, pub u8, pub u8, pub u8);

impl Rgba {
    pub const BLACK: Rgba = Rgba(0x00, 0x00, 0x00, 0xff);
    pub const RED: Rgba = Rgba(0xff, 0x00, 0x00, 0xff);
    pub const GREEN: Rgba = Rgba(0x00, 0x80, 0x00, 0xff);
    pub const TRAIL_GREY: Rgba = Rgba(0xaa, 0xaa, 0xaa, 0xff);
    /// Translucent red used for debug hitboxes.
    pub const HITBOX: Rgba = Rgba(0xff, 0x00, 0x00, 0x50);

    pub fn is_opaque(&self) -> bool {
        self.3 == 0xff
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Font {
    pub size_px: f64,
    pub family: &'static str,
}

impl Font {
    pub const fn new(size_px: f64, family: &'static str) -> Self {
        Font { size_px, family }
    }
}

pub trait Surface {
    fn clear_rect(&mut self, rect: Rect);
    fn fill_rect(&mut self, rect: Rect, color: Rgba);
    fn stroke_rect(&mut self, rect: Rect, color: Rgba, line_width: f64);
    fn draw_image(&mut self, sprite: Sprite, rect: Rect);
    /// `y` is the text baseline.
    fn fill_text(&mut self, text: &str, font: Font, color: Rgba, x: f64, y: f64);
}
