/// Terminal surface. All terminal I/O lives here.
///
/// The session draws in field pixels; this surface rasterises those calls
/// onto a grid of character cells and only touches the terminal when the
/// grid is presented.

use std::collections::HashMap;
use std::io::Write;

use crossterm::{
    cursor,
    style::{self, Attribute, Color, Print},
    QueueableCommand,
};
use dino_runner::entities::{Rect, Sprite};
use dino_runner::surface::{Font, Rgba, Surface};
use dino_runner::GameConfig;

// ── Colour palette ────────────────────────────────────────────────────────────

const C_RUNNER: Color = Color::White;
const C_CACTUS: Color = Color::Green;
const C_BIRD: Color = Color::Yellow;
const C_HITBOX: Color = Color::DarkRed;
const C_HINT: Color = Color::DarkGrey;

/// Text at or above this size is rendered bold.
const BOLD_FONT_PX: f64 = 32.0;

// ── Sprite art ────────────────────────────────────────────────────────────────

/// Glyph art for one sprite, clipped to the entity's cell extent when blitted.
/// Spaces are transparent.
struct SpriteArt {
    lines: &'static [&'static str],
    color: Color,
}

fn default_sprites() -> HashMap<Sprite, SpriteArt> {
    let mut sprites = HashMap::new();
    sprites.insert(
        Sprite::Runner,
        SpriteArt {
            lines: &[
                "     ▄███▄",
                "     ██▄██",
                "▌   ▄████ ",
                "▀█▄████▀▀ ",
                "  ▀█▀ █   ",
            ],
            color: C_RUNNER,
        },
    );
    sprites.insert(
        Sprite::Cactus,
        SpriteArt {
            lines: &[" ▐█▌ ", "▀███▀", " ▐█▌ "],
            color: C_CACTUS,
        },
    );
    sprites.insert(
        Sprite::Bird,
        SpriteArt {
            lines: &["▀▄ ▄▀", " ▀█▀ ", "     "],
            color: C_BIRD,
        },
    );
    sprites
}

// ── Cell grid ─────────────────────────────────────────────────────────────────

#[derive(Clone, Copy, PartialEq)]
struct Cell {
    ch: char,
    fg: Color,
    bold: bool,
}

const BLANK: Cell = Cell {
    ch: ' ',
    fg: Color::Reset,
    bold: false,
};

fn term_color(c: Rgba) -> Color {
    match c {
        // The canvas is white, the terminal usually is not.
        Rgba(0, 0, 0, _) => Color::Reset,
        Rgba(r, g, b, _) => Color::Rgb { r, g, b },
    }
}

pub struct TerminalSurface {
    cols: u16,
    rows: u16,
    px_per_col: f64,
    px_per_row: f64,
    cells: Vec<Cell>,
    sprites: HashMap<Sprite, SpriteArt>,
    show_hitboxes: bool,
}

impl TerminalSurface {
    /// Map the whole field onto a `cols` × `rows` terminal, keeping the last
    /// row free for the controls hint.
    pub fn new(cols: u16, rows: u16, config: &GameConfig) -> Self {
        let cols = cols.max(1);
        let rows = rows.saturating_sub(1).max(1);
        TerminalSurface {
            cols,
            rows,
            px_per_col: config.field_width / cols as f64,
            px_per_row: config.field_height / rows as f64,
            cells: vec![BLANK; cols as usize * rows as usize],
            sprites: default_sprites(),
            show_hitboxes: false,
        }
    }

    pub fn toggle_hitboxes(&mut self) {
        self.show_hitboxes = !self.show_hitboxes;
    }

    fn col(&self, x: f64) -> i32 {
        (x / self.px_per_col).floor() as i32
    }

    fn row(&self, y: f64) -> i32 {
        (y / self.px_per_row).floor() as i32
    }

    /// Cell span `(c0, r0, c1, r1)` covered by `rect`, end-exclusive and
    /// clipped to the grid.  Always at least one cell wide and tall before
    /// clipping.
    fn span(&self, rect: Rect) -> (i32, i32, i32, i32) {
        let c0 = self.col(rect.x);
        let r0 = self.row(rect.y);
        let c1 = ((rect.right() / self.px_per_col).ceil() as i32).max(c0 + 1);
        let r1 = ((rect.bottom() / self.px_per_row).ceil() as i32).max(r0 + 1);
        (
            c0.max(0),
            r0.max(0),
            c1.min(self.cols as i32),
            r1.min(self.rows as i32),
        )
    }

    fn cell_mut(&mut self, col: i32, row: i32) -> Option<&mut Cell> {
        if col < 0 || row < 0 || col >= self.cols as i32 || row >= self.rows as i32 {
            return None;
        }
        let idx = row as usize * self.cols as usize + col as usize;
        self.cells.get_mut(idx)
    }

    fn put(&mut self, col: i32, row: i32, cell: Cell) {
        if let Some(slot) = self.cell_mut(col, row) {
            *slot = cell;
        }
    }

    /// Flush the grid plus a hint line to the terminal.
    pub fn present<W: Write>(&self, out: &mut W, hint: &str) -> std::io::Result<()> {
        let mut current = BLANK;
        out.queue(style::ResetColor)?;
        out.queue(style::SetAttribute(Attribute::Reset))?;

        for row in 0..self.rows {
            out.queue(cursor::MoveTo(0, row))?;
            let start = row as usize * self.cols as usize;
            let mut run = String::with_capacity(self.cols as usize);

            for cell in &self.cells[start..start + self.cols as usize] {
                if cell.fg != current.fg || cell.bold != current.bold {
                    if !run.is_empty() {
                        out.queue(Print(&run))?;
                        run.clear();
                    }
                    out.queue(style::SetAttribute(if cell.bold {
                        Attribute::Bold
                    } else {
                        Attribute::NormalIntensity
                    }))?;
                    out.queue(style::SetForegroundColor(cell.fg))?;
                    current = *cell;
                }
                run.push(cell.ch);
            }
            if !run.is_empty() {
                out.queue(Print(&run))?;
            }
        }

        out.queue(style::SetAttribute(Attribute::Reset))?;
        out.queue(cursor::MoveTo(1, self.rows))?;
        out.queue(style::SetForegroundColor(C_HINT))?;
        out.queue(Print(hint))?;
        out.queue(style::ResetColor)?;
        out.flush()?;
        Ok(())
    }
}

impl Surface for TerminalSurface {
    fn clear_rect(&mut self, rect: Rect) {
        let (c0, r0, c1, r1) = self.span(rect);
        for row in r0..r1 {
            for col in c0..c1 {
                self.put(col, row, BLANK);
            }
        }
    }

    fn fill_rect(&mut self, rect: Rect, color: Rgba) {
        // Anything smaller than a cell is a speck, not a block.
        let ch = if rect.width < self.px_per_col && rect.height < self.px_per_row {
            '·'
        } else {
            '█'
        };
        let cell = Cell {
            ch,
            fg: term_color(color),
            bold: false,
        };
        let (c0, r0, c1, r1) = self.span(rect);
        for row in r0..r1 {
            for col in c0..c1 {
                self.put(col, row, cell);
            }
        }
    }

    fn stroke_rect(&mut self, rect: Rect, color: Rgba, _line_width: f64) {
        if !color.is_opaque() && !self.show_hitboxes {
            return;
        }
        let (c0, r0, c1, r1) = self.span(rect);
        if c0 >= c1 || r0 >= r1 {
            return;
        }
        let fg = if color.is_opaque() { term_color(color) } else { C_HITBOX };
        let (last_c, last_r) = (c1 - 1, r1 - 1);

        for row in r0..r1 {
            for col in c0..c1 {
                let on_edge = row == r0 || row == last_r || col == c0 || col == last_c;
                if !on_edge {
                    continue;
                }
                let ch = match (row == r0, row == last_r, col == c0, col == last_c) {
                    (true, _, true, _) => '┌',
                    (true, _, _, true) => '┐',
                    (_, true, true, _) => '└',
                    (_, true, _, true) => '┘',
                    (true, _, _, _) | (_, true, _, _) => '─',
                    _ => '│',
                };
                let translucent = !color.is_opaque();
                if let Some(slot) = self.cell_mut(col, row) {
                    // Translucent strokes never hide what is underneath.
                    if !translucent || slot.ch == ' ' {
                        *slot = Cell { ch, fg, bold: false };
                    }
                }
            }
        }
    }

    fn draw_image(&mut self, sprite: Sprite, rect: Rect) {
        // Unknown art draws nothing, like an image that has not loaded.
        let Some(art) = self.sprites.get(&sprite) else {
            return;
        };
        let lines = art.lines;
        let fg = art.color;

        let c0 = self.col(rect.x);
        let r0 = self.row(rect.y);
        let max_cols = ((rect.width / self.px_per_col).round() as usize).max(1);
        let max_rows = ((rect.height / self.px_per_row).round() as usize).max(1);

        for (dr, line) in lines.iter().enumerate().take(max_rows) {
            for (dc, ch) in line.chars().enumerate().take(max_cols) {
                if ch != ' ' {
                    self.put(c0 + dc as i32, r0 + dr as i32, Cell { ch, fg, bold: false });
                }
            }
        }
    }

    fn fill_text(&mut self, text: &str, font: Font, color: Rgba, x: f64, y: f64) {
        let cell = Cell {
            ch: ' ',
            fg: term_color(color),
            bold: font.size_px >= BOLD_FONT_PX,
        };
        let c0 = self.col(x);
        // `y` is the baseline; put the text on the row just above it.
        let row = self.row(y - 1.0);
        for (i, ch) in text.chars().enumerate() {
            self.put(c0 + i as i32, row, Cell { ch, ..cell });
        }
    }
}
