//! Draws the decorative orbs into a character grid.
//!
//! Orbs are positioned against a pixel viewport and scaled down to the
//! grid; later orbs are painted over earlier ones.

use sentiment_core::{OrbColor, OrbSpec};

use super::constants::{VIEWPORT_HEIGHT_PX, VIEWPORT_WIDTH_PX};
use super::terminal::{Span, SpanStyle};

struct Ellipse {
    cx: f32,
    cy: f32,
    rx: f32,
    ry: f32,
}

impl Ellipse {
    fn for_orb(orb: &OrbSpec, columns: usize, rows: usize) -> Self {
        let radius_px = orb.size as f32 / 2.0;
        let left_px = orb.left_percent as f32 / 100.0 * VIEWPORT_WIDTH_PX;
        let top_px = orb.top_percent as f32 / 100.0 * VIEWPORT_HEIGHT_PX;
        let x_scale = columns as f32 / VIEWPORT_WIDTH_PX;
        let y_scale = rows as f32 / VIEWPORT_HEIGHT_PX;
        Self {
            cx: (left_px + radius_px) * x_scale,
            cy: (top_px + radius_px) * y_scale,
            rx: (radius_px * x_scale).max(0.5),
            ry: (radius_px * y_scale).max(0.5),
        }
    }

    /// Normalized distance from the center; `<= 1.0` is inside.
    fn distance(&self, x: f32, y: f32) -> f32 {
        let dx = (x - self.cx) / self.rx;
        let dy = (y - self.cy) / self.ry;
        (dx * dx + dy * dy).sqrt()
    }

    /// Position along the top-left to bottom-right gradient, in `0.0..=1.0`.
    fn gradient_position(&self, x: f32, y: f32) -> f32 {
        let tx = (x - (self.cx - self.rx)) / (2.0 * self.rx);
        let ty = (y - (self.cy - self.ry)) / (2.0 * self.ry);
        ((tx + ty) / 2.0).clamp(0.0, 1.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Cell {
    glyph: char,
    style: SpanStyle,
}

const EMPTY: Cell = Cell {
    glyph: ' ',
    style: SpanStyle::Plain,
};

pub fn rasterize(orbs: &[OrbSpec], columns: usize, rows: usize) -> Vec<Vec<Span>> {
    let shapes: Vec<(Ellipse, &OrbSpec)> = orbs
        .iter()
        .map(|orb| (Ellipse::for_orb(orb, columns, rows), orb))
        .collect();

    (0..rows)
        .map(|row| {
            let cells = (0..columns).map(|column| {
                let x = column as f32 + 0.5;
                let y = row as f32 + 0.5;
                shapes
                    .iter()
                    .rev()
                    .find_map(|(shape, orb)| paint_cell(shape, orb, x, y))
                    .unwrap_or(EMPTY)
            });
            merge_runs(cells)
        })
        .collect()
}

fn paint_cell(shape: &Ellipse, orb: &OrbSpec, x: f32, y: f32) -> Option<Cell> {
    let distance = shape.distance(x, y);
    if distance > 1.0 {
        return None;
    }
    let glyph = if distance < 0.5 {
        '▓'
    } else if distance < 0.8 {
        '▒'
    } else {
        '░'
    };
    let (r, g, b) = blend(orb.color_from, orb.color_to, shape.gradient_position(x, y));
    Some(Cell {
        glyph,
        style: SpanStyle::Rgb(r, g, b),
    })
}

fn blend(from: OrbColor, to: OrbColor, t: f32) -> (u8, u8, u8) {
    let (fr, fg, fb) = from.rgb();
    let (tr, tg, tb) = to.rgb();
    let mix = |a: u8, b: u8| (a as f32 + (b as f32 - a as f32) * t).round() as u8;
    (mix(fr, tr), mix(fg, tg), mix(fb, tb))
}

fn merge_runs(cells: impl Iterator<Item = Cell>) -> Vec<Span> {
    let mut spans: Vec<Span> = Vec::new();
    for cell in cells {
        match spans.last_mut() {
            Some(last) if last.style == cell.style => last.text.push(cell.glyph),
            _ => spans.push(Span::new(cell.glyph.to_string(), cell.style)),
        }
    }
    spans
}
