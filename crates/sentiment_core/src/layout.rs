//! Randomized parameters for the decorative background orbs.
//!
//! Generation is independent of the analysis state machine: it owns its own
//! randomness and its output is never mutated after startup.

use std::ops::Range;

use rand::Rng;

pub const DEFAULT_ORB_COUNT: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OrbColor {
    Blue300,
    Blue400,
    Indigo300,
    Purple300,
    Purple400,
    Pink400,
    Cyan300,
}

impl OrbColor {
    pub fn rgb(self) -> (u8, u8, u8) {
        match self {
            OrbColor::Blue300 => (147, 197, 253),
            OrbColor::Blue400 => (96, 165, 250),
            OrbColor::Indigo300 => (165, 180, 252),
            OrbColor::Purple300 => (216, 180, 254),
            OrbColor::Purple400 => (192, 132, 252),
            OrbColor::Pink400 => (244, 114, 182),
            OrbColor::Cyan300 => (103, 232, 249),
        }
    }
}

/// Gradient pairs an orb may be painted with, `(from, to)`.
pub const ORB_PALETTE: [(OrbColor, OrbColor); 4] = [
    (OrbColor::Blue300, OrbColor::Purple400),
    (OrbColor::Indigo300, OrbColor::Blue400),
    (OrbColor::Purple300, OrbColor::Pink400),
    (OrbColor::Blue400, OrbColor::Cyan300),
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrbSpec {
    pub id: usize,
    /// Diameter in pixels.
    pub size: u32,
    pub top_percent: u32,
    pub left_percent: u32,
    pub color_from: OrbColor,
    pub color_to: OrbColor,
    pub duration_seconds: u32,
}

/// Half-open ranges every generated value is drawn from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrbRanges {
    pub size: Range<u32>,
    pub top_percent: Range<u32>,
    pub left_percent: Range<u32>,
    pub duration_seconds: Range<u32>,
}

impl Default for OrbRanges {
    fn default() -> Self {
        Self {
            size: 200..400,
            top_percent: 0..80,
            left_percent: 0..80,
            duration_seconds: 20..30,
        }
    }
}

/// Generates `count` orbs with the thread-local RNG and default ranges.
pub fn generate(count: usize) -> Vec<OrbSpec> {
    generate_with_rng(count, &OrbRanges::default(), &mut rand::thread_rng())
}

pub fn generate_with_rng<R: Rng>(
    count: usize,
    ranges: &OrbRanges,
    rng: &mut R,
) -> Vec<OrbSpec> {
    (0..count)
        .map(|id| {
            let (color_from, color_to) = ORB_PALETTE[rng.gen_range(0..ORB_PALETTE.len())];
            OrbSpec {
                id,
                size: sample(rng, &ranges.size),
                top_percent: sample(rng, &ranges.top_percent),
                left_percent: sample(rng, &ranges.left_percent),
                color_from,
                color_to,
                duration_seconds: sample(rng, &ranges.duration_seconds),
            }
        })
        .collect()
}

// An empty range collapses to its start instead of panicking.
fn sample<R: Rng>(rng: &mut R, range: &Range<u32>) -> u32 {
    if range.is_empty() {
        range.start
    } else {
        rng.gen_range(range.clone())
    }
}
