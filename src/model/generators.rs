//! Id and color generators handed to the partition engine
//!
//! The engine never creates ids or colors on its own; the owner of the tree
//! passes these capabilities in. The application uses random UUIDs and random
//! hues, tests and `--seed` runs use reproducible sources.

use std::fmt;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use uuid::{Builder, Uuid};

use super::partition::NodeId;
use crate::theme::Color;

/// Supplies globally unique node ids
pub trait IdGenerator: fmt::Debug {
    fn next_id(&mut self) -> NodeId;
}

/// Supplies colors for new panes
pub trait ColorSource: fmt::Debug {
    fn next_color(&mut self) -> Color;
}

// ============================================================================
// Ids
// ============================================================================

/// Random v4 UUIDs from the operating system's entropy source
#[derive(Debug, Default, Clone, Copy)]
pub struct RandomIds;

impl IdGenerator for RandomIds {
    fn next_id(&mut self) -> NodeId {
        NodeId(Uuid::new_v4())
    }
}

/// v4 UUIDs drawn from a seeded generator, identical across runs
#[derive(Debug, Clone)]
pub struct SeededIds {
    rng: StdRng,
}

impl SeededIds {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl IdGenerator for SeededIds {
    fn next_id(&mut self) -> NodeId {
        let bytes: [u8; 16] = self.rng.gen();
        NodeId(Builder::from_random_bytes(bytes).into_uuid())
    }
}

/// Counts upward: 1, 2, 3, ...
#[derive(Debug, Clone)]
pub struct SequentialIds {
    next: u128,
}

impl SequentialIds {
    pub fn new() -> Self {
        Self::starting_at(1)
    }

    pub fn starting_at(first: u128) -> Self {
        Self { next: first }
    }
}

impl Default for SequentialIds {
    fn default() -> Self {
        Self::new()
    }
}

impl IdGenerator for SequentialIds {
    fn next_id(&mut self) -> NodeId {
        let id = NodeId::from_u128(self.next);
        self.next += 1;
        id
    }
}

// ============================================================================
// Colors
// ============================================================================

/// Random hue at a fixed saturation and lightness
#[derive(Debug, Clone)]
pub struct RandomHue {
    rng: StdRng,
    saturation: f32,
    lightness: f32,
}

impl RandomHue {
    pub fn new(saturation: f32, lightness: f32) -> Self {
        Self {
            rng: StdRng::from_entropy(),
            saturation,
            lightness,
        }
    }

    pub fn seeded(seed: u64, saturation: f32, lightness: f32) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            saturation,
            lightness,
        }
    }
}

impl ColorSource for RandomHue {
    fn next_color(&mut self) -> Color {
        let hue = self.rng.gen_range(0..360) as f32;
        Color::from_hsl(hue, self.saturation, self.lightness)
    }
}

/// Cycles through a fixed list of colors
#[derive(Debug, Clone)]
pub struct Palette {
    colors: Vec<Color>,
    next: usize,
}

impl Palette {
    /// Falls back to the default palette when `colors` is empty
    pub fn new(colors: Vec<Color>) -> Self {
        if colors.is_empty() {
            return Self::default();
        }
        Self { colors, next: 0 }
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            colors: [0.0, 60.0, 120.0, 180.0, 240.0, 300.0]
                .into_iter()
                .map(|hue| Color::from_hsl(hue, 0.7, 0.55))
                .collect(),
            next: 0,
        }
    }
}

impl ColorSource for Palette {
    fn next_color(&mut self) -> Color {
        let color = self.colors[self.next % self.colors.len()];
        self.next += 1;
        color
    }
}
