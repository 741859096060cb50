//! Coloured ornaments scattered over the tree.

use rand::Rng;
use yuletide_canvas::Surface;
use yuletide_core::{Rgb, palette};

use super::tree::Tree;
use super::uniform;

/// Smallest ornament radius in pixels.
pub const MIN_RADIUS: f32 = 3.0;
/// Largest ornament radius in pixels (exclusive).
pub const MAX_RADIUS: f32 = 6.0;

/// Share of the tree size that ornaments are scattered over.
const SPREAD: f32 = 0.8;

/// A bauble hung on the tree. Fixed once placed.
#[derive(Debug, Clone, PartialEq)]
pub struct Ornament {
    /// Horizontal centre in pixels.
    pub x: f32,
    /// Vertical centre in pixels.
    pub y: f32,
    /// Radius in pixels.
    pub radius: f32,
    /// Bauble colour, picked from the ornament palette.
    pub color: Rgb,
}

impl Ornament {
    /// Place an ornament in the region around `tree`, coloured from `colors`.
    pub fn random<R: Rng + ?Sized>(tree: &Tree, colors: &[Rgb], rng: &mut R) -> Self {
        let colors = if colors.is_empty() {
            &palette::ORNAMENTS[..]
        } else {
            colors
        };
        Self {
            x: tree.center_x + uniform(rng, -0.5, 0.5) * tree.width * SPREAD,
            y: tree.base_y - uniform(rng, 0.0, 1.0) * tree.height * SPREAD,
            radius: uniform(rng, MIN_RADIUS, MAX_RADIUS),
            color: colors[rng.gen_range(0..colors.len())],
        }
    }

    /// Whether the ornament sits inside the tree's coarse silhouette.
    pub fn is_visible(&self, tree: &Tree) -> bool {
        tree.holds(self.x, self.y)
    }
}

/// Fixed-size collection of static ornaments.
#[derive(Debug, Clone, Default)]
pub struct OrnamentField {
    ornaments: Vec<Ornament>,
}

impl OrnamentField {
    pub fn new<R: Rng + ?Sized>(count: usize, tree: &Tree, colors: &[Rgb], rng: &mut R) -> Self {
        let ornaments = (0..count)
            .map(|_| Ornament::random(tree, colors, rng))
            .collect();
        Self { ornaments }
    }

    pub fn from_ornaments(ornaments: Vec<Ornament>) -> Self {
        Self { ornaments }
    }

    pub fn ornaments(&self) -> &[Ornament] {
        &self.ornaments
    }

    /// Ornaments that pass the silhouette test for `tree`.
    pub fn visible<'a>(&'a self, tree: &'a Tree) -> impl Iterator<Item = &'a Ornament> + 'a {
        self.ornaments.iter().filter(move |o| o.is_visible(tree))
    }

    /// Draw the visible ornaments; the rest are skipped, not removed.
    pub fn draw<S: Surface + ?Sized>(&self, surface: &mut S, tree: &Tree) {
        for ornament in self.visible(tree) {
            surface.set_fill(ornament.color.into());
            surface.fill_circle(ornament.x, ornament.y, ornament.radius);
        }
    }
}
