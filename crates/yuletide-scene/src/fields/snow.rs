//! Falling snow with horizontal drift and recycling at the bottom edge.

use rand::Rng;
use yuletide_canvas::Surface;
use yuletide_core::{Viewport, palette};

use super::uniform;

/// Smallest flake radius in pixels.
pub const MIN_RADIUS: f32 = 1.0;
/// Largest flake radius in pixels (exclusive).
pub const MAX_RADIUS: f32 = 3.0;
/// Largest horizontal drift per frame, either direction.
pub const MAX_DRIFT: f32 = 0.25;
/// Slowest fall speed per frame.
pub const MIN_FALL_SPEED: f32 = 0.8;
/// Fastest fall speed per frame (exclusive).
pub const MAX_FALL_SPEED: f32 = 1.5;

/// State for a single snowflake.
#[derive(Debug, Clone, PartialEq)]
pub struct Snowflake {
    pub x: f32,
    pub y: f32,
    pub radius: f32,
    /// Horizontal drift per frame.
    pub dx: f32,
    /// Vertical fall per frame. Always positive.
    pub dy: f32,
}

impl Snowflake {
    /// A flake anywhere in the viewport.
    pub fn random<R: Rng + ?Sized>(viewport: &Viewport, rng: &mut R) -> Self {
        Self {
            x: uniform(rng, 0.0, viewport.width_f32()),
            y: uniform(rng, 0.0, viewport.height_f32()),
            radius: uniform(rng, MIN_RADIUS, MAX_RADIUS),
            dx: uniform(rng, -MAX_DRIFT, MAX_DRIFT),
            dy: uniform(rng, MIN_FALL_SPEED, MAX_FALL_SPEED),
        }
    }

    /// Move by one frame. Returns true if the flake passed the bottom edge
    /// and was recycled to just above the top at a new random column.
    pub fn advance<R: Rng + ?Sized>(&mut self, viewport: &Viewport, rng: &mut R) -> bool {
        self.x += self.dx;
        self.y += self.dy;
        if self.y > viewport.height_f32() {
            self.y = -self.radius;
            self.x = uniform(rng, 0.0, viewport.width_f32());
            return true;
        }
        false
    }
}

/// Fixed-size collection of snowflakes.
#[derive(Debug, Clone, Default)]
pub struct SnowField {
    flakes: Vec<Snowflake>,
}

impl SnowField {
    pub fn new<R: Rng + ?Sized>(count: usize, viewport: &Viewport, rng: &mut R) -> Self {
        let flakes = (0..count).map(|_| Snowflake::random(viewport, rng)).collect();
        Self { flakes }
    }

    pub fn from_flakes(flakes: Vec<Snowflake>) -> Self {
        Self { flakes }
    }

    pub fn flakes(&self) -> &[Snowflake] {
        &self.flakes
    }

    /// Draw every flake at its current position, then move it.
    ///
    /// Returns how many flakes were recycled this frame.
    pub fn update_and_draw<S, R>(&mut self, surface: &mut S, viewport: &Viewport, rng: &mut R) -> usize
    where
        S: Surface + ?Sized,
        R: Rng + ?Sized,
    {
        surface.set_fill(palette::WHITE.into());
        let mut recycled = 0;
        for flake in &mut self.flakes {
            surface.fill_circle(flake.x, flake.y, flake.radius);
            if flake.advance(viewport, rng) {
                recycled += 1;
            }
        }
        recycled
    }
}
