//! Twinkling starfield in the upper half of the sky.

use rand::Rng;
use yuletide_canvas::Surface;
use yuletide_core::{Viewport, palette};

use super::uniform;

/// Largest star radius in pixels.
pub const MAX_RADIUS: f32 = 1.2;

/// Slowest twinkle step per frame.
pub const MIN_TWINKLE_SPEED: f32 = 0.005;

/// Fastest twinkle step per frame (exclusive).
pub const MAX_TWINKLE_SPEED: f32 = 0.02;

/// A single twinkling point of light.
#[derive(Debug, Clone, PartialEq)]
pub struct Star {
    /// Horizontal centre in pixels.
    pub x: f32,
    /// Vertical centre in pixels.
    pub y: f32,
    /// Radius in pixels, below [`MAX_RADIUS`].
    pub radius: f32,
    /// Current opacity. Oscillates and may overshoot [0, 1] by one step.
    pub alpha: f32,
    /// Signed alpha increment per frame.
    pub twinkle_speed: f32,
}

impl Star {
    /// Place a star somewhere in the upper half of the viewport.
    pub fn random<R: Rng + ?Sized>(viewport: &Viewport, rng: &mut R) -> Self {
        Self {
            x: uniform(rng, 0.0, viewport.width_f32()),
            y: uniform(rng, 0.0, viewport.height_f32() * 0.5),
            radius: uniform(rng, 0.0, MAX_RADIUS),
            alpha: uniform(rng, 0.0, 1.0),
            twinkle_speed: uniform(rng, MIN_TWINKLE_SPEED, MAX_TWINKLE_SPEED),
        }
    }

    /// Advance the alpha oscillation by one step.
    ///
    /// The step is reflected, not clamped: once alpha leaves [0, 1] the
    /// direction flips and the next step brings it back.
    pub fn twinkle(&mut self) {
        self.alpha += self.twinkle_speed;
        if self.alpha > 1.0 || self.alpha < 0.0 {
            self.twinkle_speed = -self.twinkle_speed;
        }
    }

    /// Opacity used for rendering.
    pub fn opacity(&self) -> f32 {
        self.alpha.abs()
    }
}

/// Fixed-size collection of twinkling stars.
#[derive(Debug, Clone, Default)]
pub struct StarField {
    stars: Vec<Star>,
}

impl StarField {
    /// Scatter `count` stars over the upper half of the viewport.
    pub fn new<R: Rng + ?Sized>(count: usize, viewport: &Viewport, rng: &mut R) -> Self {
        let stars = (0..count).map(|_| Star::random(viewport, rng)).collect();
        Self { stars }
    }

    pub fn from_stars(stars: Vec<Star>) -> Self {
        Self { stars }
    }

    pub fn stars(&self) -> &[Star] {
        &self.stars
    }

    /// Twinkle every star and draw it as a white dot at its current opacity.
    pub fn update_and_draw<S: Surface + ?Sized>(&mut self, surface: &mut S) {
        for star in &mut self.stars {
            star.twinkle();
            surface.set_global_alpha(star.opacity());
            surface.set_fill(palette::WHITE.into());
            surface.fill_circle(star.x, star.y, star.radius);
        }
        surface.set_global_alpha(1.0);
    }
}
