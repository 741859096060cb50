//! Tunable scene settings.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::color::{Rgb, palette};

/// Frame pacing of the render loop.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnimationSpeed {
    Slow,
    #[default]
    Medium,
    Fast,
}

impl AnimationSpeed {
    /// Delay between two frame ticks.
    pub fn frame_interval(self) -> Duration {
        match self {
            AnimationSpeed::Slow => Duration::from_millis(50),
            AnimationSpeed::Medium => Duration::from_millis(33),
            AnimationSpeed::Fast => Duration::from_millis(16),
        }
    }

    /// Display name for logs.
    pub fn name(self) -> &'static str {
        match self {
            AnimationSpeed::Slow => "slow",
            AnimationSpeed::Medium => "medium",
            AnimationSpeed::Fast => "fast",
        }
    }
}

/// Entity counts and options used to build a scene.
#[derive(Debug, Clone, PartialEq)]
pub struct SceneSettings {
    /// Number of twinkling stars.
    pub star_count: usize,
    /// Number of falling snowflakes.
    pub snow_count: usize,
    /// Number of ornaments scattered around the tree.
    pub ornament_count: usize,
    /// Colours ornaments are drawn from. Never empty.
    pub ornament_colors: Vec<Rgb>,
    /// Recompute the tree and re-place ornaments when the viewport changes.
    pub relayout_on_resize: bool,
}

impl Default for SceneSettings {
    fn default() -> Self {
        Self {
            star_count: 200,
            snow_count: 300,
            ornament_count: 30,
            ornament_colors: palette::ORNAMENTS.to_vec(),
            relayout_on_resize: false,
        }
    }
}
