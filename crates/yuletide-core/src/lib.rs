//! Core types for the yuletide holiday scene.
//!
//! Shared by the drawing surface, the scene and the configuration crates:
//! viewport dimensions, colours and the tunable scene settings.

mod color;
mod settings;
mod viewport;

pub use color::{Rgb, palette};
pub use settings::{AnimationSpeed, SceneSettings};
pub use viewport::Viewport;
