//! Immediate-mode 2D drawing surface for the yuletide scene.
//!
//! The [`Surface`] trait is the only output boundary of the scene. Two
//! implementations ship with the crate: [`PixelCanvas`], an RGB raster that
//! renders into a ratatui buffer with half-block cells, and
//! [`RecordingSurface`], which records every call for tests.

mod error;
mod fill;
mod pixel;
mod recording;
mod surface;
mod view;

pub use error::SurfaceError;
pub use fill::{Fill, GradientStop, LinearGradient};
pub use pixel::PixelCanvas;
pub use recording::{DrawOp, RecordingSurface};
pub use surface::Surface;
