//! The drawing surface trait.

use crate::fill::Fill;

/// A 2D immediate-mode drawing context, modelled on the HTML canvas.
///
/// Coordinates are device pixels with the origin at the top-left corner.
pub trait Surface {
    /// Current width in device pixels.
    fn width(&self) -> u32;

    /// Current height in device pixels.
    fn height(&self) -> u32;

    /// Change the backing dimensions. Existing content is discarded.
    fn resize(&mut self, width: u32, height: u32);

    /// Reset a rectangular region to transparent black.
    fn clear_rect(&mut self, x: f32, y: f32, width: f32, height: f32);

    /// Set the paint used by subsequent fill operations.
    fn set_fill(&mut self, fill: Fill);

    /// Set the opacity applied to subsequent fills. Clamped to [0, 1].
    fn set_global_alpha(&mut self, alpha: f32);

    /// Fill an axis-aligned rectangle.
    fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32);

    /// Fill a full circle.
    fn fill_circle(&mut self, cx: f32, cy: f32, radius: f32);

    /// Discard the current path.
    fn begin_path(&mut self);

    /// Start a new subpath at the given point.
    fn move_to(&mut self, x: f32, y: f32);

    /// Add a straight segment. On an empty subpath this acts like [`Surface::move_to`].
    fn line_to(&mut self, x: f32, y: f32);

    /// Close the current subpath back to its first point.
    fn close_path(&mut self);

    /// Fill the current path using the nonzero winding rule.
    fn fill_path(&mut self);
}
