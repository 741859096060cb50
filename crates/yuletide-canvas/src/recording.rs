//! A [`Surface`] that records draw calls instead of rasterizing them.

use crate::fill::Fill;
use crate::surface::Surface;

/// One recorded call on a [`RecordingSurface`].
#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    Resize { width: u32, height: u32 },
    ClearRect { x: f32, y: f32, width: f32, height: f32 },
    SetFill(Fill),
    SetGlobalAlpha(f32),
    FillRect { x: f32, y: f32, width: f32, height: f32 },
    FillCircle { cx: f32, cy: f32, radius: f32 },
    BeginPath,
    MoveTo { x: f32, y: f32 },
    LineTo { x: f32, y: f32 },
    ClosePath,
    FillPath,
}

/// Mock surface used to observe what the scene draws.
#[derive(Debug, Clone, Default)]
pub struct RecordingSurface {
    width: u32,
    height: u32,
    ops: Vec<DrawOp>,
}

impl RecordingSurface {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            ops: Vec::new(),
        }
    }

    /// All calls recorded so far, oldest first.
    pub fn ops(&self) -> &[DrawOp] {
        &self.ops
    }

    /// Drain the recorded calls.
    pub fn take_ops(&mut self) -> Vec<DrawOp> {
        std::mem::take(&mut self.ops)
    }

    /// Number of recorded calls matching the predicate.
    pub fn count(&self, predicate: impl Fn(&DrawOp) -> bool) -> usize {
        self.ops.iter().filter(|op| predicate(op)).count()
    }
}

impl Surface for RecordingSurface {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn resize(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
        self.ops.push(DrawOp::Resize { width, height });
    }

    fn clear_rect(&mut self, x: f32, y: f32, width: f32, height: f32) {
        self.ops.push(DrawOp::ClearRect {
            x,
            y,
            width,
            height,
        });
    }

    fn set_fill(&mut self, fill: Fill) {
        self.ops.push(DrawOp::SetFill(fill));
    }

    fn set_global_alpha(&mut self, alpha: f32) {
        self.ops.push(DrawOp::SetGlobalAlpha(alpha));
    }

    fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32) {
        self.ops.push(DrawOp::FillRect {
            x,
            y,
            width,
            height,
        });
    }

    fn fill_circle(&mut self, cx: f32, cy: f32, radius: f32) {
        self.ops.push(DrawOp::FillCircle { cx, cy, radius });
    }

    fn begin_path(&mut self) {
        self.ops.push(DrawOp::BeginPath);
    }

    fn move_to(&mut self, x: f32, y: f32) {
        self.ops.push(DrawOp::MoveTo { x, y });
    }

    fn line_to(&mut self, x: f32, y: f32) {
        self.ops.push(DrawOp::LineTo { x, y });
    }

    fn close_path(&mut self) {
        self.ops.push(DrawOp::ClosePath);
    }

    fn fill_path(&mut self) {
        self.ops.push(DrawOp::FillPath);
    }
}
