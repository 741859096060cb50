//! Viewport dimensions in device pixels.

/// Current size of the drawing surface, in device pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    /// Terminal cells hold two vertically stacked pixels each.
    pub const PIXELS_PER_ROW: u32 = 2;

    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Viewport covering a terminal area of `cols` x `rows` cells.
    pub fn from_cells(cols: u16, rows: u16) -> Self {
        Self::new(u32::from(cols), u32::from(rows) * Self::PIXELS_PER_ROW)
    }

    pub fn width_f32(&self) -> f32 {
        self.width as f32
    }

    pub fn height_f32(&self) -> f32 {
        self.height as f32
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_cells() {
        let viewport = Viewport::from_cells(80, 24);
        assert_eq!(viewport, Viewport::new(80, 48));
        assert!(!viewport.is_empty());
        assert!(Viewport::from_cells(0, 24).is_empty());
    }
}
