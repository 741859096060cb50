//! Static tree geometry: stacked triangles, a trunk and a star topper.

use std::f32::consts::PI;

use yuletide_canvas::Surface;
use yuletide_core::{Rgb, Viewport, palette};

/// Number of stacked triangular segments.
pub const SEGMENTS: usize = 3;

/// Width lost per segment, as a fraction of the base width.
pub const SEGMENT_TAPER: f32 = 0.3;

/// Tree width never exceeds this many pixels.
pub const MAX_WIDTH: f32 = 200.0;

/// Topper spike count and radii.
pub const TOPPER_SPIKES: usize = 5;
pub const TOPPER_OUTER_RADIUS: f32 = 10.0;
pub const TOPPER_INNER_RADIUS: f32 = 4.5;

/// One isosceles triangle of the tree.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub left: (f32, f32),
    pub apex: (f32, f32),
    pub right: (f32, f32),
}

impl Segment {
    pub fn width(&self) -> f32 {
        self.right.0 - self.left.0
    }
}

/// The trunk rectangle below the tree base.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Trunk {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

/// Tree placement derived from the viewport size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tree {
    /// Horizontal centre of the tree.
    pub center_x: f32,
    /// Baseline the bottom segment stands on.
    pub base_y: f32,
    /// Width of the bottom segment.
    pub width: f32,
    /// Total height of the stacked segments.
    pub height: f32,
}

impl Tree {
    /// Centre the tree horizontally with its base at three quarters of the height.
    pub fn for_viewport(viewport: &Viewport) -> Self {
        let width = (viewport.width_f32() * 0.2).min(MAX_WIDTH);
        Self {
            center_x: viewport.width_f32() * 0.5,
            base_y: viewport.height_f32() * 0.75,
            width,
            height: width * 2.0,
        }
    }

    /// Y coordinate of the apex of the top segment.
    pub fn top_y(&self) -> f32 {
        self.base_y - self.height
    }

    /// Base width of segment `n`, counted from the bottom.
    pub fn segment_width(&self, n: usize) -> f32 {
        self.width * (1.0 - SEGMENT_TAPER * n as f32)
    }

    /// The triangles from bottom to top.
    pub fn segments(&self) -> [Segment; SEGMENTS] {
        let segment_height = self.height / SEGMENTS as f32;
        std::array::from_fn(|n| {
            let bottom_y = self.base_y - n as f32 * segment_height;
            let half = self.segment_width(n) * 0.5;
            Segment {
                left: (self.center_x - half, bottom_y),
                apex: (self.center_x, bottom_y - segment_height),
                right: (self.center_x + half, bottom_y),
            }
        })
    }

    pub fn trunk(&self) -> Trunk {
        let width = self.width * 0.1;
        Trunk {
            x: self.center_x - width * 0.5,
            y: self.base_y,
            width,
            height: self.height * 0.1,
        }
    }

    /// Centre of the topper star, one outer radius above the apex.
    pub fn topper_center(&self) -> (f32, f32) {
        (self.center_x, self.top_y() - TOPPER_OUTER_RADIUS)
    }

    /// Coarse "inside the silhouette" test used for ornaments.
    ///
    /// Strictly between apex and base vertically, and closer to the centre
    /// line than 60% of the tree width.
    pub fn holds(&self, x: f32, y: f32) -> bool {
        y < self.base_y && y > self.top_y() && (x - self.center_x).abs() < self.width * 0.6
    }

    pub fn draw<S: Surface + ?Sized>(&self, surface: &mut S) {
        surface.set_fill(palette::PINE.into());
        for segment in self.segments() {
            surface.begin_path();
            surface.move_to(segment.left.0, segment.left.1);
            surface.line_to(segment.apex.0, segment.apex.1);
            surface.line_to(segment.right.0, segment.right.1);
            surface.close_path();
            surface.fill_path();
        }

        let trunk = self.trunk();
        surface.set_fill(palette::BARK.into());
        surface.fill_rect(trunk.x, trunk.y, trunk.width, trunk.height);

        let (cx, cy) = self.topper_center();
        draw_star(
            surface,
            (cx, cy),
            TOPPER_SPIKES,
            TOPPER_OUTER_RADIUS,
            TOPPER_INNER_RADIUS,
            palette::YELLOW,
        );
    }
}

/// Vertices of an n-pointed star, alternating outer and inner radius.
///
/// Starts pointing straight up (angle 3π/2) and advances π/spikes per
/// vertex, yielding `2 * spikes` points.
pub fn star_polygon(
    center: (f32, f32),
    spikes: usize,
    outer_radius: f32,
    inner_radius: f32,
) -> Vec<(f32, f32)> {
    let (cx, cy) = center;
    let step = PI / spikes as f32;
    let mut rotation = PI / 2.0 * 3.0;
    let mut vertices = Vec::with_capacity(spikes * 2);
    for _ in 0..spikes {
        for radius in [outer_radius, inner_radius] {
            vertices.push((cx + rotation.cos() * radius, cy + rotation.sin() * radius));
            rotation += step;
        }
    }
    vertices
}

/// Fill an n-pointed star as a single closed polygon.
pub fn draw_star<S: Surface + ?Sized>(
    surface: &mut S,
    center: (f32, f32),
    spikes: usize,
    outer_radius: f32,
    inner_radius: f32,
    color: Rgb,
) {
    surface.set_fill(color.into());
    surface.begin_path();
    for (x, y) in star_polygon(center, spikes, outer_radius, inner_radius) {
        surface.line_to(x, y);
    }
    surface.close_path();
    surface.fill_path();
}

#[cfg(test)]
mod tests {
    use yuletide_canvas::{DrawOp, Fill, PixelCanvas, RecordingSurface};

    use super::*;

    fn approx(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-3
    }

    #[test]
    fn test_tree_for_viewport() {
        let tree = Tree::for_viewport(&Viewport::new(800, 600));
        assert_eq!(tree.center_x, 400.0);
        assert_eq!(tree.base_y, 450.0);
        assert_eq!(tree.width, 160.0);
        assert_eq!(tree.height, 320.0);
        assert_eq!(tree.top_y(), 130.0);

        // Wide viewports cap the width.
        let wide = Tree::for_viewport(&Viewport::new(3000, 1000));
        assert_eq!(wide.width, MAX_WIDTH);
        assert_eq!(wide.height, 400.0);
    }

    #[test]
    fn test_segment_widths_strictly_decrease() {
        let tree = Tree::for_viewport(&Viewport::new(800, 600));
        let segments = tree.segments();
        for n in 0..SEGMENTS - 1 {
            assert!(tree.segment_width(n) > tree.segment_width(n + 1));
            assert!(segments[n].width() > segments[n + 1].width());
        }
        assert!(approx(tree.segment_width(2), 160.0 * 0.4));
    }

    #[test]
    fn test_segments_stack_bottom_to_top() {
        let tree = Tree::for_viewport(&Viewport::new(800, 600));
        let segments = tree.segments();
        assert_eq!(segments[0].left.1, tree.base_y);
        for pair in segments.windows(2) {
            assert!(approx(pair[0].apex.1, pair[1].left.1));
        }
        assert!(approx(segments[2].apex.1, tree.top_y()));
        assert!(segments.iter().all(|s| s.apex.0 == tree.center_x));
    }

    #[test]
    fn test_trunk_below_base() {
        let tree = Tree::for_viewport(&Viewport::new(800, 600));
        let trunk = tree.trunk();
        assert_eq!(trunk.y, tree.base_y);
        assert!(approx(trunk.width, 16.0));
        assert!(approx(trunk.height, 32.0));
        assert!(approx(trunk.x + trunk.width / 2.0, tree.center_x));
    }

    #[test]
    fn test_star_polygon_vertices() {
        let vertices = star_polygon((50.0, 50.0), 5, 10.0, 4.5);
        assert_eq!(vertices.len(), 10);

        // First vertex points straight up.
        assert!(approx(vertices[0].0, 50.0));
        assert!(approx(vertices[0].1, 40.0));

        for (i, (x, y)) in vertices.iter().enumerate() {
            let r = ((x - 50.0).powi(2) + (y - 50.0).powi(2)).sqrt();
            let expected = if i % 2 == 0 { 10.0 } else { 4.5 };
            assert!(approx(r, expected));
        }
    }

    #[test]
    fn test_draw_star_path() {
        let mut surface = RecordingSurface::new(100, 100);
        draw_star(&mut surface, (50.0, 50.0), 5, 10.0, 4.5, palette::YELLOW);
        let ops = surface.ops();
        assert_eq!(ops[0], DrawOp::SetFill(Fill::Solid(palette::YELLOW)));
        assert_eq!(ops[1], DrawOp::BeginPath);
        assert_eq!(surface.count(|op| matches!(op, DrawOp::LineTo { .. })), 10);
        assert_eq!(ops[12], DrawOp::ClosePath);
        assert_eq!(ops[13], DrawOp::FillPath);
    }

    #[test]
    fn test_holds() {
        let tree = Tree::for_viewport(&Viewport::new(800, 600));
        assert!(tree.holds(400.0, 300.0));
        assert!(tree.holds(400.0 + 95.0, 300.0));
        assert!(!tree.holds(400.0 + 96.0, 300.0));
        assert!(!tree.holds(400.0, tree.base_y));
        assert!(!tree.holds(400.0, tree.top_y()));
        assert!(!tree.holds(400.0, 500.0));
    }

    #[test]
    fn test_draw_tree_pixels() {
        let viewport = Viewport::new(800, 600);
        let tree = Tree::for_viewport(&viewport);
        let mut canvas = PixelCanvas::new(800, 600);
        tree.draw(&mut canvas);

        assert_eq!(canvas.pixel(400, 440), Some(palette::PINE));
        assert_eq!(canvas.pixel(400, 460), Some(palette::BARK));
        assert_eq!(canvas.pixel(400, 120), Some(palette::YELLOW));
        assert_eq!(canvas.pixel(10, 10), Some(palette::BLACK));
    }
}
