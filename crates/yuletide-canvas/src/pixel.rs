//! RGB raster implementation of [`Surface`].

use std::f32::consts::PI;
use std::ops::Range;

use yuletide_core::{Rgb, palette};

use crate::fill::Fill;
use crate::surface::Surface;

/// An in-memory RGB pixel raster.
///
/// Shapes are sampled at pixel centres. Cleared pixels are black.
#[derive(Debug, Clone)]
pub struct PixelCanvas {
    width: u32,
    height: u32,
    pixels: Vec<Rgb>,
    fill: Fill,
    alpha: f32,
    /// Subpaths of the current path.
    path: Vec<Vec<(f32, f32)>>,
}

impl PixelCanvas {
    /// Create a cleared canvas of the given size.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![palette::BLACK; width as usize * height as usize],
            fill: Fill::Solid(palette::BLACK),
            alpha: 1.0,
            path: Vec::new(),
        }
    }

    /// Colour of the pixel at `(x, y)`, if inside the canvas.
    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgb> {
        if x < self.width && y < self.height {
            Some(self.pixels[self.index(x, y)])
        } else {
            None
        }
    }

    /// Pixels in row-major order.
    pub fn pixels(&self) -> &[Rgb] {
        &self.pixels
    }

    fn index(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }

    /// Blend the current fill into one pixel.
    fn paint(&mut self, x: u32, y: u32, alpha: f32) {
        let color = self.fill.color_at(x as f32 + 0.5, y as f32 + 0.5);
        let idx = self.index(x, y);
        self.pixels[idx] = color.over(self.pixels[idx], alpha);
    }

    fn paint_span(&mut self, row: u32, start: f32, end: f32) {
        for x in pixel_span(start, end, self.width) {
            self.paint(x, row, self.alpha);
        }
    }
}

/// Pixel indices whose centres lie in `[start, end)`, clamped to `[0, limit)`.
fn pixel_span(start: f32, end: f32, limit: u32) -> Range<u32> {
    let clamp = |v: f32| v.max(0.0).min(limit as f32) as u32;
    let first = clamp((start - 0.5).ceil());
    let last = clamp((end - 0.5).ceil());
    first..last.max(first)
}

impl Surface for PixelCanvas {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn resize(&mut self, width: u32, height: u32) {
        // Resizing resets all context state, as the HTML canvas does.
        *self = Self::new(width, height);
    }

    fn clear_rect(&mut self, x: f32, y: f32, width: f32, height: f32) {
        let (x0, x1) = (x.min(x + width), x.max(x + width));
        let (y0, y1) = (y.min(y + height), y.max(y + height));
        for row in pixel_span(y0, y1, self.height) {
            for col in pixel_span(x0, x1, self.width) {
                let idx = self.index(col, row);
                self.pixels[idx] = palette::BLACK;
            }
        }
    }

    fn set_fill(&mut self, fill: Fill) {
        self.fill = fill;
    }

    fn set_global_alpha(&mut self, alpha: f32) {
        self.alpha = if alpha.is_nan() { 1.0 } else { alpha.clamp(0.0, 1.0) };
    }

    fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32) {
        let (x0, x1) = (x.min(x + width), x.max(x + width));
        let (y0, y1) = (y.min(y + height), y.max(y + height));
        for row in pixel_span(y0, y1, self.height) {
            self.paint_span(row, x0, x1);
        }
    }

    fn fill_circle(&mut self, cx: f32, cy: f32, radius: f32) {
        if radius <= 0.0 || self.alpha <= 0.0 {
            return;
        }
        let r_sq = radius * radius;
        let mut covered = false;
        for row in pixel_span(cy - radius, cy + radius + 1.0, self.height) {
            let dy = row as f32 + 0.5 - cy;
            for col in pixel_span(cx - radius, cx + radius + 1.0, self.width) {
                let dx = col as f32 + 0.5 - cx;
                if dx * dx + dy * dy <= r_sq {
                    self.paint(col, row, self.alpha);
                    covered = true;
                }
            }
        }

        // Sub-pixel dots still show up, faded by the area they cover.
        if !covered && cx >= 0.0 && cy >= 0.0 {
            let (col, row) = (cx.floor() as u32, cy.floor() as u32);
            if col < self.width && row < self.height {
                let coverage = (PI * r_sq).min(1.0);
                self.paint(col, row, self.alpha * coverage);
            }
        }
    }

    fn begin_path(&mut self) {
        self.path.clear();
    }

    fn move_to(&mut self, x: f32, y: f32) {
        self.path.push(vec![(x, y)]);
    }

    fn line_to(&mut self, x: f32, y: f32) {
        match self.path.last_mut() {
            Some(subpath) => subpath.push((x, y)),
            None => self.move_to(x, y),
        }
    }

    fn close_path(&mut self) {
        // Drawing continues from the start of the closed subpath.
        if let Some(&start) = self.path.last().and_then(|subpath| subpath.first()) {
            self.path.push(vec![start]);
        }
    }

    fn fill_path(&mut self) {
        let edges: Vec<((f32, f32), (f32, f32))> = self
            .path
            .iter()
            .filter(|subpath| subpath.len() > 2)
            .flat_map(|subpath| {
                subpath
                    .iter()
                    .zip(subpath.iter().cycle().skip(1))
                    .map(|(a, b)| (*a, *b))
            })
            .collect();
        if edges.is_empty() {
            return;
        }

        let (min_y, max_y) = edges.iter().fold((f32::MAX, f32::MIN), |(lo, hi), (a, b)| {
            (lo.min(a.1).min(b.1), hi.max(a.1).max(b.1))
        });

        let mut crossings: Vec<(f32, i32)> = Vec::new();
        for row in pixel_span(min_y, max_y, self.height) {
            let yc = row as f32 + 0.5;
            crossings.clear();
            for &((x0, y0), (x1, y1)) in &edges {
                let direction = if y0 <= yc && yc < y1 {
                    1
                } else if y1 <= yc && yc < y0 {
                    -1
                } else {
                    continue;
                };
                let x = x0 + (yc - y0) / (y1 - y0) * (x1 - x0);
                crossings.push((x, direction));
            }
            crossings.sort_by(|a, b| a.0.total_cmp(&b.0));

            let mut winding = 0;
            for i in 0..crossings.len() {
                winding += crossings[i].1;
                if winding != 0
                    && let Some(next) = crossings.get(i + 1)
                {
                    let (start, end) = (crossings[i].0, next.0);
                    self.paint_span(row, start, end);
                }
            }
        }
    }
}
