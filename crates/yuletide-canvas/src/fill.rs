//! Fill styles: solid colours and linear gradients.

use yuletide_core::Rgb;

/// Paint applied by fill operations.
#[derive(Debug, Clone, PartialEq)]
pub enum Fill {
    Solid(Rgb),
    LinearGradient(LinearGradient),
}

impl Fill {
    /// Colour of this fill at the given point.
    pub fn color_at(&self, x: f32, y: f32) -> Rgb {
        match self {
            Fill::Solid(color) => *color,
            Fill::LinearGradient(gradient) => gradient.color_at(x, y),
        }
    }
}

impl From<Rgb> for Fill {
    fn from(color: Rgb) -> Self {
        Fill::Solid(color)
    }
}

impl From<LinearGradient> for Fill {
    fn from(gradient: LinearGradient) -> Self {
        Fill::LinearGradient(gradient)
    }
}

/// A colour stop at `offset` in [0, 1] along the gradient axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GradientStop {
    pub offset: f32,
    pub color: Rgb,
}

/// A gradient along the axis from `from` to `to`.
#[derive(Debug, Clone, PartialEq)]
pub struct LinearGradient {
    pub from: (f32, f32),
    pub to: (f32, f32),
    stops: Vec<GradientStop>,
}

impl LinearGradient {
    pub fn new(from: (f32, f32), to: (f32, f32)) -> Self {
        Self {
            from,
            to,
            stops: Vec::new(),
        }
    }

    /// Vertical gradient from `top` to `bottom` spanning `height` pixels.
    pub fn vertical(height: f32, top: Rgb, bottom: Rgb) -> Self {
        Self::new((0.0, 0.0), (0.0, height))
            .with_stop(0.0, top)
            .with_stop(1.0, bottom)
    }

    /// Add a colour stop. Stops are kept ordered by offset.
    pub fn with_stop(mut self, offset: f32, color: Rgb) -> Self {
        let offset = offset.clamp(0.0, 1.0);
        let index = self.stops.partition_point(|s| s.offset <= offset);
        self.stops.insert(index, GradientStop { offset, color });
        self
    }

    pub fn stops(&self) -> &[GradientStop] {
        &self.stops
    }

    /// Colour at a point, projected onto the gradient axis.
    pub fn color_at(&self, x: f32, y: f32) -> Rgb {
        let (first, last) = match (self.stops.first(), self.stops.last()) {
            (Some(first), Some(last)) => (first, last),
            _ => return Rgb::default(),
        };

        let (dx, dy) = (self.to.0 - self.from.0, self.to.1 - self.from.1);
        let len_sq = dx * dx + dy * dy;
        // A degenerate axis paints the last stop, as the HTML canvas does.
        if len_sq <= f32::EPSILON {
            return last.color;
        }
        let t = (((x - self.from.0) * dx + (y - self.from.1) * dy) / len_sq).clamp(0.0, 1.0);

        if t <= first.offset {
            return first.color;
        }
        for pair in self.stops.windows(2) {
            let (lo, hi) = (pair[0], pair[1]);
            if t <= hi.offset {
                let span = hi.offset - lo.offset;
                if span <= f32::EPSILON {
                    return hi.color;
                }
                return lo.color.lerp(hi.color, (t - lo.offset) / span);
            }
        }
        last.color
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use yuletide_core::palette;

    #[test]
    fn test_fill_from_color_and_gradient() {
        assert_eq!(Fill::from(palette::RED), Fill::Solid(palette::RED));

        let gradient = LinearGradient::vertical(10.0, palette::SKY_TOP, palette::SKY_BOTTOM);
        let fill: Fill = gradient.clone().into();
        assert_eq!(fill, Fill::LinearGradient(gradient));
        assert_eq!(fill.color_at(0.0, 0.0), palette::SKY_TOP);
    }

    #[test]
    fn test_vertical_gradient_endpoints() {
        let gradient = LinearGradient::vertical(100.0, palette::SKY_TOP, palette::SKY_BOTTOM);
        assert_eq!(gradient.color_at(10.0, 0.0), palette::SKY_TOP);
        assert_eq!(gradient.color_at(10.0, 100.0), palette::SKY_BOTTOM);
        assert_eq!(gradient.color_at(10.0, -50.0), palette::SKY_TOP);
        assert_eq!(gradient.color_at(10.0, 500.0), palette::SKY_BOTTOM);
    }

    #[test]
    fn test_gradient_midpoint() {
        let gradient = LinearGradient::vertical(10.0, Rgb::new(0, 0, 0), Rgb::new(100, 200, 0));
        assert_eq!(gradient.color_at(0.0, 5.0), Rgb::new(50, 100, 0));
        // Horizontal position does not matter on a vertical axis.
        assert_eq!(gradient.color_at(999.0, 5.0), Rgb::new(50, 100, 0));
    }

    #[test]
    fn test_stops_sorted() {
        let gradient = LinearGradient::new((0.0, 0.0), (10.0, 0.0))
            .with_stop(1.0, palette::WHITE)
            .with_stop(0.0, palette::BLACK)
            .with_stop(0.5, palette::RED);
        let offsets: Vec<f32> = gradient.stops().iter().map(|s| s.offset).collect();
        assert_eq!(offsets, vec![0.0, 0.5, 1.0]);
        assert_eq!(gradient.color_at(5.0, 0.0), palette::RED);
    }

    #[test]
    fn test_empty_gradient() {
        let gradient = LinearGradient::new((0.0, 0.0), (0.0, 10.0));
        assert_eq!(gradient.color_at(0.0, 5.0), Rgb::default());
    }
}
