//! Terminal presentation of a [`PixelCanvas`].

use ratatui::{buffer::Buffer, layout::Rect, widgets::Widget};

use crate::pixel::PixelCanvas;
use crate::surface::Surface;

/// Upper half block: foreground paints the top pixel, background the bottom one.
const HALF_BLOCK: char = '▀';

impl Widget for &PixelCanvas {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let cols = u32::from(area.width).min(self.width());
        let rows = u32::from(area.height).min(self.height().div_ceil(2));

        for row in 0..rows {
            for col in 0..cols {
                let Some(top) = self.pixel(col, row * 2) else {
                    continue;
                };
                let bottom = self.pixel(col, row * 2 + 1).unwrap_or(top);
                let position = (area.x + col as u16, area.y + row as u16);
                if let Some(cell) = buf.cell_mut(position) {
                    cell.set_char(HALF_BLOCK).set_fg(top.into()).set_bg(bottom.into());
                }
            }
        }
    }
}
