//! RGB colour type and the named colours used by the scene.

use ratatui::style::Color;

/// An opaque 8-bit RGB colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    /// Construct a colour from its channels.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse a `#RRGGBB` or `#RGB` hex string. The leading `#` is optional.
    pub fn from_hex(hex: &str) -> Option<Self> {
        let digits = hex.trim().trim_start_matches('#');
        if !digits.is_ascii() {
            return None;
        }
        match digits.len() {
            6 => {
                let r = u8::from_str_radix(&digits[0..2], 16).ok()?;
                let g = u8::from_str_radix(&digits[2..4], 16).ok()?;
                let b = u8::from_str_radix(&digits[4..6], 16).ok()?;
                Some(Self::new(r, g, b))
            }
            3 => {
                // Each short digit expands to a doubled nibble (#FFF == #FFFFFF).
                let mut channels = [0u8; 3];
                for (i, ch) in digits.chars().enumerate() {
                    let v = ch.to_digit(16)? as u8;
                    channels[i] = v * 17;
                }
                Some(Self::new(channels[0], channels[1], channels[2]))
            }
            _ => None,
        }
    }

    /// Format as a `#RRGGBB` string.
    pub fn to_hex(self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }

    /// Linear interpolation towards `other`; `t` is clamped to [0, 1].
    pub fn lerp(self, other: Rgb, t: f32) -> Rgb {
        let t = t.clamp(0.0, 1.0);
        let mix = |a: u8, b: u8| (a as f32 + (b as f32 - a as f32) * t).round() as u8;
        Rgb::new(mix(self.r, other.r), mix(self.g, other.g), mix(self.b, other.b))
    }

    /// Paint `self` over `dst` with the given opacity.
    pub fn over(self, dst: Rgb, alpha: f32) -> Rgb {
        dst.lerp(self, alpha)
    }
}

impl From<Rgb> for Color {
    fn from(rgb: Rgb) -> Self {
        Color::Rgb(rgb.r, rgb.g, rgb.b)
    }
}

/// Named colours of the holiday scene.
pub mod palette {
    use super::Rgb;

    pub const BLACK: Rgb = Rgb::new(0x00, 0x00, 0x00);
    pub const WHITE: Rgb = Rgb::new(0xFF, 0xFF, 0xFF);

    /// Top stop of the night sky gradient.
    pub const SKY_TOP: Rgb = Rgb::new(0x00, 0x00, 0x10);
    /// Bottom stop of the night sky gradient.
    pub const SKY_BOTTOM: Rgb = Rgb::new(0x00, 0x10, 0x20);

    pub const PINE: Rgb = Rgb::new(0x0A, 0x53, 0x11);
    pub const BARK: Rgb = Rgb::new(0x6B, 0x4D, 0x1E);

    pub const RED: Rgb = Rgb::new(0xFF, 0x00, 0x00);
    pub const BLUE: Rgb = Rgb::new(0x00, 0x00, 0xFF);
    pub const YELLOW: Rgb = Rgb::new(0xFF, 0xFF, 0x00);
    pub const ORANGE: Rgb = Rgb::new(0xFF, 0xA5, 0x00);
    pub const MAGENTA: Rgb = Rgb::new(0xFF, 0x00, 0xFF);
    pub const CYAN: Rgb = Rgb::new(0x00, 0xFF, 0xFF);

    /// Default ornament colours.
    pub const ORNAMENTS: [Rgb; 6] = [RED, BLUE, YELLOW, ORANGE, MAGENTA, CYAN];
}
