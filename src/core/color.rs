use nalgebra::Vector4;
use thiserror::Error;

/**
 * A single palette entry: normalized RGBA channels, each on [0, 1].
 * Constructed from hex strings (`#rgb`, `#rrggbb`, `#rrggbbaa`) or raw
 * channel values, and converted to `image` pixels only at rasterization
 * time so that interpolation happens in floating point.
 */
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    channels: Vector4<f32>, // [red, green, blue, alpha]
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ColorParseError {
    #[error("color string must start with '#': \"{0}\"")]
    MissingHashPrefix(String),
    #[error("color string must have 3, 6, or 8 hex digits: \"{0}\"")]
    UnsupportedLength(String),
    #[error("color string contains invalid hex digits: \"{0}\"")]
    InvalidHexDigit(String),
}

impl Color {
    pub fn new(red: f32, green: f32, blue: f32, alpha: f32) -> Color {
        Color {
            channels: Vector4::new(
                red.clamp(0.0, 1.0),
                green.clamp(0.0, 1.0),
                blue.clamp(0.0, 1.0),
                alpha.clamp(0.0, 1.0),
            ),
        }
    }

    pub fn from_rgba8(red: u8, green: u8, blue: u8, alpha: u8) -> Color {
        const SCALE: f32 = 1.0 / 255.0;
        Color::new(
            SCALE * (red as f32),
            SCALE * (green as f32),
            SCALE * (blue as f32),
            SCALE * (alpha as f32),
        )
    }

    /// Parses `#rgb`, `#rrggbb`, and `#rrggbbaa` (case-insensitive).
    pub fn from_hex(code: &str) -> Result<Color, ColorParseError> {
        let digits = code
            .strip_prefix('#')
            .ok_or_else(|| ColorParseError::MissingHashPrefix(code.to_owned()))?;
        if !digits.is_ascii() {
            return Err(ColorParseError::InvalidHexDigit(code.to_owned()));
        }

        let parse_pair = |pair: &str| -> Result<u8, ColorParseError> {
            u8::from_str_radix(pair, 16)
                .map_err(|_| ColorParseError::InvalidHexDigit(code.to_owned()))
        };

        match digits.len() {
            3 => {
                // Shorthand: each digit doubles, e.g. "#1af" -> "#11aaff".
                let mut expanded = String::with_capacity(6);
                for ch in digits.chars() {
                    expanded.push(ch);
                    expanded.push(ch);
                }
                Ok(Color::from_rgba8(
                    parse_pair(&expanded[0..2])?,
                    parse_pair(&expanded[2..4])?,
                    parse_pair(&expanded[4..6])?,
                    u8::MAX,
                ))
            }
            6 => Ok(Color::from_rgba8(
                parse_pair(&digits[0..2])?,
                parse_pair(&digits[2..4])?,
                parse_pair(&digits[4..6])?,
                u8::MAX,
            )),
            8 => Ok(Color::from_rgba8(
                parse_pair(&digits[0..2])?,
                parse_pair(&digits[2..4])?,
                parse_pair(&digits[4..6])?,
                parse_pair(&digits[6..8])?,
            )),
            _ => Err(ColorParseError::UnsupportedLength(code.to_owned())),
        }
    }

    pub fn red(&self) -> f32 {
        self.channels[0]
    }

    pub fn green(&self) -> f32 {
        self.channels[1]
    }

    pub fn blue(&self) -> f32 {
        self.channels[2]
    }

    pub fn alpha(&self) -> f32 {
        self.channels[3]
    }

    pub fn pixel(&self) -> image::Rgba<u8> {
        let quantize = |channel: f32| -> u8 { (channel * 255.0).round().clamp(0.0, 255.0) as u8 };
        image::Rgba([
            quantize(self.channels[0]),
            quantize(self.channels[1]),
            quantize(self.channels[2]),
            quantize(self.channels[3]),
        ])
    }

    /// Lowercase hex code; the alpha pair is emitted only when not fully opaque.
    pub fn to_hex(&self) -> String {
        let image::Rgba([red, green, blue, alpha]) = self.pixel();
        if alpha == u8::MAX {
            format!("#{:02x}{:02x}{:02x}", red, green, blue)
        } else {
            format!("#{:02x}{:02x}{:02x}{:02x}", red, green, blue, alpha)
        }
    }

    /// Linear interpolation: self * (1 - alpha) + other * alpha
    pub fn lerp(&self, other: &Color, alpha: f32) -> Color {
        let channels = self.channels + (other.channels - self.channels) * alpha;
        Color { channels }
    }
}
