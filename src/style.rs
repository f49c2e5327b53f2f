use image::Rgba;

use crate::error::{PaintError, PaintResult};

pub const DEFAULT_COLOR: Rgba<u8> = Rgba([0, 0, 0, 255]);
pub const DEFAULT_STROKE_WIDTH: u32 = 2;

/// Current color and stroke width, read by every drawing operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StyleState {
    color: Rgba<u8>,
    width: u32,
}

impl Default for StyleState {
    fn default() -> Self {
        Self {
            color: DEFAULT_COLOR,
            width: DEFAULT_STROKE_WIDTH,
        }
    }
}

impl StyleState {
    pub fn new(color: Rgba<u8>, width: u32) -> PaintResult<Self> {
        if width == 0 {
            return Err(PaintError::InvalidStrokeWidth);
        }
        Ok(Self { color, width })
    }

    pub fn color(&self) -> Rgba<u8> {
        self.color
    }

    pub fn set_color(&mut self, color: Rgba<u8>) {
        self.color = color;
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn set_width(&mut self, width: u32) -> PaintResult<()> {
        if width == 0 {
            return Err(PaintError::InvalidStrokeWidth);
        }
        self.width = width;
        Ok(())
    }
}

/// Parse a `#RRGGBB` or `#RRGGBBAA` color as produced by HTML color inputs.
pub fn parse_hex_color(text: &str) -> PaintResult<Rgba<u8>> {
    let invalid = || PaintError::InvalidColor(text.to_owned());

    let hex = text.trim().strip_prefix('#').ok_or_else(invalid)?;
    if !(hex.len() == 6 || hex.len() == 8) || !hex.is_ascii() {
        return Err(invalid());
    }

    let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| invalid());
    let alpha = if hex.len() == 8 { channel(6)? } else { 255 };

    Ok(Rgba([channel(0)?, channel(2)?, channel(4)?, alpha]))
}

/// Format a color as `#RRGGBB`, appending the alpha byte only when it is not opaque.
pub fn format_hex_color(color: Rgba<u8>) -> String {
    let [r, g, b, a] = color.0;
    if a == 255 {
        format!("#{r:02X}{g:02X}{b:02X}")
    } else {
        format!("#{r:02X}{g:02X}{b:02X}{a:02X}")
    }
}
