use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{PaintError, PaintResult};
use crate::style::{StyleState, parse_hex_color};
use crate::tools::Tool;

/// Startup configuration for the paint engine and its front end.
///
/// Every field has a default so partial JSON files are accepted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaintConfig {
    pub canvas_width: u32,
    pub canvas_height: u32,
    pub default_tool: Tool,
    /// `#RRGGBB`
    pub default_color: String,
    pub default_stroke_width: u32,
    /// Widths offered by the width selector
    pub stroke_width_presets: Vec<u32>,
    /// Where Save writes the PNG
    pub export_path: PathBuf,
}

impl Default for PaintConfig {
    fn default() -> Self {
        Self {
            canvas_width: 800,
            canvas_height: 600,
            default_tool: Tool::Pencil,
            default_color: "#000000".to_owned(),
            default_stroke_width: 2,
            stroke_width_presets: vec![1, 2, 4, 8, 16],
            export_path: PathBuf::from("drawing.png"),
        }
    }
}

impl PaintConfig {
    pub fn from_json_str(json: &str) -> PaintResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> PaintResult<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    pub fn validate(&self) -> PaintResult<()> {
        if self.canvas_width == 0 || self.canvas_height == 0 {
            return Err(PaintError::InvalidDimensions {
                width: self.canvas_width,
                height: self.canvas_height,
            });
        }
        if self.stroke_width_presets.contains(&0) {
            return Err(PaintError::InvalidStrokeWidth);
        }
        self.initial_style().map(|_| ())
    }

    /// The style state the engine starts with
    pub fn initial_style(&self) -> PaintResult<StyleState> {
        StyleState::new(parse_hex_color(&self.default_color)?, self.default_stroke_width)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    #[test]
    fn test_default_canvas_is_800_by_600() {
        let config = PaintConfig::default();
        assert_eq!((config.canvas_width, config.canvas_height), (800, 600));
        assert_eq!(config.default_tool, Tool::Pencil);
        assert!(config.validate().is_ok());

        let style = config.initial_style().unwrap();
        assert_eq!(style.color(), Rgba([0, 0, 0, 255]));
        assert_eq!(style.width(), 2);
    }

    #[test]
    fn test_partial_json() {
        let config = PaintConfig::from_json_str(
            r##"{ "canvas_width": 320, "default_tool": "fill", "default_color": "#FF0000" }"##,
        )
        .unwrap();
        assert_eq!(config.canvas_width, 320);
        assert_eq!(config.canvas_height, 600);
        assert_eq!(config.default_tool, Tool::Fill);
        assert_eq!(config.initial_style().unwrap().color(), Rgba([255, 0, 0, 255]));
    }

    #[test]
    fn test_invalid_configs() {
        assert!(matches!(
            PaintConfig::from_json_str(r#"{ "canvas_height": 0 }"#),
            Err(PaintError::InvalidDimensions { .. })
        ));
        assert!(matches!(
            PaintConfig::from_json_str(r#"{ "default_stroke_width": 0 }"#),
            Err(PaintError::InvalidStrokeWidth)
        ));
        assert!(matches!(
            PaintConfig::from_json_str(r#"{ "default_color": "red" }"#),
            Err(PaintError::InvalidColor(_))
        ));
        assert!(matches!(
            PaintConfig::from_json_str(r#"{ "default_tool": "spray" }"#),
            Err(PaintError::Config(_))
        ));
    }

    #[test]
    fn test_load_missing_file() {
        let err = PaintConfig::load(Path::new("/definitely/not/here.json")).unwrap_err();
        assert!(matches!(err, PaintError::Io(_)));
    }
}
