use egui::CursorIcon;
use serde::{Deserialize, Serialize};

use crate::error::{PaintError, PaintResult};

/// How a tool reacts to pointer input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolKind {
    /// Paints segments directly onto the surface as the pointer moves
    Freehand,
    /// Like freehand, but clears pixels to transparent
    Eraser,
    /// Previews from the snapshot, commits on release
    Shape,
    /// One-shot flood fill on pointer down
    Fill,
    /// Selectable, but has no drawing action
    Inert,
}

/// Enum representing all available tools
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tool {
    #[default]
    Pencil,
    Brush,
    Eraser,
    Line,
    Rectangle,
    Circle,
    Fill,
    Text,
}

impl Tool {
    pub const ALL: [Tool; 8] = [
        Tool::Pencil,
        Tool::Brush,
        Tool::Eraser,
        Tool::Line,
        Tool::Rectangle,
        Tool::Circle,
        Tool::Fill,
        Tool::Text,
    ];

    /// Return the name of the tool
    pub fn name(self) -> &'static str {
        match self {
            Self::Pencil => "pencil",
            Self::Brush => "brush",
            Self::Eraser => "eraser",
            Self::Line => "line",
            Self::Rectangle => "rectangle",
            Self::Circle => "circle",
            Self::Fill => "fill",
            Self::Text => "text",
        }
    }

    pub fn from_name(name: &str) -> PaintResult<Self> {
        Self::ALL
            .into_iter()
            .find(|tool| tool.name().eq_ignore_ascii_case(name.trim()))
            .ok_or_else(|| PaintError::UnknownTool(name.to_owned()))
    }

    pub fn kind(self) -> ToolKind {
        match self {
            Self::Pencil | Self::Brush => ToolKind::Freehand,
            Self::Eraser => ToolKind::Eraser,
            Self::Line | Self::Rectangle | Self::Circle => ToolKind::Shape,
            Self::Fill => ToolKind::Fill,
            Self::Text => ToolKind::Inert,
        }
    }

    pub fn is_shape(self) -> bool {
        self.kind() == ToolKind::Shape
    }

    /// Pointer cursor shown over the canvas while this tool is active
    pub fn cursor(self) -> CursorIcon {
        match self {
            Self::Eraser | Self::Fill => CursorIcon::Cell,
            Self::Text => CursorIcon::Text,
            _ => CursorIcon::Crosshair,
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Self::Pencil => "✏",
            Self::Brush => "🖌",
            Self::Eraser => "⌫",
            Self::Line => "📏",
            Self::Rectangle => "⬜",
            Self::Circle => "⭕",
            Self::Fill => "🪣",
            Self::Text => "📝",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Pencil => "Pencil",
            Self::Brush => "Brush",
            Self::Eraser => "Eraser",
            Self::Line => "Line",
            Self::Rectangle => "Rectangle",
            Self::Circle => "Circle",
            Self::Fill => "Fill",
            Self::Text => "Text",
        }
    }

    /// One-line help text
    pub fn description(self) -> &'static str {
        match self {
            Self::Pencil => "Draw freehand lines",
            Self::Brush => "Draw with a brush effect",
            Self::Eraser => "Erase parts of your drawing",
            Self::Line => "Draw straight lines",
            Self::Rectangle => "Draw rectangles",
            Self::Circle => "Draw circles",
            Self::Fill => "Fill an area with color",
            Self::Text => "Add text to your drawing",
        }
    }
}

/// Cursor for a possibly unrecognized tool selection
pub fn cursor_for(tool: Option<Tool>) -> CursorIcon {
    tool.map_or(CursorIcon::Default, Tool::cursor)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_round_trip() {
        for tool in Tool::ALL {
            assert_eq!(Tool::from_name(tool.name()).unwrap(), tool);
        }
        assert_eq!(Tool::from_name("Rectangle").unwrap(), Tool::Rectangle);
    }

    #[test]
    fn test_unknown_tool() {
        let err = Tool::from_name("spray").unwrap_err();
        assert!(matches!(err, PaintError::UnknownTool(ref name) if name == "spray"));
        assert_eq!(cursor_for(None), CursorIcon::Default);
    }

    #[test]
    fn test_cursor_hints() {
        assert_eq!(Tool::Pencil.cursor(), CursorIcon::Crosshair);
        assert_eq!(Tool::Circle.cursor(), CursorIcon::Crosshair);
        assert_eq!(Tool::Eraser.cursor(), CursorIcon::Cell);
        assert_eq!(Tool::Fill.cursor(), CursorIcon::Cell);
        assert_eq!(Tool::Text.cursor(), CursorIcon::Text);
    }

    #[test]
    fn test_serde_names_match() {
        let json = serde_json::to_string(&Tool::Rectangle).unwrap();
        assert_eq!(json, "\"rectangle\"");
    }
}
