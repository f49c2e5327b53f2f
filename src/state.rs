use egui::Pos2;
use image::Rgba;

use crate::tools::Tool;

/// Live state of one pointer-down to pointer-up interaction
#[derive(Debug, Clone, PartialEq)]
pub struct StrokeSession {
    pub tool: Tool,
    /// Where the pointer went down. Anchor for shape tools.
    pub start: Pos2,
    /// Previous point, the tail of the next freehand segment
    pub last: Pos2,
    pub current: Pos2,
    pub color: Rgba<u8>,
    pub width: u32,
}

impl StrokeSession {
    pub fn new(tool: Tool, start: Pos2, color: Rgba<u8>, width: u32) -> Self {
        Self {
            tool,
            start,
            last: start,
            current: start,
            color,
            width,
        }
    }

    /// Record a pointer move, returning the segment it travelled
    pub fn advance(&mut self, pos: Pos2) -> (Pos2, Pos2) {
        self.last = self.current;
        self.current = pos;
        (self.last, self.current)
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub enum EngineState {
    #[default]
    Idle,
    Drawing(StrokeSession),
}

impl EngineState {
    pub fn session_mut(&mut self) -> Option<&mut StrokeSession> {
        match self {
            Self::Drawing(session) => Some(session),
            Self::Idle => None,
        }
    }

    pub fn is_drawing(&self) -> bool {
        matches!(self, Self::Drawing(_))
    }

    /// End the session, if any, returning it
    pub fn finish(&mut self) -> Option<StrokeSession> {
        match std::mem::take(self) {
            Self::Drawing(session) => Some(session),
            Self::Idle => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Idle => "Idle",
            Self::Drawing(_) => "Drawing",
        }
    }
}
