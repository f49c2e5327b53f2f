//! The canvas drawing engine.
//!
//! `PaintEngine` owns the committed [`Surface`], the ephemeral [`Snapshot`]
//! used to redraw shape previews, the style state and the tool state machine.
//! The front end holds exactly one engine per canvas and feeds it pointer
//! events in delivery order.
//!
//! ```text
//! Idle --pointer down (in canvas)--> Drawing(session)     (Fill: flood fill, stay Idle)
//! Drawing --pointer move--> Drawing                       (render segment or preview)
//! Drawing --pointer up / leave--> Idle                    (commit shape, new snapshot)
//! ```

use std::path::Path;

use egui::{CursorIcon, Pos2};
use image::Rgba;
use log::{debug, info, warn};

use crate::config::PaintConfig;
use crate::error::{PaintError, PaintResult};
use crate::fill::flood_fill;
use crate::input::InputEvent;
use crate::raster::{Pen, Shape, stroke_segment, stroke_shape};
use crate::state::{EngineState, StrokeSession};
use crate::style::StyleState;
use crate::surface::{Snapshot, Surface};
use crate::tools::{Tool, ToolKind, cursor_for};

/// Pointer position and canvas size, for display only
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusReadout {
    pub pointer: Option<(i64, i64)>,
    pub width: u32,
    pub height: u32,
}

impl StatusReadout {
    pub fn coords_text(&self) -> String {
        let (x, y) = self.pointer.unwrap_or((0, 0));
        format!("{x}, {y}")
    }

    pub fn size_text(&self) -> String {
        format!("{} x {}", self.width, self.height)
    }
}

#[derive(Debug)]
pub struct PaintEngine {
    surface: Surface,
    snapshot: Option<Snapshot>,
    style: StyleState,
    /// `None` after an unrecognized tool selection: no drawing action
    tool: Option<Tool>,
    state: EngineState,
    pointer: Option<Pos2>,
}

impl PaintEngine {
    /// Create an engine with a transparent surface and default style
    pub fn new(width: u32, height: u32) -> PaintResult<Self> {
        Ok(Self {
            surface: Surface::new(width, height)?,
            snapshot: None,
            style: StyleState::default(),
            tool: Some(Tool::default()),
            state: EngineState::Idle,
            pointer: None,
        })
    }

    pub fn from_config(config: &PaintConfig) -> PaintResult<Self> {
        config.validate()?;
        let mut engine = Self::new(config.canvas_width, config.canvas_height)?;
        engine.style = config.initial_style()?;
        engine.tool = Some(config.default_tool);
        Ok(engine)
    }

    pub fn surface(&self) -> &Surface {
        &self.surface
    }

    pub fn snapshot(&self) -> Option<&Snapshot> {
        self.snapshot.as_ref()
    }

    pub fn style(&self) -> &StyleState {
        &self.style
    }

    pub fn state(&self) -> &EngineState {
        &self.state
    }

    pub fn is_drawing(&self) -> bool {
        self.state.is_drawing()
    }

    pub fn active_tool(&self) -> Option<Tool> {
        self.tool
    }

    pub fn cursor(&self) -> CursorIcon {
        cursor_for(self.tool)
    }

    pub fn set_color(&mut self, color: Rgba<u8>) {
        self.style.set_color(color);
    }

    pub fn set_width(&mut self, width: u32) -> PaintResult<()> {
        self.style.set_width(width)
    }

    /// Make `tool` the active tool. An in-progress session is aborted first.
    pub fn select_tool(&mut self, tool: Tool) {
        self.abort_session();
        if self.tool != Some(tool) {
            info!("Tool selected: {}", tool.name());
        }
        self.tool = Some(tool);
    }

    /// Select a tool by its name. Unknown names leave no drawing tool active.
    pub fn select_tool_by_name(&mut self, name: &str) -> PaintResult<Tool> {
        match Tool::from_name(name) {
            Ok(tool) => {
                self.select_tool(tool);
                Ok(tool)
            }
            Err(err) => {
                warn!("{err}, falling back to no tool");
                self.abort_session();
                self.tool = None;
                Err(err)
            }
        }
    }

    pub fn handle_input(&mut self, event: &InputEvent) {
        match *event {
            InputEvent::PointerDown { position } => self.pointer_down(position),
            InputEvent::PointerMove { position } => self.pointer_move(position),
            InputEvent::PointerUp { position } => self.pointer_up(position),
            InputEvent::PointerLeave { last_known_position } => {
                self.pointer_leave(last_known_position)
            }
        }
    }

    pub fn pointer_down(&mut self, pos: Pos2) {
        self.pointer = Some(pos);

        if self.state.is_drawing() {
            debug!("Pointer down while already drawing, ignored");
            return;
        }
        if !self.in_bounds(pos) {
            return;
        }
        let Some(tool) = self.tool else {
            return;
        };

        let (color, width) = (self.style.color(), self.style.width());
        match tool.kind() {
            ToolKind::Fill => {
                // One-shot, no session
                flood_fill(
                    &mut self.surface,
                    pos.x.floor() as i64,
                    pos.y.floor() as i64,
                    color,
                );
            }
            kind => {
                if kind == ToolKind::Shape {
                    self.snapshot = Some(self.surface.snapshot());
                }
                debug!("Begin {} session at {:?}", tool.name(), pos);
                self.state = EngineState::Drawing(StrokeSession::new(tool, pos, color, width));
            }
        }
    }

    pub fn pointer_move(&mut self, pos: Pos2) {
        self.pointer = Some(pos);

        let Some(session) = self.state.session_mut() else {
            return;
        };
        let (from, to) = session.advance(pos);
        let (tool, start) = (session.tool, session.start);
        let pen = Pen::new(session.color, session.width);

        match tool.kind() {
            ToolKind::Freehand => stroke_segment(&mut self.surface, from, to, &pen),
            ToolKind::Eraser => stroke_segment(&mut self.surface, from, to, &Pen::eraser(pen.width)),
            ToolKind::Shape => self.render_shape(tool, start, pos, &pen),
            ToolKind::Fill | ToolKind::Inert => {}
        }
    }

    pub fn pointer_up(&mut self, pos: Pos2) {
        self.pointer = Some(pos);
        self.end_session(pos);
    }

    /// Treated like pointer up at the last known position
    pub fn pointer_leave(&mut self, last_known: Pos2) {
        self.end_session(last_known);
        self.pointer = None;
    }

    fn end_session(&mut self, pos: Pos2) {
        let Some(session) = self.state.finish() else {
            return;
        };
        if session.tool.is_shape() {
            let pen = Pen::new(session.color, session.width);
            self.render_shape(session.tool, session.start, pos, &pen);
        }
        self.snapshot = Some(self.surface.snapshot());
        debug!("End {} session at {:?}", session.tool.name(), pos);
    }

    /// Drop an in-progress session, removing any shape preview
    fn abort_session(&mut self) {
        let Some(session) = self.state.finish() else {
            return;
        };
        if session.tool.is_shape() {
            if let Some(snapshot) = &self.snapshot {
                self.surface.restore(snapshot);
            }
        }
        self.snapshot = Some(self.surface.snapshot());
        warn!("Aborted in-progress {} session", session.tool.name());
    }

    /// Restore the surface from the snapshot, then draw the shape on top
    fn render_shape(&mut self, tool: Tool, start: Pos2, end: Pos2, pen: &Pen) {
        let Some(shape) = shape_for(tool, start, end) else {
            return;
        };
        if let Some(snapshot) = &self.snapshot {
            self.surface.restore(snapshot);
        }
        stroke_shape(&mut self.surface, &shape, pen);
    }

    fn in_bounds(&self, pos: Pos2) -> bool {
        let (width, height) = self.surface.dimensions();
        pos.x >= 0.0 && pos.y >= 0.0 && pos.x < width as f32 && pos.y < height as f32
    }

    /// Wipe the drawing. Confirmation is up to the caller.
    pub fn clear(&mut self) {
        self.abort_session();
        self.surface.clear();
        self.snapshot = Some(self.surface.snapshot());
        info!("Canvas cleared");
    }

    pub fn encode_png(&self) -> PaintResult<Vec<u8>> {
        self.surface.encode_png()
    }

    pub fn save_png(&self, path: &Path) -> PaintResult<()> {
        self.surface.save_png(path)
    }

    /// Undo is not supported
    pub fn undo(&mut self) -> PaintResult<()> {
        info!("Undo not implemented yet");
        Err(PaintError::UndoUnavailable)
    }

    pub fn status(&self) -> StatusReadout {
        StatusReadout {
            pointer: self
                .pointer
                .map(|p| (p.x.floor() as i64, p.y.floor() as i64)),
            width: self.surface.width(),
            height: self.surface.height(),
        }
    }
}

/// Geometry of a shape tool dragged from `start` to `end`
pub fn shape_for(tool: Tool, start: Pos2, end: Pos2) -> Option<Shape> {
    match tool {
        Tool::Line => Some(Shape::line(start, end)),
        Tool::Rectangle => Some(Shape::rectangle(start, end)),
        Tool::Circle => Some(Shape::circle(start, end)),
        _ => None,
    }
}
