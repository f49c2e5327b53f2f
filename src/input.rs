use egui::{Context, Pos2, Rect};

/// Pointer events delivered to the engine, in canvas coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Primary button was pressed over the canvas
    PointerDown { position: Pos2 },
    /// Pointer moved over the canvas, with or without the button held
    PointerMove { position: Pos2 },
    /// Primary button was released over the canvas
    PointerUp { position: Pos2 },
    /// Pointer left the canvas
    PointerLeave { last_known_position: Pos2 },
}

impl InputEvent {
    pub fn position(&self) -> Pos2 {
        match *self {
            InputEvent::PointerDown { position }
            | InputEvent::PointerMove { position }
            | InputEvent::PointerUp { position } => position,
            InputEvent::PointerLeave { last_known_position } => last_known_position,
        }
    }
}

/// Handles converting raw egui input into canvas `InputEvent`s
#[derive(Debug, Default)]
pub struct InputHandler {
    last_canvas_pos: Option<Pos2>,
}

/// The parts of one frame's pointer state the handler looks at
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PointerFrame {
    pub position: Option<Pos2>,
    pub pressed: bool,
    pub released: bool,
}

impl PointerFrame {
    pub fn from_context(ctx: &Context) -> Self {
        ctx.input(|i| Self {
            position: i.pointer.latest_pos(),
            pressed: i.pointer.primary_pressed(),
            released: i.pointer.primary_released(),
        })
    }
}

impl InputHandler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Translate this frame's pointer state into events for a canvas laid out
    /// at `canvas_rect`, scaled so the rect maps onto a `canvas_size` surface.
    ///
    /// Only `visible_rect`, the part of the canvas not clipped away by
    /// scrolling, counts as being over the canvas.
    pub fn process(
        &mut self,
        frame: PointerFrame,
        canvas_rect: Rect,
        visible_rect: Rect,
        canvas_size: [u32; 2],
    ) -> Vec<InputEvent> {
        let mut events = Vec::new();
        let visible_rect = visible_rect.intersect(canvas_rect);

        let canvas_pos = frame
            .position
            .filter(|pos| visible_rect.contains(*pos))
            .map(|pos| to_canvas(pos, canvas_rect, canvas_size));

        match canvas_pos {
            Some(position) => {
                if frame.pressed {
                    events.push(InputEvent::PointerDown { position });
                } else if self.last_canvas_pos != Some(position) {
                    events.push(InputEvent::PointerMove { position });
                }
                if frame.released {
                    events.push(InputEvent::PointerUp { position });
                }
            }
            None => {
                if let Some(last_known_position) = self.last_canvas_pos {
                    events.push(InputEvent::PointerLeave { last_known_position });
                }
            }
        }

        self.last_canvas_pos = canvas_pos;
        events
    }
}

fn to_canvas(pos: Pos2, canvas_rect: Rect, [width, height]: [u32; 2]) -> Pos2 {
    let offset = pos - canvas_rect.min;
    let scale_x = width as f32 / canvas_rect.width().max(f32::EPSILON);
    let scale_y = height as f32 / canvas_rect.height().max(f32::EPSILON);
    Pos2::new(offset.x * scale_x, offset.y * scale_y)
}
