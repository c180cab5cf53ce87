use egui::{Context, Pos2, Rect};

/// Pointer input in canvas coordinates (origin at the canvas top-left).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    /// Primary button pressed over the canvas
    Press(Pos2),
    /// Pointer moved over the canvas, with or without the button held
    Move(Pos2),
    /// Primary button released
    Release,
    /// Pointer left the canvas
    Leave,
}

/// Pointer state sampled once per frame.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PointerSnapshot {
    /// Pointer position in canvas coordinates, `None` if outside the canvas
    pub position: Option<Pos2>,
    /// Where the primary button went down this frame, if it did
    pub pressed_at: Option<Pos2>,
    /// Primary button went up this frame
    pub released: bool,
}

impl PointerSnapshot {
    /// Sample egui's pointer state relative to `canvas`.
    pub fn from_egui(ctx: &Context, canvas: Rect) -> Self {
        ctx.input(|input| {
            let local = |pos: Pos2| canvas.contains(pos).then(|| (pos - canvas.min).to_pos2());
            let position = input.pointer.latest_pos().and_then(local);
            let pressed_at = if input.pointer.primary_pressed() {
                input
                    .pointer
                    .press_origin()
                    .or(input.pointer.latest_pos())
                    .and_then(local)
            } else {
                None
            };
            Self {
                position,
                pressed_at,
                released: input.pointer.primary_released(),
            }
        })
    }
}

/// Turns per-frame [`PointerSnapshot`]s into [`PointerEvent`]s.
#[derive(Debug, Default)]
pub struct InputHandler {
    last_pointer_pos: Option<Pos2>,
    /// A press on the canvas has not been released yet
    button_down: bool,
}

impl InputHandler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Events for one frame, in the order they should be applied.
    pub fn process(&mut self, snapshot: PointerSnapshot) -> Vec<PointerEvent> {
        let mut events = Vec::new();

        if let Some(origin) = snapshot.pressed_at {
            if !self.button_down {
                events.push(PointerEvent::Press(origin));
                self.button_down = true;
                self.last_pointer_pos = Some(origin);
            }
        }

        match snapshot.position {
            Some(pos) if Some(pos) != self.last_pointer_pos => {
                events.push(PointerEvent::Move(pos));
                self.last_pointer_pos = Some(pos);
            }
            Some(_) => {}
            None => {
                if self.last_pointer_pos.take().is_some() {
                    events.push(PointerEvent::Leave);
                    // leaving ends the gesture just like a release
                    self.button_down = false;
                }
            }
        }

        if snapshot.released && self.button_down {
            events.push(PointerEvent::Release);
            self.button_down = false;
        }

        events
    }
}
