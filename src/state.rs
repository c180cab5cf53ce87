use egui::Color32;

use crate::command::{CommitOutcome, History};
use crate::error::SketchResult;
use crate::event::{EventBus, EventHandler};
use crate::input::PointerEvent;
use crate::tools::{Tool, ToolPreview, ToolState};

/// Owns the history and the tool state and routes pointer input through
/// them. Everything a repaint needs is reachable from here.
#[derive(Debug)]
pub struct Sketchpad {
    history: History,
    tools: ToolState,
    events: EventBus,
}

impl Default for Sketchpad {
    fn default() -> Self {
        Self::new(Tool::pen(1.0))
    }
}

impl Sketchpad {
    pub fn new(tool: Tool) -> Self {
        let events = EventBus::new();
        Self {
            history: History::with_events(events.clone()),
            tools: ToolState::new(tool, events.clone()),
            events,
        }
    }

    /// Register a handler for every change that needs a repaint.
    pub fn subscribe(&self, handler: impl EventHandler + 'static) {
        self.events.subscribe(handler);
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn tools(&self) -> &ToolState {
        &self.tools
    }

    /// The preview the renderer should paint, if any.
    pub fn preview(&self) -> Option<&ToolPreview> {
        self.tools.preview()
    }

    pub fn handle(&mut self, event: PointerEvent) {
        match event {
            PointerEvent::Press(point) => {
                if self.history.is_active() {
                    log::warn!("pointer down at {point:?} while a gesture is in progress, ignored");
                    return;
                }
                self.tools.clear_preview();
                let command = self.tools.command_at(point);
                if let Err(err) = self.history.begin(command) {
                    log::warn!("{err}");
                }
            }
            PointerEvent::Move(point) => {
                let idle = !self.history.is_active();
                self.tools.track_pointer(point, idle);
                if !idle {
                    self.history.extend_active(point);
                }
            }
            PointerEvent::Release => {
                self.finish_gesture();
            }
            PointerEvent::Leave => {
                self.finish_gesture();
                self.tools.forget_pointer();
            }
        }
    }

    fn finish_gesture(&mut self) {
        if self.history.commit() == CommitOutcome::Committed {
            log::debug!("{} commands on canvas", self.history.len());
        }
    }

    pub fn select_tool(&mut self, tool: Tool) {
        let idle = !self.history.is_active();
        self.tools.select(tool, idle);
    }

    /// Select a sticker tool from free text. Invalid input keeps the
    /// current tool and is returned to the caller for reporting.
    pub fn select_custom_sticker(&mut self, input: &str) -> SketchResult<()> {
        let tool = Tool::custom_sticker(input)?;
        self.select_tool(tool);
        Ok(())
    }

    pub fn set_rotation(&mut self, degrees: f32) {
        let idle = !self.history.is_active();
        self.tools.set_rotation(degrees, idle);
    }

    pub fn set_color(&mut self, color: Color32) {
        self.tools.set_color(color);
    }

    pub fn undo(&mut self) -> bool {
        self.history.undo()
    }

    pub fn redo(&mut self) -> bool {
        self.history.redo()
    }

    pub fn clear_all(&mut self) {
        self.history.clear_all();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::pos2;

    #[test]
    fn test_press_while_drawing_is_ignored() {
        let mut pad = Sketchpad::default();
        pad.handle(PointerEvent::Press(pos2(1.0, 1.0)));
        pad.handle(PointerEvent::Press(pos2(9.0, 9.0)));
        pad.handle(PointerEvent::Move(pos2(2.0, 2.0)));
        pad.handle(PointerEvent::Release);

        let stroke = pad.history().committed()[0].as_stroke().unwrap();
        assert_eq!(stroke.points(), &[pos2(1.0, 1.0), pos2(2.0, 2.0)]);
    }

    #[test]
    fn test_leave_commits_and_clears_preview() {
        let mut pad = Sketchpad::default();
        pad.handle(PointerEvent::Move(pos2(1.0, 1.0)));
        pad.handle(PointerEvent::Press(pos2(1.0, 1.0)));
        pad.handle(PointerEvent::Move(pos2(4.0, 4.0)));
        pad.handle(PointerEvent::Leave);

        assert_eq!(pad.history().len(), 1);
        assert!(!pad.history().is_active());
        assert!(pad.preview().is_none());
        assert!(pad.tools().pointer().is_none());
    }

    #[test]
    fn test_no_preview_while_drawing() {
        let mut pad = Sketchpad::default();
        pad.handle(PointerEvent::Move(pos2(1.0, 1.0)));
        assert!(pad.preview().is_some());

        pad.handle(PointerEvent::Press(pos2(1.0, 1.0)));
        assert!(pad.preview().is_none());
        pad.handle(PointerEvent::Move(pos2(3.0, 1.0)));
        assert!(pad.preview().is_none());

        pad.handle(PointerEvent::Release);
        pad.handle(PointerEvent::Move(pos2(5.0, 1.0)));
        assert!(pad.preview().is_some());
    }

    #[test]
    fn test_invalid_custom_sticker_keeps_tool() {
        let mut pad = Sketchpad::new(Tool::sticker("⭐"));
        assert!(pad.select_custom_sticker("   ").is_err());
        assert_eq!(pad.tools().tool(), &Tool::sticker("⭐"));

        pad.select_custom_sticker("🦀").unwrap();
        assert_eq!(pad.tools().tool(), &Tool::sticker("🦀"));
    }
}
