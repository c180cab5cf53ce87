use egui::Pos2;

use super::Command;
use crate::error::{SketchError, SketchResult};
use crate::event::{EventBus, SketchEvent};

/// What [`History::commit`] did with the in-progress command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommitOutcome {
    /// Appended to the committed list
    Committed,
    /// Dropped because it was trivial (a stroke with no drag)
    Discarded,
    /// Nothing was in progress
    Idle,
}

/// The display list plus undo/redo state.
///
/// A command slot moves through `in progress -> committed -> undone` and
/// back to `committed` on redo. Any new commit clears the redo stack, so
/// history stays linear.
#[derive(Debug, Default)]
pub struct History {
    /// Commands on the canvas, oldest first
    committed: Vec<Command>,
    /// Undone commands; the last element is the next one to redo
    redo_stack: Vec<Command>,
    /// The gesture currently following the pointer
    active: Option<Command>,
    events: EventBus,
}

impl History {
    /// Creates an empty history with its own event bus.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty history that notifies `events` on every mutation.
    pub fn with_events(events: EventBus) -> Self {
        Self {
            events,
            ..Self::default()
        }
    }

    pub fn events(&self) -> &EventBus {
        &self.events
    }

    /// Start a gesture. Fails if another one is still in progress.
    pub fn begin(&mut self, command: Command) -> SketchResult<()> {
        if let Some(active) = &self.active {
            return Err(SketchError::GestureInProgress {
                active: active.kind(),
                new: command.kind(),
            });
        }
        log::debug!("begin {}", command.kind());
        self.active = Some(command);
        self.events.emit(SketchEvent::GestureStarted);
        Ok(())
    }

    /// Drag the in-progress command to `point`. Does nothing when idle.
    pub fn extend_active(&mut self, point: Pos2) {
        if let Some(active) = &mut self.active {
            active.drag_to(point);
            self.events.emit(SketchEvent::GestureUpdated);
        }
    }

    /// Finish the in-progress gesture.
    pub fn commit(&mut self) -> CommitOutcome {
        let Some(command) = self.active.take() else {
            return CommitOutcome::Idle;
        };

        if command.is_trivial() {
            log::debug!("discarding trivial {}", command.kind());
            self.events.emit(SketchEvent::Discarded);
            return CommitOutcome::Discarded;
        }

        log::debug!("commit {} (#{})", command.kind(), self.committed.len() + 1);
        self.committed.push(command);
        self.redo_stack.clear();
        self.events.emit(SketchEvent::Committed {
            count: self.committed.len(),
        });
        CommitOutcome::Committed
    }

    /// Move the newest committed command onto the redo stack.
    /// Returns false (and stays silent) if there is nothing to undo.
    pub fn undo(&mut self) -> bool {
        let Some(command) = self.committed.pop() else {
            return false;
        };
        log::debug!("undo {}", command.kind());
        self.redo_stack.push(command);
        self.events.emit(SketchEvent::Undone {
            count: self.committed.len(),
        });
        true
    }

    /// Move the most recently undone command back onto the canvas.
    /// Returns false (and stays silent) if there is nothing to redo.
    pub fn redo(&mut self) -> bool {
        let Some(command) = self.redo_stack.pop() else {
            return false;
        };
        log::debug!("redo {}", command.kind());
        self.committed.push(command);
        self.events.emit(SketchEvent::Redone {
            count: self.committed.len(),
        });
        true
    }

    /// Empty both the committed list and the redo stack. An in-progress
    /// gesture is left alone.
    pub fn clear_all(&mut self) {
        if self.committed.is_empty() && self.redo_stack.is_empty() {
            return;
        }
        log::debug!(
            "clear {} committed, {} redoable",
            self.committed.len(),
            self.redo_stack.len()
        );
        self.committed.clear();
        self.redo_stack.clear();
        self.events.emit(SketchEvent::Cleared);
    }

    pub fn committed(&self) -> &[Command] {
        &self.committed
    }

    /// Undone commands in the order they were undone.
    pub fn redo_stack(&self) -> &[Command] {
        &self.redo_stack
    }

    pub fn active(&self) -> Option<&Command> {
        self.active.as_ref()
    }

    pub fn is_active(&self) -> bool {
        self.active.is_some()
    }

    /// Number of committed commands.
    pub fn len(&self) -> usize {
        self.committed.len()
    }

    pub fn is_empty(&self) -> bool {
        self.committed.is_empty()
    }

    pub fn redo_len(&self) -> usize {
        self.redo_stack.len()
    }

    pub fn can_undo(&self) -> bool {
        !self.committed.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::{StickerMark, Stroke};
    use egui::pos2;

    fn stroke(x: f32) -> Command {
        let mut stroke = Stroke::at(x, 0.0);
        stroke.extend(pos2(x, 10.0));
        stroke.into()
    }

    fn commit(history: &mut History, command: Command) {
        history.begin(command).unwrap();
        assert_eq!(history.commit(), CommitOutcome::Committed);
    }

    #[test]
    fn test_begin_while_active_is_rejected() {
        let mut history = History::new();
        history.begin(stroke(1.0)).unwrap();

        let err = history
            .begin(StickerMark::new(Pos2::ZERO, "⭐", 0.0).into())
            .unwrap_err();
        assert!(matches!(
            err,
            SketchError::GestureInProgress {
                active: "stroke",
                new: "sticker"
            }
        ));
        // the original gesture survives
        assert_eq!(history.active(), Some(&stroke(1.0)));
    }

    #[test]
    fn test_extend_without_gesture_is_noop() {
        let mut history = History::new();
        history.extend_active(pos2(3.0, 3.0));
        assert!(!history.is_active());
        assert!(history.is_empty());
    }

    #[test]
    fn test_commit_without_gesture_is_idle() {
        let mut history = History::new();
        assert_eq!(history.commit(), CommitOutcome::Idle);
    }

    #[test]
    fn test_trivial_stroke_is_discarded_and_keeps_redo() {
        let mut history = History::new();
        commit(&mut history, stroke(1.0));
        history.undo();

        history.begin(Stroke::at(5.0, 5.0).into()).unwrap();
        assert_eq!(history.commit(), CommitOutcome::Discarded);

        assert!(history.is_empty());
        assert_eq!(history.redo_len(), 1);
        assert!(!history.is_active());
    }

    #[test]
    fn test_undo_redo_on_empty_is_silent() {
        let mut history = History::new();
        assert!(!history.undo());
        assert!(!history.redo());
        history.clear_all();
        assert!(!history.can_undo());
        assert!(!history.can_redo());
    }

    #[test]
    fn test_clear_leaves_active_gesture() {
        let mut history = History::new();
        commit(&mut history, stroke(1.0));
        history.begin(stroke(2.0)).unwrap();

        history.clear_all();

        assert!(history.is_empty());
        assert_eq!(history.active(), Some(&stroke(2.0)));
    }
}
