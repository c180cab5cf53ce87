/// Something visible changed and the canvas needs a repaint.
///
/// Exactly one event is emitted per mutating operation; operations that
/// turn out to be no-ops emit nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SketchEvent {
    /// A command became the in-progress gesture
    GestureStarted,
    /// The in-progress command was extended or moved
    GestureUpdated,
    /// The in-progress command moved into the committed list
    Committed { count: usize },
    /// The in-progress command was too small to keep and was dropped
    Discarded,
    Undone { count: usize },
    Redone { count: usize },
    Cleared,
    ToolChanged,
    PreviewChanged,
}
