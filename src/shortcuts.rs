//! Keyboard shortcuts for the history and export actions.

use egui::{Context, Key, KeyboardShortcut, Modifiers};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Undo,
    Redo,
    Export,
}

/// Checked in order, so the shifted variants win over plain Cmd+Z.
pub const SHORTCUTS: [(KeyboardShortcut, Action); 4] = [
    (
        KeyboardShortcut::new(Modifiers::COMMAND.plus(Modifiers::SHIFT), Key::Z),
        Action::Redo,
    ),
    (KeyboardShortcut::new(Modifiers::COMMAND, Key::Y), Action::Redo),
    (KeyboardShortcut::new(Modifiers::COMMAND, Key::Z), Action::Undo),
    (KeyboardShortcut::new(Modifiers::COMMAND, Key::E), Action::Export),
];

/// Consume the first matching shortcut pressed this frame. Text fields keep
/// their own undo, so nothing is consumed while one has focus.
pub fn pressed_action(ctx: &Context) -> Option<Action> {
    if ctx.wants_keyboard_input() {
        return None;
    }
    ctx.input_mut(|input| {
        SHORTCUTS
            .iter()
            .find(|(shortcut, _)| input.consume_shortcut(shortcut))
            .map(|(_, action)| *action)
    })
}

/// Human-readable label, e.g. "Ctrl+Shift+Z".
pub fn label(action: Action, ctx: &Context) -> String {
    SHORTCUTS
        .iter()
        .find(|(_, a)| *a == action)
        .map(|(shortcut, _)| ctx.format_shortcut(shortcut))
        .unwrap_or_default()
}
