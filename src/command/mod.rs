mod history;

use egui::Pos2;

use crate::element::{Drawable, StickerMark, Stroke};
use crate::surface::Surface;

pub use history::{CommitOutcome, History};

/// An undoable item in the display list.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Stroke(Stroke),
    Sticker(StickerMark),
}

impl Command {
    /// Feed a pointer drag to the command: strokes grow a new point,
    /// stickers jump to it.
    pub fn drag_to(&mut self, point: Pos2) {
        match self {
            Command::Stroke(stroke) => stroke.extend(point),
            Command::Sticker(mark) => mark.reposition(point),
        }
    }

    /// True if committing this command would add nothing visible worth
    /// undoing. A click without drag still places a sticker.
    pub fn is_trivial(&self) -> bool {
        match self {
            Command::Stroke(stroke) => stroke.is_trivial(),
            Command::Sticker(_) => false,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Command::Stroke(_) => "stroke",
            Command::Sticker(_) => "sticker",
        }
    }

    pub fn as_stroke(&self) -> Option<&Stroke> {
        match self {
            Command::Stroke(stroke) => Some(stroke),
            _ => None,
        }
    }

    pub fn as_sticker(&self) -> Option<&StickerMark> {
        match self {
            Command::Sticker(mark) => Some(mark),
            _ => None,
        }
    }
}

impl Drawable for Command {
    fn render(&self, surface: &mut dyn Surface) {
        match self {
            Command::Stroke(stroke) => stroke.render(surface),
            Command::Sticker(mark) => mark.render(surface),
        }
    }
}

impl From<Stroke> for Command {
    fn from(stroke: Stroke) -> Self {
        Command::Stroke(stroke)
    }
}

impl From<StickerMark> for Command {
    fn from(mark: StickerMark) -> Self {
        Command::Sticker(mark)
    }
}
