use egui::{Color32, Pos2};

use crate::command::Command;
use crate::element::{StickerMark, Stroke};
use crate::element::sticker::normalize_degrees;
use crate::error::{SketchError, SketchResult};
use crate::event::{EventBus, SketchEvent};

mod preview;
pub use preview::{PREVIEW_ALPHA, ToolPreview};

/// Longest custom glyph accepted, in chars. Enough for ZWJ emoji sequences.
pub const MAX_GLYPH_CHARS: usize = 16;

/// The tools a user can pick from. Exactly one is active at a time.
#[derive(Debug, Clone, PartialEq)]
pub enum Tool {
    Pen { thickness: f32 },
    Sticker { glyph: String },
}

impl Tool {
    pub fn pen(thickness: f32) -> Self {
        Tool::Pen { thickness }
    }

    pub fn sticker(glyph: impl Into<String>) -> Self {
        Tool::Sticker {
            glyph: glyph.into(),
        }
    }

    /// Build a sticker tool from user-entered text.
    pub fn custom_sticker(input: &str) -> SketchResult<Self> {
        let glyph = input.trim();
        if glyph.is_empty() {
            return Err(SketchError::EmptyGlyph);
        }
        if glyph.chars().any(char::is_control) {
            return Err(SketchError::InvalidGlyph {
                glyph: glyph.to_owned(),
                reason: "contains control characters",
            });
        }
        if glyph.chars().count() > MAX_GLYPH_CHARS {
            return Err(SketchError::InvalidGlyph {
                glyph: glyph.to_owned(),
                reason: "too long",
            });
        }
        Ok(Self::sticker(glyph))
    }

    pub fn name(&self) -> &'static str {
        match self {
            Tool::Pen { .. } => "Pen",
            Tool::Sticker { .. } => "Sticker",
        }
    }
}

/// The active tool plus everything needed to draw its preview.
#[derive(Debug)]
pub struct ToolState {
    tool: Tool,
    /// Degrees applied to new stickers
    rotation: f32,
    /// Color of new strokes
    color: Color32,
    /// Last pointer position over the canvas
    pointer: Option<Pos2>,
    preview: Option<ToolPreview>,
    events: EventBus,
}

impl ToolState {
    pub fn new(tool: Tool, events: EventBus) -> Self {
        Self {
            tool,
            rotation: 0.0,
            color: Color32::BLACK,
            pointer: None,
            preview: None,
            events,
        }
    }

    pub fn tool(&self) -> &Tool {
        &self.tool
    }

    pub fn rotation(&self) -> f32 {
        self.rotation
    }

    pub fn color(&self) -> Color32 {
        self.color
    }

    pub fn pointer(&self) -> Option<Pos2> {
        self.pointer
    }

    pub fn preview(&self) -> Option<&ToolPreview> {
        self.preview.as_ref()
    }

    /// Switch tools. The pending preview is dropped and, if `idle` and the
    /// pointer position is known, recomputed for the new tool right away.
    pub fn select(&mut self, tool: Tool, idle: bool) {
        if tool == self.tool {
            return;
        }
        log::info!("{} tool selected: {tool:?}", tool.name());
        self.tool = tool;
        self.preview = None;
        if idle {
            self.preview = self.pointer.map(|p| self.preview_at(p));
        }
        self.events.emit(SketchEvent::ToolChanged);
    }

    pub fn set_rotation(&mut self, degrees: f32, idle: bool) {
        let rotation = normalize_degrees(degrees);
        if rotation == self.rotation {
            return;
        }
        self.rotation = rotation;
        if idle {
            self.preview = self.pointer.map(|p| self.preview_at(p));
        }
        self.events.emit(SketchEvent::ToolChanged);
    }

    pub fn set_color(&mut self, color: Color32) {
        if color == self.color {
            return;
        }
        self.color = color;
        self.events.emit(SketchEvent::ToolChanged);
    }

    /// Record the pointer position; show the preview there if `idle`.
    pub fn track_pointer(&mut self, point: Pos2, idle: bool) {
        self.pointer = Some(point);
        if !idle {
            return;
        }
        let preview = self.preview_at(point);
        if self.preview.as_ref() != Some(&preview) {
            self.preview = Some(preview);
            self.events.emit(SketchEvent::PreviewChanged);
        }
    }

    pub fn clear_preview(&mut self) {
        if self.preview.take().is_some() {
            self.events.emit(SketchEvent::PreviewChanged);
        }
    }

    /// The pointer left the canvas.
    pub fn forget_pointer(&mut self) {
        self.pointer = None;
        self.clear_preview();
    }

    /// The command a press at `point` starts with the active tool.
    pub fn command_at(&self, point: Pos2) -> Command {
        match &self.tool {
            Tool::Pen { thickness } => Stroke::new(point, *thickness, self.color).into(),
            Tool::Sticker { glyph } => StickerMark::new(point, glyph.clone(), self.rotation).into(),
        }
    }

    fn preview_at(&self, point: Pos2) -> ToolPreview {
        match &self.tool {
            Tool::Pen { thickness } => ToolPreview::Pen {
                center: point,
                thickness: *thickness,
            },
            Tool::Sticker { glyph } => {
                ToolPreview::Sticker(StickerMark::new(point, glyph.clone(), self.rotation))
            }
        }
    }
}
