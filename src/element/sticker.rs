use egui::{Color32, Pos2};

use super::Drawable;
use crate::surface::Surface;

/// Font size every sticker glyph is painted at.
pub const STICKER_FONT_SIZE: f32 = 32.0;

/// An emoji placed on the canvas.
///
/// Unlike a [`super::Stroke`], a sticker follows the pointer while it is
/// held down instead of accumulating a path.
#[derive(Debug, Clone, PartialEq)]
pub struct StickerMark {
    position: Pos2,
    glyph: String,
    /// Degrees in `[0, 360)`
    rotation: f32,
}

impl StickerMark {
    pub fn new(position: Pos2, glyph: impl Into<String>, rotation: f32) -> Self {
        Self {
            position,
            glyph: glyph.into(),
            rotation: normalize_degrees(rotation),
        }
    }

    pub fn reposition(&mut self, position: Pos2) {
        self.position = position;
    }

    pub fn position(&self) -> Pos2 {
        self.position
    }

    pub fn glyph(&self) -> &str {
        &self.glyph
    }

    pub fn rotation(&self) -> f32 {
        self.rotation
    }

    /// Paint the glyph with its color scaled by `alpha`.
    pub fn render_with_alpha(&self, surface: &mut dyn Surface, alpha: f32) {
        surface.save();
        surface.translate(self.position.to_vec2());
        if self.rotation != 0.0 {
            surface.rotate(self.rotation.to_radians());
        }
        surface.fill_text(
            &self.glyph,
            Pos2::ZERO,
            STICKER_FONT_SIZE,
            Color32::BLACK.gamma_multiply(alpha.clamp(0.0, 1.0)),
        );
        surface.restore();
    }
}

impl Drawable for StickerMark {
    fn render(&self, surface: &mut dyn Surface) {
        self.render_with_alpha(surface, 1.0);
    }
}

/// Wrap an angle in degrees into `[0, 360)`.
pub(crate) fn normalize_degrees(degrees: f32) -> f32 {
    if !degrees.is_finite() {
        return 0.0;
    }
    let wrapped = degrees.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360.0 for tiny negative inputs
    if wrapped >= 360.0 { 0.0 } else { wrapped }
}
