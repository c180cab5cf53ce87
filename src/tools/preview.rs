use egui::{Color32, Pos2};

use crate::element::{Drawable, StickerMark};
use crate::surface::Surface;

/// Opacity of the ghost glyph shown under the pointer.
pub const PREVIEW_ALPHA: f32 = 0.5;

/// What the active tool would do if the pointer were pressed here.
///
/// Never part of the history; the renderer paints it last and only while no
/// gesture is in progress.
#[derive(Debug, Clone, PartialEq)]
pub enum ToolPreview {
    /// Outline circle as wide as the pen
    Pen { center: Pos2, thickness: f32 },
    /// Translucent copy of the sticker that would be placed
    Sticker(StickerMark),
}

impl Drawable for ToolPreview {
    fn render(&self, surface: &mut dyn Surface) {
        match self {
            ToolPreview::Pen { center, thickness } => {
                // keep hairline pens visible
                let radius = (thickness / 2.0).max(1.0);
                surface.stroke_circle(*center, radius, 1.0, Color32::from_black_alpha(128));
            }
            ToolPreview::Sticker(mark) => mark.render_with_alpha(surface, PREVIEW_ALPHA),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::{RecordingSurface, SurfaceOp};
    use egui::{pos2, vec2};

    #[test]
    fn test_pen_preview_is_translucent_outline() {
        let preview = ToolPreview::Pen {
            center: pos2(10.0, 12.0),
            thickness: 8.0,
        };
        let mut surface = RecordingSurface::new(vec2(64.0, 64.0));
        preview.render(&mut surface);

        assert_eq!(
            surface.ops(),
            &[SurfaceOp::CircleOutline {
                center: pos2(10.0, 12.0),
                radius: 4.0,
                width: 1.0,
                color: Color32::from_black_alpha(128),
            }]
        );
    }

    #[test]
    fn test_sticker_preview_is_not_opaque() {
        let preview = ToolPreview::Sticker(StickerMark::new(pos2(5.0, 5.0), "⭐", 0.0));
        let mut surface = RecordingSurface::new(vec2(64.0, 64.0));
        preview.render(&mut surface);

        let text_alpha = surface.ops().iter().find_map(|op| match op {
            SurfaceOp::Text { color, .. } => Some(color.a()),
            _ => None,
        });
        assert!(matches!(text_alpha, Some(a) if a < 255));
    }
}
