use egui::Color32;

use crate::command::History;
use crate::element::Drawable;
use crate::surface::Surface;
use crate::tools::ToolPreview;

/// Repaints a surface from the display list.
#[derive(Debug, Clone)]
pub struct Renderer {
    background: Color32,
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new(Color32::WHITE)
    }
}

impl Renderer {
    /// `background` is forced opaque so exports never carry transparency.
    pub fn new(background: Color32) -> Self {
        let [r, g, b, _] = background.to_srgba_unmultiplied();
        Self {
            background: Color32::from_rgb(r, g, b),
        }
    }

    pub fn background(&self) -> Color32 {
        self.background
    }

    /// Full repaint: background, committed commands oldest first, the
    /// in-progress command, and the preview only when nothing is in
    /// progress. The order is fixed so committed items never cover the
    /// active gesture or the preview.
    pub fn repaint(
        &self,
        surface: &mut dyn Surface,
        history: &History,
        preview: Option<&ToolPreview>,
    ) {
        self.paint_committed(surface, history);

        match (history.active(), preview) {
            (Some(active), _) => active.render(surface),
            (None, Some(preview)) => preview.render(surface),
            (None, None) => {}
        }
    }

    /// Background plus committed commands only.
    pub fn paint_committed(&self, surface: &mut dyn Surface, history: &History) {
        surface.clear();
        surface.fill_background(self.background);
        for command in history.committed() {
            command.render(surface);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::{RecordingSurface, SurfaceOp};
    use egui::vec2;

    #[test]
    fn test_background_is_made_opaque() {
        let renderer = Renderer::new(Color32::from_white_alpha(10));
        assert_eq!(renderer.background().a(), 255);
    }

    #[test]
    fn test_empty_history_paints_only_background() {
        let mut surface = RecordingSurface::new(vec2(32.0, 32.0));
        Renderer::default().repaint(&mut surface, &History::new(), None);

        assert_eq!(
            surface.ops(),
            &[SurfaceOp::Clear, SurfaceOp::Background(Color32::WHITE)]
        );
    }
}
