//! The drawing surface everything in the display list paints onto.
//!
//! Style (color, width, font size) is passed with every call, so nothing an
//! item paints can leak into the next one. The transform is the only state a
//! surface carries and items bracket changes to it with [`Surface::save`] and
//! [`Surface::restore`].

use egui::{Color32, Pos2, Vec2, pos2};
use kurbo::{Affine, Point};

mod painter;
mod pixmap;
mod recording;

pub use painter::PainterSurface;
pub use pixmap::PixmapSurface;
pub use recording::{RecordingSurface, SurfaceOp};

/// Paint primitives the display list needs from a raster target.
pub trait Surface {
    /// Logical size of the surface before any transform is applied.
    fn size(&self) -> Vec2;

    /// Remove everything painted so far.
    fn clear(&mut self);

    /// Opaque fill of the whole surface, ignoring the current transform.
    fn fill_background(&mut self, color: Color32);

    /// Connected line through `points` in order.
    fn stroke_polyline(&mut self, points: &[Pos2], width: f32, color: Color32);

    fn stroke_circle(&mut self, center: Pos2, radius: f32, width: f32, color: Color32);

    fn fill_circle(&mut self, center: Pos2, radius: f32, color: Color32);

    /// Paint `text` centered on `anchor`.
    fn fill_text(&mut self, text: &str, anchor: Pos2, font_size: f32, color: Color32);

    /// Push the current transform.
    fn save(&mut self);

    /// Pop the transform pushed by the matching [`Surface::save`].
    /// Does nothing if the stack is empty.
    fn restore(&mut self);

    fn translate(&mut self, offset: Vec2);

    fn rotate(&mut self, radians: f32);

    fn scale(&mut self, factor: f32);
}

/// Transform stack shared by the surface implementations.
///
/// Every operation post-multiplies, canvas style, so `translate` then
/// `rotate` rotates about the translated origin.
#[derive(Debug, Clone)]
pub(crate) struct TransformStack {
    current: Affine,
    saved: Vec<Affine>,
}

impl Default for TransformStack {
    fn default() -> Self {
        Self {
            current: Affine::IDENTITY,
            saved: Vec::new(),
        }
    }
}

impl TransformStack {
    pub(crate) fn current(&self) -> Affine {
        self.current
    }

    pub(crate) fn translate(&mut self, offset: Vec2) {
        self.current = self.current * Affine::translate((offset.x as f64, offset.y as f64));
    }

    pub(crate) fn rotate(&mut self, radians: f32) {
        self.current = self.current * Affine::rotate(radians as f64);
    }

    pub(crate) fn scale(&mut self, factor: f32) {
        self.current = self.current * Affine::scale(factor as f64);
    }

    /// Map a point from local space to surface space.
    pub(crate) fn map(&self, p: Pos2) -> Pos2 {
        let mapped = self.current * Point::new(p.x as f64, p.y as f64);
        pos2(mapped.x as f32, mapped.y as f32)
    }

    /// Uniform scale factor. Exact for the translate/rotate/uniform-scale
    /// transforms a [`Surface`] can build.
    pub(crate) fn scale_factor(&self) -> f32 {
        self.current.determinant().abs().sqrt() as f32
    }

    /// Rotation angle in radians.
    pub(crate) fn rotation(&self) -> f32 {
        let [a, b, ..] = self.current.as_coeffs();
        b.atan2(a) as f32
    }

    pub(crate) fn save(&mut self) {
        self.saved.push(self.current);
    }

    pub(crate) fn restore(&mut self) {
        if let Some(transform) = self.saved.pop() {
            self.current = transform;
        } else {
            log::debug!("restore() without matching save(), ignored");
        }
    }

    pub(crate) fn depth(&self) -> usize {
        self.saved.len()
    }
}
