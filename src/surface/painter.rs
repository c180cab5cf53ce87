use egui::emath::Rot2;
use egui::epaint::TextShape;
use egui::layers::ShapeIdx;
use egui::{Color32, FontId, Painter, Pos2, Rect, Shape, Stroke, Vec2};

use super::{Surface, TransformStack};

/// [`Surface`] backed by an egui [`Painter`].
///
/// Surface coordinates start at the top-left of `rect`. Every primitive is
/// mapped through the current transform before it reaches egui; line widths
/// and font sizes follow the transform's scale.
pub struct PainterSurface {
    painter: Painter,
    rect: Rect,
    transforms: TransformStack,
    emitted: Vec<ShapeIdx>,
}

impl PainterSurface {
    pub fn new(painter: Painter, rect: Rect) -> Self {
        let mut transforms = TransformStack::default();
        transforms.translate(rect.min.to_vec2());
        Self {
            painter,
            rect,
            transforms,
            emitted: Vec::new(),
        }
    }

    fn push(&mut self, shape: impl Into<Shape>) {
        let idx = self.painter.add(shape);
        self.emitted.push(idx);
    }

    fn map(&self, p: Pos2) -> Pos2 {
        self.transforms.map(p)
    }

    fn map_len(&self, len: f32) -> f32 {
        len * self.transforms.scale_factor()
    }
}

impl Surface for PainterSurface {
    fn size(&self) -> Vec2 {
        self.rect.size()
    }

    fn clear(&mut self) {
        for idx in self.emitted.drain(..) {
            self.painter.set(idx, Shape::Noop);
        }
    }

    fn fill_background(&mut self, color: Color32) {
        self.push(Shape::rect_filled(self.rect, 0.0, color));
    }

    fn stroke_polyline(&mut self, points: &[Pos2], width: f32, color: Color32) {
        match points {
            [] => {}
            [dot] => {
                let center = self.map(*dot);
                let radius = self.map_len(width / 2.0);
                self.push(Shape::circle_filled(center, radius, color));
            }
            _ => {
                let mapped = points.iter().map(|p| self.map(*p)).collect();
                let stroke = Stroke::new(self.map_len(width), color);
                self.push(Shape::line(mapped, stroke));
            }
        }
    }

    fn stroke_circle(&mut self, center: Pos2, radius: f32, width: f32, color: Color32) {
        let stroke = Stroke::new(self.map_len(width), color);
        self.push(Shape::circle_stroke(
            self.map(center),
            self.map_len(radius),
            stroke,
        ));
    }

    fn fill_circle(&mut self, center: Pos2, radius: f32, color: Color32) {
        self.push(Shape::circle_filled(
            self.map(center),
            self.map_len(radius),
            color,
        ));
    }

    fn fill_text(&mut self, text: &str, anchor: Pos2, font_size: f32, color: Color32) {
        if text.is_empty() {
            return;
        }
        let angle = self.transforms.rotation();
        let anchor = self.map(anchor);
        let font_id = FontId::proportional(self.map_len(font_size));
        let galley = self.painter.layout_no_wrap(text.to_owned(), font_id, color);

        // TextShape rotates about its top-left corner, so offset it to keep
        // the galley centered on the anchor.
        let half = galley.size() / 2.0;
        let top_left = anchor - Rot2::from_angle(angle) * half;
        self.push(TextShape::new(top_left, galley, color).with_angle(angle));
    }

    fn save(&mut self) {
        self.transforms.save();
    }

    fn restore(&mut self) {
        self.transforms.restore();
    }

    fn translate(&mut self, offset: Vec2) {
        self.transforms.translate(offset);
    }

    fn rotate(&mut self, radians: f32) {
        self.transforms.rotate(radians);
    }

    fn scale(&mut self, factor: f32) {
        self.transforms.scale(factor);
    }
}
