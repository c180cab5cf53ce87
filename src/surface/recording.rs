use egui::{Color32, Pos2, Vec2};

use super::{Surface, TransformStack};

/// A single call made against a [`RecordingSurface`].
///
/// Positions are recorded as given, i.e. in the caller's local space.
#[derive(Debug, Clone, PartialEq)]
pub enum SurfaceOp {
    Clear,
    Background(Color32),
    Polyline {
        points: Vec<Pos2>,
        width: f32,
        color: Color32,
    },
    CircleOutline {
        center: Pos2,
        radius: f32,
        width: f32,
        color: Color32,
    },
    Circle {
        center: Pos2,
        radius: f32,
        color: Color32,
    },
    Text {
        text: String,
        anchor: Pos2,
        font_size: f32,
        color: Color32,
    },
    Save,
    Restore,
    Translate(Vec2),
    Rotate(f32),
    Scale(f32),
}

/// Surface that paints nothing and remembers every call in order.
///
/// Useful for checking what a [`super::Surface`] consumer draws and in
/// which order, without a live egui context.
#[derive(Debug, Clone)]
pub struct RecordingSurface {
    size: Vec2,
    ops: Vec<SurfaceOp>,
    transforms: TransformStack,
}

impl RecordingSurface {
    pub fn new(size: Vec2) -> Self {
        Self {
            size,
            ops: Vec::new(),
            transforms: TransformStack::default(),
        }
    }

    pub fn ops(&self) -> &[SurfaceOp] {
        &self.ops
    }

    /// Only the ops that put pixels on the surface.
    pub fn paint_ops(&self) -> Vec<&SurfaceOp> {
        self.ops
            .iter()
            .filter(|op| {
                matches!(
                    op,
                    SurfaceOp::Polyline { .. }
                        | SurfaceOp::CircleOutline { .. }
                        | SurfaceOp::Circle { .. }
                        | SurfaceOp::Text { .. }
                )
            })
            .collect()
    }

    /// Number of unmatched `save()` calls.
    pub fn save_depth(&self) -> usize {
        self.transforms.depth()
    }
}

impl Surface for RecordingSurface {
    fn size(&self) -> Vec2 {
        self.size
    }

    fn clear(&mut self) {
        self.ops.push(SurfaceOp::Clear);
    }

    fn fill_background(&mut self, color: Color32) {
        self.ops.push(SurfaceOp::Background(color));
    }

    fn stroke_polyline(&mut self, points: &[Pos2], width: f32, color: Color32) {
        self.ops.push(SurfaceOp::Polyline {
            points: points.to_vec(),
            width,
            color,
        });
    }

    fn stroke_circle(&mut self, center: Pos2, radius: f32, width: f32, color: Color32) {
        self.ops.push(SurfaceOp::CircleOutline {
            center,
            radius,
            width,
            color,
        });
    }

    fn fill_circle(&mut self, center: Pos2, radius: f32, color: Color32) {
        self.ops.push(SurfaceOp::Circle {
            center,
            radius,
            color,
        });
    }

    fn fill_text(&mut self, text: &str, anchor: Pos2, font_size: f32, color: Color32) {
        self.ops.push(SurfaceOp::Text {
            text: text.to_owned(),
            anchor,
            font_size,
            color,
        });
    }

    fn save(&mut self) {
        self.transforms.save();
        self.ops.push(SurfaceOp::Save);
    }

    fn restore(&mut self) {
        self.transforms.restore();
        self.ops.push(SurfaceOp::Restore);
    }

    fn translate(&mut self, offset: Vec2) {
        self.transforms.translate(offset);
        self.ops.push(SurfaceOp::Translate(offset));
    }

    fn rotate(&mut self, radians: f32) {
        self.transforms.rotate(radians);
        self.ops.push(SurfaceOp::Rotate(radians));
    }

    fn scale(&mut self, factor: f32) {
        self.transforms.scale(factor);
        self.ops.push(SurfaceOp::Scale(factor));
    }
}
