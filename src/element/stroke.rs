use egui::{Color32, Pos2, pos2};

use super::Drawable;
use crate::surface::Surface;

/// Freehand line: the points the pointer passed through while held down.
#[derive(Debug, Clone, PartialEq)]
pub struct Stroke {
    points: Vec<Pos2>,
    color: Color32,
    thickness: f32,
}

impl Stroke {
    pub const DEFAULT_THICKNESS: f32 = 1.0;

    /// Start a stroke at `start`. A non-positive thickness falls back to
    /// [`Stroke::DEFAULT_THICKNESS`].
    pub fn new(start: Pos2, thickness: f32, color: Color32) -> Self {
        let thickness = if thickness > 0.0 {
            thickness
        } else {
            Self::DEFAULT_THICKNESS
        };
        Self {
            points: vec![start],
            color,
            thickness,
        }
    }

    /// Thin black stroke starting at `(x, y)`.
    pub fn at(x: f32, y: f32) -> Self {
        Self::new(pos2(x, y), Self::DEFAULT_THICKNESS, Color32::BLACK)
    }

    /// Append a point. Committed strokes are only reachable through shared
    /// references, so this can only happen while the stroke is in progress.
    pub fn extend(&mut self, point: Pos2) {
        self.points.push(point);
    }

    pub fn points(&self) -> &[Pos2] {
        &self.points
    }

    pub fn color(&self) -> Color32 {
        self.color
    }

    pub fn thickness(&self) -> f32 {
        self.thickness
    }

    /// True if the pointer never moved after pressing.
    pub fn is_trivial(&self) -> bool {
        self.points.len() < 2
    }
}

impl Drawable for Stroke {
    fn render(&self, surface: &mut dyn Surface) {
        match self.points.as_slice() {
            [] => {}
            // zero-length path: paint the dot a round cap would leave
            [dot] => surface.fill_circle(*dot, self.thickness / 2.0, self.color),
            points => surface.stroke_polyline(points, self.thickness, self.color),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::{RecordingSurface, SurfaceOp};
    use egui::vec2;

    #[test]
    fn test_stroke_accumulates_points_in_order() {
        let mut stroke = Stroke::at(10.0, 10.0);
        stroke.extend(pos2(20.0, 10.0));
        stroke.extend(pos2(20.0, 20.0));

        assert_eq!(
            stroke.points(),
            &[pos2(10.0, 10.0), pos2(20.0, 10.0), pos2(20.0, 20.0)]
        );
        assert_eq!(stroke.thickness(), 1.0);
        assert_eq!(stroke.color(), Color32::BLACK);
        assert!(!stroke.is_trivial());
    }

    #[test]
    fn test_non_positive_thickness_falls_back_to_default() {
        let stroke = Stroke::new(Pos2::ZERO, -3.0, Color32::RED);
        assert_eq!(stroke.thickness(), Stroke::DEFAULT_THICKNESS);
    }

    #[test]
    fn test_single_point_renders_as_dot() {
        let stroke = Stroke::new(pos2(5.0, 6.0), 4.0, Color32::RED);
        assert!(stroke.is_trivial());

        let mut surface = RecordingSurface::new(vec2(64.0, 64.0));
        stroke.render(&mut surface);

        assert_eq!(
            surface.ops(),
            &[SurfaceOp::Circle {
                center: pos2(5.0, 6.0),
                radius: 2.0,
                color: Color32::RED,
            }]
        );
    }

    #[test]
    fn test_render_sets_style_every_call() {
        let mut stroke = Stroke::new(pos2(0.0, 0.0), 3.0, Color32::BLUE);
        stroke.extend(pos2(1.0, 1.0));

        let mut surface = RecordingSurface::new(vec2(64.0, 64.0));
        stroke.render(&mut surface);
        stroke.render(&mut surface);

        let expected = SurfaceOp::Polyline {
            points: vec![pos2(0.0, 0.0), pos2(1.0, 1.0)],
            width: 3.0,
            color: Color32::BLUE,
        };
        assert_eq!(surface.ops(), &[expected.clone(), expected]);
    }
}
