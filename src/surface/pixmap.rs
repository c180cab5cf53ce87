use ab_glyph::{Font as _, FontArc, FontVec, GlyphId, OutlineCurve, PxScale, ScaleFont as _};
use egui::{Color32, Pos2, Vec2, vec2};
use kurbo::Affine;
use tiny_skia::{
    Color, FillRule, LineCap, LineJoin, Paint, Path, PathBuilder, Pixmap, Stroke, Transform,
};

use super::{Surface, TransformStack};

/// Offscreen [`Surface`] rasterized by tiny-skia.
///
/// Text is filled as glyph outlines taken from egui's built-in fonts, so
/// stickers look the same here as on screen.
pub struct PixmapSurface {
    pixmap: Pixmap,
    transforms: TransformStack,
    fonts: GlyphFonts,
}

impl PixmapSurface {
    /// Returns `None` if either dimension is zero.
    pub fn new(width: u32, height: u32) -> Option<Self> {
        Some(Self {
            pixmap: Pixmap::new(width, height)?,
            transforms: TransformStack::default(),
            fonts: GlyphFonts::load(),
        })
    }

    pub fn pixmap(&self) -> &Pixmap {
        &self.pixmap
    }

    fn transform(&self) -> Transform {
        to_skia(self.transforms.current())
    }

    fn stroke_path(&mut self, path: &Path, width: f32, color: Color32) {
        let stroke = Stroke {
            width,
            line_cap: LineCap::Round,
            line_join: LineJoin::Round,
            ..Stroke::default()
        };
        let transform = self.transform();
        self.pixmap
            .stroke_path(path, &paint(color), &stroke, transform, None);
    }

    /// Outline of `text` laid out on one line and centered on the origin.
    fn text_path(&self, text: &str, font_size: f32) -> Option<Path> {
        let scale = PxScale::from(font_size);
        let glyphs: Vec<(&FontArc, GlyphId)> =
            text.chars().filter_map(|c| self.fonts.glyph(c)).collect();

        let width: f32 = glyphs
            .iter()
            .map(|(font, id)| font.as_scaled(scale).h_advance(*id))
            .sum();
        let (ascent, descent) = glyphs.iter().fold((0.0f32, 0.0f32), |(a, d), (font, _)| {
            let scaled = font.as_scaled(scale);
            (a.max(scaled.ascent()), d.min(scaled.descent()))
        });
        let baseline = (ascent + descent) / 2.0;

        let mut builder = PathBuilder::new();
        let mut pen_x = -width / 2.0;
        for (font, id) in glyphs {
            let scaled = font.as_scaled(scale);
            if let Some(outline) = font.outline(id) {
                let (sx, sy) = (scaled.h_scale_factor(), scaled.v_scale_factor());
                // font units are y-up
                let origin = pen_x;
                append_outline(&mut builder, &outline.curves, |p| {
                    (origin + p.x * sx, baseline - p.y * sy)
                });
            }
            pen_x += scaled.h_advance(id);
        }
        builder.finish()
    }
}

impl Surface for PixmapSurface {
    fn size(&self) -> Vec2 {
        vec2(self.pixmap.width() as f32, self.pixmap.height() as f32)
    }

    fn clear(&mut self) {
        self.pixmap.fill(Color::TRANSPARENT);
    }

    fn fill_background(&mut self, color: Color32) {
        let [r, g, b, a] = color.to_srgba_unmultiplied();
        self.pixmap.fill(Color::from_rgba8(r, g, b, a));
    }

    fn stroke_polyline(&mut self, points: &[Pos2], width: f32, color: Color32) {
        match points {
            [] => {}
            [dot] => self.fill_circle(*dot, width / 2.0, color),
            [first, rest @ ..] => {
                let mut builder = PathBuilder::new();
                builder.move_to(first.x, first.y);
                for p in rest {
                    builder.line_to(p.x, p.y);
                }
                if let Some(path) = builder.finish() {
                    self.stroke_path(&path, width, color);
                }
            }
        }
    }

    fn stroke_circle(&mut self, center: Pos2, radius: f32, width: f32, color: Color32) {
        if let Some(path) = PathBuilder::from_circle(center.x, center.y, radius) {
            self.stroke_path(&path, width, color);
        }
    }

    fn fill_circle(&mut self, center: Pos2, radius: f32, color: Color32) {
        if let Some(path) = PathBuilder::from_circle(center.x, center.y, radius) {
            let transform = self.transform();
            self.pixmap
                .fill_path(&path, &paint(color), FillRule::Winding, transform, None);
        }
    }

    fn fill_text(&mut self, text: &str, anchor: Pos2, font_size: f32, color: Color32) {
        let Some(path) = self.text_path(text, font_size) else {
            log::debug!("no glyphs to paint for {text:?}");
            return;
        };
        let placed =
            self.transforms.current() * Affine::translate((anchor.x as f64, anchor.y as f64));
        self.pixmap
            .fill_path(&path, &paint(color), FillRule::Winding, to_skia(placed), None);
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

/// egui's proportional font stack, in fallback order.
struct GlyphFonts {
    fonts: Vec<FontArc>,
}

impl GlyphFonts {
    fn load() -> Self {
        let definitions = egui::FontDefinitions::default();
        let names = definitions
            .families
            .get(&egui::FontFamily::Proportional)
            .cloned()
            .unwrap_or_default();

        let fonts = names
            .iter()
            .filter_map(|name| {
                let data = definitions.font_data.get(name)?;
                match FontVec::try_from_vec_and_index(data.font.to_vec(), data.index) {
                    Ok(font) => Some(FontArc::new(font)),
                    Err(err) => {
                        log::warn!("skipping font {name}: {err}");
                        None
                    }
                }
            })
            .collect();
        Self { fonts }
    }

    /// First font that has a glyph for `c`.
    fn glyph(&self, c: char) -> Option<(&FontArc, GlyphId)> {
        self.fonts.iter().find_map(|font| {
            let id = font.glyph_id(c);
            (id.0 != 0).then_some((font, id))
        })
    }
}

fn append_outline(
    builder: &mut PathBuilder,
    curves: &[OutlineCurve],
    map: impl Fn(ab_glyph::Point) -> (f32, f32),
) {
    let mut last: Option<ab_glyph::Point> = None;
    for curve in curves {
        let (OutlineCurve::Line(start, _)
        | OutlineCurve::Quad(start, ..)
        | OutlineCurve::Cubic(start, ..)) = curve;
        if last != Some(*start) {
            if last.is_some() {
                builder.close();
            }
            let (x, y) = map(*start);
            builder.move_to(x, y);
        }

        let end = match curve {
            OutlineCurve::Line(_, end) => {
                let (x, y) = map(*end);
                builder.line_to(x, y);
                *end
            }
            OutlineCurve::Quad(_, control, end) => {
                let ((x1, y1), (x, y)) = (map(*control), map(*end));
                builder.quad_to(x1, y1, x, y);
                *end
            }
            OutlineCurve::Cubic(_, c1, c2, end) => {
                let ((x1, y1), (x2, y2), (x, y)) = (map(*c1), map(*c2), map(*end));
                builder.cubic_to(x1, y1, x2, y2, x, y);
                *end
            }
        };
        last = Some(end);
    }
    if last.is_some() {
        builder.close();
    }
}

fn to_skia(affine: Affine) -> Transform {
    let [a, b, c, d, e, f] = affine.as_coeffs().map(|v| v as f32);
    Transform::from_row(a, b, c, d, e, f)
}

fn paint(color: Color32) -> Paint<'static> {
    let [r, g, b, a] = color.to_srgba_unmultiplied();
    let mut paint = Paint::default();
    paint.set_color_rgba8(r, g, b, a);
    paint.anti_alias = true;
    paint
}
