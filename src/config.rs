use egui::{Color32, Vec2, vec2};

/// Startup configuration for the sketchpad.
#[derive(Debug, Clone)]
pub struct SketchConfig {
    /// Working canvas size in surface pixels
    pub canvas_size: Vec2,
    /// Export resolution relative to the canvas
    pub export_scale: f32,
    pub export_file_name: &'static str,
    pub background: Color32,
    pub thin_pen: f32,
    pub thick_pen: f32,
    /// Sticker glyphs offered as tool buttons
    pub stickers: Vec<String>,
}

impl Default for SketchConfig {
    fn default() -> Self {
        Self {
            canvas_size: vec2(512.0, 512.0),
            export_scale: 2.0,
            export_file_name: "sketchpad.png",
            background: Color32::WHITE,
            thin_pen: 2.0,
            thick_pen: 8.0,
            stickers: ["⭐", "🌸", "🐱"].map(String::from).to_vec(),
        }
    }
}

impl SketchConfig {
    /// Pixel size of the exported image.
    pub fn export_size(&self) -> [u32; 2] {
        let size = self.canvas_size * self.export_scale;
        [size.x.round() as u32, size.y.round() as u32]
    }
}
