//! Raster export of the committed drawing.
//!
//! The renderer paints into an offscreen [`PixmapSurface`] scaled up to the
//! export resolution, and the result is encoded as PNG.

use std::io::Cursor;

use image::{ImageFormat, Rgba, RgbaImage};
use thiserror::Error;

use crate::command::History;
use crate::config::SketchConfig;
use crate::renderer::Renderer;
use crate::surface::{PixmapSurface, Surface};

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("export size {width}x{height} has no pixels")]
    EmptyRaster { width: u32, height: u32 },

    #[error("failed to encode PNG: {0}")]
    Image(#[from] image::ImageError),

    #[error("failed to write {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("browser download failed: {0}")]
    Download(String),
}

/// Renders the committed history into an image at a fixed scale.
#[derive(Debug, Clone)]
pub struct Exporter {
    renderer: Renderer,
    /// Output size in pixels
    size: [u32; 2],
    scale: f32,
}

impl Exporter {
    pub fn new(renderer: Renderer, size: [u32; 2], scale: f32) -> Self {
        Self {
            renderer,
            size,
            scale,
        }
    }

    pub fn from_config(config: &SketchConfig) -> Self {
        Self::new(
            Renderer::new(config.background),
            config.export_size(),
            config.export_scale,
        )
    }

    pub fn size(&self) -> [u32; 2] {
        self.size
    }

    /// Rasterize the committed commands. In-progress gestures and the tool
    /// preview are never exported.
    pub fn rasterize(&self, history: &History) -> Result<RgbaImage, ExportError> {
        let [width, height] = self.size;
        let mut surface = PixmapSurface::new(width, height)
            .ok_or(ExportError::EmptyRaster { width, height })?;
        surface.scale(self.scale);
        self.renderer.paint_committed(&mut surface, history);

        let mut image = RgbaImage::new(width, height);
        for (dst, src) in image.pixels_mut().zip(surface.pixmap().pixels()) {
            let color = src.demultiply();
            *dst = Rgba([color.red(), color.green(), color.blue(), color.alpha()]);
        }

        log::info!(
            "rasterized {} commands into {width}x{height}",
            history.len()
        );
        Ok(image)
    }

    /// Rasterize and encode as PNG.
    pub fn to_png(&self, history: &History) -> Result<Vec<u8>, ExportError> {
        let image = self.rasterize(history)?;
        let mut bytes = Vec::new();
        image.write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)?;
        Ok(bytes)
    }
}

/// Write PNG bytes to `file_name` in the working directory.
#[cfg(not(target_arch = "wasm32"))]
pub fn save_png(bytes: &[u8], file_name: &str) -> Result<(), ExportError> {
    std::fs::write(file_name, bytes).map_err(|source| ExportError::Io {
        path: file_name.to_owned(),
        source,
    })?;
    log::info!("exported {} bytes to {file_name}", bytes.len());
    Ok(())
}

/// Offer PNG bytes to the browser as a download named `file_name`.
#[cfg(target_arch = "wasm32")]
pub fn save_png(bytes: &[u8], file_name: &str) -> Result<(), ExportError> {
    use eframe::wasm_bindgen::JsCast as _;

    let js_err = |e: eframe::wasm_bindgen::JsValue| ExportError::Download(format!("{e:?}"));
    let document = web_sys::window()
        .and_then(|window| window.document())
        .ok_or_else(|| ExportError::Download("no document".to_owned()))?;

    let parts = js_sys::Array::new();
    parts.push(&js_sys::Uint8Array::from(bytes));
    let options = web_sys::BlobPropertyBag::new();
    options.set_type("image/png");
    let blob = web_sys::Blob::new_with_u8_array_sequence_and_options(&parts, &options)
        .map_err(js_err)?;
    let url = web_sys::Url::create_object_url_with_blob(&blob).map_err(js_err)?;

    let anchor = document
        .create_element("a")
        .map_err(js_err)?
        .dyn_into::<web_sys::HtmlAnchorElement>()
        .map_err(|_| ExportError::Download("not an anchor element".to_owned()))?;
    anchor.set_href(&url);
    anchor.set_download(file_name);
    anchor.click();

    web_sys::Url::revoke_object_url(&url).ok();
    log::info!("offered {file_name} for download");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::Command;
    use crate::element::{StickerMark, Stroke};
    use egui::{Color32, pos2};

    fn history_with(commands: Vec<Command>) -> History {
        let mut history = History::new();
        for command in commands {
            history.begin(command).unwrap();
            history.commit();
        }
        history
    }

    fn exporter() -> Exporter {
        Exporter::new(Renderer::default(), [128, 128], 2.0)
    }

    #[test]
    fn test_empty_history_exports_opaque_background() {
        let image = exporter().rasterize(&History::new()).unwrap();
        assert_eq!(image.dimensions(), (128, 128));
        assert!(image.pixels().all(|p| p.0 == [255, 255, 255, 255]));
    }

    #[test]
    fn test_stroke_lands_at_twice_its_coordinates() {
        let mut stroke = Stroke::new(pos2(8.0, 10.0), 6.0, Color32::BLACK);
        stroke.extend(pos2(56.0, 10.0));
        let image = exporter().rasterize(&history_with(vec![stroke.into()])).unwrap();

        let on_line = image.get_pixel(64, 20);
        assert!(on_line.0[0] < 64, "expected dark pixel, got {on_line:?}");
        assert_eq!(on_line.0[3], 255);

        let off_line = image.get_pixel(64, 60);
        assert_eq!(off_line.0, [255, 255, 255, 255]);
    }

    #[test]
    fn test_sticker_leaves_ink_near_its_anchor() {
        let mark = StickerMark::new(pos2(32.0, 32.0), "⭐", 30.0);
        let image = exporter().rasterize(&history_with(vec![mark.into()])).unwrap();

        let inked = (40..88)
            .flat_map(|y| (40..88).map(move |x| (x, y)))
            .any(|(x, y)| image.get_pixel(x, y).0[0] < 200);
        assert!(inked);
    }

    #[test]
    fn test_zero_size_is_an_error() {
        let exporter = Exporter::new(Renderer::default(), [0, 128], 2.0);
        assert!(matches!(
            exporter.rasterize(&History::new()),
            Err(ExportError::EmptyRaster { .. })
        ));
    }

    #[test]
    fn test_default_config_exports_at_twice_canvas_size() {
        let exporter = Exporter::from_config(&SketchConfig::default());
        assert_eq!(exporter.size(), [1024, 1024]);

        let image = exporter.rasterize(&History::new()).unwrap();
        assert_eq!(image.dimensions(), (1024, 1024));
        assert!(image.pixels().all(|p| p.0[3] == 255));
    }

    #[test]
    fn test_png_bytes_have_signature() {
        let bytes = exporter().to_png(&History::new()).unwrap();
        assert_eq!(&bytes[..8], b"\x89PNG\r\n\x1a\n");
    }
}
