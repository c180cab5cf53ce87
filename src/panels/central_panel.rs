use crate::app::SketchpadApp;
use crate::input::PointerSnapshot;
use crate::surface::PainterSurface;

pub fn central_panel(app: &mut SketchpadApp, ctx: &egui::Context) {
    egui::CentralPanel::default().show(ctx, |ui| {
        ui.heading("Sticker Sketchpad");

        let (response, painter) =
            ui.allocate_painter(app.config().canvas_size, egui::Sense::click_and_drag());
        let canvas_rect = response.rect;

        app.handle_pointer(PointerSnapshot::from_egui(ctx, canvas_rect));

        if response.hovered() {
            ctx.set_cursor_icon(egui::CursorIcon::Crosshair);
        }

        let mut surface = PainterSurface::new(painter, canvas_rect);
        let sketchpad = app.sketchpad();
        app.renderer()
            .repaint(&mut surface, sketchpad.history(), sketchpad.preview());
    });
}
