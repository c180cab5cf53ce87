use crate::app::SketchpadApp;
use crate::components::ToolButton;
use crate::shortcuts::{self, Action};
use crate::tools::Tool;

pub fn tools_panel(app: &mut SketchpadApp, ctx: &egui::Context) {
    egui::SidePanel::left("tools_panel")
        .resizable(false)
        .default_width(220.0)
        .show(ctx, |ui| {
            ui.heading("Tools");

            let config = app.config();
            let mut choices = vec![
                (Tool::pen(config.thin_pen), "✏".to_owned(), "Thin pen".to_owned()),
                (Tool::pen(config.thick_pen), "🖌".to_owned(), "Thick pen".to_owned()),
            ];
            for glyph in &config.stickers {
                choices.push((Tool::sticker(glyph.as_str()), glyph.clone(), format!("{glyph} sticker")));
            }
            // keep a custom sticker selectable once it is in use
            let active = app.sketchpad().tools().tool().clone();
            if let Tool::Sticker { glyph } = &active {
                if !choices.iter().any(|(tool, ..)| *tool == active) {
                    choices.push((active.clone(), glyph.clone(), "Custom sticker".to_owned()));
                }
            }

            ui.horizontal_wrapped(|ui| {
                for (tool, icon, tooltip) in choices {
                    let selected = tool == active;
                    if ToolButton::new(&icon, &tooltip, selected).show(ui).clicked() && !selected {
                        log::info!("tool selected from UI: {tooltip}");
                        app.select_tool(tool);
                    }
                }
            });

            ui.separator();
            ui.label("Custom sticker");
            ui.horizontal(|ui| {
                let field = ui.add(
                    egui::TextEdit::singleline(app.custom_glyph_mut())
                        .hint_text("emoji or text")
                        .desired_width(110.0),
                );
                let submitted = field.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
                if ui.button("Use").clicked() || submitted {
                    app.apply_custom_glyph();
                }
            });

            let mut rotation = app.sketchpad().tools().rotation();
            let slider = egui::Slider::new(&mut rotation, 0.0..=359.0)
                .suffix("°")
                .text("Rotation");
            if ui.add(slider).changed() {
                app.sketchpad_mut().set_rotation(rotation);
            }

            ui.horizontal(|ui| {
                ui.label("Pen color:");
                let mut color = app.sketchpad().tools().color();
                if egui::color_picker::color_edit_button_srgba(
                    ui,
                    &mut color,
                    egui::color_picker::Alpha::Opaque,
                )
                .changed()
                {
                    app.sketchpad_mut().set_color(color);
                }
            });

            ui.separator();

            ui.horizontal(|ui| {
                let history = app.sketchpad().history();
                let (can_undo, can_redo, can_clear) = (
                    history.can_undo(),
                    history.can_redo(),
                    history.can_undo() || history.can_redo(),
                );

                let undo = ui
                    .add_enabled(can_undo, egui::Button::new("Undo"))
                    .on_hover_text(shortcuts::label(Action::Undo, ctx));
                if undo.clicked() {
                    app.undo();
                }
                let redo = ui
                    .add_enabled(can_redo, egui::Button::new("Redo"))
                    .on_hover_text(shortcuts::label(Action::Redo, ctx));
                if redo.clicked() {
                    app.redo();
                }
                if ui.add_enabled(can_clear, egui::Button::new("Clear")).clicked() {
                    app.clear_all();
                }
            });

            let history = app.sketchpad().history();
            ui.label(format!(
                "{} on canvas, {} to redo",
                history.len(),
                history.redo_len()
            ));

            ui.separator();
            let export = ui
                .button("Export PNG")
                .on_hover_text(shortcuts::label(Action::Export, ctx));
            if export.clicked() {
                app.export();
            }

            if let Some(status) = app.status() {
                ui.small(status);
            }
        });
}
