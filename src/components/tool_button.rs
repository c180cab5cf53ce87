use eframe::egui;

/// Square, icon-only button used for the mutually exclusive tool picker.
pub struct ToolButton<'a> {
    pub icon: &'a str,
    pub tooltip: &'a str,
    pub selected: bool,
}

impl<'a> ToolButton<'a> {
    pub fn new(icon: &'a str, tooltip: &'a str, selected: bool) -> Self {
        Self {
            icon,
            tooltip,
            selected,
        }
    }

    pub fn show(&self, ui: &mut egui::Ui) -> egui::Response {
        let button_size = egui::vec2(36.0, 36.0);
        let (rect, response) = ui.allocate_exact_size(button_size, egui::Sense::click());

        if ui.is_rect_visible(rect) {
            let bg_color = if self.selected {
                egui::Color32::from_rgb(100, 181, 246) // Light blue when selected
            } else if response.hovered() {
                egui::Color32::from_gray(70)
            } else {
                egui::Color32::from_gray(50)
            };

            ui.painter().rect_filled(rect, 4.0, bg_color);

            let text_color = if self.selected {
                egui::Color32::BLACK
            } else {
                egui::Color32::WHITE
            };
            ui.painter().text(
                rect.center(),
                egui::Align2::CENTER_CENTER,
                self.icon,
                egui::FontId::proportional(22.0),
                text_color,
            );

            if self.selected {
                ui.painter().rect_stroke(
                    rect,
                    4.0,
                    egui::Stroke::new(2.0, egui::Color32::from_rgb(33, 150, 243)),
                );
            }
        }

        response.on_hover_text(self.tooltip)
    }
}
