// Generic application page
// Placeholder workspace shown for every application id

use eframe::egui;

use crate::state::Shell;
use crate::ui::components::*;

/// Number of filler cards on the page
pub const PLACEHOLDER_CARDS: usize = 6;

/// Render the page body for `app_id` (inside the layout content slot)
pub fn render_app_page(ui: &mut egui::Ui, shell: &mut Shell, app_id: &str) {
    let content = shell.catalog.resolve(Some(app_id));

    // Page header
    ui.horizontal(|ui| {
        ui.vertical(|ui| {
            ui.heading(egui::RichText::new(content.title).size(28.0).strong());
            ui.label(egui::RichText::new(content.description).weak());
        });
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            // No creation flow exists yet
            primary_button(ui, "➕ Nuevo");
        });
    });
    ui.add_space(24.0);

    let columns = (ui.available_width() / 300.0).floor().clamp(1.0, 3.0) as usize;
    egui::Grid::new("placeholder_grid")
        .spacing([24.0, 24.0])
        .min_col_width(((ui.available_width() - 48.0) / columns as f32).max(200.0))
        .show(ui, |ui| {
            for item in 1..=PLACEHOLDER_CARDS {
                placeholder_card(ui, item);
                if item % columns == 0 {
                    ui.end_row();
                }
            }
        });
    ui.add_space(24.0);

    // Info card
    egui::Frame::group(ui.style())
        .rounding(egui::Rounding::same(8.0))
        .inner_margin(egui::Margin::same(16.0))
        .fill(PRIMARY.gamma_multiply(0.06))
        .stroke(egui::Stroke::new(1.0, PRIMARY.gamma_multiply(0.3)))
        .show(ui, |ui| {
            ui.set_min_width(ui.available_width());
            ui.horizontal(|ui| {
                ui.colored_label(PRIMARY, "●");
                ui.label(egui::RichText::new("Área de Trabajo").strong());
            });
            ui.add_space(4.0);
            ui.label(
                egui::RichText::new(
                    "Este es un espacio de trabajo de ejemplo. Los componentes de tablas, \
                     formularios y funcionalidad específica se implementarán según tus necesidades.",
                )
                .weak(),
            );
        });
}

fn placeholder_card(ui: &mut egui::Ui, item: usize) {
    card(ui, |ui| {
        ui.set_min_width(200.0);
        card_header(
            ui,
            &format!("Elemento {}", item),
            "Contenido de ejemplo para la aplicación",
        );
        ui.add_space(12.0);

        let (rect, _) = ui.allocate_exact_size(
            egui::vec2(ui.available_width(), 128.0),
            egui::Sense::hover(),
        );
        ui.painter()
            .rect_filled(rect, egui::Rounding::same(6.0), ui.visuals().faint_bg_color);
        ui.painter().text(
            rect.center(),
            egui::Align2::CENTER_CENTER,
            "Contenido aquí",
            egui::FontId::proportional(13.0),
            ui.visuals().weak_text_color(),
        );
    });
}
