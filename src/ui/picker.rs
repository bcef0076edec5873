// Application picker
// Grid of catalog cards; clicking one opens that application

use std::time::Instant;

use eframe::egui;

use crate::state::{AppDescriptor, Shell};
use crate::ui::components::*;

const CARD_SIZE: egui::Vec2 = egui::vec2(240.0, 170.0);
const GRID_SPACING: f32 = 24.0;

/// Number of grid columns that fit in `width`, between 1 and 4
pub fn column_count(width: f32) -> usize {
    let per_card = CARD_SIZE.x + GRID_SPACING;
    (((width + GRID_SPACING) / per_card).floor() as usize).clamp(1, 4)
}

/// Render the application picker
pub fn render_picker(ctx: &egui::Context, shell: &mut Shell, now: Instant) {
    egui::TopBottomPanel::top("picker_header").show(ctx, |ui| {
        ui.add_space(12.0);
        ui.horizontal(|ui| {
            ui.add_space(16.0);
            ui.vertical(|ui| {
                ui.heading(egui::RichText::new("Suite Empresarial").strong());
                ui.label(egui::RichText::new("Selecciona una aplicación para continuar").weak());
            });
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.add_space(16.0);
                if secondary_button(ui, "🚪 Cerrar Sesión").clicked() {
                    shell.logout(now);
                }
                ui.add_space(8.0);
                if theme_toggle(ui, shell.theme()).clicked() {
                    shell.toggle_theme();
                }
            });
        });
        ui.add_space(12.0);
    });

    egui::CentralPanel::default().show(ctx, |ui| {
        egui::ScrollArea::vertical()
            .id_source("picker_scroll")
            .auto_shrink([false; 2])
            .show(ui, |ui| {
                ui.add_space(24.0);
                ui.horizontal(|ui| {
                    ui.add_space(16.0);
                    ui.vertical(|ui| {
                        ui.heading(egui::RichText::new("Tus Aplicaciones").size(26.0).strong());
                        ui.label(
                            egui::RichText::new("Accede a todas las herramientas de tu suite empresarial")
                                .weak(),
                        );
                    });
                });
                ui.add_space(24.0);

                let apps = shell.catalog.apps();
                let columns = column_count(ui.available_width() - 32.0);
                let mut clicked: Option<&'static str> = None;

                ui.horizontal(|ui| {
                    ui.add_space(16.0);
                    egui::Grid::new("app_grid")
                        .spacing([GRID_SPACING, GRID_SPACING])
                        .show(ui, |ui| {
                            for (index, app) in apps.iter().enumerate() {
                                if app_card(ui, app).clicked() {
                                    clicked = Some(app.id);
                                }
                                if (index + 1) % columns == 0 {
                                    ui.end_row();
                                }
                            }
                        });
                });

                if let Some(id) = clicked {
                    shell.open_app(id);
                }
                ui.add_space(24.0);
            });
    });
}

/// One clickable card: tinted icon tile, title, description, hover hint
fn app_card(ui: &mut egui::Ui, app: &AppDescriptor) -> egui::Response {
    let tint = accent_color(app.color);
    let id = ui.id().with(("app_card", app.id));
    let hovered = ui.ctx().data(|d| d.get_temp::<bool>(id)).unwrap_or(false);

    let stroke = if hovered {
        egui::Stroke::new(2.0, tint.gamma_multiply(0.6))
    } else {
        ui.visuals().widgets.noninteractive.bg_stroke
    };

    let inner = egui::Frame::none()
        .fill(ui.visuals().extreme_bg_color)
        .stroke(stroke)
        .rounding(egui::Rounding::same(10.0))
        .inner_margin(egui::Margin::same(16.0))
        .show(ui, |ui| {
            ui.set_min_size(CARD_SIZE - egui::vec2(32.0, 32.0));
            ui.set_max_width(CARD_SIZE.x - 32.0);
            ui.vertical(|ui| {
                icon_tile(ui, icon_glyph(app.icon), tint, 52.0);
                ui.add_space(12.0);
                let title = egui::RichText::new(app.title).strong().size(17.0);
                ui.label(if hovered { title.color(PRIMARY) } else { title });
                ui.label(egui::RichText::new(app.description).weak().size(13.0));
                ui.add_space(6.0);
                if hovered {
                    ui.label(egui::RichText::new("Abrir aplicación →").color(PRIMARY).size(13.0));
                }
            });
        });

    let response = ui
        .interact(inner.response.rect, id, egui::Sense::click())
        .on_hover_cursor(egui::CursorIcon::PointingHand);
    let now_hovered = response.hovered();
    if now_hovered != hovered {
        ui.ctx().data_mut(|d| d.insert_temp(id, now_hovered));
        ui.ctx().request_repaint();
    }
    response
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_column_count() {
        assert_eq!(column_count(0.0), 1);
        assert_eq!(column_count(240.0), 1);
        assert_eq!(column_count(504.0), 2);
        assert_eq!(column_count(5000.0), 4);
    }
}
