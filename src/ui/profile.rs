// Profile page
// Controlled form over the sample profile record

use std::time::Instant;

use eframe::egui;

use crate::state::profile::ProfileField;
use crate::state::{Navigator, ProfileRecord, Route, Shell};
use crate::ui::components::*;

/// Render the profile page body (inside the layout content slot)
pub fn render_profile(ui: &mut egui::Ui, shell: &mut Shell, record: &mut ProfileRecord, now: Instant) {
    ui.heading(egui::RichText::new("Mi Perfil").size(28.0).strong());
    ui.label(egui::RichText::new("Gestiona tu información personal y preferencias").weak());
    ui.add_space(24.0);

    card(ui, |ui| {
        ui.set_min_width(ui.available_width());
        card_header(ui, "Información Personal", "Actualiza tu información de perfil");
        ui.add_space(16.0);

        // Avatar section, initials follow the signed-in identity
        ui.horizontal(|ui| {
            avatar(ui, &shell.identity.initials(), 96.0);
            // Photo upload is not wired up
            ui.add(egui::Button::new("📷").rounding(egui::Rounding::same(16.0)))
                .on_hover_text("Cambiar foto");
            ui.add_space(16.0);
            ui.vertical(|ui| {
                ui.add_space(16.0);
                ui.label(egui::RichText::new(record.full_name()).strong().size(18.0));
                ui.label(egui::RichText::new(&record.position).weak());
                ui.label(egui::RichText::new(&record.department).weak());
            });
        });
        ui.add_space(16.0);
        ui.separator();
        ui.add_space(16.0);

        let mut submitted = false;

        // First/last name side by side, then one field per row,
        // then department/position side by side
        field_pair(ui, record, ProfileField::FirstName, ProfileField::LastName, &mut submitted);
        ui.add_space(12.0);
        for field in [ProfileField::Email, ProfileField::Phone] {
            submitted |= field_input(ui, record, field);
            ui.add_space(12.0);
        }
        field_pair(ui, record, ProfileField::Department, ProfileField::Position, &mut submitted);
        ui.add_space(20.0);

        ui.horizontal(|ui| {
            if primary_button(ui, "💾 Guardar Cambios").clicked() {
                submitted = true;
            }
            ui.add_space(8.0);
            if secondary_button(ui, "Cancelar").clicked() {
                shell.navigate(Route::Apps);
            }
        });

        if submitted {
            shell.save_profile(record, now);
        }
    });
    ui.add_space(24.0);

    card(ui, |ui| {
        ui.set_min_width(ui.available_width());
        card_header(ui, "Seguridad", "Gestiona tu contraseña y opciones de seguridad");
        ui.add_space(12.0);
        // Password change has no flow behind it
        secondary_button(ui, "Cambiar Contraseña");
    });
}

/// Two inputs in equal-width columns
fn field_pair(
    ui: &mut egui::Ui,
    record: &mut ProfileRecord,
    left: ProfileField,
    right: ProfileField,
    submitted: &mut bool,
) {
    ui.columns(2, |columns| {
        *submitted |= field_input(&mut columns[0], record, left);
        *submitted |= field_input(&mut columns[1], record, right);
    });
}

/// One labeled input bound to `field`
/// Returns true when Enter was pressed in it
fn field_input(ui: &mut egui::Ui, record: &mut ProfileRecord, field: ProfileField) -> bool {
    let response = labeled_input(ui, field.label(), record.field_mut(field));
    response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter))
}
