// Login screen
// Centered sign-in card with a theme toggle in the corner

use std::time::Instant;

use eframe::egui;
use tracing::debug;

use crate::state::{LoginForm, Shell};
use crate::ui::components::*;

const CARD_WIDTH: f32 = 380.0;

/// Render the login screen
pub fn render_login(ctx: &egui::Context, shell: &mut Shell, form: &mut LoginForm, now: Instant) {
    egui::CentralPanel::default().show(ctx, |ui| {
        // Theme toggle pinned top-right
        ui.horizontal(|ui| {
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.add_space(16.0);
                if theme_toggle(ui, shell.theme()).clicked() {
                    shell.toggle_theme();
                }
            });
        });

        ui.vertical_centered(|ui| {
            ui.add_space((ui.available_height() * 0.12).max(16.0));
            ui.set_max_width(CARD_WIDTH);

            card(ui, |ui| {
                ui.vertical_centered(|ui| {
                    ui.add_space(8.0);
                    icon_tile(ui, "🔒", PRIMARY, 64.0);
                    ui.add_space(12.0);
                    ui.heading(egui::RichText::new("Suite Empresarial").size(26.0).strong());
                    ui.label(egui::RichText::new("Accede a tus aplicaciones").weak());
                });
                ui.add_space(24.0);

                let submitted = render_form(ui, form);

                if submitted {
                    submit(shell, form, now);
                }

                ui.add_space(20.0);
                ui.separator();
                ui.add_space(8.0);
                ui.vertical_centered(|ui| {
                    ui.label(
                        egui::RichText::new("© 2024 Suite Empresarial. Todos los derechos reservados.")
                            .small()
                            .weak(),
                    );
                });
            });
        });
    });
}

/// Hand the form to the shell
/// A rejection has already reached the user as an error notice
fn submit(shell: &mut Shell, form: &LoginForm, now: Instant) {
    if let Err(err) = shell.sign_in(form, now) {
        debug!(error = %err, "Login rejected, staying on form");
    }
}

/// Render the two inputs and the submit button
/// Returns true when the form was submitted by click or Enter
fn render_form(ui: &mut egui::Ui, form: &mut LoginForm) -> bool {
    ui.with_layout(egui::Layout::top_down(egui::Align::LEFT), |ui| {
        ui.label(egui::RichText::new("👤 Correo Electrónico").strong());
        ui.add_space(2.0);
        let email = ui.add(
            egui::TextEdit::singleline(&mut form.email)
                .hint_text("tu@empresa.com")
                .desired_width(f32::INFINITY),
        );
        ui.add_space(12.0);

        ui.label(egui::RichText::new("🔒 Contraseña").strong());
        ui.add_space(2.0);
        let password = ui.add(
            egui::TextEdit::singleline(&mut form.password)
                .password(true)
                .hint_text("••••••••")
                .desired_width(f32::INFINITY),
        );
        ui.add_space(20.0);

        let enter = (email.lost_focus() || password.lost_focus())
            && ui.input(|i| i.key_pressed(egui::Key::Enter));

        let clicked = ui
            .add_sized(
                [ui.available_width(), 40.0],
                egui::Button::new(
                    egui::RichText::new("Iniciar Sesión")
                        .strong()
                        .color(egui::Color32::WHITE),
                )
                .fill(PRIMARY),
            )
            .clicked();

        enter || clicked
    })
    .inner
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{AppState, Route, ToastLevel};

    #[test]
    fn test_rejected_submit_stays_on_form() {
        let mut state = AppState::new();
        let now = Instant::now();
        submit(&mut state.shell, &LoginForm::new("john", "secret"), now);

        assert!(state.shell.pending().is_none());
        let notice = state.shell.toasts.last().map(|t| (t.level, t.message.clone()));
        assert_eq!(
            notice,
            Some((ToastLevel::Error, "Por favor ingresa un email válido".to_string()))
        );

        state.tick(now + std::time::Duration::from_secs(5));
        assert_eq!(state.route(), &Route::Login);
    }

    #[test]
    fn test_accepted_submit_schedules_redirect() {
        let mut state = AppState::new();
        submit(&mut state.shell, &LoginForm::new("a@b.com", "x"), Instant::now());
        assert_eq!(state.shell.pending().map(|p| &p.route), Some(&Route::Apps));
    }
}
