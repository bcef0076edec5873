// Main application layout
// Sidebar, header and content slot shared by the application and profile pages

use std::time::Instant;

use eframe::egui;

use crate::state::{AppDescriptor, LayoutState, ModuleDescriptor, Navigator, Route, Shell};
use crate::ui::components::*;

/// Render the layout chrome around `content`
///
/// `app_id` is the application from the route; `None` (the profile page)
/// shows the generic fallback entry, same as an unknown id.
pub fn render_layout(
    ctx: &egui::Context,
    shell: &mut Shell,
    layout: &mut LayoutState,
    app_id: Option<&str>,
    now: Instant,
    content: impl FnOnce(&mut egui::Ui, &mut Shell),
) {
    let current = shell.catalog.resolve(app_id);
    let modules = shell.catalog.modules(app_id);

    render_sidebar(ctx, shell, layout, current, modules);
    render_header(ctx, shell, current, now);

    egui::CentralPanel::default().show(ctx, |ui| {
        egui::ScrollArea::vertical()
            .id_source("page_scroll")
            .auto_shrink([false; 2])
            .show(ui, |ui| {
                ui.add_space(24.0);
                ui.horizontal(|ui| {
                    ui.add_space(24.0);
                    ui.vertical(|ui| {
                        ui.set_max_width(ui.available_width() - 24.0);
                        content(ui, shell);
                    });
                });
                ui.add_space(24.0);
            });
    });
}

/// Render the collapsible left sidebar
fn render_sidebar(
    ctx: &egui::Context,
    shell: &mut Shell,
    layout: &mut LayoutState,
    current: &AppDescriptor,
    modules: &[ModuleDescriptor],
) {
    let collapsed = layout.sidebar_collapsed;

    egui::SidePanel::left("app_sidebar")
        .resizable(false)
        .exact_width(layout.sidebar_width())
        .show(ctx, |ui| {
            // Brand and collapse control
            ui.add_space(12.0);
            ui.horizontal(|ui| {
                if !collapsed {
                    icon_tile(ui, "⊞", PRIMARY, 32.0);
                    ui.label(egui::RichText::new("Suite").strong());
                }
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let chevron = if collapsed { "▶" } else { "◀" };
                    if ui.add(egui::Button::new(chevron).frame(false)).clicked() {
                        layout.toggle_sidebar();
                    }
                });
            });
            ui.add_space(8.0);
            ui.separator();
            ui.add_space(8.0);

            // Current application
            ui.horizontal(|ui| {
                icon_tile(ui, icon_glyph(current.icon), PRIMARY, 40.0);
                if !collapsed {
                    ui.vertical(|ui| {
                        ui.label(egui::RichText::new(current.title).strong());
                        ui.label(egui::RichText::new("Aplicación actual").small().weak());
                    });
                }
            });
            ui.add_space(8.0);
            ui.separator();

            render_footer(ui, shell, collapsed);

            egui::ScrollArea::vertical()
                .id_source("module_list_scroll")
                .auto_shrink([false; 2])
                .show(ui, |ui| {
                    if !collapsed {
                        ui.add_space(4.0);
                        ui.label(egui::RichText::new("MÓDULOS").small().strong().weak());
                        ui.add_space(4.0);
                    }
                    for module in modules {
                        let text = if collapsed {
                            icon_glyph(module.icon).to_string()
                        } else {
                            format!("{}  {}", icon_glyph(module.icon), module.name)
                        };
                        // Module entries have no target yet
                        ui.add_sized(
                            [ui.available_width(), 32.0],
                            egui::Button::new(text).frame(false),
                        )
                        .on_hover_text(module.name);
                    }
                });
        });
}

/// Render the sidebar footer: user card and the switch-app button
fn render_footer(ui: &mut egui::Ui, shell: &mut Shell, collapsed: bool) {
    egui::TopBottomPanel::bottom("sidebar_footer")
        .show_separator_line(true)
        .show_inside(ui, |ui| {
            ui.add_space(8.0);
            let identity = shell.identity;
            ui.horizontal(|ui| {
                avatar(ui, &identity.initials(), 32.0);
                if !collapsed {
                    ui.vertical(|ui| {
                        ui.label(egui::RichText::new(identity.display_name).strong());
                        ui.label(egui::RichText::new(identity.email).small().weak());
                    });
                }
            });
            ui.add_space(6.0);
            let label = if collapsed { "⊞" } else { "⊞  Cambiar aplicación" };
            if ui
                .add(egui::Button::new(egui::RichText::new(label).small()).frame(false))
                .on_hover_text("Cambiar aplicación")
                .clicked()
            {
                shell.navigate(Route::Apps);
            }
            ui.add_space(8.0);
        });
}

/// Render the top header: current app, theme toggle and user menu
fn render_header(ctx: &egui::Context, shell: &mut Shell, current: &AppDescriptor, now: Instant) {
    egui::TopBottomPanel::top("app_header")
        .exact_height(64.0)
        .show(ctx, |ui| {
            ui.horizontal_centered(|ui| {
                ui.add_space(16.0);
                icon_tile(ui, icon_glyph(current.icon), PRIMARY, 36.0);
                ui.vertical(|ui| {
                    ui.label(egui::RichText::new(current.title).strong().size(18.0));
                    ui.label(egui::RichText::new("Sistema de Gestión").small().weak());
                });

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.add_space(16.0);
                    render_user_menu(ui, shell, now);
                    ui.separator();
                    if theme_toggle(ui, shell.theme()).clicked() {
                        shell.toggle_theme();
                    }
                });
            });
        });
}

/// Avatar with a dropdown for profile editing and logout
fn render_user_menu(ui: &mut egui::Ui, shell: &mut Shell, now: Instant) {
    let identity = shell.identity;
    let title = format!("{}\n{}", identity.display_name, identity.role);

    ui.menu_button(title, |ui| {
        ui.set_min_width(200.0);
        ui.label(egui::RichText::new("Mi Cuenta").strong());
        ui.separator();
        if ui.button("👤 Editar Perfil").clicked() {
            shell.navigate(Route::Profile);
            ui.close_menu();
        }
        ui.separator();
        let logout = egui::RichText::new("🚪 Cerrar Sesión").color(ui.visuals().error_fg_color);
        if ui.button(logout).clicked() {
            shell.logout(now);
            ui.close_menu();
        }
    });
    avatar(ui, &identity.initials(), 32.0);
}
