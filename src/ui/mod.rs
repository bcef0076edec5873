// UI module
// Contains the screens, layout chrome and reusable components

pub mod app_page;
pub mod components;
pub mod layout;
pub mod login;
pub mod picker;
pub mod profile;

use std::time::Instant;

use eframe::egui;

use crate::state::{AppState, Page};

pub use components::render_toasts;

/// Render the mounted page and the notice overlay for one frame
pub fn render_app(ctx: &egui::Context, state: &mut AppState, now: Instant) {
    let AppState { shell, page } = state;

    match page {
        Page::Login(form) => login::render_login(ctx, shell, form, now),
        Page::Apps => picker::render_picker(ctx, shell, now),
        Page::App { id, layout } => {
            let id = id.as_str();
            layout::render_layout(ctx, shell, layout, Some(id), now, |ui, shell| {
                app_page::render_app_page(ui, shell, id);
            });
        }
        Page::Profile { layout, record } => {
            layout::render_layout(ctx, shell, layout, None, now, |ui, shell| {
                profile::render_profile(ui, shell, record, now);
            });
        }
    }

    render_toasts(ctx, state.shell.toasts.visible());

    // Navigation requested during this frame takes effect on the next one
    state.sync_page();
}
