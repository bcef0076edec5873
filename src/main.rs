// Suite Shell - Main Entry Point
// Native front-end shell for the business application suite

use std::time::Instant;

use eframe::egui;
use suite_shell::config::Config;
use suite_shell::state::{AppState, Theme};
use suite_shell::ui::render_app;
use tracing::info;

fn main() -> eframe::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env();
    info!(
        start_route = %config.appearance.start_route,
        dark_mode = config.appearance.dark_mode,
        "Starting Suite Empresarial"
    );

    // Configure window options
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(config.window.title.clone())
            .with_inner_size(config.window_size())
            .with_min_inner_size([800.0, 600.0]),
        ..Default::default()
    };

    let title = config.window.title.clone();
    eframe::run_native(
        &title,
        options,
        Box::new(move |_cc| Box::new(SuiteApp::new(&config))),
    )
}

/// Main application struct
/// Owns the application state and drives it once per frame
struct SuiteApp {
    /// Routing, shell services and the mounted page
    state: AppState,
    /// Theme last pushed into the egui context
    applied_theme: Option<Theme>,
}

impl SuiteApp {
    /// Create a new application instance
    fn new(config: &Config) -> Self {
        let state = AppState::from_config(config);
        info!(apps = state.shell.catalog.len(), "Catalog loaded");
        Self {
            state,
            applied_theme: None,
        }
    }

    /// Push the theme flag into egui when it changed
    fn apply_theme(&mut self, ctx: &egui::Context) {
        let theme = self.state.shell.theme();
        if self.applied_theme != Some(theme) {
            ctx.set_visuals(theme.visuals());
            self.applied_theme = Some(theme);
        }
    }
}

impl eframe::App for SuiteApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let now = Instant::now();

        // Fire due navigations before drawing
        self.state.tick(now);
        self.apply_theme(ctx);

        render_app(ctx, &mut self.state, now);

        // A toggle during this frame shows on the next one
        if self.applied_theme != Some(self.state.shell.theme()) {
            ctx.request_repaint();
        }

        // Wake up for the next pending navigation or notice expiry
        if let Some(at) = self.state.shell.next_wakeup() {
            ctx.request_repaint_after(at.saturating_duration_since(Instant::now()));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use suite_shell::state::Route;

    #[test]
    fn test_app_creation() {
        let app = SuiteApp::new(&Config::default());
        assert_eq!(app.state.route(), &Route::Login);
        assert_eq!(app.state.shell.theme(), Theme::Light);
        assert!(app.applied_theme.is_none());
    }

    #[test]
    fn test_app_starts_from_config() {
        let config = Config::from_lookup(|key| match key {
            "SUITE_START_ROUTE" => Some("/apps".to_string()),
            "SUITE_DARK_MODE" => Some("1".to_string()),
            _ => None,
        });
        let app = SuiteApp::new(&config);
        assert_eq!(app.state.route(), &Route::Apps);
        assert_eq!(app.state.shell.theme(), Theme::Dark);
    }

    #[test]
    fn test_apply_theme_tracks_toggle() {
        let ctx = egui::Context::default();
        let mut app = SuiteApp::new(&Config::default());

        app.apply_theme(&ctx);
        assert_eq!(app.applied_theme, Some(Theme::Light));
        assert!(!ctx.style().visuals.dark_mode);

        app.state.toggle_theme();
        app.apply_theme(&ctx);
        assert_eq!(app.applied_theme, Some(Theme::Dark));
        assert!(ctx.style().visuals.dark_mode);
    }
}
