// Application state management
// Holds the shared shell services (route, theme, notices) and the view state
// of the currently mounted page

use std::time::{Duration, Instant};

use tracing::{debug, info, warn};

use crate::config::Config;
use crate::error::ValidationError;
use crate::state::catalog::Catalog;
use crate::state::login::LoginForm;
use crate::state::notify::{Notifier, ToastLevel, ToastQueue};
use crate::state::profile::ProfileRecord;
use crate::state::route::{AppId, Route};
use crate::state::session::Identity;
use crate::state::theme::Theme;

/// Sidebar width when expanded, in logical pixels
pub const SIDEBAR_EXPANDED_WIDTH: f32 = 256.0;
/// Sidebar width when collapsed, in logical pixels
pub const SIDEBAR_COLLAPSED_WIDTH: f32 = 80.0;

/// Navigation capability
pub trait Navigator {
    /// Switch to `route` immediately
    fn navigate(&mut self, route: Route);

    /// Switch to `route` once `delay` has elapsed after `now`
    fn navigate_after(&mut self, route: Route, delay: Duration, now: Instant);
}

/// A navigation waiting for its delay to elapse
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingNavigation {
    pub route: Route,
    pub due: Instant,
}

/// Fixed delays of the shell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timing {
    /// Successful sign-in → application picker
    pub login_redirect: Duration,
    /// Log out → login screen
    pub logout_redirect: Duration,
}

impl Default for Timing {
    fn default() -> Self {
        Self {
            login_redirect: Duration::from_millis(800),
            logout_redirect: Duration::from_millis(500),
        }
    }
}

/// Services shared by every screen
///
/// Screens receive `&mut Shell` instead of touching global state: the theme
/// flag, the notice queue and navigation all have this single writer.
#[derive(Debug, Clone)]
pub struct Shell {
    route: Route,
    pending: Option<PendingNavigation>,
    theme: Theme,
    pub toasts: ToastQueue,
    pub catalog: Catalog,
    pub identity: Identity,
    pub timing: Timing,
}

impl Shell {
    pub fn new(start: Route, theme: Theme, toasts: ToastQueue, timing: Timing) -> Self {
        Self {
            route: start,
            pending: None,
            theme,
            toasts,
            catalog: Catalog::new(),
            identity: Identity::default(),
            timing,
        }
    }

    /// Route currently shown
    pub fn route(&self) -> &Route {
        &self.route
    }

    /// Navigation scheduled for later, if any
    pub fn pending(&self) -> Option<&PendingNavigation> {
        self.pending.as_ref()
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    /// Flip between light and dark
    pub fn toggle_theme(&mut self) -> Theme {
        self.theme = self.theme.toggled();
        debug!(theme = ?self.theme, "Theme toggled");
        self.theme
    }

    /// Validate the login form and, if it passes, sign in
    ///
    /// On failure an error notice is shown and nothing is scheduled. On
    /// success the picker opens after the login delay. No credentials are
    /// checked.
    pub fn sign_in(&mut self, form: &LoginForm, now: Instant) -> Result<(), ValidationError> {
        if let Err(err) = form.validate() {
            warn!(error = %err, "Login form rejected");
            self.error(err.to_string(), now);
            return Err(err);
        }

        info!(email = %form.email, "Signing in");
        self.success("Iniciando sesión...", now);
        self.navigate_after(Route::Apps, self.timing.login_redirect, now);
        Ok(())
    }

    /// Show the sign-out notice and return to the login screen after the delay
    pub fn logout(&mut self, now: Instant) {
        info!(user = %self.identity.email, "Signing out");
        self.success("Sesión cerrada", now);
        self.navigate_after(Route::Login, self.timing.logout_redirect, now);
    }

    /// Open an application page from the picker
    pub fn open_app(&mut self, id: &str) {
        self.navigate(Route::app(id));
    }

    /// Acknowledge a profile save; nothing is stored
    pub fn save_profile(&mut self, record: &ProfileRecord, now: Instant) {
        debug!(email = %record.email, "Profile saved (not persisted)");
        self.success("Perfil actualizado correctamente", now);
    }

    /// Fire a due navigation and drop expired notices
    /// Returns true if the route changed
    pub fn tick(&mut self, now: Instant) -> bool {
        self.toasts.prune(now);

        match self.pending.take() {
            Some(pending) if pending.due <= now => {
                self.navigate(pending.route);
                true
            }
            other => {
                self.pending = other;
                false
            }
        }
    }

    /// Next instant at which `tick` has work to do
    pub fn next_wakeup(&self) -> Option<Instant> {
        let pending = self.pending.as_ref().map(|p| p.due);
        match (pending, self.toasts.next_expiry()) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        }
    }
}

impl Navigator for Shell {
    fn navigate(&mut self, route: Route) {
        if route != self.route {
            info!(from = %self.route, to = %route, "Navigating");
        }
        self.route = route;
    }

    fn navigate_after(&mut self, route: Route, delay: Duration, now: Instant) {
        let delay_ms = delay.as_millis();
        debug!(to = %route, delay_ms, "Navigation scheduled");
        // Replaces any earlier pending navigation
        self.pending = Some(PendingNavigation {
            route,
            due: now + delay,
        });
    }
}

impl Notifier for Shell {
    fn notify(&mut self, level: ToastLevel, message: String, now: Instant) {
        self.toasts.notify(level, message, now);
    }
}

/// View state of the layout chrome, local to one mounted page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LayoutState {
    pub sidebar_collapsed: bool,
}

impl LayoutState {
    pub fn toggle_sidebar(&mut self) {
        self.sidebar_collapsed = !self.sidebar_collapsed;
    }

    pub fn sidebar_width(&self) -> f32 {
        if self.sidebar_collapsed {
            SIDEBAR_COLLAPSED_WIDTH
        } else {
            SIDEBAR_EXPANDED_WIDTH
        }
    }
}

/// The mounted page and its local view state
///
/// Rebuilt from scratch whenever the route changes, so edits and toggles
/// never survive navigation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Page {
    Login(LoginForm),
    Apps,
    App { id: AppId, layout: LayoutState },
    Profile { layout: LayoutState, record: ProfileRecord },
}

impl Page {
    /// Fresh view state for `route`
    pub fn mount(route: &Route) -> Self {
        match route {
            Route::Login => Page::Login(LoginForm::default()),
            Route::Apps => Page::Apps,
            Route::App(id) => Page::App {
                id: id.clone(),
                layout: LayoutState::default(),
            },
            Route::Profile => Page::Profile {
                layout: LayoutState::default(),
                record: ProfileRecord::default(),
            },
        }
    }

    /// Route this page was mounted for
    pub fn route(&self) -> Route {
        match self {
            Page::Login(_) => Route::Login,
            Page::Apps => Route::Apps,
            Page::App { id, .. } => Route::App(id.clone()),
            Page::Profile { .. } => Route::Profile,
        }
    }
}

/// Main application state
#[derive(Debug, Clone)]
pub struct AppState {
    pub shell: Shell,
    pub page: Page,
}

impl Default for AppState {
    fn default() -> Self {
        Self::with_shell(Shell::new(
            Route::Login,
            Theme::Light,
            ToastQueue::default(),
            Timing::default(),
        ))
    }
}

impl AppState {
    /// Create a new application state with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// State configured from the environment-derived settings
    pub fn from_config(config: &Config) -> Self {
        let toasts = ToastQueue::new(config.timing.toast_lifetime, config.appearance.max_toasts);
        let timing = Timing {
            login_redirect: config.timing.login_redirect,
            logout_redirect: config.timing.logout_redirect,
        };
        Self::with_shell(Shell::new(
            config.appearance.start_route.clone(),
            Theme::from_dark_mode(config.appearance.dark_mode),
            toasts,
            timing,
        ))
    }

    fn with_shell(shell: Shell) -> Self {
        let page = Page::mount(shell.route());
        Self { shell, page }
    }

    pub fn route(&self) -> &Route {
        self.shell.route()
    }

    /// Remount the page if the shell route moved away from it
    pub fn sync_page(&mut self) {
        if self.page.route() != *self.shell.route() {
            self.page = Page::mount(self.shell.route());
        }
    }

    /// Advance timers, then remount the page if needed
    pub fn tick(&mut self, now: Instant) {
        self.shell.tick(now);
        self.sync_page();
    }

    /// Submit the login form of the mounted login page
    /// Does nothing if the login page is not mounted
    pub fn submit_login(&mut self, now: Instant) -> Option<Result<(), ValidationError>> {
        match &self.page {
            Page::Login(form) => Some(self.shell.sign_in(form, now)),
            _ => None,
        }
    }

    pub fn open_app(&mut self, id: &str) {
        self.shell.open_app(id);
        self.sync_page();
    }

    pub fn navigate(&mut self, route: Route) {
        self.shell.navigate(route);
        self.sync_page();
    }

    pub fn logout(&mut self, now: Instant) {
        self.shell.logout(now);
    }

    pub fn toggle_theme(&mut self) -> Theme {
        self.shell.toggle_theme()
    }

    /// Collapse or expand the sidebar of the mounted layout
    pub fn toggle_sidebar(&mut self) {
        if let Page::App { layout, .. } | Page::Profile { layout, .. } = &mut self.page {
            layout.toggle_sidebar();
        }
    }

    /// Profile record of the mounted profile page
    pub fn profile(&self) -> Option<&ProfileRecord> {
        match &self.page {
            Page::Profile { record, .. } => Some(record),
            _ => None,
        }
    }

    pub fn profile_mut(&mut self) -> Option<&mut ProfileRecord> {
        match &mut self.page {
            Page::Profile { record, .. } => Some(record),
            _ => None,
        }
    }

    /// Show the save notice for the mounted profile page
    pub fn save_profile(&mut self, now: Instant) {
        if let Page::Profile { record, .. } = &self.page {
            self.shell.save_profile(record, now);
        }
    }

    /// Leave the profile page for the picker; edits are dropped
    pub fn cancel_profile(&mut self) {
        self.navigate(Route::Apps);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::profile::ProfileField;

    fn login_state(email: &str, password: &str) -> AppState {
        let mut state = AppState::new();
        state.page = Page::Login(LoginForm::new(email, password));
        state
    }

    fn last_toast(state: &AppState) -> (ToastLevel, String) {
        let toast = state.shell.toasts.last().expect("a notice was shown");
        (toast.level, toast.message.clone())
    }

    #[test]
    fn test_app_state_creation() {
        let state = AppState::new();
        assert_eq!(state.route(), &Route::Login);
        assert_eq!(state.page, Page::Login(LoginForm::default()));
        assert_eq!(state.shell.theme(), Theme::Light);
        assert!(state.shell.pending().is_none());
    }

    #[test]
    fn test_login_missing_fields_never_navigates() {
        let now = Instant::now();
        for (email, password) in [("", ""), ("", "x"), ("a@b.com", "")] {
            let mut state = login_state(email, password);
            assert_eq!(state.submit_login(now), Some(Err(ValidationError::MissingFields)));
            assert_eq!(
                last_toast(&state),
                (ToastLevel::Error, "Por favor completa todos los campos".to_string())
            );
            assert!(state.shell.pending().is_none());

            state.tick(now + Duration::from_secs(10));
            assert_eq!(state.route(), &Route::Login);
        }
    }

    #[test]
    fn test_login_malformed_email_never_navigates() {
        let now = Instant::now();
        for email in ["plain", "a@b", "a b@c.com", "a@b@c.com", "@b.com"] {
            let mut state = login_state(email, "secret");
            assert_eq!(state.submit_login(now), Some(Err(ValidationError::InvalidEmail)));
            assert_eq!(
                last_toast(&state),
                (ToastLevel::Error, "Por favor ingresa un email válido".to_string())
            );

            state.tick(now + Duration::from_secs(10));
            assert_eq!(state.route(), &Route::Login);
        }
    }

    #[test]
    fn test_login_success_navigates_after_delay() {
        let now = Instant::now();
        let mut state = login_state("a@b.com", "x");
        assert_eq!(state.submit_login(now), Some(Ok(())));
        assert_eq!(
            last_toast(&state),
            (ToastLevel::Success, "Iniciando sesión...".to_string())
        );

        state.tick(now + Duration::from_millis(799));
        assert_eq!(state.route(), &Route::Login);
        // Form buffers survive until the redirect fires
        assert_eq!(state.page, Page::Login(LoginForm::new("a@b.com", "x")));

        state.tick(now + Duration::from_millis(800));
        assert_eq!(state.route(), &Route::Apps);
        assert_eq!(state.page, Page::Apps);
        assert!(state.shell.pending().is_none());
    }

    #[test]
    fn test_submit_login_outside_login_page() {
        let mut state = AppState::new();
        state.navigate(Route::Apps);
        assert_eq!(state.submit_login(Instant::now()), None);
    }

    #[test]
    fn test_logout_returns_to_login_after_delay() {
        let now = Instant::now();
        let mut state = AppState::new();
        state.open_app("nomina");

        state.logout(now);
        assert_eq!(last_toast(&state), (ToastLevel::Success, "Sesión cerrada".to_string()));

        state.tick(now + Duration::from_millis(499));
        assert_eq!(state.route(), &Route::app("nomina"));

        state.tick(now + Duration::from_millis(500));
        assert_eq!(state.route(), &Route::Login);
        assert_eq!(state.page, Page::Login(LoginForm::default()));
    }

    #[test]
    fn test_later_schedule_replaces_pending() {
        let now = Instant::now();
        let mut state = login_state("a@b.com", "x");
        state.submit_login(now);
        state.shell.logout(now);

        state.tick(now + Duration::from_millis(600));
        assert_eq!(state.route(), &Route::Login);
        assert!(state.shell.pending().is_none());
    }

    fn layout_of(page: &Page) -> Option<&LayoutState> {
        match page {
            Page::App { layout, .. } | Page::Profile { layout, .. } => Some(layout),
            _ => None,
        }
    }

    #[test]
    fn test_open_app_mounts_layout() {
        let mut state = AppState::new();
        state.open_app("capacitaciones");
        assert_eq!(state.route(), &Route::app("capacitaciones"));
        assert_eq!(state.route().path(), "/app/capacitaciones");
        assert_eq!(layout_of(&state.page), Some(&LayoutState::default()));
    }

    #[test]
    fn test_theme_toggle_pair() {
        let mut state = AppState::new();
        let original = state.shell.theme();
        assert_eq!(state.toggle_theme(), original.toggled());
        assert_eq!(state.toggle_theme(), original);
    }

    #[test]
    fn test_theme_survives_navigation() {
        let mut state = AppState::new();
        state.toggle_theme();
        state.open_app("matriz");
        state.navigate(Route::Profile);
        assert_eq!(state.shell.theme(), Theme::Dark);
    }

    #[test]
    fn test_sidebar_state_is_per_mount() {
        let mut state = AppState::new();
        state.open_app("matriz");
        state.toggle_sidebar();
        assert_eq!(layout_of(&state.page).map(|l| l.sidebar_width()), Some(SIDEBAR_COLLAPSED_WIDTH));

        state.navigate(Route::Profile);
        assert_eq!(layout_of(&state.page).map(|l| l.sidebar_width()), Some(SIDEBAR_EXPANDED_WIDTH));
    }

    #[test]
    fn test_sidebar_toggle_ignored_without_layout() {
        let mut state = AppState::new();
        state.navigate(Route::Apps);
        state.toggle_sidebar();
        assert_eq!(state.page, Page::Apps);
    }

    #[test]
    fn test_profile_edit_and_save() {
        let now = Instant::now();
        let mut state = AppState::new();
        state.navigate(Route::Profile);

        if let Some(record) = state.profile_mut() {
            record.set(ProfileField::Phone, "+34 600 000 000");
        }
        let edited = state.profile().cloned().expect("profile mounted");
        assert_eq!(edited.phone, "+34 600 000 000");
        assert_eq!(edited.first_name, "John");

        state.save_profile(now);
        assert_eq!(
            last_toast(&state),
            (ToastLevel::Success, "Perfil actualizado correctamente".to_string())
        );
        assert_eq!(state.profile(), Some(&edited));
        assert_eq!(state.route(), &Route::Profile);
    }

    #[test]
    fn test_profile_resets_on_remount() {
        let mut state = AppState::new();
        state.navigate(Route::Profile);
        if let Some(record) = state.profile_mut() {
            record.set(ProfileField::Department, "Ventas");
        }

        state.cancel_profile();
        assert_eq!(state.route(), &Route::Apps);
        assert!(state.profile().is_none());

        state.navigate(Route::Profile);
        assert_eq!(state.profile(), Some(&ProfileRecord::default()));
    }

    #[test]
    fn test_next_wakeup() {
        let now = Instant::now();
        let mut state = login_state("a@b.com", "x");
        assert_eq!(state.shell.next_wakeup(), None);

        state.submit_login(now);
        assert_eq!(state.shell.next_wakeup(), Some(now + Duration::from_millis(800)));
    }
}
