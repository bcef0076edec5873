// State management module
// Handles routing, the app catalog, shell services and per-page view state

pub mod app_state;
pub mod catalog;
pub mod login;
pub mod notify;
pub mod profile;
pub mod route;
pub mod session;
pub mod theme;

pub use app_state::{AppState, LayoutState, Navigator, Page, Shell};
pub use catalog::{AccentColor, AppDescriptor, Catalog, Icon, ModuleDescriptor};
pub use login::LoginForm;
pub use notify::{Notifier, Toast, ToastLevel};
pub use profile::{ProfileField, ProfileRecord};
pub use route::Route;
pub use theme::Theme;
