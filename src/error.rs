//! Error types for the suite shell
//!
//! The shell has no backend, so the only user-facing failures are login
//! form validation errors. Their `Display` text is the notice shown to the
//! user. Route parsing gets its own error for start-route configuration.

use thiserror::Error;

/// Login form validation failure
///
/// Surfaced as an error notice; the user stays on the login screen.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    /// Email or password was left empty
    #[error("Por favor completa todos los campos")]
    MissingFields,

    /// Email does not have a `local@domain.tld` shape
    #[error("Por favor ingresa un email válido")]
    InvalidEmail,
}

/// Route parsing failure
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RouteError {
    /// Path does not match any known route
    #[error("unknown route: {0}")]
    Unknown(String),

    /// `/app/` path without an application id
    #[error("missing application id in route: {0}")]
    MissingAppId(String),
}
