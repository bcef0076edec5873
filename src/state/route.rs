// Client-side routes
// Maps the four shell screens to and from their path form

use std::fmt;
use std::str::FromStr;

use crate::error::RouteError;

/// Unique identifier for an application in the catalog
pub type AppId = String;

/// A screen of the shell, addressed by path
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Route {
    /// `/` - login screen
    Login,
    /// `/apps` - application picker
    Apps,
    /// `/app/:appId` - generic application page inside the layout
    App(AppId),
    /// `/profile` - profile form inside the layout
    Profile,
}

impl Route {
    /// Build the route for an application page
    pub fn app(id: impl Into<AppId>) -> Self {
        Route::App(id.into())
    }

    /// Path form of the route
    pub fn path(&self) -> String {
        match self {
            Route::Login => "/".to_string(),
            Route::Apps => "/apps".to_string(),
            Route::App(id) => format!("/app/{}", id),
            Route::Profile => "/profile".to_string(),
        }
    }

    /// Application id carried by the route, if any
    pub fn app_id(&self) -> Option<&str> {
        match self {
            Route::App(id) => Some(id),
            _ => None,
        }
    }
}

impl Default for Route {
    fn default() -> Self {
        Route::Login
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

impl FromStr for Route {
    type Err = RouteError;

    fn from_str(path: &str) -> Result<Self, Self::Err> {
        let trimmed = path.trim();
        // "/apps/" and "/apps" address the same screen
        let normalized = if trimmed.len() > 1 {
            trimmed.trim_end_matches('/')
        } else {
            trimmed
        };

        match normalized {
            "" | "/" => Ok(Route::Login),
            "/apps" => Ok(Route::Apps),
            "/profile" => Ok(Route::Profile),
            "/app" => Err(RouteError::MissingAppId(path.to_string())),
            other => match other.strip_prefix("/app/") {
                Some(id) if !id.is_empty() && !id.contains('/') => Ok(Route::app(id)),
                Some(_) => Err(RouteError::Unknown(path.to_string())),
                None => Err(RouteError::Unknown(path.to_string())),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_routes() {
        assert_eq!("/".parse::<Route>(), Ok(Route::Login));
        assert_eq!("/apps".parse::<Route>(), Ok(Route::Apps));
        assert_eq!("/apps/".parse::<Route>(), Ok(Route::Apps));
        assert_eq!("/profile".parse::<Route>(), Ok(Route::Profile));
        assert_eq!("/app/nomina".parse::<Route>(), Ok(Route::app("nomina")));
    }

    #[test]
    fn test_path_parses_back() {
        for route in [Route::Login, Route::Apps, Route::Profile, Route::app("matriz")] {
            assert_eq!(route.path().parse::<Route>(), Ok(route.clone()));
        }
    }

    #[test]
    fn test_parse_rejects_unknown() {
        assert_eq!(
            "/settings".parse::<Route>(),
            Err(RouteError::Unknown("/settings".to_string()))
        );
        assert_eq!(
            "/app".parse::<Route>(),
            Err(RouteError::MissingAppId("/app".to_string()))
        );
        assert!("/app/a/b".parse::<Route>().is_err());
    }

    #[test]
    fn test_app_id() {
        assert_eq!(Route::app("x").app_id(), Some("x"));
        assert_eq!(Route::Profile.app_id(), None);
    }
}
