//! Pre-navigation guard.

use crate::route::RouteTable;

/// Where a navigation ends up after the guard runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// Navigation proceeds to the requested path unchanged.
    Proceed,
    /// Navigation is redirected elsewhere.
    Redirect(Target),
}

/// A redirect destination, optionally carrying the originally requested
/// path in a `redirect` query parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Target {
    pub path: String,
    pub redirect: Option<String>,
}

impl Target {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            redirect: None,
        }
    }

    pub fn with_redirect(path: impl Into<String>, redirect: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            redirect: Some(redirect.into()),
        }
    }

    /// Render the target as a path with query string.
    pub fn full_path(&self) -> String {
        match &self.redirect {
            Some(redirect) => format!("{}?redirect={}", self.path, urlencoding::encode(redirect)),
            None => self.path.clone(),
        }
    }
}

/// Decide a navigation to `path` before it happens.
///
/// Pure over the route table and the current authentication state; no
/// network calls. Exactly one outcome applies, checked in order:
///
/// 1. the target opted out of authentication: proceed;
/// 2. the target requires authentication and none is cached: redirect to
///    the login view, carrying the intended path;
/// 3. the target is the login view but a credential is cached: redirect
///    home;
/// 4. otherwise: proceed.
pub fn resolve(table: &RouteTable, path: &str, authenticated: bool) -> Resolution {
    if table.requires_auth(path) && !authenticated {
        return Resolution::Redirect(Target::with_redirect(table.login_path(), path));
    }
    if table.is_login(path) && authenticated {
        return Resolution::Redirect(Target::new(table.home_path()));
    }
    Resolution::Proceed
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::route::Route;

    fn table() -> RouteTable {
        RouteTable::new()
            .route(Route::new("/login", "login").public())
            .route(Route::new("/about", "about").public())
            .route(Route::new("/orders/:id", "order-detail"))
    }

    #[test]
    fn unauthenticated_access_redirects_to_login() {
        let resolution = resolve(&table(), "/orders/5", false);
        assert_eq!(
            resolution,
            Resolution::Redirect(Target::with_redirect("/login", "/orders/5"))
        );
        if let Resolution::Redirect(target) = resolution {
            assert_eq!(target.full_path(), "/login?redirect=%2Forders%2F5");
        }
    }

    #[test]
    fn authenticated_login_visit_redirects_home() {
        assert_eq!(
            resolve(&table(), "/login", true),
            Resolution::Redirect(Target::new("/"))
        );
    }

    #[test]
    fn public_route_proceeds_without_credential() {
        assert_eq!(resolve(&table(), "/about", false), Resolution::Proceed);
        assert_eq!(resolve(&table(), "/login", false), Resolution::Proceed);
    }

    #[test]
    fn authenticated_access_proceeds() {
        assert_eq!(resolve(&table(), "/orders/5", true), Resolution::Proceed);
    }

    #[test]
    fn unknown_routes_default_to_requiring_auth() {
        assert_eq!(
            resolve(&table(), "/settings", false),
            Resolution::Redirect(Target::with_redirect("/login", "/settings"))
        );
    }
}
