//! Static route table.

/// A navigable view in the application.
#[derive(Debug, Clone)]
pub struct Route {
    path: String,
    name: String,
    requires_auth: bool,
}

impl Route {
    /// Register a route. Routes require authentication unless explicitly
    /// opted out with [`Route::public`].
    pub fn new(path: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            name: name.into(),
            requires_auth: true,
        }
    }

    /// Opt the route out of authentication.
    pub fn public(mut self) -> Self {
        self.requires_auth = false;
        self
    }

    /// Route pattern. Segments starting with `:` match any one segment,
    /// e.g. `/orders/:id`.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Route name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether navigating here requires a cached credential.
    pub fn requires_auth(&self) -> bool {
        self.requires_auth
    }

    fn matches(&self, path: &str) -> bool {
        let pattern: Vec<&str> = self.path.trim_matches('/').split('/').collect();
        let target: Vec<&str> = path.trim_matches('/').split('/').collect();
        pattern.len() == target.len()
            && pattern
                .iter()
                .zip(&target)
                .all(|(expected, actual)| expected.starts_with(':') || expected == actual)
    }
}

/// Static table of application routes.
#[derive(Debug, Clone)]
pub struct RouteTable {
    routes: Vec<Route>,
    login_path: String,
    home_path: String,
}

impl RouteTable {
    /// Empty table with `/login` as the login view and `/` as home.
    pub fn new() -> Self {
        Self {
            routes: Vec::new(),
            login_path: "/login".to_string(),
            home_path: "/".to_string(),
        }
    }

    /// Register a route (builder style).
    pub fn route(mut self, route: Route) -> Self {
        self.routes.push(route);
        self
    }

    /// Path of the login view.
    pub fn login_path(&self) -> &str {
        &self.login_path
    }

    /// Path of the default view.
    pub fn home_path(&self) -> &str {
        &self.home_path
    }

    /// Route matching `path`, ignoring any query string.
    pub fn resolve(&self, path: &str) -> Option<&Route> {
        let path = normalize(path);
        self.routes.iter().find(|route| route.matches(path))
    }

    /// Whether navigating to `path` requires a cached credential.
    ///
    /// Opting out is explicit, so unregistered paths require
    /// authentication too.
    pub fn requires_auth(&self, path: &str) -> bool {
        self.resolve(path).is_none_or(Route::requires_auth)
    }

    /// Whether `path` is the login view.
    pub fn is_login(&self, path: &str) -> bool {
        normalize(path) == self.login_path
    }
}

impl Default for RouteTable {
    fn default() -> Self {
        Self::new()
    }
}

fn normalize(path: &str) -> &str {
    path.split('?').next().unwrap_or(path)
}
