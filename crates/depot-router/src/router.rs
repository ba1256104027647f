//! Application router: current-location tracking plus the guard.

use parking_lot::RwLock;
use tracing::debug;

use depot_client::Navigator;
use depot_session::SharedCredentialStore;

use crate::guard::{self, Resolution, Target};
use crate::route::RouteTable;

/// In-process router.
///
/// Every [`push`](Router::push) evaluates the navigation guard against the
/// cached credential state before the current location moves. Evaluations
/// are serialized: one completes, and the location settles, before the next
/// is considered.
pub struct Router {
    table: RouteTable,
    store: SharedCredentialStore,
    current: RwLock<String>,
}

impl Router {
    /// Create a router starting at the table's home path.
    pub fn new(table: RouteTable, store: SharedCredentialStore) -> Self {
        let current = table.home_path().to_string();
        Self {
            table,
            store,
            current: RwLock::new(current),
        }
    }

    /// Path currently displayed.
    pub fn current_path(&self) -> String {
        self.current.read().clone()
    }

    /// Navigate to `path`, applying the guard first.
    ///
    /// Returns the guard's resolution; the current location is updated to
    /// wherever the navigation landed. Checking authentication may itself
    /// promote a cookie credential into primary storage.
    pub fn push(&self, path: &str) -> Resolution {
        let mut current = self.current.write();
        let resolution = guard::resolve(&self.table, path, self.store.is_authenticated());
        match &resolution {
            Resolution::Proceed => {
                *current = path.to_string();
            }
            Resolution::Redirect(target) => {
                let full = target.full_path();
                debug!(from = %path, to = %full, "navigation redirected");
                *current = full;
            }
        }
        resolution
    }
}

impl Navigator for Router {
    fn current_path(&self) -> String {
        Router::current_path(self)
    }

    fn redirect_to_login(&self, redirect: &str) {
        let login = Target::with_redirect(self.table.login_path(), redirect).full_path();
        self.push(&login);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::route::Route;
    use depot_session::CredentialStore;

    fn table() -> RouteTable {
        RouteTable::new()
            .route(Route::new("/login", "login").public())
            .route(Route::new("/orders", "orders"))
            .route(Route::new("/orders/:id", "order-detail"))
    }

    #[test]
    fn starts_at_home() {
        let router = Router::new(table(), CredentialStore::in_memory().shared());
        assert_eq!(router.current_path(), "/");
    }

    #[test]
    fn guarded_route_redirects_when_signed_out() {
        let router = Router::new(table(), CredentialStore::in_memory().shared());
        let resolution = router.push("/orders/5");

        assert!(matches!(resolution, Resolution::Redirect(_)));
        assert_eq!(router.current_path(), "/login?redirect=%2Forders%2F5");
    }

    #[test]
    fn login_redirects_home_when_signed_in() {
        let store = CredentialStore::in_memory().shared();
        store.set_token("tok-1").unwrap();
        let router = Router::new(table(), store);

        router.push("/orders");
        assert_eq!(router.current_path(), "/orders");

        let resolution = router.push("/login");
        assert!(matches!(resolution, Resolution::Redirect(_)));
        assert_eq!(router.current_path(), "/");
    }

    #[test]
    fn redirect_to_login_lands_on_the_login_view() {
        let router = Router::new(table(), CredentialStore::in_memory().shared());
        Navigator::redirect_to_login(&router, "/orders/5");
        assert_eq!(router.current_path(), "/login?redirect=%2Forders%2F5");
    }
}
