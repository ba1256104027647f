//! Read-only cookie fallback channel.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;

/// Source of server-set cookies.
///
/// The credential store never writes through this interface. Cookies are set
/// by the server (for example while completing a login redirect) and read
/// here at most once per value, to bootstrap the primary channel.
pub trait CookieSource: Send + Sync {
    /// Look up a cookie by name.
    fn get(&self, name: &str) -> Option<String>;
}

impl<C: CookieSource + ?Sized> CookieSource for Arc<C> {
    fn get(&self, name: &str) -> Option<String> {
        (**self).get(name)
    }
}

/// Cookie source for deployments with no cookie channel at all.
#[derive(Debug, Default)]
pub struct NoCookies;

impl CookieSource for NoCookies {
    fn get(&self, _name: &str) -> Option<String> {
        None
    }
}

/// Map-backed cookie source; stands in for the server in tests.
#[derive(Debug, Default)]
pub struct MemoryCookies {
    entries: RwLock<HashMap<String, String>>,
}

impl MemoryCookies {
    pub fn new() -> Self {
        Self::default()
    }

    /// Simulate a `Set-Cookie` from the server.
    pub fn set(&self, name: impl Into<String>, value: impl Into<String>) {
        self.entries.write().insert(name.into(), value.into());
    }

    /// Drop a cookie, as an expiring server cookie would.
    pub fn clear(&self, name: &str) {
        self.entries.write().remove(name);
    }
}

impl CookieSource for MemoryCookies {
    fn get(&self, name: &str) -> Option<String> {
        self.entries.read().get(name).cloned()
    }
}
