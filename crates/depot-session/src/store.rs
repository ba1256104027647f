//! Two-channel credential store.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::channel::{Channel, FileChannel, MemoryChannel};
use crate::cookie::{CookieSource, NoCookies};
use crate::error::Result;
use crate::profile::UserProfile;

/// Primary-channel key holding the raw bearer token.
pub const TOKEN_KEY: &str = "auth_token";

/// Primary-channel key holding the user profile as JSON text.
pub const USER_KEY: &str = "user_info";

/// Server-set cookie holding the raw bearer token.
const TOKEN_COOKIE: &str = "token";

/// Server-set cookie holding the URL-encoded JSON profile.
const USER_COOKIE: &str = "user";

/// Shared handle used by the request pipeline and the router.
pub type SharedCredentialStore = Arc<CredentialStore>;

/// Durable cache for the bearer token and user profile.
///
/// Both fields live independently in the primary channel. When the primary
/// channel is empty, reads fall back to the server-set cookie of the same
/// field and promote the value into the primary channel, so the cookie is a
/// one-time bootstrap path rather than a steady-state source. Whenever the
/// primary channel holds a value the cookie is never consulted, even if it
/// disagrees.
pub struct CredentialStore {
    primary: Box<dyn Channel>,
    fallback: Box<dyn CookieSource>,
}

impl CredentialStore {
    /// Create a store over an explicit channel pair.
    pub fn new(primary: impl Channel + 'static, fallback: impl CookieSource + 'static) -> Self {
        Self {
            primary: Box::new(primary),
            fallback: Box::new(fallback),
        }
    }

    /// File-backed store with no cookie channel.
    pub fn file(data_dir: impl Into<std::path::PathBuf>) -> Self {
        Self::new(FileChannel::new(data_dir), NoCookies)
    }

    /// In-memory store with no cookie channel, for tests and tooling.
    pub fn in_memory() -> Self {
        Self::new(MemoryChannel::new(), NoCookies)
    }

    /// Wrap the store in the shared handle the other components take.
    pub fn shared(self) -> SharedCredentialStore {
        Arc::new(self)
    }

    /// Cached bearer token.
    ///
    /// Read-with-promotion, not a pure accessor: when the primary channel is
    /// empty and the `token` cookie holds a value, that value is written
    /// into the primary channel before being returned. A failed promotion
    /// write is logged and the value is still returned.
    pub fn token(&self) -> Option<String> {
        if let Some(token) = self.primary.read(TOKEN_KEY) {
            return Some(token);
        }

        let token = self.fallback.get(TOKEN_COOKIE)?;
        debug!("promoting token from cookie channel into primary storage");
        if let Err(err) = self.primary.write(TOKEN_KEY, &token) {
            warn!(error = %err, "failed to promote token into primary storage");
        }
        Some(token)
    }

    /// Overwrite the cached token.
    pub fn set_token(&self, token: &str) -> Result<()> {
        self.primary.write(TOKEN_KEY, token)
    }

    /// Delete the cached token from the primary channel.
    ///
    /// The server-set cookie is outside this store's control and survives;
    /// a later read can promote it again until the server expires it.
    pub fn remove_token(&self) -> Result<()> {
        self.primary.delete(TOKEN_KEY)
    }

    /// Cached user profile.
    ///
    /// Same read-with-promotion pattern as [`CredentialStore::token`]. The
    /// cookie value is URL-encoded JSON; a payload that fails to decode or
    /// parse is logged and treated as "no cached user", never surfaced as
    /// an error.
    pub fn user(&self) -> Option<UserProfile> {
        if let Some(raw) = self.primary.read(USER_KEY) {
            return match serde_json::from_str(&raw) {
                Ok(user) => Some(user),
                Err(err) => {
                    warn!(error = %err, "stored user profile is not valid JSON");
                    None
                }
            };
        }

        let cookie = self.fallback.get(USER_COOKIE)?;
        let decoded = match urlencoding::decode(&cookie) {
            Ok(decoded) => decoded.into_owned(),
            Err(err) => {
                warn!(error = %err, "user cookie payload is not valid percent-encoding");
                return None;
            }
        };
        let user: UserProfile = match serde_json::from_str(&decoded) {
            Ok(user) => user,
            Err(err) => {
                warn!(error = %err, "user cookie payload does not parse as a profile");
                return None;
            }
        };

        debug!("promoting user profile from cookie channel into primary storage");
        if let Err(err) = self.primary.write(USER_KEY, &decoded) {
            warn!(error = %err, "failed to promote user profile into primary storage");
        }
        Some(user)
    }

    /// Serialize and cache the user profile in the primary channel.
    pub fn set_user(&self, user: &UserProfile) -> Result<()> {
        let json = serde_json::to_string(user)?;
        self.primary.write(USER_KEY, &json)
    }

    /// Delete the cached user profile from the primary channel.
    pub fn remove_user(&self) -> Result<()> {
        self.primary.delete(USER_KEY)
    }

    /// Whether a non-empty token is cached.
    ///
    /// Delegates to [`CredentialStore::token`], so the call may itself
    /// perform a promotion write.
    pub fn is_authenticated(&self) -> bool {
        self.token().is_some_and(|token| !token.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;
    use crate::channel::MemoryChannel;
    use crate::cookie::MemoryCookies;

    fn profile() -> UserProfile {
        UserProfile {
            id: "u-1".to_string(),
            openid: "wx-openid-1".to_string(),
            nickname: "Mei".to_string(),
            avatar_url: None,
            role: "USER".to_string(),
            created_at: None,
            last_login_at: None,
        }
    }

    /// Counts fallback lookups so tests can assert the cookie channel was
    /// never consulted.
    struct CountingCookies {
        inner: MemoryCookies,
        hits: AtomicUsize,
    }

    impl CountingCookies {
        fn new() -> Self {
            Self {
                inner: MemoryCookies::new(),
                hits: AtomicUsize::new(0),
            }
        }
    }

    impl CookieSource for CountingCookies {
        fn get(&self, name: &str) -> Option<String> {
            self.hits.fetch_add(1, Ordering::SeqCst);
            self.inner.get(name)
        }
    }

    #[test]
    fn set_then_get_returns_token() {
        let store = CredentialStore::in_memory();
        store.set_token("tok-1").unwrap();
        assert_eq!(store.token(), Some("tok-1".to_string()));
    }

    #[test]
    fn cookie_token_is_promoted_on_first_read() {
        let cookies = Arc::new(MemoryCookies::new());
        cookies.set("token", "from-cookie");
        let store = CredentialStore::new(MemoryChannel::new(), cookies.clone());

        assert_eq!(store.token(), Some("from-cookie".to_string()));

        // The promotion persisted: the cookie can vanish and the token stays.
        cookies.clear("token");
        assert_eq!(store.token(), Some("from-cookie".to_string()));
    }

    #[test]
    fn primary_wins_over_cookie() {
        let cookies = Arc::new(CountingCookies::new());
        cookies.inner.set("token", "cookie-token");
        let store = CredentialStore::new(MemoryChannel::new(), cookies.clone());
        store.set_token("primary-token").unwrap();

        assert_eq!(store.token(), Some("primary-token".to_string()));
        assert_eq!(cookies.hits.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn user_cookie_is_promoted_on_first_read() {
        let cookies = Arc::new(MemoryCookies::new());
        let json = serde_json::to_string(&profile()).unwrap();
        cookies.set("user", urlencoding::encode(&json).into_owned());
        let store = CredentialStore::new(MemoryChannel::new(), cookies.clone());

        assert_eq!(store.user(), Some(profile()));

        cookies.clear("user");
        assert_eq!(store.user(), Some(profile()));
    }

    #[test]
    fn malformed_user_cookie_is_treated_as_absent() {
        // Invalid percent-encoding (decodes to non-UTF-8).
        let cookies = Arc::new(MemoryCookies::new());
        cookies.set("user", "%FF%FE");
        let store = CredentialStore::new(MemoryChannel::new(), cookies);
        assert_eq!(store.user(), None);

        // Valid encoding, but not a profile.
        let cookies = Arc::new(MemoryCookies::new());
        cookies.set("user", "not%20json");
        let store = CredentialStore::new(MemoryChannel::new(), cookies);
        assert_eq!(store.user(), None);
    }

    #[test]
    fn set_user_roundtrips_through_primary() {
        let store = CredentialStore::in_memory();
        store.set_user(&profile()).unwrap();
        assert_eq!(store.user(), Some(profile()));

        store.remove_user().unwrap();
        assert_eq!(store.user(), None);
    }

    #[test]
    fn is_authenticated_tracks_token_presence() {
        let store = CredentialStore::in_memory();
        assert!(!store.is_authenticated());

        store.set_token("tok-1").unwrap();
        assert!(store.is_authenticated());

        store.remove_token().unwrap();
        assert!(!store.is_authenticated());

        store.set_token("").unwrap();
        assert!(!store.is_authenticated());
    }

    #[test]
    fn removing_token_cannot_remove_the_cookie() {
        let cookies = Arc::new(MemoryCookies::new());
        cookies.set("token", "sticky");
        let store = CredentialStore::new(MemoryChannel::new(), cookies);

        assert_eq!(store.token(), Some("sticky".to_string()));
        store.remove_token().unwrap();

        // The cookie is server-owned; until it expires there, a fresh read
        // promotes it again.
        assert_eq!(store.token(), Some("sticky".to_string()));
    }
}
