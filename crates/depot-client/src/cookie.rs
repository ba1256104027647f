//! Cookie-jar adapter for the session fallback channel.

use std::sync::Arc;

use reqwest::cookie::{CookieStore, Jar};
use url::Url;

use depot_session::CookieSource;

/// Reads server-set cookies for the API origin out of the shared reqwest
/// cookie jar.
///
/// The jar is written exclusively by the HTTP stack when the server sends
/// `Set-Cookie` (for example while completing a login redirect); this
/// adapter only ever reads it. Pair it with
/// [`ClientBuilder::cookie_jar`](crate::client::ClientBuilder::cookie_jar)
/// so the client and the credential store observe the same jar.
pub struct JarCookieSource {
    jar: Arc<Jar>,
    origin: Url,
}

impl JarCookieSource {
    /// Create a source reading cookies scoped to `origin`.
    pub fn new(jar: Arc<Jar>, origin: Url) -> Self {
        Self { jar, origin }
    }
}

impl CookieSource for JarCookieSource {
    fn get(&self, name: &str) -> Option<String> {
        let header = self.jar.cookies(&self.origin)?;
        let raw = header.to_str().ok()?;
        raw.split("; ").find_map(|pair| {
            let (key, value) = pair.split_once('=')?;
            (key == name).then(|| value.to_string())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_cookies_scoped_to_the_origin() {
        let origin = Url::parse("https://depot.example.com").unwrap();
        let jar = Arc::new(Jar::default());
        jar.add_cookie_str("token=jar-token", &origin);
        jar.add_cookie_str("user=%7B%7D", &origin);

        let source = JarCookieSource::new(jar, origin);
        assert_eq!(source.get("token"), Some("jar-token".to_string()));
        assert_eq!(source.get("user"), Some("%7B%7D".to_string()));
        assert_eq!(source.get("missing"), None);
    }
}
