//! Main client implementation.

use std::sync::Arc;
use std::time::Duration;

use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderValue};
use url::Url;

use depot_session::SharedCredentialStore;

use crate::api::{
    AlertsApi, AuthApi, CustomersApi, InventoryApi, InvoicesApi, OrdersApi, ProductsApi,
    PurchasesApi, StatisticsApi, SuppliersApi, WarehousesApi,
};
use crate::error::{Error, Result};
use crate::navigator::{Navigator, NoNavigation};
use crate::types::ErrorBody;

/// Default timeout for requests.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Depot API client.
///
/// A single shared pipeline for every endpoint wrapper. The cached bearer
/// credential is attached to each outgoing request here, and failure
/// handling happens here, so individual wrappers never touch either. A 401
/// tears down the cached session and asks the navigator to show the login
/// view; all other failures are logged and propagated unchanged.
///
/// # Example
///
/// ```no_run
/// use depot_client::DepotClient;
/// use depot_session::CredentialStore;
///
/// # async fn example() -> depot_client::Result<()> {
/// let client = DepotClient::builder()
///     .base_url("https://depot.example.com")
///     .credential_store(CredentialStore::file("/var/lib/depot").shared())
///     .build()?;
///
/// let orders = client.orders().list().await?;
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct DepotClient {
    /// Inner shared state.
    inner: Arc<ClientInner>,
}

/// Inner client state (shared across clones).
pub(crate) struct ClientInner {
    /// HTTP client.
    http: reqwest::Client,
    /// Base URL for API requests.
    base_url: Url,
    /// Request timeout.
    timeout: Duration,
    /// Credential cache read on every request.
    store: SharedCredentialStore,
    /// Host navigation hook for the 401 teardown.
    navigator: Arc<dyn Navigator>,
}

impl DepotClient {
    /// Create a new client builder.
    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &Url {
        &self.inner.base_url
    }

    // ─────────────────────────────────────────────────────────────────────────
    // API accessors
    // ─────────────────────────────────────────────────────────────────────────

    /// Access the auth API.
    pub fn auth(&self) -> AuthApi {
        AuthApi::new(self.clone())
    }

    /// Access the products API.
    pub fn products(&self) -> ProductsApi {
        ProductsApi::new(self.clone())
    }

    /// Access the purchases API.
    pub fn purchases(&self) -> PurchasesApi {
        PurchasesApi::new(self.clone())
    }

    /// Access the orders API.
    pub fn orders(&self) -> OrdersApi {
        OrdersApi::new(self.clone())
    }

    /// Access the customers API.
    pub fn customers(&self) -> CustomersApi {
        CustomersApi::new(self.clone())
    }

    /// Access the suppliers API.
    pub fn suppliers(&self) -> SuppliersApi {
        SuppliersApi::new(self.clone())
    }

    /// Access the invoices API.
    pub fn invoices(&self) -> InvoicesApi {
        InvoicesApi::new(self.clone())
    }

    /// Access the inventory API.
    pub fn inventory(&self) -> InventoryApi {
        InventoryApi::new(self.clone())
    }

    /// Access the statistics API.
    pub fn statistics(&self) -> StatisticsApi {
        StatisticsApi::new(self.clone())
    }

    /// Access the warehouses API.
    pub fn warehouses(&self) -> WarehousesApi {
        WarehousesApi::new(self.clone())
    }

    /// Access the inventory alerts API.
    pub fn alerts(&self) -> AlertsApi {
        AlertsApi::new(self.clone())
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Internal HTTP methods
    // ─────────────────────────────────────────────────────────────────────────

    /// Build a URL for an API path.
    pub(crate) fn url(&self, path: &str) -> Result<Url> {
        let path = path.trim_start_matches('/');
        self.inner
            .base_url
            .join(&format!("api/{}", path))
            .map_err(Error::from)
    }

    /// Attach the cached bearer credential, when one is available.
    ///
    /// The sole place credentials enter a request; endpoint wrappers never
    /// handle them.
    fn authorize(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match self.inner.store.token() {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    /// Make a GET request.
    pub(crate) async fn get<T: serde::de::DeserializeOwned>(&self, path: &str) -> Result<T> {
        let url = self.url(path)?;
        let request = self.authorize(self.inner.http.get(url));
        self.handle_response(self.dispatch(request).await?).await
    }

    /// Make a GET request with query parameters.
    pub(crate) async fn get_with_query<T, Q>(&self, path: &str, query: &Q) -> Result<T>
    where
        T: serde::de::DeserializeOwned,
        Q: serde::Serialize + ?Sized,
    {
        let url = self.url(path)?;
        let request = self.authorize(self.inner.http.get(url).query(query));
        self.handle_response(self.dispatch(request).await?).await
    }

    /// Make a POST request with a JSON body.
    pub(crate) async fn post<T, B>(&self, path: &str, body: &B) -> Result<T>
    where
        T: serde::de::DeserializeOwned,
        B: serde::Serialize + ?Sized,
    {
        let url = self.url(path)?;
        let request = self.authorize(self.inner.http.post(url).json(body));
        self.handle_response(self.dispatch(request).await?).await
    }

    /// Make a POST request with no body.
    pub(crate) async fn post_empty<T: serde::de::DeserializeOwned>(&self, path: &str) -> Result<T> {
        let url = self.url(path)?;
        let request = self.authorize(self.inner.http.post(url));
        self.handle_response(self.dispatch(request).await?).await
    }

    /// Make a PUT request.
    pub(crate) async fn put<T, B>(&self, path: &str, body: &B) -> Result<T>
    where
        T: serde::de::DeserializeOwned,
        B: serde::Serialize + ?Sized,
    {
        let url = self.url(path)?;
        let request = self.authorize(self.inner.http.put(url).json(body));
        self.handle_response(self.dispatch(request).await?).await
    }

    /// Make a PATCH request.
    pub(crate) async fn patch<T, B>(&self, path: &str, body: &B) -> Result<T>
    where
        T: serde::de::DeserializeOwned,
        B: serde::Serialize + ?Sized,
    {
        let url = self.url(path)?;
        let request = self.authorize(self.inner.http.patch(url).json(body));
        self.handle_response(self.dispatch(request).await?).await
    }

    /// Make a PATCH request carrying parameters in the query string.
    pub(crate) async fn patch_with_query<T, Q>(&self, path: &str, query: &Q) -> Result<T>
    where
        T: serde::de::DeserializeOwned,
        Q: serde::Serialize + ?Sized,
    {
        let url = self.url(path)?;
        let request = self.authorize(self.inner.http.patch(url).query(query));
        self.handle_response(self.dispatch(request).await?).await
    }

    /// Make a DELETE request.
    pub(crate) async fn delete(&self, path: &str) -> Result<()> {
        let url = self.url(path)?;
        let request = self.authorize(self.inner.http.delete(url));
        let response = self.dispatch(request).await?;

        if !response.status().is_success() {
            return Err(self.handle_failure(response).await);
        }
        Ok(())
    }

    /// Send a request, logging transport-level failures.
    async fn dispatch(&self, request: reqwest::RequestBuilder) -> Result<reqwest::Response> {
        match request.timeout(self.inner.timeout).send().await {
            Ok(response) => Ok(response),
            Err(err) => {
                tracing::error!(error = %err, "request dispatch failed");
                Err(err.into())
            }
        }
    }

    /// Handle a response, extracting the body or mapping the failure.
    async fn handle_response<T: serde::de::DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> Result<T> {
        if !response.status().is_success() {
            return Err(self.handle_failure(response).await);
        }
        Ok(response.json().await?)
    }

    /// Map a failed response to an error, running the 401 teardown.
    async fn handle_failure(&self, response: reqwest::Response) -> Error {
        let status = response.status().as_u16();
        let message = match response.json::<ErrorBody>().await {
            Ok(body) => body
                .message
                .or(body.error)
                .unwrap_or_else(|| format!("HTTP {}", status)),
            Err(_) => format!("HTTP {}", status),
        };

        if status == 401 {
            self.expire_session();
            return Error::Unauthorized(message);
        }

        tracing::error!(status, %message, "request failed");
        Error::Api { status, message }
    }

    /// Tear down the cached session and send the user to the login view.
    ///
    /// Runs once per rejected response, whichever endpoint wrapper issued
    /// the request. The interrupted path rides along as the redirect target
    /// so the user lands back where they were after signing in again.
    fn expire_session(&self) {
        tracing::warn!("server rejected the credential, clearing cached session");
        if let Err(err) = self.inner.store.remove_token() {
            tracing::warn!(error = %err, "failed to clear cached token");
        }
        if let Err(err) = self.inner.store.remove_user() {
            tracing::warn!(error = %err, "failed to clear cached user profile");
        }

        let current = self.inner.navigator.current_path();
        self.inner.navigator.redirect_to_login(&current);
    }
}

/// Builder for creating a [`DepotClient`].
pub struct ClientBuilder {
    base_url: Option<String>,
    timeout: Duration,
    store: Option<SharedCredentialStore>,
    navigator: Arc<dyn Navigator>,
    cookie_jar: Option<Arc<reqwest::cookie::Jar>>,
    user_agent: Option<String>,
}

impl ClientBuilder {
    /// Create a new builder with defaults.
    pub fn new() -> Self {
        Self {
            base_url: None,
            timeout: DEFAULT_TIMEOUT,
            store: None,
            navigator: Arc::new(NoNavigation),
            cookie_jar: None,
            user_agent: None,
        }
    }

    /// Set the base URL for the server.
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Set the request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the credential store read on every request.
    pub fn credential_store(mut self, store: SharedCredentialStore) -> Self {
        self.store = Some(store);
        self
    }

    /// Set the navigation hook driven on authorization failure.
    pub fn navigator(mut self, navigator: Arc<dyn Navigator>) -> Self {
        self.navigator = navigator;
        self
    }

    /// Share a cookie jar with the HTTP stack.
    ///
    /// Server-set cookies land in the jar, where a
    /// [`JarCookieSource`](crate::cookie::JarCookieSource) can expose them
    /// to the credential store as its fallback channel.
    pub fn cookie_jar(mut self, jar: Arc<reqwest::cookie::Jar>) -> Self {
        self.cookie_jar = Some(jar);
        self
    }

    /// Set a custom user agent.
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.user_agent = Some(agent.into());
        self
    }

    /// Build the client.
    pub fn build(self) -> Result<DepotClient> {
        let base_url = self
            .base_url
            .ok_or_else(|| Error::Config("base_url is required".to_string()))?;
        let store = self
            .store
            .ok_or_else(|| Error::Config("credential_store is required".to_string()))?;

        // Parse and normalize base URL
        let mut base_url = Url::parse(&base_url)?;
        if !base_url.path().ends_with('/') {
            base_url.set_path(&format!("{}/", base_url.path()));
        }

        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let user_agent = self
            .user_agent
            .unwrap_or_else(|| format!("depot-client/{}", env!("CARGO_PKG_VERSION")));

        let mut http = reqwest::Client::builder()
            .default_headers(headers)
            .user_agent(user_agent);
        if let Some(jar) = self.cookie_jar {
            http = http.cookie_provider(jar);
        }
        let http = http.build()?;

        Ok(DepotClient {
            inner: Arc::new(ClientInner {
                http,
                base_url,
                timeout: self.timeout,
                store,
                navigator: self.navigator,
            }),
        })
    }
}

impl Default for ClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use serde_json::json;
    use wiremock::matchers::{header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use depot_session::CredentialStore;

    use super::*;

    /// Records redirect requests so tests can assert the 401 teardown.
    #[derive(Default)]
    struct RecordingNavigator {
        current: Mutex<String>,
        redirects: Mutex<Vec<String>>,
    }

    impl RecordingNavigator {
        fn at(path: &str) -> Arc<Self> {
            let nav = Self::default();
            *nav.current.lock().unwrap() = path.to_string();
            Arc::new(nav)
        }

        fn redirects(&self) -> Vec<String> {
            self.redirects.lock().unwrap().clone()
        }
    }

    impl Navigator for RecordingNavigator {
        fn current_path(&self) -> String {
            self.current.lock().unwrap().clone()
        }

        fn redirect_to_login(&self, redirect: &str) {
            self.redirects.lock().unwrap().push(redirect.to_string());
        }
    }

    fn client_for(server: &MockServer, store: SharedCredentialStore) -> DepotClient {
        DepotClient::builder()
            .base_url(server.uri())
            .credential_store(store)
            .build()
            .unwrap()
    }

    #[test]
    fn builder_requires_base_url() {
        let result = DepotClient::builder()
            .credential_store(CredentialStore::in_memory().shared())
            .build();
        assert!(result.is_err());
    }

    #[test]
    fn builder_requires_credential_store() {
        let result = DepotClient::builder()
            .base_url("http://localhost:8080")
            .build();
        assert!(result.is_err());
    }

    #[test]
    fn url_building() {
        let client = DepotClient::builder()
            .base_url("http://localhost:8080")
            .credential_store(CredentialStore::in_memory().shared())
            .build()
            .unwrap();

        let url = client.url("products").unwrap();
        assert_eq!(url.as_str(), "http://localhost:8080/api/products");

        let url = client.url("/products").unwrap();
        assert_eq!(url.as_str(), "http://localhost:8080/api/products");
    }

    #[tokio::test]
    async fn bearer_credential_is_attached_when_cached() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/products"))
            .and(header("authorization", "Bearer tok-1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
            .expect(1)
            .mount(&server)
            .await;

        let store = CredentialStore::in_memory().shared();
        store.set_token("tok-1").unwrap();
        let client = client_for(&server, store);

        client.products().list().await.unwrap();
    }

    #[tokio::test]
    async fn request_goes_out_unauthenticated_without_token() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/products"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
            .mount(&server)
            .await;

        let client = client_for(&server, CredentialStore::in_memory().shared());
        client.products().list().await.unwrap();

        let requests = server.received_requests().await.unwrap();
        assert_eq!(requests.len(), 1);
        assert!(!requests[0].headers.contains_key("authorization"));
    }

    #[tokio::test]
    async fn unauthorized_response_tears_down_session() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/orders"))
            .respond_with(ResponseTemplate::new(401).set_body_json(json!({
                "success": false,
                "message": "token expired",
            })))
            .mount(&server)
            .await;

        let store = CredentialStore::in_memory().shared();
        store.set_token("stale").unwrap();
        store
            .set_user(&depot_session::UserProfile {
                id: "u-1".to_string(),
                openid: "wx-openid-1".to_string(),
                nickname: "Mei".to_string(),
                avatar_url: None,
                role: "USER".to_string(),
                created_at: None,
                last_login_at: None,
            })
            .unwrap();
        let navigator = RecordingNavigator::at("/orders/5");
        let client = DepotClient::builder()
            .base_url(server.uri())
            .credential_store(store.clone())
            .navigator(navigator.clone())
            .build()
            .unwrap();

        let err = client.orders().list().await.unwrap_err();
        assert!(err.is_unauthorized());

        // Both fields cleared, exactly one redirect carrying the path that
        // was active when the rejection arrived.
        assert_eq!(store.token(), None);
        assert!(store.user().is_none());
        assert_eq!(navigator.redirects(), vec!["/orders/5".to_string()]);
    }

    #[tokio::test]
    async fn other_failures_leave_the_session_alone() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/orders"))
            .respond_with(
                ResponseTemplate::new(500).set_body_json(json!({"error": "boom"})),
            )
            .mount(&server)
            .await;

        let store = CredentialStore::in_memory().shared();
        store.set_token("still-good").unwrap();
        let navigator = RecordingNavigator::at("/orders");
        let client = DepotClient::builder()
            .base_url(server.uri())
            .credential_store(store.clone())
            .navigator(navigator.clone())
            .build()
            .unwrap();

        let err = client.orders().list().await.unwrap_err();
        assert!(matches!(err, Error::Api { status: 500, ref message } if message == "boom"));

        assert_eq!(store.token(), Some("still-good".to_string()));
        assert!(navigator.redirects().is_empty());
    }
}
