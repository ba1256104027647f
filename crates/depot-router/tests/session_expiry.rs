//! End-to-end session expiry: a server-side credential rejection clears the
//! cached session and lands the router on the login view with the
//! interrupted path as the redirect target.

use std::sync::Arc;

use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use depot_client::DepotClient;
use depot_router::{Resolution, Route, RouteTable, Router};
use depot_session::CredentialStore;

fn table() -> RouteTable {
    RouteTable::new()
        .route(Route::new("/login", "login").public())
        .route(Route::new("/orders", "orders"))
}

#[tokio::test]
async fn rejected_credential_redirects_to_login() {
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

    let router = Arc::new(Router::new(table(), store.clone()));
    assert!(matches!(router.push("/orders"), Resolution::Proceed));

    let client = DepotClient::builder()
        .base_url(server.uri())
        .credential_store(store.clone())
        .navigator(router.clone())
        .build()
        .unwrap();

    let err = client.orders().list().await.unwrap_err();
    assert!(err.is_unauthorized());

    // Session torn down, user parked on the login view with a way back.
    assert_eq!(store.token(), None);
    assert!(!store.is_authenticated());
    assert_eq!(router.current_path(), "/login?redirect=%2Forders");
}

#[tokio::test]
async fn failed_request_without_rejection_stays_put() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/orders"))
        .respond_with(ResponseTemplate::new(503).set_body_json(json!({
            "error": "maintenance",
        })))
        .mount(&server)
        .await;

    let store = CredentialStore::in_memory().shared();
    store.set_token("tok-1").unwrap();

    let router = Arc::new(Router::new(table(), store.clone()));
    router.push("/orders");

    let client = DepotClient::builder()
        .base_url(server.uri())
        .credential_store(store.clone())
        .navigator(router.clone())
        .build()
        .unwrap();

    let err = client.orders().list().await.unwrap_err();
    assert!(err.is_server_error());

    assert_eq!(store.token(), Some("tok-1".to_string()));
    assert_eq!(router.current_path(), "/orders");
}
