//! Typed HTTP client for the Depot inventory/order management API.
//!
//! Every request flows through a single shared pipeline: the cached bearer
//! credential is attached on the way out, and server failures are mapped on
//! the way back. A rejected credential (HTTP 401) tears down the cached
//! session and sends the host application to its login view with the
//! interrupted path as the redirect target; every other failure is logged
//! and handed to the caller unchanged.
//!
//! # Example
//!
//! ```no_run
//! use depot_client::DepotClient;
//! use depot_session::CredentialStore;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let store = CredentialStore::file("/var/lib/depot").shared();
//! let client = DepotClient::builder()
//!     .base_url("https://depot.example.com")
//!     .credential_store(store.clone())
//!     .build()?;
//!
//! // Complete a login and persist the grant.
//! let grant = client.auth().exchange_callback("code", "state").await?;
//! store.set_token(&grant.token)?;
//! store.set_user(&grant.user)?;
//!
//! // From here, every call carries the credential automatically.
//! let products = client.products().list().await?;
//! println!("{} products", products.len());
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod client;
pub mod cookie;
pub mod error;
pub mod navigator;
pub mod types;

pub use client::{ClientBuilder, DepotClient};
pub use cookie::JarCookieSource;
pub use depot_session::UserProfile;
pub use error::{Error, Result};
pub use navigator::{Navigator, NoNavigation};
pub use types::*;

// Re-export API types commonly used with the auth flows.
pub use api::{AuthApi, QrOutcome, QrPollPolicy};
