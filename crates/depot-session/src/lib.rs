//! Credential storage for the Depot client.
//!
//! The bearer token and the signed-in user's profile are cached across two
//! storage channels: a durable primary channel owned by this crate, and a
//! read-only cookie channel written by the server while completing a login
//! redirect. [`CredentialStore`] ties the two together with a one-time
//! promotion rule: a value found in the cookie channel is copied into the
//! primary channel on first read and the cookie is never consulted again.

pub mod channel;
pub mod cookie;
pub mod error;
pub mod profile;
pub mod store;

pub use channel::{Channel, FileChannel, MemoryChannel};
pub use cookie::{CookieSource, MemoryCookies, NoCookies};
pub use error::{Error, Result};
pub use profile::UserProfile;
pub use store::{CredentialStore, SharedCredentialStore, TOKEN_KEY, USER_KEY};
