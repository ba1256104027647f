//! Signed-in user profile.

use serde::{Deserialize, Serialize};

/// Profile of the signed-in user as returned by the identity endpoints.
///
/// Timestamps are ISO 8601 strings. Fields a newer server adds are ignored
/// on decode.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    /// Stable user id.
    pub id: String,
    /// External-provider identity the account is bound to.
    pub openid: String,
    /// Display name.
    pub nickname: String,
    /// Avatar image URL, when the provider supplied one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
    /// Authorization role, e.g. `USER` or `ADMIN`.
    pub role: String,
    /// Account creation time.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    /// Most recent login time.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_login_at: Option<String>,
}
