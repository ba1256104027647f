//! Auth API: login flows, session verification, QR login.
//!
//! Every operation is a single round trip with no local state mutation.
//! Persisting a grant into the credential store is the caller's job; the
//! gateway itself never writes storage.

use std::time::Duration;

use tokio::time::Instant;

use crate::client::DepotClient;
use crate::error::{Error, Result};
use crate::types::{
    AuthorizationUrl, Envelope, LoginGrant, ProfilePayload, QrLoginStatus, QrPoll, QrTicket,
    TokenValidity,
};

use depot_session::UserProfile;

/// Auth API client.
pub struct AuthApi {
    client: DepotClient,
}

impl AuthApi {
    pub(crate) fn new(client: DepotClient) -> Self {
        Self { client }
    }

    /// Begin an external-provider login: fetch the authorization URL and
    /// the state to round-trip through the provider.
    pub async fn authorization_url(&self) -> Result<AuthorizationUrl> {
        self.client
            .get::<Envelope<AuthorizationUrl>>("auth/wechat/login")
            .await?
            .into_data()
    }

    /// Complete the external-provider flow, exchanging the callback code
    /// for a token and profile.
    pub async fn exchange_callback(&self, code: &str, state: &str) -> Result<LoginGrant> {
        self.client
            .get_with_query::<Envelope<LoginGrant>, _>(
                "auth/wechat/callback",
                &[("code", code), ("state", state)],
            )
            .await?
            .into_data()
    }

    /// Ask the server whether the currently attached token is still valid.
    pub async fn verify(&self) -> Result<TokenValidity> {
        self.client
            .post_empty::<Envelope<TokenValidity>>("auth/verify")
            .await?
            .into_data()
    }

    /// Fetch the signed-in user's profile.
    pub async fn profile(&self) -> Result<UserProfile> {
        let payload = self
            .client
            .get::<Envelope<ProfilePayload>>("auth/userinfo")
            .await?
            .into_data()?;
        Ok(payload.user)
    }

    /// Tell the server the session is ending.
    ///
    /// Does not clear local storage; callers pair this with the credential
    /// store's removal operations.
    pub async fn logout(&self) -> Result<()> {
        self.client
            .post_empty::<Envelope<serde_json::Value>>("auth/logout")
            .await?
            .into_ack()
    }

    /// Issue a one-time QR login ticket.
    pub async fn start_qr_session(&self) -> Result<QrTicket> {
        self.client
            .get::<Envelope<QrTicket>>("auth/qrcode/generate")
            .await?
            .into_data()
    }

    /// Poll a QR login ticket once.
    ///
    /// `Confirmed` carries the session token; `Expired` is terminal and
    /// stays terminal no matter how often it is polled again.
    pub async fn poll_qr_status(&self, state: &str) -> Result<QrPoll> {
        self.client
            .get_with_query::<Envelope<QrPoll>, _>("auth/qrcode/check", &[("state", state)])
            .await?
            .into_data()
    }

    /// Poll a QR ticket until it resolves or the policy gives up.
    ///
    /// The server never pushes ticket updates, so resolution is by
    /// repeated polling under [`QrPollPolicy`].
    pub async fn wait_for_qr_login(&self, state: &str, policy: QrPollPolicy) -> Result<QrOutcome> {
        let started = Instant::now();
        loop {
            let poll = self.poll_qr_status(state).await?;
            match poll.status {
                QrLoginStatus::Confirmed => {
                    let token = poll.token.ok_or(Error::MissingPayload)?;
                    return Ok(QrOutcome::Confirmed { token });
                }
                QrLoginStatus::Expired => return Ok(QrOutcome::Expired),
                QrLoginStatus::Pending => {}
            }

            if started.elapsed() + policy.interval > policy.deadline {
                return Ok(QrOutcome::TimedOut);
            }
            tokio::time::sleep(policy.interval).await;
        }
    }
}

/// Polling policy for [`AuthApi::wait_for_qr_login`].
///
/// The server keeps a ticket alive for five minutes; the default checks
/// every two seconds until that window closes.
#[derive(Debug, Clone, Copy)]
pub struct QrPollPolicy {
    /// Delay between consecutive status checks.
    pub interval: Duration,
    /// Total time to keep polling before giving up.
    pub deadline: Duration,
}

impl Default for QrPollPolicy {
    fn default() -> Self {
        Self {
            interval: Duration::from_secs(2),
            deadline: Duration::from_secs(300),
        }
    }
}

/// Outcome of a QR login wait.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QrOutcome {
    /// Approved on the other device; the token is ready to be persisted by
    /// the caller.
    Confirmed { token: String },
    /// The server expired the ticket.
    Expired,
    /// The policy's deadline elapsed while the ticket was still pending.
    TimedOut,
}
