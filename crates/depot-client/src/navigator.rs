//! Navigation seam used by the request pipeline.

/// Host navigation hook driven by the pipeline when a credential is
/// rejected.
///
/// Implemented by the application's router. The pipeline only needs to know
/// where the user currently is and how to send them to the login view; it
/// never inspects routes itself.
pub trait Navigator: Send + Sync {
    /// Path of the view the user is currently on.
    fn current_path(&self) -> String;

    /// Navigate to the login view, carrying `redirect` so the user can be
    /// returned to their original destination after re-authenticating.
    fn redirect_to_login(&self, redirect: &str);
}

/// No-op navigator for headless use (scripts, background jobs, tests).
#[derive(Debug, Default)]
pub struct NoNavigation;

impl Navigator for NoNavigation {
    fn current_path(&self) -> String {
        "/".to_string()
    }

    fn redirect_to_login(&self, _redirect: &str) {}
}
