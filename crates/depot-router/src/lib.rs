//! Route table and navigation guard for the Depot client application.
//!
//! Navigation is gated on the cached credential: any route that has not
//! explicitly opted out requires authentication, and an unauthenticated
//! attempt is redirected to the login view carrying the intended path. The
//! [`Router`] also serves as the request pipeline's navigation hook, so a
//! server-side credential rejection lands the user on the same login view.

pub mod guard;
pub mod route;
pub mod router;

pub use guard::{Resolution, Target, resolve};
pub use route::{Route, RouteTable};
pub use router::Router;
