//! Apexgate - role-gated session router for the APEX LMS
//!
//! The library decides, on every page load, whether the current visitor may
//! see the requested page and where to send them when they may not: an
//! empty session belongs on the login page, a signed-in visitor belongs on
//! the pages their role lists, and everything else redirects to the role's
//! home. The `apexgate` binary wraps it in a terminal that plays the
//! browser tab.

pub mod auth;
pub mod cli;
pub mod config;
pub mod directory;
pub mod error;
pub mod gate;
pub mod routing;
pub mod store;

pub use config::Config;
pub use directory::{Role, UserDirectory, UserRecord};
pub use error::{Error, Result};
pub use gate::{GateDecision, RedirectReason, SessionGate, UnlistedPagePolicy};
pub use routing::{Page, RouteTable};
