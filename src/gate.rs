//! The session gate
//!
//! Every page load passes through `SessionGate::evaluate`, which decides
//! whether the current session may stay on the requested page and where it
//! must be sent when it may not. Evaluation is a pure function of the
//! session and the requested page; applying the redirect is the resolver's
//! job.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::directory::{Role, UserRecord};
use crate::routing::{Page, RouteTable};

/// Handling of pages the route table does not mention for any role.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnlistedPagePolicy {
    /// Render unlisted pages for any signed-in visitor.
    #[default]
    Allow,
    /// Treat unlisted pages like any other page outside the visitor's role.
    Deny,
}

/// Why a redirect was issued.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RedirectReason {
    /// No session, and the page needs one.
    SignedOut,
    /// A live session tried to open the login page.
    AlreadySignedIn,
    /// The session's role does not include the page.
    RoleDenied,
}

/// The outcome of one page-load evaluation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GateDecision {
    /// Render the page. `role` is what the page chrome should display,
    /// `None` on public pages with no session.
    Authorized { role: Option<Role> },
    /// Leave the page for `target` before rendering anything.
    Redirect { target: Page, reason: RedirectReason },
}

/// Decides, per page load, whether to render or redirect.
#[derive(Debug, Clone)]
pub struct SessionGate {
    table: RouteTable,
    policy: UnlistedPagePolicy,
}

impl SessionGate {
    pub fn new(table: RouteTable, policy: UnlistedPagePolicy) -> Self {
        Self { table, policy }
    }

    /// The table this gate authorizes against.
    pub fn table(&self) -> &RouteTable {
        &self.table
    }

    pub fn policy(&self) -> UnlistedPagePolicy {
        self.policy
    }

    /// Evaluate one page load.
    ///
    /// A redirect target always differs from `requested`: the signed-out
    /// case targets the login page and never fires on it, and every other
    /// redirect targets the role home, which the role is authorized to
    /// open. Redirects therefore settle in at most one hop.
    pub fn evaluate(&self, session: Option<&UserRecord>, requested: &Page) -> GateDecision {
        let user = match session {
            Some(user) => user,
            None => {
                if requested.is_login() {
                    return GateDecision::Authorized { role: None };
                }
                debug!(page = %requested, "no session, redirecting to login");
                return GateDecision::Redirect {
                    target: Page::login(),
                    reason: RedirectReason::SignedOut,
                };
            }
        };

        if requested.is_login() {
            debug!(role = %user.role, "already signed in, leaving the login page");
            return GateDecision::Redirect {
                target: self.table.home(user.role).clone(),
                reason: RedirectReason::AlreadySignedIn,
            };
        }

        // The public landing page is never enforced; only its chrome
        // changes with the session.
        if requested.is_landing() {
            return GateDecision::Authorized {
                role: Some(user.role),
            };
        }

        if self.table.is_allowed(user.role, requested) {
            return GateDecision::Authorized {
                role: Some(user.role),
            };
        }

        if !self.table.is_protected(requested) && self.policy == UnlistedPagePolicy::Allow {
            debug!(page = %requested, "page not in the route table, allowed by policy");
            return GateDecision::Authorized {
                role: Some(user.role),
            };
        }

        warn!(role = %user.role, page = %requested, "access denied, redirecting to role home");
        GateDecision::Redirect {
            target: self.table.home(user.role).clone(),
            reason: RedirectReason::RoleDenied,
        }
    }
}

impl Default for SessionGate {
    fn default() -> Self {
        Self::new(RouteTable::default(), UnlistedPagePolicy::default())
    }
}
