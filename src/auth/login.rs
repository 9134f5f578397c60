//! Login and logout flows
//!
//! Sign-in is a directory lookup: an email for the standard form, a role
//! for the zero-credential demo buttons. A miss changes nothing and is
//! reported as an outcome for the view layer to surface, not as an error.

use tracing::{debug, info};

use crate::directory::{Role, UserDirectory, UserRecord};
use crate::routing::{Page, RouteTable};

use super::session::SessionStore;

/// What a login attempt produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginOutcome {
    /// The lookup matched; the session now holds `user` and the tab should
    /// move to `destination`.
    SignedIn { user: UserRecord, destination: Page },
    /// No account matched. The session is exactly what it was before.
    NoMatch,
}

/// Sign in with an email address, ignoring case and surrounding whitespace.
pub fn standard_login(
    directory: &UserDirectory,
    table: &RouteTable,
    session: &mut SessionStore,
    email: &str,
) -> LoginOutcome {
    match directory.find_by_email(email.trim()) {
        Some(user) => sign_in(table, session, user.clone()),
        None => {
            debug!(email = email.trim(), "login failed, no matching account");
            LoginOutcome::NoMatch
        }
    }
}

/// Sign in as the first seeded account of `role`.
pub fn demo_login(
    directory: &UserDirectory,
    table: &RouteTable,
    session: &mut SessionStore,
    role: Role,
) -> LoginOutcome {
    match directory.find_first_by_role(role) {
        Some(user) => sign_in(table, session, user.clone()),
        None => {
            debug!(%role, "demo login failed, no account carries this role");
            LoginOutcome::NoMatch
        }
    }
}

/// Sign out and hand back the page the tab must land on.
pub fn logout(session: &mut SessionStore) -> Page {
    if let Some(user) = session.get() {
        info!(email = %user.email, "signed out");
    }
    session.clear();
    Page::login()
}

fn sign_in(table: &RouteTable, session: &mut SessionStore, user: UserRecord) -> LoginOutcome {
    let destination = table.home(user.role).clone();
    info!(email = %user.email, role = %user.role, "signed in");
    session.set(user.clone());
    LoginOutcome::SignedIn { user, destination }
}
