//! Sessions and sign-in
//!
//! The session is advisory client-side state: an email that matches a
//! directory account is all it takes to sign in. Passwords, tokens, and
//! server-side enforcement are deliberately out of scope.

pub mod login;
pub mod session;

pub use login::{demo_login, logout, standard_login, LoginOutcome};
pub use session::SessionStore;
