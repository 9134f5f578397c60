//! Session storage
//!
//! One tab, one session. The store lives in process memory and dies with
//! the process; a fresh process always starts signed out.

use crate::directory::UserRecord;

/// Holds the signed-in user for the lifetime of the process.
#[derive(Debug, Default)]
pub struct SessionStore {
    current: Option<UserRecord>,
}

impl SessionStore {
    /// A fresh store with nobody signed in.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sign `user` in, replacing any existing session.
    pub fn set(&mut self, user: UserRecord) {
        self.current = Some(user);
    }

    /// The signed-in user, if any.
    pub fn get(&self) -> Option<&UserRecord> {
        self.current.as_ref()
    }

    /// Remove the session. Clearing an empty store is a no-op.
    pub fn clear(&mut self) {
        self.current = None;
    }

    pub fn is_signed_in(&self) -> bool {
        self.current.is_some()
    }
}
