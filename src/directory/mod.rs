//! User directory
//!
//! The durable account list the gate authorizes against. It is seeded once
//! on first run and read-only afterwards; lookups return an explicit
//! absence instead of erroring.

mod seed;

pub use seed::seed_users;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use tracing::{debug, info};

use crate::error::{Error, Result};
use crate::store::KeyValue;

/// Store key the serialized directory lives under.
pub const USERS_KEY: &str = "apex_users";

/// Platform roles, in descending order of privilege.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Platform operator, system-wide administration
    Superadmin,
    /// Instructor, authoring and cohort management
    Admin,
    /// Student, course consumption
    Learner,
}

impl Role {
    /// Every role, in privilege order.
    pub const ALL: [Role; 3] = [Role::Superadmin, Role::Admin, Role::Learner];
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::Superadmin => write!(f, "superadmin"),
            Role::Admin => write!(f, "admin"),
            Role::Learner => write!(f, "learner"),
        }
    }
}

/// A directory account. Immutable once seeded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    /// Stable numeric identifier
    pub id: u32,
    /// Login email, unique without regard to case
    pub email: String,
    /// The account's role
    pub role: Role,
    /// Display name
    pub name: String,
}

/// The seeded account list, loaded from one entry of a keyed store.
pub struct UserDirectory {
    store: Box<dyn KeyValue>,
    records: Vec<UserRecord>,
}

impl UserDirectory {
    /// Open the directory from `store`, validating whatever is already there.
    pub fn open(store: Box<dyn KeyValue>) -> Result<Self> {
        let records: Vec<UserRecord> = match store.get_value(USERS_KEY)? {
            Some(value) => serde_json::from_value(value)?,
            None => Vec::new(),
        };
        validate_records(&records)?;
        Ok(Self { store, records })
    }

    /// Seed the built-in accounts if the directory is empty.
    ///
    /// Returns `true` when the seed was written. A populated directory is
    /// left untouched and the call reports `false`; it is safe to invoke on
    /// every start.
    pub fn bootstrap(&mut self) -> Result<bool> {
        if !self.records.is_empty() {
            debug!("user directory already populated, skipping seed");
            return Ok(false);
        }

        let users = seed::seed_users();
        self.store
            .put_value(USERS_KEY, serde_json::to_value(&users)?)?;
        self.records = users;
        info!(count = self.records.len(), "seeded user directory");
        Ok(true)
    }

    /// Look up an account by email, ignoring case.
    pub fn find_by_email(&self, email: &str) -> Option<&UserRecord> {
        let needle = email.to_lowercase();
        self.records
            .iter()
            .find(|user| user.email.to_lowercase() == needle)
    }

    /// First account carrying `role`, in stable seed order.
    pub fn find_first_by_role(&self, role: Role) -> Option<&UserRecord> {
        self.records.iter().find(|user| user.role == role)
    }

    /// All accounts, in stable order.
    pub fn records(&self) -> &[UserRecord] {
        &self.records
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }
}

fn validate_records(records: &[UserRecord]) -> Result<()> {
    let mut ids = HashSet::new();
    let mut emails = HashSet::new();

    for record in records {
        if !ids.insert(record.id) {
            return Err(Error::InvalidDirectory(format!(
                "duplicate user id {}",
                record.id
            )));
        }
        if !emails.insert(record.email.to_lowercase()) {
            return Err(Error::InvalidDirectory(format!(
                "duplicate email '{}'",
                record.email
            )));
        }
    }

    Ok(())
}
