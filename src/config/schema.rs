//! Configuration schema definitions

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::PathBuf;

use crate::directory::Role;
use crate::error::Result;
use crate::gate::{SessionGate, UnlistedPagePolicy};
use crate::routing::{Page, RouteEntry, RouteTable};

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub directory: DirectoryConfig,

    #[serde(default)]
    pub gate: GateConfig,

    #[serde(default)]
    pub login: LoginConfig,

    #[serde(default)]
    pub routes: HashMap<Role, RouteOverride>,
}

/// User directory storage
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DirectoryConfig {
    #[serde(default = "default_store_path")]
    pub store_path: PathBuf,
}

fn default_store_path() -> PathBuf {
    PathBuf::from("./apexgate-store.json")
}

impl Default for DirectoryConfig {
    fn default() -> Self {
        Self {
            store_path: default_store_path(),
        }
    }
}

/// Gate behavior
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct GateConfig {
    #[serde(default)]
    pub unlisted_pages: UnlistedPagePolicy,
}

/// Login screen behavior
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginConfig {
    /// Seconds the "no matching account" notice stays on screen
    #[serde(default = "default_notice_secs")]
    pub notice_secs: u64,
}

fn default_notice_secs() -> u64 {
    3
}

impl Default for LoginConfig {
    fn default() -> Self {
        Self {
            notice_secs: default_notice_secs(),
        }
    }
}

/// Per-role replacement of a built-in route table entry
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct RouteOverride {
    #[serde(default)]
    pub home: Option<Page>,

    #[serde(default)]
    pub pages: Option<Vec<Page>>,
}

impl Config {
    /// The effective route table: the built-in entries with any
    /// `[routes.*]` overrides applied. A field an override omits keeps the
    /// built-in value for that role.
    pub fn route_table(&self) -> Result<RouteTable> {
        let mut table = RouteTable::default();

        for (role, routes) in &self.routes {
            let entry = RouteEntry {
                home: routes
                    .home
                    .clone()
                    .unwrap_or_else(|| table.home(*role).clone()),
                pages: routes
                    .pages
                    .clone()
                    .unwrap_or_else(|| table.allowed(*role).to_vec()),
            };
            table = table.with_entry(*role, entry)?;
        }

        Ok(table)
    }

    /// The gate this configuration describes.
    pub fn session_gate(&self) -> Result<SessionGate> {
        Ok(SessionGate::new(
            self.route_table()?,
            self.gate.unlisted_pages,
        ))
    }
}
