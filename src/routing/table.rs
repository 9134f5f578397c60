//! Role route authorization table

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::directory::Role;
use crate::error::{Error, Result};

use super::Page;

/// The pages one role may open, and where that role lands by default.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteEntry {
    /// Landing page for the role; must appear in `pages`
    pub home: Page,
    /// Every page the role may open
    pub pages: Vec<Page>,
}

/// Per-role page allow-lists. Read-only once built.
#[derive(Debug, Clone)]
pub struct RouteTable {
    entries: HashMap<Role, RouteEntry>,
}

impl RouteTable {
    /// Build a table, checking that it is total over the roles, that no
    /// page list is empty, and that each home page is in its own list.
    ///
    /// The home check is what makes a redirect to home terminate: the next
    /// load of the home page is always authorized.
    pub fn new(entries: HashMap<Role, RouteEntry>) -> Result<Self> {
        for role in Role::ALL {
            let entry = entries.get(&role).ok_or_else(|| {
                Error::InvalidRouteTable(format!("missing entry for role '{role}'"))
            })?;

            if entry.pages.is_empty() {
                return Err(Error::InvalidRouteTable(format!(
                    "role '{role}' has no pages"
                )));
            }

            if !entry.pages.contains(&entry.home) {
                return Err(Error::InvalidRouteTable(format!(
                    "home page '{}' of role '{role}' is not in its own page list",
                    entry.home
                )));
            }
        }

        Ok(Self { entries })
    }

    /// The built-in LMS table.
    pub fn lms_default() -> Self {
        let mut entries = HashMap::new();
        entries.insert(
            Role::Superadmin,
            RouteEntry {
                home: Page::from("super-admin.html"),
                pages: pages(&["super-admin.html", "analytics.html"]),
            },
        );
        entries.insert(
            Role::Admin,
            RouteEntry {
                home: Page::from("admin/dashboard.html"),
                pages: pages(&[
                    "admin/dashboard.html",
                    "admin/content-studio.html",
                    "admin/course-inventory.html",
                    "admin/learner-cohorts.html",
                    "admin/question-library.html",
                    "admin/analytics.html",
                ]),
            },
        );
        entries.insert(
            Role::Learner,
            RouteEntry {
                home: Page::from("learner.html"),
                pages: pages(&[
                    "learner.html",
                    "course-player.html",
                    "assessment.html",
                    "certificate.html",
                    "catalog.html",
                    "community.html",
                ]),
            },
        );

        // Fixed data, satisfies every `new` check
        Self { entries }
    }

    /// Rebuild with `entry` replacing the entry for `role`.
    pub fn with_entry(mut self, role: Role, entry: RouteEntry) -> Result<Self> {
        self.entries.insert(role, entry);
        Self::new(self.entries)
    }

    /// Pages `role` may open.
    pub fn allowed(&self, role: Role) -> &[Page] {
        &self.entry(role).pages
    }

    /// The canonical landing page of `role`. Total over the role enum.
    pub fn home(&self, role: Role) -> &Page {
        &self.entry(role).home
    }

    /// Whether `role` may open `page`.
    pub fn is_allowed(&self, role: Role, page: &Page) -> bool {
        self.entry(role).pages.contains(page)
    }

    /// Whether `page` appears in any role's list.
    pub fn is_protected(&self, page: &Page) -> bool {
        Role::ALL.iter().any(|role| self.is_allowed(*role, page))
    }

    fn entry(&self, role: Role) -> &RouteEntry {
        // Construction guarantees an entry for every role
        &self.entries[&role]
    }
}

impl Default for RouteTable {
    fn default() -> Self {
        Self::lms_default()
    }
}

fn pages(names: &[&str]) -> Vec<Page> {
    names.iter().map(|name| Page::from(*name)).collect()
}
