//! Pages, route authorization, and navigation
//!
//! `Page` is the normalized identity of a client-rendered page, the route
//! table says which pages each role may open, and the resolver applies
//! redirects without ever bouncing a page onto itself.

mod resolver;
mod table;

pub use resolver::{navigate_if_different, Navigator};
pub use table::{RouteEntry, RouteTable};

use serde::{Deserialize, Serialize};
use std::fmt;

/// The page every signed-out visitor is sent to.
pub const LOGIN_PAGE: &str = "login.html";

/// The public landing page, rendered with or without a session.
pub const LANDING_PAGE: &str = "index.html";

/// Normalized page identifier.
///
/// Identity is the full relative path, folded to lowercase, so
/// `admin/analytics.html` and `analytics.html` stay distinct pages.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct Page(String);

impl Page {
    /// Derive the page identity from a navigation path.
    ///
    /// Surrounding whitespace and leading slashes are dropped, casing is
    /// folded, and an empty path means the landing page.
    pub fn from_path(path: &str) -> Self {
        let trimmed = path.trim().trim_start_matches('/');
        if trimmed.is_empty() {
            return Page(LANDING_PAGE.to_string());
        }
        Page(trimmed.to_lowercase())
    }

    /// The login page.
    pub fn login() -> Self {
        Page(LOGIN_PAGE.to_string())
    }

    /// The public landing page.
    pub fn landing() -> Self {
        Page(LANDING_PAGE.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_login(&self) -> bool {
        self.0 == LOGIN_PAGE
    }

    pub fn is_landing(&self) -> bool {
        self.0 == LANDING_PAGE
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<&str> for Page {
    fn from(raw: &str) -> Self {
        Page::from_path(raw)
    }
}

impl From<String> for Page {
    fn from(raw: String) -> Self {
        Page::from_path(&raw)
    }
}

impl From<Page> for String {
    fn from(page: Page) -> Self {
        page.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_path_strips_leading_slash() {
        assert_eq!(Page::from_path("/learner.html"), Page::from("learner.html"));
    }

    #[test]
    fn test_from_path_folds_case() {
        assert!(Page::from_path("Index.html").is_landing());
        assert!(Page::from_path("LOGIN.HTML").is_login());
    }

    #[test]
    fn test_empty_path_is_the_landing_page() {
        assert!(Page::from_path("").is_landing());
        assert!(Page::from_path("  /  ").is_landing());
    }

    #[test]
    fn test_directory_prefix_is_part_of_the_identity() {
        assert_ne!(
            Page::from("admin/analytics.html"),
            Page::from("analytics.html")
        );
    }

    #[test]
    fn test_deserialized_pages_are_normalized() {
        let page: Page = serde_json::from_str("\"/Admin/Dashboard.HTML\"").unwrap();
        assert_eq!(page, Page::from("admin/dashboard.html"));
    }
}
