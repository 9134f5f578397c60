//! Redirect application
//!
//! Every navigation funnels through `navigate_if_different`. Redirecting to
//! the page the tab is already on is suppressed, which is what keeps a
//! redirect decision from ever looping.

use tracing::debug;

use super::Page;

/// The one surface that can move the tab to another page.
pub trait Navigator {
    fn go_to(&mut self, target: &Page);
}

/// Navigate only when `target` differs from `current`.
///
/// Returns whether a navigation was performed. Repeated calls against the
/// same state never navigate more than once.
pub fn navigate_if_different<N>(nav: &mut N, current: &Page, target: &Page) -> bool
where
    N: Navigator + ?Sized,
{
    if current == target {
        debug!(page = %current, "already on target page, navigation suppressed");
        return false;
    }

    debug!(from = %current, to = %target, "navigating");
    nav.go_to(target);
    true
}
