//! Page identity, route table, and navigation guard tests

use apexgate::directory::Role;
use apexgate::routing::{navigate_if_different, Navigator, Page, RouteEntry, RouteTable};

#[derive(Default)]
struct RecordingNavigator {
    visits: Vec<Page>,
}

impl Navigator for RecordingNavigator {
    fn go_to(&mut self, target: &Page) {
        self.visits.push(target.clone());
    }
}

#[test]
fn navigation_to_a_different_page_goes_through() {
    let mut nav = RecordingNavigator::default();

    let moved = navigate_if_different(&mut nav, &Page::login(), &Page::from("learner.html"));

    assert!(moved);
    assert_eq!(nav.visits, vec![Page::from("learner.html")]);
}

#[test]
fn navigation_to_the_current_page_is_suppressed() {
    let mut nav = RecordingNavigator::default();

    let moved = navigate_if_different(&mut nav, &Page::login(), &Page::login());

    assert!(!moved);
    assert!(nav.visits.is_empty());
}

#[test]
fn repeated_redirects_to_one_target_navigate_once() {
    // The boot sequence re-evaluates after every navigation; once the tab
    // is on the target, further attempts must do nothing.
    let mut nav = RecordingNavigator::default();
    let target = Page::from("super-admin.html");
    let mut current = Page::from("catalog.html");

    for _ in 0..3 {
        if navigate_if_different(&mut nav, &current, &target) {
            current = target.clone();
        }
    }

    assert_eq!(nav.visits.len(), 1);
}

#[test]
fn guard_works_through_a_trait_object() {
    let mut nav = RecordingNavigator::default();
    let dyn_nav: &mut dyn Navigator = &mut nav;

    assert!(navigate_if_different(
        dyn_nav,
        &Page::landing(),
        &Page::login()
    ));
    assert_eq!(nav.visits.len(), 1);
}

#[test]
fn shared_page_names_stay_per_role() {
    let table = RouteTable::default();

    // analytics.html belongs to superadmin, admin/analytics.html to admin
    assert!(table.is_allowed(Role::Superadmin, &Page::from("analytics.html")));
    assert!(!table.is_allowed(Role::Learner, &Page::from("analytics.html")));
    assert!(table.is_allowed(Role::Admin, &Page::from("admin/analytics.html")));
    assert!(!table.is_allowed(Role::Superadmin, &Page::from("admin/analytics.html")));
}

#[test]
fn protected_universe_spans_every_role_list() {
    let table = RouteTable::default();

    for role in Role::ALL {
        for page in table.allowed(role) {
            assert!(table.is_protected(page));
        }
    }
    assert!(!table.is_protected(&Page::from("help-center.html")));
    assert!(!table.is_protected(&Page::landing()));
    assert!(!table.is_protected(&Page::login()));
}

#[test]
fn role_homes_match_the_lms_layout() {
    let table = RouteTable::default();

    assert_eq!(table.home(Role::Superadmin), &Page::from("super-admin.html"));
    assert_eq!(table.home(Role::Admin), &Page::from("admin/dashboard.html"));
    assert_eq!(table.home(Role::Learner), &Page::from("learner.html"));
}

#[test]
fn overriding_one_role_keeps_the_others() {
    let table = RouteTable::default()
        .with_entry(
            Role::Learner,
            RouteEntry {
                home: Page::from("catalog.html"),
                pages: vec![Page::from("catalog.html"), Page::from("community.html")],
            },
        )
        .expect("valid override");

    assert_eq!(table.home(Role::Learner), &Page::from("catalog.html"));
    assert_eq!(table.allowed(Role::Learner).len(), 2);
    assert_eq!(table.home(Role::Admin), &Page::from("admin/dashboard.html"));
    assert_eq!(table.allowed(Role::Admin).len(), 6);
}

#[test]
fn override_with_home_outside_pages_is_rejected() {
    let result = RouteTable::default().with_entry(
        Role::Learner,
        RouteEntry {
            home: Page::from("learner.html"),
            pages: vec![Page::from("catalog.html")],
        },
    );

    assert!(result.is_err());
}

#[test]
fn pages_normalize_consistently_everywhere() {
    let table = RouteTable::default();

    // However the path arrives, the identity is the same
    assert!(table.is_allowed(Role::Admin, &Page::from_path("/Admin/Dashboard.HTML")));
    assert_eq!(Page::from_path("  /learner.html"), Page::from("learner.html"));
}
