//! CLI output formatting utilities

use colored::Colorize;
use comfy_table::{presets::UTF8_FULL, Cell, Color, ContentArrangement, Table};

use crate::directory::{Role, UserRecord};
use crate::gate::{GateDecision, RedirectReason};
use crate::routing::{Page, RouteTable};

/// Print a success message
pub fn success(message: &str) {
    println!("{} {}", "✓".green(), message);
}

/// Print an error message
pub fn error(message: &str) {
    eprintln!("{} {}", "✗".red(), message);
}

/// Print a warning message
pub fn warn(message: &str) {
    println!("{} {}", "⚠".yellow(), message);
}

/// Print an info message
pub fn info(message: &str) {
    println!("{} {}", "ℹ".blue(), message);
}

/// Role name colored the way the tables color it
pub fn format_role(role: Role) -> String {
    match role {
        Role::Superadmin => role.to_string().magenta().to_string(),
        Role::Admin => role.to_string().yellow().to_string(),
        Role::Learner => role.to_string().green().to_string(),
    }
}

fn role_color(role: Role) -> Color {
    match role {
        Role::Superadmin => Color::Magenta,
        Role::Admin => Color::Yellow,
        Role::Learner => Color::Green,
    }
}

/// Print the user directory as a table
pub fn print_user_table(users: &[UserRecord]) {
    if users.is_empty() {
        info("User directory is empty. Seed it with 'apexgate bootstrap'");
        return;
    }

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![
            Cell::new("Id").fg(Color::Cyan),
            Cell::new("Email").fg(Color::Cyan),
            Cell::new("Role").fg(Color::Cyan),
            Cell::new("Name").fg(Color::Cyan),
        ]);

    for user in users {
        table.add_row(vec![
            Cell::new(user.id),
            Cell::new(&user.email),
            Cell::new(user.role).fg(role_color(user.role)),
            Cell::new(&user.name),
        ]);
    }

    println!("{table}");
}

/// Print the route authorization table, one row per role
pub fn print_route_table(routes: &RouteTable) {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![
            Cell::new("Role").fg(Color::Cyan),
            Cell::new("Home").fg(Color::Cyan),
            Cell::new("Pages").fg(Color::Cyan),
        ]);

    for role in Role::ALL {
        let pages = routes
            .allowed(role)
            .iter()
            .map(Page::as_str)
            .collect::<Vec<_>>()
            .join(", ");

        table.add_row(vec![
            Cell::new(role).fg(role_color(role)),
            Cell::new(routes.home(role)),
            Cell::new(pages),
        ]);
    }

    println!("{table}");
}

/// Print one gate decision
pub fn print_decision(requested: &Page, decision: &GateDecision) {
    match decision {
        GateDecision::Authorized { role } => {
            let viewer = role
                .map(|role| format!(" as {}", format_role(role)))
                .unwrap_or_default();
            success(&format!("{requested} renders{viewer}"));
        }
        GateDecision::Redirect { target, reason } => {
            warn(&format!(
                "{requested} redirects to {target} ({})",
                describe_reason(*reason)
            ));
        }
    }
}

/// Short human explanation of a redirect
pub fn describe_reason(reason: RedirectReason) -> &'static str {
    match reason {
        RedirectReason::SignedOut => "sign-in required",
        RedirectReason::AlreadySignedIn => "already signed in",
        RedirectReason::RoleDenied => "not available to this role",
    }
}
