//! Interactive browser tab
//!
//! `apexgate browse` runs the whole client loop in a terminal: every visit
//! goes through the gate, redirects are applied through the navigation
//! guard, and the prompt renders what the page chrome would show for the
//! current session.

use anyhow::Result;
use clap::ValueEnum;
use colored::Colorize;
use console::Term;
use dialoguer::{theme::ColorfulTheme, FuzzySelect, Input, Select};
use std::time::{Duration, Instant};

use crate::auth::{demo_login, logout, standard_login, LoginOutcome, SessionStore};
use crate::cli::{describe_reason, error, format_role, info, print_route_table, success, warn};
use crate::directory::{Role, UserDirectory};
use crate::gate::{GateDecision, RedirectReason, SessionGate};
use crate::routing::{navigate_if_different, Navigator, Page};

/// Transient login notice, dismissed once its deadline passes.
struct Notice {
    text: String,
    expires: Instant,
}

/// Tab location, the only navigation surface in the CLI.
struct Location {
    page: Page,
}

impl Navigator for Location {
    fn go_to(&mut self, target: &Page) {
        self.page = target.clone();
    }
}

/// The simulated tab: current page, session, pending notice.
struct Tab {
    gate: SessionGate,
    directory: UserDirectory,
    session: SessionStore,
    location: Location,
    notice: Option<Notice>,
    notice_lifetime: Duration,
}

impl Tab {
    /// Type a path into the address bar: land on the page, then let the
    /// gate settle it.
    fn visit(&mut self, page: Page) {
        self.location.page = page;
        self.settle();
    }

    /// Apply a navigation target produced by login or logout.
    fn navigate(&mut self, target: &Page) {
        let current = self.location.page.clone();
        if navigate_if_different(&mut self.location, &current, target) {
            self.settle();
        }
    }

    /// Run the gate on the current page, following redirects until a page
    /// renders.
    fn settle(&mut self) {
        loop {
            match self.gate.evaluate(self.session.get(), &self.location.page) {
                GateDecision::Authorized { role } => {
                    self.render(role);
                    return;
                }
                GateDecision::Redirect { target, reason } => {
                    self.explain_redirect(reason, &target);
                    let current = self.location.page.clone();
                    if !navigate_if_different(&mut self.location, &current, &target) {
                        // The guard refused a same-page redirect; nothing
                        // left to settle.
                        return;
                    }
                }
            }
        }
    }

    fn sign_in(&mut self, email: &str) {
        let outcome = standard_login(
            &self.directory,
            self.gate.table(),
            &mut self.session,
            email,
        );
        match outcome {
            LoginOutcome::SignedIn { user, destination } => {
                success(&format!(
                    "Signed in as {} ({})",
                    user.name,
                    user.role.to_string().to_uppercase()
                ));
                self.navigate(&destination);
            }
            LoginOutcome::NoMatch => {
                let text = "No account found with that email.".to_string();
                error(&text);
                self.notice = Some(Notice {
                    text,
                    expires: Instant::now() + self.notice_lifetime,
                });
            }
        }
    }

    fn demo(&mut self, role: Role) {
        let outcome = demo_login(&self.directory, self.gate.table(), &mut self.session, role);
        match outcome {
            LoginOutcome::SignedIn { user, destination } => {
                success(&format!(
                    "Signed in as {} ({})",
                    user.name,
                    user.role.to_string().to_uppercase()
                ));
                self.navigate(&destination);
            }
            LoginOutcome::NoMatch => {
                warn(&format!("No seeded account carries role '{role}'"));
            }
        }
    }

    fn sign_out(&mut self) {
        let target = logout(&mut self.session);
        info("Signed out");
        self.navigate(&target);
    }

    fn whoami(&self) {
        match self.session.get() {
            Some(user) => info(&format!(
                "{} ({}) signed in as {}",
                user.name,
                user.email,
                format_role(user.role)
            )),
            None => info("Not signed in"),
        }
    }

    /// Render the settled page the way its chrome would.
    fn render(&mut self, role: Option<Role>) {
        println!();
        let title = self.location.page.to_string().bold().cyan().to_string();
        match (role, self.session.get()) {
            (Some(_), Some(user)) => println!(
                "{}   {} ({})",
                title,
                user.name,
                user.role.to_string().to_uppercase()
            ),
            _ => println!("{title}"),
        }

        if self.location.page.is_landing() {
            if let Some(user) = self.session.get() {
                let home = self.gate.table().home(user.role);
                println!("  {} {}", "Go to My Workspace".green(), home.to_string().dimmed());
            }
        }

        if self.location.page.is_login() {
            self.show_notice();
        }
    }

    fn explain_redirect(&self, reason: RedirectReason, target: &Page) {
        info(&format!("Redirected to {target} ({})", describe_reason(reason)));
    }

    fn show_notice(&mut self) {
        if let Some(notice) = &self.notice {
            if Instant::now() < notice.expires {
                println!("  {}", notice.text.red());
            } else {
                self.notice = None;
            }
        }
    }

    /// Every page worth offering in the picker.
    fn known_pages(&self) -> Vec<Page> {
        let mut pages = vec![Page::landing(), Page::login()];
        for role in Role::ALL {
            for page in self.gate.table().allowed(role) {
                if !pages.contains(page) {
                    pages.push(page.clone());
                }
            }
        }
        pages
    }
}

/// Run the interactive tab until the user quits.
pub fn run(
    gate: SessionGate,
    mut directory: UserDirectory,
    notice_secs: u64,
    start: &str,
) -> Result<()> {
    let term = Term::stdout();
    let theme = ColorfulTheme::default();
    let _ = term.clear_screen();

    println!("{}", "APEX LMS simulated browser tab".bold());
    println!("{}", "Type 'help' for commands, 'quit' to leave.".dimmed());

    // A page load always runs against a seeded directory
    if directory.bootstrap()? {
        success("Seeded the user directory");
    }

    let mut tab = Tab {
        gate,
        directory,
        session: SessionStore::new(),
        location: Location {
            page: Page::landing(),
        },
        notice: None,
        notice_lifetime: Duration::from_secs(notice_secs),
    };

    tab.visit(Page::from_path(start));

    loop {
        println!();
        let line: String = Input::with_theme(&theme)
            .with_prompt(format!("apexgate [{}]", tab.location.page))
            .allow_empty(true)
            .interact_text()?;

        let parts: Vec<&str> = line.split_whitespace().collect();
        if parts.is_empty() {
            continue;
        }

        match parts[0] {
            "visit" | "open" => {
                let page = match parts.get(1) {
                    Some(raw) => Page::from_path(raw),
                    None => match pick_page(&theme, &tab.known_pages())? {
                        Some(page) => page,
                        None => continue,
                    },
                };
                tab.visit(page);
            }
            "login" => {
                let email = match parts.get(1) {
                    Some(raw) => raw.to_string(),
                    None => Input::with_theme(&theme)
                        .with_prompt("Email")
                        .interact_text()?,
                };
                tab.sign_in(&email);
            }
            "demo" => {
                let role = match parts.get(1) {
                    Some(raw) => match Role::from_str(raw, true) {
                        Ok(role) => role,
                        Err(_) => {
                            warn(&format!("Unknown role '{}'", raw));
                            continue;
                        }
                    },
                    None => match pick_role(&theme)? {
                        Some(role) => role,
                        None => continue,
                    },
                };
                tab.demo(role);
            }
            "logout" => tab.sign_out(),
            "whoami" => tab.whoami(),
            "routes" => print_route_table(tab.gate.table()),
            "help" | "?" => print_help(),
            "quit" | "exit" | "q" => break,
            other => warn(&format!(
                "Unknown command '{}'. Type 'help' for the command list",
                other
            )),
        }
    }

    Ok(())
}

fn pick_page(theme: &ColorfulTheme, pages: &[Page]) -> Result<Option<Page>> {
    let labels: Vec<&str> = pages.iter().map(Page::as_str).collect();
    let choice = FuzzySelect::with_theme(theme)
        .with_prompt("Page")
        .items(&labels)
        .default(0)
        .interact_opt()?;
    Ok(choice.map(|index| pages[index].clone()))
}

fn pick_role(theme: &ColorfulTheme) -> Result<Option<Role>> {
    let labels: Vec<String> = Role::ALL.iter().map(|role| role.to_string()).collect();
    let choice = Select::with_theme(theme)
        .with_prompt("Role")
        .items(&labels)
        .default(0)
        .interact_opt()?;
    Ok(choice.map(|index| Role::ALL[index]))
}

fn print_help() {
    println!();
    println!(
        "  {}   load a page through the gate (picker without an argument)",
        "visit [page]".bold()
    );
    println!("  {}  sign in with an email address", "login [email]".bold());
    println!(
        "  {}    sign in as the first seeded account of a role",
        "demo [role]".bold()
    );
    println!("  {}         sign out and return to the login page", "logout".bold());
    println!("  {}         show the current session", "whoami".bold());
    println!("  {}         show the route authorization table", "routes".bold());
    println!("  {}           leave the tab", "quit".bold());
}
