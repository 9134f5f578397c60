//! CLI command implementations

use anyhow::Result;
use serde::Serialize;
use std::fs;

use crate::cli::{
    error, info, print_decision, print_route_table, print_user_table, success, warn, OutputFormat,
};
use crate::config::{self, Config};
use crate::directory::{Role, UserDirectory, UserRecord};
use crate::routing::Page;
use crate::store::FileStore;

/// Initialize a new apexgate.toml configuration file
pub fn init() -> Result<()> {
    let config_path = std::path::Path::new("apexgate.toml");

    if config_path.exists() {
        warn("apexgate.toml already exists");
        return Ok(());
    }

    let content = config::loader::default_config_content();
    fs::write(config_path, content)?;

    success("Created apexgate.toml");
    info("Run 'apexgate bootstrap' to seed the user directory");

    Ok(())
}

/// Seed the user directory
pub fn bootstrap() -> Result<()> {
    let config = load_config()?;
    let mut directory = open_directory(&config)?;

    if directory.bootstrap()? {
        success(&format!(
            "Seeded {} users into {}",
            directory.len(),
            config.directory.store_path.display()
        ));
    } else {
        info(&format!(
            "User directory already holds {} users, nothing to do",
            directory.len()
        ));
    }

    Ok(())
}

/// List the user directory
pub fn users(format: OutputFormat) -> Result<()> {
    let config = load_config()?;
    let directory = open_directory(&config)?;

    match format {
        OutputFormat::Table => print_user_table(directory.records()),
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(directory.records())?;
            println!("{}", json);
        }
        OutputFormat::Yaml => {
            let yaml = serde_yaml::to_string(directory.records())?;
            println!("{}", yaml);
        }
    }

    Ok(())
}

/// One role's row in machine-readable route listings
#[derive(Serialize)]
struct RouteRow {
    role: Role,
    home: Page,
    pages: Vec<Page>,
}

/// Show the route authorization table
pub fn routes(format: OutputFormat) -> Result<()> {
    let config = load_config()?;
    let table = config.route_table()?;

    match format {
        OutputFormat::Table => print_route_table(&table),
        OutputFormat::Json | OutputFormat::Yaml => {
            let rows: Vec<RouteRow> = Role::ALL
                .iter()
                .map(|&role| RouteRow {
                    role,
                    home: table.home(role).clone(),
                    pages: table.allowed(role).to_vec(),
                })
                .collect();

            match format {
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&rows)?),
                _ => println!("{}", serde_yaml::to_string(&rows)?),
            }
        }
    }

    Ok(())
}

/// Evaluate one page load and print the decision
pub fn check(page: &str, email: Option<String>, role: Option<Role>) -> Result<()> {
    let config = load_config()?;
    let gate = config.session_gate()?;
    let requested = Page::from_path(page);

    let session = match (email, role) {
        (Some(email), _) => Some(find_account(&config, &email)?),
        (None, Some(role)) => Some(find_role_account(&config, role)?),
        (None, None) => None,
    };

    let decision = gate.evaluate(session.as_ref(), &requested);
    print_decision(&requested, &decision);

    Ok(())
}

/// Open the interactive tab
pub fn browse(page: &str) -> Result<()> {
    let config = load_config()?;
    let gate = config.session_gate()?;
    let directory = open_directory(&config)?;

    crate::cli::shell::run(gate, directory, config.login.notice_secs, page)
}

// Helper functions

fn find_account(config: &Config, email: &str) -> Result<UserRecord> {
    let directory = open_directory(config)?;
    match directory.find_by_email(email) {
        Some(user) => Ok(user.clone()),
        None => {
            error(&format!("No account matches '{}'", email));
            anyhow::bail!("no account matches '{email}'");
        }
    }
}

fn find_role_account(config: &Config, role: Role) -> Result<UserRecord> {
    let directory = open_directory(config)?;
    match directory.find_first_by_role(role) {
        Some(user) => Ok(user.clone()),
        None => {
            error(&format!(
                "No account carries role '{}'. Run 'apexgate bootstrap' first",
                role
            ));
            anyhow::bail!("no account carries role '{role}'");
        }
    }
}

fn load_config() -> Result<Config> {
    Ok(config::loader::load_config_or_default()?)
}

fn open_directory(config: &Config) -> Result<UserDirectory> {
    let store = FileStore::open(&config.directory.store_path)?;
    Ok(UserDirectory::open(Box::new(store))?)
}
