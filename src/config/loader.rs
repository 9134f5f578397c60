//! Configuration loading and environment variable interpolation

use crate::error::{Error, Result};
use regex::Regex;
use std::env;
use std::fs;
use std::path::Path;

use super::Config;

const CONFIG_FILENAME: &str = "apexgate.toml";

/// Load configuration from apexgate.toml
pub fn load_config() -> Result<Config> {
    let config_path = find_config_file()?;
    load_config_from_path(&config_path)
}

/// Load configuration from a specific path
pub fn load_config_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path).map_err(|_| Error::ConfigNotFound)?;
    let content = interpolate_env_vars(&content);
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

/// Load apexgate.toml if one is found, otherwise fall back to the built-in
/// defaults so the tool works without an init step.
pub fn load_config_or_default() -> Result<Config> {
    match find_config_file() {
        Ok(path) => load_config_from_path(&path),
        Err(Error::ConfigNotFound) => Ok(Config::default()),
        Err(e) => Err(e),
    }
}

/// Find the configuration file, searching upward from current directory
fn find_config_file() -> Result<std::path::PathBuf> {
    let mut current = env::current_dir().map_err(|e| Error::Config(e.to_string()))?;

    loop {
        let config_path = current.join(CONFIG_FILENAME);
        if config_path.exists() {
            return Ok(config_path);
        }

        if !current.pop() {
            return Err(Error::ConfigNotFound);
        }
    }
}

/// Interpolate environment variables in the format ${VAR_NAME} or ${VAR_NAME:-default}
fn interpolate_env_vars(content: &str) -> String {
    // This regex is a compile-time constant, panicking is acceptable here
    // as it indicates a programming error in the codebase, not a runtime issue
    let re = Regex::new(r"\$\{([A-Z_][A-Z0-9_]*)(?::-([^}]*))?\}")
        .expect("Invalid regex pattern - this is a bug in the codebase");

    re.replace_all(content, |caps: &regex::Captures| {
        let var_name = &caps[1];
        let default = caps.get(2).map(|m| m.as_str()).unwrap_or("");

        env::var(var_name).unwrap_or_else(|_| default.to_string())
    })
    .to_string()
}

/// Generate a default configuration file content
pub fn default_config_content() -> &'static str {
    r#"# Apexgate Configuration
# Role-gated session router for the APEX LMS front-end

[directory]
# Where the seeded user directory lives. Can come from the environment:
# store_path = "${APEXGATE_STORE:-./apexgate-store.json}"
store_path = "./apexgate-store.json"

[gate]
# "allow" renders pages the route table does not mention for any signed-in
# visitor; "deny" sends them back to the role home instead.
unlisted_pages = "allow"

[login]
# Seconds the "no matching account" notice stays on screen in 'browse'.
notice_secs = 3

# Per-role route overrides. A role keeps its built-in entry unless listed
# here; 'home' must appear in 'pages'.
# [routes.learner]
# home = "learner.html"
# pages = ["learner.html", "catalog.html", "community.html"]
"#
}
