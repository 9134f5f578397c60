//! CLI parsing tests
//!
//! These exercise the clap surface only; command behavior is covered by
//! the gate, directory, and login tests.

use apexgate::cli::{Cli, Commands, OutputFormat};
use apexgate::directory::Role;
use clap::{CommandFactory, Parser};

#[test]
fn cli_definition_is_consistent() {
    Cli::command().debug_assert();
}

#[test]
fn check_parses_page_and_role() {
    let cli = Cli::try_parse_from([
        "apexgate",
        "check",
        "--page",
        "admin/dashboard.html",
        "--role",
        "learner",
    ])
    .expect("parse");

    match cli.command {
        Commands::Check { page, email, role } => {
            assert_eq!(page, "admin/dashboard.html");
            assert!(email.is_none());
            assert_eq!(role, Some(Role::Learner));
        }
        _ => panic!("expected the check command"),
    }
}

#[test]
fn check_parses_short_flags() {
    let cli = Cli::try_parse_from([
        "apexgate",
        "check",
        "-p",
        "login.html",
        "-e",
        "super@apexlms.com",
    ])
    .expect("parse");

    match cli.command {
        Commands::Check { page, email, role } => {
            assert_eq!(page, "login.html");
            assert_eq!(email.as_deref(), Some("super@apexlms.com"));
            assert!(role.is_none());
        }
        _ => panic!("expected the check command"),
    }
}

#[test]
fn check_rejects_email_and_role_together() {
    let result = Cli::try_parse_from([
        "apexgate",
        "check",
        "--page",
        "learner.html",
        "--email",
        "student@apexlms.com",
        "--role",
        "admin",
    ]);

    assert!(result.is_err(), "--email and --role should conflict");
}

#[test]
fn check_requires_a_page() {
    assert!(Cli::try_parse_from(["apexgate", "check"]).is_err());
}

#[test]
fn users_defaults_to_table_output() {
    let cli = Cli::try_parse_from(["apexgate", "users"]).expect("parse");

    match cli.command {
        Commands::Users { format } => assert!(matches!(format, OutputFormat::Table)),
        _ => panic!("expected the users command"),
    }
}

#[test]
fn routes_accepts_every_output_format() {
    for raw in ["table", "json", "yaml"] {
        let cli = Cli::try_parse_from(["apexgate", "routes", "--format", raw]).expect("parse");
        assert!(matches!(cli.command, Commands::Routes { .. }));
        println!("✓ routes format: {}", raw);
    }

    assert!(Cli::try_parse_from(["apexgate", "routes", "--format", "xml"]).is_err());
}

#[test]
fn browse_defaults_to_the_landing_page() {
    let cli = Cli::try_parse_from(["apexgate", "browse"]).expect("parse");

    match cli.command {
        Commands::Browse { page } => assert_eq!(page, "index.html"),
        _ => panic!("expected the browse command"),
    }
}

#[test]
fn browse_accepts_a_start_page() {
    let cli = Cli::try_parse_from(["apexgate", "browse", "--page", "catalog.html"]).expect("parse");

    match cli.command {
        Commands::Browse { page } => assert_eq!(page, "catalog.html"),
        _ => panic!("expected the browse command"),
    }
}

#[test]
fn role_values_use_canonical_lowercase_names() {
    for (raw, expected) in [
        ("superadmin", Role::Superadmin),
        ("admin", Role::Admin),
        ("learner", Role::Learner),
    ] {
        let cli = Cli::try_parse_from(["apexgate", "check", "-p", "analytics.html", "-r", raw])
            .expect("parse");
        match cli.command {
            Commands::Check { role, .. } => assert_eq!(role, Some(expected)),
            _ => panic!("expected the check command"),
        }
        println!("✓ role value: {}", raw);
    }

    assert!(
        Cli::try_parse_from(["apexgate", "check", "-p", "analytics.html", "-r", "guest"])
            .is_err()
    );
}

#[test]
fn bare_invocation_requires_a_subcommand() {
    assert!(Cli::try_parse_from(["apexgate"]).is_err());
}
