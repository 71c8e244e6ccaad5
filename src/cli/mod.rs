//! # Command Line Interface
//!
//! Arguments for running the lifecycle checks in CI pipelines. Every value
//! can also come from the environment.

use std::path::PathBuf;

use clap::Parser;

use crate::config::{
    Credentials, RunConfig, UpdateProfile, DEFAULT_ADMIN_PASS, DEFAULT_ADMIN_USER,
    DEFAULT_BASE_URL,
};

#[derive(Debug, Parser)]
#[command(
    name = "bookcheck",
    about = "Drives create/read/update/delete lifecycles against a booking API from CSV fixtures"
)]
pub struct Cli {
    /// Base URL of the booking API.
    #[arg(long, env = "BOOKCHECK_BASE_URL", default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// Path to the CSV fixture file.
    #[arg(long, env = "BOOKCHECK_FIXTURES", default_value = "fixtures/bookings.csv")]
    pub fixtures: PathBuf,

    /// Username for the authenticated update/delete endpoints.
    #[arg(long, env = "BOOKCHECK_ADMIN_USER", default_value = DEFAULT_ADMIN_USER)]
    pub admin_user: String,

    /// Password for the authenticated update/delete endpoints.
    #[arg(long, env = "BOOKCHECK_ADMIN_PASS", default_value = DEFAULT_ADMIN_PASS)]
    pub admin_pass: String,
}

impl Cli {
    /// Split into the fixture path and the run configuration.
    pub fn into_config(self) -> (PathBuf, RunConfig) {
        let config = RunConfig {
            base_url: self.base_url,
            admin: Credentials {
                username: self.admin_user,
                password: self.admin_pass,
            },
            update: UpdateProfile::default(),
        };
        (self.fixtures, config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_target_the_public_api() {
        let cli = Cli::parse_from(["bookcheck"]);
        let (fixtures, config) = cli.into_config();

        assert_eq!(fixtures, PathBuf::from("fixtures/bookings.csv"));
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.admin.username, DEFAULT_ADMIN_USER);
        assert_eq!(config.admin.password, DEFAULT_ADMIN_PASS);
    }

    #[test]
    fn flags_override_defaults() {
        let cli = Cli::parse_from([
            "bookcheck",
            "--base-url",
            "http://localhost:3001",
            "--fixtures",
            "data/rows.csv",
        ]);
        let (fixtures, config) = cli.into_config();

        assert_eq!(fixtures, PathBuf::from("data/rows.csv"));
        assert_eq!(config.base_url, "http://localhost:3001");
    }
}
