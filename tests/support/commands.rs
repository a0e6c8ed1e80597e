//! Command helper methods for Test.

use super::{Test, SECRETS_FILE};
use assert_cmd::Command;
use std::process::Output;

impl Test {
    /// Create a secexport command with an isolated environment.
    ///
    /// Returns a Command configured with:
    /// - HOME set to the temporary home directory
    /// - the record cache and config pointed into temp dirs
    /// - a cheap scrypt work factor
    /// - no password in the environment and colors off
    /// - current directory set to the test project directory
    pub fn cmd(&self) -> Command {
        #[allow(deprecated)]
        let mut cmd = Command::cargo_bin("secexport").expect("failed to find secexport binary");
        cmd.env("HOME", self.home.path());
        // Windows uses USERPROFILE instead of HOME for home directory
        cmd.env("USERPROFILE", self.home.path());
        cmd.env("SECEXPORT_CACHE_DIR", self.cache.path().join("records"));
        cmd.env("SECEXPORT_CONFIG", self.home.path().join("config.toml"));
        cmd.env("SECEXPORT_WORK_FACTOR", "10");
        cmd.env("NO_COLOR", "1");
        cmd.env_remove("SECEXPORT_PASSWORD");
        cmd.env_remove("SECEXPORT_LOG");
        cmd.current_dir(self.dir.path());
        cmd
    }

    /// Shortcut for `secexport create --from secrets.json -p <password>`.
    pub fn create(&self, password: &str) -> Output {
        self.cmd()
            .args(["create", "--from", SECRETS_FILE, "-p", password])
            .output()
            .expect("failed to run secexport create")
    }

    /// Shortcut for `secexport create` with filters.
    pub fn create_filtered(&self, password: &str, filters: &[&str]) -> Output {
        self.cmd()
            .arg("create")
            .args(filters)
            .args(["--from", SECRETS_FILE, "-p", password])
            .output()
            .expect("failed to run secexport create")
    }

    /// Shortcut for `secexport retrieve -p <password>`.
    pub fn retrieve(&self, password: &str) -> Output {
        self.cmd()
            .args(["retrieve", "-p", password])
            .output()
            .expect("failed to run secexport retrieve")
    }

    /// Shortcut for `secexport delete -p <password>`.
    pub fn delete(&self, password: &str) -> Output {
        self.cmd()
            .args(["delete", "-p", password])
            .output()
            .expect("failed to run secexport delete")
    }

    /// Shortcut for `secexport refresh --from secrets.json -p <password>`.
    pub fn refresh(&self, password: &str) -> Output {
        self.cmd()
            .args(["refresh", "--from", SECRETS_FILE, "-p", password])
            .output()
            .expect("failed to run secexport refresh")
    }

    /// Shortcut for `secexport status`.
    pub fn status(&self) -> Output {
        self.cmd()
            .arg("status")
            .output()
            .expect("failed to run secexport status")
    }
}
