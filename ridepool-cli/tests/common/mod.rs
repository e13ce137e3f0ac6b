//! Common test utilities for CLI integration tests.

use assert_cmd::Command;
use std::path::PathBuf;
use tempfile::TempDir;

/// A fixed "now" well before the days the tests schedule on.
pub const NOW: &str = "2024-01-01T00:00:00Z";

/// Test environment with an isolated data directory.
pub struct TestEnv {
    #[allow(dead_code)]
    temp_dir: TempDir,
    /// Path to the temporary directory
    pub temp_path: PathBuf,
    /// Path to the ridepool data directory (created on first use)
    pub data_dir: PathBuf,
}

#[allow(dead_code)]
impl TestEnv {
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let temp_path = temp_dir.path().to_path_buf();
        let data_dir = temp_path.join("ridepool-data");

        Self {
            temp_dir,
            temp_path,
            data_dir,
        }
    }

    /// The binary without any flags.
    pub fn command_bare(&self) -> Command {
        let mut cmd = Command::cargo_bin("ridepool").expect("Failed to find ridepool binary");
        for var in [
            "RIDEPOOL_DATA_DIR",
            "RIDEPOOL_BUSY_TIMEOUT",
            "RIDEPOOL_DISABLE_AUTOINIT",
            "RIDEPOOL_MIN_PREP_MINUTES",
            "RIDEPOOL_SHIFT_START_MINUTES",
            "RIDEPOOL_SHIFT_END_MINUTES",
            "RIDEPOOL_OUTPUT_FORMAT",
        ] {
            cmd.env_remove(var);
        }
        cmd
    }

    /// The binary with `--data-dir` pointing into this environment.
    pub fn command(&self) -> Command {
        let mut cmd = self.command_bare();
        cmd.arg("--data-dir").arg(&self.data_dir);
        cmd
    }

    /// Write a file under the temporary directory and return its path.
    pub fn write_file(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.temp_path.join(name);
        std::fs::write(&path, contents).expect("Failed to write test file");
        path
    }

    /// Run a command that must succeed and return its stdout.
    pub fn stdout(&self, args: &[&str]) -> String {
        let output = self
            .command()
            .args(args)
            .output()
            .expect("Failed to run ridepool");

        assert!(
            output.status.success(),
            "ridepool {args:?} failed: {}",
            String::from_utf8_lossy(&output.stderr)
        );
        String::from_utf8(output.stdout).expect("Invalid UTF-8 in output")
    }

    /// Register a vehicle and return its id.
    pub fn add_vehicle(&self, company: i64, passengers: u32) -> i64 {
        self.stdout(&[
            "add-vehicle",
            "--company",
            &company.to_string(),
            "--passengers",
            &passengers.to_string(),
        ])
        .trim()
        .parse()
        .expect("Output is not a vehicle id")
    }

    /// Make a vehicle available, with `now` fixed to [`NOW`].
    pub fn add_availability(&self, vehicle: i64, company: i64, start: &str, end: &str) {
        self.stdout(&[
            "add-availability",
            "--vehicle",
            &vehicle.to_string(),
            "--company",
            &company.to_string(),
            "--start",
            start,
            "--end",
            end,
            "--now",
            NOW,
        ]);
    }

    /// Schedule a stop on a vehicle's tour.
    pub fn add_event(&self, vehicle: i64, time: &str, kind: &str, passengers: u32) {
        self.stdout(&[
            "add-event",
            "--vehicle",
            &vehicle.to_string(),
            "--time",
            time,
            "--kind",
            kind,
            "--passengers",
            &passengers.to_string(),
        ]);
    }

    /// Stored availability as JSON.
    pub fn availability_json(&self, merged: bool) -> serde_json::Value {
        let mut args = vec!["list-availability", "--format", "json"];
        if merged {
            args.push("--merged");
        }
        serde_json::from_str(&self.stdout(&args)).expect("list output is not JSON")
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}
