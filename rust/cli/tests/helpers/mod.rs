//! Shared helpers for CLI integration tests: run the CLI in-process with
//! scripted stdin, and set `SHOWDOWN_*` variables for the duration of a test.
#![allow(dead_code)]

use std::io::Cursor;

#[derive(Debug, Clone)]
pub struct CliResult {
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

pub fn run_cli(args: &[&str], input: &str) -> CliResult {
    let mut argv = vec!["showdown"];
    argv.extend_from_slice(args);
    let mut out = Vec::new();
    let mut err = Vec::new();
    let mut stdin = Cursor::new(input.to_string());
    let exit_code = showdown_cli::run_with_input(argv, &mut out, &mut err, &mut stdin);
    CliResult {
        exit_code,
        stdout: String::from_utf8_lossy(&out).into_owned(),
        stderr: String::from_utf8_lossy(&err).into_owned(),
    }
}

pub const CONFIG_VARS: [&str; 4] = [
    "SHOWDOWN_CONFIG",
    "SHOWDOWN_SEED",
    "SHOWDOWN_MONEY",
    "SHOWDOWN_ROUNDS",
];

/// Clears every `SHOWDOWN_*` variable, applies `pairs`, and restores the
/// previous values on drop. Tests using it must be `#[serial]`.
pub struct EnvGuard {
    restores: Vec<(String, Option<String>)>,
}

impl EnvGuard {
    pub fn apply(pairs: &[(&str, &str)]) -> Self {
        let mut restores = Vec::new();
        for key in CONFIG_VARS {
            restores.push((key.to_string(), std::env::var(key).ok()));
            unsafe {
                std::env::remove_var(key);
            }
        }
        for (key, value) in pairs {
            if !CONFIG_VARS.contains(key) {
                restores.push((key.to_string(), std::env::var(key).ok()));
            }
            unsafe {
                std::env::set_var(key, value);
            }
        }
        EnvGuard { restores }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        for (key, previous) in self.restores.iter().rev() {
            match previous {
                Some(val) => unsafe { std::env::set_var(key, val) },
                None => unsafe { std::env::remove_var(key) },
            }
        }
    }
}
