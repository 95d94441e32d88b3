//! Configuration command handler.
//!
//! Prints the resolved configuration as pretty JSON, each value paired with
//! where it came from (`default`, `file` or `env`).
//!
//! # Example Output
//!
//! ```json
//! {
//!   "starting_money": {
//!     "value": 500,
//!     "source": "default"
//!   },
//!   ...
//! }
//! ```

use crate::config;
use crate::error::CliError;
use std::io::Write;

/// Handle the cfg command.
///
/// # Errors
///
/// Returns `CliError::Config` if the config file or an environment variable
/// cannot be parsed or fails validation.
pub fn handle_cfg_command(out: &mut dyn Write) -> Result<(), CliError> {
    let resolved =
        config::load_with_sources().map_err(|e| CliError::Config(e.to_string()))?;

    let config::ConfigResolved { config, sources } = resolved;
    let display = serde_json::json!({
        "starting_money": {
            "value": config.starting_money,
            "source": sources.starting_money,
        },
        "seed": {
            "value": config.seed,
            "source": sources.seed,
        },
        "rounds": {
            "value": config.rounds,
            "source": sources.rounds,
        }
    });
    let json_str = serde_json::to_string_pretty(&display).map_err(std::io::Error::other)?;
    writeln!(out, "{}", json_str)?;
    Ok(())
}
