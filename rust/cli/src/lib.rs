//! # Showdown CLI Library
//!
//! Command-line host for the showdown engine: interactive rounds against the
//! dealer plus a few inspection commands.
//!
//! ## Main Entry Point
//!
//! [`run`] parses command-line arguments and executes the matching
//! subcommand, reading player input from the process stdin. [`run_with_input`]
//! takes the input stream explicitly so sessions can be scripted.
//!
//! ## Example Usage
//!
//! ```
//! use std::io::Cursor;
//! let mut out = Vec::new();
//! let mut err = Vec::new();
//! let mut input = Cursor::new("bet\n");
//! let args = ["showdown", "play", "--seed", "42", "--rounds", "1"];
//! let code = showdown_cli::run_with_input(args, &mut out, &mut err, &mut input);
//! assert_eq!(code, 0);
//! assert!(String::from_utf8(out).unwrap().contains("Rounds played: 1"));
//! ```
//!
//! ## Available Subcommands
//!
//! - `play`: Play rounds against the dealer (pass, bet, show/hide cards or quit)
//! - `deal`: Deal a single round face up for inspection
//! - `eval`: Name the best five-card hand among 5 to 7 cards
//! - `cfg`: Display current configuration settings

use clap::Parser;
use std::io::{BufRead, Write};
pub mod cli;
mod commands;
mod config;
mod error;
pub mod exit_code;
pub mod formatters;
pub mod io_utils;
mod logging;
pub mod ui;
pub mod validation;

use cli::{Commands, ShowdownCli};
use commands::{
    handle_cfg_command, handle_deal_command, handle_eval_command, handle_play_command,
};

pub use error::CliError;

const COMMANDS: &[&str] = &["play", "deal", "eval", "cfg"];

/// Main entry point for the CLI application.
///
/// Parses command-line arguments and dispatches to the appropriate subcommand
/// handler. `play` reads its actions from the process stdin.
///
/// # Returns
///
/// Exit code: `0` for success, `2` for errors
///
/// # Example
///
/// ```
/// use std::io;
/// let args = vec!["showdown", "deal", "--seed", "42"];
/// let code = showdown_cli::run(args, &mut io::stdout(), &mut io::stderr());
/// assert_eq!(code, 0);
/// ```
pub fn run<I, S>(args: I, out: &mut dyn Write, err: &mut dyn Write) -> i32
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let stdin = std::io::stdin();
    let mut stdin_lock = stdin.lock();
    run_with_input(args, out, err, &mut stdin_lock)
}

/// Same as [`run`] with player input taken from `stdin`.
pub fn run_with_input<I, S>(
    args: I,
    out: &mut dyn Write,
    err: &mut dyn Write,
    stdin: &mut dyn BufRead,
) -> i32
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let argv: Vec<String> = args.into_iter().map(|s| s.as_ref().to_string()).collect();

    let cli = match ShowdownCli::try_parse_from(&argv) {
        Ok(cli) => cli,
        Err(e) => return report_parse_error(&e, out, err),
    };

    logging::init_logging(cli.verbose);
    tracing::debug!(command = cli.cmd.name(), "dispatching");

    let result = match cli.cmd {
        Commands::Play {
            rounds,
            seed,
            money,
        } => handle_play_command(rounds, seed, money, out, err, stdin),
        Commands::Deal { seed, json } => handle_deal_command(seed, json, out),
        Commands::Eval { cards } => handle_eval_command(&cards, out),
        Commands::Cfg => handle_cfg_command(out),
    };

    match result {
        Ok(()) => exit_code::SUCCESS,
        Err(e) => {
            let _ = ui::write_error(err, &e.to_string());
            exit_code::ERROR
        }
    }
}

fn report_parse_error(e: &clap::Error, out: &mut dyn Write, err: &mut dyn Write) -> i32 {
    use clap::error::ErrorKind;

    // Help and version should print to stdout and exit 0
    if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) {
        return match write!(out, "{}", e) {
            Ok(()) => exit_code::SUCCESS,
            Err(_) => exit_code::ERROR,
        };
    }

    let mut write_usage = || -> std::io::Result<()> {
        writeln!(err, "{}", e)?;
        writeln!(err)?;
        writeln!(err, "Showdown Poker CLI")?;
        writeln!(err, "Usage: showdown <command> [options]\n")?;
        writeln!(err, "Commands:")?;
        for c in COMMANDS {
            writeln!(err, "  {}", c)?;
        }
        writeln!(err, "\nFor full help, run: showdown --help")
    };
    let _ = write_usage();
    exit_code::ERROR
}
