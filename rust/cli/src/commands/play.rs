//! # Play Command
//!
//! Interactive rounds against the dealer.
//!
//! Each round antes 20 from both sides and deals the table. The player then
//! either passes, revealing the flop and later the rest of the board, or bets
//! the size allowed in the current phase, which settles the round at
//! showdown. Passing on the full board folds.
//!
//! ## Features
//!
//! - Input is read line by line, so rounds can be scripted through a pipe
//! - Malformed input and bets the engine refuses are reported and re-prompted
//! - `q` (or EOF) ends the session; a round left unfinished forfeits its ante
//! - `hide` and `show` toggle the player's own hole cards in the display
//! - A session summary (rounds, wins, losses, ties, money) is always printed

use crate::config::{self, Config};
use crate::error::CliError;
use crate::formatters::{format_action, format_legal_actions, format_outcome, format_snapshot};
use crate::io_utils::read_stdin_line;
use crate::ui;
use crate::validation::{ParseResult, parse_round_action};
use showdown_engine::deck::SeededShuffler;
use showdown_engine::errors::GameError;
use showdown_engine::round::{Progress, Table};
use showdown_engine::showdown::{RoundOutcome, Winner};
use std::io::{BufRead, Write};
use tracing::warn;

/// Win/loss/tie counts for one session.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
struct SessionTally {
    rounds: u32,
    wins: u32,
    losses: u32,
    ties: u32,
}

impl SessionTally {
    fn record(&mut self, outcome: &RoundOutcome) {
        match outcome.winner {
            Winner::Player => self.wins += 1,
            Winner::Dealer => self.losses += 1,
            Winner::Tie => self.ties += 1,
        }
    }
}

/// Handle the play command: interactive rounds against the dealer.
///
/// Flags override the resolved configuration (`SHOWDOWN_CONFIG` file and
/// `SHOWDOWN_*` environment variables).
///
/// # Arguments
///
/// * `rounds` - Number of rounds to play (must be >= 1, default: 1)
/// * `seed` - RNG seed for a reproducible session (default: random)
/// * `money` - Starting money (must be > 0, default: 500)
/// * `out` - Output stream for the table display
/// * `err` - Error stream for rejected input and warnings
/// * `stdin` - Input stream for player actions
///
/// # Examples
///
/// ```ignore
/// use showdown_cli::commands::handle_play_command;
/// use std::io::Cursor;
///
/// let mut out = Vec::new();
/// let mut err = Vec::new();
/// let mut input = Cursor::new("bet\n");
/// handle_play_command(Some(1), Some(42), None, &mut out, &mut err, &mut input).unwrap();
/// ```
pub fn handle_play_command(
    rounds: Option<u32>,
    seed: Option<u64>,
    money: Option<i64>,
    out: &mut dyn Write,
    err: &mut dyn Write,
    stdin: &mut dyn BufRead,
) -> Result<(), CliError> {
    let cfg = config::load_with_sources()
        .and_then(|resolved| resolved.config.with_overrides(rounds, seed, money))
        .map_err(|e| CliError::Config(e.to_string()))?;

    execute_play_command(&cfg, out, err, stdin)
}

fn execute_play_command(
    cfg: &Config,
    out: &mut dyn Write,
    err: &mut dyn Write,
    stdin: &mut dyn BufRead,
) -> Result<(), CliError> {
    let seed = cfg.seed.unwrap_or_else(rand::random);
    writeln!(
        out,
        "play: rounds={} seed={} money={}",
        cfg.rounds, seed, cfg.starting_money
    )?;

    let mut table = Table::new(cfg.starting_money, SeededShuffler::new(seed));
    let mut tally = SessionTally::default();

    for _ in 0..cfg.rounds {
        let snap = table.start_round()?;
        tally.rounds += 1;
        writeln!(out)?;
        writeln!(out, "{}", format_snapshot(&snap))?;

        match play_round(&mut table, out, err, stdin)? {
            Some(outcome) => {
                writeln!(out, "{}", format_outcome(&outcome))?;
                tally.record(&outcome);
            }
            None => {
                warn!(round = snap.round, "session ended mid-round");
                ui::display_warning(err, "Round abandoned; the ante stays with the house.")?;
                break;
            }
        }
    }

    write_summary(out, &tally, cfg.starting_money, table.money())?;
    Ok(())
}

/// Prompts until the round finishes. `None` means the player quit first.
fn play_round(
    table: &mut Table,
    out: &mut dyn Write,
    err: &mut dyn Write,
    stdin: &mut dyn BufRead,
) -> Result<Option<RoundOutcome>, CliError> {
    loop {
        let legal = table.legal_actions();
        ui::prompt(
            out,
            &format!(
                "Action ({} | {} | q): ",
                format_legal_actions(&legal),
                if table.show_player_cards() { "hide" } else { "show" }
            ),
        )?;

        let Some(input) = read_stdin_line(stdin) else {
            writeln!(out)?;
            return Ok(None);
        };
        let action = match parse_round_action(&input, &legal) {
            ParseResult::Action(action) => action,
            ParseResult::Quit => return Ok(None),
            ParseResult::ShowCards(show) => {
                table.set_show_player_cards(show);
                writeln!(out, "{}", format_snapshot(&table.snapshot()?))?;
                continue;
            }
            ParseResult::Invalid(msg) => {
                ui::write_error(err, &msg)?;
                continue;
            }
        };

        match table.apply(action) {
            Ok(Progress::Continue(snap)) => {
                writeln!(out, "Action: {}", format_action(&action))?;
                writeln!(out, "{}", format_snapshot(&snap))?;
            }
            Ok(Progress::Finished(outcome)) => {
                writeln!(out, "Action: {}", format_action(&action))?;
                return Ok(Some(outcome));
            }
            Err(e @ GameError::IllegalAction { .. }) => {
                ui::write_error(err, &e.to_string())?;
            }
            Err(e) => return Err(e.into()),
        }
    }
}

fn write_summary(
    out: &mut dyn Write,
    tally: &SessionTally,
    starting_money: i64,
    final_money: i64,
) -> Result<(), CliError> {
    writeln!(out)?;
    writeln!(out, "Session complete.")?;
    writeln!(out, "Rounds played: {}", tally.rounds)?;
    writeln!(
        out,
        "Wins: {}  Losses: {}  Ties: {}",
        tally.wins, tally.losses, tally.ties
    )?;
    writeln!(
        out,
        "Final money: {} ({:+})",
        final_money,
        final_money.saturating_sub(starting_money)
    )?;
    Ok(())
}
