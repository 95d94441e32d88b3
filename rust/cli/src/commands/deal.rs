//! Deal command handler.
//!
//! Deals one round exactly as `play` would for the same seed and shows every
//! card face up together with both best hands and the verdict.

use crate::config;
use crate::error::CliError;
use crate::formatters::{format_cards, format_slots};
use showdown_engine::round::{BetSize, Table};
use std::io::Write;

/// Handle the deal command.
///
/// Without `--seed` the configured seed (`SHOWDOWN_CONFIG` file or
/// `SHOWDOWN_SEED`) is used, and failing that a random seed is drawn and
/// printed so the deal can be reproduced. With `json` the result is written as a single JSON object.
pub fn handle_deal_command(
    seed: Option<u64>,
    json: bool,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    let seed = match seed {
        Some(s) => s,
        None => config::load_with_sources()
            .map_err(|e| CliError::Config(e.to_string()))?
            .config
            .seed
            .unwrap_or_else(rand::random),
    };
    let mut table = Table::with_seed(seed);
    table.start_round()?;
    // Betting before the flop jumps straight to showdown with everything revealed
    let outcome = table.bet(BetSize::Sixty.amount())?;
    let snap = &outcome.snapshot;

    if json {
        let value = serde_json::json!({
            "seed": seed,
            "dealer": snap.dealer_hole,
            "player": snap.player_hole,
            "board": snap.board,
            "dealer_hand": outcome.dealer_hand,
            "player_hand": outcome.player_hand,
            "winner": outcome.winner,
        });
        writeln!(out, "{}", value)?;
        return Ok(());
    }

    writeln!(out, "Seed: {}", seed)?;
    writeln!(out, "Dealer: {}", format_slots(&snap.dealer_hole))?;
    writeln!(out, "Player: {}", format_slots(&snap.player_hole))?;
    writeln!(out, "Board:  {}", format_slots(&snap.board))?;
    for (who, hand) in [("Dealer", &outcome.dealer_hand), ("Player", &outcome.player_hand)] {
        if let Some(h) = hand {
            writeln!(
                out,
                "{} best: {} {}",
                who,
                h.description,
                format_cards(&h.cards)
            )?;
        }
    }
    writeln!(out, "{}", outcome.winner.verdict())?;
    Ok(())
}
