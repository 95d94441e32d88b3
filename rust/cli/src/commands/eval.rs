//! Eval command handler: best five-card hand among 5 to 7 given cards.

use crate::error::CliError;
use crate::formatters::format_hand;
use showdown_engine::cards::parse_cards;
use showdown_engine::hand::evaluate;
use std::io::Write;

/// Handle the eval command.
///
/// `cards` are card codes as typed on the command line; each argument may
/// itself hold several codes separated by spaces or commas.
pub fn handle_eval_command(cards: &[String], out: &mut dyn Write) -> Result<(), CliError> {
    let parsed = parse_cards(&cards.join(" "))?;
    let mut seen = std::collections::HashSet::new();
    if let Some(dup) = parsed.iter().find(|c| !seen.insert(**c)) {
        return Err(CliError::InvalidInput(format!(
            "card {} given more than once",
            dup.code()
        )));
    }
    let hand = evaluate(&parsed)?;
    writeln!(out, "{}", format_hand(&hand))?;
    Ok(())
}
