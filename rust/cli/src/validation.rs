//! Input parsing for the interactive `play` command.
//!
//! Parsing only checks that a line is well formed. Whether a bet size is
//! allowed in the current phase is left to the engine, which reports an
//! `IllegalAction` the CLI shows to the player.

use showdown_engine::round::RoundAction;

/// Outcome of parsing one line typed by the player.
#[derive(Debug, PartialEq)]
pub enum ParseResult {
    Action(RoundAction),
    /// User entered quit command (q or quit)
    Quit,
    /// `show` or `hide` for the player's own hole cards
    ShowCards(bool),
    Invalid(String),
}

/// Parse user input into a [`RoundAction`] or the quit command.
///
/// Accepted forms (case-insensitive):
/// - `pass`, `p` or `check` → pass
/// - `bet N` or `b N` → bet of N
/// - `bet` or `b` alone → the bet size listed in `legal`
/// - `q` or `quit` → quit
/// - `show` or `hide` → toggle the player's hole cards
///
/// # Example
///
/// ```rust
/// # use showdown_cli::validation::{parse_round_action, ParseResult};
/// use showdown_engine::round::RoundAction;
///
/// let legal = [RoundAction::Pass, RoundAction::Bet(40)];
/// assert_eq!(parse_round_action("p", &legal), ParseResult::Action(RoundAction::Pass));
/// assert_eq!(parse_round_action("bet", &legal), ParseResult::Action(RoundAction::Bet(40)));
/// assert_eq!(parse_round_action("b 60", &legal), ParseResult::Action(RoundAction::Bet(60)));
/// assert_eq!(parse_round_action("quit", &legal), ParseResult::Quit);
/// ```
pub fn parse_round_action(input: &str, legal: &[RoundAction]) -> ParseResult {
    let input = input.trim().to_lowercase();
    let parts: Vec<&str> = input.split_whitespace().collect();

    let Some(&head) = parts.first() else {
        return ParseResult::Invalid("Empty input".to_string());
    };
    if parts.len() > 2 {
        return ParseResult::Invalid(format!("Too many arguments: {}", input));
    }

    match head {
        "q" | "quit" => ParseResult::Quit,
        "show" | "hide" if parts.len() > 1 => {
            ParseResult::Invalid(format!("{} takes no argument", head))
        }
        "show" => ParseResult::ShowCards(true),
        "hide" => ParseResult::ShowCards(false),
        "pass" | "p" | "check" => {
            if parts.len() > 1 {
                return ParseResult::Invalid("Pass takes no amount".to_string());
            }
            ParseResult::Action(RoundAction::Pass)
        }
        "bet" | "b" => match parts.get(1) {
            None => legal
                .iter()
                .find_map(|a| match a {
                    RoundAction::Bet(n) => Some(ParseResult::Action(RoundAction::Bet(*n))),
                    RoundAction::Pass => None,
                })
                .unwrap_or_else(|| ParseResult::Invalid("No bet is available now".to_string())),
            Some(amount) => match amount.parse::<u32>() {
                Ok(n) if n > 0 => ParseResult::Action(RoundAction::Bet(n)),
                Ok(_) => ParseResult::Invalid("Bet amount must be positive".to_string()),
                Err(_) => ParseResult::Invalid(format!("Invalid bet amount: {}", amount)),
            },
        },
        other => ParseResult::Invalid(format!(
            "Unrecognized action: {} (try pass, bet or q)",
            other
        )),
    }
}
