//! Card, table and action formatters for terminal display.
//!
//! Cards print as rank plus suit symbol (`A♠`, `10♥`). On Windows consoles
//! without Unicode support the suit falls back to its letter (`AS`, `10H`).
//! Hidden cards print as `??`.
//!
//! ## Example
//!
//! ```rust
//! use showdown_engine::cards::{Card, Rank, Suit};
//! use showdown_engine::round::CardSlot;
//! use showdown_cli::formatters::{format_card, format_slots};
//!
//! let ace_spades = Card::new(Rank::Ace, Suit::Spades);
//! assert!(format_card(&ace_spades) == "A♠" || format_card(&ace_spades) == "AS");
//!
//! let slots = [CardSlot::Shown(ace_spades), CardSlot::Hidden];
//! assert!(format_slots(&slots).ends_with(" ??]"));
//! ```

use showdown_engine::cards::Card;
use showdown_engine::hand::RankedHand;
use showdown_engine::round::{CardSlot, RoundAction, RoundSnapshot};
use showdown_engine::showdown::RoundOutcome;

pub const HIDDEN_CARD: &str = "??";

/// Check if the terminal supports Unicode card symbols by detecting modern terminal environments.
///
/// On Windows, checks for Windows Terminal (WT_SESSION), modern terminals (TERM_PROGRAM),
/// or VS Code (VSCODE_INJECTION). On Unix-like systems, assumes Unicode support.
pub fn supports_unicode() -> bool {
    if cfg!(windows) {
        std::env::var("WT_SESSION").is_ok()
            || std::env::var("TERM_PROGRAM").is_ok()
            || std::env::var("VSCODE_INJECTION").is_ok()
    } else {
        true
    }
}

pub fn format_card(card: &Card) -> String {
    let suit = if supports_unicode() {
        card.suit.symbol()
    } else {
        card.suit.letter()
    };
    format!("{}{}", card.rank.code(), suit)
}

pub fn format_slot(slot: &CardSlot) -> String {
    match slot {
        CardSlot::Shown(card) => format_card(card),
        CardSlot::Hidden => HIDDEN_CARD.to_string(),
    }
}

/// Bracketed, space separated: `[A♠ ?? ??]`, or `[]` when empty.
pub fn format_slots(slots: &[CardSlot]) -> String {
    let formatted: Vec<String> = slots.iter().map(format_slot).collect();
    format!("[{}]", formatted.join(" "))
}

pub fn format_cards(cards: &[Card]) -> String {
    let formatted: Vec<String> = cards.iter().map(format_card).collect();
    format!("[{}]", formatted.join(" "))
}

/// Four-line table view: header, dealer, board, player.
///
/// ```text
/// Round 1 | Pot: 40 | Money: 480
/// Dealer: [?? ??]
/// Board:  [?? ?? ?? ?? ??]
/// Player: [A♥ A♦]
/// ```
pub fn format_snapshot(snap: &RoundSnapshot) -> String {
    format!(
        "Round {} | Pot: {} | Money: {}\nDealer: {}\nBoard:  {}\nPlayer: {}",
        snap.round,
        snap.pot,
        snap.money,
        format_slots(&snap.dealer_hole),
        format_slots(&snap.board),
        format_slots(&snap.player_hole),
    )
}

pub fn format_action(action: &RoundAction) -> String {
    action.to_string()
}

/// `pass | bet 60`, or `none` once the round is over.
pub fn format_legal_actions(actions: &[RoundAction]) -> String {
    if actions.is_empty() {
        return "none".to_string();
    }
    actions
        .iter()
        .map(format_action)
        .collect::<Vec<_>>()
        .join(" | ")
}

pub fn format_hand(hand: &RankedHand) -> String {
    format!("{} {}", hand.describe(), format_cards(&hand.cards))
}

/// Revealed table followed by the outcome message and the money line.
pub fn format_outcome(outcome: &RoundOutcome) -> String {
    let delta = if outcome.money_delta > 0 {
        format!(" (+{})", outcome.money_delta)
    } else {
        String::new()
    };
    format!(
        "{}\n{}\nMoney: {}{}",
        format_snapshot(&outcome.snapshot),
        outcome.message,
        outcome.money,
        delta
    )
}
