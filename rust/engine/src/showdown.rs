//! Showdown resolution: who takes the pot and how much comes back to the player.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::hand::{compare_hands, Category, RankedHand};
use crate::round::RoundSnapshot;

/// Which side took the pot.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum Winner {
    Dealer,
    Player,
    Tie,
}

impl Winner {
    pub fn verdict(self) -> &'static str {
        match self {
            Winner::Dealer => "Dealer wins!",
            Winner::Player => "Player wins!",
            Winner::Tie => "It's a tie!",
        }
    }
}

/// Result of comparing both hands against a pot.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct Resolution {
    pub winner: Winner,
    /// Amount credited to the player's money
    pub money_delta: i64,
    /// Odd chip of a split pot, kept by the house
    pub house_remainder: u32,
}

/// Compares the two hands and splits `pot` accordingly.
///
/// A tie credits `pot / 2` to the player and the house keeps `pot % 2`. A dealer
/// win credits nothing: the player's ante and bet were already paid in.
///
/// # Examples
///
/// ```
/// use showdown_engine::cards::parse_cards;
/// use showdown_engine::hand::evaluate;
/// use showdown_engine::showdown::{resolve, Winner};
///
/// let dealer = evaluate(&parse_cards("KH KD 2C 3S 7D 9H JC").unwrap()).unwrap();
/// let player = evaluate(&parse_cards("AH AD 2C 3S 7D 9H JC").unwrap()).unwrap();
/// let res = resolve(&dealer, &player, 160);
/// assert_eq!(res.winner, Winner::Player);
/// assert_eq!(res.money_delta, 160);
/// ```
pub fn resolve(dealer: &RankedHand, player: &RankedHand, pot: u32) -> Resolution {
    match compare_hands(dealer, player) {
        Ordering::Equal => Resolution {
            winner: Winner::Tie,
            money_delta: i64::from(pot / 2),
            house_remainder: pot % 2,
        },
        Ordering::Greater => Resolution {
            winner: Winner::Dealer,
            money_delta: 0,
            house_remainder: 0,
        },
        Ordering::Less => Resolution {
            winner: Winner::Player,
            money_delta: i64::from(pot),
            house_remainder: 0,
        },
    }
}

/// Display form of a ranked hand.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HandSummary {
    pub category: Category,
    pub description: String,
    pub cards: [Card; 5],
    pub tiebreak: [u8; 5],
}

impl From<&RankedHand> for HandSummary {
    fn from(hand: &RankedHand) -> Self {
        Self {
            category: hand.category,
            description: hand.describe(),
            cards: hand.cards,
            tiebreak: hand.tiebreak,
        }
    }
}

/// How a round ended.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RoundOutcome {
    pub winner: Winner,
    pub message: String,
    /// `None` when the player folded and no hands were evaluated
    pub dealer_hand: Option<HandSummary>,
    pub player_hand: Option<HandSummary>,
    pub pot: u32,
    /// Player money after the pot was distributed
    pub money: i64,
    pub money_delta: i64,
    pub house_remainder: u32,
    /// Final view of the table, every card revealed
    pub snapshot: RoundSnapshot,
}

pub(crate) fn showdown_message(dealer: &HandSummary, player: &HandSummary, winner: Winner) -> String {
    format!(
        "Dealer's best hand: {}\nPlayer's best hand: {}\n\n{}",
        dealer.description,
        player.description,
        winner.verdict()
    )
}

pub(crate) const FOLD_MESSAGE: &str = "You folded. Dealer wins!";
