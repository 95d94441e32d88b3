//! Shared fixtures for round tests: a shuffler that deals a chosen sequence.
#![allow(dead_code)]

use showdown_engine::cards::{parse_cards, Card};
use showdown_engine::deck::Shuffler;
use showdown_engine::round::{Table, STARTING_MONEY};

/// Moves the given cards to the front of the deck, in order, on every shuffle.
/// Deal order is dealer hole, player hole, then the five board cards.
pub struct Rigged(pub Vec<Card>);

impl Shuffler for Rigged {
    fn shuffle(&mut self, cards: &mut [Card]) {
        for (i, want) in self.0.iter().enumerate() {
            if let Some(pos) = cards.iter().position(|c| c == want) {
                cards.swap(i, pos);
            }
        }
    }
}

/// Table whose every round deals `dealer`, `player`, `board` (card codes).
pub fn rigged_table(dealer: &str, player: &str, board: &str) -> Table {
    rigged_table_with_money(STARTING_MONEY, dealer, player, board)
}

pub fn rigged_table_with_money(money: i64, dealer: &str, player: &str, board: &str) -> Table {
    let codes = format!("{} {} {}", dealer, player, board);
    let cards = parse_cards(&codes).expect("valid card codes");
    assert_eq!(cards.len(), 9, "rig needs exactly nine cards");
    Table::new(money, Rigged(cards))
}

/// Dealer pair of kings against player pair of aces on a dry board.
pub fn player_wins_table() -> Table {
    rigged_table("KH KD", "AH AD", "2C 7S 9D JC 3H")
}

/// Player pair of kings against dealer pair of aces on a dry board.
pub fn dealer_wins_table() -> Table {
    rigged_table("AH AD", "KH KD", "2C 7S 9D JC 3H")
}

/// Broadway on the board: both sides play the board.
pub fn tie_table() -> Table {
    rigged_table("2H 3D", "2S 3C", "10C JD QH KS AC")
}
