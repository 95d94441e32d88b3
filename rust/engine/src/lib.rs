//! # showdown-engine: Dealer vs. Player Poker Core
//!
//! A two-player (dealer against player) poker round: nine cards dealt from a
//! shuffled deck, the board revealed step by step as the player passes, and a
//! showdown that ranks each side's best five of seven cards the moment the
//! player bets.
//!
//! ## Core Modules
//!
//! - [`cards`] - Card representation (Suit, Rank, Card), parsing and deck construction
//! - [`deck`] - Dealing from the front of a deck and the injected [`deck::Shuffler`]
//! - [`hand`] - Best-of-seven hand evaluation and comparison
//! - [`round`] - The betting/reveal state machine ([`round::Table`])
//! - [`showdown`] - Winner resolution and pot distribution
//! - [`errors`] - Error types for all operations
//!
//! ## Quick Start
//!
//! ```rust
//! use showdown_engine::cards::parse_cards;
//! use showdown_engine::hand::{evaluate, Category};
//!
//! let cards = parse_cards("AS KS QS JS 10S 2H 3D").unwrap();
//! let best = evaluate(&cards).unwrap();
//! assert_eq!(best.category, Category::StraightFlush);
//! assert_eq!(best.describe(), "Royal Flush");
//! ```
//!
//! ## Playing a Round
//!
//! ```rust
//! use showdown_engine::round::{Progress, Table};
//!
//! let mut table = Table::with_seed(42);
//! table.start_round().unwrap();
//!
//! // Pass to see the flop, then bet 40
//! match table.pass().unwrap() {
//!     Progress::Continue(snap) => assert_eq!(snap.board.iter().filter(|s| s.card().is_some()).count(), 3),
//!     Progress::Finished(_) => unreachable!(),
//! }
//! let outcome = table.bet(40).unwrap();
//! println!("{}", outcome.message);
//! ```

pub mod cards;
pub mod deck;
pub mod errors;
pub mod hand;
pub mod round;
pub mod showdown;
