use thiserror::Error;

use crate::round::{Phase, RoundAction};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Insufficient cards: requested {requested}, remaining {remaining}")]
    InsufficientCards { requested: usize, remaining: usize },
    #[error("Hand evaluation needs 5 to 7 cards, got {0}")]
    InvalidInputSize(usize),
    #[error("Illegal action {action} during {phase:?}")]
    IllegalAction { action: RoundAction, phase: Phase },
    #[error("No round in progress")]
    NoRoundInProgress,
    #[error("Money out of range: {money} {change:+} does not fit in i64")]
    MoneyOutOfRange { money: i64, change: i64 },
    #[error("Invalid card code: {0:?}")]
    InvalidCard(String),
}
