use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::cards::{Card, Rank};
use crate::errors::GameError;

/// Hand categories from weakest to strongest; the derived order is the primary ranking axis.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub enum Category {
    HighCard = 0,
    Pair = 1,
    TwoPair = 2,
    ThreeOfAKind = 3,
    Straight = 4,
    Flush = 5,
    FullHouse = 6,
    FourOfAKind = 7,
    StraightFlush = 8,
}

impl Category {
    pub fn name(self) -> &'static str {
        match self {
            Category::HighCard => "High Card",
            Category::Pair => "Pair",
            Category::TwoPair => "Two Pair",
            Category::ThreeOfAKind => "Three of a Kind",
            Category::Straight => "Straight",
            Category::Flush => "Flush",
            Category::FullHouse => "Full House",
            Category::FourOfAKind => "Four of a Kind",
            Category::StraightFlush => "Straight Flush",
        }
    }
}

/// The best five-card hand found among the evaluated cards.
///
/// Equality and ordering only look at `category` and `tiebreak`; two hands made
/// of different cards but with the same key are equal (a split pot).
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct RankedHand {
    pub category: Category,
    /// Rank values in descending significance, zero padded. A low Ace in a straight is 1.
    pub tiebreak: [u8; 5],
    /// The five cards making the hand, highest rank first
    pub cards: [Card; 5],
}

impl PartialEq for RankedHand {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for RankedHand {}

impl PartialOrd for RankedHand {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for RankedHand {
    fn cmp(&self, other: &Self) -> Ordering {
        compare_hands(self, other)
    }
}

impl RankedHand {
    /// Category name plus the ranks that distinguish it, e.g. "Full House, Kings over Tens".
    ///
    /// A tiebreak that does not hold rank values falls back to the bare
    /// category name.
    pub fn describe(&self) -> String {
        match (rank_of(self.tiebreak[0]), rank_of(self.tiebreak[1])) {
            (Some(first), Some(second)) => self.describe_ranks(first, second),
            (Some(first), None)
                if !matches!(self.category, Category::FullHouse | Category::TwoPair) =>
            {
                self.describe_ranks(first, first)
            }
            _ => self.category.name().to_string(),
        }
    }

    fn describe_ranks(&self, first: Rank, second: Rank) -> String {
        let k = |i: usize| if i == 0 { first } else { second };
        match self.category {
            Category::StraightFlush if k(0) == Rank::Ace => "Royal Flush".to_string(),
            Category::StraightFlush => format!("Straight Flush, {} High", k(0).name()),
            Category::FourOfAKind => format!("Four of a Kind, {}", k(0).plural()),
            Category::FullHouse => {
                format!("Full House, {} over {}", k(0).plural(), k(1).plural())
            }
            Category::Flush => format!("Flush, {} High", k(0).name()),
            Category::Straight => format!("Straight, {} High", k(0).name()),
            Category::ThreeOfAKind => format!("Three of a Kind, {}", k(0).plural()),
            Category::TwoPair => {
                format!("Two Pair, {} and {}", k(0).plural(), k(1).plural())
            }
            Category::Pair => format!("Pair of {}", k(0).plural()),
            Category::HighCard => format!("{} High", k(0).name()),
        }
    }
}

pub fn compare_hands(a: &RankedHand, b: &RankedHand) -> Ordering {
    match a.category.cmp(&b.category) {
        Ordering::Equal => a.tiebreak.cmp(&b.tiebreak),
        ord => ord,
    }
}

/// Finds the best five-card hand among 5 to 7 cards by ranking every
/// five-card combination.
///
/// The result does not depend on the order of `cards`: the input is put in a
/// canonical order first and the first maximal combination wins.
///
/// # Errors
///
/// [`GameError::InvalidInputSize`] when fewer than 5 or more than 7 cards are given.
///
/// # Examples
///
/// ```
/// use showdown_engine::cards::parse_cards;
/// use showdown_engine::hand::{evaluate, Category};
///
/// let cards = parse_cards("AS 2H 3D 4C 5S 9H 9D").unwrap();
/// let best = evaluate(&cards).unwrap();
/// assert_eq!(best.category, Category::Straight);
/// assert_eq!(best.tiebreak, [5, 4, 3, 2, 1]);
/// ```
pub fn evaluate(cards: &[Card]) -> Result<RankedHand, GameError> {
    if !(5..=7).contains(&cards.len()) {
        return Err(GameError::InvalidInputSize(cards.len()));
    }
    let mut sorted = cards.to_vec();
    sorted.sort_unstable_by(|a, b| (b.rank, b.suit).cmp(&(a.rank, a.suit)));

    let mut best: Option<RankedHand> = None;
    for idx in five_card_combinations(sorted.len()) {
        let five = idx.map(|i| sorted[i]);
        let ranked = evaluate_five(&five);
        if best.is_none_or(|b| ranked > b) {
            best = Some(ranked);
        }
    }
    best.ok_or(GameError::InvalidInputSize(cards.len()))
}

/// Ranks exactly five cards.
pub fn evaluate_five(cards: &[Card; 5]) -> RankedHand {
    let mut ordered = *cards;
    ordered.sort_unstable_by(|a, b| (b.rank, b.suit).cmp(&(a.rank, a.suit)));
    let values = ordered.map(|c| c.rank.value());

    let flush = ordered.iter().all(|c| c.suit == ordered[0].suit);
    let straight = straight_key(&values);

    if let Some(key) = straight {
        let category = if flush {
            Category::StraightFlush
        } else {
            Category::Straight
        };
        return RankedHand {
            category,
            tiebreak: key,
            cards: order_for_straight(ordered, key),
        };
    }
    if flush {
        return RankedHand {
            category: Category::Flush,
            tiebreak: values,
            cards: ordered,
        };
    }

    let groups = rank_groups(&values);
    let category = match (groups[0].0, groups.get(1).map(|g| g.0)) {
        (4, _) => Category::FourOfAKind,
        (3, Some(2)) => Category::FullHouse,
        (3, _) => Category::ThreeOfAKind,
        (2, Some(2)) => Category::TwoPair,
        (2, _) => Category::Pair,
        _ => Category::HighCard,
    };
    let mut tiebreak = [0u8; 5];
    for (slot, &(_, rank)) in tiebreak.iter_mut().zip(groups.iter()) {
        *slot = rank;
    }
    // Cards follow the group order so the made part of the hand comes first.
    let group_pos = |c: &Card| groups.iter().position(|&(_, r)| r == c.rank.value());
    ordered.sort_by_key(|c| (group_pos(c), std::cmp::Reverse(c.suit)));

    RankedHand {
        category,
        tiebreak,
        cards: ordered,
    }
}

/// Tiebreak key when the five values form a straight. Values arrive sorted high to low.
fn straight_key(values: &[u8; 5]) -> Option<[u8; 5]> {
    let distinct = values.windows(2).all(|w| w[0] != w[1]);
    if !distinct {
        return None;
    }
    if values[0] - values[4] == 4 {
        return Some(*values);
    }
    // Ace plays low: A-2-3-4-5
    if *values == [14, 5, 4, 3, 2] {
        return Some([5, 4, 3, 2, 1]);
    }
    None
}

fn order_for_straight(mut cards: [Card; 5], key: [u8; 5]) -> [Card; 5] {
    if key[4] == 1 {
        cards.rotate_left(1);
    }
    cards
}

/// (count, rank value) pairs, most frequent first, then highest rank first.
fn rank_groups(values: &[u8; 5]) -> Vec<(u8, u8)> {
    let mut counts = [0u8; 15];
    for &v in values {
        counts[v as usize] += 1;
    }
    let mut groups: Vec<(u8, u8)> = (2..=14u8)
        .rev()
        .filter(|&r| counts[r as usize] > 0)
        .map(|r| (counts[r as usize], r))
        .collect();
    groups.sort_by(|a, b| b.cmp(a));
    groups
}

/// Index sets of every five-element combination of `0..n`, in lexicographic order.
fn five_card_combinations(n: usize) -> Vec<[usize; 5]> {
    let mut out = Vec::new();
    if n < 5 {
        return out;
    }
    let mut idx = [0, 1, 2, 3, 4];
    loop {
        out.push(idx);
        let mut i = 4;
        while idx[i] == n - 5 + i {
            if i == 0 {
                return out;
            }
            i -= 1;
        }
        idx[i] += 1;
        for j in i + 1..5 {
            idx[j] = idx[j - 1] + 1;
        }
    }
}

/// Tiebreak value to rank. A five-high straight stores its ace as 1.
fn rank_of(value: u8) -> Option<Rank> {
    match value {
        1 | 14 => Some(Rank::Ace),
        2..=13 => Rank::from_value(value),
        _ => None,
    }
}
