use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::cards::Card;
use crate::deck::{Deck, SeededShuffler, Shuffler};
use crate::errors::GameError;
use crate::hand::evaluate;
use crate::showdown::{resolve, showdown_message, HandSummary, RoundOutcome, Winner, FOLD_MESSAGE};

/// Paid by each side when a round starts.
pub const ANTE: u32 = 20;

/// Player money at the start of a session.
pub const STARTING_MONEY: i64 = 500;

/// Reveal stage of a round. `Showdown` and `Folded` are terminal.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// Hole cards dealt, board hidden
    PreFlop,
    /// First three board cards shown
    FlopRevealed,
    /// All five board cards shown, waiting for the last decision
    TurnRevealed,
    /// A bet was made and the hands were compared
    Showdown,
    /// The player passed at the last decision point
    Folded,
}

impl Phase {
    pub fn is_terminal(self) -> bool {
        matches!(self, Phase::Showdown | Phase::Folded)
    }

    /// Number of board cards visible in this phase.
    pub fn board_visible(self) -> usize {
        match self {
            Phase::PreFlop => 0,
            Phase::FlopRevealed => 3,
            Phase::TurnRevealed | Phase::Showdown | Phase::Folded => 5,
        }
    }
}

/// The three bet sizes; each is only available in one phase.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub enum BetSize {
    Sixty,
    Forty,
    Twenty,
}

impl BetSize {
    pub fn amount(self) -> u32 {
        match self {
            BetSize::Sixty => 60,
            BetSize::Forty => 40,
            BetSize::Twenty => 20,
        }
    }

    pub fn from_amount(amount: u32) -> Option<BetSize> {
        match amount {
            60 => Some(BetSize::Sixty),
            40 => Some(BetSize::Forty),
            20 => Some(BetSize::Twenty),
            _ => None,
        }
    }

    /// The phase in which this size may be bet.
    pub fn phase(self) -> Phase {
        match self {
            BetSize::Sixty => Phase::PreFlop,
            BetSize::Forty => Phase::FlopRevealed,
            BetSize::Twenty => Phase::TurnRevealed,
        }
    }

    pub fn for_phase(phase: Phase) -> Option<BetSize> {
        match phase {
            Phase::PreFlop => Some(BetSize::Sixty),
            Phase::FlopRevealed => Some(BetSize::Forty),
            Phase::TurnRevealed => Some(BetSize::Twenty),
            Phase::Showdown | Phase::Folded => None,
        }
    }
}

/// A decision the player can submit.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum RoundAction {
    Pass,
    Bet(u32),
}

impl fmt::Display for RoundAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RoundAction::Pass => write!(f, "pass"),
            RoundAction::Bet(n) => write!(f, "bet {}", n),
        }
    }
}

/// A card position as seen by the display layer.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CardSlot {
    Hidden,
    Shown(Card),
}

impl CardSlot {
    pub fn card(self) -> Option<Card> {
        match self {
            CardSlot::Shown(c) => Some(c),
            CardSlot::Hidden => None,
        }
    }
}

/// Read-only view of the table. Unrevealed cards are [`CardSlot::Hidden`] and
/// carry no value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RoundSnapshot {
    /// 1-based round counter for the session
    pub round: u32,
    pub phase: Phase,
    pub dealer_hole: [CardSlot; 2],
    pub player_hole: [CardSlot; 2],
    pub board: [CardSlot; 5],
    pub pot: u32,
    pub money: i64,
}

/// Per-round state: the nine dealt cards, reveal phase, pot and bets taken.
#[derive(Debug, Clone)]
pub struct RoundState {
    dealer_hole: [Card; 2],
    player_hole: [Card; 2],
    board: [Card; 5],
    phase: Phase,
    pot: u32,
    actions_taken: BTreeSet<BetSize>,
}

impl RoundState {
    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn pot(&self) -> u32 {
        self.pot
    }

    pub fn actions_taken(&self) -> &BTreeSet<BetSize> {
        &self.actions_taken
    }

    fn seven_cards(&self, hole: [Card; 2]) -> [Card; 7] {
        [
            hole[0],
            hole[1],
            self.board[0],
            self.board[1],
            self.board[2],
            self.board[3],
            self.board[4],
        ]
    }
}

/// Either the round goes on, or it just ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Progress {
    Continue(RoundSnapshot),
    Finished(RoundOutcome),
}

/// Dealer-vs-player table: owns the player's money across rounds and the
/// state of the current round.
///
/// Every mutating call takes `&mut self` and validates before changing
/// anything, so a rejected action leaves the table exactly as it was.
///
/// # Examples
///
/// ```
/// use showdown_engine::round::{Phase, Table};
///
/// let mut table = Table::with_seed(7);
/// let snap = table.start_round().unwrap();
/// assert_eq!(snap.phase, Phase::PreFlop);
/// assert_eq!((snap.pot, snap.money), (40, 480));
///
/// let outcome = table.bet(60).unwrap();
/// assert_eq!(outcome.pot, 160);
/// assert_eq!(outcome.snapshot.phase, Phase::Showdown);
/// ```
pub struct Table {
    shuffler: Box<dyn Shuffler + Send>,
    /// Player money; may go negative. Changes that would overflow `i64` are refused.
    money: i64,
    show_player_cards: bool,
    /// Current or most recently finished round
    round: Option<RoundState>,
    rounds_played: u32,
}

impl fmt::Debug for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Table")
            .field("money", &self.money)
            .field("show_player_cards", &self.show_player_cards)
            .field("round", &self.round)
            .field("rounds_played", &self.rounds_played)
            .finish_non_exhaustive()
    }
}

impl Table {
    pub fn new(starting_money: i64, shuffler: impl Shuffler + Send + 'static) -> Self {
        Self {
            shuffler: Box::new(shuffler),
            money: starting_money,
            show_player_cards: true,
            round: None,
            rounds_played: 0,
        }
    }

    /// Table with [`STARTING_MONEY`] and a ChaCha20 shuffler seeded with `seed`.
    pub fn with_seed(seed: u64) -> Self {
        Self::new(STARTING_MONEY, SeededShuffler::new(seed))
    }

    pub fn money(&self) -> i64 {
        self.money
    }

    pub fn show_player_cards(&self) -> bool {
        self.show_player_cards
    }

    /// Hides or shows the player's hole cards in snapshots of a running
    /// round. Finished rounds always show every card.
    pub fn set_show_player_cards(&mut self, show: bool) {
        self.show_player_cards = show;
    }

    pub fn rounds_played(&self) -> u32 {
        self.rounds_played
    }

    pub fn round(&self) -> Option<&RoundState> {
        self.round.as_ref()
    }

    pub fn phase(&self) -> Option<Phase> {
        self.round.as_ref().map(|r| r.phase)
    }

    /// Shuffles a fresh deck, deals two cards each and a five-card board, and
    /// collects the ante from both sides.
    ///
    /// A round that has not finished yet is abandoned and its pot stays with the house.
    pub fn start_round(&mut self) -> Result<RoundSnapshot, GameError> {
        let money = money_after(self.money, -i64::from(ANTE))?;
        let mut deck = Deck::new();
        deck.shuffle_with(self.shuffler.as_mut());
        let dealt: [Card; 9] = deck
            .draw(9)?
            .try_into()
            .map_err(|v: Vec<Card>| GameError::InsufficientCards {
                requested: 9,
                remaining: v.len(),
            })?;
        let [d0, d1, p0, p1, b0, b1, b2, b3, b4] = dealt;

        if let Some(prev) = &self.round {
            if !prev.phase.is_terminal() {
                warn!(
                    round = self.rounds_played,
                    phase = ?prev.phase,
                    pot = prev.pot,
                    "abandoning unfinished round"
                );
            }
        }

        self.money = money;
        self.rounds_played += 1;
        self.round = Some(RoundState {
            dealer_hole: [d0, d1],
            player_hole: [p0, p1],
            board: [b0, b1, b2, b3, b4],
            phase: Phase::PreFlop,
            pot: 2 * ANTE,
            actions_taken: BTreeSet::new(),
        });
        debug!(round = self.rounds_played, money = self.money, "round dealt");
        self.snapshot()
    }

    /// Bets `size` and goes straight to showdown.
    ///
    /// 60 is only accepted before the flop, 40 after the flop and 20 once the
    /// whole board is out; each size at most once per round.
    ///
    /// # Errors
    ///
    /// [`GameError::IllegalAction`] for any other size, phase or repeat, and
    /// [`GameError::NoRoundInProgress`] before the first deal.
    pub fn bet(&mut self, size: u32) -> Result<RoundOutcome, GameError> {
        let round = self.round.as_ref().ok_or(GameError::NoRoundInProgress)?;
        let phase = round.phase;
        let bet = BetSize::from_amount(size)
            .filter(|b| b.phase() == phase && !round.actions_taken.contains(b));
        let Some(bet) = bet else {
            debug!(size, phase = ?phase, "bet rejected");
            return Err(GameError::IllegalAction {
                action: RoundAction::Bet(size),
                phase,
            });
        };

        let dealer = evaluate(&round.seven_cards(round.dealer_hole))?;
        let player = evaluate(&round.seven_cards(round.player_hole))?;
        let pot = round.pot + 2 * bet.amount();
        let resolution = resolve(&dealer, &player, pot);
        let money = money_after(self.money, resolution.money_delta - i64::from(bet.amount()))?;

        if let Some(round) = self.round.as_mut() {
            round.pot = pot;
            round.actions_taken.insert(bet);
            round.phase = Phase::Showdown;
        }
        self.money = money;

        let dealer_hand = HandSummary::from(&dealer);
        let player_hand = HandSummary::from(&player);
        info!(
            round = self.rounds_played,
            winner = ?resolution.winner,
            pot,
            money = self.money,
            dealer = %dealer_hand.description,
            player = %player_hand.description,
            "showdown"
        );
        Ok(RoundOutcome {
            winner: resolution.winner,
            message: showdown_message(&dealer_hand, &player_hand, resolution.winner),
            dealer_hand: Some(dealer_hand),
            player_hand: Some(player_hand),
            pot,
            money: self.money,
            money_delta: resolution.money_delta,
            house_remainder: resolution.house_remainder,
            snapshot: self.snapshot()?,
        })
    }

    /// Declines to bet. Reveals the flop, then the turn and river together; a
    /// pass once the whole board is out folds and the dealer takes the pot.
    pub fn pass(&mut self) -> Result<Progress, GameError> {
        let round = self.round.as_mut().ok_or(GameError::NoRoundInProgress)?;
        let phase = round.phase;
        let next = match phase {
            _ if !round.actions_taken.is_empty() => None,
            Phase::PreFlop => Some(Phase::FlopRevealed),
            Phase::FlopRevealed => Some(Phase::TurnRevealed),
            Phase::TurnRevealed => Some(Phase::Folded),
            Phase::Showdown | Phase::Folded => None,
        };
        let Some(next) = next else {
            debug!(phase = ?phase, "pass rejected");
            return Err(GameError::IllegalAction {
                action: RoundAction::Pass,
                phase,
            });
        };
        round.phase = next;
        let pot = round.pot;

        if next != Phase::Folded {
            debug!(round = self.rounds_played, phase = ?next, "board revealed");
            return Ok(Progress::Continue(self.snapshot()?));
        }

        info!(
            round = self.rounds_played,
            winner = ?Winner::Dealer,
            pot,
            money = self.money,
            "player folded"
        );
        Ok(Progress::Finished(RoundOutcome {
            winner: Winner::Dealer,
            message: FOLD_MESSAGE.to_string(),
            dealer_hand: None,
            player_hand: None,
            pot,
            money: self.money,
            money_delta: 0,
            house_remainder: 0,
            snapshot: self.snapshot()?,
        }))
    }

    pub fn apply(&mut self, action: RoundAction) -> Result<Progress, GameError> {
        match action {
            RoundAction::Pass => self.pass(),
            RoundAction::Bet(size) => self.bet(size).map(Progress::Finished),
        }
    }

    /// Actions accepted in the current phase; empty when no round is running.
    pub fn legal_actions(&self) -> Vec<RoundAction> {
        let Some(round) = self.round.as_ref() else {
            return Vec::new();
        };
        if round.phase.is_terminal() || !round.actions_taken.is_empty() {
            return Vec::new();
        }
        let mut actions = vec![RoundAction::Pass];
        if let Some(bet) = BetSize::for_phase(round.phase) {
            actions.push(RoundAction::Bet(bet.amount()));
        }
        actions
    }

    /// Current view of the table for display. Board cards beyond the reveal
    /// phase and the dealer's hole cards before the round ends are hidden, as
    /// are the player's own cards while [`Table::set_show_player_cards`] is off.
    pub fn snapshot(&self) -> Result<RoundSnapshot, GameError> {
        let round = self.round.as_ref().ok_or(GameError::NoRoundInProgress)?;
        let visible = round.phase.board_visible();
        let dealer_slot = |c: Card| {
            if round.phase.is_terminal() {
                CardSlot::Shown(c)
            } else {
                CardSlot::Hidden
            }
        };
        let player_slot = |c: Card| {
            if self.show_player_cards || round.phase.is_terminal() {
                CardSlot::Shown(c)
            } else {
                CardSlot::Hidden
            }
        };
        let mut board = [CardSlot::Hidden; 5];
        for (i, slot) in board.iter_mut().enumerate().take(visible) {
            *slot = CardSlot::Shown(round.board[i]);
        }
        Ok(RoundSnapshot {
            round: self.rounds_played,
            phase: round.phase,
            dealer_hole: round.dealer_hole.map(dealer_slot),
            player_hole: round.player_hole.map(player_slot),
            board,
            pot: round.pot,
            money: self.money,
        })
    }
}

fn money_after(money: i64, change: i64) -> Result<i64, GameError> {
    money
        .checked_add(change)
        .ok_or(GameError::MoneyOutOfRange { money, change })
}
