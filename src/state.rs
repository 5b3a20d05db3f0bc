use serde::{Deserialize, Serialize};

use crate::action::PlayerId;
use crate::card::{Card, Color, Face};

/// Order in which seats take turns.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum Direction {
    Clockwise,
    CounterClockwise,
}

impl Direction {
    /// Seat offset applied by a single step.
    pub fn step(self) -> isize {
        match self {
            Direction::Clockwise => 1,
            Direction::CounterClockwise => -1,
        }
    }

    pub fn reversed(self) -> Self {
        match self {
            Direction::Clockwise => Direction::CounterClockwise,
            Direction::CounterClockwise => Direction::Clockwise,
        }
    }
}

/// Status of the entire game.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum GameStatus {
    Ongoing,
    Finished { winner: PlayerId },
}

/// Public portion of a player's state that every seat may observe.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct PlayerPublicState {
    pub id: PlayerId,
    pub name: String,
    pub hand_count: usize,
    pub is_current: bool,
}

/// Snapshot of the table as seen from one seat (or from nobody).
///
/// Hands of other seats are never part of the view; only their sizes are.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct GameStateView {
    pub perspective: Option<PlayerId>,
    pub status: GameStatus,
    pub turn: PlayerId,
    pub direction: Direction,
    pub top: Option<Card>,
    pub top_color: Color,
    pub top_face: Face,
    pub must_draw: u32,
    pub deck_count: usize,
    pub discard_count: usize,
    pub players: Vec<PlayerPublicState>,
    /// Full hand of the perspective seat.
    pub hand: Option<Vec<Card>>,
    /// Indices into `hand` that are currently legal, for hinting.
    pub playable: Vec<usize>,
}

impl GameStateView {
    /// Cards accounted for by the view: every hand plus deck and discard.
    pub fn card_total(&self) -> usize {
        self.players.iter().map(|p| p.hand_count).sum::<usize>()
            + self.deck_count
            + self.discard_count
    }

    pub fn is_my_turn(&self) -> bool {
        self.perspective == Some(self.turn)
    }
}

/// End-of-game reveal: remaining hands and every card played.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct GameSummary {
    pub winner: PlayerId,
    pub hands: Vec<(String, Vec<Card>)>,
    pub history: Vec<Card>,
}
