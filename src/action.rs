use serde::{Deserialize, Serialize};

use crate::card::Card;

/// Zero-based index of a player within the game.
pub type PlayerId = usize;

/// Result of a successful `play`.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct PlayOutcome {
    pub card: Card,
    /// Set when the play emptied the hand.
    pub winner: Option<PlayerId>,
}

/// What a seat did with its turn.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub enum TurnOutcome {
    /// A card was played, possibly right after drawing it.
    Played {
        card: Card,
        drawn: usize,
        winner: Option<PlayerId>,
    },
    /// Drew without being able (or willing) to play.
    DrewAndPassed { drawn: usize },
    /// Absorbed a pending penalty.
    PaidPenalty { drawn: usize },
}

impl TurnOutcome {
    pub(crate) fn from_play(outcome: PlayOutcome, drawn: usize) -> Self {
        TurnOutcome::Played {
            card: outcome.card,
            drawn,
            winner: outcome.winner,
        }
    }

    /// True when the caller still has to hand the turn on.
    pub fn passes_turn(&self) -> bool {
        !matches!(self, TurnOutcome::Played { .. })
    }

    pub fn drawn(&self) -> usize {
        match self {
            TurnOutcome::Played { drawn, .. }
            | TurnOutcome::DrewAndPassed { drawn }
            | TurnOutcome::PaidPenalty { drawn } => *drawn,
        }
    }

    pub fn winner(&self) -> Option<PlayerId> {
        match self {
            TurnOutcome::Played { winner, .. } => *winner,
            _ => None,
        }
    }
}
