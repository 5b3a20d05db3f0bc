use thiserror::Error;

use crate::action::PlayerId;
use crate::card::Card;

/// Errors that can occur when manipulating the game state.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("a game needs between 2 and 10 players, got {0}")]
    InvalidPlayerCount(usize),
    #[error("player index {0} is out of range")]
    InvalidPlayer(PlayerId),
    #[error("not player {seat}'s turn (player {turn} is to act)")]
    NotYourTurn { seat: PlayerId, turn: PlayerId },
    #[error("invalid action: {0}")]
    InvalidAction(#[from] InvalidAction),
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(&'static str),
    #[error("player left the table")]
    Aborted,
}

/// Details of rejected plays. The engine is left untouched when one is returned.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvalidAction {
    #[error("hand index {0} is out of range")]
    InvalidCard(usize),
    #[error("{0} cards are pending: stack a +2 / wild +4 or draw")]
    PenaltyPending(u32),
    #[error("{0} matches neither the active color nor the active value")]
    NotPlayable(Card),
    #[error("a wild card needs a color")]
    ColorRequired,
}
