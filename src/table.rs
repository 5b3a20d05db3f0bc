//! Turn orchestration: one game, one bot per seat, paced bot turns.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::action::{PlayerId, TurnOutcome};
use crate::bot::Bot;
use crate::error::GameError;
use crate::game::Game;

/// A completed turn as seen by observers.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnReport {
    pub seat: PlayerId,
    /// Penalty that was pending when the seat started its turn.
    pub penalty_before: u32,
    pub outcome: TurnOutcome,
    pub next: PlayerId,
}

/// How a table run ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TableResult {
    Won { winner: PlayerId, turns: usize },
    TurnLimit { turns: usize },
}

/// Owns a game and the seats playing it. A new game means a new table.
pub struct Table {
    game: Game,
    seats: Vec<Box<dyn Bot>>,
    pacing: Duration,
    max_turns: Option<usize>,
    turns: usize,
}

impl Table {
    pub fn new(game: Game, seats: Vec<Box<dyn Bot>>) -> Result<Self, GameError> {
        if seats.len() != game.player_count() {
            return Err(GameError::InvalidConfiguration(
                "every player needs exactly one seat",
            ));
        }
        Ok(Self {
            game,
            seats,
            pacing: Duration::ZERO,
            max_turns: None,
            turns: 0,
        })
    }

    /// Delay before each non-human turn. Purely presentational.
    pub fn with_pacing(mut self, pacing: Duration) -> Self {
        self.pacing = pacing;
        self
    }

    /// Stop after this many attempted turns.
    pub fn with_max_turns(mut self, max_turns: usize) -> Self {
        self.max_turns = Some(max_turns);
        self
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    pub fn into_game(self) -> Game {
        self.game
    }

    pub fn turns(&self) -> usize {
        self.turns
    }

    /// Lets the current seat act once. Returns `Ok(None)` when the game is already over.
    ///
    /// A rejected action leaves the game untouched and is returned as an error; calling
    /// `step` again gives the same seat another try.
    pub fn step(&mut self) -> Result<Option<TurnReport>, GameError> {
        if self.game.is_finished() {
            return Ok(None);
        }
        let seat = self.game.current_player();
        let penalty_before = self.game.must_draw();
        self.turns += 1;
        let outcome = self.seats[seat].take_turn(&mut self.game, seat)?;
        if outcome.passes_turn() {
            self.game.pass(seat)?;
        }
        let report = TurnReport {
            seat,
            penalty_before,
            outcome,
            next: self.game.current_player(),
        };
        debug!(?report, "turn complete");
        Ok(Some(report))
    }

    /// Runs turns until someone wins, the turn cap is hit, or a human leaves.
    ///
    /// `observe` sees the game after every completed turn. Rejected actions are logged and
    /// retried; only [`GameError::Aborted`] ends the run early.
    ///
    /// Seats run synchronously on the calling task, and a human seat blocks it while waiting
    /// for input. Tables with such seats belong on their own `current_thread` runtime, as in
    /// the binaries.
    pub async fn run<F>(&mut self, mut observe: F) -> Result<TableResult, GameError>
    where
        F: FnMut(&Game, &TurnReport),
    {
        loop {
            if let Some(winner) = self.game.winner() {
                return Ok(TableResult::Won {
                    winner,
                    turns: self.turns,
                });
            }
            if self.max_turns.is_some_and(|limit| self.turns >= limit) {
                return Ok(TableResult::TurnLimit { turns: self.turns });
            }
            let seat = self.game.current_player();
            if !self.pacing.is_zero() && !self.seats[seat].is_human() {
                tokio::time::sleep(self.pacing).await;
            }
            match self.step() {
                Ok(Some(report)) => observe(&self.game, &report),
                Ok(None) => {}
                Err(GameError::Aborted) => return Err(GameError::Aborted),
                Err(err) => warn!(seat, %err, "action rejected"),
            }
        }
    }
}
