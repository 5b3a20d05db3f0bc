use crate::action::{PlayerId, TurnOutcome};
use crate::error::GameError;
use crate::game::Game;

/// A seat at the table: decides and performs one turn through the engine's draw/play calls.
///
/// Implementations never advance the turn themselves; when the outcome
/// [`passes_turn`](TurnOutcome::passes_turn) the table does it.
///
/// `take_turn` is synchronous and may block, e.g. on terminal input.
pub trait Bot {
    fn take_turn(&mut self, game: &mut Game, seat: PlayerId) -> Result<TurnOutcome, GameError>;

    /// Interactive seats are not paced.
    fn is_human(&self) -> bool {
        false
    }
}
