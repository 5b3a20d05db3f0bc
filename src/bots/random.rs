use rand::Rng;
use rand::seq::SliceRandom;

use crate::action::{PlayerId, TurnOutcome};
use crate::bot::Bot;
use crate::bots::play_with_random_color;
use crate::error::GameError;
use crate::game::Game;

/// Baseline bot that samples uniformly from the legal cards.
pub struct RandomBot<R: Rng> {
    rng: R,
}

impl<R: Rng> RandomBot<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> Bot for RandomBot<R> {
    fn take_turn(&mut self, game: &mut Game, seat: PlayerId) -> Result<TurnOutcome, GameError> {
        let penalty = game.must_draw() > 0;
        let candidates: Vec<usize> = game
            .playable_indices(seat)?
            .into_iter()
            .filter(|&index| !penalty || game.hand(seat).is_ok_and(|h| h[index].is_stacking()))
            .collect();

        if let Some(&index) = candidates.choose(&mut self.rng) {
            let outcome = play_with_random_color(game, seat, index, &mut self.rng)?;
            return Ok(TurnOutcome::from_play(outcome, 0));
        }

        let drawn = game.draw(seat)?;
        if penalty {
            return Ok(TurnOutcome::PaidPenalty { drawn: drawn.len() });
        }
        match drawn.last() {
            Some(card) if game.is_playable(card) => {
                let index = game.hand(seat)?.len() - 1;
                let outcome = play_with_random_color(game, seat, index, &mut self.rng)?;
                Ok(TurnOutcome::from_play(outcome, drawn.len()))
            }
            _ => Ok(TurnOutcome::DrewAndPassed { drawn: drawn.len() }),
        }
    }
}
