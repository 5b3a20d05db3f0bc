use rand::Rng;

use crate::action::{PlayerId, TurnOutcome};
use crate::bot::Bot;
use crate::bots::play_with_random_color;
use crate::card::{Card, Color, Face};
use crate::error::GameError;
use crate::game::Game;

/// Rule-based opponent that always dumps its most aggressive legal card.
///
/// Policy:
/// 1. With a penalty pending, stack the first legal +2 / wild +4 in hand, otherwise draw the
///    penalty and give up the turn.
/// 2. Otherwise play the best-scoring legal card: wild +4 (5), +2 (4), skip/reverse (3),
///    matches the active color (2), anything else (1). Ties go to the leftmost card.
/// 3. With nothing legal, draw one card and play it straight away if it fits.
///
/// Wild colors are picked uniformly at random from the injected generator.
pub struct GreedyBot<R: Rng> {
    rng: R,
}

impl<R: Rng> GreedyBot<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    pub fn score(card: &Card, top_color: Color) -> u8 {
        match card.face() {
            Face::WildDrawFour => 5,
            Face::DrawTwo => 4,
            Face::Skip | Face::Reverse => 3,
            _ if card.color() == Some(top_color) => 2,
            _ => 1,
        }
    }

    fn best_playable(game: &Game, hand: &[Card]) -> Option<usize> {
        let mut best: Option<(usize, u8)> = None;
        for (index, card) in hand.iter().enumerate() {
            if !game.is_playable(card) {
                continue;
            }
            let score = Self::score(card, game.top_color());
            if best.is_none_or(|(_, top)| score > top) {
                best = Some((index, score));
            }
        }
        best.map(|(index, _)| index)
    }
}

impl<R: Rng> Bot for GreedyBot<R> {
    fn take_turn(&mut self, game: &mut Game, seat: PlayerId) -> Result<TurnOutcome, GameError> {
        if game.must_draw() > 0 {
            let stack = game
                .hand(seat)?
                .iter()
                .position(|card| card.is_stacking() && game.is_playable(card));
            return match stack {
                Some(index) => {
                    let outcome = play_with_random_color(game, seat, index, &mut self.rng)?;
                    Ok(TurnOutcome::from_play(outcome, 0))
                }
                None => {
                    let drawn = game.draw(seat)?;
                    Ok(TurnOutcome::PaidPenalty { drawn: drawn.len() })
                }
            };
        }

        if let Some(index) = Self::best_playable(game, game.hand(seat)?) {
            let outcome = play_with_random_color(game, seat, index, &mut self.rng)?;
            return Ok(TurnOutcome::from_play(outcome, 0));
        }

        let drawn = game.draw(seat)?;
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

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;

    use super::*;

    #[test]
    fn scores_follow_the_priority_ladder() {
        let score = GreedyBot::<StdRng>::score;
        assert_eq!(score(&Card::wild_draw_four(), Color::Red), 5);
        assert_eq!(score(&Card::draw_two(Color::Blue), Color::Red), 4);
        assert_eq!(score(&Card::skip(Color::Blue), Color::Red), 3);
        assert_eq!(score(&Card::reverse(Color::Red), Color::Red), 3);
        assert_eq!(score(&Card::number(Color::Red, 2), Color::Red), 2);
        assert_eq!(score(&Card::number(Color::Blue, 2), Color::Red), 1);
        assert_eq!(score(&Card::wild(), Color::Red), 1);
    }
}
