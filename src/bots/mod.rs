pub mod greedy;
pub mod human;
pub mod random;
pub mod registry;

pub use greedy::GreedyBot;
pub use human::HumanBot;
pub use random::RandomBot;

use rand::Rng;

use crate::action::{PlayOutcome, PlayerId};
use crate::card::Color;
use crate::error::GameError;
use crate::game::Game;

/// Plays `hand_index`, picking a random base color when the card is wild.
pub(crate) fn play_with_random_color<R: Rng + ?Sized>(
    game: &mut Game,
    seat: PlayerId,
    hand_index: usize,
    rng: &mut R,
) -> Result<PlayOutcome, GameError> {
    let is_wild = game
        .hand(seat)?
        .get(hand_index)
        .is_some_and(|card| card.is_wild());
    let chosen = is_wild.then(|| Color::random(rng));
    game.play(seat, hand_index, chosen)
}
