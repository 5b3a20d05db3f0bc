#![allow(dead_code)]

use unobot::card::HAND_SIZE;
use unobot::deck::full_deck;
use unobot::{Card, Color, Game, GameBuilder, GameError};

/// Arranges a full deck so that dealing gives `hands[seat]` (in order) to each seat, the
/// starting card is `starter`, and the following draws produce `draws` in order.
pub fn stacked_deck(hands: &[Vec<Card>], starter: Card, draws: &[Card]) -> Vec<Card> {
    let mut rest = full_deck();
    let mut take = |card: Card| {
        let position = rest
            .iter()
            .position(|c| *c == card)
            .unwrap_or_else(|| panic!("deck has no spare {card}"));
        rest.remove(position)
    };

    let mut pop_order = Vec::new();
    for round in 0..HAND_SIZE {
        for hand in hands {
            assert_eq!(hand.len(), HAND_SIZE, "hands must hold exactly {HAND_SIZE} cards");
            pop_order.push(take(hand[round]));
        }
    }
    pop_order.push(take(starter));
    for card in draws {
        pop_order.push(take(*card));
    }
    // Remaining cards sit below the arranged ones.
    let mut deck = rest;
    deck.extend(pop_order.into_iter().rev());
    deck
}

pub fn names(count: usize) -> Vec<String> {
    (0..count).map(|i| format!("P{i}")).collect()
}

pub fn stacked_game(hands: &[Vec<Card>], starter: Card, draws: &[Card]) -> Result<Game, GameError> {
    GameBuilder::new(names(hands.len()))?
        .with_deck(stacked_deck(hands, starter, draws))
        .build()
}

/// Seven number cards of one color, none of them a zero.
pub fn numbers(color: Color, values: [u8; 7]) -> Vec<Card> {
    values.iter().map(|v| Card::number(color, *v)).collect()
}

pub fn card_total(game: &Game) -> usize {
    (0..game.player_count())
        .map(|seat| game.hand(seat).map(|h| h.len()).unwrap_or_default())
        .sum::<usize>()
        + game.deck_len()
        + game.discard_len()
}
