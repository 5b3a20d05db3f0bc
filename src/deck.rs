//! Deck construction and shuffling.

use std::collections::HashMap;

use rand::Rng;
use rand::seq::SliceRandom;

use crate::card::{Card, Color, DECK_SIZE, MAX_NUMBER, WILD_COPIES};

/// Builds the full 108-card set in deterministic order (unshuffled).
pub fn full_deck() -> Vec<Card> {
    let mut deck = Vec::with_capacity(DECK_SIZE);
    for color in Color::ALL {
        deck.push(Card::number(color, 0));
        for _ in 0..2 {
            for value in 1..=MAX_NUMBER {
                deck.push(Card::number(color, value));
            }
            deck.push(Card::skip(color));
            deck.push(Card::reverse(color));
            deck.push(Card::draw_two(color));
        }
    }
    for _ in 0..WILD_COPIES {
        deck.push(Card::wild());
        deck.push(Card::wild_draw_four());
    }
    deck
}

/// Returns a uniformly shuffled copy of `cards`, leaving the input untouched.
pub fn shuffle<R: Rng + ?Sized>(cards: &[Card], rng: &mut R) -> Vec<Card> {
    let mut shuffled = cards.to_vec();
    shuffled.shuffle(rng);
    shuffled
}

/// A freshly shuffled full deck.
pub fn create_deck<R: Rng + ?Sized>(rng: &mut R) -> Vec<Card> {
    shuffle(&full_deck(), rng)
}

/// True when both slices hold the same cards with the same multiplicities.
pub fn same_cards(left: &[Card], right: &[Card]) -> bool {
    if left.len() != right.len() {
        return false;
    }
    let mut counts: HashMap<Card, isize> = HashMap::new();
    for card in left {
        *counts.entry(*card).or_default() += 1;
    }
    for card in right {
        *counts.entry(*card).or_default() -= 1;
    }
    counts.values().all(|count| *count == 0)
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;
    use crate::card::Face;

    #[test]
    fn composition_matches_the_standard_set() {
        let deck = full_deck();
        assert_eq!(deck.len(), DECK_SIZE);
        for color in Color::ALL {
            let of_color: Vec<_> = deck.iter().filter(|c| c.color() == Some(color)).collect();
            assert_eq!(of_color.len(), 25);
            let zeros = of_color.iter().filter(|c| c.face() == Face::Number(0)).count();
            assert_eq!(zeros, 1);
            for face in [Face::Number(4), Face::Skip, Face::Reverse, Face::DrawTwo] {
                assert_eq!(of_color.iter().filter(|c| c.face() == face).count(), 2);
            }
        }
        assert_eq!(deck.iter().filter(|c| c.face() == Face::Wild).count(), 4);
        assert_eq!(deck.iter().filter(|c| c.face() == Face::WildDrawFour).count(), 4);
    }

    #[test]
    fn shuffle_permutes_without_mutating_input() {
        let original = full_deck();
        let mut rng = StdRng::seed_from_u64(7);
        let shuffled = shuffle(&original, &mut rng);
        assert_eq!(original, full_deck());
        assert_ne!(shuffled, original);
        assert!(same_cards(&shuffled, &original));
    }

    #[test]
    fn create_deck_is_deterministic_under_a_seed() {
        let first = create_deck(&mut StdRng::seed_from_u64(42));
        let second = create_deck(&mut StdRng::seed_from_u64(42));
        assert_eq!(first, second);
    }

    #[test]
    fn same_cards_detects_substitutions() {
        let mut deck = full_deck();
        deck[0] = Card::wild();
        assert!(!same_cards(&deck, &full_deck()));
        assert!(!same_cards(&deck[1..], &full_deck()));
    }
}
