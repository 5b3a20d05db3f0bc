mod common;

use proptest::prelude::*;
use rand::SeedableRng;
use rand::rngs::StdRng;

use common::{card_total, names};
use unobot::card::{DECK_SIZE, MAX_PLAYERS, MIN_PLAYERS};
use unobot::{Bot, GameBuilder, GreedyBot, RandomBot, Table, TurnOutcome};

fn mixed_seats(count: usize, seed: u64) -> Vec<Box<dyn Bot>> {
    (0..count)
        .map(|seat| {
            let rng = StdRng::seed_from_u64(seed.wrapping_add(seat as u64));
            if seat % 2 == 0 {
                Box::new(GreedyBot::new(rng)) as Box<dyn Bot>
            } else {
                Box::new(RandomBot::new(rng))
            }
        })
        .collect()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(48))]

    #[test]
    fn bot_games_keep_the_table_consistent(
        seed in any::<u64>(),
        players in MIN_PLAYERS..=MAX_PLAYERS,
    ) {
        let game = GameBuilder::new(names(players)).unwrap().with_seed(seed).build().unwrap();
        prop_assert_eq!(card_total(&game), DECK_SIZE);
        let mut table = Table::new(game, mixed_seats(players, seed)).unwrap();

        for _ in 0..300 {
            let Some(report) = table.step().unwrap() else { break };
            let game = table.game();

            prop_assert_eq!(card_total(game), DECK_SIZE);
            prop_assert!(report.next < players);
            if report.penalty_before > 0 {
                if let TurnOutcome::Played { card, .. } = report.outcome {
                    prop_assert!(card.is_stacking());
                }
            }
            let top = game.top_card().unwrap();
            if game.must_draw() > 0 {
                prop_assert!(top.is_stacking());
            }
            prop_assert!(top.effective_color().is_some());
            prop_assert_eq!(top.effective_color(), Some(game.top_color()));
            for seat in 0..players {
                for card in game.hand(seat).unwrap() {
                    prop_assert!(!card.is_wild() || card.effective_color().is_none());
                }
            }
            if let Some(winner) = game.winner() {
                prop_assert_eq!(winner, report.seat);
                prop_assert!(game.hand(winner).unwrap().is_empty());
                prop_assert!(game.summary().is_some());
            }
        }
    }

    #[test]
    fn same_seed_same_game(seed in any::<u64>(), players in MIN_PLAYERS..=4usize) {
        let replay = |seed: u64| {
            let game = GameBuilder::new(names(players)).unwrap().with_seed(seed).build().unwrap();
            let mut table = Table::new(game, mixed_seats(players, seed)).unwrap();
            let mut log = Vec::new();
            for _ in 0..120 {
                match table.step().unwrap() {
                    Some(report) => log.push(report),
                    None => break,
                }
            }
            log
        };
        prop_assert_eq!(replay(seed), replay(seed));
    }
}
