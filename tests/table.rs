mod common;

use std::io::Cursor;
use std::time::Duration;

use rand::SeedableRng;
use rand::rngs::StdRng;

use common::{card_total, names, numbers, stacked_game};
use unobot::card::DECK_SIZE;
use unobot::{
    Bot, Card, Color, Game, GameBuilder, GameError, GreedyBot, HumanBot, InvalidAction,
    PlayerId, RandomBot, Table, TableResult, TurnOutcome, TurnReport,
};

fn greedy_seats(count: usize, seed: u64) -> Vec<Box<dyn Bot>> {
    (0..count)
        .map(|i| {
            Box::new(GreedyBot::new(StdRng::seed_from_u64(seed + i as u64))) as Box<dyn Bot>
        })
        .collect()
}

async fn play_out(seed: u64, pacing: Duration) -> Result<(TableResult, Vec<TurnReport>), GameError> {
    let game = GameBuilder::new(names(4))?.with_seed(seed).build()?;
    let mut table = Table::new(game, greedy_seats(4, seed))?
        .with_pacing(pacing)
        .with_max_turns(5_000);
    let mut reports = Vec::new();
    let result = table
        .run(|game, report| {
            assert_eq!(card_total(game), DECK_SIZE);
            reports.push(report.clone());
        })
        .await?;
    Ok((result, reports))
}

#[tokio::test]
async fn bots_play_a_game_to_completion() -> Result<(), GameError> {
    let (result, reports) = play_out(2024, Duration::ZERO).await?;
    match result {
        TableResult::Won { winner, turns } => {
            assert_eq!(turns, reports.len());
            let last = reports.last().expect("at least one turn");
            assert_eq!(last.seat, winner);
            assert_eq!(last.outcome.winner(), Some(winner));
        }
        TableResult::TurnLimit { turns } => assert_eq!(turns, 5_000),
    }
    for report in &reports {
        if report.penalty_before > 0 {
            if let TurnOutcome::Played { card, .. } = report.outcome {
                assert!(card.is_stacking(), "{card} played over a pending penalty");
            }
        }
    }
    Ok(())
}

#[tokio::test(start_paused = true)]
async fn pacing_does_not_change_the_outcome() -> Result<(), GameError> {
    let instant = play_out(77, Duration::ZERO).await?;
    let paced = play_out(77, Duration::from_millis(450)).await?;
    assert_eq!(instant, paced);
    Ok(())
}

#[test]
fn table_needs_one_seat_per_player() -> Result<(), GameError> {
    let game = GameBuilder::new(names(3))?.build()?;
    assert!(matches!(
        Table::new(game, greedy_seats(2, 1)),
        Err(GameError::InvalidConfiguration(_))
    ));
    Ok(())
}

/// Tries an illegal card once, then defers to a greedy bot.
struct ClumsyBot {
    fumbled: bool,
    inner: GreedyBot<StdRng>,
}

impl Bot for ClumsyBot {
    fn take_turn(&mut self, game: &mut Game, seat: PlayerId) -> Result<TurnOutcome, GameError> {
        if !self.fumbled {
            self.fumbled = true;
            game.play(seat, 99, None)?;
        }
        self.inner.take_turn(game, seat)
    }
}

#[tokio::test]
async fn rejected_actions_are_retried_by_the_same_seat() -> Result<(), GameError> {
    let game = stacked_game(
        &[
            numbers(Color::Red, [1, 2, 3, 4, 5, 6, 7]),
            numbers(Color::Blue, [1, 2, 3, 4, 5, 6, 7]),
        ],
        Card::number(Color::Red, 9),
        &[],
    )?;
    let seats: Vec<Box<dyn Bot>> = vec![
        Box::new(ClumsyBot {
            fumbled: false,
            inner: GreedyBot::new(StdRng::seed_from_u64(1)),
        }),
        Box::new(RandomBot::new(StdRng::seed_from_u64(2))),
    ];
    let mut table = Table::new(game, seats)?;
    assert_eq!(
        table.step().unwrap_err(),
        GameError::InvalidAction(InvalidAction::InvalidCard(99))
    );
    assert_eq!(table.game().current_player(), 0);

    let report = table.step()?.expect("game is running");
    assert_eq!(report.seat, 0);
    assert_eq!(report.next, 1);
    Ok(())
}

#[tokio::test]
async fn draw_outcomes_are_passed_on_by_the_table() -> Result<(), GameError> {
    let game = stacked_game(
        &[
            numbers(Color::Yellow, [1, 2, 4, 5, 6, 7, 8]),
            numbers(Color::Blue, [1, 2, 3, 4, 5, 6, 7]),
        ],
        Card::number(Color::Red, 3),
        &[Card::number(Color::Green, 9)],
    )?;
    let mut table = Table::new(game, greedy_seats(2, 5))?;
    let report = table.step()?.expect("game is running");
    assert_eq!(report.outcome, TurnOutcome::DrewAndPassed { drawn: 1 });
    assert_eq!(report.next, 1);
    assert_eq!(table.game().current_player(), 1);
    Ok(())
}

#[tokio::test]
async fn a_human_leaving_stops_the_table() -> Result<(), GameError> {
    let game = stacked_game(
        &[
            numbers(Color::Red, [1, 2, 3, 4, 5, 6, 7]),
            numbers(Color::Blue, [1, 2, 3, 4, 5, 6, 7]),
        ],
        Card::number(Color::Red, 9),
        &[],
    )?;
    let human = HumanBot::with_io("Ada", Cursor::new(b"q\n".to_vec()), Vec::new());
    let seats: Vec<Box<dyn Bot>> = vec![Box::new(human), greedy_seats(1, 3).remove(0)];
    let mut table = Table::new(game, seats)?.with_pacing(Duration::from_millis(1));
    assert_eq!(table.run(|_, _| {}).await.unwrap_err(), GameError::Aborted);
    Ok(())
}
