use std::collections::HashMap;
use std::error::Error;
use std::process;
use std::time::Instant;

use clap::{ArgAction, Parser};

use unobot::{
    Bot, Game, Table, TableResult, create_bot_from_spec, describe_turn, label_for_spec,
    telemetry,
};

const DEFAULT_SEED: u64 = 0xDEC0_1DED_5EED_F00D;

#[derive(Parser, Debug)]
#[command(
    name = "simulate",
    about = "Run bot-only games and report per-seat win counts."
)]
struct Args {
    /// Number of games to simulate
    #[arg(short = 'g', long = "games", default_value_t = 100)]
    games: usize,

    /// Base RNG seed (deck and bot RNGs are derived deterministically)
    #[arg(short = 's', long = "seed", default_value_t = DEFAULT_SEED)]
    seed: u64,

    /// Safety cap on turns per game; capped games count as aborted
    #[arg(long = "max-turns", default_value_t = 5000)]
    max_turns: usize,

    /// Narrate every turn
    #[arg(long = "visualize", action = ArgAction::SetTrue)]
    visualize: bool,

    /// Player bot specs, e.g. greedy random:7 (2-10 total)
    bots: Vec<String>,
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    telemetry::init("warn");
    let args = Args::parse();
    if let Err(err) = run(args).await {
        eprintln!("Error: {err}");
        process::exit(1);
    }
}

async fn run(args: Args) -> Result<(), Box<dyn Error>> {
    let specs = if args.bots.is_empty() {
        vec![String::from("greedy"), String::from("random")]
    } else {
        args.bots.clone()
    };
    // Disallow human in batch sims; it would block waiting for input.
    if specs.iter().any(|s| label_for_spec(s) == "human") {
        return Err("human players are not supported in simulations".into());
    }
    let names: Vec<String> = specs
        .iter()
        .enumerate()
        .map(|(index, spec)| format!("{} #{index}", label_for_spec(spec)))
        .collect();

    let mut wins_per_seat = vec![0usize; specs.len()];
    let mut wins_per_label: HashMap<String, usize> = HashMap::new();
    let mut aborted_games = 0usize;
    let mut total_turns = 0usize;
    let started = Instant::now();

    for game_index in 0..args.games {
        let seed = args.seed.wrapping_add(game_index as u64);
        let game = Game::builder(names.iter().cloned())?.with_seed(seed).build()?;
        let mut seats: Vec<Box<dyn Bot>> = Vec::with_capacity(specs.len());
        for (index, spec) in specs.iter().enumerate() {
            seats.push(create_bot_from_spec(spec, index, seed)?);
        }
        let mut table = Table::new(game, seats)?.with_max_turns(args.max_turns);
        let visualize = args.visualize;
        let result = table
            .run(|game, report| {
                if visualize {
                    if let Ok(view) = game.state_view(None) {
                        println!("{}", describe_turn(&view, report.seat, &report.outcome));
                    }
                }
            })
            .await?;

        match result {
            TableResult::Won { winner, turns } => {
                wins_per_seat[winner] += 1;
                *wins_per_label
                    .entry(label_for_spec(&specs[winner]))
                    .or_default() += 1;
                total_turns += turns;
                if visualize {
                    println!("Game {game_index}: {} wins after {turns} turns.\n", names[winner]);
                }
            }
            TableResult::TurnLimit { turns } => {
                aborted_games += 1;
                total_turns += turns;
            }
        }
    }

    let elapsed = started.elapsed();
    let finished = args.games - aborted_games;
    println!(
        "Simulated {} games in {:.2?} ({} aborted).",
        args.games, elapsed, aborted_games
    );
    if args.games > 0 {
        println!(
            "Average turns per game: {:.1}",
            total_turns as f64 / args.games as f64
        );
    }
    println!("Wins per seat:");
    for (seat, wins) in wins_per_seat.iter().enumerate() {
        let rate = if finished > 0 {
            100.0 * *wins as f64 / finished as f64
        } else {
            0.0
        };
        println!("  {:<14} {wins:>6}  ({rate:.1}%)", names[seat]);
    }
    let mut labels: Vec<_> = wins_per_label.into_iter().collect();
    labels.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    println!("Wins per strategy:");
    for (label, wins) in labels {
        println!("  {label:<14} {wins:>6}");
    }
    Ok(())
}
