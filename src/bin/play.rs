use std::error::Error;
use std::io::{self, Write};
use std::process;
use std::time::Duration;

use clap::{Parser, ValueEnum};
use rand::SeedableRng;
use rand::rngs::StdRng;

use unobot::{
    Bot, Game, GameError, GreedyBot, HumanBot, RandomBot, Table, TableResult, config,
    derived_seed, render_summary, render_turn, telemetry,
};

const HUMAN_SEAT: usize = 0;

/// Opponent flavour for the scripted seats.
#[derive(Clone, Copy, Debug, ValueEnum)]
enum Opponent {
    Greedy,
    Random,
}

#[derive(Parser, Debug)]
#[command(name = "play", about = "Play UNO in the terminal against scripted opponents.")]
struct Args {
    /// Your name at the table
    #[arg(short = 'n', long = "name", default_value = "You")]
    name: String,

    /// Number of scripted opponents (1-9)
    #[arg(short = 'b', long = "bots", default_value_t = 3)]
    bots: usize,

    /// Opponent strategy
    #[arg(long = "opponent", value_enum, default_value = "greedy")]
    opponent: Opponent,

    /// Seed for shuffling and bot choices (falls back to UNO_SEED, then random)
    #[arg(short = 's', long = "seed")]
    seed: Option<u64>,

    /// Delay between bot turns in milliseconds (falls back to UNO_PACING_MS, then 450)
    #[arg(long = "pacing-ms")]
    pacing_ms: Option<u64>,
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
    let pacing = args
        .pacing_ms
        .map(Duration::from_millis)
        .unwrap_or_else(config::pacing);
    let mut seed = args
        .seed
        .or_else(config::seed)
        .unwrap_or_else(rand::random);
    let names = seat_names(&args.name, args.bots);

    loop {
        let game = Game::builder(names.iter().cloned())?.with_seed(seed).build()?;
        let mut seats: Vec<Box<dyn Bot>> = Vec::with_capacity(names.len());
        seats.push(Box::new(HumanBot::stdio(args.name.clone())));
        for index in 1..names.len() {
            let rng = StdRng::seed_from_u64(derived_seed(seed, index));
            let bot: Box<dyn Bot> = match args.opponent {
                Opponent::Greedy => Box::new(GreedyBot::new(rng)),
                Opponent::Random => Box::new(RandomBot::new(rng)),
            };
            seats.push(bot);
        }

        println!("New game with {} players (seed {seed}).", names.len());
        let mut table = Table::new(game, seats)?.with_pacing(pacing);
        let result = table
            .run(|game, report| {
                if let Ok(view) = game.state_view(Some(HUMAN_SEAT)) {
                    println!("{}", render_turn(&view, report.seat, &report.outcome));
                }
            })
            .await;

        match result {
            Ok(TableResult::Won { .. }) => {
                if let Some(summary) = table.game().summary() {
                    println!("\n{}", render_summary(&summary));
                }
            }
            Ok(TableResult::TurnLimit { turns }) => println!("Stopped after {turns} turns."),
            Err(GameError::Aborted) => {
                println!("Goodbye.");
                return Ok(());
            }
            Err(err) => return Err(err.into()),
        }
        drop(table);

        if !ask_replay()? {
            return Ok(());
        }
        seed = seed.wrapping_add(1);
    }
}

fn seat_names(human: &str, bots: usize) -> Vec<String> {
    let mut names = vec![human.to_string()];
    names.extend((0..bots).map(|i| format!("Bot {}", (b'A' + (i % 26) as u8) as char)));
    names
}

fn ask_replay() -> Result<bool, Box<dyn Error>> {
    print!("Play again? [y/N]: ");
    io::stdout().flush()?;
    let mut line = String::new();
    if io::stdin().read_line(&mut line)? == 0 {
        return Ok(false);
    }
    Ok(line.trim().eq_ignore_ascii_case("y"))
}
