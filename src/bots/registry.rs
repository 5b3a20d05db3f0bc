use std::error::Error;

use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::bot::Bot;
use crate::bots::{GreedyBot, HumanBot, RandomBot};

/// Returns a normalized label for a bot spec (the head token before any ':').
pub fn label_for_spec(spec: &str) -> String {
    spec.split(':')
        .next()
        .unwrap_or(spec)
        .trim()
        .to_ascii_lowercase()
}

/// Seed for the bot in seat `index` when the spec does not name one.
pub fn derived_seed(seed: u64, index: usize) -> u64 {
    seed ^ ((index as u64 + 1) * 0x9E37_79B9)
}

/// Create a bot instance from a CLI-style spec.
/// Supported specs:
/// - human[:name]
/// - greedy[:seed]
/// - random[:seed]
pub fn create_bot_from_spec(
    spec: &str,
    index: usize,
    seed: u64,
) -> Result<Box<dyn Bot>, Box<dyn Error>> {
    let custom_seed = spec
        .split_once(':')
        .and_then(|(_, value)| value.trim().parse::<u64>().ok())
        .unwrap_or_else(|| derived_seed(seed, index));
    match label_for_spec(spec).as_str() {
        "human" => {
            let name = spec
                .split_once(':')
                .map(|(_, name)| name.trim().to_string())
                .unwrap_or_else(|| format!("Human {index}"));
            Ok(Box::new(HumanBot::stdio(name)))
        }
        "greedy" => Ok(Box::new(GreedyBot::new(StdRng::seed_from_u64(custom_seed)))),
        "random" => Ok(Box::new(RandomBot::new(StdRng::seed_from_u64(custom_seed)))),
        _ => Err(format!("unrecognized bot spec: {spec}").into()),
    }
}
