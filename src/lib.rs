//! UNO-style card game engine with scripted opponents and a terminal table.

pub mod action;
pub mod bot;
pub mod bots;
pub mod card;
pub mod config;
pub mod deck;
pub mod error;
pub mod game;
pub mod state;
pub mod table;
pub mod telemetry;
pub mod visualize;

pub use crate::action::{PlayOutcome, PlayerId, TurnOutcome};
pub use crate::bot::Bot;
pub use crate::bots::registry::{create_bot_from_spec, derived_seed, label_for_spec};
pub use crate::bots::{GreedyBot, HumanBot, RandomBot};
pub use crate::card::{Card, Color, Face};
pub use crate::error::{GameError, InvalidAction};
pub use crate::game::{Game, GameBuilder, GameConfig};
pub use crate::state::{Direction, GameStateView, GameStatus, GameSummary, PlayerPublicState};
pub use crate::table::{Table, TableResult, TurnReport};
pub use crate::visualize::{describe_turn, render_state, render_summary, render_turn};
