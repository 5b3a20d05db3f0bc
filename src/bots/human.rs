use std::io::{self, BufRead, StdinLock, Stdout, Write};

use crate::action::{PlayerId, TurnOutcome};
use crate::bot::Bot;
use crate::card::Color;
use crate::error::GameError;
use crate::game::Game;
use crate::visualize::render_state;

/// A parsed line of human input.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Play { index: usize, color: Option<Color> },
    Draw,
    Help,
    Quit,
    Invalid(String),
}

/// Accepts `<index> [color]`, `d`/`draw`, `help` and `q`/`quit`.
pub fn parse_command(line: &str) -> Command {
    let mut words = line.split_whitespace();
    let Some(head) = words.next() else {
        return Command::Invalid(String::new());
    };
    match head.to_ascii_lowercase().as_str() {
        "d" | "draw" => Command::Draw,
        "h" | "help" | "?" => Command::Help,
        "q" | "quit" => Command::Quit,
        other => {
            let Ok(index) = other.parse::<usize>() else {
                return Command::Invalid(line.trim().to_string());
            };
            match words.next() {
                None => Command::Play { index, color: None },
                Some(word) => match Color::parse(word) {
                    Some(color) => Command::Play {
                        index,
                        color: Some(color),
                    },
                    None => Command::Invalid(line.trim().to_string()),
                },
            }
        }
    }
}

/// Interactive seat that reads choices from `input` and reports to `output`.
///
/// Rejected plays are shown to the player, who simply tries again.
pub struct HumanBot<I, O> {
    name: String,
    input: I,
    output: O,
}

impl HumanBot<StdinLock<'static>, Stdout> {
    pub fn stdio(name: impl Into<String>) -> Self {
        Self::with_io(name, io::stdin().lock(), io::stdout())
    }
}

impl<I: BufRead, O: Write> HumanBot<I, O> {
    pub fn with_io(name: impl Into<String>, input: I, output: O) -> Self {
        Self {
            name: name.into(),
            input,
            output,
        }
    }

    pub fn output(&self) -> &O {
        &self.output
    }

    fn say(&mut self, text: impl AsRef<str>) {
        let _ = writeln!(self.output, "{}", text.as_ref());
    }

    /// End of input means the player has left.
    fn prompt(&mut self, text: &str) -> Result<String, GameError> {
        let _ = write!(self.output, "{text}");
        let _ = self.output.flush();
        let mut line = String::new();
        match self.input.read_line(&mut line) {
            Ok(0) | Err(_) => Err(GameError::Aborted),
            Ok(_) => Ok(line.trim().to_string()),
        }
    }

    fn ask_color(&mut self) -> Result<Color, GameError> {
        loop {
            let answer = self.prompt("Choose a color (red, yellow, green, blue): ")?;
            match Color::parse(&answer) {
                Some(color) => return Ok(color),
                None => self.say(format!("'{answer}' is not a color.")),
            }
        }
    }

    fn draw(&mut self, game: &mut Game, seat: PlayerId) -> Result<TurnOutcome, GameError> {
        let paying = game.must_draw() > 0;
        let drawn = game.draw(seat)?;
        let listed = drawn
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", ");
        self.say(format!("You drew {} card(s): {listed}", drawn.len()));
        if paying {
            return Ok(TurnOutcome::PaidPenalty { drawn: drawn.len() });
        }
        if let [card] = drawn.as_slice() {
            if !card.is_wild() && game.is_playable(card) {
                let answer = self.prompt(&format!("Play {card} now? [y/N]: "))?;
                if answer.eq_ignore_ascii_case("y") || answer.eq_ignore_ascii_case("yes") {
                    let index = game.hand(seat)?.len() - 1;
                    let outcome = game.play(seat, index, None)?;
                    return Ok(TurnOutcome::from_play(outcome, 1));
                }
            }
        }
        Ok(TurnOutcome::DrewAndPassed { drawn: drawn.len() })
    }
}

impl<I: BufRead, O: Write> Bot for HumanBot<I, O> {
    fn take_turn(&mut self, game: &mut Game, seat: PlayerId) -> Result<TurnOutcome, GameError> {
        let view = game.state_view(Some(seat))?;
        self.say(format!("\n=== {}'s turn (player {seat}) ===", self.name));
        self.say(render_state(&view));
        loop {
            let line =
                self.prompt("Card index [color], 'd' to draw, 'help' or 'q' to quit: ")?;
            match parse_command(&line) {
                Command::Quit => {
                    self.say("Leaving the table.");
                    return Err(GameError::Aborted);
                }
                Command::Help => {
                    self.say("Type the number shown next to a card to play it (e.g. '3').");
                    self.say("Wild cards take a color: '5 blue', or you will be asked.");
                    self.say("Type 'd' to draw; with a penalty pending you draw all of it.");
                }
                Command::Draw => return self.draw(game, seat),
                Command::Play { index, color } => {
                    let needs_color = game
                        .hand(seat)?
                        .get(index)
                        .is_some_and(|card| card.is_wild());
                    let color = match color {
                        None if needs_color => Some(self.ask_color()?),
                        other => other,
                    };
                    match game.play(seat, index, color) {
                        Ok(outcome) => return Ok(TurnOutcome::from_play(outcome, 0)),
                        Err(err) => self.say(format!("Cannot play that: {err}")),
                    }
                }
                Command::Invalid(text) => {
                    self.say(format!("Invalid input: '{text}'. Type 'help' for options."));
                }
            }
        }
    }

    fn is_human(&self) -> bool {
        true
    }
}
