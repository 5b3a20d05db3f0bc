use std::fmt::Write;

use crate::action::{PlayerId, TurnOutcome};
use crate::card::{Card, Face};
use crate::state::{Direction, GameStateView, GameStatus, GameSummary};

/// Customize state rendering for terminal play.
#[derive(Clone, Copy, Debug)]
pub struct VisualOptions {
    pub show_counts: bool,
    pub mark_playable: bool,
}

impl Default for VisualOptions {
    fn default() -> Self {
        Self {
            show_counts: true,
            mark_playable: true,
        }
    }
}

pub fn render_state(state: &GameStateView) -> String {
    render_state_with_options(state, VisualOptions::default())
}

pub fn render_state_with_options(state: &GameStateView, options: VisualOptions) -> String {
    let mut out = String::new();
    if let GameStatus::Finished { winner } = state.status {
        let _ = writeln!(out, "Game over, winner: {}", seat_name(state, winner));
    }
    let top = state
        .top
        .map(|card| card.to_string())
        .unwrap_or_else(|| String::from("-"));
    let _ = writeln!(out, "Top card: {top}  |  Active color: {}", state.top_color);
    let arrow = match state.direction {
        Direction::Clockwise => "->",
        Direction::CounterClockwise => "<-",
    };
    let _ = write!(out, "Direction: {arrow}");
    if state.must_draw > 0 {
        let _ = write!(out, "  |  Pending penalty: draw {}", state.must_draw);
    }
    let _ = writeln!(out);
    if options.show_counts {
        let _ = writeln!(
            out,
            "Deck: {}  |  Discard: {}",
            state.deck_count, state.discard_count
        );
    }
    let _ = writeln!(out, "Players:");
    for player in &state.players {
        let marker = if player.is_current { ">" } else { " " };
        let you = if state.perspective == Some(player.id) {
            " (You)"
        } else {
            ""
        };
        let _ = writeln!(
            out,
            " {marker} [{}] {}{you}: {} card{}",
            player.id,
            player.name,
            player.hand_count,
            if player.hand_count == 1 { "" } else { "s" }
        );
    }
    if let Some(hand) = &state.hand {
        let _ = writeln!(out, "Your hand:");
        for (index, card) in hand.iter().enumerate() {
            let hint = if options.mark_playable && state.playable.contains(&index) {
                " *"
            } else {
                ""
            };
            let _ = writeln!(out, "  [{index}] {card}{hint}");
        }
    }
    out
}

/// One-line narration of a completed turn.
pub fn describe_turn(state: &GameStateView, seat: PlayerId, outcome: &TurnOutcome) -> String {
    let name = seat_name(state, seat);
    match outcome {
        TurnOutcome::Played { card, drawn, winner } => {
            let mut line = if *drawn > 0 {
                format!("{name} drew and played {card}")
            } else {
                format!("{name} played {card}")
            };
            if let Some(effect) = effect_note(card) {
                let _ = write!(line, " ({effect})");
            }
            if winner.is_some() {
                let _ = write!(line, " and wins!");
            }
            line
        }
        TurnOutcome::DrewAndPassed { drawn } => {
            format!("{name} drew {}, turn passes", plural_cards(*drawn))
        }
        TurnOutcome::PaidPenalty { drawn } => {
            format!("Penalty for {name}: {} drawn", plural_cards(*drawn))
        }
    }
}

/// Narration of a completed turn followed by the table as `state` sees it.
pub fn render_turn(state: &GameStateView, seat: PlayerId, outcome: &TurnOutcome) -> String {
    format!("{}\n{}", describe_turn(state, seat, outcome), render_state(state))
}

pub fn render_summary(summary: &GameSummary) -> String {
    let mut out = String::new();
    let winner = summary
        .hands
        .get(summary.winner)
        .map(|(name, _)| name.as_str())
        .unwrap_or("?");
    let _ = writeln!(out, "{winner} wins the round!");
    let _ = writeln!(out, "Remaining hands:");
    for (name, hand) in &summary.hands {
        let cards = if hand.is_empty() {
            String::from("no cards")
        } else {
            hand.iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(", ")
        };
        let _ = writeln!(out, "  {name} ({}): {cards}", hand.len());
    }
    let _ = writeln!(out, "Cards played:");
    for (index, card) in summary.history.iter().enumerate() {
        let _ = writeln!(out, "  {}. {card}", index + 1);
    }
    out
}

fn effect_note(card: &Card) -> Option<&'static str> {
    match card.face() {
        Face::Reverse => Some("direction reversed"),
        Face::Skip => Some("next player skipped"),
        Face::DrawTwo => Some("next player draws 2"),
        Face::WildDrawFour => Some("next player draws 4"),
        Face::Number(_) | Face::Wild => None,
    }
}

fn plural_cards(count: usize) -> String {
    if count == 1 {
        String::from("1 card")
    } else {
        format!("{count} cards")
    }
}

fn seat_name(state: &GameStateView, seat: PlayerId) -> String {
    state
        .players
        .get(seat)
        .map(|p| p.name.clone())
        .unwrap_or_else(|| format!("Player {seat}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::Color;
    use crate::state::PlayerPublicState;

    fn view() -> GameStateView {
        GameStateView {
            perspective: Some(0),
            status: GameStatus::Ongoing,
            turn: 0,
            direction: Direction::CounterClockwise,
            top: Some(Card::number(Color::Red, 4)),
            top_color: Color::Red,
            top_face: Face::Number(4),
            must_draw: 2,
            deck_count: 80,
            discard_count: 1,
            players: vec![
                PlayerPublicState {
                    id: 0,
                    name: "You".into(),
                    hand_count: 2,
                    is_current: true,
                },
                PlayerPublicState {
                    id: 1,
                    name: "Bot A".into(),
                    hand_count: 1,
                    is_current: false,
                },
            ],
            hand: Some(vec![Card::number(Color::Red, 9), Card::draw_two(Color::Blue)]),
            playable: vec![0],
        }
    }

    #[test]
    fn renders_hand_with_hints_and_penalty() {
        let text = render_state(&view());
        assert!(text.contains("Pending penalty: draw 2"));
        assert!(text.contains("[0] red 9 *"));
        assert!(text.contains("[1] blue +2\n"));
        assert!(text.contains("Bot A: 1 card\n"));
        assert!(text.contains("Direction: <-"));
    }

    #[test]
    fn narrates_turns() {
        let state = view();
        let played = TurnOutcome::Played {
            card: Card::skip(Color::Red),
            drawn: 0,
            winner: None,
        };
        assert_eq!(
            describe_turn(&state, 1, &played),
            "Bot A played red skip (next player skipped)"
        );
        assert_eq!(
            describe_turn(&state, 0, &TurnOutcome::PaidPenalty { drawn: 2 }),
            "Penalty for You: 2 cards drawn"
        );
        assert_eq!(
            describe_turn(&state, 1, &TurnOutcome::DrewAndPassed { drawn: 1 }),
            "Bot A drew 1 card, turn passes"
        );
    }

    #[test]
    fn turn_report_shows_the_viewer_hand() {
        let text = render_turn(&view(), 1, &TurnOutcome::DrewAndPassed { drawn: 1 });
        assert!(text.starts_with("Bot A drew 1 card, turn passes\nTop card: red 4"));
        assert!(text.contains("Your hand:\n  [0] red 9 *"));
    }
}
