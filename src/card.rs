use std::fmt;

use rand::Rng;
use serde::{Deserialize, Serialize};

pub const MAX_NUMBER: u8 = 9;
pub const WILD_COPIES: usize = 4;
pub const DECK_SIZE: usize = 108;
pub const HAND_SIZE: usize = 7;
pub const MIN_PLAYERS: usize = 2;
pub const MAX_PLAYERS: usize = 10;

/// One of the four base colors. Wild cards have no printed color.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    Red,
    Yellow,
    Green,
    Blue,
}

impl Color {
    pub const ALL: [Color; 4] = [Color::Red, Color::Yellow, Color::Green, Color::Blue];

    pub fn name(self) -> &'static str {
        match self {
            Color::Red => "red",
            Color::Yellow => "yellow",
            Color::Green => "green",
            Color::Blue => "blue",
        }
    }

    /// Accepts full names or their first letter, case-insensitive.
    pub fn parse(input: &str) -> Option<Color> {
        let input = input.trim().to_ascii_lowercase();
        Color::ALL
            .into_iter()
            .find(|color| color.name() == input || color.name()[..1] == input)
    }

    /// Uniformly random base color.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Color {
        Color::ALL[rng.gen_range(0..Color::ALL.len())]
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Colored action cards.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum ActionKind {
    Skip,
    Reverse,
    DrawTwo,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum WildKind {
    Wild,
    WildDrawFour,
}

/// A single card. Only the wild variant can carry a color choice, and it does so
/// only once the card has been played.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum Card {
    Number { color: Color, value: u8 },
    Action { color: Color, kind: ActionKind },
    Wild { kind: WildKind, chosen: Option<Color> },
}

/// What a card shows regardless of color; matched against the active value.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum Face {
    Number(u8),
    Skip,
    Reverse,
    DrawTwo,
    Wild,
    WildDrawFour,
}

impl fmt::Display for Face {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Face::Number(value) => write!(f, "{value}"),
            Face::Skip => f.write_str("skip"),
            Face::Reverse => f.write_str("reverse"),
            Face::DrawTwo => f.write_str("+2"),
            Face::Wild => f.write_str("wild"),
            Face::WildDrawFour => f.write_str("wild +4"),
        }
    }
}

impl Card {
    pub fn number(color: Color, value: u8) -> Self {
        debug_assert!(value <= MAX_NUMBER);
        Card::Number { color, value }
    }

    pub fn skip(color: Color) -> Self {
        Card::Action {
            color,
            kind: ActionKind::Skip,
        }
    }

    pub fn reverse(color: Color) -> Self {
        Card::Action {
            color,
            kind: ActionKind::Reverse,
        }
    }

    pub fn draw_two(color: Color) -> Self {
        Card::Action {
            color,
            kind: ActionKind::DrawTwo,
        }
    }

    pub fn wild() -> Self {
        Card::Wild {
            kind: WildKind::Wild,
            chosen: None,
        }
    }

    pub fn wild_draw_four() -> Self {
        Card::Wild {
            kind: WildKind::WildDrawFour,
            chosen: None,
        }
    }

    /// Printed color; `None` for wild cards.
    #[inline]
    pub fn color(&self) -> Option<Color> {
        match self {
            Card::Number { color, .. } | Card::Action { color, .. } => Some(*color),
            Card::Wild { .. } => None,
        }
    }

    /// Printed color, or the chosen color of a played wild.
    #[inline]
    pub fn effective_color(&self) -> Option<Color> {
        match self {
            Card::Wild { chosen, .. } => *chosen,
            _ => self.color(),
        }
    }

    #[inline]
    pub fn face(&self) -> Face {
        match self {
            Card::Number { value, .. } => Face::Number(*value),
            Card::Action { kind, .. } => match kind {
                ActionKind::Skip => Face::Skip,
                ActionKind::Reverse => Face::Reverse,
                ActionKind::DrawTwo => Face::DrawTwo,
            },
            Card::Wild { kind, .. } => match kind {
                WildKind::Wild => Face::Wild,
                WildKind::WildDrawFour => Face::WildDrawFour,
            },
        }
    }

    #[inline]
    pub fn is_wild(&self) -> bool {
        matches!(self, Card::Wild { .. })
    }

    /// Cards that may answer a pending draw penalty.
    #[inline]
    pub fn is_stacking(&self) -> bool {
        matches!(self.face(), Face::DrawTwo | Face::WildDrawFour)
    }

    /// Cards the next player must draw when this card is played.
    pub fn penalty(&self) -> u32 {
        match self.face() {
            Face::DrawTwo => 2,
            Face::WildDrawFour => 4,
            _ => 0,
        }
    }

    /// Records the color choice on a wild. Other cards are returned unchanged.
    pub fn with_color(self, color: Color) -> Self {
        match self {
            Card::Wild { kind, .. } => Card::Wild {
                kind,
                chosen: Some(color),
            },
            other => other,
        }
    }

    /// Forgets any color choice, as when a played wild goes back into the deck.
    pub fn unplayed(self) -> Self {
        match self {
            Card::Wild { kind, .. } => Card::Wild { kind, chosen: None },
            other => other,
        }
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Card::Wild {
                chosen: Some(color),
                ..
            } => write!(f, "{} -> {color}", self.face()),
            Card::Wild { chosen: None, .. } => write!(f, "{}", self.face()),
            _ => match self.color() {
                Some(color) => write!(f, "{color} {}", self.face()),
                None => write!(f, "{}", self.face()),
            },
        }
    }
}
