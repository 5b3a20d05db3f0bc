use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{debug, info, warn};

use crate::action::{PlayOutcome, PlayerId};
use crate::card::{Card, Color, DECK_SIZE, Face, HAND_SIZE, MAX_PLAYERS, MIN_PLAYERS};
use crate::deck;
use crate::error::{GameError, InvalidAction};
use crate::state::{Direction, GameStateView, GameStatus, GameSummary, PlayerPublicState};

const DEFAULT_SEED: u64 = 0x5EED_CA4D_5EED_CA4D;

/// Configuration required to bootstrap a game instance.
#[derive(Clone, Debug)]
pub struct GameConfig {
    pub names: Vec<String>,
    pub seed: u64,
}

impl GameConfig {
    pub fn new<I, S>(names: I, seed: u64) -> Result<Self, GameError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let names: Vec<String> = names.into_iter().map(Into::into).collect();
        if !(MIN_PLAYERS..=MAX_PLAYERS).contains(&names.len()) {
            return Err(GameError::InvalidPlayerCount(names.len()));
        }
        Ok(Self { names, seed })
    }
}

/// Builder that enables deterministic deck injection for tests and simulations.
pub struct GameBuilder {
    config: GameConfig,
    deck: Option<Vec<Card>>,
}

impl GameBuilder {
    pub fn new<I, S>(names: I) -> Result<Self, GameError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Ok(Self {
            config: GameConfig::new(names, DEFAULT_SEED)?,
            deck: None,
        })
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.config.seed = seed;
        self
    }

    /// Use `deck` instead of a shuffled one. Cards are drawn from the end, so the last
    /// cards are dealt first. The deck must be exactly one full card set.
    pub fn with_deck(mut self, deck: Vec<Card>) -> Self {
        self.deck = Some(deck);
        self
    }

    pub fn build(self) -> Result<Game, GameError> {
        Game::from_builder(self)
    }
}

/// Core game engine: owns every card and enforces the rules.
pub struct Game {
    status: GameStatus,
    players: Vec<Player>,
    direction: Direction,
    turn: PlayerId,
    top_color: Color,
    top_face: Face,
    deck: Vec<Card>,
    discard: Vec<Card>,
    must_draw: u32,
    rng: StdRng,
}

impl Game {
    pub fn builder<I, S>(names: I) -> Result<GameBuilder, GameError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        GameBuilder::new(names)
    }

    pub fn new(config: GameConfig) -> Result<Self, GameError> {
        GameBuilder { config, deck: None }.build()
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn is_finished(&self) -> bool {
        matches!(self.status, GameStatus::Finished { .. })
    }

    pub fn winner(&self) -> Option<PlayerId> {
        match self.status {
            GameStatus::Finished { winner } => Some(winner),
            GameStatus::Ongoing => None,
        }
    }

    pub fn current_player(&self) -> PlayerId {
        self.turn
    }

    pub fn player_count(&self) -> usize {
        self.players.len()
    }

    pub fn player_name(&self, seat: PlayerId) -> Option<&str> {
        self.players.get(seat).map(|p| p.name.as_str())
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn must_draw(&self) -> u32 {
        self.must_draw
    }

    pub fn top_color(&self) -> Color {
        self.top_color
    }

    pub fn top_face(&self) -> Face {
        self.top_face
    }

    pub fn top_card(&self) -> Option<Card> {
        self.discard.last().copied()
    }

    pub fn deck_len(&self) -> usize {
        self.deck.len()
    }

    pub fn discard_len(&self) -> usize {
        self.discard.len()
    }

    pub fn hand(&self, seat: PlayerId) -> Result<&[Card], GameError> {
        self.players
            .get(seat)
            .map(|p| p.hand.as_slice())
            .ok_or(GameError::InvalidPlayer(seat))
    }

    /// Wilds are always legal; anything else must match the active color or value.
    pub fn is_playable(&self, card: &Card) -> bool {
        card.is_wild() || card.color() == Some(self.top_color) || card.face() == self.top_face
    }

    pub fn playable_cards(&self, seat: PlayerId) -> Result<Vec<Card>, GameError> {
        Ok(self
            .hand(seat)?
            .iter()
            .filter(|card| self.is_playable(card))
            .copied()
            .collect())
    }

    pub fn playable_indices(&self, seat: PlayerId) -> Result<Vec<usize>, GameError> {
        Ok(self
            .hand(seat)?
            .iter()
            .enumerate()
            .filter(|(_, card)| self.is_playable(card))
            .map(|(index, _)| index)
            .collect())
    }

    /// Draws `max(1, must_draw)` cards into the seat's hand and clears the penalty.
    ///
    /// The turn does not advance; call [`Game::pass`] (or play the drawn card) afterwards.
    pub fn draw(&mut self, seat: PlayerId) -> Result<Vec<Card>, GameError> {
        self.ensure_turn(seat)?;
        let count = self.must_draw.max(1) as usize;
        let mut drawn = Vec::with_capacity(count);
        for _ in 0..count {
            match self.draw_card() {
                Some(card) => drawn.push(card),
                None => {
                    warn!(seat, wanted = count, got = drawn.len(), "no cards left to draw");
                    break;
                }
            }
        }
        self.must_draw = 0;
        self.players[seat].hand.extend_from_slice(&drawn);
        debug!(seat, count = drawn.len(), "drew");
        Ok(drawn)
    }

    /// Plays the card at `hand_index`. `chosen` is required for wild cards and ignored otherwise.
    pub fn play(
        &mut self,
        seat: PlayerId,
        hand_index: usize,
        chosen: Option<Color>,
    ) -> Result<PlayOutcome, GameError> {
        self.ensure_turn(seat)?;
        let card = *self.players[seat]
            .hand
            .get(hand_index)
            .ok_or(InvalidAction::InvalidCard(hand_index))?;
        if self.must_draw > 0 && !card.is_stacking() {
            return Err(InvalidAction::PenaltyPending(self.must_draw).into());
        }
        if !self.is_playable(&card) {
            return Err(InvalidAction::NotPlayable(card).into());
        }
        let card = match (card.is_wild(), chosen) {
            (true, Some(color)) => card.with_color(color),
            (true, None) => return Err(InvalidAction::ColorRequired.into()),
            (false, _) => card,
        };

        self.players[seat].hand.remove(hand_index);
        self.discard.push(card);
        self.set_active_from_top();

        match card.face() {
            Face::Reverse => {
                self.direction = self.direction.reversed();
                // Heads-up, a reverse hands the turn straight back like a skip.
                let steps = if self.players.len() == 2 { 2 } else { 1 };
                self.advance_turn_by(steps);
            }
            Face::Skip => self.advance_turn_by(2),
            Face::DrawTwo | Face::WildDrawFour => {
                self.must_draw += card.penalty();
                self.advance_turn();
            }
            Face::Number(_) | Face::Wild => self.advance_turn(),
        }
        debug!(seat, %card, next = self.turn, must_draw = self.must_draw, "played");

        let winner = self.players[seat].hand.is_empty().then_some(seat);
        if let Some(winner) = winner {
            if !self.is_finished() {
                info!(winner, name = %self.players[winner].name, "game won");
                self.status = GameStatus::Finished { winner };
            }
        }
        Ok(PlayOutcome { card, winner })
    }

    /// Hands the turn on after a draw.
    pub fn pass(&mut self, seat: PlayerId) -> Result<(), GameError> {
        self.ensure_turn(seat)?;
        self.advance_turn();
        Ok(())
    }

    pub fn advance_turn(&mut self) {
        self.advance_turn_by(1);
    }

    /// Moves the turn `steps` seats in the current direction, wrapping around the table.
    pub fn advance_turn_by(&mut self, steps: usize) {
        let seats = self.players.len() as isize;
        let offset = steps as isize * self.direction.step();
        self.turn = (self.turn as isize + offset).rem_euclid(seats) as usize;
    }

    /// Read-only snapshot. Only the `perspective` seat's hand is included.
    pub fn state_view(&self, perspective: Option<PlayerId>) -> Result<GameStateView, GameError> {
        let (hand, playable) = match perspective {
            Some(seat) => (Some(self.hand(seat)?.to_vec()), self.playable_indices(seat)?),
            None => (None, Vec::new()),
        };
        let players = self
            .players
            .iter()
            .enumerate()
            .map(|(idx, player)| PlayerPublicState {
                id: idx,
                name: player.name.clone(),
                hand_count: player.hand.len(),
                is_current: idx == self.turn,
            })
            .collect();

        Ok(GameStateView {
            perspective,
            status: self.status,
            turn: self.turn,
            direction: self.direction,
            top: self.top_card(),
            top_color: self.top_color,
            top_face: self.top_face,
            must_draw: self.must_draw,
            deck_count: self.deck.len(),
            discard_count: self.discard.len(),
            players,
            hand,
            playable,
        })
    }

    /// Reveals every hand once the game is over.
    pub fn summary(&self) -> Option<GameSummary> {
        let winner = self.winner()?;
        Some(GameSummary {
            winner,
            hands: self
                .players
                .iter()
                .map(|p| (p.name.clone(), p.hand.clone()))
                .collect(),
            history: self.discard.clone(),
        })
    }

    fn from_builder(builder: GameBuilder) -> Result<Self, GameError> {
        let GameBuilder { config, deck } = builder;
        let mut rng = StdRng::seed_from_u64(config.seed);
        let deck = match deck {
            Some(deck) => {
                if deck.len() != DECK_SIZE || !deck::same_cards(&deck, &deck::full_deck()) {
                    return Err(GameError::InvalidConfiguration(
                        "deck must hold exactly one full, unplayed card set",
                    ));
                }
                deck
            }
            None => deck::create_deck(&mut rng),
        };

        let players = config.names.into_iter().map(Player::new).collect();
        let mut game = Game {
            status: GameStatus::Ongoing,
            players,
            direction: Direction::Clockwise,
            turn: 0,
            top_color: Color::Red,
            top_face: Face::Number(0),
            deck,
            discard: Vec::with_capacity(DECK_SIZE),
            must_draw: 0,
            rng,
        };

        game.deal()?;
        game.reveal_starting_card()?;
        debug!(
            players = game.players.len(),
            seed = config.seed,
            top = ?game.top_card(),
            turn = game.turn,
            "game started"
        );
        Ok(game)
    }

    fn deal(&mut self) -> Result<(), GameError> {
        for _ in 0..HAND_SIZE {
            for seat in 0..self.players.len() {
                let card = self.draw_card().ok_or(GameError::InvalidConfiguration(
                    "deck exhausted while dealing",
                ))?;
                self.players[seat].hand.push(card);
            }
        }
        Ok(())
    }

    fn reveal_starting_card(&mut self) -> Result<(), GameError> {
        let exhausted = GameError::InvalidConfiguration("deck exhausted before the first card");
        let mut first = self.draw_card().ok_or(exhausted.clone())?;
        while first.face() == Face::WildDrawFour {
            self.deck.push(first);
            self.deck = deck::shuffle(&self.deck, &mut self.rng);
            first = self.draw_card().ok_or(exhausted.clone())?;
        }
        if first.is_wild() {
            first = first.with_color(Color::random(&mut self.rng));
        }
        self.discard.push(first);
        self.set_active_from_top();

        match first.face() {
            Face::Reverse => self.direction = self.direction.reversed(),
            Face::Skip => self.advance_turn(),
            // The first actor faces the penalty before anyone has played.
            Face::DrawTwo => self.must_draw += first.penalty(),
            _ => {}
        }
        Ok(())
    }

    fn set_active_from_top(&mut self) {
        if let Some(top) = self.discard.last() {
            if let Some(color) = top.effective_color() {
                self.top_color = color;
            }
            self.top_face = top.face();
        }
    }

    fn draw_card(&mut self) -> Option<Card> {
        if self.deck.is_empty() {
            self.restock();
        }
        self.deck.pop()
    }

    /// Keeps the top discard and shuffles the rest back in as the new deck.
    fn restock(&mut self) {
        let Some(top) = self.discard.pop() else {
            return;
        };
        let recycled: Vec<Card> = self.discard.drain(..).map(Card::unplayed).collect();
        self.deck = deck::shuffle(&recycled, &mut self.rng);
        self.discard.push(top);
        debug!(cards = self.deck.len(), "reshuffled discard pile into deck");
    }

    fn ensure_turn(&self, seat: PlayerId) -> Result<(), GameError> {
        if seat >= self.players.len() {
            return Err(GameError::InvalidPlayer(seat));
        }
        if seat != self.turn {
            return Err(GameError::NotYourTurn {
                seat,
                turn: self.turn,
            });
        }
        Ok(())
    }
}

#[derive(Clone)]
struct Player {
    name: String,
    hand: Vec<Card>,
}

impl Player {
    fn new(name: String) -> Self {
        Self {
            name,
            hand: Vec::with_capacity(HAND_SIZE),
        }
    }
}
