//! Turn resolution.
//!
//! `State` owns everything that changes during a game and enforces the rules
//! for the three player actions (rotate, place, declare winners).
//!
//! ## Placement
//!
//! A successful placement runs, in order:
//! 1. token propagation until no token moves
//! 2. scoring (scored variants only)
//! 3. eliminations and win resolution
//! 4. drawing, including the dragon rule
//! 5. turn advancement
//!
//! Every check happens before the first mutation, so a rejected action
//! leaves the state untouched.

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use super::variant::Resolution;
use crate::board::{Board, Token, BORDER_CELLS, COLUMNS, ROWS};
use crate::core::{Action, ConfigError, GameError, GameRng, TeamId, TeamMap, Variant};
use crate::deck::{Deck, Hand, HAND_SIZE};
use crate::tiles::{Notch, Path, Tile, TILE_COUNT};

/// Upper bound on propagation passes: every token move claims one of at most
/// eight notches on one of the cells.
const MAX_PASSES: usize = ROWS * COLUMNS * 8 + 1;

/// Result of a completed game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameResult {
    /// Single winner.
    Winner(TeamId),
    /// Shared victory.
    Winners(Vec<TeamId>),
    /// Solo: the board was filled with every token alive.
    SoloSuccess,
    /// Solo: a token was lost. Carries the teams left standing.
    SoloFailure(Vec<TeamId>),
}

impl GameResult {
    /// Check if a team won.
    #[must_use]
    pub fn is_winner(&self, team: TeamId) -> bool {
        match self {
            GameResult::Winner(t) => *t == team,
            GameResult::Winners(ts) => ts.contains(&team),
            GameResult::SoloSuccess => true,
            GameResult::SoloFailure(_) => false,
        }
    }
}

/// Direction of a hand rotation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Rotation {
    Left,
    Right,
}

/// Tile storage for the teams: one hand each, or one for everybody.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Hands {
    PerTeam(TeamMap<Hand>),
    Shared(Hand),
}

impl Hands {
    #[must_use]
    pub fn of(&self, team: TeamId) -> &Hand {
        match self {
            Hands::PerTeam(hands) => &hands[team],
            Hands::Shared(hand) => hand,
        }
    }

    pub fn of_mut(&mut self, team: TeamId) -> &mut Hand {
        match self {
            Hands::PerTeam(hands) => &mut hands[team],
            Hands::Shared(hand) => hand,
        }
    }

    /// Tiles held across all hands.
    #[must_use]
    pub fn tile_count(&self) -> usize {
        match self {
            Hands::PerTeam(hands) => hands.iter().map(|(_, h)| h.len()).sum(),
            Hands::Shared(hand) => hand.len(),
        }
    }
}

/// An action a team may submit right now.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LegalAction {
    pub team: String,
    pub action: Action,
}

/// Complete state of one game.
#[derive(Clone, Debug)]
pub struct State {
    // === Configuration ===
    names: Vec<String>,
    variant: Variant,

    // === Progression ===
    /// Team to move; `None` once the game is over.
    turn: Option<TeamId>,
    /// Teams not yet eliminated.
    alive: TeamMap<bool>,
    /// Alive teams whose token has entered the board.
    active: TeamMap<bool>,
    /// First team to draw when tiles come back to an exhausted pile.
    dragon: Option<TeamId>,
    /// Non-empty marks the end of the game.
    winners: Vec<TeamId>,
    points: TeamMap<u32>,

    // === Pieces ===
    board: Board,
    deck: Deck,
    hands: Hands,
    tokens: TeamMap<Token>,

    rng: GameRng,
}

impl State {
    /// Deal a fresh game: shuffled deck, a full hand per team, random start
    /// positions and a random first team.
    pub fn new(names: Vec<String>, variant: Variant, seed: u64) -> Result<Self, ConfigError> {
        let team_count = names.len();
        let mut rng = GameRng::new(seed);
        let mut deck = Deck::new(&mut rng);

        let mut hands = if variant.shares_hand() {
            Hands::Shared(Hand::new())
        } else {
            Hands::PerTeam(TeamMap::with_default(team_count))
        };
        let mut starts: Vec<Token> = Vec::with_capacity(team_count);
        for team in TeamId::all(team_count) {
            let hand = hands.of_mut(team);
            while hand.is_short() {
                match deck.draw() {
                    Ok(tile) => hand.add(tile),
                    Err(_) => break,
                }
            }
            let token = Token::random_start(&mut rng, &starts).ok_or(ConfigError::TooManyTeams {
                max: BORDER_CELLS,
                got: team_count,
            })?;
            starts.push(token);
        }
        let tokens = TeamMap::new(team_count, |team| starts[team.index()]);
        let turn = TeamId::new(rng.gen_range_usize(0..team_count) as u8);

        debug!(seed, %variant, teams = team_count, first = %turn, "dealt new game");

        Ok(Self {
            names,
            variant,
            turn: Some(turn),
            alive: TeamMap::with_value(team_count, true),
            active: TeamMap::with_value(team_count, false),
            dragon: None,
            winners: Vec::new(),
            points: TeamMap::with_value(team_count, 0),
            board: Board::new(),
            deck,
            hands,
            tokens,
            rng,
        })
    }

    // === Queries ===

    #[must_use]
    pub fn variant(&self) -> Variant {
        self.variant
    }

    #[must_use]
    pub fn team_count(&self) -> usize {
        self.names.len()
    }

    pub fn team_ids(&self) -> impl Iterator<Item = TeamId> {
        TeamId::all(self.names.len())
    }

    #[must_use]
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Name of a team, or `None` for an id this game does not have.
    #[must_use]
    pub fn name(&self, team: TeamId) -> Option<&str> {
        self.names.get(team.index()).map(String::as_str)
    }

    pub(crate) fn team_name(&self, team: TeamId) -> &str {
        &self.names[team.index()]
    }

    fn knows(&self, team: TeamId) -> bool {
        team.index() < self.team_count()
    }

    /// Resolve a team name.
    pub fn team_id(&self, name: &str) -> Result<TeamId, GameError> {
        self.names
            .iter()
            .position(|n| n == name)
            .map(|i| TeamId::new(i as u8))
            .ok_or_else(|| GameError::UnknownTeam(name.to_string()))
    }

    #[must_use]
    pub fn turn(&self) -> Option<TeamId> {
        self.turn
    }

    #[must_use]
    pub fn dragon(&self) -> Option<TeamId> {
        self.dragon
    }

    #[must_use]
    pub fn winners(&self) -> &[TeamId] {
        &self.winners
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        !self.winners.is_empty()
    }

    #[must_use]
    pub fn is_alive(&self, team: TeamId) -> bool {
        self.knows(team) && self.alive[team]
    }

    #[must_use]
    pub fn is_active(&self, team: TeamId) -> bool {
        self.knows(team) && self.active[team]
    }

    pub fn alive_teams(&self) -> impl Iterator<Item = TeamId> + '_ {
        self.team_ids().filter(|&t| self.alive[t])
    }

    #[must_use]
    pub fn points(&self) -> &TeamMap<u32> {
        &self.points
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    #[must_use]
    pub fn hands(&self) -> &Hands {
        &self.hands
    }

    #[must_use]
    pub fn hand(&self, team: TeamId) -> Option<&Hand> {
        self.knows(team).then(|| self.hands.of(team))
    }

    #[must_use]
    pub fn token(&self, team: TeamId) -> Option<Token> {
        self.knows(team).then(|| self.tokens[team])
    }

    #[must_use]
    pub fn tokens(&self) -> &TeamMap<Token> {
        &self.tokens
    }

    /// Tiles in the deck, the hands and on the board.
    #[must_use]
    pub fn tile_total(&self) -> usize {
        self.deck.len() + self.hands.tile_count() + self.board.tile_count()
    }

    /// How the game ended, if it has.
    #[must_use]
    pub fn result(&self) -> Option<GameResult> {
        if self.winners.is_empty() {
            return None;
        }
        if self.variant == Variant::Solo {
            let survived = self.alive_teams().count() == self.team_count();
            return Some(if survived && self.board.is_full() {
                GameResult::SoloSuccess
            } else {
                GameResult::SoloFailure(self.winners.clone())
            });
        }
        Some(match self.winners.as_slice() {
            [only] => GameResult::Winner(*only),
            many => GameResult::Winners(many.to_vec()),
        })
    }

    /// Cell the team must place on next.
    pub fn target_cell(&self, team: TeamId) -> Result<(usize, usize), GameError> {
        if !self.knows(team) {
            return Err(GameError::UnknownTeam(team.to_string()));
        }
        let token = self.tokens[team];
        if self.active[team] {
            token.adjacent_cell()
        } else {
            Ok(token.cell())
        }
    }

    /// One-line summary of where the game stands.
    #[must_use]
    pub fn status_message(&self) -> String {
        match (self.result(), self.turn) {
            (Some(GameResult::SoloSuccess), _) => "every token survived the full board".to_string(),
            (Some(GameResult::SoloFailure(_)), _) => "the solo run failed".to_string(),
            (Some(GameResult::Winner(team)), _) => format!("{} wins", self.team_name(team)),
            (Some(GameResult::Winners(teams)), _) => {
                let names: Vec<&str> = teams.iter().map(|&t| self.team_name(t)).collect();
                format!("{} tie", names.join(", "))
            }
            (None, Some(team)) => format!("{}'s turn", self.team_name(team)),
            (None, None) => String::new(),
        }
    }

    // === Actions ===

    fn ensure_in_progress(&self) -> Result<(), GameError> {
        if self.is_over() {
            return Err(GameError::GameOver);
        }
        Ok(())
    }

    /// Rotate a held tile a quarter turn.
    pub fn rotate(&mut self, team: &str, tile: &str, rotation: Rotation) -> Result<(), GameError> {
        self.ensure_in_progress()?;
        let id = self.team_id(team)?;
        if self.variant.shares_hand() && self.turn != Some(id) {
            return Err(GameError::WrongTurn(self.turn_name()));
        }
        if !self.alive[id] {
            return Err(GameError::Eliminated(team.to_string()));
        }
        let wanted: Tile = tile.parse()?;

        let held = self
            .hands
            .of_mut(id)
            .get_mut(&wanted)
            .ok_or_else(|| GameError::TileNotInHand {
                team: team.to_string(),
                tile: tile.to_string(),
            })?;
        match rotation {
            Rotation::Left => held.rotate_left(),
            Rotation::Right => held.rotate_right(),
        }
        debug!(team, from = tile, to = %held, "rotated tile");
        Ok(())
    }

    /// Place a held tile and resolve the consequences.
    pub fn place_tile(&mut self, team: &str, tile: &str, row: usize, col: usize) -> Result<(), GameError> {
        self.ensure_in_progress()?;
        let id = self.team_id(team)?;
        if self.turn != Some(id) {
            return Err(GameError::WrongTurn(self.turn_name()));
        }

        let invalid = || GameError::InvalidAction {
            team: team.to_string(),
            row,
            col,
        };
        if self.target_cell(id).map_err(|_| invalid())? != (row, col) {
            return Err(invalid());
        }

        let wanted: Tile = tile.parse()?;
        if !self.hands.of(id).contains(&wanted) {
            return Err(invalid());
        }
        if !self.board.is_empty_at(row, col) {
            return Err(GameError::CellOccupied { row, col });
        }

        let placed = self.hands.of_mut(id).remove(&wanted).ok_or_else(invalid)?;
        self.board.place(placed, row, col)?;
        debug!(team, tile, row, col, "placed tile");

        self.activate_tokens_at(row, col);
        self.propagate();
        if let Some(points) = self.variant.score(&self.board, self.team_count()) {
            self.points = points;
        }
        self.update_alive();
        self.handle_draws(id);
        self.advance_turn();
        Ok(())
    }

    /// Declare the game over with the given winners.
    pub fn set_winners<S: AsRef<str>>(&mut self, winners: &[S]) -> Result<(), GameError> {
        self.ensure_in_progress()?;
        if winners.is_empty() {
            return Err(GameError::InvalidActionPayload("winners list is empty".to_string()));
        }
        let mut ids = Vec::with_capacity(winners.len());
        for name in winners {
            let id = self.team_id(name.as_ref())?;
            if !ids.contains(&id) {
                ids.push(id);
            }
        }
        self.finish(ids);
        Ok(())
    }

    // === Resolution ===

    fn turn_name(&self) -> String {
        self.turn.map(|t| self.team_name(t).to_string()).unwrap_or_default()
    }

    /// A tile on a token's start cell brings that token into play.
    fn activate_tokens_at(&mut self, row: usize, col: usize) {
        for team in TeamId::all(self.team_count()) {
            if self.alive[team] && !self.active[team] && self.tokens[team].cell() == (row, col) {
                self.active[team] = true;
                debug!(team = self.team_name(team), "token entered the board");
            }
        }
    }

    /// Move tokens until a full pass moves none.
    fn propagate(&mut self) {
        for pass in 0..MAX_PASSES {
            if self.propagation_pass() == 0 {
                debug!(passes = pass + 1, "propagation settled");
                return;
            }
        }
        warn!(passes = MAX_PASSES, "propagation did not settle");
    }

    fn propagation_pass(&mut self) -> usize {
        let mut moved = 0;
        for team in TeamId::all(self.team_count()) {
            if !self.active[team] {
                continue;
            }
            let token = self.tokens[team];
            let Some(tile) = self.board.get_mut(token.row, token.col) else {
                continue;
            };

            // Entering the tile just placed on the token's own cell.
            if !tile.owns_any(team) {
                let exit = tile.destination(token.notch);
                tile.claim(Path::new(token.notch, exit), team);
                self.tokens[team].notch = exit;
                moved += 1;
                debug!(team = self.team_name(team), row = token.row, col = token.col, notch = %exit, "token entered tile");
                continue;
            }

            if self.collides(team) {
                continue;
            }

            let Some((row, col)) = Board::neighbor(token.row, token.col, token.notch.direction()) else {
                continue;
            };
            let Some(next) = self.board.get_mut(row, col) else {
                continue;
            };
            let entry: Notch = token.notch.across();
            let exit = next.destination(entry);
            next.claim(Path::new(entry, exit), team);
            self.tokens[team] = Token::new(row, col, exit);
            moved += 1;
            debug!(team = self.team_name(team), row, col, notch = %exit, "token moved");
        }
        moved
    }

    /// Whether the team's token has run into any other active token.
    fn collides(&self, team: TeamId) -> bool {
        let token = self.tokens[team];
        TeamId::all(self.team_count())
            .filter(|&other| other != team && self.active[other])
            .any(|other| token.collides_with(&self.tokens[other], &self.board))
    }

    /// Eliminate tokens off the edge or in a collision, then check for a win.
    fn update_alive(&mut self) {
        if self.is_over() {
            return;
        }
        let before: Vec<TeamId> = self.alive_teams().collect();
        let losers: Vec<TeamId> = TeamId::all(self.team_count())
            .filter(|&t| self.active[t])
            .filter(|&t| self.tokens[t].faces_edge() || self.collides(t))
            .collect();
        for &team in &losers {
            self.eliminate(team);
        }
        let after: Vec<TeamId> = self.alive_teams().collect();

        let resolution = Resolution {
            before: &before,
            after: &after,
            board_full: self.board.is_full(),
            points: &self.points,
        };
        if let Some(winners) = self.variant.resolve(&resolution) {
            self.finish(winners);
        }
    }

    fn eliminate(&mut self, team: TeamId) {
        self.alive[team] = false;
        self.active[team] = false;
        if let Hands::PerTeam(hands) = &mut self.hands {
            let returned = hands[team].clear();
            self.deck.add(returned, &mut self.rng);
        }
        info!(team = self.team_name(team), "team eliminated");

        if self.dragon != Some(team) {
            return;
        }
        let heir = self
            .turn
            .and_then(|turn| self.next_alive_after(turn))
            .filter(|&next| self.hands.of(next).is_short());
        self.dragon = heir;
        info!(dragon = ?heir.map(|t| self.team_name(t)), "dragon passed on");
    }

    /// Refill hands, starting with the dragon if there is one.
    fn handle_draws(&mut self, placer: TeamId) {
        if self.is_over() {
            return;
        }
        if let Hands::Shared(hand) = &mut self.hands {
            while hand.is_short() {
                match self.deck.draw() {
                    Ok(tile) => hand.add(tile),
                    Err(_) => break,
                }
            }
            self.dragon = None;
            return;
        }

        let start = self.dragon.unwrap_or(placer);
        let first = if self.alive[start] {
            Some(start)
        } else {
            self.next_alive_after(start)
        };
        let Some(mut current) = first else {
            return;
        };
        for _ in 0..self.team_count() * HAND_SIZE {
            if self.deck.is_empty() || !self.hands.of(current).is_short() {
                break;
            }
            let Ok(tile) = self.deck.draw() else {
                break;
            };
            debug!(team = self.team_name(current), %tile, "drew tile");
            self.hands.of_mut(current).add(tile);
            match self.next_alive_after(current) {
                Some(next) => current = next,
                None => break,
            }
        }

        let dragon = (self.deck.is_empty() && self.hands.of(current).is_short()).then_some(current);
        if dragon != self.dragon {
            info!(dragon = ?dragon.map(|t| self.team_name(t)), "dragon changed");
        }
        self.dragon = dragon;
    }

    /// Next alive team after `team` in turn order.
    fn next_alive_after(&self, team: TeamId) -> Option<TeamId> {
        let n = self.team_count();
        (1..=n)
            .map(|step| TeamId::new(((team.index() + step) % n) as u8))
            .find(|&t| self.alive[t])
    }

    /// Hand the turn on to the next living team.
    ///
    /// Once the deck is empty a living team can run out of tiles; such teams
    /// are passed over too, unless every living hand is empty.
    fn advance_turn(&mut self) {
        if self.is_over() {
            self.turn = None;
            return;
        }
        let Some(turn) = self.turn else {
            return;
        };
        let n = self.team_count();
        let candidates: Vec<TeamId> = (1..=n)
            .map(|step| TeamId::new(((turn.index() + step) % n) as u8))
            .filter(|&t| self.alive[t])
            .collect();
        self.turn = candidates
            .iter()
            .copied()
            .find(|&t| !self.hands.of(t).is_empty())
            .or_else(|| candidates.first().copied());
    }

    fn finish(&mut self, winners: Vec<TeamId>) {
        let names: Vec<&str> = winners.iter().map(|&t| self.team_name(t)).collect();
        info!(winners = ?names, "game over");
        self.winners = winners;
        self.turn = None;
    }

    // === Legal actions ===

    /// Actions available to `scope` (or every team), in turn order.
    #[must_use]
    pub fn legal_actions(&self, scope: Option<TeamId>) -> Vec<LegalAction> {
        let mut actions = Vec::new();
        if self.is_over() {
            return actions;
        }
        let teams: Vec<TeamId> = match scope {
            Some(team) => vec![team],
            None => self.team_ids().collect(),
        };
        for team in teams {
            if !self.is_alive(team) {
                continue;
            }
            let my_turn = self.turn == Some(team);
            if self.variant.shares_hand() && !my_turn {
                continue;
            }
            let name = self.team_name(team);
            let hand = self.hands.of(team);
            for tile in hand.iter() {
                let tile = tile.to_string();
                actions.push(LegalAction {
                    team: name.to_string(),
                    action: Action::rotate_left(tile.clone()),
                });
                actions.push(LegalAction {
                    team: name.to_string(),
                    action: Action::rotate_right(tile),
                });
            }
            if !my_turn {
                continue;
            }
            if let Ok((row, col)) = self.target_cell(team) {
                if self.board.is_empty_at(row, col) {
                    actions.extend(hand.iter().map(|tile| LegalAction {
                        team: name.to_string(),
                        action: Action::place(tile.to_string(), row, col),
                    }));
                }
            }
        }
        actions
    }
}

#[cfg(test)]
impl State {
    /// Put a token somewhere specific, marking it active.
    pub(crate) fn set_token(&mut self, team: TeamId, token: Token, active: bool) {
        self.tokens[team] = token;
        self.active[team] = active;
    }

    /// Replace a team's hand with the given tiles, taking them from the deck
    /// or swapping them out of another hand.
    pub(crate) fn set_hand(&mut self, team: TeamId, edges: &[&str]) {
        let mut pool: Vec<Tile> = self.deck.tiles().to_vec();
        pool.extend(self.hands.of_mut(team).clear());
        for e in edges {
            let tile: Tile = e.parse().unwrap();
            let shape = tile.canonical_index();
            if let Some(pos) = pool.iter().position(|t| t.canonical_index() == shape) {
                pool.remove(pos);
            } else {
                let holder = self
                    .team_ids()
                    .find(|&o| self.hands.of(o).iter().any(|t| t.canonical_index() == shape))
                    .unwrap();
                let hand = self.hands.of_mut(holder);
                let held = hand.iter().find(|t| t.canonical_index() == shape).cloned().unwrap();
                hand.remove(&held);
                hand.add(pool.pop().unwrap());
            }
            self.hands.of_mut(team).add(tile);
        }
        self.deck = Deck::from_tiles(pool);
    }

    pub(crate) fn set_turn(&mut self, team: TeamId) {
        self.turn = Some(team);
    }

    pub(crate) fn set_dragon(&mut self, team: Option<TeamId>) {
        self.dragon = team;
    }

    pub(crate) fn deck_mut(&mut self) -> &mut Deck {
        &mut self.deck
    }
}
