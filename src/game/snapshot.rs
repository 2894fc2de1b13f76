//! Read-only views of a game for hosts and UIs.

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::core::{ActionRecord, TeamId, Variant};
use crate::rules::{LegalAction, State};
use crate::tiles::{Notch, Tile};

/// A placed tile with the segments teams have travelled on it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellView {
    pub edges: String,
    pub paths: Vec<PathView>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathView {
    /// Entry then exit notch, e.g. `"AF"`.
    pub path: String,
    pub team: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenView {
    pub team: String,
    pub row: usize,
    pub col: usize,
    pub notch: Notch,
    pub alive: bool,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HandView {
    pub team: String,
    pub tiles: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreView {
    pub team: String,
    pub points: u32,
}

/// Everything a client needs to render the game, as owned data.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    pub variant: Variant,
    pub teams: Vec<String>,
    /// `None` once the game is over.
    pub turn: Option<String>,
    pub winners: Vec<String>,
    /// Row-major; `None` for empty cells.
    pub board: Vec<Vec<Option<CellView>>>,
    /// Every hand, or only the requesting team's.
    pub hands: Vec<HandView>,
    pub tiles_remaining: usize,
    pub tokens: Vec<TokenView>,
    pub dragon: Option<String>,
    /// Present for scored variants.
    pub points: Option<Vec<ScoreView>>,
    /// Legal actions for the requesting scope; empty once the game is over.
    pub targets: Vec<LegalAction>,
    pub actions: Vec<ActionRecord>,
    pub message: String,
}

impl Snapshot {
    pub(crate) fn capture(state: &State, scope: Option<TeamId>, log: &Vector<ActionRecord>) -> Self {
        let name = |team: TeamId| state.team_name(team).to_string();

        let board = state
            .board()
            .rows()
            .iter()
            .map(|row| {
                row.iter()
                    .map(|cell| cell.as_ref().map(|tile| cell_view(state, tile)))
                    .collect()
            })
            .collect();

        let hands = state
            .team_ids()
            .filter(|&team| scope.map_or(true, |s| s == team))
            .map(|team| HandView {
                team: name(team),
                tiles: state.hands().of(team).iter().map(Tile::edge_string).collect(),
            })
            .collect();

        let tokens = state
            .tokens()
            .iter()
            .map(|(team, token)| TokenView {
                team: name(team),
                row: token.row,
                col: token.col,
                notch: token.notch,
                alive: state.is_alive(team),
            })
            .collect();

        let points = state.variant().is_scored().then(|| {
            state
                .points()
                .iter()
                .map(|(team, &points)| ScoreView {
                    team: name(team),
                    points,
                })
                .collect()
        });

        Self {
            variant: state.variant(),
            teams: state.names().to_vec(),
            turn: state.turn().map(name),
            winners: state.winners().iter().map(|&t| name(t)).collect(),
            board,
            hands,
            tiles_remaining: state.deck().len(),
            tokens,
            dragon: state.dragon().map(name),
            points,
            targets: state.legal_actions(scope),
            actions: log.iter().cloned().collect(),
            message: state.status_message(),
        }
    }
}

fn cell_view(state: &State, tile: &Tile) -> CellView {
    CellView {
        edges: tile.edge_string(),
        paths: tile
            .paths()
            .into_iter()
            .map(|(path, team)| PathView {
                path: path.to_string(),
                team: state.team_name(team).to_string(),
            })
            .collect(),
    }
}
