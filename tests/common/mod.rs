//! Helpers shared by the integration tests.

#![allow(dead_code)]

use tsuro_engine::{Action, ActionKind, Game, GameConfig, GameRng, Tile};

/// Route engine logs to the test harness. Set `RUST_LOG=tsuro_engine=debug`
/// to see them.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

pub fn new_game(teams: usize, variant: &str, seed: u64) -> Game {
    let names: Vec<String> = (0..teams).map(|i| format!("team{i}")).collect();
    Game::new(GameConfig::new(names).with_variant(variant).with_seed(seed)).unwrap()
}

/// Let the team to move rotate a random held tile a random number of times,
/// then place a random held tile. Returns false once the game is over.
pub fn play_turn(game: &mut Game, rng: &mut GameRng) -> bool {
    if game.is_over() {
        return false;
    }
    let turn = game.snapshot(None).unwrap().turn.expect("turn while in progress");

    let places: Vec<Action> = game
        .legal_actions(Some(&turn))
        .unwrap()
        .into_iter()
        .filter(|a| a.action.kind() == ActionKind::PlaceTile)
        .map(|a| a.action)
        .collect();
    let Some(Action::PlaceTile { row, col, tile }) = rng.choose(&places).cloned() else {
        panic!("{turn} has nothing to place");
    };

    let mut current: Tile = tile.parse().unwrap();
    for _ in 0..rng.gen_range_usize(0..4) {
        game.apply(&turn, Action::rotate_right(current.to_string())).unwrap();
        current.rotate_right();
    }
    game.apply(&turn, Action::place(current.to_string(), row, col)).unwrap();
    true
}

/// Play random turns until the game ends.
pub fn play_out(game: &mut Game, rng: &mut GameRng) {
    for _ in 0..200 {
        if !play_turn(game, rng) {
            return;
        }
    }
    panic!("game did not finish");
}
