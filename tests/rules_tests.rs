//! Whole-game rule checks over seeded random playouts.
//!
//! Every variant is played to the end from many seeds while the invariants
//! that must hold after any action are checked along the way.

mod common;

use common::{init_tracing, new_game, play_out, play_turn};
use tsuro_engine::{
    Game, GameError, GameResult, GameRng, Notch, Path, TeamId, Variant, BORDER_CELLS, TILE_COUNT,
};

const SEEDS: std::ops::Range<u64> = 0..40;

fn parse_path(s: &str) -> Path {
    let mut notches = s.chars().filter_map(Notch::from_char);
    Path::new(notches.next().unwrap(), notches.next().unwrap())
}

fn alive_count(game: &Game) -> usize {
    game.state().alive_teams().count()
}

/// Tiles in the deck, the hands and on the board always add up to the set.
#[test]
fn test_tiles_are_conserved() {
    init_tracing();
    for variant in Variant::ALL {
        for seed in SEEDS {
            let mut game = new_game(4, variant.name(), seed);
            let mut rng = GameRng::new(seed + 1000);
            loop {
                assert_eq!(game.state().tile_total(), TILE_COUNT, "{variant} seed {seed}");
                if !play_turn(&mut game, &mut rng) {
                    break;
                }
            }
        }
    }
}

/// Games end, and a finished game has winners and no turn.
#[test]
fn test_every_game_finishes() {
    for variant in Variant::ALL {
        for seed in SEEDS {
            let mut game = new_game(3, variant.name(), seed);
            play_out(&mut game, &mut GameRng::new(seed));

            let snap = game.snapshot(None).unwrap();
            assert!(!snap.winners.is_empty());
            assert_eq!(snap.turn, None);
            assert!(snap.targets.is_empty());
            assert!(game.outcome().is_some());
        }
    }
}

/// Classic ends with the last survivor, a tie of the teams alive before a
/// wipe-out, or the survivors of a full board.
#[test]
fn test_classic_winners() {
    for seed in SEEDS {
        let mut game = new_game(2, "Classic", seed);
        let mut rng = GameRng::new(seed);
        let mut alive_before = 2;
        while !game.is_over() {
            alive_before = alive_count(&game);
            play_turn(&mut game, &mut rng);
        }

        let winners = game.state().winners().to_vec();
        let alive: Vec<TeamId> = game.state().alive_teams().collect();
        match alive.len() {
            0 => assert_eq!(winners.len(), alive_before),
            1 => assert_eq!(winners, alive),
            _ => {
                assert!(game.state().board().is_full());
                assert_eq!(winners, alive);
            }
        }
    }
}

/// With two teams, the first elimination decides the game.
#[test]
fn test_two_team_elimination_names_survivor() {
    for seed in SEEDS {
        let mut game = new_game(2, "Classic", seed);
        play_out(&mut game, &mut GameRng::new(seed));

        let alive: Vec<TeamId> = game.state().alive_teams().collect();
        if alive.len() == 1 {
            assert_eq!(game.outcome(), Some(GameResult::Winner(alive[0])));
            assert!(game.state().hand(TeamId::new(1 - alive[0].0)).unwrap().is_empty());
        }
    }
}

/// LongestPath points are the number of segments each team owns.
#[test]
fn test_longest_path_points_match_owned_segments() {
    for seed in SEEDS {
        let mut game = new_game(3, "LongestPath", seed);
        let mut rng = GameRng::new(seed);
        while play_turn(&mut game, &mut rng) {
            let snap = game.snapshot(None).unwrap();
            for score in snap.points.unwrap() {
                let owned = snap
                    .board
                    .iter()
                    .flatten()
                    .flatten()
                    .flat_map(|cell| &cell.paths)
                    .filter(|p| p.team == score.team)
                    .count();
                assert_eq!(score.points as usize, owned, "seed {seed}");
            }
        }
    }
}

/// MostCrossings scores each tile by the team's most-crossed single segment.
/// The per-tile maximum (not the pair count) is the intended rule.
#[test]
fn test_most_crossings_points_use_per_tile_max() {
    for seed in SEEDS {
        let mut game = new_game(3, "MostCrossings", seed);
        let mut rng = GameRng::new(seed);
        while play_turn(&mut game, &mut rng) {
            let snap = game.snapshot(None).unwrap();
            for score in snap.points.unwrap() {
                let mut expected = 0;
                for cell in snap.board.iter().flatten().flatten() {
                    let mine: Vec<Path> = cell
                        .paths
                        .iter()
                        .filter(|p| p.team == score.team)
                        .map(|p| parse_path(&p.path))
                        .collect();
                    expected += mine
                        .iter()
                        .map(|&s| mine.iter().filter(|&&o| s.crosses(o)).count())
                        .max()
                        .unwrap_or(0);
                }
                assert_eq!(score.points as usize, expected, "seed {seed}");
            }
        }
    }
}

/// Scored games end with the leaders, which may include eliminated teams.
#[test]
fn test_scored_winners_are_leaders() {
    for variant in ["LongestPath", "MostCrossings"] {
        for seed in SEEDS {
            let mut game = new_game(3, variant, seed);
            play_out(&mut game, &mut GameRng::new(seed));

            let points = game.state().points();
            let best = points.iter().map(|(_, &p)| p).max().unwrap();
            for &winner in game.state().winners() {
                assert_eq!(points[winner], best);
            }
        }
    }
}

/// Solo succeeds only when every token survives a full board.
#[test]
fn test_solo_outcomes() {
    for seed in SEEDS {
        let mut game = new_game(2, "Solo", seed);
        play_out(&mut game, &mut GameRng::new(seed));

        match game.outcome() {
            Some(GameResult::SoloSuccess) => {
                assert_eq!(alive_count(&game), 2);
                assert!(game.state().board().is_full());
            }
            Some(GameResult::SoloFailure(_)) => assert!(alive_count(&game) < 2),
            other => panic!("unexpected solo outcome {other:?}"),
        }
    }
}

/// Under OpenTiles every team sees the same hand and only the team to move
/// may touch it.
#[test]
fn test_open_tiles_share_one_hand() {
    let game = new_game(3, "OpenTiles", 11);
    let snap = game.snapshot(None).unwrap();

    let first = &snap.hands[0].tiles;
    assert!(snap.hands.iter().all(|h| &h.tiles == first));
    assert_eq!(snap.tiles_remaining, TILE_COUNT - 3);

    let turn = snap.turn.unwrap();
    assert!(snap.targets.iter().all(|a| a.team == turn));

    let other = snap.teams.iter().find(|t| **t != turn).unwrap();
    let mut game = game;
    assert_eq!(
        game.apply(other, tsuro_engine::Action::rotate_left(first[0].clone())),
        Err(GameError::WrongTurn(turn))
    );
}

/// Start tokens sit on distinct border cells facing off the board.
#[test]
fn test_start_tokens() {
    for seed in SEEDS {
        let game = new_game(8, "Classic", seed);
        let tokens: Vec<_> = game.state().tokens().iter().map(|(_, t)| *t).collect();
        for (i, token) in tokens.iter().enumerate() {
            assert!(token.faces_edge());
            assert!(tokens[..i].iter().all(|t| t.cell() != token.cell()));
        }
    }

    let names: Vec<String> = (0..BORDER_CELLS).map(|i| i.to_string()).collect();
    let config = tsuro_engine::GameConfig::new(names)
        .with_seed(1)
        .with_team_bounds(2, 64);
    assert!(Game::new(config).is_ok());
}

/// Nothing is accepted after the game ends.
#[test]
fn test_actions_after_game_over() {
    let mut game = new_game(2, "Classic", 5);
    play_out(&mut game, &mut GameRng::new(5));

    assert_eq!(
        game.apply("team0", tsuro_engine::Action::set_winners(["team0"])),
        Err(GameError::GameOver)
    );
    assert_eq!(
        game.apply("team1", tsuro_engine::Action::place("ABCDEFGH", 0, 0)),
        Err(GameError::GameOver)
    );
    assert!(game.legal_actions(None).unwrap().is_empty());
}

proptest::proptest! {
    #![proptest_config(proptest::prelude::ProptestConfig::with_cases(32))]

    /// Any seed and team count plays to a finished game with every tile
    /// accounted for.
    #[test]
    fn prop_random_games_finish(seed in 1u64..u64::MAX, teams in 2usize..=8) {
        let mut game = new_game(teams, "Classic", seed);
        play_out(&mut game, &mut GameRng::new(seed));

        proptest::prop_assert!(game.is_over());
        proptest::prop_assert_eq!(game.state().tile_total(), TILE_COUNT);
        let alive = game.state().alive_teams().count();
        proptest::prop_assert!(alive <= 1 || game.state().board().is_full());
    }
}
