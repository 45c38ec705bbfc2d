use lightsout_core::*;

#[cfg(target_arch = "wasm32")]
use wasm_bindgen_test::wasm_bindgen_test as test;

fn lit_cells(engine: &PlayEngine) -> Vec<Coord2> {
    let (rows, cols) = engine.size();
    (0..rows)
        .flat_map(|row| (0..cols).map(move |col| (row, col)))
        .filter(|&coords| engine.is_lit(coords))
        .collect()
}

#[test]
fn center_activation_on_dark_three_by_three() {
    let config = GameConfig::new((3, 3), 0.0).unwrap();
    let mut engine = PlayEngine::new(config, 0).unwrap();
    assert!(!engine.is_won());
    assert_eq!(engine.lit_count(), 0);

    let outcome = engine.activate((1, 1)).unwrap();

    assert_eq!(outcome, FlipOutcome::Flipped);
    assert_eq!(lit_cells(&engine), [(0, 1), (1, 0), (1, 1), (1, 2), (2, 1)]);
    assert!(!engine.is_won());
    assert_eq!(engine.state(), EngineState::Playing);
}

#[test]
fn single_cell_board_is_won_in_one_move() {
    let config = GameConfig::new((1, 1), 0.0).unwrap();
    let mut engine = PlayEngine::new(config, 0).unwrap();
    assert!(!engine.is_lit((0, 0)));

    let outcome = engine.activate((0, 0)).unwrap();

    assert_eq!(outcome, FlipOutcome::Won);
    assert!(engine.is_lit((0, 0)));
    assert_eq!(engine.state(), EngineState::Won);
    assert_eq!(engine.activate((0, 0)), Err(GameError::AlreadyWon));
}

#[test]
fn reset_after_win_recomputes_state() {
    let config = GameConfig::new((1, 1), 0.0).unwrap();
    let mut engine = PlayEngine::new(config, 0).unwrap();
    engine.activate((0, 0)).unwrap();
    assert!(engine.is_won());

    assert_eq!(engine.reset(1).unwrap(), EngineState::Playing);
    assert!(engine.can_activate());
    assert_eq!(engine.move_count(), 0);

    let config = GameConfig::new((2, 2), 1.0).unwrap();
    let mut engine = PlayEngine::new(config, 0).unwrap();
    assert!(engine.is_won());

    // a fresh board that is already solved loops straight back to won
    assert_eq!(engine.reset(5).unwrap(), EngineState::Won);
}

#[test]
fn reset_keeps_configured_size_for_many_seeds() {
    let config = GameConfig::new((4, 6), 0.5).unwrap();
    let mut engine = PlayEngine::new(config, 0).unwrap();

    for seed in 1..32 {
        let state = engine.reset(seed).unwrap();
        assert_eq!(engine.size(), (4, 6));
        assert_eq!(state.is_won(), engine.board().has_won());
    }
}

#[test]
fn double_activation_restores_board() {
    let config = GameConfig::new((5, 5), 0.5).unwrap();
    let board = Board::from_lit_coords((5, 5), &[(0, 0), (2, 2), (4, 1)]).unwrap();
    let mut engine = PlayEngine::with_board(config, board.clone()).unwrap();

    for coords in [(0, 0), (4, 4), (2, 3), (0, 4)] {
        engine.activate(coords).unwrap();
        engine.activate(coords).unwrap();
        assert_eq!(engine.board(), &board);
    }
    assert_eq!(engine.move_count(), 8);
}

#[test]
fn solving_by_hand_reaches_won() {
    // lighting the center of a dark plus shape
    let config = GameConfig::new((3, 3), 0.0).unwrap();
    let lit = [(0, 0), (0, 2), (2, 0), (2, 2)];
    let board = Board::from_lit_coords((3, 3), &lit).unwrap();
    let mut engine = PlayEngine::with_board(config, board).unwrap();

    assert_eq!(engine.activate((1, 1)).unwrap(), FlipOutcome::Won);
    assert_eq!(engine.move_count(), 1);
}
