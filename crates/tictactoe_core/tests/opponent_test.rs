//! Heuristic opponent against exhaustive and hand-built positions.

use tictactoe_core::{
    Board, CELL_COUNT, HeuristicOpponent, Mark, Reason, RoundOutcome, ScriptedRandom, Square,
    choose_move, evaluate_outcome,
};

/// Boards with at least one empty cell and no completed line.
fn open_boards() -> impl Iterator<Item = Board> {
    (0..3usize.pow(CELL_COUNT as u32))
        .map(|mut code| {
            let squares = std::array::from_fn(|_| {
                let square = match code % 3 {
                    0 => Square::Empty,
                    1 => Square::Occupied(Mark::X),
                    _ => Square::Occupied(Mark::O),
                };
                code /= 3;
                square
            });
            Board::from_squares(squares)
        })
        .filter(|board| evaluate_outcome(board) == RoundOutcome::InProgress)
}

fn wins_at(board: &Board, index: usize, mark: Mark) -> bool {
    evaluate_outcome(&board.with_mark(index, mark)) == RoundOutcome::Won(mark)
}

#[test]
fn test_never_misses_an_immediate_win() {
    let opponent = HeuristicOpponent::new(Mark::O);
    for board in open_boards() {
        let can_win = board
            .empty_indices()
            .into_iter()
            .any(|i| wins_at(&board, i, Mark::O));
        if !can_win {
            continue;
        }
        let mut rng = ScriptedRandom::default();
        let choice = opponent.choose(&board, &mut rng).unwrap();
        assert!(wins_at(&board, *choice.index(), Mark::O), "{}", board.display());
        assert_eq!(*choice.reason(), Reason::Win);
    }
}

#[test]
fn test_always_blocks_when_it_cannot_win() {
    let opponent = HeuristicOpponent::new(Mark::O);
    for board in open_boards() {
        let empty = board.empty_indices();
        let can_win = empty.iter().any(|&i| wins_at(&board, i, Mark::O));
        let must_block = empty.iter().any(|&i| wins_at(&board, i, Mark::X));
        if can_win || !must_block {
            continue;
        }
        let mut rng = ScriptedRandom::default();
        let choice = opponent.choose(&board, &mut rng).unwrap();
        assert!(wins_at(&board, *choice.index(), Mark::X), "{}", board.display());
        assert_eq!(*choice.reason(), Reason::Block);
    }
}

#[test]
fn test_choice_is_always_an_empty_cell() {
    let opponent = HeuristicOpponent::new(Mark::X);
    for (n, board) in open_boards().enumerate() {
        let mut rng = ScriptedRandom::new([n, n / 3, n / 7]);
        let choice = opponent.choose(&board, &mut rng).unwrap();
        assert!(board.is_empty(*choice.index()));
    }
}

#[test]
fn test_corner_pick_follows_random_source() {
    let board = Board::parse("... .O. ...").unwrap();
    let expected = [0, 2, 6, 8];
    for (pick, want) in expected.iter().enumerate() {
        let mut rng = ScriptedRandom::new([pick]);
        assert_eq!(choose_move(&board, Mark::O, Mark::X, &mut rng), Ok(*want));
    }
}

#[test]
fn test_fallback_pick_follows_random_source() {
    // Center and corners taken, neither side can complete a line; 3 and 5 open.
    let board = Board::parse("XOX .X. OXO").unwrap();
    for ai in [Mark::X, Mark::O] {
        for (pick, want) in [(0, 3), (1, 5), (2, 3)] {
            let mut rng = ScriptedRandom::new([pick]);
            let choice = HeuristicOpponent::new(ai).choose(&board, &mut rng).unwrap();
            assert_eq!(*choice.reason(), Reason::Fallback);
            assert_eq!(*choice.index(), want);
        }
    }
}

#[test]
fn test_center_beats_corner() {
    let board = Board::parse("X.. ... ..O").unwrap();
    let mut rng = ScriptedRandom::new([3]);
    let choice = HeuristicOpponent::new(Mark::O).choose(&board, &mut rng).unwrap();
    assert_eq!(*choice.index(), 4);
    assert_eq!(*choice.reason(), Reason::Center);
    assert_eq!(rng.remaining(), 1);
}
