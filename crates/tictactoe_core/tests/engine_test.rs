//! Engine behavior: outcome evaluation, move legality, turns and scoring.

use tictactoe_core::rules::WIN_LINES;
use tictactoe_core::{
    Board, CELL_COUNT, GameSession, Mark, MoveResult, RandomSource, Rejection, RoundOutcome,
    SeededRandom, Square, evaluate_outcome,
};

/// Every one of the 3^9 fillings of the board.
fn all_boards() -> impl Iterator<Item = Board> {
    (0..3usize.pow(CELL_COUNT as u32)).map(|mut code| {
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
}

fn lines_won_by(board: &Board, mark: Mark) -> bool {
    WIN_LINES
        .iter()
        .any(|line| line.iter().all(|&i| board.get(i) == Some(Square::Occupied(mark))))
}

#[test]
fn test_evaluate_outcome_matches_definition_on_every_board() {
    for board in all_boards() {
        let x_line = lines_won_by(&board, Mark::X);
        let o_line = lines_won_by(&board, Mark::O);
        let full = board.empty_indices().is_empty();

        match evaluate_outcome(&board) {
            RoundOutcome::Won(Mark::X) => assert!(x_line, "{}", board.display()),
            RoundOutcome::Won(Mark::O) => assert!(o_line, "{}", board.display()),
            RoundOutcome::Draw => assert!(full && !x_line && !o_line, "{}", board.display()),
            RoundOutcome::InProgress => {
                assert!(!full && !x_line && !o_line, "{}", board.display())
            }
        }
    }
}

#[test]
fn test_occupied_cell_never_mutates() {
    let mut session = GameSession::new();
    assert!(session.apply_move(4, Mark::X).is_applied());
    let before = session.clone();

    for mark in [Mark::X, Mark::O] {
        assert_eq!(
            session.apply_move(4, mark),
            MoveResult::Rejected(Rejection::Occupied)
        );
        assert_eq!(session, before);
    }
}

#[test]
fn test_turn_parity_after_accepted_moves() {
    let mut rng = SeededRandom::with_seed(11);
    for _ in 0..200 {
        let mut session = GameSession::new();
        let mut accepted = 0;
        while session.round_active() {
            let empty = session.board().empty_indices();
            let index = empty[rng.pick(empty.len())];
            let mark = session.current_turn();
            let result = session.apply_move(index, mark);
            assert!(result.is_applied());
            accepted += 1;
            if result == MoveResult::Applied(RoundOutcome::InProgress) {
                let expected = if accepted % 2 == 0 { Mark::X } else { Mark::O };
                assert_eq!(session.current_turn(), expected);
            }
        }
    }
}

#[test]
fn test_score_counts_completed_rounds_since_reset() {
    let mut rng = SeededRandom::with_seed(3);
    let mut session = GameSession::new();
    let mut completed = 0;

    for round in 0..60 {
        if round == 25 {
            session.reset_score();
            completed = 0;
        }
        session.start_new_round(round % 2 == 0);
        while session.round_active() {
            let empty = session.board().empty_indices();
            let index = empty[rng.pick(empty.len())];
            let mark = session.current_turn();
            session.apply_move(index, mark);
        }
        completed += 1;
        assert_eq!(session.score().total(), completed);
    }
}

#[test]
fn test_x_wins_scenario() {
    let mut session = GameSession::new();
    for index in [4, 0, 5, 3] {
        let mark = session.current_turn();
        assert!(session.apply_move(index, mark).is_applied());
    }

    // X tries O's cell.
    let before = session.clone();
    assert_eq!(
        session.apply_move(3, Mark::X),
        MoveResult::Rejected(Rejection::Occupied)
    );
    assert_eq!(session, before);

    // X blocks the left column at 6, O answers at 1, and X completes the
    // anti-diagonal 2-4-6.
    assert!(session.apply_move(6, Mark::X).is_applied());
    assert!(session.apply_move(1, Mark::O).is_applied());
    assert_eq!(
        session.apply_move(2, Mark::X),
        MoveResult::Applied(RoundOutcome::Won(Mark::X))
    );
    assert_eq!(evaluate_outcome(session.board()), RoundOutcome::Won(Mark::X));
    assert_eq!(*session.score().x(), 1);
    assert!(!session.round_active());

    for index in session.board().empty_indices() {
        assert_eq!(
            session.apply_move(index, session.current_turn()),
            MoveResult::Rejected(Rejection::RoundOver)
        );
    }
}

#[test]
fn test_full_board_draw_scenario() {
    let mut session = GameSession::new();
    // Ends X O X / X O O / O X X.
    let moves = [0, 1, 2, 4, 3, 5, 7, 6, 8];
    let mut last = None;
    for index in moves {
        let mark = session.current_turn();
        last = Some(session.apply_move(index, mark));
    }
    assert_eq!(last, Some(MoveResult::Applied(RoundOutcome::Draw)));
    assert_eq!(evaluate_outcome(session.board()), RoundOutcome::Draw);
    assert_eq!(*session.score().draw(), 1);
    assert_eq!(session.score().total(), 1);
    assert_eq!(session.status(), "Draw game!");
}

#[test]
fn test_reset_all_zeroes_score_and_restarts() {
    let mut session = GameSession::new();
    for index in [0, 3, 1, 4, 2] {
        let mark = session.current_turn();
        session.apply_move(index, mark);
    }
    assert_eq!(session.score().total(), 1);

    session.reset_all();
    assert_eq!(session.score().total(), 0);
    assert!(session.round_active());
    assert_eq!(session.current_turn(), Mark::X);
    assert_eq!(session.board().empty_indices().len(), 9);
}

#[test]
fn test_reset_score_leaves_board() {
    let mut session = GameSession::new();
    session.apply_move(4, Mark::X);
    session.reset_score();
    assert_eq!(session.board().get(4), Some(Square::Occupied(Mark::X)));
    assert_eq!(session.current_turn(), Mark::O);
}
