//! Solver and playout integration tests.

use peg_jump::core::{Board, BoardConfig, Position};
use peg_jump::game::Game;
use peg_jump::rules::Outcome;
use peg_jump::search::{run_playouts, PlayoutConfig, Solution, Solver, SolverConfig};

// =============================================================================
// Solver
// =============================================================================

/// Every single-hole start on this board can be solved down to one peg.
#[test]
fn test_every_single_hole_start_is_solvable() {
    let mut solver = Solver::new(SolverConfig::default());

    for hole in Position::all() {
        let board = BoardConfig::new().with_empty(hole).build().unwrap();
        match solver.solve(&board) {
            Solution::Solved(moves) => assert_eq!(moves.len(), 13, "hole {}", hole),
            other => panic!("hole {} gave {:?}", hole, other),
        }
    }
}

/// A solver line played through the driver ends in a win.
#[test]
fn test_solution_through_game() {
    let mut game = Game::classic();
    let mut solver = Solver::new(SolverConfig::default());

    let Solution::Solved(moves) = solver.solve(game.board()) else {
        panic!("classic start should be solvable");
    };

    for mv in &moves {
        game.play(mv.from, mv.to).unwrap();
    }
    assert_eq!(game.outcome(), Outcome::Win);
    assert_eq!(game.peg_count(), 1);
    assert!(solver.stats().nodes_expanded > 0);
}

/// The classic start can finish on the apex it started empty on.
#[test]
fn test_finish_in_starting_hole() {
    let apex = Position::new(0, 0);
    let mut solver = Solver::new(SolverConfig::default().with_target(apex));

    let Solution::Solved(moves) = solver.solve(&Board::with_hole(apex)) else {
        panic!("apex finish should be reachable");
    };
    let mut board = Board::with_hole(apex);
    for mv in moves {
        board.apply(mv).unwrap();
    }
    assert_eq!(board.iter().collect::<Vec<_>>(), vec![apex]);
}

/// The center-hole start can only finish on one cell.
#[test]
fn test_center_hole_has_single_finish() {
    let start = Board::with_hole(Position::new(2, 1));
    let finishes: Vec<_> = Position::all()
        .filter(|&target| {
            let mut solver = Solver::new(SolverConfig::default().with_target(target));
            matches!(solver.solve(&start), Solution::Solved(_))
        })
        .collect();
    assert_eq!(finishes, vec![Position::new(4, 2)]);
}

#[test]
fn test_target_respected() {
    let start = Board::with_hole(Position::new(0, 0));

    for target in Position::all() {
        let mut solver = Solver::new(SolverConfig::default().with_target(target));
        if let Solution::Solved(moves) = solver.solve(&start) {
            let mut board = start.clone();
            for mv in moves {
                board.apply(mv).unwrap();
            }
            assert_eq!(board.iter().collect::<Vec<_>>(), vec![target]);
        }
    }
}

// =============================================================================
// Playouts
// =============================================================================

#[test]
fn test_playouts_from_classic_start() {
    let board = Board::with_hole(Position::new(0, 0));
    let summary = run_playouts(&board, &PlayoutConfig::default().with_count(200));

    assert_eq!(summary.playouts, 200);
    assert_eq!(summary.wins + summary.losses, 200);

    let best = summary.best.unwrap();
    assert_eq!(best.pegs_left, board.len() - best.moves.len());
}
