//! Plays the minimax computer against every possible sequence of human moves.

use tictactoe::{Board, GameResult, Move, Player, search_best_move, select_best_move};

#[derive(Debug, Default)]
struct Outcomes {
    human_wins: usize,
    computer_wins: usize,
    draws: usize,
}

fn explore(board: &Board, to_move: Player, outcomes: &mut Outcomes) {
    match board.evaluate() {
        GameResult::Win(Player::Human) => {
            outcomes.human_wins += 1;
            return;
        }
        GameResult::Win(Player::Computer) => {
            outcomes.computer_wins += 1;
            return;
        }
        GameResult::Draw => {
            outcomes.draws += 1;
            return;
        }
        GameResult::InProgress => {}
    }

    match to_move {
        Player::Computer => {
            let mut next = board.clone();
            select_best_move(&mut next, Player::Computer).expect("Board has empty cells");
            explore(&next, Player::Human, outcomes);
        }
        Player::Human => {
            for mv in board.available_moves() {
                let mut next = board.clone();
                next.place(mv, Player::Human).unwrap();
                explore(&next, Player::Computer, outcomes);
            }
        }
    }
}

#[test]
fn test_computer_never_loses_when_human_opens() {
    let mut outcomes = Outcomes::default();
    explore(&Board::new(), Player::Human, &mut outcomes);

    assert_eq!(outcomes.human_wins, 0, "Outcomes: {:?}", outcomes);
    assert!(outcomes.draws > 0);
    assert!(outcomes.computer_wins > 0, "Careless humans must get punished");
}

#[test]
fn test_computer_never_loses_when_computer_opens() {
    let mut outcomes = Outcomes::default();
    explore(&Board::new(), Player::Computer, &mut outcomes);

    assert_eq!(outcomes.human_wins, 0, "Outcomes: {:?}", outcomes);
}

#[test]
fn test_opening_move_on_empty_board() {
    let mut board = Board::new();
    let (mv, score) = search_best_move(&mut board, Player::Computer).unwrap();

    assert_eq!(mv, Move::from_row_col(0, 0).unwrap());
    assert_eq!(score, 0, "Perfect play from the empty board is a draw");
}

#[test]
fn test_immediate_win_is_taken() {
    let mut board: Board = "oo./xx./...".parse().unwrap();

    let (mv, score) = search_best_move(&mut board, Player::Computer).unwrap();

    assert_eq!(mv, Move::from_row_col(0, 2).unwrap());
    assert_eq!(score, 1);
}

/// True when the human could complete a line on their next move.
fn human_has_immediate_win(board: &Board) -> bool {
    board.available_moves().into_iter().any(|mv| {
        let mut next = board.clone();
        next.place(mv, Player::Human).unwrap();
        next.evaluate() == GameResult::Win(Player::Human)
    })
}

/// Every position the computer reaches against any human: whenever some reply
/// stops an immediate human win, the chosen reply does too (or wins outright).
#[test]
fn test_engine_blocks_whenever_a_block_exists() {
    fn visit(board: &Board, to_move: Player, checked: &mut usize) {
        if board.evaluate().is_terminal() {
            return;
        }
        match to_move {
            Player::Computer => {
                let block_exists = board.available_moves().into_iter().any(|mv| {
                    let mut next = board.clone();
                    next.place(mv, Player::Computer).unwrap();
                    next.evaluate().is_terminal() || !human_has_immediate_win(&next)
                });

                let mut chosen = board.clone();
                select_best_move(&mut chosen, Player::Computer).unwrap();

                if block_exists {
                    *checked += 1;
                    assert!(
                        chosen.evaluate().is_terminal() || !human_has_immediate_win(&chosen),
                        "Computer left a winning reply open from {}",
                        board
                    );
                }
                visit(&chosen, Player::Human, checked);
            }
            Player::Human => {
                for mv in board.available_moves() {
                    let mut next = board.clone();
                    next.place(mv, Player::Human).unwrap();
                    visit(&next, Player::Computer, checked);
                }
            }
        }
    }

    let mut checked = 0;
    visit(&Board::new(), Player::Human, &mut checked);
    visit(&Board::new(), Player::Computer, &mut checked);
    assert!(checked > 0);
}
