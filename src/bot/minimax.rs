use crate::{Board, Bot, Move, Player, Role};
use std::cmp;
use tracing::debug;

/// Bound wider than any reachable score, used as the initial alpha-beta window.
pub const INFINITY: i32 = i32::MAX / 2;

/// Unbeatable opponent: searches the whole remaining game tree every turn.
#[derive(Debug, Default)]
pub struct MinimaxBot;

impl MinimaxBot {
    pub fn new() -> Self {
        Self
    }
}

impl Bot for MinimaxBot {
    fn name(&self) -> &str {
        "minimax_bot"
    }

    fn play(&mut self, board: &mut Board, player: Player) -> Option<Move> {
        select_best_move(board, player)
    }
}

/// Searches every move for `player`, then commits the best one.
///
/// Returns `None` and leaves the board alone when it is already full.
pub fn select_best_move(board: &mut Board, player: Player) -> Option<Move> {
    let (best_move, score) = search_best_move(board, player)?;

    // The move came from `available_moves`, so the cell is empty.
    board.make_move(best_move, player);

    debug!(%player, %best_move, score, "Committed best move");
    Some(best_move)
}

/// Scores every empty cell for `player` and returns the best one without
/// committing it. Ties go to the first cell in row-major order.
pub fn search_best_move(board: &mut Board, player: Player) -> Option<(Move, i32)> {
    let role = player.role();
    let opponent_maximizing = player.opponent().role() == Role::Maximizer;

    let mut best: Option<(Move, i32)> = None;

    for move_idx in board.available_moves() {
        let score = {
            let mut child = board.speculate(move_idx, player);
            minimax(&mut child, opponent_maximizing, -INFINITY, INFINITY)
        };

        if best.is_none_or(|(_, best_score)| role.prefers(score, best_score)) {
            best = Some((move_idx, score));
        }
    }

    best
}

/// Alpha-beta search over the board as it stands. The board is restored before
/// returning.
///
/// Terminal boards return their score straight away: +1 computer win, -1 human
/// win, 0 draw.
pub fn minimax(board: &mut Board, maximizing_player: bool, mut alpha: i32, mut beta: i32) -> i32 {
    if let Some(score) = board.evaluate().score() {
        return score;
    }

    let moves = board.available_moves();

    if maximizing_player {
        let mut best_score = -INFINITY;

        for move_idx in moves {
            let score = {
                let mut child = board.speculate(move_idx, Role::Maximizer.player());
                minimax(&mut child, false, alpha, beta)
            };

            best_score = cmp::max(best_score, score);

            alpha = cmp::max(alpha, score);
            if beta <= alpha {
                break;
            }
        }
        best_score
    } else {
        let mut worst_score = INFINITY;

        for move_idx in moves {
            let score = {
                let mut child = board.speculate(move_idx, Role::Minimizer.player());
                minimax(&mut child, true, alpha, beta)
            };

            worst_score = cmp::min(worst_score, score);

            beta = cmp::min(beta, score);
            if beta <= alpha {
                break;
            }
        }
        worst_score
    }
}
