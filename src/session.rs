//! Round lifecycle around the board: who opens, applying the human's move,
//! letting the computer answer, and keeping score across rounds.

use crate::{Board, Bot, GameResult, Move, Player, TicTacToeError};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

/// Tally of finished rounds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scoreboard {
    pub human_wins: u32,
    pub computer_wins: u32,
    pub draws: u32,
}

impl Scoreboard {
    pub fn record(&mut self, result: GameResult) {
        match result {
            GameResult::Win(Player::Human) => self.human_wins += 1,
            GameResult::Win(Player::Computer) => self.computer_wins += 1,
            GameResult::Draw => self.draws += 1,
            GameResult::InProgress => {}
        }
    }

    pub fn rounds(&self) -> u32 {
        self.human_wins + self.computer_wins + self.draws
    }
}

/// What happened during one call into the match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundStatus {
    pub human_move: Option<Move>,
    pub computer_move: Option<Move>,
    pub result: GameResult,
}

/// A sequence of rounds between the human and a computer [`Bot`].
pub struct Match {
    board: Board,
    bot: Box<dyn Bot>,
    round: u64,
    live: bool,
    first_player: Player,
    scoreboard: Scoreboard,
}

impl Match {
    pub fn new(bot: Box<dyn Bot>) -> Self {
        Self {
            board: Board::new(),
            bot,
            round: 0,
            live: false,
            first_player: Player::Human,
            scoreboard: Scoreboard::default(),
        }
    }

    /// Player who opens round number `round` (0-based). Openers alternate,
    /// starting with the human.
    pub fn opener_for(round: u64) -> Player {
        if round % 2 == 0 {
            Player::Human
        } else {
            Player::Computer
        }
    }

    /// Clears the board and begins the next round. When the computer opens,
    /// its first move is already on the board when this returns.
    ///
    /// An unfinished round is abandoned without being scored.
    pub fn start_round(&mut self) -> RoundStatus {
        self.board.reset();
        self.first_player = Self::opener_for(self.round);
        self.round += 1;
        self.live = true;

        info!(round = self.round, first = %self.first_player, bot = self.bot.name(), "Round started");

        let computer_move = match self.first_player {
            Player::Computer => self.bot.play(&mut self.board, Player::Computer),
            Player::Human => None,
        };

        RoundStatus {
            human_move: None,
            computer_move,
            result: self.board.evaluate(),
        }
    }

    /// Applies the human's move and, if the round goes on, the computer's reply.
    pub fn play_human(&mut self, mv: Move) -> Result<RoundStatus, TicTacToeError> {
        if !self.live {
            return Err(TicTacToeError::RoundOver);
        }

        self.board.place(mv, Player::Human)?;
        debug!(%mv, "Human moved");

        let mut result = self.board.evaluate();
        let mut computer_move = None;

        if !result.is_terminal() {
            computer_move = self.bot.play(&mut self.board, Player::Computer);
            result = self.board.evaluate();
        }

        if result.is_terminal() {
            self.finish(result);
        }

        Ok(RoundStatus {
            human_move: Some(mv),
            computer_move,
            result,
        })
    }

    /// Lets `stand_in` choose the human's move, then plays it like
    /// [`play_human`](Self::play_human).
    pub fn play_human_with(
        &mut self,
        stand_in: &mut dyn Bot,
    ) -> Result<RoundStatus, TicTacToeError> {
        if !self.live {
            return Err(TicTacToeError::RoundOver);
        }
        debug_assert!(!self.board.is_full(), "live round on a full board");
        let mut scratch = self.board.clone();
        let mv = stand_in
            .play(&mut scratch, Player::Human)
            .ok_or(TicTacToeError::NoMoveAvailable {
                player: Player::Human,
            })?;
        self.play_human(mv)
    }

    fn finish(&mut self, result: GameResult) {
        self.live = false;
        self.scoreboard.record(result);
        info!(round = self.round, %result, "Round finished");
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Number of rounds started so far.
    pub fn round(&self) -> u64 {
        self.round
    }

    pub fn is_live(&self) -> bool {
        self.live
    }

    pub fn first_player(&self) -> Player {
        self.first_player
    }

    pub fn scoreboard(&self) -> Scoreboard {
        self.scoreboard
    }

    pub fn current_result(&self) -> GameResult {
        self.board.evaluate()
    }
}

/// Plays `rounds` full rounds of `bot` against `stand_in` taking the human's
/// side, and returns the final tally.
///
/// A round the stand-in cannot continue is abandoned unscored, so the tally
/// can hold fewer than `rounds` results.
pub fn simulate(bot: Box<dyn Bot>, stand_in: &mut dyn Bot, rounds: u32) -> Scoreboard {
    let mut game = Match::new(bot);
    for _ in 0..rounds {
        game.start_round();
        while game.is_live() {
            if let Err(err) = game.play_human_with(stand_in) {
                warn!(round = game.round(), stand_in = stand_in.name(), %err, "Round abandoned");
                break;
            }
        }
    }
    game.scoreboard()
}
