//! Terminal front end: argument parsing and the interactive prompt.

use crate::{
    Board, BotKind, Cell, Config, GameResult, Match, Move, Player, RandomBot, RoundStatus,
    Scoreboard, TicTacToeError, simulate,
};
use anyhow::Context;
use clap::{Parser, Subcommand};
use rustyline::{DefaultEditor, error::ReadlineError};
use serde::Serialize;
use std::path::PathBuf;
use thiserror::Error;
use tracing::debug;

#[derive(Parser, Debug)]
#[command(name = "tictactoe", version)]
#[command(about = "Play tic-tac-toe against a computer that never loses", long_about = None)]
pub struct CliArgs {
    /// JSON config file; flags below override its values
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Computer opponent
    #[arg(short, long, value_enum)]
    pub bot: Option<BotKind>,

    /// Seed for bots that use randomness
    #[arg(long)]
    pub seed: Option<u64>,

    /// File to keep prompt history in
    #[arg(long)]
    pub history_file: Option<PathBuf>,

    /// Log at debug level (RUST_LOG takes precedence)
    #[arg(short, long)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Play interactively (default)
    Play,

    /// Play the computer against a random stand-in for the human
    Simulate {
        /// Rounds to play
        #[arg(short, long, default_value_t = 100)]
        games: u32,

        /// Seed for the random stand-in
        #[arg(long)]
        opponent_seed: Option<u64>,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },
}

impl CliArgs {
    /// Applies the flags that were given on top of `config`.
    pub fn apply_to(&self, mut config: Config) -> Config {
        if let Some(bot) = self.bot {
            config.bot = bot;
        }
        if self.seed.is_some() {
            config.seed = self.seed;
        }
        if self.history_file.is_some() {
            config.history_file = self.history_file.clone();
        }
        if self.verbose {
            config.log_level = Some("debug".to_string());
        }
        config
    }
}

/// One line typed at the prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplCommand {
    Place(Move),
    NewRound,
    Show,
    Score,
    Help,
    Quit,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseCommandError {
    #[error("Unknown command '{0}'")]
    Unknown(String),

    #[error(transparent)]
    Move(#[from] TicTacToeError),
}

pub const HELP: &str = "\
Commands:
  0-8          mark a cell by index (row-major)
  <row> <col>  mark a cell by row and column (0-2)
  new          start the next round
  board        show the board
  score        show the score
  help         show this help
  quit         leave";

pub fn parse_command(line: &str) -> Result<ReplCommand, ParseCommandError> {
    let line = line.trim();
    let parts: Vec<&str> = line
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|part| !part.is_empty())
        .collect();

    let numbers: Option<Vec<usize>> = parts.iter().map(|part| part.parse().ok()).collect();
    match numbers.as_deref() {
        Some([index]) => return Ok(ReplCommand::Place(Move::new(*index)?)),
        Some([row, col]) => return Ok(ReplCommand::Place(Move::from_row_col(*row, *col)?)),
        _ => {}
    }

    match line.to_ascii_lowercase().as_str() {
        "new" | "n" | "reset" => Ok(ReplCommand::NewRound),
        "board" | "b" => Ok(ReplCommand::Show),
        "score" | "s" => Ok(ReplCommand::Score),
        "help" | "h" | "?" => Ok(ReplCommand::Help),
        "quit" | "q" | "exit" => Ok(ReplCommand::Quit),
        _ => Err(ParseCommandError::Unknown(line.to_string())),
    }
}

/// Grid for the terminal. Empty cells show their index so they can be typed.
pub fn render_board(board: &Board) -> String {
    let rows: Vec<String> = (0..3)
        .map(|row| {
            let cells: Vec<String> = (0..3)
                .filter_map(|col| Move::from_row_col(row, col).ok())
                .map(|mv| match board.cell(mv) {
                    Cell::Empty => mv.index().to_string(),
                    Cell::Marked(player) => player.symbol().to_string(),
                })
                .collect();
            format!(" {} ", cells.join(" | "))
        })
        .collect();
    rows.join("\n---+---+---\n")
}

fn describe(result: GameResult) -> &'static str {
    match result {
        GameResult::Win(Player::Human) => "You win!",
        GameResult::Win(Player::Computer) => "The computer wins.",
        GameResult::Draw => "It's a draw.",
        GameResult::InProgress => "Your move.",
    }
}

fn format_score(score: Scoreboard) -> String {
    format!(
        "You {} - Computer {} - Draws {}",
        score.human_wins, score.computer_wins, score.draws
    )
}

fn report(game: &Match, status: &RoundStatus) {
    if let Some(mv) = status.computer_move {
        println!("Computer played {}", mv);
    }
    println!("{}", render_board(game.board()));
    println!("{}", describe(status.result));
    if status.result.is_terminal() {
        println!("{}", format_score(game.scoreboard()));
        println!("Type 'new' for another round.");
    }
}

fn remember(rl: &mut DefaultEditor, line: &str) {
    match rl.add_history_entry(line) {
        Ok(added) => debug!(added, "History entry"),
        Err(err) => debug!(%err, "Could not add history entry"),
    }
}

/// Interactive play until the user quits or closes input.
pub fn run_repl(config: &Config) -> anyhow::Result<()> {
    let mut rl = DefaultEditor::new().context("Failed to start line editor")?;
    if let Some(path) = &config.history_file {
        if rl.load_history(path).is_err() {
            debug!(path = %path.display(), "No previous history");
        }
    }

    let mut game = Match::new(config.bot.build(config.seed));

    println!("You are {}, the computer is {}.", Player::Human.symbol(), Player::Computer.symbol());
    println!("{}", HELP);
    let status = game.start_round();
    report(&game, &status);

    loop {
        match rl.readline("tictactoe> ") {
            Ok(line) => {
                let line = line.trim();
                if line.is_empty() {
                    continue;
                }
                remember(&mut rl, line);

                match parse_command(line) {
                    Ok(ReplCommand::Place(mv)) => match game.play_human(mv) {
                        Ok(status) => report(&game, &status),
                        Err(err) => println!("{}", err),
                    },
                    Ok(ReplCommand::NewRound) => {
                        let status = game.start_round();
                        report(&game, &status);
                    }
                    Ok(ReplCommand::Show) => println!("{}", render_board(game.board())),
                    Ok(ReplCommand::Score) => println!("{}", format_score(game.scoreboard())),
                    Ok(ReplCommand::Help) => println!("{}", HELP),
                    Ok(ReplCommand::Quit) => break,
                    Err(err) => println!("{}. Type 'help' for commands.", err),
                }
            }
            Err(ReadlineError::Interrupted | ReadlineError::Eof) => break,
            Err(err) => return Err(err).context("Failed to read input"),
        }
    }

    if let Some(path) = &config.history_file {
        rl.save_history(path)
            .with_context(|| format!("Failed to save history to {}", path.display()))?;
    }
    println!("{}", format_score(game.scoreboard()));
    Ok(())
}

#[derive(Debug, Serialize)]
pub struct SimulationReport {
    pub games: u32,
    pub bot: BotKind,
    pub scoreboard: Scoreboard,
}

pub fn run_simulation(config: &Config, games: u32, opponent_seed: Option<u64>) -> SimulationReport {
    let mut stand_in = match opponent_seed {
        Some(seed) => RandomBot::seeded(seed),
        None => RandomBot::new(),
    };
    let scoreboard = simulate(config.bot.build(config.seed), &mut stand_in, games);
    SimulationReport {
        games,
        bot: config.bot,
        scoreboard,
    }
}

pub fn print_simulation(report: &SimulationReport, json: bool) -> anyhow::Result<()> {
    if json {
        let text = serde_json::to_string_pretty(report).context("Failed to encode report")?;
        println!("{}", text);
    } else {
        println!("{} rounds against {:?}", report.games, report.bot);
        println!("{}", format_score(report.scoreboard));
    }
    Ok(())
}
