//! Matches between two computer players searching at different depths

use anyhow::{bail, Result};
use indicatif::*;
use rayon::prelude::*;

use std::time::*;

use crate::{
    board::Board,
    error::GameError,
    search::{Searcher, INFINITY},
    terminal::{is_terminal, outcome, GameOutcome},
    Side,
};

/// Settings of an arena match
///
/// The challenger plays the [`Side::Bot`] pieces and the opponent the
/// [`Side::Player`] pieces. The side moving first alternates between games.
#[derive(Clone, Debug)]
pub struct ArenaConfig {
    pub games: usize,
    pub challenger_depth: usize,
    pub opponent_depth: usize,
    /// Random plies played at the start of every game so games differ
    pub openings: usize,
    pub seed: u64,
    pub show_progress: bool,
}

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct ArenaReport {
    pub challenger_wins: usize,
    pub opponent_wins: usize,
    pub draws: usize,
    /// Positions searched by both players over all games
    pub node_count: usize,
}

impl ArenaReport {
    pub fn games(&self) -> usize {
        self.challenger_wins + self.opponent_wins + self.draws
    }

    /// Adds a finished game to the tally
    pub fn record(&mut self, outcome: GameOutcome, node_count: usize) -> Result<()> {
        match outcome {
            GameOutcome::Win(Side::Bot) => self.challenger_wins += 1,
            GameOutcome::Win(Side::Player) => self.opponent_wins += 1,
            GameOutcome::Draw => self.draws += 1,
            GameOutcome::InProgress => bail!("cannot record an unfinished game"),
        }
        self.node_count += node_count;
        Ok(())
    }
}

/// Plays all games of a match in parallel
pub fn run(config: &ArenaConfig) -> Result<ArenaReport> {
    let progress = if config.show_progress {
        ProgressBar::new(config.games as u64)
    } else {
        ProgressBar::hidden()
    };
    progress.set_style(
        ProgressStyle::default_bar()
            .template("Playing games: {bar:40.cyan/blue} {pos}/{len} ~{eta} remaining")
            .progress_chars("█▓▒░  "),
    );

    let start = Instant::now();
    let games = (0..config.games)
        .into_par_iter()
        .map(|index| {
            let game = play_game(config, index);
            progress.inc(1);
            game
        })
        .collect::<Result<Vec<_>>>()?;
    progress.finish();

    let mut report = ArenaReport::default();
    for (outcome, node_count) in games {
        report.record(outcome, node_count)?;
    }

    log::info!(
        "Played {} games in {}",
        report.games(),
        HumanDuration(start.elapsed())
    );
    Ok(report)
}

/// Plays a single game to the end, returning its outcome and the number of
/// positions searched
fn play_game(config: &ArenaConfig, index: usize) -> Result<(GameOutcome, usize)> {
    let mut rng = fastrand::Rng::with_seed(config.seed.wrapping_add(index as u64));
    let mut board = Board::new();
    let mut to_move = if index % 2 == 0 { Side::Bot } else { Side::Player };

    for _ in 0..config.openings {
        if is_terminal(&board) {
            break;
        }
        let columns = board.valid_columns();
        board.drop_piece(columns[rng.usize(..columns.len())], to_move)?;
        to_move = to_move.opponent();
    }

    let mut challenger = Searcher::new(Side::Bot);
    let mut opponent = Searcher::new(Side::Player);
    while !is_terminal(&board) {
        let (searcher, depth) = match to_move {
            Side::Bot => (&mut challenger, config.challenger_depth),
            Side::Player => (&mut opponent, config.opponent_depth),
        };
        let result = searcher.best_move(&board, depth, -INFINITY, INFINITY, true)?;
        let column = result.column.ok_or(GameError::SearchPrecondition)?;
        board.drop_piece(column, to_move)?;
        to_move = to_move.opponent();
    }

    Ok((
        outcome(&board),
        challenger.node_count + opponent.node_count,
    ))
}
