//! Cumulative win/loss/draw tally and its text-file persistence.
//!
//! The record is a fixed three-line format:
//!
//! ```text
//! X Wins: <int>
//! O Wins: <int>
//! Draws: <int>
//! ```
//!
//! A missing or unreadable file is not an error; the counters default to
//! zero. Saving is best-effort: a failure is surfaced to the caller so the
//! UI can show a warning, but never aborts the game.

use derive_more::{Display, Error, From};
use derive_getters::Getters;
use noughts_engine::{GameStatus, Player};
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument, warn};

/// Line prefixes of the tally file, in their fixed order.
const FIELDS: [&str; 3] = ["X Wins:", "O Wins:", "Draws:"];

/// Failure while reading or writing the tally file.
#[derive(Debug, Display, Error, From)]
pub enum StatsError {
    /// Underlying filesystem error.
    #[display("stats file i/o error: {_0}")]
    Io(std::io::Error),
    /// A line did not match the expected `<field> <count>` shape.
    #[display("malformed stats line {line}: expected `{expected} <count>`")]
    #[from(ignore)]
    Malformed {
        /// One-based line number of the offending line.
        line: usize,
        /// The field prefix that line should have carried.
        expected: &'static str,
    },
}

/// Cumulative game tally across process runs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Getters)]
pub struct Stats {
    /// Games won by X (the human).
    x_wins: u64,
    /// Games won by O (the computer).
    o_wins: u64,
    /// Drawn games.
    draws: u64,
}

impl Stats {
    /// Total completed games on record.
    pub fn total_games(&self) -> u64 {
        self.x_wins + self.o_wins + self.draws
    }

    /// Human win rate as a percentage of completed games.
    pub fn win_rate(&self) -> f64 {
        let total = self.total_games();
        if total == 0 {
            0.0
        } else {
            self.x_wins as f64 * 100.0 / total as f64
        }
    }

    /// Counts a finished game. `InProgress` is ignored.
    pub fn record(&mut self, status: GameStatus) {
        match status {
            GameStatus::Won(Player::X) => self.x_wins += 1,
            GameStatus::Won(Player::O) => self.o_wins += 1,
            GameStatus::Draw => self.draws += 1,
            GameStatus::InProgress => {}
        }
    }

    /// Parses the three-line tally format.
    fn parse(contents: &str) -> Result<Self, StatsError> {
        let mut lines = contents.lines();
        let mut counts = [0u64; 3];
        for (i, &expected) in FIELDS.iter().enumerate() {
            let line = lines.next().unwrap_or_default();
            counts[i] = line
                .strip_prefix(expected)
                .and_then(|rest| rest.trim().parse().ok())
                .ok_or(StatsError::Malformed {
                    line: i + 1,
                    expected,
                })?;
        }
        Ok(Self {
            x_wins: counts[0],
            o_wins: counts[1],
            draws: counts[2],
        })
    }

    /// Renders the three-line tally format.
    fn render(&self) -> String {
        format!(
            "{} {}\n{} {}\n{} {}\n",
            FIELDS[0], self.x_wins, FIELDS[1], self.o_wins, FIELDS[2], self.draws
        )
    }
}

/// File-backed store for the game tally.
#[derive(Debug, Getters)]
pub struct StatsStore {
    /// Location of the tally file.
    path: PathBuf,
    /// The in-memory tally.
    stats: Stats,
}

impl StatsStore {
    /// Opens a store at the given path, loading any existing tally.
    ///
    /// A missing or malformed file falls back to zeroed counters.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn open(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref().to_path_buf();
        let stats = match std::fs::read_to_string(&path) {
            Ok(contents) => match Stats::parse(&contents) {
                Ok(stats) => {
                    debug!(?stats, "loaded stats");
                    stats
                }
                Err(e) => {
                    warn!(error = %e, "stats file unreadable, starting from zero");
                    Stats::default()
                }
            },
            Err(e) => {
                info!(error = %e, "no stats file, starting from zero");
                Stats::default()
            }
        };
        Self { path, stats }
    }

    /// Counts a finished game in the in-memory tally.
    pub fn record(&mut self, status: GameStatus) {
        self.stats.record(status);
    }

    /// Writes the tally back to disk.
    ///
    /// Callers treat a failure as a warning, not a fatal error.
    #[instrument(skip(self), fields(path = %self.path.display()))]
    pub fn save(&self) -> Result<(), StatsError> {
        std::fs::write(&self.path, self.stats.render())?;
        debug!(stats = ?self.stats, "saved stats");
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn render_matches_the_fixed_format() {
        let stats = Stats {
            x_wins: 1,
            o_wins: 2,
            draws: 3,
        };
        assert_eq!(stats.render(), "X Wins: 1\nO Wins: 2\nDraws: 3\n");
    }

    #[test]
    fn parse_rejects_reordered_fields() {
        let err = Stats::parse("O Wins: 1\nX Wins: 2\nDraws: 3\n").unwrap_err();
        assert!(matches!(err, StatsError::Malformed { line: 1, .. }));
    }

    #[test]
    fn parse_rejects_non_numeric_counts() {
        let err = Stats::parse("X Wins: 1\nO Wins: many\nDraws: 3\n").unwrap_err();
        assert!(matches!(err, StatsError::Malformed { line: 2, .. }));
    }

    #[test]
    fn missing_file_defaults_to_zero() {
        let dir = tempfile::tempdir().unwrap();
        let store = StatsStore::open(dir.path().join("absent.txt"));
        assert_eq!(*store.stats(), Stats::default());
    }

    #[test]
    fn malformed_file_defaults_to_zero() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("stats.txt");
        std::fs::write(&path, "garbage\n").unwrap();
        let store = StatsStore::open(&path);
        assert_eq!(*store.stats(), Stats::default());
    }

    #[test]
    fn tally_round_trips_through_the_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("stats.txt");

        let mut store = StatsStore::open(&path);
        store.record(GameStatus::Won(Player::X));
        store.record(GameStatus::Won(Player::X));
        store.record(GameStatus::Won(Player::O));
        store.record(GameStatus::Draw);
        store.record(GameStatus::InProgress); // ignored
        store.save().unwrap();

        assert_eq!(
            std::fs::read_to_string(&path).unwrap(),
            "X Wins: 2\nO Wins: 1\nDraws: 1\n"
        );

        let reloaded = StatsStore::open(&path);
        assert_eq!(reloaded.stats(), store.stats());
        assert_eq!(reloaded.stats().total_games(), 4);
    }

    #[test]
    fn win_rate_handles_empty_record() {
        let stats = Stats::default();
        assert_eq!(stats.win_rate(), 0.0);

        let mut stats = Stats::default();
        stats.record(GameStatus::Won(Player::X));
        stats.record(GameStatus::Won(Player::O));
        assert_eq!(stats.win_rate(), 50.0);
    }
}
