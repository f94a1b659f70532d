//! Game screen: the live board, human input, and the computer's turns.

use crossterm::event::{KeyCode, KeyEvent};
use derive_getters::Getters;
use noughts_engine::{Difficulty, Game, GameStatus, Player, Position, best_move};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
};
use std::time::{Duration, Instant};
use tracing::{debug, info, instrument, warn};

use crate::input::{digit_to_position, move_cursor};
use crate::screen::{Screen, ScreenTransition};
use crate::stats::StatsStore;
use crate::ui::draw_board;

/// Pause before the computer's move lands, so it reads as a turn.
const THINK_DELAY: Duration = Duration::from_millis(400);

/// State for a game in progress.
#[derive(Debug, Getters)]
pub struct GameScreen {
    #[getter(skip)]
    game: Game,
    /// Difficulty the computer plays at.
    difficulty: Difficulty,
    #[getter(skip)]
    cursor: Position,
    #[getter(skip)]
    status_line: String,
    /// When set, the computer moves once this instant passes.
    #[getter(skip)]
    ai_due: Option<Instant>,
    /// Whether the finished game has been added to the tally yet.
    #[getter(skip)]
    recorded: bool,
}

impl GameScreen {
    /// Starts a fresh game at the given difficulty.
    #[instrument]
    pub fn new(difficulty: Difficulty) -> Self {
        info!(%difficulty, "Starting new game");
        Self {
            game: Game::new(),
            difficulty,
            cursor: Position::Center,
            status_line: "Your turn. You are X.".to_string(),
            ai_due: None,
            recorded: false,
        }
    }

    /// Resets the board for a rematch at the same difficulty.
    #[instrument(skip(self))]
    fn restart(&mut self) {
        info!(difficulty = %self.difficulty, "Restarting game");
        self.game = Game::new();
        self.cursor = Position::Center;
        self.status_line = "Your turn. You are X.".to_string();
        self.ai_due = None;
        self.recorded = false;
    }

    /// Applies the human move if the square is free.
    fn try_human_move(&mut self, pos: Position) {
        match self.game.make_move(pos) {
            Ok(()) => {
                debug!(position = %pos, "Human moved");
                self.cursor = pos;
            }
            Err(e) => {
                // Invalid moves are recovered locally by re-prompting.
                self.status_line = format!("{e}. Pick another square.");
            }
        }
    }

    /// Takes the computer's turn once the think delay has elapsed.
    fn advance_ai(&mut self) {
        match self.ai_due {
            None => {
                self.ai_due = Some(Instant::now() + THINK_DELAY);
                self.status_line = "Computer is thinking...".to_string();
            }
            Some(due) if Instant::now() >= due => {
                self.ai_due = None;
                let Some(pos) = best_move(self.game.board(), self.difficulty.depth_cap()) else {
                    // Unreachable while the game is in progress.
                    warn!("no move available on a non-terminal board");
                    return;
                };
                if let Err(e) = self.game.make_move(pos) {
                    warn!(error = %e, position = %pos, "engine move rejected");
                    return;
                }
                info!(position = %pos, "Computer moved");
                self.status_line = format!("Computer played {pos}. Your turn.");
            }
            Some(_) => {}
        }
    }

    /// Adds the finished game to the tally and saves it, best-effort.
    fn record_outcome(&mut self, stats: &mut StatsStore) {
        let status = self.game.status();
        stats.record(status);
        let saved = match stats.save() {
            Ok(()) => String::new(),
            Err(e) => {
                warn!(error = %e, "failed to save stats");
                format!(" (could not save tally: {e})")
            }
        };
        self.status_line = match status {
            GameStatus::Won(Player::X) => format!("You win!{saved}"),
            GameStatus::Won(Player::O) => format!("The computer wins.{saved}"),
            GameStatus::Draw => format!("The game is a draw.{saved}"),
            GameStatus::InProgress => unreachable!("recording an unfinished game"),
        };
        self.recorded = true;
    }
}

impl Screen for GameScreen {
    #[instrument(skip(self, frame, stats))]
    fn render(&self, frame: &mut Frame, stats: &StatsStore) {
        let area = frame.area();
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Min(11),
                Constraint::Length(3),
                Constraint::Length(3),
            ])
            .split(area);

        let title = Paragraph::new(format!("Noughts - {} opponent", self.difficulty))
            .style(
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(title, chunks[0]);

        // Hide the cursor while it is not the human's turn.
        let cursor = if self.game.is_over() || self.game.to_move() == Player::O {
            None
        } else {
            Some(self.cursor)
        };
        draw_board(frame, chunks[1], self.game.board(), cursor);

        let status = Paragraph::new(self.status_line.as_str())
            .style(Style::default().fg(Color::Yellow))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(status, chunks[2]);

        let tally = stats.stats();
        let help_text = if self.game.is_over() {
            format!(
                "r: Rematch | m: Menu | q: Quit    You {} / Computer {} / Draws {}",
                tally.x_wins(),
                tally.o_wins(),
                tally.draws()
            )
        } else {
            "↑↓←→: Cursor | Enter/Space: Place | 1-9: Cell | m: Menu | q: Quit".to_string()
        };
        let help = Paragraph::new(help_text)
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(help, chunks[3]);
    }

    #[instrument(skip(self, key, _stats))]
    fn handle_key(&mut self, key: KeyEvent, _stats: &mut StatsStore) -> ScreenTransition {
        // Keys that work in every phase of the game.
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') => return ScreenTransition::Quit,
            KeyCode::Char('m') | KeyCode::Char('M') | KeyCode::Esc => {
                return ScreenTransition::GoToMenu;
            }
            _ => {}
        }

        if self.game.is_over() {
            if let KeyCode::Char('r') | KeyCode::Char('R') = key.code {
                self.restart();
            }
            return ScreenTransition::Stay;
        }

        // Board input only applies on the human's turn.
        if self.game.to_move() != Player::X {
            return ScreenTransition::Stay;
        }

        match key.code {
            KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right => {
                self.cursor = move_cursor(self.cursor, key.code);
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.try_human_move(self.cursor);
            }
            code => {
                if let Some(pos) = digit_to_position(code) {
                    self.try_human_move(pos);
                }
            }
        }
        ScreenTransition::Stay
    }

    fn tick(&mut self, stats: &mut StatsStore) -> ScreenTransition {
        if self.game.is_over() {
            if !self.recorded {
                self.record_outcome(stats);
            }
        } else if self.game.to_move() == Player::O {
            self.advance_ai();
        }
        ScreenTransition::Stay
    }
}
