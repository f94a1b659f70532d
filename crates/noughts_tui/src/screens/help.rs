//! Help screen explaining the rules and controls.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
};
use tracing::instrument;

use crate::screen::{Screen, ScreenTransition};
use crate::stats::StatsStore;

const HELP_TEXT: &str = "\
Tic-tac-toe is a simple game for two players.

You play X and move first; the computer plays O. Players take turns
marking a cell in the 3x3 grid. The first player to get three of their
marks in a row (across, down, or diagonal) wins the
game. If all nine cells are marked and nobody has three in a row, the
game is a draw.

The computer searches the full game tree for its move. The difficulty
setting caps how many moves ahead it looks: Easy barely looks past its
own move, Hard looks far enough to never lose.

Controls during a game:
  Arrow keys  move the cursor
  Enter/Space place your mark at the cursor
  1-9         place your mark in the numbered cell
  m           back to the menu
  q           quit";

/// Static help screen.
#[derive(Debug, Default)]
pub struct HelpScreen;

impl HelpScreen {
    /// Creates the help screen.
    pub fn new() -> Self {
        Self
    }
}

impl Screen for HelpScreen {
    #[instrument(skip(self, frame, _stats))]
    fn render(&self, frame: &mut Frame, _stats: &StatsStore) {
        let area = frame.area();
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Min(10),
                Constraint::Length(3),
            ])
            .split(area);

        let title = Paragraph::new("How to Play")
            .style(
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(title, chunks[0]);

        let body = Paragraph::new(HELP_TEXT)
            .style(Style::default().fg(Color::White))
            .block(Block::default().borders(Borders::ALL).title("Rules"));
        frame.render_widget(body, chunks[1]);

        let help = Paragraph::new("Esc / b: Back to Menu | q: Quit")
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(help, chunks[2]);
    }

    #[instrument(skip(self, key, _stats))]
    fn handle_key(&mut self, key: KeyEvent, _stats: &mut StatsStore) -> ScreenTransition {
        match key.code {
            KeyCode::Esc | KeyCode::Char('b') | KeyCode::Char('B') => ScreenTransition::GoToMenu,
            KeyCode::Char('q') | KeyCode::Char('Q') => ScreenTransition::Quit,
            _ => ScreenTransition::Stay,
        }
    }
}
