//! Statistics view over the cumulative win/loss/draw tally.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table},
};
use tracing::{info, instrument};

use crate::screen::{Screen, ScreenTransition};
use crate::stats::StatsStore;

/// Statistics view over the persisted tally.
#[derive(Debug, Default)]
pub struct StatsViewScreen;

impl StatsViewScreen {
    /// Creates the statistics view.
    pub fn new() -> Self {
        Self
    }
}

impl Screen for StatsViewScreen {
    #[instrument(skip(self, frame, stats))]
    fn render(&self, frame: &mut Frame, stats: &StatsStore) {
        let area = frame.area();
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Min(6),
                Constraint::Length(3),
            ])
            .split(area);

        let title = Paragraph::new("Statistics")
            .style(
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(title, chunks[0]);

        let tally = stats.stats();
        let summary_text = format!(
            "Games: {}   Win Rate: {:.1}%   Record: {}",
            tally.total_games(),
            tally.win_rate(),
            stats.path().display()
        );
        let summary = Paragraph::new(summary_text)
            .style(Style::default().fg(Color::Green))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL).title("Summary"));
        frame.render_widget(summary, chunks[1]);

        let header = Row::new(vec![
            Cell::from("Outcome").style(Style::default().add_modifier(Modifier::BOLD)),
            Cell::from("Count").style(Style::default().add_modifier(Modifier::BOLD)),
        ])
        .style(Style::default().fg(Color::Yellow));

        let rows = vec![
            Row::new(vec![
                Cell::from("You win (X)").style(Style::default().fg(Color::Green)),
                Cell::from(tally.x_wins().to_string()),
            ]),
            Row::new(vec![
                Cell::from("Computer wins (O)").style(Style::default().fg(Color::Red)),
                Cell::from(tally.o_wins().to_string()),
            ]),
            Row::new(vec![
                Cell::from("Draws").style(Style::default().fg(Color::Yellow)),
                Cell::from(tally.draws().to_string()),
            ]),
        ];

        let widths = [Constraint::Percentage(60), Constraint::Percentage(40)];
        let table = Table::new(rows, widths)
            .header(header)
            .block(Block::default().borders(Borders::ALL).title("Tally"));
        frame.render_widget(table, chunks[2]);

        let help = Paragraph::new("Esc / b: Back to Menu | q: Quit")
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(help, chunks[3]);
    }

    #[instrument(skip(self, key, _stats))]
    fn handle_key(&mut self, key: KeyEvent, _stats: &mut StatsStore) -> ScreenTransition {
        match key.code {
            KeyCode::Esc | KeyCode::Char('b') | KeyCode::Char('B') => {
                info!("Returning to menu from stats");
                ScreenTransition::GoToMenu
            }
            KeyCode::Char('q') | KeyCode::Char('Q') => ScreenTransition::Quit,
            _ => ScreenTransition::Stay,
        }
    }
}
