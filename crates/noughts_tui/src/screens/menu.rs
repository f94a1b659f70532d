//! Main menu screen, the entry hub of the application.

use crossterm::event::{KeyCode, KeyEvent};
use derive_getters::Getters;
use noughts_engine::Difficulty;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};
use tracing::{debug, info, instrument};

use crate::screen::{Screen, ScreenTransition};
use crate::stats::StatsStore;

/// Menu options available in the main menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuOption {
    Play,
    Difficulty,
    Help,
    Stats,
    Quit,
}

impl MenuOption {
    fn all() -> &'static [MenuOption] {
        &[
            Self::Play,
            Self::Difficulty,
            Self::Help,
            Self::Stats,
            Self::Quit,
        ]
    }
}

/// State for the main menu screen.
#[derive(Debug, Getters)]
pub struct MenuScreen {
    /// Difficulty the next game will start with.
    difficulty: Difficulty,
    #[getter(skip)]
    list_state: ListState,
}

impl MenuScreen {
    /// Creates a new menu with the given starting difficulty.
    #[instrument]
    pub fn new(difficulty: Difficulty) -> Self {
        debug!(%difficulty, "Initializing MenuScreen");
        let mut state = ListState::default();
        state.select(Some(0));
        Self {
            difficulty,
            list_state: state,
        }
    }

    /// Moves selection up.
    fn select_previous(&mut self) {
        let count = MenuOption::all().len();
        let i = match self.list_state.selected() {
            Some(i) if i > 0 => i - 1,
            _ => count - 1,
        };
        self.list_state.select(Some(i));
    }

    /// Moves selection down.
    fn select_next(&mut self) {
        let count = MenuOption::all().len();
        let i = match self.list_state.selected() {
            Some(i) => (i + 1) % count,
            None => 0,
        };
        self.list_state.select(Some(i));
    }

    /// Returns the currently selected menu option.
    fn selected_option(&self) -> MenuOption {
        let options = MenuOption::all();
        let idx = self.list_state.selected().unwrap_or(0);
        options[idx.min(options.len() - 1)]
    }

    fn label(&self, option: MenuOption) -> String {
        match option {
            MenuOption::Play => "Play".to_string(),
            MenuOption::Difficulty => format!("Difficulty: {}", self.difficulty),
            MenuOption::Help => "Help".to_string(),
            MenuOption::Stats => "Statistics".to_string(),
            MenuOption::Quit => "Quit".to_string(),
        }
    }
}

impl Screen for MenuScreen {
    #[instrument(skip(self, frame, stats))]
    fn render(&self, frame: &mut Frame, stats: &StatsStore) {
        let area = frame.area();
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Min(7),
                Constraint::Length(3),
            ])
            .split(area);

        let title = Paragraph::new("Noughts - Tic-Tac-Toe")
            .style(
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(title, chunks[0]);

        let tally = stats.stats();
        let tally_text = format!(
            "You (X): {}   Computer (O): {}   Draws: {}",
            tally.x_wins(),
            tally.o_wins(),
            tally.draws()
        );
        let tally_bar = Paragraph::new(tally_text)
            .style(Style::default().fg(Color::Green))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(tally_bar, chunks[1]);

        let items: Vec<ListItem> = MenuOption::all()
            .iter()
            .map(|opt| ListItem::new(self.label(*opt)))
            .collect();

        let menu = List::new(items)
            .block(Block::default().borders(Borders::ALL).title("Menu"))
            .highlight_style(
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            )
            .highlight_symbol("> ");

        let mut list_state = self.list_state.clone();
        frame.render_stateful_widget(menu, chunks[2], &mut list_state);

        let help = Paragraph::new("↑↓: Navigate | Enter: Select | q: Quit")
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(help, chunks[3]);
    }

    #[instrument(skip(self, key, _stats))]
    fn handle_key(&mut self, key: KeyEvent, _stats: &mut StatsStore) -> ScreenTransition {
        match key.code {
            KeyCode::Up => {
                self.select_previous();
                ScreenTransition::Stay
            }
            KeyCode::Down => {
                self.select_next();
                ScreenTransition::Stay
            }
            KeyCode::Enter => {
                let option = self.selected_option();
                info!(option = ?option, "Menu option selected");
                match option {
                    MenuOption::Play => ScreenTransition::GoToGame(self.difficulty),
                    MenuOption::Difficulty => {
                        self.difficulty = self.difficulty.next();
                        ScreenTransition::Stay
                    }
                    MenuOption::Help => ScreenTransition::GoToHelp,
                    MenuOption::Stats => ScreenTransition::GoToStats,
                    MenuOption::Quit => ScreenTransition::Quit,
                }
            }
            KeyCode::Char('q') | KeyCode::Char('Q') => ScreenTransition::Quit,
            _ => ScreenTransition::Stay,
        }
    }
}
