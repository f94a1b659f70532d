//! The state machine driving the multi-screen TUI.

use crossterm::event::{self, Event, KeyEventKind};
use noughts_engine::Difficulty;
use ratatui::{Terminal, backend::Backend};
use std::time::Duration;
use tracing::{debug, info, instrument};

use crate::screen::{Screen, ScreenTransition};
use crate::screens::{GameScreen, HelpScreen, MenuScreen, StatsViewScreen};
use crate::stats::StatsStore;

/// Active screen in the state machine.
#[derive(Debug)]
enum ActiveScreen {
    Menu(MenuScreen),
    Help(HelpScreen),
    Stats(StatsViewScreen),
    Game(GameScreen),
}

impl ActiveScreen {
    fn as_screen(&self) -> &dyn Screen {
        match self {
            Self::Menu(s) => s,
            Self::Help(s) => s,
            Self::Stats(s) => s,
            Self::Game(s) => s,
        }
    }

    fn as_screen_mut(&mut self) -> &mut dyn Screen {
        match self {
            Self::Menu(s) => s,
            Self::Help(s) => s,
            Self::Stats(s) => s,
            Self::Game(s) => s,
        }
    }
}

/// Controller that drives the screen state machine.
///
/// Call [`Controller::run`] to start the event loop.
#[derive(Debug)]
pub struct Controller {
    stats: StatsStore,
    difficulty: Difficulty,
}

impl Controller {
    /// Creates a new controller.
    #[instrument(skip(stats))]
    pub fn new(stats: StatsStore, difficulty: Difficulty) -> Self {
        info!(%difficulty, "Creating Controller");
        Self { stats, difficulty }
    }

    /// Runs the event loop until the user quits.
    #[instrument(skip(self, terminal))]
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> anyhow::Result<()> {
        info!("Starting event loop");

        let mut screen = ActiveScreen::Menu(MenuScreen::new(self.difficulty));

        loop {
            terminal.draw(|f| screen.as_screen().render(f, &self.stats))?;

            // Let the active screen advance time-driven state (the
            // computer's turns) between key events.
            let mut transition = screen.as_screen_mut().tick(&mut self.stats);

            // Poll for input with a short timeout to keep the loop
            // responsive while the computer is on the clock.
            if matches!(transition, ScreenTransition::Stay)
                && event::poll(Duration::from_millis(100))?
            {
                if let Event::Key(key) = event::read()? {
                    // Skip key release events (crossterm fires both press
                    // and release).
                    if key.kind == KeyEventKind::Release {
                        continue;
                    }
                    transition = screen.as_screen_mut().handle_key(key, &mut self.stats);
                }
            }

            match transition {
                ScreenTransition::Stay => {}
                ScreenTransition::GoToMenu => {
                    debug!("Switching to menu");
                    // Carry the difficulty chosen last time back into the
                    // menu so it is sticky across games.
                    if let ActiveScreen::Game(ref game) = screen {
                        self.difficulty = *game.difficulty();
                    }
                    screen = ActiveScreen::Menu(MenuScreen::new(self.difficulty));
                }
                ScreenTransition::GoToHelp => {
                    debug!("Switching to help");
                    screen = ActiveScreen::Help(HelpScreen::new());
                }
                ScreenTransition::GoToStats => {
                    debug!("Switching to stats view");
                    screen = ActiveScreen::Stats(StatsViewScreen::new());
                }
                ScreenTransition::GoToGame(difficulty) => {
                    debug!(%difficulty, "Switching to game");
                    self.difficulty = difficulty;
                    screen = ActiveScreen::Game(GameScreen::new(difficulty));
                }
                ScreenTransition::Quit => {
                    info!("User quit");
                    return Ok(());
                }
            }
        }
    }
}
