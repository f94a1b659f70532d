//! Screen trait and transition type for the TUI state machine.

use crate::stats::StatsStore;
use crossterm::event::KeyEvent;
use noughts_engine::Difficulty;
use ratatui::Frame;

/// The result of handling an event on a screen.
///
/// Screens return this from [`Screen::handle_key`] (and
/// [`Screen::tick`]) to drive the
/// [`Controller`](crate::controller::Controller) state machine.
#[derive(Debug, Clone, Copy)]
pub enum ScreenTransition {
    /// Stay on the current screen with no state change.
    Stay,
    /// Navigate to the main menu.
    GoToMenu,
    /// Navigate to the help screen.
    GoToHelp,
    /// Navigate to the statistics view.
    GoToStats,
    /// Start a game at the given difficulty.
    GoToGame(Difficulty),
    /// Exit the application cleanly.
    Quit,
}

/// Trait implemented by each screen in the TUI state machine.
///
/// Each screen owns its own state, renders its UI, and handles key
/// events. The controller calls these methods in the event loop.
pub trait Screen {
    /// Renders the screen into the provided [`Frame`].
    fn render(&self, frame: &mut Frame, stats: &StatsStore);

    /// Handles a key event and returns the resulting [`ScreenTransition`].
    fn handle_key(&mut self, key: KeyEvent, stats: &mut StatsStore) -> ScreenTransition;

    /// Advances time-driven state between input events.
    ///
    /// The controller calls this once per loop iteration; the game screen
    /// uses it to take the computer's turn.
    fn tick(&mut self, _stats: &mut StatsStore) -> ScreenTransition {
        ScreenTransition::Stay
    }
}
