//! The screens of the TUI state machine.

mod game;
mod help;
mod menu;
mod stats_view;

pub use game::GameScreen;
pub use help::HelpScreen;
pub use menu::MenuScreen;
pub use stats_view::StatsViewScreen;
