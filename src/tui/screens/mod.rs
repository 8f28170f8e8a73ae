//! Screen implementations for the state machine.

mod in_game;
mod name_entry;
mod size_select;

pub use in_game::InGameScreen;
pub use name_entry::NameEntryScreen;
pub use size_select::SizeSelectScreen;
