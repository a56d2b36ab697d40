// Library interface for mastermind
// This allows integration tests to access internal modules

pub mod cli;
pub mod code;
pub mod feedback;
pub mod game;
pub mod messages;
pub mod peg;
pub mod player;
pub mod rule;

// Re-export commonly used types for easier testing
pub use code::{Code, CodeParsingError};
pub use feedback::Feedback;
pub use game::{Variant, play};
pub use peg::Peg;
pub use player::{CodeBreaker, CodeMaker};
pub use rule::{GameRule, MASTERMIND44, ORIGINAL_1P, ORIGINAL_2P};
