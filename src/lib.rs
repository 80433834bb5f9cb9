//! Rolls dice from short chat commands such as `3d8+2d6`, `- 5 + 2d20k1h` or
//! `"hit AC 20" d20`, producing a line that shows every die, which were kept, and the sum.

pub mod bot;
pub mod common;
pub mod error;
pub mod parse;
pub mod roll;

pub use bot::{Bot, BotConfig, Command};
pub use error::{RResult, RollError};
pub use parse::{parse, split_words, Word};
pub use roll::{RollContext, Roller};

/// Rolls the given words with a thread-local random source and the default roll budget.
pub fn roll(words: &[Word<'_>]) -> RResult<String> {
    let tokens = parse::parse(words)?;
    RollContext::default().eval(&tokens)
}

pub fn roll_with<R: Roller>(words: &[Word<'_>], roller: R) -> RResult<String> {
    let tokens = parse::parse(words)?;
    roll::eval(&tokens, roller, Some(roll::DEFAULT_MAX_ROLLS))
}
