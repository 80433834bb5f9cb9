mod ctx;
mod eval;
mod result;
mod roller;
mod stringify;

use crate::error::RResult;
use crate::parse::token::Token;

pub use ctx::{DefaultRoller, RollContext, DEFAULT_MAX_ROLLS, MAX_DICE};
pub use eval::{Evaluator, ExpressionState, Sign};
pub use result::RollResult;
pub use roller::Roller;
pub use stringify::render;

#[cfg(test)]
pub(crate) use roller::ScriptedRoller;

pub fn eval<R: Roller>(tokens: &[Token<'_>], roller: R, max_rolls: Option<usize>) -> RResult<String> {
    let mut ctx = RollContext::new(max_rolls, roller);
    ctx.eval(tokens)
}
