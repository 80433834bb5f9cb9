use super::{ctx::RollContext, roller::Roller, stringify};
use crate::common::Int;
use crate::error::{RResult, RollError};
use crate::parse::token::*;
use crate::parse::visit::VisitTerm;
use std::fmt;

/// The sign waiting to be applied to the next term.
///
/// Each `-` flips it (an unset sign becomes negative), so a double negative cancels.
/// A `+` only settles an unset sign.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub enum Sign {
    #[default]
    Unset,
    Positive,
    Negative,
}

impl Sign {
    pub fn apply(self, op: Operator) -> Self {
        match (op, self) {
            (Operator::Minus, Self::Unset | Self::Positive) => Self::Negative,
            (Operator::Minus, Self::Negative) => Self::Positive,
            (Operator::Plus, Self::Unset) => Self::Positive,
            (Operator::Plus, sign) => sign,
        }
    }

    /// An unset sign reads as `+` only in front of the first term.
    fn resolve(self, first_term: bool) -> Option<Operator> {
        match self {
            Self::Positive => Some(Operator::Plus),
            Self::Negative => Some(Operator::Minus),
            Self::Unset if first_term => Some(Operator::Plus),
            Self::Unset => None,
        }
    }
}

#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct ExpressionState {
    pub sum: Int,
    pub sign: Sign,
    pub meaningful_term_seen: bool,
    pub term_count: usize,
}

/// Walks tokens left to right, rolling dice and writing out each term as it goes.
pub struct Evaluator<'c, R> {
    ctx: &'c mut RollContext<R>,
    state: ExpressionState,
    output: String,
}

impl<'c, R: Roller> Evaluator<'c, R> {
    pub fn new(ctx: &'c mut RollContext<R>) -> Self {
        Self {
            ctx,
            state: ExpressionState::default(),
            output: String::new(),
        }
    }

    pub fn state(&self) -> &ExpressionState {
        &self.state
    }

    pub fn eval(mut self, tokens: &[Token<'_>]) -> RResult<String> {
        for token in tokens {
            self.visit(token)?;
        }
        if self.state.term_count > 1 {
            self.output += &format!("(sum = {})", self.state.sum);
        }
        tracing::debug!(
            sum = self.state.sum,
            terms = self.state.term_count,
            "evaluated roll"
        );
        Ok(self.output)
    }

    fn term_operator(&self, term: &impl fmt::Display) -> RResult<Operator> {
        self.state
            .sign
            .resolve(!self.state.meaningful_term_seen)
            .ok_or_else(|| RollError::MissingOperator(term.to_string()))
    }

    fn push_term(&mut self, op: Operator, value: Int, rendered: &str) -> RResult<()> {
        let first_term = !self.state.meaningful_term_seen;
        self.state.sum = match op {
            Operator::Plus => self.state.sum.checked_add(value),
            Operator::Minus => self.state.sum.checked_sub(value),
        }
        .ok_or(RollError::Overflow)?;

        if !(first_term && op == Operator::Plus) {
            self.output += &format!("{} ", op);
        }
        self.output += rendered;
        self.output.push(' ');

        self.state.sign = Sign::Unset;
        self.state.meaningful_term_seen = true;
        self.state.term_count += 1;
        Ok(())
    }
}

impl<R: Roller> VisitTerm for Evaluator<'_, R> {
    type Output = RResult<()>;

    fn visit_operator(&mut self, x: &Operator) -> Self::Output {
        self.state.sign = self.state.sign.apply(*x);
        Ok(())
    }

    fn visit_constant(&mut self, x: &Constant<'_>) -> Self::Output {
        let op = self.term_operator(x)?;
        self.push_term(op, Int::from(x.value), x.text)
    }

    fn visit_dice(&mut self, x: &DiceDirective) -> Self::Output {
        let op = self.term_operator(x)?;
        let roll = self.ctx.roll_dice(x)?;
        let rendered = stringify::render(&roll.raw, &roll.kept);
        self.push_term(op, roll.total(), &rendered)
    }

    fn visit_comment(&mut self, x: &Comment<'_>) -> Self::Output {
        self.output += x.0;
        self.output.push(' ');
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::UInt;
    use crate::parse::{self, Word};
    use crate::roll::roller::ScriptedRoller;
    use pretty_assertions::assert_eq;

    fn eval_with(words: &[&str], faces: &[UInt]) -> RResult<String> {
        let words: Vec<_> = words.iter().copied().map(Word::from).collect();
        let tokens = parse::parse(&words)?;
        RollContext::new_bounded(1000, ScriptedRoller::new(faces)).eval(&tokens)
    }

    macro_rules! check {
        ($input:expr, $expected:expr) => {
            check!($input, &[14, 1, 10, 12, 7], $expected)
        };
        ($input:expr, $faces:expr, $expected:expr) => {
            assert_eq!(eval_with($input, $faces).unwrap(), $expected);
        };
    }

    #[test]
    fn test_sign_transitions() {
        use Operator::*;
        assert_eq!(Sign::Unset.apply(Minus), Sign::Negative);
        assert_eq!(Sign::Negative.apply(Minus), Sign::Positive);
        assert_eq!(Sign::Positive.apply(Minus), Sign::Negative);
        assert_eq!(Sign::Unset.apply(Plus), Sign::Positive);
        assert_eq!(Sign::Negative.apply(Plus), Sign::Negative);
        assert_eq!(Sign::Positive.apply(Plus), Sign::Positive);
    }

    #[test]
    fn test_eval_single_term() {
        check!(&["d20"], "(**14**) ");
        check!(&["5"], "5 ");
        check!(&["-", "5"], "- 5 ");
    }

    #[test]
    fn test_eval_sums() {
        check!(&["d20", "+", "3"], "(**14**) + 3 (sum = 17)");
        check!(&["d20+3"], "(**14**) + 3 (sum = 17)");
        check!(&["2d20k1h", "+", "5"], "(**14**, 1) + 5 (sum = 19)");
        check!(&["3d8", "+", "2d6"], &[7, 1, 5, 3, 2], "(**7**, **1**, **5**) + (**3**, **2**) (sum = 18)");
    }

    #[test]
    fn test_eval_initial_negative() {
        check!(&["-", "5", "+", "2d20k1"], "- 5 + (**14**, 1) (sum = 9)");
        check!(&["-5+2d20k1"], "- 5 + (**14**, 1) (sum = 9)");
    }

    #[test]
    fn test_eval_double_negative() {
        check!(&["10", "-", "-", "3"], "10 + 3 (sum = 13)");
        check!(&["10", "-", "-", "-", "3"], "10 - 3 (sum = 7)");
        check!(&["10", "-", "+", "3"], "10 - 3 (sum = 7)");
        check!(&["+", "5"], "5 ");
    }

    #[test]
    fn test_eval_subtract_dice() {
        check!(&["10", "-", "2d20"], "10 - (**14**, **1**) (sum = -5)");
        check!(&["-", "d20", "-", "d20"], "- (**14**) - (**1**) (sum = -15)");
    }

    #[test]
    fn test_eval_comments() {
        check!(&["kick", "the", "orc", "d20", "+", "3"], "kick the orc (**14**) + 3 (sum = 17)");
        check!(&["to hit AC 20", "d20", "+", "8"], "to hit AC 20 (**14**) + 8 (sum = 22)");
        check!(&["d20", "stealth"], "(**14**) stealth ");
        check!(&["just", "words"], "just words ");
        check!(&[], "");
    }

    #[test]
    fn test_eval_empty_keep_is_comment() {
        check!(&["2d20k", "+", "8"], "2d20k 8 ");
        check!(&["d20", "+", "2d20k", "+", "8"], "(**14**) 2d20k + 8 (sum = 22)");
    }

    #[test]
    fn test_eval_constant_keeps_its_digits() {
        check!(&["007", "+", "1"], "007 + 1 (sum = 8)");
        check!(&["-", "0005"], "- 0005 ");
    }

    #[test]
    fn test_eval_trailing_operator() {
        check!(&["d20", "+"], "(**14**) ");
    }

    #[test]
    fn test_eval_missing_operator() {
        assert_eq!(
            eval_with(&["d20", "5"], &[14]),
            Err(RollError::MissingOperator("5".into()))
        );
    }

    #[test]
    fn test_eval_too_many_rolls() {
        assert_eq!(
            eval_with(&["600d6", "+", "600d6"], &[1]),
            Err(RollError::TooManyRolls)
        );
    }

    #[test]
    fn test_eval_state() {
        let tokens = parse::parse(&[Word::Bare("-"), Word::Bare("d20")]).unwrap();
        let mut ctx = RollContext::new_unbounded(ScriptedRoller::new(&[3]));
        let mut evaluator = Evaluator::new(&mut ctx);
        for token in &tokens {
            evaluator.visit(token).unwrap();
        }
        assert_eq!(
            evaluator.state(),
            &ExpressionState {
                sum: -3,
                sign: Sign::Unset,
                meaningful_term_seen: true,
                term_count: 1,
            }
        );
    }
}
