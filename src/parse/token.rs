use super::visit::{AcceptTerm, VisitTerm};
use crate::common::*;
use crate::error::{RResult, RollError};
use std::fmt::{self, Write};

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
#[enum_dispatch::enum_dispatch(AcceptTerm)]
pub enum Token<'a> {
    Operator(Operator),
    Constant(Constant<'a>),
    Dice(DiceDirective),
    Comment(Comment<'a>),
}

impl fmt::Display for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Operator(x) => fmt::Display::fmt(x, f),
            Self::Constant(x) => fmt::Display::fmt(x, f),
            Self::Dice(x) => fmt::Display::fmt(x, f),
            Self::Comment(x) => fmt::Display::fmt(x, f),
        }
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Operator {
    Plus,
    Minus,
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let c = match self {
            Self::Plus => '+',
            Self::Minus => '-',
        };
        f.write_char(c)
    }
}

/// A bare number. Echoed as written, so `007` stays `007`.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Constant<'a> {
    pub value: UInt,
    pub text: &'a str,
}

impl fmt::Display for Constant<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.text)
    }
}

/// `[count]d<sides>[k<keep>[h|l]]`
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct DiceDirective {
    pub count: Num,
    pub sides: NonZeroUInt,
    pub keep: Num,
    pub hilo: HiLo,
}

impl DiceDirective {
    /// A `keep` of zero (or none at all) keeps every die; more than `count` is clamped.
    pub fn new(count: Num, sides: NonZeroUInt, keep: usize, hilo: HiLo) -> Self {
        let keep = Num::new(keep.min(count.get())).unwrap_or(count);
        Self {
            count,
            sides,
            keep,
            hilo,
        }
    }

    /// Builds a directive from a slice the lexer has already matched as dice.
    pub(crate) fn from_lexeme(s: &str) -> RResult<Self> {
        let (count, rest) = s.split_once('d').unwrap_or_default();
        let (sides, keep) = match rest.split_once('k') {
            Some((sides, keep)) => (sides, keep),
            None => (rest, ""),
        };
        let (keep, hilo) = if let Some(keep) = keep.strip_suffix('l') {
            (keep, HiLo::Low)
        } else {
            (keep.strip_suffix('h').unwrap_or(keep), HiLo::High)
        };

        let count = parse_field::<usize>(count, s)?.unwrap_or(1);
        let count = Num::new(count).ok_or_else(|| RollError::NoDice(s.to_owned()))?;
        let sides = parse_field::<UInt>(sides, s)?
            .and_then(NonZeroUInt::new)
            .ok_or_else(|| RollError::NoSides(s.to_owned()))?;
        let keep = parse_field::<usize>(keep, s)?.unwrap_or(0);
        Ok(Self::new(count, sides, keep, hilo))
    }
}

impl fmt::Display for DiceDirective {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}d{}", self.count, self.sides)?;
        if self.keep != self.count || self.hilo == HiLo::Low {
            write!(f, "k{}{}", self.keep, self.hilo)?;
        }
        Ok(())
    }
}

/// Free text that matched nothing else. Echoed as-is.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Comment<'a>(pub &'a str);

impl fmt::Display for Comment<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

// Digits only reach here after lexing, so the only failure left is overflow.
fn parse_field<T: std::str::FromStr>(field: &str, token: &str) -> RResult<Option<T>> {
    if field.is_empty() {
        return Ok(None);
    }
    field
        .parse()
        .map(Some)
        .map_err(|_| RollError::NumberTooLarge(token.to_owned()))
}

pub(crate) fn parse_constant(s: &str) -> RResult<Constant<'_>> {
    parse_field(s, s)?
        .map(|value| Constant { value, text: s })
        .ok_or_else(|| RollError::NumberTooLarge(s.to_owned()))
}
