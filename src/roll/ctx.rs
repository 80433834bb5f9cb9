use super::{eval::Evaluator, result::RollResult, roller::Roller};
use crate::common::*;
use crate::error::{RResult, RollError};
use crate::parse::token::{DiceDirective, Token};

pub type DefaultRoller = rand::prelude::ThreadRng;

pub const DEFAULT_MAX_ROLLS: usize = 1000;

/// Most dice a single directive may roll, whatever the budget.
pub const MAX_DICE: usize = 100_000;

/// Owns the dice source for one invocation and keeps count of how many dice it has drawn.
pub struct RollContext<R = DefaultRoller> {
    max_rolls: Option<usize>,
    rolls: usize,
    roller: R,
}

impl<R: Roller> RollContext<R> {
    pub fn new(max_rolls: Option<usize>, roller: R) -> Self {
        Self {
            max_rolls,
            rolls: 0,
            roller,
        }
    }

    pub fn new_bounded(max_rolls: usize, roller: R) -> Self {
        Self::new(Some(max_rolls), roller)
    }

    pub fn new_unbounded(roller: R) -> Self {
        Self::new(None, roller)
    }

    fn count_rolls(&mut self, n: usize) -> RResult<()> {
        self.rolls = self.rolls.saturating_add(n);
        if self.max_rolls.map_or(false, |max| self.rolls > max) {
            Err(RollError::TooManyRolls)
        } else {
            Ok(())
        }
    }

    /// Draws `count` dice and keeps `keep` of them from the `hilo` end.
    ///
    /// A `keep` of zero keeps every die; anything above `count` is clamped.
    pub fn roll(
        &mut self,
        sides: NonZeroUInt,
        count: Num,
        keep: usize,
        hilo: HiLo,
    ) -> RResult<RollResult> {
        if count.get() > MAX_DICE {
            return Err(RollError::TooManyRolls);
        }
        self.count_rolls(count.get())?;
        let keep = Num::new(keep.min(count.get())).unwrap_or(count);

        let raw = self.roller.draw(count, sides);
        let ret = RollResult::select(raw, keep, hilo);
        tracing::debug!(
            count = count.get(),
            sides = sides.get(),
            keep = keep.get(),
            %hilo,
            raw = ?ret.raw,
            kept = ?ret.kept,
            "rolled dice"
        );
        Ok(ret)
    }

    pub fn roll_dice(&mut self, dice: &DiceDirective) -> RResult<RollResult> {
        self.roll(dice.sides, dice.count, dice.keep.get(), dice.hilo)
    }

    pub fn eval(&mut self, tokens: &[Token<'_>]) -> RResult<String> {
        Evaluator::new(self).eval(tokens)
    }
}

impl Default for RollContext {
    fn default() -> Self {
        Self::new(Some(DEFAULT_MAX_ROLLS), rand::thread_rng())
    }
}
