use crate::common::{non_empty, NonEmpty, NonZeroUInt, Num, UInt};
use rand::{
    distributions::{DistIter, Distribution, Uniform},
    Rng,
};

/// A source of die faces, each in `1..=sides`.
///
/// Any `rand::Rng` is one; a seeded generator replays the same dice.
pub trait Roller {
    type RollIter<'a>: Iterator<Item = UInt> + 'a
    where
        Self: 'a;

    fn roll(&mut self, sides: NonZeroUInt) -> UInt;

    /// Yields `num` faces in the order they are drawn.
    fn roll_iter(&mut self, num: usize, sides: NonZeroUInt) -> Self::RollIter<'_>;

    /// Draws `count` dice. The result is in draw order and is never sorted here.
    fn draw(&mut self, count: Num, sides: NonZeroUInt) -> NonEmpty<UInt> {
        let first = self.roll(sides);
        non_empty(first, self.roll_iter(count.get() - 1, sides))
    }
}

impl<R: Rng> Roller for R {
    type RollIter<'a> = std::iter::Take<DistIter<Uniform<UInt>, &'a mut Self, UInt>>
    where
        Self: 'a;

    fn roll(&mut self, sides: NonZeroUInt) -> UInt {
        self.gen_range(1..=sides.get())
    }

    fn roll_iter(&mut self, num: usize, sides: NonZeroUInt) -> Self::RollIter<'_> {
        Uniform::new_inclusive(1, sides.get())
            .sample_iter(self)
            .take(num)
    }
}

#[cfg(test)]
pub(crate) use scripted::ScriptedRoller;
