use std::fmt::{self, Write};
use std::num::{NonZeroU32, NonZeroUsize};

/// A running total. Wide enough that any roll within the roll budget fits.
pub type Int = i64;
/// A face value or constant.
pub type UInt = u32;
pub type NonZeroUInt = NonZeroU32;

/// A number of dice.
pub type Num = NonZeroUsize;

pub type NonEmpty<T> = vec1::Vec1<T>;

pub(crate) fn non_empty<T>(first: T, rest: impl IntoIterator<Item = T>) -> NonEmpty<T> {
    let mut ret = NonEmpty::new(first);
    ret.extend(rest);
    ret
}

/// Which end of the sorted dice a keep clause selects from.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub enum HiLo {
    #[default]
    High,
    Low,
}

impl fmt::Display for HiLo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let c = match self {
            Self::High => 'h',
            Self::Low => 'l',
        };
        f.write_char(c)
    }
}
