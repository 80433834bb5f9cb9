use crate::common::*;

/// The dice drawn for one directive and the ones its keep clause selected.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct RollResult {
    /// In draw order.
    pub raw: NonEmpty<UInt>,
    /// Sorted from the kept end: descending when keeping high, ascending when keeping low.
    pub kept: NonEmpty<UInt>,
}

impl RollResult {
    /// Selects `keep` dice from `raw`. `keep` must be within `1..=raw.len()`.
    pub(crate) fn select(raw: NonEmpty<UInt>, keep: Num, hilo: HiLo) -> Self {
        let mut sorted = raw.to_vec();
        sorted.sort_unstable();
        if hilo == HiLo::High {
            sorted.reverse();
        }
        let keep = keep.get().min(sorted.len());
        let kept = non_empty(sorted[0], sorted[1..keep].iter().copied());
        Self { raw, kept }
    }

    pub fn total(&self) -> Int {
        self.kept.iter().copied().map(Int::from).sum()
    }
}
