use crate::common::UInt;
use std::collections::HashMap;

const EMPHASIS: &str = "**";

/// Renders dice in draw order, emphasizing exactly one occurrence per kept value.
///
/// `render(&[14, 1], &[14])` gives `(**14**, 1)`.
pub fn render(raw: &[UInt], kept: &[UInt]) -> String {
    let mut remaining: HashMap<UInt, usize> = HashMap::with_capacity(kept.len());
    for &value in kept {
        *remaining.entry(value).or_default() += 1;
    }

    let dice = raw
        .iter()
        .map(|value| match remaining.get_mut(value) {
            Some(n) if *n > 0 => {
                *n -= 1;
                format!("{}{}{}", EMPHASIS, value, EMPHASIS)
            }
            _ => value.to_string(),
        })
        .collect::<Vec<_>>()
        .join(", ");
    format!("({})", dice)
}
