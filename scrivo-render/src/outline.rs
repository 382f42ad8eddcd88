//! Outline numbering for ordered part sequences.
//!
//! Walks the sequence once, carrying one counter per nesting level. The
//! counter discipline is the same one the flat-to-nested heading walk uses:
//! returning to a shallower-or-equal level closes out the deeper state, here
//! expressed as resetting every deeper counter to zero so sibling numbering
//! restarts per subtree.
//!
//! No numbering state survives between calls. Every call recomputes the
//! counters from scratch over the whole input, so the pass is idempotent
//! and can be rerun before every render or display refresh.

use crate::part::Part;

/// Assign `order` and `number` to every part in sequence order.
///
/// `order` is the 1-based index of the part within its own level; `number`
/// is the dot-joined path of per-level counters from level 0 down to the
/// part's level. A sequence that opens deeper than level 0 leaves the
/// shallower counters at zero; the number is then built from the contiguous
/// non-zero prefix only, which can truncate it (or leave it empty for the
/// very first parts). Callers that want full-depth numbers should keep
/// level increases to at most +1 per step.
pub fn number<'a, I>(parts: I)
where
    I: IntoIterator<Item = &'a mut Part>,
{
    let mut counters: Vec<usize> = Vec::new();

    for part in parts {
        let level = part.level;
        if counters.len() <= level {
            counters.resize(level + 1, 0);
        }
        // Carry reset: deeper counters must not leak across siblings.
        for deeper in counters[level + 1..].iter_mut() {
            *deeper = 0;
        }
        counters[level] += 1;

        part.order = counters[level];
        part.number = join_prefix(&counters[..=level]);
    }
}

fn join_prefix(counters: &[usize]) -> String {
    let mut segments = Vec::with_capacity(counters.len());
    for &count in counters {
        if count == 0 {
            break;
        }
        segments.push(count.to_string());
    }
    segments.join(".")
}
