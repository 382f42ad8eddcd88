//! Numbering laws over the public API.

use proptest::prelude::*;
use scrivo_render::outline;
use scrivo_render::Part;

fn parts_with_levels(levels: &[usize]) -> Vec<Part> {
    levels
        .iter()
        .enumerate()
        .map(|(i, &level)| Part::new(level, format!("part {i}"), ""))
        .collect()
}

#[test]
fn interleaved_deep_levels_do_not_disturb_top_level_numbering() {
    let mut parts = parts_with_levels(&[0, 1, 2, 0, 2, 1, 0]);
    outline::number(parts.iter_mut());

    let top_numbers: Vec<&str> = parts
        .iter()
        .filter(|p| p.level == 0)
        .map(|p| p.number.as_str())
        .collect();
    assert_eq!(top_numbers, vec!["1", "2", "3"]);
}

#[test]
fn deep_subtree_does_not_leak_into_the_next_sibling() {
    let mut parts = parts_with_levels(&[0, 1, 2, 2, 1]);
    outline::number(parts.iter_mut());

    assert_eq!(parts[2].number, "1.1.1");
    assert_eq!(parts[3].number, "1.1.2");
    // Returning to level 1 resets the level-2 counter.
    assert_eq!(parts[4].number, "1.2");
}

#[test]
fn numbering_a_prefix_matches_numbering_the_whole() {
    // The pass is a left fold: numbers assigned to early parts never depend
    // on parts that come later.
    let levels = [0usize, 1, 1, 0, 2, 1];
    let mut full = parts_with_levels(&levels);
    outline::number(full.iter_mut());

    let mut prefix = parts_with_levels(&levels[..4]);
    outline::number(prefix.iter_mut());

    for (short, long) in prefix.iter().zip(full.iter()) {
        assert_eq!(short.number, long.number);
        assert_eq!(short.order, long.order);
    }
}

proptest! {
    #[test]
    fn renumbering_is_idempotent(levels in prop::collection::vec(0usize..6, 0..40)) {
        let mut parts = parts_with_levels(&levels);
        outline::number(parts.iter_mut());
        let first: Vec<(usize, String)> =
            parts.iter().map(|p| (p.order, p.number.clone())).collect();

        outline::number(parts.iter_mut());
        let second: Vec<(usize, String)> =
            parts.iter().map(|p| (p.order, p.number.clone())).collect();

        prop_assert_eq!(first, second);
    }

    #[test]
    fn order_is_the_last_segment_of_untruncated_numbers(
        levels in prop::collection::vec(0usize..6, 1..40)
    ) {
        let mut parts = parts_with_levels(&levels);
        outline::number(parts.iter_mut());

        for part in &parts {
            let segments: Vec<&str> = if part.number.is_empty() {
                vec![]
            } else {
                part.number.split('.').collect()
            };
            // Level jumps can truncate the number; the order/last-segment
            // law only binds when all levels up to the part's are counted.
            if segments.len() == part.level + 1 {
                prop_assert_eq!(segments.last().unwrap().parse::<usize>().unwrap(), part.order);
            }
        }
    }

    #[test]
    fn numbers_never_contain_zero_segments(
        levels in prop::collection::vec(0usize..6, 0..40)
    ) {
        let mut parts = parts_with_levels(&levels);
        outline::number(parts.iter_mut());

        for part in &parts {
            for segment in part.number.split('.').filter(|s| !s.is_empty()) {
                prop_assert!(segment.parse::<usize>().unwrap() > 0);
            }
        }
    }
}
