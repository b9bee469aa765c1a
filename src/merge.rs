use crate::page_set::PageSet;
use itertools::Itertools;
use std::cmp::{max, min};

/// Merge touching or overlapping page sets into a minimal disjoint sequence.
///
/// `page_sets` must be sorted by ascending start. A set is folded into the
/// previous entry when either that entry or the previous input set reaches
/// the page just before it. Every merged entry is clipped to
/// `[first start, last end]` of the input, so a wide middle set cannot push
/// the result past the outer bounds. Sets that are kept apart are copied
/// unchanged.
pub fn clean_page_sets(page_sets: &[PageSet]) -> Vec<PageSet> {
    let (min_start, max_end) = match (page_sets.first(), page_sets.last()) {
        (Some(first), Some(last)) => (first.start, last.end),
        _ => return Vec::new(),
    };
    // Each entry carries the end of the last input set folded into it.
    page_sets
        .iter()
        .map(|set| (*set, set.end))
        .coalesce(|(prev, prev_input_end), (set, set_end)| {
            let reach = set.start.saturating_sub(1);
            if prev.end >= reach || prev_input_end >= reach {
                let merged = PageSet::new(
                    max(min_start, min(prev.start, set.start)),
                    min(max_end, max(prev.end, set.end)),
                );
                trace!("merge {:?} with {:?} into {:?}", prev, set, merged);
                Ok((merged, set_end))
            } else {
                trace!("keep {:?}", set);
                Err(((prev, prev_input_end), (set, set_end)))
            }
        })
        .map(|(set, _)| set)
        .collect()
}
