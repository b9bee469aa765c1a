use crate::page_set::PageSet;
use itertools::Itertools;

pub const ELLIPSIS: &str = " ... ";

/// Render page sets as space separated page numbers, with an ellipsis
/// between consecutive sets.
///
/// Empty sets render as nothing, so an empty set at either end leaves a bare
/// `...` there once the surrounding whitespace is trimmed.
pub fn pagination_to_string(page_sets: &[PageSet]) -> String {
    page_sets.iter().join(ELLIPSIS).trim().to_owned()
}
