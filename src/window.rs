//! Construction of the three candidate page sets of a pagination request.

use crate::error::{PaginationError, Result};
use crate::page_set::PageSet;

/// Validated pagination request.
///
/// `boundaries` and `around` are taken as given: zero yields empty page sets
/// and negative values are not rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Window {
    current_page: i64,
    total_pages: i64,
    boundaries: i64,
    around: i64,
}

impl Window {
    pub fn new(
        current_page: i64,
        total_pages: i64,
        boundaries: i64,
        around: i64,
    ) -> Result<Self> {
        if current_page > total_pages {
            return Err(PaginationError::InvalidPageOrdering {
                current_page,
                total_pages,
            });
        }
        if current_page <= 0 || total_pages <= 0 {
            return Err(PaginationError::InvalidPageValue {
                current_page,
                total_pages,
            });
        }
        Ok(Self {
            current_page,
            total_pages,
            boundaries,
            around,
        })
    }

    pub fn current_page(&self) -> i64 {
        self.current_page
    }

    pub fn total_pages(&self) -> i64 {
        self.total_pages
    }

    /// Leading boundary, pages around the current one and trailing boundary,
    /// in that order. None of them is clamped to `1..=total_pages`.
    pub fn page_sets(&self) -> [PageSet; 3] {
        [
            PageSet::new(1, self.boundaries),
            PageSet::new(
                self.current_page.saturating_sub(self.around),
                self.current_page.saturating_add(self.around),
            ),
            PageSet::new(
                self.total_pages
                    .saturating_sub(self.boundaries)
                    .saturating_add(1),
                self.total_pages,
            ),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_sets() {
        let window = Window::new(5, 15, 1, 1).unwrap();
        assert_eq!(
            window.page_sets(),
            [
                PageSet::new(1, 1),
                PageSet::new(4, 6),
                PageSet::new(15, 15)
            ]
        );
    }

    #[test]
    fn test_page_sets_unclamped() {
        let window = Window::new(1, 9, 1, 3).unwrap();
        assert_eq!(window.page_sets()[1], PageSet::new(-2, 4));
    }

    #[test]
    fn test_zero_boundaries_and_around() {
        let sets = Window::new(3, 5, 0, 0).unwrap().page_sets();
        assert!(sets[0].is_empty());
        assert_eq!(sets[1], PageSet::new(3, 3));
        assert!(sets[2].is_empty());
        assert_eq!(sets[2], PageSet::new(6, 5));
    }

    #[test]
    fn test_negative_around_accepted() {
        let window = Window::new(3, 5, 1, -1).unwrap();
        assert!(window.page_sets()[1].is_empty());
    }

    #[test]
    fn test_current_greater_than_total() {
        assert_eq!(
            Window::new(9, 8, 1, 3),
            Err(PaginationError::InvalidPageOrdering {
                current_page: 9,
                total_pages: 8
            })
        );
    }

    #[test]
    fn test_non_positive_pages() {
        for &(current, total) in &[(0, 0), (1, 0), (0, 1), (-1, 1), (1, -1)] {
            assert!(
                Window::new(current, total, 1, 1).is_err(),
                "accepted current page {} with total pages {}",
                current,
                total
            );
        }
        assert_eq!(
            Window::new(0, 1, 1, 1),
            Err(PaginationError::InvalidPageValue {
                current_page: 0,
                total_pages: 1
            })
        );
    }

    #[test]
    fn test_saturating_arithmetic() {
        let sets = Window::new(i64::MAX, i64::MAX, 1, 1).unwrap().page_sets();
        assert_eq!(sets[1], PageSet::new(i64::MAX - 1, i64::MAX));
        assert_eq!(sets[2], PageSet::new(i64::MAX, i64::MAX));
    }
}
