use derive_more::Display;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum PaginationError {
    #[display(
        fmt = "pagetext: current page {} is greater than the total number of pages {}.",
        current_page,
        total_pages
    )]
    InvalidPageOrdering { current_page: i64, total_pages: i64 },
    #[display(
        fmt = "pagetext: pages must be positive integers (current page: {}, total pages: {}).",
        current_page,
        total_pages
    )]
    InvalidPageValue { current_page: i64, total_pages: i64 },
}

impl std::error::Error for PaginationError {}

pub type Result<T> = std::result::Result<T, PaginationError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_ordering() {
        let err = PaginationError::InvalidPageOrdering {
            current_page: 9,
            total_pages: 8,
        };
        assert_eq!(
            err.to_string(),
            "pagetext: current page 9 is greater than the total number of pages 8."
        );
    }

    #[test]
    fn test_display_value() {
        let err = PaginationError::InvalidPageValue {
            current_page: -1,
            total_pages: 1,
        };
        assert_eq!(
            err.to_string(),
            "pagetext: pages must be positive integers (current page: -1, total pages: 1)."
        );
    }
}
