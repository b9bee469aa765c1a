//! Compact text pagination.
//!
//! A pagination request shows the first and last `boundaries` pages and the
//! `around` pages on each side of the current page. The three page sets are
//! merged where they touch and rendered with `...` standing for the pages in
//! between:
//!
//! ```
//! assert_eq!(pagetext::generate_text_pagination(5, 15, 1, 1).unwrap(), "1 ... 4 5 6 ... 15");
//! ```

#[macro_use]
extern crate log;

mod config;
pub mod error;
pub mod merge;
pub mod page_set;
pub mod render;
pub mod window;

pub use crate::error::{PaginationError, Result};
pub use crate::merge::clean_page_sets;
pub use crate::page_set::PageSet;
pub use crate::render::pagination_to_string;
pub use crate::window::Window;

/// Disjoint page sets to display for the given request.
pub fn generate_pagination(
    current_page: i64,
    total_pages: i64,
    boundaries: i64,
    around: i64,
) -> Result<Vec<PageSet>> {
    let window = Window::new(current_page, total_pages, boundaries, around)?;
    let page_sets = clean_page_sets(&window.page_sets());
    debug!(
        "page {} of {}: {:?}",
        window.current_page(),
        window.total_pages(),
        page_sets
    );
    Ok(page_sets)
}

/// Text pagination, e.g. `1 ... 4 5 6 ... 15`.
///
/// Fails if either page number is not positive or if `current_page` is past
/// `total_pages`. `boundaries` and `around` are not checked.
pub fn generate_text_pagination(
    current_page: i64,
    total_pages: i64,
    boundaries: i64,
    around: i64,
) -> Result<String> {
    let page_sets = generate_pagination(current_page, total_pages, boundaries, around)?;
    Ok(pagination_to_string(&page_sets))
}

pub fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    let config = config::parse_cmd_line();
    debug!("{:?}", config);
    let pagination = generate_text_pagination(
        config.current_page,
        config.total_pages,
        config.boundaries,
        config.around,
    )?;
    println!("{}", pagination);
    Ok(())
}
