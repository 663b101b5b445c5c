//! Pagination defaults and clamping helpers.
//!
//! `page` and `per_page` are user-supplied query parameters. They are
//! clamped here, in one place, so no list endpoint can be asked to
//! materialize an unbounded result set.

/// Default number of items per page.
pub const DEFAULT_PER_PAGE: i64 = 10;

/// Maximum number of items per page.
pub const MAX_PER_PAGE: i64 = 100;

/// Clamp a user-supplied `per_page` value to `[1, MAX_PER_PAGE]`.
///
/// `None` yields [`DEFAULT_PER_PAGE`].
pub fn clamp_per_page(per_page: Option<i64>) -> i64 {
    per_page.unwrap_or(DEFAULT_PER_PAGE).clamp(1, MAX_PER_PAGE)
}

/// Clamp a user-supplied `page` value to `>= 1`.
///
/// `None` yields page 1.
pub fn clamp_page(page: Option<i64>) -> i64 {
    page.unwrap_or(1).max(1)
}

/// Zero-based row offset for a given (already clamped) page.
pub fn offset_for(page: i64, per_page: i64) -> i64 {
    (page - 1) * per_page
}

/// Total number of pages: `ceil(total / per_page)`. Zero when empty.
pub fn page_count(total: i64, per_page: i64) -> i64 {
    if total == 0 {
        0
    } else {
        (total + per_page - 1) / per_page
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_per_page_defaults_and_clamps() {
        assert_eq!(clamp_per_page(None), DEFAULT_PER_PAGE);
        assert_eq!(clamp_per_page(Some(25)), 25);
        assert_eq!(clamp_per_page(Some(0)), 1);
        assert_eq!(clamp_per_page(Some(-5)), 1);
        assert_eq!(clamp_per_page(Some(10_000)), MAX_PER_PAGE);
    }

    #[test]
    fn test_page_defaults_and_clamps() {
        assert_eq!(clamp_page(None), 1);
        assert_eq!(clamp_page(Some(0)), 1);
        assert_eq!(clamp_page(Some(-3)), 1);
        assert_eq!(clamp_page(Some(7)), 7);
    }

    #[test]
    fn test_offset() {
        assert_eq!(offset_for(1, 10), 0);
        assert_eq!(offset_for(3, 10), 20);
    }

    #[test]
    fn test_page_count_is_ceiling_division() {
        assert_eq!(page_count(0, 10), 0);
        assert_eq!(page_count(1, 10), 1);
        assert_eq!(page_count(10, 10), 1);
        assert_eq!(page_count(11, 10), 2);
        assert_eq!(page_count(95, 10), 10);
    }
}
