/// Pagination math for list endpoints.
///
/// `offset` feeds the store query, the rest feeds the response `meta`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub page: u64,
    pub limit: u64,
    pub total: u64,
    pub total_pages: u64,
    pub offset: u64,
    pub has_next: bool,
    pub has_prev: bool,
}

/// Upper bound on the page size; larger `limit` values are clamped.
pub const MAX_LIMIT: u64 = 100;

/// Upper bound on the page number. Keeps `offset` well inside i64 range
/// for the database layer.
pub const MAX_PAGE: u64 = u32::MAX as u64;

/// Pure pagination calculator.
///
/// Caller contract: `limit >= 1` and `page >= 1`. Handlers normalize raw
/// query values before calling (see `normalize_page_limit`); the calculator
/// itself never clamps. A page far past the end saturates the offset
/// instead of wrapping.
pub fn paginate(page: u64, limit: u64, total: u64) -> Pagination {
    let total_pages = total.div_ceil(limit);
    let offset = (page - 1).saturating_mul(limit);

    Pagination {
        page,
        limit,
        total,
        total_pages,
        offset,
        has_next: page < total_pages,
        has_prev: page > 1,
    }
}

/// Normalize optional query values to the calculator's contract:
/// page defaults to 1, limit defaults to 10, zero is bumped to 1, and both
/// are clamped to their maxima so arithmetic downstream stays in range.
pub fn normalize_page_limit(page: Option<u64>, limit: Option<u64>) -> (u64, u64) {
    (
        page.unwrap_or(1).clamp(1, MAX_PAGE),
        limit.unwrap_or(10).clamp(1, MAX_LIMIT),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn middle_page_has_both_neighbours() {
        let p = paginate(2, 10, 25);
        assert_eq!(p.total_pages, 3);
        assert_eq!(p.offset, 10);
        assert!(p.has_next);
        assert!(p.has_prev);
    }

    #[test]
    fn single_page_has_no_neighbours() {
        let p = paginate(1, 10, 5);
        assert_eq!(p.total_pages, 1);
        assert_eq!(p.offset, 0);
        assert!(!p.has_next);
        assert!(!p.has_prev);
    }

    #[test]
    fn last_page_has_only_prev() {
        let p = paginate(3, 10, 25);
        assert_eq!(p.offset, 20);
        assert!(!p.has_next);
        assert!(p.has_prev);
    }

    #[test]
    fn empty_result_set_has_zero_pages() {
        let p = paginate(1, 10, 0);
        assert_eq!(p.total_pages, 0);
        assert!(!p.has_next);
        assert!(!p.has_prev);
    }

    #[test]
    fn exact_multiple_does_not_add_a_page() {
        let p = paginate(1, 10, 20);
        assert_eq!(p.total_pages, 2);
        assert!(p.has_next);
    }

    #[test]
    fn normalize_defaults_and_bumps_zero() {
        assert_eq!(normalize_page_limit(None, None), (1, 10));
        assert_eq!(normalize_page_limit(Some(0), Some(0)), (1, 1));
        assert_eq!(normalize_page_limit(Some(4), Some(25)), (4, 25));
    }

    #[test]
    fn normalize_clamps_oversized_values() {
        assert_eq!(
            normalize_page_limit(Some(u64::MAX), Some(u64::MAX)),
            (MAX_PAGE, MAX_LIMIT)
        );
    }

    #[test]
    fn huge_page_does_not_overflow_the_offset() {
        let (page, limit) = normalize_page_limit(Some(u64::MAX), Some(10));
        let p = paginate(page, limit, 25);

        assert_eq!(p.offset, (MAX_PAGE - 1) * 10);
        assert!(!p.has_next);
        assert!(p.has_prev);

        // The calculator itself saturates even for an unclamped page
        let p = paginate(u64::MAX, 10, 25);
        assert_eq!(p.offset, u64::MAX);
    }
}
