//! The windowing engine: derives the visible slice and its `results` block
//! from the full dataset and the current configuration.

use std::ops::{Bound, Range, RangeBounds};

use crate::types::{DisplayLimit, PageLink, Pagination, Results};

/// Token in a base URI that is replaced by the neighbouring page number.
pub const PAGE_PLACEHOLDER: &str = "??";

/// Computes the visible items and metadata for one configuration.
///
/// `page` is `None` (or `Some(0)`) when pagination is disabled. The result
/// depends on the arguments only; nothing from a previous computation carries
/// over.
pub fn compute<T: Clone>(
    full: &[T],
    page: Option<usize>,
    limit: DisplayLimit,
    base_uri: &str,
) -> (Vec<T>, Results) {
    let mut results = Results {
        display_limit: limit,
        ..Results::default()
    };

    let Some(page) = page.filter(|page| *page > 0) else {
        return match limit.per_page() {
            None => {
                results.count = full.len();
                (full.to_vec(), results)
            }
            Some(per_page) => {
                // Reports the requested limit even when fewer items exist.
                results.count = per_page;
                (full[..per_page.min(full.len())].to_vec(), results)
            }
        };
    };

    results.pagination = Pagination {
        page,
        ..Pagination::first_page()
    };

    let Some(per_page) = limit.per_page() else {
        if page == 1 {
            results.count = full.len();
            return (full.to_vec(), results);
        }
        results.out_of_range = true;
        return (Vec::new(), results);
    };

    let total = full.len();
    let total_pages = total.div_ceil(per_page);
    results.pagination.total_pages = total_pages;
    results.count = total;

    if page > total_pages {
        results.out_of_range = true;
        return (Vec::new(), results);
    }

    let start = (page - 1) * per_page;
    let end = page.saturating_mul(per_page).min(total);

    if start > 0 {
        results.previous_page = Some(PageLink {
            page: page - 1,
            count: per_page,
            uri: page_uri(base_uri, page - 1),
        });
    }
    if page < total_pages {
        results.next_page = Some(PageLink {
            page: page + 1,
            count: per_page.min(total - end),
            uri: page_uri(base_uri, page + 1),
        });
    }

    (full[start..end].to_vec(), results)
}

/// Resolves `range` against a sequence of `len` items the way slicing with
/// out-of-range bounds would be clamped: bounds past the end stop at `len`,
/// and an inverted range is empty.
pub(crate) fn clamp_range(range: impl RangeBounds<usize>, len: usize) -> Range<usize> {
    let start = match range.start_bound() {
        Bound::Included(&start) => start,
        Bound::Excluded(&start) => start.saturating_add(1),
        Bound::Unbounded => 0,
    }
    .min(len);
    let end = match range.end_bound() {
        Bound::Included(&end) => end.saturating_add(1),
        Bound::Excluded(&end) => end,
        Bound::Unbounded => len,
    }
    .min(len);
    if start >= end {
        return start..start;
    }
    start..end
}

fn page_uri(base_uri: &str, page: usize) -> Option<String> {
    if base_uri.is_empty() {
        return None;
    }
    Some(base_uri.replacen(PAGE_PLACEHOLDER, &page.to_string(), 1))
}
