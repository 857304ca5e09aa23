//! Fixed-size, 1-based page slicing.

/// Slices page `page` (1-based) of `page_size` items out of `items`.
///
/// Returns `None` when `items` is `None`. Pages past the end, page `0`, and a
/// zero page size all yield an empty page rather than an error.
#[must_use]
pub fn paginate<T: Clone>(items: Option<&[T]>, page: usize, page_size: usize) -> Option<Vec<T>> {
    let items = items?;
    let Some(start) = page
        .checked_sub(1)
        .and_then(|index| index.checked_mul(page_size))
    else {
        return Some(Vec::new());
    };
    if start >= items.len() {
        return Some(Vec::new());
    }
    let end = start.saturating_add(page_size).min(items.len());
    Some(items[start..end].to_vec())
}

/// Number of pages needed for `total_count` items; `0` when `page_size` is `0`.
#[must_use]
pub fn total_pages(total_count: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    total_count.div_ceil(page_size)
}

/// Pagination controls are shown only when the items do not fit on one page.
#[must_use]
pub fn should_show_pagination(total_count: usize, page_size: usize) -> bool {
    page_size > 0 && total_count > page_size
}
