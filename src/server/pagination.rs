pub const QUESTIONS_PER_PAGE: usize = 10;

/// Window for a 1-based page over an already-ordered result set.
/// Pages past the data (and page 0) come back empty; callers report an
/// empty page as "not found".
pub fn paginate<T>(page: usize, items: &[T]) -> &[T] {
    // the page number comes straight off the query string, so the window
    // arithmetic must not wrap for huge values
    let start = match page
        .checked_sub(1)
        .and_then(|p| p.checked_mul(QUESTIONS_PER_PAGE))
    {
        Some(start) if start < items.len() => start,
        _ => return &[],
    };
    let end = (start + QUESTIONS_PER_PAGE).min(items.len());
    &items[start..end]
}
