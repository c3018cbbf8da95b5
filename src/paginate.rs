//! Pagination of ranked result sets.
//!
//! Pure slicing logic for the web-facing caller: 1-indexed pages, a
//! clamped lower bound, and empty slices (never errors) for pages past
//! the end.

use crate::types::RankedResult;

/// Slice a ranked result set into one page.
///
/// `page_number` is 1-indexed; 0 is clamped to page 1. Returns the page
/// slice and the total page count, where `total_pages` is
/// `ceil(len / page_size)` and 0 for an empty result set. A page number
/// beyond the last page yields an empty slice with `total_pages`
/// unchanged.
pub fn page(
    results: &[RankedResult],
    page_number: usize,
    page_size: usize,
) -> (Vec<RankedResult>, usize) {
    if page_size == 0 {
        // Unreachable through the pipeline — config validation rejects it.
        return (Vec::new(), 0);
    }

    let total_pages = (results.len() + page_size - 1) / page_size;
    let page_number = page_number.max(1);
    let start = (page_number - 1).saturating_mul(page_size);

    if start >= results.len() {
        return (Vec::new(), total_pages);
    }

    let end = (start + page_size).min(results.len());
    (results[start..end].to_vec(), total_pages)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn results(count: usize) -> Vec<RankedResult> {
        (0..count)
            .map(|i| RankedResult {
                url: format!("https://example{i}.com"),
                text: format!("text {i}"),
                score: 1.0 - i as f32 * 0.01,
            })
            .collect()
    }

    #[test]
    fn first_page_of_23_results_has_10_items_and_3_pages() {
        let set = results(23);
        let (slice, total_pages) = page(&set, 1, 10);
        assert_eq!(slice.len(), 10);
        assert_eq!(total_pages, 3);
        assert_eq!(slice[0].url, "https://example0.com");
    }

    #[test]
    fn last_partial_page_has_remainder() {
        let set = results(23);
        let (slice, total_pages) = page(&set, 3, 10);
        assert_eq!(slice.len(), 3);
        assert_eq!(total_pages, 3);
        assert_eq!(slice[0].url, "https://example20.com");
    }

    #[test]
    fn page_beyond_end_is_empty_with_total_unchanged() {
        let set = results(23);
        let (slice, total_pages) = page(&set, 4, 10);
        assert!(slice.is_empty());
        assert_eq!(total_pages, 3);
    }

    #[test]
    fn page_zero_behaves_like_page_one() {
        let set = results(23);
        let (from_zero, total_zero) = page(&set, 0, 10);
        let (from_one, total_one) = page(&set, 1, 10);
        assert_eq!(from_zero.len(), from_one.len());
        assert_eq!(total_zero, total_one);
        assert_eq!(from_zero[0].url, from_one[0].url);
    }

    #[test]
    fn empty_results_have_zero_pages() {
        let (slice, total_pages) = page(&[], 1, 10);
        assert!(slice.is_empty());
        assert_eq!(total_pages, 0);
    }

    #[test]
    fn exact_multiple_has_no_partial_page() {
        let set = results(20);
        let (slice, total_pages) = page(&set, 2, 10);
        assert_eq!(slice.len(), 10);
        assert_eq!(total_pages, 2);
        let (beyond, _) = page(&set, 3, 10);
        assert!(beyond.is_empty());
    }

    #[test]
    fn single_result_single_page() {
        let set = results(1);
        let (slice, total_pages) = page(&set, 1, 10);
        assert_eq!(slice.len(), 1);
        assert_eq!(total_pages, 1);
    }

    #[test]
    fn page_size_one_gives_one_page_per_result() {
        let set = results(3);
        let (slice, total_pages) = page(&set, 2, 1);
        assert_eq!(slice.len(), 1);
        assert_eq!(total_pages, 3);
        assert_eq!(slice[0].url, "https://example1.com");
    }

    #[test]
    fn slices_preserve_ranked_order() {
        let set = results(15);
        let (first, _) = page(&set, 1, 10);
        let (second, _) = page(&set, 2, 10);
        assert_eq!(first[9].url, "https://example9.com");
        assert_eq!(second[0].url, "https://example10.com");
    }
}
