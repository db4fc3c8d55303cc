//! Page slicing and pager metadata for listings.

use serde::Serialize;
use thiserror::Error;

/// Default number of items per page when the caller does not ask for one.
pub const DEFAULT_ITEMS_PER_PAGE: usize = 20;

/// Upper bound accepted for a caller-supplied page size.
pub const MAX_ITEMS_PER_PAGE: usize = 100;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PaginationError {
    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),
}

/// Page-count metadata reported alongside a page of items.
#[derive(Clone, Copy, Debug, Serialize, PartialEq, Eq)]
pub struct PaginationState {
    pub current_page: usize,
    pub page_size: usize,
    pub total_items: usize,
    pub total_pages: usize,
}

/// Carves one 1-indexed page out of an ordered sequence.
///
/// A page past the end is empty rather than an error, and `current_page` is
/// never clamped.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Paginator {
    page_size: usize,
    current_page: usize,
}

impl Paginator {
    pub fn new(page_size: usize, current_page: usize) -> Result<Self, PaginationError> {
        if page_size == 0 {
            return Err(PaginationError::InvalidArgument(
                "page size must be greater than zero",
            ));
        }
        if current_page == 0 {
            return Err(PaginationError::InvalidArgument(
                "page numbers start at one",
            ));
        }
        Ok(Self {
            page_size,
            current_page,
        })
    }

    pub const fn page_size(&self) -> usize {
        self.page_size
    }

    pub const fn current_page(&self) -> usize {
        self.current_page
    }

    /// Returns the requested page, clipped to the bounds of `records`.
    pub fn paginate<'a, T>(&self, records: &'a [T]) -> &'a [T] {
        let start = (self.current_page - 1).saturating_mul(self.page_size);
        if start >= records.len() {
            return &[];
        }
        let end = start.saturating_add(self.page_size).min(records.len());
        &records[start..end]
    }

    pub fn pagination_state(&self, total_items: usize) -> PaginationState {
        PaginationState {
            current_page: self.current_page,
            page_size: self.page_size,
            total_items,
            total_pages: total_items.div_ceil(self.page_size),
        }
    }
}

/// Compact list of page links around the current page, `None` marking a gap.
fn get_pages(
    total_pages: usize,
    current_page: usize,
    left_edge: usize,
    left_current: usize,
    right_current: usize,
    right_edge: usize,
) -> Vec<Option<usize>> {
    let last_page = total_pages;

    if last_page == 0 {
        return vec![];
    }

    // A page past the end is windowed as if it were the last page.
    let current_page = current_page.min(last_page);
    let mut pages = Vec::new();

    let left_end = (1 + left_edge).min(last_page + 1);
    pages.extend((1..left_end).map(Some));

    let mid_start = left_end.max(current_page.saturating_sub(left_current));
    let mid_end = current_page
        .saturating_add(right_current)
        .saturating_add(1)
        .min(last_page + 1);

    if mid_start > left_end {
        pages.push(None);
    }
    pages.extend((mid_start..mid_end).map(Some));

    let right_start = mid_end.max(last_page.saturating_sub(right_edge) + 1);

    if right_start > mid_end {
        pages.push(None);
    }
    pages.extend((right_start..=last_page).map(Some));

    pages
}

/// One page of items with its pagination metadata.
#[derive(Debug, Serialize)]
pub struct Paginated<T> {
    pub items: Vec<T>,
    pub pagination: PaginationState,
    pub pages: Vec<Option<usize>>,
}

impl<T> Paginated<T> {
    pub fn new(items: Vec<T>, pagination: PaginationState) -> Self {
        let pages = get_pages(pagination.total_pages, pagination.current_page, 2, 2, 4, 2);

        Self {
            items,
            pagination,
            pages,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kayit_records() -> Vec<String> {
        (1..=25).map(|i| format!("Test Kayıt {i}")).collect()
    }

    #[test]
    fn rejects_zero_page_size_and_page() {
        assert!(matches!(
            Paginator::new(0, 1),
            Err(PaginationError::InvalidArgument(_))
        ));
        assert!(matches!(
            Paginator::new(5, 0),
            Err(PaginationError::InvalidArgument(_))
        ));
    }

    #[test]
    fn first_page_of_twenty_five() {
        let records = kayit_records();
        let paginator = Paginator::new(5, 1).unwrap();

        let page = paginator.paginate(&records);

        assert_eq!(
            page,
            &["Test Kayıt 1", "Test Kayıt 2", "Test Kayıt 3", "Test Kayıt 4", "Test Kayıt 5"]
        );
        assert_eq!(paginator.pagination_state(records.len()).total_pages, 5);
    }

    #[test]
    fn page_past_the_end_is_empty() {
        let records = kayit_records();
        let paginator = Paginator::new(5, 6).unwrap();

        assert!(paginator.paginate(&records).is_empty());
        assert_eq!(
            paginator.pagination_state(records.len()),
            PaginationState {
                current_page: 6,
                page_size: 5,
                total_items: 25,
                total_pages: 5,
            }
        );
    }

    #[test]
    fn last_page_is_clipped() {
        let records = kayit_records();
        let page = Paginator::new(10, 3).unwrap().paginate(&records);

        assert_eq!(page.len(), 5);
        assert_eq!(page[0], "Test Kayıt 21");
    }

    #[test]
    fn zero_items_means_zero_pages() {
        let paginator = Paginator::new(20, 1).unwrap();
        assert_eq!(paginator.pagination_state(0).total_pages, 0);
        assert!(paginator.paginate::<u8>(&[]).is_empty());
    }

    #[test]
    fn pages_reassemble_the_input() {
        let records: Vec<u32> = (0..23).collect();
        for page_size in 1..=25 {
            let total_pages = Paginator::new(page_size, 1)
                .unwrap()
                .pagination_state(records.len())
                .total_pages;
            let rebuilt: Vec<u32> = (1..=total_pages)
                .flat_map(|page| {
                    Paginator::new(page_size, page)
                        .unwrap()
                        .paginate(&records)
                        .to_vec()
                })
                .collect();
            assert_eq!(rebuilt, records, "page size {page_size}");
        }
    }

    #[test]
    fn huge_page_number_does_not_overflow() {
        let records = kayit_records();
        let paginator = Paginator::new(usize::MAX, usize::MAX).unwrap();
        assert!(paginator.paginate(&records).is_empty());
    }

    #[test]
    fn page_window_collapses_distant_pages() {
        assert_eq!(get_pages(0, 1, 2, 2, 4, 2), Vec::<Option<usize>>::new());
        assert_eq!(
            get_pages(3, 1, 2, 2, 4, 2),
            vec![Some(1), Some(2), Some(3)]
        );
        assert_eq!(
            get_pages(20, 10, 2, 2, 4, 2),
            vec![
                Some(1),
                Some(2),
                None,
                Some(8),
                Some(9),
                Some(10),
                Some(11),
                Some(12),
                Some(13),
                Some(14),
                None,
                Some(19),
                Some(20),
            ]
        );
    }

    #[test]
    fn page_window_for_huge_page_number() {
        assert_eq!(
            get_pages(5, usize::MAX, 2, 2, 4, 2),
            vec![Some(1), Some(2), Some(3), Some(4), Some(5)]
        );
        assert_eq!(
            get_pages(20, usize::MAX, 2, 2, 4, 2),
            vec![Some(1), Some(2), None, Some(18), Some(19), Some(20)]
        );
        assert_eq!(get_pages(5, 6, 2, 2, 4, 2), get_pages(5, 5, 2, 2, 4, 2));
    }

    #[test]
    fn paginated_carries_state_and_window() {
        let state = Paginator::new(5, 2).unwrap().pagination_state(12);
        let page = Paginated::new(vec!["a", "b"], state);

        assert_eq!(page.pagination.total_pages, 3);
        assert_eq!(page.pages, vec![Some(1), Some(2), Some(3)]);
    }
}
