//! Pagination over filtered lists
//!
//! [`paginate`] is a pure slice computation. [`PaginationState`] holds the
//! admin list's current page and [`LoadMoreState`] the landing page's
//! "load more" window.

use crate::utils::helpers::calculate_offset;

/// One page of a filtered sequence plus the counters shown under the list
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub current_page: usize,
    pub total_pages: usize,
    pub total_count: usize,
    /// 1-based position of the first item shown, 0 when the page is empty
    pub start_display: usize,
    /// 1-based position of the last item shown, 0 when the page is empty
    pub end_display: usize,
}

impl<T> Page<T> {
    pub fn has_previous(&self) -> bool {
        self.current_page > 1
    }

    pub fn has_next(&self) -> bool {
        self.current_page < self.total_pages
    }

    /// "Showing X to Y of Z"
    pub fn summary(&self) -> String {
        format!("Showing {} to {} of {}", self.start_display, self.end_display, self.total_count)
    }
}

/// Number of pages needed for `count` records; zero records means zero pages
pub fn total_pages(count: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    count.div_ceil(page_size)
}

/// Slice out page `current_page` (1-based) of `records`
pub fn paginate<T: Clone>(records: &[T], page_size: usize, current_page: usize) -> Page<T> {
    let total_count = records.len();
    let start = calculate_offset(current_page, page_size).min(total_count);
    let end = start.saturating_add(page_size).min(total_count);
    let items = records[start..end].to_vec();

    let (start_display, end_display) = if items.is_empty() {
        (0, 0)
    } else {
        (start + 1, end)
    };

    Page {
        items,
        current_page,
        total_pages: total_pages(total_count, page_size),
        total_count,
        start_display,
        end_display,
    }
}

/// Current page of an admin list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaginationState {
    current_page: usize,
    page_size: usize,
}

impl PaginationState {
    pub fn new(page_size: usize) -> Self {
        Self { current_page: 1, page_size: page_size.max(1) }
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Back to the first page; done whenever a filter changes
    pub fn reset(&mut self) {
        self.current_page = 1;
    }

    /// Keep the page within `[1, max(1, total_pages)]`
    pub fn clamp(&mut self, total_pages: usize) {
        self.current_page = self.current_page.clamp(1, total_pages.max(1));
    }

    /// Advance one page; returns false (and does nothing) on the last page
    pub fn next(&mut self, total_pages: usize) -> bool {
        if self.current_page < total_pages {
            self.current_page += 1;
            true
        } else {
            false
        }
    }

    /// Go back one page; returns false (and does nothing) on the first page
    pub fn previous(&mut self) -> bool {
        if self.current_page > 1 {
            self.current_page -= 1;
            true
        } else {
            false
        }
    }

    /// Jump to `page` if it exists
    pub fn go_to(&mut self, page: usize, total_pages: usize) -> bool {
        if (1..=total_pages).contains(&page) {
            self.current_page = page;
            true
        } else {
            false
        }
    }

    pub fn page_of<T: Clone>(&self, records: &[T]) -> Page<T> {
        paginate(records, self.page_size, self.current_page)
    }
}

/// Growing window used by the public event list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadMoreState {
    display_count: usize,
    initial: usize,
    step: usize,
}

impl LoadMoreState {
    pub fn new(initial: usize, step: usize) -> Self {
        Self { display_count: initial, initial, step: step.max(1) }
    }

    pub fn display_count(&self) -> usize {
        self.display_count
    }

    pub fn reset(&mut self) {
        self.display_count = self.initial;
    }

    pub fn load_more(&mut self) {
        self.display_count += self.step;
    }

    pub fn has_more(&self, total: usize) -> bool {
        self.display_count < total
    }

    /// The leading `display_count` records
    pub fn window<'a, T>(&self, records: &'a [T]) -> &'a [T] {
        &records[..self.display_count.min(records.len())]
    }
}
