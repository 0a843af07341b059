//! Page arithmetic for the catalog listing

/// Position within a paginated collection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Pagination {
    pub(crate) page: u32,
    pub(crate) page_size: u32,
    pub(crate) total_count: u64,
}

impl Pagination {
    pub(crate) fn new(page: u32, page_size: u32, total_count: u64) -> Self {
        Self {
            page: page.max(1),
            page_size: page_size.max(1),
            total_count,
        }
    }

    pub(crate) fn total_pages(&self) -> u32 {
        let pages = self.total_count.div_ceil(u64::from(self.page_size));
        u32::try_from(pages).unwrap_or(u32::MAX)
    }

    /// 1-based inclusive range of items shown on this page
    pub(crate) fn showing(&self) -> (u64, u64) {
        let size = u64::from(self.page_size);
        let start = u64::from(self.page - 1) * size + 1;
        let end = (u64::from(self.page) * size).min(self.total_count);
        (start, end)
    }

    pub(crate) fn has_prev(&self) -> bool {
        self.page > 1
    }

    pub(crate) fn has_next(&self) -> bool {
        self.page < self.total_pages()
    }

    pub(crate) fn is_last_page(&self) -> bool {
        let total = self.total_pages();
        total > 1 && self.page == total
    }

    /// Page past the end of a non-empty collection, to be pulled back to the last one
    pub(crate) fn overshoots(&self) -> bool {
        let total = self.total_pages();
        total > 0 && self.page > total
    }
}

/// Page to request after "previous", never below 1
pub(crate) fn prev_page(page: u32) -> u32 {
    page.saturating_sub(1).max(1)
}

/// Page to request after "next"; the total is unknown until the page arrives
pub(crate) fn next_page(page: u32) -> u32 {
    page.saturating_add(1)
}
