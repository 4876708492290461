//! # Pager
//!
//! `PageState` is the cursor that drives every listing request. It is only
//! ever replaced through the pager helpers below, each of which returns
//! `None` when the move would be a no-op so the controller can skip the fetch.

use crate::api::PageQuery;

/// Rows-per-page choices offered by the pager.
pub const PAGE_SIZE_OPTIONS: [u32; 4] = [5, 10, 25, 50];

pub const DEFAULT_PAGE_SIZE: u32 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageState {
    pub page_index: u32,
    pub page_size: u32,
}

impl Default for PageState {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

impl PageState {
    /// Page zero at the given size, snapped to the nearest offered option.
    pub fn new(page_size: u32) -> Self {
        Self {
            page_index: 0,
            page_size: snap_page_size(page_size),
        }
    }

    /// Offset of the first record on this page.
    pub fn first(&self) -> u64 {
        self.page_index as u64 * self.page_size as u64
    }

    /// Query for the listing endpoint (1-based page number).
    pub fn query(&self) -> PageQuery {
        PageQuery {
            page: self.page_index + 1,
            limit: self.page_size,
        }
    }

    /// Number of pages needed for `total` records.
    pub fn page_count(&self, total: u64) -> u64 {
        total.div_ceil(self.page_size as u64)
    }

    /// Next page. Unbounded while the total is unknown.
    pub fn next(&self, total: Option<u64>) -> Option<Self> {
        let target = self.page_index.checked_add(1)?;
        if let Some(total) = total
            && target as u64 >= self.page_count(total)
        {
            return None;
        }
        Some(Self {
            page_index: target,
            ..*self
        })
    }

    pub fn prev(&self) -> Option<Self> {
        let target = self.page_index.checked_sub(1)?;
        Some(Self {
            page_index: target,
            ..*self
        })
    }

    pub fn first_page(&self) -> Option<Self> {
        if self.page_index == 0 {
            return None;
        }
        Some(Self {
            page_index: 0,
            ..*self
        })
    }

    /// Last page for a known total. `None` if already there or nothing to show.
    pub fn last_page(&self, total: Option<u64>) -> Option<Self> {
        let count = self.page_count(total?);
        let last = u32::try_from(count.checked_sub(1)?).unwrap_or(u32::MAX);
        if last == self.page_index {
            return None;
        }
        Some(Self {
            page_index: last,
            ..*self
        })
    }

    /// Changes the page size, keeping the first visible record on screen.
    pub fn with_page_size(&self, page_size: u32) -> Self {
        let page_size = snap_page_size(page_size);
        let page_index = u32::try_from(self.first() / page_size as u64).unwrap_or(u32::MAX);
        Self {
            page_index,
            page_size,
        }
    }

    /// Moves to the next rows-per-page option, wrapping around.
    pub fn cycle_page_size(&self) -> Self {
        let position = PAGE_SIZE_OPTIONS
            .iter()
            .position(|&size| size == self.page_size)
            .unwrap_or(0);
        let next = PAGE_SIZE_OPTIONS[(position + 1) % PAGE_SIZE_OPTIONS.len()];
        self.with_page_size(next)
    }
}

/// Picks the offered page size closest to `requested`; ties go to the smaller one.
pub fn snap_page_size(requested: u32) -> u32 {
    PAGE_SIZE_OPTIONS
        .iter()
        .copied()
        .min_by_key(|&size| size.abs_diff(requested))
        .unwrap_or(DEFAULT_PAGE_SIZE)
}
