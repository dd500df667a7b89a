//! Client-side paging over a fully fetched list.
//!
//! The server always returns the whole list; a [`Pager`] only decides which slice
//! is shown. The spells viewer counts pages from 1, the skill picker from 0.
//! Either way the last page is reachable exactly once: advancing from it is a no-op,
//! so no list ever shows an empty page past its end.

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pager {
    current: usize,
    first: usize,
    page_size: usize,
}

/// `ceil(len / page_size)`; zero for an empty list.
pub fn page_count(len: usize, page_size: usize) -> usize {
    len.div_ceil(page_size.max(1))
}

impl Pager {
    pub fn one_based(page_size: usize) -> Self {
        Self {
            current: 1,
            first: 1,
            page_size: page_size.max(1),
        }
    }

    pub fn zero_based(page_size: usize) -> Self {
        Self {
            current: 0,
            first: 0,
            page_size: page_size.max(1),
        }
    }

    /// Page number as shown to the player.
    pub fn current(&self) -> usize {
        self.current
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    fn index(&self) -> usize {
        self.current - self.first
    }

    pub fn reset(&mut self) {
        self.current = self.first;
    }

    pub fn is_first(&self) -> bool {
        self.current == self.first
    }

    /// No further page exists for a list of `len` items.
    pub fn is_last(&self, len: usize) -> bool {
        self.index() + 1 >= page_count(len, self.page_size)
    }

    /// Half-open item range of the current page, clipped to `len`.
    pub fn bounds(&self, len: usize) -> (usize, usize) {
        let start = (self.index() * self.page_size).min(len);
        let end = (start + self.page_size).min(len);
        (start, end)
    }

    pub fn slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        let (start, end) = self.bounds(items.len());
        &items[start..end]
    }

    /// Step forward if a next page exists. Returns whether the page changed.
    pub fn advance(&mut self, len: usize) -> bool {
        if self.is_last(len) {
            return false;
        }
        self.current += 1;
        true
    }

    /// Step back unless on the first page. Returns whether the page changed.
    pub fn retreat(&mut self) -> bool {
        if self.is_first() {
            return false;
        }
        self.current -= 1;
        true
    }

    /// Jump to `page`, clamped into the pages a list of `len` items has.
    pub fn jump_to(&mut self, page: usize, len: usize) {
        let last = self.first + page_count(len, self.page_size).max(1) - 1;
        self.current = page.clamp(self.first, last);
    }
}
