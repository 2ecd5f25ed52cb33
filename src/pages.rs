//! Page range resolution.

use std::ops::RangeInclusive;

/// A resolved, 1-based inclusive page range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRange {
    pub first: u32,
    pub last: u32,
}

impl PageRange {
    /// Clamp user-supplied bounds against the document's page count.
    ///
    /// A missing or non-positive first page becomes 1. A missing,
    /// non-positive, or too-large last page becomes the page count.
    /// A first page beyond the last yields an empty range, which is not
    /// an error: the run succeeds with no pages written.
    pub fn resolve(first: Option<i32>, last: Option<i32>, page_count: u32) -> Self {
        let first = match first {
            Some(f) if f >= 1 => f as u32,
            _ => 1,
        };
        let last = match last {
            Some(l) if l >= 1 && (l as u32) <= page_count => l as u32,
            _ => page_count,
        };
        PageRange { first, last }
    }

    /// Whether the range selects no pages at all.
    pub fn is_empty(self) -> bool {
        self.first > self.last
    }

    /// Number of pages selected.
    pub fn len(self) -> u32 {
        if self.is_empty() {
            0
        } else {
            self.last - self.first + 1
        }
    }

    /// The selected page numbers, in order.
    pub fn pages(self) -> RangeInclusive<u32> {
        self.first..=self.last
    }
}
