use std::slice;

use super::PageTableEntry;

/// Walks the occupied entries of a page table in insertion order.
pub struct PageTableIterator<'a> {
    entries: slice::Iter<'a, PageTableEntry>,
}

impl<'a> PageTableIterator<'a> {
    pub(super) fn new(entries: &'a [PageTableEntry]) -> Self {
        Self {
            entries: entries.iter(),
        }
    }
}

impl<'a> Iterator for PageTableIterator<'a> {
    type Item = &'a PageTableEntry;

    fn next(&mut self) -> Option<Self::Item> {
        self.entries.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.entries.size_hint()
    }
}

impl ExactSizeIterator for PageTableIterator<'_> {}
