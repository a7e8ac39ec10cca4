mod iter;
mod page_table_entry;

use log::debug;
use thiserror::Error;

pub use iter::PageTableIterator;
pub use page_table_entry::PageTableEntry;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum PageTableError {
    #[error("page table is full, cannot map page {page_number} to frame {frame_number}")]
    Full { page_number: u32, frame_number: u32 },
}

/// Bounded page ---> frame table, scanned linearly.
///
/// Entries are appended in order and never removed; a frame that is reused
/// keeps its row and only gets a new page number and stamp.
#[derive(Debug, Clone)]
pub struct PageTable {
    capacity: usize,
    entries: Vec<PageTableEntry>,
    faults: usize,
    hits: usize,
}

impl PageTable {
    pub fn init(capacity: usize) -> Self {
        Self {
            capacity,
            entries: Vec::with_capacity(capacity),
            faults: 0,
            hits: 0,
        }
    }

    /// Frame holding `page_number`. A miss is counted as a page fault.
    pub fn lookup(&mut self, page_number: u32) -> Option<u32> {
        match self.get_entry(page_number).map(|entry| entry.frame_number()) {
            Some(frame_number) => {
                self.hits += 1;
                Some(frame_number)
            }
            None => {
                self.faults += 1;
                None
            }
        }
    }

    pub fn get_entry(&self, page_number: u32) -> Option<&PageTableEntry> {
        self.entries
            .iter()
            .find(|entry| entry.page_number() == page_number)
    }

    /// Maps `page_number` to `frame_number`, reusing the row of that frame
    /// when there is one.
    pub fn upsert(
        &mut self,
        page_number: u32,
        frame_number: u32,
        stamp: u64,
    ) -> Result<(), PageTableError> {
        if let Some(entry) = self
            .entries
            .iter_mut()
            .find(|entry| entry.frame_number() == frame_number)
        {
            if entry.page_number() != page_number {
                debug!(
                    "Page table: frame {} remapped from page {} to page {}",
                    frame_number,
                    entry.page_number(),
                    page_number
                );
            }
            entry.remap(page_number, stamp);
            return Ok(());
        }
        if self.is_full() {
            return Err(PageTableError::Full {
                page_number,
                frame_number,
            });
        }
        self.entries
            .push(PageTableEntry::new(page_number, frame_number, stamp));
        Ok(())
    }

    /// Entry with the smallest stamp, the first one in table order on ties.
    pub fn least_recent(&self) -> Option<&PageTableEntry> {
        self.entries.iter().min_by_key(|entry| entry.stamp())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn is_full(&self) -> bool {
        self.entries.len() >= self.capacity
    }

    pub fn faults(&self) -> usize {
        self.faults
    }

    pub fn hits(&self) -> usize {
        self.hits
    }

    pub fn iter(&self) -> PageTableIterator<'_> {
        PageTableIterator::new(&self.entries)
    }
}

#[cfg(test)]
mod tests {
    use super::PageTable;
    use super::PageTableError;

    #[test]
    fn create_mapping() {
        let mut table = PageTable::init(8);
        table.upsert(12, 0, 0).unwrap();
        table.upsert(4, 1, 1).unwrap();
        assert_eq!(table.lookup(12), Some(0));
        assert_eq!(table.lookup(4), Some(1));
        assert_eq!(table.len(), 2);
        assert_eq!(table.hits(), 2);
        assert_eq!(table.faults(), 0);
    }

    #[test]
    fn miss_counts_fault() {
        let mut table = PageTable::init(8);
        assert_eq!(table.lookup(3), None);
        table.upsert(3, 0, 0).unwrap();
        assert_eq!(table.lookup(9), None);
        assert_eq!(table.faults(), 2);
        assert_eq!(table.hits(), 0);
    }

    #[test]
    fn upsert_same_frame_overwrites_row() {
        let mut table = PageTable::init(8);
        table.upsert(12, 3, 0).unwrap();
        table.upsert(12, 3, 5).unwrap();
        assert_eq!(table.len(), 1);
        assert_eq!(table.get_entry(12).unwrap().stamp(), 5);

        table.upsert(40, 3, 6).unwrap();
        assert_eq!(table.len(), 1);
        assert_eq!(table.lookup(12), None);
        assert_eq!(table.lookup(40), Some(3));
        assert_eq!(table.get_entry(40).unwrap().stamp(), 6);
    }

    #[test]
    fn full_table_rejects_new_frame() {
        let mut table = PageTable::init(2);
        table.upsert(0, 0, 0).unwrap();
        table.upsert(1, 1, 1).unwrap();
        assert!(table.is_full());
        assert_eq!(
            table.upsert(2, 2, 2),
            Err(PageTableError::Full {
                page_number: 2,
                frame_number: 2
            })
        );
        assert!(table.upsert(2, 0, 2).is_ok());
        assert_eq!(table.lookup(2), Some(0));
    }

    #[test]
    fn least_recent_entry() {
        let mut table = PageTable::init(4);
        assert!(table.least_recent().is_none());
        table.upsert(10, 0, 4).unwrap();
        table.upsert(11, 1, 2).unwrap();
        table.upsert(12, 2, 7).unwrap();
        table.upsert(13, 3, 2).unwrap();
        let oldest = table.least_recent().unwrap();
        assert_eq!(oldest.page_number(), 11);
        assert_eq!(oldest.frame_number(), 1);

        table.upsert(11, 1, 9).unwrap();
        assert_eq!(table.least_recent().unwrap().page_number(), 13);
    }

    #[test]
    fn iterate_in_insertion_order() {
        let mut table = PageTable::init(4);
        table.upsert(5, 2, 0).unwrap();
        table.upsert(6, 0, 1).unwrap();
        table.upsert(7, 1, 2).unwrap();
        let pages: Vec<u32> = table.iter().map(|e| e.page_number()).collect();
        assert_eq!(pages, vec![5, 6, 7]);
        assert_eq!(table.iter().len(), 3);
    }
}
