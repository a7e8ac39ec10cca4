/// One row of the page table: page ---> frame, plus the counter value of its
/// last use.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageTableEntry {
    page_number: u32,
    frame_number: u32,
    stamp: u64,
}

impl PageTableEntry {
    pub(super) fn new(page_number: u32, frame_number: u32, stamp: u64) -> Self {
        PageTableEntry {
            page_number,
            frame_number,
            stamp,
        }
    }

    pub fn page_number(&self) -> u32 {
        self.page_number
    }

    pub fn frame_number(&self) -> u32 {
        self.frame_number
    }

    pub fn stamp(&self) -> u64 {
        self.stamp
    }

    pub(super) fn remap(&mut self, page_number: u32, stamp: u64) {
        self.page_number = page_number;
        self.stamp = stamp;
    }
}
