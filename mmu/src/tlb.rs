use log::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TlbEntry {
    pub page_number: u32,
    pub frame_number: u32,
}

/// Fully associative translation cache with FIFO (ring buffer) replacement.
///
/// A frame is cached by at most one slot: inserting a page for a frame that
/// is already cached rewrites that slot instead of taking a new one.
#[derive(Debug, Clone)]
pub struct Tlb {
    slots: Vec<Option<TlbEntry>>,
    cursor: usize,
    hits: usize,
}

impl Tlb {
    pub fn init(capacity: usize) -> Self {
        Self {
            slots: vec![None; capacity],
            cursor: 0,
            hits: 0,
        }
    }

    pub fn lookup(&mut self, page_number: u32) -> Option<u32> {
        let frame_number = self
            .entries()
            .find(|entry| entry.page_number == page_number)
            .map(|entry| entry.frame_number)?;
        self.hits += 1;
        Some(frame_number)
    }

    pub fn insert(&mut self, page_number: u32, frame_number: u32) {
        let cached = self
            .slots
            .iter_mut()
            .flatten()
            .find(|entry| entry.frame_number == frame_number);
        if let Some(entry) = cached {
            debug!(
                "TLB: frame {} remapped from page {} to page {}",
                frame_number, entry.page_number, page_number
            );
            entry.page_number = page_number;
            return;
        }
        if self.slots.is_empty() {
            return;
        }
        self.slots[self.cursor] = Some(TlbEntry {
            page_number,
            frame_number,
        });
        self.cursor = (self.cursor + 1) % self.slots.len();
    }

    pub fn hits(&self) -> usize {
        self.hits
    }

    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Number of slots holding an entry.
    pub fn len(&self) -> usize {
        self.entries().count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn entries(&self) -> impl Iterator<Item = &TlbEntry> {
        self.slots.iter().flatten()
    }
}
