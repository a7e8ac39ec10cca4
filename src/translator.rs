use std::fmt;

use backing_store::BackingStore;
use log::{debug, warn};
use memory::PhysicalMemory;
use mmu::{AddressLayout, PageTable, ReplacementPolicy, ReplacementStrategy, Tlb};

use crate::{config::SimulatorConfig, error::TranslateError, stats::Statistics};

/// Where the frame of a translated address was found.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    TlbHit,
    PageTableHit,
    /// The page was loaded from the backing store; `evicted` is the page that
    /// lived in the frame before.
    PageFault { evicted: Option<u32> },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Translation {
    pub logical_address: u32,
    pub physical_address: u32,
    pub page_number: u32,
    pub frame_number: u32,
    pub value: i8,
    pub resolution: Resolution,
}

impl fmt::Display for Translation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Virtual address: {} Physical address: {} Value: {}",
            self.logical_address, self.physical_address, self.value
        )
    }
}

/// All state of one simulated address space: TLB, page table, physical
/// memory and the counters that drive LRU.
pub struct Translator<const FRAME_SIZE: usize> {
    layout: AddressLayout,
    tlb: Tlb,
    page_table: PageTable,
    memory: PhysicalMemory<FRAME_SIZE>,
    policy: Box<dyn ReplacementPolicy + Send>,
    backing_store: BackingStore<FRAME_SIZE>,
    counter: u64,
    translated: usize,
}

impl<const FRAME_SIZE: usize> Translator<FRAME_SIZE> {
    pub fn init(config: &SimulatorConfig) -> Result<Self, TranslateError> {
        config.validate(FRAME_SIZE)?;
        let backing_store = BackingStore::connect(&config.backing_store)?;
        Ok(Self {
            layout: config.layout,
            tlb: Tlb::init(config.tlb_entries),
            page_table: PageTable::init(config.page_table_entries),
            memory: PhysicalMemory::init(config.frames),
            policy: config.strategy.policy(),
            backing_store,
            counter: 0,
            translated: 0,
        })
    }

    pub fn translate(&mut self, logical_address: i64) -> Result<Translation, TranslateError> {
        let (page_number, offset) = self.layout.decompose(logical_address)?;

        let (frame_number, resolution) = match self.tlb.lookup(page_number) {
            Some(frame_number) => (frame_number, Resolution::TlbHit),
            None => {
                let (frame_number, resolution) = match self.page_table.lookup(page_number) {
                    Some(frame_number) => (frame_number, Resolution::PageTableHit),
                    None => self.page_in(page_number)?,
                };
                self.tlb.insert(page_number, frame_number);
                (frame_number, resolution)
            }
        };

        self.page_table.upsert(page_number, frame_number, self.counter)?;
        self.counter += 1;

        let value = self.memory.read_u8(frame_number, offset)? as i8;
        self.translated += 1;
        Ok(Translation {
            logical_address: logical_address as u32,
            physical_address: self.layout.compose(frame_number, offset),
            page_number,
            frame_number,
            value,
            resolution,
        })
    }

    fn page_in(&mut self, page_number: u32) -> Result<(u32, Resolution), TranslateError> {
        let frame_number = self
            .policy
            .select_frame(&self.page_table, self.memory.capacity());
        let page = self.backing_store.read_page(page_number as usize)?;
        let evicted = self.memory.load(frame_number, page_number, &page)?;
        debug!(
            "Page fault: page {} loaded into frame {} ({})",
            page_number,
            frame_number,
            self.policy.strategy()
        );
        Ok((frame_number, Resolution::PageFault { evicted }))
    }

    /// Translates every address of `addresses` in order and hands each result
    /// to `sink`.
    ///
    /// Malformed and out of range addresses are logged and skipped; any other
    /// error stops the run.
    pub fn run<I, F>(&mut self, addresses: I, mut sink: F) -> Result<Statistics, TranslateError>
    where
        I: IntoIterator<Item = Result<i64, TranslateError>>,
        F: FnMut(&Translation) -> Result<(), TranslateError>,
    {
        for address in addresses {
            match address.and_then(|address| self.translate(address)) {
                Ok(translation) => sink(&translation)?,
                Err(e) if e.is_recoverable() => warn!("Skipping address: {}", e),
                Err(e) => return Err(e),
            }
        }
        Ok(self.statistics())
    }

    pub fn statistics(&self) -> Statistics {
        Statistics {
            translated: self.translated,
            page_faults: self.page_table.faults(),
            tlb_hits: self.tlb.hits(),
            page_table_hits: self.page_table.hits(),
        }
    }

    /// Value the next page table update will be stamped with.
    pub fn counter(&self) -> u64 {
        self.counter
    }

    pub fn strategy(&self) -> ReplacementStrategy {
        self.policy.strategy()
    }

    pub fn tlb(&self) -> &Tlb {
        &self.tlb
    }

    pub fn page_table(&self) -> &PageTable {
        &self.page_table
    }

    pub fn memory(&self) -> &PhysicalMemory<FRAME_SIZE> {
        &self.memory
    }
}
