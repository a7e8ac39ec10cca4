use std::path::PathBuf;

use mmu::{AddressLayout, ReplacementStrategy};
use thiserror::Error;

pub const OFFSET_BITS: u32 = 8;
pub const ADDRESS_BITS: u32 = 16;
pub const FRAME_SIZE: usize = 1 << OFFSET_BITS;
pub const PHYSICAL_MEMORY_SIZE: usize = 128;
pub const PAGE_TABLE_SIZE: usize = 128;
pub const TLB_SIZE: usize = 16;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{0} must hold at least one entry")]
    ZeroCapacity(&'static str),
    #[error("{offset_bits} offset bits do not match a {frame_size} byte frame")]
    FrameSizeMismatch { offset_bits: u32, frame_size: usize },
    #[error("address width of {address_bits} bits cannot hold {offset_bits} offset bits and a page number")]
    InvalidAddressBits { address_bits: u32, offset_bits: u32 },
    #[error("fifo needs a page table ({page_table_entries} entries) at least as large as physical memory ({frames} frames)")]
    FifoTableTooSmall {
        page_table_entries: usize,
        frames: usize,
    },
}

/// Everything a translator needs at startup.
///
/// The table limits are independent of each other. [`SimulatorConfig::new`]
/// fills them with the constants above.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimulatorConfig {
    pub backing_store: PathBuf,
    pub strategy: ReplacementStrategy,
    pub layout: AddressLayout,
    pub frames: usize,
    pub page_table_entries: usize,
    pub tlb_entries: usize,
}

impl SimulatorConfig {
    pub fn new(backing_store: impl Into<PathBuf>, strategy: ReplacementStrategy) -> Self {
        Self {
            backing_store: backing_store.into(),
            strategy,
            layout: AddressLayout::new(OFFSET_BITS, ADDRESS_BITS),
            frames: PHYSICAL_MEMORY_SIZE,
            page_table_entries: PAGE_TABLE_SIZE,
            tlb_entries: TLB_SIZE,
        }
    }

    pub fn validate(&self, frame_size: usize) -> Result<(), ConfigError> {
        let offset_bits = self.layout.offset_bits();
        let address_bits = self.layout.address_bits();
        if address_bits <= offset_bits || address_bits > 32 {
            return Err(ConfigError::InvalidAddressBits {
                address_bits,
                offset_bits,
            });
        }
        if self.layout.frame_size() != frame_size {
            return Err(ConfigError::FrameSizeMismatch {
                offset_bits,
                frame_size,
            });
        }
        if self.frames == 0 {
            return Err(ConfigError::ZeroCapacity("physical memory"));
        }
        if self.page_table_entries == 0 {
            return Err(ConfigError::ZeroCapacity("page table"));
        }
        if self.strategy == ReplacementStrategy::Fifo && self.page_table_entries < self.frames {
            return Err(ConfigError::FifoTableTooSmall {
                page_table_entries: self.page_table_entries,
                frames: self.frames,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let config = SimulatorConfig::new("BACKING_STORE.bin", ReplacementStrategy::Fifo);
        assert_eq!(config.frames, 128);
        assert_eq!(config.page_table_entries, 128);
        assert_eq!(config.tlb_entries, 16);
        assert_eq!(config.layout.frame_size(), 256);
        assert_eq!(config.validate(FRAME_SIZE), Ok(()));
    }

    #[test]
    fn reject_zero_capacity() {
        let mut config = SimulatorConfig::new("store", ReplacementStrategy::Lru);
        config.frames = 0;
        assert_eq!(
            config.validate(FRAME_SIZE),
            Err(ConfigError::ZeroCapacity("physical memory"))
        );
        config.frames = 4;
        config.page_table_entries = 0;
        assert_eq!(
            config.validate(FRAME_SIZE),
            Err(ConfigError::ZeroCapacity("page table"))
        );
    }

    #[test]
    fn reject_layout_mismatch() {
        let mut config = SimulatorConfig::new("store", ReplacementStrategy::Lru);
        assert!(matches!(
            config.validate(512),
            Err(ConfigError::FrameSizeMismatch { .. })
        ));
        config.layout = AddressLayout::new(8, 8);
        assert!(matches!(
            config.validate(FRAME_SIZE),
            Err(ConfigError::InvalidAddressBits { .. })
        ));
    }

    #[test]
    fn fifo_needs_room_for_every_frame() {
        let mut config = SimulatorConfig::new("store", ReplacementStrategy::Fifo);
        config.page_table_entries = 64;
        assert_eq!(
            config.validate(FRAME_SIZE),
            Err(ConfigError::FifoTableTooSmall {
                page_table_entries: 64,
                frames: 128
            })
        );
        config.strategy = ReplacementStrategy::Lru;
        assert_eq!(config.validate(FRAME_SIZE), Ok(()));
    }
}
