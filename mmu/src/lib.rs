pub mod address;
pub mod page_table;
pub mod replacement;
pub mod tlb;

pub use address::{AddressError, AddressLayout};
pub use page_table::{PageTable, PageTableEntry, PageTableError};
pub use replacement::{Fifo, Lru, ReplacementPolicy, ReplacementStrategy, UnknownStrategy};
pub use tlb::{Tlb, TlbEntry};
