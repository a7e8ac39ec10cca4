use thiserror::Error;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum AddressError {
    #[error("logical address {0} is negative")]
    Negative(i64),
    #[error("logical address {address} does not fit in {address_bits} bits")]
    OutOfRange { address: i64, address_bits: u32 },
}

/// Bit split of a logical address into `| page number | offset |`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AddressLayout {
    offset_bits: u32,
    address_bits: u32,
}

impl Default for AddressLayout {
    /// 16 bit addresses with 256 byte pages.
    fn default() -> Self {
        Self {
            offset_bits: 8,
            address_bits: 16,
        }
    }
}

impl AddressLayout {
    pub fn new(offset_bits: u32, address_bits: u32) -> Self {
        Self {
            offset_bits,
            address_bits,
        }
    }

    pub fn offset_bits(&self) -> u32 {
        self.offset_bits
    }

    pub fn address_bits(&self) -> u32 {
        self.address_bits
    }

    pub fn frame_size(&self) -> usize {
        1 << self.offset_bits
    }

    pub fn page_count(&self) -> usize {
        1 << (self.address_bits - self.offset_bits)
    }

    /// Splits `address` into `(page_number, offset)`.
    pub fn decompose(&self, address: i64) -> Result<(u32, usize), AddressError> {
        if address < 0 {
            return Err(AddressError::Negative(address));
        }
        if address >= 1i64 << self.address_bits {
            return Err(AddressError::OutOfRange {
                address,
                address_bits: self.address_bits,
            });
        }
        let offset = (address & ((1 << self.offset_bits) - 1)) as usize;
        let page_number = (address >> self.offset_bits) as u32;
        Ok((page_number, offset))
    }

    pub fn compose(&self, frame_number: u32, offset: usize) -> u32 {
        (frame_number << self.offset_bits) | offset as u32
    }
}
