use std::{io, process::ExitCode};

use backing_store::BackingStoreError;
use memory::MemoryError;
use mmu::{AddressError, PageTableError};
use thiserror::Error;

use crate::config::ConfigError;

#[derive(Debug, Error)]
pub enum TranslateError {
    #[error("invalid logical address: {0}")]
    InvalidAddress(#[from] AddressError),
    #[error("line {line_number}: `{text}` is not a logical address")]
    Malformed { line_number: usize, text: String },
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),
    #[error("backing store: {0}")]
    BackingStore(#[from] BackingStoreError),
    #[error("page table: {0}")]
    PageTable(#[from] PageTableError),
    #[error("physical memory: {0}")]
    Memory(#[from] MemoryError),
    #[error("cannot read addresses: {0}")]
    Input(#[from] io::Error),
    #[error("cannot write results: {0}")]
    Output(io::Error),
}

impl TranslateError {
    /// Errors that only concern a single input line; the run skips them.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            TranslateError::InvalidAddress(_) | TranslateError::Malformed { .. }
        )
    }

    pub fn exit_code(&self) -> ExitCode {
        match self {
            TranslateError::InvalidAddress(_) | TranslateError::Malformed { .. } => {
                ExitCode::from(1)
            }
            TranslateError::Config(_) => ExitCode::from(2),
            TranslateError::BackingStore(_) => ExitCode::from(3),
            TranslateError::PageTable(_) | TranslateError::Memory(_) => ExitCode::from(4),
            TranslateError::Input(_) | TranslateError::Output(_) => ExitCode::from(5),
        }
    }
}
