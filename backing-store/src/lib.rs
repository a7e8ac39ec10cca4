use std::{
    fs::File,
    io::{self, Read, Seek, SeekFrom, Write},
    path::{Path, PathBuf},
};

use log::info;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum BackingStoreError {
    #[error("cannot open backing store {}: {source}", .path.display())]
    Open { path: PathBuf, source: io::Error },
    #[error("cannot seek to page {page_number}: {source}")]
    Seek { page_number: usize, source: io::Error },
    #[error("page {page_number} is incomplete in the backing store")]
    IncompleteRead { page_number: usize },
    #[error("cannot read page {page_number}: {source}")]
    Read { page_number: usize, source: io::Error },
    #[error("cannot write backing store {}: {source}", .path.display())]
    Write { path: PathBuf, source: io::Error },
}

/// Read-only view of the file that holds every page of the simulated program.
///
/// The file is not held open: every [`BackingStore::read_page`] opens, seeks
/// and closes it again.
#[derive(Debug, Clone)]
pub struct BackingStore<const FRAME_SIZE: usize> {
    path: PathBuf,
}

impl<const FRAME_SIZE: usize> BackingStore<FRAME_SIZE> {
    /// Writes `pages` back to back into a fresh file at `path`.
    pub fn create(
        path: impl AsRef<Path>,
        pages: &[[u8; FRAME_SIZE]],
    ) -> Result<Self, BackingStoreError> {
        let path = path.as_ref().to_path_buf();
        let write_error = |source: io::Error| BackingStoreError::Write {
            path: path.clone(),
            source,
        };
        let mut file = File::options()
            .truncate(true)
            .write(true)
            .create(true)
            .open(&path)
            .map_err(write_error)?;
        for page in pages {
            file.write_all(page).map_err(write_error)?;
        }
        file.sync_all().map_err(write_error)?;
        info!(
            "Created backing store {} with {} pages",
            path.display(),
            pages.len()
        );
        Ok(Self { path })
    }

    pub fn connect(path: impl AsRef<Path>) -> Result<Self, BackingStoreError> {
        let path = path.as_ref().to_path_buf();
        let store = Self { path };
        store.open()?;
        Ok(store)
    }

    /// Number of whole pages currently in the file.
    pub fn page_count(&self) -> Result<usize, BackingStoreError> {
        let file = self.open()?;
        let length = file
            .metadata()
            .map_err(|source| BackingStoreError::Open {
                path: self.path.clone(),
                source,
            })?
            .len();
        Ok(length as usize / FRAME_SIZE)
    }

    pub fn read_page(
        &self,
        page_number: usize,
    ) -> Result<Box<[u8; FRAME_SIZE]>, BackingStoreError> {
        let mut file = self.open()?;
        info!("Start reading page[{}]", page_number);
        file.seek(SeekFrom::Start((page_number * FRAME_SIZE) as u64))
            .map_err(|source| BackingStoreError::Seek {
                page_number,
                source,
            })?;
        let mut buf = Box::new([0; FRAME_SIZE]);
        file.read_exact(&mut *buf).map_err(|source| match source.kind() {
            io::ErrorKind::UnexpectedEof => BackingStoreError::IncompleteRead { page_number },
            _ => BackingStoreError::Read {
                page_number,
                source,
            },
        })?;
        info!("Done reading page[{}]", page_number);
        Ok(buf)
    }

    fn open(&self) -> Result<File, BackingStoreError> {
        File::open(&self.path).map_err(|source| BackingStoreError::Open {
            path: self.path.clone(),
            source,
        })
    }
}
