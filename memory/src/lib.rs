use log::debug;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum MemoryError {
    #[error("frame {frame_number} is outside of physical memory ({frames} frames)")]
    OverCapacity { frame_number: u32, frames: usize },
    #[error("offset {offset} is outside of a {frame_size} byte frame")]
    OffsetOutOfFrame { offset: usize, frame_size: usize },
}

/// Physical memory split into `frames` frames of `FRAME_SIZE` bytes.
///
/// Alongside the bytes it remembers which page was last paged into each frame.
#[derive(Debug, Clone)]
pub struct PhysicalMemory<const FRAME_SIZE: usize> {
    frames: Vec<[u8; FRAME_SIZE]>,
    residents: Vec<Option<u32>>,
}

impl<const FRAME_SIZE: usize> PhysicalMemory<FRAME_SIZE> {
    pub fn init(frames: usize) -> Self {
        Self {
            frames: vec![[0; FRAME_SIZE]; frames],
            residents: vec![None; frames],
        }
    }

    pub fn capacity(&self) -> usize {
        self.frames.len()
    }

    /// Number of frames that hold a page.
    pub fn occupied(&self) -> usize {
        self.residents.iter().filter(|r| r.is_some()).count()
    }

    pub fn resident(&self, frame_number: u32) -> Option<u32> {
        self.residents.get(frame_number as usize).copied().flatten()
    }

    pub fn check_frame(&self, frame_number: u32) -> Result<(), MemoryError> {
        if frame_number as usize >= self.frames.len() {
            return Err(MemoryError::OverCapacity {
                frame_number,
                frames: self.frames.len(),
            });
        }
        Ok(())
    }

    /// Replaces the whole content of `frame_number` with `page`.
    ///
    /// Returns the page that was resident in the frame before.
    pub fn load(
        &mut self,
        frame_number: u32,
        page_number: u32,
        page: &[u8; FRAME_SIZE],
    ) -> Result<Option<u32>, MemoryError> {
        self.check_frame(frame_number)?;
        let frame = frame_number as usize;
        self.frames[frame].copy_from_slice(page);
        let evicted = self.residents[frame].replace(page_number);
        if let Some(evicted) = evicted {
            debug!(
                "Frame {} now holds page {} (evicted page {})",
                frame_number, page_number, evicted
            );
        }
        Ok(evicted)
    }

    pub fn read_u8(&self, frame_number: u32, offset: usize) -> Result<u8, MemoryError> {
        let frame = self.frame(frame_number)?;
        frame.get(offset).copied().ok_or(MemoryError::OffsetOutOfFrame {
            offset,
            frame_size: FRAME_SIZE,
        })
    }

    pub fn frame(&self, frame_number: u32) -> Result<&[u8; FRAME_SIZE], MemoryError> {
        self.check_frame(frame_number)?;
        Ok(&self.frames[frame_number as usize])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_is_empty() {
        let mem = PhysicalMemory::<256>::init(4);
        assert_eq!(mem.capacity(), 4);
        assert_eq!(mem.occupied(), 0);
        assert_eq!(mem.resident(0), None);
        assert_eq!(mem.read_u8(3, 255).unwrap(), 0);
    }

    #[test]
    fn test_load_and_read() {
        let mut mem = PhysicalMemory::<256>::init(4);
        let mut page = [0u8; 256];
        for (i, b) in page.iter_mut().enumerate() {
            *b = i as u8;
        }
        assert_eq!(mem.load(2, 17, &page).unwrap(), None);
        assert_eq!(mem.resident(2), Some(17));
        assert_eq!(mem.occupied(), 1);
        for i in 0..256 {
            assert_eq!(mem.read_u8(2, i).unwrap(), i as u8);
        }
        assert_eq!(mem.frame(2).unwrap(), &page);
    }

    #[test]
    fn test_load_replaces_whole_frame() {
        let mut mem = PhysicalMemory::<16>::init(2);
        mem.load(0, 1, &[0xaa; 16]).unwrap();
        let evicted = mem.load(0, 5, &[0x11; 16]).unwrap();
        assert_eq!(evicted, Some(1));
        assert_eq!(mem.resident(0), Some(5));
        assert!(mem.frame(0).unwrap().iter().all(|b| *b == 0x11));
        assert_eq!(mem.occupied(), 1);
    }

    #[test]
    fn test_invalid_frame() {
        let mut mem = PhysicalMemory::<16>::init(2);
        assert_eq!(
            mem.load(2, 0, &[0; 16]),
            Err(MemoryError::OverCapacity {
                frame_number: 2,
                frames: 2
            })
        );
        assert!(mem.read_u8(7, 0).is_err());
        assert_eq!(mem.resident(7), None);
    }

    #[test]
    fn test_invalid_offset() {
        let mem = PhysicalMemory::<16>::init(2);
        assert_eq!(
            mem.read_u8(0, 16),
            Err(MemoryError::OffsetOutOfFrame {
                offset: 16,
                frame_size: 16
            })
        );
    }
}
