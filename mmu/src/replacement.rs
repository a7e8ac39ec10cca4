use std::{fmt, str::FromStr};

use log::debug;
use thiserror::Error;

use crate::page_table::PageTable;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown replacement strategy `{0}`, expected `fifo` or `lru`")]
pub struct UnknownStrategy(pub String);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReplacementStrategy {
    #[default]
    Fifo,
    Lru,
}

impl ReplacementStrategy {
    pub fn policy(self) -> Box<dyn ReplacementPolicy + Send> {
        match self {
            ReplacementStrategy::Fifo => Box::new(Fifo::new()),
            ReplacementStrategy::Lru => Box::new(Lru),
        }
    }
}

impl FromStr for ReplacementStrategy {
    type Err = UnknownStrategy;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "fifo" => Ok(ReplacementStrategy::Fifo),
            "lru" => Ok(ReplacementStrategy::Lru),
            other => Err(UnknownStrategy(other.to_string())),
        }
    }
}

impl fmt::Display for ReplacementStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReplacementStrategy::Fifo => write!(f, "fifo"),
            ReplacementStrategy::Lru => write!(f, "lru"),
        }
    }
}

/// Picks the frame a faulting page is loaded into.
///
/// Selection only: the caller pages the data in and updates the caches.
pub trait ReplacementPolicy {
    fn select_frame(&mut self, page_table: &PageTable, frames: usize) -> u32;

    fn strategy(&self) -> ReplacementStrategy;
}

/// Round robin over every physical frame, whatever is resident in it.
#[derive(Debug, Default, Clone)]
pub struct Fifo {
    cursor: Option<u32>,
}

impl Fifo {
    pub fn new() -> Self {
        Self { cursor: None }
    }
}

impl ReplacementPolicy for Fifo {
    fn select_frame(&mut self, _page_table: &PageTable, frames: usize) -> u32 {
        let frame_number = match self.cursor {
            Some(cursor) => (cursor + 1) % frames as u32,
            None => 0,
        };
        self.cursor = Some(frame_number);
        frame_number
    }

    fn strategy(&self) -> ReplacementStrategy {
        ReplacementStrategy::Fifo
    }
}

/// Hands out unused frames in order, then reuses the frame of the entry
/// with the oldest stamp.
#[derive(Debug, Default, Clone)]
pub struct Lru;

impl ReplacementPolicy for Lru {
    fn select_frame(&mut self, page_table: &PageTable, frames: usize) -> u32 {
        let used = page_table.len();
        if !page_table.is_full() && used < frames {
            return used as u32;
        }
        match page_table.least_recent() {
            Some(victim) => {
                debug!(
                    "LRU victim: page {} in frame {} (stamp {})",
                    victim.page_number(),
                    victim.frame_number(),
                    victim.stamp()
                );
                victim.frame_number()
            }
            // A table with no room and no rows only happens with zero capacity.
            None => 0,
        }
    }

    fn strategy(&self) -> ReplacementStrategy {
        ReplacementStrategy::Lru
    }
}
