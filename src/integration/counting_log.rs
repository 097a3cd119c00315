//! Bounded history of counting events for snapshot consumers.

use std::collections::VecDeque;

use crate::tracker::{Crossing, Direction, Generation, Rect};

/// Default number of events kept by a [`CountingLog`].
pub const DEFAULT_LOG_CAPACITY: usize = 8;

/// One counted track, as recorded at the frame it crossed the line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogEntry {
    pub track_id: u64,
    /// Box in full-frame coordinates
    pub rect: Rect,
    pub direction: Direction,
    pub generation: Generation,
}

impl LogEntry {
    /// Box in detection sub-window coordinates, for cropping the frame that
    /// was handed to the detector.
    pub fn crop_rect(&self, split_line: i32) -> Rect {
        self.rect.translate_y(-split_line)
    }
}

/// Most recent counting events, oldest first.
#[derive(Debug, Clone)]
pub struct CountingLog {
    entries: VecDeque<LogEntry>,
    capacity: usize,
}

impl Default for CountingLog {
    fn default() -> Self {
        Self::new(DEFAULT_LOG_CAPACITY)
    }
}

impl CountingLog {
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Append the crossings of one frame.
    ///
    /// If the batch would overflow the log, as many old entries as the batch
    /// holds are dropped first.
    pub fn record(&mut self, crossings: &[Crossing], generation: Generation) {
        if crossings.is_empty() {
            return;
        }
        if self.entries.len() + crossings.len() > self.capacity {
            let evict = crossings.len().min(self.entries.len());
            self.entries.drain(..evict);
        }

        for crossing in crossings {
            self.entries.push_back(LogEntry {
                track_id: crossing.track.track_id(),
                rect: crossing.track.rect(),
                direction: crossing.direction,
                generation,
            });
        }

        while self.entries.len() > self.capacity {
            self.entries.pop_front();
        }
    }

    /// Entries, oldest first.
    pub fn entries(&self) -> impl ExactSizeIterator<Item = &LogEntry> + '_ {
        self.entries.iter()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
