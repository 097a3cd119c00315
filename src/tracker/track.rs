//! Single tracked object (Track) for centroid tracking.

use std::collections::VecDeque;

use crate::tracker::generation::Generation;
use crate::tracker::rect::{Point, Rect};

/// Maximum number of centroids kept in a track's trajectory.
pub const TRAJECTORY_CAPACITY: usize = 10;

/// Single tracked object.
///
/// The trajectory is never empty and its last point always belongs to the
/// detection stored in `rect`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Track {
    track_id: u64,
    rect: Rect,
    trajectory: VecDeque<Point>,
    counted: bool,
    generation: Generation,
}

impl Track {
    /// Create a new track from an unmatched detection.
    ///
    /// `generation` should be the tracker's current generation; a track that
    /// carries the tracker's next generation passes the next prune even
    /// when unmatched.
    pub fn new(track_id: u64, rect: Rect, point: Point, generation: Generation) -> Self {
        let mut trajectory = VecDeque::with_capacity(TRAJECTORY_CAPACITY);
        trajectory.push_back(point);
        Self {
            track_id,
            rect,
            trajectory,
            counted: false,
            generation,
        }
    }

    /// Record a matched detection, evicting the oldest point when full.
    pub fn update(&mut self, rect: Rect, point: Point, generation: Generation) {
        if self.trajectory.len() >= TRAJECTORY_CAPACITY {
            self.trajectory.pop_front();
        }
        self.trajectory.push_back(point);
        self.rect = rect;
        self.generation = generation;
    }

    pub fn mark_counted(&mut self) {
        self.counted = true;
    }

    pub fn is_counted(&self) -> bool {
        self.counted
    }

    pub fn last_point(&self) -> Point {
        // `new` seeds one point and `update` evicts only before pushing.
        self.trajectory[self.trajectory.len() - 1]
    }

    /// The point before the last one, if the track has moved at least once.
    pub fn previous_point(&self) -> Option<Point> {
        let len = self.trajectory.len();
        if len < 2 {
            return None;
        }
        Some(self.trajectory[len - 2])
    }

    /// Whether this track was last matched in `generation`.
    pub fn matches_generation(&self, generation: Generation) -> bool {
        self.generation == generation
    }

    pub fn track_id(&self) -> u64 {
        self.track_id
    }

    pub fn rect(&self) -> Rect {
        self.rect
    }

    pub fn generation(&self) -> Generation {
        self.generation
    }

    /// Trajectory points, oldest first.
    pub fn trajectory(&self) -> impl ExactSizeIterator<Item = &Point> + '_ {
        self.trajectory.iter()
    }

    pub fn len(&self) -> usize {
        self.trajectory.len()
    }

    /// Never true for a live track.
    pub fn is_empty(&self) -> bool {
        self.trajectory.is_empty()
    }
}
