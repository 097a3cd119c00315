//! Directional counting of tracks that cross a horizontal line.

use log::info;

use crate::tracker::track::Track;

/// Crossing direction relative to the image y axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Moving toward larger y (down the image)
    In,
    /// Moving toward smaller y, or level while touching the line
    Out,
}

/// A track counted during one `Counter::process` call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Crossing {
    /// Snapshot of the track after it was marked counted
    pub track: Track,
    pub direction: Direction,
}

/// Counts produced by one `Counter::process` call.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CountResult {
    pub count_in: u32,
    pub count_out: u32,
    pub newly_counted: Vec<Crossing>,
}

/// Evaluates uncounted tracks against a fixed counting line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Counter {
    counting_line: i32,
}

impl Counter {
    pub fn new(counting_line: i32) -> Self {
        Self { counting_line }
    }

    /// Direction of the last trajectory step if it touches or crosses the
    /// line, `None` otherwise. Tracks with a single point never cross.
    pub fn crossing(&self, track: &Track) -> Option<Direction> {
        let last = track.previous_point()?;
        let new = track.last_point();

        let line = self.counting_line as i64;
        let straddles = (line - new.y as i64) * (line - last.y as i64) <= 0;
        if !straddles {
            return None;
        }

        if new.y as i64 - last.y as i64 <= 0 {
            Some(Direction::Out)
        } else {
            Some(Direction::In)
        }
    }

    /// Count every uncounted track whose last step crosses the line.
    ///
    /// Counted tracks are marked so they are never counted again; no other
    /// track is modified.
    pub fn process(&self, tracks: &mut [Track]) -> CountResult {
        let mut result = CountResult::default();

        for track in tracks.iter_mut().filter(|t| !t.is_counted()) {
            let Some(direction) = self.crossing(track) else {
                continue;
            };

            match direction {
                Direction::In => result.count_in += 1,
                Direction::Out => result.count_out += 1,
            }
            track.mark_counted();
            info!(
                "Track {} crossed line y={} going {:?}",
                track.track_id(),
                self.counting_line,
                direction
            );
            result.newly_counted.push(Crossing {
                track: track.clone(),
                direction,
            });
        }

        result
    }
}
