//! Nearest-centroid tracker: per-frame assignment, creation and pruning.

use log::debug;

use crate::tracker::generation::Generation;
use crate::tracker::matching::{self, Detection};
use crate::tracker::track::Track;

/// Configuration for the Tracker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackerConfig {
    /// Y offset of the detection sub-window inside the full frame.
    pub split_line: i32,
    /// Largest squared pixel distance (exclusive) that still continues a track.
    pub centroid_threshold_square: i64,
    /// Detections whose sub-window centroid y is below this are skipped.
    pub boundary_margin: i32,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            split_line: 368,
            centroid_threshold_square: 1300,
            boundary_margin: 30,
        }
    }
}

/// Greedy nearest-centroid tracker.
///
/// The tracker owns the frame generation and the id counter; the track
/// collection itself is owned by the caller and passed through `process`.
#[derive(Debug, Clone)]
pub struct Tracker {
    config: TrackerConfig,
    generation: Generation,
    next_track_id: u64,
}

impl Tracker {
    pub fn new(config: TrackerConfig) -> Self {
        Self {
            config,
            generation: Generation::default(),
            next_track_id: 1,
        }
    }

    pub fn config(&self) -> &TrackerConfig {
        &self.config
    }

    /// Generation stamped by the most recent `process` call.
    pub fn generation(&self) -> Generation {
        self.generation
    }

    /// Assign one frame of detections to `tracks` and return the survivors.
    ///
    /// Every detection is matched against the last points the tracks had
    /// before this frame. Two detections may pick the same track, in which
    /// case the later one overwrites the earlier update. Tracks not matched
    /// in this frame are dropped.
    ///
    /// Survival is decided by generation equality alone, so a track built by
    /// the caller with the generation this call is about to produce is kept
    /// even without a matching detection. Tracks should only be created by
    /// this method or stamped with `generation()` from an earlier call.
    pub fn process(&mut self, mut tracks: Vec<Track>, detections: &[Detection]) -> Vec<Track> {
        self.generation = self.generation.next();
        let generation = self.generation;

        // Snapshot taken once; tracks created below are not candidates.
        let snapshot = matching::last_points(&tracks);

        for det in detections {
            if det.centroid.y < self.config.boundary_margin {
                debug!(
                    "Skipping detection near split line: centroid=({}, {})",
                    det.centroid.x, det.centroid.y
                );
                continue;
            }

            let rect = det.bbox.translate_y(self.config.split_line);
            let point = det.centroid.translate_y(self.config.split_line);

            match matching::nearest_within(
                &snapshot,
                point,
                self.config.centroid_threshold_square,
            ) {
                Some(index) => {
                    let track = &mut tracks[index];
                    if track.matches_generation(generation) {
                        debug!(
                            "Track {} matched twice in generation {}, keeping the later detection",
                            track.track_id(),
                            generation
                        );
                    }
                    track.update(rect, point, generation);
                }
                None => {
                    let track = Track::new(self.next_id(), rect, point, generation);
                    debug!(
                        "New track {} at ({}, {})",
                        track.track_id(),
                        point.x,
                        point.y
                    );
                    tracks.push(track);
                }
            }
        }

        let before = tracks.len();
        tracks.retain(|t| t.matches_generation(generation));
        if tracks.len() < before {
            debug!(
                "Pruned {} unmatched tracks in generation {}",
                before - tracks.len(),
                generation
            );
        }

        tracks
    }

    fn next_id(&mut self) -> u64 {
        let id = self.next_track_id;
        self.next_track_id += 1;
        id
    }
}
