//! CountingPipeline for combining detection, tracking and counting.

use log::debug;

use crate::config::CountingConfig;
use crate::tracker::{Counter, Crossing, Detection, Generation, Track, Tracker, TrackerConfig};

use super::{CountingLog, DetectionSource, MinSize};

/// Running in/out totals since the pipeline was created or reset.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Totals {
    pub count_in: u64,
    pub count_out: u64,
}

/// Outcome of one processed frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameReport {
    pub generation: Generation,
    /// Tracks alive after this frame
    pub active_tracks: usize,
    /// Crossings counted in this frame
    pub count_in: u32,
    pub count_out: u32,
    pub newly_counted: Vec<Crossing>,
    /// Totals including this frame
    pub totals: Totals,
}

/// Per-frame driver: detect, track, count.
///
/// The pipeline owns the track collection between frames and threads it
/// through the tracker and then the counter.
pub struct CountingPipeline<D: DetectionSource> {
    detector: D,
    tracker: Tracker,
    counter: Counter,
    min_size: MinSize,
    tracks: Vec<Track>,
    totals: Totals,
    log: Option<CountingLog>,
}

impl<D: DetectionSource> CountingPipeline<D> {
    /// Create a new pipeline with explicit tracker settings and counting line.
    pub fn new(detector: D, config: TrackerConfig, counting_line: i32, min_size: MinSize) -> Self {
        Self {
            detector,
            tracker: Tracker::new(config),
            counter: Counter::new(counting_line),
            min_size,
            tracks: Vec::new(),
            totals: Totals::default(),
            log: None,
        }
    }

    /// Create a pipeline from a loaded configuration, with a counting log.
    pub fn from_config(detector: D, config: &CountingConfig) -> Self {
        Self::new(
            detector,
            config.tracker_config(),
            config.counting_line,
            config.min_size(),
        )
        .with_log(CountingLog::new(config.log_capacity))
    }

    /// Attach a counting log that receives every crossing.
    pub fn with_log(mut self, log: CountingLog) -> Self {
        self.log = Some(log);
        self
    }

    /// Run detection on a sub-window frame and process the result.
    ///
    /// # Arguments
    /// * `frame` - Raw pixels of the detection sub-window
    /// * `width` - Sub-window width in pixels
    /// * `height` - Sub-window height in pixels
    pub fn process_frame(
        &mut self,
        frame: &[u8],
        width: u32,
        height: u32,
    ) -> Result<FrameReport, D::Error> {
        let detections = self.detector.detect(frame, width, height, self.min_size)?;
        Ok(self.process_detections(&detections))
    }

    /// Track and count detections produced outside the pipeline.
    pub fn process_detections(&mut self, detections: &[Detection]) -> FrameReport {
        let tracks = std::mem::take(&mut self.tracks);
        self.tracks = self.tracker.process(tracks, detections);
        let generation = self.tracker.generation();

        let result = self.counter.process(&mut self.tracks);
        self.totals.count_in += u64::from(result.count_in);
        self.totals.count_out += u64::from(result.count_out);

        if let Some(log) = self.log.as_mut() {
            log.record(&result.newly_counted, generation);
        }

        debug!(
            "Frame {}: {} detections, {} tracks, in={} out={}",
            generation,
            detections.len(),
            self.tracks.len(),
            self.totals.count_in,
            self.totals.count_out
        );

        FrameReport {
            generation,
            active_tracks: self.tracks.len(),
            count_in: result.count_in,
            count_out: result.count_out,
            newly_counted: result.newly_counted,
            totals: self.totals,
        }
    }

    /// Forget all tracks, totals and logged events.
    pub fn reset(&mut self) {
        self.tracks.clear();
        self.totals = Totals::default();
        if let Some(log) = self.log.as_mut() {
            log.clear();
        }
    }

    /// Tracks alive after the last processed frame.
    pub fn tracks(&self) -> &[Track] {
        &self.tracks
    }

    pub fn totals(&self) -> Totals {
        self.totals
    }

    pub fn log(&self) -> Option<&CountingLog> {
        self.log.as_ref()
    }

    pub fn counter(&self) -> &Counter {
        &self.counter
    }

    /// Get a reference to the underlying detector.
    pub fn detector(&self) -> &D {
        &self.detector
    }

    /// Get a reference to the underlying tracker.
    pub fn tracker(&self) -> &Tracker {
        &self.tracker
    }
}
