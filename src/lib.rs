//! Centroid tracking and directional line counting for a fixed camera.
//!
//! Each frame, a foreground detector reports `(box, centroid)` pairs for a
//! horizontal sub-window of the image. [`Tracker`] links them to existing
//! tracks by nearest centroid and drops tracks that were not seen, then
//! [`Counter`] checks each track's last step against a counting line.
//!
//! ```
//! use crosscount_rs::{Counter, Detection, Tracker, TrackerConfig};
//!
//! let mut tracker = Tracker::new(TrackerConfig {
//!     split_line: 100,
//!     ..TrackerConfig::default()
//! });
//! let counter = Counter::new(200);
//!
//! let mut tracks = Vec::new();
//! for cy in [90, 98, 106] {
//!     let det = Detection::from_tlbr(40, cy - 10, 60, cy + 10);
//!     tracks = tracker.process(tracks, &[det]);
//!     let result = counter.process(&mut tracks);
//!     if cy == 106 {
//!         assert_eq!(result.count_in, 1);
//!     }
//! }
//! ```

pub mod config;
pub mod integration;
pub mod tracker;

pub use config::{ConfigError, CountingConfig, Result};
pub use integration::{
    CountingLog, CountingPipeline, DetectionBuilder, DetectionSource, FrameReport, IntoDetections,
    LogEntry, MinSize, Totals,
};
pub use tracker::{
    CountResult, Counter, Crossing, Detection, Direction, Generation, Point, Rect, Track, Tracker,
    TrackerConfig,
};
