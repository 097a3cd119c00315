//! Integration module for driving the tracker and counter from a detector.
//!
//! This module provides the detector trait, a builder for detection records,
//! the per-frame counting pipeline and a bounded log of counting events.

mod builder;
mod counting_log;
mod detector;
mod pipeline;

pub use builder::DetectionBuilder;
pub use counting_log::{CountingLog, DEFAULT_LOG_CAPACITY, LogEntry};
pub use detector::{DetectionSource, IntoDetections, MinSize};
pub use pipeline::{CountingPipeline, FrameReport, Totals};
