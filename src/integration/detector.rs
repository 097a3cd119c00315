//! Trait for foreground detectors feeding the tracker.

use crate::tracker::{Detection, Point, Rect};

/// Minimum box size a detector should report, in pixels (exclusive).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MinSize {
    pub width: i32,
    pub height: i32,
}

/// Trait for foreground detection backends.
///
/// Implement this trait to connect a background-subtraction (or any other)
/// detector to the counting pipeline.
///
/// # Example
///
/// ```ignore
/// use crosscount_rs::{Detection, DetectionSource, MinSize};
///
/// struct MogDetector {
///     // Background model here
/// }
///
/// impl DetectionSource for MogDetector {
///     type Error = std::io::Error;
///
///     fn detect(
///         &mut self,
///         frame: &[u8],
///         width: u32,
///         height: u32,
///         min_size: MinSize,
///     ) -> Result<Vec<Detection>, Self::Error> {
///         // Update the background, denoise the mask, extract boxes
///         Ok(vec![])
///     }
/// }
/// ```
pub trait DetectionSource {
    /// Error type for detection failures.
    type Error;

    /// Run detection on one sub-window frame.
    ///
    /// # Arguments
    /// * `frame` - Raw pixels of the detection sub-window
    /// * `width` - Sub-window width in pixels
    /// * `height` - Sub-window height in pixels
    /// * `min_size` - Boxes not strictly larger than this are discarded
    ///
    /// # Returns
    /// Detections in sub-window coordinates, or an error.
    fn detect(
        &mut self,
        frame: &[u8],
        width: u32,
        height: u32,
        min_size: MinSize,
    ) -> Result<Vec<Detection>, Self::Error>;
}

/// Helper trait for converting detector-specific outputs to `Detection`.
pub trait IntoDetections {
    /// Convert the output into a vector of detections.
    fn into_detections(self) -> Vec<Detection>;
}

impl IntoDetections for Vec<Detection> {
    fn into_detections(self) -> Vec<Detection> {
        self
    }
}

impl IntoDetections for Vec<(Rect, Point)> {
    fn into_detections(self) -> Vec<Detection> {
        self.into_iter()
            .map(|(bbox, centroid)| Detection::new(bbox, centroid))
            .collect()
    }
}

impl IntoDetections for Vec<((i32, i32, i32, i32), (i32, i32))> {
    fn into_detections(self) -> Vec<Detection> {
        self.into_iter()
            .map(|(bbox, centroid)| Detection::new(bbox.into(), centroid.into()))
            .collect()
    }
}
