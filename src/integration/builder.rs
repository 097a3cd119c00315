//! Builder for creating Detection objects from various input formats.

use crate::tracker::{Detection, Point, Rect};

/// Builder for creating `Detection` objects from various input formats.
///
/// The centroid defaults to the integer center of the box unless set
/// explicitly.
#[derive(Debug, Clone, Default)]
pub struct DetectionBuilder {
    bbox: Rect,
    centroid: Option<Point>,
}

impl DetectionBuilder {
    /// Create a new detection builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set bounding box in TLBR format (x1, y1, x2, y2).
    pub fn tlbr(mut self, x1: i32, y1: i32, x2: i32, y2: i32) -> Self {
        self.bbox = Rect::new(x1, y1, x2, y2);
        self
    }

    /// Set bounding box in TLWH format (left, top, width, height).
    pub fn tlwh(mut self, x: i32, y: i32, w: i32, h: i32) -> Self {
        self.bbox = Rect::from_tlwh(x, y, w, h);
        self
    }

    /// Set bounding box in XYWH format (center_x, center_y, width, height).
    pub fn xywh(mut self, cx: i32, cy: i32, w: i32, h: i32) -> Self {
        self.bbox = Rect::new(cx - w / 2, cy - h / 2, cx - w / 2 + w, cy - h / 2 + h);
        self
    }

    /// Override the centroid reported with the box.
    pub fn centroid(mut self, x: i32, y: i32) -> Self {
        self.centroid = Some(Point::new(x, y));
        self
    }

    /// Build the final `Detection`.
    pub fn build(self) -> Detection {
        match self.centroid {
            Some(centroid) => Detection::new(self.bbox, centroid),
            None => Detection::from_rect(self.bbox),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detection_builder() {
        let det = DetectionBuilder::new().tlbr(10, 40, 30, 60).build();

        assert_eq!(det.bbox, Rect::new(10, 40, 30, 60));
        assert_eq!(det.centroid, Point::new(20, 50));
    }

    #[test]
    fn test_tlwh_and_xywh_agree() {
        let a = DetectionBuilder::new().tlwh(10, 40, 20, 20).build();
        let b = DetectionBuilder::new().xywh(20, 50, 20, 20).build();
        assert_eq!(a, b);
    }

    #[test]
    fn test_explicit_centroid() {
        let det = DetectionBuilder::new()
            .tlbr(0, 0, 40, 40)
            .centroid(5, 35)
            .build();
        assert_eq!(det.centroid, Point::new(5, 35));
    }
}
