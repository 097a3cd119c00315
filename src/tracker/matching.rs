//! Detection records and nearest-centroid matching.

use ndarray::{Array1, Array2, ArrayView1};

use crate::tracker::rect::{Point, Rect};
use crate::tracker::track::Track;

/// Detection input for the tracker.
///
/// Coordinates are relative to the detection sub-window; the tracker moves
/// them into full-frame coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Detection {
    /// Bounding box in TLBR format (x1, y1, x2, y2)
    pub bbox: Rect,
    /// Centroid of the box
    pub centroid: Point,
}

impl Detection {
    pub fn new(bbox: Rect, centroid: Point) -> Self {
        Self { bbox, centroid }
    }

    /// Build a detection whose centroid is the integer center of `bbox`.
    pub fn from_rect(bbox: Rect) -> Self {
        Self {
            bbox,
            centroid: bbox.center(),
        }
    }

    pub fn from_tlbr(x1: i32, y1: i32, x2: i32, y2: i32) -> Self {
        Self::from_rect(Rect::new(x1, y1, x2, y2))
    }

    /// Whether the box is strictly larger than the given minimum size.
    pub fn exceeds(&self, min_width: i32, min_height: i32) -> bool {
        self.bbox.width() > min_width && self.bbox.height() > min_height
    }
}

/// Collect the last point of every track into an (N, 2) matrix of x, y.
pub fn last_points(tracks: &[Track]) -> Array2<i64> {
    let mut points = Array2::zeros((tracks.len(), 2));
    for (i, track) in tracks.iter().enumerate() {
        let point = track.last_point();
        points[[i, 0]] = point.x as i64;
        points[[i, 1]] = point.y as i64;
    }
    points
}

/// Squared Euclidean distance from `point` to every row of `points`.
pub fn distance_squared(points: &Array2<i64>, point: Point) -> Array1<i64> {
    let dx = points.column(0).mapv(|x| x - point.x as i64);
    let dy = points.column(1).mapv(|y| y - point.y as i64);
    &dx * &dx + &dy * &dy
}

/// Index and value of the smallest entry; ties go to the lowest index.
pub fn argmin(values: ArrayView1<'_, i64>) -> Option<(usize, i64)> {
    let mut best: Option<(usize, i64)> = None;
    for (i, &value) in values.iter().enumerate() {
        match best {
            Some((_, min)) if value >= min => {}
            _ => best = Some((i, value)),
        }
    }
    best
}

/// Nearest snapshot row to `point` if its squared distance is below
/// `threshold_square`.
pub fn nearest_within(points: &Array2<i64>, point: Point, threshold_square: i64) -> Option<usize> {
    let distances = distance_squared(points, point);
    match argmin(distances.view()) {
        Some((index, min)) if min < threshold_square => Some(index),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tracker::generation::Generation;
    use ndarray::array;

    #[test]
    fn test_detection_from_rect() {
        let det = Detection::from_tlbr(10, 40, 30, 60);
        assert_eq!(det.centroid, Point::new(20, 50));
    }

    #[test]
    fn test_exceeds_is_strict() {
        let det = Detection::from_tlbr(0, 0, 35, 40);
        assert!(!det.exceeds(35, 35));
        assert!(det.exceeds(34, 35));
        assert!(!det.exceeds(34, 40));
    }

    #[test]
    fn test_last_points() {
        let tracks = vec![
            Track::new(1, Rect::default(), Point::new(20, 150), Generation::new(1)),
            Track::new(2, Rect::default(), Point::new(300, 400), Generation::new(1)),
        ];
        assert_eq!(last_points(&tracks), array![[20_i64, 150], [300, 400]]);
    }

    #[test]
    fn test_distance_squared() {
        let points = array![[20, 150], [100, 100]];
        let dists = distance_squared(&points, Point::new(25, 155));
        assert_eq!(dists, array![50_i64, 8650]);
    }

    #[test]
    fn test_argmin_prefers_first_tie() {
        let values = array![9, 4, 4, 7];
        assert_eq!(argmin(values.view()), Some((1, 4)));
        assert_eq!(argmin(Array1::<i64>::zeros(0).view()), None);
    }

    #[test]
    fn test_nearest_within_threshold() {
        let points = array![[20, 150], [100, 100]];
        assert_eq!(nearest_within(&points, Point::new(25, 155), 1300), Some(0));
        assert_eq!(nearest_within(&points, Point::new(25, 155), 50), None);
        assert_eq!(nearest_within(&Array2::zeros((0, 2)), Point::new(0, 0), 1300), None);
    }
}
