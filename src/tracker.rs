mod centroid_tracker;
mod counter;
mod generation;
mod matching;
mod rect;
mod track;

pub use centroid_tracker::{Tracker, TrackerConfig};
pub use counter::{CountResult, Counter, Crossing, Direction};
pub use generation::{GENERATION_CYCLE, Generation};
pub use matching::Detection;
pub use rect::{Point, Rect};
pub use track::{TRAJECTORY_CAPACITY, Track};
