/// Bounding box and centroid geometry in integer pixel coordinates.
///
/// Boxes are stored in TLBR form (x1, y1, x2, y2), matching what the
/// foreground detector emits. `from_tlwh` covers detectors that report width
/// and height instead.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Rect {
    /// Top-left x coordinate
    pub x1: i32,
    /// Top-left y coordinate
    pub y1: i32,
    /// Bottom-right x coordinate
    pub x2: i32,
    /// Bottom-right y coordinate
    pub y2: i32,
}

/// A single centroid position.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    #[inline]
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Shift the point vertically by `dy` pixels.
    #[inline]
    pub fn translate_y(&self, dy: i32) -> Self {
        Self {
            x: self.x,
            y: self.y + dy,
        }
    }
}

impl From<(i32, i32)> for Point {
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}

impl Rect {
    /// Create a new Rect from TLBR coordinates (x1, y1, x2, y2).
    #[inline]
    pub fn new(x1: i32, y1: i32, x2: i32, y2: i32) -> Self {
        Self { x1, y1, x2, y2 }
    }

    /// Create a Rect from TLWH format (top-left x, top-left y, width, height).
    #[inline]
    pub fn from_tlwh(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x1: x,
            y1: y,
            x2: x + width,
            y2: y + height,
        }
    }

    #[inline]
    pub fn width(&self) -> i32 {
        self.x2 - self.x1
    }

    #[inline]
    pub fn height(&self) -> i32 {
        self.y2 - self.y1
    }

    /// Integer center of the box, rounded down for non-negative coordinates.
    #[inline]
    pub fn center(&self) -> Point {
        Point {
            x: (self.x1 + self.x2) / 2,
            y: (self.y1 + self.y2) / 2,
        }
    }

    /// Shift both vertical edges by `dy` pixels.
    ///
    /// Used to move a box from detection sub-window coordinates into full
    /// frame coordinates.
    #[inline]
    pub fn translate_y(&self, dy: i32) -> Self {
        Self {
            x1: self.x1,
            y1: self.y1 + dy,
            x2: self.x2,
            y2: self.y2 + dy,
        }
    }
}

impl From<(i32, i32, i32, i32)> for Rect {
    fn from((x1, y1, x2, y2): (i32, i32, i32, i32)) -> Self {
        Self { x1, y1, x2, y2 }
    }
}
