use core::fmt;
use serde::{Deserialize, Serialize};
use smallvec::{smallvec, SmallVec};

/// An integer grid coordinate. `x` is the column, `y` the row.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub fn new(x: i32, y: i32) -> Point {
        Point { x, y }
    }

    pub fn manhattan_distance(&self, other: &Point) -> f64 {
        ((self.x - other.x).abs() + (self.y - other.y).abs()) as f64
    }

    pub fn euclidean_distance(&self, other: &Point) -> f64 {
        let dx = (self.x - other.x) as f64;
        let dy = (self.y - other.y) as f64;
        (dx * dx + dy * dy).sqrt()
    }

    /// The 4-directional (von Neumann) neighbourhood in the fixed order
    /// down, right, up, left. The order determines expansion tie-breaking,
    /// so it must stay consistent.
    pub fn neumann_neighborhood(&self) -> SmallVec<[Point; 4]> {
        smallvec![
            Point::new(self.x, self.y + 1),
            Point::new(self.x + 1, self.y),
            Point::new(self.x, self.y - 1),
            Point::new(self.x - 1, self.y),
        ]
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
