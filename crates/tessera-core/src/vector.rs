use std::ops::{Add, AddAssign};

use serde::{Deserialize, Serialize};

use crate::{Coord, Position};

/// A displacement on the integer grid.
///
/// Addition is plain `i32` arithmetic: overflow panics in debug builds
/// and wraps in release builds. Keeping coordinates in range is up to
/// the caller.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Vector {
    x: Coord,
    y: Coord,
}

impl Vector {
    pub const fn new(x: Coord, y: Coord) -> Self {
        Self { x, y }
    }

    pub const fn x(&self) -> Coord {
        self.x
    }

    pub const fn y(&self) -> Coord {
        self.y
    }

    /// Component-wise sum, or `None` if either coordinate overflows.
    pub const fn checked_add(self, rhs: Self) -> Option<Self> {
        match (self.x.checked_add(rhs.x), self.y.checked_add(rhs.y)) {
            (Some(x), Some(y)) => Some(Self::new(x, y)),
            _ => None,
        }
    }

    /// Mirrors the vector across the line `y = x`.
    #[must_use]
    pub const fn reflection(&self) -> Self {
        Self::new(self.y, self.x)
    }
}

/// Views a point as its displacement from the origin.
impl From<Position> for Vector {
    fn from(point: Position) -> Self {
        Self::new(point.x(), point.y())
    }
}

impl AddAssign for Vector {
    fn add_assign(&mut self, rhs: Self) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl Add for Vector {
    type Output = Self;

    fn add(mut self, rhs: Self) -> Self {
        self += rhs;
        self
    }
}
