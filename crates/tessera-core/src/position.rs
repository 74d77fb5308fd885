use std::ops::{Add, AddAssign};

use serde::{Deserialize, Serialize};

use crate::{Coord, Vector};

/// A point on the integer grid, stored as its displacement from the origin.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Position {
    vec: Vector,
}

impl Position {
    /// The point `(0, 0)`; the default anchor for rectangles.
    pub const ORIGIN: Self = Self::new(0, 0);

    pub const fn new(x: Coord, y: Coord) -> Self {
        Self {
            vec: Vector::new(x, y),
        }
    }

    pub const fn origin() -> Self {
        Self::ORIGIN
    }

    pub const fn x(&self) -> Coord {
        self.vec.x()
    }

    pub const fn y(&self) -> Coord {
        self.vec.y()
    }

    /// Mirrors the point across the line `y = x`.
    #[must_use]
    pub const fn reflection(&self) -> Self {
        Self {
            vec: self.vec.reflection(),
        }
    }

    /// Returns this point moved by `vec`.
    #[must_use]
    pub fn translate(self, vec: Vector) -> Self {
        Self {
            vec: self.vec + vec,
        }
    }

    /// Like [`Position::translate`], but `None` when a coordinate would
    /// leave the `i32` range.
    pub const fn checked_translate(self, vec: Vector) -> Option<Self> {
        match self.vec.checked_add(vec) {
            Some(vec) => Some(Self { vec }),
            None => None,
        }
    }
}

impl From<Vector> for Position {
    fn from(vec: Vector) -> Self {
        Self { vec }
    }
}

impl AddAssign<Vector> for Position {
    fn add_assign(&mut self, rhs: Vector) {
        *self = self.translate(rhs);
    }
}

impl Add<Vector> for Position {
    type Output = Self;

    fn add(self, rhs: Vector) -> Self {
        self.translate(rhs)
    }
}

impl Add<Position> for Vector {
    type Output = Position;

    fn add(self, rhs: Position) -> Position {
        rhs.translate(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn origin_is_zero_and_default() {
        assert_eq!(Position::origin(), Position::new(0, 0));
        assert_eq!(Position::default(), Position::ORIGIN);
    }

    #[test]
    fn translation_in_either_operand_order() {
        // Arrange
        let p = Position::new(2, 3);
        let v = Vector::new(-5, 1);

        // Act
        let right = p + v;
        let left = v + p;

        // Assert
        assert_eq!(right, Position::new(-3, 4));
        assert_eq!(left, right);
    }

    #[test]
    fn translation_composes_with_vector_addition() {
        let p = Position::new(7, -1);
        let v1 = Vector::new(1, 1);
        let v2 = Vector::new(-3, 10);
        assert_eq!((p + v1) + v2, p + (v1 + v2));
    }

    #[test]
    fn add_assign_moves_in_place() {
        let mut p = Position::new(1, 1);
        p += Vector::new(4, 5);
        assert_eq!(p, Position::new(5, 6));
    }

    #[test]
    fn checked_translate_stops_at_coordinate_limits() {
        let edge = Position::new(i32::MAX, 0);
        assert_eq!(edge.checked_translate(Vector::new(1, 0)), None);
        assert_eq!(
            edge.checked_translate(Vector::new(-1, 3)),
            Some(Position::new(i32::MAX - 1, 3))
        );
    }

    #[test]
    fn reflection_is_an_involution() {
        let p = Position::new(4, -9);
        assert_eq!(p.reflection(), Position::new(-9, 4));
        assert_eq!(p.reflection().reflection(), p);
    }

    #[test]
    fn from_vector_roundtrips() {
        let v = Vector::new(12, 13);
        assert_eq!(Vector::from(Position::from(v)), v);
    }

    #[test]
    fn serializes_as_plain_coordinates() {
        let json = serde_json::to_string(&Position::new(1, 2)).unwrap();
        assert_eq!(json, r#"{"x":1,"y":2}"#);
    }
}
