use std::fmt;
use std::ops::{Add, AddAssign};

use serde::{Deserialize, Serialize};

use crate::{Area, Coord, GeometryError, Position, Result, Vector};

/// An axis-aligned rectangle anchored at its lower-left corner.
///
/// Width and height are always strictly positive: the only way to build
/// a `Rectangle` is through [`Rectangle::new`], [`Rectangle::with_pos`],
/// or deserialisation, all of which validate the dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RectangleSpec", into = "RectangleSpec")]
pub struct Rectangle {
    pos: Position,
    width: Coord,
    height: Coord,
}

impl Rectangle {
    /// Creates a rectangle anchored at the origin.
    pub fn new(width: Coord, height: Coord) -> Result<Self> {
        Self::with_pos(width, height, Position::ORIGIN)
    }

    /// Creates a rectangle whose lower-left corner is `pos`.
    pub fn with_pos(width: Coord, height: Coord, pos: Position) -> Result<Self> {
        if width <= 0 || height <= 0 {
            return Err(GeometryError::NonPositiveDimension { width, height });
        }
        Ok(Self { pos, width, height })
    }

    pub const fn pos(&self) -> Position {
        self.pos
    }

    pub const fn width(&self) -> Coord {
        self.width
    }

    pub const fn height(&self) -> Coord {
        self.height
    }

    /// Number of unit cells covered. Both factors are widened first so the
    /// product cannot overflow.
    pub const fn area(&self) -> Area {
        self.width.unsigned_abs() as Area * self.height.unsigned_abs() as Area
    }

    /// X coordinate of the right edge (exclusive).
    pub const fn right(&self) -> i64 {
        self.pos.x() as i64 + self.width as i64
    }

    /// Y coordinate of the top edge (exclusive).
    pub const fn top(&self) -> i64 {
        self.pos.y() as i64 + self.height as i64
    }

    /// Mirrors the rectangle across the line `y = x`.
    ///
    /// This transposes width and height and reflects the anchor; it is not
    /// a flip about the rectangle's own centre.
    #[must_use]
    pub const fn reflection(&self) -> Self {
        Self {
            pos: self.pos.reflection(),
            width: self.height,
            height: self.width,
        }
    }

    /// Returns this rectangle moved by `vec`. Dimensions are unchanged.
    #[must_use]
    pub fn translate(self, vec: Vector) -> Self {
        Self {
            pos: self.pos + vec,
            ..self
        }
    }

    /// Moves the rectangle by `vec`, failing instead of wrapping when the
    /// anchor would leave the coordinate range.
    pub fn checked_translate(self, vec: Vector) -> Result<Self> {
        let pos = self
            .pos
            .checked_translate(vec)
            .ok_or(GeometryError::CoordinateOverflow {
                rect: self,
                dx: vec.x(),
                dy: vec.y(),
            })?;
        Ok(Self { pos, ..self })
    }
}

impl fmt::Display for Rectangle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}x{} at ({}, {})",
            self.width,
            self.height,
            self.pos.x(),
            self.pos.y()
        )
    }
}

impl AddAssign<Vector> for Rectangle {
    fn add_assign(&mut self, rhs: Vector) {
        *self = self.translate(rhs);
    }
}

impl Add<Vector> for Rectangle {
    type Output = Self;

    fn add(self, rhs: Vector) -> Self {
        self.translate(rhs)
    }
}

impl Add<Rectangle> for Vector {
    type Output = Rectangle;

    fn add(self, rhs: Rectangle) -> Rectangle {
        rhs.translate(self)
    }
}

/// Flat on-disk form of a rectangle. The anchor defaults to the origin.
#[derive(Serialize, Deserialize)]
pub(crate) struct RectangleSpec {
    #[serde(default)]
    x: Coord,
    #[serde(default)]
    y: Coord,
    width: Coord,
    height: Coord,
}

impl TryFrom<RectangleSpec> for Rectangle {
    type Error = GeometryError;

    fn try_from(spec: RectangleSpec) -> Result<Self> {
        Self::with_pos(spec.width, spec.height, Position::new(spec.x, spec.y))
    }
}

impl From<Rectangle> for RectangleSpec {
    fn from(r: Rectangle) -> Self {
        Self {
            x: r.pos.x(),
            y: r.pos.y(),
            width: r.width,
            height: r.height,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accessors_return_constructor_arguments() {
        // Arrange
        let pos = Position::new(-3, 8);

        // Act
        let r = Rectangle::with_pos(5, 7, pos).unwrap();

        // Assert
        assert_eq!(r.width(), 5);
        assert_eq!(r.height(), 7);
        assert_eq!(r.pos(), pos);
        assert_eq!(r.area(), 35);
    }

    #[test]
    fn two_argument_constructor_anchors_at_origin() {
        let r = Rectangle::new(2, 3).unwrap();
        assert_eq!(r.pos(), Position::ORIGIN);
    }

    #[test]
    fn non_positive_dimensions_are_rejected() {
        for (w, h) in [(0, 1), (1, 0), (-1, 5), (5, -1), (0, 0), (i32::MIN, 1)] {
            assert!(
                matches!(
                    Rectangle::new(w, h),
                    Err(GeometryError::NonPositiveDimension { width, height }) if width == w && height == h
                ),
                "{w}x{h} should be rejected"
            );
            assert!(Rectangle::with_pos(w, h, Position::new(1, 1)).is_err());
        }
    }

    #[test]
    fn area_does_not_overflow_at_coordinate_limits() {
        let r = Rectangle::new(i32::MAX, i32::MAX).unwrap();
        assert_eq!(r.area(), 4_611_686_014_132_420_609);
    }

    #[test]
    fn edges_are_exclusive_and_do_not_overflow() {
        let r = Rectangle::with_pos(i32::MAX, 2, Position::new(i32::MAX, -1)).unwrap();
        assert_eq!(r.right(), 2 * i64::from(i32::MAX));
        assert_eq!(r.top(), 1);
    }

    #[test]
    fn reflection_transposes_and_reflects_anchor() {
        // Arrange
        let r = Rectangle::with_pos(4, 1, Position::new(2, 9)).unwrap();

        // Act
        let reflected = r.reflection();

        // Assert
        assert_eq!(reflected.width(), 1);
        assert_eq!(reflected.height(), 4);
        assert_eq!(reflected.pos(), Position::new(9, 2));
        assert_eq!(reflected.reflection(), r);
    }

    #[test]
    fn translation_moves_anchor_only() {
        let r = Rectangle::with_pos(3, 4, Position::new(1, 1)).unwrap();
        let moved = r + Vector::new(10, -1);
        assert_eq!(moved.pos(), Position::new(11, 0));
        assert_eq!((moved.width(), moved.height()), (3, 4));
        assert_eq!(Vector::new(10, -1) + r, moved);
    }

    #[test]
    fn translation_composes_with_vector_addition() {
        let r = Rectangle::new(1, 2).unwrap();
        let v1 = Vector::new(3, 4);
        let v2 = Vector::new(-8, 1);
        assert_eq!((r + v1) + v2, r + (v1 + v2));

        let mut in_place = r;
        in_place += v1;
        in_place += v2;
        assert_eq!(in_place, r + (v1 + v2));
    }

    #[test]
    fn checked_translation_rejects_overflow() {
        // Arrange
        let r = Rectangle::with_pos(1, 1, Position::new(i32::MAX, 0)).unwrap();

        // Act
        let moved_back = r.checked_translate(Vector::new(-1, 0)).unwrap();
        let err = r.checked_translate(Vector::new(1, 0)).unwrap_err();

        // Assert
        assert_eq!(moved_back.pos(), Position::new(i32::MAX - 1, 0));
        assert!(matches!(
            err,
            GeometryError::CoordinateOverflow { rect, dx: 1, dy: 0 } if rect == r
        ));
    }

    #[test]
    fn equality_compares_anchor_and_dimensions() {
        let a = Rectangle::with_pos(2, 3, Position::new(1, 1)).unwrap();
        let b = Rectangle::with_pos(2, 3, Position::new(1, 1)).unwrap();
        let c = Rectangle::with_pos(2, 3, Position::new(1, 2)).unwrap();
        let d = Rectangle::with_pos(3, 2, Position::new(1, 1)).unwrap();
        assert_eq!(a, b);
        assert_eq!(b, a);
        assert_ne!(a, c);
        assert_ne!(a, d);
    }

    #[test]
    fn deserialization_validates_dimensions() {
        // Arrange
        let valid = r#"{"x":1,"y":2,"width":3,"height":4}"#;
        let invalid = r#"{"width":0,"height":4}"#;

        // Act
        let parsed: Rectangle = serde_json::from_str(valid).unwrap();
        let rejected = serde_json::from_str::<Rectangle>(invalid);

        // Assert
        assert_eq!(parsed, Rectangle::with_pos(3, 4, Position::new(1, 2)).unwrap());
        assert!(rejected.is_err());
    }

    #[test]
    fn missing_anchor_defaults_to_origin() {
        let r: Rectangle = serde_json::from_str(r#"{"width":2,"height":2}"#).unwrap();
        assert_eq!(r.pos(), Position::ORIGIN);
    }
}
