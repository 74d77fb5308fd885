use std::ops::{Add, AddAssign, Index, IndexMut};

use serde::{Deserialize, Serialize};

use crate::{GeometryError, Rectangle, Result, Vector};

/// An ordered, fixed-length sequence of rectangles.
///
/// The length is set at construction; elements can be read, replaced, and
/// translated, but never inserted or removed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Rectangles {
    rects: Vec<Rectangle>,
}

impl Rectangles {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn size(&self) -> usize {
        self.rects.len()
    }

    pub fn len(&self) -> usize {
        self.size()
    }

    pub fn is_empty(&self) -> bool {
        self.rects.is_empty()
    }

    /// Checked element access.
    pub fn get(&self, index: usize) -> Result<&Rectangle> {
        let len = self.size();
        self.rects
            .get(index)
            .ok_or(GeometryError::IndexOutOfBounds { index, len })
    }

    /// Checked mutable element access.
    pub fn get_mut(&mut self, index: usize) -> Result<&mut Rectangle> {
        let len = self.size();
        self.rects
            .get_mut(index)
            .ok_or(GeometryError::IndexOutOfBounds { index, len })
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Rectangle> {
        self.rects.iter()
    }

    pub fn as_slice(&self) -> &[Rectangle] {
        &self.rects
    }

    /// Returns a copy with every rectangle moved by `vec`.
    #[must_use]
    pub fn translate(mut self, vec: Vector) -> Self {
        self += vec;
        self
    }

    /// Returns a copy with every rectangle moved by `vec`, or
    /// `CoordinateOverflow` naming the first rectangle that would leave
    /// the coordinate range.
    pub fn checked_translate(&self, vec: Vector) -> Result<Self> {
        self.iter().map(|r| r.checked_translate(vec)).collect()
    }

    /// Returns a copy with every rectangle mirrored across `y = x`.
    #[must_use]
    pub fn reflection(&self) -> Self {
        self.iter().map(Rectangle::reflection).collect()
    }

    /// Sum of the areas of all rectangles.
    pub fn total_area(&self) -> u128 {
        self.iter().map(|r| u128::from(r.area())).sum()
    }
}

impl From<Vec<Rectangle>> for Rectangles {
    fn from(rects: Vec<Rectangle>) -> Self {
        Self { rects }
    }
}

impl<const N: usize> From<[Rectangle; N]> for Rectangles {
    fn from(rects: [Rectangle; N]) -> Self {
        Self {
            rects: rects.into(),
        }
    }
}

impl FromIterator<Rectangle> for Rectangles {
    fn from_iter<I: IntoIterator<Item = Rectangle>>(iter: I) -> Self {
        Self {
            rects: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Rectangles {
    type Item = &'a Rectangle;
    type IntoIter = std::slice::Iter<'a, Rectangle>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Panics if `index` is out of bounds; use [`Rectangles::get`] to check.
impl Index<usize> for Rectangles {
    type Output = Rectangle;

    fn index(&self, index: usize) -> &Rectangle {
        &self.rects[index]
    }
}

impl IndexMut<usize> for Rectangles {
    fn index_mut(&mut self, index: usize) -> &mut Rectangle {
        &mut self.rects[index]
    }
}

impl AddAssign<Vector> for Rectangles {
    fn add_assign(&mut self, rhs: Vector) {
        for rect in &mut self.rects {
            *rect += rhs;
        }
    }
}

impl Add<Vector> for Rectangles {
    type Output = Self;

    fn add(self, rhs: Vector) -> Self {
        self.translate(rhs)
    }
}

impl Add<Rectangles> for Vector {
    type Output = Rectangles;

    fn add(self, rhs: Rectangles) -> Rectangles {
        rhs.translate(self)
    }
}

impl Add<Vector> for &Rectangles {
    type Output = Rectangles;

    fn add(self, rhs: Vector) -> Rectangles {
        self.clone().translate(rhs)
    }
}
