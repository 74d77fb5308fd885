//! Merging of abutting rectangles.
//!
//! Two rectangles merge only when their union is itself a rectangle with
//! no gap or overlap, and only in one argument order: the first rectangle
//! must be the left (or lower) one. `merge_all` folds a whole sequence
//! left to right, always trying a horizontal merge before a vertical one.

use std::fmt;

use tracing::{debug, trace};

use crate::{GeometryError, Rectangle, Rectangles, Result};

/// Axis along which two rectangles are joined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MergeDirection {
    /// Side by side along the x-axis.
    Horizontal,
    /// Stacked along the y-axis.
    Vertical,
}

impl fmt::Display for MergeDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Horizontal => "horizontally",
            Self::Vertical => "vertically",
        })
    }
}

/// `second` starts exactly where `first` ends, in the same row.
fn can_merge_horizontally(first: &Rectangle, second: &Rectangle) -> bool {
    first.height() == second.height()
        && first.pos().y() == second.pos().y()
        && first.right() == i64::from(second.pos().x())
}

/// `second` starts exactly where `first` ends, in the same column.
fn can_merge_vertically(first: &Rectangle, second: &Rectangle) -> bool {
    first.width() == second.width()
        && first.pos().x() == second.pos().x()
        && first.top() == i64::from(second.pos().y())
}

fn join(direction: MergeDirection, first: &Rectangle, second: &Rectangle) -> Result<Rectangle> {
    let overflow = || GeometryError::DimensionOverflow { direction };
    let (width, height) = match direction {
        MergeDirection::Horizontal => (
            first.width().checked_add(second.width()).ok_or_else(overflow)?,
            first.height(),
        ),
        MergeDirection::Vertical => (
            first.width(),
            first.height().checked_add(second.height()).ok_or_else(overflow)?,
        ),
    };
    Rectangle::with_pos(width, height, first.pos())
}

/// Joins `second` onto the right edge of `first`.
///
/// The rectangles must share height and y coordinate, and `second` must
/// begin at `first`'s right edge. The result keeps `first`'s anchor.
pub fn merge_horizontally(first: &Rectangle, second: &Rectangle) -> Result<Rectangle> {
    if !can_merge_horizontally(first, second) {
        return Err(not_adjacent(MergeDirection::Horizontal, None, first, second));
    }
    join(MergeDirection::Horizontal, first, second)
}

/// Joins `second` onto the top edge of `first`.
///
/// The rectangles must share width and x coordinate, and `second` must
/// begin at `first`'s top edge. The result keeps `first`'s anchor.
pub fn merge_vertically(first: &Rectangle, second: &Rectangle) -> Result<Rectangle> {
    if !can_merge_vertically(first, second) {
        return Err(not_adjacent(MergeDirection::Vertical, None, first, second));
    }
    join(MergeDirection::Vertical, first, second)
}

/// Folds a sequence into the single rectangle covering all of it.
///
/// Starting from the first element, each following element is merged into
/// the running result: horizontally when possible, otherwise vertically.
/// Fails on an empty sequence, or at the first element that can be merged
/// in neither direction. No partial result is returned.
pub fn merge_all(rects: &Rectangles) -> Result<Rectangle> {
    let (head, tail) = rects
        .as_slice()
        .split_first()
        .ok_or(GeometryError::EmptySequence)?;

    let mut acc = *head;
    for (offset, current) in tail.iter().enumerate() {
        let index = offset + 1;
        let direction = if can_merge_horizontally(&acc, current) {
            MergeDirection::Horizontal
        } else if can_merge_vertically(&acc, current) {
            MergeDirection::Vertical
        } else {
            // Vertical is the fallback, so that is the precondition reported.
            return Err(not_adjacent(
                MergeDirection::Vertical,
                Some(index),
                &acc,
                current,
            ));
        };
        acc = join(direction, &acc, current)?;
        trace!(index, %direction, result = %acc, "merged element");
    }

    debug!(count = rects.size(), result = %acc, "merged sequence");
    Ok(acc)
}

fn not_adjacent(
    direction: MergeDirection,
    index: Option<usize>,
    first: &Rectangle,
    second: &Rectangle,
) -> GeometryError {
    GeometryError::NotAdjacent {
        direction,
        index,
        first: *first,
        second: *second,
    }
}
