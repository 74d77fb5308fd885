//! Integer rectangle geometry and deterministic rectangle merging.
//!
//! Build [`Rectangle`]s from [`Position`]s and [`Vector`]s, collect them
//! into a [`Rectangles`] sequence, and fold the sequence into one rectangle
//! with [`merge_all`].
//!
//! ```
//! use tessera_core::{Position, Rectangle, Rectangles, merge_all};
//!
//! let rects = Rectangles::from([
//!     Rectangle::new(1, 1)?,
//!     Rectangle::with_pos(1, 1, Position::new(1, 0))?,
//! ]);
//! assert_eq!(merge_all(&rects)?, Rectangle::new(2, 1)?);
//! # Ok::<(), tessera_core::GeometryError>(())
//! ```

pub mod config;
pub mod error;
pub mod layout;
pub mod merge;
pub mod position;
pub mod rect;
pub mod rects;
pub mod vector;

pub use error::{GeometryError, Result};
pub use merge::{MergeDirection, merge_all, merge_horizontally, merge_vertically};
pub use position::Position;
pub use rect::Rectangle;
pub use rects::Rectangles;
pub use vector::Vector;

/// Grid coordinate and rectangle dimension.
pub type Coord = i32;

/// Rectangle area; wide enough for any product of two positive [`Coord`]s.
pub type Area = u64;
