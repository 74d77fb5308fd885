use thiserror::Error;

use crate::merge::MergeDirection;
use crate::{Coord, Rectangle};

/// Unified result type for the tessera core crate.
pub type Result<T> = std::result::Result<T, GeometryError>;

/// Errors surfaced by geometry construction, merging, and file I/O.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("rectangle dimensions must be positive, got {width}x{height}")]
    NonPositiveDimension { width: Coord, height: Coord },

    #[error("{first} cannot be merged {direction} with {second}{}", at(.index))]
    NotAdjacent {
        direction: MergeDirection,
        /// Position of `second` in the sequence when raised by `merge_all`.
        index: Option<usize>,
        first: Rectangle,
        second: Rectangle,
    },

    #[error("cannot merge an empty rectangle sequence")]
    EmptySequence,

    #[error("index {index} out of bounds for sequence of length {len}")]
    IndexOutOfBounds { index: usize, len: usize },

    #[error("merged {direction} dimension overflows the coordinate range")]
    DimensionOverflow { direction: MergeDirection },

    #[error("translating {rect} by ({dx}, {dy}) leaves the coordinate range")]
    CoordinateOverflow { rect: Rectangle, dx: Coord, dy: Coord },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("invalid TOML: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("could not serialize TOML: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

fn at(index: &Option<usize>) -> String {
    index.map(|i| format!(" (element {i})")).unwrap_or_default()
}
