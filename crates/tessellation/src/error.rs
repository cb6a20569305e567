use crate::math::Point;

use thiserror::Error;

/// The tessellation routines' result type.
pub type TessellationResult = Result<(), TessellationError>;

/// An error that can happen while assembling geometry output.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Error)]
pub enum GeometryBuilderError {
    #[error("invalid vertex")]
    InvalidVertex,
    #[error("too many vertices")]
    TooManyVertices,
}

/// The polyline and fill tessellation error enumeration.
#[derive(Copy, Clone, Debug, PartialEq, Error)]
pub enum TessellationError {
    /// An edge of the input path starts further than floating point noise
    /// away from where the previous edge of the same sub-path ended.
    ///
    /// The assembler never bridges such gaps silently; the path must be
    /// fixed (or explicitly stitched with a line) by its producer.
    #[error("disjoint edge: expected an edge starting at {expected:?}, got {found:?}")]
    DisjointEdge { expected: Point, found: Point },
    #[error("geometry builder error: {0}")]
    GeometryBuilder(#[from] GeometryBuilderError),
}
