//! Map-construction error type.

use thiserror::Error;

use gt_core::Cell;

/// Errors produced by `gt-map`.
///
/// Everything here is a configuration mistake caught at build time: once a
/// map constructs cleanly, queries against it cannot fail.
#[derive(Debug, Error)]
pub enum MapError {
    #[error("edge {from} -> {to} leaves the {width}x{height} grid")]
    EdgeOutOfBounds {
        from: Cell,
        to: Cell,
        width: u32,
        height: u32,
    },

    #[error("{what} at {cell} is outside the {width}x{height} grid")]
    CellOutOfBounds {
        what: &'static str,
        cell: Cell,
        width: u32,
        height: u32,
    },

    #[error("two parking spots registered on cell {0}")]
    DuplicateParking(Cell),

    #[error("two traffic lights registered on cell {0}")]
    DuplicateLight(Cell),
}

pub type MapResult<T> = Result<T, MapError>;
