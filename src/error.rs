//! Crate-wide error type.
//!
//! All failures in the algorithmic core are input-contract violations:
//! they are reported once, fatally, and never retried.

use thiserror::Error;

/// Errors produced by the topological core.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A boundary face of a simplex could not be resolved to an index,
    /// meaning the complex is not closed under the boundary relation.
    #[error("boundary face {0:?} is not part of the simplicial complex")]
    MissingFace(Vec<usize>),

    /// A Union-Find operation referred to an element that was never
    /// inserted into the forest.
    #[error("element {0} is not part of the union-find forest")]
    UnknownElement(usize),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
