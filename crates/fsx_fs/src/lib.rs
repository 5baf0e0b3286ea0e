//! # Fsx
//!
//! An async extension layer over primitive filesystem operations.
//!
//! `Fsx` composes an [`FsPrimitive`] (by default [`TokioFs`], backed by
//! `tokio::fs`) and exposes the primitives as awaitable pass-through methods
//! together with a few composite helpers: an exact-length byte read,
//! recursive directory removal, typed existence predicates and JSON
//! load/save. Failures carry the path they happened on, in the format
//! "Failed to [operation] [path]", with the OS error preserved as the source.

mod encoding;
mod error;
mod exact_read;
mod json;
pub mod log;
mod meta;
mod primitive;
mod read;
mod remove;
mod tokio_fs;
mod write;

#[cfg(test)]
mod test_fs;

pub use encoding::Encoding;
pub use error::{Error, Result};
pub use exact_read::{ExactRead, ReadOutput};
pub use primitive::{FileKind, FileStat, FsPrimitive, OpenMode};
pub use tokio_fs::TokioFs;

/// Filesystem facade composing a primitive implementation.
#[derive(Debug, Clone, Default)]
pub struct Fsx<P = TokioFs> {
    primitive: P,
}

impl Fsx {
    /// Creates an `Fsx` backed by `tokio::fs`.
    pub fn new() -> Self {
        Self { primitive: TokioFs }
    }
}

impl<P: FsPrimitive> Fsx<P> {
    pub fn with_primitive(primitive: P) -> Self {
        Self { primitive }
    }

    /// The wrapped primitive implementation.
    pub fn primitive(&self) -> &P {
        &self.primitive
    }
}
