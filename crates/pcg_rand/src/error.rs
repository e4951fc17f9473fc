//! Errors reported by the fallible draw and shuffle entry points.

use thiserror::Error;

/// Contract violations detected by [`Pcg32`](crate::Pcg32).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum Error {
    /// A bounded draw was requested with `bound == 0`.
    #[error("bound must be greater than zero")]
    ZeroBound,
    /// A shuffle was requested on a sequence too long for 32-bit bounded draws.
    #[error("cannot shuffle {len} elements, at most {} are supported", u32::MAX)]
    SequenceTooLong {
        /// Length of the rejected sequence.
        len: usize,
    },
}

/// Shorthand for results carrying an [`Error`].
pub type Result<T, E = Error> = core::result::Result<T, E>;
