//! pcg_rand is a small, reproducible implementation of the PCG32 generator (PCG-XSH-RR with 64 bits
//! of state and 32 bits of output). Given the same seed it produces the same stream on every run and
//! every platform, and it can jump to any position in that stream in logarithmic time.
//!
//! The generator is a plain value: two `u64` words, no interior mutability and no global state. To use
//! it from several threads, give every thread its own generator, either on its own stream
//! ([`Pcg32::initialize_streams`]) or on a disjoint block of one stream ([`Pcg32::initialize_states`]).
//!
//! ```
//! use pcg_rand::Pcg32;
//!
//! let mut rng = Pcg32::seeded(42, 54);
//! assert_eq!(rng.next_u32(), 0xa15c02b7);
//!
//! let die = rng.next_bounded(6) + 1;
//! assert!((1..=6).contains(&die));
//!
//! let mut deck: Vec<u32> = (0..52).collect();
//! rng.shuffle(&mut deck);
//! ```
//!
//! PCG is not a cryptographic generator; its state can be recovered from a handful of outputs.

#![deny(missing_docs)]
#![deny(missing_debug_implementations)]
#![allow(clippy::unreadable_literal)]

mod error;
mod lcg;
mod pcg32;
mod shuffle;

pub use error::{Error, Result};
pub use pcg32::Pcg32;
pub use rand_core;
pub use shuffle::Sequence;
