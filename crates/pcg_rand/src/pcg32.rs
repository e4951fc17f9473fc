use rand_core::impls::{fill_bytes_via_next, next_u64_via_u32};
use rand_core::le::read_u64_into;
use rand_core::{RngCore, SeedableRng};
use tracing::{debug, trace};

use crate::error::{Error, Result};
use crate::lcg;
use crate::shuffle::Sequence;

/// A PCG32 random number generator (PCG-XSH-RR, 64-bit state, 32-bit output).
///
/// The state advances through a 64-bit LCG with period `2^64`. Each output is a xorshift of the
/// pre-transition state, rotated by its top five bits. The odd `increment` picks one of `2^63`
/// streams that share the multiplier but never overlap.
///
/// The algorithm is not suitable for cryptographic purposes. The output stream matches the
/// `pcg32` reference code by Melissa O'Neill bit for bit.
///
/// Both fields are private: the only way to set `increment` goes through a constructor that forces
/// its low bit, so a generator can never end up on an even increment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(C)]
pub struct Pcg32 {
    state: u64,
    increment: u64,
}

impl Pcg32 {
    /// LCG multiplier shared by every stream.
    pub const MULTIPLIER: u64 = lcg::MULTIPLIER;
    /// State of a default-constructed generator.
    pub const DEFAULT_STATE: u64 = 0x853c49e6748fea9b;
    /// Increment (stream selector) of a default-constructed generator.
    pub const DEFAULT_INCREMENT: u64 = 0xda3e39cb94b95bdb;

    /// Build a generator from a raw `(state, increment)` pair without mixing.
    ///
    /// Use this to resume a stream previously captured with [`Self::state`] and
    /// [`Self::increment`]. The low bit of `increment` is forced to 1. To start a stream from
    /// arbitrary integers, use [`Self::seeded`] instead; nearby raw states give correlated
    /// outputs.
    #[inline]
    pub const fn from_parts(state: u64, increment: u64) -> Self {
        Self {
            state,
            increment: increment | 1,
        }
    }

    /// Create a generator and [`seed`](Self::seed) it.
    pub fn seeded(init_state: u64, init_seq: u64) -> Self {
        let mut rng = Self::default();
        rng.seed(init_state, init_seq);
        rng
    }

    /// Reinitialize the generator from a state initializer and a stream selector.
    ///
    /// The initial state goes through two LCG transitions, so that seeds close to each other
    /// do not give correlated starting states. `init_seq` selects the stream; its top bit is
    /// discarded when it is shifted into the odd increment.
    pub fn seed(&mut self, init_state: u64, init_seq: u64) {
        self.increment = (init_seq << 1) | 1;
        self.state = 0;
        self.step();
        self.state = self.state.wrapping_add(init_state);
        self.step();
        trace!(init_state, init_seq, state = self.state, "seeded pcg32");
    }

    /// Current position in the stream.
    #[inline]
    pub fn state(&self) -> u64 {
        self.state
    }

    /// Stream selector. Always odd.
    #[inline]
    pub fn increment(&self) -> u64 {
        self.increment
    }

    #[inline]
    fn step(&mut self) {
        self.state = lcg::step(self.state, self.increment);
    }

    /// Generate a uniformly distributed `u32` and advance the state once.
    #[inline]
    pub fn next_u32(&mut self) -> u32 {
        let old = self.state;
        self.step();
        let xorshifted = (((old >> 18) ^ old) >> 27) as u32;
        let rot = (old >> 59) as u32;
        xorshifted.rotate_right(rot)
    }

    /// Generate a uniformly distributed `r` with `0 <= r < bound`.
    ///
    /// To avoid modulo bias, raw outputs below `2^32 mod bound` are discarded and redrawn. The loop
    /// terminates with probability 1 but has no fixed upper bound. In the worst case,
    /// `bound = 2^31 + 1`, almost half the range is rejected. For typical small bounds, nearly
    /// every call needs only one draw.
    ///
    /// # Panics
    ///
    /// Panics if `bound` is zero. See [`Self::try_next_bounded`] for a non-panicking variant.
    #[inline]
    pub fn next_bounded(&mut self, bound: u32) -> u32 {
        assert!(bound > 0, "bound must be greater than zero");
        // (2^32 - bound) % bound == 2^32 % bound, computed in 32 bits.
        let threshold = bound.wrapping_neg() % bound;
        loop {
            let r = self.next_u32();
            if r >= threshold {
                return r % bound;
            }
        }
    }

    /// Like [`Self::next_bounded`] but reports a zero `bound` as an error.
    pub fn try_next_bounded(&mut self, bound: u32) -> Result<u32> {
        if bound == 0 {
            return Err(Error::ZeroBound);
        }
        Ok(self.next_bounded(bound))
    }

    /// Generate an [`prim@f32`] in `[0.0, 1.0)` from a single 32-bit draw.
    ///
    /// The raw value is converted to `f32` before scaling by `2^-32`, so the 128 largest raw
    /// outputs round to exactly `1.0`.
    #[inline]
    pub fn next_f32(&mut self) -> f32 {
        self.next_u32() as f32 * (1.0 / 4294967296.0)
    }

    /// Generate an [`prim@f64`] in `[0.0, 1.0)` from a single 32-bit draw.
    ///
    /// Only 32 bits of randomness go in, so the low 20 bits of the mantissa are always zero.
    /// This matches the reference output stream.
    #[inline]
    pub fn next_f64(&mut self) -> f64 {
        f64::from(self.next_u32()) * (1.0 / 4294967296.0)
    }

    /// Move the state `delta` steps along the stream in `O(log |delta|)` time, as if `delta`
    /// values had been drawn.
    ///
    /// A negative `delta` jumps backwards. It goes "the long way round": `-k` is
    /// `2^64 - k` steps forward, which lands on the same state.
    ///
    /// ```
    /// use pcg_rand::Pcg32;
    ///
    /// let mut rng = Pcg32::seeded(5, 9);
    /// let first = rng.next_u32();
    /// rng.advance(-1);
    /// assert_eq!(rng.next_u32(), first);
    /// ```
    pub fn advance(&mut self, delta: i64) {
        self.state = lcg::jump(self.state, delta as u64, lcg::MULTIPLIER, self.increment);
        trace!(delta, state = self.state, "advanced pcg32");
    }

    /// Permute `seq` uniformly at random in place (Fisher-Yates, from the back).
    ///
    /// Sequences of length 0 or 1 are left untouched. The number of raw draws varies because each
    /// position uses a rejection-sampled [`Self::next_bounded`].
    ///
    /// # Panics
    ///
    /// Panics if `seq` holds more than `u32::MAX` elements. See [`Self::try_shuffle`].
    pub fn shuffle<S: Sequence + ?Sized>(&mut self, seq: &mut S) {
        let len = seq.len();
        assert!(
            len <= u32::MAX as usize,
            "cannot shuffle {len} elements, at most {} are supported",
            u32::MAX
        );
        for i in (1..len).rev() {
            let j = self.next_bounded((i + 1) as u32) as usize;
            seq.swap(i, j);
        }
    }

    /// Like [`Self::shuffle`] but reports an oversized sequence as an error and leaves it
    /// untouched.
    pub fn try_shuffle<S: Sequence + ?Sized>(&mut self, seq: &mut S) -> Result<()> {
        let len = seq.len();
        if len > u32::MAX as usize {
            return Err(Error::SequenceTooLong { len });
        }
        self.shuffle(seq);
        Ok(())
    }

    /// Initializes `num_states` generators on the stream `(init_state, init_seq)`, each one
    /// `block_size` steps after the previous. As long as no generator draws more than
    /// `block_size` values, they produce non-overlapping parts of the same stream.
    ///
    /// Offsets wrap modulo `2^64`, so `block_size * num_states` should not exceed the period.
    pub fn initialize_states(
        init_state: u64,
        init_seq: u64,
        block_size: u64,
        num_states: usize,
    ) -> Vec<Self> {
        debug!(init_state, init_seq, block_size, num_states, "initializing pcg32 states");
        let mut cur = Self::seeded(init_state, init_seq);
        let mut states = Vec::with_capacity(num_states);
        for _ in 0..num_states {
            states.push(cur);
            cur.state = lcg::jump(cur.state, block_size, lcg::MULTIPLIER, cur.increment);
        }
        states
    }

    /// Initializes `num_streams` generators, generator `i` seeded with `(init_state, i)`.
    ///
    /// Each generator gets its own increment, so no two of them share output sequences.
    pub fn initialize_streams(init_state: u64, num_streams: usize) -> Vec<Self> {
        debug!(init_state, num_streams, "initializing pcg32 streams");
        (0..num_streams as u64)
            .map(|seq| Self::seeded(init_state, seq))
            .collect()
    }
}

impl Default for Pcg32 {
    /// The fixed default stream of the reference implementation.
    fn default() -> Self {
        Self::from_parts(Self::DEFAULT_STATE, Self::DEFAULT_INCREMENT)
    }
}

impl RngCore for Pcg32 {
    #[inline]
    fn next_u32(&mut self) -> u32 {
        Pcg32::next_u32(self)
    }

    /// Two draws, the first in the low half.
    #[inline]
    fn next_u64(&mut self) -> u64 {
        next_u64_via_u32(self)
    }

    #[inline]
    fn fill_bytes(&mut self, dest: &mut [u8]) {
        fill_bytes_via_next(self, dest);
    }
}

impl SeedableRng for Pcg32 {
    /// Little-endian `init_state` followed by little-endian `init_seq`.
    type Seed = [u8; 16];

    fn from_seed(seed: [u8; 16]) -> Pcg32 {
        let mut parts = [0; 2];
        read_u64_into(&seed, &mut parts);
        Pcg32::seeded(parts[0], parts[1])
    }

    /// Seed on stream 1, the reference default stream selector.
    fn seed_from_u64(state: u64) -> Pcg32 {
        Pcg32::seeded(state, 1)
    }
}
