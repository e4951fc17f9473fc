//! The linear congruential core shared by every PCG32 stream.
//!
//! One step is the affine map `f(s) = MULTIPLIER * s + increment (mod 2^64)`. Composing affine maps
//! gives another affine map, so `k` steps collapse to a single `(mult, plus)` pair that can be built
//! by square-and-multiply, which is what [`jump`] does.
//!
//! The method is from Brown, "Random Number Generation with Arbitrary Stride", Transactions of the
//! American Nuclear Society (Nov. 1994).

/// LCG multiplier for 64-bit state PCG generators.
pub(crate) const MULTIPLIER: u64 = 6364136223846793005;

/// Apply one LCG transition.
#[inline]
pub(crate) fn step(state: u64, increment: u64) -> u64 {
    state.wrapping_mul(MULTIPLIER).wrapping_add(increment)
}

/// Return the state reached after `delta` applications of `s -> cur_mult * s + cur_plus`.
///
/// `delta` is unsigned; a negative offset reinterpreted as `u64` goes backwards by going the long way
/// round the `2^64` cycle.
pub(crate) fn jump(state: u64, mut delta: u64, mut cur_mult: u64, mut cur_plus: u64) -> u64 {
    let mut acc_mult: u64 = 1;
    let mut acc_plus: u64 = 0;
    while delta > 0 {
        if delta & 1 != 0 {
            acc_mult = acc_mult.wrapping_mul(cur_mult);
            acc_plus = acc_plus.wrapping_mul(cur_mult).wrapping_add(cur_plus);
        }
        cur_plus = cur_mult.wrapping_add(1).wrapping_mul(cur_plus);
        cur_mult = cur_mult.wrapping_mul(cur_mult);
        delta >>= 1;
    }
    acc_mult.wrapping_mul(state).wrapping_add(acc_plus)
}

#[cfg(test)]
mod tests {
    use super::*;

    const INC: u64 = 0xda3e39cb94b95bdb;

    fn walk(mut state: u64, steps: u32) -> u64 {
        for _ in 0..steps {
            state = step(state, INC);
        }
        state
    }

    #[test]
    fn zero_delta_is_identity() {
        assert_eq!(jump(0x853c49e6748fea9b, 0, MULTIPLIER, INC), 0x853c49e6748fea9b);
    }

    #[test]
    fn matches_stepping() {
        for steps in [1, 2, 3, 7, 64, 100, 1000] {
            assert_eq!(
                jump(12345, u64::from(steps), MULTIPLIER, INC),
                walk(12345, steps),
                "jump by {steps} diverged from stepping"
            );
        }
    }

    #[test]
    fn full_cycle_returns_home() {
        // 2^64 steps is the identity; -1 followed by +1 lands on the start.
        let back = jump(99, u64::MAX, MULTIPLIER, INC);
        assert_eq!(step(back, INC), 99);
    }

    #[test]
    fn jumps_compose() {
        let a = jump(7, 1 << 40, MULTIPLIER, INC);
        let b = jump(a, 12345, MULTIPLIER, INC);
        assert_eq!(b, jump(7, (1 << 40) + 12345, MULTIPLIER, INC));
    }
}
