use std::collections::VecDeque;

/// A fixed-length, randomly addressable sequence whose elements can be exchanged in place.
///
/// This is all [`Pcg32::shuffle`](crate::Pcg32::shuffle) needs; no ordering or equality is
/// required of the elements.
pub trait Sequence {
    /// Number of elements in the sequence.
    fn len(&self) -> usize;

    /// Exchange the elements at positions `a` and `b`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    fn swap(&mut self, a: usize, b: usize);

    /// Returns `true` if the sequence holds no elements.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<T> Sequence for [T] {
    #[inline]
    fn len(&self) -> usize {
        <[T]>::len(self)
    }

    #[inline]
    fn swap(&mut self, a: usize, b: usize) {
        <[T]>::swap(self, a, b)
    }
}

impl<T, const N: usize> Sequence for [T; N] {
    #[inline]
    fn len(&self) -> usize {
        N
    }

    #[inline]
    fn swap(&mut self, a: usize, b: usize) {
        self.as_mut_slice().swap(a, b)
    }
}

impl<T> Sequence for Vec<T> {
    #[inline]
    fn len(&self) -> usize {
        Vec::len(self)
    }

    #[inline]
    fn swap(&mut self, a: usize, b: usize) {
        self.as_mut_slice().swap(a, b)
    }
}

impl<T> Sequence for VecDeque<T> {
    #[inline]
    fn len(&self) -> usize {
        VecDeque::len(self)
    }

    #[inline]
    fn swap(&mut self, a: usize, b: usize) {
        VecDeque::swap(self, a, b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reverse<S: Sequence + ?Sized>(seq: &mut S) {
        let n = seq.len();
        for i in 0..n / 2 {
            seq.swap(i, n - 1 - i);
        }
    }

    #[test]
    fn slices_and_arrays() {
        let mut arr = [1, 2, 3, 4];
        reverse(&mut arr);
        assert_eq!(arr, [4, 3, 2, 1]);

        reverse(&mut arr[1..]);
        assert_eq!(arr, [4, 1, 2, 3]);
    }

    #[test]
    fn owned_collections() {
        let mut v = vec!["a", "b", "c"];
        reverse(&mut v);
        assert_eq!(v, ["c", "b", "a"]);

        let mut dq: VecDeque<_> = (0..5).collect();
        dq.rotate_left(2);
        reverse(&mut dq);
        assert_eq!(dq, [1, 0, 4, 3, 2]);
    }

    #[test]
    fn empty() {
        let v: Vec<u8> = Vec::new();
        assert!(Sequence::is_empty(&v));
        assert!(!Sequence::is_empty(&[0u8; 1]));
    }
}
