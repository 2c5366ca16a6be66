use core::iter::{FusedIterator, Iterator};

use crate::bitvector::{BitVector, WORD_BITS, Word};

impl<const BIT_COUNT: usize, const WORD_COUNT: usize> BitVector<BIT_COUNT, WORD_COUNT> {
    /// Returns an iterator over all bits as `bool`, from least to most
    /// significant.
    ///
    /// # Examples
    /// ```
    /// use fixed_bitvec::{BitVector, word_count};
    ///
    /// let bv = BitVector::<4, { word_count(4) }>::from_u64(0b0101);
    /// assert!(bv.iter().eq([true, false, true, false]));
    /// ```
    #[inline]
    pub fn iter(&self) -> Iter<'_, BIT_COUNT, WORD_COUNT> {
        Iter {
            words: &self.0,
            idx: 0,
        }
    }

    /// Returns an iterator over the indices of all set bits, in ascending
    /// order. Runs in O(k + w) for k set bits and w words.
    ///
    /// # Examples
    /// ```
    /// use fixed_bitvec::{BitVector, word_count};
    ///
    /// let mut bv = BitVector::<130, { word_count(130) }>::new();
    /// bv.set(3)?.set(64)?.set(129)?;
    /// assert!(bv.iter_ones().eq([3, 64, 129]));
    /// # Ok::<(), fixed_bitvec::BitVectorError>(())
    /// ```
    #[inline]
    pub fn iter_ones(&self) -> IterOnes<'_, BIT_COUNT, WORD_COUNT> {
        IterOnes {
            words: &self.0,
            word_idx: 0,
            current: self.0.first().copied().unwrap_or(0),
        }
    }
}

impl<'bits, const BIT_COUNT: usize, const WORD_COUNT: usize> IntoIterator
    for &'bits BitVector<BIT_COUNT, WORD_COUNT>
{
    type Item = bool;
    type IntoIter = Iter<'bits, BIT_COUNT, WORD_COUNT>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over all bits of a vector as `bool` values, starting from index 0.
///
/// Returned by [`BitVector::iter()`].
#[derive(Clone, Copy)]
pub struct Iter<'bits, const BIT_COUNT: usize, const WORD_COUNT: usize> {
    words: &'bits [Word; WORD_COUNT],
    idx: usize,
}

impl<const BIT_COUNT: usize, const WORD_COUNT: usize> Iterator for Iter<'_, BIT_COUNT, WORD_COUNT> {
    type Item = bool;

    fn next(&mut self) -> Option<Self::Item> {
        if self.idx >= BIT_COUNT {
            return None;
        }
        let bit = (self.words[self.idx / WORD_BITS] >> (self.idx % WORD_BITS)) & 1;
        self.idx += 1;
        Some(bit != 0)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = BIT_COUNT.saturating_sub(self.idx);
        (remaining, Some(remaining))
    }
}

impl<const BIT_COUNT: usize, const WORD_COUNT: usize> ExactSizeIterator
    for Iter<'_, BIT_COUNT, WORD_COUNT>
{
}

impl<const BIT_COUNT: usize, const WORD_COUNT: usize> FusedIterator
    for Iter<'_, BIT_COUNT, WORD_COUNT>
{
}

/// Iterator over the indices of set bits, in ascending order.
///
/// Returned by [`BitVector::iter_ones()`].
#[derive(Clone, Copy)]
pub struct IterOnes<'bits, const BIT_COUNT: usize, const WORD_COUNT: usize> {
    words: &'bits [Word; WORD_COUNT],
    word_idx: usize,
    current: Word,
}

impl<const BIT_COUNT: usize, const WORD_COUNT: usize> Iterator
    for IterOnes<'_, BIT_COUNT, WORD_COUNT>
{
    type Item = usize;

    fn next(&mut self) -> Option<Self::Item> {
        while self.word_idx < WORD_COUNT {
            if self.current != 0 {
                let idx = self.word_idx * WORD_BITS + self.current.trailing_zeros() as usize;
                self.current &= self.current - 1; // unset lowest
                return Some(idx);
            }
            self.word_idx += 1;
            self.current = self.words.get(self.word_idx).copied().unwrap_or(0);
        }
        None
    }
}

impl<const BIT_COUNT: usize, const WORD_COUNT: usize> FusedIterator
    for IterOnes<'_, BIT_COUNT, WORD_COUNT>
{
}
