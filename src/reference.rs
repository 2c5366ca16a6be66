use core::fmt::{self, Debug, Formatter};

use crate::bitvector::BitVector;

/// A proxy for one bit of a [`BitVector`].
///
/// Returned by [`BitVector::bit_mut()`]. Reads, writes and flips go straight
/// through to the parent vector. The proxy borrows the vector mutably, so it
/// can't outlive it and the vector can't be touched elsewhere while the proxy
/// is alive.
///
/// Two proxies compare equal when the bits they point at have the same
/// value, regardless of which vector or index they belong to.
pub struct BitRef<'bits, const BIT_COUNT: usize, const WORD_COUNT: usize> {
    bits: &'bits mut BitVector<BIT_COUNT, WORD_COUNT>,
    idx: usize,
}

impl<'bits, const BIT_COUNT: usize, const WORD_COUNT: usize> BitRef<'bits, BIT_COUNT, WORD_COUNT> {
    // idx is checked by the caller
    pub(crate) const fn new(bits: &'bits mut BitVector<BIT_COUNT, WORD_COUNT>, idx: usize) -> Self {
        Self { bits, idx }
    }

    /// Returns the index of the referenced bit.
    pub const fn index(&self) -> usize {
        self.idx
    }

    /// Returns the current value of the referenced bit.
    pub const fn get(&self) -> bool {
        self.bits.get(self.idx)
    }

    /// Writes `value` into the referenced bit.
    ///
    /// # Examples
    /// ```
    /// use fixed_bitvec::{BitVector, word_count};
    ///
    /// let mut bv = BitVector::<3, { word_count(3) }>::new();
    /// let mut bit = bv.bit_mut(1);
    /// bit.set(true);
    /// assert!(bit.get());
    /// assert_eq!(bv.to_u64(), Ok(0b010));
    /// ```
    pub const fn set(&mut self, value: bool) -> &mut Self {
        self.bits.write_bit(self.idx, value);
        self
    }

    /// Inverts the referenced bit.
    pub const fn flip(&mut self) -> &mut Self {
        self.bits.toggle_bit(self.idx);
        self
    }
}

impl<const BIT_COUNT: usize, const WORD_COUNT: usize> From<BitRef<'_, BIT_COUNT, WORD_COUNT>>
    for bool
{
    fn from(bit: BitRef<'_, BIT_COUNT, WORD_COUNT>) -> Self {
        bit.get()
    }
}

impl<const BIT_COUNT: usize, const WORD_COUNT: usize> PartialEq<bool>
    for BitRef<'_, BIT_COUNT, WORD_COUNT>
{
    fn eq(&self, other: &bool) -> bool {
        self.get() == *other
    }
}

impl<const BIT_COUNT: usize, const WORD_COUNT: usize, const OTHER_BITS: usize, const OTHER_WORDS: usize>
    PartialEq<BitRef<'_, OTHER_BITS, OTHER_WORDS>> for BitRef<'_, BIT_COUNT, WORD_COUNT>
{
    fn eq(&self, other: &BitRef<'_, OTHER_BITS, OTHER_WORDS>) -> bool {
        self.get() == other.get()
    }
}

impl<const BIT_COUNT: usize, const WORD_COUNT: usize> Debug for BitRef<'_, BIT_COUNT, WORD_COUNT> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("BitRef")
            .field("index", &self.idx)
            .field("value", &self.get())
            .finish()
    }
}
