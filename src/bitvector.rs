use core::ops::{
    BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Index, Not, Shl, ShlAssign,
    Shr, ShrAssign,
};

use crate::BitVectorError;
use crate::reference::BitRef;

/// The storage unit bits are packed into.
pub type Word = u64;

/// Number of bits held by one [`Word`].
pub const WORD_BITS: usize = Word::BITS as usize;

/// Computes the number of words needed to store `bit_count` bits.
///
/// Use it as a const expression in the type's generics so the word count
/// always matches the bit count.
///
/// # Examples
/// ```
/// use fixed_bitvec::word_count;
///
/// assert_eq!(word_count(0), 0);
/// assert_eq!(word_count(64), 1);
/// assert_eq!(word_count(65), 2);
/// assert_eq!(word_count(153), 3);
/// ```
pub const fn word_count(bit_count: usize) -> usize {
    bit_count.div_ceil(WORD_BITS)
}

/// A sequence of `BIT_COUNT` bits packed into `WORD_COUNT` machine words.
///
/// Bit `i` lives in word `i / 64` at position `i % 64`, so word 0 holds the
/// least significant bits. Positions of the last word at or beyond
/// `BIT_COUNT % 64` are always zero.
///
/// `WORD_COUNT` must be `word_count(BIT_COUNT)`. Any other value is rejected
/// at compile time by every constructor.
///
/// # Examples
/// ```
/// use fixed_bitvec::{BitVector, word_count};
///
/// let mut bv = BitVector::<5, { word_count(5) }>::from_u64(0x0f);
/// bv |= BitVector::from_u64(0x15);
/// assert_eq!(bv.to_u64(), Ok(0x1f));
/// assert!(bv.all());
/// ```
#[derive(PartialEq, Eq, Hash, Clone, Copy)]
pub struct BitVector<const BIT_COUNT: usize, const WORD_COUNT: usize>(pub(crate) [Word; WORD_COUNT]);

impl<const BIT_COUNT: usize, const WORD_COUNT: usize> BitVector<BIT_COUNT, WORD_COUNT> {
    const LAYOUT: () = assert!(
        word_count(BIT_COUNT) == WORD_COUNT,
        "WORD_COUNT must match word_count(BIT_COUNT)."
    );

    /// Number of bits in the vector.
    pub const LEN: usize = BIT_COUNT;

    /// Creates a vector with all bits unset.
    ///
    /// # Compiler Errors
    /// Fails to compile if `WORD_COUNT != word_count(BIT_COUNT)`.
    ///
    /// # Examples
    /// ```
    /// use fixed_bitvec::{BitVector, word_count};
    ///
    /// const EMPTY: BitVector<70, { word_count(70) }> = BitVector::new();
    /// assert!(EMPTY.none());
    /// ```
    ///
    /// A mismatched word count is rejected:
    /// ```compile_fail
    /// use fixed_bitvec::BitVector;
    ///
    /// let bv = BitVector::<10, 2>::new();
    /// ```
    pub const fn new() -> Self {
        let () = Self::LAYOUT;
        Self([0; WORD_COUNT])
    }

    /// Creates a vector with every bit set.
    pub const fn with_all_set() -> Self {
        let mut bv = Self::new();
        bv.set_all();
        bv
    }

    #[inline]
    pub(crate) const fn mask(idx: usize) -> Word {
        1 << (idx % WORD_BITS)
    }

    pub(crate) const fn out_of_range(idx: usize) -> BitVectorError {
        BitVectorError::OutOfRange {
            index: idx,
            len: BIT_COUNT,
        }
    }

    pub(crate) const fn clean_unused_bits(&mut self) {
        let bits_in_last = BIT_COUNT % WORD_BITS;
        if bits_in_last != 0 {
            self.0[WORD_COUNT - 1] &= (1 << bits_in_last) - 1;
        }
    }

    // callers guarantee idx < BIT_COUNT
    #[inline]
    pub(crate) const fn write_bit(&mut self, idx: usize, value: bool) {
        if value {
            self.0[idx / WORD_BITS] |= Self::mask(idx);
        } else {
            self.0[idx / WORD_BITS] &= !Self::mask(idx);
        }
    }

    #[inline]
    pub(crate) const fn toggle_bit(&mut self, idx: usize) {
        self.0[idx / WORD_BITS] ^= Self::mask(idx);
    }

    /// Returns the number of bits, `BIT_COUNT`.
    pub const fn size(&self) -> usize {
        BIT_COUNT
    }

    /// Returns the packed words, least significant word first.
    pub const fn words(&self) -> &[Word; WORD_COUNT] {
        &self.0
    }

    /// Sets the bit at `idx`.
    ///
    /// Returns `self` so calls can be chained.
    ///
    /// # Errors
    /// [`BitVectorError::OutOfRange`] if `idx >= BIT_COUNT`.
    ///
    /// # Examples
    /// ```
    /// use fixed_bitvec::{BitVector, word_count};
    ///
    /// let mut bv = BitVector::<153, { word_count(153) }>::new();
    /// *bv.set(100)? >>= 99;
    /// bv <<= 1;
    /// assert_eq!(bv.to_u64()?, 0x04);
    /// # Ok::<(), fixed_bitvec::BitVectorError>(())
    /// ```
    pub const fn set(&mut self, idx: usize) -> Result<&mut Self, BitVectorError> {
        if idx >= BIT_COUNT {
            return Err(Self::out_of_range(idx));
        }
        self.write_bit(idx, true);
        Ok(self)
    }

    /// Sets the bit at `idx` to `value`.
    ///
    /// # Errors
    /// [`BitVectorError::OutOfRange`] if `idx >= BIT_COUNT`.
    pub const fn set_to(&mut self, idx: usize, value: bool) -> Result<&mut Self, BitVectorError> {
        if idx >= BIT_COUNT {
            return Err(Self::out_of_range(idx));
        }
        self.write_bit(idx, value);
        Ok(self)
    }

    /// Sets every bit.
    pub const fn set_all(&mut self) -> &mut Self {
        self.0 = [Word::MAX; WORD_COUNT];
        self.clean_unused_bits();
        self
    }

    /// Clears the bit at `idx`.
    ///
    /// # Errors
    /// [`BitVectorError::OutOfRange`] if `idx >= BIT_COUNT`.
    pub const fn reset(&mut self, idx: usize) -> Result<&mut Self, BitVectorError> {
        if idx >= BIT_COUNT {
            return Err(Self::out_of_range(idx));
        }
        self.write_bit(idx, false);
        Ok(self)
    }

    /// Clears every bit.
    pub const fn reset_all(&mut self) -> &mut Self {
        self.0 = [0; WORD_COUNT];
        self
    }

    /// Inverts the bit at `idx`.
    ///
    /// # Errors
    /// [`BitVectorError::OutOfRange`] if `idx >= BIT_COUNT`.
    ///
    /// # Examples
    /// ```
    /// use fixed_bitvec::{BitVector, word_count};
    ///
    /// let mut bv = BitVector::<5, { word_count(5) }>::new();
    /// bv.flip(2)?;
    /// assert_eq!(bv.to_u64()?, 0x04);
    /// assert!(bv.flip(5).is_err());
    /// # Ok::<(), fixed_bitvec::BitVectorError>(())
    /// ```
    pub const fn flip(&mut self, idx: usize) -> Result<&mut Self, BitVectorError> {
        if idx >= BIT_COUNT {
            return Err(Self::out_of_range(idx));
        }
        self.toggle_bit(idx);
        Ok(self)
    }

    /// Inverts every bit.
    pub const fn flip_all(&mut self) -> &mut Self {
        self.in_place_bit_not();
        self
    }

    /// Returns the bit at `idx`, reporting an out-of-range index as an error.
    ///
    /// This is the checked counterpart of [`get`] and indexing.
    ///
    /// # Errors
    /// [`BitVectorError::OutOfRange`] if `idx >= BIT_COUNT`.
    ///
    /// [`get`]: BitVector::get
    pub const fn test(&self, idx: usize) -> Result<bool, BitVectorError> {
        if idx >= BIT_COUNT {
            return Err(Self::out_of_range(idx));
        }
        Ok(self.get(idx))
    }

    /// Returns the bit at `idx`.
    ///
    /// Unchecked tier: there is no error path. Use [`test`] for a checked
    /// read.
    ///
    /// # Panics
    /// Panics if `idx >= BIT_COUNT`, like slice indexing.
    ///
    /// [`test`]: BitVector::test
    #[inline]
    pub const fn get(&self, idx: usize) -> bool {
        assert!(idx < BIT_COUNT, "bit index out of bounds");
        self.0[idx / WORD_BITS] & Self::mask(idx) != 0
    }

    /// Returns a proxy for reading, writing and flipping the bit at `idx`.
    ///
    /// # Panics
    /// Panics if `idx >= BIT_COUNT`, like slice indexing.
    ///
    /// # Examples
    /// ```
    /// use fixed_bitvec::{BitVector, word_count};
    ///
    /// let mut bv = BitVector::<40, { word_count(40) }>::new();
    /// bv.bit_mut(20).set(true);
    /// assert!(bv[20]);
    /// bv.bit_mut(20).flip();
    /// assert!(!bv[20]);
    /// ```
    pub const fn bit_mut(&mut self, idx: usize) -> BitRef<'_, BIT_COUNT, WORD_COUNT> {
        assert!(idx < BIT_COUNT, "bit index out of bounds");
        BitRef::new(self, idx)
    }

    /// Returns `true` if at least one bit is set.
    pub const fn any(&self) -> bool {
        let mut i = 0;
        while i < WORD_COUNT {
            if self.0[i] != 0 {
                return true;
            }
            i += 1;
        }
        false
    }

    /// Returns `true` if no bit is set.
    pub const fn none(&self) -> bool {
        !self.any()
    }

    /// Returns `true` if every bit is set. A zero-length vector is vacuously
    /// full.
    ///
    /// # Examples
    /// ```
    /// use fixed_bitvec::BitVector;
    ///
    /// let empty = BitVector::<0, 0>::new();
    /// assert!(empty.all());
    /// assert!(!empty.any());
    /// ```
    pub const fn all(&self) -> bool {
        let full_words = BIT_COUNT / WORD_BITS;
        let mut i = 0;
        while i < full_words {
            if self.0[i] != Word::MAX {
                return false;
            }
            i += 1;
        }
        let bits_in_last = BIT_COUNT % WORD_BITS;
        bits_in_last == 0 || self.0[full_words] == (1 << bits_in_last) - 1
    }

    /// Returns the number of set bits.
    pub const fn count(&self) -> usize {
        let mut total = 0;
        let mut i = 0;
        while i < WORD_COUNT {
            total += self.0[i].count_ones() as usize;
            i += 1;
        }
        total
    }

    /// Compares two vectors bit by bit. Same as `==`, usable in const
    /// contexts.
    pub const fn equals(&self, other: &Self) -> bool {
        let mut i = 0;
        while i < WORD_COUNT {
            if self.0[i] != other.0[i] {
                return false;
            }
            i += 1;
        }
        true
    }

    /// Returns the bitwise AND of `self` and `other`.
    pub const fn bit_and(&self, other: &Self) -> Self {
        let mut result = *self;
        result.in_place_bit_and(other);
        result
    }

    /// Performs an in-place bitwise AND with `other`.
    pub const fn in_place_bit_and(&mut self, other: &Self) {
        let mut i = 0;
        while i < WORD_COUNT {
            self.0[i] &= other.0[i];
            i += 1;
        }
    }

    /// Returns the bitwise OR of `self` and `other`.
    pub const fn bit_or(&self, other: &Self) -> Self {
        let mut result = *self;
        result.in_place_bit_or(other);
        result
    }

    /// Performs an in-place bitwise OR with `other`.
    pub const fn in_place_bit_or(&mut self, other: &Self) {
        let mut i = 0;
        while i < WORD_COUNT {
            self.0[i] |= other.0[i];
            i += 1;
        }
    }

    /// Returns the bitwise XOR of `self` and `other`.
    pub const fn bit_xor(&self, other: &Self) -> Self {
        let mut result = *self;
        result.in_place_bit_xor(other);
        result
    }

    /// Performs an in-place bitwise XOR with `other`.
    pub const fn in_place_bit_xor(&mut self, other: &Self) {
        let mut i = 0;
        while i < WORD_COUNT {
            self.0[i] ^= other.0[i];
            i += 1;
        }
    }

    /// Returns a copy with every bit inverted.
    pub const fn bit_not(&self) -> Self {
        let mut result = *self;
        result.in_place_bit_not();
        result
    }

    /// Inverts every bit in place.
    pub const fn in_place_bit_not(&mut self) {
        let mut i = 0;
        while i < WORD_COUNT {
            self.0[i] = !self.0[i];
            i += 1;
        }
        self.clean_unused_bits();
    }

    /// Shifts bits towards higher indices by `n` positions, filling with unset
    /// bits.
    ///
    /// Bits moved beyond `BIT_COUNT` are lost. Any `n` is accepted; if
    /// `n >= BIT_COUNT` the vector is cleared.
    ///
    /// # Examples
    /// ```
    /// use fixed_bitvec::{BitVector, word_count};
    ///
    /// let mut bv = BitVector::<130, { word_count(130) }>::from_u64(1);
    /// bv.shift_left(129);
    /// assert!(bv[129]);
    /// bv.shift_left(1);
    /// assert!(bv.none());
    /// ```
    pub const fn shift_left(&mut self, n: usize) {
        if n >= BIT_COUNT {
            self.0 = [0; WORD_COUNT];
            return;
        }
        let word_shift = n / WORD_BITS;
        let bit_shift = n % WORD_BITS;

        if word_shift > 0 {
            let mut i = WORD_COUNT;
            while i > word_shift {
                i -= 1;
                self.0[i] = self.0[i - word_shift];
            }
            while i > 0 {
                i -= 1;
                self.0[i] = 0;
            }
        }

        if bit_shift > 0 {
            let mut i = WORD_COUNT;
            while i > 0 {
                i -= 1;
                let carry = if i > 0 {
                    self.0[i - 1] >> (WORD_BITS - bit_shift)
                } else {
                    0
                };
                self.0[i] = (self.0[i] << bit_shift) | carry;
            }
        }

        self.clean_unused_bits();
    }

    /// Shifts bits towards lower indices by `n` positions, filling with unset
    /// bits.
    ///
    /// Bits moved below index 0 are lost. Any `n` is accepted; if
    /// `n >= BIT_COUNT` the vector is cleared.
    ///
    /// # Examples
    /// ```
    /// use fixed_bitvec::{BitVector, word_count};
    ///
    /// let mut bv = BitVector::<5, { word_count(5) }>::from_u64(0x08);
    /// bv.shift_right(3);
    /// assert_eq!(bv.to_u64(), Ok(0x01));
    /// ```
    pub const fn shift_right(&mut self, n: usize) {
        if n >= BIT_COUNT {
            self.0 = [0; WORD_COUNT];
            return;
        }
        let word_shift = n / WORD_BITS;
        let bit_shift = n % WORD_BITS;

        if word_shift > 0 {
            let mut i = 0;
            while i < WORD_COUNT - word_shift {
                self.0[i] = self.0[i + word_shift];
                i += 1;
            }
            while i < WORD_COUNT {
                self.0[i] = 0;
                i += 1;
            }
        }

        if bit_shift > 0 {
            let mut i = 0;
            while i < WORD_COUNT {
                let carry = if i + 1 < WORD_COUNT {
                    self.0[i + 1] << (WORD_BITS - bit_shift)
                } else {
                    0
                };
                self.0[i] = (self.0[i] >> bit_shift) | carry;
                i += 1;
            }
        }
    }

    /// Returns a copy shifted towards higher indices by `n` positions.
    pub const fn shifted_left(mut self, n: usize) -> Self {
        self.shift_left(n);
        self
    }

    /// Returns a copy shifted towards lower indices by `n` positions.
    pub const fn shifted_right(mut self, n: usize) -> Self {
        self.shift_right(n);
        self
    }
}

impl<const BIT_COUNT: usize, const WORD_COUNT: usize> Default
    for BitVector<BIT_COUNT, WORD_COUNT>
{
    fn default() -> Self {
        Self::new()
    }
}

/// Unchecked read access, `bv[idx]`.
///
/// # Panics
/// Panics if `idx >= BIT_COUNT`. Use [`BitVector::test`] for a checked read.
impl<const BIT_COUNT: usize, const WORD_COUNT: usize> Index<usize>
    for BitVector<BIT_COUNT, WORD_COUNT>
{
    type Output = bool;

    fn index(&self, idx: usize) -> &Self::Output {
        if self.get(idx) { &true } else { &false }
    }
}

impl<const BIT_COUNT: usize, const WORD_COUNT: usize> BitAnd
    for BitVector<BIT_COUNT, WORD_COUNT>
{
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self::Output {
        self.bit_and(&rhs)
    }
}

impl<const BIT_COUNT: usize, const WORD_COUNT: usize> BitAndAssign
    for BitVector<BIT_COUNT, WORD_COUNT>
{
    fn bitand_assign(&mut self, rhs: Self) {
        self.in_place_bit_and(&rhs)
    }
}

impl<const BIT_COUNT: usize, const WORD_COUNT: usize> BitOr
    for BitVector<BIT_COUNT, WORD_COUNT>
{
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self::Output {
        self.bit_or(&rhs)
    }
}

impl<const BIT_COUNT: usize, const WORD_COUNT: usize> BitOrAssign
    for BitVector<BIT_COUNT, WORD_COUNT>
{
    fn bitor_assign(&mut self, rhs: Self) {
        self.in_place_bit_or(&rhs)
    }
}

impl<const BIT_COUNT: usize, const WORD_COUNT: usize> BitXor
    for BitVector<BIT_COUNT, WORD_COUNT>
{
    type Output = Self;

    fn bitxor(self, rhs: Self) -> Self::Output {
        self.bit_xor(&rhs)
    }
}

impl<const BIT_COUNT: usize, const WORD_COUNT: usize> BitXorAssign
    for BitVector<BIT_COUNT, WORD_COUNT>
{
    fn bitxor_assign(&mut self, rhs: Self) {
        self.in_place_bit_xor(&rhs)
    }
}

impl<const BIT_COUNT: usize, const WORD_COUNT: usize> Not for BitVector<BIT_COUNT, WORD_COUNT> {
    type Output = Self;

    fn not(self) -> Self::Output {
        self.bit_not()
    }
}

impl<const BIT_COUNT: usize, const WORD_COUNT: usize> Shl<usize>
    for BitVector<BIT_COUNT, WORD_COUNT>
{
    type Output = Self;

    fn shl(self, rhs: usize) -> Self::Output {
        self.shifted_left(rhs)
    }
}

impl<const BIT_COUNT: usize, const WORD_COUNT: usize> ShlAssign<usize>
    for BitVector<BIT_COUNT, WORD_COUNT>
{
    fn shl_assign(&mut self, rhs: usize) {
        self.shift_left(rhs);
    }
}

impl<const BIT_COUNT: usize, const WORD_COUNT: usize> Shr<usize>
    for BitVector<BIT_COUNT, WORD_COUNT>
{
    type Output = Self;

    fn shr(self, rhs: usize) -> Self::Output {
        self.shifted_right(rhs)
    }
}

impl<const BIT_COUNT: usize, const WORD_COUNT: usize> ShrAssign<usize>
    for BitVector<BIT_COUNT, WORD_COUNT>
{
    fn shr_assign(&mut self, rhs: usize) {
        self.shift_right(rhs);
    }
}
