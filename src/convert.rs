//! Conversions between [`BitVector`] and integers, character sequences and
//! formatted text, plus the word-folding hash.
//!
//! Character sequences are read most significant bit first: the first
//! character consumed becomes the highest bit of the kept span, which matches
//! positional notation and the output of [`Display`].

#[cfg(feature = "alloc")]
use alloc::{string::String, vec::Vec};
use core::fmt::{self, Binary, Debug, Display, Formatter, Write};
use core::str::FromStr;

use crate::BitVectorError;
use crate::bitvector::{BitVector, WORD_BITS};

const HASH_ROTATION: usize = 13;

impl<const BIT_COUNT: usize, const WORD_COUNT: usize> BitVector<BIT_COUNT, WORD_COUNT> {
    /// Creates a vector from the bits of `value`.
    ///
    /// Bits of `value` at or beyond `BIT_COUNT` are discarded, bits of the
    /// vector beyond 64 are zero.
    ///
    /// # Examples
    /// ```
    /// use fixed_bitvec::{BitVector, word_count};
    ///
    /// let bv = BitVector::<5, { word_count(5) }>::from_u64(0xff);
    /// assert_eq!(bv.to_u64(), Ok(0x1f));
    /// ```
    pub const fn from_u64(value: u64) -> Self {
        let mut bv = Self::new();
        if WORD_COUNT > 0 {
            bv.0[0] = value;
            bv.clean_unused_bits();
        }
        bv
    }

    /// Returns the value as a `u64`.
    ///
    /// # Errors
    /// [`BitVectorError::Overflow`] if a bit at index 64 or above is set.
    pub const fn to_u64(&self) -> Result<u64, BitVectorError> {
        let mut i = 1;
        while i < WORD_COUNT {
            if self.0[i] != 0 {
                return Err(BitVectorError::Overflow { bits: u64::BITS });
            }
            i += 1;
        }
        if WORD_COUNT == 0 {
            Ok(0)
        } else {
            Ok(self.0[0])
        }
    }

    /// Returns the value as a `u32`.
    ///
    /// # Errors
    /// [`BitVectorError::Overflow`] if a bit at index 32 or above is set.
    pub const fn to_u32(&self) -> Result<u32, BitVectorError> {
        match self.to_u64() {
            Ok(value) if value <= u32::MAX as u64 => Ok(value as u32),
            _ => Err(BitVectorError::Overflow { bits: u32::BITS }),
        }
    }

    /// Parses a byte string of `'0'` and `'1'`, most significant bit first.
    ///
    /// See [`from_ascii_with`] for the exact rules.
    ///
    /// # Errors
    /// [`BitVectorError::InvalidFormat`] on any other byte.
    ///
    /// # Examples
    /// ```
    /// use fixed_bitvec::{BitVector, word_count};
    ///
    /// const X: BitVector<5, { word_count(5) }> = match BitVector::from_ascii(b"10101") {
    ///     Ok(bv) => bv,
    ///     Err(_) => panic!("invalid literal"),
    /// };
    /// assert_eq!(X.to_u64(), Ok(0x15));
    /// ```
    ///
    /// [`from_ascii_with`]: BitVector::from_ascii_with
    pub const fn from_ascii(bytes: &[u8]) -> Result<Self, BitVectorError> {
        Self::from_ascii_with(bytes, 0, None, b'0', b'1')
    }

    /// Parses `count` bytes of `bytes` starting at `pos`, using `zero` and
    /// `one` as the bit symbols.
    ///
    /// `count == None` reads to the end. The span read is
    /// `min(count, bytes.len() - pos)` bytes and all of them are validated.
    /// Only the first `min(span, BIT_COUNT)` of them carry into the vector:
    /// the byte at `pos + k` becomes bit `kept - 1 - k`. Higher bits stay
    /// unset.
    ///
    /// # Errors
    /// - [`BitVectorError::OutOfRange`] if `pos > bytes.len()`.
    /// - [`BitVectorError::InvalidFormat`] if a byte of the span is neither
    ///   `zero` nor `one`.
    pub const fn from_ascii_with(
        bytes: &[u8],
        pos: usize,
        count: Option<usize>,
        zero: u8,
        one: u8,
    ) -> Result<Self, BitVectorError> {
        if pos > bytes.len() {
            return Err(BitVectorError::OutOfRange {
                index: pos,
                len: bytes.len(),
            });
        }
        let span = clamp_span(count, bytes.len() - pos);
        let kept = if span < BIT_COUNT { span } else { BIT_COUNT };

        let mut bv = Self::new();
        let mut k = 0;
        while k < span {
            let byte = bytes[pos + k];
            if byte == one {
                if k < kept {
                    bv.write_bit(kept - 1 - k, true);
                }
            } else if byte != zero {
                return Err(BitVectorError::InvalidFormat { position: pos + k });
            }
            k += 1;
        }
        Ok(bv)
    }

    /// Parses a slice of arbitrary symbols, such as `u8`, `u16` code units
    /// or `char`s.
    ///
    /// Follows the same rules as [`from_ascii_with`].
    ///
    /// # Errors
    /// Same as [`from_ascii_with`].
    ///
    /// # Examples
    /// ```
    /// use fixed_bitvec::{BitVector, word_count};
    ///
    /// let wide: Vec<u16> = "babba".encode_utf16().collect();
    /// let bv = BitVector::<5, { word_count(5) }>::from_symbols(&wide, 0, None, 'a' as u16, 'b' as u16)?;
    /// assert_eq!(bv.to_u64()?, 0b10110);
    /// # Ok::<(), fixed_bitvec::BitVectorError>(())
    /// ```
    ///
    /// [`from_ascii_with`]: BitVector::from_ascii_with
    pub fn from_symbols<C: Copy + PartialEq>(
        symbols: &[C],
        pos: usize,
        count: Option<usize>,
        zero: C,
        one: C,
    ) -> Result<Self, BitVectorError> {
        Self::parse_span(symbols.iter().copied(), pos, count, zero, one)
    }

    /// Parses a string slice, with `pos` and `count` measured in `char`s.
    ///
    /// Follows the same rules as [`from_ascii_with`].
    ///
    /// # Errors
    /// Same as [`from_ascii_with`].
    ///
    /// # Examples
    /// ```
    /// use fixed_bitvec::{BitVector, word_count};
    ///
    /// let bv = BitVector::<10, { word_count(10) }>::from_str_with("xxx1010101010xxxx", 3, Some(10), '0', '1')?;
    /// assert_eq!(bv.to_string(), "1010101010");
    /// # Ok::<(), fixed_bitvec::BitVectorError>(())
    /// ```
    ///
    /// [`from_ascii_with`]: BitVector::from_ascii_with
    pub fn from_str_with(
        s: &str,
        pos: usize,
        count: Option<usize>,
        zero: char,
        one: char,
    ) -> Result<Self, BitVectorError> {
        Self::parse_span(s.chars(), pos, count, zero, one)
    }

    // Single pass over `symbols`. The k-th kept symbol is parked at bit
    // `BIT_COUNT - 1 - k` and the block is moved down once the span length is
    // known, so the first symbol ends up as the highest bit of the span.
    fn parse_span<C: PartialEq>(
        mut symbols: impl Iterator<Item = C>,
        pos: usize,
        count: Option<usize>,
        zero: C,
        one: C,
    ) -> Result<Self, BitVectorError> {
        for skipped in 0..pos {
            if symbols.next().is_none() {
                return Err(BitVectorError::OutOfRange {
                    index: pos,
                    len: skipped,
                });
            }
        }

        let mut bv = Self::new();
        let mut span = 0;
        for symbol in symbols.take(count.unwrap_or(usize::MAX)) {
            if symbol == one {
                if span < BIT_COUNT {
                    bv.write_bit(BIT_COUNT - 1 - span, true);
                }
            } else if symbol != zero {
                return Err(BitVectorError::InvalidFormat {
                    position: pos + span,
                });
            }
            span += 1;
        }
        if span < BIT_COUNT {
            bv.shift_right(BIT_COUNT - span);
        }
        Ok(bv)
    }

    /// Writes the bits most significant first, using `zero` and `one` as
    /// symbols. Doesn't allocate.
    pub fn write_bits<W: Write>(&self, out: &mut W, zero: char, one: char) -> fmt::Result {
        for idx in (0..BIT_COUNT).rev() {
            out.write_char(if self.get(idx) { one } else { zero })?;
        }
        Ok(())
    }

    /// Returns the bits as a string, most significant first, using `zero`
    /// and `one` as symbols.
    ///
    /// # Examples
    /// ```
    /// use fixed_bitvec::{BitVector, word_count};
    ///
    /// let bv = BitVector::<5, { word_count(5) }>::from_u64(0b11011);
    /// assert_eq!(bv.to_string_with('x', 'y'), "yyxyy");
    /// ```
    #[cfg(feature = "alloc")]
    pub fn to_string_with(&self, zero: char, one: char) -> String {
        let mut out = String::with_capacity(BIT_COUNT);
        // writing into a `String` never fails
        let _ = self.write_bits(&mut out, zero, one);
        out
    }

    /// Returns the bits as symbols of any type, most significant first.
    #[cfg(feature = "alloc")]
    pub fn to_symbols<C: Copy>(&self, zero: C, one: C) -> Vec<C> {
        (0..BIT_COUNT)
            .rev()
            .map(|idx| if self.get(idx) { one } else { zero })
            .collect()
    }

    /// Folds the words, lowest first, into a single hash value.
    ///
    /// Equal vectors always produce equal values. A vector whose only
    /// non-zero word is the lowest hashes to that word.
    ///
    /// # Examples
    /// ```
    /// use fixed_bitvec::{BitVector, word_count};
    ///
    /// let bv = BitVector::<1000, { word_count(1000) }>::from_u64(1000);
    /// assert_eq!(bv.hash_value(), 1000);
    /// ```
    pub const fn hash_value(&self) -> u64 {
        let mut hash = 0;
        let mut i = 0;
        while i < WORD_COUNT {
            let rotation = (i * HASH_ROTATION) % WORD_BITS;
            hash ^= self.0[i].rotate_left(rotation as u32);
            i += 1;
        }
        hash
    }
}

const fn clamp_span(count: Option<usize>, remaining: usize) -> usize {
    match count {
        Some(count) if count < remaining => count,
        _ => remaining,
    }
}

impl<const BIT_COUNT: usize, const WORD_COUNT: usize> From<u64>
    for BitVector<BIT_COUNT, WORD_COUNT>
{
    fn from(value: u64) -> Self {
        Self::from_u64(value)
    }
}

impl<const BIT_COUNT: usize, const WORD_COUNT: usize> From<u32>
    for BitVector<BIT_COUNT, WORD_COUNT>
{
    fn from(value: u32) -> Self {
        Self::from_u64(value.into())
    }
}

impl<const BIT_COUNT: usize, const WORD_COUNT: usize> TryFrom<BitVector<BIT_COUNT, WORD_COUNT>>
    for u64
{
    type Error = BitVectorError;

    fn try_from(bv: BitVector<BIT_COUNT, WORD_COUNT>) -> Result<Self, Self::Error> {
        bv.to_u64()
    }
}

impl<const BIT_COUNT: usize, const WORD_COUNT: usize> TryFrom<BitVector<BIT_COUNT, WORD_COUNT>>
    for u32
{
    type Error = BitVectorError;

    fn try_from(bv: BitVector<BIT_COUNT, WORD_COUNT>) -> Result<Self, Self::Error> {
        bv.to_u32()
    }
}

/// Parses `'0'`/`'1'` text, most significant bit first.
impl<const BIT_COUNT: usize, const WORD_COUNT: usize> FromStr
    for BitVector<BIT_COUNT, WORD_COUNT>
{
    type Err = BitVectorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_str_with(s, 0, None, '0', '1')
    }
}

impl<const BIT_COUNT: usize, const WORD_COUNT: usize> TryFrom<&str>
    for BitVector<BIT_COUNT, WORD_COUNT>
{
    type Error = BitVectorError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl<const BIT_COUNT: usize, const WORD_COUNT: usize> Display
    for BitVector<BIT_COUNT, WORD_COUNT>
{
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        self.write_bits(f, '0', '1')
    }
}

impl<const BIT_COUNT: usize, const WORD_COUNT: usize> Binary for BitVector<BIT_COUNT, WORD_COUNT> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            f.write_str("0b")?;
        }
        self.write_bits(f, '0', '1')
    }
}

impl<const BIT_COUNT: usize, const WORD_COUNT: usize> Debug for BitVector<BIT_COUNT, WORD_COUNT> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "BitVector<{BIT_COUNT}>(")?;
        self.write_bits(f, '0', '1')?;
        write!(f, ")")
    }
}
