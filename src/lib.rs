//! A fixed-size bit vector packed into machine words, written in pure Rust.
//! `no_std`, no `unsafe`, no heap in any core operation.
//!
//! [`BitVector`] is the main struct in this library. The number of bits is a
//! const generic parameter, and nearly every operation is a `const fn`, so
//! vectors can be built, combined and inspected at compile time.
//!
//! # Examples
//! ```
//! use fixed_bitvec::{BitVector, word_count};
//!
//! const BIT_COUNT: usize = 5;
//! let mut bv = BitVector::<BIT_COUNT, { word_count(BIT_COUNT) }>::from_u64(0x0f);
//! bv ^= "10101".parse()?;
//! assert_eq!(bv.to_u64()?, 0x1a);
//! assert_eq!(bv.to_string(), "11010");
//! assert_eq!(bv.count(), 3);
//! assert!(bv.test(5).is_err());
//! # Ok::<(), fixed_bitvec::BitVectorError>(())
//! ```
//!
//! # Features
//!
//! - `#![no_std]` compatible; the `alloc` feature (on by default) adds the
//!   `String`/`Vec` producing conversions
//! - Const-generic API: `BitVector<const BIT_COUNT, const WORD_COUNT>` with
//!   `WORD_COUNT = word_count(BIT_COUNT)`, including `BIT_COUNT == 0`
//! - Bitwise ops: `&`, `|`, `^`, `!`, `<<`, `>>` and their assigning forms
//! - Checked access (`test`, `set`, `reset`, `flip`) returning
//!   [`BitVectorError`], and unchecked indexing (`bv[i]`, `bit_mut`)
//! - Queries: `any`, `all`, `none`, `count`
//! - Conversions to and from `u32`/`u64` and bit strings with custom symbols
//! - Iteration: `iter()` over all bits, `iter_ones()` over set indices

#![deny(missing_docs)]
#![forbid(unsafe_code)]
#![no_std]

#[cfg(feature = "alloc")]
extern crate alloc;

mod bitvector;
mod convert;
mod error;
mod iter;
mod reference;

pub use bitvector::{BitVector, WORD_BITS, Word, word_count};
pub use error::BitVectorError;
pub use iter::{Iter, IterOnes};
pub use reference::BitRef;
