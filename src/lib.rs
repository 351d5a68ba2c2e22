//! Arbitrary precision integers and fixed precision floating point numbers built on machine limbs, implemented purely in Rust.
//!
//! Numbers are represented by sequences of limbs: unsigned machine words, the least significant limb first.
//! The width of a limb is 32 bits by default, and can be reduced to 8 or 16 bits with features `limb8` and `limb16`.
//!
//! The library consists of the following layers:
//!
//! - [uint]: unsigned arithmetic over borrowed limb slices: comparison, addition, subtraction, multiplication,
//!   division by a single limb, and Knuth's long division.
//! - [Integer]: signed integer of an arbitrary size with euclidean division, decimal parsing and printing,
//!   greatest common divisor, and factorial.
//! - [Float]: floating point number with mantissa of a fixed number of limbs, with square root and π.
//!
//! Every operation which can fail returns `Result`, including memory allocation failures.
//!
//! ## Examples
//!
//! ```
//! use limbnum::{Float, Integer, Sign};
//!
//! let a = Integer::parse("1000000000000000000000").unwrap();
//! let b = Integer::from_limb(7).unwrap();
//!
//! let (q, r) = a.div_rem(&b).unwrap();
//!
//! assert_eq!(q.to_decimal_string().unwrap(), "142857142857142857142");
//! assert_eq!(r.to_decimal_string().unwrap(), "6");
//!
//! // Precision of 256 bits.
//! let p = 256 / limbnum::LIMB_BIT_SIZE;
//! let two = Float::from_limb(2, p).unwrap();
//! let sqrt2 = two.sqrt(p).unwrap();
//!
//! assert_eq!(sqrt2.sign(), Sign::Pos);
//! assert!(sqrt2.to_decimal_string().unwrap().starts_with("0.14142135623730950488"));
//! ```
//!
//! ## no_std
//!
//! The library can be used without the standard library by disabling the default features.
//! Heap allocation is still required.

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(missing_docs)]
#![deny(clippy::suspicious)]
#![allow(clippy::comparison_chain)]
#![allow(clippy::should_implement_trait)]
#![allow(clippy::collapsible_else_if)]
#![allow(clippy::collapsible_if)]
#![allow(clippy::module_inception)]
#![allow(clippy::len_without_is_empty)]

#[cfg(not(feature = "std"))]
extern crate alloc;

mod common;
mod defs;
mod int;
mod num;
mod ops;
mod parser;
mod strop;
mod version;

pub mod uint;

#[cfg(feature = "serde")]
mod for_3rd;

pub use crate::common::buf::LimbBuf;
pub use crate::defs::DecimalChunk;
pub use crate::defs::DoubleLimb;
pub use crate::defs::Error;
pub use crate::defs::Exponent;
pub use crate::defs::Limb;
pub use crate::defs::Sign;
pub use crate::int::Integer;
pub use crate::num::digits_for_precision;
pub use crate::num::Float;

pub use crate::defs::DECIMAL_CHUNK;
pub use crate::defs::EXPONENT_MAX;
pub use crate::defs::EXPONENT_MIN;
pub use crate::defs::LIMB_BASE;
pub use crate::defs::LIMB_BIT_SIZE;
pub use crate::defs::LIMB_DECIMAL_DIGITS;
pub use crate::defs::LIMB_MAX;

pub use crate::version::version_major;
pub use crate::version::version_minor;
pub use crate::version::version_patch;
pub use crate::version::version_prerelease;
pub use crate::version::version_string;
