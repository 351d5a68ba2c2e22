//! Unsigned arithmetic over borrowed limb slices.
//!
//! Limbs are little-endian: the least significant limb has index 0.
//! Functions here never allocate result storage and never deal with signs:
//! the caller provides destination slices of sufficient size and gets back the
//! normalized length of the result.

mod add;
mod cmp;
mod conv;
mod div;
mod mul;

pub use add::add;
pub use add::decr;
pub use add::incr;
pub use add::sub;
pub use cmp::cmp;
pub use conv::print;
pub use conv::print_size;
pub use div::div_knuth;
pub use div::div_limb;
pub use div::div_limb_assign;
pub use mul::mul;
pub use mul::mul_limb;

use crate::defs::Limb;

/// Length of `m` without the most significant zero limbs.
#[inline]
pub fn normalized_len(m: &[Limb]) -> usize {
    m.len() - m.iter().rev().take_while(|x| **x == 0).count()
}
