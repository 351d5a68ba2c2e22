//! Comparison.

use crate::defs::Limb;
use core::cmp::Ordering;

/// Compares two unsigned integers without most significant zero limbs.
///
/// A longer input is greater; inputs of equal length are compared starting from the most significant limb.
/// Two empty inputs are equal.
pub fn cmp(a: &[Limb], b: &[Limb]) -> Ordering {
    debug_assert!(a.last() != Some(&0));
    debug_assert!(b.last() != Some(&0));

    match a.len().cmp(&b.len()) {
        Ordering::Equal => a.iter().rev().cmp(b.iter().rev()),
        ord => ord,
    }
}
