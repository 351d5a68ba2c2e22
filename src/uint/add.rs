//! Addition and subtraction.

use crate::common::util::add_carry;
use crate::common::util::sub_borrow;
use crate::defs::Limb;
use crate::uint::normalized_len;
use itertools::izip;

/// Adds `a` and `b`, writes the sum to `dst`, and returns the length of the sum.
/// `dst` must hold at least `max(a.len(), b.len()) + 1` limbs.
pub fn add(a: &[Limb], b: &[Limb], dst: &mut [Limb]) -> usize {
    let (long, short) = if a.len() >= b.len() { (a, b) } else { (b, a) };

    debug_assert!(dst.len() > long.len());

    let mut c = 0;

    for (d, x, y) in izip!(dst.iter_mut(), long.iter(), short.iter()) {
        c = add_carry(*x, *y, c, d);
    }

    for (d, x) in dst[short.len()..long.len()]
        .iter_mut()
        .zip(long[short.len()..].iter())
    {
        c = add_carry(*x, 0, c, d);
    }

    dst[long.len()] = c;

    if c > 0 {
        long.len() + 1
    } else {
        long.len()
    }
}

/// Subtracts `b` from `a`, writes the difference to `dst`, and returns its normalized length.
/// `a` must not be smaller than `b`, and `dst` must hold at least `a.len()` limbs.
pub fn sub(a: &[Limb], b: &[Limb], dst: &mut [Limb]) -> usize {
    debug_assert!(a.len() >= b.len());
    debug_assert!(dst.len() >= a.len());

    let mut c = 0;

    for (d, x, y) in izip!(dst.iter_mut(), a.iter(), b.iter()) {
        c = sub_borrow(*x, *y, c, d);
    }

    for (d, x) in dst[b.len()..a.len()].iter_mut().zip(a[b.len()..].iter()) {
        c = sub_borrow(*x, 0, c, d);
    }

    debug_assert!(c == 0);

    normalized_len(&dst[..a.len()])
}

/// Adds limb `v` to `a` in place and returns the carry out of the most significant limb.
pub fn incr(a: &mut [Limb], v: Limb) -> Limb {
    let mut c = v;
    for d in a.iter_mut() {
        if c == 0 {
            break;
        }
        c = add_carry(*d, c, 0, d);
    }
    c
}

/// Subtracts limb `v` from `a` in place and returns the borrow out of the most significant limb.
pub fn decr(a: &mut [Limb], v: Limb) -> Limb {
    let mut c = v;
    for d in a.iter_mut() {
        if c == 0 {
            break;
        }
        c = sub_borrow(*d, c, 0, d);
    }
    c
}
