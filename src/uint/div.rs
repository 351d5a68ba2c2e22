//! Division.

use crate::common::buf::LimbBuf;
use crate::common::util::shift_slice_left_copy;
use crate::common::util::shift_slice_right_copy;
use crate::defs::DoubleLimb;
use crate::defs::Error;
use crate::defs::Limb;
use crate::defs::LIMB_BASE;
use crate::defs::LIMB_BIT_SIZE;
use crate::uint::normalized_len;

/// Divides `a` by limb `d`, writes the quotient to `q`, and returns the remainder.
/// `q` must hold at least `a.len()` limbs; `d` must not be zero.
pub fn div_limb(a: &[Limb], d: Limb, q: &mut [Limb]) -> Limb {
    debug_assert!(d != 0);
    debug_assert!(q.len() >= a.len());

    let d = d as DoubleLimb;
    let mut rh: DoubleLimb = 0;

    for (v, qv) in a.iter().zip(q.iter_mut()).rev() {
        let qh = (rh << LIMB_BIT_SIZE) | *v as DoubleLimb;
        rh = qh % d;
        *qv = (qh / d) as Limb;
    }

    rh as Limb
}

/// Divides `a` by limb `d` in place and returns the remainder. `d` must not be zero.
pub fn div_limb_assign(a: &mut [Limb], d: Limb) -> Limb {
    debug_assert!(d != 0);

    let d = d as DoubleLimb;
    let mut rh: DoubleLimb = 0;

    for v in a.iter_mut().rev() {
        let qh = (rh << LIMB_BIT_SIZE) | *v as DoubleLimb;
        rh = qh % d;
        *v = (qh / d) as Limb;
    }

    rh as Limb
}

/// Divides `a` by `b` using Knuth's algorithm D, writes the quotient to `q` and the remainder to `r`.
/// Returns the normalized lengths of the quotient and the remainder.
///
/// Inputs must not have most significant zero limbs, and `a.len() >= b.len() >= 2`.
/// `q` must hold at least `a.len() - b.len() + 1` limbs, `r` at least `b.len()` limbs.
///
/// ## Errors
///
///  - MemoryAllocation: failed to allocate memory for the working buffers.
pub fn div_knuth(
    a: &[Limb],
    b: &[Limb],
    q: &mut [Limb],
    r: &mut [Limb],
) -> Result<(usize, usize), Error> {
    let n = b.len();

    debug_assert!(n >= 2 && a.len() >= n);
    debug_assert!(b[n - 1] != 0);
    debug_assert!(q.len() > a.len() - n);
    debug_assert!(r.len() >= n);

    let m = a.len() - n;

    // normalize: the most significant bit of the divisor's leading limb is set
    let shift = b[n - 1].leading_zeros() as usize;

    let mut vbuf = LimbBuf::new(n)?;
    let mut ubuf = LimbBuf::new(a.len() + 1)?;

    shift_slice_left_copy(b, &mut vbuf, shift);
    let hi = shift_slice_left_copy(a, &mut ubuf, shift);
    ubuf[a.len()] = hi;

    let v: &[Limb] = &vbuf;
    let u: &mut [Limb] = &mut ubuf;

    let v1 = v[n - 1] as DoubleLimb;
    let v2 = v[n - 2] as DoubleLimb;

    for j in (0..=m).rev() {
        // estimate quotient digit from the three leading limbs of the current remainder
        let num = ((u[j + n] as DoubleLimb) << LIMB_BIT_SIZE) | u[j + n - 1] as DoubleLimb;
        let u0 = u[j + n - 2] as DoubleLimb;

        let mut qh = num / v1;
        let mut rh = num % v1;

        if qh >= LIMB_BASE {
            // u[j + n] == v1
            qh = LIMB_BASE - 1;
            rh = num - qh * v1;
        }

        // at most two corrections
        for _ in 0..2 {
            if rh < LIMB_BASE && qh * v2 > ((rh << LIMB_BIT_SIZE) | u0) {
                qh -= 1;
                rh += v1;
            } else {
                break;
            }
        }

        // u[j..j+n+1] -= qh * v
        let mut k: DoubleLimb = 0;
        let mut c = false;
        for (vi, ui) in v.iter().zip(u[j..j + n].iter_mut()) {
            let p = qh * (*vi as DoubleLimb) + k;
            k = p >> LIMB_BIT_SIZE;
            let (t, b1) = ui.overflowing_sub(p as Limb);
            let (t, b2) = t.overflowing_sub(c as Limb);
            *ui = t;
            c = b1 || b2;
        }
        let (t, b1) = u[j + n].overflowing_sub(k as Limb);
        let (t, b2) = t.overflowing_sub(c as Limb);
        u[j + n] = t;

        if b1 || b2 {
            // the estimate was one too large: add the divisor back
            qh -= 1;
            let mut c: DoubleLimb = 0;
            for (vi, ui) in v.iter().zip(u[j..j + n].iter_mut()) {
                let s = *ui as DoubleLimb + *vi as DoubleLimb + c;
                *ui = s as Limb;
                c = s >> LIMB_BIT_SIZE;
            }
            u[j + n] = u[j + n].wrapping_add(c as Limb);
        }

        q[j] = qh as Limb;
    }

    q[m + 1..].fill(0);

    // denormalize the remainder
    shift_slice_right_copy(&u[..n], r, shift);
    r[n..].fill(0);

    Ok((normalized_len(&q[..m + 1]), normalized_len(&r[..n])))
}
