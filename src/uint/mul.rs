//! Multiplication.

use crate::defs::DoubleLimb;
use crate::defs::Limb;
use crate::defs::LIMB_BIT_SIZE;
use crate::uint::normalized_len;

/// Multiplies `a` by `b`, writes the product to `dst`, and returns its normalized length.
/// `dst` must hold at least `a.len() + b.len()` limbs and must be filled with zeroes.
pub fn mul(a: &[Limb], b: &[Limb], dst: &mut [Limb]) -> usize {
    debug_assert!(dst.len() >= a.len() + b.len());
    debug_assert!(dst.iter().all(|v| *v == 0));

    for (i, ai) in a.iter().enumerate() {
        let ai = *ai as DoubleLimb;
        if ai == 0 {
            continue;
        }

        let mut k = 0;
        for (bj, dij) in b.iter().zip(dst[i..].iter_mut()) {
            let m = ai * (*bj as DoubleLimb) + *dij as DoubleLimb + k;

            *dij = m as Limb;
            k = m >> LIMB_BIT_SIZE;
        }
        dst[i + b.len()] = k as Limb;
    }

    normalized_len(&dst[..a.len() + b.len()])
}

/// Multiplies `a` by limb `v` in place and returns the most significant limb of the product
/// that does not fit in `a`.
pub fn mul_limb(a: &mut [Limb], v: Limb) -> Limb {
    let v = v as DoubleLimb;
    let mut k = 0;
    for d in a.iter_mut() {
        let m = *d as DoubleLimb * v + k;
        *d = m as Limb;
        k = m >> LIMB_BIT_SIZE;
    }
    k as Limb
}

#[cfg(test)]
mod tests {

    use super::*;
    use crate::defs::LIMB_MAX;

    #[test]
    fn test_mul() {
        let mut d = [0; 4];
        assert_eq!(mul(&[LIMB_MAX, LIMB_MAX], &[LIMB_MAX, LIMB_MAX], &mut d), 4);
        // (B^2 - 1)^2 = B^4 - 2*B^2 + 1
        assert_eq!(d, [1, 0, LIMB_MAX - 1, LIMB_MAX]);

        let mut d = [0; 3];
        assert_eq!(mul(&[2], &[3, 1], &mut d), 2);
        assert_eq!(d, [6, 2, 0]);

        let mut d = [0; 2];
        assert_eq!(mul(&[0, 1], &[], &mut d), 0);
    }

    #[test]
    fn test_mul_limb() {
        let mut a = [LIMB_MAX, 1];
        assert_eq!(mul_limb(&mut a, 2), 0);
        assert_eq!(a, [LIMB_MAX - 1, 3]);

        let mut a = [LIMB_MAX, LIMB_MAX];
        assert_eq!(mul_limb(&mut a, LIMB_MAX), LIMB_MAX - 1);
        assert_eq!(a, [1, LIMB_MAX]);
    }
}
