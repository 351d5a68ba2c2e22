//! Auxiliary functions.

use crate::defs::{DoubleLimb, Limb, LIMB_BASE, LIMB_BIT_SIZE};

/// integer logarithm base 2 of a number.
pub fn log2_ceil(mut n: usize) -> usize {
    let mut ret = 0;
    let mut sticky = 0;
    while n > 1 {
        if n & 1 != 0 {
            sticky = 1;
        }
        ret += 1;
        n >>= 1;
    }
    ret + sticky
}

/// Integer square root: the largest `x` such that `x*x <= a`.
pub fn sqrt_int(a: u128) -> u64 {
    if a == 0 {
        return 0;
    }

    // initial value is not smaller than the root
    let mut x = 1u128 << ((128 - a.leading_zeros() as usize + 1) / 2);
    loop {
        let y = (x + a / x) >> 1;
        if y >= x {
            break;
        }
        x = y;
    }
    x as u64
}

// log10(2) * 2^64 rounded down.
const LOG10_2_FIXED: i128 = 5553023288523357132;

/// Lower bound of the number of decimal digits in a number of `n` bits: floor(n * log10(2)).
/// Negative `n` gives a lower bound for the negative power of ten.
#[inline]
pub fn bits_to_decimal_digits(n: i64) -> i64 {
    let c = if n < 0 { LOG10_2_FIXED + 1 } else { LOG10_2_FIXED };
    ((n as i128 * c) >> 64) as i64
}

#[inline(always)]
pub fn add_carry(a: Limb, b: Limb, c: Limb, r: &mut Limb) -> Limb {
    let mut s = c as DoubleLimb + a as DoubleLimb + b as DoubleLimb;
    if s >= LIMB_BASE {
        s -= LIMB_BASE;
        *r = s as Limb;
        1
    } else {
        *r = s as Limb;
        0
    }
}

#[inline(always)]
pub fn sub_borrow(a: Limb, b: Limb, c: Limb, r: &mut Limb) -> Limb {
    let v1 = a as DoubleLimb;
    let v2 = b as DoubleLimb + c as DoubleLimb;

    if v1 < v2 {
        *r = (v1 + LIMB_BASE - v2) as Limb;
        1
    } else {
        *r = (v1 - v2) as Limb;
        0
    }
}

// Shift m left by n bits (n < LIMB_BIT_SIZE) and put result in m2; returns bits shifted out.
pub fn shift_slice_left_copy(m: &[Limb], m2: &mut [Limb], n: usize) -> Limb {
    debug_assert!(n < LIMB_BIT_SIZE);
    debug_assert!(m2.len() >= m.len());

    if n == 0 {
        m2[..m.len()].copy_from_slice(m);
        0
    } else {
        let mut prev = 0;
        for (a, b) in m.iter().zip(m2.iter_mut()) {
            *b = (prev >> (LIMB_BIT_SIZE - n)) | (*a << n);
            prev = *a;
        }
        prev >> (LIMB_BIT_SIZE - n)
    }
}

// Shift m right by n bits (n < LIMB_BIT_SIZE) and put result in m2.
pub fn shift_slice_right_copy(m: &[Limb], m2: &mut [Limb], n: usize) {
    debug_assert!(n < LIMB_BIT_SIZE);
    debug_assert!(m2.len() >= m.len());

    if n == 0 {
        m2[..m.len()].copy_from_slice(m);
    } else {
        let mut prev = 0;
        for (a, b) in m.iter().zip(m2.iter_mut()).rev() {
            *b = (prev << (LIMB_BIT_SIZE - n)) | (*a >> n);
            prev = *a;
        }
    }
}

#[cfg(test)]
mod tests {

    use super::*;
    use crate::defs::LIMB_MAX;
    use rand::random;

    #[test]
    fn test_log2() {
        assert_eq!(log2_ceil(1), 0);
        assert_eq!(log2_ceil(2), 1);
        assert_eq!(log2_ceil(3), 2);
        assert_eq!(log2_ceil(1024), 10);
        assert_eq!(log2_ceil(1025), 11);
    }

    #[test]
    fn test_sqrt_int() {
        assert_eq!(sqrt_int(0), 0);
        assert_eq!(sqrt_int(1), 1);
        assert_eq!(sqrt_int(15), 3);
        assert_eq!(sqrt_int(16), 4);
        assert_eq!(sqrt_int(u128::MAX), u64::MAX);

        for _ in 0..1000 {
            let a = random::<u128>() >> (random::<u32>() % 128);
            let x = sqrt_int(a) as u128;
            assert!(x * x <= a);
            assert!((x + 1).checked_mul(x + 1).map(|v| v > a).unwrap_or(true));
        }
    }

    #[test]
    fn test_bits_to_decimal_digits() {
        assert_eq!(bits_to_decimal_digits(0), 0);
        assert_eq!(bits_to_decimal_digits(10), 3);
        assert_eq!(bits_to_decimal_digits(1024), 308);
        assert_eq!(bits_to_decimal_digits(-10), -4);

        // exact for exponents of any float
        assert_eq!(bits_to_decimal_digits(1_280_000), 385318);
        assert_eq!(bits_to_decimal_digits(-1_280_000), -385319);
        assert_eq!(bits_to_decimal_digits(1 << 36), 20686623783);
        assert_eq!(bits_to_decimal_digits(-(1 << 36)), -20686623784);
    }

    #[test]
    fn test_carry() {
        let mut r = 0;
        assert_eq!(add_carry(LIMB_MAX, 1, 0, &mut r), 1);
        assert_eq!(r, 0);
        assert_eq!(add_carry(LIMB_MAX, LIMB_MAX, 1, &mut r), 1);
        assert_eq!(r, LIMB_MAX);
        assert_eq!(sub_borrow(0, 1, 0, &mut r), 1);
        assert_eq!(r, LIMB_MAX);
        assert_eq!(sub_borrow(5, 3, 1, &mut r), 0);
        assert_eq!(r, 1);
    }

    #[test]
    fn test_shift() {
        let src = [LIMB_MAX, 1, 0];
        let mut dst = [0; 3];
        let c = shift_slice_left_copy(&src, &mut dst, 1);
        assert_eq!(c, 0);
        assert_eq!(dst, [LIMB_MAX - 1, 3, 0]);

        let mut back = [0; 3];
        shift_slice_right_copy(&dst, &mut back, 1);
        assert_eq!(back, src);

        let c = shift_slice_left_copy(&[LIMB_MAX], &mut dst[..1], LIMB_BIT_SIZE - 1);
        assert_eq!(c, LIMB_MAX >> 1);
    }
}
