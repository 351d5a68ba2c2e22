//! Square root.

use crate::common::util::log2_ceil;
use crate::common::util::sqrt_int;
use crate::defs::Error;
use crate::defs::Limb;
use crate::defs::LIMB_BIT_SIZE;
use crate::int::Integer;
use crate::num::Float;

/// Number of limbs from the top of the mantissa used for the initial estimate.
const ESTIMATE_LIMBS: usize = 96 / LIMB_BIT_SIZE;

impl Float {
    /// Computes the square root of a number with precision `p`. The result is truncated.
    ///
    /// ## Errors
    ///
    ///  - InvalidArgument: the argument is negative, or the precision is zero.
    ///  - MemoryAllocation: failed to allocate memory.
    pub fn sqrt(&self, p: usize) -> Result<Self, Error> {
        let mut ret = Float::new(p)?;
        ret.assign_sqrt(self)?;
        Ok(ret)
    }

    /// Computes the square root of `x` with the precision of `self` and assigns the result to `self`.
    ///
    /// ## Errors
    ///
    ///  - InvalidArgument: the argument is negative.
    ///  - MemoryAllocation: failed to allocate memory.
    pub fn assign_sqrt(&mut self, x: &Self) -> Result<(), Error> {
        if x.is_negative() {
            return Err(Error::InvalidArgument);
        }

        if x.is_zero() {
            self.assign_zero();
            return Ok(());
        }

        // one guard limb
        let w = self.precision() + 1;

        let mut xw = Float::new(w)?;
        xw.assign(x)?;

        let mut y = Float::new(w)?;
        Self::sqrt_estimate(x, &mut y)?;

        let mut q = Float::new(w)?;
        let mut s = Float::new(w)?;
        let mut yn = Float::new(w)?;
        let mut d = Float::new(w)?;

        // Newton's method: y = (y + x/y) / 2
        for _ in 0..log2_ceil(w * LIMB_BIT_SIZE) + 4 {
            q.assign_quotient(&xw, &y)?;
            s.assign_sum(&y, &q)?;
            yn.assign_div_limb(&s, 2)?;

            d.assign_difference(&yn, &y)?;
            y.swap(&mut yn);

            if d.is_negligible(&y, w - 1) {
                break;
            }
        }

        self.assign(&y)
    }

    // Square root of the top limbs of the mantissa computed with integer arithmetic.
    fn sqrt_estimate(x: &Self, y: &mut Self) -> Result<(), Error> {
        let m = x.mantissa().limbs();
        let k = ESTIMATE_LIMBS.min(m.len());

        let mut t = m[m.len() - k..]
            .iter()
            .rev()
            .fold(0u128, |t, v| (t << LIMB_BIT_SIZE) | *v as u128);

        // x ~ t * radix^s, s must be even
        let mut s = x.exponent() as i64 + (m.len() - k) as i64;

        if s & 1 != 0 {
            t <<= LIMB_BIT_SIZE;
            s -= 1;
        }

        while t.leading_zeros() as usize >= 2 * LIMB_BIT_SIZE {
            t <<= 2 * LIMB_BIT_SIZE;
            s -= 2;
        }

        let g = Integer::from_u64(sqrt_int(t))?;
        let mut ret = Float::from_integer(&g, y.precision())?;
        ret.scale(s / 2)?;

        y.swap(&mut ret);

        Ok(())
    }
}

#[cfg(test)]
mod tests {

    use super::*;
    use crate::defs::Sign;
    use crate::defs::LIMB_MAX;
    use rand::random;

    #[test]
    fn test_sqrt() {
        let p = 4;

        assert!(Float::new(p).unwrap().sqrt(p).unwrap().is_zero());
        assert_eq!(
            Float::from_limb(2, p).unwrap().neg().unwrap().sqrt(p).unwrap_err(),
            Error::InvalidArgument
        );

        // exact squares
        for v in [1 as Limb, 4, 9, 144, LIMB_MAX / 2 + 1] {
            let f = Float::from_limb(v, p).unwrap();
            let sq = f.mul(&f, p).unwrap();
            assert_eq!(sq.sqrt(p).unwrap(), f);
        }

        let quarter = Float::from_limb(1, p).unwrap().div_limb(4).unwrap();
        assert_eq!(quarter.sqrt(p).unwrap(), Float::from_limb(1, p).unwrap().div_limb(2).unwrap());

        for _ in 0..200 {
            let p = random::<usize>() % 6 + 2;
            let mut x = Float::from_limb(random::<Limb>() | 1, p).unwrap();
            x = x.div_limb(random::<Limb>() | 1).unwrap();
            x.scale((random::<i32>() % 10) as i64).unwrap();

            let r = x.sqrt(p).unwrap();
            let r2 = r.mul(&r, p + 1).unwrap();
            let diff = x.sub(&r2, p + 1).unwrap();

            assert!(!r.is_negative());
            assert!(diff.is_negligible(&x, p - 2), "{} {} {}", x, r, r2);
        }
    }

    #[test]
    fn test_sqrt_estimate() {
        let x = Float::from_limb(LIMB_MAX, 3).unwrap();
        let mut y = Float::new(3).unwrap();
        Float::sqrt_estimate(&x, &mut y).unwrap();
        let y2 = y.mul(&y, 3).unwrap();
        assert!(y2 <= x);
        assert_eq!(y.sign(), Sign::Pos);
    }
}
