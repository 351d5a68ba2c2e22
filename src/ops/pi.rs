//! π number.

use crate::common::util::log2_ceil;
use crate::defs::Error;
use crate::defs::LIMB_BIT_SIZE;
use crate::num::Float;

impl Float {
    /// Returns the value of π with precision `p` using the Gauss-Legendre algorithm.
    ///
    /// ## Errors
    ///
    ///  - InvalidArgument: the precision is zero.
    ///  - MemoryAllocation: failed to allocate memory.
    pub fn pi(p: usize) -> Result<Self, Error> {
        let mut ret = Float::new(p)?;
        ret.assign_pi()?;
        Ok(ret)
    }

    /// Assigns the value of π with the precision of `self` to `self`.
    ///
    /// ## Errors
    ///
    ///  - MemoryAllocation: failed to allocate memory.
    pub fn assign_pi(&mut self) -> Result<(), Error> {
        // one guard limb
        let w = self.precision() + 1;

        // a = 1, b = 1/sqrt(2), t = 1/4, pw = 1
        let mut a = Float::from_limb(1, w)?;
        let mut b = Float::new(w)?;
        b.assign_sqrt(&a.div_limb(2)?)?;
        let mut t = a.div_limb(4)?;
        let mut pw = Float::from_limb(1, w)?;

        let mut an = Float::new(w)?;
        let mut ab = Float::new(w)?;
        let mut d = Float::new(w)?;
        let mut d2 = Float::new(w)?;
        let mut c = Float::new(w)?;
        let mut tmp = Float::new(w)?;

        for _ in 0..log2_ceil(w * LIMB_BIT_SIZE) + 2 {
            // a' = (a + b) / 2
            tmp.assign_sum(&a, &b)?;
            an.assign_div_limb(&tmp, 2)?;

            // b' = sqrt(a * b)
            ab.assign_product(&a, &b)?;
            b.assign_sqrt(&ab)?;

            // t' = t - pw * (a - a')^2
            d.assign_difference(&a, &an)?;
            d2.assign_product(&d, &d)?;
            c.assign_product(&d2, &pw)?;
            tmp.assign_difference(&t, &c)?;
            t.swap(&mut tmp);

            // pw' = 2 * pw
            tmp.assign_mul_limb(&pw, 2)?;
            pw.swap(&mut tmp);

            a.swap(&mut an);

            if c.is_negligible(&t, w) {
                break;
            }
        }

        // pi = (a + b)^2 / (4 * t)
        tmp.assign_sum(&a, &b)?;
        ab.assign_product(&tmp, &tmp)?;
        d.assign_mul_limb(&t, 4)?;

        self.assign_quotient(&ab, &d)
    }
}

#[cfg(test)]
mod tests {

    use super::*;
    use crate::defs::Sign;
    use crate::num::digits_for_precision;

    const PI_DIGITS: &[u8] = b"31415926535897932384626433832795028841971693993751\
        05820974944592307816406286208998628034825342117067\
        98214808651328230664709384460955058223172535940812";

    #[test]
    fn test_pi() {
        for p in 1..12 {
            let pi = Float::pi(p).unwrap();
            let (s, digits, e) = pi.to_decimal_digits().unwrap();

            assert_eq!(s, Sign::Pos);
            assert_eq!(e, 1);

            let n = digits_for_precision(p).saturating_sub(2).min(PI_DIGITS.len());
            for (d, c) in digits.iter().zip(PI_DIGITS[..n].iter()) {
                assert_eq!(*d, c - b'0');
            }
        }

        assert_eq!(Float::pi(0).unwrap_err(), Error::InvalidArgument);
    }
}
