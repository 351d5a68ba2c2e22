//! Greatest common divisor.

use crate::defs::Error;
use crate::int::Integer;

impl Integer {
    /// Returns the greatest common divisor of `self` and `d2`. The result is never negative.
    /// The gcd of two zeroes is zero.
    ///
    /// ## Errors
    ///
    ///  - MemoryAllocation: failed to allocate memory.
    pub fn gcd(&self, d2: &Self) -> Result<Self, Error> {
        let mut ret = Integer::new();
        ret.assign_gcd(self, d2)?;
        Ok(ret)
    }

    /// Computes the greatest common divisor of `d1` and `d2` using the Euclidean algorithm, and assigns it to `self`.
    ///
    /// ## Errors
    ///
    ///  - MemoryAllocation: failed to allocate memory.
    pub fn assign_gcd(&mut self, d1: &Self, d2: &Self) -> Result<(), Error> {
        let mut a = d1.abs()?;
        let mut b = d2.abs()?;
        let mut q = Integer::new();
        let mut r = Integer::new();

        // (a, b) = (b, a mod b)
        while !b.is_zero() {
            a.div_rem_to(&b, &mut q, &mut r)?;
            a.swap(&mut b);
            b.swap(&mut r);
        }

        self.swap(&mut a);

        Ok(())
    }
}
