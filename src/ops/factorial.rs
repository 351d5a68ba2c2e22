//! Factorial.

use crate::common::consts::ONE;
use crate::defs::Error;
use crate::int::Integer;

impl Integer {
    /// Returns the factorial of the number, or zero if the number is negative.
    ///
    /// ## Errors
    ///
    ///  - MemoryAllocation: failed to allocate memory.
    pub fn factorial(&self) -> Result<Self, Error> {
        let mut ret = Integer::new();
        ret.assign_factorial(self)?;
        Ok(ret)
    }

    /// Computes the factorial of `n` and assigns it to `self`. Zero is assigned if `n` is negative.
    ///
    /// ## Errors
    ///
    ///  - MemoryAllocation: failed to allocate memory.
    pub fn assign_factorial(&mut self, n: &Self) -> Result<(), Error> {
        if n.is_negative() {
            self.assign_zero();
            return Ok(());
        }

        let mut i = n.clone()?;
        let mut f = ONE.clone()?;
        let mut t = Integer::new();

        while !i.is_zero() {
            t.assign_product(&f, &i)?;
            f.swap(&mut t);
            i.decr_abs(1)?;
        }

        self.swap(&mut f);

        Ok(())
    }
}
