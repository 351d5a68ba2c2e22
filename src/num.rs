//! Float definition and basic arithmetic, comparison, and number manipulation operations.

use crate::common::util::bits_to_decimal_digits;
use crate::defs::Error;
use crate::defs::Exponent;
use crate::defs::Limb;
use crate::defs::Sign;
use crate::defs::DECIMAL_CHUNK;
use crate::defs::EXPONENT_MAX;
use crate::defs::EXPONENT_MIN;
use crate::defs::LIMB_BIT_SIZE;
use crate::int::Integer;
use crate::uint;
use crate::uint::normalized_len;
use core::cmp::Ordering;

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

/// Number of guard limbs kept below the destination precision when operands are aligned for addition.
const ADD_GUARD_LIMBS: usize = 2;

/// Guard limbs of the working precision used for decimal output of numbers with large exponents.
const DECIMAL_GUARD_LIMBS: usize = 3;

/// Attempts with more digits before decimal output of a number with a large exponent falls back to exact arithmetic.
const DECIMAL_SCALE_ROUNDS: usize = 4;

/// Returns the number of decimal digits guaranteed by a mantissa of `p` limbs with the non-zero most significant limb.
pub fn digits_for_precision(p: usize) -> usize {
    if p == 0 {
        0
    } else {
        bits_to_decimal_digits(((p - 1) * LIMB_BIT_SIZE + 1) as i64) as usize
    }
}

/// Floating point number with mantissa of a fixed precision, and exponent.
///
/// The value is `m * radix^e`, where the mantissa `m` holds exactly `p` limbs,
/// and its most significant limb is not zero. Zero has empty mantissa and zero exponent.
/// Results of operations are truncated towards zero to the precision of the destination.
#[derive(Debug)]
pub struct Float {
    m: Integer,
    e: Exponent,
    p: usize,
}

impl Float {
    /// Returns a new number with value of zero and precision of `p` limbs.
    ///
    /// ## Errors
    ///
    ///  - InvalidArgument: the precision is zero.
    ///  - MemoryAllocation: failed to allocate memory for mantissa.
    pub fn new(p: usize) -> Result<Self, Error> {
        if p == 0 {
            return Err(Error::InvalidArgument);
        }

        Ok(Float {
            m: Integer::with_capacity(p)?,
            e: 0,
            p,
        })
    }

    /// Returns a new number with value `d` and precision of `p` limbs.
    ///
    /// ## Errors
    ///
    ///  - InvalidArgument: the precision is zero.
    ///  - MemoryAllocation: failed to allocate memory for mantissa.
    pub fn from_limb(d: Limb, p: usize) -> Result<Self, Error> {
        let mut ret = Self::new(p)?;
        ret.assign_limb(d)?;
        Ok(ret)
    }

    /// Returns a new number with value of `i` truncated to precision of `p` limbs.
    ///
    /// ## Errors
    ///
    ///  - InvalidArgument: the precision is zero.
    ///  - ExponentOverflow: the integer is too large.
    ///  - MemoryAllocation: failed to allocate memory for mantissa.
    pub fn from_integer(i: &Integer, p: usize) -> Result<Self, Error> {
        let mut ret = Self::new(p)?;
        ret.assign_integer(i)?;
        Ok(ret)
    }

    /// Returns a copy of the number.
    ///
    /// ## Errors
    ///
    ///  - MemoryAllocation: failed to allocate memory for mantissa.
    pub fn clone(&self) -> Result<Self, Error> {
        Ok(Float {
            m: self.m.clone()?,
            e: self.e,
            p: self.p,
        })
    }

    /// Returns the precision of the number in limbs.
    #[inline]
    pub fn precision(&self) -> usize {
        self.p
    }

    /// Returns the exponent of the number: the power of radix of the least significant mantissa limb.
    #[inline]
    pub fn exponent(&self) -> Exponent {
        self.e
    }

    /// Returns the mantissa of the number.
    #[inline]
    pub fn mantissa(&self) -> &Integer {
        &self.m
    }

    /// Returns the sign of the number.
    #[inline]
    pub fn sign(&self) -> Sign {
        self.m.sign()
    }

    /// Returns true if the number is zero.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.m.is_zero()
    }

    /// Returns true if the number is negative.
    #[inline]
    pub fn is_negative(&self) -> bool {
        self.m.is_negative()
    }

    /// Changes the sign of the number to the opposite.
    #[inline]
    pub fn inv_sign(&mut self) {
        self.m.inv_sign();
    }

    /// Returns a copy of the number with the sign reversed.
    ///
    /// ## Errors
    ///
    ///  - MemoryAllocation: failed to allocate memory for mantissa.
    pub fn neg(&self) -> Result<Self, Error> {
        let mut ret = self.clone()?;
        ret.inv_sign();
        Ok(ret)
    }

    /// Returns the absolute value of the number.
    ///
    /// ## Errors
    ///
    ///  - MemoryAllocation: failed to allocate memory for mantissa.
    pub fn abs(&self) -> Result<Self, Error> {
        let mut ret = self.clone()?;
        if ret.is_negative() {
            ret.inv_sign();
        }
        Ok(ret)
    }

    /// Exchanges the values of `self` and `other` including their precisions.
    #[inline]
    pub fn swap(&mut self, other: &mut Self) {
        core::mem::swap(self, other);
    }

    /// Sets the value to zero. The precision is kept.
    pub fn assign_zero(&mut self) {
        self.m.assign_zero();
        self.e = 0;
    }

    /// Assigns the value `d` to `self`.
    ///
    /// ## Errors
    ///
    ///  - MemoryAllocation: failed to allocate memory for mantissa.
    pub fn assign_limb(&mut self, d: Limb) -> Result<(), Error> {
        let s = if d == 0 { Sign::Zero } else { Sign::Pos };
        self.set_parts(s, &[d], 0)
    }

    /// Assigns the value of `src` truncated to the precision of `self`.
    ///
    /// ## Errors
    ///
    ///  - ExponentOverflow: the exponent of the result is out of range.
    ///  - MemoryAllocation: failed to allocate memory for mantissa.
    pub fn assign(&mut self, src: &Self) -> Result<(), Error> {
        self.set_parts(src.sign(), src.m.limbs(), src.e as i64)
    }

    /// Assigns the value of the integer `i` truncated to the precision of `self`.
    ///
    /// ## Errors
    ///
    ///  - ExponentOverflow: the integer is too large.
    ///  - MemoryAllocation: failed to allocate memory for mantissa.
    pub fn assign_integer(&mut self, i: &Integer) -> Result<(), Error> {
        self.set_parts(i.sign(), i.limbs(), 0)
    }

    /// Sets the value to `mag * radix^e` with sign `s`, truncating or extending `mag` to the precision of `self`.
    fn set_parts(&mut self, s: Sign, mag: &[Limb], e: i64) -> Result<(), Error> {
        let n = normalized_len(mag);

        if n == 0 {
            self.assign_zero();
            return Ok(());
        }

        let p = self.p;
        let (src, e) = if n >= p {
            (&mag[n - p..n], e + (n - p) as i64)
        } else {
            (&mag[..n], e - (p - n) as i64)
        };

        if e > EXPONENT_MAX as i64 || e < EXPONENT_MIN as i64 {
            return Err(Error::ExponentOverflow(s));
        }

        self.m.prepare(p)?;
        self.m.buf_mut()[p - src.len()..p].copy_from_slice(src);
        self.m.set_raw(s, p);
        self.e = e as Exponent;

        Ok(())
    }

    // Position right above the most significant limb.
    #[inline]
    fn top(&self) -> i64 {
        self.e as i64 + self.p as i64
    }

    /// Returns true if `self` is zero, or its most significant limb is at least `n` limbs
    /// below the most significant limb of `reference`.
    pub fn is_negligible(&self, reference: &Self, n: usize) -> bool {
        self.is_zero() || (!reference.is_zero() && self.top() + n as i64 <= reference.top())
    }

    /// Multiplies the number by radix^`k`.
    ///
    /// ## Errors
    ///
    ///  - ExponentOverflow: the exponent of the result is out of range.
    pub fn scale(&mut self, k: i64) -> Result<(), Error> {
        if self.is_zero() {
            return Ok(());
        }

        let e = self.e as i64 + k;
        if e > EXPONENT_MAX as i64 || e < EXPONENT_MIN as i64 {
            return Err(Error::ExponentOverflow(self.sign()));
        }

        self.e = e as Exponent;

        Ok(())
    }

    /// Compares the absolute values of `self` and `d2`.
    pub fn abs_cmp(&self, d2: &Self) -> Ordering {
        if self.is_zero() || d2.is_zero() {
            return (!self.is_zero()).cmp(&!d2.is_zero());
        }

        match self.top().cmp(&d2.top()) {
            Ordering::Equal => {}
            ord => return ord,
        }

        let a = self.m.limbs();
        let b = d2.m.limbs();

        for (x, y) in a.iter().rev().zip(b.iter().rev()) {
            match x.cmp(y) {
                Ordering::Equal => {}
                ord => return ord,
            }
        }

        // the longer mantissa is greater if its remaining limbs are not all zero
        if a.len() > b.len() && a[..a.len() - b.len()].iter().any(|v| *v != 0) {
            Ordering::Greater
        } else if b.len() > a.len() && b[..b.len() - a.len()].iter().any(|v| *v != 0) {
            Ordering::Less
        } else {
            Ordering::Equal
        }
    }

    /// Adds `d1` and `d2` and assigns the result to `self` truncated to the precision of `self`.
    ///
    /// ## Errors
    ///
    ///  - ExponentOverflow: the exponent of the result is out of range.
    ///  - MemoryAllocation: failed to allocate memory.
    #[inline]
    pub fn assign_sum(&mut self, d1: &Self, d2: &Self) -> Result<(), Error> {
        self.add_sub(d1, d2, Sign::Pos)
    }

    /// Subtracts `d2` from `d1` and assigns the result to `self` truncated to the precision of `self`.
    ///
    /// ## Errors
    ///
    ///  - ExponentOverflow: the exponent of the result is out of range.
    ///  - MemoryAllocation: failed to allocate memory.
    #[inline]
    pub fn assign_difference(&mut self, d1: &Self, d2: &Self) -> Result<(), Error> {
        self.add_sub(d1, d2, Sign::Neg)
    }

    fn add_sub(&mut self, d1: &Self, d2: &Self, op: Sign) -> Result<(), Error> {
        let s2 = d2.sign().mul(op);

        if d2.is_zero() {
            return self.assign(d1);
        }

        if d1.is_zero() {
            return self.set_parts(s2, d2.m.limbs(), d2.e as i64);
        }

        let (e1, e2) = (d1.e as i64, d2.e as i64);

        // Operands of opposite signs with close magnitudes can cancel, and are aligned exactly.
        // Otherwise limbs are dropped below `low`; it never exceeds the lowest limb of one operand,
        // so only the other one can lose limbs.
        let low = if d1.sign() != s2 && (d1.top() - d2.top()).abs() <= 1 {
            e1.min(e2)
        } else {
            let top = d1.top().max(d2.top());
            (top - (self.p + ADD_GUARD_LIMBS) as i64).min(e1.max(e2))
        };

        let (x, c1) = d1.aligned(d1.sign(), low)?;
        let (y, c2) = d2.aligned(s2, low)?;

        let mut r = Integer::new();
        r.assign_sum(&x, &y)?;

        // dropped limbs of the opposite sign borrow one unit of the lowest kept limb
        if (c1 && d1.sign() != r.sign()) || (c2 && s2 != r.sign()) {
            r.decr_abs(1)?;
        }

        self.set_parts(r.sign(), r.limbs(), low)
    }

    // Returns the mantissa limbs at or above radix^`low` as an integer in units of radix^`low` with sign `s`,
    // and whether any non-zero limb below radix^`low` was dropped.
    fn aligned(&self, s: Sign, low: i64) -> Result<(Integer, bool), Error> {
        let m = self.m.limbs();
        let k = (low - self.e as i64).clamp(0, m.len() as i64) as usize;
        let shift = (self.e as i64 + k as i64 - low).max(0) as usize;

        let dropped = m[..k].iter().any(|v| *v != 0);

        Ok((Integer::from_shifted(s, &m[k..], shift)?, dropped))
    }

    /// Multiplies `d1` by `d2` and assigns the result to `self` truncated to the precision of `self`.
    ///
    /// ## Errors
    ///
    ///  - ExponentOverflow: the exponent of the result is out of range.
    ///  - MemoryAllocation: failed to allocate memory.
    pub fn assign_product(&mut self, d1: &Self, d2: &Self) -> Result<(), Error> {
        if d1.is_zero() || d2.is_zero() {
            self.assign_zero();
            return Ok(());
        }

        let mut r = Integer::new();
        r.assign_product(&d1.m, &d2.m)?;

        self.set_parts(r.sign(), r.limbs(), d1.e as i64 + d2.e as i64)
    }

    /// Divides `d1` by `d2` and assigns the result to `self` truncated to the precision of `self`.
    ///
    /// ## Errors
    ///
    ///  - DivisionByZero: `d2` is zero.
    ///  - ExponentOverflow: the exponent of the result is out of range.
    ///  - MemoryAllocation: failed to allocate memory.
    pub fn assign_quotient(&mut self, d1: &Self, d2: &Self) -> Result<(), Error> {
        if d2.is_zero() {
            return Err(Error::DivisionByZero);
        }

        if d1.is_zero() {
            self.assign_zero();
            return Ok(());
        }

        // the shifted dividend gives at least p + 1 quotient limbs
        let k = (self.p + 1 + d2.p).saturating_sub(d1.p);

        let n = Integer::from_shifted(Sign::Pos, d1.m.limbs(), k)?;
        let d = Integer::from_limbs(Sign::Pos, d2.m.limbs())?;
        let mut q = Integer::new();
        let mut r = Integer::new();
        n.div_rem_to(&d, &mut q, &mut r)?;

        let s = d1.sign().mul(d2.sign());
        self.set_parts(s, q.limbs(), d1.e as i64 - k as i64 - d2.e as i64)
    }

    /// Multiplies `d1` by limb `d` and assigns the result to `self` truncated to the precision of `self`.
    ///
    /// ## Errors
    ///
    ///  - ExponentOverflow: the exponent of the result is out of range.
    ///  - MemoryAllocation: failed to allocate memory.
    pub fn assign_mul_limb(&mut self, d1: &Self, d: Limb) -> Result<(), Error> {
        let mut r = d1.m.clone()?;
        r.mul_abs_limb(d)?;
        self.set_parts(r.sign(), r.limbs(), d1.e as i64)
    }

    /// Divides `d1` by limb `d` and assigns the result to `self` truncated to the precision of `self`.
    ///
    /// ## Errors
    ///
    ///  - DivisionByZero: `d` is zero.
    ///  - ExponentOverflow: the exponent of the result is out of range.
    ///  - MemoryAllocation: failed to allocate memory.
    pub fn assign_div_limb(&mut self, d1: &Self, d: Limb) -> Result<(), Error> {
        if d == 0 {
            return Err(Error::DivisionByZero);
        }

        let mut r = Integer::from_shifted(d1.sign(), d1.m.limbs(), 1)?;
        r.div_abs_limb(d)?;
        self.set_parts(r.sign(), r.limbs(), d1.e as i64 - 1)
    }

    /// Returns the sum of `self` and `d2` with precision `p`.
    ///
    /// ## Errors
    ///
    ///  - InvalidArgument: the precision is zero.
    ///  - ExponentOverflow: the exponent of the result is out of range.
    ///  - MemoryAllocation: failed to allocate memory.
    pub fn add(&self, d2: &Self, p: usize) -> Result<Self, Error> {
        let mut ret = Self::new(p)?;
        ret.assign_sum(self, d2)?;
        Ok(ret)
    }

    /// Returns the difference of `self` and `d2` with precision `p`.
    ///
    /// ## Errors
    ///
    ///  - InvalidArgument: the precision is zero.
    ///  - ExponentOverflow: the exponent of the result is out of range.
    ///  - MemoryAllocation: failed to allocate memory.
    pub fn sub(&self, d2: &Self, p: usize) -> Result<Self, Error> {
        let mut ret = Self::new(p)?;
        ret.assign_difference(self, d2)?;
        Ok(ret)
    }

    /// Returns the product of `self` and `d2` with precision `p`.
    ///
    /// ## Errors
    ///
    ///  - InvalidArgument: the precision is zero.
    ///  - ExponentOverflow: the exponent of the result is out of range.
    ///  - MemoryAllocation: failed to allocate memory.
    pub fn mul(&self, d2: &Self, p: usize) -> Result<Self, Error> {
        let mut ret = Self::new(p)?;
        ret.assign_product(self, d2)?;
        Ok(ret)
    }

    /// Returns the quotient of `self` and `d2` with precision `p`.
    ///
    /// ## Errors
    ///
    ///  - InvalidArgument: the precision is zero.
    ///  - DivisionByZero: `d2` is zero.
    ///  - ExponentOverflow: the exponent of the result is out of range.
    ///  - MemoryAllocation: failed to allocate memory.
    pub fn div(&self, d2: &Self, p: usize) -> Result<Self, Error> {
        let mut ret = Self::new(p)?;
        ret.assign_quotient(self, d2)?;
        Ok(ret)
    }

    /// Returns `self` multiplied by limb `d` with the precision of `self`.
    ///
    /// ## Errors
    ///
    ///  - ExponentOverflow: the exponent of the result is out of range.
    ///  - MemoryAllocation: failed to allocate memory.
    pub fn mul_limb(&self, d: Limb) -> Result<Self, Error> {
        let mut ret = Self::new(self.p)?;
        ret.assign_mul_limb(self, d)?;
        Ok(ret)
    }

    /// Returns `self` divided by limb `d` with the precision of `self`.
    ///
    /// ## Errors
    ///
    ///  - DivisionByZero: `d` is zero.
    ///  - ExponentOverflow: the exponent of the result is out of range.
    ///  - MemoryAllocation: failed to allocate memory.
    pub fn div_limb(&self, d: Limb) -> Result<Self, Error> {
        let mut ret = Self::new(self.p)?;
        ret.assign_div_limb(self, d)?;
        Ok(ret)
    }

    /// Returns the sign, the decimal digits, and the decimal exponent of the number,
    /// so that the value is `0.d1d2d3... * 10^exponent`.
    /// Digits are exact and truncated to `digits_for_precision` of the precision of the number,
    /// but at least one digit is kept. Trailing zero digits are removed. Zero has no digits.
    ///
    /// ## Errors
    ///
    ///  - MemoryAllocation: failed to allocate memory.
    pub fn to_decimal_digits(&self) -> Result<(Sign, Vec<u8>, i64), Error> {
        if self.is_zero() {
            return Ok((Sign::Zero, Vec::new(), 0));
        }

        let n = digits_for_precision(self.p).max(1);

        // with a small exponent the exact integer is a few times larger than the mantissa
        let scaled = if self.e.unsigned_abs() as usize <= 2 * self.p + 2 {
            None
        } else {
            self.decimal_scaled(n)?
        };

        let (digits, e10) = match scaled {
            Some(v) => v,
            None => self.decimal_exact(n)?,
        };

        Ok((self.sign(), truncate_digits(digits, n), e10))
    }

    // Decimal digits of the integer part of |value| * 10^k, where k makes it at least n + 1 digits long,
    // and the decimal exponent of the value.
    fn decimal_exact(&self, n: usize) -> Result<(Vec<u8>, i64), Error> {
        let (d, k) = if self.e >= 0 {
            (Integer::from_shifted(Sign::Pos, self.m.limbs(), self.e as usize)?, 0)
        } else {
            let bits = (self.top() - 1) * LIMB_BIT_SIZE as i64;
            let k = (n as i64 + 2 - bits_to_decimal_digits(bits)).max(0) as usize;

            let t = Integer::pow10(k, &DECIMAL_CHUNK)?;
            let mut d = Integer::new();
            d.assign_product(&t, &self.m)?;
            d.shr_limbs(self.e.unsigned_abs() as usize);
            (d, k as i64)
        };

        let digits = print_digits(&d)?;
        let e10 = digits.len() as i64 - k;

        Ok((digits, e10))
    }

    // Same as `decimal_exact`, but the power of ten and the product are computed at a working precision.
    // The integer part is then known up to one unit, and the digits are returned only when
    // both neighbours agree in the first `n` digits. More digits are tried a few times before giving up.
    fn decimal_scaled(&self, n: usize) -> Result<Option<(Vec<u8>, i64)>, Error> {
        let bits = (self.top() - 1) * LIMB_BIT_SIZE as i64;

        for round in 0..DECIMAL_SCALE_ROUNDS {
            let extra = 2 + 10 * round;
            let k = (n + extra) as i64 - bits_to_decimal_digits(bits);
            let h = k.unsigned_abs();

            // truncation error of the powers grows with h
            let w = self.p
                + DECIMAL_GUARD_LIMBS
                + ((extra * 3402) >> 10) / LIMB_BIT_SIZE
                + (u64::BITS - h.leading_zeros()) as usize / LIMB_BIT_SIZE
                + 2;

            let mut a = Float::new(w)?;
            a.assign(self)?;
            if a.is_negative() {
                a.inv_sign();
            }

            // two halves keep the powers within the exponent range
            let mut t = Float::new(w)?;
            for j in [h - h / 2, h / 2] {
                let f = Self::pow10(j, w)?;
                if k >= 0 {
                    t.assign_product(&a, &f)?;
                } else {
                    t.assign_quotient(&a, &f)?;
                }
                a.swap(&mut t);
            }

            let (mut hi, _) = a.aligned(Sign::Pos, 0)?;
            let mut lo = hi.clone()?;
            lo.decr_abs(1)?;
            hi.incr_abs(1)?;

            let lo = print_digits(&lo)?;
            let hi = print_digits(&hi)?;

            if lo.len() == hi.len() && lo.len() > n && lo[..n] == hi[..n] {
                let e10 = hi.len() as i64 - k;
                return Ok(Some((hi, e10)));
            }
        }

        Ok(None)
    }

    // 10^`k` truncated to `w` limbs.
    fn pow10(k: u64, w: usize) -> Result<Self, Error> {
        let mut ret = Self::from_limb(1, w)?;
        let mut t = Self::new(w)?;

        for i in (0..u64::BITS - k.leading_zeros()).rev() {
            t.assign_product(&ret, &ret)?;
            ret.swap(&mut t);

            if (k >> i) & 1 == 1 {
                t.assign_mul_limb(&ret, 10)?;
                ret.swap(&mut t);
            }
        }

        Ok(ret)
    }
}

// ASCII decimal digits of the absolute value of `d`.
fn print_digits(d: &Integer) -> Result<Vec<u8>, Error> {
    let mut digits = Vec::new();

    let sz = uint::print_size(d.limbs());
    digits
        .try_reserve_exact(sz)
        .map_err(|_| Error::MemoryAllocation)?;
    digits.resize(sz, 0);

    let l = uint::print(d.limbs(), &DECIMAL_CHUNK, &mut digits)?;
    digits.truncate(l);

    Ok(digits)
}

// Keeps at most `n` ASCII digits, removes trailing zeros, and converts them to digit values.
fn truncate_digits(mut digits: Vec<u8>, n: usize) -> Vec<u8> {
    digits.truncate(n);
    while digits.last() == Some(&b'0') {
        digits.pop();
    }

    for c in digits.iter_mut() {
        *c -= b'0';
    }

    digits
}

impl Ord for Float {
    fn cmp(&self, other: &Self) -> Ordering {
        match self.sign().to_int().cmp(&other.sign().to_int()) {
            Ordering::Equal => match self.sign() {
                Sign::Pos => self.abs_cmp(other),
                Sign::Neg => other.abs_cmp(self),
                Sign::Zero => Ordering::Equal,
            },
            ord => ord,
        }
    }
}

impl PartialOrd for Float {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Float {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Float {}

#[cfg(test)]
mod tests {

    use super::*;
    use crate::defs::LIMB_MAX;
    use rand::random;

    #[cfg(not(feature = "std"))]
    use alloc::{string::ToString, vec};

    fn check_normalized(f: &Float) {
        if !f.is_zero() {
            assert_eq!(f.mantissa().len(), f.precision());
            assert!(f.mantissa().is_normalized());
        }
    }

    #[test]
    fn test_construction() {
        assert_eq!(Float::new(0).unwrap_err(), Error::InvalidArgument);

        let f = Float::new(3).unwrap();
        assert!(f.is_zero());
        assert_eq!(f.precision(), 3);

        let f = Float::from_limb(5, 3).unwrap();
        assert_eq!(f.mantissa().limbs(), &[0, 0, 5]);
        assert_eq!(f.exponent(), -2);
        assert_eq!(f.sign(), Sign::Pos);
        check_normalized(&f);

        let i = Integer::from_limbs(Sign::Neg, &[1, 2, 3, 4]).unwrap();
        let f = Float::from_integer(&i, 2).unwrap();
        assert_eq!(f.mantissa().limbs(), &[3, 4]);
        assert_eq!(f.exponent(), 2);
        assert!(f.is_negative());

        // truncation and extension
        let mut f2 = Float::new(5).unwrap();
        f2.assign(&f).unwrap();
        assert_eq!(f2.mantissa().limbs(), &[0, 0, 0, 3, 4]);
        assert_eq!(f2.exponent(), -1);
        assert_eq!(f2, f);

        let mut f3 = Float::new(1).unwrap();
        f3.assign(&f2).unwrap();
        assert_eq!(f3.mantissa().limbs(), &[4]);
        assert_eq!(f3.exponent(), 3);
        assert!(f3 > f2);

        let mut f4 = f3.clone().unwrap();
        f4.assign_zero();
        assert!(f4.is_zero());
        assert_eq!(f4.precision(), 1);
    }

    #[test]
    fn test_add_sub() {
        let p = 3;
        let one = Float::from_limb(1, p).unwrap();
        let two = Float::from_limb(2, p).unwrap();
        let three = Float::from_limb(3, p).unwrap();

        let s = one.add(&two, p).unwrap();
        assert_eq!(s, three);
        check_normalized(&s);

        let d = one.sub(&three, p).unwrap();
        assert_eq!(d, two.neg().unwrap());
        check_normalized(&d);

        assert!(one.sub(&one, p).unwrap().is_zero());

        let z = Float::new(p).unwrap();
        assert_eq!(z.sub(&two, p).unwrap(), two.neg().unwrap());
        assert_eq!(two.add(&z, p).unwrap(), two);

        // carry out of the most significant limb
        let m = Float::from_limb(LIMB_MAX, p).unwrap();
        let s = m.add(&one, p).unwrap();
        assert_eq!(s.mantissa().limbs(), &[0, 0, 1]);
        assert_eq!(s.exponent(), -1);
        check_normalized(&s);

        // negligible operand
        let mut tiny = one.clone().unwrap();
        tiny.e -= 10;
        assert_eq!(one.add(&tiny, 1).unwrap(), Float::from_limb(1, 1).unwrap());
        assert!(tiny.is_negligible(&one, 2));
        assert!(!one.is_negligible(&tiny, 2));

        // subtracting a negligible operand truncates towards zero
        let r = one.sub(&tiny, 1).unwrap();
        assert!(r < one);
        assert_eq!(r.mantissa().limbs(), &[LIMB_MAX]);
        assert_eq!(r.exponent(), -1);

        let r = tiny.sub(&one, 1).unwrap();
        assert!(r > one.neg().unwrap());
        assert_eq!(r.mantissa().limbs(), &[LIMB_MAX]);
        assert!(r.is_negative());

        // subtrahend with limbs below the destination precision
        let mut x = Float::from_integer(&Integer::from_limbs(Sign::Pos, &[1, 0, 0, 0, 1]).unwrap(), 5).unwrap();
        x.scale(-5).unwrap();
        let r = Float::from_limb(1, 1).unwrap().sub(&x, 1).unwrap();
        assert_eq!(r.mantissa().limbs(), &[LIMB_MAX - 1]);
        assert_eq!(r.exponent(), -1);

        // cancellation leaves only the low limbs
        let mut y = Float::from_limb(1, 1).unwrap();
        y.scale(-1).unwrap();
        let r = x.sub(&y, 2).unwrap();
        assert_eq!(r.mantissa().limbs(), &[0, 1]);
        assert_eq!(r.exponent(), -6);
    }

    fn random_float(p: usize, max_scale: i64) -> Float {
        let n = random::<usize>() % 4 + 1;
        let s = if random::<bool>() { Sign::Pos } else { Sign::Neg };
        let mut f = Float::from_integer(&Integer::random(n, s).unwrap(), p).unwrap();
        f.scale(random::<i64>() % (max_scale + 1)).unwrap();
        f
    }

    #[test]
    fn test_add_sub_truncation() {
        // results match the exact value truncated to the destination precision
        for _ in 0..2000 {
            let p1 = random::<usize>() % 5 + 1;
            let p2 = random::<usize>() % 5 + 1;
            let p = random::<usize>() % 4 + 1;

            let a = random_float(p1, 8);
            let b = if random::<bool>() {
                random_float(p2, 8)
            } else {
                // close to `a` to get cancellation
                let mut c = random_float(p2, 2);
                c.scale(-(random::<i64>().rem_euclid(8))).unwrap();
                let mut d = Float::new(p2).unwrap();
                d.assign_sum(&a, &c).unwrap();
                d
            };

            for op in [Sign::Pos, Sign::Neg] {
                let mut exact = Float::new(64).unwrap();
                exact.add_sub(&a, &b, op).unwrap();
                let mut expected = Float::new(p).unwrap();
                expected.assign(&exact).unwrap();

                let mut r = Float::new(p).unwrap();
                r.add_sub(&a, &b, op).unwrap();
                check_normalized(&r);
                assert_eq!(r, expected);
                assert!(r.abs_cmp(&exact) != Ordering::Greater);
            }
        }
    }

    #[test]
    fn test_mul_div() {
        let p = 4;
        let three = Float::from_limb(3, p).unwrap();
        let seven = Float::from_limb(7, p).unwrap();

        let q = three.div(&seven, p).unwrap();
        check_normalized(&q);
        let r = q.mul(&seven, p).unwrap();
        // truncation leaves r just below 3
        assert!(r < three);
        assert!(three.sub(&r, p).unwrap().is_negligible(&three, p - 1));

        let n = seven.neg().unwrap().div(&three, p).unwrap();
        assert!(n.is_negative());
        assert_eq!(n.abs().unwrap(), seven.div(&three, p).unwrap());

        assert_eq!(three.div(&Float::new(p).unwrap(), p).unwrap_err(), Error::DivisionByZero);
        assert_eq!(three.div_limb(0).unwrap_err(), Error::DivisionByZero);

        assert_eq!(three.mul_limb(7).unwrap(), Float::from_limb(21, p).unwrap());
        assert_eq!(
            Float::from_limb(21, p).unwrap().div_limb(7).unwrap(),
            three
        );
        assert_eq!(three.div_limb(2).unwrap().mul_limb(2).unwrap(), three);

        let z = Float::new(p).unwrap();
        assert!(z.mul(&three, p).unwrap().is_zero());
        assert!(z.div(&three, p).unwrap().is_zero());
    }

    #[test]
    fn test_cmp() {
        let p = 2;
        let a = Float::from_limb(1, p).unwrap();
        let b = Float::from_limb(2, 5).unwrap();
        let z = Float::new(p).unwrap();

        assert!(a < b);
        assert!(a.neg().unwrap() > b.neg().unwrap());
        assert!(z < a);
        assert!(z > a.neg().unwrap());
        assert_eq!(a.abs_cmp(&a.neg().unwrap()), Ordering::Equal);
        assert_eq!(b.abs_cmp(&a), Ordering::Greater);
    }

    #[test]
    fn test_exponent_overflow() {
        let i = Integer::from_limbs(Sign::Pos, &[1, 1, 1]).unwrap();
        let mut f = Float::from_integer(&i, 1).unwrap();
        f.e = EXPONENT_MAX - 1;
        let mut r = Float::new(1).unwrap();
        assert_eq!(
            r.assign_product(&f, &f).unwrap_err(),
            Error::ExponentOverflow(Sign::Pos)
        );
    }

    #[test]
    fn test_decimal_digits() {
        assert_eq!(digits_for_precision(0), 0);
        assert_eq!(digits_for_precision(1), 0);
        assert_eq!(digits_for_precision(2), bits_to_decimal_digits(LIMB_BIT_SIZE as i64 + 1) as usize);

        let f = Float::new(4).unwrap();
        let (s, d, e) = f.to_decimal_digits().unwrap();
        assert_eq!((s, d.len(), e), (Sign::Zero, 0, 0));

        let f = Float::from_limb(125, 4).unwrap();
        let (s, d, e) = f.to_decimal_digits().unwrap();
        assert_eq!((s, d, e), (Sign::Pos, vec![1, 2, 5], 3));

        // single limb still gives one digit
        let f = Float::from_limb(125, 1).unwrap();
        let (_, d, e) = f.to_decimal_digits().unwrap();
        assert_eq!((d, e), (vec![1], 3));

        let f = Float::from_limb(1, 4).unwrap().div_limb(8).unwrap().neg().unwrap();
        let (s, d, e) = f.to_decimal_digits().unwrap();
        assert_eq!((s, d, e), (Sign::Neg, vec![1, 2, 5], 0));

        let f = Float::from_limb(1, 4).unwrap().div_limb(64).unwrap();
        let (_, d, e) = f.to_decimal_digits().unwrap();
        assert_eq!((d, e), (vec![1, 5, 6, 2, 5], -1));

        let f = Float::from_integer(&Integer::parse("123456789012345678901234567890").unwrap(), 16)
            .unwrap();
        let (_, d, e) = f.to_decimal_digits().unwrap();
        assert_eq!(e, 30);
        assert_eq!(d, vec![1, 2, 3, 4, 5, 6, 7, 8, 9, 0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 0, 1, 2, 3, 4, 5, 6, 7, 8, 9]);
    }

    fn expected_digits(s: &str, n: usize) -> Vec<u8> {
        truncate_digits(s.as_bytes()[..n].to_vec(), n)
    }

    #[test]
    fn test_decimal_digits_large_exponent() {
        let n = digits_for_precision(2);
        let bits = 1_280_000 / LIMB_BIT_SIZE as i64;

        // 2^1280000
        let mut f = Float::from_limb(1, 2).unwrap();
        f.scale(bits).unwrap();
        let (s, d, e) = f.to_decimal_digits().unwrap();
        assert_eq!(s, Sign::Pos);
        assert_eq!(e, 385319);
        assert_eq!(d, expected_digits("247998980752", n));

        // 2^-1280000
        let mut f = Float::from_limb(1, 2).unwrap().neg().unwrap();
        f.scale(-bits).unwrap();
        let (s, d, e) = f.to_decimal_digits().unwrap();
        assert_eq!(s, Sign::Neg);
        assert_eq!(e, -385318);
        assert_eq!(d, expected_digits("403227463662", n));

        // exponent range limits
        for (exp, p) in [(EXPONENT_MAX, 2), (EXPONENT_MIN, 2), (EXPONENT_MAX, 7), (EXPONENT_MIN, 5)] {
            let mut f = Float::from_limb(1, p).unwrap();
            f.e = exp;
            let (_, d, e) = f.to_decimal_digits().unwrap();
            let b = (exp as i64 + p as i64 - 1) * LIMB_BIT_SIZE as i64;
            assert_eq!(e, bits_to_decimal_digits(b) + 1);
            assert!(!d.is_empty() && d[0] != 0);
            assert!(f.to_string().starts_with("0."));
        }
    }

    #[test]
    fn test_decimal_digits_scaled() {
        // digits computed at a working precision equal the exact ones
        let mut checked = 0;
        for _ in 0..500 {
            let p = random::<usize>() % 5 + 1;
            let f = random_float(p, 40);
            let n = digits_for_precision(p).max(1);

            let (d1, e1) = f.decimal_exact(n).unwrap();
            if let Some((d2, e2)) = f.decimal_scaled(n).unwrap() {
                assert_eq!(e1, e2);
                assert_eq!(truncate_digits(d1, n), truncate_digits(d2, n));
                checked += 1;
            }
        }
        assert!(checked > 400);
    }
}
