//! Integer definition and basic arithmetic, comparison, and number manipulation operations.

use crate::common::buf::LimbBuf;
use crate::common::consts::ONE;
use crate::defs::DecimalChunk;
use crate::defs::Error;
use crate::defs::Limb;
use crate::defs::Sign;
use crate::defs::LIMB_BIT_SIZE;
use crate::uint;
use crate::uint::normalized_len;
use core::cmp::Ordering;

/// An integer number of an arbitrary size.
///
/// The magnitude is stored in limbs, the least significant limb first.
/// The value is always kept normalized: the most significant limb is non-zero,
/// and all allocated limbs above the magnitude are zero.
#[derive(Debug)]
pub struct Integer {
    s: Sign,
    n: usize, // number of significant limbs, 0 is for number 0
    m: LimbBuf,
}

impl Integer {
    /// Returns a new integer with value of 0. No memory is allocated.
    pub fn new() -> Self {
        Integer {
            s: Sign::Zero,
            n: 0,
            m: LimbBuf::empty(),
        }
    }

    /// Returns a new integer with value of 0 and at least `sz` limbs allocated.
    ///
    /// ## Errors
    ///
    ///  - MemoryAllocation: failed to allocate memory.
    pub fn with_capacity(sz: usize) -> Result<Self, Error> {
        Ok(Integer {
            s: Sign::Zero,
            n: 0,
            m: LimbBuf::new(sz)?,
        })
    }

    /// Returns a new integer with value `d`.
    ///
    /// ## Errors
    ///
    ///  - MemoryAllocation: failed to allocate memory.
    pub fn from_limb(d: Limb) -> Result<Self, Error> {
        let mut ret = Self::new();
        ret.assign_limb(d)?;
        Ok(ret)
    }

    /// Returns a new integer with value `u`.
    ///
    /// ## Errors
    ///
    ///  - MemoryAllocation: failed to allocate memory.
    pub fn from_u64(mut u: u64) -> Result<Self, Error> {
        let mut limbs = [0 as Limb; 64 / LIMB_BIT_SIZE];
        for v in limbs.iter_mut() {
            *v = u as Limb;
            u = u.checked_shr(LIMB_BIT_SIZE as u32).unwrap_or(0);
        }

        let s = if limbs.iter().any(|v| *v != 0) { Sign::Pos } else { Sign::Zero };

        Self::from_limbs(s, &limbs)
    }

    /// Returns a new integer with value `i`.
    ///
    /// ## Errors
    ///
    ///  - MemoryAllocation: failed to allocate memory.
    pub fn from_i64(i: i64) -> Result<Self, Error> {
        let mut ret = Self::from_u64(i.unsigned_abs())?;
        if i < 0 {
            ret.s = Sign::Neg;
        }
        Ok(ret)
    }

    /// Constructs an integer from raw parts: sign `s` and limbs `m` starting from the least significant limb.
    /// Most significant zero limbs of `m` are ignored.
    ///
    /// ## Errors
    ///
    ///  - InvalidArgument: `s` is zero while `m` is not, or `s` is not zero while `m` is zero.
    ///  - MemoryAllocation: failed to allocate memory.
    pub fn from_limbs(s: Sign, m: &[Limb]) -> Result<Self, Error> {
        let n = normalized_len(m);

        if (n == 0) != s.is_zero() {
            return Err(Error::InvalidArgument);
        }

        Ok(Integer {
            s,
            n,
            m: LimbBuf::from_slice(&m[..n])?,
        })
    }

    /// Returns the integer placed `shift` limbs to the left: `m * radix^shift` with sign `s`.
    pub(crate) fn from_shifted(s: Sign, m: &[Limb], shift: usize) -> Result<Self, Error> {
        let l = normalized_len(m);
        if l == 0 {
            return Ok(Self::new());
        }

        let mut ret = Self::with_capacity(l + shift)?;
        ret.m[shift..shift + l].copy_from_slice(&m[..l]);
        ret.set_raw(s, l + shift);

        Ok(ret)
    }

    /// Returns 10^`k`.
    pub(crate) fn pow10(k: usize, chunk: &DecimalChunk) -> Result<Self, Error> {
        let mut ret = ONE.clone()?;

        for _ in 0..k / chunk.digits() {
            ret.mul_abs_limb(chunk.base())?;
        }

        let mut rest = 1;
        for _ in 0..k % chunk.digits() {
            rest *= 10;
        }
        ret.mul_abs_limb(rest)?;

        Ok(ret)
    }

    /// Returns a copy of the integer.
    ///
    /// ## Errors
    ///
    ///  - MemoryAllocation: failed to allocate memory.
    pub fn clone(&self) -> Result<Self, Error> {
        Ok(Integer {
            s: self.s,
            n: self.n,
            m: LimbBuf::from_slice(self.limbs())?,
        })
    }

    /// Returns the sign of the integer.
    #[inline]
    pub fn sign(&self) -> Sign {
        self.s
    }

    /// Returns the number of significant limbs with the sign of the integer:
    /// negative for negative numbers, 0 for zero.
    #[inline]
    pub fn size(&self) -> isize {
        self.n as isize * self.s.to_int() as isize
    }

    /// Returns the number of significant limbs.
    #[inline]
    pub fn len(&self) -> usize {
        self.n
    }

    /// Returns the number of allocated limbs.
    #[inline]
    pub fn allocated(&self) -> usize {
        self.m.len()
    }

    /// Returns the significant limbs of the magnitude starting from the least significant limb.
    #[inline]
    pub fn limbs(&self) -> &[Limb] {
        &self.m[..self.n]
    }

    /// Returns true if the integer is zero.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.n == 0
    }

    /// Returns true if the integer is positive.
    #[inline]
    pub fn is_positive(&self) -> bool {
        self.s.is_positive()
    }

    /// Returns true if the integer is negative.
    #[inline]
    pub fn is_negative(&self) -> bool {
        self.s.is_negative()
    }

    /// Returns true if the most significant limb is not zero, and all allocated limbs above it are zero.
    pub fn is_normalized(&self) -> bool {
        if self.m[self.n..].iter().any(|v| *v != 0) {
            return false;
        }

        if self.n > 0 && self.m[self.n - 1] == 0 {
            return false;
        }

        (self.n == 0) == self.s.is_zero()
    }

    /// Removes most significant zero limbs from the magnitude. Zero gets zero sign.
    pub fn normalize(&mut self) {
        let n = self.n;
        self.m[n..].fill(0);
        self.n = normalized_len(&self.m[..n]);
        if self.n == 0 {
            self.s = Sign::Zero;
        }
    }

    /// Assigns the value of `src` to `self`. Allocated memory is reused if it is large enough.
    ///
    /// ## Errors
    ///
    ///  - MemoryAllocation: failed to allocate memory.
    pub fn assign(&mut self, src: &Self) -> Result<(), Error> {
        let l = src.n;

        if self.m.len() < l {
            self.m.grow(l)?;
        } else if l < self.n {
            self.m[l..self.n].fill(0);
        }

        self.m[..l].copy_from_slice(src.limbs());
        self.n = l;
        self.s = src.s;

        Ok(())
    }

    /// Assigns 0 to `self`. Allocated memory is kept.
    pub fn assign_zero(&mut self) {
        let n = self.n;
        self.m[..n].fill(0);
        self.n = 0;
        self.s = Sign::Zero;
    }

    /// Assigns the value `d` to `self`.
    ///
    /// ## Errors
    ///
    ///  - MemoryAllocation: failed to allocate memory.
    pub fn assign_limb(&mut self, d: Limb) -> Result<(), Error> {
        self.assign_zero();

        if d != 0 {
            self.m.grow(1)?;
            self.m[0] = d;
            self.n = 1;
            self.s = Sign::Pos;
        }

        Ok(())
    }

    /// Exchanges the values of `self` and `other` without copying limbs.
    #[inline]
    pub fn swap(&mut self, other: &mut Self) {
        core::mem::swap(self, other);
    }

    /// Releases allocated limbs above the magnitude.
    pub fn shrink_to_fit(&mut self) {
        self.m.shrink_to(self.n);
    }

    /// Assigns 0 to `self` and releases all allocated memory.
    pub fn release(&mut self) {
        self.m.release();
        self.n = 0;
        self.s = Sign::Zero;
    }

    /// Changes the sign of the integer to the opposite.
    #[inline]
    pub fn inv_sign(&mut self) {
        self.s = self.s.invert();
    }

    /// Returns a copy of the integer with the sign reversed.
    ///
    /// ## Errors
    ///
    ///  - MemoryAllocation: failed to allocate memory.
    pub fn neg(&self) -> Result<Self, Error> {
        let mut ret = self.clone()?;
        ret.inv_sign();
        Ok(ret)
    }

    /// Returns the absolute value of the integer.
    ///
    /// ## Errors
    ///
    ///  - MemoryAllocation: failed to allocate memory.
    pub fn abs(&self) -> Result<Self, Error> {
        let mut ret = self.clone()?;
        if ret.s.is_negative() {
            ret.s = Sign::Pos;
        }
        Ok(ret)
    }

    /// Compares the absolute values of `self` and `d2`.
    #[inline]
    pub fn abs_cmp(&self, d2: &Self) -> Ordering {
        uint::cmp(self.limbs(), d2.limbs())
    }

    /// Adds `d1` and `d2` and assigns the result to `self`.
    /// Allocated memory of `self` is reused if it is large enough.
    ///
    /// ## Errors
    ///
    ///  - MemoryAllocation: failed to allocate memory.
    #[inline]
    pub fn assign_sum(&mut self, d1: &Self, d2: &Self) -> Result<(), Error> {
        self.add_sub(d1, d2, Sign::Pos)
    }

    /// Subtracts `d2` from `d1` and assigns the result to `self`.
    /// Allocated memory of `self` is reused if it is large enough.
    ///
    /// ## Errors
    ///
    ///  - MemoryAllocation: failed to allocate memory.
    #[inline]
    pub fn assign_difference(&mut self, d1: &Self, d2: &Self) -> Result<(), Error> {
        self.add_sub(d1, d2, Sign::Neg)
    }

    /// Multiplies `d1` by `d2` and assigns the result to `self`.
    /// Allocated memory of `self` is reused if it is large enough.
    ///
    /// ## Errors
    ///
    ///  - MemoryAllocation: failed to allocate memory.
    pub fn assign_product(&mut self, d1: &Self, d2: &Self) -> Result<(), Error> {
        if d1.is_zero() || d2.is_zero() {
            self.assign_zero();
            return Ok(());
        }

        self.prepare(d1.n + d2.n)?;
        let n = uint::mul(d1.limbs(), d2.limbs(), &mut self.m);
        self.set_raw(d1.s.mul(d2.s), n);

        Ok(())
    }

    /// Divides `self` by `d`, assigns the quotient to `q`, and the remainder to `r`.
    ///
    /// The division is euclidean: the remainder is never negative, `0 <= r < abs(d)`,
    /// and `self = q * d + r`.
    ///
    /// ## Errors
    ///
    ///  - DivisionByZero: `d` is zero.
    ///  - MemoryAllocation: failed to allocate memory.
    pub fn div_rem_to(&self, d: &Self, q: &mut Self, r: &mut Self) -> Result<(), Error> {
        if d.is_zero() {
            return Err(Error::DivisionByZero);
        }

        let a = self.limbs();
        let b = d.limbs();

        if a.len() < b.len() {
            q.assign_zero();
            r.assign(self)?;
            r.s = if r.is_zero() { Sign::Zero } else { Sign::Pos };
        } else if b.len() == 1 {
            q.prepare(a.len())?;
            let rem = uint::div_limb(a, b[0], &mut q.m);
            let n = normalized_len(&q.m[..a.len()]);
            q.set_raw(Sign::Pos, n);
            r.assign_limb(rem)?;
        } else {
            q.prepare(a.len() - b.len() + 1)?;
            r.prepare(b.len())?;
            let (qn, rn) = uint::div_knuth(a, b, &mut q.m, &mut r.m)?;
            q.set_raw(Sign::Pos, qn);
            r.set_raw(Sign::Pos, rn);
        }

        if self.is_negative() && !r.is_zero() {
            // -a = -(q + 1) * d + (d - r)
            q.incr_abs(1)?;
            let mut t = Self::new();
            t.assign_abs_diff(b, r.limbs())?;
            r.swap(&mut t);
        }

        if !q.is_zero() && self.is_negative() != d.is_negative() {
            q.s = Sign::Neg;
        }

        Ok(())
    }

    /// Returns the sum of `self` and `d2`.
    ///
    /// ## Errors
    ///
    ///  - MemoryAllocation: failed to allocate memory.
    pub fn add(&self, d2: &Self) -> Result<Self, Error> {
        let mut ret = Self::new();
        ret.assign_sum(self, d2)?;
        Ok(ret)
    }

    /// Returns the difference of `self` and `d2`.
    ///
    /// ## Errors
    ///
    ///  - MemoryAllocation: failed to allocate memory.
    pub fn sub(&self, d2: &Self) -> Result<Self, Error> {
        let mut ret = Self::new();
        ret.assign_difference(self, d2)?;
        Ok(ret)
    }

    /// Returns the product of `self` and `d2`.
    ///
    /// ## Errors
    ///
    ///  - MemoryAllocation: failed to allocate memory.
    pub fn mul(&self, d2: &Self) -> Result<Self, Error> {
        let mut ret = Self::new();
        ret.assign_product(self, d2)?;
        Ok(ret)
    }

    /// Returns the euclidean quotient and the remainder of the division of `self` by `d`.
    ///
    /// ## Errors
    ///
    ///  - DivisionByZero: `d` is zero.
    ///  - MemoryAllocation: failed to allocate memory.
    pub fn div_rem(&self, d: &Self) -> Result<(Self, Self), Error> {
        let mut q = Self::new();
        let mut r = Self::new();
        self.div_rem_to(d, &mut q, &mut r)?;
        Ok((q, r))
    }

    /// Adds `v` to the absolute value of the integer. Zero becomes positive.
    /// On overflow the allocation grows by exactly one limb when no spare limb is available.
    ///
    /// ## Errors
    ///
    ///  - MemoryAllocation: failed to allocate memory.
    pub fn incr_abs(&mut self, v: Limb) -> Result<(), Error> {
        let n = self.n;
        let c = uint::incr(&mut self.m[..n], v);

        if c > 0 {
            self.m.grow(n + 1)?;
            self.m[n] = c;
            self.n = n + 1;
            if self.s.is_zero() {
                self.s = Sign::Pos;
            }
        }

        Ok(())
    }

    /// Subtracts `v` from the absolute value of the integer.
    ///
    /// ## Errors
    ///
    ///  - InvalidArgument: the absolute value is smaller than `v`.
    pub fn decr_abs(&mut self, v: Limb) -> Result<(), Error> {
        let n = self.n;

        if n == 0 && v > 0 || n == 1 && self.m[0] < v {
            return Err(Error::InvalidArgument);
        }

        let c = uint::decr(&mut self.m[..n], v);
        debug_assert!(c == 0);

        self.n = normalized_len(&self.m[..n]);
        if self.n == 0 {
            self.s = Sign::Zero;
        }

        Ok(())
    }

    /// Multiplies the absolute value of the integer by `v`.
    ///
    /// ## Errors
    ///
    ///  - MemoryAllocation: failed to allocate memory.
    pub fn mul_abs_limb(&mut self, v: Limb) -> Result<(), Error> {
        if v == 0 {
            self.assign_zero();
            return Ok(());
        }

        let n = self.n;
        let c = uint::mul_limb(&mut self.m[..n], v);

        if c > 0 {
            self.m.grow(n + 1)?;
            self.m[n] = c;
            self.n = n + 1;
        }

        Ok(())
    }

    /// Divides the absolute value of the integer by `v` and returns the remainder.
    ///
    /// ## Errors
    ///
    ///  - DivisionByZero: `v` is zero.
    pub fn div_abs_limb(&mut self, v: Limb) -> Result<Limb, Error> {
        if v == 0 {
            return Err(Error::DivisionByZero);
        }

        let n = self.n;
        let r = uint::div_limb_assign(&mut self.m[..n], v);

        self.n = normalized_len(&self.m[..n]);
        if self.n == 0 {
            self.s = Sign::Zero;
        }

        Ok(r)
    }

    /// Drops `k` least significant limbs: the magnitude is divided by radix^`k`.
    pub(crate) fn shr_limbs(&mut self, k: usize) {
        let n = self.n;

        if k >= n {
            self.assign_zero();
        } else if k > 0 {
            self.m.copy_within(k..n, 0);
            self.m[n - k..n].fill(0);
            self.n = n - k;
        }
    }

    // self = a - b for unsigned a >= b.
    fn assign_abs_diff(&mut self, a: &[Limb], b: &[Limb]) -> Result<(), Error> {
        self.prepare(a.len())?;
        let n = uint::sub(a, b, &mut self.m);
        self.set_raw(Sign::Pos, n);
        Ok(())
    }

    fn add_sub(&mut self, d1: &Self, d2: &Self, op: Sign) -> Result<(), Error> {
        let s2 = d2.s.mul(op);

        if d1.is_zero() {
            self.assign(d2)?;
            self.s = s2;
        } else if d2.is_zero() {
            self.assign(d1)?;
        } else if d1.s == s2 {
            self.prepare(d1.n.max(d2.n) + 1)?;
            let n = uint::add(d1.limbs(), d2.limbs(), &mut self.m);
            self.set_raw(d1.s, n);
        } else {
            match uint::cmp(d1.limbs(), d2.limbs()) {
                Ordering::Equal => self.assign_zero(),
                Ordering::Greater => {
                    self.prepare(d1.n)?;
                    let n = uint::sub(d1.limbs(), d2.limbs(), &mut self.m);
                    self.set_raw(d1.s, n);
                }
                Ordering::Less => {
                    self.prepare(d2.n)?;
                    let n = uint::sub(d2.limbs(), d1.limbs(), &mut self.m);
                    self.set_raw(s2, n);
                }
            }
        }

        Ok(())
    }

    /// Makes sure at least `sz` limbs are allocated and all allocated limbs are zero.
    /// The value becomes zero.
    pub(crate) fn prepare(&mut self, sz: usize) -> Result<(), Error> {
        self.m.reset(sz, self.n)?;
        self.n = 0;
        self.s = Sign::Zero;
        Ok(())
    }

    /// All allocated limbs.
    #[inline]
    pub(crate) fn buf_mut(&mut self) -> &mut [Limb] {
        &mut self.m
    }

    /// Sets the number of significant limbs and the sign after limbs were written directly to the buffer.
    pub(crate) fn set_raw(&mut self, s: Sign, n: usize) {
        self.n = n;
        self.s = if n == 0 { Sign::Zero } else { s };

        debug_assert!(self.is_normalized());
    }

    /// Returns a random integer of `n` significant limbs and sign `s`.
    ///
    /// ## Errors
    ///
    ///  - InvalidArgument: `n` is zero while `s` is not, or `s` is zero while `n` is not.
    ///  - MemoryAllocation: failed to allocate memory.
    #[cfg(feature = "random")]
    pub fn random(n: usize, s: Sign) -> Result<Self, Error> {
        if (n == 0) != s.is_zero() {
            return Err(Error::InvalidArgument);
        }

        let mut ret = Self::with_capacity(n)?;

        for v in ret.m.iter_mut() {
            *v = rand::random::<Limb>();
        }

        if n > 0 {
            while ret.m[n - 1] == 0 {
                ret.m[n - 1] = rand::random::<Limb>();
            }
        }

        ret.set_raw(s, n);

        Ok(ret)
    }
}

impl Default for Integer {
    fn default() -> Self {
        Self::new()
    }
}

impl Ord for Integer {
    fn cmp(&self, other: &Self) -> Ordering {
        match self.s.to_int().cmp(&other.s.to_int()) {
            Ordering::Equal => match self.s {
                Sign::Pos => uint::cmp(self.limbs(), other.limbs()),
                Sign::Neg => uint::cmp(other.limbs(), self.limbs()),
                Sign::Zero => Ordering::Equal,
            },
            ord => ord,
        }
    }
}

impl PartialOrd for Integer {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Integer {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Integer {}
