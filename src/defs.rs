//! Definitions.

use core::fmt::Display;

use smallvec::CollectionAllocErr;

/// A limb.
#[cfg(feature = "limb8")]
pub type Limb = u8;

/// Doubled limb.
#[cfg(feature = "limb8")]
pub type DoubleLimb = u16;

/// A limb.
#[cfg(all(feature = "limb16", not(feature = "limb8")))]
pub type Limb = u16;

/// Doubled limb.
#[cfg(all(feature = "limb16", not(feature = "limb8")))]
pub type DoubleLimb = u32;

/// A limb.
#[cfg(not(any(feature = "limb8", feature = "limb16")))]
pub type Limb = u32;

/// Doubled limb.
#[cfg(not(any(feature = "limb8", feature = "limb16")))]
pub type DoubleLimb = u64;

/// An exponent of a floating point number in limbs.
pub type Exponent = i32;

/// Maximum exponent value.
pub const EXPONENT_MAX: Exponent = Exponent::MAX;

/// Minimum exponent value.
pub const EXPONENT_MIN: Exponent = Exponent::MIN;

/// Maximum value of a limb.
pub const LIMB_MAX: Limb = Limb::MAX;

/// Base of limbs (the radix).
pub const LIMB_BASE: DoubleLimb = LIMB_MAX as DoubleLimb + 1;

/// Size of a limb in bits.
pub const LIMB_BIT_SIZE: usize = core::mem::size_of::<Limb>() * 8;

/// Upper bound of the number of decimal digits one limb can hold: ceil(LIMB_BIT_SIZE * log10(2)).
pub const LIMB_DECIMAL_DIGITS: usize = (LIMB_BIT_SIZE * 1233 + 4095) >> 12;

/// Largest power of ten that fits in one limb for the configured limb width.
pub const DECIMAL_CHUNK: DecimalChunk = DecimalChunk::for_limb();

/// Sign of a number.
#[derive(PartialEq, Eq, Copy, Clone, Debug, Hash)]
pub enum Sign {
    /// Negative.
    Neg = -1,

    /// The value is zero.
    Zero = 0,

    /// Positive.
    Pos = 1,
}

impl Sign {
    /// Changes the sign to the opposite. Zero stays zero.
    pub fn invert(&self) -> Self {
        match *self {
            Sign::Pos => Sign::Neg,
            Sign::Neg => Sign::Pos,
            Sign::Zero => Sign::Zero,
        }
    }

    /// Returns true if `self` is positive.
    pub fn is_positive(&self) -> bool {
        *self == Sign::Pos
    }

    /// Returns true if `self` is negative.
    pub fn is_negative(&self) -> bool {
        *self == Sign::Neg
    }

    /// Returns true if `self` denotes zero.
    pub fn is_zero(&self) -> bool {
        *self == Sign::Zero
    }

    /// Returns 1 for the positive sign, -1 for the negative sign, and 0 for zero.
    pub fn to_int(&self) -> i8 {
        *self as i8
    }

    /// Sign of a product of numbers with signs `self` and `s2`.
    pub fn mul(&self, s2: Sign) -> Self {
        match (*self, s2) {
            (Sign::Zero, _) | (_, Sign::Zero) => Sign::Zero,
            (a, b) if a == b => Sign::Pos,
            _ => Sign::Neg,
        }
    }
}

/// Possible errors.
#[derive(Debug, Clone, Copy)]
pub enum Error {
    /// The exponent value becomes greater than the upper limit of the range of exponent values.
    ExponentOverflow(Sign),

    /// Divisor is zero.
    DivisionByZero,

    /// Invalid argument.
    InvalidArgument,

    /// A decimal string contains something else than an optional sign followed by digits.
    MalformedInput,

    /// The output buffer is too small to hold the result.
    InsufficientBuffer,

    /// Memory allocation error.
    /// There is no recovery path for exhausted memory: the failed operation leaves
    /// its destination unspecified but valid, and is never retried.
    MemoryAllocation,
}

#[cfg(feature = "std")]
impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        None
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let repr = match self {
            Error::ExponentOverflow(s) => {
                if s.is_negative() {
                    "negative overflow"
                } else {
                    "positive overflow"
                }
            }
            Error::DivisionByZero => "division by zero",
            Error::InvalidArgument => "invalid argument",
            Error::MalformedInput => "malformed decimal input",
            Error::InsufficientBuffer => "insufficient output buffer",
            Error::MemoryAllocation => "memory allocation failure",
        };
        f.write_str(repr)
    }
}

impl PartialEq for Error {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::ExponentOverflow(l0), Self::ExponentOverflow(r0)) => l0 == r0,
            _ => core::mem::discriminant(self) == core::mem::discriminant(other),
        }
    }
}

impl From<CollectionAllocErr> for Error {
    fn from(_: CollectionAllocErr) -> Self {
        Error::MemoryAllocation
    }
}

/// The number of decimal digits folded into a single limb by decimal parsing and printing.
#[derive(Eq, PartialEq, Debug, Copy, Clone)]
pub struct DecimalChunk {
    base: Limb,
    digits: usize,
}

impl DecimalChunk {
    /// The largest chunk for the configured limb width: 10^2 for 8-bit limbs,
    /// 10^4 for 16-bit limbs, 10^9 for 32-bit limbs.
    pub const fn for_limb() -> Self {
        let mut base: DoubleLimb = 1;
        let mut digits = 0;
        while base * 10 <= LIMB_MAX as DoubleLimb {
            base *= 10;
            digits += 1;
        }
        DecimalChunk {
            base: base as Limb,
            digits,
        }
    }

    /// Returns a chunk of `digits` decimal digits.
    ///
    /// ## Errors
    ///
    ///  - InvalidArgument: `digits` is zero, or 10^`digits` does not fit in a limb.
    pub fn new(digits: usize) -> Result<Self, Error> {
        if digits == 0 || digits > DECIMAL_CHUNK.digits {
            return Err(Error::InvalidArgument);
        }

        let mut base: Limb = 1;
        for _ in 0..digits {
            base *= 10;
        }

        Ok(DecimalChunk { base, digits })
    }

    /// Returns 10^`digits`.
    #[inline]
    pub fn base(&self) -> Limb {
        self.base
    }

    /// Returns the number of decimal digits in the chunk.
    #[inline]
    pub fn digits(&self) -> usize {
        self.digits
    }
}

#[cfg(test)]
mod tests {

    use super::*;

    #[test]
    fn test_decimal_chunk() {
        let c = DecimalChunk::for_limb();

        #[cfg(feature = "limb8")]
        assert_eq!((c.base(), c.digits()), (100, 2));

        #[cfg(all(feature = "limb16", not(feature = "limb8")))]
        assert_eq!((c.base(), c.digits()), (10000, 4));

        #[cfg(not(any(feature = "limb8", feature = "limb16")))]
        assert_eq!((c.base(), c.digits()), (1000000000, 9));

        assert_eq!(DecimalChunk::new(1).unwrap().base(), 10);
        assert_eq!(DecimalChunk::new(c.digits()).unwrap(), c);
        assert_eq!(DecimalChunk::new(0).unwrap_err(), Error::InvalidArgument);
        assert_eq!(DecimalChunk::new(c.digits() + 1).unwrap_err(), Error::InvalidArgument);
    }

    #[test]
    fn test_sign() {
        assert_eq!(Sign::Pos.mul(Sign::Neg), Sign::Neg);
        assert_eq!(Sign::Neg.mul(Sign::Neg), Sign::Pos);
        assert_eq!(Sign::Zero.mul(Sign::Neg), Sign::Zero);
        assert_eq!(Sign::Zero.invert(), Sign::Zero);
        assert_eq!(Sign::Neg.invert(), Sign::Pos);
        assert_eq!(Sign::Neg.to_int(), -1);
    }

    #[test]
    fn test_limb_decimal_digits() {
        // 2^8 = 256, 2^16 = 65536, 2^32 = 4294967296
        #[cfg(feature = "limb8")]
        assert_eq!(LIMB_DECIMAL_DIGITS, 3);

        #[cfg(all(feature = "limb16", not(feature = "limb8")))]
        assert_eq!(LIMB_DECIMAL_DIGITS, 5);

        #[cfg(not(any(feature = "limb8", feature = "limb16")))]
        assert_eq!(LIMB_DECIMAL_DIGITS, 10);
    }
}
