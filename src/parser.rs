//! Parser of decimal integer strings.

use crate::defs::DecimalChunk;
use crate::defs::Error;
use crate::defs::Limb;
use crate::defs::Sign;
use crate::defs::DECIMAL_CHUNK;
use crate::defs::LIMB_BIT_SIZE;
use crate::int::Integer;
use core::str::FromStr;

/// Splits optional leading sign from the digits.
fn split_sign(s: &[u8]) -> (Sign, &[u8]) {
    match s.first() {
        Some(b'-') => (Sign::Neg, &s[1..]),
        Some(b'+') => (Sign::Pos, &s[1..]),
        _ => (Sign::Pos, s),
    }
}

impl Integer {
    /// Parses a decimal string: an optional `+` or `-` followed by one or more decimal digits.
    /// Leading zeroes are allowed, and "-0" is zero.
    ///
    /// ## Errors
    ///
    ///  - MalformedInput: the string is empty, has no digits after the sign, or contains a non-digit character.
    ///  - MemoryAllocation: failed to allocate memory.
    pub fn parse(s: &str) -> Result<Self, Error> {
        Self::parse_with(s, &DECIMAL_CHUNK)
    }

    /// Parses a decimal string folding `chunk.digits()` digits into the result at a time.
    ///
    /// ## Errors
    ///
    ///  - MalformedInput: the string is empty, has no digits after the sign, or contains a non-digit character.
    ///  - MemoryAllocation: failed to allocate memory.
    pub fn parse_with(s: &str, chunk: &DecimalChunk) -> Result<Self, Error> {
        let (sign, digits) = split_sign(s.as_bytes());

        if digits.is_empty() || !digits.iter().all(|c| c.is_ascii_digit()) {
            return Err(Error::MalformedInput);
        }

        let zeroes = digits.iter().take_while(|c| **c == b'0').count();
        let digits = &digits[zeroes..];

        // log2(10) < 3402/1024
        let mut ret = Integer::with_capacity(((digits.len() * 3402) >> 10) / LIMB_BIT_SIZE + 1)?;

        let mut pos = 0;
        let mut l = match digits.len() % chunk.digits() {
            0 => chunk.digits(),
            r => r,
        };

        while pos < digits.len() {
            let mut v: Limb = 0;
            let mut m: Limb = 1;

            for c in &digits[pos..pos + l] {
                v = v * 10 + (c - b'0') as Limb;
                m *= 10;
            }

            ret.mul_abs_limb(m)?;
            ret.incr_abs(v)?;

            pos += l;
            l = chunk.digits();
        }

        if sign.is_negative() && !ret.is_zero() {
            ret.inv_sign();
        }

        Ok(ret)
    }
}

impl FromStr for Integer {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Error> {
        Self::parse(s)
    }
}

#[cfg(test)]
mod tests {

    use super::*;
    use crate::defs::LIMB_MAX;

    #[cfg(not(feature = "std"))]
    use alloc::string::ToString;

    #[test]
    fn test_parse() {
        let d = Integer::parse("0").unwrap();
        assert!(d.is_zero());
        assert_eq!(d.sign(), Sign::Zero);

        let d = Integer::parse("-0000").unwrap();
        assert!(d.is_zero());
        assert_eq!(d.sign(), Sign::Zero);

        let d = Integer::parse("+0042").unwrap();
        assert_eq!(d.limbs(), &[42]);
        assert_eq!(d.sign(), Sign::Pos);

        let d = Integer::parse("-42").unwrap();
        assert_eq!(d.size(), -1);

        let d: Integer = LIMB_MAX.to_string().parse().unwrap();
        assert_eq!(d.limbs(), &[LIMB_MAX]);

        let d = Integer::parse(&(LIMB_MAX as u128 + 1).to_string()).unwrap();
        assert_eq!(d.limbs(), &[0, 1]);
        assert!(d.is_normalized());

        for s in ["", "-", "+", "12a3", " 1", "1 ", "--1", "1.0", "+-1"] {
            assert_eq!(Integer::parse(s).unwrap_err(), Error::MalformedInput);
        }
    }

    #[test]
    fn test_parse_chunks() {
        let s = "-98765432109876543210987654321";
        let d = Integer::parse(s).unwrap();

        for digits in 1..=DECIMAL_CHUNK.digits() {
            let c = DecimalChunk::new(digits).unwrap();
            assert_eq!(Integer::parse_with(s, &c).unwrap(), d);
        }
    }
}
