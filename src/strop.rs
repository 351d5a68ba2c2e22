//! Decimal string output of integers and floating point numbers.

use crate::defs::DecimalChunk;
use crate::defs::Error;
use crate::defs::DECIMAL_CHUNK;
use crate::int::Integer;
use crate::num::Float;
use crate::uint;
use core::fmt::Display;
use core::fmt::Write;

#[cfg(not(feature = "std"))]
use alloc::{string::String, vec};

impl Integer {
    /// Returns the upper bound of the buffer size needed for decimal output of the number,
    /// including the sign and the terminating NUL character.
    pub fn print_size(&self) -> usize {
        self.is_negative() as usize + uint::print_size(self.limbs()) + 1
    }

    /// Writes the decimal representation of the number to `out` followed by the NUL character,
    /// and returns the number of characters written not counting the NUL.
    ///
    /// ## Errors
    ///
    ///  - InsufficientBuffer: `out` is shorter than `print_size()`. Nothing is written.
    ///  - MemoryAllocation: failed to allocate memory.
    pub fn print_decimal(&self, out: &mut [u8]) -> Result<usize, Error> {
        self.print_decimal_with(&DECIMAL_CHUNK, out)
    }

    /// Writes the decimal representation of the number to `out` followed by the NUL character
    /// producing `chunk.digits()` digits per division, and returns the number of characters written not counting the NUL.
    ///
    /// ## Errors
    ///
    ///  - InsufficientBuffer: `out` is shorter than `print_size()`. Nothing is written.
    ///  - MemoryAllocation: failed to allocate memory.
    pub fn print_decimal_with(&self, chunk: &DecimalChunk, out: &mut [u8]) -> Result<usize, Error> {
        if out.len() < self.print_size() {
            return Err(Error::InsufficientBuffer);
        }

        let mut pos = 0;
        if self.is_negative() {
            out[0] = b'-';
            pos = 1;
        }

        pos += uint::print(self.limbs(), chunk, &mut out[pos..])?;
        out[pos] = 0;

        Ok(pos)
    }

    /// Returns the decimal representation of the number.
    ///
    /// ## Errors
    ///
    ///  - MemoryAllocation: failed to allocate memory.
    pub fn to_decimal_string(&self) -> Result<String, Error> {
        self.to_decimal_with(&DECIMAL_CHUNK)
    }

    /// Returns the decimal representation of the number produced `chunk.digits()` digits per division.
    ///
    /// ## Errors
    ///
    ///  - MemoryAllocation: failed to allocate memory.
    pub fn to_decimal_with(&self, chunk: &DecimalChunk) -> Result<String, Error> {
        let mut buf = vec![0u8; self.print_size()];
        let n = self.print_decimal_with(chunk, &mut buf)?;

        let mut ret = String::new();
        ret.try_reserve_exact(n)
            .map_err(|_| Error::MemoryAllocation)?;
        ret.extend(buf[..n].iter().map(|c| *c as char));

        Ok(ret)
    }
}

impl Display for Integer {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let s = self.to_decimal_string().map_err(|_| core::fmt::Error)?;
        f.write_str(&s)
    }
}

impl Float {
    /// Returns the decimal representation of the number in the form `[-]0.<digits>e<+|-><exponent>`,
    /// where the value is approximately `0.<digits> * 10^exponent`. Zero is represented as `0`.
    ///
    /// ## Errors
    ///
    ///  - MemoryAllocation: failed to allocate memory.
    pub fn to_decimal_string(&self) -> Result<String, Error> {
        let (s, digits, e) = self.to_decimal_digits()?;

        let mut ret = String::new();

        if digits.is_empty() {
            ret.push('0');
            return Ok(ret);
        }

        if s.is_negative() {
            ret.push('-');
        }

        ret.push_str("0.");
        for d in digits {
            ret.push((b'0' + d) as char);
        }

        let _ = if e < 0 {
            write!(ret, "e-{}", e.unsigned_abs())
        } else {
            write!(ret, "e+{}", e)
        };

        Ok(ret)
    }

    /// Writes the decimal representation of the number to `out` followed by the NUL character,
    /// and returns the number of characters written not counting the NUL.
    /// The format is the one of `to_decimal_string`.
    ///
    /// ## Errors
    ///
    ///  - InsufficientBuffer: `out` can't hold the representation and the NUL. Nothing is written.
    ///  - MemoryAllocation: failed to allocate memory.
    pub fn print_decimal(&self, out: &mut [u8]) -> Result<usize, Error> {
        let s = self.to_decimal_string()?;
        let n = s.len();

        if out.len() <= n {
            return Err(Error::InsufficientBuffer);
        }

        out[..n].copy_from_slice(s.as_bytes());
        out[n] = 0;

        Ok(n)
    }
}

impl Display for Float {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let s = self.to_decimal_string().map_err(|_| core::fmt::Error)?;
        f.write_str(&s)
    }
}

#[cfg(test)]
mod tests {

    use super::*;
    use crate::defs::Limb;
    use crate::defs::Sign;
    use crate::defs::LIMB_MAX;
    use rand::random;

    #[cfg(not(feature = "std"))]
    use alloc::{format, string::ToString};

    #[test]
    fn test_print_integer() {
        let d = Integer::parse("-1234567890123456789").unwrap();
        assert_eq!(d.to_decimal_string().unwrap(), "-1234567890123456789");
        assert_eq!(format!("{}", d), "-1234567890123456789");
        assert_eq!(Integer::new().to_string(), "0");

        let mut out = [0xffu8; 40];
        let n = d.print_decimal(&mut out).unwrap();
        assert_eq!(&out[..n], b"-1234567890123456789");
        assert_eq!(out[n], 0);

        // too small buffer is left untouched
        let mut out = [0xffu8; 20];
        assert!(d.print_size() > 20);
        assert_eq!(d.print_decimal(&mut out).unwrap_err(), Error::InsufficientBuffer);
        assert!(out.iter().all(|c| *c == 0xff));

        let mut out = [0u8; 1];
        assert_eq!(Integer::new().print_decimal(&mut out).unwrap_err(), Error::InsufficientBuffer);
        let mut out = [0u8; 2];
        assert_eq!(Integer::new().print_decimal(&mut out).unwrap(), 1);
        assert_eq!(&out, b"0\0");

        let d = Integer::from_limb(LIMB_MAX).unwrap();
        for digits in 1..=DECIMAL_CHUNK.digits() {
            let c = DecimalChunk::new(digits).unwrap();
            assert_eq!(d.to_decimal_with(&c).unwrap(), LIMB_MAX.to_string());
        }

        for _ in 0..100 {
            let v = random::<i64>();
            let d = Integer::from_i64(v).unwrap();
            let c = DecimalChunk::new(random::<usize>() % DECIMAL_CHUNK.digits() + 1).unwrap();
            let s = d.to_decimal_with(&c).unwrap();
            assert_eq!(s, v.to_string());
        }
    }

    #[test]
    fn test_round_trip() {
        for _ in 0..1000 {
            let n = random::<usize>() % 10;
            let s = if n == 0 {
                Sign::Zero
            } else if random::<bool>() {
                Sign::Pos
            } else {
                Sign::Neg
            };
            let d = Integer::random(n, s).unwrap();
            let p = Integer::parse(&d.to_decimal_string().unwrap()).unwrap();
            assert_eq!(p, d);
        }

        for _ in 0..1000 {
            let v = random::<i64>();
            let d = Integer::from_i64(v).unwrap();
            assert_eq!(d.to_string(), v.to_string());
        }
    }

    #[test]
    fn test_print_float() {
        assert_eq!(Float::new(2).unwrap().to_decimal_string().unwrap(), "0");

        let f = Float::from_limb(125, 3).unwrap();
        assert_eq!(f.to_decimal_string().unwrap(), "0.125e+3");

        let f = Float::from_limb(1, 3).unwrap().div_limb(8).unwrap().neg().unwrap();
        assert_eq!(f.to_string(), "-0.125e+0");

        let f = Float::from_limb(1, 3).unwrap().div_limb(64).unwrap();
        assert_eq!(f.to_string(), "0.15625e-1");

        let mut out = [0u8; 11];
        assert_eq!(f.print_decimal(&mut out).unwrap(), 10);
        assert_eq!(&out, b"0.15625e-1\0");

        let mut out = [0u8; 10];
        assert_eq!(f.print_decimal(&mut out).unwrap_err(), Error::InsufficientBuffer);

        let f = Float::from_limb(10 as Limb, 2).unwrap();
        assert_eq!(f.to_string(), "0.1e+2");
    }
}
