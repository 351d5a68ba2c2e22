//! Decimal printing of unsigned integers.

use crate::common::buf::LimbBuf;
use crate::defs::DecimalChunk;
use crate::defs::Error;
use crate::defs::Limb;
use crate::defs::LIMB_DECIMAL_DIGITS;
use crate::uint::div_limb_assign;
use crate::uint::normalized_len;

/// Upper bound of the number of decimal digits needed to print `a`.
#[inline]
pub fn print_size(a: &[Limb]) -> usize {
    if a.is_empty() {
        1
    } else {
        a.len() * LIMB_DECIMAL_DIGITS
    }
}

/// Writes decimal digits of `a` as ASCII characters to `out`, and returns the number of characters written.
/// `out` must hold at least `print_size(a)` bytes. Zero is printed as "0".
/// Digits are produced `chunk.digits()` at a time by repeated division by `chunk.base()`.
///
/// ## Errors
///
///  - MemoryAllocation: failed to allocate memory for the working buffers.
pub fn print(a: &[Limb], chunk: &DecimalChunk, out: &mut [u8]) -> Result<usize, Error> {
    debug_assert!(out.len() >= print_size(a));

    let mut l = normalized_len(a);

    if l == 0 {
        out[0] = b'0';
        return Ok(1);
    }

    let mut m = LimbBuf::from_slice(&a[..l])?;
    let mut parts = LimbBuf::new(l * LIMB_DECIMAL_DIGITS / chunk.digits() + 1)?;
    let mut pn = 0;

    while l > 0 {
        parts[pn] = div_limb_assign(&mut m[..l], chunk.base());
        pn += 1;
        l = normalized_len(&m[..l]);
    }

    let mut written = 0;
    let mut digits = [0u8; 20];

    for (i, part) in parts[..pn].iter().rev().enumerate() {
        let mut v = *part;
        for d in digits[..chunk.digits()].iter_mut().rev() {
            *d = b'0' + (v % 10) as u8;
            v /= 10;
        }

        let skip = if i == 0 {
            // the most significant part is printed without leading zeroes
            digits[..chunk.digits() - 1]
                .iter()
                .take_while(|d| **d == b'0')
                .count()
        } else {
            0
        };

        let n = chunk.digits() - skip;
        out[written..written + n].copy_from_slice(&digits[skip..chunk.digits()]);
        written += n;
    }

    Ok(written)
}
