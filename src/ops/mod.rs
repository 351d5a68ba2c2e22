//! High-level operations on the numbers.

mod factorial;
mod gcd;
mod pi;
mod sqrt;
