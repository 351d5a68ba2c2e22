//! Static constants.

use crate::int::Integer;
use lazy_static::lazy_static;

lazy_static! {

    /// 1
    pub static ref ONE: Integer = Integer::from_limb(1).expect("Constant ONE initialized");
}
