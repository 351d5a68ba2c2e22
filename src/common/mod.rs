//! Common components shared by the number types.

pub mod buf;
pub mod consts;
pub mod util;
