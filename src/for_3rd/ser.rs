//! Serialization of Integer and Float.
//! Numbers are serialized to decimal strings.

use crate::{Float, Integer};
use serde::ser::Error;
use serde::{Serialize, Serializer};

#[cfg(not(feature = "std"))]
use alloc::format;

impl Serialize for Integer {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self.to_decimal_string() {
            Ok(s) => serializer.serialize_str(&s),
            Err(e) => Err(Error::custom(format!("{e:?}"))),
        }
    }
}

impl Serialize for Float {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self.to_decimal_string() {
            Ok(s) => serializer.serialize_str(&s),
            Err(e) => Err(Error::custom(format!("{e:?}"))),
        }
    }
}
