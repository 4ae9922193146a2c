//! Serialize and deserialize big integers as hexadecimal strings.

use crate::bigint::BigInt;
use core::fmt;
use serde_core::de::{self, Deserialize, Deserializer, Visitor};
use serde_core::ser::{self, Serialize, Serializer};

impl Serialize for BigInt {
    #[inline]
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let hex = self.to_hex().map_err(ser::Error::custom)?;
        serializer.serialize_str(&hex)
    }
}

impl<'de> Deserialize<'de> for BigInt {
    #[inline]
    fn deserialize<D>(deserializer: D) -> Result<BigInt, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct BigIntVisitor;

        impl<'de> Visitor<'de> for BigIntVisitor {
            type Value = BigInt;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a hexadecimal integer string")
            }

            fn visit_str<E>(self, value: &str) -> Result<BigInt, E>
            where
                E: de::Error,
            {
                BigInt::from_str_radix(value, 16).map_err(de::Error::custom)
            }
        }

        deserializer.deserialize_str(BigIntVisitor)
    }
}
