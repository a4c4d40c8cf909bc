//! Serde hooks for binding request fields onto enum kinds.
//!
//! Kinds declared with [`enum_kind!`](crate::enum_kind) already deserialize
//! through [`deserialize`]. Optional fields that may be cleared with an empty
//! string use [`option`]:
//!
//! ```ignore
//! #[derive(Deserialize)]
//! struct VerifyParams {
//!     #[serde(default, deserialize_with = "enum_binding::de::option")]
//!     position: Option<FingerPosition>,
//! }
//! ```

use crate::{EnumKind, resolver};
use serde::Deserializer;
use serde::de::{self, Visitor};
use std::fmt;
use std::marker::PhantomData;

/// Required field: strings and integers resolve, the empty string is rejected.
pub fn deserialize<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: EnumKind,
{
    deserializer
        .deserialize_any(KindVisitor::<T>(PhantomData))?
        .ok_or_else(|| de::Error::custom(resolver().unmatched::<T>("")))
}

/// Optional field: `null`, a missing field (with `#[serde(default)]`) and the
/// empty string all give `None`.
pub fn option<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: EnumKind,
{
    deserializer.deserialize_option(OptionVisitor::<T>(PhantomData))
}

struct KindVisitor<T>(PhantomData<T>);

impl<'de, T: EnumKind> Visitor<'de> for KindVisitor<T> {
    type Value = Option<T>;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if T::defines_codes() {
            write!(f, "a {} name or code", T::KIND)
        } else {
            write!(f, "a {} name", T::KIND)
        }
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
        resolver().resolve(v).map_err(E::custom)
    }

    // Numbers go through their decimal form, so codes work as JSON numbers.
    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
        self.visit_str(&v.to_string())
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
        self.visit_str(&v.to_string())
    }
}

struct OptionVisitor<T>(PhantomData<T>);

impl<'de, T: EnumKind> Visitor<'de> for OptionVisitor<T> {
    type Value = Option<T>;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "an optional {}", T::KIND)
    }

    fn visit_none<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(None)
    }

    fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(None)
    }

    fn visit_some<D>(self, deserializer: D) -> Result<Self::Value, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(KindVisitor::<T>(PhantomData))
    }
}
