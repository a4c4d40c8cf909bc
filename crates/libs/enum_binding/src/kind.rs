use std::fmt;

/// A closed set of named variants that request parameters can bind to.
///
/// Implemented through [`enum_kind!`](crate::enum_kind); variant tables are
/// `'static` and never change at runtime.
pub trait EnumKind: Copy + Eq + fmt::Debug + Send + Sync + 'static {
    /// Kind name reported in errors, e.g. `"DataType"`.
    const KIND: &'static str;

    /// All variants in declaration order.
    const VARIANTS: &'static [Self];

    /// Canonical name of the variant, e.g. `"RIGHT_THUMB"`.
    fn name(self) -> &'static str;

    /// Numeric code, only for kinds that define one.
    fn code(self) -> Option<i32> {
        None
    }

    /// Whether the kind can also be addressed by numeric code.
    #[must_use]
    fn defines_codes() -> bool {
        Self::VARIANTS.iter().any(|variant| variant.code().is_some())
    }

    /// Exact, case-sensitive canonical name lookup.
    #[must_use]
    fn from_name(name: &str) -> Option<Self> {
        Self::VARIANTS
            .iter()
            .copied()
            .find(|variant| variant.name() == name)
    }

    #[must_use]
    fn from_code(code: i32) -> Option<Self> {
        Self::VARIANTS
            .iter()
            .copied()
            .find(|variant| variant.code() == Some(code))
    }
}

/// Declares a closed enum kind and wires it into the resolver.
///
/// Each variant maps to its canonical name and, optionally, a numeric code:
///
/// ```
/// enum_binding::enum_kind! {
///     pub enum Hand {
///         Left => "LEFT" = 1,
///         Right => "RIGHT" = 2,
///     }
/// }
///
/// let hand: Hand = "2".parse().unwrap();
/// assert_eq!(hand, Hand::Right);
/// ```
///
/// Generates `Debug`, `Clone`, `Copy`, `PartialEq`, `Eq` and `Hash`, an
/// [`EnumKind`] impl, `Display` (canonical name), `FromStr` and serde
/// `Deserialize`, both backed by the shared resolver. Outer and variant
/// attributes are passed through, so `Serialize` can be derived with its own
/// wire names.
#[macro_export]
macro_rules! enum_kind {
    (
        $(#[$meta:meta])*
        $vis:vis enum $kind:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident => $name:literal $(= $code:literal)?
            ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        $vis enum $kind {
            $(
                $(#[$variant_meta])*
                $variant,
            )+
        }

        impl $crate::EnumKind for $kind {
            const KIND: &'static str = stringify!($kind);
            const VARIANTS: &'static [Self] = &[$(Self::$variant),+];

            fn name(self) -> &'static str {
                match self {
                    $(Self::$variant => $name,)+
                }
            }

            fn code(self) -> Option<i32> {
                match self {
                    $(Self::$variant => $crate::__variant_code!($($code)?),)+
                }
            }
        }

        impl ::std::fmt::Display for $kind {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str($crate::EnumKind::name(*self))
            }
        }

        impl ::std::str::FromStr for $kind {
            type Err = $crate::ResolveError;

            fn from_str(s: &str) -> ::std::result::Result<Self, Self::Err> {
                $crate::resolver().resolve_required::<Self>(s)
            }
        }

        impl<'de> $crate::__private::serde::Deserialize<'de> for $kind {
            fn deserialize<D>(deserializer: D) -> ::std::result::Result<Self, D::Error>
            where
                D: $crate::__private::serde::Deserializer<'de>,
            {
                $crate::de::deserialize(deserializer)
            }
        }
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __variant_code {
    () => {
        None
    };
    ($code:literal) => {
        Some($code)
    };
}

#[cfg(test)]
mod tests {
    use super::EnumKind;

    crate::enum_kind! {
        enum Shade {
            Light => "LIGHT",
            Dark => "DARK",
        }
    }

    crate::enum_kind! {
        enum Slot {
            First => "FIRST" = 1,
            Second => "SECOND" = 2,
        }
    }

    #[test]
    fn test_variant_table_keeps_declaration_order() {
        assert_eq!(Shade::KIND, "Shade");
        assert_eq!(Shade::VARIANTS, &[Shade::Light, Shade::Dark]);
        assert_eq!(Shade::Dark.to_string(), "DARK");
    }

    #[test]
    fn test_codes_are_optional() {
        assert!(!Shade::defines_codes());
        assert_eq!(Shade::Light.code(), None);

        assert!(Slot::defines_codes());
        assert_eq!(Slot::Second.code(), Some(2));
        assert_eq!(Slot::from_code(1), Some(Slot::First));
        assert_eq!(Slot::from_code(3), None);
    }

    #[test]
    fn test_from_name_is_exact() {
        assert_eq!(Shade::from_name("DARK"), Some(Shade::Dark));
        assert_eq!(Shade::from_name("dark"), None);
        assert_eq!(Shade::from_name(" DARK"), None);
    }
}
