use crate::{BindingSettings, EnumKind, OptionListing, ResolveError, settings};
use std::sync::LazyLock;
use tracing::{debug, trace};

/// Binds raw parameter strings onto enum kinds.
///
/// Stateless apart from its settings; one instance can be shared freely
/// between threads.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnumResolver {
    settings: BindingSettings,
}

impl EnumResolver {
    #[must_use]
    pub const fn new(settings: BindingSettings) -> Self {
        Self { settings }
    }

    #[must_use]
    pub const fn settings(&self) -> &BindingSettings {
        &self.settings
    }

    /// Resolve `raw` to a variant of `T`.
    ///
    /// Returns `Ok(None)` for the empty string, which clears a field. Only the
    /// exact empty string counts unless `blank_is_empty` is set. Otherwise the
    /// trimmed input is matched against the canonical names ignoring case.
    /// Coded kinds then try the input as a numeric code, all others an
    /// upper-cased exact name.
    pub fn resolve<T: EnumKind>(&self, raw: &str) -> Result<Option<T>, ResolveError> {
        if raw.is_empty() {
            trace!(kind = T::KIND, "Empty input, no value");
            return Ok(None);
        }

        let trimmed = trim_control(raw);
        if trimmed.is_empty() && self.settings.blank_is_empty {
            trace!(kind = T::KIND, "Blank input, no value");
            return Ok(None);
        }

        if let Some(variant) = T::VARIANTS
            .iter()
            .copied()
            .find(|variant| eq_ignore_case(variant.name(), trimmed))
        {
            trace!(kind = T::KIND, variant = variant.name(), "Matched by name");
            return Ok(Some(variant));
        }

        let fallback = if T::defines_codes() {
            trimmed.parse::<i32>().ok().and_then(T::from_code)
        } else {
            T::from_name(&trimmed.to_uppercase())
        };

        match fallback {
            Some(variant) => {
                debug!(
                    kind = T::KIND,
                    variant = variant.name(),
                    input = raw,
                    "Matched through fallback"
                );
                Ok(Some(variant))
            }
            None => {
                let err = self.unmatched::<T>(raw);
                debug!(kind = T::KIND, input = raw, "Rejected: {}", err);
                Err(err)
            }
        }
    }

    /// Like [`resolve`](Self::resolve), but "no value" is an error too.
    pub fn resolve_required<T: EnumKind>(&self, raw: &str) -> Result<T, ResolveError> {
        self.resolve(raw)?
            .ok_or_else(|| self.unmatched::<T>(raw))
    }

    /// The error reported when `raw` matches no variant of `T`.
    #[must_use]
    pub fn unmatched<T: EnumKind>(&self, raw: &str) -> ResolveError {
        if T::defines_codes() {
            ResolveError::InvalidFingerPosition {
                valid: self.valid_options::<T>(),
            }
        } else {
            ResolveError::InvalidEnumValue {
                kind: T::KIND,
                value: raw.to_owned(),
            }
        }
    }

    /// Valid options of `T` joined by `", "` in declaration order.
    #[must_use]
    pub fn valid_options<T: EnumKind>(&self) -> String {
        T::VARIANTS
            .iter()
            .map(|variant| match (self.settings.option_listing, variant.code()) {
                (OptionListing::Codes, Some(code)) => code.to_string(),
                _ => variant.name().to_owned(),
            })
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Strips leading and trailing characters up to and including the space,
/// which covers ASCII control characters but not Unicode whitespace.
fn trim_control(raw: &str) -> &str {
    raw.trim_matches(|c: char| c <= ' ')
}

/// Character-wise comparison ignoring case, with simple Unicode case mapping
/// on both sides: first upper-cased, then lower-cased.
fn eq_ignore_case(name: &str, input: &str) -> bool {
    name.chars().count() == input.chars().count()
        && name.chars().zip(input.chars()).all(|(a, b)| {
            if a == b {
                return true;
            }
            let (upper_a, upper_b) = (simple_upper(a), simple_upper(b));
            upper_a == upper_b || simple_lower(upper_a) == simple_lower(upper_b)
        })
}

fn simple_upper(c: char) -> char {
    single(c.to_uppercase()).unwrap_or(c)
}

fn simple_lower(c: char) -> char {
    single(c.to_lowercase()).unwrap_or(c)
}

// Multi-char mappings (e.g. 'ß' -> "SS") keep the original char.
fn single(mut mapped: impl Iterator<Item = char>) -> Option<char> {
    match (mapped.next(), mapped.next()) {
        (Some(c), None) => Some(c),
        _ => None,
    }
}

/// Resolve with default settings.
pub fn resolve<T: EnumKind>(raw: &str) -> Result<Option<T>, ResolveError> {
    EnumResolver::default().resolve(raw)
}

static RESOLVER: LazyLock<EnumResolver> = LazyLock::new(|| EnumResolver::new(*settings()));

/// Shared resolver built from the global settings. Used by the generated
/// `FromStr` and `Deserialize` impls.
#[must_use]
pub fn resolver() -> &'static EnumResolver {
    &RESOLVER
}
