use color_eyre::eyre::Result;
use serde::Deserialize;
use std::path::Path;
use std::sync::LazyLock;
use tracing::warn;

pub const SETTINGS_PATH: &str = "config/binding.yaml";
pub const ENV_PREFIX: &str = "APP";

/// What an `InvalidFingerPosition` message lists as valid options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OptionListing {
    /// Canonical names, e.g. `RIGHT_THUMB, RIGHT_INDEX`.
    #[default]
    Names,
    /// Numeric codes, e.g. `1, 2`. Names are used for variants without a code.
    Codes,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(default)]
pub struct BindingSettings {
    /// Treat whitespace-only input as "no value" instead of matching it.
    pub blank_is_empty: bool,
    pub option_listing: OptionListing,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawSettings {
    binding: BindingSettings,
}

/// Load the binding settings from `.env`, the optional YAML file and `APP__*`
/// environment variables.
pub fn load_binding_settings() -> Result<BindingSettings> {
    dotenv::from_path(".env").ok();
    load_binding_settings_from(Path::new(SETTINGS_PATH), ENV_PREFIX)
}

pub fn load_binding_settings_from(path: &Path, env_prefix: &str) -> Result<BindingSettings> {
    let builder = config::Config::builder()
        .add_source(config::File::from(path).required(false))
        .add_source(
            config::Environment::with_prefix(env_prefix)
                .separator("__")
                .try_parsing(true),
        );

    let raw_settings = builder.build()?.try_deserialize::<RawSettings>()?;
    Ok(raw_settings.binding)
}

/// Immutable global settings, initialized on first access.
pub static SETTINGS: LazyLock<BindingSettings> = LazyLock::new(|| {
    load_binding_settings().unwrap_or_else(|err| {
        warn!("Cannot load binding settings, falling back to defaults: {}", err);
        BindingSettings::default()
    })
});

#[must_use]
pub fn settings() -> &'static BindingSettings {
    &SETTINGS
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::fs;

    #[test]
    fn test_missing_file_gives_defaults() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let settings =
            load_binding_settings_from(&dir.path().join("binding.yaml"), "BINDING_TEST_NONE")?;

        assert_eq!(settings, BindingSettings::default());
        assert!(!settings.blank_is_empty);
        assert_eq!(settings.option_listing, OptionListing::Names);
        Ok(())
    }

    #[test]
    fn test_yaml_file() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("binding.yaml");
        fs::write(
            &path,
            "binding:\n  blank_is_empty: true\n  option_listing: codes\n",
        )?;

        let settings = load_binding_settings_from(&path, "BINDING_TEST_FILE")?;

        assert!(settings.blank_is_empty);
        assert_eq!(settings.option_listing, OptionListing::Codes);
        Ok(())
    }

    #[test]
    fn test_partial_yaml_keeps_other_defaults() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("binding.yaml");
        fs::write(&path, "binding:\n  option_listing: codes\n")?;

        let settings = load_binding_settings_from(&path, "BINDING_TEST_PARTIAL")?;

        assert!(!settings.blank_is_empty);
        assert_eq!(settings.option_listing, OptionListing::Codes);
        Ok(())
    }

    #[test]
    #[serial]
    fn test_env_overrides_file() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("binding.yaml");
        fs::write(&path, "binding:\n  blank_is_empty: false\n")?;

        // SAFETY: serialized with the other env-mutating tests.
        unsafe { std::env::set_var("BINDING_TEST_ENV__BINDING__BLANK_IS_EMPTY", "true") };
        let settings = load_binding_settings_from(&path, "BINDING_TEST_ENV");
        unsafe { std::env::remove_var("BINDING_TEST_ENV__BINDING__BLANK_IS_EMPTY") };

        assert!(settings?.blank_is_empty);
        Ok(())
    }

    #[test]
    #[serial]
    fn test_invalid_listing_is_an_error() {
        // SAFETY: serialized with the other env-mutating tests.
        unsafe { std::env::set_var("BINDING_TEST_BAD__BINDING__OPTION_LISTING", "labels") };
        let dir = tempfile::tempdir().unwrap();
        let settings = load_binding_settings_from(&dir.path().join("none.yaml"), "BINDING_TEST_BAD");
        unsafe { std::env::remove_var("BINDING_TEST_BAD__BINDING__OPTION_LISTING") };

        assert!(settings.is_err());
    }
}
