//! Game configuration
//!
//! Optional TOML file selecting the variant, limits, glyph style and
//! per-attribute tolerance overrides:
//!
//! ```toml
//! variant = "classic"
//! max_guesses = 6
//! max_hints = 3
//! glyphs = "slack"
//!
//! [tolerances]
//! birth_year = 4
//! ```

use crate::core::{Schema, Variant};
use crate::error::ConfigError;
use crate::game::Limits;
use crate::share::GlyphStyle;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use tracing::debug;

/// Raw configuration as written in the file
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct GameConfig {
    pub variant: String,
    pub max_guesses: usize,
    pub max_hints: usize,
    pub glyphs: String,
    pub tolerances: BTreeMap<String, u32>,
}

impl Default for GameConfig {
    fn default() -> Self {
        let limits = Limits::default();
        Self {
            variant: Variant::default().name().to_string(),
            max_guesses: limits.max_guesses,
            max_hints: limits.max_hints,
            glyphs: GlyphStyle::default().name().to_string(),
            tolerances: BTreeMap::new(),
        }
    }
}

/// Validated settings ready for use
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub schema: Schema,
    pub limits: Limits,
    pub glyphs: GlyphStyle,
}

impl GameConfig {
    /// Read a TOML config file
    ///
    /// # Errors
    /// Returns `ConfigError` if the file cannot be read or parsed.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path.as_ref())?;
        let config = Self::parse(&content)?;
        debug!(path = %path.as_ref().display(), ?config, "loaded config");
        Ok(config)
    }

    /// Parse TOML config text
    ///
    /// # Errors
    /// Returns `ConfigError::Parse` for malformed TOML or unknown fields.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Validate and build the schema, limits and glyph style
    ///
    /// # Errors
    /// Returns `ConfigError` for an unknown variant or glyph style, zero
    /// guess limit, or a tolerance on a non-numeric attribute.
    pub fn settings(&self) -> Result<Settings, ConfigError> {
        let variant = Variant::from_name(&self.variant)
            .ok_or_else(|| ConfigError::UnknownVariant(self.variant.clone()))?;
        let glyphs = self
            .glyphs
            .parse::<GlyphStyle>()
            .map_err(|_| ConfigError::UnknownGlyphs(self.glyphs.clone()))?;
        if self.max_guesses == 0 {
            return Err(ConfigError::ZeroLimit("max_guesses"));
        }

        let mut schema = Schema::for_variant(variant);
        for (key, &tolerance) in &self.tolerances {
            if !schema.set_tolerance(key, tolerance) {
                return Err(ConfigError::NotNumeric(key.clone()));
            }
        }

        Ok(Settings {
            schema,
            limits: Limits {
                max_guesses: self.max_guesses,
                max_hints: self.max_hints,
            },
            glyphs,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::AttributeKind;
    use std::io::Write;

    #[test]
    fn empty_config_uses_defaults() {
        let config = GameConfig::parse("").unwrap();
        assert_eq!(config, GameConfig::default());

        let settings = config.settings().unwrap();
        assert_eq!(settings.schema, Schema::classic());
        assert_eq!(settings.limits, Limits::default());
        assert_eq!(settings.glyphs, GlyphStyle::Slack);
    }

    #[test]
    fn overrides_apply() {
        let config = GameConfig::parse(
            r#"
            variant = "directory"
            max_guesses = 8
            max_hints = 0
            glyphs = "unicode"

            [tolerances]
            birth_year = 10
            "#,
        )
        .unwrap();
        let settings = config.settings().unwrap();

        assert_eq!(settings.schema.variant(), Variant::Directory);
        assert_eq!(settings.limits.max_guesses, 8);
        assert_eq!(settings.limits.max_hints, 0);
        assert_eq!(settings.glyphs, GlyphStyle::Unicode);
        assert_eq!(
            settings.schema.attribute("birth_year").map(|s| s.kind),
            Some(AttributeKind::Numeric { tolerance: 10 })
        );
    }

    #[test]
    fn rejects_bad_values() {
        let bad_variant = GameConfig::parse("variant = \"deluxe\"").unwrap();
        assert!(matches!(
            bad_variant.settings(),
            Err(ConfigError::UnknownVariant(v)) if v == "deluxe"
        ));

        let bad_glyphs = GameConfig::parse("glyphs = \"ascii\"").unwrap();
        assert!(matches!(
            bad_glyphs.settings(),
            Err(ConfigError::UnknownGlyphs(_))
        ));

        let zero = GameConfig::parse("max_guesses = 0").unwrap();
        assert!(matches!(zero.settings(), Err(ConfigError::ZeroLimit(_))));

        let categorical = GameConfig::parse("[tolerances]\ntitle = 1").unwrap();
        assert!(matches!(
            categorical.settings(),
            Err(ConfigError::NotNumeric(k)) if k == "title"
        ));
    }

    #[test]
    fn rejects_unknown_fields() {
        assert!(matches!(
            GameConfig::parse("max_tries = 3"),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "max_hints = 5").unwrap();

        let config = GameConfig::load(file.path()).unwrap();
        assert_eq!(config.max_hints, 5);
        assert_eq!(config.max_guesses, 6);
    }

    #[test]
    fn load_missing_file() {
        assert!(matches!(
            GameConfig::load("/definitely/not/here.toml"),
            Err(ConfigError::Io(_))
        ));
    }
}
