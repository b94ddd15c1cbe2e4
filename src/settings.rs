//! Configuration loader for the reloaded command-line tool.
//!
//! `defaults/reloaded.default.toml` is embedded into the binary so that docs and runtime
//! behavior stay in sync. User files and command-line flags are layered on top of those
//! defaults via [`Loader`] before deserializing into [`Settings`].
//!
//! The directive vocabulary and the text rules are fixed; only the surroundings (output
//! shape, logging) are configurable.

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use serde::Deserialize;
use std::path::Path;

const DEFAULT_TOML: &str = include_str!("../defaults/reloaded.default.toml");

/// Top-level configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub output: OutputSettings,
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OutputSettings {
    pub format: OutputFormat,
    pub trailing_newline: bool,
}

/// What the tool writes to the output file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OutputFormat {
    /// The transformed text
    Text,
    /// The token stream, pretty-printed as JSON
    TokensJson,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    pub level: String,
}

/// Layers, lowest to highest precedence: embedded defaults, an optional user file, then
/// the values given on the command line.
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    pub fn new() -> Self {
        let builder = Config::builder().add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml));
        Self { builder }
    }

    /// Layer a user TOML file. The file must exist.
    pub fn with_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(true);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Override `output.format` with a kebab-case format name (`text`, `tokens-json`).
    /// Unknown names are rejected by [`Loader::build`].
    pub fn output_format(self, name: &str) -> Result<Self, ConfigError> {
        self.override_key("output.format", name)
    }

    pub fn trailing_newline(self, enabled: bool) -> Result<Self, ConfigError> {
        self.override_key("output.trailing_newline", enabled)
    }

    /// Raise `logging.level` to `debug`.
    pub fn verbose(self) -> Result<Self, ConfigError> {
        self.override_key("logging.level", "debug")
    }

    fn override_key<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    pub fn build(self) -> Result<Settings, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn embedded_defaults_write_plain_text() {
        let settings = Loader::new().build().expect("defaults to deserialize");
        assert_eq!(settings.output.format, OutputFormat::Text);
        assert!(!settings.output.trailing_newline);
        assert_eq!(settings.logging.level, "warn");
    }

    #[test]
    fn command_line_values_override_defaults() {
        let settings = Loader::new()
            .output_format("tokens-json")
            .and_then(|loader| loader.trailing_newline(true))
            .and_then(Loader::verbose)
            .expect("overrides to apply")
            .build()
            .expect("config to build");
        assert_eq!(settings.output.format, OutputFormat::TokensJson);
        assert!(settings.output.trailing_newline);
        assert_eq!(settings.logging.level, "debug");
    }

    #[test]
    fn user_file_keeps_unset_defaults() {
        let mut file = tempfile::Builder::new()
            .suffix(".toml")
            .tempfile()
            .expect("temp file");
        writeln!(file, "[output]\ntrailing_newline = true").expect("write config");

        let settings = Loader::new()
            .with_file(file.path())
            .build()
            .expect("config to build");
        assert!(settings.output.trailing_newline);
        assert_eq!(settings.output.format, OutputFormat::Text);
        assert_eq!(settings.logging.level, "warn");
    }

    #[test]
    fn command_line_beats_user_file() {
        let mut file = tempfile::Builder::new()
            .suffix(".toml")
            .tempfile()
            .expect("temp file");
        writeln!(file, "[output]\nformat = \"tokens-json\"").expect("write config");

        let settings = Loader::new()
            .with_file(file.path())
            .output_format("text")
            .expect("override to apply")
            .build()
            .expect("config to build");
        assert_eq!(settings.output.format, OutputFormat::Text);
    }

    #[test]
    fn absent_user_file_fails_to_build() {
        let result = Loader::new().with_file("no/such/reloaded.toml").build();
        assert!(result.is_err());
    }

    #[test]
    fn unknown_output_format_fails_to_build() {
        let result = Loader::new()
            .output_format("yaml")
            .expect("override to apply")
            .build();
        assert!(result.is_err());
    }
}
