//! Generator configuration.
//!
//! Settings come from an optional TOML file and are then overridden by
//! command-line flags. Every field has a default, so an empty file is valid.
//!
//! ```toml
//! client_module = "@prisma/client"
//! runtime_module = "@quramy/prisma-fabbrica"
//! output = "__generated__/fabbrica/index.ts"
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::codegen::HeaderModules;
use crate::errors::GeneratorError;

pub const DEFAULT_CLIENT_MODULE: &str = "@prisma/client";
pub const DEFAULT_RUNTIME_MODULE: &str = "@quramy/prisma-fabbrica";
pub const DEFAULT_OUTPUT: &str = "__generated__/fabbrica/index.ts";

/// Settings for one generation run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GeneratorConfig {
    /// Module the `Prisma` namespace is imported from.
    pub client_module: String,
    /// Runtime package the helpers are imported from.
    pub runtime_module: String,
    /// File the generated module is written to.
    pub output: PathBuf,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            client_module: DEFAULT_CLIENT_MODULE.to_string(),
            runtime_module: DEFAULT_RUNTIME_MODULE.to_string(),
            output: PathBuf::from(DEFAULT_OUTPUT),
        }
    }
}

impl GeneratorConfig {
    /// Parses TOML configuration text.
    ///
    /// ## Errors
    ///
    /// Returns `GeneratorError::ConfigError` for malformed TOML, unknown keys,
    /// or values rejected by [`validate`](Self::validate).
    pub fn from_toml(text: &str) -> Result<Self, GeneratorError> {
        let config: Self = toml::from_str(text)
            .map_err(|e| GeneratorError::ConfigError(format!("Malformed configuration: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Reads and parses a TOML configuration file.
    pub fn load(path: &Path) -> Result<Self, GeneratorError> {
        let text = fs::read_to_string(path).map_err(|e| GeneratorError::ReadError {
            path: path.display().to_string(),
            source: e,
        })?;
        Self::from_toml(&text)
    }

    pub fn with_client_module(mut self, module: impl Into<String>) -> Self {
        self.client_module = module.into();
        self
    }

    pub fn with_runtime_module(mut self, module: impl Into<String>) -> Self {
        self.runtime_module = module.into();
        self
    }

    pub fn with_output(mut self, output: impl Into<PathBuf>) -> Self {
        self.output = output.into();
        self
    }

    /// Checks that module specifiers can be emitted as string literals.
    ///
    /// ## Errors
    ///
    /// Returns `GeneratorError::ConfigError` if a specifier is empty or
    /// contains `"` or `\`.
    pub fn validate(&self) -> Result<(), GeneratorError> {
        for (key, value) in [
            ("client_module", &self.client_module),
            ("runtime_module", &self.runtime_module),
        ] {
            if value.trim().is_empty() {
                return Err(GeneratorError::ConfigError(format!("{} must not be empty", key)));
            }
            if value.contains(['"', '\\']) {
                return Err(GeneratorError::ConfigError(format!(
                    "{} '{}' must not contain quotes or backslashes",
                    key, value
                )));
            }
        }

        if self.output.as_os_str().is_empty() {
            return Err(GeneratorError::ConfigError("output must not be empty".to_string()));
        }

        Ok(())
    }

    pub fn header_modules(&self) -> HeaderModules<'_> {
        HeaderModules {
            client: &self.client_module,
            runtime: &self.runtime_module,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn defaults() {
        let config = GeneratorConfig::default();
        assert_eq!(config.client_module, "@prisma/client");
        assert_eq!(config.runtime_module, "@quramy/prisma-fabbrica");
        assert_eq!(config.output, PathBuf::from("__generated__/fabbrica/index.ts"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn empty_toml_gives_defaults() {
        assert_eq!(GeneratorConfig::from_toml("").unwrap(), GeneratorConfig::default());
    }

    #[test]
    fn partial_toml_keeps_other_defaults() {
        let config = GeneratorConfig::from_toml("client_module = \"./client\"").unwrap();
        assert_eq!(config.client_module, "./client");
        assert_eq!(config.runtime_module, DEFAULT_RUNTIME_MODULE);
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let err = GeneratorConfig::from_toml("client = \"x\"").unwrap_err();
        assert!(matches!(err, GeneratorError::ConfigError(_)));
    }

    #[test]
    fn quotes_in_module_are_rejected() {
        let config = GeneratorConfig::default().with_runtime_module("evil\"module");
        match config.validate().unwrap_err() {
            GeneratorError::ConfigError(msg) => assert!(msg.contains("runtime_module")),
            other => panic!("Expected ConfigError, got: {:?}", other),
        }
    }

    #[test]
    fn empty_module_is_rejected() {
        let config = GeneratorConfig::default().with_client_module("  ");
        assert!(config.validate().is_err());
    }

    #[test]
    fn load_reads_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "output = \"out/factories.ts\"").unwrap();

        let config = GeneratorConfig::load(file.path()).unwrap();
        assert_eq!(config.output, PathBuf::from("out/factories.ts"));
    }

    #[test]
    fn load_reports_missing_file() {
        let err = GeneratorConfig::load(Path::new("/nonexistent/fabbrica.toml")).unwrap_err();
        assert!(matches!(err, GeneratorError::ReadError { .. }));
    }
}
