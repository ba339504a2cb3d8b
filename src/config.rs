//! generator configuration
//!
//! build a [`CodegenConfig`] with defaults and optional overrides, or load one
//! from a toml file. every option only changes names and paths in the
//! generated text, never which code is generated.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// configuration for a generation run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CodegenConfig {
    /// module providing `Api`, `gql`, and `trimInput`
    pub runtime_module: String,

    /// module the generated operation and schema types are imported from
    pub types_path: String,

    /// appended to synthesized result type names
    pub operation_result_suffix: String,

    /// skip the kind suffix when the operation name already ends with it
    pub dedupe_operation_suffix: bool,

    /// never append the kind suffix to type names
    pub omit_operation_suffix: bool,

    /// scalar marking a field that returns nothing
    pub void_type_name: String,
}

impl Default for CodegenConfig {
    fn default() -> Self {
        Self {
            runtime_module: "graphqlex".to_string(),
            types_path: "./graphql-types".to_string(),
            operation_result_suffix: String::new(),
            dedupe_operation_suffix: false,
            omit_operation_suffix: false,
            void_type_name: "Void".to_string(),
        }
    }
}

impl CodegenConfig {
    /// create a configuration with default settings
    ///
    /// # example
    ///
    /// ```
    /// use graphqlex_codegen::CodegenConfig;
    ///
    /// let config = CodegenConfig::new().with_types_path("./types");
    /// assert_eq!(config.types_path, "./types");
    /// ```
    pub fn new() -> Self {
        Self::default()
    }

    /// read a toml configuration file; missing keys keep their defaults
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;
        Self::from_toml(&text)
            .map_err(|err| Error::Config(format!("{}: {err}", path.display())))
    }

    pub fn from_toml(text: &str) -> Result<Self> {
        let config: Self = toml::from_str(text).map_err(|err| Error::Config(err.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn with_runtime_module(mut self, module: impl Into<String>) -> Self {
        self.runtime_module = module.into();
        self
    }

    pub fn with_types_path(mut self, path: impl Into<String>) -> Self {
        self.types_path = path.into();
        self
    }

    pub fn with_operation_result_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.operation_result_suffix = suffix.into();
        self
    }

    /// default: disabled
    pub fn with_dedupe_operation_suffix(mut self, dedupe: bool) -> Self {
        self.dedupe_operation_suffix = dedupe;
        self
    }

    /// default: disabled
    pub fn with_omit_operation_suffix(mut self, omit: bool) -> Self {
        self.omit_operation_suffix = omit;
        self
    }

    /// default: `Void`
    pub fn with_void_type_name(mut self, name: impl Into<String>) -> Self {
        self.void_type_name = name.into();
        self
    }

    /// validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.runtime_module.trim().is_empty() {
            return Err(Error::Config("runtime module cannot be empty".to_string()));
        }

        if self.types_path.trim().is_empty() {
            return Err(Error::Config("types path cannot be empty".to_string()));
        }

        if self.types_path.contains('"') || self.runtime_module.contains('"') {
            return Err(Error::Config(
                "module paths cannot contain double quotes".to_string(),
            ));
        }

        Ok(())
    }
}
