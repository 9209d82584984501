// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! # Catalog Configuration
//!
//! Names the catalog reserves for builtins.
//!
//! ## Configuration Structure
//!
//! - `builtins_db`: database that owns every builtin function
//! - `engine_namespace`: native namespace prefixed to mangled operator symbols
//!
//! ## Example
//!
//! ```rust,ignore
//! use scalar_fn_catalog::CatalogConfig;
//!
//! let settings = serde_json::json!({
//!     "functionCatalog": { "builtinsDb": "_impala_builtins", "engineNamespace": "impala" }
//! });
//! let config = CatalogConfig::from_settings(&settings)?;
//! ```

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Default database owning builtin functions
pub const DEFAULT_BUILTINS_DB: &str = "_impala_builtins";

/// Default native namespace of the execution engine
pub const DEFAULT_ENGINE_NAMESPACE: &str = "impala";

/// Catalog configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CatalogConfig {
    /// Reserved database for builtins
    pub builtins_db: String,

    /// Native namespace for operator symbols, e.g. `impala` in
    /// `impala::Operators::Add_IntVal_IntVal`
    pub engine_namespace: String,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            builtins_db: DEFAULT_BUILTINS_DB.to_string(),
            engine_namespace: DEFAULT_ENGINE_NAMESPACE.to_string(),
        }
    }
}

impl CatalogConfig {
    pub fn new(builtins_db: impl Into<String>, engine_namespace: impl Into<String>) -> Self {
        Self {
            builtins_db: builtins_db.into(),
            engine_namespace: engine_namespace.into(),
        }
    }

    /// Validate the configuration
    ///
    /// Checks that:
    /// - The builtins database is a non-empty, unqualified name
    /// - The engine namespace is a non-empty identifier
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.builtins_db.is_empty() {
            return Err(ConfigError::MissingBuiltinsDb);
        }

        if self.builtins_db.contains('.') {
            return Err(ConfigError::InvalidBuiltinsDb {
                name: self.builtins_db.clone(),
            });
        }

        let is_identifier = self
            .engine_namespace
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_');
        if self.engine_namespace.is_empty() || !is_identifier {
            return Err(ConfigError::InvalidEngineNamespace {
                namespace: self.engine_namespace.clone(),
            });
        }

        Ok(())
    }

    /// Parse catalog config from a settings payload.
    ///
    /// Expected shape:
    /// {
    ///   "functionCatalog": {
    ///     "builtinsDb": "...",
    ///     "engineNamespace": "..."
    ///   }
    /// }
    ///
    /// A payload without `functionCatalog` yields the defaults. Missing keys
    /// inside it fall back to their defaults individually.
    pub fn from_settings(settings: &Value) -> Result<Self, ConfigError> {
        let config = match settings.get("functionCatalog") {
            Some(section) => serde_json::from_value::<CatalogConfig>(section.clone())
                .map_err(|e| ConfigError::InvalidSettings {
                    reason: e.to_string(),
                })?,
            None => Self::default(),
        };

        config.validate()?;
        Ok(config)
    }
}

/// Configuration errors
#[derive(Debug, Clone, PartialEq, Eq, Serialize, thiserror::Error)]
pub enum ConfigError {
    /// Builtins database name is empty
    #[error("Builtins database name is required")]
    MissingBuiltinsDb,

    /// Builtins database name is qualified or otherwise unusable
    #[error("Invalid builtins database name: {name}")]
    InvalidBuiltinsDb { name: String },

    /// Engine namespace is not an identifier
    #[error("Invalid engine namespace: '{namespace}'")]
    InvalidEngineNamespace { namespace: String },

    /// Settings payload has the wrong shape
    #[error("Invalid catalog settings: {reason}")]
    InvalidSettings { reason: String },
}
