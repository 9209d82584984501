// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! # Error types for Catalog operations
//!
//! This module defines the error types used throughout the catalog layer.
//!
//! `SymbolNotFound` and `UnsupportedArgumentType` are internal-consistency
//! faults: builtin tables and the engine binary disagree. They are returned
//! like any other error and are never recovered inside this crate.

use serde::Serialize;
use thiserror::Error;

use crate::config::ConfigError;
use crate::metadata::Type;
use crate::symbol::SymbolNotFound;

/// Result type alias for Catalog operations
pub type CatalogResult<T> = Result<T, CatalogError>;

/// Errors that can occur during Catalog operations
#[derive(Debug, Error, Clone, PartialEq, Eq, Serialize)]
pub enum CatalogError {
    /// A builtin's evaluate symbol is not exported by the engine binary
    #[error("Builtin symbol not found for {signature}: {source}")]
    SymbolNotFound {
        signature: String,
        #[source]
        source: SymbolNotFound,
    },

    /// The operator mangling table has no entry for an argument type
    #[error("Argument type not supported: {0}")]
    UnsupportedArgumentType(Type),

    /// A required builder field was never set
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    /// Function name cannot be used to build a symbol or signature
    #[error("Invalid function name: '{0}'")]
    InvalidFunctionName(String),

    /// Binary kind and location disagree
    #[error("Invalid binary descriptor: {0}")]
    InvalidBinaryDescriptor(String),

    /// Wire descriptor cannot be turned into a scalar function
    #[error("Invalid function descriptor: {0}")]
    InvalidDescriptor(String),

    /// Failed to serialize or deserialize descriptor data
    #[error("Failed to serialize function descriptor: {0}")]
    SerializationError(String),

    /// A function with an identical signature is already published
    #[error("Function already exists: {0}")]
    DuplicateFunction(String),

    /// No published function matches the requested signature
    #[error("Function not found: {0}")]
    FunctionNotFound(String),

    /// Invalid catalog configuration
    #[error(transparent)]
    Configuration(#[from] ConfigError),

    /// Descriptor propagation failed downstream
    #[error("Failed to propagate descriptors: {0}")]
    PropagationFailed(String),
}

impl From<serde_json::Error> for CatalogError {
    fn from(err: serde_json::Error) -> Self {
        CatalogError::SerializationError(err.to_string())
    }
}
