// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! # Type vocabulary used by the catalog
//!
//! This module re-exports the types from the `scalar-fn-catalog-types` crate.
//! They describe primitive types, function names and signatures.

// Re-export all vocabulary types from the types crate
pub use scalar_fn_catalog_types::{
    BinaryLocation, FunctionArgs, FunctionName, FunctionSignature, PrimitiveType, Type,
    TypeParseError,
};
