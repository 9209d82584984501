// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! # Scalar Function Catalog
//!
//! This crate provides the catalog's metadata model for scalar functions.
//! It covers:
//!
//! - **Builtins**: functions compiled into the engine binary, whose evaluate
//!   symbol is resolved while the entity is built
//! - **UDFs**: functions in an external binary, built from symbols the
//!   registration path already validated
//! - **Operators**: hidden builtins whose symbol is mangled from the operator
//!   name and argument types
//!
//! ## Architecture
//!
//! The catalog layer is responsible for:
//! - Mapping primitive types to native symbol suffixes
//! - Resolving builtin symbols through a [`SymbolResolver`]
//! - Holding published functions in a [`FunctionCatalog`]
//! - Exporting functions as [`FunctionDescriptor`]s for propagation
//!
//! ## Usage
//!
//! ```rust,ignore
//! use scalar_fn_catalog::{BuiltinFactory, CatalogConfig, FunctionCatalog, Type};
//!
//! let config = CatalogConfig::default();
//! let factory = BuiltinFactory::new(&config, &engine_symbols);
//! let catalog = FunctionCatalog::new();
//!
//! let add = factory.create_builtin_operator("add", vec![Type::INT, Type::INT], Type::BIGINT)?;
//! catalog.add_function(add)?;
//!
//! let search = factory.search_descriptor("add", Some(vec![Type::INT, Type::INT]), false);
//! let found = catalog.get_function(&search);
//! ```

pub mod builtin;
pub mod config;
pub mod descriptor;
pub mod error;
pub mod function;
pub mod mangle;
pub mod metadata;
pub mod scalar;
pub mod search;
pub mod r#static;
pub mod store;
pub mod symbol;
pub mod r#trait;

// Re-exports
pub use builtin::{BuiltinFactory, BuiltinScalarDef};
pub use config::{CatalogConfig, ConfigError};
pub use descriptor::{FunctionDescriptor, ScalarFunctionDescriptor};
pub use error::{CatalogError, CatalogResult};
pub use function::{BinaryDescriptor, BinaryType, CatalogFunction};
pub use mangle::{OperatorClass, OperatorMangler, mangle_operator, symbol_suffix};
pub use metadata::{
    BinaryLocation, FunctionArgs, FunctionName, FunctionSignature, PrimitiveType, Type,
    TypeParseError,
};
pub use r#static::StaticSymbolTable;
pub use r#trait::{DescriptorSink, SymbolResolver};
pub use scalar::{ScalarFunction, ScalarFunctionBuilder};
pub use search::SearchDescriptor;
pub use store::FunctionCatalog;
pub use symbol::{SymbolLookup, SymbolNotFound, SymbolType};
