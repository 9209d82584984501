// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! # Builtin Scalar Function Registry
//!
//! This crate registers the engine's builtin scalar functions at startup.
//!
//! ## Features
//!
//! - Operator tables whose symbols follow the standard mangling
//! - Named builtin functions with optional prepare/close entry points
//! - The export table of an engine binary built from those tables
//! - All-or-nothing loading with a single abort site
//!
//! ## Usage
//!
//! ```rust,ignore
//! use scalar_fn_catalog_builtins::BuiltinRegistry;
//!
//! let registry = BuiltinRegistry::bootstrap_or_abort(&config);
//! let upper = registry.get_function("upper", vec![Type::STRING]);
//! ```

pub mod builtin;
pub mod registry;
pub mod symbols;

pub use registry::BuiltinRegistry;
pub use symbols::engine_symbol_table;
