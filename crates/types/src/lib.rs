// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! # Scalar Function Catalog - Type Vocabulary
//!
//! This crate provides the vocabulary shared by the function catalog:
//! - Primitive type enumeration and scalar types
//! - Function names, argument lists and signatures
//! - Binary locations for user-defined functions
//!
//! These types are consumed by the catalog; they carry no catalog logic themselves.

pub mod function;
pub mod primitive;

// Re-export commonly used types
pub use function::{BinaryLocation, FunctionArgs, FunctionName, FunctionSignature};
pub use primitive::{PrimitiveType, Type, TypeParseError};
