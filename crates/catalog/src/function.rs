// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! # Catalog function base
//!
//! Every catalog function has a signature, a binary descriptor and a
//! user-visibility flag. [`CatalogFunction`] exposes those common parts so
//! scalar functions (and any other function kind) can be handled uniformly.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{CatalogError, CatalogResult};
use crate::metadata::{BinaryLocation, FunctionName, FunctionSignature, Type};

/// Kind of binary implementing a function
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum BinaryType {
    /// Compiled into the engine binary
    Builtin,
    /// Native shared library
    Native,
    /// Interpreted, e.g. LLVM IR
    Interpreted,
    /// Managed runtime, e.g. a JVM class
    Managed,
}

impl fmt::Display for BinaryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            BinaryType::Builtin => "BUILTIN",
            BinaryType::Native => "NATIVE",
            BinaryType::Interpreted => "INTERPRETED",
            BinaryType::Managed => "MANAGED",
        };
        f.write_str(name)
    }
}

/// Binary kind plus the location of the binary, if external
///
/// A BUILTIN descriptor never has a location.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BinaryDescriptor {
    binary_type: BinaryType,
    location: Option<BinaryLocation>,
}

impl BinaryDescriptor {
    /// The engine's own binary
    pub fn builtin() -> Self {
        Self {
            binary_type: BinaryType::Builtin,
            location: None,
        }
    }

    /// Create a descriptor, checking that builtins carry no location
    pub fn new(binary_type: BinaryType, location: Option<BinaryLocation>) -> CatalogResult<Self> {
        if binary_type == BinaryType::Builtin {
            if let Some(location) = location {
                return Err(CatalogError::InvalidBinaryDescriptor(format!(
                    "builtin functions cannot have a location ({})",
                    location
                )));
            }
        }

        Ok(Self {
            binary_type,
            location,
        })
    }

    /// External binary at `location`
    pub fn external(binary_type: BinaryType, location: BinaryLocation) -> CatalogResult<Self> {
        Self::new(binary_type, Some(location))
    }

    pub fn binary_type(&self) -> BinaryType {
        self.binary_type
    }

    pub fn location(&self) -> Option<&BinaryLocation> {
        self.location.as_ref()
    }
}

/// Common view over catalog functions
pub trait CatalogFunction {
    fn signature(&self) -> &FunctionSignature;

    fn binary(&self) -> &BinaryDescriptor;

    /// Whether the function can be called by name from SQL
    fn is_user_visible(&self) -> bool;

    fn name(&self) -> &FunctionName {
        self.signature().name()
    }

    fn arg_types(&self) -> &[Type] {
        self.signature().arg_types()
    }

    fn return_type(&self) -> Type {
        self.signature().return_type()
    }

    fn has_var_args(&self) -> bool {
        self.signature().has_var_args()
    }

    fn binary_type(&self) -> BinaryType {
        self.binary().binary_type()
    }

    fn location(&self) -> Option<&BinaryLocation> {
        self.binary().location()
    }

    /// Signature rendered for display and for descriptors
    fn signature_string(&self) -> String {
        self.signature().to_string()
    }
}
