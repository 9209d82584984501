// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! Signature-only lookup keys for the function catalog.

use crate::function::{BinaryType, CatalogFunction};
use crate::metadata::{FunctionArgs, FunctionName, FunctionSignature, Type};

/// A lookup key carrying only the fields needed to match a signature
///
/// Has the `INVALID` return type and no symbols. It is its own type, so it
/// can never be published into a catalog or executed.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SearchDescriptor {
    signature: FunctionSignature,
}

impl SearchDescriptor {
    pub fn new(name: FunctionName, args: FunctionArgs) -> Self {
        Self {
            signature: FunctionSignature::new(name, args, Type::INVALID),
        }
    }

    pub fn signature(&self) -> &FunctionSignature {
        &self.signature
    }

    pub fn name(&self) -> &FunctionName {
        self.signature.name()
    }

    /// Search descriptors always describe builtins
    pub fn binary_type(&self) -> BinaryType {
        BinaryType::Builtin
    }

    /// Whether `function` has this signature (name, arguments, variadic flag)
    pub fn matches<F: CatalogFunction + ?Sized>(&self, function: &F) -> bool {
        self.signature.matches(function.signature())
    }
}
