// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! # Native symbol lookup types
//!
//! A symbol is the entry point a binary exports for one of a function's
//! evaluate, prepare or close behaviors. [`SymbolLookup`] is the request
//! handed to a [`SymbolResolver`](crate::SymbolResolver); [`SymbolNotFound`]
//! is its only failure.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

use crate::metadata::Type;

/// Which entry point of a function a symbol implements
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SymbolType {
    Evaluate,
    Prepare,
    Close,
}

impl fmt::Display for SymbolType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SymbolType::Evaluate => "evaluate",
            SymbolType::Prepare => "prepare",
            SymbolType::Close => "close",
        };
        f.write_str(name)
    }
}

/// A request to resolve a candidate symbol against a binary
#[derive(Debug, Clone, Copy)]
pub struct SymbolLookup<'a> {
    /// Candidate symbol as written in the builtin table or DDL
    pub symbol: &'a str,
    /// Entry point kind
    pub symbol_type: SymbolType,
    /// Expected native signature, when the caller knows it
    pub expected_signature: Option<&'a str>,
    pub has_var_args: bool,
    pub arg_types: &'a [Type],
}

impl<'a> SymbolLookup<'a> {
    /// Lookup of an evaluate entry point with no expected native signature
    pub fn evaluate(symbol: &'a str, arg_types: &'a [Type], has_var_args: bool) -> Self {
        Self {
            symbol,
            symbol_type: SymbolType::Evaluate,
            expected_signature: None,
            has_var_args,
            arg_types,
        }
    }
}

/// The binary does not export the requested symbol
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Error)]
#[error("{symbol_type} symbol '{symbol}' not found: {reason}")]
pub struct SymbolNotFound {
    pub symbol: String,
    pub symbol_type: SymbolType,
    pub reason: String,
}

impl SymbolNotFound {
    pub fn new(lookup: &SymbolLookup<'_>, reason: impl Into<String>) -> Self {
        Self {
            symbol: lookup.symbol.to_string(),
            symbol_type: lookup.symbol_type,
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_symbol_not_found_message() {
        let args = [Type::INT];
        let lookup = SymbolLookup::evaluate("impala::Foo", &args, false);
        let err = SymbolNotFound::new(&lookup, "not exported");
        assert_eq!(
            err.to_string(),
            "evaluate symbol 'impala::Foo' not found: not exported"
        );
    }
}
