// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! # Static Symbol Table
//!
//! This module provides a resolver backed by a fixed set of exported symbols.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use scalar_fn_catalog::StaticSymbolTable;
//!
//! let table = StaticSymbolTable::from_symbols(["impala::Operators::Add_IntVal_IntVal"]);
//! let resolved = table.resolve(&lookup)?;
//! ```

use std::collections::HashMap;

use crate::symbol::{SymbolLookup, SymbolNotFound};
use crate::r#trait::SymbolResolver;

/// Resolver over a fixed table of exported symbols
///
/// Maps each candidate symbol to the symbol the binary exports for it. The
/// compiled-in engine binary is modelled this way since its export table
/// never changes for the lifetime of the process.
#[derive(Debug, Clone, Default)]
pub struct StaticSymbolTable {
    symbols: HashMap<String, String>,
}

impl StaticSymbolTable {
    /// Create an empty symbol table
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a table where every symbol resolves to itself
    pub fn from_symbols<I, S>(symbols: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let symbols = symbols
            .into_iter()
            .map(|s| {
                let s = s.into();
                (s.clone(), s)
            })
            .collect();
        Self { symbols }
    }

    /// Export `candidate`, resolving to `resolved`
    pub fn insert(&mut self, candidate: impl Into<String>, resolved: impl Into<String>) {
        self.symbols.insert(candidate.into(), resolved.into());
    }

    /// Builder method: export a symbol that resolves to itself
    pub fn with_symbol(mut self, symbol: impl Into<String>) -> Self {
        let symbol = symbol.into();
        self.symbols.insert(symbol.clone(), symbol);
        self
    }

    /// Remove a symbol, returning whether it was present
    pub fn remove(&mut self, candidate: &str) -> bool {
        self.symbols.remove(candidate).is_some()
    }

    pub fn contains(&self, candidate: &str) -> bool {
        self.symbols.contains_key(candidate)
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }
}

impl SymbolResolver for StaticSymbolTable {
    fn resolve(&self, lookup: &SymbolLookup<'_>) -> Result<String, SymbolNotFound> {
        if lookup.symbol.is_empty() {
            return Err(SymbolNotFound::new(lookup, "empty symbol"));
        }

        self.symbols
            .get(lookup.symbol)
            .cloned()
            .ok_or_else(|| SymbolNotFound::new(lookup, "not exported by binary"))
    }
}
