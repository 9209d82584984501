// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! Mock symbol resolver and descriptor sink for testing
//!
//! Both mocks record every call so tests can assert on how the catalog used
//! its collaborators.

use std::collections::HashSet;
use std::sync::{Mutex, PoisonError};

use scalar_fn_catalog::{
    CatalogError, CatalogResult, DescriptorSink, FunctionDescriptor, SymbolLookup, SymbolNotFound,
    SymbolResolver, SymbolType, Type,
};

/// Owned copy of a [`SymbolLookup`] seen by [`MockResolver`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedLookup {
    pub symbol: String,
    pub symbol_type: SymbolType,
    pub arg_types: Vec<Type>,
    pub has_var_args: bool,
}

/// Resolver that accepts every symbol except the denied ones
///
/// Resolved symbols come back unchanged, or prefixed when
/// [`with_prefix`](MockResolver::with_prefix) is set.
#[derive(Debug, Default)]
pub struct MockResolver {
    denied: HashSet<String>,
    prefix: Option<String>,
    lookups: Mutex<Vec<RecordedLookup>>,
}

impl MockResolver {
    /// Create a resolver that accepts everything
    pub fn new() -> Self {
        Self::default()
    }

    /// Reject `symbol` with `SymbolNotFound`
    pub fn deny(mut self, symbol: impl Into<String>) -> Self {
        self.denied.insert(symbol.into());
        self
    }

    /// Return resolved symbols with `prefix` prepended
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = Some(prefix.into());
        self
    }

    /// Every lookup received so far, in order
    pub fn lookups(&self) -> Vec<RecordedLookup> {
        self.lookups
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Number of lookups of the given kind
    pub fn count(&self, symbol_type: SymbolType) -> usize {
        self.lookups()
            .iter()
            .filter(|l| l.symbol_type == symbol_type)
            .count()
    }

    pub fn reset(&self) {
        self.lookups
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }
}

impl SymbolResolver for MockResolver {
    fn resolve(&self, lookup: &SymbolLookup<'_>) -> Result<String, SymbolNotFound> {
        self.lookups
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(RecordedLookup {
                symbol: lookup.symbol.to_string(),
                symbol_type: lookup.symbol_type,
                arg_types: lookup.arg_types.to_vec(),
                has_var_args: lookup.has_var_args,
            });

        if self.denied.contains(lookup.symbol) {
            return Err(SymbolNotFound::new(lookup, "denied by mock resolver"));
        }
        Ok(match &self.prefix {
            Some(prefix) => format!("{prefix}{}", lookup.symbol),
            None => lookup.symbol.to_string(),
        })
    }
}

/// Sink that keeps every published batch
#[derive(Debug, Default)]
pub struct MockSink {
    fail_with: Option<String>,
    batches: Mutex<Vec<Vec<FunctionDescriptor>>>,
}

impl MockSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// A sink whose every publish fails with `reason`
    pub fn failing(reason: impl Into<String>) -> Self {
        Self {
            fail_with: Some(reason.into()),
            batches: Mutex::default(),
        }
    }

    pub fn batches(&self) -> Vec<Vec<FunctionDescriptor>> {
        self.batches
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// All published descriptors, flattened
    pub fn descriptors(&self) -> Vec<FunctionDescriptor> {
        self.batches().into_iter().flatten().collect()
    }
}

#[async_trait::async_trait]
impl DescriptorSink for MockSink {
    async fn publish(&self, descriptors: Vec<FunctionDescriptor>) -> CatalogResult<()> {
        if let Some(reason) = &self.fail_with {
            return Err(CatalogError::PropagationFailed(reason.clone()));
        }
        self.batches
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(descriptors);
        Ok(())
    }
}
