// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! # Catalog collaborator traits
//!
//! The catalog depends on two outside capabilities:
//! - [`SymbolResolver`]: checks a candidate symbol against the engine binary
//! - [`DescriptorSink`]: receives exported descriptors for propagation to
//!   other catalog nodes

use crate::descriptor::FunctionDescriptor;
use crate::error::CatalogResult;
use crate::symbol::{SymbolLookup, SymbolNotFound};

/// Resolves candidate symbols against a binary
///
/// Resolution is synchronous and has no retry or timeout: it models a lookup
/// in a binary that is already loaded. For a matching engine binary it must
/// succeed for every builtin the engine ships.
///
/// # Examples
///
/// ```rust,ignore
/// use scalar_fn_catalog::{SymbolLookup, SymbolResolver, Type};
///
/// let args = [Type::INT, Type::INT];
/// let resolved = resolver.resolve(&SymbolLookup::evaluate(
///     "impala::Operators::Add_IntVal_IntVal",
///     &args,
///     false,
/// ))?;
/// ```
pub trait SymbolResolver: Send + Sync {
    /// Resolve `lookup.symbol` to the symbol the engine will invoke
    ///
    /// # Errors
    ///
    /// Returns `SymbolNotFound` if the binary exports no matching symbol.
    fn resolve(&self, lookup: &SymbolLookup<'_>) -> Result<String, SymbolNotFound>;
}

/// Receiver of exported function descriptors
///
/// Implementations hand descriptors to whatever transport carries catalog
/// updates between nodes.
///
/// # Examples
///
/// ```rust,ignore
/// let published = catalog.propagate(&sink).await?;
/// ```
#[async_trait::async_trait]
pub trait DescriptorSink: Send + Sync {
    /// Publish a batch of descriptors
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::PropagationFailed` if the batch could not be delivered.
    async fn publish(&self, descriptors: Vec<FunctionDescriptor>) -> CatalogResult<()>;
}
