// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! # Function catalog
//!
//! Owns published scalar functions. Functions are immutable once added and
//! are shared with readers as `Arc<ScalarFunction>`; readers never wait on
//! each other. Adding and dropping functions takes a short write lock.

use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use tracing::debug;

use crate::descriptor::FunctionDescriptor;
use crate::error::{CatalogError, CatalogResult};
use crate::function::CatalogFunction;
use crate::metadata::FunctionName;
use crate::scalar::ScalarFunction;
use crate::search::SearchDescriptor;
use crate::r#trait::DescriptorSink;

type FunctionMap = HashMap<FunctionName, Vec<Arc<ScalarFunction>>>;

/// In-memory catalog of published scalar functions
#[derive(Debug, Default)]
pub struct FunctionCatalog {
    functions: RwLock<FunctionMap>,
}

impl FunctionCatalog {
    /// Create an empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    // Entities are immutable, so a poisoned map is still consistent.
    fn read(&self) -> RwLockReadGuard<'_, FunctionMap> {
        self.functions.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, FunctionMap> {
        self.functions.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Publish a function
    ///
    /// # Errors
    ///
    /// - `MissingField` if the function has an empty evaluate symbol
    /// - `DuplicateFunction` if a function with the same name, argument types
    ///   and variadic flag is already published
    pub fn add_function(&self, function: ScalarFunction) -> CatalogResult<Arc<ScalarFunction>> {
        // Peers importing the descriptor reject an empty symbol.
        if function.evaluate_symbol().is_empty() {
            return Err(CatalogError::MissingField("evaluate_symbol"));
        }

        let mut functions = self.write();
        let overloads = functions.entry(function.name().clone()).or_default();
        if overloads
            .iter()
            .any(|f| f.signature().matches(function.signature()))
        {
            return Err(CatalogError::DuplicateFunction(function.signature_string()));
        }

        debug!(signature = %function.signature(), "Published function");
        let function = Arc::new(function);
        overloads.push(Arc::clone(&function));
        Ok(function)
    }

    /// Find the published function matching `search`
    pub fn get_function(&self, search: &SearchDescriptor) -> Option<Arc<ScalarFunction>> {
        self.read()
            .get(search.name())?
            .iter()
            .find(|f| search.matches(f.as_ref()))
            .cloned()
    }

    pub fn contains(&self, search: &SearchDescriptor) -> bool {
        self.get_function(search).is_some()
    }

    /// Drop the function matching `search`
    ///
    /// # Errors
    ///
    /// `FunctionNotFound` if nothing matches.
    pub fn remove_function(&self, search: &SearchDescriptor) -> CatalogResult<Arc<ScalarFunction>> {
        let mut functions = self.write();
        let not_found = || CatalogError::FunctionNotFound(search.signature().to_string());

        let overloads = functions.get_mut(search.name()).ok_or_else(not_found)?;
        let index = overloads
            .iter()
            .position(|f| search.matches(f.as_ref()))
            .ok_or_else(not_found)?;
        let removed = overloads.remove(index);
        if overloads.is_empty() {
            functions.remove(search.name());
        }

        debug!(signature = %removed.signature(), "Dropped function");
        Ok(removed)
    }

    /// All overloads of a function name
    pub fn overloads(&self, name: &FunctionName) -> Vec<Arc<ScalarFunction>> {
        self.read().get(name).cloned().unwrap_or_default()
    }

    /// All functions owned by database `db`, ordered by signature
    pub fn functions_in_db(&self, db: &str) -> Vec<Arc<ScalarFunction>> {
        let mut functions: Vec<_> = self
            .read()
            .iter()
            .filter(|(name, _)| name.db() == Some(db))
            .flat_map(|(_, overloads)| overloads.iter().cloned())
            .collect();
        functions.sort_by_cached_key(|f| f.signature_string());
        functions
    }

    /// All published functions, ordered by signature
    pub fn list_functions(&self) -> Vec<Arc<ScalarFunction>> {
        let mut functions: Vec<_> = self.read().values().flatten().cloned().collect();
        functions.sort_by_cached_key(|f| f.signature_string());
        functions
    }

    /// Functions callable by name from SQL, ordered by signature
    pub fn user_visible_functions(&self) -> Vec<Arc<ScalarFunction>> {
        self.list_functions()
            .into_iter()
            .filter(|f| f.is_user_visible())
            .collect()
    }

    /// Number of published functions
    pub fn len(&self) -> usize {
        self.read().values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    /// Drop every function, e.g. before a catalog reload
    pub fn clear(&self) {
        self.write().clear();
    }

    /// Export every published function, ordered by signature
    pub fn export_all(&self) -> Vec<FunctionDescriptor> {
        self.list_functions()
            .iter()
            .map(|f| f.to_descriptor())
            .collect()
    }

    /// Hand every published function's descriptor to `sink`
    ///
    /// Returns the number of descriptors published.
    pub async fn propagate(&self, sink: &dyn DescriptorSink) -> CatalogResult<usize> {
        let descriptors = self.export_all();
        let count = descriptors.len();
        sink.publish(descriptors).await?;
        debug!(count, "Propagated function descriptors");
        Ok(count)
    }
}
