// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

use std::sync::Arc;

use scalar_fn_catalog::{
    BuiltinFactory, CatalogConfig, CatalogResult, FunctionArgs, FunctionCatalog, FunctionName,
    ScalarFunction, SearchDescriptor, SymbolResolver, Type,
};
use tracing::{error, info};

use crate::builtin::{functions, operators};
use crate::symbols::engine_symbol_table;

/// Registry of builtin scalar functions
///
/// Holds the catalog populated with every builtin operator and function.
/// Loading is all-or-nothing: one builtin that fails to resolve fails the
/// whole load.
#[derive(Debug)]
pub struct BuiltinRegistry {
    config: CatalogConfig,
    catalog: FunctionCatalog,
}

impl BuiltinRegistry {
    /// Load every builtin, resolving symbols through `resolver`
    ///
    /// # Errors
    ///
    /// Returns the first construction or registration error. Builtin tables
    /// are compiled in, so any error here means the tables and the engine
    /// binary disagree.
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// let registry = BuiltinRegistry::load(&config, &engine_symbols)?;
    /// assert!(registry.has_function("upper"));
    /// ```
    pub fn load(config: &CatalogConfig, resolver: &dyn SymbolResolver) -> CatalogResult<Self> {
        config.validate()?;

        let factory = BuiltinFactory::new(config, resolver);
        let catalog = FunctionCatalog::new();

        for op in operators::all_operators() {
            let function = match op.symbol {
                Some(symbol) => factory.create_builtin_operator_with_symbol(
                    op.name,
                    symbol,
                    op.arg_types,
                    op.return_type,
                )?,
                None => factory.create_builtin_operator(op.name, op.arg_types, op.return_type)?,
            };
            catalog.add_function(function)?;
        }

        for def in functions::all_functions() {
            catalog.add_function(factory.create_builtin(def)?)?;
        }

        info!(
            db = %config.builtins_db,
            count = catalog.len(),
            "Registered builtin functions"
        );
        Ok(Self {
            config: config.clone(),
            catalog,
        })
    }

    /// Load every builtin against the engine's own symbol table
    ///
    /// # Errors
    ///
    /// Same as [`load`](Self::load), plus mangling errors while building the
    /// symbol table.
    pub fn bootstrap(config: &CatalogConfig) -> CatalogResult<Self> {
        let symbols = engine_symbol_table(config)?;
        Self::load(config, &symbols)
    }

    /// Load every builtin or abort the process
    pub fn load_or_abort(config: &CatalogConfig, resolver: &dyn SymbolResolver) -> Self {
        Self::unwrap_or_abort(Self::load(config, resolver))
    }

    /// Bootstrap every builtin or abort the process
    pub fn bootstrap_or_abort(config: &CatalogConfig) -> Self {
        Self::unwrap_or_abort(Self::bootstrap(config))
    }

    // The only place a registration error becomes fatal.
    fn unwrap_or_abort(result: CatalogResult<Self>) -> Self {
        match result {
            Ok(registry) => registry,
            Err(err) => {
                error!(error = %err, "Builtin function registration failed");
                panic!("builtin function registration failed: {err}");
            }
        }
    }

    pub fn config(&self) -> &CatalogConfig {
        &self.config
    }

    pub fn catalog(&self) -> &FunctionCatalog {
        &self.catalog
    }

    pub fn into_catalog(self) -> FunctionCatalog {
        self.catalog
    }

    /// Search descriptor for a builtin in this registry's database
    pub fn search_descriptor(
        &self,
        name: &str,
        arg_types: Option<Vec<Type>>,
        has_var_args: bool,
    ) -> SearchDescriptor {
        SearchDescriptor::new(
            FunctionName::new(self.config.builtins_db.clone(), name),
            FunctionArgs::new(arg_types.unwrap_or_default(), has_var_args),
        )
    }

    /// Lookup the builtin with exactly this fixed-arity signature
    pub fn get_function(&self, name: &str, arg_types: Vec<Type>) -> Option<Arc<ScalarFunction>> {
        self.catalog
            .get_function(&self.search_descriptor(name, Some(arg_types), false))
    }

    /// Check if any overload of `name` exists
    pub fn has_function(&self, name: &str) -> bool {
        let name = FunctionName::new(self.config.builtins_db.clone(), name);
        !self.catalog.overloads(&name).is_empty()
    }
}

impl Default for BuiltinRegistry {
    /// Registry for the default configuration against its engine binary
    fn default() -> Self {
        Self::bootstrap_or_abort(&CatalogConfig::default())
    }
}
