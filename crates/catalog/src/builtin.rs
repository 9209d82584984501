// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! # Builtin scalar function construction
//!
//! Builtins live in the engine's own binary, so their evaluate symbol is
//! resolved against it while the entity is built. A symbol that does not
//! resolve means the builtin table and the engine binary are out of sync.
//! The error is returned to the caller and is not recovered here.
//!
//! Prepare and close symbols are stored as given and are not resolved.

use tracing::debug;

use crate::config::CatalogConfig;
use crate::error::{CatalogError, CatalogResult};
use crate::function::BinaryDescriptor;
use crate::mangle::OperatorMangler;
use crate::metadata::{FunctionArgs, FunctionName, FunctionSignature, Type};
use crate::scalar::ScalarFunction;
use crate::search::SearchDescriptor;
use crate::symbol::SymbolLookup;
use crate::r#trait::SymbolResolver;

/// Definition of a builtin scalar function, before symbol resolution
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuiltinScalarDef {
    pub name: String,
    pub args: FunctionArgs,
    pub return_type: Type,
    /// Candidate evaluate symbol
    pub symbol: String,
    pub prepare_symbol: Option<String>,
    pub close_symbol: Option<String>,
    pub user_visible: bool,
}

impl BuiltinScalarDef {
    /// Create a user-visible fixed-arity builtin definition
    pub fn new(
        name: impl Into<String>,
        arg_types: Vec<Type>,
        return_type: Type,
        symbol: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            args: FunctionArgs::fixed(arg_types),
            return_type,
            symbol: symbol.into(),
            prepare_symbol: None,
            close_symbol: None,
            user_visible: true,
        }
    }

    /// Builder method: last argument repeats
    pub fn with_var_args(mut self) -> Self {
        self.args.has_var_args = true;
        self
    }

    /// Builder method: set prepare symbol
    pub fn with_prepare(mut self, symbol: impl Into<String>) -> Self {
        self.prepare_symbol = Some(symbol.into());
        self
    }

    /// Builder method: set close symbol
    pub fn with_close(mut self, symbol: impl Into<String>) -> Self {
        self.close_symbol = Some(symbol.into());
        self
    }

    /// Builder method: hide from SQL name lookup
    pub fn hidden(mut self) -> Self {
        self.user_visible = false;
        self
    }
}

/// Builds builtin scalar functions in the configured builtins database
///
/// # Examples
///
/// ```rust,ignore
/// let factory = BuiltinFactory::new(&config, &symbols);
/// let add = factory.create_builtin_operator("add", vec![Type::INT, Type::INT], Type::BIGINT)?;
/// assert_eq!(add.evaluate_symbol(), "impala::Operators::Add_IntVal_IntVal");
/// ```
pub struct BuiltinFactory<'a> {
    config: &'a CatalogConfig,
    resolver: &'a dyn SymbolResolver,
    mangler: OperatorMangler,
}

impl<'a> BuiltinFactory<'a> {
    pub fn new(config: &'a CatalogConfig, resolver: &'a dyn SymbolResolver) -> Self {
        Self {
            config,
            resolver,
            mangler: OperatorMangler::new(config.engine_namespace.clone()),
        }
    }

    pub fn config(&self) -> &CatalogConfig {
        self.config
    }

    pub fn mangler(&self) -> &OperatorMangler {
        &self.mangler
    }

    fn builtin_name(&self, name: &str) -> FunctionName {
        FunctionName::new(self.config.builtins_db.clone(), name)
    }

    /// Create a builtin, resolving its evaluate symbol against the engine binary
    ///
    /// # Errors
    ///
    /// `SymbolNotFound` if the resolver does not know `def.symbol`.
    pub fn create_builtin(&self, def: BuiltinScalarDef) -> CatalogResult<ScalarFunction> {
        let signature =
            FunctionSignature::new(self.builtin_name(&def.name), def.args, def.return_type);

        let lookup = SymbolLookup::evaluate(
            &def.symbol,
            signature.arg_types(),
            signature.has_var_args(),
        );
        let resolved = self
            .resolver
            .resolve(&lookup)
            .map_err(|source| CatalogError::SymbolNotFound {
                signature: signature.to_string(),
                source,
            })?;
        debug!(signature = %signature, symbol = %resolved, "Resolved builtin symbol");

        ScalarFunction::builder(signature)
            .binary(BinaryDescriptor::builtin())
            .user_visible(def.user_visible)
            .evaluate_symbol(resolved)
            .maybe_prepare_symbol(def.prepare_symbol)
            .maybe_close_symbol(def.close_symbol)
            .build()
    }

    /// Create an operator whose symbol follows the standard mangling
    ///
    /// # Errors
    ///
    /// `UnsupportedArgumentType` if an argument type cannot be mangled, and
    /// any error from [`create_builtin`](Self::create_builtin).
    pub fn create_builtin_operator(
        &self,
        name: &str,
        arg_types: Vec<Type>,
        return_type: Type,
    ) -> CatalogResult<ScalarFunction> {
        let symbol = self.mangler.mangle(name, &arg_types)?;
        self.create_builtin_operator_with_symbol(name, symbol, arg_types, return_type)
    }

    /// Create an operator with an explicit symbol, bypassing mangling
    pub fn create_builtin_operator_with_symbol(
        &self,
        name: &str,
        symbol: impl Into<String>,
        arg_types: Vec<Type>,
        return_type: Type,
    ) -> CatalogResult<ScalarFunction> {
        self.create_builtin(BuiltinScalarDef::new(name, arg_types, return_type, symbol).hidden())
    }

    /// Create a signature-only descriptor for looking up a builtin
    ///
    /// Absent `arg_types` means no arguments.
    pub fn search_descriptor(
        &self,
        name: &str,
        arg_types: Option<Vec<Type>>,
        has_var_args: bool,
    ) -> SearchDescriptor {
        SearchDescriptor::new(
            self.builtin_name(name),
            FunctionArgs::new(arg_types.unwrap_or_default(), has_var_args),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::function::{BinaryType, CatalogFunction};
    use crate::r#static::StaticSymbolTable;

    #[test]
    fn test_create_builtin_resolves_symbol() {
        let config = CatalogConfig::default();
        let mut symbols = StaticSymbolTable::new();
        symbols.insert("impala::MathFunctions::Pi", "_ZN6impala13MathFunctions2PiE");
        let factory = BuiltinFactory::new(&config, &symbols);

        let pi = factory
            .create_builtin(BuiltinScalarDef::new(
                "pi",
                vec![],
                Type::DOUBLE,
                "impala::MathFunctions::Pi",
            ))
            .unwrap();

        assert_eq!(pi.evaluate_symbol(), "_ZN6impala13MathFunctions2PiE");
        assert_eq!(pi.binary_type(), BinaryType::Builtin);
        assert!(pi.location().is_none());
        assert!(pi.is_user_visible());
        assert_eq!(pi.name().db(), Some("_impala_builtins"));
    }

    #[test]
    fn test_create_builtin_missing_symbol() {
        let config = CatalogConfig::default();
        let symbols = StaticSymbolTable::new();
        let factory = BuiltinFactory::new(&config, &symbols);

        let err = factory
            .create_builtin(BuiltinScalarDef::new("pi", vec![], Type::DOUBLE, "Nope"))
            .unwrap_err();
        match err {
            CatalogError::SymbolNotFound { signature, source } => {
                assert_eq!(signature, "_impala_builtins.pi() RETURNS DOUBLE");
                assert_eq!(source.symbol, "Nope");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_operator_is_hidden_and_mangled() {
        let config = CatalogConfig::default();
        let symbols = StaticSymbolTable::from_symbols(["impala::Operators::Add_IntVal_IntVal"]);
        let factory = BuiltinFactory::new(&config, &symbols);

        let add = factory
            .create_builtin_operator("add", vec![Type::INT, Type::INT], Type::BIGINT)
            .unwrap();
        assert_eq!(add.evaluate_symbol(), "impala::Operators::Add_IntVal_IntVal");
        assert!(!add.is_user_visible());
        assert!(!add.has_var_args());
        assert_eq!(add.name().function(), "add");
    }

    #[test]
    fn test_operator_with_unsupported_type_never_resolves() {
        let config = CatalogConfig::default();
        let symbols = StaticSymbolTable::new();
        let factory = BuiltinFactory::new(&config, &symbols);

        let err = factory
            .create_builtin_operator("eq", vec![Type::DATE, Type::DATE], Type::BOOLEAN)
            .unwrap_err();
        assert_eq!(err, CatalogError::UnsupportedArgumentType(Type::DATE));
    }

    #[test]
    fn test_configured_namespace_and_db() {
        let config = CatalogConfig::new("_sys", "engine");
        let symbols = StaticSymbolTable::from_symbols(["engine::Operators::Eq_IntVal_IntVal"]);
        let factory = BuiltinFactory::new(&config, &symbols);

        let eq = factory
            .create_builtin_operator("eq", vec![Type::INT, Type::INT], Type::BOOLEAN)
            .unwrap();
        assert_eq!(eq.name().to_string(), "_sys.eq");
    }

    #[test]
    fn test_search_descriptor_defaults_args() {
        let config = CatalogConfig::default();
        let symbols = StaticSymbolTable::new();
        let factory = BuiltinFactory::new(&config, &symbols);

        let search = factory.search_descriptor("now", None, false);
        assert!(search.signature().arg_types().is_empty());
        assert!(search.signature().return_type().is_invalid());
    }
}
