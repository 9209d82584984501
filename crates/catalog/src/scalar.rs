// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! # Scalar functions
//!
//! A [`ScalarFunction`] is an immutable catalog entity: signature, binary
//! descriptor and the native symbols implementing it. The evaluate symbol is
//! always present; prepare and close symbols are optional.
//!
//! Entities are built either directly from already-validated parts
//! ([`ScalarFunction::new`]), through [`ScalarFunctionBuilder`], or for
//! builtins through [`BuiltinFactory`](crate::BuiltinFactory), which resolves
//! the evaluate symbol first.

use crate::error::{CatalogError, CatalogResult};
use crate::function::{BinaryDescriptor, CatalogFunction};
use crate::metadata::FunctionSignature;

/// Immutable scalar function entity
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ScalarFunction {
    signature: FunctionSignature,
    binary: BinaryDescriptor,
    user_visible: bool,
    evaluate_symbol: String,
    prepare_symbol: Option<String>,
    close_symbol: Option<String>,
}

impl ScalarFunction {
    /// Create a scalar function from parts the caller already validated
    ///
    /// Used by the UDF registration path, which checks symbols itself. Never
    /// fails. Empty optional symbols are treated as absent. An empty evaluate
    /// symbol is kept here but refused by
    /// [`FunctionCatalog::add_function`](crate::FunctionCatalog::add_function).
    pub fn new(
        signature: FunctionSignature,
        binary: BinaryDescriptor,
        evaluate_symbol: impl Into<String>,
        prepare_symbol: Option<String>,
        close_symbol: Option<String>,
    ) -> Self {
        Self {
            signature,
            binary,
            user_visible: true,
            evaluate_symbol: evaluate_symbol.into(),
            prepare_symbol: prepare_symbol.filter(|s| !s.is_empty()),
            close_symbol: close_symbol.filter(|s| !s.is_empty()),
        }
    }

    /// Start building a scalar function for `signature`
    pub fn builder(signature: FunctionSignature) -> ScalarFunctionBuilder {
        ScalarFunctionBuilder::new().signature(signature)
    }

    /// Symbol of the per-row evaluate entry point
    pub fn evaluate_symbol(&self) -> &str {
        &self.evaluate_symbol
    }

    /// Symbol run once before evaluation, if any
    pub fn prepare_symbol(&self) -> Option<&str> {
        self.prepare_symbol.as_deref()
    }

    /// Symbol run once after evaluation, if any
    pub fn close_symbol(&self) -> Option<&str> {
        self.close_symbol.as_deref()
    }
}

impl CatalogFunction for ScalarFunction {
    fn signature(&self) -> &FunctionSignature {
        &self.signature
    }

    fn binary(&self) -> &BinaryDescriptor {
        &self.binary
    }

    fn is_user_visible(&self) -> bool {
        self.user_visible
    }
}

/// Builder for [`ScalarFunction`]
///
/// `build` succeeds only once the signature and a non-empty evaluate symbol
/// are set. The binary defaults to the engine's own; visibility defaults to
/// user-visible.
#[derive(Debug, Clone, Default)]
pub struct ScalarFunctionBuilder {
    signature: Option<FunctionSignature>,
    binary: Option<BinaryDescriptor>,
    user_visible: Option<bool>,
    evaluate_symbol: Option<String>,
    prepare_symbol: Option<String>,
    close_symbol: Option<String>,
}

impl ScalarFunctionBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn signature(mut self, signature: FunctionSignature) -> Self {
        self.signature = Some(signature);
        self
    }

    pub fn binary(mut self, binary: BinaryDescriptor) -> Self {
        self.binary = Some(binary);
        self
    }

    pub fn user_visible(mut self, user_visible: bool) -> Self {
        self.user_visible = Some(user_visible);
        self
    }

    pub fn evaluate_symbol(mut self, symbol: impl Into<String>) -> Self {
        self.evaluate_symbol = Some(symbol.into());
        self
    }

    pub fn prepare_symbol(mut self, symbol: impl Into<String>) -> Self {
        self.prepare_symbol = Some(symbol.into());
        self
    }

    pub fn close_symbol(mut self, symbol: impl Into<String>) -> Self {
        self.close_symbol = Some(symbol.into());
        self
    }

    /// Set the prepare symbol only when `symbol` is `Some`
    pub fn maybe_prepare_symbol(mut self, symbol: Option<String>) -> Self {
        if symbol.is_some() {
            self.prepare_symbol = symbol;
        }
        self
    }

    /// Set the close symbol only when `symbol` is `Some`
    pub fn maybe_close_symbol(mut self, symbol: Option<String>) -> Self {
        if symbol.is_some() {
            self.close_symbol = symbol;
        }
        self
    }

    /// Produce the immutable entity
    ///
    /// # Errors
    ///
    /// `MissingField` when the signature or evaluate symbol is unset or the
    /// evaluate symbol is empty.
    pub fn build(self) -> CatalogResult<ScalarFunction> {
        let signature = self.signature.ok_or(CatalogError::MissingField("signature"))?;
        let evaluate_symbol = self
            .evaluate_symbol
            .filter(|s| !s.is_empty())
            .ok_or(CatalogError::MissingField("evaluate_symbol"))?;

        let mut function = ScalarFunction::new(
            signature,
            self.binary.unwrap_or_else(BinaryDescriptor::builtin),
            evaluate_symbol,
            self.prepare_symbol,
            self.close_symbol,
        );
        function.user_visible = self.user_visible.unwrap_or(true);
        Ok(function)
    }
}
