// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! # Function descriptors
//!
//! The wire form of a catalog function, handed to the layer that propagates
//! catalog updates between nodes. A descriptor has the generic function
//! fields plus a scalar sub-record with the symbols.
//!
//! Unset optional fields are omitted from the encoded form, never written as
//! empty strings:
//!
//! ```json
//! {
//!   "name": { "db": "udfs", "function": "to_upper" },
//!   "signature": "udfs.to_upper(STRING) RETURNS STRING",
//!   "binary_type": "NATIVE",
//!   "location": "hdfs:///udfs/libudfsample.so",
//!   "arg_types": [{ "primitive": "STRING" }],
//!   "ret_type": { "primitive": "STRING" },
//!   "has_var_args": false,
//!   "user_visible": true,
//!   "scalar_fn": { "symbol": "ToUpper" }
//! }
//! ```

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::{CatalogError, CatalogResult};
use crate::function::{BinaryDescriptor, BinaryType, CatalogFunction};
use crate::metadata::{BinaryLocation, FunctionArgs, FunctionName, FunctionSignature, Type};
use crate::scalar::ScalarFunction;

/// Wire descriptor of a catalog function
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FunctionDescriptor {
    pub name: FunctionName,
    /// Human-readable signature. Output only: import rebuilds it from the
    /// structured fields and logs a warning when the two disagree.
    pub signature: String,
    pub binary_type: BinaryType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<BinaryLocation>,
    pub arg_types: Vec<Type>,
    pub ret_type: Type,
    pub has_var_args: bool,
    pub user_visible: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scalar_fn: Option<ScalarFunctionDescriptor>,
}

/// Scalar-specific part of a [`FunctionDescriptor`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScalarFunctionDescriptor {
    pub symbol: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prepare_fn_symbol: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub close_fn_symbol: Option<String>,
}

impl FunctionDescriptor {
    /// Encode as JSON
    pub fn to_json(&self) -> CatalogResult<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Decode from JSON
    pub fn from_json(json: &str) -> CatalogResult<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

impl ScalarFunction {
    /// Export to the wire descriptor
    pub fn to_descriptor(&self) -> FunctionDescriptor {
        FunctionDescriptor {
            name: self.name().clone(),
            signature: self.signature_string(),
            binary_type: self.binary_type(),
            location: self.location().cloned(),
            arg_types: self.arg_types().to_vec(),
            ret_type: self.return_type(),
            has_var_args: self.has_var_args(),
            user_visible: self.is_user_visible(),
            scalar_fn: Some(ScalarFunctionDescriptor {
                symbol: self.evaluate_symbol().to_string(),
                prepare_fn_symbol: self.prepare_symbol().map(str::to_string),
                close_fn_symbol: self.close_symbol().map(str::to_string),
            }),
        }
    }

    /// Import from a wire descriptor
    ///
    /// # Errors
    ///
    /// `InvalidDescriptor` when the descriptor has no scalar sub-record, has
    /// an empty symbol, or pairs a BUILTIN binary with a location.
    pub fn from_descriptor(descriptor: FunctionDescriptor) -> CatalogResult<Self> {
        let FunctionDescriptor {
            name,
            signature: display_signature,
            binary_type,
            location,
            arg_types,
            ret_type,
            has_var_args,
            user_visible,
            scalar_fn,
        } = descriptor;

        let invalid = |reason: &str| {
            warn!(function = %name, reason, "Rejected function descriptor");
            CatalogError::InvalidDescriptor(format!("{}: {}", name, reason))
        };

        let scalar = scalar_fn.ok_or_else(|| invalid("not a scalar function"))?;
        if scalar.symbol.is_empty() {
            return Err(invalid("empty symbol"));
        }
        let binary = BinaryDescriptor::new(binary_type, location)
            .map_err(|_| invalid("builtin functions cannot have a location"))?;

        let signature = FunctionSignature::new(
            name.clone(),
            FunctionArgs::new(arg_types, has_var_args),
            ret_type,
        );
        let function = ScalarFunction::builder(signature)
            .binary(binary)
            .user_visible(user_visible)
            .evaluate_symbol(scalar.symbol)
            .maybe_prepare_symbol(scalar.prepare_fn_symbol)
            .maybe_close_symbol(scalar.close_fn_symbol)
            .build()?;

        let rebuilt = function.signature_string();
        if rebuilt != display_signature {
            warn!(
                received = %display_signature,
                rebuilt = %rebuilt,
                "Descriptor signature disagrees with its fields"
            );
        }
        Ok(function)
    }
}

impl From<&ScalarFunction> for FunctionDescriptor {
    fn from(function: &ScalarFunction) -> Self {
        function.to_descriptor()
    }
}

impl TryFrom<FunctionDescriptor> for ScalarFunction {
    type Error = CatalogError;

    fn try_from(descriptor: FunctionDescriptor) -> Result<Self, Self::Error> {
        ScalarFunction::from_descriptor(descriptor)
    }
}
