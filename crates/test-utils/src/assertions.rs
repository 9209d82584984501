// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! Catalog-specific test helpers and custom assertions

use scalar_fn_catalog::{
    BinaryType, CatalogFunction, FunctionDescriptor, ScalarFunction, Type,
};

/// Custom assertion helpers for catalog testing
pub struct CatalogAssertions;

impl CatalogAssertions {
    /// Assert that a function survives descriptor encoding, JSON included
    pub fn assert_round_trip(function: &ScalarFunction) {
        let descriptor = function.to_descriptor();
        let json = descriptor
            .to_json()
            .unwrap_or_else(|e| panic!("Failed to encode {}: {e}", function.signature_string()));
        let decoded = FunctionDescriptor::from_json(&json)
            .unwrap_or_else(|e| panic!("Failed to decode {json}: {e}"));
        assert_eq!(decoded, descriptor, "Descriptor changed through JSON");

        let restored = ScalarFunction::from_descriptor(decoded)
            .unwrap_or_else(|e| panic!("Failed to rebuild {}: {e}", function.signature_string()));
        assert_eq!(&restored, function, "Function changed through round trip");
    }

    /// Assert that a function is a builtin with the given evaluate symbol
    pub fn assert_builtin(function: &ScalarFunction, evaluate_symbol: &str) {
        assert_eq!(
            function.binary_type(),
            BinaryType::Builtin,
            "Expected builtin binary for {}",
            function.signature_string()
        );
        assert!(
            function.location().is_none(),
            "Builtin {} has a location",
            function.signature_string()
        );
        assert_eq!(function.evaluate_symbol(), evaluate_symbol, "Evaluate symbol mismatch");
    }

    /// Assert the signature of a function
    pub fn assert_signature(function: &ScalarFunction, arg_types: &[Type], return_type: Type) {
        assert_eq!(function.arg_types(), arg_types, "Argument types mismatch");
        assert_eq!(function.return_type(), return_type, "Return type mismatch");
    }

    /// Assert that absent optional fields are left out of the wire form
    pub fn assert_descriptor_omits_optionals(function: &ScalarFunction) {
        let value = serde_json::to_value(function.to_descriptor())
            .unwrap_or_else(|e| panic!("Failed to encode descriptor: {e}"));

        if function.location().is_none() {
            assert!(value.get("location").is_none(), "Unset location was encoded");
        }
        let scalar = &value["scalar_fn"];
        if function.prepare_symbol().is_none() {
            assert!(
                scalar.get("prepare_fn_symbol").is_none(),
                "Unset prepare symbol was encoded"
            );
        }
        if function.close_symbol().is_none() {
            assert!(
                scalar.get("close_fn_symbol").is_none(),
                "Unset close symbol was encoded"
            );
        }
    }
}
