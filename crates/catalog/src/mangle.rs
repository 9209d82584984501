// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! # Operator symbol mangling
//!
//! Builtin operators are overloaded across primitive types and the engine
//! exports one symbol per overload. The symbol is derived from the operator
//! name and argument types:
//!
//! ```text
//! Add(TINYINT, TINYINT)  ->  impala::Operators::Add_TinyIntVal_TinyIntVal
//! Add(DECIMAL, INT)      ->  impala::DecimalOperators::Add_DecimalVal_IntVal
//! ```
//!
//! The generator on the engine side must use the same table.

use crate::config::DEFAULT_ENGINE_NAMESPACE;
use crate::error::{CatalogError, CatalogResult};
use crate::metadata::{PrimitiveType, Type};

/// Suffix appended to an operator symbol for an argument of type `ty`
///
/// `None` means operators are not generated for that type. The match has no
/// wildcard arm: a new primitive type does not compile until it is placed here.
pub const fn symbol_suffix(ty: PrimitiveType) -> Option<&'static str> {
    match ty {
        PrimitiveType::Boolean => Some("BooleanVal"),
        PrimitiveType::TinyInt => Some("TinyIntVal"),
        PrimitiveType::SmallInt => Some("SmallIntVal"),
        PrimitiveType::Int => Some("IntVal"),
        PrimitiveType::BigInt => Some("BigIntVal"),
        PrimitiveType::Float => Some("FloatVal"),
        PrimitiveType::Double => Some("DoubleVal"),
        PrimitiveType::String | PrimitiveType::Varchar => Some("StringVal"),
        PrimitiveType::Char => Some("Char"),
        PrimitiveType::Timestamp => Some("TimestampVal"),
        PrimitiveType::Decimal => Some("DecimalVal"),
        PrimitiveType::InvalidType
        | PrimitiveType::NullType
        | PrimitiveType::Date
        | PrimitiveType::DateTime
        | PrimitiveType::Binary => None,
    }
}

/// Native class holding an operator's implementation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperatorClass {
    Operators,
    DecimalOperators,
}

impl OperatorClass {
    /// Class for an argument list: decimal if any argument is DECIMAL
    pub fn for_args(arg_types: &[Type]) -> Self {
        if arg_types
            .iter()
            .any(|t| t.primitive_type() == PrimitiveType::Decimal)
        {
            OperatorClass::DecimalOperators
        } else {
            OperatorClass::Operators
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            OperatorClass::Operators => "Operators",
            OperatorClass::DecimalOperators => "DecimalOperators",
        }
    }
}

/// Builds canonical operator symbols within an engine namespace
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OperatorMangler {
    namespace: String,
}

impl Default for OperatorMangler {
    fn default() -> Self {
        Self::new(DEFAULT_ENGINE_NAMESPACE)
    }
}

impl OperatorMangler {
    pub fn new(namespace: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
        }
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// Mangle an operator name and argument list into its native symbol
    ///
    /// # Errors
    ///
    /// - `InvalidFunctionName` if `name` is empty
    /// - `UnsupportedArgumentType` if any argument has no suffix
    pub fn mangle(&self, name: &str, arg_types: &[Type]) -> CatalogResult<String> {
        let mut chars = name.chars();
        let Some(first) = chars.next() else {
            return Err(CatalogError::InvalidFunctionName(name.to_string()));
        };

        let mut function: String = first.to_uppercase().collect();
        function.push_str(chars.as_str());
        for ty in arg_types {
            let suffix = symbol_suffix(ty.primitive_type())
                .ok_or(CatalogError::UnsupportedArgumentType(*ty))?;
            function.push('_');
            function.push_str(suffix);
        }

        let class = OperatorClass::for_args(arg_types);
        Ok(format!("{}::{}::{}", self.namespace, class.as_str(), function))
    }
}

/// Mangle with the default engine namespace
pub fn mangle_operator(name: &str, arg_types: &[Type]) -> CatalogResult<String> {
    OperatorMangler::default().mangle(name, arg_types)
}
