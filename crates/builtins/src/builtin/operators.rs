// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! Builtin operator definitions
//!
//! Operators are hidden builtins. Most use the mangled symbol derived from
//! their name and argument types; a few live outside the operator classes
//! and name their symbol explicitly.

use scalar_fn_catalog::{PrimitiveType, Type};

/// A builtin operator overload
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OperatorDef {
    pub name: &'static str,
    pub arg_types: Vec<Type>,
    pub return_type: Type,
    /// Symbol to use instead of the mangled one
    pub symbol: Option<&'static str>,
}

impl OperatorDef {
    fn mangled(name: &'static str, arg_types: Vec<Type>, return_type: Type) -> Self {
        Self {
            name,
            arg_types,
            return_type,
            symbol: None,
        }
    }

    fn explicit(
        name: &'static str,
        symbol: &'static str,
        arg_types: Vec<Type>,
        return_type: Type,
    ) -> Self {
        Self {
            name,
            arg_types,
            return_type,
            symbol: Some(symbol),
        }
    }
}

const INTEGER_TYPES: [Type; 4] = [Type::TINYINT, Type::SMALLINT, Type::INT, Type::BIGINT];

const NUMERIC_TYPES: [Type; 7] = [
    Type::TINYINT,
    Type::SMALLINT,
    Type::INT,
    Type::BIGINT,
    Type::FLOAT,
    Type::DOUBLE,
    Type::DECIMAL,
];

const COMPARABLE_TYPES: [Type; 11] = [
    Type::BOOLEAN,
    Type::TINYINT,
    Type::SMALLINT,
    Type::INT,
    Type::BIGINT,
    Type::FLOAT,
    Type::DOUBLE,
    Type::STRING,
    Type::new(PrimitiveType::Char),
    Type::TIMESTAMP,
    Type::DECIMAL,
];

/// Result type of `+`, `-` and `*` on two values of type `ty`
fn widened(ty: Type) -> Type {
    match ty.primitive_type() {
        PrimitiveType::TinyInt => Type::SMALLINT,
        PrimitiveType::SmallInt => Type::INT,
        PrimitiveType::Int | PrimitiveType::BigInt => Type::BIGINT,
        PrimitiveType::Float | PrimitiveType::Double => Type::DOUBLE,
        _ => ty,
    }
}

/// `add`, `subtract`, `multiply`, `divide`, `int_divide`, `mod`
pub fn arithmetic_operators() -> Vec<OperatorDef> {
    let mut ops = Vec::new();
    for name in ["add", "subtract", "multiply"] {
        for ty in NUMERIC_TYPES {
            ops.push(OperatorDef::mangled(name, vec![ty, ty], widened(ty)));
        }
    }

    ops.push(OperatorDef::mangled(
        "divide",
        vec![Type::DOUBLE, Type::DOUBLE],
        Type::DOUBLE,
    ));
    ops.push(OperatorDef::mangled(
        "divide",
        vec![Type::DECIMAL, Type::DECIMAL],
        Type::DECIMAL,
    ));

    for ty in INTEGER_TYPES {
        ops.push(OperatorDef::mangled("int_divide", vec![ty, ty], ty));
        ops.push(OperatorDef::mangled("mod", vec![ty, ty], ty));
    }
    ops.push(OperatorDef::mangled(
        "mod",
        vec![Type::DECIMAL, Type::DECIMAL],
        Type::DECIMAL,
    ));
    ops
}

/// `eq`, `ne`, `lt`, `gt`, `le`, `ge` over every comparable type
pub fn comparison_operators() -> Vec<OperatorDef> {
    let mut ops = Vec::new();
    for name in ["eq", "ne", "lt", "gt", "le", "ge"] {
        for ty in COMPARABLE_TYPES {
            ops.push(OperatorDef::mangled(name, vec![ty, ty], Type::BOOLEAN));
        }
    }
    ops
}

/// `bitand`, `bitor`, `bitxor`, `bitnot` over integer types
pub fn bitwise_operators() -> Vec<OperatorDef> {
    let mut ops = Vec::new();
    for name in ["bitand", "bitor", "bitxor"] {
        for ty in INTEGER_TYPES {
            ops.push(OperatorDef::mangled(name, vec![ty, ty], ty));
        }
    }
    for ty in INTEGER_TYPES {
        ops.push(OperatorDef::mangled("bitnot", vec![ty], ty));
    }
    ops
}

/// Operators implemented outside the operator classes
pub fn explicit_operators() -> Vec<OperatorDef> {
    vec![
        OperatorDef::explicit(
            "factorial",
            "impala::MathFunctions::Factorial",
            vec![Type::BIGINT],
            Type::BIGINT,
        ),
        OperatorDef::explicit(
            "negative",
            "impala::MathFunctions::NegativeBigInt",
            vec![Type::BIGINT],
            Type::BIGINT,
        ),
        OperatorDef::explicit(
            "negative",
            "impala::MathFunctions::NegativeDouble",
            vec![Type::DOUBLE],
            Type::DOUBLE,
        ),
    ]
}

/// Get all builtin operators
pub fn all_operators() -> Vec<OperatorDef> {
    let mut ops = arithmetic_operators();
    ops.extend(comparison_operators());
    ops.extend(bitwise_operators());
    ops.extend(explicit_operators());
    ops
}
