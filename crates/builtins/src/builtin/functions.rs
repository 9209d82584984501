// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! Named builtin scalar function definitions

use scalar_fn_catalog::{BuiltinScalarDef, Type};

/// Math functions
pub fn math_functions() -> Vec<BuiltinScalarDef> {
    vec![
        BuiltinScalarDef::new("pi", vec![], Type::DOUBLE, "impala::MathFunctions::Pi"),
        BuiltinScalarDef::new("e", vec![], Type::DOUBLE, "impala::MathFunctions::E"),
        BuiltinScalarDef::new(
            "abs",
            vec![Type::BIGINT],
            Type::BIGINT,
            "impala::MathFunctions::AbsBigInt",
        ),
        BuiltinScalarDef::new(
            "abs",
            vec![Type::DOUBLE],
            Type::DOUBLE,
            "impala::MathFunctions::AbsDouble",
        ),
        BuiltinScalarDef::new("ln", vec![Type::DOUBLE], Type::DOUBLE, "impala::MathFunctions::Ln"),
        BuiltinScalarDef::new(
            "sqrt",
            vec![Type::DOUBLE],
            Type::DOUBLE,
            "impala::MathFunctions::Sqrt",
        ),
        BuiltinScalarDef::new(
            "round",
            vec![Type::DOUBLE],
            Type::BIGINT,
            "impala::MathFunctions::Round",
        ),
        BuiltinScalarDef::new("rand", vec![], Type::DOUBLE, "impala::MathFunctions::Rand")
            .with_prepare("impala::MathFunctions::RandPrepare"),
    ]
}

/// String functions
pub fn string_functions() -> Vec<BuiltinScalarDef> {
    vec![
        BuiltinScalarDef::new(
            "upper",
            vec![Type::STRING],
            Type::STRING,
            "impala::StringFunctions::Upper",
        ),
        BuiltinScalarDef::new(
            "lower",
            vec![Type::STRING],
            Type::STRING,
            "impala::StringFunctions::Lower",
        ),
        BuiltinScalarDef::new(
            "length",
            vec![Type::STRING],
            Type::INT,
            "impala::StringFunctions::Length",
        ),
        BuiltinScalarDef::new(
            "concat",
            vec![Type::STRING],
            Type::STRING,
            "impala::StringFunctions::Concat",
        )
        .with_var_args(),
        BuiltinScalarDef::new(
            "concat_ws",
            vec![Type::STRING, Type::STRING],
            Type::STRING,
            "impala::StringFunctions::ConcatWs",
        )
        .with_var_args(),
        BuiltinScalarDef::new(
            "regexp_extract",
            vec![Type::STRING, Type::STRING, Type::BIGINT],
            Type::STRING,
            "impala::StringFunctions::RegexpExtract",
        )
        .with_prepare("impala::StringFunctions::RegexpPrepare")
        .with_close("impala::StringFunctions::RegexpClose"),
        BuiltinScalarDef::new(
            "regexp_replace",
            vec![Type::STRING, Type::STRING, Type::STRING],
            Type::STRING,
            "impala::StringFunctions::RegexpReplace",
        )
        .with_prepare("impala::StringFunctions::RegexpPrepare")
        .with_close("impala::StringFunctions::RegexpClose"),
    ]
}

/// Timestamp functions
pub fn timestamp_functions() -> Vec<BuiltinScalarDef> {
    vec![
        BuiltinScalarDef::new("now", vec![], Type::TIMESTAMP, "impala::TimestampFunctions::Now"),
        BuiltinScalarDef::new(
            "year",
            vec![Type::TIMESTAMP],
            Type::INT,
            "impala::TimestampFunctions::Year",
        ),
        BuiltinScalarDef::new(
            "unix_timestamp",
            vec![Type::TIMESTAMP],
            Type::BIGINT,
            "impala::TimestampFunctions::Unix",
        ),
        BuiltinScalarDef::new(
            "from_unixtime",
            vec![Type::BIGINT, Type::STRING],
            Type::STRING,
            "impala::TimestampFunctions::FromUnix",
        )
        .with_prepare("impala::TimestampFunctions::UnixAndFromUnixPrepare")
        .with_close("impala::TimestampFunctions::UnixAndFromUnixClose"),
    ]
}

/// Internal helpers the planner inserts; not callable by name
pub fn internal_functions() -> Vec<BuiltinScalarDef> {
    vec![
        BuiltinScalarDef::new(
            "is_null_pred",
            vec![Type::BOOLEAN],
            Type::BOOLEAN,
            "impala::IsNullPredicate::IsNull",
        )
        .hidden(),
    ]
}

/// Get all named builtin functions
pub fn all_functions() -> Vec<BuiltinScalarDef> {
    let mut functions = math_functions();
    functions.extend(string_functions());
    functions.extend(timestamp_functions());
    functions.extend(internal_functions());
    functions
}
