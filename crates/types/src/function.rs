// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! # Function signature types
//!
//! This module defines the types used to identify a function in the catalog:
//! its database-qualified name, its argument list and its full signature.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::primitive::Type;

/// Database-qualified function name
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct FunctionName {
    /// Owning database, if the name is qualified
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub db: Option<String>,
    /// Function name within the database
    pub function: String,
}

impl FunctionName {
    /// Create a database-qualified function name
    pub fn new(db: impl Into<String>, function: impl Into<String>) -> Self {
        Self {
            db: Some(db.into()),
            function: function.into(),
        }
    }

    /// Create an unqualified function name
    pub fn unqualified(function: impl Into<String>) -> Self {
        Self {
            db: None,
            function: function.into(),
        }
    }

    /// Owning database
    pub fn db(&self) -> Option<&str> {
        self.db.as_deref()
    }

    /// Function name without the database
    pub fn function(&self) -> &str {
        &self.function
    }
}

impl fmt::Display for FunctionName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.db {
            Some(db) => write!(f, "{}.{}", db, self.function),
            None => f.write_str(&self.function),
        }
    }
}

/// Ordered argument types plus the variadic flag
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FunctionArgs {
    pub arg_types: Vec<Type>,
    pub has_var_args: bool,
}

impl FunctionArgs {
    pub fn new(arg_types: Vec<Type>, has_var_args: bool) -> Self {
        Self {
            arg_types,
            has_var_args,
        }
    }

    /// Fixed-arity argument list
    pub fn fixed(arg_types: Vec<Type>) -> Self {
        Self::new(arg_types, false)
    }

    /// Number of declared arguments (the variadic tail counts once)
    pub fn len(&self) -> usize {
        self.arg_types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.arg_types.is_empty()
    }
}

/// Full function signature
///
/// Immutable once attached to a catalog entity.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FunctionSignature {
    name: FunctionName,
    args: FunctionArgs,
    return_type: Type,
}

impl FunctionSignature {
    pub fn new(name: FunctionName, args: FunctionArgs, return_type: Type) -> Self {
        Self {
            name,
            args,
            return_type,
        }
    }

    pub fn name(&self) -> &FunctionName {
        &self.name
    }

    pub fn args(&self) -> &FunctionArgs {
        &self.args
    }

    pub fn arg_types(&self) -> &[Type] {
        &self.args.arg_types
    }

    pub fn has_var_args(&self) -> bool {
        self.args.has_var_args
    }

    pub fn return_type(&self) -> Type {
        self.return_type
    }

    /// Whether two signatures describe the same call shape
    ///
    /// Compares name, argument types and the variadic flag. The return type
    /// does not participate.
    pub fn matches(&self, other: &FunctionSignature) -> bool {
        self.name == other.name && self.args == other.args
    }

    /// Argument list rendered as SQL, e.g. `(INT, STRING...)`
    pub fn args_sql(&self) -> String {
        let mut params: Vec<String> = self.args.arg_types.iter().map(Type::to_sql).collect();
        if self.args.has_var_args {
            if let Some(last) = params.last_mut() {
                last.push_str("...");
            }
        }
        format!("({})", params.join(", "))
    }
}

impl fmt::Display for FunctionSignature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{} RETURNS {}",
            self.name,
            self.args_sql(),
            self.return_type
        )
    }
}

/// Location of an externally supplied function binary
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BinaryLocation(String);

impl BinaryLocation {
    pub fn new(uri: impl Into<String>) -> Self {
        Self(uri.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BinaryLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
