// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! # Primitive and scalar types
//!
//! `PrimitiveType` is the closed set of physical types known to the execution
//! engine. `Type` is a primitive type plus the parameters some of them carry
//! (length for CHAR/VARCHAR, precision and scale for DECIMAL).

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Primitive types understood by the execution engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum PrimitiveType {
    #[serde(rename = "INVALID_TYPE")]
    InvalidType,
    #[serde(rename = "NULL_TYPE")]
    NullType,
    Boolean,
    TinyInt,
    SmallInt,
    Int,
    BigInt,
    Float,
    Double,
    Date,
    DateTime,
    Timestamp,
    String,
    Binary,
    Decimal,
    Char,
    Varchar,
}

impl PrimitiveType {
    /// Every primitive type, in declaration order
    pub const ALL: [PrimitiveType; 17] = [
        PrimitiveType::InvalidType,
        PrimitiveType::NullType,
        PrimitiveType::Boolean,
        PrimitiveType::TinyInt,
        PrimitiveType::SmallInt,
        PrimitiveType::Int,
        PrimitiveType::BigInt,
        PrimitiveType::Float,
        PrimitiveType::Double,
        PrimitiveType::Date,
        PrimitiveType::DateTime,
        PrimitiveType::Timestamp,
        PrimitiveType::String,
        PrimitiveType::Binary,
        PrimitiveType::Decimal,
        PrimitiveType::Char,
        PrimitiveType::Varchar,
    ];

    /// SQL keyword for this type
    pub fn sql_name(self) -> &'static str {
        match self {
            PrimitiveType::InvalidType => "INVALID_TYPE",
            PrimitiveType::NullType => "NULL_TYPE",
            PrimitiveType::Boolean => "BOOLEAN",
            PrimitiveType::TinyInt => "TINYINT",
            PrimitiveType::SmallInt => "SMALLINT",
            PrimitiveType::Int => "INT",
            PrimitiveType::BigInt => "BIGINT",
            PrimitiveType::Float => "FLOAT",
            PrimitiveType::Double => "DOUBLE",
            PrimitiveType::Date => "DATE",
            PrimitiveType::DateTime => "DATETIME",
            PrimitiveType::Timestamp => "TIMESTAMP",
            PrimitiveType::String => "STRING",
            PrimitiveType::Binary => "BINARY",
            PrimitiveType::Decimal => "DECIMAL",
            PrimitiveType::Char => "CHAR",
            PrimitiveType::Varchar => "VARCHAR",
        }
    }

    /// Whether values of this type are numeric
    pub fn is_numeric(self) -> bool {
        matches!(
            self,
            PrimitiveType::TinyInt
                | PrimitiveType::SmallInt
                | PrimitiveType::Int
                | PrimitiveType::BigInt
                | PrimitiveType::Float
                | PrimitiveType::Double
                | PrimitiveType::Decimal
        )
    }

    /// Whether values of this type are character strings
    pub fn is_string(self) -> bool {
        matches!(
            self,
            PrimitiveType::String | PrimitiveType::Varchar | PrimitiveType::Char
        )
    }
}

impl fmt::Display for PrimitiveType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.sql_name())
    }
}

/// Error returned when a type name cannot be parsed
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TypeParseError {
    #[error("Unknown type name: {0}")]
    UnknownType(String),

    #[error("Invalid type parameters for {ty}: {reason}")]
    InvalidParameters { ty: String, reason: String },
}

impl FromStr for PrimitiveType {
    type Err = TypeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.trim().to_ascii_uppercase();
        PrimitiveType::ALL
            .into_iter()
            .find(|t| t.sql_name() == upper)
            .ok_or_else(|| TypeParseError::UnknownType(s.to_string()))
    }
}

/// A scalar type: a primitive type with its optional parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Type {
    /// Underlying primitive type
    pub primitive: PrimitiveType,
    /// Length for CHAR / VARCHAR
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub len: Option<u32>,
    /// Precision for DECIMAL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub precision: Option<u32>,
    /// Scale for DECIMAL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scale: Option<u32>,
}

impl Type {
    /// Sentinel type used where no real type applies (e.g. search descriptors)
    pub const INVALID: Type = Type::new(PrimitiveType::InvalidType);
    pub const NULL: Type = Type::new(PrimitiveType::NullType);
    pub const BOOLEAN: Type = Type::new(PrimitiveType::Boolean);
    pub const TINYINT: Type = Type::new(PrimitiveType::TinyInt);
    pub const SMALLINT: Type = Type::new(PrimitiveType::SmallInt);
    pub const INT: Type = Type::new(PrimitiveType::Int);
    pub const BIGINT: Type = Type::new(PrimitiveType::BigInt);
    pub const FLOAT: Type = Type::new(PrimitiveType::Float);
    pub const DOUBLE: Type = Type::new(PrimitiveType::Double);
    pub const DATE: Type = Type::new(PrimitiveType::Date);
    pub const DATETIME: Type = Type::new(PrimitiveType::DateTime);
    pub const TIMESTAMP: Type = Type::new(PrimitiveType::Timestamp);
    pub const STRING: Type = Type::new(PrimitiveType::String);
    pub const BINARY: Type = Type::new(PrimitiveType::Binary);
    /// DECIMAL without precision/scale, matching any decimal
    pub const DECIMAL: Type = Type::new(PrimitiveType::Decimal);

    /// Create an unparameterized type
    pub const fn new(primitive: PrimitiveType) -> Self {
        Self {
            primitive,
            len: None,
            precision: None,
            scale: None,
        }
    }

    /// DECIMAL(precision, scale)
    pub const fn decimal(precision: u32, scale: u32) -> Self {
        Self {
            primitive: PrimitiveType::Decimal,
            len: None,
            precision: Some(precision),
            scale: Some(scale),
        }
    }

    /// CHAR(len)
    pub const fn char(len: u32) -> Self {
        Self {
            primitive: PrimitiveType::Char,
            len: Some(len),
            precision: None,
            scale: None,
        }
    }

    /// VARCHAR(len)
    pub const fn varchar(len: u32) -> Self {
        Self {
            primitive: PrimitiveType::Varchar,
            len: Some(len),
            precision: None,
            scale: None,
        }
    }

    /// Primitive type of this scalar type
    pub fn primitive_type(&self) -> PrimitiveType {
        self.primitive
    }

    /// Whether this is the invalid sentinel
    pub fn is_invalid(&self) -> bool {
        self.primitive == PrimitiveType::InvalidType
    }

    /// Whether this is DECIMAL with no precision or scale
    pub fn is_wildcard_decimal(&self) -> bool {
        self.primitive == PrimitiveType::Decimal && self.precision.is_none()
    }

    /// Render as SQL, e.g. `DECIMAL(10,2)`
    pub fn to_sql(&self) -> String {
        match (self.primitive, self.len, self.precision, self.scale) {
            (PrimitiveType::Decimal, _, Some(p), Some(s)) => format!("DECIMAL({},{})", p, s),
            (PrimitiveType::Char | PrimitiveType::Varchar, Some(len), _, _) => {
                format!("{}({})", self.primitive.sql_name(), len)
            }
            _ => self.primitive.sql_name().to_string(),
        }
    }
}

impl From<PrimitiveType> for Type {
    fn from(primitive: PrimitiveType) -> Self {
        Type::new(primitive)
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_sql())
    }
}

impl FromStr for Type {
    type Err = TypeParseError;

    /// Parse `INT`, `DECIMAL(10,2)`, `VARCHAR(20)`, `CHAR(5)`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let Some(open) = s.find('(') else {
            return s.parse::<PrimitiveType>().map(Type::new);
        };

        let invalid = |reason: &str| TypeParseError::InvalidParameters {
            ty: s.to_string(),
            reason: reason.to_string(),
        };

        let primitive: PrimitiveType = s[..open].parse()?;
        let params = s[open + 1..]
            .strip_suffix(')')
            .ok_or_else(|| invalid("missing closing parenthesis"))?;
        let values = params
            .split(',')
            .map(|p| p.trim().parse::<u32>())
            .collect::<Result<Vec<_>, _>>()
            .map_err(|_| invalid("parameters must be unsigned integers"))?;

        match (primitive, values.as_slice()) {
            (PrimitiveType::Decimal, [precision, scale]) => Ok(Type::decimal(*precision, *scale)),
            (PrimitiveType::Decimal, [precision]) => Ok(Type::decimal(*precision, 0)),
            (PrimitiveType::Char, [len]) => Ok(Type::char(*len)),
            (PrimitiveType::Varchar, [len]) => Ok(Type::varchar(*len)),
            _ => Err(invalid("unexpected parameter count")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_primitive_roundtrip_through_sql_name() {
        for ty in PrimitiveType::ALL {
            assert_eq!(ty.sql_name().parse::<PrimitiveType>().unwrap(), ty);
        }
    }

    // Successor in declaration order. The match is exhaustive, so a new
    // variant has to be linked in here before this module compiles.
    fn declared_after(ty: PrimitiveType) -> Option<PrimitiveType> {
        use PrimitiveType::*;
        match ty {
            InvalidType => Some(NullType),
            NullType => Some(Boolean),
            Boolean => Some(TinyInt),
            TinyInt => Some(SmallInt),
            SmallInt => Some(Int),
            Int => Some(BigInt),
            BigInt => Some(Float),
            Float => Some(Double),
            Double => Some(Date),
            Date => Some(DateTime),
            DateTime => Some(Timestamp),
            Timestamp => Some(String),
            String => Some(Binary),
            Binary => Some(Decimal),
            Decimal => Some(Char),
            Char => Some(Varchar),
            Varchar => None,
        }
    }

    #[test]
    fn test_all_lists_every_variant_in_order() {
        let declared: Vec<PrimitiveType> =
            std::iter::successors(Some(PrimitiveType::InvalidType), |t| declared_after(*t))
                .collect();
        assert_eq!(declared, PrimitiveType::ALL.to_vec());

        for (index, ty) in PrimitiveType::ALL.into_iter().enumerate() {
            assert_eq!(ty as usize, index, "{ty} out of declaration order");
        }

        let mut names: Vec<&str> = PrimitiveType::ALL.iter().map(|t| t.sql_name()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), PrimitiveType::ALL.len());
    }

    #[test]
    fn test_parse_parameterized_types() {
        assert_eq!("decimal(10, 2)".parse::<Type>().unwrap(), Type::decimal(10, 2));
        assert_eq!("VARCHAR(20)".parse::<Type>().unwrap(), Type::varchar(20));
        assert_eq!("CHAR(5)".parse::<Type>().unwrap(), Type::char(5));
        assert_eq!("int".parse::<Type>().unwrap(), Type::INT);
    }

    #[test]
    fn test_parse_errors() {
        assert!(matches!(
            "NUMBER".parse::<Type>(),
            Err(TypeParseError::UnknownType(_))
        ));
        assert!(matches!(
            "INT(4)".parse::<Type>(),
            Err(TypeParseError::InvalidParameters { .. })
        ));
        assert!(matches!(
            "DECIMAL(10,2".parse::<Type>(),
            Err(TypeParseError::InvalidParameters { .. })
        ));
    }

    #[test]
    fn test_to_sql() {
        assert_eq!(Type::decimal(9, 3).to_sql(), "DECIMAL(9,3)");
        assert_eq!(Type::DECIMAL.to_sql(), "DECIMAL");
        assert_eq!(Type::varchar(8).to_string(), "VARCHAR(8)");
        assert_eq!(Type::INVALID.to_string(), "INVALID_TYPE");
    }

    #[test]
    fn test_wildcard_decimal() {
        assert!(Type::DECIMAL.is_wildcard_decimal());
        assert!(!Type::decimal(5, 1).is_wildcard_decimal());
        assert!(!Type::INT.is_wildcard_decimal());
    }
}
