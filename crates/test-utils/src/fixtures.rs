// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! UDF fixtures
//!
//! User-defined functions are described in YAML, the way a registration
//! DDL would hand them to the catalog. Types with more than one parameter
//! must be quoted inside flow lists:
//!
//! ```yaml
//! - db: udfs
//!   name: fuzzy_match
//!   args: [STRING, VARCHAR(64), "DECIMAL(10,2)"]
//!   var_args: true
//!   returns: DOUBLE
//!   binary_type: NATIVE
//!   location: hdfs://nn:8020/udfs/libfuzzy.so
//!   symbol: FuzzyMatch
//!   prepare_symbol: FuzzyMatchPrepare
//! ```

use serde::Deserialize;
use thiserror::Error;

use scalar_fn_catalog::{
    BinaryDescriptor, BinaryLocation, BinaryType, CatalogError, FunctionArgs, FunctionName,
    FunctionSignature, ScalarFunction, Type, TypeParseError,
};

/// Sample UDFs covering every binary kind and symbol combination
pub const SAMPLE_UDFS: &str = r#"
- db: udfs
  name: fuzzy_match
  args: [STRING, VARCHAR(64)]
  var_args: true
  returns: DOUBLE
  binary_type: NATIVE
  location: hdfs://nn:8020/udfs/libfuzzy.so
  symbol: _Z10FuzzyMatchPN10impala_udf15FunctionContextERKNS_9StringValEiPKS2_
  prepare_symbol: _Z17FuzzyMatchPreparePN10impala_udf15FunctionContextENS0_18FunctionStateScopeE
  close_symbol: _Z15FuzzyMatchClosePN10impala_udf15FunctionContextENS0_18FunctionStateScopeE
- db: udfs
  name: price_with_tax
  args: ["DECIMAL(10,2)", DOUBLE]
  returns: "DECIMAL(12,2)"
  binary_type: INTERPRETED
  location: hdfs://nn:8020/udfs/tax.ll
  symbol: PriceWithTax
- db: udfs
  name: geo_hash
  args: [DOUBLE, DOUBLE, INT]
  returns: STRING
  binary_type: MANAGED
  location: hdfs://nn:8020/udfs/geo.jar
  symbol: com.example.udf.GeoHash
  close_symbol: com.example.udf.GeoHash.close
- db: analytics
  name: is_weekend
  args: [TIMESTAMP]
  returns: BOOLEAN
  binary_type: NATIVE
  location: hdfs://nn:8020/udfs/libdates.so
  symbol: IsWeekend
  user_visible: false
"#;

/// Fixture loading errors
#[derive(Debug, Error)]
pub enum FixtureError {
    #[error("Invalid fixture YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid type in fixture: {0}")]
    Type(#[from] TypeParseError),

    #[error("Invalid function in fixture: {0}")]
    Catalog(#[from] CatalogError),
}

/// One UDF as written in a fixture file
#[derive(Debug, Clone, Deserialize)]
pub struct UdfFixture {
    pub db: String,
    pub name: String,
    #[serde(default)]
    pub args: Vec<String>,
    #[serde(default)]
    pub var_args: bool,
    pub returns: String,
    pub binary_type: BinaryType,
    pub location: Option<String>,
    pub symbol: String,
    pub prepare_symbol: Option<String>,
    pub close_symbol: Option<String>,
    #[serde(default = "default_user_visible")]
    pub user_visible: bool,
}

fn default_user_visible() -> bool {
    true
}

impl UdfFixture {
    /// Build the scalar function this fixture describes
    pub fn to_function(&self) -> Result<ScalarFunction, FixtureError> {
        let arg_types = self
            .args
            .iter()
            .map(|a| a.parse::<Type>())
            .collect::<Result<Vec<_>, _>>()?;
        let signature = FunctionSignature::new(
            FunctionName::new(self.db.clone(), self.name.clone()),
            FunctionArgs::new(arg_types, self.var_args),
            self.returns.parse()?,
        );
        let location = self.location.clone().map(BinaryLocation::new);
        let binary = BinaryDescriptor::new(self.binary_type, location)?;

        Ok(ScalarFunction::builder(signature)
            .binary(binary)
            .user_visible(self.user_visible)
            .evaluate_symbol(self.symbol.clone())
            .maybe_prepare_symbol(self.prepare_symbol.clone())
            .maybe_close_symbol(self.close_symbol.clone())
            .build()?)
    }
}

/// Parse UDF fixtures from YAML
pub fn parse_udf_fixtures(yaml: &str) -> Result<Vec<UdfFixture>, FixtureError> {
    Ok(serde_yaml::from_str(yaml)?)
}

/// Build every function in a YAML fixture document
pub fn load_udfs(yaml: &str) -> Result<Vec<ScalarFunction>, FixtureError> {
    parse_udf_fixtures(yaml)?
        .iter()
        .map(UdfFixture::to_function)
        .collect()
}

/// The functions in [`SAMPLE_UDFS`]
pub fn sample_udfs() -> Vec<ScalarFunction> {
    load_udfs(SAMPLE_UDFS).expect("SAMPLE_UDFS fixture is valid")
}

#[cfg(test)]
mod tests {
    use super::*;
    use scalar_fn_catalog::CatalogFunction;

    #[test]
    fn test_sample_udfs_load() {
        let udfs = sample_udfs();
        assert_eq!(udfs.len(), 4);

        let fuzzy = &udfs[0];
        assert!(fuzzy.has_var_args());
        assert_eq!(fuzzy.arg_types(), &[Type::STRING, Type::varchar(64)]);
        assert!(fuzzy.prepare_symbol().is_some());

        let tax = &udfs[1];
        assert_eq!(tax.arg_types(), &[Type::decimal(10, 2), Type::DOUBLE]);
        assert_eq!(tax.return_type(), Type::decimal(12, 2));
        assert_eq!(tax.binary_type(), BinaryType::Interpreted);
        assert!(tax.close_symbol().is_none());

        assert!(!udfs[3].is_user_visible());
    }

    #[test]
    fn test_decimal_parameters_must_be_quoted_in_flow_lists() {
        let quoted = r#"
- db: udfs
  name: scale
  args: ["DECIMAL(9,3)"]
  returns: "DECIMAL(9,3)"
  binary_type: NATIVE
  location: hdfs:///scale.so
  symbol: Scale
"#;
        let udfs = load_udfs(quoted).unwrap();
        assert_eq!(udfs[0].arg_types(), &[Type::decimal(9, 3)]);

        // An unquoted comma splits the type into two list elements.
        let unquoted = quoted.replace("[\"DECIMAL(9,3)\"]", "[DECIMAL(9,3)]");
        let fixtures = parse_udf_fixtures(&unquoted).unwrap();
        assert_eq!(fixtures[0].args, vec!["DECIMAL(9", "3)"]);
        assert!(matches!(load_udfs(&unquoted), Err(FixtureError::Type(_))));
    }

    #[test]
    fn test_bad_type_reported() {
        let yaml = r#"
- db: udfs
  name: broken
  args: [NUMBER]
  returns: INT
  binary_type: NATIVE
  symbol: Broken
"#;
        assert!(matches!(load_udfs(yaml), Err(FixtureError::Type(_))));
    }

    #[test]
    fn test_builtin_with_location_reported() {
        let yaml = r#"
- db: udfs
  name: broken
  returns: INT
  binary_type: BUILTIN
  location: hdfs:///x.so
  symbol: Broken
"#;
        assert!(matches!(load_udfs(yaml), Err(FixtureError::Catalog(_))));
    }
}
