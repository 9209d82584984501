// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! Integration tests for the catalog crate

use std::sync::{Arc, Mutex};

use scalar_fn_catalog::{
    BinaryDescriptor, BinaryLocation, BinaryType, BuiltinFactory, BuiltinScalarDef,
    CatalogConfig, CatalogError, CatalogFunction, CatalogResult, DescriptorSink,
    FunctionArgs, FunctionCatalog, FunctionDescriptor, FunctionName, FunctionSignature,
    ScalarFunction, StaticSymbolTable, SymbolLookup, SymbolNotFound, SymbolResolver,
    SymbolType, Type, mangle_operator,
};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

// Resolver that records every lookup and resolves a fixed set of symbols
struct RecordingResolver {
    inner: StaticSymbolTable,
    lookups: Mutex<Vec<(String, SymbolType)>>,
}

impl RecordingResolver {
    fn new(symbols: &[&str]) -> Self {
        Self {
            inner: StaticSymbolTable::from_symbols(symbols.iter().copied()),
            lookups: Mutex::new(Vec::new()),
        }
    }

    fn lookups(&self) -> Vec<(String, SymbolType)> {
        self.lookups.lock().unwrap().clone()
    }
}

impl SymbolResolver for RecordingResolver {
    fn resolve(&self, lookup: &SymbolLookup<'_>) -> Result<String, SymbolNotFound> {
        self.lookups
            .lock()
            .unwrap()
            .push((lookup.symbol.to_string(), lookup.symbol_type));
        self.inner.resolve(lookup)
    }
}

#[derive(Default)]
struct CollectingSink {
    batches: Mutex<Vec<Vec<FunctionDescriptor>>>,
}

#[async_trait::async_trait]
impl DescriptorSink for CollectingSink {
    async fn publish(&self, descriptors: Vec<FunctionDescriptor>) -> CatalogResult<()> {
        self.batches.lock().unwrap().push(descriptors);
        Ok(())
    }
}

struct FailingSink;

#[async_trait::async_trait]
impl DescriptorSink for FailingSink {
    async fn publish(&self, _descriptors: Vec<FunctionDescriptor>) -> CatalogResult<()> {
        Err(CatalogError::PropagationFailed("statestore unreachable".to_string()))
    }
}

fn udf(prepare: Option<&str>, close: Option<&str>) -> ScalarFunction {
    let signature = FunctionSignature::new(
        FunctionName::new("udfs", "fuzzy_match"),
        FunctionArgs::new(vec![Type::STRING, Type::varchar(64)], true),
        Type::DOUBLE,
    );
    let binary = BinaryDescriptor::external(
        BinaryType::Native,
        BinaryLocation::new("hdfs://nn:8020/udfs/libfuzzy.so"),
    )
    .unwrap();
    ScalarFunction::new(
        signature,
        binary,
        "_Z10FuzzyMatchPN10impala_udf15FunctionContextE",
        prepare.map(str::to_string),
        close.map(str::to_string),
    )
}

#[test]
fn test_mangling_examples() {
    assert_eq!(
        mangle_operator("Add", &[Type::TINYINT, Type::TINYINT]).unwrap(),
        "impala::Operators::Add_TinyIntVal_TinyIntVal"
    );
    assert_eq!(
        mangle_operator("Add", &[Type::DECIMAL, Type::INT]).unwrap(),
        "impala::DecimalOperators::Add_DecimalVal_IntVal"
    );
}

#[test]
fn test_builtin_resolution_single_evaluate_lookup() {
    init_tracing();
    let config = CatalogConfig::default();
    let resolver = RecordingResolver::new(&["impala::StringFunctions::Upper"]);
    let factory = BuiltinFactory::new(&config, &resolver);

    let upper = factory
        .create_builtin(BuiltinScalarDef::new(
            "upper",
            vec![Type::STRING],
            Type::STRING,
            "impala::StringFunctions::Upper",
        ))
        .unwrap();

    assert_eq!(upper.evaluate_symbol(), "impala::StringFunctions::Upper");
    assert_eq!(upper.binary_type(), BinaryType::Builtin);
    assert!(upper.location().is_none());
    assert_eq!(
        resolver.lookups(),
        vec![("impala::StringFunctions::Upper".to_string(), SymbolType::Evaluate)]
    );
}

#[test]
fn test_builtin_unresolvable_symbol() {
    init_tracing();
    let config = CatalogConfig::default();
    let resolver = RecordingResolver::new(&[]);
    let factory = BuiltinFactory::new(&config, &resolver);

    let result = factory.create_builtin(BuiltinScalarDef::new(
        "upper",
        vec![Type::STRING],
        Type::STRING,
        "impala::StringFunctions::Upper",
    ));

    assert!(matches!(result, Err(CatalogError::SymbolNotFound { .. })));
    assert_eq!(resolver.lookups().len(), 1);
}

#[test]
fn test_prepare_and_close_are_not_resolved() {
    // Only the evaluate symbol is checked against the binary. Prepare and
    // close symbols are stored as given, even when the binary lacks them.
    let config = CatalogConfig::default();
    let resolver = RecordingResolver::new(&["impala::StringFunctions::RegexpExtract"]);
    let factory = BuiltinFactory::new(&config, &resolver);

    let f = factory
        .create_builtin(
            BuiltinScalarDef::new(
                "regexp_extract",
                vec![Type::STRING, Type::STRING, Type::BIGINT],
                Type::STRING,
                "impala::StringFunctions::RegexpExtract",
            )
            .with_prepare("impala::StringFunctions::RegexpPrepare")
            .with_close("impala::StringFunctions::RegexpClose"),
        )
        .unwrap();

    assert_eq!(f.prepare_symbol(), Some("impala::StringFunctions::RegexpPrepare"));
    assert_eq!(f.close_symbol(), Some("impala::StringFunctions::RegexpClose"));
    assert!(
        resolver
            .lookups()
            .iter()
            .all(|(_, kind)| *kind == SymbolType::Evaluate)
    );
}

#[test]
fn test_operator_with_explicit_symbol() {
    let config = CatalogConfig::default();
    let resolver = RecordingResolver::new(&["impala::Operators::Bitnot_IntVal"]);
    let factory = BuiltinFactory::new(&config, &resolver);

    let f = factory
        .create_builtin_operator_with_symbol(
            "bitnot",
            "impala::Operators::Bitnot_IntVal",
            vec![Type::INT],
            Type::INT,
        )
        .unwrap();
    assert_eq!(f.evaluate_symbol(), "impala::Operators::Bitnot_IntVal");
    assert!(!f.is_user_visible());
}

#[test]
fn test_unsupported_argument_makes_no_lookup() {
    let config = CatalogConfig::default();
    let resolver = RecordingResolver::new(&[]);
    let factory = BuiltinFactory::new(&config, &resolver);

    let err = factory
        .create_builtin_operator("eq", vec![Type::BINARY, Type::BINARY], Type::BOOLEAN)
        .unwrap_err();
    assert_eq!(err, CatalogError::UnsupportedArgumentType(Type::BINARY));
    assert!(resolver.lookups().is_empty());
}

#[test]
fn test_round_trip_preserves_every_field() {
    for (prepare, close) in [
        (None, None),
        (Some("FuzzyPrepare"), None),
        (None, Some("FuzzyClose")),
        (Some("FuzzyPrepare"), Some("FuzzyClose")),
    ] {
        let original = udf(prepare, close);
        let json = original.to_descriptor().to_json().unwrap();

        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        let scalar = &value["scalar_fn"];
        assert_eq!(scalar.get("prepare_fn_symbol").is_some(), prepare.is_some());
        assert_eq!(scalar.get("close_fn_symbol").is_some(), close.is_some());

        let restored =
            ScalarFunction::from_descriptor(FunctionDescriptor::from_json(&json).unwrap()).unwrap();
        assert_eq!(restored, original);
    }
}

#[test]
fn test_round_trip_builtin_operator() {
    let config = CatalogConfig::default();
    let symbols =
        StaticSymbolTable::from_symbols(["impala::DecimalOperators::Mod_DecimalVal_DecimalVal"]);
    let factory = BuiltinFactory::new(&config, &symbols);
    let f = factory
        .create_builtin_operator("mod", vec![Type::DECIMAL, Type::DECIMAL], Type::DECIMAL)
        .unwrap();

    let descriptor = FunctionDescriptor::from(&f);
    assert!(descriptor.location.is_none());
    assert!(!descriptor.user_visible);
    assert_eq!(ScalarFunction::try_from(descriptor).unwrap(), f);
}

#[test]
fn test_search_descriptor_matches_signature_only() {
    let config = CatalogConfig::default();
    let symbols = StaticSymbolTable::from_symbols(["impala::Operators::Foo_IntVal_IntVal"]);
    let factory = BuiltinFactory::new(&config, &symbols);
    let catalog = FunctionCatalog::new();
    catalog
        .add_function(
            factory
                .create_builtin_operator("foo", vec![Type::INT, Type::INT], Type::BIGINT)
                .unwrap(),
        )
        .unwrap();

    let search = factory.search_descriptor("foo", Some(vec![Type::INT, Type::INT]), false);
    assert!(search.signature().return_type().is_invalid());
    assert_eq!(search.binary_type(), BinaryType::Builtin);

    let found = catalog.get_function(&search).unwrap();
    assert_eq!(found.return_type(), Type::BIGINT);

    let wrong_arity = factory.search_descriptor("foo", Some(vec![Type::INT]), false);
    assert!(catalog.get_function(&wrong_arity).is_none());
    let variadic = factory.search_descriptor("foo", Some(vec![Type::INT, Type::INT]), true);
    assert!(catalog.get_function(&variadic).is_none());
    let other_name = factory.search_descriptor("bar", Some(vec![Type::INT, Type::INT]), false);
    assert!(catalog.get_function(&other_name).is_none());
}

#[test]
fn test_concurrent_readers() {
    let catalog = Arc::new(FunctionCatalog::new());
    catalog.add_function(udf(None, None)).unwrap();
    let search = scalar_fn_catalog::SearchDescriptor::new(
        FunctionName::new("udfs", "fuzzy_match"),
        FunctionArgs::new(vec![Type::STRING, Type::varchar(64)], true),
    );

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let catalog = Arc::clone(&catalog);
            let search = search.clone();
            std::thread::spawn(move || {
                (0..100).all(|_| catalog.get_function(&search).is_some())
            })
        })
        .collect();

    for handle in handles {
        assert!(handle.join().unwrap());
    }
}

#[tokio::test]
async fn test_propagate_all_descriptors() {
    let catalog = FunctionCatalog::new();
    catalog.add_function(udf(Some("FuzzyPrepare"), None)).unwrap();

    let sink = CollectingSink::default();
    let count = catalog.propagate(&sink).await.unwrap();
    assert_eq!(count, 1);

    let batches = sink.batches.lock().unwrap();
    assert_eq!(batches.len(), 1);
    assert_eq!(batches[0][0].signature, "udfs.fuzzy_match(STRING, VARCHAR(64)...) RETURNS DOUBLE");
}

#[tokio::test]
async fn test_propagate_failure_surfaces() {
    let catalog = FunctionCatalog::new();
    catalog.add_function(udf(None, None)).unwrap();

    let result = catalog.propagate(&FailingSink).await;
    assert!(matches!(result, Err(CatalogError::PropagationFailed(_))));
}

#[test]
fn test_error_display() {
    let err = CatalogError::UnsupportedArgumentType(Type::DATE);
    assert_eq!(err.to_string(), "Argument type not supported: DATE");

    let err = CatalogError::MissingField("evaluate_symbol");
    assert!(err.to_string().contains("evaluate_symbol"));
}
