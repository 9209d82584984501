// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! Testing utilities for the scalar function catalog
//!
//! This crate provides common testing components including:
//! - A recording mock symbol resolver and descriptor sink
//! - UDF fixtures loaded from YAML
//! - Catalog-specific assertions

pub mod assertions;
pub mod fixtures;
pub mod mock_resolver;

// Re-exports for convenience
pub use assertions::CatalogAssertions;
pub use fixtures::{
    FixtureError, SAMPLE_UDFS, UdfFixture, load_udfs, parse_udf_fixtures, sample_udfs,
};
pub use mock_resolver::{MockResolver, MockSink, RecordedLookup};

/// Install a test subscriber honoring `RUST_LOG`
///
/// Safe to call from every test; only the first call installs.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
