// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! Symbol table of the engine binary
//!
//! The engine generates one operator implementation per entry of the
//! operator table and exports every named builtin entry point. This module
//! builds the matching export table for a binary produced from the same
//! definitions.

use scalar_fn_catalog::{CatalogConfig, CatalogResult, OperatorMangler, StaticSymbolTable};

use crate::builtin::{functions, operators};

/// Every symbol exported by an engine binary built from the builtin tables
///
/// # Errors
///
/// `UnsupportedArgumentType` if an operator cannot be mangled.
pub fn engine_symbol_table(config: &CatalogConfig) -> CatalogResult<StaticSymbolTable> {
    let mangler = OperatorMangler::new(config.engine_namespace.clone());
    let mut table = StaticSymbolTable::new();

    for op in operators::all_operators() {
        let symbol = match op.symbol {
            Some(symbol) => symbol.to_string(),
            None => mangler.mangle(op.name, &op.arg_types)?,
        };
        table.insert(symbol.clone(), symbol);
    }

    for def in functions::all_functions() {
        let exported = [Some(def.symbol), def.prepare_symbol, def.close_symbol];
        for symbol in exported.into_iter().flatten() {
            table.insert(symbol.clone(), symbol);
        }
    }

    Ok(table)
}
