// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! Builtin scalar function definitions
//!
//! This module contains the operator and named-function tables registered at startup.

pub mod functions;
pub mod operators;
