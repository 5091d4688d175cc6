// ABOUTME: Engine configuration module for the Stride training engine
// ABOUTME: Re-exports environment-based configuration loading
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Training Log

//! Engine configuration management

/// Environment-based engine configuration
pub mod environment;

pub use environment::EngineConfig;
