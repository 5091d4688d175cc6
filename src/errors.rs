// ABOUTME: Unified error handling for the Stride training engine
// ABOUTME: Defines error codes, the AppError type, and the AppResult alias
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Training Log

//! # Unified Error Handling
//!
//! The engine's algorithms are total functions and never fail; errors arise
//! only at the storage boundary and in the service layer's business rules.
//! This module provides the standard error type used across both.

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter, Result as FmtResult};
use thiserror::Error;

/// Standard error codes used throughout the engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorCode {
    /// Malformed or rejected input
    #[serde(rename = "INVALID_INPUT")]
    InvalidInput,
    /// A referenced user, group, or record does not exist
    #[serde(rename = "RESOURCE_NOT_FOUND")]
    ResourceNotFound,
    /// Recording a skip today is not permitted
    #[serde(rename = "SKIP_NOT_ALLOWED")]
    SkipNotAllowed,
    /// The storage collaborator failed or is unreachable
    #[serde(rename = "STORAGE_UNAVAILABLE")]
    StorageUnavailable,
    /// Engine configuration could not be applied
    #[serde(rename = "CONFIG_INVALID")]
    ConfigInvalid,
    /// Unexpected internal failure
    #[serde(rename = "INTERNAL_ERROR")]
    InternalError,
}

impl ErrorCode {
    /// Stable string representation used in logs and serialized payloads
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::InvalidInput => "INVALID_INPUT",
            Self::ResourceNotFound => "RESOURCE_NOT_FOUND",
            Self::SkipNotAllowed => "SKIP_NOT_ALLOWED",
            Self::StorageUnavailable => "STORAGE_UNAVAILABLE",
            Self::ConfigInvalid => "CONFIG_INVALID",
            Self::InternalError => "INTERNAL_ERROR",
        }
    }
}

impl Display for ErrorCode {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.as_str())
    }
}

/// Application error carrying a code, a message, and an optional source
#[derive(Debug, Error)]
#[error("{code}: {message}")]
pub struct AppError {
    /// Error code
    pub code: ErrorCode,
    /// Human-readable error message
    pub message: String,
    /// Source error for error chaining
    #[source]
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl AppError {
    /// Create a new `AppError` with the given code and message
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            source: None,
        }
    }

    /// Malformed or rejected input
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidInput, message)
    }

    /// A referenced resource does not exist
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ResourceNotFound, message)
    }

    /// Recording a skip today is not permitted
    pub fn skip_not_allowed(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::SkipNotAllowed, message)
    }

    /// Invalid engine configuration
    pub fn config_invalid(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ConfigInvalid, message)
    }

    /// Unexpected internal failure
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InternalError, message)
    }

    /// Storage collaborator failure, preserving the source chain
    #[must_use]
    pub fn storage_unavailable(source: anyhow::Error) -> Self {
        let message = source.to_string();
        Self {
            code: ErrorCode::StorageUnavailable,
            message,
            source: Some(source.into()),
        }
    }
}

/// Failures crossing the storage seam surface as `anyhow::Error`; the
/// service layer propagates them rather than swallowing them.
impl From<anyhow::Error> for AppError {
    fn from(err: anyhow::Error) -> Self {
        Self::storage_unavailable(err)
    }
}

/// Result type alias for engine operations
pub type AppResult<T> = Result<T, AppError>;
