// ABOUTME: Unified error handling for the Forma coaching engine
// ABOUTME: Defines error codes, the CoachError type, and structured error payloads
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Forma Fitness

//! # Unified Error Handling
//!
//! Central error type used across the engine. Serving paths never panic on
//! recoverable failures: they convert a [`CoachError`] (or a domain error)
//! into an [`ErrorPayload`] so callers can degrade gracefully.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Standard error codes used throughout the engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CoachErrorCode {
    /// Input value failed validation (out of range, malformed)
    #[serde(rename = "INVALID_INPUT")]
    InvalidInput,
    /// A requested resource does not exist (agent bundle, catalog entry)
    #[serde(rename = "RESOURCE_NOT_FOUND")]
    ResourceNotFound,
    /// A resource exists but cannot currently serve requests (empty catalog)
    #[serde(rename = "RESOURCE_UNAVAILABLE")]
    ResourceUnavailable,
    /// Reading or writing a persisted artifact failed
    #[serde(rename = "STORAGE_ERROR")]
    StorageError,
    /// A persisted artifact could not be encoded or decoded
    #[serde(rename = "SERIALIZATION_ERROR")]
    SerializationError,
    /// Configuration is missing or invalid
    #[serde(rename = "CONFIG_ERROR")]
    ConfigError,
    /// Unexpected internal failure
    #[serde(rename = "INTERNAL_ERROR")]
    InternalError,
}

impl CoachErrorCode {
    /// Stable string form of the code, matching the serde representation
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::InvalidInput => "INVALID_INPUT",
            Self::ResourceNotFound => "RESOURCE_NOT_FOUND",
            Self::ResourceUnavailable => "RESOURCE_UNAVAILABLE",
            Self::StorageError => "STORAGE_ERROR",
            Self::SerializationError => "SERIALIZATION_ERROR",
            Self::ConfigError => "CONFIG_ERROR",
            Self::InternalError => "INTERNAL_ERROR",
        }
    }
}

impl fmt::Display for CoachErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unified application error carrying a code and a human-readable message
#[derive(Debug, Error)]
#[error("{code}: {message}")]
pub struct CoachError {
    /// Machine-readable error code
    pub code: CoachErrorCode,
    /// Human-readable description
    pub message: String,
}

impl CoachError {
    /// Create an error with an explicit code
    pub fn new(code: CoachErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    /// Input validation failure
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::new(CoachErrorCode::InvalidInput, message)
    }

    /// Missing resource (agent bundle, catalog file)
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(CoachErrorCode::ResourceNotFound, message)
    }

    /// Resource present but unusable (e.g. empty catalog)
    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::new(CoachErrorCode::ResourceUnavailable, message)
    }

    /// Filesystem-level failure while persisting or loading artifacts
    pub fn storage(message: impl Into<String>) -> Self {
        Self::new(CoachErrorCode::StorageError, message)
    }

    /// Encode/decode failure for a persisted artifact
    pub fn serialization(message: impl Into<String>) -> Self {
        Self::new(CoachErrorCode::SerializationError, message)
    }

    /// Missing or invalid configuration
    pub fn config(message: impl Into<String>) -> Self {
        Self::new(CoachErrorCode::ConfigError, message)
    }

    /// Unexpected internal failure
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(CoachErrorCode::InternalError, message)
    }

    /// Convert into the structured payload handed to callers
    #[must_use]
    pub fn payload(&self) -> ErrorPayload {
        ErrorPayload {
            code: self.code,
            message: self.message.clone(),
        }
    }
}

impl From<serde_json::Error> for CoachError {
    fn from(err: serde_json::Error) -> Self {
        Self::serialization(err.to_string())
    }
}

impl From<std::io::Error> for CoachError {
    fn from(err: std::io::Error) -> Self {
        Self::storage(err.to_string())
    }
}

/// Structured error payload returned by degrading serving paths
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorPayload {
    /// Machine-readable error code
    pub code: CoachErrorCode,
    /// Human-readable description
    pub message: String,
}

/// Result alias for engine operations
pub type CoachResult<T> = Result<T, CoachError>;
