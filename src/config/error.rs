// ABOUTME: Configuration error types for planner configuration loading and validation
// ABOUTME: Defines ConfigError enum for range, parse, and weight validation failures
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 nutriplan contributors

use nutriplan_core::errors::AppError;
use thiserror::Error;

/// Configuration validation errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Range bounds are invalid (e.g. minimum above maximum)
    #[error("Invalid range: {0}")]
    InvalidRange(&'static str),

    /// Value could not be parsed
    #[error("Parse error: {0}")]
    Parse(String),

    /// Shares or weights do not add up
    #[error("Invalid weights: {0}")]
    InvalidWeights(&'static str),

    /// A value lies outside its accepted range
    #[error("Value out of range: {0}")]
    ValueOutOfRange(&'static str),
}

impl From<ConfigError> for AppError {
    fn from(error: ConfigError) -> Self {
        let app_error = match error {
            ConfigError::Parse(_) => Self::config(error.to_string()),
            _ => Self::config_invalid(error.to_string()),
        };
        app_error.with_source(error)
    }
}
