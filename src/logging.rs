// ABOUTME: Logging configuration and structured logging setup for the planner and CLI
// ABOUTME: Configures log level, output format, and structured planning event helpers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 nutriplan contributors

//! Structured logging configuration
//!
//! Logs go to stderr so that the CLI can print plans as JSON on stdout.

use std::env;
use std::io;

use anyhow::Result;
use nutriplan_core::constants::service_names;
use nutriplan_core::errors::AppError;
use nutriplan_core::models::{DailyMealPlan, MealSlot, PlanStatus, ProfileId, SuggestionStatus};
use serde_json::json;
use tracing::{info, warn, Level};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Logging configuration
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,
    /// Output format (json, pretty, compact)
    pub format: LogFormat,
    /// Include source file and line numbers
    pub include_location: bool,
    /// Include thread information
    pub include_thread: bool,
    /// Service name for structured logging
    pub service_name: String,
    /// Service version
    pub service_version: String,
}

/// Log output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// `JSON` format for machine consumption
    Json,
    /// Pretty format for development
    Pretty,
    /// Compact format, the CLI default
    Compact,
}

impl LogFormat {
    /// Parse a format name, defaulting to `Compact`
    #[must_use]
    pub fn from_str_lossy(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "json" => Self::Json,
            "pretty" => Self::Pretty,
            _ => Self::Compact,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".into(),
            format: LogFormat::Compact,
            include_location: false,
            include_thread: false,
            service_name: service_names::NUTRIPLAN.into(),
            service_version: env!("CARGO_PKG_VERSION").to_owned(),
        }
    }
}

impl LoggingConfig {
    /// Create logging configuration from environment variables
    #[must_use]
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            level: env::var("RUST_LOG").unwrap_or(defaults.level),
            format: env::var("LOG_FORMAT")
                .map_or(defaults.format, |value| LogFormat::from_str_lossy(&value)),
            include_location: env::var("LOG_INCLUDE_LOCATION").is_ok(),
            include_thread: env::var("LOG_INCLUDE_THREAD").is_ok(),
            service_name: env::var("SERVICE_NAME").unwrap_or(defaults.service_name),
            service_version: defaults.service_version,
        }
    }

    /// Same configuration with a different level
    #[must_use]
    pub fn with_level(mut self, level: impl Into<String>) -> Self {
        self.level = level.into();
        self
    }

    /// Build the filter used by [`Self::init`]
    #[must_use]
    pub fn env_filter(&self) -> EnvFilter {
        EnvFilter::new(&self.level).add_directive(
            format!("nutriplan={}", self.level)
                .parse()
                .unwrap_or_else(|_| Level::INFO.into()),
        )
    }

    /// Initialize the global tracing subscriber
    ///
    /// # Errors
    ///
    /// Returns an error if a global subscriber is already installed
    pub fn init(&self) -> Result<()> {
        let registry = tracing_subscriber::registry().with(self.env_filter());

        match self.format {
            LogFormat::Json => {
                let json_layer = fmt::layer()
                    .with_file(self.include_location)
                    .with_line_number(self.include_location)
                    .with_thread_ids(self.include_thread)
                    .with_thread_names(self.include_thread)
                    .with_target(true)
                    .with_writer(io::stderr)
                    .json();
                registry.with(json_layer).try_init()?;
            }
            LogFormat::Pretty => {
                let pretty_layer = fmt::layer()
                    .with_file(self.include_location)
                    .with_line_number(self.include_location)
                    .with_thread_ids(self.include_thread)
                    .with_thread_names(self.include_thread)
                    .with_target(true)
                    .with_writer(io::stderr);
                registry.with(pretty_layer).try_init()?;
            }
            LogFormat::Compact => {
                let compact_layer = fmt::layer()
                    .compact()
                    .with_file(false)
                    .with_line_number(false)
                    .with_target(false)
                    .with_writer(io::stderr);
                registry.with(compact_layer).try_init()?;
            }
        }

        self.log_startup_info();
        Ok(())
    }

    fn log_startup_info(&self) {
        let config_summary = json!({
            "service": {
                "name": self.service_name,
                "version": self.service_version,
            },
            "logging": {
                "level": self.level,
                "format": format!("{:?}", self.format),
            }
        });
        info!(
            service.name = %self.service_name,
            service.version = %self.service_version,
            "Logging initialized: {config_summary}"
        );
    }
}

/// Initialize logging from environment
///
/// # Errors
///
/// Returns an error if logging initialization fails
pub fn init_from_env() -> Result<()> {
    LoggingConfig::from_env().init()
}

/// Structured events emitted around plan generation
pub struct PlanLogger;

impl PlanLogger {
    /// Log a finished plan with per-slot outcome counts
    pub fn log_plan_generated(plan: &DailyMealPlan) {
        let planned = plan.suggestions().filter(|s| s.is_planned()).count();
        match &plan.status {
            PlanStatus::Fallback { reason } => warn!(
                plan.id = %plan.id,
                plan.subject = %plan.subject_id,
                plan.date = %plan.date,
                plan.reason = %reason,
                "Meal plan fell back to an empty plan"
            ),
            status => info!(
                plan.id = %plan.id,
                plan.subject = %plan.subject_id,
                plan.date = %plan.date,
                plan.planned_slots = planned,
                plan.total_calories = plan.totals.calories,
                plan.target_calories = plan.targets.calories,
                plan.status = ?status,
                "Meal plan generated"
            ),
        }
    }

    /// Log a slot that ended in a placeholder
    pub fn log_slot_placeholder(subject: ProfileId, slot: MealSlot, status: &SuggestionStatus) {
        match status {
            SuggestionStatus::Planned => {}
            SuggestionStatus::NoSuitableRecipe => info!(
                plan.subject = %subject,
                meal.slot = %slot,
                "No suitable recipe for slot"
            ),
            SuggestionStatus::Failed { reason } => warn!(
                plan.subject = %subject,
                meal.slot = %slot,
                slot.reason = %reason,
                "Slot computation failed"
            ),
        }
    }

    /// Log a collaborator fetch that failed
    ///
    /// Missing or unavailable data is logged at info, anything else at warn.
    pub fn log_fetch_failure(collaborator: &str, operation: &str, error: &AppError) {
        let kind = fetch_failure_kind(error);
        if error.code.is_absence() {
            info!(
                fetch.collaborator = %collaborator,
                fetch.operation = %operation,
                fetch.kind = kind,
                fetch.error = %error,
                "Collaborator had no data"
            );
        } else {
            warn!(
                fetch.collaborator = %collaborator,
                fetch.operation = %operation,
                fetch.kind = kind,
                fetch.error = %error,
                "Collaborator fetch failed"
            );
        }
    }
}

/// `no_data` for absence codes, `failed` otherwise
#[must_use]
pub const fn fetch_failure_kind(error: &AppError) -> &'static str {
    if error.code.is_absence() {
        "no_data"
    } else {
        "failed"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_format_parsing() {
        assert_eq!(LogFormat::from_str_lossy("JSON"), LogFormat::Json);
        assert_eq!(LogFormat::from_str_lossy("pretty"), LogFormat::Pretty);
        assert_eq!(LogFormat::from_str_lossy("anything"), LogFormat::Compact);
    }

    #[test]
    fn test_fetch_failure_kind_separates_absence() {
        assert_eq!(fetch_failure_kind(&AppError::not_found("Recipe 4")), "no_data");
        assert_eq!(fetch_failure_kind(&AppError::unavailable("pantry offline")), "no_data");
        assert_eq!(
            fetch_failure_kind(&AppError::invalid_input("bad recipe row")),
            "failed"
        );
    }

    #[test]
    fn test_with_level_overrides_default() {
        let config = LoggingConfig::default().with_level("debug");
        assert_eq!(config.level, "debug");
        assert_eq!(config.service_name, service_names::NUTRIPLAN);
    }
}
