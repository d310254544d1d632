// ABOUTME: Environment configuration management for deployment-specific settings
// ABOUTME: Parses environment variables into a typed ServerConfig with validation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Environment-based configuration management
//!
//! All settings come from environment variables; there is no configuration
//! file. A variable that is set but cannot be parsed is a configuration error
//! rather than a silent fallback to the default.

use std::env;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use somatrack_core::constants::{hydration, labs, storage};
use somatrack_core::errors::{AppError, AppResult};
use somatrack_intelligence::ComparisonConfig;
use tracing::info;

/// Deployment environment
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Local development
    #[default]
    Development,
    /// Production deployment
    Production,
    /// Automated tests
    Testing,
}

impl Environment {
    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "production" | "prod" => Self::Production,
            "testing" | "test" => Self::Testing,
            _ => Self::Development,
        }
    }

    /// Check if this is a production environment
    #[must_use]
    pub const fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Development => write!(f, "development"),
            Self::Production => write!(f, "production"),
            Self::Testing => write!(f, "testing"),
        }
    }
}

/// Environment variable names
pub mod env_keys {
    /// Deployment environment
    pub const ENVIRONMENT: &str = "ENVIRONMENT";
    /// Base URL for photo objects
    pub const MEDIA_BASE_URL: &str = "SOMATRACK_MEDIA_BASE_URL";
    /// Hydration goal applied to users without one (mL)
    pub const DEFAULT_HYDRATION_GOAL_ML: &str = "SOMATRACK_DEFAULT_HYDRATION_GOAL_ML";
    /// Maximum lab summary length
    pub const LAB_SUMMARY_MAX_CHARS: &str = "SOMATRACK_LAB_SUMMARY_MAX_CHARS";
    /// Significant segment delta (%)
    pub const COMPARE_SIGNIFICANCE_PCT: &str = "SOMATRACK_COMPARE_SIGNIFICANCE_PCT";
    /// Minimum confidence for a visible-change verdict
    pub const COMPARE_MIN_CONFIDENCE: &str = "SOMATRACK_COMPARE_MIN_CONFIDENCE";
    /// Waist delta (%) for the fat hint
    pub const COMPARE_FAT_HINT_PCT: &str = "SOMATRACK_COMPARE_FAT_HINT_PCT";
    /// Shoulder shift for the posture hint
    pub const COMPARE_POSTURE_SHIFT: &str = "SOMATRACK_COMPARE_POSTURE_SHIFT";
}

/// Application configuration shared by the services
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Deployment environment
    pub environment: Environment,
    /// Base URL photo object URLs are built from (no trailing slash)
    pub media_base_url: String,
    /// Hydration goal for users who never set one (mL)
    pub default_hydration_goal_ml: u32,
    /// Maximum lab summary length (characters)
    pub lab_summary_max_chars: usize,
    /// Body comparison thresholds
    pub comparison: ComparisonConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            environment: Environment::default(),
            media_base_url: storage::DEFAULT_MEDIA_BASE_URL.to_owned(),
            default_hydration_goal_ml: hydration::DEFAULT_DAILY_GOAL_ML,
            lab_summary_max_chars: labs::DEFAULT_SUMMARY_MAX_CHARS,
            comparison: ComparisonConfig::default(),
        }
    }
}

impl ServerConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns `ErrorCode::ConfigInvalid` if a variable is set to an
    /// unparseable value, or if the resulting configuration fails validation
    pub fn from_env() -> AppResult<Self> {
        let defaults = Self::default();
        let comparison = ComparisonConfig {
            significant_delta_pct: parse_env_or(
                env_keys::COMPARE_SIGNIFICANCE_PCT,
                defaults.comparison.significant_delta_pct,
            )?,
            min_verdict_confidence: parse_env_or(
                env_keys::COMPARE_MIN_CONFIDENCE,
                defaults.comparison.min_verdict_confidence,
            )?,
            fat_hint_delta_pct: parse_env_or(
                env_keys::COMPARE_FAT_HINT_PCT,
                defaults.comparison.fat_hint_delta_pct,
            )?,
            posture_shift_threshold: parse_env_or(
                env_keys::COMPARE_POSTURE_SHIFT,
                defaults.comparison.posture_shift_threshold,
            )?,
        };

        let config = Self {
            environment: env::var(env_keys::ENVIRONMENT)
                .map_or(defaults.environment, |v| Environment::from_str_or_default(&v)),
            media_base_url: env::var(env_keys::MEDIA_BASE_URL)
                .map_or(defaults.media_base_url, |v| v.trim_end_matches('/').to_owned()),
            default_hydration_goal_ml: parse_env_or(
                env_keys::DEFAULT_HYDRATION_GOAL_ML,
                defaults.default_hydration_goal_ml,
            )?,
            lab_summary_max_chars: parse_env_or(
                env_keys::LAB_SUMMARY_MAX_CHARS,
                defaults.lab_summary_max_chars,
            )?,
            comparison,
        };
        config.validate()?;

        info!(
            environment = %config.environment,
            media_base_url = %config.media_base_url,
            "Configuration loaded from environment"
        );
        Ok(config)
    }

    /// Validate cross-field constraints
    ///
    /// # Errors
    ///
    /// Returns `ErrorCode::ConfigInvalid` describing the first invalid setting
    pub fn validate(&self) -> AppResult<()> {
        if self.media_base_url.is_empty() {
            return Err(AppError::config_invalid(
                env_keys::MEDIA_BASE_URL,
                "must not be empty",
            ));
        }
        if self.default_hydration_goal_ml == 0 {
            return Err(AppError::config_invalid(
                env_keys::DEFAULT_HYDRATION_GOAL_ML,
                "must be greater than zero",
            ));
        }
        if self.lab_summary_max_chars == 0 {
            return Err(AppError::config_invalid(
                env_keys::LAB_SUMMARY_MAX_CHARS,
                "must be greater than zero",
            ));
        }
        self.comparison
            .validate()
            .map_err(|e| AppError::config_invalid("comparison", e.to_string()).with_source(e))
    }
}

/// Parse an environment variable, using `default` when it is unset
fn parse_env_or<T>(key: &str, default: T) -> AppResult<T>
where
    T: FromStr,
    T::Err: fmt::Display,
{
    match env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map_err(|e| AppError::config_invalid(key, format!("cannot parse '{raw}': {e}"))),
        Err(_) => Ok(default),
    }
}
