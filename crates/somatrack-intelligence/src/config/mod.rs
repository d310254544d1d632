// ABOUTME: Configuration for the body comparison engine thresholds
// ABOUTME: ComparisonConfig with validated defaults and the ConfigError type
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Comparison engine configuration.

use serde::{Deserialize, Serialize};
use somatrack_core::constants::body_comparison::{
    FAT_HINT_DELTA_PCT, MIN_VERDICT_CONFIDENCE, POSTURE_SHIFT_THRESHOLD, SIGNIFICANT_DELTA_PCT,
};
use thiserror::Error;

/// Configuration-related errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// Value outside acceptable range (e.g., confidence not between 0 and 1)
    #[error("Invalid range: {0}")]
    InvalidRange(&'static str),

    /// Value is NaN or infinite
    #[error("Value must be finite: {0}")]
    NotFinite(&'static str),
}

/// Thresholds driving hints and the verdict of a body comparison
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ComparisonConfig {
    /// Minimum `|delta|` (percent) for a segment to count as significant; inclusive
    pub significant_delta_pct: f64,
    /// Minimum global confidence for a "visible change" verdict; inclusive
    pub min_verdict_confidence: f64,
    /// Waist delta (percent) at which the fat hint reports a change; inclusive
    pub fat_hint_delta_pct: f64,
    /// Vertical shoulder shift beyond which a posture hint is produced; exclusive
    pub posture_shift_threshold: f64,
}

impl Default for ComparisonConfig {
    fn default() -> Self {
        Self {
            significant_delta_pct: SIGNIFICANT_DELTA_PCT,
            min_verdict_confidence: MIN_VERDICT_CONFIDENCE,
            fat_hint_delta_pct: FAT_HINT_DELTA_PCT,
            posture_shift_threshold: POSTURE_SHIFT_THRESHOLD,
        }
    }
}

impl ComparisonConfig {
    /// Check that every threshold is usable
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a threshold is non-finite or negative, or if
    /// the minimum verdict confidence lies outside `[0, 1]`
    pub fn validate(&self) -> Result<(), ConfigError> {
        let thresholds = [
            ("significant_delta_pct", self.significant_delta_pct),
            ("min_verdict_confidence", self.min_verdict_confidence),
            ("fat_hint_delta_pct", self.fat_hint_delta_pct),
            ("posture_shift_threshold", self.posture_shift_threshold),
        ];
        for (name, value) in thresholds {
            if !value.is_finite() {
                return Err(ConfigError::NotFinite(name));
            }
            if value < 0.0 {
                return Err(ConfigError::InvalidRange(name));
            }
        }
        if self.min_verdict_confidence > 1.0 {
            return Err(ConfigError::InvalidRange("min_verdict_confidence"));
        }
        Ok(())
    }
}
