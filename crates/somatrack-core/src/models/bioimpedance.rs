// ABOUTME: Bioimpedance measurement models for body composition tracking
// ABOUTME: Measurement records, create/update payloads, and trend summaries
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// New bioimpedance measurement
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewBioimpedance {
    /// Measurement date
    pub measured_at: NaiveDate,
    /// Body weight (kg), must be positive
    pub weight_kg: f64,
    /// Body fat (%), 0-70
    pub fat_pct: f64,
    /// Muscle mass (%), 0-100
    pub muscle_pct: f64,
    /// Visceral fat rating reported by the scale
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visceral_fat: Option<f64>,
}

/// Partial update; absent fields are left untouched
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BioimpedanceUpdate {
    /// New body weight (kg)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight_kg: Option<f64>,
    /// New body fat (%)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fat_pct: Option<f64>,
    /// New muscle mass (%)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub muscle_pct: Option<f64>,
    /// New visceral fat rating
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visceral_fat: Option<f64>,
}

/// Stored bioimpedance measurement
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BioimpedanceRecord {
    /// Record identifier
    pub id: Uuid,
    /// Measurement date
    pub measured_at: NaiveDate,
    /// Body weight (kg)
    pub weight_kg: f64,
    /// Body fat (%)
    pub fat_pct: f64,
    /// Muscle mass (%)
    pub muscle_pct: f64,
    /// Visceral fat rating
    pub visceral_fat: Option<f64>,
}

/// One point of a body composition time series
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BodyCompositionPoint {
    /// Measurement date
    pub measured_at: NaiveDate,
    /// Body weight (kg)
    pub weight_kg: f64,
    /// Body fat (%)
    pub fat_pct: f64,
    /// Muscle mass (%)
    pub muscle_pct: f64,
}

impl From<&BioimpedanceRecord> for BodyCompositionPoint {
    fn from(record: &BioimpedanceRecord) -> Self {
        Self {
            measured_at: record.measured_at,
            weight_kg: record.weight_kg,
            fat_pct: record.fat_pct,
            muscle_pct: record.muscle_pct,
        }
    }
}

/// Direction of body fat over a series of measurements
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum BodyFatTrend {
    /// Latest body fat is below the first measurement
    Falling,
    /// Not enough data, or no decrease
    #[default]
    Stable,
}

/// Chronological body composition summary
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BioimpedanceSummary {
    /// Measurements ordered by date
    pub points: Vec<BodyCompositionPoint>,
    /// Body fat direction across the series
    pub trend: BodyFatTrend,
}
