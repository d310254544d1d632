// ABOUTME: Bioimpedance measurement tracking with validation and trend summaries
// ABOUTME: Per-user CRUD over body composition records
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use somatrack_core::constants::bioimpedance::{MAX_FAT_PCT, MAX_MUSCLE_PCT};
use somatrack_core::errors::{AppError, AppResult};
use somatrack_core::models::{
    BioimpedanceRecord, BioimpedanceSummary, BioimpedanceUpdate, BodyCompositionPoint,
    NewBioimpedance,
};
use somatrack_intelligence::body_composition::body_fat_trend;
use tracing::info;
use uuid::Uuid;

use crate::store::UserStore;

fn validate_weight(weight_kg: f64) -> AppResult<()> {
    if weight_kg.is_finite() && weight_kg > 0.0 {
        Ok(())
    } else {
        Err(AppError::value_out_of_range(
            "weight_kg",
            "must be greater than 0",
        ))
    }
}

fn validate_percentage(field: &str, value: f64, max: f64) -> AppResult<()> {
    if (0.0..=max).contains(&value) {
        Ok(())
    } else {
        Err(AppError::value_out_of_range(
            field,
            format!("must be between 0 and {max}"),
        ))
    }
}

fn validate_update(update: &BioimpedanceUpdate) -> AppResult<()> {
    if let Some(weight_kg) = update.weight_kg {
        validate_weight(weight_kg)?;
    }
    if let Some(fat_pct) = update.fat_pct {
        validate_percentage("fat_pct", fat_pct, MAX_FAT_PCT)?;
    }
    if let Some(muscle_pct) = update.muscle_pct {
        validate_percentage("muscle_pct", muscle_pct, MAX_MUSCLE_PCT)?;
    }
    Ok(())
}

/// Bioimpedance records per user
#[derive(Debug, Clone, Default)]
pub struct BioimpedanceService {
    records: UserStore<Vec<BioimpedanceRecord>>,
}

impl BioimpedanceService {
    /// Create an empty service
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a new measurement
    ///
    /// # Errors
    ///
    /// Returns `ErrorCode::ValueOutOfRange` if weight is not positive, fat is
    /// outside 0-70 % or muscle is outside 0-100 %
    pub fn create(&self, user_id: Uuid, payload: NewBioimpedance) -> AppResult<BioimpedanceRecord> {
        validate_weight(payload.weight_kg)?;
        validate_percentage("fat_pct", payload.fat_pct, MAX_FAT_PCT)?;
        validate_percentage("muscle_pct", payload.muscle_pct, MAX_MUSCLE_PCT)?;

        let record = BioimpedanceRecord {
            id: Uuid::new_v4(),
            measured_at: payload.measured_at,
            weight_kg: payload.weight_kg,
            fat_pct: payload.fat_pct,
            muscle_pct: payload.muscle_pct,
            visceral_fat: payload.visceral_fat,
        };
        self.records
            .write(user_id, |records| records.push(record.clone()));

        info!(user_id = %user_id, record_id = %record.id, "Bioimpedance record created");
        Ok(record)
    }

    /// All of the user's measurements, oldest first
    #[must_use]
    pub fn list(&self, user_id: Uuid) -> Vec<BioimpedanceRecord> {
        let mut records = self.records.read(user_id, Clone::clone);
        records.sort_by_key(|record| record.measured_at);
        records
    }

    /// A single measurement
    ///
    /// # Errors
    ///
    /// Returns `ErrorCode::ResourceNotFound` if the user has no such record
    pub fn get(&self, user_id: Uuid, record_id: Uuid) -> AppResult<BioimpedanceRecord> {
        self.records
            .read(user_id, |records| {
                records.iter().find(|record| record.id == record_id).cloned()
            })
            .ok_or_else(|| not_found(record_id))
    }

    /// Apply the provided fields of `update` to a measurement
    ///
    /// # Errors
    ///
    /// Returns `ErrorCode::ValueOutOfRange` for invalid fields, or
    /// `ErrorCode::ResourceNotFound` if the user has no such record
    pub fn update(
        &self,
        user_id: Uuid,
        record_id: Uuid,
        update: BioimpedanceUpdate,
    ) -> AppResult<BioimpedanceRecord> {
        validate_update(&update)?;

        let updated = self.records.write(user_id, |records| {
            let record = records.iter_mut().find(|record| record.id == record_id)?;
            if let Some(weight_kg) = update.weight_kg {
                record.weight_kg = weight_kg;
            }
            if let Some(fat_pct) = update.fat_pct {
                record.fat_pct = fat_pct;
            }
            if let Some(muscle_pct) = update.muscle_pct {
                record.muscle_pct = muscle_pct;
            }
            if update.visceral_fat.is_some() {
                record.visceral_fat = update.visceral_fat;
            }
            Some(record.clone())
        });

        let record = updated.ok_or_else(|| not_found(record_id))?;
        info!(user_id = %user_id, record_id = %record_id, "Bioimpedance record updated");
        Ok(record)
    }

    /// Remove a measurement, returning whether it existed
    pub fn delete(&self, user_id: Uuid, record_id: Uuid) -> bool {
        let removed = self.records.write(user_id, |records| {
            let before = records.len();
            records.retain(|record| record.id != record_id);
            records.len() != before
        });
        if removed {
            info!(user_id = %user_id, record_id = %record_id, "Bioimpedance record deleted");
        }
        removed
    }

    /// Chronological body composition series and body fat trend
    #[must_use]
    pub fn summary(&self, user_id: Uuid) -> BioimpedanceSummary {
        let points: Vec<BodyCompositionPoint> = self
            .list(user_id)
            .iter()
            .map(BodyCompositionPoint::from)
            .collect();
        let trend = body_fat_trend(&points);
        BioimpedanceSummary { points, trend }
    }
}

fn not_found(record_id: Uuid) -> AppError {
    AppError::not_found("Bioimpedance record").with_resource_id(record_id.to_string())
}
