// ABOUTME: Body progress service managing progress photos and their comparisons
// ABOUTME: Registers photos, runs the comparison engine on photo pairs, and keeps results
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Body progress photos
//!
//! Photos are registered with their capture metadata and, optionally, pose
//! keypoints computed by the client. Comparing two photos requires keypoints
//! for both; the [`PoseEstimator`] enforces that before the engine runs.

use std::collections::HashMap;

use chrono::Utc;
use somatrack_core::errors::{AppError, AppResult};
use somatrack_core::models::{
    BodyComparisonPair, BodyComparisonRecord, BodyPhoto, BodyPhotoUpload, BodyView,
};
use somatrack_intelligence::ComparisonEngine;
use tracing::{info, instrument};
use uuid::Uuid;

use crate::config::ServerConfig;
use crate::pose::{PoseEstimator, StoredKeypointsEstimator};
use crate::store::UserStore;

/// Object storage key for a photo: `users/{user}/body/{photo}_{file_name}`
#[must_use]
pub fn photo_storage_key(user_id: Uuid, photo_id: Uuid, file_name: &str) -> String {
    let safe_name = file_name.replace(' ', "_");
    format!("users/{user_id}/body/{photo_id}_{safe_name}")
}

/// Progress photos and comparisons per user
#[derive(Debug)]
pub struct BodyProgressService<E = StoredKeypointsEstimator> {
    media_base_url: String,
    engine: ComparisonEngine,
    estimator: E,
    photos: UserStore<HashMap<Uuid, BodyPhoto>>,
    comparisons: UserStore<Vec<BodyComparisonRecord>>,
}

impl BodyProgressService<StoredKeypointsEstimator> {
    /// Service comparing the keypoints recorded with each photo
    #[must_use]
    pub fn new(config: &ServerConfig) -> Self {
        Self::with_estimator(config, StoredKeypointsEstimator)
    }
}

impl<E: PoseEstimator> BodyProgressService<E> {
    /// Service using a custom pose estimator
    #[must_use]
    pub fn with_estimator(config: &ServerConfig, estimator: E) -> Self {
        Self {
            media_base_url: config.media_base_url.clone(),
            engine: ComparisonEngine::new(config.comparison),
            estimator,
            photos: UserStore::new(),
            comparisons: UserStore::new(),
        }
    }

    /// Register a progress photo
    ///
    /// # Errors
    ///
    /// Returns `ErrorCode::MissingRequiredField` if the file name is empty
    pub fn register_photo(&self, user_id: Uuid, upload: BodyPhotoUpload) -> AppResult<BodyPhoto> {
        if upload.file_name.trim().is_empty() {
            return Err(AppError::missing_field("file_name"));
        }

        let id = Uuid::new_v4();
        let storage_key = photo_storage_key(user_id, id, &upload.file_name);
        let photo = BodyPhoto {
            id,
            user_id,
            view: upload.view,
            file_url: format!("{}/{storage_key}", self.media_base_url),
            storage_key,
            distance_cm: upload.distance_cm,
            camera_height_cm: upload.camera_height_cm,
            lighting: upload.lighting,
            clothing: upload.clothing,
            pose_hint: upload.pose_hint,
            taken_at: upload.taken_at,
            created_at: Utc::now(),
            pose_keypoints: upload.pose_keypoints,
        };
        self.photos.write(user_id, |photos| {
            photos.insert(photo.id, photo.clone());
        });

        info!(
            user_id = %user_id,
            photo_id = %photo.id,
            view = photo.view.as_str(),
            has_keypoints = photo.pose_keypoints.is_some(),
            "Body photo registered"
        );
        Ok(photo)
    }

    /// The user's photos, newest first, optionally restricted to one view
    #[must_use]
    pub fn list_photos(&self, user_id: Uuid, view: Option<BodyView>) -> Vec<BodyPhoto> {
        let mut photos: Vec<BodyPhoto> = self.photos.read(user_id, |photos| {
            photos
                .values()
                .filter(|photo| view.is_none_or(|v| photo.view == v))
                .cloned()
                .collect()
        });
        photos.sort_by(|a, b| {
            b.taken_at
                .cmp(&a.taken_at)
                .then_with(|| b.created_at.cmp(&a.created_at))
                .then_with(|| b.id.cmp(&a.id))
        });
        photos
    }

    /// A single photo owned by the user
    ///
    /// # Errors
    ///
    /// Returns `ErrorCode::ResourceNotFound` if the user owns no such photo
    pub fn photo(&self, user_id: Uuid, photo_id: Uuid) -> AppResult<BodyPhoto> {
        self.photos
            .read(user_id, |photos| photos.get(&photo_id).cloned())
            .ok_or_else(|| {
                AppError::not_found("Body photo")
                    .with_user_id(user_id)
                    .with_resource_id(photo_id.to_string())
            })
    }

    /// Both photos of a comparison
    ///
    /// # Errors
    ///
    /// Returns `ErrorCode::ResourceNotFound` if either photo is missing or
    /// belongs to another user
    pub fn comparison_pair(
        &self,
        user_id: Uuid,
        from_photo_id: Uuid,
        to_photo_id: Uuid,
    ) -> AppResult<BodyComparisonPair> {
        Ok(BodyComparisonPair {
            from_photo: self.photo(user_id, from_photo_id)?,
            to_photo: self.photo(user_id, to_photo_id)?,
        })
    }

    /// Compare two of the user's photos and store the result
    ///
    /// # Errors
    ///
    /// Returns `ErrorCode::ResourceNotFound` if either photo is missing or
    /// belongs to another user, or `ErrorCode::KeypointsUnavailable` if the
    /// estimator has no keypoints for one of them
    #[instrument(skip(self))]
    pub async fn analyze(
        &self,
        user_id: Uuid,
        from_photo_id: Uuid,
        to_photo_id: Uuid,
    ) -> AppResult<BodyComparisonRecord> {
        let pair = self.comparison_pair(user_id, from_photo_id, to_photo_id)?;
        let from = self.estimator.extract_keypoints(&pair.from_photo).await?;
        let to = self.estimator.extract_keypoints(&pair.to_photo).await?;

        let record = BodyComparisonRecord {
            id: Uuid::new_v4(),
            user_id,
            from_photo_id,
            to_photo_id,
            result: self.engine.compare(&from, &to),
            created_at: Utc::now(),
        };
        self.comparisons
            .write(user_id, |comparisons| comparisons.push(record.clone()));

        info!(
            comparison_id = %record.id,
            confidence = record.result.confidence,
            "Body comparison stored"
        );
        Ok(record)
    }

    /// The user's comparisons, oldest first
    #[must_use]
    pub fn list_comparisons(&self, user_id: Uuid) -> Vec<BodyComparisonRecord> {
        self.comparisons.read(user_id, Clone::clone)
    }
}
