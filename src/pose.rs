// ABOUTME: Pose estimation seam supplying keypoints for body progress photos
// ABOUTME: PoseEstimator trait and the estimator that serves keypoints recorded at upload
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Pose estimation
//!
//! How keypoints are extracted from an image is outside this crate. The
//! comparison flow only needs something that yields a [`KeypointSet`] per
//! photo and refuses photos it has nothing for; that refusal is the
//! precondition checked before the comparison engine runs.

use async_trait::async_trait;
use somatrack_core::errors::{AppError, AppResult};
use somatrack_core::models::{BodyPhoto, KeypointSet};
use tracing::warn;

/// Source of pose keypoints for a photo
#[async_trait]
pub trait PoseEstimator: Send + Sync {
    /// Keypoints for the photo
    ///
    /// # Errors
    ///
    /// Returns `ErrorCode::KeypointsUnavailable` when no keypoints can be
    /// produced for the photo
    async fn extract_keypoints(&self, photo: &BodyPhoto) -> AppResult<KeypointSet>;
}

/// Serves the keypoints that were attached to the photo at upload time
#[derive(Debug, Clone, Copy, Default)]
pub struct StoredKeypointsEstimator;

#[async_trait]
impl PoseEstimator for StoredKeypointsEstimator {
    async fn extract_keypoints(&self, photo: &BodyPhoto) -> AppResult<KeypointSet> {
        match &photo.pose_keypoints {
            Some(keypoints) if !keypoints.is_empty() => Ok(keypoints.clone()),
            _ => {
                warn!(photo_id = %photo.id, "Photo has no pose keypoints");
                Err(AppError::keypoints_unavailable(photo.id).with_user_id(photo.user_id))
            }
        }
    }
}
