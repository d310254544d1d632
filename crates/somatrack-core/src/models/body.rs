// ABOUTME: Body progress models for progress photos and pose-based comparisons
// ABOUTME: BodyView, BodyPhoto, BodyPhotoUpload, ComparisonResult, and BodyComparisonRecord
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::keypoints::KeypointSet;

/// Camera angle of a progress photo
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BodyView {
    /// Facing the camera
    Front,
    /// Profile
    Side,
    /// Back to the camera
    Back,
}

impl BodyView {
    /// API string representation
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Front => "front",
            Self::Side => "side",
            Self::Back => "back",
        }
    }

    /// Parse from API string representation
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "front" => Some(Self::Front),
            "side" => Some(Self::Side),
            "back" => Some(Self::Back),
            _ => None,
        }
    }
}

/// Client request to register a new progress photo
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BodyPhotoUpload {
    /// Camera angle
    pub view: BodyView,
    /// Original file name suggested by the client
    pub file_name: String,
    /// Distance between camera and subject (cm)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub distance_cm: Option<u32>,
    /// Camera height from the floor (cm)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub camera_height_cm: Option<u32>,
    /// Lighting conditions description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lighting: Option<String>,
    /// Clothing description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub clothing: Option<String>,
    /// Pose guidance shown to the user
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pose_hint: Option<String>,
    /// When the photo was taken
    pub taken_at: DateTime<Utc>,
    /// Keypoints computed client-side, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pose_keypoints: Option<KeypointSet>,
}

/// A stored progress photo
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BodyPhoto {
    /// Photo identifier
    pub id: Uuid,
    /// Owning user
    pub user_id: Uuid,
    /// Camera angle
    pub view: BodyView,
    /// Object storage key
    pub storage_key: String,
    /// Public URL of the photo object
    pub file_url: String,
    /// Distance between camera and subject (cm)
    pub distance_cm: Option<u32>,
    /// Camera height from the floor (cm)
    pub camera_height_cm: Option<u32>,
    /// Lighting conditions description
    pub lighting: Option<String>,
    /// Clothing description
    pub clothing: Option<String>,
    /// Pose guidance shown to the user
    pub pose_hint: Option<String>,
    /// When the photo was taken
    pub taken_at: DateTime<Utc>,
    /// When the photo was registered
    pub created_at: DateTime<Utc>,
    /// Detected pose keypoints
    pub pose_keypoints: Option<KeypointSet>,
}

/// Both photos of a comparison, as shown side by side
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BodyComparisonPair {
    /// Baseline photo
    pub from_photo: BodyPhoto,
    /// Follow-up photo
    pub to_photo: BodyPhoto,
}

/// Output of the body comparison engine
///
/// Deltas are percent changes of torso-normalized segment widths; negative
/// values mean the segment narrowed. Missing landmarks yield `0.0` deltas.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonResult {
    /// Waist width change (%)
    pub delta_waist_pct: f64,
    /// Hip width change (%)
    pub delta_hip_pct: f64,
    /// Shoulder width change (%)
    pub delta_shoulders_pct: f64,
    /// Elbow span change (%)
    pub delta_arm_pct: f64,
    /// Weakest segment confidence (0.0-1.0)
    pub confidence: f64,
    /// Qualitative abdominal change
    pub fat_change_hint: Option<String>,
    /// Qualitative shoulder posture change
    pub posture_change_hint: Option<String>,
    /// Human-readable summary
    pub verdict: String,
}

/// Persisted comparison between two of a user's photos
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BodyComparisonRecord {
    /// Comparison identifier
    pub id: Uuid,
    /// Owning user
    pub user_id: Uuid,
    /// Baseline photo
    pub from_photo_id: Uuid,
    /// Follow-up photo
    pub to_photo_id: Uuid,
    /// Engine output
    pub result: ComparisonResult,
    /// When the comparison ran
    pub created_at: DateTime<Utc>,
}
