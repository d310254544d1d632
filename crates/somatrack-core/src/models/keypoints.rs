// ABOUTME: Pose keypoint models produced by a pose estimator for body photos
// ABOUTME: Keypoint, KeypointSet with guarded landmark lookup, and the Landmark enum
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};
use std::collections::btree_map::{BTreeMap, Iter};

/// Anatomical landmarks consumed by the body comparison engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Landmark {
    /// Base of the neck
    Neck,
    /// Midpoint between both hips
    MidHip,
    /// Left shoulder joint
    LeftShoulder,
    /// Right shoulder joint
    RightShoulder,
    /// Left hip joint
    LeftHip,
    /// Right hip joint
    RightHip,
    /// Left elbow joint
    LeftElbow,
    /// Right elbow joint
    RightElbow,
}

impl Landmark {
    /// Name used as key in keypoint payloads
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Neck => "neck",
            Self::MidHip => "mid_hip",
            Self::LeftShoulder => "left_shoulder",
            Self::RightShoulder => "right_shoulder",
            Self::LeftHip => "left_hip",
            Self::RightHip => "right_hip",
            Self::LeftElbow => "left_elbow",
            Self::RightElbow => "right_elbow",
        }
    }
}

/// A detected landmark in normalized image coordinates
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Keypoint {
    /// Horizontal position, typically 0.0-1.0
    pub x: f64,
    /// Vertical position, typically 0.0-1.0 (grows downwards)
    pub y: f64,
    /// Detector certainty (0.0-1.0); payloads without it count as 0.0
    #[serde(default)]
    pub confidence: f64,
}

impl Keypoint {
    /// Create a keypoint
    #[must_use]
    pub const fn new(x: f64, y: f64, confidence: f64) -> Self {
        Self { x, y, confidence }
    }

    /// Euclidean distance to another keypoint
    #[must_use]
    pub fn distance_to(&self, other: &Self) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

/// Landmark name to keypoint mapping for one photo
///
/// Any landmark may be absent: the detector only reports what it located.
/// Lookups return `Option` so callers cannot fault on a missing key.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KeypointSet(BTreeMap<String, Keypoint>);

impl KeypointSet {
    /// Create an empty set
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up a keypoint by raw landmark name
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Keypoint> {
        self.0.get(name)
    }

    /// Look up a keypoint by typed landmark
    #[must_use]
    pub fn landmark(&self, landmark: Landmark) -> Option<&Keypoint> {
        self.get(landmark.as_str())
    }

    /// Insert or replace a keypoint, returning the previous value
    pub fn insert(&mut self, name: impl Into<String>, keypoint: Keypoint) -> Option<Keypoint> {
        self.0.insert(name.into(), keypoint)
    }

    /// Builder-style insert for a typed landmark
    #[must_use]
    pub fn with(mut self, landmark: Landmark, keypoint: Keypoint) -> Self {
        self.insert(landmark.as_str(), keypoint);
        self
    }

    /// Number of detected landmarks
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True when the detector located nothing
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over `(name, keypoint)` pairs
    pub fn iter(&self) -> Iter<'_, String, Keypoint> {
        self.0.iter()
    }
}

impl FromIterator<(String, Keypoint)> for KeypointSet {
    fn from_iter<I: IntoIterator<Item = (String, Keypoint)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a KeypointSet {
    type Item = (&'a String, &'a Keypoint);
    type IntoIter = Iter<'a, String, Keypoint>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
