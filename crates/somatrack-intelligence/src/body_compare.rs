// ABOUTME: Pose-based body progress comparison engine
// ABOUTME: Computes torso-normalized segment deltas, confidence, hints, and a verdict from two keypoint sets
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Body Comparison Engine
//!
//! Compares two progress photos through their pose keypoints. Every segment
//! width is divided by the photo's torso length (neck to mid-hip), so photos
//! taken at different distances remain comparable.
//!
//! Missing landmarks never abort a comparison: the affected delta falls back
//! to `0.0` and the confidence of that segment drops accordingly. The engine is
//! a pure function of its inputs and holds no state between calls.

use serde::{Deserialize, Serialize};
use somatrack_core::constants::body_comparison::{
    FAT_HINT_INCREASE, FAT_HINT_MINIMAL, FAT_HINT_REDUCTION, POSTURE_HINT_ALIGNED,
    POSTURE_HINT_ELEVATED, VERDICT_MINIMAL, VERDICT_VISIBLE_PREFIX,
};
use somatrack_core::models::{ComparisonResult, KeypointSet, Landmark};
use tracing::debug;

use crate::config::ComparisonConfig;

/// Body measurement derived from a pair of landmarks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BodySegment {
    /// Shoulder width
    Shoulders,
    /// Waist width
    Waist,
    /// Hip width
    Hip,
    /// Elbow span
    Arm,
}

impl BodySegment {
    /// All segments, in the order they are reported
    pub const ALL: [Self; 4] = [Self::Shoulders, Self::Waist, Self::Hip, Self::Arm];

    /// Landmarks whose distance defines the segment width
    ///
    /// Waist and hip share the hip joints, so their deltas are always equal.
    #[must_use]
    pub const fn landmarks(&self) -> (Landmark, Landmark) {
        match self {
            Self::Shoulders => (Landmark::LeftShoulder, Landmark::RightShoulder),
            Self::Waist | Self::Hip => (Landmark::LeftHip, Landmark::RightHip),
            Self::Arm => (Landmark::LeftElbow, Landmark::RightElbow),
        }
    }

    /// Name used in verdicts
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Shoulders => "shoulders",
            Self::Waist => "waist",
            Self::Hip => "hip",
            Self::Arm => "arm",
        }
    }
}

/// Delta and confidence computed for one segment
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SegmentMeasurement {
    /// Measured segment
    pub segment: BodySegment,
    /// Percent change of the normalized width, `0.0` when undefined
    pub delta_pct: f64,
    /// Lower of the two photos' average landmark confidence
    pub confidence: f64,
}

/// Distance from neck to mid-hip, `None` if either landmark is missing
#[must_use]
pub fn torso_length(keypoints: &KeypointSet) -> Option<f64> {
    let neck = keypoints.landmark(Landmark::Neck)?;
    let mid_hip = keypoints.landmark(Landmark::MidHip)?;
    Some(neck.distance_to(mid_hip))
}

/// Distance between the segment's two landmarks, `None` if either is missing
#[must_use]
pub fn segment_width(keypoints: &KeypointSet, segment: BodySegment) -> Option<f64> {
    let (left, right) = segment.landmarks();
    let left = keypoints.landmark(left)?;
    let right = keypoints.landmark(right)?;
    Some(left.distance_to(right))
}

/// Segment width divided by torso length; undefined for a zero-length torso
#[must_use]
pub fn normalized_width(width: Option<f64>, torso: Option<f64>) -> Option<f64> {
    match (width, torso) {
        (Some(width), Some(torso)) if torso != 0.0 => Some(width / torso),
        _ => None,
    }
}

/// Average confidence of the segment landmarks present in the set
///
/// Absent landmarks do not contribute; with none present the result is `0.0`.
#[must_use]
pub fn segment_confidence(keypoints: &KeypointSet, segment: BodySegment) -> f64 {
    let (left, right) = segment.landmarks();
    let present: Vec<f64> = [left, right]
        .iter()
        .filter_map(|landmark| keypoints.landmark(*landmark))
        .map(|keypoint| keypoint.confidence)
        .collect();
    if present.is_empty() {
        return 0.0;
    }
    present.iter().sum::<f64>() / present.len() as f64
}

/// Percent change from `from` to `to`, `0.0` when either side is undefined
fn percent_delta(from: Option<f64>, to: Option<f64>) -> f64 {
    match (from, to) {
        (Some(from), Some(to)) if from != 0.0 => (to - from) / from * 100.0,
        _ => 0.0,
    }
}

/// Pose-based comparison engine with configurable thresholds
#[derive(Debug, Clone, Copy, Default)]
pub struct ComparisonEngine {
    config: ComparisonConfig,
}

impl ComparisonEngine {
    /// Create an engine with the given thresholds
    #[must_use]
    pub const fn new(config: ComparisonConfig) -> Self {
        Self { config }
    }

    /// Thresholds in use
    #[must_use]
    pub const fn config(&self) -> &ComparisonConfig {
        &self.config
    }

    /// Measure every segment between the two photos, in [`BodySegment::ALL`] order
    #[must_use]
    pub fn measure_segments(
        &self,
        from: &KeypointSet,
        to: &KeypointSet,
    ) -> [SegmentMeasurement; 4] {
        let torso_from = torso_length(from);
        let torso_to = torso_length(to);

        BodySegment::ALL.map(|segment| {
            let norm_from = normalized_width(segment_width(from, segment), torso_from);
            let norm_to = normalized_width(segment_width(to, segment), torso_to);
            SegmentMeasurement {
                segment,
                delta_pct: percent_delta(norm_from, norm_to),
                confidence: segment_confidence(from, segment)
                    .min(segment_confidence(to, segment)),
            }
        })
    }

    /// Compare a baseline photo's keypoints with a follow-up photo's keypoints
    #[must_use]
    pub fn compare(&self, from: &KeypointSet, to: &KeypointSet) -> ComparisonResult {
        let measurements = self.measure_segments(from, to);
        let delta = |segment: BodySegment| {
            measurements
                .iter()
                .find(|m| m.segment == segment)
                .map_or(0.0, |m| m.delta_pct)
        };

        let confidence = measurements
            .iter()
            .map(|m| m.confidence)
            .reduce(f64::min)
            .unwrap_or(0.0);

        let waist = delta(BodySegment::Waist);
        let verdict = self.build_verdict(&measurements, confidence);

        debug!(
            delta_shoulders = delta(BodySegment::Shoulders),
            delta_waist = waist,
            delta_arm = delta(BodySegment::Arm),
            confidence,
            "Body comparison computed"
        );

        ComparisonResult {
            delta_waist_pct: waist,
            delta_hip_pct: delta(BodySegment::Hip),
            delta_shoulders_pct: delta(BodySegment::Shoulders),
            delta_arm_pct: delta(BodySegment::Arm),
            confidence,
            fat_change_hint: Some(self.fat_hint(waist).to_owned()),
            posture_change_hint: self.posture_hint(from, to).map(str::to_owned),
            verdict,
        }
    }

    fn fat_hint(&self, waist_delta: f64) -> &'static str {
        let threshold = self.config.fat_hint_delta_pct;
        if waist_delta <= -threshold {
            FAT_HINT_REDUCTION
        } else if waist_delta >= threshold {
            FAT_HINT_INCREASE
        } else {
            FAT_HINT_MINIMAL
        }
    }

    fn posture_hint(&self, from: &KeypointSet, to: &KeypointSet) -> Option<&'static str> {
        let before = from.landmark(Landmark::LeftShoulder)?;
        let after = to.landmark(Landmark::LeftShoulder)?;
        let shift = after.y - before.y;
        let threshold = self.config.posture_shift_threshold;
        if shift < -threshold {
            Some(POSTURE_HINT_ALIGNED)
        } else if shift > threshold {
            Some(POSTURE_HINT_ELEVATED)
        } else {
            None
        }
    }

    fn build_verdict(&self, measurements: &[SegmentMeasurement], confidence: f64) -> String {
        let significant: Vec<String> = measurements
            .iter()
            .filter(|m| m.delta_pct.abs() >= self.config.significant_delta_pct)
            .map(|m| {
                let direction = if m.delta_pct < 0.0 {
                    "reduction"
                } else {
                    "increase"
                };
                format!("{direction} in {} (≈ {:.1}%)", m.segment.as_str(), m.delta_pct)
            })
            .collect();

        if significant.is_empty() || confidence < self.config.min_verdict_confidence {
            return VERDICT_MINIMAL.to_owned();
        }
        format!("{VERDICT_VISIBLE_PREFIX}: {}.", significant.join(", "))
    }
}

/// Compare two keypoint sets with the default thresholds
///
/// Deterministic and side-effect free: identical inputs always produce an
/// identical result.
#[must_use]
pub fn compare(from: &KeypointSet, to: &KeypointSet) -> ComparisonResult {
    ComparisonEngine::default().compare(from, to)
}
