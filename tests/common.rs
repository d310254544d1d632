// ABOUTME: Shared test utilities and fixtures for integration tests
// ABOUTME: Provides quiet logging setup and pose keypoint builders
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(
    dead_code,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::wildcard_in_or_patterns
)]
//! Shared test utilities for `somatrack`

use std::env;
use std::sync::Once;

use chrono::{DateTime, TimeZone, Utc};
use somatrack::models::{BodyPhotoUpload, BodyView, Keypoint, KeypointSet, Landmark};
use tracing::Level;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => Level::TRACE,
            Ok("DEBUG") => Level::DEBUG,
            Ok("INFO") => Level::INFO,
            Ok("WARN" | "ERROR") | _ => Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// Horizontal positions and confidence of a standing front pose
///
/// Torso runs from neck (0.5, 0.2) to mid-hip (0.5, 0.6), so its length is 0.4.
#[derive(Debug, Clone, Copy)]
pub struct PoseFixture {
    pub shoulder_half_width: f64,
    pub shoulder_y: f64,
    pub hip_half_width: f64,
    pub elbow_half_width: f64,
    pub confidence: f64,
}

impl Default for PoseFixture {
    fn default() -> Self {
        Self {
            shoulder_half_width: 0.2,
            shoulder_y: 0.25,
            hip_half_width: 0.1,
            elbow_half_width: 0.25,
            confidence: 0.9,
        }
    }
}

impl PoseFixture {
    pub fn keypoints(&self) -> KeypointSet {
        let c = self.confidence;
        KeypointSet::new()
            .with(Landmark::Neck, Keypoint::new(0.5, 0.2, c))
            .with(Landmark::MidHip, Keypoint::new(0.5, 0.6, c))
            .with(
                Landmark::LeftShoulder,
                Keypoint::new(0.5 - self.shoulder_half_width, self.shoulder_y, c),
            )
            .with(
                Landmark::RightShoulder,
                Keypoint::new(0.5 + self.shoulder_half_width, self.shoulder_y, c),
            )
            .with(
                Landmark::LeftHip,
                Keypoint::new(0.5 - self.hip_half_width, 0.6, c),
            )
            .with(
                Landmark::RightHip,
                Keypoint::new(0.5 + self.hip_half_width, 0.6, c),
            )
            .with(
                Landmark::LeftElbow,
                Keypoint::new(0.5 - self.elbow_half_width, 0.4, c),
            )
            .with(
                Landmark::RightElbow,
                Keypoint::new(0.5 + self.elbow_half_width, 0.4, c),
            )
    }
}

/// Baseline keypoints with default proportions
pub fn baseline_keypoints() -> KeypointSet {
    PoseFixture::default().keypoints()
}

/// Fixed timestamp on 2025-03-`day` at noon UTC
pub fn taken_on(day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 3, day, 12, 0, 0).unwrap()
}

/// Front-view upload with the given keypoints
pub fn photo_upload(
    file_name: &str,
    taken_at: DateTime<Utc>,
    keypoints: Option<KeypointSet>,
) -> BodyPhotoUpload {
    BodyPhotoUpload {
        view: BodyView::Front,
        file_name: file_name.to_owned(),
        distance_cm: Some(200),
        camera_height_cm: Some(110),
        lighting: Some("daylight".to_owned()),
        clothing: Some("fitted".to_owned()),
        pose_hint: Some("arms slightly away from the body".to_owned()),
        taken_at,
        pose_keypoints: keypoints,
    }
}
