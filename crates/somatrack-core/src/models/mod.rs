// ABOUTME: Domain models for the Somatrack platform
// ABOUTME: Re-exports keypoint, body progress, bioimpedance, hydration, lab, push, and report types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Bioimpedance measurements and body composition summaries
pub mod bioimpedance;
/// Progress photos and comparison results
pub mod body;
/// Hydration goals and intake
pub mod hydration;
/// Pose keypoints and landmarks
pub mod keypoints;
/// Laboratory reports
pub mod labs;
/// Web push subscriptions
pub mod notification;
/// Progress report export
pub mod report;

pub use bioimpedance::{
    BioimpedanceRecord, BioimpedanceSummary, BioimpedanceUpdate, BodyCompositionPoint,
    BodyFatTrend, NewBioimpedance,
};
pub use body::{
    BodyComparisonPair, BodyComparisonRecord, BodyPhoto, BodyPhotoUpload, BodyView,
    ComparisonResult,
};
pub use hydration::{HydrationGoal, HydrationIntake, HydrationLogResult, HydrationSummary};
pub use keypoints::{Keypoint, KeypointSet, Landmark};
pub use labs::{LabReport, LabReportUpload, LabSummary};
pub use notification::{PushSubscription, SubscriptionStatus};
pub use report::{ExportedReport, ReportExportRequest};
