// ABOUTME: Domain service layer for body progress, composition, hydration, labs, push, and reports
// ABOUTME: Protocol-agnostic services over per-user in-memory stores
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Domain service layer
//!
//! Services hold their own per-user state and are cheap to share behind an
//! `Arc`. Any transport (HTTP, CLI, jobs) can sit on top of them.

/// Bioimpedance measurements and body fat trend
pub mod bioimpedance;

/// Progress photos and pose-based comparisons
pub mod body_progress;

/// Hydration goals, intake and streaks
pub mod hydration;

/// Lab report upload and summaries
pub mod labs;

/// Web push subscriptions
pub mod notifications;

/// Progress report export
pub mod reports;

pub use bioimpedance::BioimpedanceService;
pub use body_progress::BodyProgressService;
pub use hydration::HydrationService;
pub use labs::LabsService;
pub use notifications::NotificationService;
pub use reports::ReportService;

use crate::config::ServerConfig;

/// Every domain service, built from one configuration
#[derive(Debug)]
pub struct Services {
    /// Progress photos and comparisons
    pub body_progress: BodyProgressService,
    /// Bioimpedance records
    pub bioimpedance: BioimpedanceService,
    /// Hydration tracking
    pub hydration: HydrationService,
    /// Lab reports
    pub labs: LabsService,
    /// Push subscriptions
    pub notifications: NotificationService,
    /// Report export
    pub reports: ReportService,
}

impl Services {
    /// Build all services from `config`
    #[must_use]
    pub fn from_config(config: &ServerConfig) -> Self {
        Self {
            body_progress: BodyProgressService::new(config),
            bioimpedance: BioimpedanceService::new(),
            hydration: HydrationService::new(config.default_hydration_goal_ml),
            labs: LabsService::new(config.lab_summary_max_chars),
            notifications: NotificationService::new(),
            reports: ReportService::new(),
        }
    }
}
