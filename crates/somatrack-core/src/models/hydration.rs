// ABOUTME: Hydration tracking models for daily water intake goals
// ABOUTME: Goal, intake log, and daily summary payloads
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Daily hydration goal in force for a user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HydrationGoal {
    /// Target intake per day (mL)
    pub daily_ml: u32,
    /// Day the goal was last changed
    pub updated_at: NaiveDate,
}

/// A single water intake entry
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct HydrationIntake {
    /// Amount drunk (mL), must be positive
    pub amount_ml: u32,
    /// Day the intake counts towards
    pub date: NaiveDate,
}

/// Running total after logging an intake
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HydrationLogResult {
    /// Total for the day so far (mL)
    pub total_ml: u32,
    /// Goal in force (mL)
    pub goal_ml: u32,
    /// Amount still needed to reach the goal (mL), never negative
    pub remaining_ml: u32,
}

/// Daily hydration summary
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HydrationSummary {
    /// Goal in force (mL)
    pub goal_ml: u32,
    /// Consumed on the summarized day (mL)
    pub consumed_ml: u32,
    /// Consumed / goal, in percent with two decimals
    pub completion_pct: f64,
    /// Consecutive days on which the goal was met
    pub streak_days: u32,
}
