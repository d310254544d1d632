// ABOUTME: Hydration tracking service with daily goals, intake logs, and streaks
// ABOUTME: Keeps per-day intake totals and evaluates them against the user's goal
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::collections::BTreeMap;

use chrono::NaiveDate;
use somatrack_core::errors::{AppError, AppResult};
use somatrack_core::models::{HydrationGoal, HydrationIntake, HydrationLogResult, HydrationSummary};
use tracing::{debug, info};
use uuid::Uuid;

use crate::store::UserStore;

#[derive(Debug, Default)]
struct HydrationState {
    goal: Option<HydrationGoal>,
    daily_totals: BTreeMap<NaiveDate, u32>,
}

impl HydrationState {
    fn goal_ml(&self, default_goal_ml: u32) -> u32 {
        self.goal.map_or(default_goal_ml, |goal| goal.daily_ml)
    }

    fn total_on(&self, date: NaiveDate) -> u32 {
        self.daily_totals.get(&date).copied().unwrap_or(0)
    }

    /// Consecutive days meeting `goal_ml`, ending on `date`
    ///
    /// A day that has not reached the goal yet does not break the streak when
    /// it is the summarized day itself; counting then starts the day before.
    fn streak_days(&self, date: NaiveDate, goal_ml: u32) -> u32 {
        let met = |day: NaiveDate| self.total_on(day) >= goal_ml;

        let mut cursor = if met(date) {
            Some(date)
        } else {
            date.pred_opt()
        };
        let mut streak = 0;
        while let Some(day) = cursor {
            if !met(day) {
                break;
            }
            streak += 1;
            cursor = day.pred_opt();
        }
        streak
    }
}

/// Rounds a percentage to two decimals
fn round_pct(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Daily hydration goals and intake per user
#[derive(Debug, Clone)]
pub struct HydrationService {
    default_goal_ml: u32,
    state: UserStore<HydrationState>,
}

impl HydrationService {
    /// Create a service applying `default_goal_ml` to users without a goal
    #[must_use]
    pub fn new(default_goal_ml: u32) -> Self {
        Self {
            default_goal_ml,
            state: UserStore::new(),
        }
    }

    /// Set the user's daily goal
    ///
    /// # Errors
    ///
    /// Returns `ErrorCode::ValueOutOfRange` if `daily_ml` is zero
    pub fn set_goal(
        &self,
        user_id: Uuid,
        daily_ml: u32,
        today: NaiveDate,
    ) -> AppResult<HydrationGoal> {
        if daily_ml == 0 {
            return Err(AppError::value_out_of_range(
                "daily_ml",
                "must be greater than 0",
            ));
        }
        let goal = HydrationGoal {
            daily_ml,
            updated_at: today,
        };
        self.state.write(user_id, |state| state.goal = Some(goal));

        info!(user_id = %user_id, daily_ml, "Hydration goal updated");
        Ok(goal)
    }

    /// Goal in force for the user (mL)
    #[must_use]
    pub fn goal_ml(&self, user_id: Uuid) -> u32 {
        self.state
            .read(user_id, |state| state.goal_ml(self.default_goal_ml))
    }

    /// Record an intake and return the day's running total
    ///
    /// # Errors
    ///
    /// Returns `ErrorCode::ValueOutOfRange` if `amount_ml` is zero
    pub fn log(&self, user_id: Uuid, intake: HydrationIntake) -> AppResult<HydrationLogResult> {
        if intake.amount_ml == 0 {
            return Err(AppError::value_out_of_range(
                "amount_ml",
                "must be greater than 0",
            ));
        }

        let result = self.state.write(user_id, |state| {
            let total = state.daily_totals.entry(intake.date).or_insert(0);
            *total = total.saturating_add(intake.amount_ml);
            let total_ml = *total;
            let goal_ml = state.goal_ml(self.default_goal_ml);
            HydrationLogResult {
                total_ml,
                goal_ml,
                remaining_ml: goal_ml.saturating_sub(total_ml),
            }
        });

        debug!(
            user_id = %user_id,
            date = %intake.date,
            total_ml = result.total_ml,
            "Hydration intake logged"
        );
        Ok(result)
    }

    /// Goal, consumption, completion and streak for `date`
    #[must_use]
    pub fn summary(&self, user_id: Uuid, date: NaiveDate) -> HydrationSummary {
        self.state.read(user_id, |state| {
            let goal_ml = state.goal_ml(self.default_goal_ml);
            let consumed_ml = state.total_on(date);
            HydrationSummary {
                goal_ml,
                consumed_ml,
                completion_pct: round_pct(f64::from(consumed_ml) / f64::from(goal_ml) * 100.0),
                streak_days: state.streak_days(date, goal_ml),
            }
        })
    }
}
