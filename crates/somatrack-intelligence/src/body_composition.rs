// ABOUTME: Body composition trend detection over bioimpedance measurements
// ABOUTME: Classifies a dated series of body fat readings as falling or stable
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use somatrack_core::models::{BodyCompositionPoint, BodyFatTrend};

/// Body fat direction between the first and last points of a chronological series
///
/// Fewer than two points is always `Stable`.
#[must_use]
pub fn body_fat_trend(points: &[BodyCompositionPoint]) -> BodyFatTrend {
    match (points.first(), points.last()) {
        (Some(first), Some(last)) if points.len() >= 2 && last.fat_pct < first.fat_pct => {
            BodyFatTrend::Falling
        }
        _ => BodyFatTrend::Stable,
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn point(day: u32, fat_pct: f64) -> BodyCompositionPoint {
        BodyCompositionPoint {
            measured_at: NaiveDate::from_ymd_opt(2025, 1, day).unwrap(),
            weight_kg: 80.0,
            fat_pct,
            muscle_pct: 40.0,
        }
    }

    #[test]
    fn test_single_point_is_stable() {
        assert_eq!(body_fat_trend(&[point(1, 25.0)]), BodyFatTrend::Stable);
        assert_eq!(body_fat_trend(&[]), BodyFatTrend::Stable);
    }

    #[test]
    fn test_falling_compares_first_and_last() {
        let points = [point(1, 25.0), point(8, 27.0), point(15, 24.5)];
        assert_eq!(body_fat_trend(&points), BodyFatTrend::Falling);
    }

    #[test]
    fn test_rising_or_flat_is_stable() {
        assert_eq!(
            body_fat_trend(&[point(1, 25.0), point(8, 25.0)]),
            BodyFatTrend::Stable
        );
        assert_eq!(
            body_fat_trend(&[point(1, 25.0), point(8, 26.0)]),
            BodyFatTrend::Stable
        );
    }
}
