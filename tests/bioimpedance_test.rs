// ABOUTME: Integration tests for bioimpedance tracking
// ABOUTME: Validation ranges, ordering, partial updates, deletion, and trend summary
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic, clippy::float_cmp)]

mod common;

use chrono::NaiveDate;
use common::init_test_logging;
use somatrack::errors::ErrorCode;
use somatrack::models::{BioimpedanceUpdate, BodyFatTrend, NewBioimpedance};
use somatrack::services::BioimpedanceService;
use uuid::Uuid;

fn measurement(day: u32, fat_pct: f64) -> NewBioimpedance {
    NewBioimpedance {
        measured_at: NaiveDate::from_ymd_opt(2025, 2, day).unwrap(),
        weight_kg: 82.5,
        fat_pct,
        muscle_pct: 38.0,
        visceral_fat: Some(9.0),
    }
}

fn service() -> BioimpedanceService {
    init_test_logging();
    BioimpedanceService::new()
}

// ============================================================================
// Validation
// ============================================================================

#[test]
fn test_create_rejects_out_of_range_values() {
    let service = service();
    let user_id = Uuid::new_v4();

    let cases = [
        NewBioimpedance {
            weight_kg: 0.0,
            ..measurement(1, 20.0)
        },
        NewBioimpedance {
            weight_kg: -3.0,
            ..measurement(1, 20.0)
        },
        measurement(1, 70.5),
        measurement(1, -0.1),
        NewBioimpedance {
            muscle_pct: 100.1,
            ..measurement(1, 20.0)
        },
        NewBioimpedance {
            fat_pct: f64::NAN,
            ..measurement(1, 20.0)
        },
    ];
    for payload in cases {
        let err = service.create(user_id, payload).unwrap_err();
        assert_eq!(err.code, ErrorCode::ValueOutOfRange);
    }
    assert!(service.list(user_id).is_empty());
}

#[test]
fn test_create_accepts_range_boundaries() {
    let service = service();
    let user_id = Uuid::new_v4();

    service.create(user_id, measurement(1, 0.0)).unwrap();
    service.create(user_id, measurement(2, 70.0)).unwrap();
    service
        .create(
            user_id,
            NewBioimpedance {
                muscle_pct: 100.0,
                ..measurement(3, 20.0)
            },
        )
        .unwrap();

    assert_eq!(service.list(user_id).len(), 3);
}

// ============================================================================
// CRUD
// ============================================================================

#[test]
fn test_list_sorted_by_measurement_date() {
    let service = service();
    let user_id = Uuid::new_v4();

    service.create(user_id, measurement(20, 24.0)).unwrap();
    service.create(user_id, measurement(5, 26.0)).unwrap();
    service.create(user_id, measurement(12, 25.0)).unwrap();

    let fats: Vec<f64> = service.list(user_id).iter().map(|r| r.fat_pct).collect();
    assert_eq!(fats, vec![26.0, 25.0, 24.0]);
}

#[test]
fn test_records_are_isolated_per_user() {
    let service = service();
    let alice = Uuid::new_v4();
    let bob = Uuid::new_v4();

    let record = service.create(alice, measurement(1, 22.0)).unwrap();

    assert!(service.list(bob).is_empty());
    assert_eq!(
        service.get(bob, record.id).unwrap_err().code,
        ErrorCode::ResourceNotFound
    );
    assert!(!service.delete(bob, record.id));
    assert_eq!(service.get(alice, record.id).unwrap(), record);
}

#[test]
fn test_partial_update_keeps_other_fields() {
    let service = service();
    let user_id = Uuid::new_v4();
    let record = service.create(user_id, measurement(1, 22.0)).unwrap();

    let updated = service
        .update(
            user_id,
            record.id,
            BioimpedanceUpdate {
                fat_pct: Some(21.0),
                ..BioimpedanceUpdate::default()
            },
        )
        .unwrap();

    assert_eq!(updated.fat_pct, 21.0);
    assert_eq!(updated.weight_kg, record.weight_kg);
    assert_eq!(updated.muscle_pct, record.muscle_pct);
    assert_eq!(updated.visceral_fat, record.visceral_fat);
    assert_eq!(service.get(user_id, record.id).unwrap(), updated);
}

#[test]
fn test_update_validates_provided_fields() {
    let service = service();
    let user_id = Uuid::new_v4();
    let record = service.create(user_id, measurement(1, 22.0)).unwrap();

    let err = service
        .update(
            user_id,
            record.id,
            BioimpedanceUpdate {
                fat_pct: Some(75.0),
                ..BioimpedanceUpdate::default()
            },
        )
        .unwrap_err();
    assert_eq!(err.code, ErrorCode::ValueOutOfRange);
    assert_eq!(service.get(user_id, record.id).unwrap().fat_pct, 22.0);
}

#[test]
fn test_update_missing_record() {
    let err = service()
        .update(Uuid::new_v4(), Uuid::new_v4(), BioimpedanceUpdate::default())
        .unwrap_err();
    assert_eq!(err.code, ErrorCode::ResourceNotFound);
}

#[test]
fn test_delete_reports_existence() {
    let service = service();
    let user_id = Uuid::new_v4();
    let record = service.create(user_id, measurement(1, 22.0)).unwrap();

    assert!(service.delete(user_id, record.id));
    assert!(!service.delete(user_id, record.id));
    assert!(service.list(user_id).is_empty());
}

// ============================================================================
// Summary
// ============================================================================

#[test]
fn test_summary_trend() {
    let service = service();
    let user_id = Uuid::new_v4();

    assert_eq!(service.summary(user_id).trend, BodyFatTrend::Stable);

    service.create(user_id, measurement(10, 24.0)).unwrap();
    assert_eq!(service.summary(user_id).trend, BodyFatTrend::Stable);

    service.create(user_id, measurement(1, 26.0)).unwrap();
    let summary = service.summary(user_id);
    assert_eq!(summary.trend, BodyFatTrend::Falling);
    assert_eq!(summary.points.len(), 2);
    assert_eq!(summary.points[0].fat_pct, 26.0);
    assert_eq!(summary.points[1].fat_pct, 24.0);

    service.create(user_id, measurement(20, 27.0)).unwrap();
    assert_eq!(service.summary(user_id).trend, BodyFatTrend::Stable);
}
