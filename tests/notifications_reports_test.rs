// ABOUTME: Integration tests for push subscriptions and progress report export
// ABOUTME: Endpoint validation, re-registration, period defaults, and payload encoding
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

mod common;

use std::collections::BTreeMap;

use base64::{engine::general_purpose::STANDARD, Engine as _};
use chrono::NaiveDate;
use common::init_test_logging;
use somatrack::errors::ErrorCode;
use somatrack::models::{PushSubscription, ReportExportRequest, SubscriptionStatus};
use somatrack::services::{NotificationService, ReportService};
use uuid::Uuid;

fn subscription(endpoint: &str, auth: &str) -> PushSubscription {
    PushSubscription {
        endpoint: endpoint.to_owned(),
        keys: BTreeMap::from([
            ("p256dh".to_owned(), "BNcRdreALRFXTkOOUHK1EtK2wtaz5Ry4YfYCA".to_owned()),
            ("auth".to_owned(), auth.to_owned()),
        ]),
        user_agent: Some("Mozilla/5.0".to_owned()),
    }
}

fn date(month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, month, day).unwrap()
}

fn decode_payload(payload_base64: &str) -> String {
    String::from_utf8(STANDARD.decode(payload_base64).unwrap()).unwrap()
}

// ============================================================================
// Push subscriptions
// ============================================================================

#[test]
fn test_register_subscription() {
    init_test_logging();
    let service = NotificationService::new();
    let user_id = Uuid::new_v4();

    let status = service
        .register(user_id, subscription("https://push.example.com/abc", "k1"))
        .unwrap();

    assert_eq!(status, SubscriptionStatus::Registered);
    assert_eq!(service.list(user_id).len(), 1);
    assert!(service.list(Uuid::new_v4()).is_empty());
}

#[test]
fn test_register_rejects_empty_endpoint() {
    init_test_logging();
    let service = NotificationService::new();
    let user_id = Uuid::new_v4();

    let err = service.register(user_id, subscription(" ", "k1")).unwrap_err();

    assert_eq!(err.code, ErrorCode::MissingRequiredField);
    assert!(service.list(user_id).is_empty());
}

#[test]
fn test_reregistering_endpoint_replaces_keys() {
    init_test_logging();
    let service = NotificationService::new();
    let user_id = Uuid::new_v4();

    service
        .register(user_id, subscription("https://push.example.com/abc", "k1"))
        .unwrap();
    service
        .register(user_id, subscription("https://push.example.com/def", "k2"))
        .unwrap();
    service
        .register(user_id, subscription("https://push.example.com/abc", "k3"))
        .unwrap();

    let subscriptions = service.list(user_id);
    assert_eq!(subscriptions.len(), 2);
    assert_eq!(subscriptions[0].endpoint, "https://push.example.com/abc");
    assert_eq!(subscriptions[0].keys["auth"], "k3");
}

// ============================================================================
// Report export
// ============================================================================

#[test]
fn test_export_defaults_to_month_to_date() {
    let report = ReportService::new()
        .export(
            &ReportExportRequest {
                user_id: "user-42".to_owned(),
                ..ReportExportRequest::default()
            },
            date(6, 17),
        )
        .unwrap();

    assert_eq!(report.content_type, "application/pdf");
    assert_eq!(report.filename, "report-user-42.pdf");

    let document = decode_payload(&report.payload_base64);
    assert!(document.contains("user-42"));
    assert!(document.contains("2025-06-01 to 2025-06-17"));
    assert!(document.contains("consistent"));
}

#[test]
fn test_export_with_explicit_period() {
    let report = ReportService::new()
        .export(
            &ReportExportRequest {
                user_id: "u1".to_owned(),
                start_date: Some(date(1, 10)),
                end_date: Some(date(3, 5)),
            },
            date(6, 17),
        )
        .unwrap();

    assert!(decode_payload(&report.payload_base64).contains("2025-01-10 to 2025-03-05"));
}

#[test]
fn test_export_single_day_period() {
    let report = ReportService::new().export(
        &ReportExportRequest {
            user_id: "u1".to_owned(),
            start_date: Some(date(2, 1)),
            end_date: Some(date(2, 1)),
        },
        date(6, 17),
    );
    assert!(report.is_ok());
}

#[test]
fn test_export_rejects_inverted_period() {
    let err = ReportService::new()
        .export(
            &ReportExportRequest {
                user_id: "u1".to_owned(),
                start_date: Some(date(6, 20)),
                end_date: None,
            },
            date(6, 17),
        )
        .unwrap_err();
    assert_eq!(err.code, ErrorCode::InvalidInput);
}

#[test]
fn test_export_requires_user() {
    let err = ReportService::new()
        .export(&ReportExportRequest::default(), date(6, 17))
        .unwrap_err();
    assert_eq!(err.code, ErrorCode::MissingRequiredField);
}
