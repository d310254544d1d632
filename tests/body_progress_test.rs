// ABOUTME: Integration tests for the body progress service
// ABOUTME: Photo registration, listing, ownership checks, and stored comparisons
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic, clippy::float_cmp)]

mod common;

use async_trait::async_trait;
use common::{baseline_keypoints, init_test_logging, photo_upload, taken_on, PoseFixture};
use somatrack::config::ServerConfig;
use somatrack::constants::body_comparison::VERDICT_MINIMAL;
use somatrack::errors::{AppError, AppResult, ErrorCode};
use somatrack::models::{BodyPhoto, BodyView, KeypointSet};
use somatrack::pose::PoseEstimator;
use somatrack::services::body_progress::photo_storage_key;
use somatrack::services::{BodyProgressService, Services};
use uuid::Uuid;

fn service() -> BodyProgressService {
    init_test_logging();
    BodyProgressService::new(&ServerConfig::default())
}

#[test]
fn test_register_photo_builds_storage_key_and_url() {
    let service = service();
    let user_id = Uuid::new_v4();

    let photo = service
        .register_photo(user_id, photo_upload("front pose 1.jpg", taken_on(1), None))
        .unwrap();

    assert_eq!(
        photo.storage_key,
        format!("users/{user_id}/body/{}_front_pose_1.jpg", photo.id)
    );
    assert_eq!(
        photo.file_url,
        format!("https://cdn.example.com/{}", photo.storage_key)
    );
    assert_eq!(photo.user_id, user_id);
    assert_eq!(photo.view, BodyView::Front);
    assert_eq!(photo.distance_cm, Some(200));
}

#[test]
fn test_storage_key_replaces_spaces() {
    let user_id = Uuid::nil();
    let photo_id = Uuid::nil();
    assert_eq!(
        photo_storage_key(user_id, photo_id, "my photo.png"),
        format!("users/{user_id}/body/{photo_id}_my_photo.png")
    );
}

#[test]
fn test_register_photo_uses_configured_media_base_url() {
    let config = ServerConfig {
        media_base_url: "https://media.test".to_owned(),
        ..ServerConfig::default()
    };
    let service = BodyProgressService::new(&config);

    let photo = service
        .register_photo(Uuid::new_v4(), photo_upload("a.jpg", taken_on(1), None))
        .unwrap();

    assert!(photo.file_url.starts_with("https://media.test/users/"));
}

#[test]
fn test_register_photo_requires_file_name() {
    let err = service()
        .register_photo(Uuid::new_v4(), photo_upload("  ", taken_on(1), None))
        .unwrap_err();
    assert_eq!(err.code, ErrorCode::MissingRequiredField);
}

#[test]
fn test_list_photos_newest_first_with_view_filter() {
    let service = service();
    let user_id = Uuid::new_v4();

    let older = service
        .register_photo(user_id, photo_upload("a.jpg", taken_on(1), None))
        .unwrap();
    let newer = service
        .register_photo(user_id, photo_upload("b.jpg", taken_on(20), None))
        .unwrap();
    let mut side_upload = photo_upload("c.jpg", taken_on(10), None);
    side_upload.view = BodyView::Side;
    let side = service.register_photo(user_id, side_upload).unwrap();

    let all: Vec<Uuid> = service
        .list_photos(user_id, None)
        .iter()
        .map(|p| p.id)
        .collect();
    assert_eq!(all, vec![newer.id, side.id, older.id]);

    let front: Vec<Uuid> = service
        .list_photos(user_id, Some(BodyView::Front))
        .iter()
        .map(|p| p.id)
        .collect();
    assert_eq!(front, vec![newer.id, older.id]);

    assert!(service.list_photos(Uuid::new_v4(), None).is_empty());
}

#[test]
fn test_list_photos_same_timestamp_has_stable_order() {
    let service = service();
    let user_id = Uuid::new_v4();

    let registered: Vec<BodyPhoto> = ["a.jpg", "b.jpg", "c.jpg", "d.jpg"]
        .iter()
        .map(|name| {
            service
                .register_photo(user_id, photo_upload(name, taken_on(5), None))
                .unwrap()
        })
        .collect();

    let listed = service.list_photos(user_id, None);
    assert_eq!(listed.len(), registered.len());
    for pair in listed.windows(2) {
        let key = |p: &BodyPhoto| (p.created_at, p.id);
        assert!(key(&pair[0]) >= key(&pair[1]));
    }

    let first: Vec<Uuid> = listed.iter().map(|p| p.id).collect();
    let again: Vec<Uuid> = service
        .list_photos(user_id, None)
        .iter()
        .map(|p| p.id)
        .collect();
    assert_eq!(first, again);
}

#[test]
fn test_comparison_pair_requires_ownership() {
    let service = service();
    let owner = Uuid::new_v4();
    let other = Uuid::new_v4();

    let first = service
        .register_photo(owner, photo_upload("a.jpg", taken_on(1), None))
        .unwrap();
    let second = service
        .register_photo(owner, photo_upload("b.jpg", taken_on(2), None))
        .unwrap();

    let pair = service.comparison_pair(owner, first.id, second.id).unwrap();
    assert_eq!(pair.from_photo.id, first.id);
    assert_eq!(pair.to_photo.id, second.id);

    let err = service
        .comparison_pair(other, first.id, second.id)
        .unwrap_err();
    assert_eq!(err.code, ErrorCode::ResourceNotFound);
    assert_eq!(err.http_status(), 404);
}

// ============================================================================
// Analysis
// ============================================================================

#[tokio::test]
async fn test_analyze_stores_comparison() {
    let service = service();
    let user_id = Uuid::new_v4();
    let shrunk = PoseFixture {
        shoulder_half_width: 0.18,
        confidence: 0.88,
        ..PoseFixture::default()
    }
    .keypoints();

    let from = service
        .register_photo(
            user_id,
            photo_upload("a.jpg", taken_on(1), Some(baseline_keypoints())),
        )
        .unwrap();
    let to = service
        .register_photo(user_id, photo_upload("b.jpg", taken_on(30), Some(shrunk)))
        .unwrap();

    let record = service.analyze(user_id, from.id, to.id).await.unwrap();

    assert_eq!(record.user_id, user_id);
    assert_eq!(record.from_photo_id, from.id);
    assert_eq!(record.to_photo_id, to.id);
    assert!((record.result.delta_shoulders_pct + 10.0).abs() < 1e-9);
    assert_eq!(
        record.result.verdict,
        "Visible change: reduction in shoulders (≈ -10.0%)."
    );

    let stored = service.list_comparisons(user_id);
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].id, record.id);
    assert!(service.list_comparisons(Uuid::new_v4()).is_empty());
}

#[tokio::test]
async fn test_analyze_rejects_photo_without_keypoints() {
    let service = service();
    let user_id = Uuid::new_v4();

    let from = service
        .register_photo(
            user_id,
            photo_upload("a.jpg", taken_on(1), Some(baseline_keypoints())),
        )
        .unwrap();
    let to = service
        .register_photo(user_id, photo_upload("b.jpg", taken_on(2), None))
        .unwrap();

    let err = service.analyze(user_id, from.id, to.id).await.unwrap_err();
    assert_eq!(err.code, ErrorCode::KeypointsUnavailable);
    assert_eq!(err.context.resource_id, Some(to.id.to_string()));
    assert!(service.list_comparisons(user_id).is_empty());
}

#[tokio::test]
async fn test_analyze_rejects_empty_keypoint_set() {
    let service = service();
    let user_id = Uuid::new_v4();

    let from = service
        .register_photo(
            user_id,
            photo_upload("a.jpg", taken_on(1), Some(KeypointSet::new())),
        )
        .unwrap();
    let to = service
        .register_photo(
            user_id,
            photo_upload("b.jpg", taken_on(2), Some(baseline_keypoints())),
        )
        .unwrap();

    let err = service.analyze(user_id, from.id, to.id).await.unwrap_err();
    assert_eq!(err.code, ErrorCode::KeypointsUnavailable);
}

#[tokio::test]
async fn test_analyze_other_users_photo_is_not_found() {
    let service = service();
    let owner = Uuid::new_v4();
    let intruder = Uuid::new_v4();

    let from = service
        .register_photo(
            owner,
            photo_upload("a.jpg", taken_on(1), Some(baseline_keypoints())),
        )
        .unwrap();
    let to = service
        .register_photo(
            intruder,
            photo_upload("b.jpg", taken_on(2), Some(baseline_keypoints())),
        )
        .unwrap();

    let err = service.analyze(intruder, from.id, to.id).await.unwrap_err();
    assert_eq!(err.code, ErrorCode::ResourceNotFound);
}

/// Estimator that returns fixed keypoints regardless of the photo
struct FixedEstimator(KeypointSet);

#[async_trait]
impl PoseEstimator for FixedEstimator {
    async fn extract_keypoints(&self, photo: &BodyPhoto) -> AppResult<KeypointSet> {
        if photo.file_url.is_empty() {
            return Err(AppError::keypoints_unavailable(photo.id));
        }
        Ok(self.0.clone())
    }
}

#[tokio::test]
async fn test_analyze_with_custom_estimator() {
    init_test_logging();
    let service = BodyProgressService::with_estimator(
        &ServerConfig::default(),
        FixedEstimator(baseline_keypoints()),
    );
    let user_id = Uuid::new_v4();

    let from = service
        .register_photo(user_id, photo_upload("a.jpg", taken_on(1), None))
        .unwrap();
    let to = service
        .register_photo(user_id, photo_upload("b.jpg", taken_on(2), None))
        .unwrap();

    let record = service.analyze(user_id, from.id, to.id).await.unwrap();
    assert_eq!(record.result.delta_shoulders_pct, 0.0);
    assert!((record.result.confidence - 0.9).abs() < 1e-9);
}

#[tokio::test]
async fn test_services_bundle_shares_configuration() {
    init_test_logging();
    let config = ServerConfig {
        default_hydration_goal_ml: 1500,
        ..ServerConfig::default()
    };
    let services = Services::from_config(&config);
    let user_id = Uuid::new_v4();

    assert_eq!(services.hydration.goal_ml(user_id), 1500);

    let from = services
        .body_progress
        .register_photo(
            user_id,
            photo_upload("a.jpg", taken_on(1), Some(baseline_keypoints())),
        )
        .unwrap();
    let record = services
        .body_progress
        .analyze(user_id, from.id, from.id)
        .await
        .unwrap();
    assert_eq!(record.result.verdict, VERDICT_MINIMAL);
}
