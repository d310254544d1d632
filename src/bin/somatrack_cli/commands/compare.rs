// ABOUTME: compare command running the body comparison engine on two keypoint files
// ABOUTME: Rejects missing or empty keypoint sets before the engine runs
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::path::Path;

use somatrack::config::ServerConfig;
use somatrack::errors::{AppError, AppResult};
use somatrack::intelligence::ComparisonEngine;
use somatrack::models::KeypointSet;
use tracing::{debug, info};

use super::read_input;

async fn load_keypoints(path: &Path) -> AppResult<KeypointSet> {
    let raw = read_input(path).await?;
    let keypoints: KeypointSet = serde_json::from_str(&raw)?;
    if keypoints.is_empty() {
        return Err(AppError::invalid_input(format!(
            "{} contains no keypoints",
            path.display()
        )));
    }
    debug!(path = %path.display(), landmarks = keypoints.len(), "Keypoints loaded");
    Ok(keypoints)
}

/// Compare the two keypoint files and render the result as JSON
pub async fn run(config: &ServerConfig, from: &Path, to: &Path, pretty: bool) -> AppResult<String> {
    let from_keypoints = load_keypoints(from).await?;
    let to_keypoints = load_keypoints(to).await?;

    let result = ComparisonEngine::new(config.comparison).compare(&from_keypoints, &to_keypoints);
    info!(confidence = result.confidence, "Comparison complete");

    let output = if pretty {
        serde_json::to_string_pretty(&result)?
    } else {
        serde_json::to_string(&result)?
    };
    Ok(output)
}
