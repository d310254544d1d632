// ABOUTME: Command modules for somatrack-cli
// ABOUTME: Body comparison and lab summary commands
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub mod compare;
pub mod lab;

use std::path::Path;

use somatrack::errors::{AppError, AppResult};
use tokio::fs;

/// Read a whole input file, naming the path in the error
async fn read_input(path: &Path) -> AppResult<String> {
    fs::read_to_string(path).await.map_err(|e| {
        AppError::invalid_input(format!("Cannot read {}", path.display()))
            .with_resource_id(path.display().to_string())
            .with_source(e)
    })
}
