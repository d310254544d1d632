// ABOUTME: lab-summary command extracting a headline and flags from report text
// ABOUTME: Uses the configured summary length
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::path::Path;

use somatrack::config::ServerConfig;
use somatrack::errors::AppResult;
use somatrack::intelligence::lab_flags::summarize_lab_text;

use super::read_input;

/// Summarize the report file and render the summary as JSON
pub async fn summary(config: &ServerConfig, file: &Path) -> AppResult<String> {
    let text = read_input(file).await?;
    let summary = summarize_lab_text(&text, config.lab_summary_max_chars);
    Ok(serde_json::to_string_pretty(&summary)?)
}
