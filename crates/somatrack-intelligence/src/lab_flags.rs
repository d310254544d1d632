// ABOUTME: Lab report text analysis producing a headline and follow-up flags
// ABOUTME: Keyword rules for cholesterol and glycated hemoglobin mentions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use somatrack_core::constants::labs::{EMPTY_SUMMARY, FLAG_CHOLESTEROL, FLAG_DIABETES};
use somatrack_core::models::LabSummary;

/// Keywords (lowercase) and the flag each one raises
const FLAG_RULES: &[(&[&str], &str)] = &[
    (&["cholesterol", "ldl", "hdl"], FLAG_CHOLESTEROL),
    (&["glycated hemoglobin", "hba1c"], FLAG_DIABETES),
];

/// Summarize extracted report text
///
/// The headline is the first line, cut to `max_chars` characters. Matching is
/// case-insensitive and each flag is raised at most once.
#[must_use]
pub fn summarize_lab_text(text: &str, max_chars: usize) -> LabSummary {
    let lowered = text.to_lowercase();
    let flags = FLAG_RULES
        .iter()
        .filter(|(keywords, _)| keywords.iter().any(|k| lowered.contains(k)))
        .map(|(_, flag)| (*flag).to_owned())
        .collect();

    let summary = match text.lines().next() {
        Some(first_line) => first_line.chars().take(max_chars).collect(),
        None => EMPTY_SUMMARY.to_owned(),
    };

    LabSummary { summary, flags }
}
