// ABOUTME: Laboratory report models for uploaded exam results
// ABOUTME: Upload payload, stored report with extracted text, and text summaries
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Lab report upload with base64-encoded content
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LabReportUpload {
    /// Original file name
    pub file_name: String,
    /// Report content, base64 encoded
    pub content_base64: String,
    /// When the samples were collected
    pub collected_at: DateTime<Utc>,
    /// Free-form labels
    #[serde(default)]
    pub tags: Vec<String>,
}

/// Summary extracted from report text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabSummary {
    /// Short headline of the report
    pub summary: String,
    /// Follow-up flags raised by the report content
    pub flags: Vec<String>,
}

/// Stored lab report
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LabReport {
    /// Per-user sequential identifier (`lab-1`, `lab-2`, ...)
    pub id: String,
    /// Original file name
    pub file_name: String,
    /// When the samples were collected
    pub collected_at: DateTime<Utc>,
    /// Labels supplied at upload
    pub tags: Vec<String>,
    /// Text extracted from the report
    pub ocr_text: String,
    /// Short headline of the report
    pub summary: String,
    /// Follow-up flags
    pub flags: Vec<String>,
}
