// ABOUTME: Progress report export models
// ABOUTME: Export request with optional period and the encoded document it produces
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Request to export a progress report
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReportExportRequest {
    /// User the report is about
    #[serde(default)]
    pub user_id: String,
    /// First day of the period; defaults to the first of the current month
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<NaiveDate>,
    /// Last day of the period; defaults to today
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,
}

/// Exported report document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportedReport {
    /// MIME type of the payload
    pub content_type: String,
    /// Suggested download file name
    pub filename: String,
    /// Document bytes, base64 encoded
    pub payload_base64: String,
}
