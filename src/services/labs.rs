// ABOUTME: Lab report ingestion service decoding uploads and summarizing their text
// ABOUTME: Stores reports per user with sequential identifiers in upload order
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use base64::{engine::general_purpose::STANDARD, Engine as _};
use somatrack_core::errors::{AppError, AppResult};
use somatrack_core::models::{LabReport, LabReportUpload, LabSummary};
use somatrack_intelligence::lab_flags::summarize_lab_text;
use tracing::{info, warn};
use uuid::Uuid;

use crate::store::UserStore;

/// Lab reports per user
#[derive(Debug, Clone)]
pub struct LabsService {
    summary_max_chars: usize,
    reports: UserStore<Vec<LabReport>>,
}

impl LabsService {
    /// Create a service producing summaries of at most `summary_max_chars` characters
    #[must_use]
    pub fn new(summary_max_chars: usize) -> Self {
        Self {
            summary_max_chars,
            reports: UserStore::new(),
        }
    }

    /// Decode, summarize and store an uploaded report
    ///
    /// Content is treated as text; bytes that are not valid UTF-8 are replaced.
    ///
    /// # Errors
    ///
    /// Returns `ErrorCode::MissingRequiredField` for an empty file name, or
    /// `ErrorCode::InvalidFormat` if the content is not valid base64
    pub fn upload(&self, user_id: Uuid, upload: LabReportUpload) -> AppResult<LabReport> {
        if upload.file_name.trim().is_empty() {
            return Err(AppError::missing_field("file_name"));
        }

        let bytes = STANDARD.decode(upload.content_base64.trim()).map_err(|e| {
            warn!(user_id = %user_id, file_name = %upload.file_name, "Rejected lab upload");
            AppError::invalid_format("content_base64 is not valid base64")
                .with_user_id(user_id)
                .with_source(e)
        })?;
        let ocr_text = String::from_utf8_lossy(&bytes).into_owned();
        let LabSummary { summary, flags } = self.summarize(&ocr_text);

        let report = self.reports.write(user_id, |reports| {
            let report = LabReport {
                id: format!("lab-{}", reports.len() + 1),
                file_name: upload.file_name,
                collected_at: upload.collected_at,
                tags: upload.tags,
                ocr_text,
                summary,
                flags,
            };
            reports.push(report.clone());
            report
        });

        info!(
            user_id = %user_id,
            report_id = %report.id,
            flags = report.flags.len(),
            "Lab report stored"
        );
        Ok(report)
    }

    /// Headline and flags for report text
    #[must_use]
    pub fn summarize(&self, text: &str) -> LabSummary {
        summarize_lab_text(text, self.summary_max_chars)
    }

    /// The user's reports in upload order
    #[must_use]
    pub fn list(&self, user_id: Uuid) -> Vec<LabReport> {
        self.reports.read(user_id, Clone::clone)
    }
}
