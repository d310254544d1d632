// ABOUTME: Progress report export producing a downloadable document payload
// ABOUTME: Resolves the report period and encodes the document as base64
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use base64::{engine::general_purpose::STANDARD, Engine as _};
use chrono::{Datelike, NaiveDate};
use somatrack_core::constants::reports::CONTENT_TYPE_PDF;
use somatrack_core::errors::{AppError, AppResult};
use somatrack_core::models::{ExportedReport, ReportExportRequest};
use tracing::info;

/// Exports progress reports
#[derive(Debug, Clone, Copy, Default)]
pub struct ReportService;

impl ReportService {
    /// Create the service
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Build the report for the requested period
    ///
    /// The period defaults to the first of `today`'s month through `today`.
    ///
    /// # Errors
    ///
    /// Returns `ErrorCode::MissingRequiredField` without a user, or
    /// `ErrorCode::InvalidInput` if the period starts after it ends
    pub fn export(
        &self,
        request: &ReportExportRequest,
        today: NaiveDate,
    ) -> AppResult<ExportedReport> {
        if request.user_id.trim().is_empty() {
            return Err(AppError::missing_field("user_id"));
        }

        let start = request.start_date.unwrap_or_else(|| first_of_month(today));
        let end = request.end_date.unwrap_or(today);
        if start > end {
            return Err(AppError::invalid_input(format!(
                "start_date {start} is after end_date {end}"
            )));
        }

        let document = render_document(&request.user_id, start, end);
        info!(user_id = %request.user_id, %start, %end, "Progress report exported");

        Ok(ExportedReport {
            content_type: CONTENT_TYPE_PDF.to_owned(),
            filename: format!("report-{}.pdf", request.user_id),
            payload_base64: STANDARD.encode(document),
        })
    }
}

fn first_of_month(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

fn render_document(user_id: &str, start: NaiveDate, end: NaiveDate) -> String {
    format!(
        "Somatrack progress report\nUser: {user_id}\nPeriod: {start} to {end}\nStatus: consistent\n"
    )
}
