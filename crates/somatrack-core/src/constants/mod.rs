// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Pure data constants organized by domain for the Somatrack platform
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Constants module
//!
//! Constants are grouped into logical domains rather than being in a single large file.

/// Service identity used in structured logs
pub mod service_names {
    /// Default service name
    pub const SOMATRACK: &str = "somatrack";
}

/// Body progress comparison thresholds
pub mod body_comparison {
    /// Minimum absolute percent delta for a segment to appear in the verdict
    pub const SIGNIFICANT_DELTA_PCT: f64 = 2.5;
    /// Minimum global confidence required to report a visible change
    pub const MIN_VERDICT_CONFIDENCE: f64 = 0.7;
    /// Waist delta (in percent) beyond which the fat hint reports a change
    pub const FAT_HINT_DELTA_PCT: f64 = 2.0;
    /// Vertical shoulder shift (normalized image units) that triggers a posture hint
    pub const POSTURE_SHIFT_THRESHOLD: f64 = 0.01;

    /// Fat hint when the waist narrowed
    pub const FAT_HINT_REDUCTION: &str = "slight reduction in abdominal region";
    /// Fat hint when the waist widened
    pub const FAT_HINT_INCREASE: &str = "possible increase in abdominal volume";
    /// Fat hint when the waist barely moved
    pub const FAT_HINT_MINIMAL: &str = "minimal apparent change";

    /// Posture hint when the shoulder line moved up in the image
    pub const POSTURE_HINT_ALIGNED: &str = "shoulders more aligned";
    /// Posture hint when the shoulder line moved down in the image
    pub const POSTURE_HINT_ELEVATED: &str = "shoulders slightly elevated";

    /// Verdict prefix when at least one segment changed significantly
    pub const VERDICT_VISIBLE_PREFIX: &str = "Visible change";
    /// Verdict when nothing significant can be reported
    pub const VERDICT_MINIMAL: &str =
        "Minimal or undetectable change due to small variations or low confidence.";
}

/// Hydration defaults
pub mod hydration {
    /// Daily goal applied until the user sets one (mL)
    pub const DEFAULT_DAILY_GOAL_ML: u32 = 2000;
}

/// Bioimpedance validation ranges
pub mod bioimpedance {
    /// Highest accepted body fat percentage
    pub const MAX_FAT_PCT: f64 = 70.0;
    /// Highest accepted muscle percentage
    pub const MAX_MUSCLE_PCT: f64 = 100.0;
}

/// Lab report summarization
pub mod labs {
    /// Default maximum summary length (characters)
    pub const DEFAULT_SUMMARY_MAX_CHARS: usize = 280;
    /// Summary used when the report text is empty
    pub const EMPTY_SUMMARY: &str = "Insufficient data";
    /// Flag raised when cholesterol values appear in the report
    pub const FLAG_CHOLESTEROL: &str = "monitor cholesterol";
    /// Flag raised when glycated hemoglobin appears in the report
    pub const FLAG_DIABETES: &str = "check for diabetes";
}

/// Report export
pub mod reports {
    /// Content type advertised for exported reports
    pub const CONTENT_TYPE_PDF: &str = "application/pdf";
}

/// Body photo storage layout
pub mod storage {
    /// Default base URL for photo objects
    pub const DEFAULT_MEDIA_BASE_URL: &str = "https://cdn.example.com";
}
