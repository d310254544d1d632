// ABOUTME: Body progress intelligence algorithms for the Somatrack platform
// ABOUTME: Pure computations with no I/O, extracted for parallel compilation and modularity
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Somatrack Intelligence
//!
//! Stateless algorithms invoked by the service layer:
//!
//! - **`body_compare`**: pose-based comparison of two progress photos
//! - **`body_composition`**: body fat trend over bioimpedance readings
//! - **`lab_flags`**: headline and follow-up flags from lab report text

/// Pose-based body comparison engine
pub mod body_compare;

/// Body composition trends
pub mod body_composition;

/// Comparison engine configuration
pub mod config;

/// Lab report text analysis
pub mod lab_flags;

pub use body_compare::{compare, BodySegment, ComparisonEngine, SegmentMeasurement};
pub use config::{ComparisonConfig, ConfigError};
