// ABOUTME: Core types and constants for the Somatrack health tracking platform
// ABOUTME: Foundation crate with error handling, domain models, and constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Somatrack Core
//!
//! Foundation crate providing shared types and constants for the Somatrack
//! platform. This crate is designed to change infrequently, enabling
//! incremental compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError` and `ErrorCode`
//! - **constants**: Application-wide constants organized by domain
//! - **models**: Keypoints, body photos, comparison results, and tracking records

/// Unified error handling system with standard error codes
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Core data models
pub mod models;
