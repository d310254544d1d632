// ABOUTME: Main library entry point for the Somatrack personal health backend
// ABOUTME: Wires configuration, logging, pose estimation, and domain services together
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Somatrack
//!
//! Backend services for personal body-progress tracking. The centerpiece is
//! the pose-based comparison of two progress photos: segment widths are
//! normalized by torso length so photos taken at different distances remain
//! comparable, and the result carries a pessimistic confidence score.
//!
//! ## Architecture
//!
//! - **`somatrack_core`**: errors, models and constants
//! - **`somatrack_intelligence`**: the comparison engine and other pure algorithms
//! - **Services**: per-user state for photos, bioimpedance, hydration, labs,
//!   push subscriptions and report export
//! - **Config**: environment-driven settings, including engine thresholds
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use somatrack::config::ServerConfig;
//! use somatrack::errors::AppResult;
//! use somatrack::services::Services;
//!
//! fn main() -> AppResult<()> {
//!     let config = ServerConfig::from_env()?;
//!     let services = Services::from_config(&config);
//!     println!("default hydration goal: {} mL", config.default_hydration_goal_ml);
//!     drop(services);
//!     Ok(())
//! }
//! ```

/// Environment configuration
pub mod config;

/// Structured logging setup
pub mod logging;

/// Pose keypoint sources
pub mod pose;

/// Domain services
pub mod services;

/// Per-user in-memory storage
pub mod store;

pub use somatrack_core::{constants, errors, models};
pub use somatrack_intelligence as intelligence;
