// ABOUTME: Configuration module for the Somatrack service layer
// ABOUTME: Re-exports the environment-driven ServerConfig
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Environment variable parsing and validation
pub mod environment;

pub use environment::{Environment, ServerConfig};
