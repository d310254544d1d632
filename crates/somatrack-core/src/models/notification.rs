// ABOUTME: Web push subscription models
// ABOUTME: Browser push endpoint registration and its status
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Browser push subscription as produced by the Push API
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PushSubscription {
    /// Push service endpoint URL
    pub endpoint: String,
    /// Encryption keys (`p256dh`, `auth`)
    pub keys: BTreeMap<String, String>,
    /// Browser user agent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_agent: Option<String>,
}

/// Outcome of a subscription registration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubscriptionStatus {
    /// Subscription stored
    Registered,
}
