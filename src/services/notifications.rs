// ABOUTME: Web push subscription registry
// ABOUTME: Stores browser push endpoints per user for reminder delivery
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use somatrack_core::errors::{AppError, AppResult};
use somatrack_core::models::{PushSubscription, SubscriptionStatus};
use tracing::info;
use uuid::Uuid;

use crate::store::UserStore;

/// Push subscriptions per user
#[derive(Debug, Clone, Default)]
pub struct NotificationService {
    subscriptions: UserStore<Vec<PushSubscription>>,
}

impl NotificationService {
    /// Create an empty registry
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a subscription; re-registering an endpoint replaces its keys
    ///
    /// # Errors
    ///
    /// Returns `ErrorCode::MissingRequiredField` if the endpoint is empty
    pub fn register(
        &self,
        user_id: Uuid,
        subscription: PushSubscription,
    ) -> AppResult<SubscriptionStatus> {
        if subscription.endpoint.trim().is_empty() {
            return Err(AppError::missing_field("endpoint"));
        }

        self.subscriptions.write(user_id, |subscriptions| {
            match subscriptions
                .iter_mut()
                .find(|existing| existing.endpoint == subscription.endpoint)
            {
                Some(existing) => *existing = subscription,
                None => subscriptions.push(subscription),
            }
        });

        info!(user_id = %user_id, "Push subscription registered");
        Ok(SubscriptionStatus::Registered)
    }

    /// The user's subscriptions in registration order
    #[must_use]
    pub fn list(&self, user_id: Uuid) -> Vec<PushSubscription> {
        self.subscriptions.read(user_id, Clone::clone)
    }
}
