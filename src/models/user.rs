use crate::error::{CatalogError, CatalogResult};

use super::{StreamingService, Subscription};

/// An account holding at most one subscription per streaming service
#[derive(Debug, Default)]
pub struct User {
    subscriptions: Vec<Subscription>,
}

impl User {
    /// Creates a user with no subscriptions
    pub fn new() -> Self {
        Self {
            subscriptions: Vec::new(),
        }
    }

    /// Subscribes to a service and returns the new subscription.
    ///
    /// Fails when the user already holds a subscription to that same
    /// service instance; a clone of the handle still counts as the same
    /// service.
    pub fn subscribe(&mut self, service: &StreamingService) -> CatalogResult<Subscription> {
        if self
            .subscriptions
            .iter()
            .any(|subscription| subscription.service() == service)
        {
            return Err(CatalogError::AlreadySubscribed(service.name().to_string()));
        }
        tracing::debug!(service = %service.name(), "user subscribed");
        let subscription = Subscription::new(service.clone());
        self.subscriptions.push(subscription.clone());
        Ok(subscription)
    }

    /// Subscriptions held, in the order they were created
    pub fn subscriptions(&self) -> &[Subscription] {
        &self.subscriptions
    }
}
