use std::sync::Arc;

use mini_moka::sync::Cache;
use tracing::trace;

use crate::{models::Action, render::Description, traits::DescribeAction};

/// Memoizes descriptions keyed on the structural value of the action.
///
/// Only valid around pure renderers, which every [`DescribeAction`] implementation must be.
/// The cache is bounded by entry count; evicted entries are simply rendered again.
pub struct CachedRenderer<R> {
    inner: R,
    cache: Cache<Action, Arc<Description>>,
}

impl<R: DescribeAction> CachedRenderer<R> {
    pub fn new(inner: R, capacity: u64) -> Self {
        let cache = Cache::builder()
            .max_capacity(capacity)
            .build();
        Self { inner, cache }
    }

    pub fn inner(&self) -> &R {
        &self.inner
    }
}

impl<R: DescribeAction> DescribeAction for CachedRenderer<R> {
    fn describe(&self, action: &Action) -> Arc<Description> {
        if let Some(description) = self.cache.get(action) {
            trace!(
                protocol = %action.protocol(),
                action_type = %action.action_type(),
                "Description cache hit"
            );
            return description;
        }

        trace!(
            protocol = %action.protocol(),
            action_type = %action.action_type(),
            "Description cache miss"
        );
        let description = self.inner.describe(action);
        self.cache
            .insert(action.clone(), Arc::clone(&description));
        description
    }
}
