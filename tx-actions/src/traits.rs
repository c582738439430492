use std::sync::Arc;

use crate::{models::Action, render::Description};

/// Formats a decimal amount string for display.
///
/// Amounts arrive as decimal strings straight from the decoder. Implementations must not fail:
/// input they cannot interpret should come back in some readable form, typically unchanged.
#[cfg_attr(any(test, feature = "test-utils"), mockall::automock)]
pub trait AmountFormatter: Send + Sync {
    fn format(&self, raw: &str) -> String;
}

/// Produces the structured description of an action.
///
/// Implementations must be pure: equal actions give equal descriptions. Callers rely on this to
/// memoize results.
pub trait DescribeAction: Send + Sync {
    fn describe(&self, action: &Action) -> Arc<Description>;
}
