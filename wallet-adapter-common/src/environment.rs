use std::sync::Arc;

use crate::InjectedProvider;

/// The global scope wallet extensions inject their provider objects into.
///
/// The environment owns the providers. Adapters only keep weak handles, the
/// extension may replace or remove its object at any time.
pub trait Environment {
    fn provider(&self, namespace: &str) -> Option<Arc<dyn InjectedProvider>>;
}
