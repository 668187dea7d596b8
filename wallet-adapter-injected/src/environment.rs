use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use wallet_adapter_common::{Environment, InjectedProvider};

/// In-memory stand-in for the browser's global object.
///
/// Holds the only strong reference to each provider, so removing one
/// behaves like the extension tearing its object down.
#[derive(Default, Clone)]
pub struct InjectedEnvironment {
    providers: Arc<Mutex<HashMap<String, Arc<dyn InjectedProvider>>>>,
}

impl std::fmt::Debug for InjectedEnvironment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let namespaces: Vec<String> = self
            .providers
            .lock()
            .map(|p| p.keys().cloned().collect())
            .unwrap_or_default();
        f.debug_struct("InjectedEnvironment")
            .field("namespaces", &namespaces)
            .finish()
    }
}

impl InjectedEnvironment {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn inject(
        &self,
        namespace: impl ToString,
        provider: Arc<dyn InjectedProvider>,
    ) -> Option<Arc<dyn InjectedProvider>> {
        let namespace = namespace.to_string();
        tracing::debug!("injecting provider at `{namespace}`");
        self.providers.lock().ok()?.insert(namespace, provider)
    }

    pub fn remove(&self, namespace: &str) -> Option<Arc<dyn InjectedProvider>> {
        tracing::debug!("removing provider at `{namespace}`");
        self.providers.lock().ok()?.remove(namespace)
    }
}

impl Environment for InjectedEnvironment {
    fn provider(&self, namespace: &str) -> Option<Arc<dyn InjectedProvider>> {
        self.providers.lock().ok()?.get(namespace).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Marker;

    impl InjectedProvider for Marker {
        fn flag(&self, name: &str) -> bool {
            name == "isMarker"
        }
    }

    #[test]
    fn inject_and_remove() {
        let env = InjectedEnvironment::new();
        assert!(env.provider("marker").is_none());

        env.inject("marker", Arc::new(Marker));
        assert!(env.provider("marker").unwrap().flag("isMarker"));

        assert!(env.remove("marker").is_some());
        assert!(env.provider("marker").is_none());
    }
}
