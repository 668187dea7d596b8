use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use wallet_adapter_common::{Environment, InjectedProvider};

use crate::util::property;
use crate::JsInjectedProvider;

/// Looks providers up on the page's `window`.
///
/// One [`JsInjectedProvider`] is kept per namespace for as long as the
/// extension keeps the same object there, so repeated lookups hand out the
/// same provider and the event closures registered on it stay alive.
#[derive(Debug, Clone, Default)]
pub struct WindowEnvironment {
    providers: Arc<Mutex<HashMap<String, Arc<JsInjectedProvider>>>>,
}

impl WindowEnvironment {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Environment for WindowEnvironment {
    fn provider(&self, namespace: &str) -> Option<Arc<dyn InjectedProvider>> {
        let window = web_sys::window()?;
        let mut providers = self.providers.lock().ok()?;

        let Some(object) = property(window.as_ref(), namespace) else {
            if providers.remove(namespace).is_some() {
                tracing::info!("window.{namespace} went away");
            }
            return None;
        };

        if let Some(provider) = providers.get(namespace).filter(|p| p.wraps(&object)) {
            return Some(provider.clone());
        }

        tracing::debug!("found window.{namespace}");

        let provider = Arc::new(JsInjectedProvider::new(namespace, object));
        providers.insert(namespace.to_string(), provider.clone());
        Some(provider)
    }
}
