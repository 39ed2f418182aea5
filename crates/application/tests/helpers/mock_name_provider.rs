use async_trait::async_trait;
use ferrous_dnslink_application::ports::{NameProvider, ResolverHandle};
use ferrous_dnslink_domain::DomainError;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, RwLock};

/// Domain -> text records. A domain present with an empty map has a resolver
/// but no text records.
#[derive(Clone)]
pub struct MockNameProvider {
    domains: Arc<RwLock<HashMap<String, HashMap<String, String>>>>,
    resolve_error: Arc<RwLock<Option<DomainError>>>,
    text_error: Arc<RwLock<Option<DomainError>>>,
    resolve_calls: Arc<AtomicUsize>,
    text_calls: Arc<AtomicUsize>,
    requested_domains: Arc<RwLock<Vec<String>>>,
}

impl MockNameProvider {
    pub fn new() -> Self {
        Self {
            domains: Arc::new(RwLock::new(HashMap::new())),
            resolve_error: Arc::new(RwLock::new(None)),
            text_error: Arc::new(RwLock::new(None)),
            resolve_calls: Arc::new(AtomicUsize::new(0)),
            text_calls: Arc::new(AtomicUsize::new(0)),
            requested_domains: Arc::new(RwLock::new(Vec::new())),
        }
    }

    pub fn add_resolver(&self, domain: &str) {
        self.domains
            .write()
            .unwrap()
            .entry(domain.to_string())
            .or_default();
    }

    pub fn set_text(&self, domain: &str, key: &str, value: &str) {
        self.domains
            .write()
            .unwrap()
            .entry(domain.to_string())
            .or_default()
            .insert(key.to_string(), value.to_string());
    }

    pub fn fail_resolve(&self, error: DomainError) {
        *self.resolve_error.write().unwrap() = Some(error);
    }

    pub fn fail_text(&self, error: DomainError) {
        *self.text_error.write().unwrap() = Some(error);
    }

    pub fn resolve_calls(&self) -> usize {
        self.resolve_calls.load(Ordering::SeqCst)
    }

    pub fn text_calls(&self) -> usize {
        self.text_calls.load(Ordering::SeqCst)
    }

    pub fn requested_domains(&self) -> Vec<String> {
        self.requested_domains.read().unwrap().clone()
    }
}

impl Default for MockNameProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl NameProvider for MockNameProvider {
    async fn resolve(&self, domain: &str) -> Result<Option<ResolverHandle>, DomainError> {
        self.resolve_calls.fetch_add(1, Ordering::SeqCst);
        self.requested_domains
            .write()
            .unwrap()
            .push(domain.to_string());

        if let Some(err) = self.resolve_error.read().unwrap().clone() {
            return Err(err);
        }

        Ok(self
            .domains
            .read()
            .unwrap()
            .contains_key(domain)
            .then(|| ResolverHandle::new(domain, format!("mock:{}", domain))))
    }

    async fn get_text(
        &self,
        handle: &ResolverHandle,
        key: &str,
    ) -> Result<Option<String>, DomainError> {
        self.text_calls.fetch_add(1, Ordering::SeqCst);

        if let Some(err) = self.text_error.read().unwrap().clone() {
            return Err(err);
        }

        Ok(self
            .domains
            .read()
            .unwrap()
            .get(&handle.domain)
            .and_then(|records| records.get(key).cloned()))
    }

    fn provider_name(&self) -> &'static str {
        "mock"
    }
}
