use async_trait::async_trait;
use ferrous_dnslink_application::ports::{NameProvider, ResolverHandle};
use ferrous_dnslink_domain::config::StaticRecord;
use ferrous_dnslink_domain::DomainError;
use std::collections::HashMap;
use tracing::info;

/// Serves DNSLink targets from the `[[provider.records]]` table.
///
/// Every listed domain has a resolver holding a single text record under the
/// configured key.
pub struct StaticNameProvider {
    records: HashMap<String, String>,
    text_key: String,
}

impl StaticNameProvider {
    pub fn new(records: &[StaticRecord], text_key: impl Into<String>) -> Self {
        let records: HashMap<String, String> = records
            .iter()
            .map(|record| (normalize(&record.domain), record.url.clone()))
            .collect();

        info!(count = records.len(), "Loaded static DNSLink records");

        Self {
            records,
            text_key: text_key.into(),
        }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

fn normalize(domain: &str) -> String {
    domain.trim_end_matches('.').to_ascii_lowercase()
}

#[async_trait]
impl NameProvider for StaticNameProvider {
    async fn resolve(&self, domain: &str) -> Result<Option<ResolverHandle>, DomainError> {
        let key = normalize(domain);
        Ok(self
            .records
            .contains_key(&key)
            .then(|| ResolverHandle::new(domain, key)))
    }

    async fn get_text(
        &self,
        handle: &ResolverHandle,
        key: &str,
    ) -> Result<Option<String>, DomainError> {
        if key != self.text_key {
            return Ok(None);
        }
        Ok(self.records.get(&handle.resolver).cloned())
    }

    fn provider_name(&self) -> &'static str {
        "static"
    }
}
