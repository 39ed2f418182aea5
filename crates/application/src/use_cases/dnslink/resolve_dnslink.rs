use crate::ports::NameProvider;
use ferrous_dnslink_domain::{DnslinkPath, DnslinkRecord, DomainError};
use std::sync::Arc;
use tracing::{debug, info, instrument};

pub const DEFAULT_TEXT_KEY: &str = "url";

/// Turns a reversed-domain request path into a DNSLink record.
pub struct ResolveDnslinkUseCase {
    provider: Arc<dyn NameProvider>,
    text_key: String,
}

impl ResolveDnslinkUseCase {
    pub fn new(provider: Arc<dyn NameProvider>) -> Self {
        Self {
            provider,
            text_key: DEFAULT_TEXT_KEY.to_string(),
        }
    }

    pub fn with_text_key(mut self, text_key: impl Into<String>) -> Self {
        self.text_key = text_key.into();
        self
    }

    pub fn text_key(&self) -> &str {
        &self.text_key
    }

    #[instrument(skip(self), fields(provider = self.provider.provider_name()))]
    pub async fn execute(&self, path: &str) -> Result<DnslinkRecord, DomainError> {
        let path = DnslinkPath::parse(path);
        debug!(labels = ?path.labels(), "Parsed request path");

        let domain = path.into_domain()?;
        debug!(domain = %domain, "Derived domain");

        self.lookup(domain).await
    }

    /// Resolver first, then the text record on that resolver.
    pub async fn lookup(&self, domain: String) -> Result<DnslinkRecord, DomainError> {
        if domain.is_empty() {
            return Err(DomainError::ResolverNotFound);
        }

        let handle = self
            .provider
            .resolve(&domain)
            .await?
            .ok_or(DomainError::ResolverNotFound)?;
        debug!(resolver = %handle, "Resolver found");

        let url = self
            .provider
            .get_text(&handle, &self.text_key)
            .await?
            .filter(|url| !url.is_empty())
            .ok_or(DomainError::UrlNotFound)?;

        info!(domain = %domain, url = %url, "DNSLink resolved");

        Ok(DnslinkRecord::new(domain, url))
    }
}
