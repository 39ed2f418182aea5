use async_trait::async_trait;
use ferrous_dnslink_domain::DomainError;
use std::fmt;

/// Opaque reference to the record set a provider holds for one domain.
///
/// `resolver` is whatever the provider needs to address that record set
/// (a resolver contract address for ENS, the table key for static records).
/// `wildcard` marks a resolver found on a parent name that answers for
/// `domain` through extended resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolverHandle {
    pub domain: String,
    pub resolver: String,
    pub wildcard: bool,
}

impl ResolverHandle {
    pub fn new(domain: impl Into<String>, resolver: impl Into<String>) -> Self {
        Self {
            domain: domain.into(),
            resolver: resolver.into(),
            wildcard: false,
        }
    }

    pub fn wildcard(domain: impl Into<String>, resolver: impl Into<String>) -> Self {
        Self {
            wildcard: true,
            ..Self::new(domain, resolver)
        }
    }
}

impl fmt::Display for ResolverHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.wildcard {
            write!(f, "{}@{} (wildcard)", self.domain, self.resolver)
        } else {
            write!(f, "{}@{}", self.domain, self.resolver)
        }
    }
}

/// Upstream naming service consulted for each lookup.
///
/// `Ok(None)` means "does not exist"; `Err` is reserved for failures to talk
/// to the provider.
#[async_trait]
pub trait NameProvider: Send + Sync {
    async fn resolve(&self, domain: &str) -> Result<Option<ResolverHandle>, DomainError>;

    async fn get_text(
        &self,
        handle: &ResolverHandle,
        key: &str,
    ) -> Result<Option<String>, DomainError>;

    fn provider_name(&self) -> &'static str;
}
