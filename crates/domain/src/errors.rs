use thiserror::Error;

/// Failures of a single DNSLink lookup.
///
/// The `Display` strings of the lookup variants are the exact `error` values
/// returned to HTTP clients.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("not TXT")]
    NotTxt,

    #[error("not _dnslink")]
    NotDnslink,

    #[error("not found")]
    ResolverNotFound,

    #[error("url not found")]
    UrlNotFound,

    #[error("Upstream provider unavailable: {0}")]
    UpstreamUnavailable(String),

    #[error("Upstream provider timed out")]
    UpstreamTimeout,
}

impl DomainError {
    /// True for the "record does not exist" family, as opposed to upstream faults.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::NotTxt | Self::NotDnslink | Self::ResolverNotFound | Self::UrlNotFound
        )
    }
}
