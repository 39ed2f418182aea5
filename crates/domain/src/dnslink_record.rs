use std::fmt;

pub const DNSLINK_PREFIX: &str = "dnslink=";

/// A resolved DNSLink: the domain it was published for and the content path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DnslinkRecord {
    pub domain: String,
    pub url: String,
}

impl DnslinkRecord {
    pub fn new(domain: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            domain: domain.into(),
            url: url.into(),
        }
    }

    /// TXT payload served to clients, e.g. `dnslink=ipfs.io/ipfs/abc`.
    pub fn txt_value(&self) -> String {
        format!("{}{}", DNSLINK_PREFIX, self.url)
    }
}

impl fmt::Display for DnslinkRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.domain, self.txt_value())
    }
}
