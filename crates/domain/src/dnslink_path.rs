use crate::DomainError;

/// Record type accepted in the final path label.
pub const TXT_RECORD_TYPE: &str = "TXT";

/// Label that must precede the record type.
pub const DNSLINK_LABEL: &str = "_dnslink";

/// A request path split into labels, most-significant domain label first.
///
/// `/com/example/_dnslink/TXT` holds `["com", "example", "_dnslink", "TXT"]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DnslinkPath {
    labels: Vec<String>,
}

impl DnslinkPath {
    /// Splits on `/`, dropping the empty labels left by leading, trailing or
    /// repeated separators.
    pub fn parse(path: &str) -> Self {
        let labels = path
            .split('/')
            .filter(|label| !label.is_empty())
            .map(str::to_string)
            .collect();

        Self { labels }
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Validates the `_dnslink/TXT` suffix and rebuilds the domain.
    ///
    /// A missing record type fails as `NotTxt` and a missing marker as
    /// `NotDnslink`. No remaining labels yields an empty domain.
    pub fn into_domain(mut self) -> Result<String, DomainError> {
        match self.labels.pop() {
            Some(record_type) if record_type == TXT_RECORD_TYPE => {}
            _ => return Err(DomainError::NotTxt),
        }

        match self.labels.pop() {
            Some(marker) if marker == DNSLINK_LABEL => {}
            _ => return Err(DomainError::NotDnslink),
        }

        self.labels.reverse();
        Ok(self.labels.join("."))
    }
}
