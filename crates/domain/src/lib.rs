//! Ferrous DNSLink Domain Layer
pub mod config;
pub mod dnslink_path;
pub mod dnslink_record;
pub mod errors;

pub use config::{CliOverrides, Config, ConfigError, ProviderKind};
pub use dnslink_path::{DnslinkPath, DNSLINK_LABEL, TXT_RECORD_TYPE};
pub use dnslink_record::DnslinkRecord;
pub use errors::DomainError;
