pub mod dnslink;

pub use dnslink::resolve_dnslink;
