pub mod dnslink;

pub use dnslink::ResolveDnslinkUseCase;
