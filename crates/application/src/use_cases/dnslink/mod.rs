mod resolve_dnslink;

pub use resolve_dnslink::{ResolveDnslinkUseCase, DEFAULT_TEXT_KEY};
