use ferrous_dnslink_application::use_cases::ResolveDnslinkUseCase;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub resolve_dnslink: Arc<ResolveDnslinkUseCase>,
}

impl AppState {
    pub fn new(resolve_dnslink: Arc<ResolveDnslinkUseCase>) -> Self {
        Self { resolve_dnslink }
    }
}
