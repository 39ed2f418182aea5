use ferrous_dnslink_application::ports::NameProvider;
use ferrous_dnslink_application::use_cases::ResolveDnslinkUseCase;
use ferrous_dnslink_domain::{Config, ProviderKind};
use ferrous_dnslink_infrastructure::naming::{EnsNameProvider, StaticNameProvider};
use std::sync::Arc;
use tracing::info;

pub struct NamingServices {
    pub provider: Arc<dyn NameProvider>,
    pub resolve_dnslink: Arc<ResolveDnslinkUseCase>,
}

impl NamingServices {
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        let provider = Self::build_provider(config)?;

        let resolve_dnslink = Arc::new(
            ResolveDnslinkUseCase::new(provider.clone())
                .with_text_key(config.provider.text_key.clone()),
        );

        Ok(Self {
            provider,
            resolve_dnslink,
        })
    }

    fn build_provider(config: &Config) -> anyhow::Result<Arc<dyn NameProvider>> {
        let provider: Arc<dyn NameProvider> = match config.provider.kind {
            ProviderKind::Ens => {
                let ens = EnsNameProvider::from_config(&config.provider)?;
                info!(
                    registry = %ens.registry(),
                    timeout_secs = config.provider.request_timeout,
                    "ENS provider ready"
                );
                Arc::new(ens)
            }
            ProviderKind::Static => {
                let records = StaticNameProvider::new(
                    &config.provider.records,
                    config.provider.text_key.clone(),
                );
                info!(records = records.len(), "Static provider ready");
                Arc::new(records)
            }
        };

        Ok(provider)
    }
}
