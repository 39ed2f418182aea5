use super::abi::{self, Address};
use super::namehash::namehash;
use super::rpc::{JsonRpcClient, RpcError};
use async_trait::async_trait;
use ferrous_dnslink_application::ports::{NameProvider, ResolverHandle};
use ferrous_dnslink_domain::config::{ConfigError, ProviderConfig};
use ferrous_dnslink_domain::DomainError;
use std::time::Duration;
use tracing::{debug, warn};

/// Resolves names through the ENS registry contract.
pub struct EnsNameProvider {
    rpc: JsonRpcClient,
    registry: Address,
}

impl EnsNameProvider {
    pub fn new(rpc: JsonRpcClient, registry: Address) -> Self {
        Self { rpc, registry }
    }

    pub fn from_config(config: &ProviderConfig) -> Result<Self, ConfigError> {
        let rpc_url = config
            .rpc_url
            .as_deref()
            .filter(|url| !url.trim().is_empty())
            .ok_or_else(|| ConfigError::Validation("ENS provider requires an RPC URL".to_string()))?;

        let registry = Address::parse(&config.registry_address)
            .map_err(|e| ConfigError::Validation(e.to_string()))?;

        let rpc = JsonRpcClient::new(rpc_url, Duration::from_secs(config.request_timeout))
            .map_err(|e| ConfigError::Validation(e.to_string()))?;

        Ok(Self::new(rpc, registry))
    }

    pub fn registry(&self) -> &Address {
        &self.registry
    }

    /// The registry's resolver for exactly `name`, if one is set.
    async fn registry_resolver(&self, name: &str) -> Result<Option<Address>, DomainError> {
        let data = self
            .rpc
            .eth_call(&self.registry, &abi::encode_resolver_call(&namehash(name)))
            .await?;

        // No code at the registry address answers with empty data.
        if data.is_empty() {
            warn!(registry = %self.registry, "Registry call returned no data");
            return Ok(None);
        }

        let resolver = abi::decode_address(&data).map_err(RpcError::from)?;
        Ok(Some(resolver).filter(|resolver| !resolver.is_zero()))
    }

    /// ENSIP-10 `supportsInterface(resolve(bytes,bytes))`. Resolvers that
    /// predate ERC-165 revert or return nothing.
    async fn supports_wildcard(&self, resolver: &Address) -> Result<bool, DomainError> {
        let call = abi::encode_supports_interface_call(abi::RESOLVE_SELECTOR);

        match self.rpc.eth_call(resolver, &call).await {
            Ok(data) if data.is_empty() => Ok(false),
            Ok(data) => Ok(abi::decode_bool(&data).map_err(RpcError::from)?),
            Err(RpcError::Reverted) => Ok(false),
            Err(e) => Err(e.into()),
        }
    }
}

/// Next name to try when `name` has no resolver. The walk stops below the
/// top-level label, which never carries a wildcard resolver.
fn parent_name(name: &str) -> Option<&str> {
    name.split_once('.')
        .map(|(_, parent)| parent)
        .filter(|parent| parent.contains('.'))
}

#[async_trait]
impl NameProvider for EnsNameProvider {
    async fn resolve(&self, domain: &str) -> Result<Option<ResolverHandle>, DomainError> {
        let mut current = domain;

        loop {
            if let Some(resolver) = self.registry_resolver(current).await? {
                if current == domain {
                    return Ok(Some(ResolverHandle::new(domain, resolver.to_string())));
                }

                if self.supports_wildcard(&resolver).await? {
                    debug!(
                        domain = %domain,
                        parent = %current,
                        resolver = %resolver,
                        "Using wildcard resolver"
                    );
                    return Ok(Some(ResolverHandle::wildcard(domain, resolver.to_string())));
                }

                debug!(
                    domain = %domain,
                    parent = %current,
                    "Parent resolver has no wildcard support"
                );
                return Ok(None);
            }

            match parent_name(current) {
                Some(parent) => current = parent,
                None => {
                    debug!(domain = %domain, "No resolver set");
                    return Ok(None);
                }
            }
        }
    }

    async fn get_text(
        &self,
        handle: &ResolverHandle,
        key: &str,
    ) -> Result<Option<String>, DomainError> {
        let resolver = Address::parse(&handle.resolver).map_err(RpcError::from)?;
        let text_call = abi::encode_text_call(&namehash(&handle.domain), key);

        let call = if handle.wildcard {
            let dns_name = abi::dns_encode(&handle.domain).map_err(RpcError::from)?;
            abi::encode_resolve_call(&dns_name, &text_call)
        } else {
            text_call
        };

        let data = match self.rpc.eth_call(&resolver, &call).await {
            Ok(data) => data,
            // Resolvers without the text profile revert.
            Err(RpcError::Reverted) => {
                debug!(resolver = %resolver, "text() reverted");
                return Ok(None);
            }
            Err(e) => return Err(e.into()),
        };

        let data = if handle.wildcard && !data.is_empty() {
            abi::decode_bytes(&data).map_err(RpcError::from)?
        } else {
            data
        };

        if data.is_empty() {
            return Ok(None);
        }

        let value = abi::decode_string(&data).map_err(RpcError::from)?;
        Ok(Some(value).filter(|value| !value.is_empty()))
    }

    fn provider_name(&self) -> &'static str {
        "ens"
    }
}
