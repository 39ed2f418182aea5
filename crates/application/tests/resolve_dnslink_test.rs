mod helpers;

use ferrous_dnslink_application::use_cases::ResolveDnslinkUseCase;
use ferrous_dnslink_domain::{DnslinkRecord, DomainError};
use helpers::MockNameProvider;
use std::sync::Arc;

fn make_use_case(provider: &MockNameProvider) -> ResolveDnslinkUseCase {
    ResolveDnslinkUseCase::new(Arc::new(provider.clone()))
}

// ── execute: success ───────────────────────────────────────────────────────

#[tokio::test]
async fn test_execute_returns_dnslink_record() {
    let provider = MockNameProvider::new();
    provider.set_text("example.com", "url", "ipfs.io/ipfs/abc");

    let result = make_use_case(&provider)
        .execute("/com/example/_dnslink/TXT")
        .await;

    let record = result.unwrap();
    assert_eq!(record, DnslinkRecord::new("example.com", "ipfs.io/ipfs/abc"));
    assert_eq!(record.txt_value(), "dnslink=ipfs.io/ipfs/abc");
    assert_eq!(provider.requested_domains(), vec!["example.com"]);
}

#[tokio::test]
async fn test_execute_uses_custom_text_key() {
    let provider = MockNameProvider::new();
    provider.set_text("vitalik.eth", "url", "wrong");
    provider.set_text("vitalik.eth", "dnslink", "/ipns/vitalik.eth");

    let use_case = make_use_case(&provider).with_text_key("dnslink");
    let record = use_case.execute("/eth/vitalik/_dnslink/TXT").await.unwrap();

    assert_eq!(use_case.text_key(), "dnslink");
    assert_eq!(record.url, "/ipns/vitalik.eth");
}

#[tokio::test]
async fn test_execute_is_idempotent() {
    let provider = MockNameProvider::new();
    provider.set_text("example.com", "url", "ipfs.io/ipfs/abc");
    let use_case = make_use_case(&provider);

    let first = use_case.execute("/com/example/_dnslink/TXT").await;
    let second = use_case.execute("/com/example/_dnslink/TXT").await;

    assert_eq!(first, second);
    assert_eq!(provider.resolve_calls(), 2);
    assert_eq!(provider.text_calls(), 2);
}

// ── execute: path rejections never reach the provider ──────────────────────

#[tokio::test]
async fn test_execute_non_txt_short_circuits() {
    let provider = MockNameProvider::new();

    let result = make_use_case(&provider).execute("/com/example/A").await;

    assert_eq!(result, Err(DomainError::NotTxt));
    assert_eq!(provider.resolve_calls(), 0);
}

#[tokio::test]
async fn test_execute_missing_marker_short_circuits() {
    let provider = MockNameProvider::new();

    let result = make_use_case(&provider).execute("/com/example/TXT").await;

    assert_eq!(result, Err(DomainError::NotDnslink));
    assert_eq!(provider.resolve_calls(), 0);
}

#[tokio::test]
async fn test_execute_empty_domain_is_not_found_without_lookup() {
    let provider = MockNameProvider::new();
    provider.add_resolver("");

    let result = make_use_case(&provider).execute("/_dnslink/TXT").await;

    assert_eq!(result, Err(DomainError::ResolverNotFound));
    assert_eq!(provider.resolve_calls(), 0);
}

// ── execute: provider outcomes ─────────────────────────────────────────────

#[tokio::test]
async fn test_execute_without_resolver_is_not_found() {
    let provider = MockNameProvider::new();

    let result = make_use_case(&provider)
        .execute("/com/unknown/_dnslink/TXT")
        .await;

    assert_eq!(result, Err(DomainError::ResolverNotFound));
    assert_eq!(provider.resolve_calls(), 1);
    assert_eq!(provider.text_calls(), 0);
}

#[tokio::test]
async fn test_execute_resolver_without_url_is_url_not_found() {
    let provider = MockNameProvider::new();
    provider.add_resolver("example.com");

    let result = make_use_case(&provider)
        .execute("/com/example/_dnslink/TXT")
        .await;

    assert_eq!(result, Err(DomainError::UrlNotFound));
    assert_eq!(provider.text_calls(), 1);
}

#[tokio::test]
async fn test_execute_empty_url_is_url_not_found() {
    let provider = MockNameProvider::new();
    provider.set_text("example.com", "url", "");

    let result = make_use_case(&provider)
        .execute("/com/example/_dnslink/TXT")
        .await;

    assert_eq!(result, Err(DomainError::UrlNotFound));
}

#[tokio::test]
async fn test_execute_propagates_upstream_failure_on_resolve() {
    let provider = MockNameProvider::new();
    provider.fail_resolve(DomainError::UpstreamUnavailable("connection refused".into()));

    let result = make_use_case(&provider)
        .execute("/com/example/_dnslink/TXT")
        .await;

    assert!(matches!(result, Err(DomainError::UpstreamUnavailable(_))));
    assert_eq!(provider.text_calls(), 0);
}

#[tokio::test]
async fn test_execute_propagates_timeout_on_text_lookup() {
    let provider = MockNameProvider::new();
    provider.add_resolver("example.com");
    provider.fail_text(DomainError::UpstreamTimeout);

    let result = make_use_case(&provider)
        .execute("/com/example/_dnslink/TXT")
        .await;

    assert_eq!(result, Err(DomainError::UpstreamTimeout));
}

// ── lookup ─────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_lookup_by_domain() {
    let provider = MockNameProvider::new();
    provider.set_text("docs.example.org", "url", "ipfs.io/ipfs/docs");

    let record = make_use_case(&provider)
        .lookup("docs.example.org".to_string())
        .await
        .unwrap();

    assert_eq!(record.txt_value(), "dnslink=ipfs.io/ipfs/docs");
}
