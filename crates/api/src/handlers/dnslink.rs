use axum::{extract::State, http::Uri, Json};
use tracing::debug;

use crate::{errors::ApiError, state::AppState};

/// `/<tld>/<name>/.../_dnslink/TXT` -> `["dnslink=<url>"]`
pub async fn resolve_dnslink(
    State(state): State<AppState>,
    uri: Uri,
) -> Result<Json<Vec<String>>, ApiError> {
    let path = uri.path();
    debug!(path = %path, "DNSLink lookup");

    let record = state.resolve_dnslink.execute(path).await?;

    Ok(Json(vec![record.txt_value()]))
}
