use axum::extract::{Query, State};
use axum::http::{HeaderMap, header};
use axum::response::{Html, IntoResponse, Response};
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use std::sync::Arc;

use crate::error::AppError;
use crate::metrics::REQUEST_TOTAL;
use crate::models::GenerateParams;
use crate::pages;
use crate::state::AppState;

// Raw image wanted: explicit embed=true, or an image Accept header
fn wants_embed(params: &GenerateParams, headers: &HeaderMap) -> bool {
    if params.embed.as_deref() == Some("true") {
        return true;
    }
    headers
        .get(header::ACCEPT)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|accept| accept.starts_with("image/"))
}

pub async fn generate_handler(
    State(state): State<Arc<AppState>>,
    Query(pairs): Query<Vec<(String, String)>>,
    headers: HeaderMap,
) -> Result<Response, AppError> {
    REQUEST_TOTAL.inc();

    let params = GenerateParams::from_pairs(pairs);

    // Query already percent-decoded the value
    let prompt = params.prompt.as_str();
    if prompt.is_empty() {
        return Err(AppError::MissingPrompt);
    }

    let image_data = state.cache.get_or_generate(prompt).await?;

    if wants_embed(&params, &headers) {
        let bytes = STANDARD.decode(image_data.as_bytes())?;
        let cache_control = format!("public, max-age={}", state.cache.ttl().num_seconds());
        tracing::info!(bytes = bytes.len(), "serving embedded image");
        return Ok((
            [
                (header::CONTENT_TYPE, "image/png".to_string()),
                (header::CACHE_CONTROL, cache_control),
            ],
            bytes,
        )
            .into_response());
    }

    Ok(Html(pages::result_page(prompt, &image_data)).into_response())
}
