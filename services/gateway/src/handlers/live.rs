use crate::error::AppError;
use crate::models::Quote;
use crate::state::AppState;
use axum::{
    Json,
    extract::{Path, State, rejection::PathRejection},
};

pub async fn get_option_live(
    State(state): State<AppState>,
    option_id: Result<Path<String>, PathRejection>,
) -> Result<Json<Quote>, AppError> {
    let Path(option_id) = option_id.inspect_err(|e| {
        tracing::warn!(error = %e, "Rejected undecodable option id");
    })?;

    // Single fetch, retries live inside the fetcher
    let quote = state.fetcher.fetch(&option_id).await?;

    Ok(Json(quote.into_response_body()))
}

pub async fn not_found() -> AppError {
    AppError::NotFound
}
