use crate::aggregate::{self, HomepageViewModel};
use crate::error::AppError;
use crate::AppState;
use axum::{Json, extract::State};
use std::time::Duration;

pub async fn get_homepage(
    State(state): State<AppState>,
) -> Result<Json<HomepageViewModel>, AppError> {
    let budget = Duration::from_millis(state.config.query_timeout_ms);
    let model = aggregate::assemble(&state.store, &state.resolver, budget).await?;

    Ok(Json(model))
}
