use crate::error::AppError;
use crate::models::SiteSettings;
use crate::store::{ContentStore, PgStore};
use axum::{Json, extract::State};

/// Theme colors for the presentation layer. 404 until the singleton row has
/// been seeded.
pub async fn get_settings(
    State(store): State<PgStore>,
) -> Result<Json<SiteSettings>, AppError> {
    let settings = store.site_settings().await?.ok_or(AppError::NotFound)?;

    Ok(Json(settings))
}
