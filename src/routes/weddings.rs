use crate::{
    error::AppError,
    images::{ImageResolver, ResolvedImage, resolve_gallery},
    models::Wedding,
    params::ListParams,
};
use axum::{
    Json,
    extract::{Path, Query, State},
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::PgPool;

#[derive(Deserialize, Debug, Clone, Copy)]
#[serde(rename_all = "lowercase")]
pub enum WeddingSort {
    Date,
    Title,
}

#[derive(Serialize)]
pub struct WeddingSummary {
    slug: String,
    title: String,
    couple_names: Option<String>,
    wedding_date: Option<NaiveDate>,
    featured: bool,
    cover_image: String,
}

impl WeddingSummary {
    fn from_record(record: Wedding, resolver: &ImageResolver) -> Self {
        Self {
            cover_image: resolver.resolve(record.cover_image.as_deref()),
            slug: record.slug,
            title: record.title,
            couple_names: record.couple_names,
            wedding_date: record.wedding_date,
            featured: record.featured,
        }
    }
}

#[derive(Serialize)]
pub struct WeddingDetail {
    slug: String,
    title: String,
    couple_names: Option<String>,
    wedding_date: Option<NaiveDate>,
    cover_image: String,
    images: Vec<ResolvedImage>,
}

impl WeddingDetail {
    fn from_record(record: Wedding, resolver: &ImageResolver) -> Self {
        Self {
            cover_image: resolver.resolve(record.cover_image.as_deref()),
            images: resolve_gallery(resolver, &record.images),
            slug: record.slug,
            title: record.title,
            couple_names: record.couple_names,
            wedding_date: record.wedding_date,
        }
    }
}

fn list_sql(params: &ListParams<WeddingSort>) -> String {
    let column = match params.sort() {
        Some(WeddingSort::Title) => "title",
        _ => "COALESCE(wedding_date, created_at::date)",
    };
    let direction = params.sort_by().to_sql();

    format!(
        r#"SELECT
            id,
            slug,
            title,
            couple_names,
            cover_image,
            images,
            featured,
            published,
            wedding_date,
            created_at
        FROM
            weddings
        WHERE
            published = TRUE
        AND
            ($3::TEXT IS NULL OR title ILIKE $3 OR couple_names ILIKE $3)
        ORDER BY
            {} {}
        LIMIT $1 OFFSET $2"#,
        column, direction
    )
}

const DETAIL_SQL: &str = "SELECT
        id,
        slug,
        title,
        couple_names,
        cover_image,
        images,
        featured,
        published,
        wedding_date,
        created_at
    FROM
        weddings
    WHERE
        slug = $1
    AND
        published = TRUE";

pub async fn get_weddings(
    State(pool): State<PgPool>,
    State(resolver): State<ImageResolver>,
    Query(params): Query<ListParams<WeddingSort>>,
) -> Result<Json<Vec<WeddingSummary>>, AppError> {
    let query = list_sql(&params);
    let weddings = sqlx::query_as::<_, Wedding>(&query)
        .bind(params.limit())
        .bind(params.offset())
        .bind(params.search_pattern())
        .fetch_all(&pool)
        .await?;

    let response = weddings
        .into_iter()
        .map(|w| WeddingSummary::from_record(w, &resolver))
        .collect();

    Ok(Json(response))
}

pub async fn get_one_wedding(
    State(pool): State<PgPool>,
    State(resolver): State<ImageResolver>,
    Path(slug): Path<String>,
) -> Result<Json<WeddingDetail>, AppError> {
    let wedding = sqlx::query_as::<_, Wedding>(DETAIL_SQL)
        .bind(slug)
        .fetch_optional(&pool)
        .await?
        .ok_or(AppError::NotFound)?;

    Ok(Json(WeddingDetail::from_record(wedding, &resolver)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::SortDirection;

    #[test]
    fn every_list_variant_filters_unpublished() {
        for sort in [None, Some(WeddingSort::Date), Some(WeddingSort::Title)] {
            for direction in [None, Some(SortDirection::Asc), Some(SortDirection::Desc)] {
                for search in [None, Some("schloss")] {
                    let sql = list_sql(&ListParams::with(sort, direction, search));
                    assert!(sql.contains("published = TRUE"), "query lost filter: {sql}");
                    assert!(sql.contains("ORDER BY"), "query lost ordering: {sql}");
                }
            }
        }
    }

    #[test]
    fn detail_lookup_filters_unpublished() {
        assert!(DETAIL_SQL.contains("published = TRUE"));
    }
}
