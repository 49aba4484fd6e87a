use crate::{
    error::AppError,
    images::{ImageResolver, ResolvedImage, resolve_gallery},
    models::Location,
    params::ListParams,
};
use axum::{
    Json,
    extract::{Path, Query, State},
};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;

#[derive(Deserialize, Debug, Clone, Copy)]
#[serde(rename_all = "lowercase")]
pub enum LocationSort {
    Name,
    Date,
}

#[derive(Serialize)]
pub struct LocationSummary {
    slug: String,
    name: String,
    city: Option<String>,
    region: Option<String>,
    featured: bool,
    cover_image: String,
}

impl LocationSummary {
    fn from_record(record: Location, resolver: &ImageResolver) -> Self {
        Self {
            cover_image: resolver.resolve(record.cover_image.as_deref()),
            slug: record.slug,
            name: record.name,
            city: record.city,
            region: record.region,
            featured: record.featured,
        }
    }
}

#[derive(Serialize)]
pub struct LocationDetail {
    slug: String,
    name: String,
    city: Option<String>,
    region: Option<String>,
    cover_image: String,
    images: Vec<ResolvedImage>,
}

impl LocationDetail {
    fn from_record(record: Location, resolver: &ImageResolver) -> Self {
        Self {
            cover_image: resolver.resolve(record.cover_image.as_deref()),
            images: resolve_gallery(resolver, &record.images),
            slug: record.slug,
            name: record.name,
            city: record.city,
            region: record.region,
        }
    }
}

fn list_sql(params: &ListParams<LocationSort>) -> String {
    let column = match params.sort() {
        Some(LocationSort::Name) => "name",
        _ => "created_at",
    };
    let direction = params.sort_by().to_sql();

    format!(
        r#"SELECT
            id,
            slug,
            name,
            city,
            region,
            cover_image,
            images,
            featured,
            published,
            created_at
        FROM
            locations
        WHERE
            published = TRUE
        AND
            ($3::TEXT IS NULL OR name ILIKE $3 OR city ILIKE $3)
        ORDER BY
            {} {}
        LIMIT $1 OFFSET $2"#,
        column, direction
    )
}

const DETAIL_SQL: &str = "SELECT
        id,
        slug,
        name,
        city,
        region,
        cover_image,
        images,
        featured,
        published,
        created_at
    FROM
        locations
    WHERE
        slug = $1
    AND
        published = TRUE";

pub async fn get_locations(
    State(pool): State<PgPool>,
    State(resolver): State<ImageResolver>,
    Query(params): Query<ListParams<LocationSort>>,
) -> Result<Json<Vec<LocationSummary>>, AppError> {
    let query = list_sql(&params);
    let locations = sqlx::query_as::<_, Location>(&query)
        .bind(params.limit())
        .bind(params.offset())
        .bind(params.search_pattern())
        .fetch_all(&pool)
        .await?;

    let response = locations
        .into_iter()
        .map(|l| LocationSummary::from_record(l, &resolver))
        .collect();

    Ok(Json(response))
}

pub async fn get_one_location(
    State(pool): State<PgPool>,
    State(resolver): State<ImageResolver>,
    Path(slug): Path<String>,
) -> Result<Json<LocationDetail>, AppError> {
    let location = sqlx::query_as::<_, Location>(DETAIL_SQL)
        .bind(slug)
        .fetch_optional(&pool)
        .await?
        .ok_or(AppError::NotFound)?;

    Ok(Json(LocationDetail::from_record(location, &resolver)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::SortDirection;

    #[test]
    fn every_list_variant_filters_unpublished() {
        for sort in [None, Some(LocationSort::Date), Some(LocationSort::Name)] {
            for direction in [None, Some(SortDirection::Asc), Some(SortDirection::Desc)] {
                for search in [None, Some("burg")] {
                    let sql = list_sql(&ListParams::with(sort, direction, search));
                    assert!(sql.contains("published = TRUE"), "query lost filter: {sql}");
                }
            }
        }
    }

    #[test]
    fn detail_lookup_filters_unpublished() {
        assert!(DETAIL_SQL.contains("published = TRUE"));
    }
}
