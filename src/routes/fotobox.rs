use crate::{
    error::AppError,
    images::{ImageResolver, ResolvedImage, resolve_gallery},
    models::FotoboxService,
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
pub enum ServiceSort {
    Name,
    Date,
}

#[derive(Serialize)]
pub struct ServiceSummary {
    slug: String,
    name: String,
    service_type: Option<String>,
    price: Option<String>,
    featured_image: String,
}

impl ServiceSummary {
    fn from_record(record: FotoboxService, resolver: &ImageResolver) -> Self {
        Self {
            featured_image: resolver.resolve(record.featured_image.as_deref()),
            slug: record.slug,
            name: record.name,
            service_type: record.service_type,
            price: record.price,
        }
    }
}

#[derive(Serialize)]
pub struct ServiceDetail {
    slug: String,
    name: String,
    service_type: Option<String>,
    price: Option<String>,
    featured_image: String,
    images: Vec<ResolvedImage>,
}

impl ServiceDetail {
    fn from_record(record: FotoboxService, resolver: &ImageResolver) -> Self {
        Self {
            featured_image: resolver.resolve(record.featured_image.as_deref()),
            images: resolve_gallery(resolver, &record.images),
            slug: record.slug,
            name: record.name,
            service_type: record.service_type,
            price: record.price,
        }
    }
}

fn list_sql(params: &ListParams<ServiceSort>) -> String {
    let column = match params.sort() {
        Some(ServiceSort::Name) => "name",
        _ => "created_at",
    };
    let direction = params.sort_by().to_sql();

    format!(
        r#"SELECT
            id,
            slug,
            name,
            service_type,
            price,
            featured_image,
            images,
            published,
            created_at
        FROM
            fotobox_services
        WHERE
            published = TRUE
        AND
            ($3::TEXT IS NULL OR name ILIKE $3 OR service_type ILIKE $3)
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
        service_type,
        price,
        featured_image,
        images,
        published,
        created_at
    FROM
        fotobox_services
    WHERE
        slug = $1
    AND
        published = TRUE";

pub async fn get_services(
    State(pool): State<PgPool>,
    State(resolver): State<ImageResolver>,
    Query(params): Query<ListParams<ServiceSort>>,
) -> Result<Json<Vec<ServiceSummary>>, AppError> {
    let query = list_sql(&params);
    let services = sqlx::query_as::<_, FotoboxService>(&query)
        .bind(params.limit())
        .bind(params.offset())
        .bind(params.search_pattern())
        .fetch_all(&pool)
        .await?;

    let response = services
        .into_iter()
        .map(|s| ServiceSummary::from_record(s, &resolver))
        .collect();

    Ok(Json(response))
}

pub async fn get_one_service(
    State(pool): State<PgPool>,
    State(resolver): State<ImageResolver>,
    Path(slug): Path<String>,
) -> Result<Json<ServiceDetail>, AppError> {
    let service = sqlx::query_as::<_, FotoboxService>(DETAIL_SQL)
        .bind(slug)
        .fetch_optional(&pool)
        .await?
        .ok_or(AppError::NotFound)?;

    Ok(Json(ServiceDetail::from_record(service, &resolver)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::SortDirection;

    #[test]
    fn every_list_variant_filters_unpublished() {
        for sort in [None, Some(ServiceSort::Date), Some(ServiceSort::Name)] {
            for direction in [None, Some(SortDirection::Asc), Some(SortDirection::Desc)] {
                for search in [None, Some("druck")] {
                    let sql = list_sql(&ListParams::with(sort, direction, search));
                    assert!(sql.contains("published = TRUE"), "query lost filter: {sql}");
                }
            }
        }
    }

    #[test]
    fn list_query_searches_name_and_type() {
        let sql = list_sql(&ListParams::with(None, None, Some("druck")));
        assert!(sql.contains("name ILIKE $3"));
        assert!(sql.contains("service_type ILIKE $3"));
    }

    #[test]
    fn detail_lookup_filters_unpublished() {
        assert!(DETAIL_SQL.contains("published = TRUE"));
    }
}
