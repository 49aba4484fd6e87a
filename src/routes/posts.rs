use crate::{error::AppError, images::ImageResolver, models::BlogPost, params::ListParams};
use axum::{
    Json,
    extract::{Path, Query, State},
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;

#[derive(Deserialize, Debug, Clone, Copy)]
#[serde(rename_all = "lowercase")]
pub enum PostSort {
    Date,
    Title,
}

#[derive(Serialize)]
pub struct PostSummary {
    slug: String,
    title: String,
    featured_image: String,
    created: DateTime<Utc>,
}

impl PostSummary {
    fn from_record(record: BlogPost, resolver: &ImageResolver) -> Self {
        Self {
            featured_image: resolver.resolve(record.featured_image.as_deref()),
            slug: record.slug,
            title: record.title,
            created: record.created_at,
        }
    }
}

#[derive(Serialize)]
pub struct PostDetail {
    slug: String,
    title: String,
    featured_image: String,
    content: String,
    created: DateTime<Utc>,
}

impl PostDetail {
    fn from_record(record: BlogPost, resolver: &ImageResolver) -> Self {
        Self {
            featured_image: resolver.resolve(record.featured_image.as_deref()),
            slug: record.slug,
            title: record.title,
            content: record.content,
            created: record.created_at,
        }
    }
}

fn list_sql(params: &ListParams<PostSort>) -> String {
    let column = match params.sort() {
        Some(PostSort::Title) => "title",
        _ => "created_at",
    };
    let direction = params.sort_by().to_sql();

    format!(
        r#"SELECT
            id,
            slug,
            title,
            featured_image,
            content,
            published,
            created_at
        FROM
            blog_posts
        WHERE
            published = TRUE
        AND
            ($3::TEXT IS NULL OR title ILIKE $3)
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
        featured_image,
        content,
        published,
        created_at
    FROM
        blog_posts
    WHERE
        slug = $1
    AND
        published = TRUE";

pub async fn get_posts(
    State(pool): State<PgPool>,
    State(resolver): State<ImageResolver>,
    Query(params): Query<ListParams<PostSort>>,
) -> Result<Json<Vec<PostSummary>>, AppError> {
    let query = list_sql(&params);
    let posts = sqlx::query_as::<_, BlogPost>(&query)
        .bind(params.limit())
        .bind(params.offset())
        .bind(params.search_pattern())
        .fetch_all(&pool)
        .await?;

    let response = posts
        .into_iter()
        .map(|p| PostSummary::from_record(p, &resolver))
        .collect();

    Ok(Json(response))
}

pub async fn get_one_post(
    State(pool): State<PgPool>,
    State(resolver): State<ImageResolver>,
    Path(slug): Path<String>,
) -> Result<Json<PostDetail>, AppError> {
    let post = sqlx::query_as::<_, BlogPost>(DETAIL_SQL)
        .bind(slug)
        .fetch_optional(&pool)
        .await?
        .ok_or(AppError::NotFound)?;

    Ok(Json(PostDetail::from_record(post, &resolver)))
}
