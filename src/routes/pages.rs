use crate::{
    error::AppError,
    models::{Page, PageType},
};
use axum::{
    Json,
    extract::{Path, State},
};
use serde::Serialize;
use sqlx::PgPool;

#[derive(Serialize, sqlx::FromRow)]
pub struct PageSummary {
    slug: String,
    title: String,
    page_type: PageType,
    display_order: i32,
}

#[derive(Serialize)]
pub struct PageDetail {
    slug: String,
    title: String,
    content: String,
    page_type: PageType,
}

impl From<Page> for PageDetail {
    fn from(record: Page) -> Self {
        Self {
            slug: record.slug,
            title: record.title,
            content: record.content,
            page_type: record.page_type,
        }
    }
}

// Page bodies can be large HTML; the menu listing leaves them out.
const LIST_SQL: &str = "SELECT
        slug,
        title,
        page_type,
        display_order
    FROM
        pages
    WHERE
        published = TRUE
    ORDER BY
        display_order ASC";

const DETAIL_SQL: &str = "SELECT
        id,
        slug,
        title,
        content,
        page_type,
        published,
        display_order
    FROM
        pages
    WHERE
        slug = $1
    AND
        published = TRUE";

/// Published pages in menu order, without their content. Used to build
/// navigation.
pub async fn get_pages(State(pool): State<PgPool>) -> Result<Json<Vec<PageSummary>>, AppError> {
    let pages = sqlx::query_as::<_, PageSummary>(LIST_SQL)
        .fetch_all(&pool)
        .await?;

    Ok(Json(pages))
}

pub async fn get_one_page(
    State(pool): State<PgPool>,
    Path(slug): Path<String>,
) -> Result<Json<PageDetail>, AppError> {
    let page = sqlx::query_as::<_, Page>(DETAIL_SQL)
        .bind(slug)
        .fetch_optional(&pool)
        .await?
        .ok_or(AppError::NotFound)?;

    Ok(Json(page.into()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn both_lookups_filter_unpublished() {
        assert!(LIST_SQL.contains("published = TRUE"));
        assert!(DETAIL_SQL.contains("published = TRUE"));
    }

    #[test]
    fn menu_listing_leaves_out_page_bodies() {
        assert!(!LIST_SQL.contains("content"));
    }
}
