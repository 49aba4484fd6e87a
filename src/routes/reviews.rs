use crate::{error::AppError, models::Review, params::ListParams};
use axum::{
    Json,
    extract::{Query, State},
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::PgPool;

#[derive(Deserialize, Debug, Clone, Copy)]
#[serde(rename_all = "lowercase")]
pub enum ReviewSort {
    Date,
    Rating,
}

#[derive(Serialize)]
pub struct ReviewResponse {
    author_name: String,
    rating: i32,
    review_text: String,
    review_date: Option<NaiveDate>,
}

impl From<Review> for ReviewResponse {
    fn from(record: Review) -> Self {
        Self {
            author_name: record.author_name,
            rating: record.rating,
            review_text: record.review_text,
            review_date: record.review_date,
        }
    }
}

fn list_sql(params: &ListParams<ReviewSort>) -> String {
    let column = match params.sort() {
        Some(ReviewSort::Rating) => "rating",
        _ => "review_date",
    };
    let direction = params.sort_by().to_sql();

    format!(
        r#"SELECT
            id,
            author_name,
            rating,
            review_text,
            review_date,
            published
        FROM
            reviews
        WHERE
            published = TRUE
        AND
            ($3::TEXT IS NULL OR author_name ILIKE $3 OR review_text ILIKE $3)
        ORDER BY
            {} {} NULLS LAST
        LIMIT $1 OFFSET $2"#,
        column, direction
    )
}

pub async fn get_reviews(
    State(pool): State<PgPool>,
    Query(params): Query<ListParams<ReviewSort>>,
) -> Result<Json<Vec<ReviewResponse>>, AppError> {
    let query = list_sql(&params);
    let reviews = sqlx::query_as::<_, Review>(&query)
        .bind(params.limit())
        .bind(params.offset())
        .bind(params.search_pattern())
        .fetch_all(&pool)
        .await?;

    let response: Vec<ReviewResponse> = reviews.into_iter().map(|r| r.into()).collect();

    Ok(Json(response))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::SortDirection;

    #[test]
    fn every_list_variant_filters_unpublished() {
        for sort in [None, Some(ReviewSort::Date), Some(ReviewSort::Rating)] {
            for direction in [None, Some(SortDirection::Asc), Some(SortDirection::Desc)] {
                for search in [None, Some("anna")] {
                    let sql = list_sql(&ListParams::with(sort, direction, search));
                    assert!(sql.contains("published = TRUE"), "query lost filter: {sql}");
                }
            }
        }
    }

    #[test]
    fn list_query_searches_author_and_text() {
        let sql = list_sql(&ListParams::with(None, None, Some("anna")));
        assert!(sql.contains("author_name ILIKE $3"));
        assert!(sql.contains("review_text ILIKE $3"));
    }
}
