use crate::models::{BlogPost, FotoboxService, Location, Review, SiteSettings, Wedding};
use sqlx::PgPool;
use uuid::Uuid;

/// Fixed key of the site-settings singleton row.
pub const SITE_SETTINGS_ID: Uuid = Uuid::from_u128(0x0000_0000_0000_0000_0000_0000_0000_0001);

/// Read access to the content collections the homepage aggregator fans out
/// over. Every method applies the publish filter; callers never see
/// unpublished rows.
pub trait ContentStore {
    fn featured_weddings(
        &self,
        limit: i64,
    ) -> impl std::future::Future<Output = Result<Vec<Wedding>, sqlx::Error>> + Send;

    fn recent_locations(
        &self,
        limit: i64,
    ) -> impl std::future::Future<Output = Result<Vec<Location>, sqlx::Error>> + Send;

    fn recent_posts(
        &self,
        limit: i64,
    ) -> impl std::future::Future<Output = Result<Vec<BlogPost>, sqlx::Error>> + Send;

    fn fotobox_services(
        &self,
        limit: i64,
    ) -> impl std::future::Future<Output = Result<Vec<FotoboxService>, sqlx::Error>> + Send;

    fn recent_reviews(
        &self,
        limit: i64,
    ) -> impl std::future::Future<Output = Result<Vec<Review>, sqlx::Error>> + Send;

    fn site_settings(
        &self,
    ) -> impl std::future::Future<Output = Result<Option<SiteSettings>, sqlx::Error>> + Send;
}

#[derive(Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl ContentStore for PgStore {
    async fn featured_weddings(&self, limit: i64) -> Result<Vec<Wedding>, sqlx::Error> {
        sqlx::query_as::<_, Wedding>(
            "SELECT
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
                featured = TRUE
            AND
                published = TRUE
            ORDER BY
                created_at DESC
            LIMIT $1",
        )
        .bind(limit)
        .fetch_all(&self.pool)
        .await
    }

    async fn recent_locations(&self, limit: i64) -> Result<Vec<Location>, sqlx::Error> {
        sqlx::query_as::<_, Location>(
            "SELECT
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
            ORDER BY
                created_at DESC
            LIMIT $1",
        )
        .bind(limit)
        .fetch_all(&self.pool)
        .await
    }

    async fn recent_posts(&self, limit: i64) -> Result<Vec<BlogPost>, sqlx::Error> {
        sqlx::query_as::<_, BlogPost>(
            "SELECT
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
            ORDER BY
                created_at DESC
            LIMIT $1",
        )
        .bind(limit)
        .fetch_all(&self.pool)
        .await
    }

    async fn fotobox_services(&self, limit: i64) -> Result<Vec<FotoboxService>, sqlx::Error> {
        sqlx::query_as::<_, FotoboxService>(
            "SELECT
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
            ORDER BY
                created_at DESC
            LIMIT $1",
        )
        .bind(limit)
        .fetch_all(&self.pool)
        .await
    }

    async fn recent_reviews(&self, limit: i64) -> Result<Vec<Review>, sqlx::Error> {
        sqlx::query_as::<_, Review>(
            "SELECT
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
            ORDER BY
                review_date DESC NULLS LAST
            LIMIT $1",
        )
        .bind(limit)
        .fetch_all(&self.pool)
        .await
    }

    async fn site_settings(&self) -> Result<Option<SiteSettings>, sqlx::Error> {
        sqlx::query_as::<_, SiteSettings>(
            "SELECT
                id,
                color_primary,
                color_secondary,
                color_accent,
                color_background,
                color_text
            FROM
                site_settings
            WHERE
                id = $1",
        )
        .bind(SITE_SETTINGS_ID)
        .fetch_optional(&self.pool)
        .await
    }
}
