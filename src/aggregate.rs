use crate::error::AppError;
use crate::images::ImageResolver;
use crate::models::{BlogPost, FotoboxService, Location, Review, SiteSettings, Wedding};
use crate::store::ContentStore;
use chrono::NaiveDate;
use serde::Serialize;
use std::future::Future;
use std::time::Duration;
use tokio::time::timeout;

/// Rows fetched per homepage section.
const SECTION_LIMIT: i64 = 3;

#[derive(Debug, Serialize)]
pub struct WeddingCard {
    pub slug: String,
    pub title: String,
    pub couple_names: Option<String>,
    pub wedding_date: Option<NaiveDate>,
    pub cover_image: String,
}

impl WeddingCard {
    fn from_record(record: Wedding, resolver: &ImageResolver) -> Self {
        Self {
            cover_image: resolver.resolve(record.cover_image.as_deref()),
            slug: record.slug,
            title: record.title,
            couple_names: record.couple_names,
            wedding_date: record.wedding_date,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct LocationCard {
    pub slug: String,
    pub name: String,
    pub city: Option<String>,
    pub region: Option<String>,
    pub cover_image: String,
}

impl LocationCard {
    fn from_record(record: Location, resolver: &ImageResolver) -> Self {
        Self {
            cover_image: resolver.resolve(record.cover_image.as_deref()),
            slug: record.slug,
            name: record.name,
            city: record.city,
            region: record.region,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct PostCard {
    pub slug: String,
    pub title: String,
    pub featured_image: String,
}

impl PostCard {
    fn from_record(record: BlogPost, resolver: &ImageResolver) -> Self {
        Self {
            featured_image: resolver.resolve(record.featured_image.as_deref()),
            slug: record.slug,
            title: record.title,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct FotoboxCard {
    pub slug: String,
    pub name: String,
    pub service_type: Option<String>,
    pub price: Option<String>,
    pub featured_image: String,
}

impl FotoboxCard {
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

#[derive(Debug, Serialize)]
pub struct ReviewCard {
    pub author_name: String,
    pub rating: i32,
    pub review_text: String,
    pub review_date: Option<NaiveDate>,
}

impl From<Review> for ReviewCard {
    fn from(record: Review) -> Self {
        Self {
            author_name: record.author_name,
            rating: record.rating,
            review_text: record.review_text,
            review_date: record.review_date,
        }
    }
}

/// The denormalized homepage payload. Every image field has already been
/// resolved to a canonical URL; a section that failed to load is simply
/// empty.
#[derive(Debug, Serialize)]
pub struct HomepageViewModel {
    pub weddings: Vec<WeddingCard>,
    pub locations: Vec<LocationCard>,
    pub posts: Vec<PostCard>,
    pub fotobox: Vec<FotoboxCard>,
    pub reviews: Vec<ReviewCard>,
    pub settings: Option<SiteSettings>,
}

/// Awaits one section query under the per-query budget. A failed or
/// timed-out section yields `None`; the caller renders it empty. Nothing
/// here escalates past the section boundary.
async fn section<T, F>(name: &'static str, budget: Duration, query: F) -> Option<T>
where
    F: Future<Output = Result<T, sqlx::Error>>,
{
    match timeout(budget, query).await {
        Ok(Ok(value)) => Some(value),
        Ok(Err(error)) => {
            tracing::warn!(section = name, error = %error, "section query failed");
            None
        }
        Err(_) => {
            tracing::warn!(section = name, budget_ms = budget.as_millis() as u64, "section query timed out");
            None
        }
    }
}

/// Fans out the fixed set of homepage queries, waits for all of them to
/// settle, and assembles the view-model. Individual failures degrade to
/// empty sections; only when every section fails does the caller get
/// [`AppError::NoData`] back, so the page can show a real error instead of
/// an empty shell.
pub async fn assemble<S: ContentStore + Sync>(
    store: &S,
    resolver: &ImageResolver,
    budget: Duration,
) -> Result<HomepageViewModel, AppError> {
    let (weddings, locations, posts, fotobox, reviews, settings) = tokio::join!(
        section("weddings", budget, store.featured_weddings(SECTION_LIMIT)),
        section("locations", budget, store.recent_locations(SECTION_LIMIT)),
        section("posts", budget, store.recent_posts(SECTION_LIMIT)),
        section("fotobox", budget, store.fotobox_services(SECTION_LIMIT)),
        section("reviews", budget, store.recent_reviews(SECTION_LIMIT)),
        section("settings", budget, store.site_settings()),
    );

    let all_failed = weddings.is_none()
        && locations.is_none()
        && posts.is_none()
        && fotobox.is_none()
        && reviews.is_none()
        && settings.is_none();
    if all_failed {
        return Err(AppError::NoData);
    }

    Ok(HomepageViewModel {
        weddings: weddings
            .unwrap_or_default()
            .into_iter()
            .map(|w| WeddingCard::from_record(w, resolver))
            .collect(),
        locations: locations
            .unwrap_or_default()
            .into_iter()
            .map(|l| LocationCard::from_record(l, resolver))
            .collect(),
        posts: posts
            .unwrap_or_default()
            .into_iter()
            .map(|p| PostCard::from_record(p, resolver))
            .collect(),
        fotobox: fotobox
            .unwrap_or_default()
            .into_iter()
            .map(|f| FotoboxCard::from_record(f, resolver))
            .collect(),
        reviews: reviews
            .unwrap_or_default()
            .into_iter()
            .map(ReviewCard::from)
            .collect(),
        settings: settings.flatten(),
    })
}
