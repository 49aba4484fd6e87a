use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Serialize, Deserialize, Clone, sqlx::FromRow)]
pub struct Wedding {
    pub id: Uuid,
    pub slug: String,
    pub title: String,
    pub couple_names: Option<String>,
    pub cover_image: Option<String>,
    pub images: serde_json::Value,
    pub featured: bool,
    pub published: bool,
    pub wedding_date: Option<NaiveDate>,
    pub created_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, Clone, sqlx::FromRow)]
pub struct Location {
    pub id: Uuid,
    pub slug: String,
    pub name: String,
    pub city: Option<String>,
    pub region: Option<String>,
    pub cover_image: Option<String>,
    pub images: serde_json::Value,
    pub featured: bool,
    pub published: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, Clone, sqlx::FromRow)]
pub struct BlogPost {
    pub id: Uuid,
    pub slug: String,
    pub title: String,
    pub featured_image: Option<String>,
    pub content: String,
    pub published: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, Clone, sqlx::FromRow)]
pub struct FotoboxService {
    pub id: Uuid,
    pub slug: String,
    pub name: String,
    pub service_type: Option<String>,
    pub price: Option<String>,
    pub featured_image: Option<String>,
    pub images: serde_json::Value,
    pub published: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, Clone, sqlx::FromRow)]
pub struct Review {
    pub id: Uuid,
    pub author_name: String,
    pub rating: i32,
    pub review_text: String,
    pub review_date: Option<NaiveDate>,
    pub published: bool,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, sqlx::Type)]
#[sqlx(type_name = "page_type", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum PageType {
    Homepage,
    Legal,
    Content,
}

#[derive(Serialize, Deserialize, Clone, sqlx::FromRow)]
pub struct Page {
    pub id: Uuid,
    pub slug: String,
    pub title: String,
    pub content: String,
    pub page_type: PageType,
    pub published: bool,
    pub display_order: i32,
}

#[derive(Serialize, Deserialize, Debug, Clone, sqlx::FromRow)]
pub struct SiteSettings {
    pub id: Uuid,
    pub color_primary: String,
    pub color_secondary: String,
    pub color_accent: String,
    pub color_background: String,
    pub color_text: String,
}

/// One entry of a `jsonb` gallery column. The `order` field, not array
/// position, determines display sequence (partial updates may reorder the
/// array itself).
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct GalleryImage {
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub alt: Option<String>,
    #[serde(default)]
    pub order: i64,
}
