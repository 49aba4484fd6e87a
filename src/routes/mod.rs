pub mod fotobox;
pub mod homepage;
pub mod locations;
pub mod pages;
pub mod posts;
pub mod reviews;
pub mod settings;
pub mod weddings;

use crate::AppState;
use axum::{Router, routing::get};

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/api/homepage", get(homepage::get_homepage))
        .nest("/api/weddings", wedding_routes())
        .nest("/api/locations", location_routes())
        .nest("/api/posts", post_routes())
        .nest("/api/fotobox", fotobox_routes())
        .route("/api/reviews", get(reviews::get_reviews))
        .nest("/api/pages", page_routes())
        .route("/api/settings", get(settings::get_settings))
        .with_state(state)
}

pub fn wedding_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(weddings::get_weddings))
        .route("/{slug}", get(weddings::get_one_wedding))
}

pub fn location_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(locations::get_locations))
        .route("/{slug}", get(locations::get_one_location))
}

pub fn post_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(posts::get_posts))
        .route("/{slug}", get(posts::get_one_post))
}

pub fn fotobox_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(fotobox::get_services))
        .route("/{slug}", get(fotobox::get_one_service))
}

pub fn page_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(pages::get_pages))
        .route("/{slug}", get(pages::get_one_page))
}
