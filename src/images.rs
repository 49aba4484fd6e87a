use crate::config::StorageConfig;
use crate::models::GalleryImage;

/// Maps heterogeneous stored image references (legacy absolute URLs,
/// bucket-relative paths, bare filenames, nothing at all) onto a single
/// canonical object-storage URL. Total over every input and idempotent:
/// resolving an already-canonical URL returns it unchanged.
#[derive(Debug, Clone)]
pub struct ImageResolver {
    base_url: String,
    default_category: String,
    fallback_image: String,
}

impl ImageResolver {
    pub fn new(config: &StorageConfig) -> Self {
        Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            default_category: config.default_category.clone(),
            fallback_image: config.fallback_image.clone(),
        }
    }

    /// The URL served when a record carries no image reference.
    pub fn fallback(&self) -> &str {
        &self.fallback_image
    }

    pub fn resolve(&self, reference: Option<&str>) -> String {
        let reference = match reference {
            Some(r) if !r.is_empty() => r,
            _ => return self.fallback_image.clone(),
        };

        // Already canonical, pass through untouched.
        if reference.starts_with(&self.base_url) {
            return reference.to_string();
        }

        // Any other absolute URL (legacy WordPress uploads included): only
        // the filename survives, the foreign path structure is discarded.
        if reference.starts_with("http://") || reference.starts_with("https://") {
            let filename = filename_of(reference);
            if filename.is_empty() {
                return self.fallback_image.clone();
            }
            return format!("{}/{}/{}", self.base_url, self.default_category, filename);
        }

        // Relative path with a category prefix, e.g. "locations/castle.jpg".
        let reference = reference.trim_start_matches('/');
        if reference.contains('/') {
            return format!("{}/{}", self.base_url, reference);
        }

        // Bare filename.
        format!("{}/{}/{}", self.base_url, self.default_category, reference)
    }
}

/// Final path segment of a URL, with query string and fragment stripped.
fn filename_of(url: &str) -> &str {
    let path = url.split(['?', '#']).next().unwrap_or(url);
    path.trim_end_matches('/').rsplit('/').next().unwrap_or("")
}

/// A gallery entry ready for the client: canonical URL plus alt text.
#[derive(serde::Serialize, Debug, Clone)]
pub struct ResolvedImage {
    pub url: String,
    pub alt: Option<String>,
}

/// Parses a `jsonb` gallery column, sorts it, and resolves every entry.
pub fn resolve_gallery(resolver: &ImageResolver, value: &serde_json::Value) -> Vec<ResolvedImage> {
    parse_gallery(value)
        .into_iter()
        .map(|image| ResolvedImage {
            url: resolver.resolve(image.url.as_deref()),
            alt: image.alt,
        })
        .collect()
}

/// Parses a `jsonb` gallery column into display order. Malformed entries and
/// non-array values degrade to an empty gallery rather than an error.
pub fn parse_gallery(value: &serde_json::Value) -> Vec<GalleryImage> {
    let entries = match value.as_array() {
        Some(entries) => entries,
        None => return Vec::new(),
    };

    let mut gallery: Vec<GalleryImage> = entries
        .iter()
        .filter_map(|entry| serde_json::from_value(entry.clone()).ok())
        .collect();

    gallery.sort_by_key(|image: &GalleryImage| image.order);
    gallery
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn resolver() -> ImageResolver {
        ImageResolver::new(&StorageConfig {
            base_url: "https://storage.example.com/images".to_string(),
            default_category: "weddings".to_string(),
            fallback_image: "https://storage.example.com/images/weddings/IMG_7982-300x200.jpg"
                .to_string(),
        })
    }

    #[test]
    fn missing_reference_falls_back() {
        let r = resolver();
        assert_eq!(r.resolve(None), r.fallback());
        assert_eq!(r.resolve(Some("")), r.fallback());
    }

    #[test]
    fn canonical_url_passes_through() {
        let r = resolver();
        let url = "https://storage.example.com/images/locations/castle.jpg";
        assert_eq!(r.resolve(Some(url)), url);
    }

    #[test]
    fn legacy_url_keeps_only_the_filename() {
        let r = resolver();
        assert_eq!(
            r.resolve(Some("https://legacy-site.example/uploads/2023/photo.jpg")),
            "https://storage.example.com/images/weddings/photo.jpg"
        );
    }

    #[test]
    fn legacy_url_query_string_is_stripped() {
        let r = resolver();
        assert_eq!(
            r.resolve(Some("http://old.example/wp-content/photo.jpg?w=300&h=200")),
            "https://storage.example.com/images/weddings/photo.jpg"
        );
    }

    #[test]
    fn relative_path_keeps_its_category() {
        let r = resolver();
        assert_eq!(
            r.resolve(Some("locations/castle.jpg")),
            "https://storage.example.com/images/locations/castle.jpg"
        );
    }

    #[test]
    fn bare_filename_gets_the_default_category() {
        let r = resolver();
        assert_eq!(
            r.resolve(Some("castle.jpg")),
            "https://storage.example.com/images/weddings/castle.jpg"
        );
    }

    #[test]
    fn resolve_is_idempotent() {
        let r = resolver();
        for input in [
            None,
            Some(""),
            Some("castle.jpg"),
            Some("locations/castle.jpg"),
            Some("https://legacy-site.example/uploads/2023/photo.jpg"),
            Some("https://storage.example.com/images/blog/header.png"),
            Some("not a url at all"),
        ] {
            let once = r.resolve(input);
            assert_eq!(r.resolve(Some(&once)), once, "input: {:?}", input);
        }
    }

    #[test]
    fn gallery_sorts_by_order_field() {
        let value = json!([
            { "url": "b.jpg", "alt": "second", "order": 2 },
            { "url": "a.jpg", "alt": "first", "order": 1 },
            { "url": "c.jpg", "order": 3 }
        ]);
        let gallery = parse_gallery(&value);
        let urls: Vec<_> = gallery.iter().filter_map(|i| i.url.as_deref()).collect();
        assert_eq!(urls, ["a.jpg", "b.jpg", "c.jpg"]);
    }

    #[test]
    fn malformed_gallery_degrades_to_empty() {
        assert!(parse_gallery(&json!(null)).is_empty());
        assert!(parse_gallery(&json!("not an array")).is_empty());
        assert!(parse_gallery(&json!({})).is_empty());
    }
}
