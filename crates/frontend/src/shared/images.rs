//! Product image path resolution.

/// Prefix under which static assets are served.
pub const STATIC_PREFIX: &str = "/static/";

/// Substituted exactly once when a product image fails to load.
pub const FALLBACK_IMAGE: &str = "/static/logos/placeholder.webp";

/// Resolves a catalog image reference to an `src` value.
///
/// References already under the static prefix, or full URLs, are used
/// unchanged; bare filenames are resolved against the static prefix.
pub fn resolve_image_src(image: &str) -> String {
    if image.starts_with(STATIC_PREFIX) || image.starts_with("http") {
        image.to_string()
    } else {
        format!("{STATIC_PREFIX}{image}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn static_paths_pass_through() {
        assert_eq!(
            resolve_image_src("/static/uploads/boot.webp"),
            "/static/uploads/boot.webp"
        );
    }

    #[test]
    fn full_urls_pass_through() {
        assert_eq!(
            resolve_image_src("https://cdn.example.com/boot.webp"),
            "https://cdn.example.com/boot.webp"
        );
        assert_eq!(
            resolve_image_src("http://cdn.example.com/boot.webp"),
            "http://cdn.example.com/boot.webp"
        );
    }

    #[test]
    fn bare_filenames_get_the_static_prefix() {
        assert_eq!(resolve_image_src("boot.webp"), "/static/boot.webp");
        assert_eq!(
            resolve_image_src("uploads/boot.webp"),
            "/static/uploads/boot.webp"
        );
    }
}
