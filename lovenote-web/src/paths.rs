//! Helpers for constructing URLs to static assets that respect the deployment base path.

/// When `PUBLIC_URL` is set at compile time (e.g., `/card` for GitHub Pages),
/// generated URLs are prefixed accordingly. Local builds without `PUBLIC_URL`
/// fall back to root-anchored paths.
#[must_use]
pub fn asset_path(relative: &str) -> String {
    asset_path_with_base(relative, option_env!("PUBLIC_URL").unwrap_or(""))
}

/// Asset URL with a cache-defeating timestamp query parameter, so a stale
/// cached copy is never silently reused across sessions.
#[must_use]
pub fn cache_busted(relative: &str, now_ms: u64) -> String {
    format!("{}?t={now_ms}", asset_path(relative))
}

fn asset_path_with_base(relative: &str, base: &str) -> String {
    let base = base.trim_end_matches('/');
    let rel = relative.trim_start_matches('/');

    if base.is_empty() {
        format!("/{rel}")
    } else {
        format!("{base}/{rel}")
    }
}

#[cfg(test)]
mod tests {
    use super::{asset_path, cache_busted};

    #[test]
    fn builds_root_prefixed_path_when_base_missing() {
        assert_eq!(asset_path("static/assets/img/us.jpg"), "/static/assets/img/us.jpg");
        assert_eq!(asset_path("/static/assets/img/us.jpg"), "/static/assets/img/us.jpg");
    }

    #[test]
    fn builds_paths_with_public_base() {
        assert_eq!(
            super::asset_path_with_base("static/assets/img/us.jpg", "/card"),
            "/card/static/assets/img/us.jpg"
        );
        assert_eq!(
            super::asset_path_with_base("/static/assets/img/us.jpg", "/card/"),
            "/card/static/assets/img/us.jpg"
        );
    }

    #[test]
    fn cache_busted_appends_timestamp_query() {
        assert_eq!(
            cache_busted("static/assets/img/scratch-cover.jpg", 1_700_000_000_000),
            "/static/assets/img/scratch-cover.jpg?t=1700000000000"
        );
    }
}
