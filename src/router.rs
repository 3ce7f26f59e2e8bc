use axum::Router;
use std::path::Path;
use tower_http::{services::ServeFile, trace::TraceLayer};

/// Static pages served over HTTP, as (route, path relative to the static directory).
const STATIC_ROUTES: [(&str, &str); 4] = [
    ("/", "html/index.html"),
    ("/css/style.css", "css/style.css"),
    ("/js/script.js", "js/script.js"),
    ("/jsx/script.jsx", "jsx/script.jsx"),
];

/// Builds the router for the bot's static web page.
///
/// Only the fixed set of pages in `STATIC_ROUTES` is served; every other path returns
/// 404 Not Found.
///
/// # Arguments
/// - `static_dir` - Directory the static files are resolved against
pub fn router(static_dir: &Path) -> Router {
    STATIC_ROUTES
        .iter()
        .fold(Router::new(), |router, (route, file)| {
            router.route_service(route, ServeFile::new(static_dir.join(file)))
        })
        .layer(TraceLayer::new_for_http())
}
