use axum::Router;
use axum::extract::State;
use axum::http::HeaderValue;
use axum::response::{Html, IntoResponse, Response};
use axum::routing::get;
use htmlescape::encode_minimal as escape_html;

use crate::bootstrap::app_context::AppContext;

pub fn routes(ctx: AppContext) -> Router {
    Router::new().route("/", get(index)).with_state(ctx)
}

pub async fn index(State(ctx): State<AppContext>) -> Response {
    let html = build_index_html(&ctx.cfg.site_title);
    // The page embeds gate state fetched at runtime; never cache it.
    let mut response = Html(html).into_response();
    response.headers_mut().insert(
        axum::http::header::CACHE_CONTROL,
        HeaderValue::from_static("no-store"),
    );
    response
}

fn build_index_html(title: &str) -> String {
    let esc_title = escape_html(title);

    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\" />\n<title>{title}</title>\n<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\" />\n<link rel=\"stylesheet\" href=\"/static/style.css\" />\n</head>\n<body>\n<main id=\"app\">\n<h1>{title}</h1>\n<section id=\"gate\" hidden>\n<p>This site is password protected.</p>\n<form id=\"gate-form\">\n<input id=\"gate-password\" type=\"password\" autocomplete=\"current-password\" placeholder=\"Password\" />\n<button type=\"submit\">Enter</button>\n<p id=\"gate-error\" hidden>Wrong password.</p>\n</form>\n</section>\n<section id=\"content\" hidden>\n<p>Welcome! Feeling lucky today?</p>\n<p><a href=\"/lucky/\">Try the lucky draw</a></p>\n</section>\n</main>\n<script src=\"/static/app.js\"></script>\n</body>\n</html>\n",
        title = esc_title,
    )
}
