pub mod auth;
pub mod health;
pub mod lucky;
pub mod pages;

use axum::Router;
use axum::extract::MatchedPath;
use http::HeaderValue;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::bootstrap::app_context::AppContext;
use crate::bootstrap::config::Config;

#[derive(OpenApi)]
#[openapi(
    paths(
        auth::verify,
        auth::auth_required,
        health::health,
    ),
    components(schemas(
        auth::VerifyRequest,
        auth::VerifyResponse,
        auth::AuthRequiredResponse,
        health::HealthResp,
    )),
    tags(
        (name = "Auth", description = "Password gate"),
        (name = "Health", description = "System health checks")
    )
)]
struct ApiDoc;

/// Compose the full application router. The binary and the black-box
/// tests both serve exactly this.
pub fn build_app(ctx: AppContext) -> Router {
    let cors = build_cors(&ctx.cfg);
    let static_dir = ctx.cfg.static_dir.clone();

    Router::new()
        .merge(pages::routes(ctx.clone()))
        .nest("/api", auth::routes(ctx.clone()))
        .nest("/api", health::routes(ctx.clone()))
        .nest("/lucky", lucky::routes(ctx))
        .nest_service("/static", ServeDir::new(static_dir))
        .merge(SwaggerUi::new("/api/docs").url("/api/openapi.json", ApiDoc::openapi()))
        .layer(cors)
        .layer(
            TraceLayer::new_for_http().make_span_with(|req: &http::Request<_>| {
                let method = req.method().clone();
                let uri = req.uri().clone();
                let matched = req
                    .extensions()
                    .get::<MatchedPath>()
                    .map(|p| p.as_str().to_string())
                    .unwrap_or_default();
                tracing::info_span!("http", %method, %uri, matched_path = %matched)
            }),
        )
}

fn build_cors(cfg: &Config) -> CorsLayer {
    let methods = [http::Method::GET, http::Method::POST, http::Method::OPTIONS];
    let headers = [http::header::CONTENT_TYPE];
    match cfg
        .frontend_url
        .as_deref()
        .and_then(|origin| HeaderValue::from_str(origin).ok())
    {
        Some(origin) => CorsLayer::new()
            .allow_origin(origin)
            .allow_methods(methods)
            .allow_headers(headers),
        None => CorsLayer::new()
            .allow_origin(AllowOrigin::mirror_request())
            .allow_methods(methods)
            .allow_headers(headers),
    }
}
