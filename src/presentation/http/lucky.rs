use std::path::{Component, Path, PathBuf};

use axum::{
    Router,
    extract::{Path as AxumPath, State},
    http::{HeaderMap, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
};

use crate::bootstrap::app_context::AppContext;

// Uses AppContext as router state

pub fn routes(ctx: AppContext) -> Router {
    Router::new()
        .route("/", get(subsite_index))
        .route("/*path", get(subsite_asset))
        .with_state(ctx)
}

pub async fn subsite_index(State(ctx): State<AppContext>) -> Result<Response, StatusCode> {
    serve_file(&ctx, "index.html").await
}

pub async fn subsite_asset(
    State(ctx): State<AppContext>,
    AxumPath(path): AxumPath<String>,
) -> Result<Response, StatusCode> {
    serve_file(&ctx, &path).await
}

/// Serve one file from the lucky-draw directory, byte-for-byte.
async fn serve_file(ctx: &AppContext, rel: &str) -> Result<Response, StatusCode> {
    let root = Path::new(&ctx.cfg.lucky_dir);
    let mut resolved = resolve_asset_path(root, rel).ok_or(StatusCode::FORBIDDEN)?;

    // Directory requests fall back to the directory's own index page.
    let is_dir = tokio::fs::metadata(&resolved)
        .await
        .map(|m| m.is_dir())
        .unwrap_or(false);
    if is_dir {
        resolved.push("index.html");
    }

    let data = tokio::fs::read(&resolved)
        .await
        .map_err(|_| StatusCode::NOT_FOUND)?;

    let guessed = mime_guess::from_path(&resolved).first_or_octet_stream();
    let mut headers = HeaderMap::new();
    headers.insert(
        axum::http::header::CONTENT_TYPE,
        HeaderValue::from_str(guessed.essence_str())
            .unwrap_or(HeaderValue::from_static("application/octet-stream")),
    );
    headers.insert(
        axum::http::header::HeaderName::from_static("x-content-type-options"),
        HeaderValue::from_static("nosniff"),
    );

    Ok((headers, data).into_response())
}

/// Join a request path onto the content root, accepting only normal
/// components so the result can never escape the root.
fn resolve_asset_path(root: &Path, rel: &str) -> Option<PathBuf> {
    let mut out = root.to_path_buf();
    for comp in Path::new(rel).components() {
        match comp {
            Component::Normal(c) => out.push(c),
            Component::CurDir => {}
            _ => return None,
        }
    }
    Some(out)
}
