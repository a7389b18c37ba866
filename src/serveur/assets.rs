//! Page du pavé numérique, embarquée dans le binaire.

use axum::response::Html;

static INDEX_HTML: &str = include_str!("../../assets/index.html");

/// GET /
pub async fn serve_ui_root() -> Html<&'static str> {
    Html(INDEX_HTML)
}
