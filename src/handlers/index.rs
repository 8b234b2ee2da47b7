use axum::response::Html;

use crate::pages;

pub async fn index_handler() -> Html<String> {
    Html(pages::index_page())
}
