//! The 404 not found page.

use axum::{http::StatusCode, response::Response};

use crate::html::{error_view, render};

/// The fallback route handler for unknown paths.
pub async fn get_404_not_found() -> Response {
    get_404_not_found_response()
}

/// Get a response containing the 404 not found page.
pub fn get_404_not_found_response() -> Response {
    render(
        StatusCode::NOT_FOUND,
        error_view(
            "Not Found",
            "404",
            "Something's missing.",
            "Sorry, we can't find that page. You'll find lots to explore on the home page.",
        ),
    )
}
