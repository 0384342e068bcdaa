//! The internal server error page.

use axum::{http::StatusCode, response::Response};

use crate::html::{error_view, render};

/// The text shown on the internal server error page.
pub struct InternalServerErrorPageTemplate<'a> {
    /// A short description of what went wrong.
    pub description: &'a str,
    /// What the user can do about it.
    pub fix: &'a str,
}

impl Default for InternalServerErrorPageTemplate<'_> {
    fn default() -> Self {
        Self {
            description: "Sorry, something went wrong.",
            fix: "Try again later or check the server logs",
        }
    }
}

/// A route handler that renders the internal server error page.
pub async fn get_internal_server_error_page() -> Response {
    render_internal_server_error(Default::default())
}

/// Get a response containing the internal server error page.
pub fn render_internal_server_error(template: InternalServerErrorPageTemplate) -> Response {
    render(
        StatusCode::INTERNAL_SERVER_ERROR,
        error_view("Error", "500", template.description, template.fix),
    )
}

#[cfg(test)]
mod internal_server_error_tests {
    use axum::http::StatusCode;

    use super::get_internal_server_error_page;

    #[tokio::test]
    async fn responds_with_internal_server_error_status() {
        let response = get_internal_server_error_page().await;

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
