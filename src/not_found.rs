//! Defines the responses for requests to routes that do not exist.
use axum::{
    http::{StatusCode, Uri},
    response::{Html, IntoResponse, Response},
};

use crate::{endpoints, error::ErrorBody, html::error_view};

/// The HTML page shown when a page or record could not be found.
pub struct NotFoundError;

impl IntoResponse for NotFoundError {
    fn into_response(self) -> Response {
        (
            StatusCode::NOT_FOUND,
            Html(
                error_view(
                    "Not Found",
                    "404",
                    "Something's missing.",
                    "Sorry, we can't find that page. You'll find lots to explore on the home page.",
                )
                .into_string(),
            ),
        )
            .into_response()
    }
}

/// The fallback route handler.
///
/// Requests under the API prefix get a JSON error body, everything else gets
/// the HTML 404 page.
pub async fn get_404_not_found(uri: Uri) -> Response {
    if is_api_path(uri.path()) {
        (StatusCode::NOT_FOUND, ErrorBody::new("Not found")).into_response()
    } else {
        NotFoundError.into_response()
    }
}

fn is_api_path(path: &str) -> bool {
    path == endpoints::API_PREFIX || path.starts_with(&format!("{}/", endpoints::API_PREFIX))
}
