use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};

use crate::templates::escape_text;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Template rendering error: {0}")]
    Template(#[from] tera::Error),

    #[error("Page not found: {0}")]
    NotFound(String),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Template(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match &self {
            AppError::NotFound(_) => self.to_string(),
            AppError::Template(_) => {
                tracing::error!("Internal error: {:?}", self);
                "Internal server error".to_string()
            }
        };

        // Rendered inline: the template engine may be the thing that failed.
        let body = format!(
            r#"<!DOCTYPE html>
<html>
<head>
    <title>Error {}</title>
    <link rel="stylesheet" href="/static/css/style.css">
</head>
<body>
    <div class="container">
        <div class="error-page">
            <h1>Error {}</h1>
            <p>{}</p>
            <a href="/">Return to homepage</a>
        </div>
    </div>
</body>
</html>"#,
            status.as_u16(),
            status.as_u16(),
            escape_text(&message)
        );

        (status, Html(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_maps_to_404() {
        let response = AppError::NotFound("/missing".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_template_error_maps_to_500() {
        let err = AppError::from(tera::Error::msg("boom"));
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.into_response().status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[tokio::test]
    async fn test_not_found_page_escapes_markup_but_not_slashes() {
        let response = AppError::NotFound("/a/<script>".to_string()).into_response();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let html = String::from_utf8(body.to_vec()).unwrap();
        assert!(html.contains("<p>Page not found: /a/&lt;script&gt;</p>"));
    }
}
