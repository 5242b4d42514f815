//! Static file serving for the landing page.

use tower_http::services::ServeDir;

use crate::config::UiConfig;

/// Create a static file service rooted at the configured static directory.
pub fn create_static_service(ui: &UiConfig) -> ServeDir {
    ServeDir::new(&ui.static_dir)
}
