use tera::Tera;

use crate::config::UiConfig;
use crate::error::AppError;

/// Initialize the Tera template engine from the configured templates directory.
pub fn init_templates(ui: &UiConfig) -> Result<Tera, AppError> {
    let mut tera = Tera::new(&ui.template_glob())?;
    tera.set_escape_fn(escape_text);

    if !tera.get_template_names().any(|name| name == "index.html") {
        return Err(AppError::Template(tera::Error::msg(format!(
            "index.html not found under '{}'",
            ui.templates_dir
        ))));
    }

    Ok(tera)
}

/// Escape text for HTML element content and quoted attributes.
///
/// Only `& < > " '` are replaced; `/` is left alone so values such as
/// `release/2.3` render verbatim.
pub fn escape_text(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_STATIC_DIR;

    fn ui_for(dir: &std::path::Path) -> UiConfig {
        UiConfig {
            templates_dir: dir.to_string_lossy().into_owned(),
            static_dir: DEFAULT_STATIC_DIR.to_string(),
        }
    }

    #[test]
    fn test_loads_bundled_templates() {
        let tera = init_templates(&UiConfig::default()).unwrap();
        let mut context = tera::Context::new();
        context.insert("version", "9.9.9");
        context.insert("app_name", "Demo Application");
        context.insert("probe_path", "/actuator/health");
        let html = tera.render("index.html", &context).unwrap();
        assert!(html.contains("9.9.9"));
    }

    #[test]
    fn test_escape_text_keeps_slashes() {
        assert_eq!(escape_text("release/2.3"), "release/2.3");
        assert_eq!(
            escape_text("<b>\"a\"&'b'</b>"),
            "&lt;b&gt;&quot;a&quot;&amp;&#39;b&#39;&lt;/b&gt;"
        );
    }

    #[test]
    fn test_rendered_version_escapes_markup_but_not_slashes() {
        let tera = init_templates(&UiConfig::default()).unwrap();
        let mut context = tera::Context::new();
        context.insert("version", "release/2.3 <rc>");
        context.insert("app_name", "Demo Application");
        context.insert("probe_path", "/actuator/health");
        let html = tera.render("index.html", &context).unwrap();
        assert!(html.contains("release/2.3 &lt;rc&gt;"));
        assert!(!html.contains("&#x2F;"));
    }

    #[test]
    fn test_missing_index_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("other.html"), "<p>hi</p>").unwrap();
        let err = init_templates(&ui_for(dir.path())).unwrap_err();
        assert!(err.to_string().contains("index.html"));
    }
}
