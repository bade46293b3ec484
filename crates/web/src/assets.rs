//! Static files compiled into the binary.

use {
    axum::{
        extract::Path,
        http::header,
        response::{IntoResponse, Response},
    },
    include_dir::{Dir, include_dir},
};

use crate::error::WebError;

static ASSETS: Dir<'static> = include_dir!("$CARGO_MANIFEST_DIR/assets");

fn content_type(path: &str) -> &'static str {
    match path.rsplit_once('.').map(|(_, ext)| ext) {
        Some("js") => "text/javascript; charset=utf-8",
        Some("css") => "text/css; charset=utf-8",
        Some("svg") => "image/svg+xml",
        Some("json") => "application/json",
        Some("png") => "image/png",
        _ => "application/octet-stream",
    }
}

pub async fn asset(Path(path): Path<String>) -> Result<Response, WebError> {
    let file = ASSETS
        .get_file(&path)
        .ok_or_else(|| WebError::NotFound(format!("asset {path}")))?;
    Ok((
        [
            (header::CONTENT_TYPE, content_type(&path)),
            (header::CACHE_CONTROL, "public, max-age=3600"),
        ],
        file.contents(),
    )
        .into_response())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_files_exist() {
        assert!(ASSETS.get_file("dashboard.js").is_some());
        assert!(ASSETS.get_file("dashboard.css").is_some());
    }

    #[test]
    fn content_types() {
        assert_eq!(content_type("dashboard.js"), "text/javascript; charset=utf-8");
        assert_eq!(content_type("a/b.css"), "text/css; charset=utf-8");
        assert_eq!(content_type("README"), "application/octet-stream");
    }
}
