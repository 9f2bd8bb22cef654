use std::path::Path;

use tower_http::services::{ServeDir, ServeFile};

/// Serves files under `dir`. Paths matching no file get `index.html` with a 200
/// so client side routes survive a reload.
pub fn static_files(dir: impl AsRef<Path>) -> ServeDir<ServeFile> {
    let dir = dir.as_ref();
    let index = dir.join("index.html");

    ServeDir::new(dir).fallback(ServeFile::new(index))
}
