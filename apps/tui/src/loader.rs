use std::path::Path;

use indie_sync::{Catalog, LoadError};

/// Reads and parses the catalog document from disk.
pub async fn load_catalog(path: &Path) -> Result<Catalog, LoadError> {
    log::debug!("loading catalog from {}", path.display());
    let body = tokio::fs::read_to_string(path).await?;
    Catalog::from_json(&body)
}
