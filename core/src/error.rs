use thiserror::Error;

/// Failure to bring the catalog document into memory.
///
/// Raised once during startup; every frontend turns it into an [`ErrorPanel`]
/// instead of building tabs, selection or charts.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoadError {
    #[error("Failed to load data: {0}")]
    Status(u16),
    #[error("Failed to parse catalog: {0}")]
    Parse(String),
    #[error("Failed to read catalog: {0}")]
    Io(String),
    #[error("Failed to fetch catalog: {0}")]
    Fetch(String),
    #[error("Catalog is unusable: {0}")]
    Unusable(String),
}

impl From<serde_json::Error> for LoadError {
    fn from(error: serde_json::Error) -> Self {
        Self::Parse(error.to_string())
    }
}

impl From<std::io::Error> for LoadError {
    fn from(error: std::io::Error) -> Self {
        Self::Io(error.to_string())
    }
}

/// Rejected selection change. The selection is left untouched when returned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShowcaseError {
    #[error("Unknown category: {0}")]
    CategoryNotFound(String),
    #[error("Brand index {index} out of range for {len} brands")]
    BrandOutOfRange { index: usize, len: usize },
    #[error("Catalog has no categories")]
    EmptyCatalog,
}

pub const ERROR_PANEL_TITLE: &str = "Failed to load data";
pub const ERROR_PANEL_HINT: &str = "Check that data/sync-data.json exists and is valid JSON.";

/// Replacement for the main content area after a [`LoadError`].
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct ErrorPanel {
    pub title: &'static str,
    pub hint: &'static str,
    pub detail: String,
}

impl From<&LoadError> for ErrorPanel {
    fn from(error: &LoadError) -> Self {
        Self {
            title: ERROR_PANEL_TITLE,
            hint: ERROR_PANEL_HINT,
            detail: error.to_string(),
        }
    }
}
