// Headless engine behind the Indie Sync showcase frontends
pub mod actions;
pub mod catalog;
pub mod charts;
pub mod error;
pub mod links;
pub mod search;
pub mod showcase;
pub mod theme;
pub mod view;

pub use actions::Action;
pub use catalog::{load_response, Brand, Catalog, Category, Song, FINGERPRINT_AXES};
pub use charts::{BarChart, ChartAdapter, ChartInstance, GenreBar, RadarChart};
pub use error::{ErrorPanel, LoadError, ShowcaseError};
pub use links::{generate_search_links, SearchLinks};
pub use showcase::{SelectionState, Showcase, UiState};
pub use theme::{Rgb, Theme};
pub use view::PageView;

/// Where every frontend expects the catalog document.
pub const DEFAULT_DATA_PATH: &str = "data/sync-data.json";
