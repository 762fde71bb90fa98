use serde::Serialize;

use crate::catalog::{Brand, Catalog, Category};
use crate::charts::ChartAdapter;
use crate::error::{LoadError, ShowcaseError};
use crate::search::brand_matches;
use crate::theme::Theme;
use crate::view::{render_page, PageView};

/// The two cursors describing what is on screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SelectionState {
    pub category: String,
    pub brand_index: usize,
}

/// Presentation state that never feeds back into the selection.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct UiState {
    pub theme: Theme,
    pub description_expanded: bool,
    pub sheet_open: bool,
    pub search: String,
    /// Brand index highlighted in the compact list while navigating by keyboard.
    pub compact_cursor: usize,
}

/// Application state for one session: catalog, selection, UI flags and live charts.
#[derive(Debug, Clone)]
pub struct Showcase {
    catalog: Catalog,
    selection: SelectionState,
    ui: UiState,
    charts: ChartAdapter,
}

impl Showcase {
    pub fn new(catalog: Catalog) -> Result<Self, ShowcaseError> {
        Self::with_theme(catalog, Theme::default())
    }

    pub fn with_theme(catalog: Catalog, theme: Theme) -> Result<Self, ShowcaseError> {
        let first = catalog
            .first_key()
            .ok_or(ShowcaseError::EmptyCatalog)?
            .to_string();

        let mut showcase = Self {
            catalog,
            selection: SelectionState {
                category: first.clone(),
                brand_index: 0,
            },
            ui: UiState {
                theme,
                ..UiState::default()
            },
            charts: ChartAdapter::new(),
        };
        showcase.set_category(&first)?;
        Ok(showcase)
    }

    /// Startup path: whatever goes wrong before the first render is a [`LoadError`].
    pub fn boot(loaded: Result<Catalog, LoadError>, theme: Theme) -> Result<Self, LoadError> {
        let catalog = loaded?;
        Self::with_theme(catalog, theme).map_err(|error| LoadError::Unusable(error.to_string()))
    }

    pub const fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub const fn selection(&self) -> &SelectionState {
        &self.selection
    }

    pub const fn ui(&self) -> &UiState {
        &self.ui
    }

    pub const fn charts(&self) -> &ChartAdapter {
        &self.charts
    }

    pub const fn theme(&self) -> Theme {
        self.ui.theme
    }

    pub fn active_category(&self) -> Option<&Category> {
        self.catalog.category(&self.selection.category)
    }

    pub fn active_brand(&self) -> Option<&Brand> {
        self.active_category()?
            .brands
            .get(self.selection.brand_index)
    }

    pub fn view(&self) -> PageView {
        render_page(self)
    }

    pub fn set_category(&mut self, key: &str) -> Result<(), ShowcaseError> {
        if self.catalog.category(key).is_none() {
            return Err(ShowcaseError::CategoryNotFound(key.to_string()));
        }

        log::debug!("category -> {key}");
        key.clone_into(&mut self.selection.category);
        self.selection.brand_index = 0;
        self.ui.description_expanded = false;
        self.reset_compact_cursor();
        self.refresh_charts();
        Ok(())
    }

    pub fn select_brand(&mut self, index: usize) -> Result<(), ShowcaseError> {
        let len = self.brand_count();
        if index >= len {
            return Err(ShowcaseError::BrandOutOfRange { index, len });
        }

        log::debug!("brand -> {index}");
        self.selection.brand_index = index;
        self.ui.description_expanded = false;
        self.refresh_charts();
        Ok(())
    }

    /// Selection made from the compact list; the overlay closes afterwards.
    pub fn select_compact_brand(&mut self, index: usize) -> Result<(), ShowcaseError> {
        self.select_brand(index)?;
        self.ui.compact_cursor = index;
        self.ui.sheet_open = false;
        Ok(())
    }

    pub fn next_category(&mut self) {
        self.step_category(wrap_increment);
    }

    pub fn previous_category(&mut self) {
        self.step_category(wrap_decrement);
    }

    /// Selects the category at a 0-based tab position; out-of-range positions are ignored.
    pub fn select_category_at(&mut self, position: usize) -> Result<(), ShowcaseError> {
        let Some((key, _)) = self.catalog.get_index(position) else {
            return Ok(());
        };
        let key = key.to_string();
        self.set_category(&key)
    }

    pub fn next_brand(&mut self) {
        let len = self.brand_count();
        if len > 0 {
            let next = wrap_increment(self.selection.brand_index, len);
            // In range by construction.
            let _ = self.select_brand(next);
        }
    }

    pub fn previous_brand(&mut self) {
        let len = self.brand_count();
        if len > 0 {
            let previous = wrap_decrement(self.selection.brand_index, len);
            let _ = self.select_brand(previous);
        }
    }

    pub fn toggle_description(&mut self) {
        self.ui.description_expanded = !self.ui.description_expanded;
    }

    /// Flips the theme and rebuilds the charts. Nothing else is re-rendered.
    pub fn toggle_theme(&mut self) {
        self.set_theme(self.ui.theme.toggled());
    }

    pub fn set_theme(&mut self, theme: Theme) {
        self.ui.theme = theme;
        self.refresh_charts();
    }

    pub fn open_sheet(&mut self) {
        self.ui.sheet_open = true;
        self.reset_compact_cursor();
    }

    pub fn close_sheet(&mut self) {
        self.ui.sheet_open = false;
    }

    pub fn toggle_sheet(&mut self) {
        if self.ui.sheet_open {
            self.close_sheet();
        } else {
            self.open_sheet();
        }
    }

    pub fn set_search(&mut self, term: &str) {
        term.clone_into(&mut self.ui.search);
        self.snap_compact_cursor();
    }

    pub fn push_search_char(&mut self, c: char) {
        self.ui.search.push(c);
        self.snap_compact_cursor();
    }

    pub fn pop_search_char(&mut self) {
        self.ui.search.pop();
        self.snap_compact_cursor();
    }

    pub fn clear_search(&mut self) {
        self.ui.search.clear();
        self.snap_compact_cursor();
    }

    /// Brand indices of the active category that pass the compact-list filter.
    pub fn visible_compact_indices(&self) -> Vec<usize> {
        self.active_category()
            .map(|category| {
                category
                    .brands
                    .iter()
                    .enumerate()
                    .filter(|(_, brand)| brand_matches(&brand.name, &self.ui.search))
                    .map(|(index, _)| index)
                    .collect()
            })
            .unwrap_or_default()
    }

    pub fn compact_cursor_down(&mut self) {
        self.step_compact_cursor(wrap_increment);
    }

    pub fn compact_cursor_up(&mut self) {
        self.step_compact_cursor(wrap_decrement);
    }

    /// Selects the highlighted compact entry, if it is still visible.
    pub fn select_compact_cursor(&mut self) -> Result<(), ShowcaseError> {
        let cursor = self.ui.compact_cursor;
        if self.visible_compact_indices().contains(&cursor) {
            self.select_compact_brand(cursor)
        } else {
            Ok(())
        }
    }

    fn brand_count(&self) -> usize {
        self.active_category()
            .map_or(0, |category| category.brands.len())
    }

    fn step_category(&mut self, step: fn(usize, usize) -> usize) {
        let len = self.catalog.len();
        let current = self.catalog.position(&self.selection.category).unwrap_or(0);
        let _ = self.select_category_at(step(current, len));
    }

    fn step_compact_cursor(&mut self, step: fn(usize, usize) -> usize) {
        let visible = self.visible_compact_indices();
        if visible.is_empty() {
            return;
        }
        let position = visible
            .iter()
            .position(|index| *index == self.ui.compact_cursor)
            .unwrap_or(0);
        self.ui.compact_cursor = visible[step(position, visible.len())];
    }

    fn reset_compact_cursor(&mut self) {
        self.ui.compact_cursor = self.selection.brand_index;
        self.snap_compact_cursor();
    }

    fn snap_compact_cursor(&mut self) {
        let visible = self.visible_compact_indices();
        if !visible.contains(&self.ui.compact_cursor) {
            self.ui.compact_cursor = visible.first().copied().unwrap_or(0);
        }
    }

    fn refresh_charts(&mut self) {
        let theme = self.ui.theme;
        let brand = self
            .catalog
            .category(&self.selection.category)
            .and_then(|category| category.brands.get(self.selection.brand_index));
        self.charts.render(brand, theme);
    }
}

const fn wrap_decrement(index: usize, len: usize) -> usize {
    if len == 0 {
        return 0;
    }

    if index == 0 {
        len - 1
    } else {
        index - 1
    }
}

const fn wrap_increment(index: usize, len: usize) -> usize {
    if len == 0 {
        return 0;
    }

    (index + 1) % len
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Song;

    fn brand(name: &str) -> Brand {
        Brand {
            name: name.to_string(),
            tag: format!("{name} tag"),
            desc: format!("{name} description"),
            songs: vec![Song {
                title: format!("{name} song"),
                artist: "Artist".to_string(),
                vibe: "Warm".to_string(),
            }],
            fingerprint: [10.0, 20.0, 30.0, 40.0, 50.0],
            genres: vec!["Pop".to_string()],
        }
    }

    fn category(label: &str, brands: &[&str]) -> Category {
        Category {
            label: label.to_string(),
            insight: format!("{label} insight"),
            brands: brands.iter().map(|name| brand(name)).collect(),
        }
    }

    fn showcase() -> Result<Showcase, ShowcaseError> {
        Showcase::new(Catalog::from_categories(vec![
            ("pop".to_string(), category("Pop", &["Alpha", "Beta", "Gamma"])),
            ("rock".to_string(), category("Rock", &["Delta", "Echo"])),
            ("quiet".to_string(), category("Quiet", &[])),
        ]))
    }

    #[test]
    fn default_selection_is_first_category_first_brand() -> Result<(), ShowcaseError> {
        let showcase = showcase()?;

        assert_eq!(showcase.selection().category, "pop");
        assert_eq!(showcase.selection().brand_index, 0);
        assert_eq!(showcase.active_brand().map(|b| b.name.as_str()), Some("Alpha"));
        Ok(())
    }

    #[test]
    fn empty_catalog_cannot_be_shown() {
        assert!(matches!(
            Showcase::new(Catalog::from_categories(Vec::new())),
            Err(ShowcaseError::EmptyCatalog)
        ));
        assert!(matches!(
            Showcase::boot(Ok(Catalog::from_categories(Vec::new())), Theme::Dark),
            Err(LoadError::Unusable(_))
        ));
    }

    #[test]
    fn boot_passes_load_errors_through() {
        assert!(matches!(
            Showcase::boot(Err(LoadError::Status(404)), Theme::Dark),
            Err(LoadError::Status(404))
        ));
    }

    #[test]
    fn switching_category_resets_brand_index() -> Result<(), ShowcaseError> {
        let mut showcase = showcase()?;
        showcase.select_brand(2)?;

        showcase.set_category("rock")?;

        assert_eq!(showcase.selection().category, "rock");
        assert_eq!(showcase.selection().brand_index, 0);

        // No per-category memory: coming back starts at the first brand again.
        showcase.select_brand(1)?;
        showcase.set_category("pop")?;
        assert_eq!(showcase.selection().brand_index, 0);
        Ok(())
    }

    #[test]
    fn unknown_category_is_rejected_without_side_effects() -> Result<(), ShowcaseError> {
        let mut showcase = showcase()?;
        showcase.select_brand(1)?;

        let result = showcase.set_category("jazz");

        assert_eq!(
            result,
            Err(ShowcaseError::CategoryNotFound("jazz".to_string()))
        );
        assert_eq!(showcase.selection().category, "pop");
        assert_eq!(showcase.selection().brand_index, 1);
        Ok(())
    }

    #[test]
    fn out_of_range_brand_is_rejected() -> Result<(), ShowcaseError> {
        let mut showcase = showcase()?;

        assert_eq!(
            showcase.select_brand(3),
            Err(ShowcaseError::BrandOutOfRange { index: 3, len: 3 })
        );
        assert_eq!(showcase.selection().brand_index, 0);
        Ok(())
    }

    #[test]
    fn brand_change_collapses_description() -> Result<(), ShowcaseError> {
        let mut showcase = showcase()?;
        showcase.toggle_description();
        assert!(showcase.ui().description_expanded);

        showcase.select_brand(1)?;
        assert!(!showcase.ui().description_expanded);
        Ok(())
    }

    #[test]
    fn selection_changes_rebuild_charts() -> Result<(), ShowcaseError> {
        let mut showcase = showcase()?;
        let before = showcase.charts().radar().map(|chart| chart.id);

        showcase.select_brand(1)?;

        let after = showcase.charts().radar();
        assert_ne!(after.map(|chart| chart.id), before);
        assert_eq!(after.map(|chart| chart.config.label.as_str()), Some("Beta"));
        Ok(())
    }

    #[test]
    fn theme_toggle_rebuilds_charts_only() -> Result<(), ShowcaseError> {
        let mut showcase = showcase()?;
        showcase.select_brand(2)?;
        showcase.toggle_description();
        let before = showcase.charts().bar().map(|chart| chart.id);

        showcase.toggle_theme();

        assert_eq!(showcase.theme(), Theme::Light);
        assert_ne!(showcase.charts().bar().map(|chart| chart.id), before);
        assert_eq!(showcase.selection().brand_index, 2);
        assert!(showcase.ui().description_expanded);
        Ok(())
    }

    #[test]
    fn empty_category_clears_charts() -> Result<(), ShowcaseError> {
        let mut showcase = showcase()?;
        showcase.set_category("quiet")?;

        assert!(showcase.active_brand().is_none());
        assert!(showcase.charts().radar().is_none());
        assert!(showcase.charts().bar().is_none());
        assert!(matches!(
            showcase.select_brand(0),
            Err(ShowcaseError::BrandOutOfRange { index: 0, len: 0 })
        ));
        Ok(())
    }

    #[test]
    fn category_and_brand_navigation_wraps() -> Result<(), ShowcaseError> {
        let mut showcase = showcase()?;

        showcase.previous_category();
        assert_eq!(showcase.selection().category, "quiet");
        showcase.next_category();
        assert_eq!(showcase.selection().category, "pop");

        showcase.previous_brand();
        assert_eq!(showcase.selection().brand_index, 2);
        showcase.next_brand();
        assert_eq!(showcase.selection().brand_index, 0);
        Ok(())
    }

    #[test]
    fn compact_selection_closes_the_sheet() -> Result<(), ShowcaseError> {
        let mut showcase = showcase()?;
        showcase.open_sheet();

        showcase.select_compact_brand(1)?;

        assert!(!showcase.ui().sheet_open);
        assert_eq!(showcase.selection().brand_index, 1);
        Ok(())
    }

    #[test]
    fn search_filters_compact_entries() -> Result<(), ShowcaseError> {
        let mut showcase = showcase()?;
        showcase.open_sheet();

        showcase.set_search("ET");
        assert_eq!(showcase.visible_compact_indices(), [1]);
        assert_eq!(showcase.ui().compact_cursor, 1);

        showcase.set_search("");
        assert_eq!(showcase.visible_compact_indices(), [0, 1, 2]);
        Ok(())
    }

    #[test]
    fn compact_cursor_skips_hidden_entries() -> Result<(), ShowcaseError> {
        let mut showcase = showcase()?;
        showcase.open_sheet();
        showcase.set_search("a");
        // Alpha, Beta and Gamma all contain an "a".
        showcase.compact_cursor_down();
        assert_eq!(showcase.ui().compact_cursor, 1);

        showcase.set_search("mm");
        assert_eq!(showcase.ui().compact_cursor, 2);
        showcase.compact_cursor_down();
        assert_eq!(showcase.ui().compact_cursor, 2);

        showcase.select_compact_cursor()?;
        assert_eq!(showcase.selection().brand_index, 2);
        assert!(!showcase.ui().sheet_open);
        Ok(())
    }

    #[test]
    fn compact_search_agrees_with_displayed_labels() -> Result<(), ShowcaseError> {
        let mut showcase = Showcase::new(Catalog::from_categories(vec![(
            "euro".to_string(),
            category("Euro", &["Alpha", "Straße"]),
        )]))?;
        showcase.open_sheet();

        showcase.set_search("ss");
        let shown: Vec<usize> = showcase
            .view()
            .compact_list
            .iter()
            .filter(|entry| entry.visible)
            .map(|entry| entry.index)
            .collect();
        assert_eq!(shown, [1]);
        assert_eq!(showcase.visible_compact_indices(), shown);
        assert_eq!(showcase.ui().compact_cursor, 1);

        showcase.select_compact_cursor()?;
        assert_eq!(showcase.selection().brand_index, 1);
        assert!(!showcase.ui().sheet_open);

        showcase.open_sheet();
        showcase.set_search("ß");
        assert!(showcase.visible_compact_indices().is_empty());
        Ok(())
    }

    #[test]
    fn select_category_at_ignores_missing_positions() -> Result<(), ShowcaseError> {
        let mut showcase = showcase()?;
        showcase.select_category_at(1)?;
        assert_eq!(showcase.selection().category, "rock");

        showcase.select_category_at(9)?;
        assert_eq!(showcase.selection().category, "rock");
        Ok(())
    }
}
