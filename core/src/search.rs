/// Case-insensitive substring match used by the compact brand list filter.
/// An empty term matches everything.
pub fn matches_search(label: &str, term: &str) -> bool {
    term.is_empty() || label.to_lowercase().contains(&term.to_lowercase())
}

/// Text a brand shows in both brand lists.
pub fn brand_label(name: &str) -> String {
    name.to_uppercase()
}

/// Filter for the compact list, applied to the label as displayed.
pub fn brand_matches(name: &str, term: &str) -> bool {
    matches_search(&brand_label(name), term)
}
