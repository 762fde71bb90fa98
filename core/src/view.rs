//! Headless projection of a [`Showcase`] onto the page structure.
//!
//! Frontends bind a [`PageView`] to their own widgets; nothing here knows about a
//! terminal or the DOM.

use serde::Serialize;

use crate::links::{generate_search_links, SearchLinks};
use crate::search::{brand_label, brand_matches};
use crate::showcase::Showcase;
use crate::theme::Theme;

pub const DESCRIPTION_CLAMP_LINES: usize = 2;
pub const READ_MORE: &str = "Read More";
pub const SHOW_LESS: &str = "Show Less";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TabView {
    pub key: String,
    pub label: String,
    pub active: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BrandEntry {
    pub index: usize,
    pub label: String,
    pub active: bool,
    pub show_dot: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CompactEntry {
    pub index: usize,
    pub label: String,
    pub active: bool,
    pub visible: bool,
    pub highlighted: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BrandHeader {
    pub name: String,
    pub tag: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DescriptionView {
    pub text: String,
    pub expanded: bool,
    pub clamp_lines: Option<usize>,
    pub toggle_label: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SongRow {
    pub number: String,
    pub title: String,
    pub artist: String,
    pub vibe: String,
    pub links: SearchLinks,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageView {
    pub tabs: Vec<TabView>,
    pub insight: String,
    pub brand_list: Vec<BrandEntry>,
    pub compact_list: Vec<CompactEntry>,
    pub header: Option<BrandHeader>,
    pub description: Option<DescriptionView>,
    pub songs: Vec<SongRow>,
    pub theme: Theme,
    pub sheet_open: bool,
    pub search: String,
}

impl PageView {
    pub fn active_tab(&self) -> Option<&TabView> {
        self.tabs.iter().find(|tab| tab.active)
    }

    pub fn active_brand_entry(&self) -> Option<&BrandEntry> {
        self.brand_list.iter().find(|entry| entry.active)
    }
}

pub fn render_page(showcase: &Showcase) -> PageView {
    let ui = showcase.ui();

    PageView {
        tabs: render_tabs(showcase),
        insight: showcase
            .active_category()
            .map(|category| category.insight.clone())
            .unwrap_or_default(),
        brand_list: render_brand_list(showcase),
        compact_list: render_compact_list(showcase),
        header: showcase.active_brand().map(|brand| BrandHeader {
            name: brand.name.clone(),
            tag: brand.tag.clone(),
        }),
        description: showcase.active_brand().map(|brand| DescriptionView {
            text: brand.desc.clone(),
            expanded: ui.description_expanded,
            clamp_lines: (!ui.description_expanded).then_some(DESCRIPTION_CLAMP_LINES),
            toggle_label: if ui.description_expanded {
                SHOW_LESS
            } else {
                READ_MORE
            },
        }),
        songs: render_songs(showcase),
        theme: ui.theme,
        sheet_open: ui.sheet_open,
        search: ui.search.clone(),
    }
}

/// Greedy word wrap to `width` columns, cut to `max_lines` with a trailing ellipsis.
pub fn clamp_text(text: &str, width: usize, max_lines: Option<usize>) -> Vec<String> {
    let width = width.max(1);
    let mut lines: Vec<String> = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        let needed = if current.is_empty() {
            word.chars().count()
        } else {
            current.chars().count() + 1 + word.chars().count()
        };
        if needed > width && !current.is_empty() {
            lines.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(word);
    }
    if !current.is_empty() {
        lines.push(current);
    }

    if let Some(max_lines) = max_lines {
        if lines.len() > max_lines {
            lines.truncate(max_lines);
            if let Some(last) = lines.last_mut() {
                last.push('…');
            }
        }
    }
    lines
}

fn render_tabs(showcase: &Showcase) -> Vec<TabView> {
    let active = &showcase.selection().category;
    showcase
        .catalog()
        .iter()
        .map(|(key, category)| TabView {
            key: key.to_string(),
            label: category.label.clone(),
            active: key == active.as_str(),
        })
        .collect()
}

fn render_brand_list(showcase: &Showcase) -> Vec<BrandEntry> {
    let active = showcase.selection().brand_index;
    showcase
        .active_category()
        .map(|category| {
            category
                .brands
                .iter()
                .enumerate()
                .map(|(index, brand)| BrandEntry {
                    index,
                    label: brand_label(&brand.name),
                    active: index == active,
                    show_dot: index == active,
                })
                .collect()
        })
        .unwrap_or_default()
}

fn render_compact_list(showcase: &Showcase) -> Vec<CompactEntry> {
    let active = showcase.selection().brand_index;
    let ui = showcase.ui();
    showcase
        .active_category()
        .map(|category| {
            category
                .brands
                .iter()
                .enumerate()
                .map(|(index, brand)| {
                    CompactEntry {
                        index,
                        visible: brand_matches(&brand.name, &ui.search),
                        highlighted: ui.sheet_open && index == ui.compact_cursor,
                        active: index == active,
                        label: brand_label(&brand.name),
                    }
                })
                .collect()
        })
        .unwrap_or_default()
}

fn render_songs(showcase: &Showcase) -> Vec<SongRow> {
    showcase
        .active_brand()
        .map(|brand| {
            brand
                .songs
                .iter()
                .enumerate()
                .map(|(index, song)| SongRow {
                    number: format!("{:02}", index + 1),
                    title: song.title.clone(),
                    artist: song.artist.clone(),
                    vibe: song.vibe.clone(),
                    links: generate_search_links(&song.title, &song.artist),
                })
                .collect()
        })
        .unwrap_or_default()
}
