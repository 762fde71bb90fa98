use std::fmt;

use serde::de::{self, Deserializer, MapAccess, Visitor};
use serde::{Deserialize, Serialize};

use crate::error::LoadError;

/// Axis labels of the fingerprint radar, in fingerprint order.
pub const FINGERPRINT_AXES: [&str; 5] = [
    "Energy",
    "Emotion",
    "Uniqueness",
    "Catchiness",
    "Lyrical Depth",
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Song {
    pub title: String,
    pub artist: String,
    #[serde(default)]
    pub vibe: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Brand {
    pub name: String,
    #[serde(default)]
    pub tag: String,
    #[serde(default)]
    pub desc: String,
    #[serde(default)]
    pub songs: Vec<Song>,
    /// Scores for [`FINGERPRINT_AXES`], matched by position.
    pub fingerprint: [f64; 5],
    #[serde(default)]
    pub genres: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub label: String,
    #[serde(default)]
    pub insight: String,
    #[serde(default)]
    pub brands: Vec<Brand>,
}

/// Parsed `data/sync-data.json`. Immutable once loaded.
///
/// Categories keep the order of the keys in the source document; the first one is
/// the default selection.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Catalog {
    #[serde(deserialize_with = "ordered_categories")]
    categories: Vec<(String, Category)>,
}

impl Catalog {
    pub fn from_json(source: &str) -> Result<Self, LoadError> {
        let catalog: Self = serde_json::from_str(source)?;
        log::debug!("catalog parsed with {} categories", catalog.len());
        Ok(catalog)
    }

    pub fn from_categories(categories: Vec<(String, Category)>) -> Self {
        Self { categories }
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    pub fn first_key(&self) -> Option<&str> {
        self.categories.first().map(|(key, _)| key.as_str())
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> + '_ {
        self.categories.iter().map(|(key, _)| key.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Category)> + '_ {
        self.categories
            .iter()
            .map(|(key, category)| (key.as_str(), category))
    }

    pub fn category(&self, key: &str) -> Option<&Category> {
        self.categories
            .iter()
            .find(|(candidate, _)| candidate == key)
            .map(|(_, category)| category)
    }

    pub fn position(&self, key: &str) -> Option<usize> {
        self.categories
            .iter()
            .position(|(candidate, _)| candidate == key)
    }

    pub fn get_index(&self, index: usize) -> Option<(&str, &Category)> {
        self.categories
            .get(index)
            .map(|(key, category)| (key.as_str(), category))
    }
}

/// Interprets a finished fetch: any non-2xx status fails before the body is looked at.
pub fn load_response(status: u16, body: &str) -> Result<Catalog, LoadError> {
    if !(200..300).contains(&status) {
        return Err(LoadError::Status(status));
    }
    Catalog::from_json(body)
}

fn ordered_categories<'de, D>(deserializer: D) -> Result<Vec<(String, Category)>, D::Error>
where
    D: Deserializer<'de>,
{
    struct CategoriesVisitor;

    impl<'de> Visitor<'de> for CategoriesVisitor {
        type Value = Vec<(String, Category)>;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("a map of category keys to categories")
        }

        fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
        where
            A: MapAccess<'de>,
        {
            let mut categories: Vec<(String, Category)> =
                Vec::with_capacity(map.size_hint().unwrap_or(0));
            while let Some((key, category)) = map.next_entry::<String, Category>()? {
                if categories.iter().any(|(existing, _)| *existing == key) {
                    return Err(de::Error::custom(format!(
                        "duplicate category key `{key}`"
                    )));
                }
                categories.push((key, category));
            }
            Ok(categories)
        }
    }

    deserializer.deserialize_map(CategoriesVisitor)
}
