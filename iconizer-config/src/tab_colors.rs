//! Per-tab color overrides keyed by tab caption.
//!
//! Keys compare without regard to case: "Solution Explorer" and
//! "solution explorer" name the same tab. A [`TabColors`] map can never hold
//! two keys that differ only by case; the first one inserted is kept.

use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::color::TabColor;

/// Fold a tab caption into its comparison key.
///
/// Each char maps on its own to its simple upper-case form, so the result
/// never depends on neighbouring chars (Greek final sigma folds like any
/// other sigma). Chars whose upper case expands to several chars are kept.
pub fn fold_key(tab_text: &str) -> String {
    tab_text.chars().map(fold_char).collect()
}

fn fold_char(c: char) -> char {
    let mut upper = c.to_uppercase();
    match (upper.next(), upper.next()) {
        (Some(single), None) => single,
        _ => c,
    }
}

/// Case-insensitive mapping from tab caption to color.
///
/// Equality ignores insertion order and compares the stored caption text as
/// well as the color.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TabColors {
    // folded key -> (caption as entered, color)
    entries: BTreeMap<String, (String, TabColor)>,
}

impl TabColors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an override.
    ///
    /// Returns `false` and leaves the map untouched when a key differing at
    /// most by case is already present.
    pub fn insert(&mut self, tab_text: impl Into<String>, color: TabColor) -> bool {
        let tab_text = tab_text.into();
        let folded = fold_key(&tab_text);
        if self.entries.contains_key(&folded) {
            return false;
        }
        self.entries.insert(folded, (tab_text, color));
        true
    }

    /// Look up the override for a caption, ignoring case.
    pub fn get(&self, tab_text: &str) -> Option<TabColor> {
        self.entries
            .get(&fold_key(tab_text))
            .map(|(_, color)| *color)
    }

    pub fn contains_key(&self, tab_text: &str) -> bool {
        self.entries.contains_key(&fold_key(tab_text))
    }

    /// The caption exactly as stored for a case-insensitive match.
    pub fn stored_key(&self, tab_text: &str) -> Option<&str> {
        self.entries
            .get(&fold_key(tab_text))
            .map(|(key, _)| key.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate `(caption, color)` pairs. Order is unspecified.
    pub fn iter(&self) -> impl Iterator<Item = (&str, TabColor)> {
        self.entries
            .values()
            .map(|(key, color)| (key.as_str(), *color))
    }

    /// Captions in case-sensitive lexicographic order.
    pub fn sorted_keys(&self) -> Vec<&str> {
        let mut keys: Vec<&str> = self.entries.values().map(|(key, _)| key.as_str()).collect();
        keys.sort_unstable();
        keys
    }
}

impl<K: Into<String>> FromIterator<(K, TabColor)> for TabColors {
    /// Collect pairs; on a case-insensitive collision the earlier pair wins.
    fn from_iter<I: IntoIterator<Item = (K, TabColor)>>(iter: I) -> Self {
        let mut colors = TabColors::new();
        for (key, color) in iter {
            colors.insert(key, color);
        }
        colors
    }
}

impl Serialize for TabColors {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.iter())
    }
}

impl<'de> Deserialize<'de> for TabColors {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        // Sorted input keeps collision resolution independent of document order.
        let raw = BTreeMap::<String, TabColor>::deserialize(deserializer)?;
        let colors: TabColors = raw.iter().map(|(k, v)| (k.as_str(), *v)).collect();
        if colors.len() != raw.len() {
            log::debug!(
                "Dropped {} tab color override(s) whose caption differs only by case",
                raw.len() - colors.len()
            );
        }
        Ok(colors)
    }
}
