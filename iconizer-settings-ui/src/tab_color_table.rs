//! Ordered list of tab color rows backing the grid.
//!
//! The table is the single source of truth for the grid: the view renders
//! from it and writes edits back through the controller.

use std::sync::Arc;

use iconizer_config::{IconizerConfiguration, TabColors};

use crate::tab_color_row::TabColorRow;

#[derive(Debug, Clone, Default)]
pub struct TabColorTable {
    rows: Vec<TabColorRow>,
}

impl TabColorTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace all rows with one per override, in case-sensitive key order so
    /// reopening the panel shows the same order every time.
    pub fn load_from(&mut self, colors: &TabColors) {
        self.rows.clear();
        for tab_text in colors.sorted_keys() {
            if let Some(color) = colors.get(tab_text) {
                self.rows.push(TabColorRow::new(tab_text, color));
            }
        }
    }

    /// Project the rows into a committed override map.
    ///
    /// Invalid rows are skipped. Among rows whose captions match ignoring
    /// case, the first in table order wins and the rest are dropped.
    pub fn export_to_map(&self) -> Arc<TabColors> {
        if self.rows.is_empty() {
            return IconizerConfiguration::empty_tab_colors();
        }

        let mut colors = TabColors::new();
        for (index, row) in self.rows.iter().enumerate() {
            match row.to_entry() {
                Some((tab_text, color)) => {
                    if !colors.insert(tab_text, color) {
                        log::debug!(
                            "Tab color row {index} ({:?}) duplicates an earlier caption, skipped",
                            row.tab_text()
                        );
                    }
                }
                None => log::debug!("Tab color row {index} is invalid, skipped"),
            }
        }
        IconizerConfiguration::share_tab_colors(colors)
    }

    /// Append a blank row and return its index.
    pub fn add_row(&mut self) -> usize {
        self.push(TabColorRow::blank())
    }

    pub fn push(&mut self, row: TabColorRow) -> usize {
        self.rows.push(row);
        self.rows.len() - 1
    }

    /// Remove a row; out-of-range indices are ignored.
    pub fn remove_row(&mut self, index: usize) -> Option<TabColorRow> {
        (index < self.rows.len()).then(|| self.rows.remove(index))
    }

    pub fn clear(&mut self) {
        self.rows.clear();
    }

    pub fn rows(&self) -> &[TabColorRow] {
        &self.rows
    }

    pub fn row(&self, index: usize) -> Option<&TabColorRow> {
        self.rows.get(index)
    }

    pub fn row_mut(&mut self, index: usize) -> Option<&mut TabColorRow> {
        self.rows.get_mut(index)
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use iconizer_config::TabColor;

    #[test]
    fn test_load_orders_rows_by_caption() {
        let colors: TabColors = [
            ("output", TabColor::WHITE),
            ("Error List", TabColor::BLACK),
            ("Output Window", TabColor::WHITE),
        ]
        .into_iter()
        .collect();

        let mut table = TabColorTable::new();
        table.push(TabColorRow::blank());
        table.load_from(&colors);

        let captions: Vec<&str> = table.rows().iter().map(|r| r.tab_text()).collect();
        assert_eq!(captions, vec!["Error List", "Output Window", "output"]);
    }

    #[test]
    fn test_remove_row_out_of_range_is_noop() {
        let mut table = TabColorTable::new();
        table.add_row();
        assert!(table.remove_row(3).is_none());
        assert_eq!(table.len(), 1);
        assert!(table.remove_row(0).is_some());
        assert!(table.is_empty());
    }

    #[test]
    fn test_all_invalid_rows_export_shared_empty_map() {
        let mut table = TabColorTable::new();
        table.add_row();
        let exported = table.export_to_map();
        assert!(exported.is_empty());
        assert!(Arc::ptr_eq(
            &exported,
            &IconizerConfiguration::empty_tab_colors()
        ));
    }
}
