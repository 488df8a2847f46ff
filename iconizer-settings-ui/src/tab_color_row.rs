//! One editable row of the tab color grid.

use iconizer_config::{TabColor, color};

/// How the swatch cell of a row is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwatchStyle {
    /// Valid row: a flat button filled with the decoded color
    Filled(TabColor),
    /// Invalid row: an ordinary, unfilled button
    SystemDefault,
}

/// A tab caption paired with a color, as edited in the grid.
///
/// Rows tolerate transient invalidity: the caption may be blank and the color
/// text may not decode. Only valid rows reach the committed configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct TabColorRow {
    tab_text: String,
    color_text: String,
    color: TabColor,
    color_text_valid: bool,
}

impl TabColorRow {
    pub fn new(tab_text: impl Into<String>, color: TabColor) -> Self {
        Self {
            tab_text: tab_text.into(),
            color_text: color::encode(color),
            color,
            color_text_valid: true,
        }
    }

    /// A row as added from the grid: no caption yet, white.
    pub fn blank() -> Self {
        Self::new(String::new(), TabColor::WHITE)
    }

    pub fn tab_text(&self) -> &str {
        &self.tab_text
    }

    pub fn color_text(&self) -> &str {
        &self.color_text
    }

    /// Last successfully decoded color.
    pub fn color(&self) -> TabColor {
        self.color
    }

    pub fn set_tab_text(&mut self, tab_text: impl Into<String>) {
        self.tab_text = tab_text.into();
    }

    /// Store typed color text. On a failed decode the previous color is kept
    /// and the row becomes invalid until the text decodes again.
    pub fn set_color_text(&mut self, color_text: impl Into<String>) {
        self.color_text = color_text.into();
        match color::decode(&self.color_text) {
            Ok(decoded) => {
                self.color = decoded;
                self.color_text_valid = true;
            }
            Err(e) => {
                log::debug!("Tab color row {:?}: {e}", self.tab_text);
                self.color_text_valid = false;
            }
        }
    }

    /// Set the color from a picker; the text is rewritten to match.
    pub fn set_color(&mut self, color: TabColor) {
        self.color = color;
        self.color_text = color::encode(color);
        self.color_text_valid = true;
    }

    pub fn is_valid(&self) -> bool {
        self.color_text_valid && !self.tab_text.trim().is_empty()
    }

    pub fn swatch(&self) -> SwatchStyle {
        if self.is_valid() {
            SwatchStyle::Filled(self.color)
        } else {
            SwatchStyle::SystemDefault
        }
    }

    /// The committed `(caption, color)` form, or `None` for an invalid row.
    pub fn to_entry(&self) -> Option<(String, TabColor)> {
        self.is_valid()
            .then(|| (self.tab_text.clone(), self.color))
    }
}
