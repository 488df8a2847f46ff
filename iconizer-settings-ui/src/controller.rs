//! Options controller: keeps the panel's fields and the configuration in sync.
//!
//! Loading a configuration pushes every value through the same setters a user
//! edit goes through, under a [`SuppressGuard`](crate::suppress::SuppressGuard)
//! so the load does not echo back to the host. Outside a load, every change
//! re-applies the layout and commits a fresh snapshot.

use iconizer_config::{IconizerConfiguration, IconizerMode, TabColor};

use crate::error::SettingsError;
use crate::layout::{LayoutDecision, OptionControl, compute_layout};
use crate::suppress::ChangeSuppression;
use crate::tab_color_row::TabColorRow;
use crate::tab_color_table::TabColorTable;
use crate::traits::{ColorPicker, OptionPageHost};

/// Whether change notifications are currently honoured.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControllerPhase {
    /// Edits commit to the host
    Idle,
    /// A configuration is being loaded; notifications are suppressed
    Loading,
}

pub struct OptionsController<H: OptionPageHost> {
    host: Option<H>,

    mode: IconizerMode,
    horizontal_spacing: f64,
    vertical_spacing: f64,
    icon_text_spacing: f64,
    rotate_vertical_tab_icons: bool,
    use_tab_colors: bool,
    tab_colors: TabColorTable,

    layout: LayoutDecision,
    suppression: ChangeSuppression,
}

impl<H: OptionPageHost> Default for OptionsController<H> {
    fn default() -> Self {
        Self::new()
    }
}

impl<H: OptionPageHost> OptionsController<H> {
    /// Create an uninitialized controller showing default values.
    pub fn new() -> Self {
        let defaults = IconizerConfiguration::default();
        Self {
            host: None,
            mode: defaults.mode,
            horizontal_spacing: defaults.horizontal_spacing,
            vertical_spacing: defaults.vertical_spacing,
            icon_text_spacing: defaults.icon_text_spacing,
            rotate_vertical_tab_icons: defaults.rotate_vertical_tab_icons,
            use_tab_colors: defaults.use_tab_colors,
            tab_colors: TabColorTable::new(),
            layout: compute_layout(defaults.mode, defaults.use_tab_colors),
            suppression: ChangeSuppression::new(),
        }
    }

    /// Attach the host and load the initial configuration. Allowed once.
    pub fn initialize(
        &mut self,
        host: Option<H>,
        configuration: Option<&IconizerConfiguration>,
    ) -> Result<(), SettingsError> {
        if self.host.is_some() {
            return Err(SettingsError::AlreadyInitialized);
        }
        let host = host.ok_or_else(|| SettingsError::InvalidArgument("host is required".into()))?;
        let configuration = configuration
            .ok_or_else(|| SettingsError::InvalidArgument("configuration is required".into()))?;
        configuration.validate()?;

        self.host = Some(host);
        self.load_from_configuration(configuration)?;
        log::info!(
            "Iconizer options initialized (mode: {})",
            configuration.mode.display_name()
        );
        Ok(())
    }

    pub fn is_initialized(&self) -> bool {
        self.host.is_some()
    }

    /// Current phase, for diagnostics.
    ///
    /// A load holds `&mut self` from start to finish, so outside callers
    /// always observe [`ControllerPhase::Idle`]. `Loading` is only visible to
    /// code running inside the controller while a load is in progress.
    pub fn phase(&self) -> ControllerPhase {
        if self.suppression.is_active() {
            ControllerPhase::Loading
        } else {
            ControllerPhase::Idle
        }
    }

    /// Reset every field from `configuration` without committing to the host.
    ///
    /// Can be called any number of times. A configuration that fails
    /// validation is rejected before any field changes.
    pub fn load_from_configuration(
        &mut self,
        configuration: &IconizerConfiguration,
    ) -> Result<(), SettingsError> {
        if let Err(e) = configuration.validate() {
            log::warn!("Rejected iconizer configuration: {e}");
            return Err(e.into());
        }

        let _loading = self.suppression.suppress();

        self.set_mode(configuration.mode);
        self.set_horizontal_spacing(configuration.horizontal_spacing);
        self.set_vertical_spacing(configuration.vertical_spacing);
        self.set_icon_text_spacing(configuration.icon_text_spacing);
        self.set_rotate_vertical_tab_icons(configuration.rotate_vertical_tab_icons);
        self.set_use_tab_colors(configuration.use_tab_colors);

        self.layout = compute_layout(self.mode, self.use_tab_colors);
        self.tab_colors.load_from(&configuration.tab_colors);
        Ok(())
    }

    /// Build a snapshot from the current field values.
    pub fn current_configuration(&self) -> IconizerConfiguration {
        IconizerConfiguration::new(
            self.mode,
            self.horizontal_spacing,
            self.vertical_spacing,
            self.icon_text_spacing,
            self.rotate_vertical_tab_icons,
            self.use_tab_colors,
            self.tab_colors.export_to_map(),
        )
    }

    // ========================================================================
    // Field accessors
    // ========================================================================

    pub fn mode(&self) -> IconizerMode {
        self.mode
    }

    pub fn horizontal_spacing(&self) -> f64 {
        self.horizontal_spacing
    }

    pub fn vertical_spacing(&self) -> f64 {
        self.vertical_spacing
    }

    pub fn icon_text_spacing(&self) -> f64 {
        self.icon_text_spacing
    }

    pub fn rotate_vertical_tab_icons(&self) -> bool {
        self.rotate_vertical_tab_icons
    }

    pub fn use_tab_colors(&self) -> bool {
        self.use_tab_colors
    }

    pub fn table(&self) -> &TabColorTable {
        &self.tab_colors
    }

    pub fn layout(&self) -> LayoutDecision {
        self.layout
    }

    pub fn is_control_visible(&self, control: OptionControl) -> bool {
        self.layout.is_control_visible(control)
    }

    pub fn host(&self) -> Option<&H> {
        self.host.as_ref()
    }

    pub fn host_mut(&mut self) -> Option<&mut H> {
        self.host.as_mut()
    }

    // ========================================================================
    // Observed fields
    //
    // Each setter notifies only when the stored value actually changes.
    // ========================================================================

    pub fn set_mode(&mut self, mode: IconizerMode) {
        if self.mode != mode {
            self.mode = mode;
            self.on_user_change();
        }
    }

    pub fn set_horizontal_spacing(&mut self, value: f64) {
        let value = sanitize_spacing(value);
        if self.horizontal_spacing != value {
            self.horizontal_spacing = value;
            self.on_user_change();
        }
    }

    pub fn set_vertical_spacing(&mut self, value: f64) {
        let value = sanitize_spacing(value);
        if self.vertical_spacing != value {
            self.vertical_spacing = value;
            self.on_user_change();
        }
    }

    pub fn set_icon_text_spacing(&mut self, value: f64) {
        let value = sanitize_spacing(value);
        if self.icon_text_spacing != value {
            self.icon_text_spacing = value;
            self.on_user_change();
        }
    }

    pub fn set_rotate_vertical_tab_icons(&mut self, rotate: bool) {
        if self.rotate_vertical_tab_icons != rotate {
            self.rotate_vertical_tab_icons = rotate;
            self.on_user_change();
        }
    }

    pub fn set_use_tab_colors(&mut self, use_tab_colors: bool) {
        if self.use_tab_colors != use_tab_colors {
            self.use_tab_colors = use_tab_colors;
            self.on_user_change();
        }
    }

    // ========================================================================
    // Tab color grid commits
    // ========================================================================

    /// Returns false if `index` is out of range.
    pub fn set_row_tab_text(&mut self, index: usize, tab_text: &str) -> bool {
        self.edit_row(index, |row| row.set_tab_text(tab_text))
    }

    /// Returns false if `index` is out of range.
    pub fn set_row_color_text(&mut self, index: usize, color_text: &str) -> bool {
        self.edit_row(index, |row| row.set_color_text(color_text))
    }

    /// Returns false if `index` is out of range.
    pub fn set_row_color(&mut self, index: usize, color: TabColor) -> bool {
        self.edit_row(index, |row| row.set_color(color))
    }

    /// Append a blank row and return its index.
    pub fn add_tab_color_row(&mut self) -> usize {
        let index = self.tab_colors.add_row();
        self.on_user_change();
        index
    }

    pub fn remove_tab_color_row(&mut self, index: usize) -> Option<TabColorRow> {
        let removed = self.tab_colors.remove_row(index)?;
        self.on_user_change();
        Some(removed)
    }

    /// Ask `picker` for a new color for row `index`.
    ///
    /// Returns true when a color was picked and applied to that row. A
    /// cancelled picker or an out-of-range row leaves the table untouched.
    pub fn pick_row_color(&mut self, index: usize, picker: &mut dyn ColorPicker) -> bool {
        let Some(row) = self.tab_colors.row(index) else {
            return false;
        };
        let initial = row.color().to_rgba_array();

        match picker.pick_color(initial) {
            Some(picked) => self.set_row_color(index, TabColor::from_rgba_array(picked)),
            None => {
                log::debug!("Color picker cancelled for tab color row {index}");
                false
            }
        }
    }

    fn edit_row(&mut self, index: usize, edit: impl FnOnce(&mut TabColorRow)) -> bool {
        let Some(row) = self.tab_colors.row_mut(index) else {
            return false;
        };
        let before = row.clone();
        edit(row);
        if *row != before {
            self.on_user_change();
        }
        true
    }

    // ========================================================================
    // Change notification
    // ========================================================================

    fn on_user_change(&mut self) {
        if self.suppression.is_active() {
            log::trace!("Change notification suppressed while loading");
            return;
        }

        self.layout = compute_layout(self.mode, self.use_tab_colors);

        let snapshot = self.current_configuration();
        match self.host.as_mut() {
            Some(host) => {
                log::debug!(
                    "Committing iconizer options (mode: {}, {} tab color override(s))",
                    snapshot.mode.display_name(),
                    snapshot.tab_colors.len()
                );
                host.apply(snapshot);
            }
            None => log::debug!("Options controller not initialized, change not committed"),
        }
    }
}

/// Spacing fields accept only finite, non-negative values.
fn sanitize_spacing(value: f64) -> f64 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        0.0
    }
}
