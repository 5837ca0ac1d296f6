//! Typed UI-selection state.
//!
//! A closed set of named fields per concern. There is deliberately no
//! generic set-by-key operation: every piece of state a consumer can
//! hold is named here.

/// Console color theme.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

/// Display preferences for the listing pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Preferences {
    pub theme: Theme,
    /// Show run/transaction timestamps in listings.
    pub show_timestamps: bool,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            theme: Theme::default(),
            show_timestamps: true,
        }
    }
}

/// The current drill-down selection.
#[derive(Debug, Clone, Default)]
pub struct SelectionState {
    selected_tenant: Option<String>,
    selected_process: Option<String>,
    preferences: Preferences,
}

impl SelectionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn select_tenant(&mut self, tenant_id: Option<String>) {
        self.selected_tenant = tenant_id;
    }

    /// Selecting a process clears any narrower selection implied by a
    /// previous route.
    pub fn select_process(&mut self, process_id: Option<String>) {
        self.selected_process = process_id;
    }

    pub fn set_theme(&mut self, theme: Theme) {
        self.preferences.theme = theme;
    }

    pub fn set_show_timestamps(&mut self, show: bool) {
        self.preferences.show_timestamps = show;
    }

    pub fn selected_tenant(&self) -> Option<&str> {
        self.selected_tenant.as_deref()
    }

    pub fn selected_process(&self) -> Option<&str> {
        self.selected_process.as_deref()
    }

    pub fn preferences(&self) -> &Preferences {
        &self.preferences
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}
