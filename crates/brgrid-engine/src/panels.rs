//! Open/closed state of the grid's panels and menus
//!
//! Panels are independent of each other: opening one never closes another.
//! The only coordinated dismissal is `close_transient`, which the host calls
//! for any pointer event outside the tracked panel regions.

use brgrid_core::RowId;

/// Context menu target and anchor point
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ContextMenuState {
    pub open: bool,
    /// Row the menu was opened on
    pub row: Option<RowId>,
    /// Anchor point in host coordinates
    pub anchor: (f32, f32),
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PanelState {
    pub sort_open: bool,
    pub filter_open: bool,
    pub columns_open: bool,
    pub primary_menu_open: bool,
    pub context_menu: ContextMenuState,
}

impl PanelState {
    pub fn open_context_menu(&mut self, row: RowId, anchor: (f32, f32)) {
        self.context_menu = ContextMenuState {
            open: true,
            row: Some(row),
            anchor,
        };
    }

    pub fn close_context_menu(&mut self) {
        self.context_menu = ContextMenuState::default();
    }

    /// Close the context menu and the primary action menu only
    pub fn close_transient(&mut self) {
        self.close_context_menu();
        self.primary_menu_open = false;
    }

    /// Any panel or menu is showing
    pub fn any_open(&self) -> bool {
        self.sort_open
            || self.filter_open
            || self.columns_open
            || self.primary_menu_open
            || self.context_menu.open
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_close_transient_keeps_modal_panels() {
        let mut panels = PanelState {
            sort_open: true,
            filter_open: true,
            columns_open: true,
            primary_menu_open: true,
            ..Default::default()
        };
        panels.open_context_menu(RowId(4), (12.0, 40.0));
        assert_eq!(panels.context_menu.row, Some(RowId(4)));

        panels.close_transient();

        assert!(panels.sort_open && panels.filter_open && panels.columns_open);
        assert!(!panels.primary_menu_open);
        assert_eq!(panels.context_menu, ContextMenuState::default());
        assert!(panels.any_open());
    }
}
