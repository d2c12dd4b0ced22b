//! Runtime presentation modes
//!
//! Each control family (grid, date picker, modal, form controls) is rendered
//! either by the hand-built presentation or by a widget library. The choice
//! can change at runtime; subscribers get the current modes immediately on
//! subscribing and again after every change.
//!
//! Mode changes are not ordered against grid configuration reloads. A mode
//! change only selects which presentation renders a grid, never its
//! interaction state.

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use brgrid_core::{GridError, RenderVariant, Result};
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};

/// Presentation family for one control
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum UiMode {
    Custom,
    Material,
    /// Canvas-drawn grid, available for the grid only
    Canvas,
}

impl UiMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Custom => "CUSTOM",
            Self::Material => "MATERIAL",
            Self::Canvas => "CANVAS",
        }
    }

    /// Render variant the grid adapter uses for this mode
    pub fn render_variant(&self) -> RenderVariant {
        match self {
            Self::Custom => RenderVariant::Custom,
            Self::Material => RenderVariant::Material,
            Self::Canvas => RenderVariant::Canvas,
        }
    }
}

impl fmt::Display for UiMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UiMode {
    type Err = GridError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_uppercase().as_str() {
            "CUSTOM" => Ok(Self::Custom),
            "MATERIAL" => Ok(Self::Material),
            "CANVAS" => Ok(Self::Canvas),
            _ => Err(GridError::UnknownMode(s.to_string())),
        }
    }
}

/// Control families with a switchable presentation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ControlKind {
    Grid,
    Date,
    Modal,
    Text,
    SingleSelect,
    MultiSelect,
    Checkbox,
    Radio,
    Autocomplete,
}

impl ControlKind {
    pub const ALL: [ControlKind; 9] = [
        Self::Grid,
        Self::Date,
        Self::Modal,
        Self::Text,
        Self::SingleSelect,
        Self::MultiSelect,
        Self::Checkbox,
        Self::Radio,
        Self::Autocomplete,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Grid => "grid",
            Self::Date => "date",
            Self::Modal => "modal",
            Self::Text => "text",
            Self::SingleSelect => "singleSelect",
            Self::MultiSelect => "multiSelect",
            Self::Checkbox => "checkbox",
            Self::Radio => "radio",
            Self::Autocomplete => "autocomplete",
        }
    }

    /// Whether `mode` can render this control
    pub fn supports(&self, mode: UiMode) -> bool {
        match mode {
            UiMode::Custom | UiMode::Material => true,
            UiMode::Canvas => matches!(self, Self::Grid),
        }
    }

    pub fn default_mode(&self) -> UiMode {
        match self {
            Self::Grid => UiMode::Custom,
            _ => UiMode::Material,
        }
    }
}

impl fmt::Display for ControlKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The mode of every control family
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UiModeByControl {
    pub grid: UiMode,
    pub date: UiMode,
    pub modal: UiMode,
    pub text: UiMode,
    pub single_select: UiMode,
    pub multi_select: UiMode,
    pub checkbox: UiMode,
    pub radio: UiMode,
    pub autocomplete: UiMode,
}

impl Default for UiModeByControl {
    fn default() -> Self {
        Self {
            grid: ControlKind::Grid.default_mode(),
            date: ControlKind::Date.default_mode(),
            modal: ControlKind::Modal.default_mode(),
            text: ControlKind::Text.default_mode(),
            single_select: ControlKind::SingleSelect.default_mode(),
            multi_select: ControlKind::MultiSelect.default_mode(),
            checkbox: ControlKind::Checkbox.default_mode(),
            radio: ControlKind::Radio.default_mode(),
            autocomplete: ControlKind::Autocomplete.default_mode(),
        }
    }
}

impl UiModeByControl {
    pub fn get(&self, control: ControlKind) -> UiMode {
        match control {
            ControlKind::Grid => self.grid,
            ControlKind::Date => self.date,
            ControlKind::Modal => self.modal,
            ControlKind::Text => self.text,
            ControlKind::SingleSelect => self.single_select,
            ControlKind::MultiSelect => self.multi_select,
            ControlKind::Checkbox => self.checkbox,
            ControlKind::Radio => self.radio,
            ControlKind::Autocomplete => self.autocomplete,
        }
    }

    fn slot_mut(&mut self, control: ControlKind) -> &mut UiMode {
        match control {
            ControlKind::Grid => &mut self.grid,
            ControlKind::Date => &mut self.date,
            ControlKind::Modal => &mut self.modal,
            ControlKind::Text => &mut self.text,
            ControlKind::SingleSelect => &mut self.single_select,
            ControlKind::MultiSelect => &mut self.multi_select,
            ControlKind::Checkbox => &mut self.checkbox,
            ControlKind::Radio => &mut self.radio,
            ControlKind::Autocomplete => &mut self.autocomplete,
        }
    }

    /// Set one control's mode, rejecting modes the control cannot use
    pub fn set(&mut self, control: ControlKind, mode: UiMode) -> Result<()> {
        if !control.supports(mode) {
            return Err(GridError::Configuration(format!(
                "{mode} mode is not available for {control}"
            )));
        }
        *self.slot_mut(control) = mode;
        Ok(())
    }

    /// Check that every control uses a mode it supports
    pub fn validate(&self) -> Result<()> {
        for control in ControlKind::ALL {
            let mode = self.get(control);
            if !control.supports(mode) {
                return Err(GridError::Configuration(format!(
                    "{mode} mode is not available for {control}"
                )));
            }
        }
        Ok(())
    }
}

/// Handle returned by [`RuntimeUiConfig::subscribe`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Listener = Arc<dyn Fn(&UiModeByControl) + Send + Sync>;

struct Inner {
    modes: UiModeByControl,
    listeners: Vec<(SubscriptionId, Listener)>,
    next_id: u64,
}

/// Shared, observable presentation modes
pub struct RuntimeUiConfig {
    inner: Mutex<Inner>,
}

impl Default for RuntimeUiConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for RuntimeUiConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let inner = self.inner.lock();
        f.debug_struct("RuntimeUiConfig")
            .field("modes", &inner.modes)
            .field("listeners", &inner.listeners.len())
            .finish()
    }
}

impl RuntimeUiConfig {
    pub fn new() -> Self {
        Self::with_modes(UiModeByControl::default())
    }

    pub fn with_modes(modes: UiModeByControl) -> Self {
        Self {
            inner: Mutex::new(Inner {
                modes,
                listeners: Vec::new(),
                next_id: 0,
            }),
        }
    }

    /// Current modes
    pub fn snapshot(&self) -> UiModeByControl {
        self.inner.lock().modes
    }

    pub fn mode(&self, control: ControlKind) -> UiMode {
        self.inner.lock().modes.get(control)
    }

    /// Change one control's mode and notify subscribers
    pub fn set_mode(&self, control: ControlKind, mode: UiMode) -> Result<()> {
        self.set_modes([(control, mode)])
    }

    /// Change several modes at once.
    ///
    /// Either every change is applied or, when one is invalid, none is.
    /// Subscribers are notified once.
    pub fn set_modes(&self, changes: impl IntoIterator<Item = (ControlKind, UiMode)>) -> Result<()> {
        let mut next = self.snapshot();
        for (control, mode) in changes {
            next.set(control, mode)?;
        }
        self.publish(next);
        Ok(())
    }

    /// Restore the default modes and notify subscribers
    pub fn reset_to_defaults(&self) {
        self.publish(UiModeByControl::default());
    }

    /// Register a listener. It is called with the current modes right away.
    pub fn subscribe(
        &self,
        listener: impl Fn(&UiModeByControl) + Send + Sync + 'static,
    ) -> SubscriptionId {
        let listener: Listener = Arc::new(listener);
        let (id, current) = {
            let mut inner = self.inner.lock();
            let id = SubscriptionId(inner.next_id);
            inner.next_id += 1;
            inner.listeners.push((id, Arc::clone(&listener)));
            (id, inner.modes)
        };
        listener(&current);
        id
    }

    /// Remove a listener. Returns false if it was not registered.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut inner = self.inner.lock();
        let before = inner.listeners.len();
        inner.listeners.retain(|(listener_id, _)| *listener_id != id);
        inner.listeners.len() != before
    }

    pub fn subscriber_count(&self) -> usize {
        self.inner.lock().listeners.len()
    }

    fn publish(&self, modes: UiModeByControl) {
        // Listeners run outside the lock so they may read the config back.
        let listeners: Vec<Listener> = {
            let mut inner = self.inner.lock();
            inner.modes = modes;
            inner
                .listeners
                .iter()
                .map(|(_, listener)| Arc::clone(listener))
                .collect()
        };
        tracing::debug!(grid = %modes.grid, listeners = listeners.len(), "UI modes changed");
        for listener in listeners {
            listener(&modes);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case("CUSTOM", UiMode::Custom)]
    #[case("material", UiMode::Material)]
    #[case(" Canvas ", UiMode::Canvas)]
    fn test_parse_mode(#[case] text: &str, #[case] expected: UiMode) {
        assert_eq!(text.parse::<UiMode>().ok(), Some(expected));
    }

    #[test]
    fn test_parse_unknown_mode() {
        let err = "bootstrap".parse::<UiMode>().unwrap_err();
        assert!(matches!(err, GridError::UnknownMode(ref m) if m == "bootstrap"));
    }

    #[test]
    fn test_defaults() {
        let modes = UiModeByControl::default();
        assert_eq!(modes.grid, UiMode::Custom);
        for control in ControlKind::ALL.into_iter().skip(1) {
            assert_eq!(modes.get(control), UiMode::Material, "{control}");
        }
    }

    #[test]
    fn test_canvas_only_for_grid() {
        let mut modes = UiModeByControl::default();
        assert!(modes.set(ControlKind::Grid, UiMode::Canvas).is_ok());
        assert!(modes.set(ControlKind::Date, UiMode::Canvas).is_err());
        assert_eq!(modes.date, UiMode::Material);
    }

    #[test]
    fn test_modes_deserialize_with_defaults() {
        let modes: UiModeByControl =
            serde_json::from_str(r#"{ "grid": "CANVAS", "singleSelect": "CUSTOM" }"#).unwrap();
        assert_eq!(modes.grid, UiMode::Canvas);
        assert_eq!(modes.single_select, UiMode::Custom);
        assert_eq!(modes.radio, UiMode::Material);
        assert!(modes.validate().is_ok());

        let bad: UiModeByControl = serde_json::from_str(r#"{ "modal": "CANVAS" }"#).unwrap();
        assert!(bad.validate().is_err());
    }

    #[test]
    fn test_render_variant_mapping() {
        assert_eq!(UiMode::Material.render_variant(), RenderVariant::Material);
        assert_eq!(UiMode::Canvas.render_variant(), RenderVariant::Canvas);
    }

    #[test]
    fn test_set_modes_is_all_or_nothing() {
        let config = RuntimeUiConfig::new();
        let result = config.set_modes([
            (ControlKind::Grid, UiMode::Material),
            (ControlKind::Radio, UiMode::Canvas),
        ]);
        assert!(result.is_err());
        assert_eq!(config.snapshot(), UiModeByControl::default());
    }
}
