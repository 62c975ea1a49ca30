//! Navigation / selection state. The selected device is the only mutable
//! application state; it is replaced wholesale, never edited in place.

use crate::data::{Dataset, DeviceId};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DisplayMode {
    #[default]
    Detail,
    Compare,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    #[default]
    Catalog,
    Device,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavEvent {
    Select(DeviceId),
    SetMode(DisplayMode),
    ShowCatalog,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppState {
    selection: Option<DeviceId>,
    mode: DisplayMode,
    screen: Screen,
}

impl AppState {
    pub fn selection(&self) -> Option<&str> {
        self.selection.as_deref()
    }

    pub fn mode(&self) -> DisplayMode {
        self.mode
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    /// Select a device by id. Unknown ids leave the state untouched and
    /// return `false`.
    pub fn select(&mut self, dataset: &Dataset, id: &str) -> bool {
        if dataset.device(id).is_none() {
            tracing::warn!(device = id, "ignoring selection of unknown device");
            return false;
        }
        self.selection = Some(id.to_string());
        self.screen = Screen::Device;
        tracing::info!(device = id, "device selected");
        true
    }

    /// Switch between detail and compare; the selection is kept.
    pub fn set_mode(&mut self, mode: DisplayMode) {
        self.mode = mode;
    }

    /// Back to the device grid. The previous selection stays highlighted.
    pub fn show_catalog(&mut self) {
        self.screen = Screen::Catalog;
    }

    /// Apply an event; returns `true` when a new device was selected.
    pub fn apply(&mut self, dataset: &Dataset, event: &NavEvent) -> bool {
        match event {
            NavEvent::Select(id) => self.select(dataset, id),
            NavEvent::SetMode(mode) => {
                self.set_mode(*mode);
                false
            }
            NavEvent::ShowCatalog => {
                self.show_catalog();
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::bundled;

    fn dataset() -> &'static Dataset {
        bundled().expect("bundled dataset")
    }

    #[test]
    fn starts_with_no_selection() {
        let state = AppState::default();
        assert_eq!(state.selection(), None);
        assert_eq!(state.screen(), Screen::Catalog);
        assert_eq!(state.mode(), DisplayMode::Detail);
    }

    #[test]
    fn selecting_replaces_previous_device() {
        let data = dataset();
        let mut state = AppState::default();
        let first = &data.devices[0].id;
        let last = &data.devices[data.devices.len() - 1].id;

        assert!(state.select(data, first));
        assert!(state.select(data, last));
        assert_eq!(state.selection(), Some(last.as_str()));
        assert_eq!(state.screen(), Screen::Device);
    }

    #[test]
    fn unknown_id_is_a_noop() {
        let data = dataset();
        let mut state = AppState::default();
        assert!(!state.select(data, "no-such-phone"));
        assert_eq!(state, AppState::default());

        state.select(data, &data.devices[0].id);
        let before = state.clone();
        assert!(!state.apply(data, &NavEvent::Select("no-such-phone".into())));
        assert_eq!(state, before);
    }

    #[test]
    fn mode_toggle_keeps_selection() {
        let data = dataset();
        let mut state = AppState::default();
        state.select(data, &data.devices[0].id);
        state.apply(data, &NavEvent::SetMode(DisplayMode::Compare));
        assert_eq!(state.mode(), DisplayMode::Compare);
        assert_eq!(state.selection(), Some(data.devices[0].id.as_str()));

        state.apply(data, &NavEvent::ShowCatalog);
        assert_eq!(state.screen(), Screen::Catalog);
        assert_eq!(state.selection(), Some(data.devices[0].id.as_str()));
    }
}
