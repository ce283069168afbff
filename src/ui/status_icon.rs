//! Tray status indicator.
//!
//! Shows one icon per [`OperationMode`] and relays tray gestures: activation
//! is published on [`StatusIndicator::activated`], a size change on
//! [`StatusIndicator::changed`], and a popup request opens the main applet
//! menu through the [`MenuPresenter`].

use std::rc::Rc;

use tracing::{debug, info};

use super::assets::{AssetResolver, Icon, load_icon};
use super::signal::Signal;
use super::toolkit::{Gesture, MenuId, MenuPresenter, TrayBackend, TrayEvent, TrayVisual};
use crate::state::OperationMode;

/// Button code always passed to the menu presenter. The reported button has
/// been unreliable across platforms, so the primary button is assumed.
pub const POPUP_BUTTON: u32 = 1;

/// One icon slot per operation mode. An empty slot means the icon could not
/// be loaded.
#[derive(Debug, Default)]
pub struct ModeIcons([Option<Icon>; OperationMode::COUNT]);

impl ModeIcons {
    pub fn load(resolver: &dyn AssetResolver) -> Self {
        Self(OperationMode::ALL.map(|mode| load_icon(resolver, mode.icon_file())))
    }

    pub fn get(&self, mode: OperationMode) -> Option<&Icon> {
        self.0[mode.index()].as_ref()
    }
}

pub struct StatusIndicator {
    backend: Box<dyn TrayBackend>,
    menus: Rc<dyn MenuPresenter>,
    mode_icons: ModeIcons,
    visual: Option<Box<dyn TrayVisual>>,
    mode: OperationMode,
    tooltip: Option<String>,
    pub changed: Signal<()>,
    pub activated: Signal<()>,
    pub balloon_activated: Signal<String>,
}

impl StatusIndicator {
    /// Preloads the mode icons and inserts the tray icon for `mode`. Missing
    /// or unreadable icons are logged and left empty.
    pub fn new(
        backend: Box<dyn TrayBackend>,
        menus: Rc<dyn MenuPresenter>,
        resolver: &dyn AssetResolver,
        mode: OperationMode,
    ) -> Self {
        let mut indicator = Self {
            backend,
            menus,
            mode_icons: ModeIcons::load(resolver),
            visual: None,
            mode,
            tooltip: None,
            changed: Signal::new(),
            activated: Signal::new(),
            balloon_activated: Signal::new(),
        };
        indicator.insert_icon();
        indicator
    }

    /// (Re)creates the tray visual for the current mode and connects its
    /// gestures. Replaces any previous visual.
    pub fn insert_icon(&mut self) {
        let icon = self.mode_icons.get(self.mode);
        let mut visual = self.backend.create_visual(icon);

        let mut gestures = vec![Gesture::SizeChanged, Gesture::Activate, Gesture::PopupMenu];
        if visual.supports_balloons() {
            gestures.push(Gesture::BalloonActivate);
        }
        visual.connect(&gestures);
        if let Some(tip) = &self.tooltip {
            visual.set_tooltip(tip);
        }

        debug!(mode = %self.mode, has_icon = icon.is_some(), "tray icon inserted");
        self.visual = Some(visual);
    }

    pub fn operation_mode(&self) -> OperationMode {
        self.mode
    }

    /// Icon currently shown, `None` when that mode's icon failed to load.
    pub fn current_icon(&self) -> Option<&Icon> {
        self.mode_icons.get(self.mode)
    }

    pub fn set_operation_mode(&mut self, mode: OperationMode) {
        self.mode = mode;
        let icon = self.mode_icons.get(mode);
        if let Some(visual) = self.visual.as_mut() {
            visual.set_icon(icon);
        }
    }

    pub fn set_visible(&mut self, visible: bool) {
        if let Some(visual) = self.visual.as_mut() {
            visual.set_visible(visible);
        }
    }

    /// True only when a host tray embeds the icon and it is visible.
    pub fn is_embedded(&self) -> bool {
        self.visual
            .as_ref()
            .is_some_and(|v| v.is_embedded() && v.is_visible())
    }

    pub fn set_tooltip(&mut self, tip: &str) {
        self.tooltip = Some(tip.to_string());
        if let Some(visual) = self.visual.as_mut() {
            visual.set_tooltip(tip);
        }
    }

    pub fn show_balloon(&mut self, id: &str, text: &str) {
        if let Some(visual) = self.visual.as_mut() {
            visual.show_balloon(id, text);
        }
    }

    pub fn on_activate(&self) {
        self.activated.notify();
    }

    pub fn on_popup_menu(&self, _button: u32, activate_time: u32) {
        self.menus
            .popup(MenuId::MainApplet, POPUP_BUTTON, activate_time);
    }

    /// Always reports the event as handled.
    pub fn on_size_changed(&self, _size: u32) -> bool {
        self.changed.notify();
        true
    }

    pub fn on_balloon_activate(&self, id: &str) {
        self.balloon_activated.emit(&id.to_string());
    }

    /// Routes a backend event to its handler.
    pub fn dispatch(&mut self, event: TrayEvent) {
        match event {
            TrayEvent::SizeChanged(size) => {
                self.on_size_changed(size);
            }
            TrayEvent::Activate => self.on_activate(),
            TrayEvent::PopupMenu {
                button,
                activate_time,
            } => self.on_popup_menu(button, activate_time),
            TrayEvent::BalloonActivate(id) => self.on_balloon_activate(&id),
            TrayEvent::TaskbarCreated => {
                info!("notification area recreated, reinserting tray icon");
                self.insert_icon();
            }
        }
    }
}
