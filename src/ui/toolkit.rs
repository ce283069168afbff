//! Toolkit collaborator interfaces.
//!
//! The break window and status indicator drive these traits; a concrete GUI
//! toolkit (or the console frontend) implements them.

use super::assets::Icon;

/// Button placed at the bottom of an ignorable break window.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BreakControl {
    Skip,
    Postpone,
}

/// Window-manager hints applied once at construction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WindowHints {
    pub skip_winlist: bool,
    pub always_on_top: bool,
    pub sticky: bool,
    pub can_focus: bool,
}

impl WindowHints {
    /// Hints for a break window: on every workspace, above everything, out
    /// of the task list, never taking keyboard focus.
    pub const BREAK: Self = Self {
        skip_winlist: true,
        always_on_top: true,
        sticky: true,
        can_focus: false,
    };
}

/// Top-level window used to show a break.
pub trait BreakSurface {
    fn set_title(&mut self, title: &str);
    fn set_icon(&mut self, icon: Option<&Icon>);
    fn set_message(&mut self, text: &str);
    /// Adds a non-focusable button with a localized `label`.
    fn add_button(&mut self, control: BreakControl, label: &str);
    fn apply_hints(&mut self, hints: WindowHints);
    fn show_all(&mut self);
    fn center(&mut self);
    fn set_avoid_pointer(&mut self, avoid: bool);
    fn present(&mut self);
    /// Exclusive keyboard and pointer grab. Returns false if the grab failed.
    fn grab(&mut self) -> bool;
    /// Must be a no-op when no grab is held.
    fn ungrab(&mut self);
    fn hide_all(&mut self);
    /// Releases the native window. Called exactly once.
    fn close(&mut self);
}

/// Menus that can be popped up from the tray.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuId {
    MainApplet,
}

/// Presents popup menus.
pub trait MenuPresenter {
    fn popup(&self, menu: MenuId, button: u32, activate_time: u32);
}

/// Gesture a tray visual reports back to the indicator.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Gesture {
    SizeChanged,
    Activate,
    PopupMenu,
    BalloonActivate,
}

/// Event delivered by a tray backend.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TrayEvent {
    SizeChanged(u32),
    Activate,
    PopupMenu { button: u32, activate_time: u32 },
    BalloonActivate(String),
    /// The host shell recreated its notification area.
    TaskbarCreated,
}

impl TrayEvent {
    /// Gesture this event belongs to; `None` for host events that are always
    /// delivered.
    pub const fn gesture(&self) -> Option<Gesture> {
        match self {
            Self::SizeChanged(_) => Some(Gesture::SizeChanged),
            Self::Activate => Some(Gesture::Activate),
            Self::PopupMenu { .. } => Some(Gesture::PopupMenu),
            Self::BalloonActivate(_) => Some(Gesture::BalloonActivate),
            Self::TaskbarCreated => None,
        }
    }
}

/// One live tray icon.
pub trait TrayVisual {
    fn connect(&mut self, gestures: &[Gesture]);
    fn set_icon(&mut self, icon: Option<&Icon>);
    fn set_visible(&mut self, visible: bool);
    fn is_visible(&self) -> bool;
    /// Whether a host tray currently embeds the icon.
    fn is_embedded(&self) -> bool;
    fn set_tooltip(&mut self, tip: &str);
    fn supports_balloons(&self) -> bool {
        false
    }
    fn show_balloon(&mut self, _id: &str, _text: &str) {}
}

/// Platform tray implementation, injected into the status indicator.
pub trait TrayBackend {
    fn create_visual(&mut self, icon: Option<&Icon>) -> Box<dyn TrayVisual>;
}
