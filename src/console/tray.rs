//! Tray backend and menu presenter for a terminal session.
//!
//! There is no host notification area in a terminal, so visuals never report
//! themselves as embedded. Balloons are printed.

use tracing::{debug, info};

use crate::ui::assets::Icon;
use crate::ui::toolkit::{Gesture, MenuId, MenuPresenter, TrayBackend, TrayVisual};

#[derive(Debug, Default)]
pub struct ConsoleTray;

impl TrayBackend for ConsoleTray {
    fn create_visual(&mut self, icon: Option<&Icon>) -> Box<dyn TrayVisual> {
        Box::new(ConsoleVisual {
            icon: icon.map(|i| i.name.clone()),
            visible: true,
            tooltip: String::new(),
        })
    }
}

#[derive(Debug)]
pub struct ConsoleVisual {
    icon: Option<String>,
    visible: bool,
    tooltip: String,
}

impl TrayVisual for ConsoleVisual {
    fn connect(&mut self, gestures: &[Gesture]) {
        debug!(?gestures, "tray gestures connected");
    }

    fn set_icon(&mut self, icon: Option<&Icon>) {
        self.icon = icon.map(|i| i.name.clone());
        debug!(icon = ?self.icon, "tray icon");
    }

    fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    fn is_visible(&self) -> bool {
        self.visible
    }

    fn is_embedded(&self) -> bool {
        false
    }

    fn set_tooltip(&mut self, tip: &str) {
        if self.tooltip != tip {
            self.tooltip = tip.to_string();
            debug!(tooltip = %self.tooltip, "tray tooltip");
        }
    }

    fn supports_balloons(&self) -> bool {
        true
    }

    fn show_balloon(&mut self, id: &str, text: &str) {
        if self.visible {
            info!(%id, "{text}");
        }
    }
}

/// Prints the main applet menu.
#[derive(Debug, Default)]
pub struct ConsoleMenus {
    pub help: String,
}

impl MenuPresenter for ConsoleMenus {
    fn popup(&self, menu: MenuId, button: u32, activate_time: u32) {
        debug!(?menu, button, activate_time, "menu popup");
        match menu {
            MenuId::MainApplet => println!("{}", self.help),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_console_visual_never_embedded() {
        let mut tray = ConsoleTray;
        let mut visual = tray.create_visual(None);
        assert!(visual.is_visible());
        assert!(!visual.is_embedded());
        visual.set_visible(false);
        assert!(!visual.is_visible());
        assert!(visual.supports_balloons());
    }
}
