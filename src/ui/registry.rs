//! Ownership of open break windows.
//!
//! Windows are handed to the registry on creation and are only released by
//! [`WindowRegistry::close`], which calls [`BreakWindow::destroy`].

use std::collections::BTreeMap;

use tracing::debug;

use super::break_window::BreakWindow;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct WindowId(u64);

#[derive(Default)]
pub struct WindowRegistry {
    windows: BTreeMap<WindowId, BreakWindow>,
    next_id: u64,
}

impl WindowRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, window: BreakWindow) -> WindowId {
        let id = WindowId(self.next_id);
        self.next_id += 1;
        self.windows.insert(id, window);
        debug!(?id, "break window registered");
        id
    }

    pub fn get(&self, id: WindowId) -> Option<&BreakWindow> {
        self.windows.get(&id)
    }

    pub fn get_mut(&mut self, id: WindowId) -> Option<&mut BreakWindow> {
        self.windows.get_mut(&id)
    }

    /// Stops and destroys the window. Returns false for an unknown id.
    pub fn close(&mut self, id: WindowId) -> bool {
        let Some(mut window) = self.windows.remove(&id) else {
            return false;
        };
        if window.is_visible() {
            window.stop();
        }
        window.destroy();
        true
    }

    pub fn heartbeat_all(&mut self) {
        for window in self.windows.values_mut() {
            window.heartbeat();
        }
    }

    pub fn close_all(&mut self) {
        if self.is_empty() {
            return;
        }
        debug!(count = self.len(), "closing all break windows");
        let ids: Vec<_> = self.windows.keys().copied().collect();
        for id in ids {
            self.close(id);
        }
    }

    pub fn len(&self) -> usize {
        self.windows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.windows.is_empty()
    }
}

impl Drop for WindowRegistry {
    fn drop(&mut self) {
        self.close_all();
    }
}
