//! Break window rendered as text on stdout.

use tracing::debug;

use crate::ui::assets::Icon;
use crate::ui::toolkit::{BreakControl, BreakSurface, WindowHints};

#[derive(Debug, Default)]
pub struct ConsoleSurface {
    title: String,
    message: String,
    buttons: Vec<(BreakControl, String)>,
    visible: bool,
    grabbed: bool,
    closed: bool,
}

impl ConsoleSurface {
    pub fn new() -> Self {
        Self::default()
    }

    fn render(&self) -> String {
        let mut out = format!("┌─ {} ─\n", self.title);
        for line in self.message.lines() {
            out.push_str("│ ");
            out.push_str(line);
            out.push('\n');
        }
        if !self.buttons.is_empty() {
            let labels: Vec<String> = self
                .buttons
                .iter()
                .map(|(_, label)| format!("[{label}]"))
                .collect();
            out.push_str("│ ");
            out.push_str(&labels.join(" "));
            out.push('\n');
        }
        out.push('└');
        out
    }
}

impl BreakSurface for ConsoleSurface {
    fn set_title(&mut self, title: &str) {
        self.title = title.to_string();
    }

    fn set_icon(&mut self, icon: Option<&Icon>) {
        debug!(icon = ?icon.map(|i| &i.name), "break window icon");
    }

    fn set_message(&mut self, text: &str) {
        if self.message == text {
            return;
        }
        self.message = text.to_string();
        if self.visible {
            println!("{}", self.render());
        }
    }

    fn add_button(&mut self, control: BreakControl, label: &str) {
        self.buttons.push((control, label.to_string()));
    }

    fn apply_hints(&mut self, hints: WindowHints) {
        debug!(?hints, "break window hints");
    }

    fn show_all(&mut self) {
        self.visible = true;
    }

    fn center(&mut self) {}

    fn set_avoid_pointer(&mut self, _avoid: bool) {}

    fn present(&mut self) {
        println!("{}", self.render());
    }

    fn grab(&mut self) -> bool {
        self.grabbed = true;
        debug!("console input grabbed");
        true
    }

    fn ungrab(&mut self) {
        if self.grabbed {
            self.grabbed = false;
            debug!("console input released");
        }
    }

    fn hide_all(&mut self) {
        self.visible = false;
    }

    fn close(&mut self) {
        self.closed = true;
        self.visible = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_includes_buttons() {
        let mut surface = ConsoleSurface::new();
        surface.set_title("Daily limit");
        surface.set_message("line one\nline two");
        surface.add_button(BreakControl::Skip, "Skip");
        surface.add_button(BreakControl::Postpone, "Postpone");
        let text = surface.render();
        assert!(text.starts_with("┌─ Daily limit ─\n"));
        assert!(text.contains("│ line two\n"));
        assert!(text.contains("[Skip] [Postpone]"));
    }

    #[test]
    fn test_ungrab_without_grab() {
        let mut surface = ConsoleSurface::new();
        surface.ungrab();
        assert!(!surface.grabbed);
        assert!(surface.grab());
        surface.ungrab();
        assert!(!surface.grabbed);
    }

    #[test]
    fn test_close_hides() {
        let mut surface = ConsoleSurface::new();
        surface.show_all();
        surface.close();
        assert!(surface.closed);
        assert!(!surface.visible);
    }
}
