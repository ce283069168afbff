//! Daily-limit break window.
//!
//! A [`BreakWindow`] owns one always-on-top surface. An external scheduler
//! calls [`BreakWindow::start`] and [`BreakWindow::stop`] at break boundaries
//! and [`BreakWindow::heartbeat`] while the break is active. Button clicks are
//! forwarded to the attached [`BreakResponse`], if any.

use std::rc::{Rc, Weak};

use tracing::{debug, warn};

use super::assets::{AssetResolver, load_icon};
use super::toolkit::{BreakControl, BreakSurface, WindowHints};
use crate::i18n::{Language, Texts};
use crate::timer::{BreakResponse, TimerSource};
use crate::utils::format_hmm;

pub const DAILY_LIMIT_ICON: &str = "daily_limit.png";

/// Visibility of a break window.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WindowState {
    Hidden,
    Showing { insisting: bool },
}

pub struct BreakWindow {
    surface: Box<dyn BreakSurface>,
    timer: Rc<dyn TimerSource>,
    break_response: Option<Weak<dyn BreakResponse>>,
    insist_break: bool,
    state: WindowState,
    grabbed: bool,
    controls: Vec<BreakControl>,
    lang: Language,
}

impl BreakWindow {
    /// Builds the window. Skip and Postpone buttons exist only when
    /// `ignorable` is set.
    pub fn new(
        mut surface: Box<dyn BreakSurface>,
        timer: Rc<dyn TimerSource>,
        ignorable: bool,
        resolver: &dyn AssetResolver,
        lang: Language,
    ) -> Self {
        let texts = Texts::new(lang);
        surface.set_title(&texts.daily_limit_title());
        surface.set_icon(load_icon(resolver, DAILY_LIMIT_ICON).as_ref());

        let mut controls = Vec::new();
        if ignorable {
            surface.add_button(BreakControl::Skip, texts.skip_button());
            surface.add_button(BreakControl::Postpone, texts.postpone_button());
            controls.extend([BreakControl::Skip, BreakControl::Postpone]);
        }
        surface.apply_hints(WindowHints::BREAK);

        Self {
            surface,
            timer,
            break_response: None,
            insist_break: false,
            state: WindowState::Hidden,
            grabbed: false,
            controls,
            lang,
        }
    }

    pub fn set_insist_break(&mut self, insist: bool) {
        self.insist_break = insist;
    }

    pub fn set_break_response(&mut self, response: Option<Weak<dyn BreakResponse>>) {
        self.break_response = response;
    }

    pub fn attach_response<R: BreakResponse + 'static>(&mut self, response: &Rc<R>) {
        let weak: Weak<dyn BreakResponse> = Rc::downgrade(response) as Weak<dyn BreakResponse>;
        self.set_break_response(Some(weak));
    }

    pub fn state(&self) -> WindowState {
        self.state
    }

    pub fn is_visible(&self) -> bool {
        matches!(self.state, WindowState::Showing { .. })
    }

    pub fn controls(&self) -> &[BreakControl] {
        &self.controls
    }

    pub fn has_grab(&self) -> bool {
        self.grabbed
    }

    /// Shows the window. The grab, when insisting, is taken only after the
    /// window has been presented.
    pub fn start(&mut self) {
        debug!(insist = self.insist_break, "break window start");
        self.refresh();
        self.surface.show_all();
        self.surface.center();
        self.surface.set_avoid_pointer(false);
        self.surface.present();

        if self.insist_break && !self.grabbed {
            self.grabbed = self.surface.grab();
            if !self.grabbed {
                warn!("could not grab input for insisting break");
            }
        }
        self.state = WindowState::Showing {
            insisting: self.insist_break,
        };
    }

    pub fn stop(&mut self) {
        debug!("break window stop");
        self.surface.ungrab();
        self.grabbed = false;
        self.surface.hide_all();
        self.state = WindowState::Hidden;
    }

    pub fn heartbeat(&mut self) {
        if self.is_visible() {
            self.refresh();
        }
    }

    /// Releases the window. Consuming `self` makes this the only way out.
    pub fn destroy(mut self) {
        debug!("break window destroy");
        if self.grabbed {
            self.surface.ungrab();
        }
        self.surface.close();
    }

    fn refresh(&mut self) {
        let texts = Texts::new(self.lang);
        let message = texts.daily_limit_message(
            &format_hmm(self.timer.elapsed()),
            &format_hmm(self.timer.limit()),
        );
        self.surface.set_message(&message);
    }

    fn response(&self) -> Option<Rc<dyn BreakResponse>> {
        self.break_response.as_ref().and_then(Weak::upgrade)
    }

    pub fn on_postpone_button_clicked(&self) {
        match self.response() {
            Some(response) => response.postpone_break(),
            None => debug!("postpone clicked with no break response attached"),
        }
    }

    pub fn on_skip_button_clicked(&self) {
        match self.response() {
            Some(response) => response.skip_break(),
            None => debug!("skip clicked with no break response attached"),
        }
    }

    /// Routes a click on `control`. Returns false if the window has no such
    /// button.
    pub fn click(&self, control: BreakControl) -> bool {
        if !self.controls.contains(&control) {
            return false;
        }
        match control {
            BreakControl::Skip => self.on_skip_button_clicked(),
            BreakControl::Postpone => self.on_postpone_button_clicked(),
        }
        true
    }
}
