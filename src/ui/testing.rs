//! Recording fakes for the toolkit traits.

use std::cell::{Cell, RefCell};
use std::path::PathBuf;
use std::rc::Rc;
use std::time::Duration;

use super::assets::{AssetResolver, Icon, SearchPath};
use super::toolkit::{
    BreakControl, BreakSurface, Gesture, MenuId, MenuPresenter, TrayBackend, TrayVisual,
    WindowHints,
};
use crate::common::{AppError, AppResult};
use crate::timer::{BreakResponse, TimerSource};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SurfaceCall {
    Title(String),
    Icon(Option<String>),
    Message(String),
    Button(BreakControl, String),
    Hints(WindowHints),
    ShowAll,
    Center,
    AvoidPointer(bool),
    Present,
    Grab,
    Ungrab,
    HideAll,
    Close,
}

pub type CallLog = Rc<RefCell<Vec<SurfaceCall>>>;

pub struct RecordingSurface {
    pub calls: CallLog,
    pub grab_succeeds: bool,
}

impl RecordingSurface {
    pub fn new() -> (Self, CallLog) {
        let calls = CallLog::default();
        (
            Self {
                calls: Rc::clone(&calls),
                grab_succeeds: true,
            },
            calls,
        )
    }

    fn push(&self, call: SurfaceCall) {
        self.calls.borrow_mut().push(call);
    }
}

impl BreakSurface for RecordingSurface {
    fn set_title(&mut self, title: &str) {
        self.push(SurfaceCall::Title(title.to_string()));
    }
    fn set_icon(&mut self, icon: Option<&Icon>) {
        self.push(SurfaceCall::Icon(icon.map(|i| i.name.clone())));
    }
    fn set_message(&mut self, text: &str) {
        self.push(SurfaceCall::Message(text.to_string()));
    }
    fn add_button(&mut self, control: BreakControl, label: &str) {
        self.push(SurfaceCall::Button(control, label.to_string()));
    }
    fn apply_hints(&mut self, hints: WindowHints) {
        self.push(SurfaceCall::Hints(hints));
    }
    fn show_all(&mut self) {
        self.push(SurfaceCall::ShowAll);
    }
    fn center(&mut self) {
        self.push(SurfaceCall::Center);
    }
    fn set_avoid_pointer(&mut self, avoid: bool) {
        self.push(SurfaceCall::AvoidPointer(avoid));
    }
    fn present(&mut self) {
        self.push(SurfaceCall::Present);
    }
    fn grab(&mut self) -> bool {
        self.push(SurfaceCall::Grab);
        self.grab_succeeds
    }
    fn ungrab(&mut self) {
        self.push(SurfaceCall::Ungrab);
    }
    fn hide_all(&mut self) {
        self.push(SurfaceCall::HideAll);
    }
    fn close(&mut self) {
        self.push(SurfaceCall::Close);
    }
}

pub struct FixedTimer {
    pub elapsed: Cell<Duration>,
    pub limit: Duration,
}

impl FixedTimer {
    pub fn new(elapsed_secs: u64, limit_secs: u64) -> Rc<Self> {
        Rc::new(Self {
            elapsed: Cell::new(Duration::from_secs(elapsed_secs)),
            limit: Duration::from_secs(limit_secs),
        })
    }
}

impl TimerSource for FixedTimer {
    fn elapsed(&self) -> Duration {
        self.elapsed.get()
    }
    fn limit(&self) -> Duration {
        self.limit
    }
}

#[derive(Default)]
pub struct RecordingResponse {
    pub postponed: Cell<u32>,
    pub skipped: Cell<u32>,
}

impl BreakResponse for RecordingResponse {
    fn postpone_break(&self) {
        self.postponed.set(self.postponed.get() + 1);
    }
    fn skip_break(&self) {
        self.skipped.set(self.skipped.get() + 1);
    }
}

/// Resolver that finds nothing.
pub struct EmptyResolver;

impl AssetResolver for EmptyResolver {
    fn resolve(&self, filename: &str, category: SearchPath) -> AppResult<PathBuf> {
        Err(AppError::AssetNotFound {
            name: filename.to_string(),
            category,
        })
    }
}

#[derive(Default)]
pub struct RecordingMenus {
    pub popups: RefCell<Vec<(MenuId, u32, u32)>>,
}

impl MenuPresenter for RecordingMenus {
    fn popup(&self, menu: MenuId, button: u32, activate_time: u32) {
        self.popups.borrow_mut().push((menu, button, activate_time));
    }
}

/// Shared view of a fake tray visual's state.
#[derive(Debug, Default)]
pub struct VisualState {
    pub icon: Option<String>,
    pub visible: bool,
    pub embedded: bool,
    pub tooltip: Option<String>,
    pub gestures: Vec<Gesture>,
    pub balloons: Vec<(String, String)>,
}

pub struct FakeVisual {
    state: Rc<RefCell<VisualState>>,
    balloons: bool,
}

impl TrayVisual for FakeVisual {
    fn connect(&mut self, gestures: &[Gesture]) {
        self.state.borrow_mut().gestures = gestures.to_vec();
    }
    fn set_icon(&mut self, icon: Option<&Icon>) {
        self.state.borrow_mut().icon = icon.map(|i| i.name.clone());
    }
    fn set_visible(&mut self, visible: bool) {
        self.state.borrow_mut().visible = visible;
    }
    fn is_visible(&self) -> bool {
        self.state.borrow().visible
    }
    fn is_embedded(&self) -> bool {
        self.state.borrow().embedded
    }
    fn set_tooltip(&mut self, tip: &str) {
        self.state.borrow_mut().tooltip = Some(tip.to_string());
    }
    fn supports_balloons(&self) -> bool {
        self.balloons
    }
    fn show_balloon(&mut self, id: &str, text: &str) {
        self.state
            .borrow_mut()
            .balloons
            .push((id.to_string(), text.to_string()));
    }
}

/// Backend handing out [`FakeVisual`]s; every created visual's state is kept.
#[derive(Default)]
pub struct FakeTray {
    pub created: Rc<RefCell<Vec<Rc<RefCell<VisualState>>>>>,
    pub balloons: bool,
    pub embedded: bool,
}

impl FakeTray {
    pub fn latest(created: &Rc<RefCell<Vec<Rc<RefCell<VisualState>>>>>) -> Rc<RefCell<VisualState>> {
        Rc::clone(created.borrow().last().expect("no visual created"))
    }
}

impl TrayBackend for FakeTray {
    fn create_visual(&mut self, icon: Option<&Icon>) -> Box<dyn TrayVisual> {
        let state = Rc::new(RefCell::new(VisualState {
            icon: icon.map(|i| i.name.clone()),
            visible: true,
            embedded: self.embedded,
            ..VisualState::default()
        }));
        self.created.borrow_mut().push(Rc::clone(&state));
        Box::new(FakeVisual {
            state,
            balloons: self.balloons,
        })
    }
}
