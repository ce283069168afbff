//! Console frontend
//!
//! Drives the break window and status indicator from a terminal: active time
//! accumulates once per second, the daily-limit window opens when the limit
//! is reached, and stdin commands stand in for button and tray clicks.

pub mod commands;
pub mod coordinator;
pub mod surface;
pub mod tray;

use std::rc::Rc;
use std::time::{Duration, SystemTime};

use crossbeam_channel::{never, select, tick};
use tracing::{debug, info};

use crate::common::Config;
use crate::i18n::{Language, Texts};
use crate::state::{OperationMode, Phase};
use crate::timer::{DailyUsageTimer, TimerSource, local_date};
use crate::ui::assets::SearchPathResolver;
use crate::ui::break_window::WindowState;
use crate::ui::signal::SubscriptionId;
use crate::ui::toolkit::{BreakControl, MenuPresenter, TrayEvent};
use crate::ui::{BreakWindow, StatusIndicator, WindowId, WindowRegistry};
use crate::utils::{approx_duration, format_hmm};
use commands::{Command, spawn_stdin_reader};
use coordinator::{Decision, LimitCoordinator};
use surface::ConsoleSurface;
use tray::{ConsoleMenus, ConsoleTray};

const TICK: Duration = Duration::from_secs(1);
const LIMIT_BALLOON_ID: &str = "daily-limit";

/// Snapshot reported by the `i` command.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Status {
    pub phase: Phase,
    pub mode: OperationMode,
    pub elapsed: Duration,
    pub limit: Duration,
    pub tray_embedded: bool,
    pub window: Option<WindowState>,
    pub grabbed: bool,
    pub controls: Vec<BreakControl>,
}

pub struct App {
    config: Config,
    lang: Language,
    resolver: SearchPathResolver,
    timer: Rc<DailyUsageTimer>,
    coordinator: Rc<LimitCoordinator>,
    registry: WindowRegistry,
    window: Option<WindowId>,
    indicator: StatusIndicator,
    balloon_log: SubscriptionId,
    phase: Phase,
}

impl App {
    pub fn new(config: Config, resolver: SearchPathResolver, mode: OperationMode) -> Self {
        let lang = config.effective_language();
        let texts = Texts::new(lang);
        let menus = Rc::new(ConsoleMenus {
            help: texts.console_help().to_string(),
        });
        let indicator = StatusIndicator::new(
            Box::new(ConsoleTray),
            menus as Rc<dyn MenuPresenter>,
            &resolver,
            mode,
        );
        indicator.activated.subscribe(|_| info!("tray activated"));
        indicator.changed.subscribe(|_| debug!("tray size changed"));
        let balloon_log = indicator
            .balloon_activated
            .subscribe(|id: &String| info!(%id, "balloon activated"));

        let timer = Rc::new(DailyUsageTimer::new(
            config.daily_limit(),
            local_date(SystemTime::now()),
        ));

        let mut app = Self {
            config,
            lang,
            resolver,
            timer,
            coordinator: Rc::new(LimitCoordinator::new()),
            registry: WindowRegistry::new(),
            window: None,
            indicator,
            balloon_log,
            phase: Phase::Working,
        };
        app.refresh_tooltip();
        app
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn timer(&self) -> &DailyUsageTimer {
        &self.timer
    }

    pub fn window(&self) -> Option<&BreakWindow> {
        self.window.and_then(|id| self.registry.get(id))
    }

    pub fn status(&self) -> Status {
        let window = self.window();
        Status {
            phase: self.phase(),
            mode: self.indicator.operation_mode(),
            elapsed: self.timer().elapsed(),
            limit: self.timer().limit(),
            tray_embedded: self.indicator.is_embedded(),
            window: window.map(BreakWindow::state),
            grabbed: window.is_some_and(BreakWindow::has_grab),
            controls: window.map(|w| w.controls().to_vec()).unwrap_or_default(),
        }
    }

    /// Advances the clock by `dt` of wall time ending at `now`.
    pub fn tick(&mut self, dt: Duration, now: SystemTime) {
        if self.timer.roll_over(local_date(now)) {
            info!("new day, usage reset");
            self.close_window();
            self.phase = Phase::Working;
        }

        if self.indicator.operation_mode() != OperationMode::Suspended {
            self.timer.advance(dt);
        }

        if self.phase == Phase::Working && self.timer.is_over_limit() {
            self.open_window();
        }

        self.registry.heartbeat_all();
        self.refresh_tooltip();
    }

    /// Handles one command. Returns false when the app should quit.
    pub fn handle(&mut self, cmd: Command) -> bool {
        match cmd {
            Command::Skip => self.click(BreakControl::Skip),
            Command::Postpone => self.click(BreakControl::Postpone),
            Command::Mode(mode) => {
                info!(%mode, "operation mode");
                self.indicator.set_operation_mode(mode);
                self.refresh_tooltip();
            }
            Command::TrayActivate => self.indicator.dispatch(TrayEvent::Activate),
            Command::TrayMenu => self.indicator.dispatch(TrayEvent::PopupMenu {
                button: 3,
                activate_time: 0,
            }),
            Command::TrayShow => self.indicator.set_visible(true),
            Command::TrayHide => self.indicator.set_visible(false),
            Command::TrayResize(size) => self.indicator.dispatch(TrayEvent::SizeChanged(size)),
            Command::BalloonClick(id) => self.indicator.dispatch(TrayEvent::BalloonActivate(id)),
            Command::TaskbarCreated => {
                self.indicator.dispatch(TrayEvent::TaskbarCreated);
                self.refresh_tooltip();
            }
            Command::Status => {
                let status = self.status();
                info!(
                    phase = ?status.phase,
                    mode = %status.mode,
                    used = %format_hmm(status.elapsed),
                    limit = %format_hmm(status.limit),
                    embedded = status.tray_embedded,
                    window = ?status.window,
                    grabbed = status.grabbed,
                    controls = ?status.controls,
                    "status"
                );
            }
            Command::Quit => return false,
        }
        true
    }

    fn click(&mut self, control: BreakControl) {
        let clicked = self.window().is_some_and(|w| w.click(control));
        if !clicked {
            debug!(?control, "no break window button to click");
            return;
        }
        match self.coordinator.take() {
            Some(Decision::Postpone) => {
                self.timer.postpone(self.config.postpone_duration());
                self.close_window();
                self.phase = Phase::Working;
            }
            Some(Decision::Skip) => {
                self.close_window();
                self.phase = Phase::Dismissed;
            }
            None => {}
        }
    }

    fn open_window(&mut self) {
        let timer: Rc<dyn TimerSource> = Rc::clone(&self.timer) as Rc<dyn TimerSource>;
        let mut window = BreakWindow::new(
            Box::new(ConsoleSurface::new()),
            timer,
            self.config.ignorable,
            &self.resolver,
            self.lang,
        );
        window.set_insist_break(self.config.insist_break);
        window.attach_response(&self.coordinator);
        let id = self.registry.insert(window);
        if let Some(window) = self.registry.get_mut(id) {
            window.start();
        }
        self.window = Some(id);
        self.phase = Phase::LimitReached;

        if self.indicator.operation_mode() != OperationMode::Quiet {
            let texts = Texts::new(self.lang);
            self.indicator
                .show_balloon(LIMIT_BALLOON_ID, texts.limit_balloon());
        }
    }

    fn close_window(&mut self) {
        if let Some(id) = self.window.take() {
            self.registry.close(id);
        }
    }

    /// Closes the window and disconnects the app's own subscribers.
    pub fn shutdown(&mut self) {
        self.close_window();
        self.indicator.balloon_activated.unsubscribe(self.balloon_log);
        debug!(open_windows = self.registry.len(), "shut down");
    }

    fn refresh_tooltip(&mut self) {
        let texts = Texts::new(self.lang);
        let tip = texts.tray_tooltip(
            self.indicator.operation_mode(),
            &approx_duration(self.timer.remaining()),
        );
        self.indicator.set_tooltip(&tip);
    }
}

/// Run the console application until `q` or Ctrl+C.
pub fn run(config: Config, mode: OperationMode) {
    let texts = Texts::new(config.effective_language());
    let resolver = SearchPathResolver::with_defaults(config.icon_dir.clone());
    debug!(roots = ?resolver.roots(), "asset search roots");
    info!(
        limit_minutes = config.daily_limit_minutes,
        postpone_minutes = config.postpone_minutes,
        insist = config.insist_break,
        ignorable = config.ignorable,
        "daily limit configured"
    );
    println!("{}", texts.console_help());

    let mut app = App::new(config, resolver, mode);
    let ticker = tick(TICK);
    let commands = spawn_stdin_reader();
    let closed = never();
    let mut stdin_open = true;

    loop {
        let input = if stdin_open { &commands } else { &closed };
        select! {
            recv(ticker) -> _ => app.tick(TICK, SystemTime::now()),
            recv(input) -> msg => match msg {
                Ok(cmd) => {
                    if !app.handle(cmd) {
                        break;
                    }
                }
                Err(_) => {
                    debug!("stdin closed");
                    stdin_open = false;
                }
            },
        }
    }

    app.shutdown();
    info!("bye");
}
