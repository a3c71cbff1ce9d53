//! Main application struct and eframe integration
//!
//! `GuardApp` owns the navigation and session controllers, drains the
//! request channel the screens write to, advances every timer once per
//! frame, and dispatches rendering to the current screen.

use crate::anim::{ResultPresenter, WaveformSampler};
use crate::config::{Config, ThemeChoice};
use crate::detect::{DetectionProvider, StaticProvider};
use crate::state::{
    complete_session, AppRequest, NavState, RecordingMode, Screen, SessionController,
};
use crate::testconfig::{AssertionContext, TestCommand, TestConfig, TestRunner};
use crate::ui::components::NavBar;
use crate::ui::screens::{
    AudioResultsScreen, HistoryScreen, HomeScreen, ModelsScreen, ScreenContext,
    VideoResultsScreen,
};
use crate::ui::state::ScreenLocals;
use crate::ui::theme::{Theme, ThemeKind};
use crossbeam_channel::{bounded, Receiver, Sender};
use egui::CentralPanel;
use std::time::Instant;
use tracing::{debug, info};

/// Main DeepGuard application
pub struct GuardApp {
    /// Whether the app has been initialized
    initialized: bool,
    /// Navigation controller and cross-screen selections
    nav: NavState,
    /// Recording-session controller (owned by the Home screen)
    session: SessionController,
    /// Live waveform sampler
    sampler: WaveformSampler,
    /// Presentation state of the active results screen
    presenter: Option<ResultPresenter>,
    /// Per-screen transient UI state
    locals: ScreenLocals,
    /// UI theme
    theme: Theme,
    /// Detection service boundary
    provider: StaticProvider,
    /// Channel the screens raise requests on
    request_tx: Sender<AppRequest>,
    request_rx: Receiver<AppRequest>,
    /// Scenario runner (if running a scripted test)
    test_runner: Option<TestRunner>,
    /// Exit code requested by a scenario (if any)
    pending_exit: Option<i32>,
}

impl GuardApp {
    /// Create a new application bound to an eframe context
    pub fn new(
        cc: &eframe::CreationContext<'_>,
        config: Config,
        test_config: Option<TestConfig>,
    ) -> Self {
        let app = Self::with_config(config, test_config);
        app.theme.apply(&cc.egui_ctx);
        app
    }

    /// Build the application state without an eframe context. Used by the
    /// scripted and harness tests.
    pub fn with_config(config: Config, test_config: Option<TestConfig>) -> Self {
        let theme_kind = match config.theme {
            ThemeChoice::Dark => ThemeKind::Dark,
            ThemeChoice::Light => ThemeKind::Light,
        };
        let (request_tx, request_rx) = bounded(64);

        Self {
            initialized: false,
            nav: NavState::new(config.default_model),
            session: SessionController::new(),
            sampler: WaveformSampler::new(Instant::now()),
            presenter: None,
            locals: ScreenLocals::default(),
            theme: Theme::of(theme_kind),
            provider: StaticProvider::new(),
            request_tx,
            request_rx,
            test_runner: test_config.map(TestRunner::new),
            pending_exit: None,
        }
    }

    pub fn nav(&self) -> &NavState {
        &self.nav
    }

    pub fn session(&self) -> &SessionController {
        &self.session
    }

    /// Displayed and target confidence of the active results screen
    pub fn confidence(&self) -> Option<(u8, u8)> {
        self.presenter
            .as_ref()
            .map(|p| (p.confidence().displayed(), p.confidence().target()))
    }

    /// Initialize the application (called on first frame)
    fn initialize(&mut self) {
        if self.initialized {
            return;
        }
        self.initialized = true;

        if let Some(runner) = &mut self.test_runner {
            runner.start();
        }

        info!("DeepGuard UI initialized");
    }

    /// Apply a request raised by a screen or the scenario runner
    pub fn handle_request(&mut self, request: AppRequest, now: Instant, ctx: &egui::Context) {
        match request {
            AppRequest::Navigate(target) => self.navigate(target, now),
            AppRequest::SelectModel(id) => self.nav.set_model(id),
            AppRequest::StartRecording(mode) => {
                if self.session.is_recording() {
                    debug!("Already recording, ignoring start request");
                    return;
                }
                self.session.start(mode, now);
                self.nav.set_recording(true);
            }
            AppRequest::StopRecording => {
                if let Some(target) = complete_session(&mut self.session, &mut self.nav) {
                    self.enter_screen(target, now);
                }
            }
            AppRequest::ToggleTheme => {
                self.theme = Theme::of(self.theme.kind().toggled());
                self.theme.apply(ctx);
                info!("Theme switched to {:?}", self.theme.kind());
            }
        }
    }

    /// Switch screens. Navigating to the current screen changes nothing;
    /// an actual switch tears down the old screen's transient state.
    fn navigate(&mut self, target: Screen, now: Instant) {
        if self.nav.current() == target {
            return;
        }

        // the session is owned by the Home screen and must not outlive it
        if self.nav.current() == Screen::Home && self.session.is_recording() {
            self.session.cancel();
            self.nav.set_recording(false);
        }

        self.nav.navigate(target);
        self.enter_screen(target, now);
    }

    /// Build the transient state of a freshly entered screen
    fn enter_screen(&mut self, target: Screen, now: Instant) {
        self.presenter = match target {
            Screen::AudioResults => Some(ResultPresenter::new(
                self.provider
                    .analyze(RecordingMode::Audio, self.nav.selected_model()),
                now,
            )),
            Screen::VideoResults => Some(ResultPresenter::new(
                self.provider
                    .analyze(RecordingMode::Video, self.nav.selected_model()),
                now,
            )),
            _ => None,
        };
        self.locals.reset_for(target);
    }

    /// Advance every timer owned by the live screens
    fn poll_timers(&mut self, now: Instant) {
        self.session.poll(now);
        self.sampler.set_active(self.session.is_recording(), now);
        self.sampler.poll(now);
        if let Some(presenter) = &mut self.presenter {
            presenter.poll(now);
        }
    }

    /// Process scenario runner commands (if in test mode)
    fn process_test_commands(&mut self, ctx: &egui::Context, now: Instant) {
        let mut pending = Vec::new();
        if let Some(runner) = &mut self.test_runner {
            while let Some(command) = runner.poll() {
                pending.push(command);
            }
        }

        for (command, assertion) in pending {
            match command {
                TestCommand::Navigate(screen) => {
                    self.handle_request(AppRequest::Navigate(screen), now, ctx)
                }
                TestCommand::SetMode(mode) => {
                    if !self.session.is_recording() {
                        self.locals.recording_mode = mode;
                    }
                }
                TestCommand::ClickRecord => {
                    let request = if self.session.is_recording() {
                        AppRequest::StopRecording
                    } else {
                        AppRequest::StartRecording(self.locals.recording_mode)
                    };
                    self.handle_request(request, now, ctx);
                }
                TestCommand::StopRecord => {
                    self.handle_request(AppRequest::StopRecording, now, ctx)
                }
                TestCommand::CancelRecord => {
                    self.session.cancel();
                    self.nav.set_recording(false);
                }
                TestCommand::SelectModel(id) => {
                    self.handle_request(AppRequest::SelectModel(id), now, ctx)
                }
                TestCommand::ToggleTheme => {
                    self.handle_request(AppRequest::ToggleTheme, now, ctx)
                }
                TestCommand::Log(message) => info!("[TEST] {}", message),
                TestCommand::Exit { code } => self.pending_exit = Some(code),
            }

            if let Some(assertion) = assertion {
                let context = AssertionContext {
                    is_recording: self.session.is_recording(),
                    current_screen: self.nav.current(),
                    elapsed_seconds: self.session.elapsed_seconds(),
                    selected_model: self.nav.selected_model().to_string(),
                    confidence: self.confidence(),
                };
                if let Some(runner) = &mut self.test_runner {
                    runner.check_assertion(&assertion, &context);
                }
            }
        }

        if let Some(runner) = &self.test_runner {
            if runner.is_completed() {
                info!("{}", runner.summary());

                if let Some(code) = self.pending_exit.take() {
                    let final_code = if runner.test_passed() { code } else { 1 };
                    info!("[TEST] Exiting with code {}", final_code);
                    ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                    std::process::exit(final_code);
                }
            }
        }
    }

    /// Render the current screen
    fn show_screen(&mut self, ui: &mut egui::Ui, now: Instant) {
        let screen_ctx = ScreenContext {
            theme: &self.theme,
            nav: &self.nav,
            provider: &self.provider,
            requests: &self.request_tx,
        };

        match self.nav.current() {
            Screen::Home => {
                HomeScreen::new(screen_ctx, &self.session, &self.sampler, &mut self.locals)
                    .show(ui)
            }
            Screen::Models => ModelsScreen::new(screen_ctx, &mut self.locals).show(ui),
            Screen::History => HistoryScreen::new(screen_ctx, &mut self.locals).show(ui),
            Screen::AudioResults => {
                if let Some(presenter) = &mut self.presenter {
                    AudioResultsScreen::new(screen_ctx, presenter, now).show(ui);
                }
            }
            Screen::VideoResults => {
                if let Some(presenter) = &mut self.presenter {
                    VideoResultsScreen::new(screen_ctx, presenter, now).show(ui);
                }
            }
        }
    }
}

impl eframe::App for GuardApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.initialize();
        let now = Instant::now();

        // apply requests raised by the screens last frame
        while let Ok(request) = self.request_rx.try_recv() {
            self.handle_request(request, now, ctx);
        }

        self.poll_timers(now);
        self.process_test_commands(ctx, now);

        egui::TopBottomPanel::bottom("nav_bar")
            .frame(egui::Frame::none().fill(self.theme.bg_secondary))
            .show(ctx, |ui| {
                NavBar::new(self.nav.current(), &self.theme, &self.request_tx).show(ui);
            });

        CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    self.show_screen(ui, now);
                });
        });

        // keep frames coming while any timer is live
        let animating = self.session.is_recording()
            || self.presenter.as_ref().is_some_and(|p| p.is_animating())
            || self.test_runner.is_some();
        if animating {
            ctx.request_repaint();
        }
    }
}
