//! UI harness tests for screen rendering
//!
//! These tests verify that each screen renders against the mock provider
//! in its various states without raising spurious requests.

use crossbeam_channel::{bounded, Receiver, Sender};
use deepguard::anim::{ResultPresenter, WaveformSampler};
use deepguard::detect::{DetectionProvider, StaticProvider};
use deepguard::state::{AppRequest, NavState, RecordingMode, SessionController};
use deepguard::ui::components::{ConfidenceRing, LiveWaveform};
use deepguard::ui::screens::{
    AudioResultsScreen, HistoryScreen, HomeScreen, ModelsScreen, ScreenContext,
    VideoResultsScreen,
};
use deepguard::ui::{HistoryFilter, ScreenLocals, Theme};
use egui_kittest::Harness;
use std::time::Instant;

/// Everything a screen needs, bundled for the harness
struct ScreenTestState {
    theme: Theme,
    nav: NavState,
    provider: StaticProvider,
    tx: Sender<AppRequest>,
    rx: Receiver<AppRequest>,
    locals: ScreenLocals,
    session: SessionController,
    sampler: WaveformSampler,
    presenter: Option<ResultPresenter>,
}

impl ScreenTestState {
    fn new() -> Self {
        let (tx, rx) = bounded(64);
        Self {
            theme: Theme::dark(),
            nav: NavState::default(),
            provider: StaticProvider::new(),
            tx,
            rx,
            locals: ScreenLocals::default(),
            session: SessionController::new(),
            sampler: WaveformSampler::new(Instant::now()),
            presenter: None,
        }
    }
}

/// Borrow the shared part of the test state as a screen context
macro_rules! screen_ctx {
    ($state:expr) => {
        ScreenContext {
            theme: &$state.theme,
            nav: &$state.nav,
            provider: &$state.provider,
            requests: &$state.tx,
        }
    };
}

#[test]
fn test_home_screen_idle() {
    let mut harness = Harness::builder()
        .with_size(egui::Vec2::new(420.0, 780.0))
        .build_state(
            |ctx, state: &mut ScreenTestState| {
                egui::CentralPanel::default().show(ctx, |ui| {
                    let screen_ctx = screen_ctx!(state);
                    HomeScreen::new(screen_ctx, &state.session, &state.sampler, &mut state.locals)
                        .show(ui);
                });
            },
            ScreenTestState::new(),
        );

    for _ in 0..3 {
        harness.run();
    }

    // rendering alone raises no requests
    assert!(harness.state().rx.try_recv().is_err());
    assert!(!harness.state().session.is_recording());
}

#[test]
fn test_home_screen_recording_audio() {
    let mut state = ScreenTestState::new();
    let now = Instant::now();
    state.session.start(RecordingMode::Audio, now);
    state.nav.set_recording(true);
    state.sampler.set_active(true, now);

    let mut harness = Harness::builder()
        .with_size(egui::Vec2::new(420.0, 780.0))
        .build_state(
            |ctx, state: &mut ScreenTestState| {
                egui::CentralPanel::default().show(ctx, |ui| {
                    let screen_ctx = screen_ctx!(state);
                    HomeScreen::new(screen_ctx, &state.session, &state.sampler, &mut state.locals)
                        .show(ui);
                });
            },
            state,
        );

    for _ in 0..3 {
        harness.run();
    }

    assert!(harness.state().session.is_recording());
    assert_eq!(
        harness.state().session.mode(),
        Some(RecordingMode::Audio)
    );
}

#[test]
fn test_models_screen_renders_catalog() {
    let mut harness = Harness::builder()
        .with_size(egui::Vec2::new(420.0, 780.0))
        .build_state(
            |ctx, state: &mut ScreenTestState| {
                egui::CentralPanel::default().show(ctx, |ui| {
                    let screen_ctx = screen_ctx!(state);
                    ModelsScreen::new(screen_ctx, &mut state.locals).show(ui);
                });
            },
            ScreenTestState::new(),
        );

    for _ in 0..3 {
        harness.run();
    }

    // the default category tab is audio
    assert_eq!(
        harness.state().locals.model_category,
        RecordingMode::Audio
    );
    assert!(harness.state().rx.try_recv().is_err());
}

#[test]
fn test_history_screen_with_filter() {
    let mut state = ScreenTestState::new();
    state.locals.history_filter = HistoryFilter::Video;

    let mut harness = Harness::builder()
        .with_size(egui::Vec2::new(420.0, 780.0))
        .build_state(
            |ctx, state: &mut ScreenTestState| {
                egui::CentralPanel::default().show(ctx, |ui| {
                    let screen_ctx = screen_ctx!(state);
                    HistoryScreen::new(screen_ctx, &mut state.locals).show(ui);
                });
            },
            state,
        );

    for _ in 0..3 {
        harness.run();
    }

    assert_eq!(harness.state().locals.history_filter, HistoryFilter::Video);
}

#[test]
fn test_audio_results_screen_renders() {
    let mut state = ScreenTestState::new();
    let result = state.provider.analyze(RecordingMode::Audio, "standard");
    state.presenter = Some(ResultPresenter::new(result, Instant::now()));

    let mut harness = Harness::builder()
        .with_size(egui::Vec2::new(420.0, 780.0))
        .build_state(
            |ctx, state: &mut ScreenTestState| {
                egui::CentralPanel::default().show(ctx, |ui| {
                    egui::ScrollArea::vertical().show(ui, |ui| {
                        let screen_ctx = screen_ctx!(state);
                        let now = Instant::now();
                        if let Some(presenter) = state.presenter.as_mut() {
                            AudioResultsScreen::new(screen_ctx, presenter, now).show(ui);
                        }
                    });
                });
            },
            state,
        );

    for _ in 0..3 {
        harness.run();
    }

    let presenter = harness.state().presenter.as_ref().unwrap();
    assert_eq!(presenter.confidence().target(), 94);
    assert!(presenter.confidence().displayed() <= presenter.confidence().target());
}

#[test]
fn test_video_results_screen_renders_with_heatmap() {
    let mut state = ScreenTestState::new();
    let result = state
        .provider
        .analyze(RecordingMode::Video, "standard-video");
    let mut presenter = ResultPresenter::new(result, Instant::now());
    presenter.show_heatmap = true;
    state.presenter = Some(presenter);

    let mut harness = Harness::builder()
        .with_size(egui::Vec2::new(420.0, 780.0))
        .build_state(
            |ctx, state: &mut ScreenTestState| {
                egui::CentralPanel::default().show(ctx, |ui| {
                    egui::ScrollArea::vertical().show(ui, |ui| {
                        let screen_ctx = screen_ctx!(state);
                        let now = Instant::now();
                        if let Some(presenter) = state.presenter.as_mut() {
                            VideoResultsScreen::new(screen_ctx, presenter, now).show(ui);
                        }
                    });
                });
            },
            state,
        );

    for _ in 0..3 {
        harness.run();
    }

    let presenter = harness.state().presenter.as_ref().unwrap();
    assert!(presenter.show_heatmap);
    assert_eq!(presenter.confidence().target(), 87);
}

#[test]
fn test_confidence_ring_renders_all_values() {
    for value in [0u8, 1, 50, 87, 100] {
        let mut harness = Harness::builder()
            .with_size(egui::Vec2::new(200.0, 200.0))
            .build_state(
                move |ctx, theme: &mut Theme| {
                    egui::CentralPanel::default().show(ctx, |ui| {
                        let color = theme.primary;
                        ConfidenceRing::new(theme, value, color).show(ui);
                    });
                },
                Theme::dark(),
            );
        for _ in 0..2 {
            harness.run();
        }
    }
}

#[test]
fn test_live_waveform_renders_flat_and_active() {
    let mut sampler = WaveformSampler::new(Instant::now());
    sampler.set_active(true, Instant::now());

    let mut harness = Harness::builder()
        .with_size(egui::Vec2::new(300.0, 100.0))
        .build_state(
            |ctx, (sampler, theme): &mut (WaveformSampler, Theme)| {
                egui::CentralPanel::default().show(ctx, |ui| {
                    LiveWaveform::from_sampler(sampler, theme).show(ui);
                });
            },
            (sampler, Theme::dark()),
        );

    for _ in 0..3 {
        harness.run();
    }
    assert!(harness.state().0.is_active());
}
