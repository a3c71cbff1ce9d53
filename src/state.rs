//! Core navigation and recording-session controllers
//!
//! This module is the state-machine heart of the application:
//! - **NavState**: which screen is current plus the two cross-screen
//!   selections (model id, recording flag). Screens never write it
//!   directly; they raise [`AppRequest`]s that the app shell applies.
//! - **SessionController**: the transient state of an in-progress capture,
//!   ticking elapsed seconds on a wall-clock deadline.
//!
//! All transitions are total: any screen may navigate to any screen, and
//! no error states exist.

use serde::Deserialize;
use std::time::{Duration, Instant};
use tracing::{debug, info};

/// The five screens of the application
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Screen {
    /// Record / upload entry point
    #[default]
    Home,
    /// Detection model selection
    Models,
    /// Past recordings list
    History,
    /// Video analysis results
    VideoResults,
    /// Audio analysis results
    AudioResults,
}

impl Screen {
    /// Check if this is one of the two results screens
    pub fn is_results(&self) -> bool {
        matches!(self, Screen::VideoResults | Screen::AudioResults)
    }

    /// Human-readable screen title
    pub fn title(&self) -> &'static str {
        match self {
            Screen::Home => "Home",
            Screen::Models => "Detection Models",
            Screen::History => "Recordings",
            Screen::VideoResults => "Analysis Results",
            Screen::AudioResults => "Analysis Results",
        }
    }
}

impl std::fmt::Display for Screen {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Screen::Home => write!(f, "home"),
            Screen::Models => write!(f, "models"),
            Screen::History => write!(f, "history"),
            Screen::VideoResults => write!(f, "video-results"),
            Screen::AudioResults => write!(f, "audio-results"),
        }
    }
}

/// Capture mode for a recording session
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecordingMode {
    #[default]
    Audio,
    Video,
}

impl RecordingMode {
    /// The results screen a completed session of this mode routes to
    pub fn results_screen(self) -> Screen {
        match self {
            RecordingMode::Audio => Screen::AudioResults,
            RecordingMode::Video => Screen::VideoResults,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            RecordingMode::Audio => "Audio",
            RecordingMode::Video => "Video",
        }
    }
}

impl std::fmt::Display for RecordingMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RecordingMode::Audio => write!(f, "audio"),
            RecordingMode::Video => write!(f, "video"),
        }
    }
}

/// Requests screens raise toward the app shell
///
/// Screens own no durable state; every mutation of shared state travels
/// through one of these messages and is applied by the shell.
#[derive(Clone, Debug)]
pub enum AppRequest {
    /// Switch the current screen
    Navigate(Screen),
    /// Change the active detection model
    SelectModel(String),
    /// Begin a capture session
    StartRecording(RecordingMode),
    /// End the capture session and show its results
    StopRecording,
    /// Flip the light/dark theme
    ToggleTheme,
}

/// Navigation controller: current screen plus cross-screen selections
///
/// `navigate` is a total function over the screen enumeration; there is no
/// notion of an illegal transition. Nothing here is persisted: a fresh
/// process starts at Home with the configured default model and not
/// recording.
#[derive(Clone, Debug)]
pub struct NavState {
    current: Screen,
    selected_model: String,
    is_recording: bool,
}

impl NavState {
    pub fn new(default_model: impl Into<String>) -> Self {
        Self {
            current: Screen::Home,
            selected_model: default_model.into(),
            is_recording: false,
        }
    }

    /// Unconditionally replace the current screen
    pub fn navigate(&mut self, target: Screen) {
        if self.current != target {
            info!("Navigating {} -> {}", self.current, target);
        }
        self.current = target;
    }

    pub fn set_model(&mut self, id: impl Into<String>) {
        self.selected_model = id.into();
        debug!("Selected model: {}", self.selected_model);
    }

    pub fn set_recording(&mut self, recording: bool) {
        self.is_recording = recording;
    }

    pub fn current(&self) -> Screen {
        self.current
    }

    pub fn selected_model(&self) -> &str {
        &self.selected_model
    }

    pub fn is_recording(&self) -> bool {
        self.is_recording
    }
}

impl Default for NavState {
    fn default() -> Self {
        Self::new("standard")
    }
}

/// Transient state of an in-progress capture
///
/// Elapsed time advances on a wall-clock deadline, one second per tick.
/// The deadline lives inside the session, so dropping the session is all
/// it takes to cancel the tick.
#[derive(Clone, Debug)]
pub struct RecordingSession {
    mode: RecordingMode,
    elapsed_seconds: u32,
    next_tick: Instant,
}

impl RecordingSession {
    fn new(mode: RecordingMode, now: Instant) -> Self {
        Self {
            mode,
            elapsed_seconds: 0,
            next_tick: now + Duration::from_secs(1),
        }
    }

    /// Advance elapsed time past any deadlines that have come due.
    /// Returns the number of whole seconds that elapsed.
    fn poll(&mut self, now: Instant) -> u32 {
        let mut ticks = 0;
        while now >= self.next_tick {
            self.elapsed_seconds += 1;
            self.next_tick += Duration::from_secs(1);
            ticks += 1;
        }
        ticks
    }
}

/// Recording-session controller: `idle` or `recording(mode, elapsed)`
#[derive(Clone, Debug, Default)]
pub struct SessionController {
    session: Option<RecordingSession>,
}

impl SessionController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_recording(&self) -> bool {
        self.session.is_some()
    }

    /// Elapsed whole seconds of the active session, 0 when idle
    pub fn elapsed_seconds(&self) -> u32 {
        self.session.as_ref().map_or(0, |s| s.elapsed_seconds)
    }

    /// Mode of the active session, if any
    pub fn mode(&self) -> Option<RecordingMode> {
        self.session.as_ref().map(|s| s.mode)
    }

    /// Enter `recording(mode, 0)`. A session already in progress is
    /// replaced; elapsed time always restarts at zero.
    pub fn start(&mut self, mode: RecordingMode, now: Instant) {
        if self.session.is_some() {
            debug!("Restarting session, previous elapsed time discarded");
        }
        self.session = Some(RecordingSession::new(mode, now));
        info!("Recording started ({})", mode);
    }

    /// Leave `recording`, returning the mode of the completed session so
    /// the caller can route to its results screen. No-op when idle.
    pub fn stop(&mut self) -> Option<RecordingMode> {
        let session = self.session.take()?;
        info!(
            "Recording stopped ({}) after {}s",
            session.mode, session.elapsed_seconds
        );
        Some(session.mode)
    }

    /// Discard the session without signalling completion
    pub fn cancel(&mut self) {
        if let Some(session) = self.session.take() {
            info!(
                "Recording cancelled ({}) at {}s",
                session.mode, session.elapsed_seconds
            );
        }
    }

    /// Advance the per-second tick. Returns true if elapsed time changed.
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.session.as_mut() {
            Some(session) => session.poll(now) > 0,
            None => false,
        }
    }
}

/// Complete the active session: stop it, clear the shared recording flag,
/// and navigate to the results screen for its mode.
///
/// Returns the screen navigated to, or None if no session was active.
pub fn complete_session(
    session: &mut SessionController,
    nav: &mut NavState,
) -> Option<Screen> {
    let mode = session.stop()?;
    nav.set_recording(false);
    let target = mode.results_screen();
    nav.navigate(target);
    Some(target)
}

/// Format whole seconds as `MM:SS`
pub fn format_clock(total_seconds: u32) -> String {
    format!("{:02}:{:02}", total_seconds / 60, total_seconds % 60)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(base: Instant, ms: u64) -> Instant {
        base + Duration::from_millis(ms)
    }

    #[test]
    fn test_navigate_last_wins() {
        let mut nav = NavState::default();
        assert_eq!(nav.current(), Screen::Home);

        for target in [
            Screen::Models,
            Screen::History,
            Screen::AudioResults,
            Screen::Home,
            Screen::VideoResults,
        ] {
            nav.navigate(target);
            assert_eq!(nav.current(), target);
        }
    }

    #[test]
    fn test_navigate_idempotent() {
        let mut nav = NavState::default();
        nav.set_model("advanced");
        nav.navigate(Screen::Home);
        let once = nav.clone();
        nav.navigate(Screen::Home);
        assert_eq!(nav.current(), once.current());
        assert_eq!(nav.selected_model(), once.selected_model());
        assert_eq!(nav.is_recording(), once.is_recording());
    }

    #[test]
    fn test_model_selection_survives_navigation() {
        let mut nav = NavState::default();
        nav.navigate(Screen::Models);
        nav.set_model("advanced");
        nav.navigate(Screen::Home);
        assert_eq!(nav.selected_model(), "advanced");
    }

    #[test]
    fn test_initial_state() {
        let nav = NavState::default();
        assert_eq!(nav.current(), Screen::Home);
        assert_eq!(nav.selected_model(), "standard");
        assert!(!nav.is_recording());
    }

    #[test]
    fn test_session_starts_at_zero() {
        let now = Instant::now();
        let mut session = SessionController::new();
        assert!(!session.is_recording());
        assert_eq!(session.elapsed_seconds(), 0);

        session.start(RecordingMode::Audio, now);
        assert!(session.is_recording());
        assert_eq!(session.elapsed_seconds(), 0);
        assert_eq!(session.mode(), Some(RecordingMode::Audio));
    }

    #[test]
    fn test_session_ticks_once_per_second() {
        let now = Instant::now();
        let mut session = SessionController::new();
        session.start(RecordingMode::Audio, now);

        assert!(!session.poll(at(now, 999)));
        assert_eq!(session.elapsed_seconds(), 0);

        assert!(session.poll(at(now, 1000)));
        assert_eq!(session.elapsed_seconds(), 1);

        // a stalled frame catches up by whole seconds only
        assert!(session.poll(at(now, 3500)));
        assert_eq!(session.elapsed_seconds(), 3);
    }

    #[test]
    fn test_session_restart_resets_elapsed() {
        let now = Instant::now();
        let mut session = SessionController::new();
        session.start(RecordingMode::Audio, now);
        session.poll(at(now, 5000));
        assert_eq!(session.elapsed_seconds(), 5);

        assert_eq!(session.stop(), Some(RecordingMode::Audio));
        assert_eq!(session.elapsed_seconds(), 0);

        session.start(RecordingMode::Video, at(now, 6000));
        assert_eq!(session.elapsed_seconds(), 0);
        assert_eq!(session.mode(), Some(RecordingMode::Video));
    }

    #[test]
    fn test_cancel_stops_ticking() {
        let now = Instant::now();
        let mut session = SessionController::new();
        session.start(RecordingMode::Video, now);
        session.cancel();

        assert!(!session.is_recording());
        assert!(!session.poll(at(now, 10_000)));
        assert_eq!(session.elapsed_seconds(), 0);
    }

    #[test]
    fn test_stop_when_idle_is_noop() {
        let mut session = SessionController::new();
        assert_eq!(session.stop(), None);
        session.cancel();
        assert!(!session.is_recording());
    }

    #[test]
    fn test_completion_routes_by_mode() {
        for (mode, expected) in [
            (RecordingMode::Audio, Screen::AudioResults),
            (RecordingMode::Video, Screen::VideoResults),
        ] {
            let now = Instant::now();
            let mut nav = NavState::default();
            let mut session = SessionController::new();

            session.start(mode, now);
            nav.set_recording(true);

            assert_eq!(complete_session(&mut session, &mut nav), Some(expected));
            assert_eq!(nav.current(), expected);
            assert!(!nav.is_recording());
            assert!(!session.is_recording());
        }
    }

    #[test]
    fn test_completion_without_session() {
        let mut nav = NavState::default();
        let mut session = SessionController::new();
        assert_eq!(complete_session(&mut session, &mut nav), None);
        assert_eq!(nav.current(), Screen::Home);
    }

    #[test]
    fn test_three_tick_scenario() {
        // start audio recording, wait 3 ticks, stop: elapsed == 3, then
        // the audio results screen is current and the flag is cleared
        let now = Instant::now();
        let mut nav = NavState::default();
        let mut session = SessionController::new();

        session.start(RecordingMode::Audio, now);
        nav.set_recording(true);
        for ms in [1000, 2000, 3000] {
            session.poll(at(now, ms));
        }
        assert_eq!(session.elapsed_seconds(), 3);

        complete_session(&mut session, &mut nav);
        assert_eq!(nav.current(), Screen::AudioResults);
        assert!(!nav.is_recording());
    }

    #[test]
    fn test_results_screen_mapping() {
        assert_eq!(RecordingMode::Audio.results_screen(), Screen::AudioResults);
        assert_eq!(RecordingMode::Video.results_screen(), Screen::VideoResults);
        assert!(Screen::AudioResults.is_results());
        assert!(Screen::VideoResults.is_results());
        assert!(!Screen::Home.is_results());
    }

    #[test]
    fn test_screen_names_roundtrip_toml() {
        #[derive(Deserialize)]
        struct Wrapper {
            screen: Screen,
            mode: RecordingMode,
        }
        let w: Wrapper =
            toml::from_str("screen = \"audio-results\"\nmode = \"video\"").unwrap();
        assert_eq!(w.screen, Screen::AudioResults);
        assert_eq!(w.mode, RecordingMode::Video);
        assert_eq!(w.screen.to_string(), "audio-results");
    }

    #[test]
    fn test_format_clock() {
        assert_eq!(format_clock(0), "00:00");
        assert_eq!(format_clock(5), "00:05");
        assert_eq!(format_clock(65), "01:05");
        assert_eq!(format_clock(600), "10:00");
    }
}
