//! Per-screen transient UI state
//!
//! Toggles and filters that belong to a single screen. They are reset
//! whenever their screen is entered, so nothing leaks between visits;
//! durable cross-screen state lives in [`crate::state::NavState`].

use crate::state::{RecordingMode, Screen};

/// History list filter chips
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum HistoryFilter {
    #[default]
    All,
    Audio,
    Video,
}

impl HistoryFilter {
    pub fn label(&self) -> &'static str {
        match self {
            HistoryFilter::All => "All",
            HistoryFilter::Audio => "Audio",
            HistoryFilter::Video => "Video",
        }
    }

    /// Whether an entry of the given media type passes this filter
    pub fn accepts(&self, media: RecordingMode) -> bool {
        match self {
            HistoryFilter::All => true,
            HistoryFilter::Audio => media == RecordingMode::Audio,
            HistoryFilter::Video => media == RecordingMode::Video,
        }
    }
}

/// Transient state owned by individual screens
#[derive(Clone, Copy, Debug, Default)]
pub struct ScreenLocals {
    /// Home: capture mode toggle
    pub recording_mode: RecordingMode,
    /// Models: category tab
    pub model_category: RecordingMode,
    /// History: filter chip
    pub history_filter: HistoryFilter,
}

impl ScreenLocals {
    /// Reset the state owned by the screen being entered
    pub fn reset_for(&mut self, entering: Screen) {
        match entering {
            Screen::Home => self.recording_mode = RecordingMode::default(),
            Screen::Models => self.model_category = RecordingMode::default(),
            Screen::History => self.history_filter = HistoryFilter::default(),
            Screen::VideoResults | Screen::AudioResults => {}
        }
    }
}
