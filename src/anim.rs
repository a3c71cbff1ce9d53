//! Timer-driven presentation state
//!
//! Every animated value in the app is advanced by polling an owned,
//! deadline-based [`Ticker`] from the frame loop. Nothing here spawns a
//! thread or registers a callback: the ticker lives inside the state it
//! drives, so dropping that state (leaving a screen, cancelling a session)
//! is all it takes to cancel the timer. This keeps the per-second session
//! tick and the confidence tick fully independent of each other.

use crate::detect::AnalysisResult;
use rand::Rng;
use std::time::{Duration, Instant};

/// Number of bars in the live waveform display
pub const WAVEFORM_BARS: usize = 20;
/// Regeneration interval of the live waveform
pub const WAVEFORM_TICK: Duration = Duration::from_millis(100);
/// Delay before the confidence count-up begins
pub const CONFIDENCE_DELAY: Duration = Duration::from_millis(500);
/// Interval between confidence increments
pub const CONFIDENCE_TICK: Duration = Duration::from_millis(20);

/// Fixed-interval ticker driven by polling
///
/// `poll` returns how many whole periods have come due since the last
/// call, catching up after stalled frames without drifting.
#[derive(Clone, Debug)]
pub struct Ticker {
    period: Duration,
    next: Instant,
}

impl Ticker {
    pub fn new(period: Duration, now: Instant) -> Self {
        Self {
            period,
            next: now + period,
        }
    }

    /// A ticker whose first due time is `delay + period` from now
    pub fn with_initial_delay(delay: Duration, period: Duration, now: Instant) -> Self {
        Self {
            period,
            next: now + delay + period,
        }
    }

    /// Count periods that have come due, advancing the deadline past `now`
    pub fn poll(&mut self, now: Instant) -> u32 {
        let mut ticks = 0;
        while now >= self.next {
            self.next += self.period;
            ticks += 1;
        }
        ticks
    }

    /// Restart the interval from `now`
    pub fn reset(&mut self, now: Instant) {
        self.next = now + self.period;
    }
}

/// Cosmetic live waveform: 20 pseudo-random amplitudes in [0, 100)
///
/// Regenerated wholesale every 100ms while a capture is active, all-zero
/// otherwise. Carries no signal content.
#[derive(Clone, Debug)]
pub struct WaveformSampler {
    bars: [f32; WAVEFORM_BARS],
    ticker: Ticker,
    active: bool,
}

impl WaveformSampler {
    pub fn new(now: Instant) -> Self {
        Self {
            bars: [0.0; WAVEFORM_BARS],
            ticker: Ticker::new(WAVEFORM_TICK, now),
            active: false,
        }
    }

    /// Activate or deactivate the sampler. Deactivating zeroes the bars;
    /// activating restarts the interval (first amplitudes appear one tick
    /// later, as the bars start flat).
    pub fn set_active(&mut self, active: bool, now: Instant) {
        if active == self.active {
            return;
        }
        self.active = active;
        if active {
            self.ticker.reset(now);
        } else {
            self.bars = [0.0; WAVEFORM_BARS];
        }
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Advance the regeneration tick. Returns true if the bars changed.
    pub fn poll(&mut self, now: Instant) -> bool {
        if self.active && self.ticker.poll(now) > 0 {
            self.regenerate();
            true
        } else {
            false
        }
    }

    pub fn bars(&self) -> &[f32; WAVEFORM_BARS] {
        &self.bars
    }

    fn regenerate(&mut self) {
        let mut rng = rand::thread_rng();
        for bar in &mut self.bars {
            *bar = rng.gen_range(0.0..100.0);
        }
    }
}

/// One-shot confidence count-up toward a fixed target
///
/// After a 500ms delay the displayed value gains +1 every 20ms until it
/// equals the target, then freezes for the lifetime of the owning screen.
/// The displayed value never decreases and never exceeds the target.
#[derive(Clone, Debug)]
pub struct ConfidenceAnimator {
    target: u8,
    displayed: u8,
    ticker: Ticker,
}

impl ConfidenceAnimator {
    pub fn new(target: u8, now: Instant) -> Self {
        Self {
            target: target.min(100),
            displayed: 0,
            ticker: Ticker::with_initial_delay(CONFIDENCE_DELAY, CONFIDENCE_TICK, now),
        }
    }

    /// Advance the count-up. Returns true if the displayed value changed.
    pub fn poll(&mut self, now: Instant) -> bool {
        if self.is_complete() {
            return false;
        }
        let due = self.ticker.poll(now);
        let remaining = u32::from(self.target - self.displayed);
        let step = due.min(remaining) as u8;
        self.displayed += step;
        step > 0
    }

    pub fn displayed(&self) -> u8 {
        self.displayed
    }

    pub fn target(&self) -> u8 {
        self.target
    }

    pub fn is_complete(&self) -> bool {
        self.displayed >= self.target
    }
}

/// Simulated media playback position for a result screen
///
/// The position advances in real time while playing and clamps to the
/// recording duration; no media is actually decoded.
#[derive(Clone, Debug)]
pub struct PlaybackState {
    playing: bool,
    position_secs: f32,
    duration_secs: u32,
    last_poll: Instant,
}

impl PlaybackState {
    pub fn new(duration_secs: u32, now: Instant) -> Self {
        Self {
            playing: false,
            position_secs: 0.0,
            duration_secs,
            last_poll: now,
        }
    }

    /// Toggle play/pause. Playing again from the end rewinds to zero.
    pub fn toggle(&mut self, now: Instant) {
        self.playing = !self.playing;
        if self.playing {
            if self.position_secs >= self.duration_secs as f32 {
                self.position_secs = 0.0;
            }
            self.last_poll = now;
        }
    }

    /// Advance the position while playing. Returns true if it moved.
    pub fn poll(&mut self, now: Instant) -> bool {
        let dt = now.saturating_duration_since(self.last_poll);
        self.last_poll = now;
        if !self.playing || dt.is_zero() {
            return false;
        }
        self.position_secs += dt.as_secs_f32();
        if self.position_secs >= self.duration_secs as f32 {
            self.position_secs = self.duration_secs as f32;
            self.playing = false;
        }
        true
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    pub fn position_secs(&self) -> f32 {
        self.position_secs
    }

    /// Playback progress as a fraction in [0, 1]
    pub fn progress(&self) -> f32 {
        if self.duration_secs == 0 {
            return 0.0;
        }
        (self.position_secs / self.duration_secs as f32).clamp(0.0, 1.0)
    }
}

/// Presentation state of an active results screen
///
/// Built fresh each time a results screen is entered, so the confidence
/// count-up always restarts from zero and no playback position leaks
/// across visits.
pub struct ResultPresenter {
    result: AnalysisResult,
    confidence: ConfidenceAnimator,
    pub playback: PlaybackState,
    pub show_heatmap: bool,
}

impl ResultPresenter {
    pub fn new(result: AnalysisResult, now: Instant) -> Self {
        let confidence = ConfidenceAnimator::new(result.confidence_target, now);
        let playback = PlaybackState::new(result.duration_seconds, now);
        Self {
            result,
            confidence,
            playback,
            show_heatmap: false,
        }
    }

    /// Advance all presentation timers. Returns true if anything moved.
    pub fn poll(&mut self, now: Instant) -> bool {
        let confidence_moved = self.confidence.poll(now);
        let playback_moved = self.playback.poll(now);
        confidence_moved || playback_moved
    }

    /// True while any timer still wants frames
    pub fn is_animating(&self) -> bool {
        !self.confidence.is_complete() || self.playback.is_playing()
    }

    pub fn result(&self) -> &AnalysisResult {
        &self.result
    }

    pub fn confidence(&self) -> &ConfidenceAnimator {
        &self.confidence
    }
}
