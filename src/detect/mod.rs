//! Detection-provider boundary
//!
//! The UI only ever talks to [`DetectionProvider`]. The shipped
//! implementation, [`StaticProvider`], returns compile-time constants; a
//! real detection service would implement the same trait against an
//! inference backend, making the swap a drop-in replacement.

use crate::state::RecordingMode;
use tracing::debug;

/// Outcome of an analysis
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Verdict {
    Authentic,
    Fake,
}

impl Verdict {
    pub fn label(&self) -> &'static str {
        match self {
            Verdict::Authentic => "Real",
            Verdict::Fake => "Fake",
        }
    }
}

/// How strongly a metric contributes to the verdict
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Severity {
    Low,
    Medium,
    High,
}

/// A single named analysis metric, 0-100
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Metric {
    pub label: &'static str,
    pub value: u8,
    pub severity: Severity,
}

/// Terminal result of analyzing one recording
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AnalysisResult {
    pub mode: RecordingMode,
    pub verdict: Verdict,
    /// Confidence percentage the results screen counts up to
    pub confidence_target: u8,
    pub duration_seconds: u32,
    pub filename: &'static str,
    pub metrics: &'static [Metric],
    /// Technical info rows shown verbatim
    pub details: &'static [(&'static str, &'static str)],
}

impl AnalysisResult {
    /// Hero headline for the results screen
    pub fn headline(&self) -> &'static str {
        match (self.verdict, self.mode) {
            (Verdict::Fake, _) => "DEEPFAKE DETECTED",
            (Verdict::Authentic, RecordingMode::Audio) => "AUTHENTIC AUDIO",
            (Verdict::Authentic, RecordingMode::Video) => "AUTHENTIC VIDEO",
        }
    }
}

/// Relative inference cost of a model
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ModelSpeed {
    Fast,
    Medium,
    Slow,
}

impl ModelSpeed {
    pub fn label(&self) -> &'static str {
        match self {
            ModelSpeed::Fast => "Fast",
            ModelSpeed::Medium => "Medium",
            ModelSpeed::Slow => "Slow",
        }
    }
}

/// A selectable detection model
#[derive(Clone, Copy, Debug)]
pub struct DetectionModel {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub accuracy: u8,
    pub speed: ModelSpeed,
    pub category: RecordingMode,
    pub features: &'static [&'static str],
}

/// Processing state of a history entry
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EntryStatus {
    Completed,
    Processing,
    Failed,
}

impl EntryStatus {
    pub fn label(&self) -> &'static str {
        match self {
            EntryStatus::Completed => "Completed",
            EntryStatus::Processing => "Processing",
            EntryStatus::Failed => "Failed",
        }
    }
}

/// One past recording in the history list
#[derive(Clone, Copy, Debug)]
pub struct RecordingEntry {
    pub id: &'static str,
    pub name: &'static str,
    pub media: RecordingMode,
    pub date: &'static str,
    pub time: &'static str,
    pub duration: &'static str,
    pub status: EntryStatus,
    /// Verdict and confidence, present once analysis completed
    pub outcome: Option<(Verdict, u8)>,
}

/// Source of analysis results, model catalog and recording history
pub trait DetectionProvider {
    /// Result for a completed capture. A real implementation would take
    /// the captured media; the mock keys off the mode alone.
    fn analyze(&self, mode: RecordingMode, model_id: &str) -> AnalysisResult;

    /// Available detection models
    fn models(&self) -> &[DetectionModel];

    /// Past recordings, newest first
    fn history(&self) -> &[RecordingEntry];
}

const AUDIO_RESULT: AnalysisResult = AnalysisResult {
    mode: RecordingMode::Audio,
    verdict: Verdict::Authentic,
    confidence_target: 94,
    duration_seconds: 32,
    filename: "Voice_Message.wav",
    metrics: &[
        Metric { label: "Voice Synthesis", value: 8, severity: Severity::Low },
        Metric { label: "Spectral Analysis", value: 12, severity: Severity::Low },
        Metric { label: "Temporal Consistency", value: 95, severity: Severity::High },
        Metric { label: "Emotion Coherence", value: 89, severity: Severity::High },
    ],
    details: &[
        ("Analysis Time", "0.8s"),
        ("Sample Rate", "44.1 kHz"),
        ("Bitrate", "320 kbps"),
    ],
};

const VIDEO_RESULT: AnalysisResult = AnalysisResult {
    mode: RecordingMode::Video,
    verdict: Verdict::Fake,
    confidence_target: 87,
    duration_seconds: 165,
    filename: "Interview_Recording.mp4",
    metrics: &[
        Metric { label: "Face Manipulation", value: 92, severity: Severity::High },
        Metric { label: "Temporal Consistency", value: 15, severity: Severity::Low },
        Metric { label: "Lighting Analysis", value: 78, severity: Severity::Medium },
        Metric { label: "Expression Coherence", value: 23, severity: Severity::Low },
    ],
    details: &[
        ("Analysis Time", "2.4s"),
        ("Frame Count", "4,950"),
        ("Resolution", "1920x1080"),
    ],
};

const MODELS: &[DetectionModel] = &[
    DetectionModel {
        id: "standard",
        name: "Standard Audio Detection",
        description: "Fast and reliable detection for most audio deepfakes",
        accuracy: 94,
        speed: ModelSpeed::Fast,
        category: RecordingMode::Audio,
        features: &[
            "Real-time processing",
            "Voice synthesis detection",
            "Audio artifacts analysis",
        ],
    },
    DetectionModel {
        id: "advanced",
        name: "Advanced Audio Detection",
        description: "State-of-the-art model with highest accuracy",
        accuracy: 98,
        speed: ModelSpeed::Medium,
        category: RecordingMode::Audio,
        features: &[
            "Deep spectral analysis",
            "Emotion consistency check",
            "Multi-language support",
        ],
    },
    DetectionModel {
        id: "standard-video",
        name: "Standard Video Detection",
        description: "Efficient face swap and manipulation detection",
        accuracy: 92,
        speed: ModelSpeed::Medium,
        category: RecordingMode::Video,
        features: &[
            "Face manipulation detection",
            "Temporal consistency",
            "Expression analysis",
        ],
    },
    DetectionModel {
        id: "advanced-video",
        name: "Advanced Video Detection",
        description: "Comprehensive analysis with frame-by-frame inspection",
        accuracy: 96,
        speed: ModelSpeed::Slow,
        category: RecordingMode::Video,
        features: &[
            "Frame-by-frame analysis",
            "Lighting consistency",
            "Micro-expression detection",
        ],
    },
];

const HISTORY: &[RecordingEntry] = &[
    RecordingEntry {
        id: "1",
        name: "Interview_Recording.mp4",
        media: RecordingMode::Video,
        date: "2024-12-20",
        time: "14:30",
        duration: "2:45",
        status: EntryStatus::Completed,
        outcome: Some((Verdict::Fake, 87)),
    },
    RecordingEntry {
        id: "2",
        name: "Voice_Message.wav",
        media: RecordingMode::Audio,
        date: "2024-12-20",
        time: "12:15",
        duration: "0:32",
        status: EntryStatus::Completed,
        outcome: Some((Verdict::Authentic, 94)),
    },
    RecordingEntry {
        id: "3",
        name: "Conference_Call.mp4",
        media: RecordingMode::Video,
        date: "2024-12-19",
        time: "16:45",
        duration: "15:20",
        status: EntryStatus::Processing,
        outcome: None,
    },
    RecordingEntry {
        id: "4",
        name: "Podcast_Segment.mp3",
        media: RecordingMode::Audio,
        date: "2024-12-19",
        time: "11:30",
        duration: "5:12",
        status: EntryStatus::Failed,
        outcome: None,
    },
];

/// Compile-time-constant provider used by the mock application
#[derive(Clone, Copy, Debug, Default)]
pub struct StaticProvider;

impl StaticProvider {
    pub fn new() -> Self {
        Self
    }
}

impl DetectionProvider for StaticProvider {
    fn analyze(&self, mode: RecordingMode, model_id: &str) -> AnalysisResult {
        debug!("Analysis requested: mode={} model={}", mode, model_id);
        match mode {
            RecordingMode::Audio => AUDIO_RESULT.clone(),
            RecordingMode::Video => VIDEO_RESULT.clone(),
        }
    }

    fn models(&self) -> &[DetectionModel] {
        MODELS
    }

    fn history(&self) -> &[RecordingEntry] {
        HISTORY
    }
}
