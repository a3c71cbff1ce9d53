//! DeepGuard - deepfake-detection app shell
//!
//! A mobile-style UI for recording or reviewing media and presenting
//! deepfake-analysis verdicts. Capture, inference and persistence are
//! explicit mock boundaries: every result comes from a swappable
//! [`detect::DetectionProvider`], and the screens only animate what that
//! provider hands them.

pub mod anim;
pub mod config;
pub mod detect;
pub mod error;
pub mod state;
pub mod testconfig;
pub mod ui;

// Re-export error types
pub use error::{GuardError, Result};

// Re-export core controller types
pub use state::{
    AppRequest, NavState, RecordingMode, Screen, SessionController,
};

// Re-export the detection boundary
pub use detect::{AnalysisResult, DetectionProvider, StaticProvider, Verdict};
