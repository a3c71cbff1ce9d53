//! Reusable UI components

pub mod confidence_ring;
pub mod metric_bars;
pub mod nav_bar;
pub mod record_button;
pub mod waveform;

pub use confidence_ring::ConfidenceRing;
pub use metric_bars::MetricRows;
pub use nav_bar::NavBar;
pub use record_button::RecordButton;
pub use waveform::LiveWaveform;
