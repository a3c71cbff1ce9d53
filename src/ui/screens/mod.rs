//! Screen views
//!
//! Five presentational screens rendering controller state plus their mock
//! payloads. Screens own no durable state; every mutation is raised as an
//! [`AppRequest`] through the shared [`ScreenContext`].

pub mod audio_results;
pub mod history;
pub mod home;
pub mod models;
mod results;
pub mod video_results;

pub use audio_results::AudioResultsScreen;
pub use history::HistoryScreen;
pub use home::HomeScreen;
pub use models::ModelsScreen;
pub use video_results::VideoResultsScreen;

use crate::detect::DetectionProvider;
use crate::state::{AppRequest, NavState, Screen};
use crate::ui::theme::Theme;
use crossbeam_channel::Sender;
use egui::RichText;

/// Shared context handed to every screen view
pub struct ScreenContext<'a> {
    pub theme: &'a Theme,
    pub nav: &'a NavState,
    pub provider: &'a dyn DetectionProvider,
    pub requests: &'a Sender<AppRequest>,
}

impl ScreenContext<'_> {
    /// Raise a request toward the app shell
    pub fn send(&self, request: AppRequest) {
        let _ = self.requests.send(request);
    }

    /// Card-style rounded panel frame
    pub fn card(&self) -> egui::Frame {
        egui::Frame::none()
            .fill(self.theme.bg_secondary)
            .rounding(self.theme.card_rounding)
            .inner_margin(egui::Margin::same(self.theme.spacing))
    }

    /// Back-arrow header shared by the sub-screens
    pub fn header(&self, ui: &mut egui::Ui, back_to: Screen, title: &str, subtitle: &str) {
        ui.horizontal(|ui| {
            if ui
                .button(RichText::new("\u{2190}").size(18.0))
                .on_hover_text(format!("Back to {}", back_to.title()))
                .clicked()
            {
                self.send(AppRequest::Navigate(back_to));
            }
            ui.vertical(|ui| {
                ui.label(
                    RichText::new(title)
                        .size(20.0)
                        .strong()
                        .color(self.theme.text_primary),
                );
                if !subtitle.is_empty() {
                    ui.label(
                        RichText::new(subtitle)
                            .size(12.0)
                            .color(self.theme.text_secondary),
                    );
                }
            });
        });
    }
}

/// Format seconds as `M:SS` for media durations
pub fn format_duration(total_seconds: u32) -> String {
    format!("{}:{:02}", total_seconds / 60, total_seconds % 60)
}
