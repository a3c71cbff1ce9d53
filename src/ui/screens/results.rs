//! Shared building blocks of the two results screens

use super::{format_duration, ScreenContext};
use crate::anim::ResultPresenter;
use crate::state::Screen;
use crate::ui::components::{ConfidenceRing, MetricRows};
use egui::{ProgressBar, RichText, Stroke};
use std::time::Instant;

pub(super) fn header(ui: &mut egui::Ui, ctx: &ScreenContext<'_>, presenter: &ResultPresenter) {
    ctx.header(
        ui,
        Screen::History,
        "Analysis Results",
        presenter.result().filename,
    );
}

/// Verdict headline with the animated confidence ring
pub(super) fn hero_card(ui: &mut egui::Ui, ctx: &ScreenContext<'_>, presenter: &ResultPresenter) {
    let theme = ctx.theme;
    let result = presenter.result();
    let color = theme.verdict_color(result.verdict);

    egui::Frame::none()
        .fill(color.gamma_multiply(0.12))
        .stroke(Stroke::new(2.0, color.gamma_multiply(0.5)))
        .rounding(theme.card_rounding)
        .inner_margin(egui::Margin::same(theme.spacing))
        .show(ui, |ui| {
            ui.vertical_centered(|ui| {
                ui.label(
                    RichText::new(result.headline())
                        .size(24.0)
                        .strong()
                        .color(color),
                );
                ui.add_space(theme.spacing_sm);
                ConfidenceRing::new(theme, presenter.confidence().displayed(), color).show(ui);
                ui.label(
                    RichText::new("Confidence Level")
                        .size(12.0)
                        .color(theme.text_muted),
                );
            });
        });
}

/// Position readout, progress bar and transport buttons
pub(super) fn playback_controls(
    ui: &mut egui::Ui,
    ctx: &ScreenContext<'_>,
    presenter: &mut ResultPresenter,
    now: Instant,
) {
    let theme = ctx.theme;
    let duration = presenter.result().duration_seconds;

    ui.horizontal(|ui| {
        ui.label(
            RichText::new(format_duration(presenter.playback.position_secs() as u32))
                .size(12.0)
                .color(theme.text_muted),
        );
        let bar_width = ui.available_width() - 48.0;
        ui.add_sized(
            [bar_width.max(40.0), 8.0],
            ProgressBar::new(presenter.playback.progress()).fill(theme.primary),
        );
        ui.label(
            RichText::new(format_duration(duration))
                .size(12.0)
                .color(theme.text_muted),
        );
    });

    ui.add_space(theme.spacing_sm);
    ui.horizontal(|ui| {
        let label = if presenter.playback.is_playing() {
            "Pause"
        } else {
            "Play"
        };
        if ui.button(RichText::new(label).strong()).clicked() {
            presenter.playback.toggle(now);
        }

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.add_enabled(false, egui::Button::new("Export"))
                .on_disabled_hover_text("Unavailable in the preview build");
            ui.add_enabled(false, egui::Button::new("Share"))
                .on_disabled_hover_text("Unavailable in the preview build");
        });
    });
}

pub(super) fn metrics_card(
    ui: &mut egui::Ui,
    ctx: &ScreenContext<'_>,
    presenter: &ResultPresenter,
) {
    let theme = ctx.theme;
    let result = presenter.result();

    ctx.card().show(ui, |ui| {
        ui.label(
            RichText::new("Detailed Analysis")
                .size(16.0)
                .strong()
                .color(theme.text_primary),
        );
        ui.add_space(theme.spacing_sm);
        MetricRows::new(result.metrics, result.verdict, theme).show(ui);
    });
}

pub(super) fn tech_card(ui: &mut egui::Ui, ctx: &ScreenContext<'_>, presenter: &ResultPresenter) {
    let theme = ctx.theme;
    let result = presenter.result();

    ctx.card().show(ui, |ui| {
        ui.label(
            RichText::new("Technical Information")
                .size(16.0)
                .strong()
                .color(theme.text_primary),
        );
        ui.add_space(theme.spacing_sm);

        egui::Grid::new("tech_info")
            .num_columns(2)
            .spacing([theme.spacing_lg, theme.spacing_sm])
            .show(ui, |ui| {
                let duration = format_duration(result.duration_seconds);
                let rows = result
                    .details
                    .iter()
                    .map(|(label, value)| (*label, value.to_string()))
                    .chain(std::iter::once(("Duration", duration)));

                for (i, (label, value)) in rows.enumerate() {
                    ui.vertical(|ui| {
                        ui.label(
                            RichText::new(label).size(11.0).color(theme.text_muted),
                        );
                        ui.label(
                            RichText::new(value)
                                .size(13.0)
                                .strong()
                                .color(theme.text_primary),
                        );
                    });
                    if i % 2 == 1 {
                        ui.end_row();
                    }
                }
            });
    });
}
