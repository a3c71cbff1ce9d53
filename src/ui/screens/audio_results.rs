//! Audio analysis results screen
//!
//! Hero verdict with animated confidence, a static playback waveform with
//! a highlighted suspicious span, metric bars, a frequency sketch and
//! technical details. All figures come from the mock provider.

use super::{results, ScreenContext};
use crate::anim::ResultPresenter;
use egui::{Pos2, Rect, RichText, Sense, Vec2};
use std::time::Instant;

/// Bars in the static playback waveform
const PLAYBACK_BARS: usize = 100;
/// Span of bars flagged as suspicious by the mock analysis
const SUSPICIOUS_SPAN: std::ops::Range<usize> = 40..60;

pub struct AudioResultsScreen<'a> {
    ctx: ScreenContext<'a>,
    presenter: &'a mut ResultPresenter,
    now: Instant,
}

impl<'a> AudioResultsScreen<'a> {
    pub fn new(ctx: ScreenContext<'a>, presenter: &'a mut ResultPresenter, now: Instant) -> Self {
        Self {
            ctx,
            presenter,
            now,
        }
    }

    pub fn show(mut self, ui: &mut egui::Ui) {
        let theme = self.ctx.theme;

        results::header(ui, &self.ctx, self.presenter);
        ui.add_space(theme.spacing);

        results::hero_card(ui, &self.ctx, self.presenter);
        ui.add_space(theme.spacing);

        self.ctx.card().show(ui, |ui| {
            self.draw_playback_waveform(ui);
            ui.add_space(theme.spacing_sm);
            results::playback_controls(ui, &self.ctx, self.presenter, self.now);
        });

        ui.add_space(theme.spacing);
        results::metrics_card(ui, &self.ctx, self.presenter);

        ui.add_space(theme.spacing);
        self.frequency_card(ui);

        ui.add_space(theme.spacing);
        results::tech_card(ui, &self.ctx, self.presenter);
    }

    /// Static waveform strip with played portion and suspicious span
    fn draw_playback_waveform(&self, ui: &mut egui::Ui) {
        let theme = self.ctx.theme;
        let height = 96.0;
        let (rect, _response) =
            ui.allocate_exact_size(Vec2::new(ui.available_width(), height), Sense::hover());
        if !ui.is_rect_visible(rect) {
            return;
        }

        let painter = ui.painter();
        painter.rect_filled(rect, theme.card_rounding, theme.bg_primary);

        let inner = rect.shrink(8.0);
        let progress = self.presenter.playback.progress();
        let played_bars = (progress * PLAYBACK_BARS as f32) as usize;
        let bar_width = inner.width() / PLAYBACK_BARS as f32;

        for i in 0..PLAYBACK_BARS {
            let amplitude = playback_amplitude(i);
            let bar_height = (amplitude / 100.0 * inner.height()).max(4.0);
            let x = inner.left() + i as f32 * bar_width;

            let color = if SUSPICIOUS_SPAN.contains(&i) {
                theme.suspicious
            } else if i < played_bars {
                theme.waveform_active
            } else {
                theme.waveform_inactive
            };

            let bar = Rect::from_min_size(
                Pos2::new(x, inner.bottom() - bar_height),
                Vec2::new((bar_width - 1.0).max(1.0), bar_height),
            );
            painter.rect_filled(bar, 1.0, color);
        }

        // playhead
        let playhead_x = inner.left() + progress * inner.width();
        painter.line_segment(
            [
                Pos2::new(playhead_x, rect.top()),
                Pos2::new(playhead_x, rect.bottom()),
            ],
            egui::Stroke::new(2.0, theme.primary),
        );
    }

    /// Decorative frequency-analysis sketch
    fn frequency_card(&self, ui: &mut egui::Ui) {
        let theme = self.ctx.theme;
        self.ctx.card().show(ui, |ui| {
            ui.label(
                RichText::new("Frequency Analysis")
                    .size(16.0)
                    .strong()
                    .color(theme.text_primary),
            );
            ui.add_space(theme.spacing_sm);

            let height = 96.0;
            let (rect, _response) =
                ui.allocate_exact_size(Vec2::new(ui.available_width(), height), Sense::hover());
            if !ui.is_rect_visible(rect) {
                return;
            }

            let painter = ui.painter();
            painter.rect_filled(rect, theme.card_rounding, theme.bg_primary);

            let inner = rect.shrink(8.0);
            let bands = 50;
            let band_width = inner.width() / bands as f32;
            for i in 0..bands {
                let level = ((i as f32 * 0.2).sin() * 0.4 + 0.5).max(0.1);
                let band_height = level * inner.height();
                let x = inner.left() + i as f32 * band_width;
                let band = Rect::from_min_size(
                    Pos2::new(x, inner.bottom() - band_height),
                    Vec2::new((band_width - 1.5).max(1.0), band_height),
                );
                painter.rect_filled(band, 1.0, theme.primary.gamma_multiply(0.9));
            }
        });
    }
}

/// Fixed pseudo-random amplitude for a playback bar, 0-100
fn playback_amplitude(index: usize) -> f32 {
    let i = index as f32;
    let wave = (i * 0.1).sin() * 50.0;
    // shader-style hash keeps the jitter stable across frames
    let jitter = ((i * 12.9898).sin() * 43758.5453).fract().abs() * 30.0;
    (wave + jitter).abs().clamp(4.0, 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_playback_amplitude_stable_and_bounded() {
        for i in 0..PLAYBACK_BARS {
            let a = playback_amplitude(i);
            let b = playback_amplitude(i);
            assert_eq!(a, b, "amplitude must not change between frames");
            assert!((4.0..=100.0).contains(&a));
        }
    }

    #[test]
    fn test_suspicious_span_inside_strip() {
        assert!(SUSPICIOUS_SPAN.end <= PLAYBACK_BARS);
    }
}
