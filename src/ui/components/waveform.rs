//! Live waveform component
//!
//! Renders the 20 sampler amplitudes as centered vertical bars. The bars
//! are purely cosmetic feedback while a capture is active.

use crate::anim::WaveformSampler;
use crate::ui::theme::Theme;
use egui::{Pos2, Rect, Sense, Vec2};

/// Bar display for the live waveform sampler
pub struct LiveWaveform<'a> {
    bars: &'a [f32],
    theme: &'a Theme,
    active: bool,
    height: f32,
}

impl<'a> LiveWaveform<'a> {
    pub fn new(bars: &'a [f32], theme: &'a Theme) -> Self {
        Self {
            bars,
            theme,
            active: false,
            height: 64.0,
        }
    }

    /// Create from the sampler directly
    pub fn from_sampler(sampler: &'a WaveformSampler, theme: &'a Theme) -> Self {
        Self::new(sampler.bars(), theme).active(sampler.is_active())
    }

    pub fn active(mut self, active: bool) -> Self {
        self.active = active;
        self
    }

    pub fn height(mut self, height: f32) -> Self {
        self.height = height;
        self
    }

    /// Show the waveform and return the response
    pub fn show(self, ui: &mut egui::Ui) -> egui::Response {
        let bar_width = 4.0;
        let bar_gap = 3.0;
        let width = self.bars.len() as f32 * (bar_width + bar_gap);
        let (rect, response) =
            ui.allocate_exact_size(Vec2::new(width, self.height), Sense::hover());

        if ui.is_rect_visible(rect) {
            self.draw_bars(ui, rect, bar_width, bar_gap);
        }

        if self.active {
            ui.ctx().request_repaint();
        }

        response
    }

    fn draw_bars(&self, ui: &egui::Ui, rect: Rect, bar_width: f32, bar_gap: f32) {
        let painter = ui.painter();
        let center_y = rect.center().y;
        let max_half = rect.height() / 2.0;

        let color = if self.active {
            self.theme.waveform_active
        } else {
            self.theme.waveform_inactive.gamma_multiply(0.5)
        };

        for (i, &amplitude) in self.bars.iter().enumerate() {
            let x = rect.left() + i as f32 * (bar_width + bar_gap);
            // amplitude is 0-100; flat bars keep a minimal stub
            let half = ((amplitude / 100.0) * max_half).max(2.0);
            let bar = Rect::from_center_size(
                Pos2::new(x + bar_width / 2.0, center_y),
                Vec2::new(bar_width, half * 2.0),
            );
            painter.rect_filled(bar, bar_width / 2.0, color);
        }
    }
}
