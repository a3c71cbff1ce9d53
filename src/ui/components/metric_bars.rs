//! Analysis metric rows
//!
//! Labeled percentage bars for the "Detailed Analysis" card. The fill
//! color grades each metric against the overall verdict.

use crate::detect::{Metric, Verdict};
use crate::ui::theme::Theme;
use egui::{Pos2, Rect, RichText, Sense, Vec2};

/// Rows of labeled metric bars
pub struct MetricRows<'a> {
    metrics: &'a [Metric],
    verdict: Verdict,
    theme: &'a Theme,
}

impl<'a> MetricRows<'a> {
    pub fn new(metrics: &'a [Metric], verdict: Verdict, theme: &'a Theme) -> Self {
        Self {
            metrics,
            verdict,
            theme,
        }
    }

    pub fn show(self, ui: &mut egui::Ui) {
        for metric in self.metrics {
            ui.horizontal(|ui| {
                ui.label(
                    RichText::new(metric.label)
                        .size(13.0)
                        .color(self.theme.text_secondary),
                );
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(
                        RichText::new(format!("{}%", metric.value))
                            .size(13.0)
                            .strong()
                            .color(self.theme.text_primary),
                    );
                });
            });

            self.draw_bar(ui, metric);
            ui.add_space(self.theme.spacing_sm);
        }
    }

    fn draw_bar(&self, ui: &mut egui::Ui, metric: &Metric) {
        let height = 8.0;
        let (rect, _response) =
            ui.allocate_exact_size(Vec2::new(ui.available_width(), height), Sense::hover());
        if !ui.is_rect_visible(rect) {
            return;
        }

        let painter = ui.painter();
        painter.rect_filled(rect, height / 2.0, self.theme.bg_tertiary);

        let fill_width = rect.width() * (metric.value.min(100) as f32 / 100.0);
        if fill_width > 0.0 {
            let fill = Rect::from_min_size(
                Pos2::new(rect.left(), rect.top()),
                Vec2::new(fill_width.max(height), height),
            );
            painter.rect_filled(
                fill,
                height / 2.0,
                self.theme.metric_color(metric.severity, self.verdict),
            );
        }
    }
}
