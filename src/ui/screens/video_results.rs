//! Video analysis results screen
//!
//! Hero verdict with animated confidence, a player placeholder with an
//! optional manipulation heatmap overlay, metric bars and technical
//! details. All figures come from the mock provider.

use super::{results, ScreenContext};
use crate::anim::ResultPresenter;
use egui::{Color32, Pos2, Rect, RichText, Sense, Stroke, Vec2};
use std::time::Instant;

pub struct VideoResultsScreen<'a> {
    ctx: ScreenContext<'a>,
    presenter: &'a mut ResultPresenter,
    now: Instant,
}

impl<'a> VideoResultsScreen<'a> {
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
            self.draw_player(ui);
            ui.add_space(theme.spacing_sm);
            self.heatmap_toggle(ui);
            ui.add_space(theme.spacing_sm);
            results::playback_controls(ui, &self.ctx, self.presenter, self.now);
        });

        ui.add_space(theme.spacing);
        results::metrics_card(ui, &self.ctx, self.presenter);

        ui.add_space(theme.spacing);
        results::tech_card(ui, &self.ctx, self.presenter);
    }

    /// 16:9 player placeholder; clicking it toggles playback
    fn draw_player(&mut self, ui: &mut egui::Ui) {
        let theme = self.ctx.theme;
        let width = ui.available_width();
        let height = width * 9.0 / 16.0;
        let (rect, response) =
            ui.allocate_exact_size(Vec2::new(width, height), Sense::click());

        if ui.is_rect_visible(rect) {
            let painter = ui.painter();
            painter.rect_filled(rect, theme.card_rounding, Color32::BLACK);

            if self.presenter.show_heatmap {
                draw_heatmap_overlay(painter, rect);
            }

            let center = rect.center();
            painter.circle_filled(center, 26.0, Color32::from_white_alpha(40));
            if self.presenter.playback.is_playing() {
                // pause bars
                for dx in [-6.0, 6.0] {
                    painter.rect_filled(
                        Rect::from_center_size(
                            Pos2::new(center.x + dx, center.y),
                            Vec2::new(6.0, 20.0),
                        ),
                        1.0,
                        Color32::WHITE,
                    );
                }
            } else {
                // play triangle
                let triangle = vec![
                    Pos2::new(center.x - 7.0, center.y - 11.0),
                    Pos2::new(center.x + 12.0, center.y),
                    Pos2::new(center.x - 7.0, center.y + 11.0),
                ];
                painter.add(egui::Shape::convex_polygon(
                    triangle,
                    Color32::WHITE,
                    Stroke::NONE,
                ));
            }
        }

        if response.clicked() {
            self.presenter.playback.toggle(self.now);
        }
    }

    fn heatmap_toggle(&mut self, ui: &mut egui::Ui) {
        let selected = self.presenter.show_heatmap;
        let response = ui
            .selectable_label(selected, RichText::new("Heatmap").size(13.0))
            .on_hover_text("Highlight manipulated regions");
        if response.clicked() {
            self.presenter.show_heatmap = !selected;
        }
    }
}

/// Translucent manipulation-intensity wash over the frame
fn draw_heatmap_overlay(painter: &egui::Painter, rect: Rect) {
    let colors = [
        Color32::from_rgba_unmultiplied(239, 68, 68, 70),
        Color32::from_rgba_unmultiplied(234, 179, 8, 70),
        Color32::from_rgba_unmultiplied(34, 197, 94, 70),
    ];
    let band_width = rect.width() / colors.len() as f32;
    for (i, color) in colors.iter().enumerate() {
        let band = Rect::from_min_size(
            Pos2::new(rect.left() + i as f32 * band_width, rect.top()),
            Vec2::new(band_width, rect.height()),
        );
        painter.rect_filled(band, 0.0, *color);
    }
}
