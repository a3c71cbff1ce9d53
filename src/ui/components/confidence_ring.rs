//! Circular confidence gauge
//!
//! Draws the animated confidence percentage as an arc starting at twelve
//! o'clock, with the current value centered inside.

use crate::ui::theme::Theme;
use egui::epaint::PathShape;
use egui::{Align2, Color32, FontId, Pos2, Sense, Stroke, Vec2};

/// Ring gauge for a 0-100 confidence value
pub struct ConfidenceRing<'a> {
    theme: &'a Theme,
    value: u8,
    color: Color32,
    diameter: f32,
}

impl<'a> ConfidenceRing<'a> {
    pub fn new(theme: &'a Theme, value: u8, color: Color32) -> Self {
        Self {
            theme,
            value: value.min(100),
            color,
            diameter: 128.0,
        }
    }

    pub fn diameter(mut self, diameter: f32) -> Self {
        self.diameter = diameter;
        self
    }

    /// Show the ring and return the response
    pub fn show(self, ui: &mut egui::Ui) -> egui::Response {
        let (rect, response) =
            ui.allocate_exact_size(Vec2::splat(self.diameter), Sense::hover());

        if !ui.is_rect_visible(rect) {
            return response;
        }

        let painter = ui.painter();
        let center = rect.center();
        let radius = self.diameter / 2.0 - 4.0;
        let stroke_width = 6.0;

        painter.circle_stroke(
            center,
            radius,
            Stroke::new(stroke_width, self.theme.bg_tertiary),
        );

        if self.value > 0 {
            let sweep = std::f32::consts::TAU * (self.value as f32 / 100.0);
            let points = arc_points(center, radius, sweep);
            painter.add(PathShape::line(
                points,
                Stroke::new(stroke_width, self.color),
            ));
        }

        painter.text(
            center,
            Align2::CENTER_CENTER,
            format!("{}%", self.value),
            FontId::proportional(26.0),
            self.color,
        );

        response
    }
}

/// Points along an arc from twelve o'clock, clockwise through `sweep`
fn arc_points(center: Pos2, radius: f32, sweep: f32) -> Vec<Pos2> {
    let segments = ((sweep / std::f32::consts::TAU) * 72.0).ceil().max(1.0) as usize;
    (0..=segments)
        .map(|i| {
            let angle = -std::f32::consts::FRAC_PI_2 + sweep * (i as f32 / segments as f32);
            Pos2::new(
                center.x + radius * angle.cos(),
                center.y + radius * angle.sin(),
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arc_points_span_sweep() {
        let center = Pos2::new(0.0, 0.0);
        let points = arc_points(center, 10.0, std::f32::consts::TAU);
        assert!(points.len() > 36);

        // starts at twelve o'clock
        let first = points[0];
        assert!((first.x - 0.0).abs() < 0.01);
        assert!((first.y + 10.0).abs() < 0.01);

        // full sweep returns to the start
        let last = *points.last().unwrap();
        assert!((last.x - first.x).abs() < 0.01);
        assert!((last.y - first.y).abs() < 0.01);
    }

    #[test]
    fn test_arc_points_quarter_sweep() {
        let center = Pos2::new(0.0, 0.0);
        let points = arc_points(center, 10.0, std::f32::consts::FRAC_PI_2);
        // quarter turn clockwise from the top ends at three o'clock
        let last = *points.last().unwrap();
        assert!((last.x - 10.0).abs() < 0.01);
        assert!(last.y.abs() < 0.01);
    }
}
