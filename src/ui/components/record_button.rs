//! Record button component
//!
//! The large round capture button on the Home screen. The glyph follows
//! the capture mode (microphone or camera) and becomes a stop square while
//! recording; the caller decides what a click means.

use crate::state::RecordingMode;
use crate::ui::theme::Theme;
use egui::{Color32, Pos2, Rect, Sense, Stroke, Vec2};

/// Round start/stop capture button
pub struct RecordButton<'a> {
    theme: &'a Theme,
    mode: RecordingMode,
    recording: bool,
    diameter: f32,
}

impl<'a> RecordButton<'a> {
    pub fn new(theme: &'a Theme, mode: RecordingMode, recording: bool) -> Self {
        Self {
            theme,
            mode,
            recording,
            diameter: 96.0,
        }
    }

    pub fn diameter(mut self, diameter: f32) -> Self {
        self.diameter = diameter;
        self
    }

    /// Show the button and return its response
    pub fn show(self, ui: &mut egui::Ui) -> egui::Response {
        // leave room for the pulse rings around the button itself
        let side = self.diameter + 24.0;
        let (rect, response) = ui.allocate_exact_size(Vec2::splat(side), Sense::click());

        if ui.is_rect_visible(rect) {
            self.paint(ui, rect.center(), &response);
        }

        if !response.hovered() {
            return response;
        }
        let hint = if self.recording {
            "Tap to stop"
        } else {
            match self.mode {
                RecordingMode::Audio => "Start audio recording",
                RecordingMode::Video => "Start video recording",
            }
        };
        response.on_hover_text(hint)
    }

    fn paint(&self, ui: &egui::Ui, center: Pos2, response: &egui::Response) {
        let painter = ui.painter();
        let radius = self.diameter / 2.0;

        let bg_color = if self.recording {
            self.theme.recording
        } else if response.hovered() {
            self.theme.primary.gamma_multiply(1.2)
        } else {
            self.theme.primary
        };

        painter.circle_filled(center, radius, bg_color);

        // inner frosted disc, like the mockup's translucent core
        painter.circle_filled(center, radius - 8.0, Color32::from_white_alpha(28));

        if response.hovered() && !self.recording {
            painter.circle_stroke(
                center,
                radius + 2.0,
                Stroke::new(2.0, self.theme.primary.gamma_multiply(0.6)),
            );
        }

        if self.recording {
            self.draw_stop_icon(painter, center);
            self.draw_pulse_rings(ui, painter, center, radius);
        } else {
            match self.mode {
                RecordingMode::Audio => self.draw_mic_icon(painter, center),
                RecordingMode::Video => self.draw_camera_icon(painter, center),
            }
        }
    }

    /// Stop square shown while recording
    fn draw_stop_icon(&self, painter: &egui::Painter, center: Pos2) {
        painter.rect_filled(
            Rect::from_center_size(center, Vec2::splat(24.0)),
            3.0,
            Color32::WHITE,
        );
    }

    /// Microphone glyph for audio mode
    fn draw_mic_icon(&self, painter: &egui::Painter, center: Pos2) {
        let color = Color32::WHITE;

        // capsule body
        let body = Rect::from_center_size(
            Pos2::new(center.x, center.y - 4.0),
            Vec2::new(12.0, 20.0),
        );
        painter.rect_filled(body, 6.0, color);

        // cradle arc, approximated with segments
        let arc_center = Pos2::new(center.x, center.y + 2.0);
        let arc_radius = 13.0;
        let segments = 10;
        for i in 0..segments {
            let a0 = std::f32::consts::PI * (i as f32 / segments as f32);
            let a1 = std::f32::consts::PI * ((i + 1) as f32 / segments as f32);
            let p0 = Pos2::new(
                arc_center.x - arc_radius * a0.cos(),
                arc_center.y + arc_radius * a0.sin(),
            );
            let p1 = Pos2::new(
                arc_center.x - arc_radius * a1.cos(),
                arc_center.y + arc_radius * a1.sin(),
            );
            painter.line_segment([p0, p1], Stroke::new(2.5, color));
        }

        // stem and base
        let stem_top = Pos2::new(center.x, arc_center.y + arc_radius);
        let stem_bottom = Pos2::new(center.x, arc_center.y + arc_radius + 6.0);
        painter.line_segment([stem_top, stem_bottom], Stroke::new(2.5, color));
        painter.line_segment(
            [
                Pos2::new(center.x - 8.0, stem_bottom.y),
                Pos2::new(center.x + 8.0, stem_bottom.y),
            ],
            Stroke::new(2.5, color),
        );
    }

    /// Camera glyph for video mode
    fn draw_camera_icon(&self, painter: &egui::Painter, center: Pos2) {
        let color = Color32::WHITE;

        // camera body
        let body = Rect::from_center_size(
            Pos2::new(center.x - 4.0, center.y),
            Vec2::new(26.0, 20.0),
        );
        painter.rect_filled(body, 4.0, color);

        // lens wedge pointing right
        let wedge = [
            Pos2::new(body.right() + 2.0, center.y - 4.0),
            Pos2::new(body.right() + 10.0, center.y - 9.0),
            Pos2::new(body.right() + 10.0, center.y + 9.0),
            Pos2::new(body.right() + 2.0, center.y + 4.0),
        ];
        painter.add(egui::Shape::convex_polygon(
            wedge.to_vec(),
            color,
            Stroke::NONE,
        ));
    }

    /// Expanding rings around the button while recording
    fn draw_pulse_rings(
        &self,
        ui: &egui::Ui,
        painter: &egui::Painter,
        center: Pos2,
        radius: f32,
    ) {
        let t = ui.ctx().input(|i| i.time);

        let pulse = ((t * 3.0).sin() * 0.5 + 0.5) as f32;
        painter.circle_stroke(
            center,
            radius + 4.0 + pulse * 8.0,
            Stroke::new(
                2.0 + pulse * 2.0,
                self.theme.recording.gamma_multiply((1.0 - pulse) * 0.6),
            ),
        );

        // second ring half a phase behind
        let pulse2 = (((t * 3.0) + std::f64::consts::PI).sin() * 0.5 + 0.5) as f32;
        painter.circle_stroke(
            center,
            radius + 4.0 + pulse2 * 8.0,
            Stroke::new(
                1.5 + pulse2 * 1.5,
                self.theme.recording.gamma_multiply((1.0 - pulse2) * 0.4),
            ),
        );

        ui.ctx().request_repaint();
    }
}
