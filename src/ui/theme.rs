//! Theme and styling
//!
//! Paired dark/light palettes applied to the egui context. The theme is
//! process-wide: the nav bar's toggle swaps the whole palette at once.

use crate::detect::{Severity, Verdict};
use egui::{Color32, FontFamily, FontId, Rounding, Stroke, Vec2, Visuals};

/// Which of the two palettes is active
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ThemeKind {
    #[default]
    Dark,
    Light,
}

impl ThemeKind {
    pub fn toggled(self) -> Self {
        match self {
            ThemeKind::Dark => ThemeKind::Light,
            ThemeKind::Light => ThemeKind::Dark,
        }
    }
}

/// Application theme configuration
#[derive(Clone, Debug)]
pub struct Theme {
    kind: ThemeKind,

    /// Primary accent (indigo)
    pub primary: Color32,
    /// Secondary accent (purple)
    pub secondary: Color32,

    /// Verdict and severity colors
    pub authentic: Color32,
    pub suspicious: Color32,
    pub caution: Color32,

    /// Background colors
    pub bg_primary: Color32,
    pub bg_secondary: Color32,
    pub bg_tertiary: Color32,

    /// Text colors
    pub text_primary: Color32,
    pub text_secondary: Color32,
    pub text_muted: Color32,

    /// Recording indicator color
    pub recording: Color32,

    /// Waveform colors
    pub waveform_active: Color32,
    pub waveform_inactive: Color32,

    /// Border radius for buttons
    pub button_rounding: Rounding,
    /// Border radius for cards
    pub card_rounding: Rounding,

    /// Standard spacing
    pub spacing: f32,
    pub spacing_lg: f32,
    pub spacing_sm: f32,
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

impl Theme {
    pub fn of(kind: ThemeKind) -> Self {
        match kind {
            ThemeKind::Dark => Self::dark(),
            ThemeKind::Light => Self::light(),
        }
    }

    /// Create the dark theme
    pub fn dark() -> Self {
        Self {
            kind: ThemeKind::Dark,

            primary: Color32::from_rgb(99, 102, 241),
            secondary: Color32::from_rgb(139, 92, 246),

            authentic: Color32::from_rgb(34, 197, 94),
            suspicious: Color32::from_rgb(239, 68, 68),
            caution: Color32::from_rgb(234, 179, 8),

            bg_primary: Color32::from_rgb(15, 23, 42),   // Slate
            bg_secondary: Color32::from_rgb(30, 41, 59),
            bg_tertiary: Color32::from_rgb(51, 65, 85),

            text_primary: Color32::from_rgb(248, 250, 252),
            text_secondary: Color32::from_rgb(203, 213, 225),
            text_muted: Color32::from_rgb(148, 163, 184),

            recording: Color32::from_rgb(239, 68, 68),

            waveform_active: Color32::from_rgb(99, 102, 241),
            waveform_inactive: Color32::from_rgb(71, 85, 105),

            button_rounding: Rounding::same(10.0),
            card_rounding: Rounding::same(14.0),

            spacing: 16.0,
            spacing_lg: 24.0,
            spacing_sm: 8.0,
        }
    }

    /// Create the light theme
    pub fn light() -> Self {
        Self {
            kind: ThemeKind::Light,

            primary: Color32::from_rgb(79, 70, 229),
            secondary: Color32::from_rgb(124, 58, 237),

            authentic: Color32::from_rgb(22, 163, 74),
            suspicious: Color32::from_rgb(220, 38, 38),
            caution: Color32::from_rgb(202, 138, 4),

            bg_primary: Color32::from_rgb(248, 250, 252),
            bg_secondary: Color32::from_rgb(241, 245, 249),
            bg_tertiary: Color32::from_rgb(226, 232, 240),

            text_primary: Color32::from_rgb(15, 23, 42),
            text_secondary: Color32::from_rgb(51, 65, 85),
            text_muted: Color32::from_rgb(100, 116, 139),

            recording: Color32::from_rgb(220, 38, 38),

            waveform_active: Color32::from_rgb(79, 70, 229),
            waveform_inactive: Color32::from_rgb(148, 163, 184),

            button_rounding: Rounding::same(10.0),
            card_rounding: Rounding::same(14.0),

            spacing: 16.0,
            spacing_lg: 24.0,
            spacing_sm: 8.0,
        }
    }

    pub fn kind(&self) -> ThemeKind {
        self.kind
    }

    /// Color for a verdict headline or badge
    pub fn verdict_color(&self, verdict: Verdict) -> Color32 {
        match verdict {
            Verdict::Authentic => self.authentic,
            Verdict::Fake => self.suspicious,
        }
    }

    /// Fill color for a metric bar.
    ///
    /// High-severity metrics take the verdict color (supporting evidence),
    /// low-severity ones the opposite, medium stays cautionary. Mirrors
    /// how the result screens grade their bars.
    pub fn metric_color(&self, severity: Severity, verdict: Verdict) -> Color32 {
        match severity {
            Severity::High => self.verdict_color(verdict),
            Severity::Medium => self.caution,
            Severity::Low => match verdict {
                Verdict::Authentic => self.suspicious,
                Verdict::Fake => self.authentic,
            },
        }
    }

    /// Apply this theme to the egui context
    pub fn apply(&self, ctx: &egui::Context) {
        let mut visuals = match self.kind {
            ThemeKind::Dark => Visuals::dark(),
            ThemeKind::Light => Visuals::light(),
        };

        visuals.panel_fill = self.bg_primary;
        visuals.window_fill = self.bg_secondary;
        visuals.extreme_bg_color = self.bg_tertiary;

        visuals.widgets.noninteractive.bg_fill = self.bg_secondary;
        visuals.widgets.noninteractive.fg_stroke = Stroke::new(1.0, self.text_muted);

        visuals.widgets.inactive.bg_fill = self.bg_tertiary;
        visuals.widgets.inactive.fg_stroke = Stroke::new(1.0, self.text_secondary);

        visuals.widgets.hovered.bg_fill = self.primary.gamma_multiply(0.8);
        visuals.widgets.hovered.fg_stroke = Stroke::new(1.0, self.text_primary);

        visuals.widgets.active.bg_fill = self.primary;
        visuals.widgets.active.fg_stroke = Stroke::new(1.0, self.text_primary);

        visuals.selection.bg_fill = self.primary.gamma_multiply(0.3);
        visuals.selection.stroke = Stroke::new(1.0, self.primary);

        visuals.hyperlink_color = self.primary;

        visuals.window_rounding = self.card_rounding;
        visuals.window_stroke = Stroke::new(1.0, self.bg_tertiary);

        ctx.set_visuals(visuals);

        let mut style = (*ctx.style()).clone();
        style.spacing.item_spacing = Vec2::splat(self.spacing_sm);
        style.spacing.window_margin = egui::Margin::same(self.spacing);
        style.spacing.button_padding = Vec2::new(self.spacing, self.spacing_sm);

        style.text_styles.insert(
            egui::TextStyle::Heading,
            FontId::new(24.0, FontFamily::Proportional),
        );
        style.text_styles.insert(
            egui::TextStyle::Body,
            FontId::new(14.0, FontFamily::Proportional),
        );
        style.text_styles.insert(
            egui::TextStyle::Monospace,
            FontId::new(13.0, FontFamily::Monospace),
        );
        style.text_styles.insert(
            egui::TextStyle::Button,
            FontId::new(14.0, FontFamily::Proportional),
        );
        style.text_styles.insert(
            egui::TextStyle::Small,
            FontId::new(12.0, FontFamily::Proportional),
        );

        ctx.set_style(style);
    }
}
