//! Home screen: capture entry point
//!
//! Shows the active model, the audio/video mode toggle, the record button
//! and, while a session runs, the elapsed clock and live waveform.

use super::ScreenContext;
use crate::anim::WaveformSampler;
use crate::state::{format_clock, AppRequest, RecordingMode, Screen, SessionController};
use crate::ui::components::{LiveWaveform, RecordButton};
use crate::ui::state::ScreenLocals;
use egui::RichText;

pub struct HomeScreen<'a> {
    ctx: ScreenContext<'a>,
    session: &'a SessionController,
    sampler: &'a WaveformSampler,
    locals: &'a mut ScreenLocals,
}

impl<'a> HomeScreen<'a> {
    pub fn new(
        ctx: ScreenContext<'a>,
        session: &'a SessionController,
        sampler: &'a WaveformSampler,
        locals: &'a mut ScreenLocals,
    ) -> Self {
        Self {
            ctx,
            session,
            sampler,
            locals,
        }
    }

    pub fn show(mut self, ui: &mut egui::Ui) {
        let theme = self.ctx.theme;
        let recording = self.session.is_recording();
        // while recording, the session's own mode drives the display
        let mode = self.session.mode().unwrap_or(self.locals.recording_mode);

        ui.vertical_centered(|ui| {
            ui.add_space(theme.spacing_lg);
            ui.label(
                RichText::new("DeepGuard AI")
                    .size(26.0)
                    .strong()
                    .color(theme.primary),
            );
            ui.label(
                RichText::new("Advanced deepfake detection powered by AI")
                    .size(13.0)
                    .color(theme.text_secondary),
            );
        });

        ui.add_space(theme.spacing);
        self.model_card(ui);

        ui.add_space(theme.spacing);
        self.mode_toggle(ui, recording);

        ui.add_space(theme.spacing_lg);
        ui.vertical_centered(|ui| {
            if recording {
                ui.label(
                    RichText::new(format_clock(self.session.elapsed_seconds()))
                        .size(22.0)
                        .monospace()
                        .color(theme.primary),
                );
                if mode == RecordingMode::Audio {
                    ui.add_space(theme.spacing_sm);
                    LiveWaveform::from_sampler(self.sampler, theme).show(ui);
                }
                ui.add_space(theme.spacing_sm);
            }

            let response = RecordButton::new(theme, mode, recording).show(ui);
            if response.clicked() {
                if recording {
                    self.ctx.send(AppRequest::StopRecording);
                } else {
                    self.ctx.send(AppRequest::StartRecording(mode));
                }
            }

            ui.add_space(theme.spacing_sm);
            let hint = if recording {
                format!("Recording {}... Tap to stop", mode)
            } else {
                format!("Tap to start {} recording", mode)
            };
            ui.label(RichText::new(hint).size(13.0).color(theme.text_muted));
        });
    }

    /// Active model card with a shortcut to the model screen
    fn model_card(&self, ui: &mut egui::Ui) {
        let theme = self.ctx.theme;
        let selected = self.ctx.nav.selected_model();
        let display_name = self
            .ctx
            .provider
            .models()
            .iter()
            .find(|m| m.id == selected)
            .map(|m| m.name)
            .unwrap_or(selected);

        self.ctx.card().show(ui, |ui| {
            ui.horizontal(|ui| {
                ui.vertical(|ui| {
                    ui.label(
                        RichText::new("Active Model")
                            .size(12.0)
                            .color(theme.text_secondary),
                    );
                    ui.label(
                        RichText::new(display_name)
                            .size(14.0)
                            .strong()
                            .color(theme.primary),
                    );
                });
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.button("Change").clicked() {
                        self.ctx.send(AppRequest::Navigate(Screen::Models));
                    }
                });
            });
        });
    }

    /// Audio/video capture mode toggle
    fn mode_toggle(&mut self, ui: &mut egui::Ui, recording: bool) {
        let theme = self.ctx.theme;
        ui.columns(2, |columns| {
            for (column, mode) in columns
                .iter_mut()
                .zip([RecordingMode::Audio, RecordingMode::Video])
            {
                let selected = self.locals.recording_mode == mode;
                let clicked = column
                    .vertical_centered_justified(|ui| {
                        ui.selectable_label(
                            selected,
                            RichText::new(mode.label()).size(14.0).color(if selected {
                                theme.primary
                            } else {
                                theme.text_secondary
                            }),
                        )
                    })
                    .inner
                    .clicked();
                // the mode of a running session is fixed at start
                if clicked && !recording {
                    self.locals.recording_mode = mode;
                }
            }
        });
    }
}
