//! Recordings history screen
//!
//! Static list of past analyses with type filter chips. Completed entries
//! open the matching results screen.

use super::ScreenContext;
use crate::detect::{EntryStatus, RecordingEntry};
use crate::state::{AppRequest, Screen};
use crate::ui::state::{HistoryFilter, ScreenLocals};
use egui::{Color32, RichText, Sense, Stroke};

pub struct HistoryScreen<'a> {
    ctx: ScreenContext<'a>,
    locals: &'a mut ScreenLocals,
}

impl<'a> HistoryScreen<'a> {
    pub fn new(ctx: ScreenContext<'a>, locals: &'a mut ScreenLocals) -> Self {
        Self { ctx, locals }
    }

    pub fn show(mut self, ui: &mut egui::Ui) {
        let theme = self.ctx.theme;

        self.ctx.header(
            ui,
            Screen::Home,
            Screen::History.title(),
            "View your analysis history",
        );

        ui.add_space(theme.spacing);
        self.filter_chips(ui);
        ui.add_space(theme.spacing);

        let entries: Vec<&RecordingEntry> = self
            .ctx
            .provider
            .history()
            .iter()
            .filter(|e| self.locals.history_filter.accepts(e.media))
            .collect();

        if entries.is_empty() {
            self.empty_state(ui);
            return;
        }

        for entry in entries {
            self.entry_card(ui, entry);
            ui.add_space(theme.spacing_sm);
        }
    }

    fn filter_chips(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            for filter in [
                HistoryFilter::All,
                HistoryFilter::Audio,
                HistoryFilter::Video,
            ] {
                let selected = self.locals.history_filter == filter;
                if ui.selectable_label(selected, filter.label()).clicked() {
                    self.locals.history_filter = filter;
                }
            }
        });
    }

    fn entry_card(&self, ui: &mut egui::Ui, entry: &RecordingEntry) {
        let theme = self.ctx.theme;
        let openable = entry.status == EntryStatus::Completed;

        let response = self
            .ctx
            .card()
            .stroke(Stroke::new(1.0, theme.bg_tertiary))
            .show(ui, |ui| {
                ui.horizontal(|ui| {
                    ui.label(
                        RichText::new(entry.media.label())
                            .size(11.0)
                            .color(theme.text_muted),
                    );
                    ui.vertical(|ui| {
                        ui.label(
                            RichText::new(entry.name)
                                .size(14.0)
                                .strong()
                                .color(theme.text_primary),
                        );
                        ui.label(
                            RichText::new(format!(
                                "{} \u{2022} {} \u{2022} {}",
                                entry.date, entry.time, entry.duration
                            ))
                            .size(11.0)
                            .color(theme.text_muted),
                        );
                    });
                });

                ui.add_space(theme.spacing_sm / 2.0);
                ui.horizontal(|ui| {
                    ui.label(
                        RichText::new(entry.status.label())
                            .size(11.0)
                            .color(self.status_color(entry.status)),
                    );
                    if let Some((verdict, confidence)) = entry.outcome {
                        ui.with_layout(
                            egui::Layout::right_to_left(egui::Align::Center),
                            |ui| {
                                ui.label(
                                    RichText::new(format!(
                                        "{}% {}",
                                        confidence,
                                        verdict.label()
                                    ))
                                    .size(12.0)
                                    .strong()
                                    .color(theme.verdict_color(verdict)),
                                );
                            },
                        );
                    }
                });
            })
            .response;

        if !openable {
            return;
        }
        let response = response
            .interact(Sense::click())
            .on_hover_text("Open analysis results");
        if response.clicked() {
            self.ctx
                .send(AppRequest::Navigate(entry.media.results_screen()));
        }
    }

    fn status_color(&self, status: EntryStatus) -> Color32 {
        let theme = self.ctx.theme;
        match status {
            EntryStatus::Completed => theme.authentic,
            EntryStatus::Processing => theme.primary,
            EntryStatus::Failed => theme.suspicious,
        }
    }

    fn empty_state(&self, ui: &mut egui::Ui) {
        let theme = self.ctx.theme;
        ui.vertical_centered(|ui| {
            ui.add_space(theme.spacing_lg * 2.0);
            ui.label(
                RichText::new("No recordings yet")
                    .size(16.0)
                    .strong()
                    .color(theme.text_primary),
            );
            ui.label(
                RichText::new("Start by recording media to analyze")
                    .size(12.0)
                    .color(theme.text_muted),
            );
            ui.add_space(theme.spacing);
            if ui.button("Start Recording").clicked() {
                self.ctx.send(AppRequest::Navigate(Screen::Home));
            }
        });
    }
}
