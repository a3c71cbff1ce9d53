//! Model selection screen
//!
//! Lists the detection model catalog per category; selecting a card raises
//! a model-change request, "Apply Selection" returns home.

use super::ScreenContext;
use crate::detect::{DetectionModel, ModelSpeed};
use crate::state::{AppRequest, RecordingMode, Screen};
use crate::ui::state::ScreenLocals;
use egui::{RichText, Sense, Stroke};

pub struct ModelsScreen<'a> {
    ctx: ScreenContext<'a>,
    locals: &'a mut ScreenLocals,
}

impl<'a> ModelsScreen<'a> {
    pub fn new(ctx: ScreenContext<'a>, locals: &'a mut ScreenLocals) -> Self {
        Self { ctx, locals }
    }

    pub fn show(mut self, ui: &mut egui::Ui) {
        let theme = self.ctx.theme;

        self.ctx.header(
            ui,
            Screen::Home,
            Screen::Models.title(),
            "Choose the best model for your needs",
        );

        ui.add_space(theme.spacing);
        self.category_toggle(ui);
        ui.add_space(theme.spacing);

        for model in self
            .ctx
            .provider
            .models()
            .iter()
            .filter(|m| m.category == self.locals.model_category)
        {
            self.model_card(ui, model);
            ui.add_space(theme.spacing_sm);
        }

        ui.add_space(theme.spacing_sm);
        ui.vertical_centered_justified(|ui| {
            if ui
                .button(RichText::new("Apply Selection").size(15.0).strong())
                .clicked()
            {
                self.ctx.send(AppRequest::Navigate(Screen::Home));
            }
        });
    }

    fn category_toggle(&mut self, ui: &mut egui::Ui) {
        let theme = self.ctx.theme;
        ui.columns(2, |columns| {
            for (column, category) in columns
                .iter_mut()
                .zip([RecordingMode::Audio, RecordingMode::Video])
            {
                let selected = self.locals.model_category == category;
                let label = format!("{} Models", category.label());
                let clicked = column
                    .vertical_centered_justified(|ui| {
                        ui.selectable_label(
                            selected,
                            RichText::new(label).size(14.0).color(if selected {
                                theme.primary
                            } else {
                                theme.text_secondary
                            }),
                        )
                    })
                    .inner
                    .clicked();
                if clicked {
                    self.locals.model_category = category;
                }
            }
        });
    }

    fn model_card(&self, ui: &mut egui::Ui, model: &DetectionModel) {
        let theme = self.ctx.theme;
        let selected = self.ctx.nav.selected_model() == model.id;

        let frame = if selected {
            self.ctx
                .card()
                .stroke(Stroke::new(2.0, theme.primary))
                .fill(theme.primary.gamma_multiply(0.12))
        } else {
            self.ctx.card().stroke(Stroke::new(1.0, theme.bg_tertiary))
        };

        let response = frame
            .show(ui, |ui| {
                ui.horizontal(|ui| {
                    ui.vertical(|ui| {
                        ui.label(
                            RichText::new(model.name)
                                .size(15.0)
                                .strong()
                                .color(theme.text_primary),
                        );
                        ui.label(
                            RichText::new(model.description)
                                .size(12.0)
                                .color(theme.text_secondary),
                        );
                    });
                    if selected {
                        ui.with_layout(
                            egui::Layout::right_to_left(egui::Align::Min),
                            |ui| {
                                ui.label(
                                    RichText::new("\u{2713}").size(18.0).color(theme.primary),
                                );
                            },
                        );
                    }
                });

                ui.add_space(theme.spacing_sm);
                ui.horizontal(|ui| {
                    ui.label(
                        RichText::new(format!("{}%", model.accuracy))
                            .size(20.0)
                            .strong()
                            .color(theme.text_primary),
                    );
                    ui.label(
                        RichText::new("Accuracy").size(11.0).color(theme.text_muted),
                    );
                    ui.add_space(theme.spacing);
                    ui.label(
                        RichText::new(model.speed.label())
                            .size(12.0)
                            .color(self.speed_color(model.speed)),
                    );
                });

                ui.add_space(theme.spacing_sm);
                for feature in model.features {
                    ui.label(
                        RichText::new(format!("\u{2022} {}", feature))
                            .size(12.0)
                            .color(theme.text_secondary),
                    );
                }
            })
            .response
            .interact(Sense::click());

        if response.clicked() {
            self.ctx.send(AppRequest::SelectModel(model.id.to_string()));
        }
    }

    fn speed_color(&self, speed: ModelSpeed) -> egui::Color32 {
        match speed {
            ModelSpeed::Fast => self.ctx.theme.authentic,
            ModelSpeed::Medium => self.ctx.theme.caution,
            ModelSpeed::Slow => self.ctx.theme.suspicious,
        }
    }
}
