//! Bottom navigation bar
//!
//! Home / Models / History shortcuts plus the theme toggle. Raises
//! [`AppRequest`]s rather than touching state itself.

use crate::state::{AppRequest, Screen};
use crate::ui::theme::Theme;
use crossbeam_channel::Sender;
use egui::RichText;

const NAV_ITEMS: &[(Screen, &str)] = &[
    (Screen::Home, "Home"),
    (Screen::Models, "Models"),
    (Screen::History, "History"),
];

/// Bottom navigation bar component
pub struct NavBar<'a> {
    current: Screen,
    theme: &'a Theme,
    requests: &'a Sender<AppRequest>,
}

impl<'a> NavBar<'a> {
    pub fn new(current: Screen, theme: &'a Theme, requests: &'a Sender<AppRequest>) -> Self {
        Self {
            current,
            theme,
            requests,
        }
    }

    pub fn show(self, ui: &mut egui::Ui) {
        ui.add_space(self.theme.spacing_sm);
        ui.columns(NAV_ITEMS.len() + 1, |columns| {
            for (column, (screen, label)) in columns.iter_mut().zip(NAV_ITEMS) {
                let selected = self.current == *screen;
                let color = if selected {
                    self.theme.primary
                } else {
                    self.theme.text_muted
                };

                let clicked = column
                    .vertical_centered(|ui| {
                        ui.selectable_label(
                            selected,
                            RichText::new(*label).size(13.0).color(color),
                        )
                    })
                    .inner
                    .clicked();
                if clicked {
                    let _ = self.requests.send(AppRequest::Navigate(*screen));
                }
            }

            let theme_column = &mut columns[NAV_ITEMS.len()];
            let clicked = theme_column
                .vertical_centered(|ui| {
                    ui.selectable_label(
                        false,
                        RichText::new("Theme").size(13.0).color(self.theme.text_muted),
                    )
                })
                .inner
                .clicked();
            if clicked {
                let _ = self.requests.send(AppRequest::ToggleTheme);
            }
        });
        ui.add_space(self.theme.spacing_sm);
    }
}
