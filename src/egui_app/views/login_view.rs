use std::time::Instant;

use eframe::egui;

use crate::egui_app::state::AppState;
use crate::egui_app::theme::{colors, styles};
use crate::egui_app::views::{labeled_input, INPUT_WIDTH};
use crate::egui_app::AppView;
use crate::shared::validation::Field;

pub fn render(ui: &mut egui::Ui, state: &mut AppState) {
    ui.vertical_centered(|ui| {
        ui.add_space(60.0);

        styles::card_frame().show(ui, |ui| {
            ui.set_width(INPUT_WIDTH + 16.0);

            ui.label(
                egui::RichText::new("Welcome Back")
                    .size(24.0)
                    .strong()
                    .color(colors::TEXT_DARK),
            );
            ui.add_space(16.0);

            let login = &mut state.login;
            if labeled_input(
                ui,
                Field::Username,
                &mut login.username,
                login.feedback.get(Field::Username),
                false,
            ) {
                login.on_input(Field::Username);
            }

            if labeled_input(
                ui,
                Field::Password,
                &mut login.password,
                login.feedback.get(Field::Password),
                true,
            ) {
                login.on_input(Field::Password);
            }
            let enter_pressed = ui.input(|i| i.key_pressed(egui::Key::Enter));

            ui.add_space(8.0);

            let submit = ui.add_enabled(
                !state.login.in_flight(),
                styles::primary_button("Login").min_size(egui::vec2(INPUT_WIDTH, 32.0)),
            );
            if submit.clicked() || (enter_pressed && !state.login.in_flight()) {
                state.handle_login(Instant::now());
            }

            if state.login.is_loading() {
                ui.add_space(10.0);
                ui.horizontal(|ui| {
                    ui.spinner();
                    ui.label(egui::RichText::new("Signing in...").color(colors::TEXT_SECONDARY));
                });
            }

            ui.add_space(12.0);
            if ui.link("Don't have an account? Register").clicked() {
                state.navigate(AppView::Register);
            }
        });
    });
}
