use eframe::egui;

use crate::egui_app::state::AppState;
use crate::egui_app::theme::{colors, styles};
use crate::egui_app::views::{labeled_input, INPUT_WIDTH};
use crate::egui_app::AppView;
use crate::shared::validation::Field;

pub fn render(ui: &mut egui::Ui, state: &mut AppState) {
    ui.vertical_centered(|ui| {
        ui.add_space(40.0);

        styles::card_frame().show(ui, |ui| {
            ui.set_width(INPUT_WIDTH + 16.0);

            ui.label(
                egui::RichText::new("Create Account")
                    .size(24.0)
                    .strong()
                    .color(colors::TEXT_DARK),
            );
            ui.add_space(16.0);

            let register = &mut state.register;
            if labeled_input(
                ui,
                Field::Username,
                &mut register.username,
                register.feedback.get(Field::Username),
                false,
            ) {
                register.on_input(Field::Username);
            }
            if labeled_input(
                ui,
                Field::Password,
                &mut register.password,
                register.feedback.get(Field::Password),
                true,
            ) {
                register.on_input(Field::Password);
            }
            if labeled_input(
                ui,
                Field::ConfirmPassword,
                &mut register.confirm_password,
                register.feedback.get(Field::ConfirmPassword),
                true,
            ) {
                register.on_input(Field::ConfirmPassword);
            }

            ui.add_space(8.0);

            let submit = ui.add_enabled(
                !state.register.in_flight(),
                styles::primary_button("Sign Up").min_size(egui::vec2(INPUT_WIDTH, 32.0)),
            );
            if submit.clicked() {
                state.handle_register();
            }

            if state.register.in_flight() {
                ui.add_space(10.0);
                ui.spinner();
            }

            ui.add_space(12.0);
            if ui.link("Already registered? Log in").clicked() {
                state.navigate(AppView::Login);
            }
        });
    });
}
