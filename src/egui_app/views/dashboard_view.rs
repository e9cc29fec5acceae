use eframe::egui;

use crate::egui_app::form::FieldFeedback;
use crate::egui_app::state::AppState;
use crate::egui_app::theme::{colors, styles};
use crate::egui_app::views::{labeled_input, INPUT_WIDTH};
use crate::shared::validation::Field;

pub fn render(ui: &mut egui::Ui, state: &mut AppState) {
    ui.horizontal(|ui| {
        ui.label(
            egui::RichText::new("Books")
                .size(22.0)
                .strong()
                .color(colors::TEXT_DARK),
        );
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui.add(styles::primary_button("➕ Add book")).clicked() {
                state.dashboard.toggle_form();
            }
        });
    });
    ui.add_space(12.0);

    styles::card_frame().show(ui, |ui| {
        ui.set_min_width(ui.available_width());

        if state.dashboard.rows().is_empty() {
            ui.label(egui::RichText::new("No books yet").color(colors::TEXT_SECONDARY));
            return;
        }

        egui::ScrollArea::vertical().show(ui, |ui| {
            egui::Grid::new("book_table")
                .num_columns(5)
                .striped(true)
                .spacing([32.0, 10.0])
                .show(ui, |ui| {
                    for header in ["Name", "Quantity", "Price", "ID", "Actions"] {
                        ui.label(egui::RichText::new(header).strong().color(colors::TEXT_SECONDARY));
                    }
                    ui.end_row();

                    for row in state.dashboard.rows() {
                        ui.label(egui::RichText::new(&row.title).color(colors::TEXT_DARK));
                        ui.label(egui::RichText::new(&row.quantity).color(colors::TEXT_SECONDARY));
                        ui.label(egui::RichText::new(&row.price).color(colors::TEXT_SECONDARY));
                        ui.label(egui::RichText::new(&row.id).color(colors::TEXT_SECONDARY));
                        ui.horizontal(|ui| {
                            ui.small_button("✏");
                            ui.small_button("🗑");
                        });
                        ui.end_row();
                    }
                });
        });
    });
}

/// Add-book form in a modal; clicking the backdrop toggles it closed.
pub fn render_add_form(ctx: &egui::Context, state: &mut AppState) {
    let modal = egui::Modal::new(egui::Id::new("add_book_modal"))
        .frame(styles::modal_frame())
        .show(ctx, |ui| {
            ui.set_width(INPUT_WIDTH + 16.0);
            ui.label(
                egui::RichText::new("Add book")
                    .size(20.0)
                    .strong()
                    .color(colors::TEXT_DARK),
            );
            ui.add_space(12.0);

            let draft = &mut state.dashboard.draft;
            let idle = FieldFeedback::Idle;
            labeled_input(ui, Field::Title, &mut draft.title, &idle, false);
            labeled_input(ui, Field::Author, &mut draft.author, &idle, false);
            labeled_input(ui, Field::Summary, &mut draft.summary, &idle, false);
            labeled_input(ui, Field::Price, &mut draft.price, &idle, false);
            labeled_input(ui, Field::Quantity, &mut draft.quantity, &idle, false);

            ui.add_space(8.0);
            let mut cancel = false;
            ui.horizontal(|ui| {
                let submit = ui.add_enabled(
                    !state.dashboard.in_flight(),
                    styles::primary_button("Add"),
                );
                if submit.clicked() {
                    state.handle_add_book();
                }
                if ui.button("Cancel").clicked() {
                    cancel = true;
                }
                if state.dashboard.in_flight() {
                    ui.spinner();
                }
            });
            cancel
        });

    if (modal.inner || modal.should_close()) && state.dashboard.form_visible() {
        state.dashboard.toggle_form();
    }
}
