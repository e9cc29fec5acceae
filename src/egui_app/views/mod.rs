use eframe::egui;

use crate::egui_app::form::FieldFeedback;
use crate::egui_app::state::AppState;
use crate::egui_app::theme::{colors, styles};
use crate::egui_app::AppView;
use crate::shared::validation::Field;

pub mod dashboard_view;
pub mod debug_view;
pub mod login_view;
pub mod register_view;

/// Width of text inputs on the auth pages and in the add-book form
pub(crate) const INPUT_WIDTH: f32 = 280.0;

pub fn render_top_bar(ctx: &egui::Context, state: &mut AppState) {
    egui::TopBottomPanel::top("top_panel")
        .frame(styles::top_bar_frame())
        .show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.colored_label(
                    colors::TEXT_LIGHT,
                    egui::RichText::new("📚 Bookstore Admin").size(18.0).strong(),
                );

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.add_space(8.0);

                    if ui
                        .selectable_label(state.debug_view_expanded, "🐛 Debug")
                        .clicked()
                    {
                        state.debug_view_expanded = !state.debug_view_expanded;
                    }

                    if state.current_view == AppView::Dashboard && ui.button("Logout").clicked() {
                        state.logout();
                    }
                });
            });
        });
}

pub fn render_main_panel(ctx: &egui::Context, state: &mut AppState) {
    if state.debug_view_expanded {
        egui::TopBottomPanel::bottom("debug_panel")
            .resizable(true)
            .default_height(220.0)
            .show(ctx, |ui| debug_view::render_debug_panel(ui, state));
    }

    let frame = egui::Frame::default()
        .fill(colors::BG_LIGHT)
        .inner_margin(egui::Margin::same(16));

    let view = state.current_view;
    egui::CentralPanel::default()
        .frame(frame)
        .show(ctx, |ui| match view {
            AppView::Login => login_view::render(ui, state),
            AppView::Register => register_view::render(ui, state),
            AppView::Dashboard => dashboard_view::render(ui, state),
        });

    if state.current_view == AppView::Dashboard && state.dashboard.form_visible() {
        dashboard_view::render_add_form(ctx, state);
    }
}

/// Blocking message, dismissed with OK
pub fn render_alert(ctx: &egui::Context, state: &mut AppState) {
    let Some(message) = state.alert.clone() else {
        return;
    };

    let modal = egui::Modal::new(egui::Id::new("alert_modal"))
        .frame(styles::modal_frame())
        .show(ctx, |ui| {
            ui.set_max_width(320.0);
            ui.label(egui::RichText::new(message).color(colors::TEXT_DARK));
            ui.add_space(12.0);
            ui.vertical_centered(|ui| ui.add(styles::primary_button("OK")).clicked())
                .inner
        });

    if modal.inner || modal.should_close() {
        state.dismiss_alert();
    }
}

/// Label, bordered text input and inline error. Returns true when the text changed.
pub(crate) fn labeled_input(
    ui: &mut egui::Ui,
    field: Field,
    value: &mut String,
    feedback: &FieldFeedback,
    password: bool,
) -> bool {
    ui.label(egui::RichText::new(field.label()).color(colors::TEXT_SECONDARY));

    let changed = egui::Frame::new()
        .stroke(egui::Stroke::new(1.5, styles::field_border(feedback)))
        .corner_radius(egui::CornerRadius::same(4))
        .inner_margin(egui::Margin::same(4))
        .show(ui, |ui| {
            ui.add(
                egui::TextEdit::singleline(value)
                    .hint_text(field.label())
                    .password(password)
                    .frame(false)
                    .desired_width(INPUT_WIDTH),
            )
            .changed()
        })
        .inner;

    if let Some(message) = feedback.error_message() {
        ui.label(egui::RichText::new(message).color(colors::ERROR).size(12.0));
    }
    ui.add_space(8.0);

    changed
}
