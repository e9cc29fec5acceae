use eframe::egui;

use crate::egui_app::debug::{DebugCategory, DebugLevel};
use crate::egui_app::state::AppState;
use crate::egui_app::theme::colors;

pub fn render_debug_panel(ui: &mut egui::Ui, state: &mut AppState) {
    egui::Frame::new()
        .fill(colors::DEBUG_BG)
        .inner_margin(egui::Margin::same(8))
        .show(ui, |ui| {
            ui.horizontal(|ui| {
                ui.colored_label(colors::TEXT_LIGHT, egui::RichText::new("🐛 Debug Console").strong());
                ui.colored_label(
                    colors::TEXT_SECONDARY,
                    format!("Entries: {}", state.debug_logger.count()),
                );

                if ui.button("🗑 Clear Logs").clicked() {
                    state.debug_logger.clear();
                }

                ui.separator();

                if ui
                    .selectable_label(state.debug_filter_category.is_none(), "All")
                    .clicked()
                {
                    state.debug_filter_category = None;
                }
                for category in DebugCategory::ALL {
                    let selected = state.debug_filter_category == Some(category);
                    if ui.selectable_label(selected, category.to_string()).clicked() {
                        state.debug_filter_category = Some(category);
                    }
                }
            });

            ui.separator();

            let entries = match state.debug_filter_category {
                Some(category) => state.debug_logger.get_entries_by_category(category),
                None => state.debug_logger.get_entries(),
            };

            egui::ScrollArea::vertical()
                .auto_shrink([false; 2])
                .stick_to_bottom(true)
                .show(ui, |ui| {
                    for entry in &entries {
                        let color = match entry.level {
                            DebugLevel::Error => colors::ERROR,
                            DebugLevel::Warn => egui::Color32::YELLOW,
                            DebugLevel::Info => egui::Color32::LIGHT_GREEN,
                            DebugLevel::Debug => egui::Color32::LIGHT_GRAY,
                        };
                        ui.colored_label(color, entry.to_string());
                    }
                });
        });
}
