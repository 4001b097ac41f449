use eframe::egui;

use super::SELF_COLOR;
use crate::ui::surface::RosterEntry;

pub fn render(ui: &mut egui::Ui, roster: &[RosterEntry]) {
    ui.heading("Users");
    ui.separator();

    if roster.is_empty() {
        ui.label(egui::RichText::new("Waiting for the user list...").weak());
        return;
    }

    egui::ScrollArea::vertical().show(ui, |ui| {
        for entry in roster {
            ui.horizontal(|ui| {
                // Avatar placeholder
                ui.colored_label(egui::Color32::GRAY, "●");

                if entry.is_self {
                    ui.colored_label(SELF_COLOR, entry.label.as_str());
                } else {
                    ui.label(entry.label.as_str());
                }
            });
        }
    });
}
