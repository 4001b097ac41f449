use eframe::egui;

use crate::ui::state::AppState;

pub fn render(ui: &mut egui::Ui, state: &mut AppState) -> Option<String> {
    let mut submit = false;
    let enabled = !state.claim_pending;

    ui.vertical_centered(|ui| {
        ui.add_space(40.0);
        ui.heading("Choose a nickname");
        ui.add_space(8.0);

        let response = ui.add_enabled(
            enabled,
            egui::TextEdit::singleline(&mut state.nickname_input).hint_text("Nickname"),
        );
        if response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
            submit = true;
        }

        if ui.add_enabled(enabled, egui::Button::new("Continue")).clicked() {
            submit = true;
        }

        if state.claim_pending {
            ui.spinner();
        }
    });

    if submit { state.submit_nickname() } else { None }
}
