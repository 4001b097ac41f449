use eframe::egui;

use crate::ui::state::AppState;

const SEND_BUTTON_WIDTH: f32 = 60.0;

pub fn render(ui: &mut egui::Ui, state: &mut AppState) -> Option<String> {
    let mut send = false;
    ui.horizontal(|ui| {
        let width = (ui.available_width() - SEND_BUTTON_WIDTH).max(0.0);
        let response = ui.add(
            egui::TextEdit::singleline(&mut state.input_text)
                .hint_text("Type a message")
                .desired_width(width),
        );
        if ui.button("Send").clicked() {
            send = true;
        }

        if response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
            send = true;
            response.request_focus();
        }
    });

    // The field is cleared on submit, before the server sees anything.
    if send { state.submit_message() } else { None }
}
