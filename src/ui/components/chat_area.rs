use eframe::egui;

use super::SELF_COLOR;
use crate::ui::surface::MessageView;

pub fn render(ui: &mut egui::Ui, messages: &[MessageView], scroll_to_latest: &mut bool) {
    egui::ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui| {
            let last = messages.len().saturating_sub(1);
            for (index, message) in messages.iter().enumerate() {
                let response = render_message(ui, message);
                if *scroll_to_latest && index == last {
                    response.scroll_to_me(Some(egui::Align::BOTTOM));
                }
            }
        });

    *scroll_to_latest = false;
}

fn render_message(ui: &mut egui::Ui, message: &MessageView) -> egui::Response {
    let align = if message.is_self {
        egui::Align::Max
    } else {
        egui::Align::Min
    };

    ui.with_layout(egui::Layout::top_down(align), |ui| {
        let caption = egui::RichText::new(message.caption()).small();
        if message.is_self {
            ui.label(caption.color(SELF_COLOR));
        } else {
            ui.label(caption.weak());
        }
        ui.label(message.text.as_str());
        ui.add_space(6.0);
    })
    .response
}
