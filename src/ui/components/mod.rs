use eframe::egui;

pub mod alert;
pub mod chat_area;
pub mod input_bar;
pub mod nickname_form;
pub mod sidebar;

/// Scarlet, used for everything the local user authored.
pub const SELF_COLOR: egui::Color32 = egui::Color32::from_rgb(255, 36, 0);
