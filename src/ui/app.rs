use std::time::Duration;

use eframe::egui;
use tokio::sync::mpsc;

use crate::common::{ClientCommand, ClientEvent};

use super::components::{alert, chat_area, input_bar, nickname_form, sidebar};
use super::state::{AppState, Screen};
use super::surface::RenderSurface;
use super::view::ChatView;

const REPAINT_INTERVAL: Duration = Duration::from_millis(100);

pub struct ChatApp {
    state: AppState,
    view: ChatView,
    command_sender: mpsc::Sender<ClientCommand>,
    event_receiver: mpsc::Receiver<ClientEvent>,
}

impl ChatApp {
    pub fn new(
        _cc: &eframe::CreationContext<'_>,
        command_sender: mpsc::Sender<ClientCommand>,
        event_receiver: mpsc::Receiver<ClientEvent>,
    ) -> Self {
        let mut state = AppState::new();
        state.show_nickname_form();
        Self {
            state,
            view: ChatView::new(),
            command_sender,
            event_receiver,
        }
    }

    fn handle_client_events(&mut self) {
        while let Ok(event) = self.event_receiver.try_recv() {
            self.view.apply(event, &mut self.state);
        }
    }

    fn send_command(&self, command: ClientCommand) {
        if let Err(err) = self.command_sender.try_send(command) {
            log::warn!("Failed to send command to network: {err}");
        }
    }
}

impl eframe::App for ChatApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.handle_client_events();

        alert::render(ctx, &mut self.state);

        match self.state.screen {
            Screen::Nickname => {
                egui::CentralPanel::default().show(ctx, |ui| {
                    if let Some(nickname) = nickname_form::render(ui, &mut self.state) {
                        self.send_command(ClientCommand::ClaimNickname(nickname));
                    }
                });
            }
            Screen::Chat => {
                egui::SidePanel::left("user_box")
                    .resizable(true)
                    .default_width(180.0)
                    .show(ctx, |ui| {
                        sidebar::render(ui, &self.state.roster);
                    });

                egui::TopBottomPanel::bottom("chat_input").show(ctx, |ui| {
                    ui.add_space(4.0);
                    if let Some(text) = input_bar::render(ui, &mut self.state) {
                        self.send_command(ClientCommand::SendMessage(text));
                    }
                    ui.add_space(4.0);
                });

                egui::CentralPanel::default().show(ctx, |ui| {
                    chat_area::render(
                        ui,
                        &self.state.messages,
                        &mut self.state.scroll_to_latest,
                    );
                });
            }
        }

        ctx.request_repaint_after(REPAINT_INTERVAL);
    }
}
