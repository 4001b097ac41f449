use tokio::sync::mpsc;

use crate::common::{ClientCommand, ClientEvent, User};
use crate::config::ClientConfig;
use crate::error::{ClientError, Result};

use super::nickname::NicknameClaimer;
use super::session::ChatSession;

/// Background network task: claims a nickname, then runs the chat session.
pub struct ChatClient {
    config: ClientConfig,
    http: reqwest::Client,
    event_sender: mpsc::Sender<ClientEvent>,
    command_receiver: mpsc::Receiver<ClientCommand>,
}

impl ChatClient {
    pub fn new(
        config: ClientConfig,
        event_sender: mpsc::Sender<ClientEvent>,
        command_receiver: mpsc::Receiver<ClientCommand>,
    ) -> Self {
        Self {
            config,
            http: reqwest::Client::new(),
            event_sender,
            command_receiver,
        }
    }

    pub async fn run(mut self) -> Result<()> {
        let Some(user) = self.claim_nickname().await else {
            log::info!("UI closed before a nickname was claimed");
            return Ok(());
        };

        let session = ChatSession::open(&self.config.ws_url(), user).await?;
        log::info!("Chat session started as `{}`", session.user().name);
        session
            .run(&mut self.command_receiver, &self.event_sender)
            .await
    }

    /// Processes claims one at a time until one is accepted.
    async fn claim_nickname(&mut self) -> Option<User> {
        let claimer = NicknameClaimer::new(self.http.clone(), self.config.nickname_url());

        while let Some(command) = self.command_receiver.recv().await {
            match command {
                ClientCommand::ClaimNickname(nickname) => match claimer.claim(&nickname).await {
                    Ok(user) => {
                        log::info!("Nickname accepted: {}", user.name);
                        self.notify(ClientEvent::NicknameAccepted(user.clone())).await;
                        return Some(user);
                    }
                    Err(ClientError::NicknameTaken(nickname)) => {
                        log::info!("Nickname `{nickname}` is taken");
                        self.notify(ClientEvent::NicknameRejected(nickname)).await;
                    }
                    Err(err) => {
                        log::error!("Nickname claim failed: {err}");
                        self.notify(ClientEvent::ClaimFailed(err.to_string())).await;
                    }
                },
                ClientCommand::SendMessage(_) => {
                    log::warn!("No nickname claimed yet; dropping outgoing message");
                }
            }
        }

        None
    }

    async fn notify(&self, event: ClientEvent) {
        if let Err(err) = self.event_sender.send(event).await {
            log::warn!("Failed to notify UI: {err:?}");
        }
    }
}
