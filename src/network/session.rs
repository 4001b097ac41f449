use futures::stream::{SplitSink, SplitStream};
use futures::{SinkExt, StreamExt};
use tokio::net::TcpStream;
use tokio::sync::mpsc;
use tokio_tungstenite::tungstenite::Message as WsMessage;
use tokio_tungstenite::{MaybeTlsStream, WebSocketStream, connect_async};

use crate::common::protocol::{InboundFrame, OutgoingFrame, decode_inbound};
use crate::common::{ClientCommand, ClientEvent, User};
use crate::error::Result;

type WsStream = WebSocketStream<MaybeTlsStream<TcpStream>>;

/// The live socket of a claimed user.
///
/// There is no reconnection: once the socket closes or errors, the session
/// ends and real-time updates stop.
pub struct ChatSession {
    user: User,
    ws_tx: SplitSink<WsStream, WsMessage>,
    ws_rx: SplitStream<WsStream>,
}

impl ChatSession {
    /// Connects and registers `user` with the server.
    pub async fn open(ws_url: &str, user: User) -> Result<Self> {
        let (ws_stream, _) = connect_async(ws_url).await?;
        log::info!("WebSocket open: {ws_url}");

        let (ws_tx, ws_rx) = ws_stream.split();
        let mut session = Self { user, ws_tx, ws_rx };

        let register = OutgoingFrame::register(&session.user).encode()?;
        session.ws_tx.send(WsMessage::Text(register)).await?;
        Ok(session)
    }

    pub fn user(&self) -> &User {
        &self.user
    }

    /// Fire-and-forget; nothing waits for an acknowledgement.
    pub async fn send(&mut self, text: &str) -> Result<()> {
        let frame = OutgoingFrame::message(&self.user, text).encode()?;
        self.ws_tx.send(WsMessage::Text(frame)).await?;
        Ok(())
    }

    /// Pumps commands to the socket and decoded frames to the UI until
    /// either side goes away.
    pub async fn run(
        mut self,
        command_receiver: &mut mpsc::Receiver<ClientCommand>,
        event_sender: &mpsc::Sender<ClientEvent>,
    ) -> Result<()> {
        loop {
            tokio::select! {
                command = command_receiver.recv() => {
                    match command {
                        Some(command) => self.handle_command(command).await,
                        None => {
                            log::info!("UI closed, closing WebSocket");
                            if let Err(err) = self.ws_tx.send(WsMessage::Close(None)).await {
                                log::debug!("Close frame not sent: {err}");
                            }
                            break;
                        }
                    }
                }
                frame = self.ws_rx.next() => {
                    match frame {
                        Some(Ok(WsMessage::Text(text))) => handle_text(&text, event_sender).await,
                        Some(Ok(WsMessage::Ping(data))) => {
                            if let Err(err) = self.ws_tx.send(WsMessage::Pong(data)).await {
                                log::warn!("Failed to answer ping: {err}");
                            }
                        }
                        Some(Ok(WsMessage::Close(frame))) => {
                            log::info!("WebSocket closed: {frame:?}");
                            break;
                        }
                        Some(Ok(_)) => {}
                        Some(Err(err)) => {
                            log::warn!("WebSocket error: {err}");
                            return Err(err.into());
                        }
                        None => {
                            log::info!("WebSocket stream ended");
                            break;
                        }
                    }
                }
            }
        }

        Ok(())
    }

    async fn handle_command(&mut self, command: ClientCommand) {
        match command {
            ClientCommand::SendMessage(text) => {
                if let Err(err) = self.send(&text).await {
                    log::warn!("Failed to send message: {err}");
                }
            }
            ClientCommand::ClaimNickname(nickname) => {
                log::warn!(
                    "Already chatting as `{}`; ignoring claim for `{nickname}`",
                    self.user.name
                );
            }
        }
    }
}

async fn handle_text(text: &str, event_sender: &mpsc::Sender<ClientEvent>) {
    log::debug!("ws message: {text}");

    let event = match decode_inbound(text) {
        Ok(InboundFrame::Roster(names)) => ClientEvent::RosterUpdated(names),
        Ok(InboundFrame::History(messages)) => ClientEvent::HistoryReceived(messages),
        Ok(InboundFrame::Message(message)) => ClientEvent::MessageReceived(message),
        Err(err) => {
            log::warn!("Dropping malformed frame ({err}): {text}");
            return;
        }
    };

    if let Err(err) = event_sender.send(event).await {
        log::warn!("Failed to forward frame to UI: {err}");
    }
}
