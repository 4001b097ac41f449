use super::types::{ChatMessage, User};

/// Events sent from the network task to the UI.
#[derive(Debug, Clone, PartialEq)]
pub enum ClientEvent {
    NicknameAccepted(User),
    /// The server already has a user with this nickname.
    NicknameRejected(String),
    /// The claim could not be completed (network error, malformed answer).
    ClaimFailed(String),
    RosterUpdated(Vec<String>),
    HistoryReceived(Vec<ChatMessage>),
    MessageReceived(ChatMessage),
}
