/// Commands sent from the UI to the network task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClientCommand {
    /// Claim a nickname. Ignored once a nickname has been accepted.
    ClaimNickname(String),
    /// Send a chat line. Ignored until a nickname has been accepted.
    SendMessage(String),
}
