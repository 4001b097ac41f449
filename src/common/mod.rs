pub mod commands;
pub mod events;
pub mod protocol;
pub mod time;
pub mod types;

pub use commands::ClientCommand;
pub use events::ClientEvent;
pub use types::{ChatMessage, User};
