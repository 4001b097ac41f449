pub mod client;
pub mod nickname;
pub mod session;

pub use client::ChatClient;
pub use nickname::NicknameClaimer;
pub use session::ChatSession;
