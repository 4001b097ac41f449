pub mod app;
pub mod components;
pub mod state;
pub mod surface;
pub mod view;

pub use app::ChatApp;
pub use state::AppState;
pub use surface::{MessageView, RenderSurface, RosterEntry};
pub use view::ChatView;
