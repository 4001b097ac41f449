/// One line of the roster panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RosterEntry {
    pub label: String,
    pub is_self: bool,
}

/// One rendered chat message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageView {
    pub label: String,
    pub text: String,
    /// Formatted send time, absent when the message carried no timestamp.
    pub sent_at: Option<String>,
    pub is_self: bool,
}

impl MessageView {
    /// Caption shown above the text, e.g. `You, 14:05 03.02.2024`.
    pub fn caption(&self) -> String {
        match &self.sent_at {
            Some(sent_at) => format!("{}, {}", self.label, sent_at),
            None => self.label.clone(),
        }
    }
}

/// What the chat view draws on. `AppState` is the egui-backed one; tests use
/// a recording one.
pub trait RenderSurface {
    fn show_nickname_form(&mut self);
    fn remove_nickname_form(&mut self);
    /// Creates the roster panel and the chat form.
    fn show_chat(&mut self);
    /// Modal notice the user has to dismiss.
    fn alert(&mut self, message: String);
    fn clear_roster(&mut self);
    fn append_roster_entry(&mut self, entry: RosterEntry);
    fn append_message(&mut self, message: MessageView);
    fn scroll_to_latest(&mut self);
}
