use super::surface::{MessageView, RenderSurface, RosterEntry};

/// Which form currently owns the central panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Nickname,
    Chat,
}

/// Local UI state, drawn by the components each frame.
pub struct AppState {
    pub screen: Screen,
    pub nickname_input: String,
    /// Set while a claim is in flight; the form cannot be resubmitted.
    pub claim_pending: bool,
    pub input_text: String,
    pub roster: Vec<RosterEntry>,
    pub messages: Vec<MessageView>,
    pub alert: Option<String>,
    pub scroll_to_latest: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            screen: Screen::Nickname,
            nickname_input: String::new(),
            claim_pending: false,
            input_text: String::new(),
            roster: Vec::new(),
            messages: Vec::new(),
            alert: None,
            scroll_to_latest: false,
        }
    }

    /// Takes the nickname to claim, if the form may be submitted.
    pub fn submit_nickname(&mut self) -> Option<String> {
        // Required field only; the value is claimed exactly as typed.
        if self.claim_pending || self.screen != Screen::Nickname || self.nickname_input.is_empty() {
            return None;
        }
        self.claim_pending = true;
        Some(self.nickname_input.clone())
    }

    /// Takes the typed message and clears the field in the same step.
    pub fn submit_message(&mut self) -> Option<String> {
        if self.screen != Screen::Chat || self.input_text.is_empty() {
            return None;
        }
        Some(std::mem::take(&mut self.input_text))
    }

    pub fn dismiss_alert(&mut self) {
        self.alert = None;
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl RenderSurface for AppState {
    fn show_nickname_form(&mut self) {
        self.screen = Screen::Nickname;
        self.claim_pending = false;
    }

    fn remove_nickname_form(&mut self) {
        self.nickname_input.clear();
        self.claim_pending = false;
    }

    fn show_chat(&mut self) {
        self.screen = Screen::Chat;
    }

    fn alert(&mut self, message: String) {
        // A finished claim always ends in an alert or a screen swap.
        self.claim_pending = false;
        self.alert = Some(message);
    }

    fn clear_roster(&mut self) {
        self.roster.clear();
    }

    fn append_roster_entry(&mut self, entry: RosterEntry) {
        self.roster.push(entry);
    }

    fn append_message(&mut self, message: MessageView) {
        self.messages.push(message);
    }

    fn scroll_to_latest(&mut self) {
        self.scroll_to_latest = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::{ClientEvent, User};
    use crate::ui::view::ChatView;

    #[test]
    fn empty_nickname_is_not_submitted() {
        let mut state = AppState::new();
        assert_eq!(state.submit_nickname(), None);
        assert!(!state.claim_pending);
    }

    #[test]
    fn nickname_is_submitted_as_typed() {
        let mut state = AppState::new();
        state.nickname_input = "  Alice ".into();
        assert_eq!(state.submit_nickname().as_deref(), Some("  Alice "));
        assert!(state.claim_pending);

        let mut state = AppState::new();
        state.nickname_input = "   ".into();
        assert_eq!(state.submit_nickname().as_deref(), Some("   "));
    }

    #[test]
    fn only_one_claim_is_outstanding() {
        let mut state = AppState::new();
        state.nickname_input = "Alice".into();
        assert_eq!(state.submit_nickname().as_deref(), Some("Alice"));
        assert_eq!(state.submit_nickname(), None);

        state.alert("Nickname \"Alice\" is taken!".into());
        assert!(!state.claim_pending);
        assert_eq!(state.screen, Screen::Nickname);

        state.nickname_input = "Alice2".into();
        assert_eq!(state.submit_nickname().as_deref(), Some("Alice2"));
    }

    #[test]
    fn sending_clears_the_input() {
        let mut state = AppState::new();
        state.show_chat();
        state.input_text = "hi".into();

        assert_eq!(state.submit_message().as_deref(), Some("hi"));
        assert!(state.input_text.is_empty());
        assert_eq!(state.submit_message(), None);
    }

    #[test]
    fn view_drives_app_state() {
        let mut state = AppState::new();
        let mut view = ChatView::new();
        state.nickname_input = "Alice".into();
        state.submit_nickname();

        view.apply(ClientEvent::NicknameAccepted(User::new("Alice")), &mut state);
        assert_eq!(state.screen, Screen::Chat);
        assert!(state.nickname_input.is_empty());

        view.apply(ClientEvent::RosterUpdated(vec!["Bob".into()]), &mut state);
        view.apply(ClientEvent::RosterUpdated(vec!["Alice".into()]), &mut state);
        assert_eq!(
            state.roster,
            [RosterEntry { label: "You".into(), is_self: true }]
        );
    }
}
