use crate::common::time::format_timestamp;
use crate::common::{ChatMessage, ClientEvent, User};

use super::surface::{MessageView, RenderSurface, RosterEntry};

pub const SELF_LABEL: &str = "You";
pub const CONNECTION_ERROR_NOTICE: &str = "Server connection error!";

/// Turns client events into drawing calls.
#[derive(Debug, Default)]
pub struct ChatView {
    user: Option<User>,
}

impl ChatView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn apply(&mut self, event: ClientEvent, surface: &mut impl RenderSurface) {
        match event {
            ClientEvent::NicknameAccepted(user) => {
                self.user = Some(user);
                surface.remove_nickname_form();
                surface.show_chat();
            }
            ClientEvent::NicknameRejected(nickname) => {
                surface.alert(format!("Nickname \"{nickname}\" is taken!"));
            }
            ClientEvent::ClaimFailed(reason) => {
                log::debug!("Claim failed: {reason}");
                surface.alert(CONNECTION_ERROR_NOTICE.to_string());
            }
            ClientEvent::RosterUpdated(names) => self.render_roster(&names, surface),
            ClientEvent::HistoryReceived(messages) => {
                for message in &messages {
                    self.render_message(message, surface);
                }
            }
            ClientEvent::MessageReceived(message) => self.render_message(&message, surface),
        }
    }

    fn is_self(&self, name: &str) -> bool {
        self.user.as_ref().is_some_and(|user| user.name == name)
    }

    fn render_roster(&self, names: &[String], surface: &mut impl RenderSurface) {
        surface.clear_roster();
        for name in names {
            let is_self = self.is_self(name);
            let label = if is_self { SELF_LABEL } else { name.as_str() };
            surface.append_roster_entry(RosterEntry {
                label: label.to_string(),
                is_self,
            });
        }
    }

    fn render_message(&self, message: &ChatMessage, surface: &mut impl RenderSurface) {
        let is_self = self.is_self(&message.name);
        let label = if is_self { SELF_LABEL } else { message.name.as_str() };

        surface.append_message(MessageView {
            label: label.to_string(),
            text: message.text.clone(),
            sent_at: message.timestamp.and_then(format_timestamp),
            is_self,
        });
        surface.scroll_to_latest();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Records every call as a readable line.
    #[derive(Debug, Default)]
    pub struct RecordingSurface {
        pub calls: Vec<String>,
        pub nickname_form: bool,
        pub roster: Vec<RosterEntry>,
        pub messages: Vec<MessageView>,
        pub alerts: Vec<String>,
    }

    impl RenderSurface for RecordingSurface {
        fn show_nickname_form(&mut self) {
            self.nickname_form = true;
            self.calls.push("show_nickname_form".into());
        }
        fn remove_nickname_form(&mut self) {
            self.nickname_form = false;
            self.calls.push("remove_nickname_form".into());
        }
        fn show_chat(&mut self) {
            self.calls.push("show_chat".into());
        }
        fn alert(&mut self, message: String) {
            self.calls.push(format!("alert {message}"));
            self.alerts.push(message);
        }
        fn clear_roster(&mut self) {
            self.roster.clear();
            self.calls.push("clear_roster".into());
        }
        fn append_roster_entry(&mut self, entry: RosterEntry) {
            self.calls.push(format!("roster {}", entry.label));
            self.roster.push(entry);
        }
        fn append_message(&mut self, message: MessageView) {
            self.calls.push(format!("message {}", message.text));
            self.messages.push(message);
        }
        fn scroll_to_latest(&mut self) {
            self.calls.push("scroll".into());
        }
    }

    fn message(name: &str, text: &str, timestamp: Option<i64>) -> ChatMessage {
        ChatMessage {
            name: name.to_string(),
            text: text.to_string(),
            timestamp,
        }
    }

    fn accepted(name: &str) -> (ChatView, RecordingSurface) {
        let mut view = ChatView::new();
        let mut surface = RecordingSurface::default();
        surface.show_nickname_form();
        view.apply(ClientEvent::NicknameAccepted(User::new(name)), &mut surface);
        (view, surface)
    }

    #[test]
    fn accepted_nickname_swaps_form_for_chat() {
        let (view, surface) = accepted("Alice");
        assert_eq!(view.user.as_ref().map(|u| u.name.as_str()), Some("Alice"));
        assert!(!surface.nickname_form);
        assert_eq!(
            surface.calls,
            ["show_nickname_form", "remove_nickname_form", "show_chat"]
        );
    }

    #[test]
    fn rejected_nickname_keeps_form_and_alerts_once() {
        let mut view = ChatView::new();
        let mut surface = RecordingSurface::default();
        surface.show_nickname_form();

        view.apply(ClientEvent::NicknameRejected("Bob".into()), &mut surface);

        assert!(surface.nickname_form);
        assert!(view.user.is_none());
        assert_eq!(surface.alerts, ["Nickname \"Bob\" is taken!"]);
    }

    #[test]
    fn claim_failure_shows_connection_notice() {
        let mut view = ChatView::new();
        let mut surface = RecordingSurface::default();
        surface.show_nickname_form();

        view.apply(ClientEvent::ClaimFailed("refused".into()), &mut surface);

        assert!(surface.nickname_form);
        assert_eq!(surface.alerts, [CONNECTION_ERROR_NOTICE]);
    }

    #[test]
    fn roster_marks_self_and_replaces_previous_snapshot() {
        let (mut view, mut surface) = accepted("Alice");

        view.apply(
            ClientEvent::RosterUpdated(vec!["Bob".into(), "Alice".into(), "Carol".into()]),
            &mut surface,
        );
        view.apply(
            ClientEvent::RosterUpdated(vec!["Alice".into(), "Dave".into()]),
            &mut surface,
        );

        assert_eq!(
            surface.roster,
            [
                RosterEntry { label: "You".into(), is_self: true },
                RosterEntry { label: "Dave".into(), is_self: false },
            ]
        );
    }

    #[test]
    fn history_renders_in_order_and_scrolls_each_time() {
        let (mut view, mut surface) = accepted("Alice");
        surface.calls.clear();

        view.apply(
            ClientEvent::HistoryReceived(vec![
                message("Bob", "one", Some(1)),
                message("Alice", "two", Some(2)),
                message("Carol", "three", Some(3)),
            ]),
            &mut surface,
        );

        assert_eq!(
            surface.calls,
            [
                "message one",
                "scroll",
                "message two",
                "scroll",
                "message three",
                "scroll"
            ]
        );
    }

    #[test]
    fn self_authored_messages_are_labelled_you() {
        let (mut view, mut surface) = accepted("Alice");

        view.apply(
            ClientEvent::MessageReceived(message("Alice", "hi", Some(0))),
            &mut surface,
        );
        view.apply(
            ClientEvent::MessageReceived(message("Bob", "hey", Some(0))),
            &mut surface,
        );

        let [mine, theirs] = surface.messages.as_slice() else {
            panic!("expected two messages");
        };
        assert_eq!(mine.label, "You");
        assert!(mine.is_self);
        assert_eq!(theirs.label, "Bob");
        assert!(!theirs.is_self);
        assert!(theirs.caption().starts_with("Bob, "));
    }

    #[test]
    fn message_without_timestamp_has_bare_caption() {
        let (mut view, mut surface) = accepted("Alice");
        view.apply(
            ClientEvent::MessageReceived(message("Bob", "hey", None)),
            &mut surface,
        );
        assert_eq!(surface.messages[0].caption(), "Bob");
    }
}
