use termfolio_core::theme::Theme;

use super::Notifier;
use crate::events::UiEvent;
use crate::runtime::UiEventSender;

/// Delivers theme changes back to the reducer through the runtime inbox.
pub struct InboxNotifier {
    inbox: UiEventSender,
}

impl InboxNotifier {
    pub fn new(inbox: UiEventSender) -> Self {
        Self { inbox }
    }
}

impl Notifier for InboxNotifier {
    fn theme_changed(&self, theme: Theme) {
        let _ = self.inbox.send(UiEvent::ThemeChanged(theme));
    }
}

#[cfg(test)]
mod tests {
    use tokio::sync::mpsc;

    use super::*;

    #[test]
    fn test_theme_change_reaches_inbox() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        InboxNotifier::new(tx).theme_changed(Theme::Cyan);
        assert_eq!(rx.try_recv().unwrap(), UiEvent::ThemeChanged(Theme::Cyan));
    }
}
