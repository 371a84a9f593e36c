//! User Notifications
//!
//! Blocking messages that need the user's attention.

/// Something that can put a message in front of the user
pub trait Notifier {
    fn notify(&self, message: &str);
}

/// `window.alert`, falling back to the console when there is no window
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserNotifier;

impl Notifier for BrowserNotifier {
    fn notify(&self, message: &str) {
        let shown = web_sys::window()
            .map(|window| window.alert_with_message(message).is_ok())
            .unwrap_or(false);
        if !shown {
            log::warn!("[Notify] {}", message);
        }
    }
}
