//! User Notifications
//!
//! Blocking browser dialog used for validation warnings.

use web_sys::console;

/// Raise a blocking alert; the message lands on the console if the dialog
/// cannot be shown.
pub fn blocking_warn(message: &str) {
    let shown = web_sys::window()
        .map(|window| window.alert_with_message(message).is_ok())
        .unwrap_or(false);
    if !shown {
        console::warn_1(&format!("[NOTIFY] {}", message).into());
    }
}
