//! Small browser-only affordances: confirm dialogs and timed flash messages.
//!
//! TRADE-OFFS
//! ==========
//! Native builds have no window. `confirm` answers "no" there so nothing
//! destructive runs by accident, and flash messages simply stay put.

#[cfg(test)]
#[path = "browser_test.rs"]
mod browser_test;

use leptos::prelude::*;

/// How long the contact form's success message stays up.
pub const CONTACT_FLASH_MS: u32 = 5_000;
/// How long the comment success message stays up.
pub const COMMENT_FLASH_MS: u32 = 3_000;

/// Ask the user a yes/no question with `window.confirm`.
pub fn confirm(message: &str) -> bool {
    #[cfg(feature = "csr")]
    {
        web_sys::window()
            .and_then(|w| w.confirm_with_message(message).ok())
            .unwrap_or(false)
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = message;
        false
    }
}

/// Show `message` in `slot`, then clear it after `millis` unless something
/// else has replaced it in the meantime.
pub fn flash(slot: RwSignal<Option<String>>, message: &str, millis: u32) {
    slot.set(Some(message.to_owned()));
    #[cfg(feature = "csr")]
    {
        let shown = message.to_owned();
        leptos::task::spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(millis).await;
            clear_flash(slot, &shown);
        });
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = millis;
    }
}

/// Clear `slot` if it still shows `shown`. The page owning the slot may have
/// unmounted by now; a disposed slot is left alone.
pub fn clear_flash(slot: RwSignal<Option<String>>, shown: &str) {
    slot.try_update(|current| {
        if current.as_deref() == Some(shown) {
            *current = None;
        }
    });
}
