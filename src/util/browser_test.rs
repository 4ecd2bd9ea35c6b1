use super::*;

#[test]
fn clear_flash_clears_matching_message() {
    let slot = RwSignal::new(Some("Comment posted!".to_owned()));
    clear_flash(slot, "Comment posted!");
    assert_eq!(slot.get_untracked(), None);
}

#[test]
fn clear_flash_keeps_newer_message() {
    let slot = RwSignal::new(Some("Message sent".to_owned()));
    clear_flash(slot, "Comment posted!");
    assert_eq!(slot.get_untracked().as_deref(), Some("Message sent"));
}

#[test]
fn clear_flash_after_page_unmounted_is_silent() {
    let owner = Owner::new();
    let slot = owner.with(|| RwSignal::new(Some("Comment posted!".to_owned())));
    owner.cleanup();
    clear_flash(slot, "Comment posted!");
    assert_eq!(slot.try_get_untracked(), None);
}

#[cfg(not(feature = "csr"))]
#[test]
fn confirm_is_no_without_a_window() {
    assert!(!confirm("Delete this project?"));
}

#[cfg(not(feature = "csr"))]
#[test]
fn flash_shows_message_immediately() {
    let slot = RwSignal::new(None);
    flash(slot, "Comment posted!", COMMENT_FLASH_MS);
    assert_eq!(slot.get_untracked().as_deref(), Some("Comment posted!"));
}
