use super::*;

#[test]
fn response_for_current_post_is_wanted() {
    let current = RwSignal::new("a".to_owned());
    assert!(still_wanted(current.into(), "a"));
}

#[test]
fn response_after_navigating_to_another_post_is_dropped() {
    let current = RwSignal::new("a".to_owned());
    let post_id: Signal<String> = current.into();
    current.set("b".to_owned());
    assert!(!still_wanted(post_id, "a"));
    assert!(still_wanted(post_id, "b"));
}

#[test]
fn response_after_page_unmounted_is_dropped() {
    let owner = Owner::new();
    let post_id: Signal<String> = owner.with(|| RwSignal::new("a".to_owned()).into());
    owner.cleanup();
    assert!(!still_wanted(post_id, "a"));
}
