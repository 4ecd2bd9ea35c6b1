use super::*;

#[test]
fn starts_loading() {
    let state = Loadable::<Vec<u8>>::default();
    assert!(state.loading);
    assert!(!state.is_empty());
    assert!(state.items().is_empty());
}

#[test]
fn settle_ok_replaces_data() {
    let mut state = Loadable::default();
    state.settle(Ok(vec![1, 2]));
    state.begin();
    state.settle(Ok(vec![3]));
    assert_eq!(state.items(), vec![3]);
    assert!(!state.loading);
}

#[test]
fn settle_err_keeps_last_value() {
    let mut state = Loadable::default();
    state.settle(Ok(vec!["a"]));
    state.begin();
    state.settle(Err(ApiError::Api { status: 500, message: "Database down".to_owned() }));
    assert_eq!(state.error.as_deref(), Some("Database down"));
    assert_eq!(state.items(), vec!["a"]);
}

#[test]
fn begin_clears_error() {
    let mut state: Loadable<Vec<u8>> = Loadable::default();
    state.settle(Err(ApiError::Transport("offline".to_owned())));
    state.begin();
    assert_eq!(state.error, None);
}

#[test]
fn empty_only_after_successful_empty_load() {
    let mut state: Loadable<Vec<u8>> = Loadable::default();
    state.settle(Err(ApiError::Transport("offline".to_owned())));
    assert!(!state.is_empty());
    state.settle(Ok(Vec::new()));
    assert!(state.is_empty());
}

#[test]
fn reset_drops_previous_value() {
    let mut state = Loadable::default();
    state.settle(Ok("post a"));
    state.reset();
    assert_eq!(state, Loadable::default());
    assert!(state.loading);
}
