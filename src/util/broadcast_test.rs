use super::*;

#[test]
fn login_message_in_unfocused_tab_forces_reload() {
    assert!(should_force_reload(Some("login"), false));
}

#[test]
fn login_message_in_focused_tab_is_ignored() {
    // The focused tab is the one that just logged in; it navigates itself.
    assert!(!should_force_reload(Some("login"), true));
}

#[test]
fn unrecognized_payloads_never_navigate() {
    assert!(!should_force_reload(Some("logout"), false));
    assert!(!should_force_reload(Some("LOGIN"), false));
    assert!(!should_force_reload(Some(""), false));
    // Non-string payloads (numbers, null, objects) arrive as `None`.
    assert!(!should_force_reload(None, false));
    assert!(!should_force_reload(None, true));
}

#[test]
fn channel_constants_match_the_wire_contract() {
    assert_eq!(CHANNEL_NAME, "dim");
    assert_eq!(LOGIN_MESSAGE, "login");
}
