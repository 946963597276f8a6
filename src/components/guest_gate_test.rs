use super::*;

#[test]
fn renders_only_when_both_tokens_are_absent() {
    assert!(should_render_guest(None, None));
}

#[test]
fn any_token_suppresses_rendering() {
    assert!(!should_render_guest(Some("xyz"), None));
    assert!(!should_render_guest(None, Some("abc")));
    assert!(!should_render_guest(Some("xyz"), Some("abc")));
}
