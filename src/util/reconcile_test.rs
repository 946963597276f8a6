use super::*;

fn inputs<'a>(
    cookie_token: Option<&'a str>,
    store_token: Option<&'a str>,
    logged_in: bool,
    error: Option<&'a str>,
) -> ReconcileInputs<'a> {
    ReconcileInputs { cookie_token, store_token, logged_in, error }
}

#[test]
fn unauthenticated_state_is_a_no_op() {
    let plan = reconcile(inputs(None, None, false, None));
    assert_eq!(plan, ReconcilePlan::default());
}

#[test]
fn fresh_login_persists_store_token_and_navigates_once() {
    let plan = reconcile(inputs(None, Some("abc"), true, None));
    assert_eq!(plan.adopt, None);
    assert_eq!(plan.persist.as_deref(), Some("abc"));
    assert!(plan.navigate_home);
}

#[test]
fn login_error_suppresses_persistence() {
    let plan = reconcile(inputs(None, Some("abc"), true, Some("server exploded")));
    assert_eq!(plan.persist, None);
    assert!(!plan.navigate_home);
}

#[test]
fn not_logged_in_flag_suppresses_persistence() {
    let plan = reconcile(inputs(None, Some("abc"), false, None));
    assert_eq!(plan.persist, None);
    assert!(!plan.navigate_home);
}

#[test]
fn cookie_is_adopted_regardless_of_store_state() {
    // Empty store: adopt only, no navigation until the store converges.
    let plan = reconcile(inputs(Some("xyz"), None, false, None));
    assert_eq!(plan.adopt.as_deref(), Some("xyz"));
    assert_eq!(plan.persist, None);
    assert!(!plan.navigate_home);

    // Populated store: still adopted (cookie is the durable source).
    let plan = reconcile(inputs(Some("xyz"), Some("xyz"), true, None));
    assert_eq!(plan.adopt.as_deref(), Some("xyz"));
}

#[test]
fn cookie_is_adopted_even_alongside_a_login_error() {
    // An error blocks persistence but never clears an existing cookie.
    let plan = reconcile(inputs(Some("xyz"), None, false, Some("boom")));
    assert_eq!(plan.adopt.as_deref(), Some("xyz"));
    assert_eq!(plan.persist, None);
}

#[test]
fn steady_state_navigates_without_rewriting_cookie() {
    let plan = reconcile(inputs(Some("xyz"), Some("xyz"), true, None));
    assert_eq!(plan.persist, None);
    assert!(plan.navigate_home);
}

#[test]
fn cookie_presence_blocks_the_fresh_login_write() {
    // Even with a different store token, an existing cookie means the
    // session was already persisted; the expiry must not be re-stamped.
    let plan = reconcile(inputs(Some("old"), Some("new"), true, None));
    assert_eq!(plan.persist, None);
    assert!(plan.navigate_home);
    assert_eq!(plan.adopt.as_deref(), Some("old"));
}

#[test]
fn passes_are_idempotent_for_stable_inputs() {
    let stable = inputs(Some("xyz"), Some("xyz"), true, None);
    assert_eq!(reconcile(stable), reconcile(stable));

    let unauth = inputs(None, None, false, None);
    assert_eq!(reconcile(unauth), reconcile(unauth));
}

#[test]
fn cookie_adoption_converges_to_steady_state() {
    // Pass 1: cookie present, store empty — adopt only.
    let first = reconcile(inputs(Some("xyz"), None, false, None));
    assert_eq!(first.adopt.as_deref(), Some("xyz"));
    assert!(!first.navigate_home);

    // Pass 2: the store now reflects the adopted token — navigate, no write.
    let second = reconcile(inputs(Some("xyz"), Some("xyz"), true, None));
    assert_eq!(second.persist, None);
    assert!(second.navigate_home);
}
