use super::*;

#[test]
fn validate_register_input_trims_and_requires_credentials() {
    let creds = validate_register_input(" bob ", " pw ", "").unwrap();
    assert_eq!(creds.username, "bob");
    assert_eq!(creds.password, "pw");
    assert_eq!(creds.invite_token, None);

    assert_eq!(
        validate_register_input("  ", "pw", ""),
        Err("Enter both username and password.")
    );
}

#[test]
fn validate_register_input_folds_blank_invite_to_none() {
    let creds = validate_register_input("bob", "pw", "   ").unwrap();
    assert_eq!(creds.invite_token, None);

    let creds = validate_register_input("bob", "pw", " tok-1 ").unwrap();
    assert_eq!(creds.invite_token.as_deref(), Some("tok-1"));
}
