use super::*;

#[test]
fn login_failed_message_distinguishes_bad_credentials() {
    assert_eq!(login_failed_message(401), "Invalid credentials.");
    assert_eq!(login_failed_message(500), "Login failed: 500");
}

#[test]
fn register_failed_message_includes_status() {
    assert_eq!(register_failed_message(403), "Registration failed: 403");
}

#[test]
fn credentials_serialize_without_empty_invite_token() {
    let creds = Credentials {
        username: "alice".to_owned(),
        password: "hunter2".to_owned(),
        invite_token: None,
    };
    let json = serde_json::to_string(&creds).unwrap();
    assert!(!json.contains("invite_token"));

    let creds = Credentials { invite_token: Some("tok".to_owned()), ..creds };
    let json = serde_json::to_string(&creds).unwrap();
    assert!(json.contains("\"invite_token\":\"tok\""));
}
