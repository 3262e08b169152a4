use super::*;

#[test]
fn from_form_trims_input() {
    let user = SessionUser::from_form("  Ada Lovelace ", " ada@example.com ", 42).expect("valid");
    assert_eq!(user.name, "Ada Lovelace");
    assert_eq!(user.email, "ada@example.com");
    assert_eq!(user.signed_in_at, 42);
}

#[test]
fn from_form_requires_name_then_email() {
    assert_eq!(SessionUser::from_form(" ", "", 0), Err(ValidationError::Required("Name")));
    assert_eq!(SessionUser::from_form("Ada", "", 0), Err(ValidationError::Required("Email")));
    assert_eq!(SessionUser::from_form("Ada", "ada", 0), Err(ValidationError::InvalidEmail("Email")));
}

#[test]
fn initials_use_first_two_words() {
    let user = SessionUser::from_form("grace brewster hopper", "g@h.io", 0).expect("valid");
    assert_eq!(user.initials(), "GB");
}

#[test]
fn initials_fall_back_for_empty_name() {
    let user = SessionUser { name: String::new(), email: String::new(), signed_in_at: 0 };
    assert_eq!(user.initials(), "?");
}

#[test]
fn session_user_json_has_no_secret_fields() {
    let user = SessionUser::from_form("Ada", "ada@example.com", 1).expect("valid");
    let value = serde_json::to_value(&user).expect("encode");
    let mut keys: Vec<&String> = value.as_object().expect("object").keys().collect();
    keys.sort();
    assert_eq!(keys, vec!["email", "name", "signed_in_at"]);
}

#[test]
fn sign_in_and_out_update_state() {
    let mut state = SessionState::default();
    let user = SessionUser::from_form("Ada", "ada@example.com", 1).expect("valid");
    state.sign_in(user.clone());
    assert_eq!(state.user, Some(user));
    state.sign_out();
    assert_eq!(state.user, None);
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn load_outside_browser_has_no_user() {
    assert_eq!(SessionState::load().user, None);
}

#[test]
fn session_key_is_stable() {
    assert_eq!(SESSION_KEY, "adminboard_user");
}
