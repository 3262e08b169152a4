use super::*;

#[test]
fn escape_closes_dialog() {
    assert!(is_close_key("Escape"));
    assert!(is_close_key("Esc"));
}

#[test]
fn other_keys_do_not_close_dialog() {
    assert!(!is_close_key("Enter"));
    assert!(!is_close_key("escape"));
    assert!(!is_close_key(""));
}
