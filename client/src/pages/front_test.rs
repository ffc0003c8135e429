use super::*;

#[test]
fn validate_username_input_trims() {
    assert_eq!(validate_username_input("  alice  "), Ok("alice".to_owned()));
}

#[test]
fn validate_username_input_requires_value() {
    assert_eq!(validate_username_input(""), Err("Enter a username first."));
    assert_eq!(validate_username_input(" \t "), Err("Enter a username first."));
}

#[test]
fn landing_path_is_main_page() {
    assert_eq!(landing_path(), "/mainPage");
}
