use super::*;

#[test]
fn validate_login_trims_username_and_keeps_password() {
    assert_eq!(
        validate_login("  admin  ", " secret "),
        Ok(("admin".to_owned(), " secret ".to_owned()))
    );
}

#[test]
fn validate_login_requires_both_fields() {
    assert_eq!(validate_login("   ", "secret1"), Err("Enter a username."));
    assert_eq!(validate_login("admin", ""), Err("Enter a password."));
}

#[test]
fn validate_login_username_length_bounds() {
    assert_eq!(validate_login("ab", "secret1"), Err("Username must be 3 to 50 characters."));
    assert!(validate_login("abc", "secret1").is_ok());
    assert!(validate_login(&"a".repeat(50), "secret1").is_ok());
    assert_eq!(
        validate_login(&"a".repeat(51), "secret1"),
        Err("Username must be 3 to 50 characters.")
    );
}

#[test]
fn validate_login_counts_characters_not_bytes() {
    assert!(validate_login("管理员", "secret1").is_ok());
}

#[test]
fn validate_login_password_minimum() {
    assert_eq!(validate_login("admin", "12345"), Err("Password must be at least 6 characters."));
    assert!(validate_login("admin", "123456").is_ok());
}
