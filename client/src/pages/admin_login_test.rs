use super::*;

#[test]
fn validate_login_input_trims_email() {
    assert_eq!(
        validate_login_input("  admin@aether.club ", "hunter2"),
        Ok(("admin@aether.club".to_owned(), "hunter2".to_owned()))
    );
}

#[test]
fn validate_login_input_keeps_password_verbatim() {
    assert_eq!(
        validate_login_input("a@b.c", " spaced pass "),
        Ok(("a@b.c".to_owned(), " spaced pass ".to_owned()))
    );
}

#[test]
fn validate_login_input_requires_both_fields() {
    assert_eq!(validate_login_input("", "pw"), Err("Enter your email and password."));
    assert_eq!(validate_login_input("a@b.c", "   "), Err("Enter your email and password."));
}

#[test]
fn validate_login_input_requires_at_sign() {
    assert_eq!(validate_login_input("admin", "pw"), Err("Enter a valid email address."));
}
