use super::*;

#[test]
fn validate_register_input_trims_username_and_email() {
    assert_eq!(
        validate_register_input(" ana ", "pw", " ana@example.com "),
        Ok(RegisterInput {
            username: "ana".to_owned(),
            password: "pw".to_owned(),
            email: "ana@example.com".to_owned(),
        })
    );
}

#[test]
fn validate_register_input_requires_all_fields() {
    assert_eq!(validate_register_input("", "pw", "a@b.c"), Err(MISSING_FIELDS));
    assert_eq!(validate_register_input("ana", "", "a@b.c"), Err(MISSING_FIELDS));
    assert_eq!(validate_register_input("ana", "pw", "  "), Err(MISSING_FIELDS));
}

#[test]
fn validate_register_input_rejects_malformed_email() {
    for email in ["ana", "@example.com", "ana@", "a@b@c"] {
        assert_eq!(validate_register_input("ana", "pw", email), Err(INVALID_EMAIL), "{email}");
    }
}
