use super::*;

#[test]
fn submission_fields_keep_form_order() {
    let submission = ContactSubmission {
        name: "Ada".to_owned(),
        email: "ada@example.com".to_owned(),
        message: "Hello".to_owned(),
    };

    let fields = submission.fields();
    assert_eq!(fields[0], ("name", "Ada"));
    assert_eq!(fields[1], ("email", "ada@example.com"));
    assert_eq!(fields[2], ("message", "Hello"));
}

#[test]
fn default_submission_is_empty() {
    let submission = ContactSubmission::default();
    assert!(submission.fields().iter().all(|(_, value)| value.is_empty()));
}
