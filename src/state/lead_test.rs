use super::*;

fn filled() -> LeadForm {
    let mut form = LeadForm::default();
    form.update_field(LeadField::Name, "Ana");
    form.update_field(LeadField::Email, "ana@example.com");
    form
}

// =============================================================
// update_field
// =============================================================

#[test]
fn lead_form_default_is_empty_and_unsubmitted() {
    let form = LeadForm::default();
    assert!(form.name.is_empty());
    assert!(form.email.is_empty());
    assert!(form.member_number.is_empty());
    assert!(!form.is_submitted());
}

#[test]
fn update_field_writes_without_validation() {
    let mut form = LeadForm::default();
    assert!(form.update_field(LeadField::Email, "not-an-email"));
    assert!(form.update_field(LeadField::MemberNumber, "  42 "));
    assert_eq!(form.email, "not-an-email");
    assert_eq!(form.member_number, "  42 ");
}

// =============================================================
// submit
// =============================================================

#[test]
fn submit_without_name_fails_and_keeps_fields() {
    let mut form = LeadForm::default();
    form.update_field(LeadField::Email, "ana@example.com");
    let err = form.submit().unwrap_err();
    assert_eq!(err, LeadFormError::MissingField("name"));
    assert_eq!(err.notice(), MISSING_FIELDS_NOTICE);
    assert!(!form.is_submitted());
    assert_eq!(form.email, "ana@example.com");
}

#[test]
fn submit_without_email_fails() {
    let mut form = LeadForm::default();
    form.update_field(LeadField::Name, "Ana");
    assert_eq!(form.submit(), Err(LeadFormError::MissingField("email")));
    assert!(!form.is_submitted());
}

#[test]
fn submit_accepts_whitespace_only_values() {
    let mut form = LeadForm::default();
    form.update_field(LeadField::Name, " ");
    form.update_field(LeadField::Email, " ");
    assert!(form.submit().is_ok());
    assert!(form.is_submitted());
}

#[test]
fn submit_does_not_require_member_number() {
    let mut form = filled();
    assert!(form.submit().is_ok());
    assert!(form.is_submitted());
    assert!(form.member_number.is_empty());
}

#[test]
fn submitted_form_is_frozen() {
    let mut form = filled();
    form.update_field(LeadField::MemberNumber, "A-17");
    form.submit().unwrap();

    assert!(!form.update_field(LeadField::Name, ""));
    assert!(!form.update_field(LeadField::MemberNumber, "other"));
    assert_eq!(form.name, "Ana");
    assert_eq!(form.member_number, "A-17");
    assert!(form.is_submitted());
}

#[test]
fn resubmit_is_noop() {
    let mut form = filled();
    form.submit().unwrap();
    assert!(form.submit().is_ok());
    assert!(form.is_submitted());
}

#[test]
fn field_labels_are_distinct() {
    assert_ne!(LeadField::Name.label(), LeadField::Email.label());
    assert!(LeadField::MemberNumber.label().contains("opcional"));
}
