use super::*;

#[test]
fn report_passes_success_through() {
    assert_eq!(report("ctx", Ok::<_, UiError>(3)), Some(3));
}

#[test]
fn report_swallows_errors() {
    assert_eq!(report::<()>("ctx", Err(UiError::MissingElement("email-input".to_owned()))), None);
}

#[test]
fn messages_name_the_missing_element() {
    assert_eq!(UiError::MissingElement("copydisclaimer".to_owned()).to_string(), "element #copydisclaimer not found");
    assert_eq!(UiError::InvalidEmail.to_string(), "invalid email address");
}
