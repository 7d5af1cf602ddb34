use super::*;

fn open_form(email: &str) -> WaitlistForm {
    let mut form = WaitlistForm::new();
    form.open();
    form.set_email(email);
    form
}

#[test]
fn open_reveals_form_and_requests_focus_once() {
    let mut form = WaitlistForm::new();
    assert!(!form.is_visible());
    form.open();
    assert!(form.is_visible());
    assert_eq!(form.status(), SubmissionStatus::Idle);
    assert!(form.take_focus_request());
    assert!(!form.take_focus_request());
}

#[test]
fn empty_email_is_blocked_locally() {
    let mut form = open_form("   ");
    assert_eq!(
        form.begin_submit(),
        Err(SubmitRejection::Email(EmailError::Empty))
    );
    assert_eq!(form.status(), SubmissionStatus::Idle);
    assert_eq!(form.message(), Some("Please enter your email."));
}

#[test]
fn malformed_email_is_blocked_locally() {
    let mut form = open_form("someone@nowhere");
    assert_eq!(
        form.begin_submit(),
        Err(SubmitRejection::Email(EmailError::Invalid))
    );
    assert_eq!(form.status(), SubmissionStatus::Idle);
    assert_eq!(form.message(), Some("Please enter a valid email address."));
}

#[test]
fn editing_clears_stale_validation_message() {
    let mut form = open_form("");
    let _ = form.begin_submit();
    assert!(form.message().is_some());
    form.set_email("a");
    assert!(form.message().is_none());
}

#[test]
fn editing_after_completion_drops_previous_result() {
    let mut form = open_form("guest@example.com");
    form.begin_submit().expect("valid");
    form.complete(SubmissionOutcome::Accepted);
    form.set_email("friend@example.com");
    assert_eq!(form.status(), SubmissionStatus::Idle);
    assert!(form.message().is_none());

    form.begin_submit().expect("valid");
    form.complete(SubmissionOutcome::Failed { message: None });
    form.set_email("friend@example.org");
    assert_eq!(form.status(), SubmissionStatus::Idle);
    assert!(form.message().is_none());
}

#[test]
fn valid_submit_moves_to_sending_with_normalized_email() {
    let mut form = open_form(" Guest@Example.COM ");
    let email = form.begin_submit().expect("valid");
    assert_eq!(email.as_str(), "guest@example.com");
    assert_eq!(form.status(), SubmissionStatus::Sending);
    assert!(!form.can_submit());
    assert_eq!(form.submit_label(), "SENDING...");
}

#[test]
fn second_submit_while_sending_is_rejected() {
    let mut form = open_form("guest@example.com");
    form.begin_submit().expect("valid");
    assert_eq!(form.begin_submit(), Err(SubmitRejection::AlreadySending));
}

#[test]
fn field_and_cancel_are_locked_while_sending() {
    let mut form = open_form("guest@example.com");
    form.begin_submit().expect("valid");
    form.set_email("other@example.com");
    assert_eq!(form.email(), "guest@example.com");
    assert!(!form.cancel());
    assert!(form.is_visible());
}

#[test]
fn success_clears_field_and_keeps_form_open() {
    let mut form = open_form("guest@example.com");
    form.begin_submit().expect("valid");
    assert!(form.complete(SubmissionOutcome::Accepted));
    assert_eq!(form.status(), SubmissionStatus::Success);
    assert_eq!(form.email(), "");
    assert_eq!(form.message(), Some(SUCCESS_MESSAGE));
    assert!(form.is_visible());
    assert!(form.can_submit());
}

#[test]
fn failure_uses_server_message_or_fallback() {
    let mut form = open_form("guest@example.com");
    form.begin_submit().expect("valid");
    form.complete(SubmissionOutcome::Failed {
        message: Some("Invalid email".into()),
    });
    assert_eq!(form.status(), SubmissionStatus::Error);
    assert_eq!(form.message(), Some("Invalid email"));
    assert_eq!(form.email(), "guest@example.com");

    form.begin_submit().expect("valid");
    form.complete(SubmissionOutcome::Failed { message: None });
    assert_eq!(form.message(), Some(FALLBACK_ERROR_MESSAGE));
}

#[test]
fn completion_without_submission_is_ignored() {
    let mut form = open_form("guest@example.com");
    assert!(!form.complete(SubmissionOutcome::Accepted));
    assert_eq!(form.status(), SubmissionStatus::Idle);
}

#[test]
fn cancel_resets_everything() {
    let mut form = open_form("guest@example.com");
    form.begin_submit().expect("valid");
    form.complete(SubmissionOutcome::Failed { message: None });
    assert!(form.cancel());
    assert!(!form.is_visible());
    assert_eq!(form.email(), "");
    assert_eq!(form.status(), SubmissionStatus::Idle);
    assert!(form.message().is_none());
}

#[test]
fn reopening_after_success_returns_to_idle() {
    let mut form = open_form("guest@example.com");
    form.begin_submit().expect("valid");
    form.complete(SubmissionOutcome::Accepted);
    form.open();
    assert_eq!(form.status(), SubmissionStatus::Idle);
    assert!(form.message().is_none());
}
