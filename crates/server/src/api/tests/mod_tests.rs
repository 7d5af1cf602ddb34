use super::*;
use crate::notifier::testing::{FailingNotifier, RecordingNotifier};

fn account() -> MailAccount {
    MailAccount {
        user: "relay@pictura.com".into(),
        password: "app-password".into(),
    }
}

fn context(notifier: Arc<dyn Notifier>, account: Option<MailAccount>) -> RelayContext {
    RelayContext {
        mail: MailSettings {
            sender_name: "Pictura Waitlist".into(),
            account,
            waitlist_to: None,
        },
        notifier,
    }
}

#[test]
fn empty_body_reads_as_missing_email() {
    assert!(matches!(parse_submission(b""), Err(RelayError::MissingEmail)));
    assert!(matches!(parse_submission(b"  \n"), Err(RelayError::MissingEmail)));
    assert!(matches!(parse_submission(b"{}"), Err(RelayError::MissingEmail)));
}

#[test]
fn non_string_or_empty_email_is_missing() {
    for body in [
        r#"{"email": 42}"#,
        r#"{"email": null}"#,
        r#"{"email": ["a@b.co"]}"#,
        r#"{"email": ""}"#,
    ] {
        let err = parse_submission(body.as_bytes()).expect_err(body);
        assert!(matches!(err, RelayError::MissingEmail), "{body}");
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
    }
}

#[test]
fn malformed_json_is_rejected_as_bad_request() {
    for body in ["{not json", "[]", "\"a@b.co\"", "null"] {
        let err = parse_submission(body.as_bytes()).expect_err(body);
        assert!(matches!(err, RelayError::MalformedBody), "{body}");
        assert_eq!(err.public_message(), "Invalid request body");
    }
}

#[test]
fn whitespace_or_patternless_email_is_invalid() {
    for body in [r#"{"email": "   "}"#, r#"{"email": "nope@nodot"}"#] {
        let err = parse_submission(body.as_bytes()).expect_err(body);
        assert!(matches!(err, RelayError::InvalidEmail), "{body}");
        assert_eq!(err.public_message(), "Invalid email");
    }
}

#[tokio::test]
async fn normalizes_submitted_email_into_reply_to() {
    let notifier = Arc::new(RecordingNotifier::default());
    let ctx = context(notifier.clone(), Some(account()));

    let signup = submit_waitlist(&ctx, br#"{ "email": " User@Example.com " }"#)
        .await
        .expect("relayed");
    assert_eq!(signup.as_str(), "user@example.com");

    let sent = notifier.sent();
    assert_eq!(sent.len(), 1);
    let (used_account, message) = &sent[0];
    assert_eq!(used_account, &account());
    assert_eq!(message.reply_to, "user@example.com");
    assert_eq!(message.to, "relay@pictura.com");
    assert_eq!(message.from, "Pictura Waitlist <relay@pictura.com>");
    assert_eq!(message.text, "New waitlist signup: user@example.com");
}

#[tokio::test]
async fn configured_recipient_overrides_account_identity() {
    let notifier = Arc::new(RecordingNotifier::default());
    let mut ctx = context(notifier.clone(), Some(account()));
    ctx.mail.waitlist_to = Some("team@pictura.com".into());

    submit_waitlist(&ctx, br#"{"email":"a@b.co"}"#)
        .await
        .expect("relayed");
    assert_eq!(notifier.sent()[0].1.to, "team@pictura.com");
}

#[tokio::test]
async fn missing_account_is_a_configuration_error_without_sending() {
    let notifier = Arc::new(RecordingNotifier::default());
    let ctx = context(notifier.clone(), None);

    let err = submit_waitlist(&ctx, br#"{"email":"a@b.co"}"#)
        .await
        .expect_err("should fail");
    assert!(matches!(err, RelayError::MissingConfiguration));
    assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert!(notifier.sent().is_empty());
}

#[tokio::test]
async fn validation_runs_before_configuration_check() {
    let ctx = context(Arc::new(RecordingNotifier::default()), None);
    let err = submit_waitlist(&ctx, br#"{"email":"bad"}"#)
        .await
        .expect_err("should fail");
    assert!(matches!(err, RelayError::InvalidEmail));
}

#[tokio::test]
async fn send_failure_collapses_to_generic_message() {
    let ctx = context(Arc::new(FailingNotifier), Some(account()));
    let err = submit_waitlist(&ctx, br#"{"email":"a@b.co"}"#)
        .await
        .expect_err("should fail");
    assert!(matches!(err, RelayError::SendFailed(_)));
    assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(err.public_message(), SEND_FAILED_MESSAGE);
    assert!(!err.public_message().contains("secret-password"));
}
