use super::*;
use crate::waitlist::SUCCESS_MESSAGE;
use shared::domain::SubmissionStatus;
use std::time::Duration;

fn page() -> (PrelaunchPage, Instant) {
    let start = Instant::now();
    (PrelaunchPage::prelaunch(start).expect("page"), start)
}

#[test]
fn page_starts_on_first_slide_with_form_hidden() {
    let (page, _) = page();
    assert_eq!(page.slides().len(), 4);
    assert_eq!(page.active_slide().alt, "Photobooth setup preview 1");
    assert!(!page.form.is_visible());
}

#[test]
fn page_without_slides_is_rejected() {
    assert!(PrelaunchPage::new(Brand::default(), Vec::new(), Instant::now()).is_err());
}

#[test]
fn keys_and_dots_move_the_carousel() {
    let (mut page, start) = page();
    assert_eq!(page.handle(PageEvent::Key(NavKey::ArrowLeft), start), None);
    assert_eq!(page.carousel.active(), 3);
    page.handle(
        PageEvent::Carousel(CarouselInput::Select(1)),
        start + Duration::from_secs(1),
    );
    assert_eq!(page.active_slide().alt, "Photobooth setup preview 2");
}

#[test]
fn full_waitlist_flow_emits_one_submit_effect() {
    let (mut page, now) = page();
    page.handle(PageEvent::JoinWaitlistClicked, now);
    assert!(page.form.is_visible());

    page.handle(PageEvent::EmailEdited("bad".into()), now);
    assert_eq!(page.handle(PageEvent::SubmitClicked, now), None);

    page.handle(PageEvent::EmailEdited("Guest@Example.com".into()), now);
    let effect = page.handle(PageEvent::SubmitClicked, now);
    let expected = EmailAddress::parse("guest@example.com").expect("email");
    assert_eq!(effect, Some(PageEffect::SubmitEmail(expected)));
    assert_eq!(page.handle(PageEvent::SubmitClicked, now), None);

    page.handle(
        PageEvent::SubmissionFinished(SubmissionOutcome::Accepted),
        now,
    );
    assert_eq!(page.form.status(), SubmissionStatus::Success);
    assert_eq!(page.form.message(), Some(SUCCESS_MESSAGE));
}

#[test]
fn cancel_hides_and_resets_form() {
    let (mut page, now) = page();
    page.handle(PageEvent::JoinWaitlistClicked, now);
    page.handle(PageEvent::EmailEdited("guest@example.com".into()), now);
    page.handle(PageEvent::CancelClicked, now);
    assert!(!page.form.is_visible());
    assert_eq!(page.form.email(), "");
}

#[test]
fn contact_links_become_open_url_effects() {
    let (mut page, now) = page();
    assert_eq!(
        page.handle(PageEvent::ReachOutClicked, now),
        Some(PageEffect::OpenUrl("mailto:hello@pictura.com".into()))
    );
    assert_eq!(
        page.handle(PageEvent::SocialClicked, now),
        Some(PageEffect::OpenUrl("https://instagram.com/".into()))
    );
}
