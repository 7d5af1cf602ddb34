//! Reducer for the whole prelaunch page: maps discrete UI events onto the
//! carousel and form, and reports the side effects the shell must perform.

use std::time::Instant;

use shared::domain::{prelaunch_slides, Brand, EmailAddress, Slide};
use tracing::debug;

use crate::{
    carousel::{Carousel, CarouselError, CarouselInput, NavKey},
    waitlist::{SubmissionOutcome, WaitlistForm},
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageEvent {
    Carousel(CarouselInput),
    Key(NavKey),
    JoinWaitlistClicked,
    EmailEdited(String),
    SubmitClicked,
    CancelClicked,
    ReachOutClicked,
    SocialClicked,
    SubmissionFinished(SubmissionOutcome),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageEffect {
    SubmitEmail(EmailAddress),
    OpenUrl(String),
}

#[derive(Debug, Clone)]
pub struct PrelaunchPage {
    pub brand: Brand,
    slides: Vec<Slide>,
    pub carousel: Carousel,
    pub form: WaitlistForm,
}

impl PrelaunchPage {
    pub fn new(brand: Brand, slides: Vec<Slide>, now: Instant) -> Result<Self, CarouselError> {
        let carousel = Carousel::new(slides.len(), now)?;
        Ok(Self {
            brand,
            slides,
            carousel,
            form: WaitlistForm::new(),
        })
    }

    pub fn prelaunch(now: Instant) -> Result<Self, CarouselError> {
        Self::new(Brand::default(), prelaunch_slides(), now)
    }

    pub fn slides(&self) -> &[Slide] {
        &self.slides
    }

    pub fn active_slide(&self) -> &Slide {
        &self.slides[self.carousel.active()]
    }

    pub fn handle(&mut self, event: PageEvent, now: Instant) -> Option<PageEffect> {
        match event {
            PageEvent::Carousel(input) => {
                self.carousel.apply(input, now);
                None
            }
            PageEvent::Key(key) => {
                self.carousel.apply(key.input(), now);
                None
            }
            PageEvent::JoinWaitlistClicked => {
                self.form.open();
                None
            }
            PageEvent::EmailEdited(text) => {
                self.form.set_email(text);
                None
            }
            PageEvent::SubmitClicked => match self.form.begin_submit() {
                Ok(email) => Some(PageEffect::SubmitEmail(email)),
                Err(rejection) => {
                    debug!(%rejection, "waitlist submit blocked locally");
                    None
                }
            },
            PageEvent::CancelClicked => {
                self.form.cancel();
                None
            }
            PageEvent::ReachOutClicked => Some(PageEffect::OpenUrl(self.brand.mailto_link())),
            PageEvent::SocialClicked => Some(PageEffect::OpenUrl(self.brand.social_url.clone())),
            PageEvent::SubmissionFinished(outcome) => {
                self.form.complete(outcome);
                None
            }
        }
    }
}

#[cfg(test)]
#[path = "tests/page_tests.rs"]
mod tests;
