use std::time::{Duration, Instant};

use client_core::{
    CarouselInput, NavKey, PageEffect, PageEvent, PrelaunchPage, SubmissionOutcome,
};
use crossbeam_channel::{Receiver, Sender};
use eframe::egui::{self, RichText};
use shared::domain::SubmissionStatus;

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::UiEvent;
use crate::controller::orchestration::dispatch_backend_command;
use crate::ui::theme::{
    apply_prelaunch_theme, ACCENT, ERROR_TEXT, FRAME_FILL, MUTED_TEXT, SUCCESS_TEXT,
};

const CAROUSEL_SIZE: egui::Vec2 = egui::vec2(520.0, 340.0);
const IDLE_REPAINT: Duration = Duration::from_millis(100);

pub struct PrelaunchApp {
    page: PrelaunchPage,
    cmd_tx: Sender<BackendCommand>,
    ui_rx: Receiver<UiEvent>,
    status_line: Option<String>,
}

impl PrelaunchApp {
    pub fn new(
        cc: &eframe::CreationContext<'_>,
        page: PrelaunchPage,
        cmd_tx: Sender<BackendCommand>,
        ui_rx: Receiver<UiEvent>,
    ) -> Self {
        apply_prelaunch_theme(&cc.egui_ctx);
        Self {
            page,
            cmd_tx,
            ui_rx,
            status_line: None,
        }
    }

    fn process_ui_events(&mut self, now: Instant) {
        while let Ok(event) = self.ui_rx.try_recv() {
            match event {
                UiEvent::SubmissionFinished(outcome) => {
                    self.page.handle(PageEvent::SubmissionFinished(outcome), now);
                }
                UiEvent::BackendFailed(message) => self.status_line = Some(message),
            }
        }
    }

    fn dispatch(&mut self, ctx: &egui::Context, event: PageEvent, now: Instant) {
        let Some(effect) = self.page.handle(event, now) else {
            return;
        };
        match effect {
            PageEffect::SubmitEmail(email) => {
                if let Err(message) =
                    dispatch_backend_command(&self.cmd_tx, BackendCommand::SubmitEmail { email })
                {
                    self.page.handle(
                        PageEvent::SubmissionFinished(SubmissionOutcome::Failed {
                            message: Some(message),
                        }),
                        now,
                    );
                }
            }
            PageEffect::OpenUrl(url) => ctx.open_url(egui::OpenUrl::new_tab(url)),
        }
    }

    fn show_brand(&self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.label(RichText::new("◼").size(30.0).color(ACCENT));
            ui.vertical(|ui| {
                ui.label(RichText::new(&self.page.brand.name).size(20.0).strong());
                ui.label(RichText::new(&self.page.brand.tagline).color(MUTED_TEXT));
            });
        });
    }

    /// Returns whether the pointer is over the carousel.
    fn show_carousel(&self, ui: &mut egui::Ui, events: &mut Vec<PageEvent>) -> bool {
        let carousel = &self.page.carousel;
        let active = carousel.active();
        let slide = self.page.active_slide();

        let media = ui.vertical(|ui| {
            egui::Frame::group(ui.style()).fill(FRAME_FILL).show(ui, |ui| {
                ui.set_min_size(CAROUSEL_SIZE);
                ui.vertical_centered(|ui| {
                    ui.add_space(CAROUSEL_SIZE.y * 0.35);
                    ui.label(RichText::new(&slide.alt).size(18.0).strong());
                    ui.label(RichText::new(&slide.image).monospace().color(MUTED_TEXT));
                    ui.label(
                        RichText::new(format!("{} / {}", active + 1, carousel.slide_count()))
                            .color(MUTED_TEXT),
                    );
                    if carousel.is_paused() {
                        ui.label(RichText::new("paused").small().color(MUTED_TEXT));
                    }
                });
            });

            ui.horizontal(|ui| {
                if ui.button("‹").on_hover_text("Previous image").clicked() {
                    events.push(PageEvent::Carousel(CarouselInput::Previous));
                }
                for idx in 0..carousel.slide_count() {
                    if ui
                        .selectable_label(idx == active, "●")
                        .on_hover_text(format!("Go to slide {}", idx + 1))
                        .clicked()
                    {
                        events.push(PageEvent::Carousel(CarouselInput::Select(idx)));
                    }
                }
                if ui.button("›").on_hover_text("Next image").clicked() {
                    events.push(PageEvent::Carousel(CarouselInput::Next));
                }
            });
        });

        ui.rect_contains_pointer(media.response.rect)
    }

    fn show_content(&self, ui: &mut egui::Ui, focus_email: bool, events: &mut Vec<PageEvent>) {
        let brand = &self.page.brand;
        for line in &brand.headline {
            ui.label(RichText::new(line).size(34.0).strong());
        }
        ui.add_space(12.0);
        for line in &brand.copy {
            ui.label(RichText::new(line).color(MUTED_TEXT));
        }
        ui.add_space(16.0);

        if self.page.form.is_visible() {
            self.show_waitlist_form(ui, focus_email, events);
        } else if ui
            .button(RichText::new("JOIN THE WAITLIST").strong())
            .clicked()
        {
            events.push(PageEvent::JoinWaitlistClicked);
        }

        ui.add_space(16.0);
        if ui.button("REACH OUT").clicked() {
            events.push(PageEvent::ReachOutClicked);
        }
        ui.horizontal(|ui| {
            ui.label(RichText::new("Get social").color(MUTED_TEXT));
            if ui.button("◎").on_hover_text("Instagram").clicked() {
                events.push(PageEvent::SocialClicked);
            }
        });
    }

    fn show_waitlist_form(&self, ui: &mut egui::Ui, focus_email: bool, events: &mut Vec<PageEvent>) {
        let form = &self.page.form;
        let sending = form.status().is_in_flight();

        let mut draft = form.email().to_string();
        let edit = ui.add_enabled(
            !sending,
            egui::TextEdit::singleline(&mut draft)
                .hint_text("you@example.com")
                .desired_width(280.0),
        );
        if focus_email {
            edit.request_focus();
        }
        if edit.changed() {
            events.push(PageEvent::EmailEdited(draft));
        }
        let enter_pressed = edit.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));

        ui.horizontal(|ui| {
            let submit = ui.add_enabled(form.can_submit(), egui::Button::new(form.submit_label()));
            if submit.clicked() || (enter_pressed && form.can_submit()) {
                events.push(PageEvent::SubmitClicked);
            }
            if sending {
                ui.spinner();
            }
            if ui
                .add_enabled(!sending, egui::Button::new("CANCEL"))
                .clicked()
            {
                events.push(PageEvent::CancelClicked);
            }
        });

        if let Some(message) = form.message() {
            let color = match form.status() {
                SubmissionStatus::Success => SUCCESS_TEXT,
                SubmissionStatus::Error => ERROR_TEXT,
                _ => MUTED_TEXT,
            };
            ui.colored_label(color, message);
        }
    }

    fn show_thumbnails(&self, ui: &mut egui::Ui, events: &mut Vec<PageEvent>) {
        let active = self.page.carousel.active();
        ui.horizontal_wrapped(|ui| {
            for (idx, slide) in self.page.slides().iter().enumerate() {
                if ui
                    .selectable_label(idx == active, RichText::new(&slide.alt).small())
                    .on_hover_text(format!("Select preview {}", idx + 1))
                    .clicked()
                {
                    events.push(PageEvent::Carousel(CarouselInput::Select(idx)));
                }
            }
        });
    }
}

fn keyboard_events(ctx: &egui::Context) -> Vec<PageEvent> {
    if ctx.wants_keyboard_input() {
        return Vec::new();
    }
    ctx.input(|i| {
        let mut events = Vec::new();
        if i.key_pressed(egui::Key::ArrowLeft) {
            events.push(PageEvent::Key(NavKey::ArrowLeft));
        }
        if i.key_pressed(egui::Key::ArrowRight) {
            events.push(PageEvent::Key(NavKey::ArrowRight));
        }
        events
    })
}

impl eframe::App for PrelaunchApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let now = Instant::now();
        self.process_ui_events(now);

        let mut events = keyboard_events(ctx);
        events.push(PageEvent::Carousel(CarouselInput::Tick));
        let focus_email = self.page.form.take_focus_request();

        if let Some(status) = &self.status_line {
            egui::TopBottomPanel::bottom("status_line").show(ctx, |ui| {
                ui.colored_label(ERROR_TEXT, status);
            });
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                self.show_brand(ui);
                ui.add_space(20.0);
                let mut hovered = false;
                ui.columns(2, |columns| {
                    hovered = self.show_carousel(&mut columns[0], &mut events);
                    self.show_content(&mut columns[1], focus_email, &mut events);
                });
                ui.add_space(16.0);
                self.show_thumbnails(ui, &mut events);

                if hovered != self.page.carousel.is_paused() {
                    events.push(PageEvent::Carousel(if hovered {
                        CarouselInput::PointerEntered
                    } else {
                        CarouselInput::PointerLeft
                    }));
                }
            });
        });

        for event in events {
            self.dispatch(ctx, event, now);
        }

        let repaint = self
            .page
            .carousel
            .time_until_next_tick(now)
            .map_or(IDLE_REPAINT, |due| due.min(IDLE_REPAINT));
        ctx.request_repaint_after(repaint);
    }
}
