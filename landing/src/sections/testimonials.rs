use super::SectionHeader;
use leptos::prelude::*;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use touchstone_core::carousel::{Carousel, CarouselEvent, TimerCommand};
use touchstone_core::config::SiteConfig;
use touchstone_core::content::{Avatar, ContentCatalog, Testimonial};
use touchstone_core::timers::TimerSlots;

type CarouselTimers = TimerSlots<IntervalHandle, TimeoutHandle>;

/// Runs [`Carousel`] transitions and turns its timer commands into real
/// `setInterval` / `setTimeout` registrations.
///
/// Browser counterpart of `touchstone_core::timeline::Timeline`: both keep
/// their handles in [`TimerSlots`], so teardown gating and single-flight
/// replacement behave the same in either host.
#[derive(Clone)]
struct CarouselDriver {
    state: RwSignal<Carousel>,
    timers: Arc<Mutex<CarouselTimers>>,
}

impl CarouselDriver {
    fn new(carousel: Carousel) -> Self {
        Self {
            state: RwSignal::new(carousel),
            timers: Arc::default(),
        }
    }

    fn timers(&self) -> MutexGuard<'_, CarouselTimers> {
        self.timers.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn mount(&self) {
        let commands = self.state.get_untracked().mount();
        self.run(commands);
    }

    fn dispatch(&self, event: CarouselEvent) {
        if self.timers().is_torn_down() {
            return;
        }
        if let Some(commands) = self.state.try_update(|carousel| carousel.handle(event)) {
            self.run(commands);
        }
    }

    fn run(&self, commands: Vec<TimerCommand>) {
        for command in commands {
            match command {
                TimerCommand::ScheduleAutoAdvance(period) => {
                    let driver = self.clone();
                    let scheduled = set_interval_with_handle(
                        move || driver.dispatch(CarouselEvent::AutoAdvance),
                        period,
                    );
                    match scheduled {
                        Ok(handle) => {
                            let stale = self.timers().arm_auto_advance(handle);
                            if let Some(stale) = stale {
                                stale.clear();
                            }
                        }
                        Err(e) => tracing::warn!(error = ?e, "could not arm carousel auto-advance"),
                    }
                }
                TimerCommand::CancelAutoAdvance => {
                    let armed = self.timers().cancel_auto_advance();
                    if let Some(handle) = armed {
                        handle.clear();
                    }
                }
                TimerCommand::ScheduleResume(delay) => {
                    let id = self.timers().reserve_resume();
                    let driver = self.clone();
                    let scheduled = set_timeout_with_handle(
                        move || {
                            driver.timers().take_resume(id);
                            driver.dispatch(CarouselEvent::Resume);
                        },
                        delay,
                    );
                    match scheduled {
                        Ok(handle) => {
                            let rejected = self.timers().arm_resume(id, handle);
                            if let Some(handle) = rejected {
                                handle.clear();
                            }
                        }
                        Err(e) => tracing::warn!(error = ?e, "could not arm carousel resume"),
                    }
                }
            }
        }
    }

    /// Clears every armed timer. Later callbacks and clicks are ignored.
    fn teardown(&self) {
        let (auto_advance, resumes) = self.timers().teardown();
        if let Some(handle) = auto_advance {
            handle.clear();
        }
        for handle in resumes {
            handle.clear();
        }
        tracing::debug!("carousel timers cleared");
    }
}

#[component]
pub fn Testimonials() -> impl IntoView {
    let catalog = expect_context::<ContentCatalog>();
    let config = expect_context::<SiteConfig>();
    let carousel = Carousel::new(catalog.testimonials.len(), config.carousel);
    let testimonials = StoredValue::new(catalog.testimonials);

    let driver = CarouselDriver::new(carousel);
    driver.mount();
    on_cleanup({
        let driver = driver.clone();
        move || driver.teardown()
    });

    let state = driver.state;
    let visible = move || {
        let carousel = state.get();
        testimonials.with_value(|all| {
            carousel
                .visible(all)
                .iter()
                .cloned()
                .map(|testimonial| view! { <TestimonialCard testimonial /> })
                .collect::<Vec<_>>()
        })
    };

    let previous = {
        let driver = driver.clone();
        move |_| driver.dispatch(CarouselEvent::Previous)
    };
    let next = move |_| driver.dispatch(CarouselEvent::Next);

    view! {
        <section class="testimonials">
            <div class="container">
                <SectionHeader id="testimonials" />
                <div class="testimonials-carousel">
                    <button
                        class="carousel-button carousel-button-prev"
                        aria-label="Previous testimonials"
                        disabled=move || !state.get().can_go_previous()
                        on:click=previous
                    >
                        "‹"
                    </button>
                    <div class="testimonials-grid">{visible}</div>
                    <button
                        class="carousel-button carousel-button-next"
                        aria-label="Next testimonials"
                        disabled=move || !state.get().can_go_next()
                        on:click=next
                    >
                        "›"
                    </button>
                </div>
            </div>
        </section>
    }
}

#[component]
fn TestimonialCard(testimonial: Testimonial) -> impl IntoView {
    let avatar = match testimonial.avatar() {
        Avatar::Logo(src) => view! {
            <img class="testimonial-logo" src=src.to_string() alt=testimonial.author.clone() />
        }
        .into_any(),
        Avatar::Image(src) => view! {
            <img class="testimonial-avatar" src=src.to_string() alt=testimonial.author.clone() />
        }
        .into_any(),
        Avatar::Initial(letter) => view! {
            <div class="testimonial-initial" aria-hidden="true">{letter.to_string()}</div>
        }
        .into_any(),
    };

    view! {
        <figure class="testimonial-card">
            <div class="testimonial-stars" aria-label="5 out of 5 stars">"★★★★★"</div>
            <blockquote class="testimonial-quote">{testimonial.quote}</blockquote>
            <figcaption class="testimonial-author">
                {avatar}
                <div>
                    <p class="testimonial-name">{testimonial.author}</p>
                    <p class="testimonial-role">{testimonial.role}</p>
                </div>
            </figcaption>
        </figure>
    }
}
