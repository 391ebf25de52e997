use gloo_timers::callback::Interval;
use web_sys::MouseEvent;
use yew::prelude::*;

use crate::controllers::carousel::{CarouselController, CarouselError, TestimonialEntry};

#[derive(Properties, PartialEq)]
pub struct TestimonialsProps {
    pub entries: Vec<TestimonialEntry>,
    pub auto_advance_ms: u32,
}

pub enum TestimonialsMsg {
    Tick,
    Next,
    Previous,
    GoTo(usize),
}

pub struct Testimonials {
    carousel: CarouselController<Interval>,
}

fn build(ctx: &Context<Testimonials>) -> CarouselController<Interval> {
    let props = ctx.props();
    let carousel = CarouselController::new(props.entries.clone());
    // nothing to rotate with a single card
    if props.entries.len() < 2 {
        return carousel;
    }
    let link = ctx.link().clone();
    let interval = Interval::new(props.auto_advance_ms, move || {
        link.send_message(TestimonialsMsg::Tick);
    });
    carousel.with_auto_advance(interval)
}

impl Component for Testimonials {
    type Message = TestimonialsMsg;
    type Properties = TestimonialsProps;

    fn create(ctx: &Context<Self>) -> Self {
        Self { carousel: build(ctx) }
    }

    fn changed(&mut self, ctx: &Context<Self>, _old_props: &Self::Properties) -> bool {
        self.carousel = build(ctx);
        true
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        let result: Result<Option<usize>, CarouselError> = match msg {
            TestimonialsMsg::Tick => self.carousel.tick(),
            TestimonialsMsg::Next => self.carousel.next().map(Some),
            TestimonialsMsg::Previous => self.carousel.previous().map(Some),
            TestimonialsMsg::GoTo(index) => self.carousel.go_to(index).map(Some),
        };
        match result {
            Ok(shown) => shown.is_some(),
            Err(e) => {
                log::warn!("testimonials: {}", e);
                false
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let entries = self.carousel.entries();
        if entries.is_empty() {
            return html! {};
        }

        html! {
            <div class="testimonials-slider">
                <div class="testimonial-track">
                    { for entries.iter().enumerate().map(|(index, entry)| html! {
                        <div key={index} class={classes!("testimonial-card", self.carousel.is_active(index).then_some("active"))}>
                            <p class="testimonial-quote">{format!("“{}”", entry.quote)}</p>
                            <div class="testimonial-author">
                                <strong>{&entry.author}</strong>
                                if !entry.detail.is_empty() {
                                    <span>{&entry.detail}</span>
                                }
                            </div>
                        </div>
                    }) }
                </div>
                <div class="testimonial-controls">
                    <button class="prev-btn" aria-label="Previous testimonial"
                        onclick={link.callback(|_: MouseEvent| TestimonialsMsg::Previous)}>{"❮"}</button>
                    <div class="testimonial-dots">
                        { for (0..entries.len()).map(|index| html! {
                            <span
                                key={index}
                                class={classes!("dot", self.carousel.is_active(index).then_some("active"))}
                                onclick={link.callback(move |_: MouseEvent| TestimonialsMsg::GoTo(index))}
                            ></span>
                        }) }
                    </div>
                    <button class="next-btn" aria-label="Next testimonial"
                        onclick={link.callback(|_: MouseEvent| TestimonialsMsg::Next)}>{"❯"}</button>
                </div>
                <style>
                    {r#"
                    .testimonials-slider {
                        max-width: 760px;
                        margin: 0 auto;
                        text-align: center;
                    }
                    .testimonial-card {
                        display: none;
                        padding: 2rem;
                        background: #fff;
                        border-radius: 10px;
                        box-shadow: 0 10px 30px rgba(0, 0, 0, 0.08);
                    }
                    .testimonial-card.active {
                        display: block;
                        animation: testimonialFade 0.5s ease;
                    }
                    @keyframes testimonialFade {
                        from { opacity: 0; }
                        to { opacity: 1; }
                    }
                    .testimonial-quote {
                        font-size: 1.15rem;
                        font-style: italic;
                        color: #333;
                    }
                    .testimonial-author span {
                        display: block;
                        color: #777;
                        font-size: 0.85rem;
                    }
                    .testimonial-controls {
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        gap: 1rem;
                        margin-top: 1.5rem;
                    }
                    .prev-btn, .next-btn {
                        background: none;
                        border: 1px solid #ccc;
                        border-radius: 50%;
                        width: 38px;
                        height: 38px;
                        cursor: pointer;
                    }
                    .dot {
                        display: inline-block;
                        width: 10px;
                        height: 10px;
                        margin: 0 4px;
                        border-radius: 50%;
                        background: #ccc;
                        cursor: pointer;
                    }
                    .dot.active {
                        background: #d62828;
                    }
                    "#}
                </style>
            </div>
        }
    }
}
