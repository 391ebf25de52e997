use gloo_timers::future::TimeoutFuture;
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::config::{ServiceOption, Timing};
use crate::controllers::contact::{
    ContactForm as FormValues, Field, Scheduled, Step, SubmissionFlow, SubmitError,
    ValidationReport,
};

#[derive(Properties, PartialEq)]
pub struct ContactFormProps {
    pub services: Vec<ServiceOption>,
    pub timing: Timing,
}

pub enum ContactMsg {
    Edit(Field, String),
    Submit,
    Deliver,
    Dismiss(u32),
}

pub struct ContactForm {
    values: FormValues,
    report: Option<ValidationReport>,
    flow: SubmissionFlow,
}

impl ContactForm {
    fn schedule(ctx: &Context<Self>, scheduled: Scheduled) {
        let link = ctx.link().clone();
        spawn_local(async move {
            TimeoutFuture::new(scheduled.after_ms).await;
            link.send_message(match scheduled.step {
                Step::Deliver => ContactMsg::Deliver,
                Step::Dismiss(notice) => ContactMsg::Dismiss(notice),
            });
        });
    }

    fn error_for(&self, field: Field) -> Option<&'static str> {
        self.report.as_ref().and_then(|report| report.message_for(field))
    }

    fn field_class(&self, field: Field) -> Classes {
        classes!(self.error_for(field).map(|_| "error"))
    }

    fn error_message(&self, field: Field) -> Html {
        match self.error_for(field) {
            Some(message) => html! { <span class="error-message">{message}</span> },
            None => html! {},
        }
    }
}

impl Component for ContactForm {
    type Message = ContactMsg;
    type Properties = ContactFormProps;

    fn create(ctx: &Context<Self>) -> Self {
        let timing = &ctx.props().timing;
        Self {
            values: FormValues::default(),
            report: None,
            flow: SubmissionFlow::new(timing.submit_delay_ms, timing.notice_ms),
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            ContactMsg::Edit(field, value) => {
                self.values.set(field, value);
                true
            }
            ContactMsg::Submit => match self.flow.submit(&self.values) {
                Ok(scheduled) => {
                    log::info!("contact form accepted, sending");
                    self.report = None;
                    Self::schedule(ctx, scheduled);
                    true
                }
                Err(SubmitError::Invalid(report)) => {
                    log::debug!("contact form invalid: {:?}", report.failures());
                    self.report = Some(report);
                    true
                }
                Err(e @ SubmitError::InFlight) => {
                    log::debug!("{}", e);
                    false
                }
            },
            ContactMsg::Deliver => {
                if let Some(scheduled) = self.flow.deliver() {
                    self.values = FormValues::default();
                    Self::schedule(ctx, scheduled);
                }
                true
            }
            ContactMsg::Dismiss(notice) => {
                self.flow.dismiss(notice);
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let onsubmit = link.callback(|e: SubmitEvent| {
            e.prevent_default();
            ContactMsg::Submit
        });
        let on_input = |field: Field| {
            link.callback(move |e: InputEvent| {
                let input: HtmlInputElement = e.target_unchecked_into();
                ContactMsg::Edit(field, input.value())
            })
        };
        let on_service = link.callback(|e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            ContactMsg::Edit(Field::Service, select.value())
        });
        let on_message = link.callback(|e: InputEvent| {
            let area: HtmlTextAreaElement = e.target_unchecked_into();
            ContactMsg::Edit(Field::Message, area.value())
        });

        html! {
            <form id="contactForm" class="contact-form" novalidate={true} {onsubmit}>
                if let Some(notice) = self.flow.notification() {
                    <div class="alert-success">{notice}</div>
                }
                <div class="form-group">
                    <label for="name">{"Your Name"}</label>
                    <input id="name" type="text" class={self.field_class(Field::Name)}
                        value={self.values.name.clone()} oninput={on_input(Field::Name)} />
                    { self.error_message(Field::Name) }
                </div>
                <div class="form-group">
                    <label for="email">{"Email Address"}</label>
                    <input id="email" type="email" class={self.field_class(Field::Email)}
                        value={self.values.email.clone()} oninput={on_input(Field::Email)} />
                    { self.error_message(Field::Email) }
                </div>
                <div class="form-group">
                    <label for="phone">{"Phone Number"}</label>
                    <input id="phone" type="tel" class={self.field_class(Field::Phone)}
                        value={self.values.phone.clone()} oninput={on_input(Field::Phone)} />
                    { self.error_message(Field::Phone) }
                </div>
                <div class="form-group">
                    <label for="service">{"Service Required"}</label>
                    <select id="service" class={self.field_class(Field::Service)} onchange={on_service}>
                        <option value="" selected={self.values.service.is_empty()}>{"Select a service"}</option>
                        { for ctx.props().services.iter().map(|service| html! {
                            <option
                                key={service.value.clone()}
                                value={service.value.clone()}
                                selected={self.values.service == service.value}
                            >
                                {&service.label}
                            </option>
                        }) }
                    </select>
                    { self.error_message(Field::Service) }
                </div>
                <div class="form-group">
                    <label for="message">{"Message"}</label>
                    <textarea id="message" rows="5" class={self.field_class(Field::Message)}
                        value={self.values.message.clone()} oninput={on_message} />
                    { self.error_message(Field::Message) }
                </div>
                <button type="submit" class="btn btn-primary" disabled={self.flow.trigger_disabled()}>
                    { self.flow.trigger_label() }
                </button>
            </form>
        }
    }
}
