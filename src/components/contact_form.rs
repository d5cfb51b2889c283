use gloo_timers::future::TimeoutFuture;
use log::{debug, info};
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::components::notification::use_notifier;
use crate::config::SUBMIT_DELAY_MS;
use crate::state::contact::{finish_submission, ContactForm as ContactFields, SubmitState};
use crate::state::notification::NotificationKind;

#[derive(Properties, PartialEq)]
pub struct ContactFormProps {
    /// Choices for the optional service dropdown.
    #[prop_or_default]
    pub services: Vec<&'static str>,
}

#[function_component(ContactForm)]
pub fn contact_form(props: &ContactFormProps) -> Html {
    let fields = use_state(ContactFields::default);
    let submit_state = use_state(SubmitState::default);
    let notifier = use_notifier();

    let update = |apply: fn(&mut ContactFields, String)| {
        let fields = fields.clone();
        move |value: String| {
            let mut next = (*fields).clone();
            apply(&mut next, value);
            fields.set(next);
        }
    };

    let on_name = {
        let set = update(|f, v| f.name = v);
        Callback::from(move |e: InputEvent| set(e.target_unchecked_into::<HtmlInputElement>().value()))
    };
    let on_email = {
        let set = update(|f, v| f.email = v);
        Callback::from(move |e: InputEvent| set(e.target_unchecked_into::<HtmlInputElement>().value()))
    };
    let on_phone = {
        let set = update(|f, v| f.phone = v);
        Callback::from(move |e: InputEvent| set(e.target_unchecked_into::<HtmlInputElement>().value()))
    };
    let on_service = {
        let set = update(|f, v| f.service = v);
        Callback::from(move |e: Event| set(e.target_unchecked_into::<HtmlSelectElement>().value()))
    };
    let on_message = {
        let set = update(|f, v| f.message = v);
        Callback::from(move |e: InputEvent| set(e.target_unchecked_into::<HtmlTextAreaElement>().value()))
    };

    let onsubmit = {
        let fields = fields.clone();
        let submit_state = submit_state.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if submit_state.disabled() {
                return;
            }

            let submission = match fields.validate() {
                Ok(submission) => submission,
                Err(err) => {
                    debug!("Contact form rejected: {:?}", err);
                    notifier.notify(err.to_string(), NotificationKind::Error);
                    return;
                }
            };

            info!("Contact form submitted");
            // Nothing is sent; log the body a real endpoint would receive
            match serde_json::to_string(&submission) {
                Ok(payload) => debug!("Simulated contact payload: {}", payload),
                Err(err) => debug!("Could not serialize contact payload: {}", err),
            }

            submit_state.set(SubmitState::Sending);

            let fields = fields.clone();
            let submit_state = submit_state.clone();
            let notifier = notifier.clone();
            spawn_local(async move {
                TimeoutFuture::new(SUBMIT_DELAY_MS).await;
                let mut cleared = (*fields).clone();
                let (next, message) = finish_submission(&mut cleared);
                notifier.notify(message, NotificationKind::Success);
                fields.set(cleared);
                submit_state.set(next);
            });
        })
    };

    html! {
        <form id="contactForm" class="contact-form" novalidate={true} onsubmit={onsubmit}>
            <div class="form-row">
                <div class="form-group">
                    <label for="name">{"Full Name *"}</label>
                    <input id="name" name="name" type="text" value={fields.name.clone()} oninput={on_name} />
                </div>
                <div class="form-group">
                    <label for="email">{"Email Address *"}</label>
                    <input id="email" name="email" type="email" value={fields.email.clone()} oninput={on_email} />
                </div>
            </div>
            <div class="form-row">
                <div class="form-group">
                    <label for="phone">{"Phone Number"}</label>
                    <input id="phone" name="phone" type="tel" value={fields.phone.clone()} oninput={on_phone} />
                </div>
                <div class="form-group">
                    <label for="service">{"Service Needed"}</label>
                    <select id="service" name="service" onchange={on_service}>
                        <option value="" selected={fields.service.is_empty()}>{"Select a service"}</option>
                        { for props.services.iter().map(|service| html! {
                            <option value={*service} selected={fields.service == *service}>{*service}</option>
                        }) }
                    </select>
                </div>
            </div>
            <div class="form-group">
                <label for="message">{"Message *"}</label>
                <textarea id="message" name="message" rows="5" value={fields.message.clone()} oninput={on_message} />
            </div>
            <button type="submit" class="btn btn-primary" disabled={submit_state.disabled()}>
                {submit_state.label()}
            </button>
        </form>
    }
}
