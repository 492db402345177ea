use crate::config::{use_interaction_config, SHOP_PHONE_DISPLAY, SHOP_PHONE_TEL};
use crate::contact::{submit_simulated, ContactField, ContactRequest, SERVICE_OPTIONS};
use log::warn;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

#[derive(Clone, Debug, PartialEq)]
enum FormStatus {
    Editing,
    Submitting,
    Submitted,
}

/// Name and value of whichever form control fired the event.
fn field_value(e: &Event) -> Option<(String, String)> {
    let target = e.target()?;
    if let Some(input) = target.dyn_ref::<HtmlInputElement>() {
        return Some((input.name(), input.value()));
    }
    if let Some(area) = target.dyn_ref::<HtmlTextAreaElement>() {
        return Some((area.name(), area.value()));
    }
    target
        .dyn_ref::<HtmlSelectElement>()
        .map(|select| (select.name(), select.value()))
}

#[function_component(ContactForm)]
pub fn contact_form() -> Html {
    let config = use_interaction_config();
    let request = use_state(ContactRequest::default);
    let status = use_state(|| FormStatus::Editing);
    let error = use_state(|| None::<String>);

    let on_change = {
        let request = request.clone();
        Callback::from(move |e: Event| {
            let Some((name, value)) = field_value(&e) else {
                return;
            };
            match ContactField::from_name(&name) {
                Some(field) => {
                    let mut next = (*request).clone();
                    next.set(field, value);
                    request.set(next);
                }
                None => warn!("Unknown contact field {}", name),
            }
        })
    };
    let on_input = {
        let on_change = on_change.clone();
        Callback::from(move |e: InputEvent| on_change.emit(e.into()))
    };

    let on_submit = {
        let request = request.clone();
        let status = status.clone();
        let error = error.clone();
        let delay_ms = config.submit_delay_ms;
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *status == FormStatus::Submitting {
                return;
            }
            if let Err(e) = request.validate() {
                error.set(Some(e.to_string()));
                return;
            }
            error.set(None);
            status.set(FormStatus::Submitting);

            let request = (*request).clone();
            let status = status.clone();
            let error = error.clone();
            spawn_local(async move {
                match submit_simulated(request, delay_ms).await {
                    Ok(()) => status.set(FormStatus::Submitted),
                    Err(e) => {
                        error.set(Some(e.to_string()));
                        status.set(FormStatus::Editing);
                    }
                }
            });
        })
    };

    if *status == FormStatus::Submitted {
        return html! {
            <div class="success-message">
                <div class="success-icon">{"✓"}</div>
                <h3>{"Thank You!"}</h3>
                <p>
                    {"We've received your message and will be in touch within 24 hours. For immediate assistance, please call us at "}
                    <a href={format!("tel:{}", SHOP_PHONE_TEL)}>{SHOP_PHONE_DISPLAY}</a>
                </p>
            </div>
        };
    }

    let submitting = *status == FormStatus::Submitting;

    html! {
        <form class="contact-form" onsubmit={on_submit} novalidate=true>
            <div class="form-grid">
                <div class="form-group">
                    <label for="name">{"Full Name *"}</label>
                    <input type="text" id="name" name="name" required=true placeholder="Your name"
                        value={request.name.clone()} oninput={on_input.clone()} />
                </div>
                <div class="form-group">
                    <label for="email">{"Email Address *"}</label>
                    <input type="email" id="email" name="email" required=true placeholder="your@email.com"
                        value={request.email.clone()} oninput={on_input.clone()} />
                </div>
                <div class="form-group">
                    <label for="phone">{"Phone Number"}</label>
                    <input type="tel" id="phone" name="phone" placeholder="(555) 123-4567"
                        value={request.phone.clone()} oninput={on_input.clone()} />
                </div>
                <div class="form-group">
                    <label for="vehicle">{"Vehicle (Year, Make, Model)"}</label>
                    <input type="text" id="vehicle" name="vehicle" placeholder="2023 Porsche 911 GT3"
                        value={request.vehicle.clone()} oninput={on_input.clone()} />
                </div>
            </div>
            <div class="form-group">
                <label for="service">{"Service Needed"}</label>
                <select id="service" name="service" onchange={on_change}>
                    <option value="" selected={request.service.is_empty()}>{"Select a service"}</option>
                    { for SERVICE_OPTIONS.iter().map(|option| html! {
                        <option value={*option} selected={request.service == *option}>{*option}</option>
                    }) }
                </select>
            </div>
            <div class="form-group">
                <label for="message">{"Message *"}</label>
                <textarea id="message" name="message" rows="5" required=true
                    placeholder="Please describe your repair needs or any questions you have..."
                    value={request.message.clone()} oninput={on_input} />
            </div>
            if let Some(message) = (*error).clone() {
                <p class="form-error" role="alert">{message}</p>
            }
            <button type="submit" class="btn-primary full-width" disabled={submitting}>
                { if submitting { "Sending..." } else { "Send Message" } }
            </button>
        </form>
    }
}
