use crate::components::contact_form::ContactForm;
use crate::components::scroll_reveal::{RevealAnimation, ScrollReveal};
use crate::config::{map_search_url, SHOP_ADDRESS, SHOP_HOURS, SHOP_PHONE_DISPLAY, SHOP_PHONE_TEL};
use yew::prelude::*;

#[function_component(Contact)]
pub fn contact() -> Html {
    let map_url = map_search_url(SHOP_ADDRESS);

    html! {
        <div class="contact-page">
            <section class="page-hero">
                <div class="container">
                    <ScrollReveal class="page-hero-content">
                        <div class="hero-eyebrow"><span class="eyebrow-line"></span>{"Get In Touch"}</div>
                        <h1>{"Contact"}<br /><span class="gold">{"Us"}</span></h1>
                        <p>
                            {"Ready to schedule a repair or have questions about our services? We're here to help. Reach out today for a free estimate."}
                        </p>
                    </ScrollReveal>
                </div>
            </section>

            <section class="section contact-section">
                <div class="container contact-grid">
                    <ScrollReveal animation={RevealAnimation::FadeLeft} class="contact-info">
                        <h2>{"Visit Our Facility"}</h2>
                        <div class="info-block">
                            <span class="info-label">{"Address"}</span>
                            <a href={map_url.clone()} target="_blank" rel="noopener noreferrer">{SHOP_ADDRESS}</a>
                        </div>
                        <div class="info-block">
                            <span class="info-label">{"Phone"}</span>
                            <a class="info-phone" href={format!("tel:{}", SHOP_PHONE_TEL)}>{SHOP_PHONE_DISPLAY}</a>
                        </div>
                        <div class="info-block">
                            <span class="info-label">{"Hours"}</span>
                            { for SHOP_HOURS.iter().map(|(days, hours)| html! {
                                <p>{format!("{}: {}", days, hours)}</p>
                            }) }
                        </div>
                        <a class="map-card" href={map_url} target="_blank" rel="noopener noreferrer">
                            <span class="map-pin">{"⌖"}</span>
                            <span>{"Open in Google Maps"}</span>
                        </a>
                    </ScrollReveal>

                    <ScrollReveal animation={RevealAnimation::FadeRight} class="contact-form-panel">
                        <h2>{"Request an Estimate"}</h2>
                        <p class="form-intro">{"Fill out the form below and we'll get back to you within 24 hours."}</p>
                        <ContactForm />
                    </ScrollReveal>
                </div>
            </section>

            <section class="contact-call">
                <div class="container">
                    <p>{"Prefer to talk? Give us a call during business hours."}</p>
                    <a class="btn-primary" href={format!("tel:{}", SHOP_PHONE_TEL)}>{format!("Call {}", SHOP_PHONE_DISPLAY)}</a>
                </div>
            </section>
            <style>
                {r#"
                    .contact-section { background: #1a1a1a; }
                    .contact-grid { display: grid; grid-template-columns: 2fr 3fr; gap: 4rem; }
                    .contact-info h2, .contact-form-panel h2 { color: #fff; font-size: 1.9rem; margin-top: 0; }
                    .info-block { margin-bottom: 2rem; }
                    .info-label { display: block; margin-bottom: 0.75rem; font-size: 0.75rem; letter-spacing: 0.15em; text-transform: uppercase; color: #c9a961; }
                    .info-block a, .info-block p { color: rgba(192,192,192,0.8); margin: 0.25rem 0; text-decoration: none; }
                    .info-block a:hover { color: #c9a961; }
                    .info-phone { font-size: 1.5rem; color: #fff !important; }
                    .map-card {
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                        justify-content: center;
                        gap: 0.75rem;
                        aspect-ratio: 4 / 3;
                        color: #c0c0c0;
                        text-decoration: none;
                        background: rgba(10,10,10,0.5);
                        border: 1px solid rgba(120,120,120,0.2);
                        transition: border-color 0.3s;
                    }
                    .map-card:hover { border-color: #c9a961; color: #c9a961; }
                    .map-pin { font-size: 2.5rem; color: #c9a961; }
                    .contact-form-panel { padding: 2.5rem; background: #0a0a0a; border: 1px solid rgba(120,120,120,0.15); }
                    .form-intro { color: rgba(192,192,192,0.7); margin-bottom: 2rem; }
                    .form-grid { display: grid; grid-template-columns: 1fr 1fr; gap: 0 1.5rem; }
                    .form-group { margin-bottom: 1.5rem; }
                    .form-group label { display: block; margin-bottom: 0.5rem; font-size: 0.8rem; letter-spacing: 0.1em; text-transform: uppercase; color: #c0c0c0; }
                    .form-group input, .form-group select, .form-group textarea {
                        width: 100%;
                        box-sizing: border-box;
                        padding: 0.9rem 1rem;
                        color: #fff;
                        font: inherit;
                        background: #1a1a1a;
                        border: 1px solid rgba(120,120,120,0.3);
                        transition: border-color 0.3s;
                    }
                    .form-group input:focus, .form-group select:focus, .form-group textarea:focus { outline: none; border-color: #c9a961; }
                    .form-error { color: #ff6b6b; margin: 0 0 1rem; }
                    .full-width { width: 100%; }
                    button[disabled] { opacity: 0.6; cursor: wait; }
                    .success-message { text-align: center; padding: 3rem 1rem; }
                    .success-icon {
                        width: 4rem;
                        height: 4rem;
                        margin: 0 auto 1.5rem;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        font-size: 2rem;
                        border-radius: 50%;
                        color: #c9a961;
                        background: rgba(201,169,97,0.1);
                    }
                    .success-message h3 { color: #fff; font-size: 1.75rem; }
                    .success-message p { color: rgba(192,192,192,0.8); }
                    .success-message a { color: #c9a961; }
                    .contact-call { padding: 4rem 0; text-align: center; background: #0a0a0a; }
                    .contact-call p { color: rgba(192,192,192,0.8); margin-bottom: 1.5rem; }
                    @media (max-width: 1024px) {
                        .contact-grid { grid-template-columns: 1fr; }
                    }
                    @media (max-width: 640px) {
                        .form-grid { grid-template-columns: 1fr; }
                    }
                "#}
            </style>
        </div>
    }
}
