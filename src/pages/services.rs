use crate::catalog::Catalog;
use crate::components::scroll_reveal::{RevealAnimation, ScrollReveal};
use crate::components::section_header::{Align, SectionHeader};
use crate::components::service_card::{toggle_expanded, ServiceCard};
use crate::Route;
use std::rc::Rc;
use yew::prelude::*;
use yew_router::prelude::*;

const CERTIFICATIONS: &[(&str, &str)] = &[
    ("Factory Training", "Our technicians complete ongoing Porsche-specific training programs."),
    ("OEM Parts", "We use only genuine Porsche parts to maintain your vehicle's integrity."),
    ("Specialized Equipment", "Our facility features Porsche-approved repair and measuring systems."),
    ("Quality Assurance", "Every repair undergoes rigorous inspection before delivery."),
];

#[function_component(Services)]
pub fn services() -> Html {
    let catalog = use_context::<Rc<Catalog>>().unwrap_or_default();
    let expanded = use_state(|| None::<String>);

    let on_toggle = {
        let expanded = expanded.clone();
        Callback::from(move |id: String| {
            expanded.set(toggle_expanded(expanded.as_deref(), &id));
        })
    };

    html! {
        <div class="services-page">
            <section class="page-hero">
                <div class="page-hero-bg" style="background-image: url(/images/gallery/facility/bench-01.jpg);"></div>
                <div class="container">
                    <ScrollReveal class="page-hero-content">
                        <div class="hero-eyebrow"><span class="eyebrow-line"></span>{"Our Services"}</div>
                        <h1>{"Precision"}<br /><span class="gold">{"Expertise"}</span></h1>
                        <p>
                            {"From collision repair to complete restorations, our Porsche-certified technicians deliver factory-quality results using genuine OEM parts and approved procedures."}
                        </p>
                    </ScrollReveal>
                </div>
            </section>

            <section class="section services-list">
                <div class="container">
                    { for catalog.services.iter().enumerate().map(|(i, service)| html! {
                        <ScrollReveal delay_ms={i as u32 * 100} class="service-item">
                            <ServiceCard service={service.clone()}
                                expanded={expanded.as_deref() == Some(service.id.as_str())}
                                on_toggle={on_toggle.clone()} />
                        </ScrollReveal>
                    }) }
                </div>
            </section>

            <section class="section certification">
                <div class="container certification-grid">
                    <div>
                        <SectionHeader
                            label="Certification"
                            title="Porsche Approved"
                            description="As a Porsche Approved Collision Center, we maintain the highest standards of repair quality, technician training, and facility equipment."
                            align={Align::Left} />
                        <div class="certification-list">
                            { for CERTIFICATIONS.iter().enumerate().map(|(i, (title, desc))| html! {
                                <ScrollReveal animation={RevealAnimation::FadeLeft} delay_ms={i as u32 * 100} class="certification-item">
                                    <span class="check">{"✓"}</span>
                                    <div>
                                        <h4>{*title}</h4>
                                        <p>{*desc}</p>
                                    </div>
                                </ScrollReveal>
                            }) }
                        </div>
                    </div>
                    <ScrollReveal animation={RevealAnimation::FadeRight} class="certification-image">
                        <img src="/images/gallery/facility/celette-01.jpg" alt="Stuttgart International repair facility" loading="lazy" />
                    </ScrollReveal>
                </div>
                <div class="section-cta">
                    <Link<Route> to={Route::Contact} classes="btn-primary">{"Schedule a Consultation"}</Link<Route>>
                </div>
            </section>
            <style>
                {r#"
                    .services-list { background: #1a1a1a; }
                    .service-item { margin-bottom: 1rem; }
                    .service-card { background: #0a0a0a; border: 1px solid rgba(120,120,120,0.15); transition: border-color 0.5s; }
                    .service-card.expanded, .service-card:hover { border-color: rgba(201,169,97,0.3); }
                    .service-card-header {
                        display: flex;
                        gap: 1.5rem;
                        width: 100%;
                        padding: 2rem;
                        text-align: left;
                        color: inherit;
                        background: none;
                        border: none;
                        cursor: pointer;
                    }
                    .service-heading { flex: 1; }
                    .service-title-row { display: flex; justify-content: space-between; align-items: center; }
                    .service-title-row h3 { color: #fff; margin: 0; }
                    .service-heading p { color: rgba(192,192,192,0.7); margin: 0.5rem 0 0; }
                    .service-toggle { font-size: 1.5rem; color: #c9a961; transition: transform 0.3s; }
                    .service-card.expanded .service-toggle { transform: rotate(45deg); }
                    .service-card-body {
                        max-height: 0;
                        overflow: hidden;
                        padding: 0 2rem;
                        transition: max-height 0.5s ease, padding 0.5s ease;
                    }
                    .service-card.expanded .service-card-body { max-height: 40rem; padding: 0 2rem 2rem; }
                    .service-card-body p { color: rgba(192,192,192,0.85); line-height: 1.7; }
                    .service-features { list-style: none; padding: 0; display: grid; grid-template-columns: repeat(auto-fit, minmax(220px, 1fr)); gap: 0.75rem; }
                    .service-features li { color: #c0c0c0; display: flex; gap: 0.5rem; }
                    .check { color: #c9a961; }
                    .certification-grid { display: grid; grid-template-columns: 1fr 1fr; gap: 5rem; align-items: center; }
                    .certification-item { display: flex; gap: 1rem; margin-bottom: 1.5rem; }
                    .certification-item .check {
                        flex-shrink: 0;
                        width: 2.5rem;
                        height: 2.5rem;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        background: rgba(201,169,97,0.1);
                    }
                    .certification-item h4 { color: #fff; margin: 0 0 0.25rem; }
                    .certification-item p { color: rgba(192,192,192,0.7); margin: 0; }
                    .certification-image img { width: 100%; aspect-ratio: 4 / 5; object-fit: cover; }
                    @media (max-width: 1024px) {
                        .certification-grid { grid-template-columns: 1fr; gap: 3rem; }
                    }
                "#}
            </style>
        </div>
    }
}
