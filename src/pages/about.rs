use crate::components::scroll_reveal::{RevealAnimation, ScrollReveal};
use crate::components::section_header::{Align, SectionHeader};
use crate::config::SHOP_TAGLINE;
use crate::Route;
use yew::prelude::*;
use yew_router::prelude::*;

const STATS: &[(&str, &str)] = &[
    ("35+", "Years Experience"),
    ("10K+", "Vehicles Repaired"),
    ("100%", "Customer Satisfaction"),
    ("5.0", "Google Rating"),
];

const VALUES: &[(&str, &str, &str)] = &[
    (
        "◈",
        "Precision",
        "Every repair is executed with factory-level precision using Porsche-approved methods and equipment.",
    ),
    (
        "◇",
        "Integrity",
        "Transparent communication and honest assessments. We treat every vehicle as if it were our own.",
    ),
    (
        "✦",
        "Excellence",
        "We never compromise on quality. Our work reflects the standards that Porsche owners expect.",
    ),
];

const FACILITY_IMAGES: &[&str] = &[
    "/images/gallery/facility/celette-01.jpg",
    "/images/gallery/facility/aluminum-room-01.jpg",
    "/images/gallery/paint-work/paint-booth.jpg",
    "/images/gallery/paint-work/mixing-room-01.jpg",
];

#[function_component(About)]
pub fn about() -> Html {
    html! {
        <div class="about-page">
            <section class="page-hero">
                <div class="page-hero-bg" style="background-image: url(/images/gallery/facility/aluminum-room-01.jpg);"></div>
                <div class="container">
                    <ScrollReveal class="page-hero-content">
                        <div class="hero-eyebrow"><span class="eyebrow-line"></span>{"Our Story"}</div>
                        <h1>{"Passion Meets"}<br /><span class="gold">{"Craftsmanship"}</span></h1>
                        <p>
                            {"For over three decades, Stuttgart International has been Fort Lauderdale's trusted name in Porsche collision repair and restoration."}
                        </p>
                    </ScrollReveal>
                </div>
            </section>

            <section class="section heritage">
                <div class="container heritage-grid">
                    <div>
                        <SectionHeader label="Heritage" title="A Legacy of Excellence" align={Align::Left} />
                        <ScrollReveal animation={RevealAnimation::FadeLeft} class="heritage-text">
                            <p>
                                {"Founded in 1989, Stuttgart International was born from a passion for German automotive engineering and a commitment to excellence. What began as a small shop dedicated to Porsche repair has grown into South Florida's premier Porsche Approved Collision Center."}
                            </p>
                            <p>
                                {"Our name pays homage to the birthplace of Porsche, Stuttgart, Germany, and reflects our dedication to maintaining the standards of German precision in every repair we undertake."}
                            </p>
                            <p>
                                {"Over the years, we've invested heavily in state-of-the-art equipment, ongoing technician training, and facility upgrades to ensure we can handle any repair to factory specifications."}
                            </p>
                        </ScrollReveal>
                    </div>
                    <ScrollReveal animation={RevealAnimation::FadeRight} class="heritage-image">
                        <img src="/images/gallery/facility/bench-02.jpg" alt="Porsche on the repair bench" loading="lazy" />
                        <div class="heritage-badge">{SHOP_TAGLINE}</div>
                    </ScrollReveal>
                </div>
            </section>

            <section class="stats">
                <div class="container stats-grid">
                    { for STATS.iter().enumerate().map(|(i, (value, label))| html! {
                        <ScrollReveal animation={RevealAnimation::Scale} delay_ms={i as u32 * 100} class="stat">
                            <span class="stat-value">{*value}</span>
                            <span class="stat-label">{*label}</span>
                        </ScrollReveal>
                    }) }
                </div>
            </section>

            <section class="section values">
                <div class="container">
                    <SectionHeader
                        label="Our Philosophy"
                        title="What Drives Us"
                        description="These core values guide every repair, every interaction, and every decision we make." />
                    <div class="values-grid">
                        { for VALUES.iter().enumerate().map(|(i, (icon, title, description))| html! {
                            <ScrollReveal delay_ms={i as u32 * 150} class="value-card">
                                <span class="value-icon">{*icon}</span>
                                <h3>{*title}</h3>
                                <p>{*description}</p>
                            </ScrollReveal>
                        }) }
                    </div>
                </div>
            </section>

            <section class="section facility">
                <div class="container">
                    <SectionHeader
                        label="Our Facility"
                        title="State-of-the-Art Equipment"
                        description="Equipped with the latest Porsche-approved repair systems and technology." />
                    <div class="facility-grid">
                        { for FACILITY_IMAGES.iter().enumerate().map(|(i, src)| html! {
                            <ScrollReveal animation={RevealAnimation::Fade} delay_ms={i as u32 * 100} class="facility-image">
                                <img src={*src} alt="Stuttgart International facility" loading="lazy" />
                            </ScrollReveal>
                        }) }
                    </div>
                    <ScrollReveal class="facility-cta">
                        <p>{"Visit our facility and see firsthand why discerning Porsche owners trust us with their vehicles."}</p>
                        <div class="cta-buttons">
                            <Link<Route> to={Route::Contact} classes="btn-primary">{"Schedule a Visit"}</Link<Route>>
                            <Link<Route> to={Route::Gallery} classes="btn-secondary">{"View Our Work"}</Link<Route>>
                        </div>
                    </ScrollReveal>
                </div>
            </section>
            <style>
                {r#"
                    .heritage-grid { display: grid; grid-template-columns: 1fr 1fr; gap: 5rem; align-items: center; }
                    .heritage-text p { color: rgba(192,192,192,0.85); line-height: 1.8; }
                    .heritage-image { position: relative; }
                    .heritage-image img { width: 100%; aspect-ratio: 4 / 5; object-fit: cover; }
                    .heritage-badge {
                        position: absolute;
                        bottom: -1.5rem;
                        left: -1.5rem;
                        padding: 1.5rem;
                        font-size: 0.8rem;
                        letter-spacing: 0.15em;
                        text-transform: uppercase;
                        color: #0a0a0a;
                        background: #c9a961;
                    }
                    .stats { padding: 5rem 0; background: #1a1a1a; border-top: 1px solid rgba(201,169,97,0.2); border-bottom: 1px solid rgba(201,169,97,0.2); }
                    .stats-grid { display: grid; grid-template-columns: repeat(4, 1fr); gap: 2rem; text-align: center; }
                    .stat-value { display: block; font-size: 3rem; color: #c9a961; }
                    .stat-label { font-size: 0.8rem; letter-spacing: 0.15em; text-transform: uppercase; color: rgba(192,192,192,0.7); }
                    .values-grid { display: grid; grid-template-columns: repeat(3, 1fr); gap: 2rem; }
                    .value-card { padding: 2.5rem; background: #1a1a1a; border: 1px solid rgba(120,120,120,0.1); }
                    .value-icon { font-size: 2rem; color: #c9a961; }
                    .value-card h3 { color: #fff; font-size: 1.5rem; }
                    .value-card p { color: rgba(192,192,192,0.7); line-height: 1.7; }
                    .facility { background: #1a1a1a; }
                    .facility-grid { display: grid; grid-template-columns: repeat(4, 1fr); gap: 1rem; }
                    .facility-image img { width: 100%; aspect-ratio: 1; object-fit: cover; }
                    .facility-cta { text-align: center; margin-top: 3rem; }
                    .facility-cta p { color: rgba(192,192,192,0.8); }
                    @media (max-width: 1024px) {
                        .heritage-grid, .values-grid { grid-template-columns: 1fr; gap: 3rem; }
                        .stats-grid, .facility-grid { grid-template-columns: repeat(2, 1fr); }
                    }
                "#}
            </style>
        </div>
    }
}
