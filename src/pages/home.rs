use crate::catalog::{Catalog, MediaItem, Review, Service};
use crate::components::scroll_reveal::{RevealAnimation, ScrollReveal};
use crate::components::section_header::{Align, SectionHeader};
use crate::components::service_card::icon_glyph;
use crate::config::{
    map_search_url, GOOGLE_REVIEWS_URL, SHOP_ADDRESS, SHOP_HOURS, SHOP_PHONE_DISPLAY,
    SHOP_PHONE_TEL, SHOP_TAGLINE,
};
use crate::Route;
use log::debug;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, ScrollBehavior, ScrollToOptions};
use yew::prelude::*;
use yew_router::prelude::*;

const PREVIEW_COUNT: usize = 6;
const REVIEW_GAP_PX: f64 = 24.0;
const FALLBACK_CARD_WIDTH_PX: f64 = 400.0;

/// Horizontal scroll offset that brings review `index` to the left edge.
pub fn review_scroll_offset(index: usize, card_width: f64) -> f64 {
    let width = if card_width > 0.0 { card_width } else { FALLBACK_CARD_WIDTH_PX };
    index as f64 * (width + REVIEW_GAP_PX)
}

#[derive(Properties, PartialEq)]
struct StarRatingProps {
    rating: u8,
}

#[function_component(StarRating)]
fn star_rating(props: &StarRatingProps) -> Html {
    html! {
        <div class="star-rating" aria-label={format!("{} out of 5 stars", props.rating)}>
            { for (0..5u8).map(|i| html! {
                <span class={classes!("star", (i < props.rating).then(|| "filled"))}>{"★"}</span>
            }) }
        </div>
    }
}

#[function_component(Hero)]
fn hero() -> Html {
    html! {
        <section class="hero">
            <div class="hero-image"></div>
            <div class="hero-overlay"></div>
            <div class="hero-content">
                <ScrollReveal animation={RevealAnimation::FadeDown}>
                    <div class="hero-badge">
                        <span class="badge-dot"></span>
                        <span>{SHOP_TAGLINE}</span>
                    </div>
                </ScrollReveal>
                <ScrollReveal delay_ms={150}>
                    <h1 class="hero-title">
                        {"Where "}<span class="gold">{"Perfection"}</span><br />{"is the standard"}
                    </h1>
                </ScrollReveal>
                <ScrollReveal delay_ms={300}>
                    <p class="hero-subtitle">
                        {"Fort Lauderdale's premier destination for factory-certified Porsche collision repair. Where German engineering meets meticulous craftsmanship."}
                    </p>
                </ScrollReveal>
                <ScrollReveal delay_ms={450}>
                    <div class="hero-cta">
                        <Link<Route> to={Route::Contact} classes="btn-primary">{"Request Estimate →"}</Link<Route>>
                        <Link<Route> to={Route::Gallery} classes="btn-secondary">{"View Our Work"}</Link<Route>>
                    </div>
                </ScrollReveal>
            </div>
            <div class="hero-scroll">
                <span>{"Scroll"}</span>
                <div class="scroll-line"></div>
            </div>
            <div class="stripe">
                <div class="line-red"></div>
                <div class="line-gold"></div>
            </div>
        </section>
    }
}

#[derive(Properties, PartialEq)]
struct ServicesPreviewProps {
    services: Vec<Service>,
}

#[function_component(ServicesPreview)]
fn services_preview(props: &ServicesPreviewProps) -> Html {
    html! {
        <section class="section services-preview">
            <div class="container">
                <SectionHeader
                    label="What We Do"
                    title="Expert Services"
                    description="Factory-trained technicians and manufacturer-approved methods for every repair." />
                <div class="services-grid">
                    { for props.services.iter().enumerate().map(|(i, service)| html! {
                        <ScrollReveal animation={RevealAnimation::FadeUp} delay_ms={i as u32 * 100}>
                            <Link<Route> to={Route::Services} classes="service-preview-card">
                                <span class="service-icon">{icon_glyph(service.icon)}</span>
                                <h3>{&service.title}</h3>
                                <p>{&service.short_description}</p>
                                <span class="learn-more">{"Learn More →"}</span>
                            </Link<Route>>
                        </ScrollReveal>
                    }) }
                </div>
                <div class="section-cta">
                    <Link<Route> to={Route::Services} classes="btn-secondary">{"All Services"}</Link<Route>>
                </div>
            </div>
        </section>
    }
}

#[derive(Properties, PartialEq)]
struct GalleryPreviewProps {
    images: Vec<MediaItem>,
}

#[function_component(GalleryPreview)]
fn gallery_preview(props: &GalleryPreviewProps) -> Html {
    html! {
        <section class="section gallery-preview">
            <div class="container">
                <SectionHeader
                    label="Our Work"
                    title="Craftsmanship Gallery"
                    description="Explore our portfolio of precision repairs, restorations, and award-winning projects." />
                <div class="preview-grid">
                    { for props.images.iter().enumerate().map(|(i, image)| html! {
                        <ScrollReveal animation={RevealAnimation::Scale} delay_ms={i as u32 * 100}
                            class={classes!("preview-item", (i == 0).then(|| "featured"))}>
                            <Link<Route> to={Route::Gallery} classes="preview-link">
                                <img src={image.image.clone()} alt={image.title.clone()} loading="lazy" />
                                <div class="preview-overlay">
                                    <span class="preview-category">{image.category.label()}</span>
                                    <h3>{&image.title}</h3>
                                </div>
                            </Link<Route>>
                        </ScrollReveal>
                    }) }
                </div>
                <div class="section-cta">
                    <Link<Route> to={Route::Gallery} classes="btn-secondary">{"View Full Gallery"}</Link<Route>>
                </div>
            </div>
        </section>
    }
}

#[derive(Properties, PartialEq)]
struct ReviewsSectionProps {
    reviews: Vec<Review>,
}

#[function_component(ReviewsSection)]
fn reviews_section(props: &ReviewsSectionProps) -> Html {
    let slider_ref = use_node_ref();
    let active = use_state(|| 0usize);

    let scroll_to = {
        let slider_ref = slider_ref.clone();
        let active = active.clone();
        move |index: usize| {
            let slider_ref = slider_ref.clone();
            let active = active.clone();
            Callback::from(move |_: MouseEvent| {
                let Some(slider) = slider_ref.cast::<HtmlElement>() else {
                    return;
                };
                let card_width = slider
                    .first_element_child()
                    .and_then(|card| card.dyn_into::<HtmlElement>().ok())
                    .map(|card| card.offset_width() as f64)
                    .unwrap_or_default();
                let left = review_scroll_offset(index, card_width);
                debug!("Review carousel -> {} ({}px)", index, left);

                let options = ScrollToOptions::new();
                options.set_left(left);
                options.set_behavior(ScrollBehavior::Smooth);
                slider.scroll_to_with_scroll_to_options(&options);
                active.set(index);
            })
        }
    };

    html! {
        <section class="section reviews">
            <div class="container">
                <div class="reviews-header">
                    <SectionHeader
                        label="Testimonials"
                        title="Client Reviews"
                        description="Hear from Porsche owners who trust Stuttgart International with their vehicles."
                        align={Align::Left} />
                    <a class="google-rating" href={GOOGLE_REVIEWS_URL} target="_blank" rel="noopener noreferrer">
                        <span class="rating-score">{"5.0"}</span>
                        <StarRating rating={5} />
                        <span>{"on Google"}</span>
                    </a>
                </div>
                <div class="reviews-slider" ref={slider_ref}>
                    { for props.reviews.iter().enumerate().map(|(i, review)| html! {
                        <ScrollReveal animation={RevealAnimation::FadeLeft} delay_ms={i as u32 * 150} class="review-card">
                            <span class="quote-mark">{"“"}</span>
                            <StarRating rating={review.stars()} />
                            <p class="review-text">{format!("\"{}\"", review.text)}</p>
                            <div class="review-author">
                                <p class="author-name">{&review.author}</p>
                                <p class="author-vehicle">{&review.vehicle}</p>
                            </div>
                        </ScrollReveal>
                    }) }
                </div>
                <div class="review-dots">
                    { for (0..props.reviews.len()).map(|i| html! {
                        <button class={classes!("review-dot", (i == *active).then(|| "active"))}
                            aria-label={format!("Go to review {}", i + 1)}
                            onclick={scroll_to(i)} />
                    }) }
                </div>
            </div>
        </section>
    }
}

#[function_component(CtaSection)]
fn cta_section() -> Html {
    html! {
        <section class="cta-section">
            <div class="cta-bg"></div>
            <div class="cta-stripe"></div>
            <div class="container">
                <ScrollReveal animation={RevealAnimation::FadeRight} class="cta-content">
                    <div class="cta-badge">
                        <span class="line-red"></span>
                        <span class="line-gold"></span>
                        <span>{"Schedule Your Visit"}</span>
                    </div>
                    <h2>{"Experience the Stuttgart"}<br /><span class="gold">{"Difference"}</span></h2>
                    <p>
                        {"From initial assessment to final delivery, we provide transparent communication and uncompromising quality. Let us show you why discerning Porsche owners choose Stuttgart International."}
                    </p>
                    <div class="cta-buttons">
                        <Link<Route> to={Route::Contact} classes="btn-primary">{"Request Estimate →"}</Link<Route>>
                        <a class="btn-secondary" href={format!("tel:{}", SHOP_PHONE_TEL)}>{SHOP_PHONE_DISPLAY}</a>
                    </div>
                    <div class="cta-details">
                        <div>
                            <p class="detail-label">{"Location"}</p>
                            <a href={map_search_url(SHOP_ADDRESS)} target="_blank" rel="noopener noreferrer">{SHOP_ADDRESS}</a>
                        </div>
                        <div>
                            <p class="detail-label">{"Hours"}</p>
                            { for SHOP_HOURS.iter().map(|(days, hours)| html! {
                                <p>{format!("{}: {}", days, hours)}</p>
                            }) }
                        </div>
                    </div>
                </ScrollReveal>
            </div>
        </section>
    }
}

#[function_component(Home)]
pub fn home() -> Html {
    let catalog = use_context::<Rc<Catalog>>().unwrap_or_default();

    html! {
        <div class="home-page">
            <Hero />
            <ServicesPreview services={catalog.services.clone()} />
            <GalleryPreview images={catalog.featured_media(PREVIEW_COUNT).to_vec()} />
            <ReviewsSection reviews={catalog.reviews.clone()} />
            <CtaSection />
            <style>
                {r#"
                    .hero {
                        position: relative;
                        min-height: 100vh;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        overflow: hidden;
                        text-align: center;
                    }
                    .hero-image {
                        position: absolute;
                        inset: 0;
                        background: url(/images/hero/hero-porsche.jpg) center / cover no-repeat;
                        animation: heroZoom 1.5s ease-out;
                    }
                    @keyframes heroZoom {
                        from { transform: scale(1.2); opacity: 0; }
                        to { transform: scale(1); opacity: 1; }
                    }
                    .hero-overlay {
                        position: absolute;
                        inset: 0;
                        background: linear-gradient(to bottom, rgba(10,10,10,0.7), rgba(10,10,10,0.5), #0a0a0a);
                    }
                    .hero-content { position: relative; z-index: 1; max-width: 56rem; padding: 6rem 1.5rem 8rem; }
                    .hero-badge {
                        display: inline-flex;
                        align-items: center;
                        gap: 0.75rem;
                        margin-bottom: 2rem;
                        padding: 0.5rem 1.5rem;
                        border: 1px solid rgba(201, 169, 97, 0.4);
                        font-size: 0.75rem;
                        letter-spacing: 0.25em;
                        text-transform: uppercase;
                        color: #c9a961;
                    }
                    .badge-dot { width: 0.5rem; height: 0.5rem; border-radius: 50%; background: #c9a961; }
                    .hero-title { font-size: clamp(2.5rem, 6vw, 4.5rem); line-height: 1.1; color: #fff; margin: 0 0 1.5rem; }
                    .gold { color: #c9a961; }
                    .hero-subtitle { font-size: 1.2rem; color: rgba(192,192,192,0.9); max-width: 42rem; margin: 0 auto 2.5rem; }
                    .hero-cta, .cta-buttons { display: flex; flex-wrap: wrap; gap: 1rem; justify-content: center; }
                    .hero-scroll {
                        position: absolute;
                        bottom: 2rem;
                        left: 50%;
                        transform: translateX(-50%);
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                        gap: 0.5rem;
                        font-size: 0.75rem;
                        letter-spacing: 0.2em;
                        text-transform: uppercase;
                        color: rgba(192,192,192,0.6);
                    }
                    .scroll-line { width: 1px; height: 3rem; background: linear-gradient(#c9a961, transparent); }
                    .stripe { position: absolute; bottom: 0; left: 0; right: 0; }
                    .stripe .line-red { width: 100%; height: 4px; background: #d5001c; }
                    .stripe .line-gold { width: 100%; height: 1px; background: rgba(201,169,97,0.5); }
                    .services-grid {
                        display: grid;
                        grid-template-columns: repeat(auto-fit, minmax(280px, 1fr));
                        gap: 1.5rem;
                    }
                    .service-preview-card {
                        display: block;
                        height: 100%;
                        padding: 2rem;
                        background: #1a1a1a;
                        border: 1px solid rgba(120,120,120,0.1);
                        text-decoration: none;
                        transition: border-color 0.5s, transform 0.5s;
                    }
                    .service-preview-card:hover { border-color: rgba(201,169,97,0.3); transform: translateY(-4px); }
                    .service-icon { font-size: 2rem; color: #c9a961; }
                    .service-preview-card h3 { color: #fff; margin: 1rem 0 0.5rem; }
                    .service-preview-card p { color: rgba(192,192,192,0.7); }
                    .learn-more { font-size: 0.8rem; letter-spacing: 0.15em; text-transform: uppercase; color: #c9a961; }
                    .section-cta { text-align: center; margin-top: 3rem; }
                    .preview-grid { display: grid; grid-template-columns: repeat(3, 1fr); gap: 1.5rem; }
                    .preview-item.featured { grid-column: span 2; grid-row: span 2; }
                    .preview-link { position: relative; display: block; height: 100%; min-height: 220px; overflow: hidden; }
                    .preview-link img {
                        position: absolute;
                        inset: 0;
                        width: 100%;
                        height: 100%;
                        object-fit: cover;
                        transition: transform 0.7s;
                    }
                    .preview-link:hover img { transform: scale(1.1); }
                    .preview-overlay {
                        position: absolute;
                        inset: 0;
                        display: flex;
                        flex-direction: column;
                        justify-content: flex-end;
                        padding: 1.5rem;
                        background: linear-gradient(to top, #0a0a0a, rgba(10,10,10,0.2), transparent);
                    }
                    .preview-category { font-size: 0.75rem; letter-spacing: 0.15em; text-transform: uppercase; color: #c9a961; }
                    .preview-overlay h3 { color: #fff; margin: 0.5rem 0 0; }
                    .reviews { background: #1a1a1a; }
                    .reviews-header { display: flex; flex-wrap: wrap; justify-content: space-between; align-items: flex-end; }
                    .google-rating { display: flex; align-items: center; gap: 0.75rem; color: #c0c0c0; text-decoration: none; margin-bottom: 3rem; }
                    .rating-score { font-size: 2rem; color: #c9a961; }
                    .star { color: rgba(120,120,120,0.3); }
                    .star.filled { color: #c9a961; }
                    .reviews-slider {
                        display: flex;
                        gap: 24px;
                        overflow-x: auto;
                        scroll-snap-type: x mandatory;
                        scrollbar-width: none;
                        padding-bottom: 1rem;
                    }
                    .reviews-slider::-webkit-scrollbar { display: none; }
                    .review-card {
                        flex: 0 0 400px;
                        max-width: 85vw;
                        scroll-snap-align: start;
                        padding: 2rem;
                        background: rgba(10,10,10,0.6);
                        border: 1px solid rgba(120,120,120,0.1);
                    }
                    .quote-mark { font-size: 3rem; line-height: 1; color: rgba(201,169,97,0.3); }
                    .review-text { color: rgba(192,192,192,0.9); line-height: 1.7; }
                    .review-author { padding-top: 1.5rem; border-top: 1px solid rgba(120,120,120,0.2); }
                    .author-name { color: #fff; margin: 0; }
                    .author-vehicle { color: #c9a961; font-size: 0.875rem; margin: 0.25rem 0 0; }
                    .review-dots { display: flex; justify-content: center; gap: 0.75rem; margin-top: 2rem; }
                    .review-dot {
                        width: 0.5rem;
                        height: 0.5rem;
                        padding: 0;
                        border: none;
                        border-radius: 999px;
                        background: rgba(120,120,120,0.4);
                        cursor: pointer;
                        transition: all 0.3s;
                    }
                    .review-dot.active { width: 2rem; background: #c9a961; }
                    .cta-section { position: relative; padding: 10rem 0; overflow: hidden; }
                    .cta-bg {
                        position: absolute;
                        inset: 0;
                        background: linear-gradient(rgba(10,10,10,0.8), rgba(10,10,10,0.8)),
                            url("/images/hero/Por carrera GT.jpg") center / cover;
                    }
                    .cta-stripe { position: absolute; left: 0; top: 0; bottom: 0; width: 0.5rem; background: #d5001c; z-index: 1; }
                    .cta-content { position: relative; max-width: 48rem; }
                    .cta-badge { display: inline-flex; align-items: center; gap: 0.5rem; font-size: 0.75rem; letter-spacing: 0.25em; text-transform: uppercase; color: #c9a961; }
                    .cta-badge .line-red, .cta-badge .line-gold { width: 1.5rem; height: 1px; }
                    .cta-badge .line-red { background: #d5001c; }
                    .cta-badge .line-gold { background: #c9a961; }
                    .cta-content h2 { font-size: clamp(2.25rem, 5vw, 3.75rem); color: #fff; }
                    .cta-content p { color: rgba(192,192,192,0.8); }
                    .cta-content .cta-buttons { justify-content: flex-start; }
                    .cta-details { display: flex; flex-wrap: wrap; gap: 2rem; margin-top: 3rem; padding-top: 2rem; border-top: 1px solid rgba(120,120,120,0.2); }
                    .detail-label { font-size: 0.75rem; letter-spacing: 0.15em; text-transform: uppercase; color: #c9a961; }
                    .cta-details a { color: rgba(192,192,192,0.8); }
                    @media (max-width: 768px) {
                        .preview-grid { grid-template-columns: repeat(2, 1fr); }
                    }
                "#}
            </style>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn review_offset_includes_gap() {
        assert_eq!(review_scroll_offset(0, 400.0), 0.0);
        assert_eq!(review_scroll_offset(2, 340.0), 2.0 * 364.0);
    }

    #[test]
    fn unmeasured_card_uses_fallback_width() {
        assert_eq!(review_scroll_offset(1, 0.0), 424.0);
    }
}
