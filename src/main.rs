use yew::prelude::*;
use yew_router::prelude::*;
use log::{error, info};
use std::rc::Rc;

mod catalog;
mod config;
mod contact;
mod gallery;
mod scroll_lock;
mod components {
    pub mod compare_slider;
    pub mod contact_form;
    pub mod footer;
    pub mod intro;
    pub mod lightbox;
    pub mod navbar;
    pub mod scroll_reveal;
    pub mod section_header;
    pub mod service_card;
}
mod pages {
    pub mod about;
    pub mod contact;
    pub mod gallery;
    pub mod home;
    pub mod services;
}

use catalog::Catalog;
use components::{
    footer::Footer,
    intro::{intro_seen, mark_intro_seen, should_show_intro, IntroAnimation},
    navbar::Nav,
};
use config::InteractionConfig;
use pages::{about::About, contact::Contact, gallery::Gallery, home::Home, services::Services};
use scroll_lock::{BodyOverflow, ScrollLock};

#[derive(Clone, Routable, PartialEq, Debug)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/services")]
    Services,
    #[at("/gallery")]
    Gallery,
    #[at("/about")]
    About,
    #[at("/contact")]
    Contact,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        },
        Route::Services => {
            info!("Rendering Services page");
            html! { <Services /> }
        },
        Route::Gallery => {
            info!("Rendering Gallery page");
            html! { <Gallery /> }
        },
        Route::About => {
            info!("Rendering About page");
            html! { <About /> }
        },
        Route::Contact => {
            info!("Rendering Contact page");
            html! { <Contact /> }
        },
        Route::NotFound => {
            info!("Unknown path, rendering Home page");
            html! { <Home /> }
        },
    }
}

#[function_component(Shell)]
fn shell() -> Html {
    let path = use_location()
        .map(|location| location.path().to_string())
        .unwrap_or_else(|| "/".to_string());
    let show_intro = {
        let path = path.clone();
        use_state(move || should_show_intro(intro_seen(), &path))
    };

    // Leaving the home page before the intro finishes cancels it.
    {
        let show_intro = show_intro.clone();
        use_effect_with_deps(
            move |path: &String| {
                if *show_intro && !should_show_intro(intro_seen(), path) {
                    show_intro.set(false);
                }
                if let Some(window) = web_sys::window() {
                    window.scroll_to_with_x_and_y(0.0, 0.0);
                }
                || ()
            },
            path,
        );
    }

    let on_intro_complete = {
        let show_intro = show_intro.clone();
        Callback::from(move |_: ()| {
            mark_intro_seen();
            show_intro.set(false);
        })
    };

    html! {
        <>
            if *show_intro {
                <IntroAnimation on_complete={on_intro_complete} />
            }
            <div class="noise-overlay" aria-hidden="true"></div>
            <Nav />
            <main class="site-main">
                <Switch<Route> render={switch} />
            </main>
            <Footer />
            <style>
                {r#"
                    body {
                        margin: 0;
                        background: #0a0a0a;
                        color: #c0c0c0;
                        font-family: 'Inter', 'Helvetica Neue', Arial, sans-serif;
                    }
                    h1, h2, h3, h4 { font-family: 'Playfair Display', Georgia, serif; font-weight: 600; }
                    a { color: inherit; }
                    .noise-overlay {
                        position: fixed;
                        inset: 0;
                        pointer-events: none;
                        z-index: 60;
                        opacity: 0.03;
                        background-image: radial-gradient(circle at 1px 1px, #fff 1px, transparent 0);
                        background-size: 3px 3px;
                    }
                    .container { max-width: 80rem; margin: 0 auto; padding: 0 1.5rem; }
                    .section { padding: 6rem 0; }
                    .btn-primary, .btn-secondary {
                        display: inline-flex;
                        align-items: center;
                        justify-content: center;
                        padding: 1rem 2rem;
                        font-size: 0.875rem;
                        letter-spacing: 0.15em;
                        text-transform: uppercase;
                        text-decoration: none;
                        border: 1px solid #c9a961;
                        cursor: pointer;
                        transition: all 0.3s;
                    }
                    .btn-primary { color: #0a0a0a; background: #c9a961; }
                    .btn-primary:hover { background: #d4b978; }
                    .btn-secondary { color: #c9a961; background: transparent; }
                    .btn-secondary:hover { color: #0a0a0a; background: #c9a961; }

                    .reveal { transition: opacity 0.8s ease, transform 0.8s ease; }
                    .reveal:not(.revealed) { opacity: 0; }
                    .reveal-fade-up:not(.revealed) { transform: translateY(40px); }
                    .reveal-fade-down:not(.revealed) { transform: translateY(-40px); }
                    .reveal-fade-left:not(.revealed) { transform: translateX(-40px); }
                    .reveal-fade-right:not(.revealed) { transform: translateX(40px); }
                    .reveal-scale:not(.revealed) { transform: scale(0.9); }
                    .revealed { opacity: 1; transform: none; }

                    .section-header { margin-bottom: 4rem; }
                    .section-header.align-center { text-align: center; }
                    .header-label { font-size: 0.75rem; letter-spacing: 0.25em; text-transform: uppercase; color: #c9a961; }
                    .header-title { font-size: clamp(2rem, 4vw, 3rem); color: #fff; margin: 1rem 0; }
                    .header-line { display: flex; gap: 0.5rem; margin: 1.5rem 0; }
                    .align-center .header-line { justify-content: center; }
                    .line-red { width: 3rem; height: 2px; background: #d5001c; }
                    .line-gold { width: 1.5rem; height: 2px; background: #c9a961; }
                    .header-desc { max-width: 42rem; color: rgba(192,192,192,0.8); line-height: 1.7; }
                    .align-center .header-desc { margin: 0 auto; }

                    .page-hero { position: relative; padding: 10rem 0 6rem; overflow: hidden; }
                    .page-hero-bg {
                        position: absolute;
                        inset: 0;
                        opacity: 0.2;
                        background-size: cover;
                        background-position: center;
                    }
                    .page-hero-content { position: relative; max-width: 48rem; }
                    .page-hero h1 { font-size: clamp(3rem, 6vw, 4.5rem); color: #fff; line-height: 1.1; margin: 0 0 1.5rem; }
                    .page-hero p { font-size: 1.15rem; color: rgba(192,192,192,0.8); line-height: 1.7; }
                    .hero-eyebrow { display: flex; align-items: center; gap: 0.75rem; margin-bottom: 1.5rem; font-size: 0.75rem; letter-spacing: 0.25em; text-transform: uppercase; color: #c9a961; }
                    .eyebrow-line { width: 3rem; height: 1px; background: #c9a961; }
                    .gold { color: #c9a961; }

                    .top-nav {
                        position: fixed;
                        top: 0;
                        left: 0;
                        right: 0;
                        z-index: 40;
                        padding: 1.5rem 0;
                        transition: background 0.5s, padding 0.5s;
                    }
                    .top-nav.scrolled { padding: 0.75rem 0; background: rgba(10,10,10,0.95); backdrop-filter: blur(8px); }
                    .nav-content { max-width: 80rem; margin: 0 auto; padding: 0 1.5rem; display: flex; justify-content: space-between; align-items: center; }
                    .nav-logo { display: flex; flex-direction: column; text-decoration: none; }
                    .logo-main { font-family: 'Playfair Display', Georgia, serif; font-size: 1.5rem; color: #fff; }
                    .logo-sub { font-size: 0.65rem; letter-spacing: 0.35em; text-transform: uppercase; color: #c9a961; }
                    .nav-right { display: flex; align-items: center; gap: 2rem; }
                    .nav-link { font-size: 0.8rem; letter-spacing: 0.15em; text-transform: uppercase; color: #c0c0c0; text-decoration: none; transition: color 0.3s; }
                    .nav-link:hover, .nav-link.active { color: #c9a961; }
                    .nav-phone { padding: 0.6rem 1.25rem; border: 1px solid #c9a961; color: #c9a961; text-decoration: none; font-size: 0.85rem; }
                    .burger-menu { display: none; flex-direction: column; gap: 6px; background: none; border: none; cursor: pointer; padding: 0.5rem; }
                    .burger-menu span { display: block; width: 26px; height: 2px; background: #fff; transition: transform 0.3s, opacity 0.3s; }
                    .burger-menu.active span:nth-child(1) { transform: translateY(8px) rotate(45deg); }
                    .burger-menu.active span:nth-child(2) { opacity: 0; }
                    .burger-menu.active span:nth-child(3) { transform: translateY(-8px) rotate(-45deg); }
                    @media (max-width: 1024px) {
                        .burger-menu { display: flex; z-index: 41; }
                        .nav-right {
                            position: fixed;
                            inset: 0;
                            flex-direction: column;
                            justify-content: center;
                            background: rgba(10,10,10,0.98);
                            opacity: 0;
                            pointer-events: none;
                            transition: opacity 0.4s;
                        }
                        .nav-right.mobile-menu-open { opacity: 1; pointer-events: auto; }
                        .nav-link { font-size: 1.25rem; }
                    }

                    .site-footer { background: #0a0a0a; border-top: 1px solid rgba(120,120,120,0.2); padding: 5rem 1.5rem 2rem; }
                    .footer-grid { max-width: 80rem; margin: 0 auto; display: grid; grid-template-columns: 2fr 1fr 1fr 1fr; gap: 3rem; }
                    .footer-grid h4 { color: #fff; font-size: 0.8rem; letter-spacing: 0.2em; text-transform: uppercase; }
                    .footer-grid a { display: block; margin-bottom: 0.5rem; color: rgba(192,192,192,0.7); text-decoration: none; }
                    .footer-grid a:hover { color: #c9a961; }
                    .footer-brand p, .footer-hours p { color: rgba(192,192,192,0.7); line-height: 1.7; }
                    .footer-bottom { max-width: 80rem; margin: 3rem auto 0; padding-top: 2rem; border-top: 1px solid rgba(120,120,120,0.2); font-size: 0.8rem; color: rgba(192,192,192,0.5); }
                    @media (max-width: 768px) {
                        .footer-grid { grid-template-columns: 1fr; }
                        .section { padding: 4rem 0; }
                    }
                "#}
            </style>
        </>
    }
}

#[function_component(App)]
fn app() -> Html {
    let catalog = use_memo(|_| Catalog::load(), ());
    let scroll_lock = use_state(|| ScrollLock::new(BodyOverflow));

    html! {
        <ContextProvider<Rc<Catalog>> context={catalog}>
            <ContextProvider<InteractionConfig> context={InteractionConfig::default()}>
                <ContextProvider<ScrollLock> context={(*scroll_lock).clone()}>
                    <BrowserRouter>
                        <Shell />
                    </BrowserRouter>
                </ContextProvider<ScrollLock>>
            </ContextProvider<InteractionConfig>>
        </ContextProvider<Rc<Catalog>>>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    if let Err(e) = console_log::init_with_level(config::log_level()) {
        error!("error initializing log: {}", e);
    }

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
