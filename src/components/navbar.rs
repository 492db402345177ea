use crate::config::{use_interaction_config, SHOP_PHONE_DISPLAY, SHOP_PHONE_TEL};
use crate::scroll_lock::use_scroll_lock;
use crate::Route;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{KeyboardEvent, MouseEvent};
use yew::prelude::*;
use yew_hooks::use_window_scroll;
use yew_router::prelude::*;

const NAV_LINKS: &[(&str, Route)] = &[
    ("Home", Route::Home),
    ("Services", Route::Services),
    ("Gallery", Route::Gallery),
    ("About", Route::About),
    ("Contact", Route::Contact),
];

#[function_component(Nav)]
pub fn nav() -> Html {
    let config = use_interaction_config();
    let menu_open = use_state(|| false);
    let (_, scroll_y) = use_window_scroll();
    let route = use_route::<Route>();
    let is_scrolled = scroll_y > config.nav_scrolled_px;

    use_scroll_lock(*menu_open);

    // Route changes close the menu.
    {
        let menu_open = menu_open.clone();
        use_effect_with_deps(
            move |_| {
                menu_open.set(false);
                || ()
            },
            route.clone(),
        );
    }

    // Escape closes the menu; the listener only exists while it is open.
    let open = *menu_open;
    {
        let menu_open = menu_open.clone();
        use_effect_with_deps(
            move |open: &bool| {
                let listener = if *open {
                    web_sys::window().map(|window| {
                        let menu_open = menu_open.clone();
                        let on_key = Closure::wrap(Box::new(move |e: KeyboardEvent| {
                            if e.key() == "Escape" {
                                menu_open.set(false);
                            }
                        }) as Box<dyn FnMut(KeyboardEvent)>);
                        let _ = window.add_event_listener_with_callback(
                            "keydown",
                            on_key.as_ref().unchecked_ref(),
                        );
                        (window, on_key)
                    })
                } else {
                    None
                };
                move || {
                    if let Some((window, on_key)) = listener {
                        let _ = window.remove_event_listener_with_callback(
                            "keydown",
                            on_key.as_ref().unchecked_ref(),
                        );
                    }
                }
            },
            open,
        );
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| {
            menu_open.set(false);
        })
    };

    let links = NAV_LINKS.iter().map(|(label, target)| {
        let active = route.as_ref() == Some(target);
        html! {
            <div onclick={close_menu.clone()}>
                <Link<Route> to={target.clone()}
                    classes={classes!("nav-link", active.then(|| "active"))}>
                    {*label}
                </Link<Route>>
            </div>
        }
    });

    html! {
        <nav class={classes!("top-nav", is_scrolled.then(|| "scrolled"))}>
            <div class="nav-content">
                <Link<Route> to={Route::Home} classes="nav-logo">
                    <span class="logo-main">{"Stuttgart"}</span>
                    <span class="logo-sub">{"International"}</span>
                </Link<Route>>

                <button class={classes!("burger-menu", (*menu_open).then(|| "active"))}
                    aria-label="Toggle menu" aria-expanded={(*menu_open).to_string()}
                    onclick={toggle_menu}>
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <div class={classes!("nav-right", (*menu_open).then(|| "mobile-menu-open"))}>
                    { for links }
                    <a class="nav-phone" href={format!("tel:{}", SHOP_PHONE_TEL)}>{SHOP_PHONE_DISPLAY}</a>
                </div>
            </div>
        </nav>
    }
}
