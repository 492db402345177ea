use crate::config::{
    map_search_url, SHOP_ADDRESS, SHOP_HOURS, SHOP_NAME, SHOP_PHONE_DISPLAY, SHOP_PHONE_TEL,
    SHOP_TAGLINE,
};
use crate::Route;
use chrono::Datelike;
use yew::prelude::*;
use yew_router::prelude::*;

#[function_component(Footer)]
pub fn footer() -> Html {
    let year = chrono::Local::now().year();

    html! {
        <footer class="site-footer">
            <div class="footer-grid">
                <div class="footer-brand">
                    <Link<Route> to={Route::Home} classes="nav-logo">
                        <span class="logo-main">{"Stuttgart"}</span>
                        <span class="logo-sub">{"International"}</span>
                    </Link<Route>>
                    <p>{SHOP_TAGLINE}{". Factory-quality collision repair and refinishing for Porsche and European vehicles since 1989."}</p>
                </div>
                <div class="footer-links">
                    <h4>{"Explore"}</h4>
                    <Link<Route> to={Route::Services}>{"Services"}</Link<Route>>
                    <Link<Route> to={Route::Gallery}>{"Gallery"}</Link<Route>>
                    <Link<Route> to={Route::About}>{"About"}</Link<Route>>
                    <Link<Route> to={Route::Contact}>{"Contact"}</Link<Route>>
                </div>
                <div class="footer-contact">
                    <h4>{"Address"}</h4>
                    <a href={map_search_url(SHOP_ADDRESS)} target="_blank" rel="noopener noreferrer">{SHOP_ADDRESS}</a>
                    <h4>{"Phone"}</h4>
                    <a href={format!("tel:{}", SHOP_PHONE_TEL)}>{SHOP_PHONE_DISPLAY}</a>
                </div>
                <div class="footer-hours">
                    <h4>{"Hours"}</h4>
                    { for SHOP_HOURS.iter().map(|(days, hours)| html! {
                        <p><span>{*days}</span>{": "}{*hours}</p>
                    }) }
                </div>
            </div>
            <div class="footer-bottom">
                <p>{format!("© {} {}. All rights reserved.", year, SHOP_NAME)}</p>
            </div>
        </footer>
    }
}
