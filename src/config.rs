use log::Level;

pub const SHOP_NAME: &str = "Stuttgart International";
pub const SHOP_TAGLINE: &str = "Porsche Approved Collision Center";
pub const SHOP_PHONE_DISPLAY: &str = "(954) 563-5011";
pub const SHOP_PHONE_TEL: &str = "+19545635011";
pub const SHOP_ADDRESS: &str = "1055 NW 51st Ct, Fort Lauderdale, FL 33309";
pub const SHOP_HOURS: &[(&str, &str)] = &[
    ("Monday - Friday", "8:00 AM - 5:00 PM"),
    ("Saturday - Sunday", "Closed"),
];
pub const GOOGLE_REVIEWS_URL: &str = "https://www.google.com/maps/place/Stuttgart+International";

/// Session storage key set once the intro animation has played.
pub const INTRO_SEEN_KEY: &str = "hasSeenIntro";

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

pub fn map_search_url(address: &str) -> String {
    format!(
        "https://www.google.com/maps/search/?api=1&query={}",
        urlencoding::encode(address)
    )
}

/// Presentation timings and thresholds for the interactive pieces of the site.
///
/// Shared through a `ContextProvider` at the app root. Components read it with
/// `use_interaction_config`, which falls back to the defaults.
#[derive(Clone, Debug, PartialEq)]
pub struct InteractionConfig {
    /// Entrance delay per position in the new visible set.
    pub filter_stagger_ms: u32,
    /// Time an exiting gallery tile stays in layout before it is removed.
    pub filter_exit_ms: u32,
    pub lightbox_fade_ms: u32,
    pub swipe_threshold_px: f64,
    pub slider_min: f64,
    pub slider_max: f64,
    pub slider_step: f64,
    pub slider_initial: f64,
    pub submit_delay_ms: u32,
    pub nav_scrolled_px: f64,
}

impl Default for InteractionConfig {
    fn default() -> Self {
        Self {
            filter_stagger_ms: 50,
            filter_exit_ms: 300,
            lightbox_fade_ms: 200,
            swipe_threshold_px: 50.0,
            slider_min: 5.0,
            slider_max: 95.0,
            slider_step: 5.0,
            slider_initial: 50.0,
            submit_delay_ms: 1500,
            nav_scrolled_px: 50.0,
        }
    }
}

#[yew::hook]
pub fn use_interaction_config() -> InteractionConfig {
    yew::use_context::<InteractionConfig>().unwrap_or_default()
}
