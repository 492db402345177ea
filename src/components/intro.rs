use crate::config::{INTRO_SEEN_KEY, SHOP_TAGLINE};
use gloo_timers::callback::Timeout;
use log::{info, warn};
use web_sys::window;
use yew::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum IntroStage {
    Lines,
    Title,
    Subtitle,
    Tagline,
    Hold,
    FadeOut,
    SlideAway,
    Done,
}

impl IntroStage {
    /// Time spent in this stage before the next one starts.
    pub fn delay_ms(self) -> u32 {
        match self {
            IntroStage::Lines => 400,
            IntroStage::Title => 400,
            IntroStage::Subtitle => 400,
            IntroStage::Tagline => 600,
            IntroStage::Hold => 800,
            IntroStage::FadeOut => 300,
            IntroStage::SlideAway => 800,
            IntroStage::Done => 0,
        }
    }

    pub fn next(self) -> Option<Self> {
        match self {
            IntroStage::Lines => Some(IntroStage::Title),
            IntroStage::Title => Some(IntroStage::Subtitle),
            IntroStage::Subtitle => Some(IntroStage::Tagline),
            IntroStage::Tagline => Some(IntroStage::Hold),
            IntroStage::Hold => Some(IntroStage::FadeOut),
            IntroStage::FadeOut => Some(IntroStage::SlideAway),
            IntroStage::SlideAway => Some(IntroStage::Done),
            IntroStage::Done => None,
        }
    }

    pub fn total_ms() -> u32 {
        let mut total = 0;
        let mut stage = Some(IntroStage::Lines);
        while let Some(s) = stage {
            total += s.delay_ms();
            stage = s.next();
        }
        total
    }
}

/// The intro plays only on the home page, once per browser session.
pub fn should_show_intro(seen: bool, path: &str) -> bool {
    !seen && path == "/"
}

pub fn intro_seen() -> bool {
    window()
        .and_then(|w| w.session_storage().ok())
        .flatten()
        .and_then(|storage| storage.get_item(INTRO_SEEN_KEY).ok())
        .flatten()
        .is_some()
}

pub fn mark_intro_seen() {
    let stored = window()
        .and_then(|w| w.session_storage().ok())
        .flatten()
        .map(|storage| storage.set_item(INTRO_SEEN_KEY, "true").is_ok());
    if stored != Some(true) {
        warn!("Could not record intro in session storage");
    }
}

#[derive(Properties, PartialEq)]
pub struct IntroProps {
    pub on_complete: Callback<()>,
}

#[function_component(IntroAnimation)]
pub fn intro_animation(props: &IntroProps) -> Html {
    let stage = use_state(|| IntroStage::Lines);

    {
        let stage_setter = stage.setter();
        let on_complete = props.on_complete.clone();
        use_effect_with_deps(
            move |current: &IntroStage| {
                let current = *current;
                let timeout = match current.next() {
                    Some(next) => Some(Timeout::new(current.delay_ms(), move || {
                        stage_setter.set(next);
                    })),
                    None => {
                        info!("Intro finished");
                        on_complete.emit(());
                        None
                    }
                };
                move || drop(timeout)
            },
            *stage,
        );
    }

    let shown = |at: IntroStage| if *stage >= at { "shown" } else { "" };
    let container_class = classes!(
        "intro",
        (*stage >= IntroStage::SlideAway).then(|| "leaving")
    );
    let content_class = classes!(
        "intro-content",
        (*stage >= IntroStage::FadeOut).then(|| "fading")
    );

    html! {
        <div class={container_class}>
            <div class={content_class}>
                <div class="intro-lines">
                    <div class={classes!("intro-line", "left", shown(IntroStage::Lines))}></div>
                    <div class="intro-dot"></div>
                    <div class={classes!("intro-line", "right", shown(IntroStage::Lines))}></div>
                </div>
                <h1 class={classes!("intro-title", shown(IntroStage::Title))}>{"Stuttgart"}</h1>
                <p class={classes!("intro-subtitle", shown(IntroStage::Subtitle))}>{"International"}</p>
                <p class={classes!("intro-tagline", shown(IntroStage::Tagline))}>{SHOP_TAGLINE}</p>
            </div>
            <div class="intro-stripes">
                <div class="stripe-red"></div>
                <div class="stripe-gold"></div>
            </div>
            <style>
                {r#"
                    .intro {
                        position: fixed;
                        inset: 0;
                        z-index: 100;
                        background: #0a0a0a;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        transition: transform 0.8s cubic-bezier(0.65, 0, 0.35, 1);
                    }
                    .intro.leaving { transform: translateY(-100%); }
                    .intro-content {
                        text-align: center;
                        transition: opacity 0.5s ease-in, transform 0.5s ease-in;
                    }
                    .intro-content.fading { opacity: 0; transform: scale(0.95); }
                    .intro-lines {
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        gap: 1.5rem;
                        margin-bottom: 1.5rem;
                    }
                    .intro-line {
                        width: 6rem;
                        height: 1px;
                        background: #c9a961;
                        transform: scaleX(0);
                        transition: transform 0.8s cubic-bezier(0.65, 0, 0.35, 1);
                    }
                    .intro-line.left { transform-origin: right; }
                    .intro-line.right { transform-origin: left; }
                    .intro-line.shown { transform: scaleX(1); }
                    .intro-dot { width: 8px; height: 8px; border-radius: 50%; background: #d5001c; }
                    .intro-title, .intro-subtitle, .intro-tagline {
                        opacity: 0;
                        transform: translateY(30px);
                        transition: opacity 0.8s ease-out, transform 0.8s ease-out;
                    }
                    .intro-title.shown, .intro-subtitle.shown, .intro-tagline.shown {
                        opacity: 1;
                        transform: none;
                    }
                    .intro-title { font-size: clamp(3rem, 10vw, 6rem); color: #fff; margin: 0 0 0.5rem; }
                    .intro-subtitle { letter-spacing: 0.4em; text-transform: uppercase; color: #c9a961; margin-bottom: 2rem; }
                    .intro-tagline { letter-spacing: 0.2em; text-transform: uppercase; font-size: 0.75rem; color: rgba(192, 192, 192, 0.6); }
                    .intro-stripes { position: absolute; bottom: 0; left: 0; right: 0; }
                    .stripe-red { height: 4px; background: #d5001c; }
                    .stripe-gold { height: 2px; background: #c9a961; }
                "#}
            </style>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stages_run_in_order_to_done() {
        let mut stage = IntroStage::Lines;
        let mut seen = vec![stage];
        while let Some(next) = stage.next() {
            assert!(next > stage);
            stage = next;
            seen.push(stage);
        }
        assert_eq!(stage, IntroStage::Done);
        assert_eq!(seen.len(), 8);
    }

    #[test]
    fn test_total_duration() {
        assert_eq!(IntroStage::total_ms(), 3700);
    }

    #[test]
    fn test_intro_gate() {
        assert!(should_show_intro(false, "/"));
        assert!(!should_show_intro(true, "/"));
        assert!(!should_show_intro(false, "/gallery"));
    }
}
