use log::warn;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::Array;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RevealAnimation {
    #[default]
    FadeUp,
    FadeDown,
    FadeLeft,
    FadeRight,
    Fade,
    Scale,
}

impl RevealAnimation {
    pub fn class(self) -> &'static str {
        match self {
            RevealAnimation::FadeUp => "reveal-fade-up",
            RevealAnimation::FadeDown => "reveal-fade-down",
            RevealAnimation::FadeLeft => "reveal-fade-left",
            RevealAnimation::FadeRight => "reveal-fade-right",
            RevealAnimation::Fade => "reveal-fade",
            RevealAnimation::Scale => "reveal-scale",
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct ScrollRevealProps {
    #[prop_or_default]
    pub animation: RevealAnimation,
    #[prop_or_default]
    pub delay_ms: u32,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

/// Plays an entrance animation the first time the wrapper scrolls into view.
#[function_component(ScrollReveal)]
pub fn scroll_reveal(props: &ScrollRevealProps) -> Html {
    let node = use_node_ref();
    let revealed = use_state(|| false);

    {
        let node = node.clone();
        let revealed = revealed.clone();
        use_effect_with_deps(
            move |_| {
                let fallback = revealed.clone();
                let callback = Closure::wrap(Box::new(move |entries: Array, observer: IntersectionObserver| {
                    for entry in entries.iter() {
                        let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                            continue;
                        };
                        if entry.is_intersecting() {
                            revealed.set(true);
                            observer.unobserve(&entry.target());
                        }
                    }
                }) as Box<dyn FnMut(Array, IntersectionObserver)>);

                let options = IntersectionObserverInit::new();
                options.set_root_margin("0px 0px -80px 0px");
                options.set_threshold(&JsValue::from_f64(0.1));

                let observer = IntersectionObserver::new_with_options(
                    callback.as_ref().unchecked_ref(),
                    &options,
                )
                .ok();
                match (&observer, node.cast::<Element>()) {
                    (Some(observer), Some(element)) => observer.observe(&element),
                    _ => {
                        warn!("Scroll reveal could not observe its element");
                        fallback.set(true);
                    }
                }

                move || {
                    if let Some(observer) = observer {
                        observer.disconnect();
                    }
                    drop(callback);
                }
            },
            (),
        );
    }

    let class = classes!(
        "reveal",
        props.animation.class(),
        (*revealed).then(|| "revealed"),
        props.class.clone()
    );
    let style = format!("transition-delay: {}ms;", props.delay_ms);

    html! {
        <div ref={node} {class} {style}>
            { for props.children.iter() }
        </div>
    }
}
