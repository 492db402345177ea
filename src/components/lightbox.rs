use crate::catalog::MediaItem;
use crate::config::use_interaction_config;
use crate::gallery::lightbox::{CrossFade, FadeStep, LightboxCommand, SwipeTracker};
use crate::scroll_lock::use_scroll_lock;
use gloo_timers::callback::Timeout;
use web_sys::{HtmlElement, KeyboardEvent, MouseEvent, TouchEvent};
use yew::prelude::*;
use yew_hooks::use_event_with_window;

#[derive(Properties, PartialEq)]
pub struct GalleryLightboxProps {
    pub item: MediaItem,
    /// Zero-based position in the visible set.
    pub index: usize,
    pub total: usize,
    pub on_command: Callback<LightboxCommand>,
}

/// Full-screen viewer for one gallery item. Only mounted while open, so its
/// window key listener and scroll lock live exactly as long as the lightbox.
#[function_component(GalleryLightbox)]
pub fn gallery_lightbox(props: &GalleryLightboxProps) -> Html {
    let config = use_interaction_config();
    let close_ref = use_node_ref();
    let shown = use_state(|| props.item.clone());
    let fading = use_state(|| false);
    let fade = {
        let id = props.item.id.clone();
        use_mut_ref(move || CrossFade::new(id))
    };
    let fade_timer = use_mut_ref(|| None::<Timeout>);
    let swipe = use_mut_ref(SwipeTracker::default);

    use_scroll_lock(true);

    {
        let close_ref = close_ref.clone();
        use_effect_with_deps(
            move |_| {
                if let Some(button) = close_ref.cast::<HtmlElement>() {
                    let _ = button.focus();
                }
                || ()
            },
            (),
        );
    }

    // Cross-fade to the new item. A newer navigation replaces the pending
    // timer; going back to the item on screen drops it.
    {
        let shown = shown.clone();
        let fading = fading.clone();
        let fade = fade.clone();
        let fade_timer = fade_timer.clone();
        let fade_ms = config.lightbox_fade_ms;
        use_effect_with_deps(
            move |item: &MediaItem| {
                let step = fade.borrow_mut().request(&item.id);
                match step {
                    FadeStep::Start => {
                        fading.set(true);
                        let item = item.clone();
                        let timeout = Timeout::new(fade_ms, move || {
                            if fade.borrow_mut().complete(&item.id) {
                                shown.set(item);
                                fading.set(false);
                            }
                        });
                        *fade_timer.borrow_mut() = Some(timeout);
                    }
                    FadeStep::Cancel => {
                        fade_timer.borrow_mut().take();
                        fading.set(false);
                    }
                    FadeStep::Unchanged => {}
                }
                || ()
            },
            props.item.clone(),
        );
    }

    {
        let on_command = props.on_command.clone();
        use_event_with_window("keydown", move |e: KeyboardEvent| {
            if let Some(command) = LightboxCommand::from_key(&e.key()) {
                e.prevent_default();
                on_command.emit(command);
            }
        });
    }

    let command = |command: LightboxCommand| {
        let on_command = props.on_command.clone();
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            on_command.emit(command);
        })
    };

    let on_backdrop = {
        let on_command = props.on_command.clone();
        Callback::from(move |_: MouseEvent| on_command.emit(LightboxCommand::Close))
    };

    let on_touch_start = {
        let swipe = swipe.clone();
        Callback::from(move |e: TouchEvent| {
            if let Some(touch) = e.changed_touches().get(0) {
                swipe.borrow_mut().start(touch.screen_x() as f64);
            }
        })
    };

    let on_touch_end = {
        let swipe = swipe.clone();
        let on_command = props.on_command.clone();
        let threshold = config.swipe_threshold_px;
        Callback::from(move |e: TouchEvent| {
            let Some(touch) = e.changed_touches().get(0) else {
                return;
            };
            let command = swipe.borrow_mut().finish(touch.screen_x() as f64, threshold);
            if let Some(command) = command {
                on_command.emit(command);
            }
        })
    };

    let has_many = props.total > 1;

    html! {
        <div class="lightbox" onclick={on_backdrop} ontouchstart={on_touch_start} ontouchend={on_touch_end}
            role="dialog" aria-modal="true" aria-label={shown.title.clone()}>
            <div class="lightbox-content" onclick={Callback::from(|e: MouseEvent| e.stop_propagation())}>
                <button ref={close_ref} class="lightbox-close" aria-label="Close"
                    onclick={command(LightboxCommand::Close)}>
                    {"×"}
                </button>
                <div class="lightbox-frame">
                    <img class={classes!("lightbox-image", (*fading).then(|| "fading"))}
                        src={shown.image.clone()} alt={shown.title.clone()} />
                    if has_many {
                        <button class="lightbox-nav prev" aria-label="Previous image"
                            onclick={command(LightboxCommand::Prev)}>{"‹"}</button>
                        <button class="lightbox-nav next" aria-label="Next image"
                            onclick={command(LightboxCommand::Next)}>{"›"}</button>
                    }
                </div>
                <div class={classes!("lightbox-caption", (*fading).then(|| "fading"))}>
                    <span class="lightbox-counter">{format!("{} / {}", props.index + 1, props.total)}</span>
                    <h3>{&shown.title}</h3>
                    <p>{&shown.description}</p>
                </div>
            </div>
            <style>
                {r#"
                    .lightbox {
                        position: fixed;
                        inset: 0;
                        z-index: 50;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        padding: 2rem;
                        background: rgba(10, 10, 10, 0.95);
                        backdrop-filter: blur(4px);
                        animation: lightboxIn 0.3s ease-out;
                    }
                    @keyframes lightboxIn {
                        from { opacity: 0; }
                        to { opacity: 1; }
                    }
                    .lightbox-content {
                        position: relative;
                        max-width: 72rem;
                        width: 100%;
                        max-height: 90vh;
                        display: flex;
                        flex-direction: column;
                    }
                    .lightbox-close {
                        position: absolute;
                        top: -3rem;
                        right: 0;
                        width: 2.5rem;
                        height: 2.5rem;
                        font-size: 2rem;
                        color: #c0c0c0;
                        background: none;
                        border: none;
                        cursor: pointer;
                    }
                    .lightbox-close:hover, .lightbox-close:focus { color: #fff; }
                    .lightbox-frame { position: relative; background: #1a1a1a; overflow: hidden; }
                    .lightbox-image {
                        display: block;
                        width: 100%;
                        max-height: 70vh;
                        object-fit: contain;
                        transition: opacity 0.2s ease;
                    }
                    .lightbox-image.fading, .lightbox-caption.fading { opacity: 0; }
                    .lightbox-nav {
                        position: absolute;
                        top: 50%;
                        transform: translateY(-50%);
                        width: 3rem;
                        height: 3rem;
                        font-size: 2rem;
                        color: #fff;
                        background: rgba(10, 10, 10, 0.6);
                        border: none;
                        cursor: pointer;
                        transition: background 0.3s, color 0.3s;
                    }
                    .lightbox-nav:hover { background: #c9a961; color: #0a0a0a; }
                    .lightbox-nav.prev { left: 1rem; }
                    .lightbox-nav.next { right: 1rem; }
                    .lightbox-caption {
                        padding: 1.5rem;
                        background: #1a1a1a;
                        border-top: 1px solid rgba(120, 120, 120, 0.2);
                        transition: opacity 0.2s ease;
                    }
                    .lightbox-counter { font-size: 0.75rem; letter-spacing: 0.2em; color: #c9a961; }
                    .lightbox-caption h3 { color: #fff; margin: 0.5rem 0; }
                    .lightbox-caption p { color: rgba(192, 192, 192, 0.7); margin: 0; }
                "#}
            </style>
        </div>
    }
}
