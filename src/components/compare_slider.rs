use crate::catalog::Comparison;
use crate::config::use_interaction_config;
use crate::gallery::compare::CompareSlider;
use log::debug;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Element, KeyboardEvent, MouseEvent, TouchEvent};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct CompareSliderProps {
    pub comparison: Comparison,
}

/// Horizontal bounds of the slider element as `(left, width)`.
fn track_rect(node: &NodeRef) -> Option<(f64, f64)> {
    let rect = node.cast::<Element>()?.get_bounding_client_rect();
    Some((rect.left(), rect.width()))
}

fn move_to(slider: &Rc<RefCell<CompareSlider>>, node: &NodeRef, client_x: f64) -> bool {
    match track_rect(node) {
        Some((left, width)) => slider.borrow_mut().drag_to(client_x, left, width).is_some(),
        None => false,
    }
}

#[function_component(BeforeAfterSlider)]
pub fn before_after_slider(props: &CompareSliderProps) -> Html {
    let config = use_interaction_config();
    let node = use_node_ref();
    let slider = use_mut_ref(|| CompareSlider::from_config(&config));
    let force_update = use_force_update();
    let dragging = slider.borrow().is_dragging();

    // Follow the pointer over the whole document while a drag is active.
    {
        let slider = slider.clone();
        let node = node.clone();
        let force_update = force_update.clone();
        use_effect_with_deps(
            move |dragging: &bool| {
                let listeners = if *dragging {
                    web_sys::window().and_then(|w| w.document()).map(|document| {
                        let on_move = {
                            let slider = slider.clone();
                            let force_update = force_update.clone();
                            Closure::wrap(Box::new(move |e: MouseEvent| {
                                if move_to(&slider, &node, e.client_x() as f64) {
                                    force_update.force_update();
                                }
                            }) as Box<dyn FnMut(MouseEvent)>)
                        };
                        let on_up = Closure::wrap(Box::new(move |_: MouseEvent| {
                            if slider.borrow_mut().end_drag() {
                                debug!("Compare drag ended");
                                force_update.force_update();
                            }
                        }) as Box<dyn FnMut(MouseEvent)>);

                        let _ = document.add_event_listener_with_callback(
                            "mousemove",
                            on_move.as_ref().unchecked_ref(),
                        );
                        let _ = document.add_event_listener_with_callback(
                            "mouseup",
                            on_up.as_ref().unchecked_ref(),
                        );
                        (document, on_move, on_up)
                    })
                } else {
                    None
                };

                move || {
                    if let Some((document, on_move, on_up)) = listeners {
                        let _ = document.remove_event_listener_with_callback(
                            "mousemove",
                            on_move.as_ref().unchecked_ref(),
                        );
                        let _ = document.remove_event_listener_with_callback(
                            "mouseup",
                            on_up.as_ref().unchecked_ref(),
                        );
                    }
                }
            },
            dragging,
        );
    }

    let on_handle_down = {
        let slider = slider.clone();
        let force_update = force_update.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            if slider.borrow_mut().begin_drag() {
                debug!("Compare drag started");
                force_update.force_update();
            }
        })
    };

    let on_track_click = {
        let slider = slider.clone();
        let node = node.clone();
        let force_update = force_update.clone();
        Callback::from(move |e: MouseEvent| {
            if let Some((left, width)) = track_rect(&node) {
                slider.borrow_mut().click_track(e.client_x() as f64, left, width);
                force_update.force_update();
            }
        })
    };

    let on_touch_start = {
        let slider = slider.clone();
        let force_update = force_update.clone();
        Callback::from(move |_: TouchEvent| {
            if slider.borrow_mut().begin_drag() {
                force_update.force_update();
            }
        })
    };

    let on_touch_move = {
        let slider = slider.clone();
        let node = node.clone();
        let force_update = force_update.clone();
        Callback::from(move |e: TouchEvent| {
            if let Some(touch) = e.touches().get(0) {
                if move_to(&slider, &node, touch.client_x() as f64) {
                    force_update.force_update();
                }
            }
        })
    };

    let on_touch_end = {
        let slider = slider.clone();
        let force_update = force_update.clone();
        Callback::from(move |_: TouchEvent| {
            if slider.borrow_mut().end_drag() {
                force_update.force_update();
            }
        })
    };

    let on_key = {
        let slider = slider.clone();
        let force_update = force_update.clone();
        Callback::from(move |e: KeyboardEvent| {
            let stepped = slider.borrow_mut().handle_key(&e.key());
            if stepped.is_some() {
                e.prevent_default();
                force_update.force_update();
            }
        })
    };

    let model = *slider.borrow();
    let comparison = &props.comparison;

    html! {
        <figure class="compare">
            <div ref={node}
                class={classes!("compare-slider", dragging.then(|| "dragging"))}
                tabindex="0"
                role="slider"
                aria-label="Before and after comparison slider"
                aria-valuemin="0"
                aria-valuemax="100"
                aria-valuenow={model.aria_value_now().to_string()}
                onclick={on_track_click}
                onkeydown={on_key}
                ontouchmove={on_touch_move}
                ontouchend={on_touch_end}>
                <img class="compare-image before" src={comparison.before.clone()}
                    alt={format!("{} before repair", comparison.title)} draggable="false" />
                <img class="compare-image after" src={comparison.after.clone()}
                    alt={format!("{} after repair", comparison.title)} draggable="false"
                    style={model.after_clip_style()} />
                <span class="compare-label before">{"Before"}</span>
                <span class="compare-label after">{"After"}</span>
                <div class="compare-handle" style={model.handle_left_style()}
                    onmousedown={on_handle_down}
                    ontouchstart={on_touch_start}
                    onclick={Callback::from(|e: MouseEvent| e.stop_propagation())}>
                    <span class="compare-grip">{"⟷"}</span>
                </div>
            </div>
            <figcaption>
                <h3>{&comparison.title}</h3>
                <p>{&comparison.description}</p>
            </figcaption>
            <style>
                {r#"
                    .compare { margin: 0 0 3rem; }
                    .compare-slider {
                        position: relative;
                        aspect-ratio: 16 / 9;
                        overflow: hidden;
                        cursor: ew-resize;
                        user-select: none;
                        touch-action: pan-y;
                        background: #1a1a1a;
                    }
                    .compare-slider:focus { outline: 2px solid #c9a961; outline-offset: 4px; }
                    .compare-image {
                        position: absolute;
                        inset: 0;
                        width: 100%;
                        height: 100%;
                        object-fit: cover;
                        pointer-events: none;
                    }
                    .compare-label {
                        position: absolute;
                        top: 1rem;
                        padding: 0.25rem 0.75rem;
                        font-size: 0.75rem;
                        letter-spacing: 0.2em;
                        text-transform: uppercase;
                        color: #fff;
                        background: rgba(10, 10, 10, 0.6);
                    }
                    .compare-label.before { right: 1rem; }
                    .compare-label.after { left: 1rem; }
                    .compare-handle {
                        position: absolute;
                        top: 0;
                        bottom: 0;
                        width: 3px;
                        margin-left: -1.5px;
                        background: #c9a961;
                        cursor: ew-resize;
                    }
                    .compare-grip {
                        position: absolute;
                        top: 50%;
                        left: 50%;
                        transform: translate(-50%, -50%);
                        width: 2.75rem;
                        height: 2.75rem;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        border-radius: 50%;
                        color: #0a0a0a;
                        background: #c9a961;
                    }
                    .compare-slider.dragging .compare-grip { transform: translate(-50%, -50%) scale(1.1); }
                    .compare figcaption h3 { color: #fff; margin: 1rem 0 0.25rem; }
                    .compare figcaption p { color: rgba(192, 192, 192, 0.7); margin: 0; }
                "#}
            </style>
        </figure>
    }
}
