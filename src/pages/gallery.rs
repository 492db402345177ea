use crate::catalog::Catalog;
use crate::components::compare_slider::BeforeAfterSlider;
use crate::components::lightbox::GalleryLightbox;
use crate::components::scroll_reveal::ScrollReveal;
use crate::components::section_header::SectionHeader;
use crate::config::use_interaction_config;
use crate::gallery::filter::{CategoryFilter, FilterTimings, ItemPhase, Tile};
use crate::gallery::lightbox::LightboxCommand;
use crate::gallery::state::{GalleryAction, GalleryState};
use gloo_timers::callback::Timeout;
use log::debug;
use std::rc::Rc;
use web_sys::KeyboardEvent;
use yew::prelude::*;

fn phase_class(phase: ItemPhase) -> &'static str {
    match phase {
        ItemPhase::Entering { .. } | ItemPhase::Hidden => "entering",
        ItemPhase::Shown => "shown",
        ItemPhase::Exiting => "exiting",
    }
}

/// The wildcard view enlarges its first tile.
fn is_featured(filter: CategoryFilter, tile: &Tile<'_>) -> bool {
    filter == CategoryFilter::All && tile.visible_index == Some(0)
}

#[function_component(Gallery)]
pub fn gallery() -> Html {
    let catalog = use_context::<Rc<Catalog>>().unwrap_or_default();
    let config = use_interaction_config();
    let state = {
        let catalog = catalog.clone();
        let timings = FilterTimings {
            stagger_ms: config.filter_stagger_ms,
            exit_ms: config.filter_exit_ms,
        };
        use_reducer(move || GalleryState::new(Rc::new(catalog.media.clone()), timings))
    };

    // Every filter change gets a fresh set of timers. Dropping the previous
    // set cancels whatever had not fired yet.
    let generation = state.filter.generation();
    {
        let state = state.clone();
        use_effect_with_deps(
            move |generation: &u64| {
                let generation = *generation;
                let dispatcher = state.dispatcher();
                let mut timers: Vec<Timeout> = state
                    .filter
                    .pending_reveals()
                    .into_iter()
                    .map(|(id, delay_ms)| {
                        let dispatcher = dispatcher.clone();
                        Timeout::new(delay_ms, move || {
                            dispatcher.dispatch(GalleryAction::Reveal { generation, id });
                        })
                    })
                    .collect();
                if state.filter.has_exiting() {
                    let dispatcher = dispatcher.clone();
                    timers.push(Timeout::new(state.filter.timings().exit_ms, move || {
                        dispatcher.dispatch(GalleryAction::FinishExit { generation });
                    }));
                }
                debug!("Gallery generation {} scheduled {} timers", generation, timers.len());
                move || drop(timers)
            },
            generation,
        );
    }

    let active = state.filter.filter();
    let tabs = CategoryFilter::tabs().map(|filter| {
        let onclick = {
            let state = state.clone();
            Callback::from(move |_: MouseEvent| state.dispatch(GalleryAction::SetFilter(filter)))
        };
        html! {
            <button class={classes!("filter-tab", (filter == active).then(|| "active"))}
                aria-pressed={(filter == active).to_string()} {onclick}>
                {filter.label()}
            </button>
        }
    });

    let tiles = state.filter.tiles().into_iter().map(|tile| {
        let item = tile.item;
        let open = {
            let state = state.clone();
            let id = item.id.clone();
            Callback::from(move |_: MouseEvent| state.dispatch(GalleryAction::Open(id.clone())))
        };
        let on_key = {
            let state = state.clone();
            let id = item.id.clone();
            Callback::from(move |e: KeyboardEvent| {
                if e.key() == "Enter" {
                    e.prevent_default();
                    state.dispatch(GalleryAction::Open(id.clone()));
                }
            })
        };
        let style = match tile.phase {
            ItemPhase::Entering { delay_ms } => format!("transition-delay: {}ms;", delay_ms),
            _ => String::new(),
        };
        html! {
            <div key={item.id.to_string()}
                class={classes!("gallery-tile", phase_class(tile.phase), is_featured(active, &tile).then(|| "featured"))}
                {style}
                role="button"
                tabindex={if tile.visible_index.is_some() { "0" } else { "-1" }}
                aria-label={format!("Open {}", item.title)}
                onclick={open}
                onkeydown={on_key}>
                <img src={item.image.clone()} alt={item.title.clone()} loading="lazy" />
                <div class="tile-overlay">
                    <h3>{&item.title}</h3>
                </div>
                <span class="corner corner-red"></span>
                <span class="corner corner-gold"></span>
            </div>
        }
    });

    let lightbox = match (state.current_item(), state.lightbox.current_index()) {
        (Some(item), Some(index)) => {
            let on_command = {
                let state = state.clone();
                Callback::from(move |command: LightboxCommand| state.dispatch(GalleryAction::Command(command)))
            };
            html! {
                <GalleryLightbox item={item.clone()} {index}
                    total={state.filter.visible().len()} {on_command} />
            }
        }
        _ => html! {},
    };

    html! {
        <div class="gallery-page">
            <section class="page-hero">
                <div class="page-hero-bg" style="background-image: url(/images/gallery/award-winners/930-turbo-01.jpg);"></div>
                <div class="container">
                    <ScrollReveal class="page-hero-content">
                        <div class="hero-eyebrow"><span class="eyebrow-line"></span>{"Our Portfolio"}</div>
                        <h1>{"Gallery of"}<br /><span class="gold">{"Excellence"}</span></h1>
                        <p>
                            {"Browse our collection of completed projects, from award-winning restorations to precision collision repairs. Every vehicle tells a story of craftsmanship."}
                        </p>
                    </ScrollReveal>
                </div>
            </section>

            <section class="section gallery-section">
                <div class="container">
                    <div class="filter-tabs" role="toolbar" aria-label="Filter gallery">
                        { for tabs }
                    </div>
                    <div class="gallery-grid">
                        { for tiles }
                    </div>
                    if state.filter.visible().is_empty() {
                        <div class="gallery-empty">
                            <p>{"No images found in this category."}</p>
                        </div>
                    }
                </div>
            </section>

            if !catalog.comparisons.is_empty() {
                <section class="section comparisons">
                    <div class="container">
                        <SectionHeader
                            label="Before & After"
                            title="The Transformation"
                            description="Drag the handle to see the difference factory-level repair makes." />
                        { for catalog.comparisons.iter().map(|comparison| html! {
                            <BeforeAfterSlider key={comparison.id.clone()} comparison={comparison.clone()} />
                        }) }
                    </div>
                </section>
            }

            { lightbox }

            <style>
                {r#"
                    .gallery-section { background: #1a1a1a; }
                    .filter-tabs { display: flex; gap: 0.5rem; overflow-x: auto; padding-bottom: 1rem; margin-bottom: 3rem; }
                    .filter-tab {
                        flex-shrink: 0;
                        padding: 0.75rem 1.5rem;
                        font-size: 0.875rem;
                        letter-spacing: 0.1em;
                        text-transform: uppercase;
                        color: #c0c0c0;
                        background: rgba(10,10,10,0.5);
                        border: 1px solid rgba(120,120,120,0.1);
                        cursor: pointer;
                        transition: all 0.3s;
                    }
                    .filter-tab:hover { color: #fff; background: rgba(10,10,10,0.8); }
                    .filter-tab.active { color: #0a0a0a; background: #c9a961; }
                    .gallery-grid { display: grid; grid-template-columns: repeat(4, 1fr); gap: 1rem; }
                    .gallery-tile {
                        position: relative;
                        aspect-ratio: 1;
                        overflow: hidden;
                        cursor: pointer;
                        transition: opacity 0.5s ease, transform 0.5s ease;
                    }
                    .gallery-tile.featured { grid-column: span 2; grid-row: span 2; }
                    .gallery-tile.entering { opacity: 0; transform: translateY(30px) scale(0.95); }
                    .gallery-tile.shown { opacity: 1; transform: none; }
                    .gallery-tile.exiting { opacity: 0; transform: scale(0.95); pointer-events: none; }
                    .gallery-tile:focus { outline: 2px solid #c9a961; outline-offset: 2px; }
                    .gallery-tile img {
                        position: absolute;
                        inset: 0;
                        width: 100%;
                        height: 100%;
                        object-fit: cover;
                        transition: transform 0.7s;
                    }
                    .gallery-tile:hover img { transform: scale(1.1); }
                    .tile-overlay {
                        position: absolute;
                        inset: 0;
                        display: flex;
                        align-items: flex-end;
                        padding: 1rem;
                        opacity: 0;
                        background: linear-gradient(to top, #0a0a0a, transparent);
                        transition: opacity 0.5s;
                    }
                    .gallery-tile:hover .tile-overlay, .gallery-tile:focus .tile-overlay { opacity: 1; }
                    .tile-overlay h3 { color: #fff; margin: 0; font-size: 1.1rem; }
                    .corner { position: absolute; width: 0; height: 0; transition: all 0.5s; }
                    .corner-red { top: 0; left: 0; border-top: 2px solid #d5001c; border-left: 2px solid #d5001c; }
                    .corner-gold { bottom: 0; right: 0; border-bottom: 2px solid #c9a961; border-right: 2px solid #c9a961; }
                    .gallery-tile:hover .corner { width: 2rem; height: 2rem; }
                    .gallery-empty { text-align: center; padding: 5rem 0; color: rgba(192,192,192,0.6); }
                    @media (max-width: 1024px) {
                        .gallery-grid { grid-template-columns: repeat(3, 1fr); }
                    }
                    @media (max-width: 640px) {
                        .gallery-grid { grid-template-columns: repeat(2, 1fr); }
                    }
                "#}
            </style>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Category, MediaId, MediaItem};

    fn media(id: &str) -> MediaItem {
        MediaItem {
            id: MediaId::new(id),
            category: Category::Paint,
            title: id.to_string(),
            description: String::new(),
            image: format!("/images/{}.jpg", id),
        }
    }

    #[test]
    fn only_first_visible_tile_under_wildcard_is_featured() {
        let item = media("a");
        let first = Tile { item: &item, phase: ItemPhase::Shown, visible_index: Some(0) };
        let second = Tile { item: &item, phase: ItemPhase::Shown, visible_index: Some(1) };
        let exiting = Tile { item: &item, phase: ItemPhase::Exiting, visible_index: None };

        assert!(is_featured(CategoryFilter::All, &first));
        assert!(!is_featured(CategoryFilter::All, &second));
        assert!(!is_featured(CategoryFilter::All, &exiting));
        assert!(!is_featured(CategoryFilter::Only(Category::Paint), &first));
    }

    #[test]
    fn exiting_tiles_use_exit_class() {
        assert_eq!(phase_class(ItemPhase::Exiting), "exiting");
        assert_eq!(phase_class(ItemPhase::Entering { delay_ms: 100 }), "entering");
        assert_eq!(phase_class(ItemPhase::Shown), "shown");
    }
}
