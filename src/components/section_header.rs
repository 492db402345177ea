use crate::components::scroll_reveal::{RevealAnimation, ScrollReveal};
use yew::prelude::*;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Align {
    Left,
    #[default]
    Center,
}

#[derive(Properties, PartialEq)]
pub struct SectionHeaderProps {
    #[prop_or_default]
    pub label: Option<AttrValue>,
    pub title: AttrValue,
    #[prop_or_default]
    pub description: Option<AttrValue>,
    #[prop_or_default]
    pub align: Align,
}

#[function_component(SectionHeader)]
pub fn section_header(props: &SectionHeaderProps) -> Html {
    let align = match props.align {
        Align::Left => "align-left",
        Align::Center => "align-center",
    };

    html! {
        <ScrollReveal animation={RevealAnimation::FadeUp} class={classes!("section-header", align)}>
            if let Some(label) = &props.label {
                <span class="header-label">{label.clone()}</span>
            }
            <h2 class="header-title">{props.title.clone()}</h2>
            <div class="header-line">
                <div class="line-red"></div>
                <div class="line-gold"></div>
            </div>
            if let Some(description) = &props.description {
                <p class="header-desc">{description.clone()}</p>
            }
        </ScrollReveal>
    }
}
